//! # Core Reader Logic
//!
//! Everything the reader knows about verses and navigation.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • Document (corpus)    │
//!                    │  • Selection (cursor)   │
//!                    │  • Action + update()    │
//!                    │                         │
//!                    │  No UI. I/O only in     │
//!                    │  loader and config.     │
//!                    └───────────┬─────────────┘
//!                                │
//!                    ┌───────────┴───────────┐
//!                    ▼                       ▼
//!             ┌────────────┐          ┌────────────┐
//!             │    TUI     │          │   other    │
//!             │  Adapter   │          │  adapters  │
//!             │ (ratatui)  │          │            │
//!             └────────────┘          └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`document`]: `Document`, `Chapter`, `Verse`, ordered by source key order
//! - [`loader`]: reads the corpus once, with the built-in Al-Fatihah fallback
//! - [`navigation`]: `Selection` and the pure `transition` function
//! - [`state`]: the per-session `App`
//! - [`action`]: the `Action` enum and the `update()` reducer
//! - [`config`]: layered settings (defaults, file, env, CLI)

pub mod action;
pub mod config;
pub mod document;
pub mod loader;
pub mod navigation;
pub mod state;

pub use document::{Chapter, ChapterEntry, Document, Verse};
pub use loader::{LoadError, LoadOutcome, LoadSource, MissingSourcePolicy};
pub use navigation::{NavEvent, NavigationError, Selection};
