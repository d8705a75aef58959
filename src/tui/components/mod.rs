//! # TUI Components
//!
//! All UI components for the terminal reader.
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! - `TitleBar`: top line with data source and status
//! - `NavBar`: previous/next controls and the verse counter
//!
//! ### Stateful Components (Event-Driven)
//!
//! - `VerseView`: the scrollable reading pane
//! - `Picker`: chapter and verse selector overlay
//!
//! Components receive external data as props, never by reaching into global
//! state, so each one can be rendered against a `TestBackend` in isolation.
//!
//! ```text
//! components/
//! ├── mod.rs         (this file)
//! ├── title_bar.rs   (top status bar)
//! ├── nav_bar.rs     (bottom navigation bar)
//! ├── verse_view.rs  (Arabic + translations)
//! └── picker.rs      (chapter / verse selector)
//! ```

pub mod nav_bar;
pub mod picker;
pub mod title_bar;
pub mod verse_view;

pub use nav_bar::{NAV_BAR_HEIGHT, NavBar};
pub use picker::{Picker, PickerEvent, PickerKind, PickerState};
pub use title_bar::TitleBar;
pub use verse_view::{Translations, VerseView, VerseViewState};
