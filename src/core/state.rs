//! # Application State
//!
//! Core per-session state for the reader. No TUI-specific types live here;
//! presentation state belongs to the `tui` module.
//!
//! ```text
//! App
//! ├── document: Arc<Document>   // shared, immutable, loaded once
//! ├── source: LoadSource        // file path or built-in sample
//! ├── selection: Selection      // this session's cursor
//! ├── status_message: String    // status bar text
//! └── error: Option<String>     // last refused action
//! ```
//!
//! The document is the only part shared between sessions. Each session owns
//! its own `Selection`, and state changes only happen through
//! `update(state, action)` in action.rs.

use std::sync::Arc;

use crate::core::document::{Chapter, Document, Verse};
use crate::core::loader::LoadSource;
use crate::core::navigation::{self, NavigationError, Selection};

pub struct App {
    pub document: Arc<Document>,
    pub source: LoadSource,
    pub selection: Selection,
    pub status_message: String,
    pub error: Option<String>,
}

impl App {
    /// Start a session on the first verse of the first chapter.
    pub fn new(document: Arc<Document>, source: LoadSource) -> Result<Self, NavigationError> {
        let selection = Selection::initial(&document)?;
        let status_message = match source {
            LoadSource::Fallback => "No data file found, showing built-in sample".to_string(),
            LoadSource::File(_) => String::from("Welcome to Quran Reader"),
        };
        Ok(Self {
            document,
            source,
            selection,
            status_message,
            error: None,
        })
    }

    pub fn current_chapter(&self) -> Option<&Chapter> {
        self.document.chapter(&self.selection.chapter_id)
    }

    pub fn current_verse(&self) -> Option<&Verse> {
        self.document
            .verse(&self.selection.chapter_id, &self.selection.verse_id)
    }

    pub fn has_previous(&self) -> bool {
        navigation::has_previous(&self.document, &self.selection)
    }

    pub fn has_next(&self) -> bool {
        navigation::has_next(&self.document, &self.selection)
    }

    /// `(1-based verse number, verse count)` for the "verse i of n" indicator.
    pub fn progress(&self) -> Option<(usize, usize)> {
        navigation::position(&self.document, &self.selection).map(|(i, n)| (i + 1, n))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{sample_document, test_app};

    #[test]
    fn test_app_new_defaults() {
        let app = test_app();
        assert_eq!(app.selection, Selection::new("1", "1"));
        assert_eq!(app.status_message, "Welcome to Quran Reader");
        assert!(app.error.is_none());
        assert_eq!(app.current_chapter().map(|c| c.name.as_str()), Some("First"));
        assert!(app.current_verse().is_some());
    }

    #[test]
    fn test_app_fallback_status() {
        let app = App::new(Arc::new(sample_document()), LoadSource::Fallback).unwrap();
        assert!(app.status_message.contains("built-in sample"));
    }

    #[test]
    fn test_app_rejects_empty_document() {
        assert!(App::new(Arc::new(Document::default()), LoadSource::Fallback).is_err());
    }

    #[test]
    fn test_sessions_share_document_but_not_selection() {
        let doc = Arc::new(sample_document());
        let mut a = App::new(doc.clone(), LoadSource::Fallback).unwrap();
        let b = App::new(doc.clone(), LoadSource::Fallback).unwrap();
        a.selection = Selection::new("2", "2");
        assert_eq!(b.selection, Selection::new("1", "1"));
        assert!(Arc::ptr_eq(&a.document, &b.document));
    }

    #[test]
    fn test_progress_is_one_based() {
        let mut app = test_app();
        assert_eq!(app.progress(), Some((1, 3)));
        app.selection = Selection::new("1", "3");
        assert_eq!(app.progress(), Some((3, 3)));
        assert!(app.has_previous());
        assert!(!app.has_next());
    }
}
