//! # Verse Navigation
//!
//! A cursor over a two-level ordered structure: chapters, then verses within
//! the selected chapter.
//!
//! ```text
//! transition(document, selection, event)  →  new selection
//! ```
//!
//! Every transition is pure. The verse order is re-derived from the
//! document on each call; the document never changes after load.
//!
//! `Previous` at the first verse and `Next` at the last verse are no-ops.
//! Navigation never wraps into a neighbouring chapter.

use thiserror::Error;

use crate::core::document::Document;

/// The currently displayed verse, by identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Selection {
    pub chapter_id: String,
    pub verse_id: String,
}

impl Selection {
    pub fn new(chapter_id: impl Into<String>, verse_id: impl Into<String>) -> Self {
        Self {
            chapter_id: chapter_id.into(),
            verse_id: verse_id.into(),
        }
    }

    /// First verse of the first chapter.
    pub fn initial(document: &Document) -> Result<Self, NavigationError> {
        let chapter_id = document
            .first_chapter_id()
            .ok_or_else(|| NavigationError::invalid_chapter(""))?;
        first_verse_of(document, chapter_id)
    }

    /// True if this selection names an existing verse in `document`.
    pub fn resolves_in(&self, document: &Document) -> bool {
        document.verse(&self.chapter_id, &self.verse_id).is_some()
    }
}

/// Navigation requests coming from the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavEvent {
    SelectChapter(String),
    SelectVerse(String),
    Previous,
    Next,
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum NavigationError {
    #[error("invalid selection: chapter {chapter_id}{}", verse_suffix(.verse_id))]
    InvalidSelection {
        chapter_id: String,
        verse_id: Option<String>,
    },
}

fn verse_suffix(verse_id: &Option<String>) -> String {
    verse_id
        .as_deref()
        .map(|v| format!(", verse {v}"))
        .unwrap_or_default()
}

impl NavigationError {
    fn invalid_chapter(chapter_id: &str) -> Self {
        NavigationError::InvalidSelection {
            chapter_id: chapter_id.to_string(),
            verse_id: None,
        }
    }

    fn invalid_verse(chapter_id: &str, verse_id: &str) -> Self {
        NavigationError::InvalidSelection {
            chapter_id: chapter_id.to_string(),
            verse_id: Some(verse_id.to_string()),
        }
    }
}

fn first_verse_of(document: &Document, chapter_id: &str) -> Result<Selection, NavigationError> {
    let chapter = document
        .chapter(chapter_id)
        .ok_or_else(|| NavigationError::invalid_chapter(chapter_id))?;
    let verse_id = chapter
        .first_verse_id()
        .ok_or_else(|| NavigationError::invalid_chapter(chapter_id))?;
    Ok(Selection::new(chapter_id, verse_id))
}

/// Zero-based index of the selected verse and the verse count of its chapter.
pub fn position(document: &Document, selection: &Selection) -> Option<(usize, usize)> {
    let chapter = document.chapter(&selection.chapter_id)?;
    let index = chapter.position(&selection.verse_id)?;
    Some((index, chapter.len()))
}

pub fn has_previous(document: &Document, selection: &Selection) -> bool {
    matches!(position(document, selection), Some((index, _)) if index > 0)
}

pub fn has_next(document: &Document, selection: &Selection) -> bool {
    matches!(position(document, selection), Some((index, len)) if index + 1 < len)
}

/// Compute the selection that follows `event`.
///
/// Unknown chapter or verse identifiers yield `InvalidSelection`; the caller
/// keeps its prior selection in that case.
pub fn transition(
    document: &Document,
    selection: &Selection,
    event: &NavEvent,
) -> Result<Selection, NavigationError> {
    match event {
        NavEvent::SelectChapter(chapter_id) => first_verse_of(document, chapter_id),
        NavEvent::SelectVerse(verse_id) => {
            let chapter = document
                .chapter(&selection.chapter_id)
                .ok_or_else(|| NavigationError::invalid_chapter(&selection.chapter_id))?;
            if chapter.position(verse_id).is_none() {
                return Err(NavigationError::invalid_verse(&selection.chapter_id, verse_id));
            }
            Ok(Selection::new(selection.chapter_id.clone(), verse_id.clone()))
        }
        NavEvent::Previous => step(document, selection, |index, _| index.checked_sub(1)),
        NavEvent::Next => step(document, selection, |index, len| {
            (index + 1 < len).then_some(index + 1)
        }),
    }
}

/// Move within the current chapter. `target` returns `None` at a boundary,
/// which leaves the selection unchanged.
fn step(
    document: &Document,
    selection: &Selection,
    target: impl Fn(usize, usize) -> Option<usize>,
) -> Result<Selection, NavigationError> {
    let chapter = document
        .chapter(&selection.chapter_id)
        .ok_or_else(|| NavigationError::invalid_chapter(&selection.chapter_id))?;
    let index = chapter
        .position(&selection.verse_id)
        .ok_or_else(|| NavigationError::invalid_verse(&selection.chapter_id, &selection.verse_id))?;

    match target(index, chapter.len()).and_then(|i| chapter.verse_id_at(i)) {
        Some(verse_id) => Ok(Selection::new(selection.chapter_id.clone(), verse_id)),
        None => Ok(selection.clone()),
    }
}

/// Apply `event`, keeping `selection` if the request is invalid.
pub fn handle_event(document: &Document, selection: Selection, event: &NavEvent) -> Selection {
    match transition(document, &selection, event) {
        Ok(next) => next,
        Err(e) => {
            log::warn!("Refusing navigation {:?}: {}", event, e);
            selection
        }
    }
}
