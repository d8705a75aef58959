//! # Document Model
//!
//! The verse corpus as it lives in memory after loading.
//!
//! ```text
//! Document
//! └── chapters: IndexMap<chapter_id, Chapter>
//!     ├── name: String
//!     └── verses: IndexMap<verse_id, Verse>
//!         ├── arabic
//!         ├── english
//!         └── urdu
//! ```
//!
//! Identifiers are strings that happen to look numeric. Navigation order is
//! the order keys appear in the source file, never a numeric sort, so both
//! levels are `IndexMap`s rather than `HashMap`s or `BTreeMap`s.
//!
//! A `Document` is immutable once loaded and is shared between sessions
//! behind an `Arc`.

use indexmap::IndexMap;
use serde::Deserialize;
use thiserror::Error;

/// A single verse with its original text and two translations.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Verse {
    pub arabic: String,
    pub english: String,
    pub urdu: String,
}

/// A named chapter owning its verses in navigation order.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Chapter {
    pub name: String,
    /// Older data files call this field `ayahs`.
    #[serde(alias = "ayahs")]
    pub verses: IndexMap<String, Verse>,
}

impl Chapter {
    pub fn first_verse_id(&self) -> Option<&str> {
        self.verses.keys().next().map(String::as_str)
    }

    /// Position of `verse_id` in navigation order.
    pub fn position(&self, verse_id: &str) -> Option<usize> {
        self.verses.get_index_of(verse_id)
    }

    /// Verse identifier at `index` in navigation order.
    pub fn verse_id_at(&self, index: usize) -> Option<&str> {
        self.verses.get_index(index).map(|(id, _)| id.as_str())
    }

    pub fn verse_ids(&self) -> Vec<&str> {
        self.verses.keys().map(String::as_str).collect()
    }

    pub fn len(&self) -> usize {
        self.verses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.verses.is_empty()
    }
}

/// Chapter identifier paired with its display name, for populating a selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChapterEntry {
    pub id: String,
    pub name: String,
}

impl ChapterEntry {
    /// Selector label, e.g. `"1 – Al-Fatihah"`.
    pub fn label(&self) -> String {
        format!("{} – {}", self.id, self.name)
    }
}

/// Structural problems that make a parsed document unusable.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DocumentError {
    #[error("document contains no chapters")]
    Empty,
    #[error("chapter {chapter_id} contains no verses")]
    EmptyChapter { chapter_id: String },
}

/// The full corpus: chapters keyed by identifier, in source order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(transparent)]
pub struct Document {
    pub chapters: IndexMap<String, Chapter>,
}

impl Document {
    pub fn new(chapters: IndexMap<String, Chapter>) -> Self {
        Self { chapters }
    }

    /// Checks that the document has at least one chapter and that every
    /// chapter has at least one verse.
    pub fn validate(&self) -> Result<(), DocumentError> {
        if self.chapters.is_empty() {
            return Err(DocumentError::Empty);
        }
        if let Some((chapter_id, _)) = self.chapters.iter().find(|(_, c)| c.is_empty()) {
            return Err(DocumentError::EmptyChapter {
                chapter_id: chapter_id.clone(),
            });
        }
        Ok(())
    }

    pub fn chapter(&self, chapter_id: &str) -> Option<&Chapter> {
        self.chapters.get(chapter_id)
    }

    pub fn first_chapter_id(&self) -> Option<&str> {
        self.chapters.keys().next().map(String::as_str)
    }

    /// Ordered chapter identifiers with display names.
    pub fn chapter_entries(&self) -> Vec<ChapterEntry> {
        self.chapters
            .iter()
            .map(|(id, c)| ChapterEntry {
                id: id.clone(),
                name: c.name.clone(),
            })
            .collect()
    }

    /// Ordered verse identifiers of a chapter, or `None` for an unknown chapter.
    pub fn verse_ids(&self, chapter_id: &str) -> Option<Vec<&str>> {
        self.chapter(chapter_id).map(Chapter::verse_ids)
    }

    pub fn verse(&self, chapter_id: &str, verse_id: &str) -> Option<&Verse> {
        self.chapter(chapter_id)?.verses.get(verse_id)
    }

    pub fn chapter_count(&self) -> usize {
        self.chapters.len()
    }

    pub fn verse_count(&self) -> usize {
        self.chapters.values().map(Chapter::len).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{sample_document, verse};

    #[test]
    fn test_parses_ayahs_alias() {
        let json = r#"{"1": {"name": "Al-Fatihah", "ayahs": {"1": {"arabic": "a", "english": "e", "urdu": "u"}}}}"#;
        let doc: Document = serde_json::from_str(json).unwrap();
        assert_eq!(doc.chapter("1").unwrap().name, "Al-Fatihah");
        assert_eq!(doc.verse("1", "1"), Some(&verse("a", "e", "u")));
    }

    #[test]
    fn test_parses_verses_field() {
        let json = r#"{"2": {"name": "Al-Baqarah", "verses": {"1": {"arabic": "a", "english": "e", "urdu": "u"}}}}"#;
        let doc: Document = serde_json::from_str(json).unwrap();
        assert_eq!(doc.verse_ids("2"), Some(vec!["1"]));
    }

    #[test]
    fn test_preserves_source_key_order() {
        // "10" before "2" must survive: no numeric or lexical sort
        let json = r#"{
            "9": {"name": "At-Tawbah", "verses": {
                "10": {"arabic": "", "english": "", "urdu": ""},
                "2": {"arabic": "", "english": "", "urdu": ""},
                "1": {"arabic": "", "english": "", "urdu": ""}
            }},
            "1": {"name": "Al-Fatihah", "verses": {"1": {"arabic": "", "english": "", "urdu": ""}}}
        }"#;
        let doc: Document = serde_json::from_str(json).unwrap();
        assert_eq!(doc.first_chapter_id(), Some("9"));
        assert_eq!(doc.verse_ids("9"), Some(vec!["10", "2", "1"]));
    }

    #[test]
    fn test_missing_verse_field_is_rejected() {
        let json = r#"{"1": {"name": "x", "verses": {"1": {"arabic": "a", "english": "e"}}}}"#;
        assert!(serde_json::from_str::<Document>(json).is_err());
    }

    #[test]
    fn test_validate_empty_document() {
        assert_eq!(Document::default().validate(), Err(DocumentError::Empty));
    }

    #[test]
    fn test_validate_empty_chapter() {
        let mut doc = sample_document();
        doc.chapters.insert(
            "3".to_string(),
            Chapter {
                name: "Empty".to_string(),
                verses: IndexMap::new(),
            },
        );
        assert_eq!(
            doc.validate(),
            Err(DocumentError::EmptyChapter {
                chapter_id: "3".to_string()
            })
        );
    }

    #[test]
    fn test_chapter_entries_in_order() {
        let doc = sample_document();
        let entries = doc.chapter_entries();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].id, "1");
        assert_eq!(entries[1].label(), "2 – Second");
    }

    #[test]
    fn test_chapter_position_lookups() {
        let doc = sample_document();
        let chapter = doc.chapter("1").unwrap();
        assert_eq!(chapter.first_verse_id(), Some("1"));
        assert_eq!(chapter.position("3"), Some(2));
        assert_eq!(chapter.position("99"), None);
        assert_eq!(chapter.verse_id_at(1), Some("2"));
        assert_eq!(chapter.verse_id_at(3), None);
        assert_eq!(doc.verse_count(), 5);
    }

    #[test]
    fn test_unknown_lookups_return_none() {
        let doc = sample_document();
        assert!(doc.chapter("42").is_none());
        assert!(doc.verse_ids("42").is_none());
        assert!(doc.verse("1", "42").is_none());
    }
}
