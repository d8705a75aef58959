//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::Arc;

use indexmap::IndexMap;

use crate::core::document::{Chapter, Document, Verse};
use crate::core::loader::LoadSource;
use crate::core::state::App;

pub fn verse(arabic: &str, english: &str, urdu: &str) -> Verse {
    Verse {
        arabic: arabic.to_string(),
        english: english.to_string(),
        urdu: urdu.to_string(),
    }
}

/// Builds a document from `(chapter_id, verse_ids)` pairs, in the given order.
/// Chapters are named `"Chapter <id>"`; verse text is derived from its ids.
pub fn document_with(chapters: &[(&str, &[&str])]) -> Document {
    let chapters = chapters
        .iter()
        .map(|(chapter_id, verse_ids)| {
            let verses: IndexMap<String, Verse> = verse_ids
                .iter()
                .map(|v| {
                    let text = format!("{chapter_id}:{v}");
                    (v.to_string(), verse(&text, &text, &text))
                })
                .collect();
            (
                chapter_id.to_string(),
                Chapter {
                    name: format!("Chapter {chapter_id}"),
                    verses,
                },
            )
        })
        .collect();
    Document::new(chapters)
}

/// Two chapters: "1" named "First" with verses 1..=3, "2" named "Second" with 1..=2.
pub fn sample_document() -> Document {
    let mut doc = document_with(&[("1", &["1", "2", "3"]), ("2", &["1", "2"])]);
    doc.chapters["1"].name = "First".to_string();
    doc.chapters["2"].name = "Second".to_string();
    doc
}

/// Creates a test App over `sample_document()`.
pub fn test_app() -> App {
    App::new(
        Arc::new(sample_document()),
        LoadSource::File("test.json".into()),
    )
    .expect("sample document is valid")
}
