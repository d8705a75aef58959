//! # Document Loader
//!
//! Resolves the verse corpus once at startup.
//!
//! ```text
//! path exists? ──no──► policy ──Fallback──► embedded Al-Fatihah (warn)
//!      │                  └─────Fatal─────► LoadError::DataSourceMissing
//!     yes
//!      ▼
//! serde_json ──err──► LoadError::DataParse (always fatal)
//!      ▼
//! validate ──err──► EmptyDocument / EmptyChapter (always fatal)
//!      ▼
//! Document
//! ```
//!
//! The caller wraps the result in an `Arc` and never calls `load` again for
//! the life of the process.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

use crate::core::document::{Document, DocumentError};

/// Embedded single-chapter corpus used when no data file is available.
const FALLBACK_JSON: &str = include_str!("../../assets/al-fatihah.json");

/// What to do when the data file is absent or unreadable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum MissingSourcePolicy {
    /// Substitute the embedded Al-Fatihah document and keep running.
    #[default]
    Fallback,
    /// Refuse to start.
    Fatal,
}

impl fmt::Display for MissingSourcePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MissingSourcePolicy::Fallback => write!(f, "fallback"),
            MissingSourcePolicy::Fatal => write!(f, "fatal"),
        }
    }
}

impl FromStr for MissingSourcePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fallback" => Ok(MissingSourcePolicy::Fallback),
            "fatal" => Ok(MissingSourcePolicy::Fatal),
            other => Err(format!("unknown missing-source policy: {other}")),
        }
    }
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("data source not found: {}", path.display())]
    DataSourceMissing { path: PathBuf },
    #[error("failed to parse {origin}: {source}")]
    DataParse {
        origin: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("document contains no chapters")]
    EmptyDocument,
    #[error("chapter {chapter_id} contains no verses")]
    EmptyChapter { chapter_id: String },
}

impl From<DocumentError> for LoadError {
    fn from(e: DocumentError) -> Self {
        match e {
            DocumentError::Empty => LoadError::EmptyDocument,
            DocumentError::EmptyChapter { chapter_id } => LoadError::EmptyChapter { chapter_id },
        }
    }
}

/// Where the loaded document came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadSource {
    File(PathBuf),
    Fallback,
}

impl fmt::Display for LoadSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadSource::File(path) => write!(f, "{}", path.display()),
            LoadSource::Fallback => write!(f, "built-in sample"),
        }
    }
}

#[derive(Debug)]
pub struct LoadOutcome {
    pub document: Document,
    pub source: LoadSource,
}

/// Parse and validate a JSON corpus. `origin` names the input in errors.
pub fn parse_document(json: &str, origin: &str) -> Result<Document, LoadError> {
    parse_document_bytes(json.as_bytes(), origin)
}

/// Like [`parse_document`] over raw bytes. Invalid UTF-8 is a parse error.
pub fn parse_document_bytes(bytes: &[u8], origin: &str) -> Result<Document, LoadError> {
    let document: Document =
        serde_json::from_slice(bytes).map_err(|source| LoadError::DataParse {
            origin: origin.to_string(),
            source,
        })?;
    document.validate()?;
    Ok(document)
}

/// The embedded Al-Fatihah document.
pub fn fallback_document() -> Result<Document, LoadError> {
    parse_document(FALLBACK_JSON, "built-in sample")
}

/// Load the corpus from `path`, applying `policy` if the file is missing.
pub fn load(path: &Path, policy: MissingSourcePolicy) -> Result<LoadOutcome, LoadError> {
    // Only I/O failures count as missing; bad encoding is left to the parser
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) => return missing_source(path, policy, &e),
    };

    let document = parse_document_bytes(&bytes, &path.display().to_string())?;
    info!(
        "Loaded {} chapters ({} verses) from {}",
        document.chapter_count(),
        document.verse_count(),
        path.display()
    );
    Ok(LoadOutcome {
        document,
        source: LoadSource::File(path.to_path_buf()),
    })
}

fn missing_source(
    path: &Path,
    policy: MissingSourcePolicy,
    err: &io::Error,
) -> Result<LoadOutcome, LoadError> {
    debug!("Reading {} failed: {}", path.display(), err);
    match policy {
        MissingSourcePolicy::Fatal => Err(LoadError::DataSourceMissing {
            path: path.to_path_buf(),
        }),
        MissingSourcePolicy::Fallback => {
            warn!(
                "Data source {} unavailable ({}), using built-in sample",
                path.display(),
                err.kind()
            );
            Ok(LoadOutcome {
                document: fallback_document()?,
                source: LoadSource::Fallback,
            })
        }
    }
}
