//! Error types for loading, updating and saving documents

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// The source file could not be read.
#[derive(Debug, Error)]
#[error("unable to read file {}: {source}", .path.display())]
pub struct LoadError {
    pub path: PathBuf,
    #[source]
    pub source: io::Error,
}

/// Why `set_value` left the document untouched.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SetValueError {
    /// The key looks like a category header; renaming categories is not allowed
    #[error("cannot change category name through key {0:?}")]
    CategoryKey(String),
    #[error("category [{0}] not found")]
    CategoryNotFound(String),
    #[error("key {key:?} not found in category [{category}]")]
    KeyNotFound { category: String, key: String },
}

/// Why a document could not be serialized or persisted.
#[derive(Debug, Error)]
pub enum SaveError {
    #[error("nothing to write to file (did you load the wrong file?)")]
    EmptyDocument,
    #[error("document has no path to save to")]
    NoPath,
    /// Writing to a caller-supplied sink failed
    #[error("failed to write document: {0}")]
    Write(#[from] io::Error),
    /// Creating or writing the target file failed
    #[error("unable to save file at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
