//! Style File Writer
//!
//! Persists scoped CSS under a sanitized relative path so the registry can
//! emit `<link>` tags instead of inline styles. Identifiers share the scope
//! id character class, which rules out path traversal and separator tricks
//! before any filesystem work happens.

use std::fs;
use std::path::{Path, PathBuf};

use capsule_css::validate_scope_id;
use thiserror::Error;

pub type WriterResult<T> = Result<T, WriterError>;

#[derive(Error, Debug)]
pub enum WriterError {
    /// The identifier failed the `[A-Za-z0-9_-]{1,100}` check. Always a
    /// caller bug; identifiers are machine-generated.
    #[error("unsafe style file identifier {0:?}")]
    UnsafeIdentifier(String),

    #[error("failed to write style file: {0}")]
    Io(#[from] std::io::Error),
}

/// Writes `<root>/<identifier>.css` files and hands back the relative path
/// for `<link href>` emission.
#[derive(Debug, Clone)]
pub struct StyleFileWriter {
    root: PathBuf,
}

impl StyleFileWriter {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        StyleFileWriter { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Write the CSS under the identifier, creating the root directory if
    /// needed. Returns the path relative to the root.
    pub fn write(&self, css: &str, identifier: &str) -> WriterResult<PathBuf> {
        if validate_scope_id(identifier).is_err() {
            return Err(WriterError::UnsafeIdentifier(identifier.to_string()));
        }

        let relative = PathBuf::from(format!("{}.css", identifier));
        fs::create_dir_all(&self.root)?;
        fs::write(self.root.join(&relative), css)?;
        Ok(relative)
    }
}
