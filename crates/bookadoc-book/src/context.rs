//! Render context handed to the backend by the book-building pipeline.

use std::collections::HashMap;
use std::io::Read;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::book::Book;

/// Default book source directory name, relative to the book root.
const DEFAULT_SOURCE_DIR: &str = "src";

/// Error returned when the render context cannot be loaded.
#[derive(Debug, thiserror::Error)]
pub enum BookError {
    /// Malformed JSON or an I/O error while reading it.
    #[error("Invalid render context: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Everything a backend needs to render one book.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct RenderContext {
    /// Version of the pipeline that produced this context.
    pub version: String,
    /// Book root directory (where `book.toml` lives).
    pub root: PathBuf,
    /// The book itself.
    pub book: Book,
    /// Book configuration.
    pub config: Config,
    /// Directory the backend writes its output into.
    pub destination: PathBuf,
}

impl RenderContext {
    /// Read a render context from a JSON stream.
    ///
    /// # Errors
    ///
    /// Returns [`BookError::Parse`] if the stream is not a valid render context.
    pub fn from_json<R: Read>(reader: R) -> Result<Self, BookError> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Absolute source directory: book root joined with `book.src` (default `src`).
    #[must_use]
    pub fn source_dir(&self) -> PathBuf {
        self.root.join(self.config.book.source_dir())
    }
}

/// Book configuration as serialized from `book.toml`.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// `[book]` table.
    pub book: BookConfig,
    /// `[output.*]` tables, keyed by backend name.
    pub output: HashMap<String, serde_json::Value>,
}

impl Config {
    /// Configuration table of the named backend, if present.
    #[must_use]
    pub fn output_table(&self, backend: &str) -> Option<&serde_json::Value> {
        self.output.get(backend)
    }
}

/// `[book]` table.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct BookConfig {
    /// Book title.
    pub title: Option<String>,
    /// Book authors.
    pub authors: Vec<String>,
    /// Short description.
    pub description: Option<String>,
    /// Source directory, relative to the book root.
    pub src: Option<PathBuf>,
    /// Main language of the book.
    pub language: Option<String>,
}

impl BookConfig {
    /// Source directory, falling back to `src`.
    #[must_use]
    pub fn source_dir(&self) -> &Path {
        match &self.src {
            Some(src) if !src.as_os_str().is_empty() => src,
            _ => Path::new(DEFAULT_SOURCE_DIR),
        }
    }
}
