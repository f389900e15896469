//! Render error types.

use std::path::PathBuf;

/// Error returned when rendering a book fails.
///
/// Every variant aborts the render; there is no partial-success mode.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// A book item this backend does not know how to render.
    #[error("invalid book item")]
    InvalidBookItem,

    /// Emphasis nesting the renderer has no markup for.
    #[error("unknown emphasis level: {0}")]
    UnsupportedEmphasisLevel(u8),

    /// Image destination that is not a valid URL or relative path.
    #[error("invalid image URL {url:?}: {source}")]
    ImageUrl {
        /// Destination as written in the Markdown source.
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// Copying a local asset into the output directory failed.
    #[error("failed to copy {} to {}: {source}", .from.display(), .to.display())]
    Asset {
        /// Resolved source path.
        from: PathBuf,
        /// Destination path.
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Rendered text is not valid UTF-8.
    #[error("UTF-8 conversion error: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    /// I/O error on the output document.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl RenderError {
    /// Whether the error comes from the book content rather than the environment.
    #[must_use]
    pub fn is_structural(&self) -> bool {
        matches!(
            self,
            Self::InvalidBookItem | Self::UnsupportedEmphasisLevel(_) | Self::ImageUrl { .. }
        )
    }

    /// Underlying I/O error kind, if any.
    #[must_use]
    pub fn io_kind(&self) -> Option<std::io::ErrorKind> {
        match self {
            Self::Asset { source, .. } | Self::Io(source) => Some(source.kind()),
            Self::InvalidBookItem
            | Self::UnsupportedEmphasisLevel(_)
            | Self::ImageUrl { .. }
            | Self::Utf8(_) => None,
        }
    }
}
