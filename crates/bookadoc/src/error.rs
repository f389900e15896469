//! CLI error types.

use bookadoc_book::BookError;
use bookadoc_config::ConfigError;
use bookadoc_renderer::RenderError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Book(#[from] BookError),

    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Render(#[from] RenderError),

    #[error("{0}")]
    Io(#[from] std::io::Error),
}
