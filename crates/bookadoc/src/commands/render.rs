//! Book rendering command.

use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;

use bookadoc_book::RenderContext;
use bookadoc_config::{CliSettings, Config};
use clap::Args;

use crate::error::CliError;
use crate::output::Output;

/// Name of the `[output.*]` table this backend reads its settings from.
const BACKEND_NAME: &str = "asciidoc";

/// Arguments for rendering a book.
#[derive(Args, Debug)]
pub(crate) struct RenderArgs {
    /// Read the render context from a file instead of standard input.
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Leave out headings below this level (overrides book.toml).
    #[arg(long, env = "BOOKADOC_MIN_HEADING_LEVEL")]
    min_heading_level: Option<u8>,

    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,
}

impl RenderArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let ctx = self.read_context()?;
        let config = Config::load(
            ctx.config.output_table(BACKEND_NAME),
            Some(&self.cli_settings()),
        )?;

        output.info(&format!("Destination: {}", ctx.destination.display()));
        let summary = bookadoc_renderer::render(&ctx, &config)?;

        output.success(&format!(
            "Rendered {} chapters to {}",
            summary.chapters,
            summary.output_path.display()
        ));
        Ok(())
    }

    fn cli_settings(&self) -> CliSettings {
        CliSettings {
            min_heading_level: self.min_heading_level,
        }
    }

    fn read_context(&self) -> Result<RenderContext, CliError> {
        let ctx = match &self.input {
            Some(path) => RenderContext::from_json(BufReader::new(File::open(path)?))?,
            None => RenderContext::from_json(io::stdin().lock())?,
        };
        tracing::debug!(version = %ctx.version, root = %ctx.root.display(), "Loaded render context");
        Ok(ctx)
    }
}
