//! bookadoc CLI - AsciiDoc renderer backend for Markdown books.
//!
//! Reads the render context from standard input (or `--input`), renders the
//! whole book into `<destination>/output.adoc` and copies local images next
//! to it. Exits with status 1 on any error.

mod commands;
mod error;
mod output;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use commands::RenderArgs;
use output::Output;

/// bookadoc - render a Markdown book as a single AsciiDoc document.
#[derive(Parser)]
#[command(name = "bookadoc", version, about)]
struct Cli {
    #[command(flatten)]
    render: RenderArgs,
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    let directives = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(cli.render.verbose, directives.as_deref()))
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = cli.render.execute() {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}

/// --verbose enables INFO level, otherwise use `RUST_LOG` or default to WARN.
fn log_filter(verbose: bool, directives: Option<&str>) -> EnvFilter {
    if verbose {
        return EnvFilter::new("info");
    }
    directives
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new("warn"))
}
