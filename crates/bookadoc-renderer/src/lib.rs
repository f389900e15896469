//! Two-pass Markdown to AsciiDoc renderer for books.
//!
//! This crate turns a [`RenderContext`](bookadoc_book::RenderContext) into a
//! single AsciiDoc document and copies the local images it references.
//!
//! # Architecture
//!
//! Chapter bodies are parsed with pulldown-cmark into a [`Node`] tree and
//! walked with a [`Visitor`]. The book itself is traversed by [`walk_book`],
//! which hands every item to a [`BookHandler`]. Rendering runs two handlers
//! over the same book:
//! - [`FootnoteCollector`]: numbers every footnote definition book-wide and
//!   renders its body into a [`FootnoteTable`]
//! - [`AsciidocEmitter`]: writes the preamble (including one attribute per
//!   footnote) and then every chapter, resolving footnote references against
//!   the table
//!
//! Both share the per-node rules of [`NodeRenderer`].
//!
//! # Example
//!
//! ```
//! use bookadoc_book::{Book, BookItem, Chapter, RenderContext};
//! use bookadoc_config::Config;
//! use bookadoc_renderer::render_to_writer;
//!
//! let ctx = RenderContext {
//!     book: Book::new(vec![BookItem::Chapter(
//!         Chapter::new("Widgets", "Hello").with_number([1, 2]),
//!     )]),
//!     ..RenderContext::default()
//! };
//!
//! let mut out = Vec::new();
//! let summary = render_to_writer(&ctx, &Config::default(), &mut out).unwrap();
//! let document = String::from_utf8(out).unwrap();
//!
//! assert_eq!(summary.chapters, 1);
//! assert!(document.starts_with(":doctype: book\n"));
//! assert!(document.ends_with("=== 1.2 Widgets\n\nHello\n"));
//! ```

mod asciidoc;
mod assets;
mod ast;
mod book;
mod error;
mod footnotes;
mod parser;
mod session;
mod util;
mod walk;

pub use asciidoc::{AsciidocEmitter, NodeRenderer};
pub use assets::{AssetResolver, ImageTarget, copy_asset};
pub use ast::{Alignment, Node, NodeKind};
pub use book::{BookHandler, ChapterContent, walk_book};
pub use error::RenderError;
pub use footnotes::{FootnoteCollector, FootnoteEntry, FootnoteKey, FootnoteTable};
pub use parser::{parse_markdown, parser_options};
pub use session::{OUTPUT_FILENAME, RenderSummary, render, render_to_writer};
pub use util::clean_path;
pub use walk::{Visitor, WalkContext, WalkStatus, walk, walk_children};
