//! Render request model for the bookadoc AsciiDoc backend.
//!
//! The book-building pipeline hands a renderer backend a JSON render context
//! on standard input. This crate deserializes that context into
//! [`RenderContext`], a tree of [`BookItem`]s plus the book-level
//! configuration.
//!
//! # Example
//!
//! ```
//! use bookadoc_book::{BookItem, RenderContext};
//!
//! let json = r#"{
//!     "root": "/books/demo",
//!     "destination": "/books/demo/book/asciidoc",
//!     "book": { "sections": [
//!         { "Chapter": { "name": "Intro", "content": "Hello", "number": [1] } },
//!         "Separator"
//!     ] },
//!     "config": { "book": { "title": "Demo" } }
//! }"#;
//!
//! let ctx = RenderContext::from_json(json.as_bytes()).unwrap();
//! assert_eq!(ctx.config.book.title.as_deref(), Some("Demo"));
//! assert!(matches!(ctx.book.sections[1], BookItem::Separator));
//! ```

mod book;
mod context;

pub use book::{Book, BookItem, Chapter, ChapterId};
pub use context::{BookConfig, BookError, Config, RenderContext};
