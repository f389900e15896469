//! Book traversal.
//!
//! [`walk_book`] visits the book items in document order and hands each one
//! to a [`BookHandler`]. Chapters are visited before their sub-chapters.

use bookadoc_book::{BookItem, Chapter};

use crate::ast::Node;
use crate::error::RenderError;
use crate::parser::parse_markdown;
use crate::walk::{Visitor, walk};

/// Callbacks for each kind of book item.
pub trait BookHandler {
    /// Called for every chapter. `content` may be walked at most once.
    fn handle_chapter(
        &mut self,
        chapter: &Chapter,
        content: ChapterContent<'_>,
    ) -> Result<(), RenderError>;

    /// Called for every separator.
    fn handle_separator(&mut self) -> Result<(), RenderError>;

    /// Called for every part title.
    fn handle_part_title(&mut self, title: &str) -> Result<(), RenderError>;
}

/// Parsed Markdown body of one chapter, walkable once.
pub struct ChapterContent<'a> {
    chapter: &'a Chapter,
}

impl<'a> ChapterContent<'a> {
    fn new(chapter: &'a Chapter) -> Self {
        Self { chapter }
    }

    /// Parse the chapter body and walk it with `visitor`.
    pub fn walk<V>(self, visitor: &mut V) -> Result<(), RenderError>
    where
        V: Visitor<Error = RenderError>,
    {
        walk(&self.parse(), visitor)
    }

    /// Parse the chapter body without walking it.
    #[must_use]
    pub fn parse(&self) -> Node {
        parse_markdown(&self.chapter.content)
    }
}

/// Visit `items` in document order, stopping at the first error.
pub fn walk_book<H: BookHandler>(items: &[BookItem], handler: &mut H) -> Result<(), RenderError> {
    for item in items {
        walk_item(item, handler)?;
    }
    Ok(())
}

fn walk_item<H: BookHandler>(item: &BookItem, handler: &mut H) -> Result<(), RenderError> {
    match item {
        BookItem::Chapter(chapter) => {
            handler.handle_chapter(chapter, ChapterContent::new(chapter))?;
            walk_book(&chapter.sub_items, handler)
        }
        BookItem::Separator => handler.handle_separator(),
        BookItem::PartTitle(title) => handler.handle_part_title(title),
        BookItem::Unrecognized(value) => {
            tracing::error!(item = %value, "Unrecognized book item");
            Err(RenderError::InvalidBookItem)
        }
    }
}
