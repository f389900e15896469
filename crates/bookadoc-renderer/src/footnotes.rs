//! Book-wide footnote numbering.
//!
//! Footnote definitions are numbered per chapter by the parser. The first
//! pass walks the whole book, gives every definition a book-wide index and
//! renders its body, so that the second pass can resolve references to
//! footnotes defined further down.

use std::collections::HashMap;

use bookadoc_book::{Chapter, ChapterId};
use bookadoc_config::Config;

use crate::asciidoc::NodeRenderer;
use crate::assets::AssetResolver;
use crate::ast::{Node, NodeKind};
use crate::book::{BookHandler, ChapterContent};
use crate::error::RenderError;
use crate::walk::{Visitor, WalkContext, WalkStatus, walk_children};

/// Identifies one footnote definition in the whole book.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct FootnoteKey {
    /// Chapter the definition belongs to.
    pub chapter: ChapterId,
    /// Index of the definition within its chapter, starting at 1.
    pub index: usize,
}

impl FootnoteKey {
    #[must_use]
    pub fn new(chapter: ChapterId, index: usize) -> Self {
        Self { chapter, index }
    }
}

/// A collected footnote.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FootnoteEntry {
    /// Book-wide index, starting at 1.
    pub index: usize,
    /// Footnote body rendered as AsciiDoc.
    pub body: String,
}

impl FootnoteEntry {
    /// Document attribute defining this footnote, e.g. `:fn-3: footnote:[Body]`.
    ///
    /// Attribute values end at the line break, so line breaks inside the
    /// body are folded into spaces.
    #[must_use]
    pub fn attribute(&self) -> String {
        let body = self
            .body
            .split('\n')
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect::<Vec<_>>()
            .join(" ");
        format!(":fn-{}: footnote:[{body}]", self.index)
    }
}

/// All footnotes of a book, keyed by chapter and local index.
#[derive(Clone, Debug, Default)]
pub struct FootnoteTable {
    entries: HashMap<FootnoteKey, FootnoteEntry>,
}

impl FootnoteTable {
    /// Look up the footnote defined in `chapter` with the given local index.
    #[must_use]
    pub fn get(&self, chapter: &ChapterId, index: usize) -> Option<&FootnoteEntry> {
        self.entries.get(&FootnoteKey::new(chapter.clone(), index))
    }

    /// Record an entry. An existing entry for the same key is kept.
    ///
    /// Returns `false` if the key was already present.
    pub fn insert(&mut self, key: FootnoteKey, entry: FootnoteEntry) -> bool {
        if self.entries.contains_key(&key) {
            return false;
        }
        self.entries.insert(key, entry);
        true
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in ascending book-wide index.
    #[must_use]
    pub fn in_order(&self) -> impl Iterator<Item = &FootnoteEntry> {
        let mut entries: Vec<_> = self.entries.values().collect();
        entries.sort_by_key(|entry| entry.index);
        entries.into_iter()
    }
}

/// First pass: collects and renders every footnote definition of the book.
pub struct FootnoteCollector<'r> {
    assets: AssetResolver<'r>,
    config: &'r Config,
    counter: usize,
    table: FootnoteTable,
}

impl<'r> FootnoteCollector<'r> {
    #[must_use]
    pub fn new(assets: AssetResolver<'r>, config: &'r Config) -> Self {
        Self {
            assets,
            config,
            counter: 0,
            table: FootnoteTable::default(),
        }
    }

    /// Finish collection and return the table.
    #[must_use]
    pub fn into_table(self) -> FootnoteTable {
        self.table
    }
}

impl BookHandler for FootnoteCollector<'_> {
    fn handle_chapter(
        &mut self,
        chapter: &Chapter,
        content: ChapterContent<'_>,
    ) -> Result<(), RenderError> {
        let mut visitor = ChapterFootnotes {
            collector: self,
            chapter,
            chapter_id: chapter.id(),
        };
        content.walk(&mut visitor)
    }

    fn handle_separator(&mut self) -> Result<(), RenderError> {
        Ok(())
    }

    fn handle_part_title(&mut self, _title: &str) -> Result<(), RenderError> {
        Ok(())
    }
}

/// Visitor over one chapter's tree during collection.
struct ChapterFootnotes<'c, 'r> {
    collector: &'c mut FootnoteCollector<'r>,
    chapter: &'c Chapter,
    chapter_id: ChapterId,
}

impl ChapterFootnotes<'_, '_> {
    fn render_body(&self, node: &Node, ctx: &WalkContext<'_>) -> Result<String, RenderError> {
        let mut buffer = Vec::new();
        let mut renderer = NodeRenderer::new(
            &mut buffer,
            self.chapter,
            self.collector.assets,
            self.collector.config,
            None,
        );
        walk_children(node, &mut renderer, *ctx)?;
        Ok(String::from_utf8(buffer)?)
    }
}

impl Visitor for ChapterFootnotes<'_, '_> {
    type Error = RenderError;

    fn enter(&mut self, node: &Node, ctx: &WalkContext<'_>) -> Result<WalkStatus, RenderError> {
        let NodeKind::Footnote { index } = node.kind else {
            return Ok(WalkStatus::Continue);
        };

        let body = self.render_body(node, ctx)?;
        self.collector.counter += 1;
        let entry = FootnoteEntry {
            index: self.collector.counter,
            body,
        };
        let key = FootnoteKey::new(self.chapter_id.clone(), index);
        if !self.collector.table.insert(key, entry) {
            tracing::warn!(
                chapter = %self.chapter.name,
                index,
                "Duplicate footnote definition"
            );
        }
        Ok(WalkStatus::SkipChildren)
    }

    fn exit(&mut self, _node: &Node, _ctx: &WalkContext<'_>) -> Result<(), RenderError> {
        Ok(())
    }
}
