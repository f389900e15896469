//! AsciiDoc emission.
//!
//! [`NodeRenderer`] turns one chapter's node tree into AsciiDoc markup.
//! [`AsciidocEmitter`] drives it over the whole book and writes the chapter
//! framing and the document preamble around it.

use std::io::Write;

use bookadoc_book::{BookConfig, Chapter};
use bookadoc_config::Config;

use crate::assets::{AssetResolver, ImageTarget, copy_asset};
use crate::ast::{Alignment, Node, NodeKind};
use crate::book::{BookHandler, ChapterContent};
use crate::error::RenderError;
use crate::footnotes::FootnoteTable;
use crate::walk::{Visitor, WalkContext, WalkStatus};

/// Deepest discrete heading AsciiDoc supports.
const MAX_HEADING_LEVEL: u8 = 6;

/// Renders the nodes of one chapter as AsciiDoc.
///
/// Without a footnote table, footnote references render as nothing. This is
/// the mode used for footnote bodies themselves.
pub struct NodeRenderer<'r, W: Write> {
    out: W,
    chapter: &'r Chapter,
    assets: AssetResolver<'r>,
    config: &'r Config,
    footnotes: Option<&'r FootnoteTable>,
    assets_copied: usize,
}

impl<'r, W: Write> NodeRenderer<'r, W> {
    /// Create a renderer writing into `out`.
    pub fn new(
        out: W,
        chapter: &'r Chapter,
        assets: AssetResolver<'r>,
        config: &'r Config,
        footnotes: Option<&'r FootnoteTable>,
    ) -> Self {
        Self {
            out,
            chapter,
            assets,
            config,
            footnotes,
            assets_copied: 0,
        }
    }

    /// Number of local images copied so far.
    #[must_use]
    pub fn assets_copied(&self) -> usize {
        self.assets_copied
    }

    fn heading(&mut self, level: u8) -> Result<WalkStatus, RenderError> {
        if !self.config.keeps_heading(level) {
            return Ok(WalkStatus::SkipChildren);
        }
        let clamped = level.clamp(1, MAX_HEADING_LEVEL);
        if clamped != level {
            tracing::warn!(
                chapter = %self.chapter.name,
                level,
                clamped,
                "Unsupported heading level"
            );
        }
        write!(self.out, "\n[discrete]\n{} ", "=".repeat(usize::from(clamped)))?;
        Ok(WalkStatus::Continue)
    }

    fn code_block(&mut self, language: Option<&str>, lines: &str) -> Result<(), RenderError> {
        match language {
            Some(language) => write!(self.out, "\n[source,{language}]\n----\n")?,
            None => self.out.write_all(b"\n[source]\n----\n")?,
        }
        self.out.write_all(lines.as_bytes())?;
        // The closing delimiter must start its own line.
        if !lines.is_empty() && !lines.ends_with('\n') {
            self.out.write_all(b"\n")?;
        }
        Ok(())
    }

    fn list(&mut self, ordered: bool, start: u64) -> Result<(), RenderError> {
        if ordered && start != 1 {
            write!(self.out, "\n[start={start}]\n")?;
        } else {
            self.out.write_all(b"\n[disc]\n")?;
        }
        Ok(())
    }

    fn list_item(&mut self, ctx: &WalkContext<'_>) -> Result<(), RenderError> {
        let marker = if ctx.ordered_list { "." } else { "*" };
        write!(self.out, "{} ", marker.repeat(ctx.list_depth))?;
        Ok(())
    }

    fn image(&mut self, destination: &str, title: &str) -> Result<(), RenderError> {
        let target = self
            .assets
            .resolve_image(self.chapter.source_dir(), destination)?;
        if let ImageTarget::Local {
            source,
            destination,
            ..
        } = &target
        {
            copy_asset(source, destination)?;
            self.assets_copied += 1;
        }
        write!(self.out, "image:{}[", target.emitted())?;
        if !title.is_empty() {
            write!(self.out, "title={title},")?;
        }
        Ok(())
    }

    fn table(&mut self, node: &Node, alignments: &[Alignment]) -> Result<(), RenderError> {
        let mut specs = Vec::new();
        if !alignments.is_empty() {
            let cols: Vec<&str> = alignments.iter().map(|a| alignment_marker(*a)).collect();
            specs.push(format!("cols=\"{}\"", cols.join(",")));
        }
        if node.has_table_header() {
            specs.push("options=\"header\"".to_owned());
        }
        write!(self.out, "\n[{}]\n|===\n", specs.join(","))?;
        Ok(())
    }

    fn footnote_link(&mut self, index: usize) -> Result<(), RenderError> {
        let Some(table) = self.footnotes else {
            return Ok(());
        };
        let chapter_id = self.chapter.id();
        match table.get(&chapter_id, index) {
            Some(entry) => write!(self.out, "{{fn-{}}}", entry.index)?,
            None => tracing::warn!(
                chapter = %self.chapter.name,
                index,
                "Reference to undefined footnote"
            ),
        }
        Ok(())
    }
}

impl<W: Write> Visitor for NodeRenderer<'_, W> {
    type Error = RenderError;

    fn enter(&mut self, node: &Node, ctx: &WalkContext<'_>) -> Result<WalkStatus, RenderError> {
        match &node.kind {
            NodeKind::Heading { level } => return self.heading(*level),
            NodeKind::Paragraph => {
                if !ctx.parent_is(|kind| {
                    matches!(kind, NodeKind::ListItem | NodeKind::Footnote { .. })
                }) {
                    self.out.write_all(b"\n")?;
                }
            }
            NodeKind::Text(value) => self.out.write_all(value.as_bytes())?,
            NodeKind::LineBreak { hard: false } => self.out.write_all(b"\n")?,
            NodeKind::LineBreak { hard: true } => self.out.write_all(b" +\n")?,
            NodeKind::Emphasis { level } => {
                self.out.write_all(emphasis_marker(*level)?.as_bytes())?;
            }
            NodeKind::Strikethrough => self.out.write_all(b"[.line-through]#")?,
            NodeKind::CodeSpan => self.out.write_all(b"`")?,
            NodeKind::FencedCodeBlock { language, lines } => {
                self.code_block(language.as_deref(), lines)?;
            }
            NodeKind::HtmlBlock { lines } => write!(self.out, "pass:[{lines}")?,
            NodeKind::RawHtml(html) => write!(self.out, "pass:[{html}]")?,
            NodeKind::Blockquote => self.out.write_all(b"\n____\n")?,
            NodeKind::List { ordered, start } => self.list(*ordered, *start)?,
            NodeKind::ListItem => self.list_item(ctx)?,
            NodeKind::TaskCheckBox { checked: true } => self.out.write_all(b"[x] ")?,
            NodeKind::TaskCheckBox { checked: false } => self.out.write_all(b"[ ] ")?,
            NodeKind::Link { destination, .. } => write!(self.out, "link:{destination}[")?,
            NodeKind::Image { destination, title } => self.image(destination, title)?,
            NodeKind::AutoLink { url } => write!(self.out, "<{url}>")?,
            NodeKind::ThematicBreak => self.out.write_all(b"\n'''\n")?,
            NodeKind::Table { alignments } => self.table(node, alignments)?,
            NodeKind::TableCell => self.out.write_all(b"|")?,
            NodeKind::FootnoteLink { index } => self.footnote_link(*index)?,
            // Footnote bodies are emitted as document attributes in the preamble.
            NodeKind::Footnote { .. } | NodeKind::FootnoteBacklink => {
                return Ok(WalkStatus::SkipChildren);
            }
            NodeKind::Document | NodeKind::TableHeader | NodeKind::TableRow => {}
        }
        Ok(WalkStatus::Continue)
    }

    fn exit(&mut self, node: &Node, ctx: &WalkContext<'_>) -> Result<(), RenderError> {
        match &node.kind {
            NodeKind::Heading { .. }
            | NodeKind::ListItem
            | NodeKind::TableHeader
            | NodeKind::TableRow => self.out.write_all(b"\n")?,
            NodeKind::Paragraph => {
                if !ctx.parent_is(|kind| matches!(kind, NodeKind::Footnote { .. })) {
                    self.out.write_all(b"\n")?;
                }
            }
            NodeKind::Emphasis { level } => {
                self.out.write_all(emphasis_marker(*level)?.as_bytes())?;
            }
            NodeKind::Strikethrough => self.out.write_all(b"#")?,
            NodeKind::CodeSpan => self.out.write_all(b"`")?,
            NodeKind::FencedCodeBlock { .. } => self.out.write_all(b"----\n")?,
            NodeKind::HtmlBlock { .. } | NodeKind::Link { .. } | NodeKind::Image { .. } => {
                self.out.write_all(b"]")?;
            }
            NodeKind::Blockquote => self.out.write_all(b"____\n")?,
            NodeKind::Table { .. } => self.out.write_all(b"|===\n")?,
            NodeKind::TableCell => self.out.write_all(b" ")?,
            NodeKind::Document
            | NodeKind::Text(_)
            | NodeKind::LineBreak { .. }
            | NodeKind::RawHtml(_)
            | NodeKind::List { .. }
            | NodeKind::TaskCheckBox { .. }
            | NodeKind::AutoLink { .. }
            | NodeKind::ThematicBreak
            | NodeKind::Footnote { .. }
            | NodeKind::FootnoteLink { .. }
            | NodeKind::FootnoteBacklink => {}
        }
        Ok(())
    }
}

fn emphasis_marker(level: u8) -> Result<&'static str, RenderError> {
    match level {
        1 => Ok("_"),
        2 => Ok("*"),
        _ => Err(RenderError::UnsupportedEmphasisLevel(level)),
    }
}

fn alignment_marker(alignment: Alignment) -> &'static str {
    match alignment {
        Alignment::Left => "<",
        Alignment::Right => ">",
        Alignment::Center => "^",
        Alignment::None => "",
    }
}

/// Second pass: writes the whole book as one AsciiDoc document.
pub struct AsciidocEmitter<'r, W: Write> {
    out: W,
    assets: AssetResolver<'r>,
    config: &'r Config,
    footnotes: &'r FootnoteTable,
    assets_copied: usize,
    chapters: usize,
}

impl<'r, W: Write> AsciidocEmitter<'r, W> {
    /// Create an emitter writing into `out`.
    pub fn new(
        out: W,
        assets: AssetResolver<'r>,
        config: &'r Config,
        footnotes: &'r FootnoteTable,
    ) -> Self {
        Self {
            out,
            assets,
            config,
            footnotes,
            assets_copied: 0,
            chapters: 0,
        }
    }

    /// Write the document header, attributes and footnote definitions.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::Io`] if writing fails.
    pub fn write_preamble(&mut self, book: &BookConfig) -> Result<(), RenderError> {
        self.out.write_all(b":doctype: book\n\n")?;
        if let Some(title) = book.title.as_deref().filter(|t| !t.is_empty()) {
            writeln!(self.out, "= {title}")?;
        }
        for author in &book.authors {
            writeln!(self.out, "{author}")?;
        }
        if let Some(description) = book.description.as_deref().filter(|d| !d.is_empty()) {
            writeln!(self.out, ":description: {description}")?;
        }
        if let Some(language) = book.language.as_deref().filter(|l| !l.is_empty()) {
            writeln!(self.out, ":lang: {language}")?;
        }
        self.out
            .write_all(b":toc: left\n:toclevels: 3\n:icons: font\n:table-stripes: even\n")?;
        for entry in self.footnotes.in_order() {
            writeln!(self.out, "{}", entry.attribute())?;
        }
        self.out.write_all(b"\n")?;
        Ok(())
    }

    /// Number of chapters written.
    #[must_use]
    pub fn chapters(&self) -> usize {
        self.chapters
    }

    /// Number of local images copied.
    #[must_use]
    pub fn assets_copied(&self) -> usize {
        self.assets_copied
    }

    /// Give back the output sink.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> BookHandler for AsciidocEmitter<'_, W> {
    fn handle_chapter(
        &mut self,
        chapter: &Chapter,
        content: ChapterContent<'_>,
    ) -> Result<(), RenderError> {
        tracing::debug!(chapter = %chapter.display_title(), "Rendering chapter");
        write!(
            self.out,
            "\n<<<\n\n{} {}\n",
            "=".repeat(chapter.heading_level()),
            chapter.display_title()
        )?;

        let mut renderer = NodeRenderer::new(
            &mut self.out,
            chapter,
            self.assets,
            self.config,
            Some(self.footnotes),
        );
        content.walk(&mut renderer)?;
        self.assets_copied += renderer.assets_copied();
        self.chapters += 1;
        Ok(())
    }

    fn handle_separator(&mut self) -> Result<(), RenderError> {
        self.out.write_all(b"\n'''\n")?;
        Ok(())
    }

    fn handle_part_title(&mut self, title: &str) -> Result<(), RenderError> {
        write!(self.out, "\n<<<\n\n= {title}\n")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::book::walk_book;
    use crate::footnotes::{FootnoteEntry, FootnoteKey};
    use crate::parser::parse_markdown;
    use crate::walk::walk;
    use bookadoc_book::BookItem;
    use pretty_assertions::assert_eq;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    fn no_assets() -> AssetResolver<'static> {
        AssetResolver::new(Path::new("/nonexistent/src"), Path::new("/nonexistent/out"))
    }

    fn render_with(markdown: &str, config: &Config, footnotes: Option<&FootnoteTable>) -> String {
        let chapter = Chapter::new("Test", markdown).with_number([1]);
        let mut out = Vec::new();
        let mut renderer = NodeRenderer::new(&mut out, &chapter, no_assets(), config, footnotes);
        walk(&parse_markdown(markdown), &mut renderer).unwrap();
        String::from_utf8(out).unwrap()
    }

    fn render(markdown: &str) -> String {
        render_with(markdown, &Config::default(), None)
    }

    fn emit_book(items: &[BookItem], config: &Config, footnotes: &FootnoteTable) -> String {
        let mut emitter = AsciidocEmitter::new(Vec::new(), no_assets(), config, footnotes);
        walk_book(items, &mut emitter).unwrap();
        String::from_utf8(emitter.into_inner()).unwrap()
    }

    #[test]
    fn test_paragraph() {
        assert_eq!(render("Hello"), "\nHello\n");
    }

    #[test]
    fn test_soft_and_hard_breaks() {
        assert_eq!(render("one\ntwo  \nthree"), "\none\ntwo +\nthree\n");
    }

    #[test]
    fn test_heading() {
        assert_eq!(render("## Setup"), "\n[discrete]\n== Setup\n");
    }

    #[test]
    fn test_heading_out_of_range_is_clamped() {
        let config = Config::default();
        let chapter = Chapter::new("Test", "");
        let tree = Node::new(NodeKind::Document).with_children(vec![
            Node::new(NodeKind::Heading { level: 9 }).with_children(vec![Node::text("Deep")]),
            Node::new(NodeKind::Heading { level: 0 }).with_children(vec![Node::text("Top")]),
        ]);
        let mut out = Vec::new();
        walk(
            &tree,
            &mut NodeRenderer::new(&mut out, &chapter, no_assets(), &config, None),
        )
        .unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "\n[discrete]\n====== Deep\n\n[discrete]\n= Top\n"
        );
    }

    #[test]
    fn test_min_heading_level_skips_heading_subtree() {
        let config = Config {
            min_heading_level: 2,
        };
        let output = render_with("# Title\n\n## Section\n\nBody", &config, None);
        assert_eq!(output, "\n[discrete]\n== Section\n\nBody\n");
        assert!(!output.contains("Title"));
    }

    #[test]
    fn test_emphasis() {
        assert_eq!(
            render("*a* **b** ~~c~~ `d`"),
            "\n_a_ *b* [.line-through]#c# `d`\n"
        );
    }

    #[test]
    fn test_unsupported_emphasis_level() {
        let config = Config::default();
        let chapter = Chapter::new("Test", "");
        let tree = Node::new(NodeKind::Emphasis { level: 3 }).with_children(vec![Node::text("x")]);
        let mut out = Vec::new();
        let err = walk(
            &tree,
            &mut NodeRenderer::new(&mut out, &chapter, no_assets(), &config, None),
        )
        .unwrap_err();
        assert!(matches!(err, RenderError::UnsupportedEmphasisLevel(3)));
        assert!(err.is_structural());
    }

    #[test]
    fn test_fenced_code_block() {
        assert_eq!(
            render("```rust\nfn main() {}\n```"),
            "\n[source,rust]\n----\nfn main() {}\n----\n"
        );
        assert_eq!(render("```\nplain\n```"), "\n[source]\n----\nplain\n----\n");
    }

    #[test]
    fn test_unterminated_code_block() {
        assert_eq!(
            render("```rust\nfn main() {}"),
            "\n[source,rust]\n----\nfn main() {}\n----\n"
        );
        assert_eq!(render("    let x = 1;"), "\n[source]\n----\nlet x = 1;\n----\n");
    }

    #[test]
    fn test_html_block() {
        assert_eq!(render("<div>\nhi\n</div>\n"), "pass:[<div>\nhi\n</div>\n]");
    }

    #[test]
    fn test_inline_html() {
        assert_eq!(render("a <kbd>b</kbd>"), "\na pass:[<kbd>]bpass:[</kbd>]\n");
    }

    #[test]
    fn test_blockquote() {
        assert_eq!(render("> quoted"), "\n____\n\nquoted\n____\n");
    }

    #[test]
    fn test_thematic_break() {
        assert_eq!(render("a\n\n***\n\nb"), "\na\n\n'''\n\nb\n");
    }

    #[test]
    fn test_links() {
        assert_eq!(
            render("[docs](https://example.com) <https://rust-lang.org>"),
            "\nlink:https://example.com[docs] <https://rust-lang.org>\n"
        );
        assert_eq!(render("<foo@example.com>"), "\n<mailto:foo@example.com>\n");
    }

    #[test]
    fn test_remote_image() {
        assert_eq!(
            render("![logo](https://example.com/logo.png \"Logo\")"),
            "\nimage:https://example.com/logo.png[title=Logo,logo]\n"
        );
    }

    #[test]
    fn test_unordered_list() {
        assert_eq!(render("- one\n- two\n"), "\n[disc]\n* one\n* two\n");
    }

    #[test]
    fn test_ordered_list_start() {
        assert_eq!(render("3. c\n4. d\n"), "\n[start=3]\n. c\n. d\n");
        assert_eq!(render("1. a\n"), "\n[disc]\n. a\n");
    }

    #[test]
    fn test_nested_list_depth() {
        assert_eq!(
            render("- a\n  - b\n    1. c\n"),
            "\n[disc]\n* a\n[disc]\n** b\n[disc]\n... c\n\n\n"
        );
    }

    #[test]
    fn test_task_list() {
        assert_eq!(render("- [x] done\n- [ ] todo\n"), "\n[disc]\n* [x] done\n* [ ] todo\n");
    }

    #[test]
    fn test_table() {
        let markdown = "| a | b | c | d |\n|:--|--:|:-:|---|\n| 1 | 2 | 3 | 4 |\n";
        assert_eq!(
            render(markdown),
            "\n[cols=\"<,>,^,\",options=\"header\"]\n|===\n|a |b |c |d \n|1 |2 |3 |4 \n|===\n"
        );
    }

    #[test]
    fn test_footnote_reference_and_definition() {
        let mut table = FootnoteTable::default();
        table.insert(
            FootnoteKey::new(Chapter::new("", "").with_number([1]).id(), 1),
            FootnoteEntry {
                index: 7,
                body: "A note.".to_owned(),
            },
        );
        let output = render_with(
            "Text[^n].\n\n[^n]: A note.",
            &Config::default(),
            Some(&table),
        );
        assert_eq!(output, "\nText{fn-7}.\n");
    }

    #[test]
    fn test_unresolved_footnote_renders_nothing() {
        let table = FootnoteTable::default();
        let output = render_with("Text[^n].\n\n[^n]: A note.", &Config::default(), Some(&table));
        assert_eq!(output, "\nText.\n");
    }

    #[test]
    fn test_paragraph_in_footnote_has_no_blank_lines() {
        let tree = Node::new(NodeKind::Footnote { index: 1 }).with_children(vec![
            Node::new(NodeKind::Paragraph).with_children(vec![Node::text("Body")]),
        ]);
        let config = Config::default();
        let chapter = Chapter::new("Test", "");
        let mut out = Vec::new();
        crate::walk::walk_children(
            &tree,
            &mut NodeRenderer::new(&mut out, &chapter, no_assets(), &config, None),
            WalkContext::default(),
        )
        .unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Body");
    }

    #[test]
    fn test_local_image_is_copied() {
        let temp = TempDir::new().unwrap();
        let source_dir = temp.path().join("src");
        let destination = temp.path().join("out");
        fs::create_dir_all(source_dir.join("ch1")).unwrap();
        fs::write(source_dir.join("ch1/diagram.png"), b"png").unwrap();

        let config = Config::default();
        let chapter = Chapter::new("Intro", "").with_source_path("ch1/intro.md");
        let assets = AssetResolver::new(&source_dir, &destination);
        let mut out = Vec::new();
        let mut renderer = NodeRenderer::new(&mut out, &chapter, assets, &config, None);
        walk(&parse_markdown("![](./diagram.png)"), &mut renderer).unwrap();

        assert_eq!(renderer.assets_copied(), 1);
        assert_eq!(String::from_utf8(out).unwrap(), "\nimage:ch1/diagram.png[]\n");
        assert_eq!(fs::read(destination.join("ch1/diagram.png")).unwrap(), b"png");
    }

    #[test]
    fn test_missing_local_image_fails() {
        let config = Config::default();
        let chapter = Chapter::new("Intro", "");
        let mut out = Vec::new();
        let mut renderer = NodeRenderer::new(&mut out, &chapter, no_assets(), &config, None);
        let err = walk(&parse_markdown("![](missing.png)"), &mut renderer).unwrap_err();
        assert_eq!(err.io_kind(), Some(std::io::ErrorKind::NotFound));
    }

    #[test]
    fn test_chapter_framing() {
        let items = vec![BookItem::Chapter(
            Chapter::new("Widgets", "Hello").with_number([1, 2]),
        )];
        let output = emit_book(&items, &Config::default(), &FootnoteTable::default());
        assert_eq!(output, "\n<<<\n\n=== 1.2 Widgets\n\nHello\n");
    }

    #[test]
    fn test_unnumbered_chapter_framing() {
        let items = vec![BookItem::Chapter(Chapter::new("Preface", ""))];
        let output = emit_book(&items, &Config::default(), &FootnoteTable::default());
        assert_eq!(output, "\n<<<\n\n== Preface\n");
    }

    #[test]
    fn test_separator_and_part_title() {
        let items = vec![BookItem::PartTitle("Basics".to_owned()), BookItem::Separator];
        let output = emit_book(&items, &Config::default(), &FootnoteTable::default());
        assert_eq!(output, "\n<<<\n\n= Basics\n\n'''\n");
    }

    #[test]
    fn test_emitter_counts_chapters() {
        let items = vec![BookItem::Chapter(
            Chapter::new("One", "").with_number([1]).with_sub_item(BookItem::Chapter(
                Chapter::new("Two", "").with_number([1, 1]),
            )),
        )];
        let config = Config::default();
        let footnotes = FootnoteTable::default();
        let mut emitter = AsciidocEmitter::new(Vec::new(), no_assets(), &config, &footnotes);
        walk_book(&items, &mut emitter).unwrap();
        assert_eq!(emitter.chapters(), 2);
        assert_eq!(emitter.assets_copied(), 0);
    }

    #[test]
    fn test_preamble() {
        let book = BookConfig {
            title: Some("Demo".to_owned()),
            authors: vec!["Ada".to_owned(), "Grace".to_owned()],
            description: Some("A demo book".to_owned()),
            language: Some("en".to_owned()),
            ..BookConfig::default()
        };
        let mut table = FootnoteTable::default();
        table.insert(
            FootnoteKey::new(Chapter::new("", "").with_number([2]).id(), 1),
            FootnoteEntry {
                index: 2,
                body: "Second.".to_owned(),
            },
        );
        table.insert(
            FootnoteKey::new(Chapter::new("", "").with_number([1]).id(), 1),
            FootnoteEntry {
                index: 1,
                body: "First.".to_owned(),
            },
        );
        let config = Config::default();
        let mut emitter = AsciidocEmitter::new(Vec::new(), no_assets(), &config, &table);
        emitter.write_preamble(&book).unwrap();
        let output = String::from_utf8(emitter.into_inner()).unwrap();
        assert_eq!(
            output,
            ":doctype: book\n\
             \n\
             = Demo\n\
             Ada\n\
             Grace\n\
             :description: A demo book\n\
             :lang: en\n\
             :toc: left\n\
             :toclevels: 3\n\
             :icons: font\n\
             :table-stripes: even\n\
             :fn-1: footnote:[First.]\n\
             :fn-2: footnote:[Second.]\n\
             \n"
        );
    }

    #[test]
    fn test_minimal_preamble() {
        let config = Config::default();
        let table = FootnoteTable::default();
        let mut emitter = AsciidocEmitter::new(Vec::new(), no_assets(), &config, &table);
        emitter.write_preamble(&BookConfig::default()).unwrap();
        assert_eq!(
            String::from_utf8(emitter.into_inner()).unwrap(),
            ":doctype: book\n\n:toc: left\n:toclevels: 3\n:icons: font\n:table-stripes: even\n\n"
        );
    }
}
