//! Builds the node tree from pulldown-cmark events.

use std::collections::HashMap;

use pulldown_cmark::{CodeBlockKind, CowStr, Event, LinkType, Options, Parser, Tag};

use crate::ast::{Node, NodeKind};
use crate::util::heading_level_to_num;

/// Parser options: GitHub-flavored tables, strikethrough, task lists and footnotes.
#[must_use]
pub fn parser_options() -> Options {
    Options::ENABLE_TABLES
        | Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_TASKLISTS
        | Options::ENABLE_FOOTNOTES
}

/// Parse Markdown into a [`NodeKind::Document`] tree.
///
/// Footnote labels are replaced by chapter-local indices starting at 1, in
/// order of first reference. Top-level definitions are moved to the end of
/// the document in index order; definitions that are never referenced are
/// dropped.
#[must_use]
pub fn parse_markdown(markdown: &str) -> Node {
    let events: Vec<Event<'_>> = Parser::new_ext(markdown, parser_options()).collect();
    let labels = FootnoteLabels::scan(&events);

    let mut builder = TreeBuilder::new(labels);
    for event in events {
        builder.push(event);
    }
    builder.finish()
}

/// Footnote label to chapter-local index.
#[derive(Debug, Default)]
struct FootnoteLabels {
    indices: HashMap<String, usize>,
}

impl FootnoteLabels {
    fn scan(events: &[Event<'_>]) -> Self {
        let mut labels = Self::default();
        for event in events {
            if let Event::FootnoteReference(label) = event {
                labels.assign(label);
            }
        }
        labels
    }

    fn assign(&mut self, label: &str) {
        let next = self.indices.len() + 1;
        self.indices.entry(normalize_label(label)).or_insert(next);
    }

    fn index(&self, label: &str) -> Option<usize> {
        self.indices.get(&normalize_label(label)).copied()
    }
}

fn normalize_label(label: &str) -> String {
    label.to_lowercase()
}

/// Open element on the builder stack.
enum Frame {
    Node(Node),
    /// Container without a node of its own; children go to the enclosing node.
    Transparent,
    /// Container whose whole content is dropped.
    Skipped,
}

struct TreeBuilder {
    stack: Vec<Frame>,
    root: Node,
    labels: FootnoteLabels,
}

impl TreeBuilder {
    fn new(labels: FootnoteLabels) -> Self {
        Self {
            stack: Vec::new(),
            root: Node::new(NodeKind::Document),
            labels,
        }
    }

    fn finish(mut self) -> Node {
        while !self.stack.is_empty() {
            self.close();
        }
        let (mut definitions, mut children): (Vec<_>, Vec<_>) = self
            .root
            .children
            .into_iter()
            .partition(|node| matches!(node.kind, NodeKind::Footnote { .. }));
        definitions.sort_by_key(|node| match node.kind {
            NodeKind::Footnote { index } => index,
            _ => 0,
        });
        children.append(&mut definitions);
        self.root.children = children;
        self.root
    }

    fn skipping(&self) -> bool {
        self.stack.iter().any(|frame| matches!(frame, Frame::Skipped))
    }

    /// Innermost open node, or the document.
    fn current(&mut self) -> &mut Node {
        self.stack
            .iter_mut()
            .rev()
            .find_map(|frame| match frame {
                Frame::Node(node) => Some(node),
                Frame::Transparent | Frame::Skipped => None,
            })
            .unwrap_or(&mut self.root)
    }

    fn push(&mut self, event: Event<'_>) {
        if self.skipping() && !matches!(event, Event::Start(_) | Event::End(_)) {
            return;
        }
        match event {
            Event::Start(tag) => self.open(tag),
            Event::End(_) => self.close(),
            Event::Text(text) => self.text(&text),
            Event::Code(code) => {
                let span = Node::new(NodeKind::CodeSpan)
                    .with_children(vec![Node::text(code.into_string())]);
                self.append(span);
            }
            Event::Html(html) => self.html(&html),
            Event::InlineHtml(html) => {
                self.append(Node::new(NodeKind::RawHtml(html.into_string())));
            }
            Event::FootnoteReference(label) => {
                let index = self.labels.index(&label).unwrap_or_default();
                self.append(Node::new(NodeKind::FootnoteLink { index }));
            }
            Event::SoftBreak => self.append(Node::new(NodeKind::LineBreak { hard: false })),
            Event::HardBreak => self.append(Node::new(NodeKind::LineBreak { hard: true })),
            Event::Rule => self.append(Node::new(NodeKind::ThematicBreak)),
            Event::TaskListMarker(checked) => {
                self.append(Node::new(NodeKind::TaskCheckBox { checked }));
            }
            Event::InlineMath(math) | Event::DisplayMath(math) => {
                tracing::debug!("Math is not supported, keeping source text");
                self.text(&math);
            }
        }
    }

    fn open(&mut self, tag: Tag<'_>) {
        if self.skipping() {
            self.stack.push(Frame::Skipped);
            return;
        }
        let kind = match tag {
            Tag::Paragraph => NodeKind::Paragraph,
            Tag::Heading { level, .. } => NodeKind::Heading {
                level: heading_level_to_num(level),
            },
            Tag::BlockQuote(_) => NodeKind::Blockquote,
            Tag::CodeBlock(kind) => NodeKind::FencedCodeBlock {
                language: fence_language(&kind),
                lines: String::new(),
            },
            Tag::List(start) => NodeKind::List {
                ordered: start.is_some(),
                start: start.unwrap_or(1),
            },
            Tag::Item => NodeKind::ListItem,
            Tag::FootnoteDefinition(label) => match self.labels.index(&label) {
                Some(index) => NodeKind::Footnote { index },
                None => {
                    tracing::debug!(label = %label, "Dropping unreferenced footnote");
                    self.stack.push(Frame::Skipped);
                    return;
                }
            },
            Tag::HtmlBlock => NodeKind::HtmlBlock {
                lines: String::new(),
            },
            Tag::Table(alignments) => NodeKind::Table {
                alignments: alignments.into_iter().map(Into::into).collect(),
            },
            Tag::TableHead => NodeKind::TableHeader,
            Tag::TableRow => NodeKind::TableRow,
            Tag::TableCell => NodeKind::TableCell,
            Tag::Emphasis => NodeKind::Emphasis { level: 1 },
            Tag::Strong => NodeKind::Emphasis { level: 2 },
            Tag::Strikethrough => NodeKind::Strikethrough,
            Tag::Link {
                link_type,
                dest_url,
                title,
                ..
            } => match link_type {
                LinkType::Autolink => NodeKind::AutoLink {
                    url: dest_url.into_string(),
                },
                LinkType::Email => NodeKind::AutoLink {
                    url: format!("mailto:{dest_url}"),
                },
                _ => NodeKind::Link {
                    destination: dest_url.into_string(),
                    title: title.into_string(),
                },
            },
            Tag::Image {
                dest_url, title, ..
            } => NodeKind::Image {
                destination: dest_url.into_string(),
                title: title.into_string(),
            },
            Tag::MetadataBlock(_) => {
                self.stack.push(Frame::Skipped);
                return;
            }
            Tag::DefinitionList
            | Tag::DefinitionListTitle
            | Tag::DefinitionListDefinition
            | Tag::Superscript
            | Tag::Subscript => {
                tracing::debug!("Unsupported markdown element, keeping its content");
                self.stack.push(Frame::Transparent);
                return;
            }
        };
        self.stack.push(Frame::Node(Node::new(kind)));
    }

    fn close(&mut self) {
        if let Some(Frame::Node(mut node)) = self.stack.pop() {
            if matches!(node.kind, NodeKind::AutoLink { .. }) {
                // The link text repeats the URL.
                node.children.clear();
            }
            if !self.skipping() {
                self.append(node);
            }
        }
    }

    fn append(&mut self, node: Node) {
        let parent = self.current();
        if let (NodeKind::Text(new), Some(Node {
            kind: NodeKind::Text(last),
            ..
        })) = (&node.kind, parent.children.last_mut())
        {
            last.push_str(new);
            return;
        }
        parent.children.push(node);
    }

    fn text(&mut self, text: &CowStr<'_>) {
        match &mut self.current().kind {
            NodeKind::FencedCodeBlock { lines, .. } | NodeKind::HtmlBlock { lines } => {
                lines.push_str(text);
            }
            _ => self.append(Node::text(text.to_string())),
        }
    }

    fn html(&mut self, html: &CowStr<'_>) {
        if let NodeKind::HtmlBlock { lines } = &mut self.current().kind {
            lines.push_str(html);
        } else {
            self.append(Node::new(NodeKind::RawHtml(html.to_string())));
        }
    }
}

/// Language of a code block: the first word of the fence info string.
fn fence_language(kind: &CodeBlockKind<'_>) -> Option<String> {
    match kind {
        CodeBlockKind::Fenced(info) => info
            .split(|c: char| c.is_whitespace() || c == ',')
            .next()
            .filter(|lang| !lang.is_empty())
            .map(str::to_owned),
        CodeBlockKind::Indented => None,
    }
}
