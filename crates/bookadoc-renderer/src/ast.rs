//! Markdown node model.
//!
//! A closed set of node kinds the renderer knows how to emit. Trees are
//! built from the parser's event stream by [`parse_markdown`](crate::parse_markdown)
//! and are never mutated afterwards.

/// Column alignment of a table.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Alignment {
    #[default]
    None,
    Left,
    Center,
    Right,
}

impl From<pulldown_cmark::Alignment> for Alignment {
    fn from(alignment: pulldown_cmark::Alignment) -> Self {
        match alignment {
            pulldown_cmark::Alignment::None => Self::None,
            pulldown_cmark::Alignment::Left => Self::Left,
            pulldown_cmark::Alignment::Center => Self::Center,
            pulldown_cmark::Alignment::Right => Self::Right,
        }
    }
}

/// Kind of a node, with the data specific to it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NodeKind {
    Document,
    Heading {
        level: u8,
    },
    Paragraph,
    Text(String),
    /// Soft (`hard == false`) or hard line break inside inline content.
    LineBreak {
        hard: bool,
    },
    /// Level 1 is regular emphasis, level 2 is strong emphasis.
    Emphasis {
        level: u8,
    },
    Strikethrough,
    CodeSpan,
    /// Fenced or indented code block; `lines` holds the raw content.
    FencedCodeBlock {
        language: Option<String>,
        lines: String,
    },
    HtmlBlock {
        lines: String,
    },
    /// Inline HTML.
    RawHtml(String),
    Blockquote,
    List {
        ordered: bool,
        start: u64,
    },
    ListItem,
    TaskCheckBox {
        checked: bool,
    },
    Link {
        destination: String,
        title: String,
    },
    /// Image; children hold the alt text.
    Image {
        destination: String,
        title: String,
    },
    AutoLink {
        url: String,
    },
    ThematicBreak,
    Table {
        alignments: Vec<Alignment>,
    },
    TableHeader,
    TableRow,
    TableCell,
    /// Footnote definition. `index` is local to the chapter, starting at 1.
    Footnote {
        index: usize,
    },
    /// Footnote reference.
    FootnoteLink {
        index: usize,
    },
    FootnoteBacklink,
}

/// A node and its children, in document order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Node {
    pub kind: NodeKind,
    pub children: Vec<Node>,
}

impl Node {
    /// Create a node without children.
    #[must_use]
    pub fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            children: Vec::new(),
        }
    }

    /// Create a text node.
    #[must_use]
    pub fn text(value: impl Into<String>) -> Self {
        Self::new(NodeKind::Text(value.into()))
    }

    /// Replace the children of this node.
    #[must_use]
    pub fn with_children(mut self, children: Vec<Node>) -> Self {
        self.children = children;
        self
    }

    /// Whether the first child is a table header row.
    #[must_use]
    pub fn has_table_header(&self) -> bool {
        self.children
            .first()
            .is_some_and(|child| child.kind == NodeKind::TableHeader)
    }

    /// Concatenated text of all descendant text nodes.
    #[must_use]
    pub fn plain_text(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match &self.kind {
            NodeKind::Text(value) | NodeKind::RawHtml(value) => out.push_str(value),
            NodeKind::LineBreak { .. } => out.push(' '),
            _ => {}
        }
        for child in &self.children {
            child.collect_text(out);
        }
    }
}
