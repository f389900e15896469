//! Book structure: chapters, separators and part titles.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Deserializer};

/// The book's table of contents.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Book {
    /// Top-level items in reading order.
    pub sections: Vec<BookItem>,
}

impl Book {
    /// Create a book from its top-level items.
    #[must_use]
    pub fn new(sections: Vec<BookItem>) -> Self {
        Self { sections }
    }
}

/// One entry in the book's table of contents.
///
/// The wire format is externally tagged: `{"Chapter": {...}}`, `"Separator"`
/// or `{"PartTitle": "..."}`. Anything else deserializes into
/// [`BookItem::Unrecognized`] so the walker can reject it with a proper
/// render error instead of failing the whole request.
#[derive(Clone, Debug, PartialEq)]
pub enum BookItem {
    /// A chapter with Markdown content and nested sub-chapters.
    Chapter(Chapter),
    /// A visual separator between groups of chapters.
    Separator,
    /// A part title grouping the chapters that follow it.
    PartTitle(String),
    /// An item this backend does not know how to render.
    Unrecognized(serde_json::Value),
}

#[derive(Deserialize)]
enum KnownBookItem {
    Chapter(Chapter),
    Separator,
    PartTitle(String),
}

impl KnownBookItem {
    const TAGS: [&'static str; 3] = ["Chapter", "Separator", "PartTitle"];

    /// Variant tag of an externally tagged value, if it has one.
    fn tag(value: &serde_json::Value) -> Option<&str> {
        match value {
            serde_json::Value::String(tag) => Some(tag.as_str()),
            serde_json::Value::Object(map) if map.len() == 1 => map.keys().next().map(String::as_str),
            _ => None,
        }
    }
}

impl<'de> Deserialize<'de> for BookItem {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = serde_json::Value::deserialize(deserializer)?;
        let known = KnownBookItem::tag(&value).is_some_and(|tag| KnownBookItem::TAGS.contains(&tag));
        if !known {
            return Ok(Self::Unrecognized(value));
        }

        let item = KnownBookItem::deserialize(value).map_err(serde::de::Error::custom)?;
        Ok(match item {
            KnownBookItem::Chapter(chapter) => Self::Chapter(chapter),
            KnownBookItem::Separator => Self::Separator,
            KnownBookItem::PartTitle(title) => Self::PartTitle(title),
        })
    }
}

/// A chapter of the book.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Chapter {
    /// Chapter title.
    pub name: String,
    /// Raw Markdown source.
    pub content: String,
    /// Hierarchical section number; empty for unnumbered chapters.
    #[serde(deserialize_with = "null_as_default")]
    pub number: Vec<u32>,
    /// Nested items.
    pub sub_items: Vec<BookItem>,
    /// Rendered output path, relative to the output directory.
    pub path: Option<PathBuf>,
    /// Source file path, relative to the book source directory.
    /// `None` for draft chapters.
    pub source_path: Option<PathBuf>,
    /// Names of the enclosing chapters.
    pub parent_names: Vec<String>,
}

impl Chapter {
    /// Create an unnumbered chapter with the given name and content.
    #[must_use]
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
            ..Self::default()
        }
    }

    /// Set the section number.
    #[must_use]
    pub fn with_number(mut self, number: impl Into<Vec<u32>>) -> Self {
        self.number = number.into();
        self
    }

    /// Set the source path.
    #[must_use]
    pub fn with_source_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.source_path = Some(path.into());
        self
    }

    /// Append a nested item.
    #[must_use]
    pub fn with_sub_item(mut self, item: BookItem) -> Self {
        self.sub_items.push(item);
        self
    }

    /// Identifier used to namespace chapter-local data such as footnotes.
    #[must_use]
    pub fn id(&self) -> ChapterId {
        ChapterId(join_number(&self.number, "-"))
    }

    /// Whether the chapter carries a section number.
    #[must_use]
    pub fn is_numbered(&self) -> bool {
        !self.number.is_empty()
    }

    /// Heading level of the chapter title: one below its nesting depth,
    /// or 2 for unnumbered chapters.
    #[must_use]
    pub fn heading_level(&self) -> usize {
        if self.number.is_empty() {
            2
        } else {
            self.number.len() + 1
        }
    }

    /// Chapter title prefixed with its dotted section number, e.g. `1.2 Widgets`.
    #[must_use]
    pub fn display_title(&self) -> String {
        if self.number.is_empty() {
            self.name.clone()
        } else {
            format!("{} {}", join_number(&self.number, "."), self.name)
        }
    }

    /// Directory of the source file, relative to the book source directory.
    ///
    /// Empty for chapters without a source path or with a top-level source file.
    #[must_use]
    pub fn source_dir(&self) -> &Path {
        self.source_path
            .as_deref()
            .and_then(Path::parent)
            .unwrap_or_else(|| Path::new(""))
    }
}

/// Chapter identifier: the `-`-joined section number, empty when unnumbered.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ChapterId(String);

impl ChapterId {
    /// Identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ChapterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn join_number(number: &[u32], separator: &str) -> String {
    number
        .iter()
        .map(u32::to_string)
        .collect::<Vec<_>>()
        .join(separator)
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
