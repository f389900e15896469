//! Local image assets.
//!
//! Images referenced by a relative or `file:` URL live next to the chapter
//! that references them. They are copied into the output directory under the
//! same relative path, and the emitted image macro points at that copy.

use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};

use percent_encoding::percent_decode_str;
use url::Url;

use crate::error::RenderError;
use crate::util::clean_path;

/// Where an image destination points to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ImageTarget {
    /// Image inside the book sources; must be copied.
    Local {
        /// Resolved source file.
        source: PathBuf,
        /// Copy target inside the output directory.
        destination: PathBuf,
        /// Output-relative path emitted in the document.
        relative: String,
    },
    /// Image elsewhere; emitted unchanged.
    Remote(String),
}

impl ImageTarget {
    /// Destination to write into the image macro.
    #[must_use]
    pub fn emitted(&self) -> &str {
        match self {
            Self::Local { relative, .. } => relative,
            Self::Remote(url) => url,
        }
    }
}

/// Maps image URLs found in chapters to files on disk.
#[derive(Clone, Copy, Debug)]
pub struct AssetResolver<'a> {
    source_dir: &'a Path,
    destination: &'a Path,
}

impl<'a> AssetResolver<'a> {
    /// Resolver for a book whose sources live in `source_dir`, rendering into `destination`.
    #[must_use]
    pub fn new(source_dir: &'a Path, destination: &'a Path) -> Self {
        Self {
            source_dir,
            destination,
        }
    }

    /// Resolve `url` as written in a chapter located in `chapter_dir`
    /// (relative to the source directory).
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::ImageUrl`] if `url` is neither a relative
    /// reference nor an absolute URL.
    pub fn resolve_image(&self, chapter_dir: &Path, url: &str) -> Result<ImageTarget, RenderError> {
        let path = match Url::parse(url) {
            Ok(parsed) if parsed.scheme() == "file" => decode_path(parsed.path()),
            Ok(_) => return Ok(ImageTarget::Remote(url.to_owned())),
            Err(url::ParseError::RelativeUrlWithoutBase) => decode_path(strip_suffixes(url)),
            Err(source) => {
                return Err(RenderError::ImageUrl {
                    url: url.to_owned(),
                    source,
                });
            }
        };

        let relative = clean_path(&chapter_dir.join(path.trim_start_matches('/')));
        Ok(ImageTarget::Local {
            source: self.source_dir.join(&relative),
            destination: self.destination.join(&relative),
            relative,
        })
    }
}

/// Drop the query and fragment of a relative reference.
fn strip_suffixes(url: &str) -> &str {
    url.find(['?', '#']).map_or(url, |end| &url[..end])
}

fn decode_path(path: &str) -> String {
    percent_decode_str(path).decode_utf8_lossy().into_owned()
}

/// Copy `from` to `to`, creating the parent directories of `to`.
///
/// A failed copy may leave a truncated file at `to`.
///
/// # Errors
///
/// Returns [`RenderError::Asset`] if the source cannot be opened, the
/// target cannot be created, or copying fails.
pub fn copy_asset(from: &Path, to: &Path) -> Result<u64, RenderError> {
    let wrap = |source: io::Error| RenderError::Asset {
        from: from.to_path_buf(),
        to: to.to_path_buf(),
        source,
    };

    let mut reader = File::open(from).map_err(wrap)?;
    if let Some(parent) = to.parent() {
        fs::create_dir_all(parent).map_err(wrap)?;
    }
    let mut writer = File::create(to).map_err(wrap)?;
    let bytes = io::copy(&mut reader, &mut writer).map_err(wrap)?;

    tracing::debug!(from = %from.display(), to = %to.display(), bytes, "Copied asset");
    Ok(bytes)
}
