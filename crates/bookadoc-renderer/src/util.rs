//! Shared utility functions for rendering.

use std::path::{Component, Path};

use pulldown_cmark::HeadingLevel;

/// Lexically normalize a relative path into `/`-separated form.
///
/// `.` segments are dropped and `..` removes the preceding segment. Leading
/// `..` segments that cannot be resolved are kept. Root and prefix
/// components are ignored, so the result is always relative.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use bookadoc_renderer::clean_path;
///
/// assert_eq!(clean_path(Path::new("ch1/./diagram.png")), "ch1/diagram.png");
/// assert_eq!(clean_path(Path::new("ch1/../img/a.png")), "img/a.png");
/// assert_eq!(clean_path(Path::new("../shared/a.png")), "../shared/a.png");
/// ```
pub fn clean_path(path: &Path) -> String {
    let mut segments: Vec<String> = Vec::new();
    for component in path.components() {
        match component {
            Component::Normal(segment) => segments.push(segment.to_string_lossy().into_owned()),
            Component::ParentDir => {
                if segments.last().is_some_and(|last| last != "..") {
                    segments.pop();
                } else {
                    segments.push("..".to_owned());
                }
            }
            Component::CurDir | Component::RootDir | Component::Prefix(_) => {}
        }
    }
    segments.join("/")
}

/// Convert heading level enum to number (1-6).
#[must_use]
pub(crate) fn heading_level_to_num(level: HeadingLevel) -> u8 {
    match level {
        HeadingLevel::H1 => 1,
        HeadingLevel::H2 => 2,
        HeadingLevel::H3 => 3,
        HeadingLevel::H4 => 4,
        HeadingLevel::H5 => 5,
        HeadingLevel::H6 => 6,
    }
}
