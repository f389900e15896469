//! One render invocation: collect footnotes, then write the document.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use bookadoc_book::RenderContext;
use bookadoc_config::Config;

use crate::asciidoc::AsciidocEmitter;
use crate::assets::AssetResolver;
use crate::book::walk_book;
use crate::error::RenderError;
use crate::footnotes::{FootnoteCollector, FootnoteTable};

/// Name of the generated document inside the destination directory.
pub const OUTPUT_FILENAME: &str = "output.adoc";

/// What a render produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderSummary {
    /// Path of the generated document.
    pub output_path: PathBuf,
    /// Number of footnotes defined in the book.
    pub footnotes: usize,
    /// Number of local images copied.
    pub assets_copied: usize,
    /// Number of chapters rendered.
    pub chapters: usize,
}

/// Render the book described by `ctx` into `<destination>/output.adoc`.
///
/// Local images are copied under the destination directory. On error the
/// output file may be left incomplete.
///
/// # Errors
///
/// Returns the first error raised while collecting footnotes, emitting the
/// document or copying assets.
pub fn render(ctx: &RenderContext, config: &Config) -> Result<RenderSummary, RenderError> {
    fs::create_dir_all(&ctx.destination)?;
    let output_path = ctx.destination.join(OUTPUT_FILENAME);

    let mut writer = BufWriter::new(File::create(&output_path)?);
    let mut summary = render_to_writer(ctx, config, &mut writer)?;
    writer.flush()?;

    summary.output_path = output_path;
    tracing::info!(
        output = %summary.output_path.display(),
        chapters = summary.chapters,
        footnotes = summary.footnotes,
        assets = summary.assets_copied,
        "Rendered book"
    );
    Ok(summary)
}

/// Render the book described by `ctx` into `out`.
///
/// Assets are still copied into the context's destination directory. The
/// returned summary has an empty `output_path`.
///
/// # Errors
///
/// Returns the first error raised while collecting footnotes, emitting the
/// document or copying assets.
pub fn render_to_writer<W: Write>(
    ctx: &RenderContext,
    config: &Config,
    out: W,
) -> Result<RenderSummary, RenderError> {
    let source_dir = ctx.source_dir();
    let assets = AssetResolver::new(&source_dir, &ctx.destination);

    let footnotes = collect_footnotes(ctx, assets, config)?;
    tracing::debug!(footnotes = footnotes.len(), "Collected footnotes");

    let mut emitter = AsciidocEmitter::new(out, assets, config, &footnotes);
    emitter.write_preamble(&ctx.config.book)?;
    walk_book(&ctx.book.sections, &mut emitter)?;

    Ok(RenderSummary {
        output_path: PathBuf::new(),
        footnotes: footnotes.len(),
        assets_copied: emitter.assets_copied(),
        chapters: emitter.chapters(),
    })
}

fn collect_footnotes(
    ctx: &RenderContext,
    assets: AssetResolver<'_>,
    config: &Config,
) -> Result<FootnoteTable, RenderError> {
    let mut collector = FootnoteCollector::new(assets, config);
    walk_book(&ctx.book.sections, &mut collector)?;
    Ok(collector.into_table())
}

#[cfg(test)]
mod tests {
    use super::*;
    use bookadoc_book::{Book, BookItem, Chapter};
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn context(root: &std::path::Path, sections: Vec<BookItem>) -> RenderContext {
        let mut ctx = RenderContext {
            root: root.to_path_buf(),
            destination: root.join("book/asciidoc"),
            book: Book::new(sections),
            ..RenderContext::default()
        };
        ctx.config.book.title = Some("Demo".to_owned());
        ctx
    }

    fn render_string(ctx: &RenderContext, config: &Config) -> String {
        let mut out = Vec::new();
        render_to_writer(ctx, config, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_numbered_chapter_with_paragraph() {
        let temp = TempDir::new().unwrap();
        let ctx = context(
            temp.path(),
            vec![BookItem::Chapter(
                Chapter::new("Widgets", "Hello").with_number([1, 2]),
            )],
        );
        let output = render_string(&ctx, &Config::default());
        assert!(output.ends_with("\n<<<\n\n=== 1.2 Widgets\n\nHello\n"));
    }

    #[test]
    fn test_unordered_list_items() {
        let temp = TempDir::new().unwrap();
        let ctx = context(
            temp.path(),
            vec![BookItem::Chapter(
                Chapter::new("Lists", "- first\n- second\n").with_number([1]),
            )],
        );
        let output = render_string(&ctx, &Config::default());
        let items: Vec<_> = output.lines().filter(|l| l.starts_with('*')).collect();
        assert_eq!(items, vec!["* first", "* second"]);
    }

    #[test]
    fn test_min_heading_level_drops_top_heading() {
        let temp = TempDir::new().unwrap();
        let ctx = context(
            temp.path(),
            vec![BookItem::Chapter(
                Chapter::new("Guide", "# Guide title\n\n## Install\n").with_number([1]),
            )],
        );
        let config = Config {
            min_heading_level: 2,
        };
        let output = render_string(&ctx, &config);
        assert!(!output.contains("Guide title"));
        assert!(output.contains("\n[discrete]\n== Install\n"));
    }

    #[test]
    fn test_forward_footnote_reference() {
        let temp = TempDir::new().unwrap();
        let ctx = context(
            temp.path(),
            vec![
                BookItem::Chapter(Chapter::new("One", "See[^a].\n\n[^a]: Early.\n").with_number([1])),
                BookItem::Chapter(
                    Chapter::new("Two", "Back[^b] to[^a].\n\n[^a]: Alpha.\n\n[^b]: Beta.\n")
                        .with_number([2]),
                ),
            ],
        );
        let output = render_string(&ctx, &Config::default());

        assert!(output.contains(":fn-1: footnote:[Early.]\n"));
        assert!(output.contains(":fn-2: footnote:[Beta.]\n"));
        assert!(output.contains(":fn-3: footnote:[Alpha.]\n"));
        assert!(output.contains("\nSee{fn-1}.\n"));
        assert!(output.contains("\nBack{fn-2} to{fn-3}.\n"));
    }

    #[test]
    fn test_render_writes_output_and_copies_image() {
        let temp = TempDir::new().unwrap();
        let image_dir = temp.path().join("src/ch1");
        fs::create_dir_all(&image_dir).unwrap();
        fs::write(image_dir.join("diagram.png"), b"diagram bytes").unwrap();

        let ctx = context(
            temp.path(),
            vec![BookItem::Chapter(
                Chapter::new("Intro", "![](./diagram.png)")
                    .with_number([1])
                    .with_source_path("ch1/intro.md"),
            )],
        );

        let summary = render(&ctx, &Config::default()).unwrap();

        assert_eq!(
            summary,
            RenderSummary {
                output_path: ctx.destination.join(OUTPUT_FILENAME),
                footnotes: 0,
                assets_copied: 1,
                chapters: 1,
            }
        );
        let output = fs::read_to_string(&summary.output_path).unwrap();
        assert!(output.contains("image:ch1/diagram.png[]"));
        assert_eq!(
            fs::read(ctx.destination.join("ch1/diagram.png")).unwrap(),
            b"diagram bytes"
        );
    }

    #[test]
    fn test_render_is_idempotent() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("src")).unwrap();
        fs::write(temp.path().join("src/logo.png"), b"logo").unwrap();
        let ctx = context(
            temp.path(),
            vec![
                BookItem::Chapter(Chapter::new("Preface", "Hi[^1].\n\n[^1]: Note.\n")),
                BookItem::Separator,
                BookItem::Chapter(
                    Chapter::new("One", "![Logo](logo.png)\n\n| a |\n|---|\n| b |\n")
                        .with_number([1])
                        .with_source_path("one.md"),
                ),
            ],
        );

        let first = render(&ctx, &Config::default()).unwrap();
        let first_output = fs::read(&first.output_path).unwrap();
        let second = render(&ctx, &Config::default()).unwrap();
        let second_output = fs::read(&second.output_path).unwrap();

        assert_eq!(first, second);
        assert_eq!(first_output, second_output);
        assert_eq!(fs::read(ctx.destination.join("logo.png")).unwrap(), b"logo");
    }

    #[test]
    fn test_invalid_book_item_aborts() {
        let temp = TempDir::new().unwrap();
        let ctx = context(
            temp.path(),
            vec![BookItem::Unrecognized(serde_json::json!({"Draft": null}))],
        );
        let err = render(&ctx, &Config::default()).unwrap_err();
        assert!(matches!(err, RenderError::InvalidBookItem));
    }

    #[test]
    fn test_missing_image_aborts() {
        let temp = TempDir::new().unwrap();
        let ctx = context(
            temp.path(),
            vec![BookItem::Chapter(
                Chapter::new("One", "![](gone.png)").with_number([1]),
            )],
        );
        let err = render(&ctx, &Config::default()).unwrap_err();
        assert_eq!(err.io_kind(), Some(std::io::ErrorKind::NotFound));
    }

    #[test]
    fn test_custom_source_dir() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("docs")).unwrap();
        fs::write(temp.path().join("docs/a.png"), b"a").unwrap();
        let mut ctx = context(
            temp.path(),
            vec![BookItem::Chapter(Chapter::new("One", "![](a.png)").with_number([1]))],
        );
        ctx.config.book.src = Some("docs".into());

        let summary = render(&ctx, &Config::default()).unwrap();

        assert_eq!(summary.assets_copied, 1);
        assert!(ctx.destination.join("a.png").exists());
    }
}
