//! The outline pass: collect headings, then rewrite placeholders.
//!
//! Every comment is visited once in document order. A comment whose first line contains
//! the block identifier is a placeholder; this check comes first, so a generated block
//! (which starts and ends with dash-led identifier lines) is never mistaken for a
//! heading on a later run. Any other comment accepted by the filter contributes one
//! outline line. Placeholders are only rewritten once the whole tree has been seen.

use crate::diagnostics::{Diagnostics, Warning};
use crate::options::TocOptions;
use crate::outline::build_outline;
use crate::stylesheet::{NodePath, Stylesheet};
use tracing::debug;

/// Warning raised when no comment qualifies as a heading.
pub const NO_LINES_WARNING: &str = "No table of content lines found.";
/// Warning raised when no comment carries the block identifier.
pub const NO_INSERTION_WARNING: &str = "No insertion locations found.";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
/// What a transform found and did.
pub struct TransformSummary {
    /// Heading comments turned into outline lines.
    pub headings: usize,
    /// Placeholder comments found.
    pub placeholders: usize,
    /// Whether placeholders were rewritten.
    pub rewritten: bool,
}

/// Build the outline for `sheet` and write it into every placeholder comment.
///
/// Missing headings and missing placeholders are reported to `diagnostics`
/// independently; in either case the tree is left untouched.
pub fn transform(
    sheet: &mut Stylesheet,
    diagnostics: &mut impl Diagnostics,
    options: &TocOptions,
) -> TransformSummary {
    let mut toc_lines = Vec::new();
    let mut insertion_points: Vec<NodePath> = Vec::new();

    sheet.walk_comments(|path, comment| {
        if comment.first_line().contains(options.block_identifier.as_str()) {
            debug!(%path, "placeholder");
            insertion_points.push(path.clone());
        } else if (options.text_filter)(comment, options) {
            let line = (options.text_formatter)(comment, options);
            debug!(%path, line = %line, "heading");
            toc_lines.push(line);
        }
    });

    if toc_lines.is_empty() {
        diagnostics.warn(Warning::at_root(NO_LINES_WARNING));
    }
    if insertion_points.is_empty() {
        diagnostics.warn(Warning::at_root(NO_INSERTION_WARNING));
    }

    debug!(
        headings = toc_lines.len(),
        placeholders = insertion_points.len(),
        "walk complete"
    );
    let mut summary = TransformSummary {
        headings: toc_lines.len(),
        placeholders: insertion_points.len(),
        rewritten: false,
    };
    if toc_lines.is_empty() || insertion_points.is_empty() {
        return summary;
    }

    let toc = build_outline(&toc_lines, options);
    for path in insertion_points.iter().rev() {
        if let Some(comment) = sheet.comment_mut(path) {
            comment.text.clone_from(&toc);
        }
    }
    summary.rewritten = true;
    summary
}

#[cfg(test)]
#[path = "tests/transform.rs"]
mod tests;
