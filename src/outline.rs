//! Outline assembly and the block template written into placeholders.

use crate::options::TocOptions;
use crate::LINE_ENDING;

/// Banner title above the outline.
pub const TITLE: &str = "Table of Contents";
/// Underline below the banner title.
pub const UNDERLINE: &str = "=================";

#[must_use]
/// Join formatted heading lines into the outline body.
pub fn join_lines(lines: &[String]) -> String {
    lines.join(LINE_ENDING)
}

#[must_use]
/// Default template: the body fenced by the block identifier under a title banner.
pub fn toc_template(content: &str, options: &TocOptions) -> String {
    [
        options.block_identifier.as_str(),
        "",
        TITLE,
        UNDERLINE,
        "",
        content,
        "",
        options.block_identifier.as_str(),
    ]
    .join(LINE_ENDING)
}

#[must_use]
/// Join `lines` and wrap them with the configured template.
pub fn build_outline(lines: &[String], options: &TocOptions) -> String {
    (options.toc_template)(&join_lines(lines), options)
}

#[cfg(test)]
#[path = "tests/outline.rs"]
mod tests;
