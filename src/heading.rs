//! Heading comment detection and formatting.
//!
//! A heading comment is fenced by dash lines, with its title on the second line:
//!
//! ```text
//! ---
//! ## Buttons
//! ---
//! ```
//!
//! The run of `#` gives the depth, which becomes the indentation of the outline line.

use crate::options::TocOptions;
use crate::stylesheet::Comment;
use crate::LINE_ENDING;

const FENCE: &str = "---";

#[must_use]
/// Whether `text` spans several lines with a dash fence on the first and last line.
pub fn is_heading_candidate(text: &str) -> bool {
    let lines: Vec<&str> = text.split(LINE_ENDING).collect();
    match (lines.first(), lines.last()) {
        (Some(first), Some(last)) if lines.len() > 1 => {
            first.starts_with(FENCE) && last.starts_with(FENCE)
        }
        _ => false,
    }
}

#[must_use]
/// Format the heading on the second line of `text` as one indented outline line.
///
/// Depth is the number of leading `#`; the marker and the whitespace after it are
/// stripped, the first character is uppercased and the rest lowercased, and `pad` is
/// repeated once per level before a single space. Text with fewer than two lines yields
/// an empty string.
pub fn format_heading(text: &str, pad: &str) -> String {
    let Some(row) = text.split(LINE_ENDING).nth(1) else {
        return String::new();
    };

    let depth = row.chars().take_while(|&c| c == '#').count();
    let title = strip_depth_marker(row, depth);

    format!("{} {}", pad.repeat(depth), capitalize(title))
}

/// Drop `#`s followed by whitespace. A marker not followed by whitespace stays put.
fn strip_depth_marker(row: &str, depth: usize) -> &str {
    if depth == 0 {
        return row;
    }
    let rest = &row[depth..];
    let title = rest.trim_start();
    if title.len() < rest.len() {
        title
    } else {
        row
    }
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.as_str().to_lowercase().chars())
            .collect(),
        None => String::new(),
    }
}

#[must_use]
/// Default heading filter: [`is_heading_candidate`] over the comment text.
pub fn text_filter(comment: &Comment, _options: &TocOptions) -> bool {
    is_heading_candidate(&comment.text)
}

#[must_use]
/// Default heading formatter: [`format_heading`] with the configured pad.
pub fn text_formatter(comment: &Comment, options: &TocOptions) -> String {
    format_heading(&comment.text, &options.pad_depth_char)
}

#[cfg(test)]
#[path = "tests/heading.rs"]
mod tests;
