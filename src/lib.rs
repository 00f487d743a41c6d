//! csstoc: build a table of contents from heading comments in a stylesheet.
//!
//! Heading comments are multi-line comments fenced by dash lines:
//!
//! ```css
//! /*
//! ---
//! ## Buttons
//! ---
//! */
//! ```
//!
//! A placeholder comment whose first line carries the block identifier
//! (`--- csstoc ---` by default) is rewritten with an indented outline of every heading
//! found in the stylesheet.
#![allow(clippy::multiple_crate_versions)]

pub mod config;
pub mod diagnostics;
pub mod edit_plan;
pub mod error;
pub mod formats;
pub mod heading;
pub mod input;
pub mod options;
pub mod outline;
pub mod stylesheet;
pub mod transform;

pub use diagnostics::{Diagnostics, Report, Warning};
pub use error::{Error, Result};
pub use options::{PartialOptions, TocOptions};
pub use stylesheet::{Comment, NodePath, Stylesheet};
pub use transform::{transform, TransformSummary};

/// Line separator used when splitting comment text and joining outline lines.
#[cfg(windows)]
pub const LINE_ENDING: &str = "\r\n";
/// Line separator used when splitting comment text and joining outline lines.
#[cfg(not(windows))]
pub const LINE_ENDING: &str = "\n";

/// Parse a CSS source and run the outline pass over it.
///
/// Warnings go to `diagnostics`. Returns the transformed tree together with the
/// [`TransformSummary`] of the pass; serialize the tree with
/// [`Stylesheet::to_css`] or diff it against the source with
/// [`EditPlan::for_stylesheet`](edit_plan::EditPlan::for_stylesheet).
///
/// # Errors
///
/// Returns an error if the CSS grammar cannot be loaded or parsing yields no tree.
pub fn process_css(
    source: &str,
    options: &TocOptions,
    diagnostics: &mut impl Diagnostics,
) -> Result<(Stylesheet, TransformSummary)> {
    let mut sheet = Stylesheet::parse(source, &formats::css::CssFormat)?;
    let summary = transform(&mut sheet, diagnostics, options);
    Ok((sheet, summary))
}

#[cfg(test)]
#[path = "tests/lib.rs"]
mod tests;
