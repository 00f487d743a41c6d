//! Behavioral knobs for a single transform.
//!
//! The three strategy slots are plain function pointers so a caller can swap the
//! heading filter, the line formatter or the block template without touching the walk.
//! Partial option sets layer over a base with [`TocOptions::merge`].

use crate::heading::{text_filter, text_formatter};
use crate::outline::toc_template;
use crate::stylesheet::Comment;

/// Character repeated once per heading level to indent outline lines.
pub const DEFAULT_PAD_DEPTH_CHAR: &str = "-";
/// Marker that designates the placeholder comment and fences the generated block.
pub const DEFAULT_BLOCK_IDENTIFIER: &str = "--- csstoc ---";

/// Decides whether a comment becomes an outline entry.
pub type TextFilter = fn(&Comment, &TocOptions) -> bool;
/// Turns an accepted comment into one outline line.
pub type TextFormatter = fn(&Comment, &TocOptions) -> String;
/// Wraps the joined outline body into the placeholder text.
pub type TocTemplate = fn(&str, &TocOptions) -> String;

#[derive(Clone, Debug)]
/// Complete option set for one transform.
pub struct TocOptions {
    /// Indentation unit, repeated once per heading level.
    pub pad_depth_char: String,
    /// Placeholder marker, also written as the first and last line of the block.
    pub block_identifier: String,
    /// Heading selection strategy.
    pub text_filter: TextFilter,
    /// Heading formatting strategy.
    pub text_formatter: TextFormatter,
    /// Block template strategy.
    pub toc_template: TocTemplate,
}

impl Default for TocOptions {
    fn default() -> Self {
        Self {
            pad_depth_char: DEFAULT_PAD_DEPTH_CHAR.to_string(),
            block_identifier: DEFAULT_BLOCK_IDENTIFIER.to_string(),
            text_filter,
            text_formatter,
            toc_template,
        }
    }
}

impl TocOptions {
    #[must_use]
    /// Overlay every field set in `partial`, keeping the rest.
    pub fn merge(self, partial: PartialOptions) -> Self {
        Self {
            pad_depth_char: partial.pad_depth_char.unwrap_or(self.pad_depth_char),
            block_identifier: partial.block_identifier.unwrap_or(self.block_identifier),
            text_filter: partial.text_filter.unwrap_or(self.text_filter),
            text_formatter: partial.text_formatter.unwrap_or(self.text_formatter),
            toc_template: partial.toc_template.unwrap_or(self.toc_template),
        }
    }
}

impl From<PartialOptions> for TocOptions {
    fn from(partial: PartialOptions) -> Self {
        Self::default().merge(partial)
    }
}

#[derive(Clone, Debug, Default)]
/// Option set where every field may be left unspecified.
pub struct PartialOptions {
    /// See [`TocOptions::pad_depth_char`].
    pub pad_depth_char: Option<String>,
    /// See [`TocOptions::block_identifier`].
    pub block_identifier: Option<String>,
    /// See [`TocOptions::text_filter`].
    pub text_filter: Option<TextFilter>,
    /// See [`TocOptions::text_formatter`].
    pub text_formatter: Option<TextFormatter>,
    /// See [`TocOptions::toc_template`].
    pub toc_template: Option<TocTemplate>,
}

impl PartialOptions {
    #[must_use]
    /// Combine two layers, with fields set in `over` winning.
    pub fn layer(self, over: Self) -> Self {
        Self {
            pad_depth_char: over.pad_depth_char.or(self.pad_depth_char),
            block_identifier: over.block_identifier.or(self.block_identifier),
            text_filter: over.text_filter.or(self.text_filter),
            text_formatter: over.text_formatter.or(self.text_formatter),
            toc_template: over.toc_template.or(self.toc_template),
        }
    }
}

#[cfg(test)]
#[path = "tests/options.rs"]
mod tests;
