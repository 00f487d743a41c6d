//! CSS format implementation using tree-sitter-css.

use crate::formats::Format;

/// Plain CSS stylesheets.
pub struct CssFormat;

impl Format for CssFormat {
    fn language(&self) -> tree_sitter::Language {
        tree_sitter_css::LANGUAGE.into()
    }

    fn comment_kind(&self) -> &'static str {
        "comment"
    }
}
