//! Format trait and implementations for different stylesheet syntaxes.
//!
//! This module defines the `Format` trait which abstracts over the grammar used to build
//! a [`Stylesheet`](crate::stylesheet::Stylesheet), so that dialects sharing the
//! `/* ... */` comment form (plain CSS, SCSS, Less) can plug in their own tree-sitter
//! language.

pub mod css;

/// A tree-sitter grammar plus the node kind it uses for block comments.
pub trait Format {
    /// Grammar used to parse the source.
    fn language(&self) -> tree_sitter::Language;
    /// Node kind that holds `/* ... */` comments.
    fn comment_kind(&self) -> &str;
}
