//! Sink for the non-fatal conditions found while building an outline.

use crate::stylesheet::NodePath;
use std::fmt;

/// Name stamped on every warning this crate emits.
pub const PLUGIN_NAME: &str = "csstoc";

#[derive(Clone, Debug, PartialEq, Eq)]
/// A recoverable problem, optionally tied to a node.
pub struct Warning {
    /// Producer of the warning.
    pub plugin: &'static str,
    /// Human readable message.
    pub text: String,
    /// Node the warning refers to; the root path for stylesheet-wide conditions.
    pub node: Option<NodePath>,
}

impl Warning {
    #[must_use]
    /// Warning about the stylesheet as a whole.
    pub fn at_root(text: impl Into<String>) -> Self {
        Self {
            plugin: PLUGIN_NAME,
            text: text.into(),
            node: Some(NodePath::root()),
        }
    }
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.plugin, self.text)?;
        match &self.node {
            Some(node) if !node.is_root() => write!(f, " (at {node})"),
            _ => Ok(()),
        }
    }
}

/// Receiver of warnings raised during a transform.
pub trait Diagnostics {
    /// Record one warning.
    fn warn(&mut self, warning: Warning);
}

#[derive(Clone, Debug, Default)]
/// Collects warnings in the order they were raised.
pub struct Report {
    /// Warnings received so far.
    pub warnings: Vec<Warning>,
}

impl Report {
    #[must_use]
    /// Messages of all collected warnings.
    pub fn messages(&self) -> Vec<&str> {
        self.warnings.iter().map(|w| w.text.as_str()).collect()
    }
}

impl Diagnostics for Report {
    fn warn(&mut self, warning: Warning) {
        self.warnings.push(warning);
    }
}

#[cfg(test)]
#[path = "tests/diagnostics.rs"]
mod tests;
