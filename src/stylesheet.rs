//! Stylesheet tree built from a tree-sitter parse.
//!
//! Only comments carry editable content. Every other syntax node is kept as a [`Block`]
//! with its byte span and children, so that comments nested in rules and at-rules are
//! still visited in document order. Serialization splices each comment back into the
//! original source, leaving everything else byte for byte as it was.

use crate::error::{Error, Result};
use crate::formats::Format;
use crate::LINE_ENDING;
use std::fmt;
use std::ops::Range;
use tracing::debug;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
/// Whitespace between the comment delimiters and its text.
pub struct CommentRaws {
    /// Whitespace after `/*`.
    pub left: String,
    /// Whitespace before `*/`.
    pub right: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
/// A `/* ... */` comment with its delimiters and surrounding whitespace removed.
pub struct Comment {
    /// Trimmed comment body.
    pub text: String,
    /// Whitespace stripped from either side of `text`.
    pub raws: CommentRaws,
    /// Byte range of the whole comment, delimiters included, when parsed from source.
    pub span: Option<Range<usize>>,
}

impl Comment {
    #[must_use]
    /// Create a detached comment, rendered as `/* text */`.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            raws: CommentRaws {
                left: " ".to_string(),
                right: " ".to_string(),
            },
            span: None,
        }
    }

    #[must_use]
    /// Split raw comment source (`/*` through `*/`) into text and raws.
    ///
    /// Returns `None` when the delimiters are missing, as with an unterminated comment.
    pub fn from_source(raw: &str, span: Range<usize>) -> Option<Self> {
        let inner = raw.strip_prefix("/*")?.strip_suffix("*/")?;
        let text = inner.trim();
        let raws = if text.is_empty() {
            CommentRaws {
                left: inner.to_string(),
                right: String::new(),
            }
        } else {
            CommentRaws {
                left: inner[..inner.len() - inner.trim_start().len()].to_string(),
                right: inner[inner.trim_end().len()..].to_string(),
            }
        };
        Some(Self {
            text: text.to_string(),
            raws,
            span: Some(span),
        })
    }

    #[must_use]
    /// First line of the comment text.
    pub fn first_line(&self) -> &str {
        self.text.split(LINE_ENDING).next().unwrap_or_default()
    }

    #[must_use]
    /// Render the comment with its delimiters.
    pub fn to_css(&self) -> String {
        format!("/*{}{}{}*/", self.raws.left, self.text, self.raws.right)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
/// Any non-comment syntax node (rule set, at-rule, declaration, ...).
pub struct Block {
    /// Tree-sitter node kind.
    pub kind: String,
    /// Byte range in the source.
    pub span: Range<usize>,
    /// Named child nodes in source order.
    pub nodes: Vec<Node>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
/// Element of the stylesheet tree.
pub enum Node {
    /// A block comment.
    Comment(Comment),
    /// Everything else.
    Block(Block),
}

#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Child indices leading from the stylesheet root to a node.
pub struct NodePath(Vec<usize>);

impl NodePath {
    #[must_use]
    /// The stylesheet root itself.
    pub fn root() -> Self {
        Self::default()
    }

    #[must_use]
    /// Path of the `index`th child of this node.
    pub fn child(&self, index: usize) -> Self {
        let mut indices = self.0.clone();
        indices.push(index);
        Self(indices)
    }

    #[must_use]
    /// Index at each level, outermost first.
    pub fn indices(&self) -> &[usize] {
        &self.0
    }

    #[must_use]
    /// Whether this is the root path.
    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<usize>> for NodePath {
    fn from(indices: Vec<usize>) -> Self {
        Self(indices)
    }
}

impl fmt::Display for NodePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return f.write_str("root");
        }
        let parts: Vec<String> = self.0.iter().map(ToString::to_string).collect();
        f.write_str(&parts.join("."))
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
/// A parsed stylesheet: its source text and the node tree built over it.
pub struct Stylesheet {
    /// Original source the spans refer to.
    pub source: String,
    /// Top-level nodes in source order.
    pub nodes: Vec<Node>,
}

impl Stylesheet {
    #[must_use]
    /// Build a stylesheet from nodes with no backing source.
    pub fn from_nodes(nodes: Vec<Node>) -> Self {
        Self {
            source: String::new(),
            nodes,
        }
    }

    /// Parse `source` with the grammar supplied by `format`.
    ///
    /// Syntax errors do not fail the parse; tree-sitter recovers and the partial tree is
    /// used as is.
    ///
    /// # Errors
    ///
    /// Returns an error if the grammar cannot be loaded or the parser yields no tree.
    pub fn parse(source: impl Into<String>, format: &impl Format) -> Result<Self> {
        let source = source.into();
        let mut parser = tree_sitter::Parser::new();
        parser.set_language(&format.language())?;
        let tree = parser.parse(&source, None).ok_or(Error::Parse)?;

        let root = tree.root_node();
        if root.has_error() {
            debug!("stylesheet has syntax errors, using recovered tree");
        }

        let nodes = convert_children(root, &source, format.comment_kind());
        Ok(Self { source, nodes })
    }

    /// Visit every comment in document order with its path.
    pub fn walk_comments<'a, F>(&'a self, mut visit: F)
    where
        F: FnMut(&NodePath, &'a Comment),
    {
        walk(&self.nodes, &NodePath::root(), &mut visit);
    }

    #[must_use]
    /// Comment at `path`, if the path leads to one.
    pub fn comment(&self, path: &NodePath) -> Option<&Comment> {
        let (last, parents) = path.indices().split_last()?;
        let mut nodes = &self.nodes;
        for &index in parents {
            match nodes.get(index)? {
                Node::Block(block) => nodes = &block.nodes,
                Node::Comment(_) => return None,
            }
        }
        match nodes.get(*last)? {
            Node::Comment(comment) => Some(comment),
            Node::Block(_) => None,
        }
    }

    /// Mutable comment at `path`, if the path leads to one.
    pub fn comment_mut(&mut self, path: &NodePath) -> Option<&mut Comment> {
        let (last, parents) = path.indices().split_last()?;
        let mut nodes = &mut self.nodes;
        for &index in parents {
            match nodes.get_mut(index)? {
                Node::Block(block) => nodes = &mut block.nodes,
                Node::Comment(_) => return None,
            }
        }
        match nodes.get_mut(*last)? {
            Node::Comment(comment) => Some(comment),
            Node::Block(_) => None,
        }
    }

    #[must_use]
    /// Serialize back to CSS, re-rendering every comment that came from the source.
    pub fn to_css(&self) -> String {
        let mut out = String::with_capacity(self.source.len());
        let mut cursor = 0;
        self.walk_comments(|_, comment| {
            let Some(span) = &comment.span else {
                return;
            };
            if let Some(between) = self.source.get(cursor..span.start) {
                out.push_str(between);
                out.push_str(&comment.to_css());
                cursor = span.end;
            }
        });
        out.push_str(self.source.get(cursor..).unwrap_or_default());
        out
    }
}

fn walk<'a, F>(nodes: &'a [Node], parent: &NodePath, visit: &mut F)
where
    F: FnMut(&NodePath, &'a Comment),
{
    for (index, node) in nodes.iter().enumerate() {
        let path = parent.child(index);
        match node {
            Node::Comment(comment) => visit(&path, comment),
            Node::Block(block) => walk(&block.nodes, &path, visit),
        }
    }
}

fn convert_children(node: tree_sitter::Node<'_>, source: &str, comment_kind: &str) -> Vec<Node> {
    let mut cursor = node.walk();
    node.named_children(&mut cursor)
        .map(|child| convert(child, source, comment_kind))
        .collect()
}

fn convert(node: tree_sitter::Node<'_>, source: &str, comment_kind: &str) -> Node {
    let span = node.byte_range();
    if node.kind() == comment_kind {
        if let Some(comment) = source
            .get(span.clone())
            .and_then(|raw| Comment::from_source(raw, span.clone()))
        {
            return Node::Comment(comment);
        }
    }
    Node::Block(Block {
        kind: node.kind().to_string(),
        span,
        nodes: convert_children(node, source, comment_kind),
    })
}

#[cfg(test)]
#[path = "tests/stylesheet.rs"]
mod tests;
