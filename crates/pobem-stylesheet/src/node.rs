//! Stylesheet tree definitions.
//!
//! The tree keeps every byte of the source it was parsed from: text that is
//! not part of a selector, name, parameter list or value is carried in
//! [`Raws`] so printing an untouched tree reproduces the input exactly.

use crate::Result;

/// Raw formatting attached to a node.
///
/// Which fields are meaningful depends on the node kind:
///
/// | field        | rule | at-rule | declaration | comment | stylesheet |
/// |--------------|------|---------|-------------|---------|------------|
/// | `before`     | yes  | yes     | yes         | yes     |            |
/// | `between`    | yes  | yes     | yes         |         |            |
/// | `after_name` |      | yes     |             |         |            |
/// | `after`      | yes  | yes     | yes         |         | yes        |
/// | `semicolon`  |      | yes     | yes         |         |            |
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Raws {
    /// Text preceding the node (whitespace and stray semicolons).
    pub before: String,
    /// Text between the selector/params/property and the body or value.
    pub between: String,
    /// Whitespace between an at-rule name and its params.
    pub after_name: String,
    /// Text after the last child of a container, or after a declaration value.
    pub after: String,
    /// Whether the statement is terminated by `;`.
    pub semicolon: bool,
}

/// Start position of a node in its source (1-indexed).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Location {
    /// Line number.
    pub line: u32,
    /// Column number.
    pub column: u32,
}

impl Location {
    /// Create a new location.
    pub fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }
}

/// A qualified rule: `selector { ... }`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Rule {
    /// Selector text, without trailing whitespace.
    pub selector: String,
    /// Child nodes inside the braces.
    pub nodes: Vec<Node>,
    /// Formatting.
    pub raws: Raws,
    /// Where the rule starts in the source.
    pub source: Option<Location>,
}

impl Rule {
    /// Create an empty rule with the given selector.
    pub fn new(selector: impl Into<String>) -> Self {
        Self {
            selector: selector.into(),
            ..Default::default()
        }
    }
}

/// An at-rule: `@name params;` or `@name params { ... }`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AtRule {
    /// Name without the leading `@`.
    pub name: String,
    /// Parameter text, trimmed.
    pub params: String,
    /// Child nodes, or `None` for a body-less at-rule.
    pub nodes: Option<Vec<Node>>,
    /// Formatting.
    pub raws: Raws,
    /// Where the at-rule starts in the source.
    pub source: Option<Location>,
}

impl AtRule {
    /// Create a body-less at-rule.
    pub fn new(name: impl Into<String>, params: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            params: params.into(),
            ..Default::default()
        }
    }
}

/// A declaration: `prop: value`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Declaration {
    /// Property name.
    pub prop: String,
    /// Value, including any `!important`.
    pub value: String,
    /// Formatting. `between` holds the colon and its surrounding whitespace.
    pub raws: Raws,
    /// Where the declaration starts in the source.
    pub source: Option<Location>,
}

/// A comment: `/* text */`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Comment {
    /// Verbatim text between the comment delimiters.
    pub text: String,
    /// Formatting.
    pub raws: Raws,
    /// Where the comment starts in the source.
    pub source: Option<Location>,
}

/// Any node in a stylesheet tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Rule(Rule),
    AtRule(AtRule),
    Declaration(Declaration),
    Comment(Comment),
}

impl Node {
    /// Child nodes, for containers.
    pub fn children(&self) -> Option<&[Node]> {
        match self {
            Node::Rule(rule) => Some(&rule.nodes),
            Node::AtRule(at_rule) => at_rule.nodes.as_deref(),
            Node::Declaration(_) | Node::Comment(_) => None,
        }
    }

    /// Mutable child nodes, for containers.
    pub fn children_mut(&mut self) -> Option<&mut Vec<Node>> {
        match self {
            Node::Rule(rule) => Some(&mut rule.nodes),
            Node::AtRule(at_rule) => at_rule.nodes.as_mut(),
            Node::Declaration(_) | Node::Comment(_) => None,
        }
    }

    /// Where the node starts in the source.
    pub fn source(&self) -> Option<Location> {
        match self {
            Node::Rule(rule) => rule.source,
            Node::AtRule(at_rule) => at_rule.source,
            Node::Declaration(decl) => decl.source,
            Node::Comment(comment) => comment.source,
        }
    }
}

/// A parsed stylesheet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Stylesheet {
    /// Top-level nodes in source order.
    pub nodes: Vec<Node>,
    /// Formatting. Only `after` is used.
    pub raws: Raws,
}

impl Stylesheet {
    /// Create an empty stylesheet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a stylesheet from CSS text.
    pub fn parse(css: &str) -> Result<Self> {
        crate::parser::parse_stylesheet(css)
    }

    /// Get the number of top-level nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if the stylesheet has no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterate over top-level nodes.
    pub fn iter(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter()
    }

    /// Visit every node at every depth, parents before children.
    ///
    /// The callback may replace the node it is given; the walk then descends
    /// into the replacement's children.
    pub fn walk_mut<F: FnMut(&mut Node)>(&mut self, mut f: F) {
        walk_nodes(&mut self.nodes, &mut f);
    }

    /// Visit every rule at every depth.
    pub fn walk_rules_mut<F: FnMut(&mut Rule)>(&mut self, mut f: F) {
        self.walk_mut(|node| {
            if let Node::Rule(rule) = node {
                f(rule);
            }
        });
    }
}

fn walk_nodes<F: FnMut(&mut Node)>(nodes: &mut [Node], f: &mut F) {
    for node in nodes {
        f(node);
        if let Some(children) = node.children_mut() {
            walk_nodes(children, f);
        }
    }
}
