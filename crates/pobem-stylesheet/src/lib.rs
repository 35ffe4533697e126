//! Lossless CSS stylesheet tree for pobem.
//!
//! This crate provides the stylesheet model the BEM transform operates on:
//!
//! - **Tree**: rules, at-rules, declarations and comments with their raw
//!   formatting preserved
//! - **Parsing**: build a tree from CSS text using the `cssparser` tokenizer
//! - **Printing**: `Display` reproduces the original text for unmodified trees
//! - **Walking**: mutable pre-order traversal for in-place rewrites
//!
//! # Example
//!
//! ```
//! use pobem_stylesheet::{Node, Stylesheet};
//!
//! let mut sheet = Stylesheet::parse("a { color: red; }").unwrap();
//! sheet.walk_rules_mut(|rule| rule.selector = "b".to_string());
//!
//! assert_eq!(sheet.to_string(), "b { color: red; }");
//! assert!(matches!(sheet.nodes[0], Node::Rule(_)));
//! ```

pub mod node;
mod parser;
mod print;

mod error;

pub use error::{Error, Result};
pub use node::{AtRule, Comment, Declaration, Location, Node, Raws, Rule, Stylesheet};
pub use parser::parse_stylesheet;
