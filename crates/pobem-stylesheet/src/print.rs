//! Stylesheet printing.
//!
//! Nodes print their raws around their own text, so a tree fresh from the
//! parser prints back to its source unchanged.

use std::fmt::{self, Display, Formatter};

use crate::node::{AtRule, Comment, Declaration, Node, Rule, Stylesheet};

fn write_body(f: &mut Formatter<'_>, nodes: &[Node], after: &str) -> fmt::Result {
    f.write_str("{")?;
    for node in nodes {
        write!(f, "{}", node)?;
    }
    write!(f, "{}}}", after)
}

impl Display for Rule {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.raws.before, self.selector, self.raws.between)?;
        write_body(f, &self.nodes, &self.raws.after)
    }
}

impl Display for AtRule {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}@{}{}{}{}",
            self.raws.before, self.name, self.raws.after_name, self.params, self.raws.between
        )?;
        match &self.nodes {
            Some(nodes) => write_body(f, nodes, &self.raws.after),
            None if self.raws.semicolon => f.write_str(";"),
            None => Ok(()),
        }
    }
}

impl Display for Declaration {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{}{}{}",
            self.raws.before, self.prop, self.raws.between, self.value, self.raws.after
        )?;
        if self.raws.semicolon {
            f.write_str(";")?;
        }
        Ok(())
    }
}

impl Display for Comment {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}/*{}*/", self.raws.before, self.text)
    }
}

impl Display for Node {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Node::Rule(rule) => Display::fmt(rule, f),
            Node::AtRule(at_rule) => Display::fmt(at_rule, f),
            Node::Declaration(decl) => Display::fmt(decl, f),
            Node::Comment(comment) => Display::fmt(comment, f),
        }
    }
}

impl Display for Stylesheet {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for node in &self.nodes {
            write!(f, "{}", node)?;
        }
        f.write_str(&self.raws.after)
    }
}
