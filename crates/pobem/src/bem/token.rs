//! BEM token definitions.

use std::fmt;

/// One of the three BEM keywords.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Keyword {
    /// `block(name)`
    Block,
    /// `elem(name)`
    Elem,
    /// `mod(name value)`
    Mod,
}

impl Keyword {
    /// All keywords, in the order the lexer tries them.
    pub const ALL: [Keyword; 3] = [Keyword::Block, Keyword::Elem, Keyword::Mod];

    /// Look up a keyword by exact, case-sensitive name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|keyword| keyword.as_str() == name)
    }

    /// The keyword as written in source.
    pub fn as_str(&self) -> &'static str {
        match self {
            Keyword::Block => "block",
            Keyword::Elem => "elem",
            Keyword::Mod => "mod",
        }
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A lexed piece of a selector clause.
///
/// Names are already cleaned (see [`clean_value`]); literals borrow the
/// original selector text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token<'a> {
    /// `block(name)`, holding the block name.
    Block(String),
    /// `elem(name)`, holding the element name.
    Elem(String),
    /// `mod(name value)`, holding the modifier text before delimiters are applied.
    Mod(String),
    /// Selector text between tokens, passed through unchanged.
    Literal(&'a str),
}

impl<'a> Token<'a> {
    /// Build a token from a keyword and the raw text inside its parentheses.
    pub fn new(keyword: Keyword, content: &str) -> Self {
        let value = clean_value(content);
        match keyword {
            Keyword::Block => Token::Block(value),
            Keyword::Elem => Token::Elem(value),
            Keyword::Mod => Token::Mod(value),
        }
    }
}

/// Strip parentheses and quotes, then trim surrounding whitespace.
pub(crate) fn clean_value(content: &str) -> String {
    content
        .chars()
        .filter(|c| !matches!(c, '(' | ')' | '\'' | '"'))
        .collect::<String>()
        .trim()
        .to_string()
}

/// Replace every modifier separator in `value` with `delimiter`.
///
/// Separators are tried in order at each position: an arrow `->` with at
/// most one whitespace character on each side, a comma followed by at most
/// one whitespace character, and finally a single whitespace character.
/// Whitespace runs therefore produce one delimiter per character.
pub(crate) fn join_modifier(value: &str, delimiter: &str) -> String {
    let mut joined = String::with_capacity(value.len());
    let mut rest = value;

    while let Some(c) = rest.chars().next() {
        let separator = arrow_separator(rest)
            .or_else(|| comma_separator(rest))
            .or_else(|| strip_whitespace_char(rest));

        match separator {
            Some(tail) => {
                joined.push_str(delimiter);
                rest = tail;
            }
            None => {
                joined.push(c);
                rest = &rest[c.len_utf8()..];
            }
        }
    }

    joined
}

fn strip_whitespace_char(text: &str) -> Option<&str> {
    let c = text.chars().next()?;
    c.is_whitespace().then(|| &text[c.len_utf8()..])
}

fn arrow_separator(text: &str) -> Option<&str> {
    let text = strip_whitespace_char(text)
        .filter(|tail| tail.starts_with("->"))
        .unwrap_or(text);
    let tail = text.strip_prefix("->")?;
    Some(strip_whitespace_char(tail).unwrap_or(tail))
}

fn comma_separator(text: &str) -> Option<&str> {
    let tail = text.strip_prefix(',')?;
    Some(strip_whitespace_char(tail).unwrap_or(tail))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keyword_lookup_is_exact() {
        assert_eq!(Keyword::from_name("block"), Some(Keyword::Block));
        assert_eq!(Keyword::from_name("mod"), Some(Keyword::Mod));
        assert_eq!(Keyword::from_name("Block"), None);
        assert_eq!(Keyword::from_name("media"), None);
        assert_eq!(Keyword::from_name("modifier"), None);
    }

    #[test]
    fn clean_value_strips_quotes() {
        assert_eq!(clean_value(" 'block1' "), "block1");
        assert_eq!(clean_value("\"mod\", \"val\""), "mod, val");
    }

    #[test]
    fn join_modifier_separators() {
        assert_eq!(join_modifier("mod val", "_"), "mod_val");
        assert_eq!(join_modifier("mod1 -> val1", "_"), "mod1_val1");
        assert_eq!(join_modifier("mod->val", "_"), "mod_val");
        assert_eq!(join_modifier("mod, val", "_"), "mod_val");
        assert_eq!(join_modifier("mod,val", "~~"), "mod~~val");
        assert_eq!(join_modifier("mod val-1", "_"), "mod_val-1");
    }

    #[test]
    fn join_modifier_whitespace_runs() {
        assert_eq!(join_modifier("a  b", "_"), "a__b");
        assert_eq!(join_modifier("a  -> b", "_"), "a__b");
    }

    #[test]
    fn token_from_keyword() {
        assert_eq!(Token::new(Keyword::Elem, "'x'"), Token::Elem("x".to_string()));
        assert_eq!(Token::new(Keyword::Mod, " a b "), Token::Mod("a b".to_string()));
    }

    #[test]
    fn keyword_display() {
        assert_eq!(Keyword::Block.to_string(), "block");
        assert_eq!(format!("@{}", Keyword::Mod), "@mod");
    }
}
