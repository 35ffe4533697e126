//! Lexer for a BEM selector clause.
//!
//! A clause is the text from the first `block(` on a line to the end of that
//! line. The lexer splits it into BEM tokens and the literal selector text
//! between them:
//!
//! ```text
//! block(b).elem(e) div:hover
//! [Literal("")] [Block(b)] [Elem(e)] [Literal(" div:hover")]
//! ```
//!
//! The sequence always starts and ends with a literal, possibly empty, and
//! two tokens are separated by a literal unless they are glued into one
//! compound class.

use super::token::{Keyword, Token};

/// A token occurrence found in the clause, before cleaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct RawToken<'a> {
    /// Byte offset of the token, including a leading `.` or `:` alias.
    start: usize,
    /// Byte offset just past the closing parenthesis.
    end: usize,
    keyword: Keyword,
    /// Text between the parentheses.
    content: &'a str,
}

/// Characters allowed between the parentheses of a token.
fn is_content_char(c: char) -> bool {
    c.is_ascii_alphanumeric()
        || c.is_whitespace()
        || matches!(c, '_' | '\'' | '"' | '-' | '>' | ',')
}

/// Match a token starting exactly at `text[0]`, without an alias.
fn match_token_at(text: &str) -> Option<(Keyword, &str, usize)> {
    let keyword = Keyword::ALL
        .into_iter()
        .find(|keyword| text.starts_with(keyword.as_str()))?;

    let after_keyword = &text[keyword.as_str().len()..];
    let body = after_keyword.strip_prefix('(')?;
    let content_len = body
        .find(|c: char| !is_content_char(c))
        .unwrap_or(body.len());
    if content_len == 0 || !body[content_len..].starts_with(')') {
        return None;
    }

    let len = keyword.as_str().len() + 1 + content_len + 1;
    Some((keyword, &body[..content_len], len))
}

/// Find the leftmost token at or after byte offset `from`.
fn find_token(clause: &str, from: usize) -> Option<RawToken<'_>> {
    for (offset, c) in clause[from..].char_indices() {
        let start = from + offset;

        if matches!(c, '.' | ':')
            && let Some((keyword, content, len)) = match_token_at(&clause[start + 1..])
        {
            return Some(RawToken {
                start,
                end: start + 1 + len,
                keyword,
                content,
            });
        }

        if let Some((keyword, content, len)) = match_token_at(&clause[start..]) {
            return Some(RawToken {
                start,
                end: start + len,
                keyword,
                content,
            });
        }
    }
    None
}

/// Whether `next` joins `prev` in the same compound class when only
/// whitespace separates them.
///
/// `chained` is set when `prev` is a modifier that was itself glued onto a
/// preceding modifier; such a modifier does not glue onto the next one.
fn glues(prev: Keyword, next: Keyword, chained: bool) -> bool {
    match (prev, next) {
        (Keyword::Block, Keyword::Elem | Keyword::Mod) => true,
        (Keyword::Elem, Keyword::Mod) => true,
        (Keyword::Mod, Keyword::Mod) => !chained,
        _ => false,
    }
}

/// Split a clause into BEM tokens and literal fragments.
///
/// ```
/// use pobem::bem::{tokenize, Token};
///
/// assert_eq!(
///     tokenize("block(menu) > a"),
///     [
///         Token::Literal(""),
///         Token::Block("menu".to_string()),
///         Token::Literal(" > a"),
///     ]
/// );
/// ```
pub fn tokenize(clause: &str) -> Vec<Token<'_>> {
    let mut tokens = vec![];
    let mut cursor = 0;
    let mut prev: Option<(Keyword, bool)> = None;

    while let Some(raw) = find_token(clause, cursor) {
        let between = &clause[cursor..raw.start];

        let glued = match prev {
            Some((keyword, chained)) => {
                between.chars().all(char::is_whitespace) && glues(keyword, raw.keyword, chained)
            }
            None => false,
        };
        if !glued {
            tokens.push(Token::Literal(between));
        }

        let chained = glued && prev.map(|(keyword, _)| keyword) == Some(Keyword::Mod);
        prev = Some((raw.keyword, chained));

        tokens.push(Token::new(raw.keyword, raw.content));
        cursor = raw.end;
    }

    tokens.push(Token::Literal(&clause[cursor..]));
    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block(name: &str) -> Token<'static> {
        Token::Block(name.to_string())
    }

    fn elem(name: &str) -> Token<'static> {
        Token::Elem(name.to_string())
    }

    fn modifier(value: &str) -> Token<'static> {
        Token::Mod(value.to_string())
    }

    #[test]
    fn no_tokens() {
        assert_eq!(tokenize("div.foo:hover"), [Token::Literal("div.foo:hover")]);
    }

    #[test]
    fn aliases_are_dropped() {
        assert_eq!(
            tokenize("block(a).elem(b):mod(c)"),
            [Token::Literal(""), block("a"), elem("b"), modifier("c"), Token::Literal("")]
        );
    }

    #[test]
    fn whitespace_between_glued_tokens_is_dropped() {
        assert_eq!(
            tokenize("block(a) elem(b)"),
            [Token::Literal(""), block("a"), elem("b"), Token::Literal("")]
        );
    }

    #[test]
    fn elem_after_elem_is_a_new_compound() {
        assert_eq!(
            tokenize("block(a).elem(b) elem(c)"),
            [
                Token::Literal(""),
                block("a"),
                elem("b"),
                Token::Literal(" "),
                elem("c"),
                Token::Literal(""),
            ]
        );
    }

    #[test]
    fn block_after_elem_is_separated_by_empty_literal() {
        assert_eq!(
            tokenize("block(a).elem(b).block(c)"),
            [
                Token::Literal(""),
                block("a"),
                elem("b"),
                Token::Literal(""),
                block("c"),
                Token::Literal(""),
            ]
        );
    }

    #[test]
    fn modifier_chains_glue_pairwise() {
        assert_eq!(
            tokenize("block(a) mod(b) mod(c) mod(d)"),
            [
                Token::Literal(""),
                block("a"),
                modifier("b"),
                modifier("c"),
                Token::Literal(" "),
                modifier("d"),
                Token::Literal(""),
            ]
        );
    }

    #[test]
    fn literal_text_is_kept() {
        assert_eq!(
            tokenize("block(menu)[class*='menu_mode'] > block(x):hover"),
            [
                Token::Literal(""),
                block("menu"),
                Token::Literal("[class*='menu_mode'] > "),
                block("x"),
                Token::Literal(":hover"),
            ]
        );
    }

    #[test]
    fn malformed_tokens_are_literal() {
        assert_eq!(tokenize("block()"), [Token::Literal("block()")]);
        assert_eq!(tokenize("block(a.b)"), [Token::Literal("block(a.b)")]);
        assert_eq!(tokenize("block(a"), [Token::Literal("block(a")]);
    }

    #[test]
    fn quoted_and_arrow_content() {
        assert_eq!(
            tokenize("mod(\"m\" -> 'v')"),
            [Token::Literal(""), modifier("m -> v"), Token::Literal("")]
        );
    }
}
