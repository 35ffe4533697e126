//! Selector rewriting.
//!
//! Each line of a selector is rewritten independently. Text before the
//! first `block(` on a line is kept as is; from there to the end of the line
//! the clause is lexed and reduced left to right into class selectors.

use super::context::BemContext;
use super::lexer::tokenize;
use super::token::{Token, join_modifier};
use crate::config::BemConfig;
use crate::logging::targets;

const ENTRY: &str = "block(";

/// Rewrites BEM authoring syntax in selectors into class selectors.
///
/// # Example
///
/// ```
/// use pobem::{BemConfig, SelectorRewriter};
///
/// let rewriter = SelectorRewriter::new(BemConfig::default());
/// assert_eq!(
///     rewriter.rewrite("block(menu).elem(item).mod(state active) > a"),
///     ".menu__item_state_active > a"
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct SelectorRewriter {
    config: BemConfig,
}

impl SelectorRewriter {
    /// Create a rewriter using the given delimiters.
    pub fn new(config: BemConfig) -> Self {
        Self { config }
    }

    /// The delimiters this rewriter composes with.
    pub fn config(&self) -> &BemConfig {
        &self.config
    }

    /// Rewrite every BEM clause in `selector`.
    ///
    /// Selectors without a `block(` entry come back unchanged. Malformed
    /// token content is passed through as literal text rather than rejected.
    pub fn rewrite(&self, selector: &str) -> String {
        let mut rewritten = String::with_capacity(selector.len());
        let mut cursor = 0;

        while let Some((entry, clause_start)) = find_entry(selector, cursor) {
            let clause_end = selector[clause_start..]
                .find(is_line_terminator)
                .map_or(selector.len(), |offset| clause_start + offset);

            rewritten.push_str(&selector[cursor..entry]);
            rewritten.push_str(&self.rewrite_clause(&selector[clause_start..clause_end]));
            cursor = clause_end;
        }
        rewritten.push_str(&selector[cursor..]);

        if rewritten != selector {
            tracing::trace!(target: targets::REWRITE, %selector, %rewritten, "rewrote selector");
        }
        rewritten
    }

    /// Reduce one clause, starting at `block(`, into its class selectors.
    fn rewrite_clause(&self, clause: &str) -> String {
        let mut context = BemContext::new();
        let mut pending = false;
        let mut output = String::with_capacity(clause.len());

        for token in tokenize(clause) {
            match token {
                Token::Literal(text) => {
                    if pending {
                        output.push_str(&context.class_selector(None, &self.config));
                        pending = false;
                    }
                    output.push_str(text);
                }
                Token::Block(name) => {
                    context.enter_block(name);
                    pending = true;
                }
                Token::Elem(name) => {
                    context.enter_elem(name);
                    pending = true;
                }
                Token::Mod(value) => {
                    pending = false;
                    let modifier = join_modifier(&value, &self.config.modifier_delimiter);
                    output.push_str(&context.class_selector(Some(&modifier), &self.config));
                }
            }
        }

        output
    }
}

fn is_line_terminator(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\u{2028}' | '\u{2029}')
}

/// Find the next clause entry at or after `from`.
///
/// Returns the offset where replaced text begins (including a `.` or `:`
/// alias directly before the keyword) and the offset of `block(` itself.
/// An entry needs at least one character after `block(` on the same line.
fn find_entry(selector: &str, from: usize) -> Option<(usize, usize)> {
    let mut search = from;

    while let Some(offset) = selector[search..].find(ENTRY) {
        let start = search + offset;
        let after = &selector[start + ENTRY.len()..];

        if after.chars().next().is_some_and(|c| !is_line_terminator(c)) {
            let entry = if start > from && matches!(selector.as_bytes()[start - 1], b'.' | b':') {
                start - 1
            } else {
                start
            };
            return Some((entry, start));
        }
        search = start + 1;
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rewrite(selector: &str) -> String {
        SelectorRewriter::default().rewrite(selector)
    }

    #[test]
    fn plain_selector_unchanged() {
        assert_eq!(rewrite("div.foo:hover"), "div.foo:hover");
        assert_eq!(rewrite(""), "");
    }

    #[test]
    fn entry_aliases() {
        assert_eq!(rewrite("block(foo)"), ".foo");
        assert_eq!(rewrite(".block(foo)"), ".foo");
        assert_eq!(rewrite(":block(foo)"), ".foo");
    }

    #[test]
    fn prefix_before_entry_is_kept() {
        assert_eq!(rewrite("html.js block(page)"), "html.js .page");
        assert_eq!(rewrite(":root block(a)"), ":root .a");
    }

    #[test]
    fn block_elem_mod() {
        assert_eq!(rewrite("block(block).elem(elem)"), ".block__elem");
        assert_eq!(
            rewrite("block(block).elem(elem).mod(mod val)"),
            ".block__elem_mod_val"
        );
    }

    #[test]
    fn block_carries_over_fragments() {
        assert_eq!(
            rewrite("block(block1).elem(elem1) elem(elem2) elem(elem3)"),
            ".block1__elem1 .block1__elem2 .block1__elem3"
        );
    }

    #[test]
    fn stale_context_after_flush() {
        assert_eq!(rewrite("block(b).elem(e) div mod(m)"), ".b__e div .b__e_m");
    }

    #[test]
    fn elem_without_block_token_is_not_an_entry() {
        assert_eq!(rewrite("elem(e)"), "elem(e)");
    }

    #[test]
    fn each_line_is_its_own_clause() {
        assert_eq!(
            rewrite("block(a).elem(b),\nblock(c) elem(d)"),
            ".a__b,\n.c__d"
        );
    }

    #[test]
    fn entry_needs_content_on_the_same_line() {
        assert_eq!(rewrite("block("), "block(");
        assert_eq!(rewrite("a block(\nblock(b)"), "a block(\n.b");
    }

    #[test]
    fn malformed_clause_keeps_text_but_drops_alias() {
        assert_eq!(rewrite("a.block(x.y)"), "ablock(x.y)");
    }

    #[test]
    fn custom_delimiters() {
        let rewriter = SelectorRewriter::new(
            BemConfig::new()
                .with_modifier_delimiter("~~")
                .with_element_delimiter("--"),
        );

        assert_eq!(rewriter.rewrite("block(b).elem(e).mod(m v)"), ".b--e~~m~~v");
    }
}
