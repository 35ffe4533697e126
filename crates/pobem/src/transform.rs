//! Whole-stylesheet BEM transform.

use pobem_stylesheet::Stylesheet;

use crate::Result;
use crate::bem::SelectorRewriter;
use crate::config::BemConfig;
use crate::logging::targets;
use crate::normalize::normalize_at_rules;

/// What a transform run changed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TransformSummary {
    /// BEM at-rules turned into rules.
    pub at_rules_normalized: usize,
    /// Rule selectors whose text changed.
    pub selectors_rewritten: usize,
}

/// Runs at-rule normalization and selector rewriting over a stylesheet.
///
/// # Example
///
/// ```
/// use pobem::{BemConfig, BemTransform};
///
/// let transform = BemTransform::new(BemConfig::default());
/// let css = transform.process("@block(card) { margin: 0 }").unwrap();
///
/// assert_eq!(css, ".card { margin: 0 }");
/// ```
#[derive(Debug, Clone, Default)]
pub struct BemTransform {
    rewriter: SelectorRewriter,
}

impl BemTransform {
    /// Create a transform using the given delimiters.
    pub fn new(config: BemConfig) -> Self {
        Self {
            rewriter: SelectorRewriter::new(config),
        }
    }

    /// Create a transform with delimiters read from the environment.
    pub fn from_env() -> Result<Self> {
        Ok(Self::new(BemConfig::from_env()?))
    }

    /// The delimiters this transform composes with.
    pub fn config(&self) -> &BemConfig {
        self.rewriter.config()
    }

    /// The selector rewriter used for rule selectors.
    pub fn rewriter(&self) -> &SelectorRewriter {
        &self.rewriter
    }

    /// Transform a stylesheet tree in place.
    ///
    /// BEM at-rules are normalized first, everywhere in the tree, and then
    /// every rule selector is rewritten. Nodes other than rules and BEM
    /// at-rules are not touched.
    pub fn apply(&self, sheet: &mut Stylesheet) -> TransformSummary {
        let at_rules_normalized = normalize_at_rules(sheet);

        let mut selectors_rewritten = 0;
        sheet.walk_rules_mut(|rule| {
            let rewritten = self.rewriter.rewrite(&rule.selector);
            if rewritten != rule.selector {
                rule.selector = rewritten;
                selectors_rewritten += 1;
            }
        });

        let summary = TransformSummary {
            at_rules_normalized,
            selectors_rewritten,
        };
        tracing::debug!(
            target: targets::TRANSFORM,
            at_rules = summary.at_rules_normalized,
            selectors = summary.selectors_rewritten,
            "applied BEM transform"
        );
        summary
    }

    /// Parse `css`, transform it, and print the result.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Stylesheet`] if `css` cannot be parsed.
    pub fn process(&self, css: &str) -> Result<String> {
        let mut sheet = Stylesheet::parse(css)?;
        self.apply(&mut sheet);
        Ok(sheet.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_counts_changes() {
        let mut sheet =
            Stylesheet::parse("@block(a) {} block(b) {} div {} @media print { block(c) {} }")
                .unwrap();

        let summary = BemTransform::default().apply(&mut sheet);

        assert_eq!(
            summary,
            TransformSummary {
                at_rules_normalized: 1,
                selectors_rewritten: 3,
            }
        );
        assert_eq!(sheet.to_string(), ".a {} .b {} div {} @media print { .c {} }");
    }

    #[test]
    fn declarations_and_comments_untouched() {
        let css = "/* block(x) */ block(a) { content: 'block(b)'; }";
        let out = BemTransform::default().process(css).unwrap();

        assert_eq!(out, "/* block(x) */ .a { content: 'block(b)'; }");
    }

    #[test]
    fn process_reports_parse_errors() {
        let err = BemTransform::default().process("block(a)").unwrap_err();

        assert!(matches!(err, crate::Error::Stylesheet(_)));
    }
}
