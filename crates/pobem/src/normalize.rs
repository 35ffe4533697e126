//! At-rule normalization.
//!
//! `@block(x) { ... }` and friends are turned into ordinary rules with the
//! selector `block(x)`, so selector rewriting only has to deal with one
//! form of the syntax.

use pobem_stylesheet::{AtRule, Node, Raws, Rule, Stylesheet};

use crate::bem::Keyword;
use crate::logging::targets;

/// Replace every `@block`, `@elem` and `@mod` at-rule, at any depth, with
/// the equivalent rule. Returns the number of at-rules replaced.
///
/// Names must match exactly; `@media` or `@blocks` are left alone.
pub fn normalize_at_rules(sheet: &mut Stylesheet) -> usize {
    let mut normalized = 0;

    sheet.walk_mut(|node| {
        let Node::AtRule(at_rule) = node else {
            return;
        };
        let Some(keyword) = Keyword::from_name(&at_rule.name) else {
            return;
        };

        let rule = rule_from_at_rule(std::mem::take(at_rule));
        tracing::debug!(
            target: targets::NORMALIZE,
            %keyword,
            selector = %rule.selector,
            line = rule.source.map(|source| source.line),
            "normalized BEM at-rule"
        );
        *node = Node::Rule(rule);
        normalized += 1;
    });

    normalized
}

/// Build the rule for a BEM at-rule: the selector is the name followed
/// directly by the params, and children, formatting and source carry over.
fn rule_from_at_rule(at_rule: AtRule) -> Rule {
    Rule {
        selector: format!("{}{}", at_rule.name, at_rule.params),
        nodes: at_rule.nodes.unwrap_or_default(),
        raws: Raws {
            before: at_rule.raws.before,
            between: at_rule.raws.between,
            after: at_rule.raws.after,
            ..Default::default()
        },
        source: at_rule.source,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_bem_at_rules() {
        let mut sheet = Stylesheet::parse("@block(foo) { color: red }").unwrap();

        assert_eq!(normalize_at_rules(&mut sheet), 1);
        assert_eq!(sheet.to_string(), "block(foo) { color: red }");

        let Node::Rule(rule) = &sheet.nodes[0] else {
            panic!("expected a rule");
        };
        assert_eq!(rule.selector, "block(foo)");
        assert_eq!(rule.nodes.len(), 1);
    }

    #[test]
    fn converts_nested_at_rules() {
        let mut sheet = Stylesheet::parse("@block(a) { @elem(b) { @mod(c) {} } }").unwrap();

        assert_eq!(normalize_at_rules(&mut sheet), 3);
        assert_eq!(sheet.to_string(), "block(a) { elem(b) { mod(c) {} } }");
    }

    #[test]
    fn leaves_other_at_rules() {
        let css = "@media print { @block(a) {} }\n@media\n";
        let mut sheet = Stylesheet::parse(css).unwrap();

        assert_eq!(normalize_at_rules(&mut sheet), 1);
        assert_eq!(sheet.to_string(), "@media print { block(a) {} }\n@media\n");
    }

    #[test]
    fn name_match_is_exact() {
        let css = "@blocks(a) {}@Block(a) {}@modifier x;";
        let mut sheet = Stylesheet::parse(css).unwrap();

        assert_eq!(normalize_at_rules(&mut sheet), 0);
        assert_eq!(sheet.to_string(), css);
    }

    #[test]
    fn bodyless_at_rule_gets_empty_body() {
        let mut sheet = Stylesheet::parse("@block(a);").unwrap();

        normalize_at_rules(&mut sheet);
        assert_eq!(sheet.to_string(), "block(a){}");
    }
}
