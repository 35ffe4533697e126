//! Stylesheet parser using the `cssparser` crate.
//!
//! The parser works on statements rather than on CSS grammar productions.
//! A statement runs from its first token up to a top-level `{}` block, a `;`,
//! or the end of the enclosing block. Function, parenthesis and bracket
//! blocks are skipped as a whole by the tokenizer, so a `;` or `{` inside
//! `block(...)` never ends a statement.
//!
//! Raw source slices are taken for selectors, params and values so nothing
//! is normalized on the way in.

use crate::node::{AtRule, Comment, Declaration, Location, Node, Raws, Rule, Stylesheet};
use crate::{Error, Result};
use cssparser::{
    ParseError as CssParseError, ParseErrorKind, Parser, ParserInput, SourceLocation,
    SourcePosition, Token,
};

type StatementResult<'i, T> = std::result::Result<T, CssParseError<'i, String>>;

/// Parse CSS text into a [`Stylesheet`].
///
/// # Errors
///
/// Returns [`Error::Parse`] when a statement that is neither a rule nor an
/// at-rule has no `:` (for example a bare `div` at the end of the input).
///
/// # Example
///
/// ```
/// let sheet = pobem_stylesheet::parse_stylesheet("@media print { a {} }").unwrap();
/// assert_eq!(sheet.len(), 1);
/// ```
pub fn parse_stylesheet(css: &str) -> Result<Stylesheet> {
    let mut input = ParserInput::new(css);
    let mut parser = Parser::new(&mut input);

    let (nodes, after) = parse_nodes(&mut parser).map_err(into_error)?;

    tracing::debug!(nodes = nodes.len(), bytes = css.len(), "parsed stylesheet");

    Ok(Stylesheet {
        nodes,
        raws: Raws {
            after,
            ..Default::default()
        },
    })
}

fn into_error(error: CssParseError<'_, String>) -> Error {
    let line = error.location.line + 1;
    let column = error.location.column;
    match error.kind {
        ParseErrorKind::Custom(message) => Error::parse(message, line, column),
        ParseErrorKind::Basic(kind) => Error::parse(format!("{:?}", kind), line, column),
    }
}

fn location_of(location: SourceLocation) -> Location {
    Location::new(location.line + 1, location.column)
}

/// Parse statements until the end of the current block.
///
/// Returns the nodes and the trailing text that follows the last of them.
fn parse_nodes<'i>(parser: &mut Parser<'i, '_>) -> StatementResult<'i, (Vec<Node>, String)> {
    let mut nodes = vec![];
    let mut before = String::new();

    loop {
        let start = parser.position();
        let location = parser.current_source_location();

        let token = match parser.next_including_whitespace_and_comments() {
            Ok(token) => token.clone(),
            Err(_) => return Ok((nodes, before)),
        };

        match token {
            Token::WhiteSpace(ws) => before.push_str(ws),
            // Empty statement
            Token::Semicolon => before.push(';'),
            Token::Comment(text) => nodes.push(Node::Comment(Comment {
                text: text.to_string(),
                raws: Raws {
                    before: std::mem::take(&mut before),
                    ..Default::default()
                },
                source: Some(location_of(location)),
            })),
            first => {
                let before = std::mem::take(&mut before);
                nodes.push(parse_statement(parser, start, location, first, before)?);
            }
        }
    }
}

/// Parse one statement whose first token has already been consumed.
fn parse_statement<'i>(
    parser: &mut Parser<'i, '_>,
    start: SourcePosition,
    location: SourceLocation,
    first: Token<'i>,
    before: String,
) -> StatementResult<'i, Node> {
    // Raw `@name` text, when the statement is an at-rule
    let at_name = matches!(first, Token::AtKeyword(_)).then(|| parser.slice_from(start));
    // `--x: { ... }` keeps the block in its value
    let custom_property = matches!(&first, Token::Ident(name) if name.starts_with("--"));

    let mut token = first;
    loop {
        match token {
            Token::CurlyBracketBlock
                if custom_property && parser.slice_from(start).contains(':') => {}
            Token::CurlyBracketBlock => {
                let header = strip_terminator(parser.slice_from(start));
                let (nodes, after) = parser.parse_nested_block(|p| parse_nodes(p))?;
                let raws = Raws {
                    before,
                    after,
                    ..Default::default()
                };
                return Ok(match at_name {
                    Some(name) => at_rule(name, header, Some(nodes), raws, location),
                    None => rule(header, nodes, raws, location),
                });
            }
            Token::Semicolon => {
                let raw = strip_terminator(parser.slice_from(start));
                return bodyless(raw, at_name, true, before, location);
            }
            _ => {}
        }

        token = match parser.next_including_whitespace_and_comments() {
            Ok(token) => token.clone(),
            Err(_) => {
                let raw = parser.slice_from(start);
                return bodyless(raw, at_name, false, before, location);
            }
        };
    }
}

/// Drop the single-byte `{` or `;` that ended a statement.
fn strip_terminator(raw: &str) -> &str {
    &raw[..raw.len() - 1]
}

/// Split `text` into its body and trailing whitespace.
fn split_trailing_whitespace(text: &str) -> (&str, &str) {
    let body = text.trim_end();
    (body, &text[body.len()..])
}

fn rule(header: &str, nodes: Vec<Node>, mut raws: Raws, location: SourceLocation) -> Node {
    let (selector, between) = split_trailing_whitespace(header);
    raws.between = between.to_string();

    Node::Rule(Rule {
        selector: selector.to_string(),
        nodes,
        raws,
        source: Some(location_of(location)),
    })
}

fn at_rule(
    name: &str,
    header: &str,
    nodes: Option<Vec<Node>>,
    mut raws: Raws,
    location: SourceLocation,
) -> Node {
    let rest = &header[name.len()..];
    let params_start = rest.len() - rest.trim_start().len();
    let (params, between) = split_trailing_whitespace(&rest[params_start..]);

    raws.after_name = rest[..params_start].to_string();
    raws.between = between.to_string();

    Node::AtRule(AtRule {
        name: name.trim_start_matches('@').to_string(),
        params: params.to_string(),
        nodes,
        raws,
        source: Some(location_of(location)),
    })
}

/// Build a statement that ended with `;` or at the end of its block.
fn bodyless<'i>(
    raw: &str,
    at_name: Option<&str>,
    semicolon: bool,
    before: String,
    location: SourceLocation,
) -> StatementResult<'i, Node> {
    let raws = Raws {
        before,
        semicolon,
        ..Default::default()
    };

    if let Some(name) = at_name {
        return Ok(at_rule(name, raw, None, raws, location));
    }

    declaration(raw, raws, location).ok_or_else(|| {
        let word = raw.split_whitespace().next().unwrap_or(raw);
        CssParseError {
            kind: ParseErrorKind::Custom(format!("Unknown word '{}'", word)),
            location,
        }
    })
}

fn declaration(raw: &str, mut raws: Raws, location: SourceLocation) -> Option<Node> {
    let colon = raw.find(':')?;
    let prop = raw[..colon].trim_end();

    let after_colon = &raw[colon + 1..];
    let value_start = colon + 1 + (after_colon.len() - after_colon.trim_start().len());
    let (value, after) = split_trailing_whitespace(&raw[value_start..]);

    raws.between = raw[prop.len()..value_start].to_string();
    raws.after = after.to_string();

    Some(Node::Declaration(Declaration {
        prop: prop.to_string(),
        value: value.to_string(),
        raws,
        source: Some(location_of(location)),
    }))
}
