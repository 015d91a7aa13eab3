use parsnip::prelude::*;
use parsnip::{
    BoxedParser, Rule, any_char, between, letter, letter_or_digit, literal_char, literal_string,
    recursive,
};
use pretty_assertions::assert_eq;

#[derive(Debug, Clone, PartialEq)]
enum TemplateNode {
    Literal(String),
    Member(String),
    Iteration {
        member: String,
        body: Vec<TemplateNode>,
    },
}

use TemplateNode::{Iteration, Literal, Member};

fn identifier<'code>() -> impl Parser<'code, Output = String> {
    letter()
        .once()
        .concat(letter_or_digit().many())
        .text()
}

/// `{p}` or plain `p`
fn optionally_delimited<'code, T: 'code>(
    parser: BoxedParser<'code, T>,
) -> impl Parser<'code, Output = T> {
    between(
        literal_char('{'),
        parser.clone(),
        literal_char('}').named("closing brace"),
    )
    .xor(parser)
}

fn template<'code>() -> Rule<'code, Vec<TemplateNode>> {
    recursive(|aggregate: Rule<'code, Vec<TemplateNode>>| {
        let escaped_hash = literal_char('#')
            .to(Literal("#".to_string()))
            .named("escaped '#' character");

        let symbol = optionally_delimited(identifier().map(Member).boxed())
            .named("replacement directive");

        let iteration = optionally_delimited(literal_char('|').ignore_then(identifier()).boxed())
            .and(aggregate)
            .then_ignore(literal_string("#."))
            .map(|(member, body)| Iteration { member, body })
            .named("iteration directive");

        let directive = literal_char('#').ignore_then(escaped_hash.or(iteration).or(symbol));

        let literal = any_char()
            .except(literal_char('#'))
            .at_least_once()
            .text()
            .map(Literal);

        literal.xor(directive).many()
    })
}

fn literal(text: &str) -> TemplateNode {
    Literal(text.to_string())
}

fn member(name: &str) -> TemplateNode {
    Member(name.to_string())
}

#[test]
fn test_plain_and_delimited_symbols() {
    let nodes = template()
        .end()
        .parse_str("Hello #name, or #{name}s!")
        .unwrap();
    assert_eq!(
        nodes,
        vec![
            literal("Hello "),
            member("name"),
            literal(", or "),
            member("name"),
            literal("s!"),
        ]
    );
}

#[test]
fn test_escaped_hash() {
    let nodes = template().end().parse_str("##1 in ##{x}").unwrap();
    assert_eq!(
        nodes,
        vec![
            literal("#"),
            literal("1 in "),
            literal("#"),
            literal("{x}"),
        ]
    );
}

#[test]
fn test_iteration() {
    let nodes = template()
        .end()
        .parse_str("<ul>#|items<li>#{item}</li>#.</ul>")
        .unwrap();
    assert_eq!(
        nodes,
        vec![
            literal("<ul>"),
            Iteration {
                member: "items".to_string(),
                body: vec![literal("<li>"), member("item"), literal("</li>")],
            },
            literal("</ul>"),
        ]
    );
}

#[test]
fn test_delimited_iteration_nests() {
    let nodes = template()
        .end()
        .parse_str("#{|rows}[#|cells#c#.]#.")
        .unwrap();
    assert_eq!(
        nodes,
        vec![Iteration {
            member: "rows".to_string(),
            body: vec![
                literal("["),
                Iteration {
                    member: "cells".to_string(),
                    body: vec![member("c")],
                },
                literal("]"),
            ],
        }]
    );
}

#[test]
fn test_empty_template() {
    assert_eq!(template().end().parse_str("").unwrap(), Vec::new());
}

#[test]
fn test_unclosed_directive_stops_the_template() {
    let error = template().end().parse_str("ok #{name").unwrap_err();
    assert_eq!(error.position(), Some(3));
}

/// When the first branch matches nothing and the second matches something,
/// `xor` takes the second branch's result.
#[test]
fn test_xor_prefers_a_real_match_over_an_empty_one() {
    let bare = letter().many().text();
    let braced = between(literal_char('{'), identifier(), literal_char('}'));
    let name = bare.xor(braced).end();

    assert_eq!(name.parse_str("{name}").unwrap(), "name");
    assert_eq!(name.parse_str("name").unwrap(), "name");
    assert_eq!(name.parse_str("").unwrap(), "");
}
