use parsnip::prelude::*;
use parsnip::{Rule, letter, letter_or_digit, literal_char, recursive, satisfy, whitespace};
use pretty_assertions::assert_eq;

#[derive(Debug, Clone, PartialEq)]
enum Item {
    Node(Node),
    Content(String),
}

#[derive(Debug, Clone, PartialEq)]
struct Node {
    name: String,
    children: Vec<Item>,
}

fn leaf(name: &str) -> Item {
    Item::Node(Node {
        name: name.to_string(),
        children: Vec::new(),
    })
}

fn identifier<'code>() -> impl Parser<'code, Output = String> {
    letter()
        .once()
        .concat(
            letter_or_digit()
                .or(literal_char('-'))
                .or(literal_char('_'))
                .many(),
        )
        .text()
}

fn tag<'code, P>(content: P) -> impl Parser<'code, Output = P::Output>
where
    P: Parser<'code>,
{
    whitespace()
        .many()
        .ignore_then(literal_char('<'))
        .ignore_then(content)
        .then_ignore(literal_char('>'))
        .then_ignore(whitespace().many())
}

fn end_tag<'code>(name: String) -> impl Parser<'code, Output = String> {
    tag(literal_char('/').ignore_then(identifier().filter(move |id| *id == name)))
}

fn content<'code>() -> impl Parser<'code, Output = Item> {
    satisfy(|c| c != '<', "content")
        .at_least_once()
        .text()
        .map(Item::Content)
}

fn document<'code>() -> Rule<'code, Node> {
    recursive(|node: Rule<'code, Node>| {
        let short_node = tag(identifier().then_ignore(literal_char('/'))).map(|name| Node {
            name,
            children: Vec::new(),
        });

        let item = node.map(Item::Node).or(content()).boxed();
        let full_node = tag(identifier()).then(move |name: String| {
            let closing = end_tag(name.clone());
            item.clone()
                .many()
                .then_ignore(closing)
                .map(move |children| Node {
                    name: name.clone(),
                    children,
                })
        });

        short_node.attempt().or(full_node)
    })
}

#[test]
fn test_nested_document() {
    let doc = document()
        .end()
        .parse_str("<body><p>hello,<br/> <i>world!</i></p></body>")
        .unwrap();

    let expected = Node {
        name: "body".to_string(),
        children: vec![Item::Node(Node {
            name: "p".to_string(),
            children: vec![
                Item::Content("hello,".to_string()),
                leaf("br"),
                Item::Node(Node {
                    name: "i".to_string(),
                    children: vec![Item::Content("world!".to_string())],
                }),
            ],
        })],
    };
    assert_eq!(doc, expected);
}

#[test]
fn test_short_node_document() {
    let doc = document().parse_str("  <empty-tag_1/>  ").unwrap();
    assert_eq!(Item::Node(doc), leaf("empty-tag_1"));
}

#[test]
fn test_end_tag_rejects_other_name() {
    let error = end_tag("b".to_string()).parse_str("</a>").unwrap_err();
    // Reported where the name starts
    assert_eq!(error.position(), Some(2));
    assert!(error.to_string().contains("unexpected \"a\""));
}

#[test]
fn test_mismatched_tags_fail() {
    assert!(document().end().parse_str("<a><b></a></b>").is_err());
}

#[test]
fn test_unclosed_tag_fails() {
    let error = document().end().parse_str("<a>text").unwrap_err();
    assert_eq!(error.position(), Some(7));
}
