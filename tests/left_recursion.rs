use parsnip::prelude::*;
use parsnip::{GrammarError, ParseError, Rule, letter, literal_char, recursive, reference};

fn left_recursive_list<'code>() -> Rule<'code, Vec<char>> {
    // list = list ',' letter
    recursive(|list| {
        list.then_ignore(literal_char(','))
            .and(letter())
            .map(|(mut items, item): (Vec<char>, char)| {
                items.push(item);
                items
            })
    })
}

#[test]
fn test_pure_left_recursion_is_reported() {
    let list = left_recursive_list();
    match list.parse_str("a,a,a") {
        Err(ParseError::Grammar(GrammarError::LeftRecursion { rule, location })) => {
            assert_eq!(rule, list.id());
            assert_eq!(location.position, 0);
        }
        other => panic!("expected left recursion, got {:?}", other),
    }
}

#[test]
fn test_error_message_names_left_recursion() {
    let error = left_recursive_list().parse_str("a,a,a").unwrap_err();
    assert!(error.to_string().contains("left recursion in the grammar"));
    assert_eq!(error.position(), Some(0));
}

#[test]
fn test_left_recursion_is_not_recovered_by_alternation() {
    let list = left_recursive_list();
    let fallback = list.clone().or(letter().once());
    assert!(matches!(
        fallback.parse_str("a"),
        Err(ParseError::Grammar(GrammarError::LeftRecursion { .. }))
    ));
}

#[test]
fn test_mutual_left_recursion() {
    // a = b 'x', b = a 'y'
    let a: Rule<'_, String> = Rule::declare();
    let b: Rule<'_, String> = Rule::declare();
    a.define(
        b.clone()
            .then_ignore(literal_char('x'))
            .map(|s| s + "x"),
    )
    .unwrap();
    {
        let a = a.clone();
        b.define(reference(move || a.clone()).then_ignore(literal_char('y')))
            .unwrap();
    }

    assert!(matches!(
        a.parse_str("yx"),
        Err(ParseError::Grammar(GrammarError::LeftRecursion { .. }))
    ));
}

#[test]
fn test_right_recursive_rewrite_parses() {
    // list = letter (',' list)?
    let list: Rule<'_, Vec<char>> = recursive(|list| {
        letter()
            .and(literal_char(',').ignore_then(list).optional())
            .map(|(first, rest): (char, Option<Vec<char>>)| {
                let mut items = vec![first];
                items.extend(rest.unwrap_or_default());
                items
            })
    });
    assert_eq!(list.end().parse_str("a,b,c").unwrap(), vec!['a', 'b', 'c']);
}

#[test]
fn test_guard_does_not_leak_between_parses() {
    let list = left_recursive_list();
    for _ in 0..3 {
        assert!(list.parse_str("a").is_err());
    }

    let word = recursive(|word| {
        letter()
            .and(word.optional())
            .map(|(c, rest): (char, Option<String>)| {
                let mut text = rest.unwrap_or_default();
                text.insert(0, c);
                text
            })
    });
    assert_eq!(word.parse_str("abc").unwrap(), "abc");
    assert_eq!(word.parse_str("abc").unwrap(), "abc");
}
