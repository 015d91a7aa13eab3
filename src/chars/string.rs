use super::satisfy::literal_char;
use crate::cursor::Cursor;
use crate::outcome::{Outcome, ParseResult, Success};
use crate::parser::Parser;
use std::borrow::Cow;

/// Parser that matches an exact string, one character at a time
///
/// A mismatch on the first character is reported with the whole string as the
/// expectation; a mismatch further in keeps the position and message of the
/// character that did not match.
pub struct LiteralString {
    expected: Cow<'static, str>,
}

impl LiteralString {
    pub fn new(expected: impl Into<Cow<'static, str>>) -> Self {
        LiteralString {
            expected: expected.into(),
        }
    }

    pub fn expected(&self) -> &str {
        &self.expected
    }
}

impl<'code> Parser<'code> for LiteralString {
    type Output = String;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, String> {
        let start = cursor.position();
        let mut outcome = Outcome::succeed(String::with_capacity(self.expected.len()), cursor);

        for expected in self.expected.chars() {
            outcome = outcome.if_success(|Success { value: mut text, remainder }| {
                Ok(literal_char(expected).parse(remainder)?.map(|ch| {
                    text.push(ch);
                    text
                }))
            })?;
        }

        match outcome {
            Outcome::Failure(failure) if failure.position() == start => Ok(Outcome::Failure(
                failure.expecting([format!("'{}'", self.expected)]),
            )),
            other => Ok(other),
        }
    }
}

/// Parser for the exact text `expected`
pub fn literal_string(expected: impl Into<Cow<'static, str>>) -> LiteralString {
    LiteralString::new(expected)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_string_prefix() {
        let success = literal_string("abc")
            .parse(Cursor::new("abcd"))
            .unwrap()
            .into_result()
            .unwrap();
        assert_eq!(success.value, "abc");
        assert_eq!(success.remainder.position(), 3);
        assert_eq!(success.remainder.rest(), "d");
    }

    #[test]
    fn test_literal_string_partial_match_fails_where_it_diverges() {
        let failure = literal_string("abc")
            .parse(Cursor::new("abx"))
            .unwrap()
            .into_result()
            .unwrap_err();
        assert_eq!(failure.position(), 2);
        assert_eq!(failure.message(), "expected 'c', found 'x'");
        assert!(failure.expectations().contains("'c'"));
    }

    #[test]
    fn test_literal_string_mismatch_at_start_names_whole_string() {
        let failure = literal_string("let")
            .parse(Cursor::new("var"))
            .unwrap()
            .into_result()
            .unwrap_err();
        assert_eq!(failure.position(), 0);
        assert_eq!(
            failure.expectations().iter().collect::<Vec<_>>(),
            vec!["'let'"]
        );
    }

    #[test]
    fn test_literal_string_on_empty_input() {
        let failure = literal_string("abc")
            .parse(Cursor::new(""))
            .unwrap()
            .into_result()
            .unwrap_err();
        assert_eq!(failure.position(), 0);
        assert_eq!(failure.message(), "unexpected end of input, expected 'a'");
    }

    #[test]
    fn test_literal_string_truncated_input() {
        let failure = literal_string("abc")
            .parse(Cursor::new("ab"))
            .unwrap()
            .into_result()
            .unwrap_err();
        assert_eq!(failure.position(), 2);
    }

    #[test]
    fn test_empty_literal_consumes_nothing() {
        let success = literal_string("")
            .parse(Cursor::new("xyz"))
            .unwrap()
            .into_result()
            .unwrap();
        assert_eq!(success.value, "");
        assert_eq!(success.remainder.position(), 0);
    }

    #[test]
    fn test_literal_string_multibyte() {
        let parser = literal_string(String::from("größe"));
        assert_eq!(parser.expected(), "größe");
        assert_eq!(parser.parse_str("größe").unwrap(), "größe");
    }
}
