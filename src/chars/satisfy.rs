use crate::cursor::Cursor;
use crate::outcome::{Failure, Outcome, ParseResult};
use crate::parser::Parser;
use std::borrow::Cow;

/// Parser that consumes one character accepted by a predicate
///
/// `description` names what the predicate accepts; it becomes the failure's
/// expectation label and appears in its message.
pub struct Satisfy<F> {
    predicate: F,
    description: Cow<'static, str>,
}

impl<F> Satisfy<F> {
    pub fn new(predicate: F, description: impl Into<Cow<'static, str>>) -> Self {
        Satisfy {
            predicate,
            description: description.into(),
        }
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}

impl<'code, F> Parser<'code> for Satisfy<F>
where
    F: Fn(char) -> bool,
{
    type Output = char;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, char> {
        let failure = match cursor.next_char() {
            Some((ch, next)) if (self.predicate)(ch) => return Ok(Outcome::succeed(ch, next)),
            Some((found, _)) => {
                let description = self.description.clone();
                Failure::deferred(cursor, move || {
                    format!("expected {}, found '{}'", description, found)
                })
            }
            None => {
                let description = self.description.clone();
                Failure::deferred(cursor, move || {
                    format!("unexpected end of input, expected {}", description)
                })
            }
        };

        Ok(Outcome::Failure(
            failure.with_expectation(self.description.as_ref()),
        ))
    }
}

/// Parser for one character satisfying `predicate`
pub fn satisfy<F>(predicate: F, description: impl Into<Cow<'static, str>>) -> Satisfy<F>
where
    F: Fn(char) -> bool,
{
    Satisfy::new(predicate, description)
}

/// Parser that matches a specific character
pub fn literal_char(expected: char) -> Satisfy<impl Fn(char) -> bool> {
    satisfy(move |ch| ch == expected, format!("'{}'", expected))
}

/// Parser that consumes any single character
pub fn any_char() -> Satisfy<impl Fn(char) -> bool> {
    satisfy(|_| true, "any character")
}
