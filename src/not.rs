use crate::cursor::Cursor;
use crate::fail;
use crate::outcome::{Outcome, ParseResult, Success};
use crate::parser::Parser;

/// Text consumed by a lookahead match, for error messages
fn matched<'code, T>(start: &Cursor<'code>, success: &Success<'code, T>) -> &'code str {
    let consumed = success.remainder.offset().saturating_sub(start.offset());
    start.rest().get(..consumed).unwrap_or_default()
}

/// Parser combinator that performs negative lookahead
///
/// Succeeds with () if the given parser fails at the current position.
/// Fails if the given parser succeeds.
/// Never consumes any input regardless of outcome.
pub struct Not<P> {
    parser: P,
}

impl<P> Not<P> {
    pub fn new(parser: P) -> Self {
        Not { parser }
    }
}

impl<'code, P> Parser<'code> for Not<P>
where
    P: Parser<'code>,
{
    type Output = ();

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, ()> {
        match self.parser.parse(cursor.clone())? {
            Outcome::Success(success) => {
                let text = matched(&cursor, &success);
                Ok(fail!(cursor, "unexpected '{}'", text))
            }
            Outcome::Failure(_) => Ok(Outcome::succeed((), cursor)),
        }
    }
}

/// Convenience function to create a Not parser for negative lookahead
pub fn not<'code, P>(parser: P) -> Not<P>
where
    P: Parser<'code>,
{
    Not::new(parser)
}

/// Runs `parser` unless `excluded` matches at the same position
pub struct Except<P, Q> {
    parser: P,
    excluded: Q,
}

impl<P, Q> Except<P, Q> {
    pub fn new(parser: P, excluded: Q) -> Self {
        Except { parser, excluded }
    }
}

impl<'code, P, Q> Parser<'code> for Except<P, Q>
where
    P: Parser<'code>,
    Q: Parser<'code>,
{
    type Output = P::Output;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        match self.excluded.parse(cursor.clone())? {
            Outcome::Success(success) => {
                let text = matched(&cursor, &success);
                Ok(fail!(cursor, "excluded '{}' found", text))
            }
            Outcome::Failure(_) => self.parser.parse(cursor),
        }
    }
}

/// Extension trait to add .not() and .except() method support for parsers
pub trait NotExt<'code>: Parser<'code> + Sized {
    fn not(self) -> Not<Self> {
        Not::new(self)
    }

    fn except<Q>(self, excluded: Q) -> Except<Self, Q>
    where
        Q: Parser<'code>,
    {
        Except::new(self, excluded)
    }
}

/// Implement NotExt for all parsers
impl<'code, P> NotExt<'code> for P where P: Parser<'code> {}
