use crate::attempt::Attempt;
use crate::cursor::Cursor;
use crate::outcome::ParseResult;
use crate::parser::Parser;
use crate::xor::Xor;

/// Parser combinator that tries the first parser, and if it fails, tries the second parser
///
/// Unlike [`Xor`], the second parser is tried however far the first one got
/// before failing. Every fallback re-parses from the start, so long chains of
/// overlapping `or` alternatives can take exponential time; prefer
/// [`xor`](crate::xor::xor) once a grammar is factored.
pub struct Or<P1, P2> {
    inner: Xor<Attempt<P1>, P2>,
}

impl<P1, P2> Or<P1, P2> {
    pub fn new(parser1: P1, parser2: P2) -> Self {
        Or {
            inner: Xor::new(Attempt::new(parser1), parser2),
        }
    }
}

impl<'code, P1, P2, O> Parser<'code> for Or<P1, P2>
where
    P1: Parser<'code, Output = O>,
    P2: Parser<'code, Output = O>,
{
    type Output = O;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, O> {
        self.inner.parse(cursor)
    }
}

/// Extension trait to add .or() method support for parsers
pub trait OrExt<'code>: Parser<'code> + Sized {
    fn or<P>(self, other: P) -> Or<Self, P>
    where
        P: Parser<'code, Output = Self::Output>,
    {
        Or::new(self, other)
    }
}

/// Implement OrExt for all parsers
impl<'code, P> OrExt<'code> for P where P: Parser<'code> {}

/// Convenience function to create an Or parser
pub fn or<'code, P1, P2, O>(parser1: P1, parser2: P2) -> Or<P1, P2>
where
    P1: Parser<'code, Output = O>,
    P2: Parser<'code, Output = O>,
{
    Or::new(parser1, parser2)
}
