//! Committing alternation
//!
//! `xor` only tries its second branch when the first one consumed nothing.
//! Once the first branch has moved past the starting position, its outcome
//! stands, success or failure. This keeps well-factored grammars linear and
//! keeps failure positions pointing at the furthest input that was matched.

use crate::cursor::Cursor;
use crate::outcome::{Outcome, ParseResult};
use crate::parser::Parser;

/// Parser combinator that tries the second parser only if the first consumed nothing
pub struct Xor<P1, P2> {
    parser1: P1,
    parser2: P2,
}

impl<P1, P2> Xor<P1, P2> {
    pub fn new(parser1: P1, parser2: P2) -> Self {
        Xor { parser1, parser2 }
    }
}

impl<'code, P1, P2, O> Parser<'code> for Xor<P1, P2>
where
    P1: Parser<'code, Output = O>,
    P2: Parser<'code, Output = O>,
{
    type Output = O;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, O> {
        let start = cursor.position();
        match self.parser1.parse(cursor.clone())? {
            Outcome::Failure(first) if first.position() == start => {
                match self.parser2.parse(cursor)? {
                    Outcome::Failure(second) if second.position() == start => {
                        Ok(Outcome::Failure(second.merge_expectations(&first)))
                    }
                    second => Ok(second),
                }
            }
            // An empty match is only a fallback: a real match of the second branch wins
            Outcome::Success(first) if first.remainder.position() == start => {
                match self.parser2.parse(cursor)? {
                    Outcome::Success(second) => Ok(Outcome::Success(second)),
                    Outcome::Failure(_) => Ok(Outcome::Success(first)),
                }
            }
            committed => Ok(committed),
        }
    }
}

/// Convenience function to create a Xor parser
pub fn xor<'code, P1, P2, O>(parser1: P1, parser2: P2) -> Xor<P1, P2>
where
    P1: Parser<'code, Output = O>,
    P2: Parser<'code, Output = O>,
{
    Xor::new(parser1, parser2)
}

/// Extension trait to add .xor() method support for parsers
pub trait XorExt<'code>: Parser<'code> + Sized {
    fn xor<P>(self, other: P) -> Xor<Self, P>
    where
        P: Parser<'code, Output = Self::Output>,
    {
        Xor::new(self, other)
    }
}

impl<'code, P> XorExt<'code> for P where P: Parser<'code> {}
