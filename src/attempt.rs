use crate::cursor::Cursor;
use crate::outcome::{Outcome, ParseResult};
use crate::parser::Parser;

/// Parser combinator that reports any failure at the position it started from
///
/// This turns a failure that consumed input into one that consumed nothing, so
/// a following [`xor`](crate::xor::xor) branch is still tried.
pub struct Attempt<P> {
    parser: P,
}

impl<P> Attempt<P> {
    pub fn new(parser: P) -> Self {
        Attempt { parser }
    }
}

impl<'code, P> Parser<'code> for Attempt<P>
where
    P: Parser<'code>,
{
    type Output = P::Output;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        self.parser
            .parse(cursor.clone())?
            .if_failure(|failure| Ok(Outcome::Failure(failure.relocate(cursor))))
    }
}

pub fn attempt<'code, P>(parser: P) -> Attempt<P>
where
    P: Parser<'code>,
{
    Attempt::new(parser)
}

pub trait AttemptExt<'code>: Parser<'code> + Sized {
    fn attempt(self) -> Attempt<Self> {
        Attempt::new(self)
    }
}

impl<'code, P> AttemptExt<'code> for P where P: Parser<'code> {}
