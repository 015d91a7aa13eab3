use crate::cursor::Cursor;
use crate::outcome::{Outcome, ParseResult};
use crate::parser::Parser;

/// Parser combinator that makes a parser optional
///
/// Produces `Some` on success and `None`, without consuming input, when the
/// parser fails at the starting position. A failure after consuming input is
/// returned unchanged.
pub struct Optional<P> {
    parser: P,
}

impl<P> Optional<P> {
    pub fn new(parser: P) -> Self {
        Optional { parser }
    }
}

impl<'code, P> Parser<'code> for Optional<P>
where
    P: Parser<'code>,
{
    type Output = Option<P::Output>;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        let start = cursor.position();
        match self.parser.parse(cursor.clone())? {
            Outcome::Failure(failure) if failure.position() == start => {
                Ok(Outcome::succeed(None, cursor))
            }
            outcome => Ok(outcome.map(Some)),
        }
    }
}

pub fn optional<'code, P>(parser: P) -> Optional<P>
where
    P: Parser<'code>,
{
    Optional::new(parser)
}

pub trait OptionalExt<'code>: Parser<'code> + Sized {
    fn optional(self) -> Optional<Self> {
        Optional::new(self)
    }
}

impl<'code, P> OptionalExt<'code> for P where P: Parser<'code> {}
