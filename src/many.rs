use crate::cursor::Cursor;
use crate::outcome::{Outcome, ParseResult};
use crate::parser::Parser;

/// Parser combinator that matches zero or more occurrences of the given parser
///
/// `Many` never fails: the first failure of the element ends the repetition
/// and the remainder is the cursor after the last success. An element parser
/// that can succeed without consuming input repeats forever; guard such
/// elements (for example with [`end`](crate::end::end) or `not`) before
/// repeating them.
pub struct Many<P> {
    parser: P,
}

impl<P> Many<P> {
    pub fn new(parser: P) -> Self {
        Many { parser }
    }
}

fn repeat<'code, P>(
    parser: &P,
    mut results: Vec<P::Output>,
    mut cursor: Cursor<'code>,
) -> ParseResult<'code, Vec<P::Output>>
where
    P: Parser<'code>,
{
    loop {
        match parser.parse(cursor.clone())? {
            Outcome::Success(success) => {
                results.push(success.value);
                cursor = success.remainder;
            }
            Outcome::Failure(_) => return Ok(Outcome::succeed(results, cursor)),
        }
    }
}

impl<'code, P> Parser<'code> for Many<P>
where
    P: Parser<'code>,
{
    type Output = Vec<P::Output>;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        repeat(&self.parser, Vec::new(), cursor)
    }
}

/// Convenience function to create a Many parser
pub fn many<'code, P>(parser: P) -> Many<P>
where
    P: Parser<'code>,
{
    Many::new(parser)
}

/// Parser combinator that matches one or more occurrences of the given parser
pub struct AtLeastOnce<P> {
    parser: P,
}

impl<P> AtLeastOnce<P> {
    pub fn new(parser: P) -> Self {
        AtLeastOnce { parser }
    }
}

impl<'code, P> Parser<'code> for AtLeastOnce<P>
where
    P: Parser<'code>,
{
    type Output = Vec<P::Output>;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        // The first match is required
        self.parser
            .parse(cursor)?
            .if_success(|first| repeat(&self.parser, vec![first.value], first.remainder))
    }
}

pub fn at_least_once<'code, P>(parser: P) -> AtLeastOnce<P>
where
    P: Parser<'code>,
{
    AtLeastOnce::new(parser)
}

/// Wraps a single value in a `Vec`, for concatenation with repeated parsers
pub struct Once<P> {
    parser: P,
}

impl<P> Once<P> {
    pub fn new(parser: P) -> Self {
        Once { parser }
    }
}

impl<'code, P> Parser<'code> for Once<P>
where
    P: Parser<'code>,
{
    type Output = Vec<P::Output>;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        Ok(self.parser.parse(cursor)?.map(|value| vec![value]))
    }
}

/// Extension trait for repetition methods
pub trait ManyExt<'code>: Parser<'code> + Sized {
    fn many(self) -> Many<Self> {
        Many::new(self)
    }

    fn at_least_once(self) -> AtLeastOnce<Self> {
        AtLeastOnce::new(self)
    }

    fn once(self) -> Once<Self> {
        Once::new(self)
    }
}

impl<'code, P> ManyExt<'code> for P where P: Parser<'code> {}
