//! Monadic sequencing
//!
//! [`Then`] is the bind: the value of the first parser chooses the parser that
//! runs next. [`IgnoreThen`] and [`ThenIgnore`] sequence two fixed parsers and
//! keep one side's value.

use crate::cursor::Cursor;
use crate::outcome::ParseResult;
use crate::parser::Parser;

/// Run `parser`, then the parser built from its value
pub struct Then<P, F> {
    parser: P,
    next: F,
}

impl<P, F> Then<P, F> {
    pub fn new(parser: P, next: F) -> Self {
        Then { parser, next }
    }
}

impl<'code, P, F, Q> Parser<'code> for Then<P, F>
where
    P: Parser<'code>,
    F: Fn(P::Output) -> Q,
    Q: Parser<'code>,
{
    type Output = Q::Output;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        self.parser
            .parse(cursor)?
            .if_success(|first| (self.next)(first.value).parse(first.remainder))
    }
}

/// Convenience function to create a Then parser
pub fn then<'code, P, F, Q>(parser: P, next: F) -> Then<P, F>
where
    P: Parser<'code>,
    F: Fn(P::Output) -> Q,
    Q: Parser<'code>,
{
    Then::new(parser, next)
}

/// Run both parsers, keep the second value
pub struct IgnoreThen<P1, P2> {
    ignored: P1,
    parser: P2,
}

impl<P1, P2> IgnoreThen<P1, P2> {
    pub fn new(ignored: P1, parser: P2) -> Self {
        IgnoreThen { ignored, parser }
    }
}

impl<'code, P1, P2> Parser<'code> for IgnoreThen<P1, P2>
where
    P1: Parser<'code>,
    P2: Parser<'code>,
{
    type Output = P2::Output;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        self.ignored
            .parse(cursor)?
            .if_success(|skipped| self.parser.parse(skipped.remainder))
    }
}

/// Run both parsers, keep the first value
pub struct ThenIgnore<P1, P2> {
    parser: P1,
    ignored: P2,
}

impl<P1, P2> ThenIgnore<P1, P2> {
    pub fn new(parser: P1, ignored: P2) -> Self {
        ThenIgnore { parser, ignored }
    }
}

impl<'code, P1, P2> Parser<'code> for ThenIgnore<P1, P2>
where
    P1: Parser<'code>,
    P2: Parser<'code>,
{
    type Output = P1::Output;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        self.parser.parse(cursor)?.if_success(|kept| {
            Ok(self
                .ignored
                .parse(kept.remainder)?
                .map(|_| kept.value))
        })
    }
}

/// Extension trait for sequencing methods
pub trait ThenExt<'code>: Parser<'code> + Sized {
    /// Feed this parser's value into `next` to choose what to parse after it
    fn then<F, Q>(self, next: F) -> Then<Self, F>
    where
        F: Fn(Self::Output) -> Q,
        Q: Parser<'code>,
    {
        Then::new(self, next)
    }

    fn ignore_then<P>(self, other: P) -> IgnoreThen<Self, P>
    where
        P: Parser<'code>,
    {
        IgnoreThen::new(self, other)
    }

    fn then_ignore<P>(self, other: P) -> ThenIgnore<Self, P>
    where
        P: Parser<'code>,
    {
        ThenIgnore::new(self, other)
    }
}

impl<'code, P> ThenExt<'code> for P where P: Parser<'code> {}
