use crate::cursor::Cursor;
use crate::error::ParseError;
use crate::outcome::{Outcome, ParseResult};
use std::rc::Rc;

/// Core parser trait for parser combinators
///
/// A parser is a pure function from a cursor to an [`Outcome`]: it holds no
/// mutable state of its own, so running it twice on equal cursors gives equal
/// outcomes.
pub trait Parser<'code> {
    type Output;

    /// Attempt to parse from the given cursor position
    ///
    /// Returns `Ok(Outcome::Success)` with the value and the remainder,
    /// `Ok(Outcome::Failure)` when the input does not match, or `Err` when the
    /// grammar itself is defective (left recursion, undefined rule).
    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output>;

    /// Run this parser over `input` and return the raw outcome
    fn parse_outcome(&self, input: &'code str) -> ParseResult<'code, Self::Output> {
        trace_log!("parsing {} characters", input.chars().count());
        self.parse(Cursor::new(input))
    }

    /// Run this parser over `input`, turning a failure into a [`ParseError`]
    fn parse_str(&self, input: &'code str) -> Result<Self::Output, ParseError> {
        match self.parse_outcome(input)? {
            Outcome::Success(success) => Ok(success.value),
            Outcome::Failure(failure) => {
                debug_log!("parse failed: {}", failure);
                Err(ParseError::from_failure(&failure))
            }
        }
    }
}

impl<'code, P> Parser<'code> for &P
where
    P: Parser<'code> + ?Sized,
{
    type Output = P::Output;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        (**self).parse(cursor)
    }
}

impl<'code, P> Parser<'code> for Box<P>
where
    P: Parser<'code> + ?Sized,
{
    type Output = P::Output;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        (**self).parse(cursor)
    }
}

impl<'code, P> Parser<'code> for Rc<P>
where
    P: Parser<'code> + ?Sized,
{
    type Output = P::Output;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        (**self).parse(cursor)
    }
}

/// Type-erased parser handle; cloning shares the underlying parser
pub struct BoxedParser<'code, T> {
    parser: Rc<dyn Parser<'code, Output = T> + 'code>,
}

impl<'code, T> BoxedParser<'code, T> {
    pub fn new<P>(parser: P) -> Self
    where
        P: Parser<'code, Output = T> + 'code,
    {
        BoxedParser {
            parser: Rc::new(parser),
        }
    }
}

impl<T> Clone for BoxedParser<'_, T> {
    fn clone(&self) -> Self {
        BoxedParser {
            parser: Rc::clone(&self.parser),
        }
    }
}

impl<'code, T> Parser<'code> for BoxedParser<'code, T> {
    type Output = T;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, T> {
        self.parser.parse(cursor)
    }
}

/// Extension trait to add .boxed() method support for parsers
pub trait BoxedExt<'code>: Parser<'code> + Sized + 'code {
    fn boxed(self) -> BoxedParser<'code, Self::Output> {
        BoxedParser::new(self)
    }
}

/// Implement BoxedExt for all parsers
impl<'code, P> BoxedExt<'code> for P where P: Parser<'code> + 'code {}

/// Parser backed by a closure
pub struct FnParser<F> {
    function: F,
}

impl<'code, F, T> Parser<'code> for FnParser<F>
where
    F: Fn(Cursor<'code>) -> ParseResult<'code, T>,
{
    type Output = T;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, T> {
        (self.function)(cursor)
    }
}

/// Turn a closure over cursors into a parser
pub fn from_fn<'code, F, T>(function: F) -> FnParser<F>
where
    F: Fn(Cursor<'code>) -> ParseResult<'code, T>,
{
    FnParser { function }
}
