use crate::cursor::Cursor;
use crate::outcome::{Outcome, ParseResult};
use crate::parser::Parser;

/// Parser combinator that transforms the output of a parser using a mapping function
pub struct Map<P, F> {
    parser: P,
    mapper: F,
}

impl<P, F> Map<P, F> {
    pub fn new(parser: P, mapper: F) -> Self {
        Map { parser, mapper }
    }
}

impl<'code, P, F, T, U> Parser<'code> for Map<P, F>
where
    P: Parser<'code, Output = T>,
    F: Fn(T) -> U,
{
    type Output = U;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, U> {
        Ok(self.parser.parse(cursor)?.map(&self.mapper))
    }
}

/// Convenience function to create a Map parser
pub fn map<'code, P, F, T, U>(parser: P, mapper: F) -> Map<P, F>
where
    P: Parser<'code, Output = T>,
    F: Fn(T) -> U,
{
    Map::new(parser, mapper)
}

/// Parser that succeeds with a fixed value without consuming input
#[derive(Debug, Clone)]
pub struct Return<T> {
    value: T,
}

impl<'code, T> Parser<'code> for Return<T>
where
    T: Clone,
{
    type Output = T;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, T> {
        Ok(Outcome::succeed(self.value.clone(), cursor))
    }
}

pub fn value<T>(value: T) -> Return<T>
where
    T: Clone,
{
    Return { value }
}

/// Replace a parser's value with a fixed one
pub struct To<P, T> {
    parser: P,
    value: T,
}

impl<P, T> To<P, T> {
    pub fn new(parser: P, value: T) -> Self {
        To { parser, value }
    }
}

impl<'code, P, T> Parser<'code> for To<P, T>
where
    P: Parser<'code>,
    T: Clone,
{
    type Output = T;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, T> {
        Ok(self.parser.parse(cursor)?.map(|_| self.value.clone()))
    }
}

/// Extension trait to add .map() and .to() method support for parsers
pub trait MapExt<'code>: Parser<'code> + Sized {
    fn map<F, U>(self, mapper: F) -> Map<Self, F>
    where
        F: Fn(Self::Output) -> U,
    {
        Map::new(self, mapper)
    }

    fn to<T>(self, value: T) -> To<Self, T>
    where
        T: Clone,
    {
        To::new(self, value)
    }
}

/// Implement MapExt for all parsers
impl<'code, P> MapExt<'code> for P where P: Parser<'code> {}
