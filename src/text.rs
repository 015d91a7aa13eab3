use crate::cursor::Cursor;
use crate::outcome::ParseResult;
use crate::parser::Parser;

/// Collects parsed characters into a `String`
pub struct Text<P> {
    parser: P,
}

impl<P> Text<P> {
    pub fn new(parser: P) -> Self {
        Text { parser }
    }
}

impl<'code, P> Parser<'code> for Text<P>
where
    P: Parser<'code, Output = Vec<char>>,
{
    type Output = String;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, String> {
        Ok(self
            .parser
            .parse(cursor)?
            .map(|chars| chars.into_iter().collect()))
    }
}

/// Runs two list parsers in sequence and joins their items
pub struct Concat<P1, P2> {
    parser1: P1,
    parser2: P2,
}

impl<P1, P2> Concat<P1, P2> {
    pub fn new(parser1: P1, parser2: P2) -> Self {
        Concat { parser1, parser2 }
    }
}

impl<'code, P1, P2, T> Parser<'code> for Concat<P1, P2>
where
    P1: Parser<'code, Output = Vec<T>>,
    P2: Parser<'code, Output = Vec<T>>,
{
    type Output = Vec<T>;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Vec<T>> {
        self.parser1.parse(cursor)?.if_success(|first| {
            let mut items = first.value;
            Ok(self.parser2.parse(first.remainder)?.map(|rest| {
                items.extend(rest);
                items
            }))
        })
    }
}

/// Methods for parsers that produce lists
pub trait TextExt<'code>: Parser<'code> + Sized {
    /// Turn a `Vec<char>` result into a `String`
    fn text(self) -> Text<Self> {
        Text::new(self)
    }

    fn concat<P>(self, other: P) -> Concat<Self, P>
    where
        P: Parser<'code, Output = Self::Output>,
    {
        Concat::new(self, other)
    }
}

impl<'code, P> TextExt<'code> for P where P: Parser<'code> {}
