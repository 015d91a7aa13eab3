use crate::chars::{CharClass, whitespace};
use crate::cursor::Cursor;
use crate::many::Many;
use crate::outcome::ParseResult;
use crate::parser::Parser;
use crate::then::{IgnoreThen, ThenIgnore};

type Padded<P> = ThenIgnore<IgnoreThen<Many<CharClass>, P>, Many<CharClass>>;

/// Parser surrounded by optional whitespace, which is skipped
pub struct Token<P> {
    inner: Padded<P>,
}

impl<P> Token<P> {
    pub fn new(parser: P) -> Self {
        Token {
            inner: ThenIgnore::new(
                IgnoreThen::new(Many::new(whitespace()), parser),
                Many::new(whitespace()),
            ),
        }
    }
}

impl<'code, P> Parser<'code> for Token<P>
where
    P: Parser<'code>,
{
    type Output = P::Output;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        self.inner.parse(cursor)
    }
}

pub fn token<'code, P>(parser: P) -> Token<P>
where
    P: Parser<'code>,
{
    Token::new(parser)
}

pub trait TokenExt<'code>: Parser<'code> + Sized {
    fn token(self) -> Token<Self> {
        Token::new(self)
    }
}

impl<'code, P> TokenExt<'code> for P where P: Parser<'code> {}
