use crate::cursor::Cursor;
use crate::outcome::ParseResult;
use crate::parser::Parser;

/// Parser combinator that sequences two parsers and returns both results as a tuple
///
/// Chaining several `.and()` calls produces nested tuples like `((a, b), c)`;
/// the destructuring pattern follows the parsing order.
///
/// ```
/// use parsnip::prelude::*;
/// use parsnip::chars::{digit, literal_char};
///
/// let ((whole, _), fraction) = digit()
///     .and(literal_char('.'))
///     .and(digit())
///     .parse_str("3.5")
///     .unwrap();
/// assert_eq!((whole, fraction), ('3', '5'));
/// ```
pub struct And<P1, P2> {
    parser1: P1,
    parser2: P2,
}

impl<P1, P2> And<P1, P2> {
    pub fn new(parser1: P1, parser2: P2) -> Self {
        And { parser1, parser2 }
    }
}

impl<'code, P1, P2> Parser<'code> for And<P1, P2>
where
    P1: Parser<'code>,
    P2: Parser<'code>,
{
    type Output = (P1::Output, P2::Output);

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        self.parser1.parse(cursor)?.if_success(|first| {
            Ok(self
                .parser2
                .parse(first.remainder)?
                .map(|second| (first.value, second)))
        })
    }
}

/// Convenience function to create an And parser
pub fn and<'code, P1, P2>(parser1: P1, parser2: P2) -> And<P1, P2>
where
    P1: Parser<'code>,
    P2: Parser<'code>,
{
    And::new(parser1, parser2)
}

/// Extension trait to add .and() method support for parsers
pub trait AndExt<'code>: Parser<'code> + Sized {
    fn and<P>(self, other: P) -> And<Self, P>
    where
        P: Parser<'code>,
    {
        And::new(self, other)
    }
}

/// Implement AndExt for all parsers
impl<'code, P> AndExt<'code> for P where P: Parser<'code> {}
