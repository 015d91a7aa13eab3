use crate::cursor::Cursor;
use crate::fail;
use crate::outcome::{Outcome, ParseResult};
use crate::parser::Parser;
use std::fmt::Debug;

/// Parser that applies a predicate function to filter the output of another parser
///
/// A rejected value fails at the position the inner parser started from, with
/// the message `unexpected <value>`.
pub struct FilterParser<P, F> {
    parser: P,
    predicate: F,
}

impl<P, F> FilterParser<P, F> {
    pub fn new(parser: P, predicate: F) -> Self {
        Self { parser, predicate }
    }
}

impl<'code, P, F, T> Parser<'code> for FilterParser<P, F>
where
    P: Parser<'code, Output = T>,
    F: Fn(&T) -> bool,
    T: Debug + 'code,
{
    type Output = T;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        match self.parser.parse(cursor.clone())? {
            Outcome::Success(success) if !(self.predicate)(&success.value) => {
                let value = success.value;
                Ok(fail!(cursor, "unexpected {:?}", value))
            }
            other => Ok(other),
        }
    }
}

pub fn filter<'code, P, F>(parser: P, predicate: F) -> FilterParser<P, F>
where
    P: Parser<'code>,
    F: Fn(&P::Output) -> bool,
{
    FilterParser::new(parser, predicate)
}

/// Extension trait to add filter method to all parsers
pub trait FilterExt<'code>: Parser<'code> + Sized {
    fn filter<F>(self, predicate: F) -> FilterParser<Self, F>
    where
        F: Fn(&Self::Output) -> bool,
    {
        FilterParser::new(self, predicate)
    }
}

impl<'code, P: Parser<'code>> FilterExt<'code> for P {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chars::{any_char, letter};
    use crate::many::ManyExt;
    use crate::text::TextExt;

    #[test]
    fn test_filter_accepts() {
        let vowel = any_char().filter(|c| "aeiou".contains(*c));
        assert_eq!(vowel.parse_str("e").unwrap(), 'e');
    }

    #[test]
    fn test_filter_rejects_at_start_position() {
        let short = letter().at_least_once().text().filter(|word| word.len() <= 3);
        let failure = short
            .parse(Cursor::new("longer"))
            .unwrap()
            .into_result()
            .unwrap_err();
        assert_eq!(failure.position(), 0);
        assert_eq!(failure.message(), "unexpected \"longer\"");
    }

    #[test]
    fn test_filter_passes_inner_failure_through() {
        let failure = filter(letter(), |_| true)
            .parse(Cursor::new("1"))
            .unwrap()
            .into_result()
            .unwrap_err();
        assert_eq!(failure.message(), "expected letter, found '1'");
    }
}
