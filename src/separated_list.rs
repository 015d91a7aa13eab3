use crate::cursor::Cursor;
use crate::outcome::{Outcome, ParseResult};
use crate::parser::Parser;

/// Parser combinator that matches a list of items separated by a parser
///
/// Parses at least one item, followed by zero or more occurrences of
/// (separator + item). A separator that fails without consuming input ends the
/// list; an item missing after a separator is an error.
///
/// # Examples
/// - `"a,b,c"` with separator `,` → `vec!['a', 'b', 'c']`
///
/// Whitespace is not handled automatically.
pub struct SeparatedList<P, PS> {
    parser: P,
    separator: PS,
}

impl<P, PS> SeparatedList<P, PS> {
    pub fn new(parser: P, separator: PS) -> Self {
        SeparatedList { parser, separator }
    }
}

impl<'code, P, PS> Parser<'code> for SeparatedList<P, PS>
where
    P: Parser<'code>,
    PS: Parser<'code>,
{
    type Output = Vec<P::Output>;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        let first = match self.parser.parse(cursor)? {
            Outcome::Success(first) => first,
            Outcome::Failure(failure) => return Ok(Outcome::Failure(failure)),
        };
        let mut results = vec![first.value];
        let mut cursor = first.remainder;

        loop {
            let start = cursor.position();
            let after_separator = match self.separator.parse(cursor.clone())? {
                Outcome::Success(separator) => separator.remainder,
                Outcome::Failure(failure) if failure.position() == start => break,
                Outcome::Failure(failure) => return Ok(Outcome::Failure(failure)),
            };

            // An item is required after a separator
            match self.parser.parse(after_separator)? {
                Outcome::Success(item) => {
                    results.push(item.value);
                    cursor = item.remainder;
                }
                Outcome::Failure(failure) => return Ok(Outcome::Failure(failure)),
            }
        }

        Ok(Outcome::succeed(results, cursor))
    }
}

/// Creates a parser that matches one or more items separated by `separator`
pub fn separated_by<'code, P, PS>(parser: P, separator: PS) -> SeparatedList<P, PS>
where
    P: Parser<'code>,
    PS: Parser<'code>,
{
    SeparatedList::new(parser, separator)
}

pub trait SeparatedListExt<'code>: Parser<'code> + Sized {
    fn separated_by<PS>(self, separator: PS) -> SeparatedList<Self, PS>
    where
        PS: Parser<'code>,
    {
        SeparatedList::new(self, separator)
    }
}

impl<'code, P> SeparatedListExt<'code> for P where P: Parser<'code> {}
