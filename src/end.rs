use crate::cursor::Cursor;
use crate::outcome::{Failure, Outcome, ParseResult};
use crate::parser::Parser;

/// Succeeds with `()` only when no input is left
#[derive(Debug, Clone, Copy, Default)]
pub struct End;

impl<'code> Parser<'code> for End {
    type Output = ();

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, ()> {
        match cursor.current() {
            Err(_) => Ok(Outcome::succeed((), cursor)),
            Ok(found) => {
                let failure = Failure::deferred(cursor, move || {
                    format!("unexpected '{}'", found)
                });
                Ok(Outcome::Failure(failure.with_expectation("end of input")))
            }
        }
    }
}

pub fn end() -> End {
    End
}

/// Runs a parser and then requires the end of input
pub struct Complete<P> {
    parser: P,
}

impl<P> Complete<P> {
    pub fn new(parser: P) -> Self {
        Complete { parser }
    }
}

impl<'code, P> Parser<'code> for Complete<P>
where
    P: Parser<'code>,
{
    type Output = P::Output;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        self.parser.parse(cursor)?.if_success(|parsed| {
            Ok(End.parse(parsed.remainder)?.map(|()| parsed.value))
        })
    }
}

pub trait EndExt<'code>: Parser<'code> + Sized {
    /// Require that this parser consumes the rest of the input
    fn end(self) -> Complete<Self> {
        Complete::new(self)
    }
}

impl<'code, P> EndExt<'code> for P where P: Parser<'code> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chars::literal_string;

    #[test]
    fn test_end_on_empty_input() {
        assert_eq!(end().parse_str(""), Ok(()));
    }

    #[test]
    fn test_end_reports_first_unconsumed_character() {
        let failure = literal_string("ab")
            .end()
            .parse(Cursor::new("abc"))
            .unwrap()
            .into_result()
            .unwrap_err();
        assert_eq!(failure.position(), 2);
        assert_eq!(failure.message(), "unexpected 'c'");
        assert!(failure.expectations().contains("end of input"));
    }

    #[test]
    fn test_end_names_expectation_once() {
        let error = end().parse_str("xyz").unwrap_err().to_string();
        assert_eq!(error.matches("end of input").count(), 1);
    }

    #[test]
    fn test_complete_match() {
        assert_eq!(literal_string("ab").end().parse_str("ab").unwrap(), "ab");
    }
}
