use crate::cursor::Cursor;
use crate::outcome::ParseResult;
use crate::parser::Parser;

/// Parser that matches content between opening and closing delimiters
///
/// Parses `open content close` and returns just the content value. Whitespace
/// is not skipped; wrap the delimiters in [`token`](crate::token::token) for that.
///
/// # Examples
/// - `"[content]"` → `"content"`
/// - `"(value)"` → `"value"`
pub struct Between<P1, P2, P3> {
    open: P1,
    content: P2,
    close: P3,
}

impl<P1, P2, P3> Between<P1, P2, P3> {
    pub fn new(open: P1, content: P2, close: P3) -> Self {
        Between {
            open,
            content,
            close,
        }
    }
}

impl<'code, P1, P2, P3> Parser<'code> for Between<P1, P2, P3>
where
    P1: Parser<'code>,
    P2: Parser<'code>,
    P3: Parser<'code>,
{
    type Output = P2::Output;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        self.open.parse(cursor)?.if_success(|open| {
            self.content.parse(open.remainder)?.if_success(|content| {
                Ok(self
                    .close
                    .parse(content.remainder)?
                    .map(|_| content.value))
            })
        })
    }
}

/// Creates a parser that matches content between opening and closing delimiters
pub fn between<'code, P1, P2, P3>(open: P1, content: P2, close: P3) -> Between<P1, P2, P3>
where
    P1: Parser<'code>,
    P2: Parser<'code>,
    P3: Parser<'code>,
{
    Between::new(open, content, close)
}
