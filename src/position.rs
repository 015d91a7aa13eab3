use crate::cursor::Cursor;
use crate::error::SourceLocation;
use crate::outcome::{Outcome, ParseResult};
use crate::parser::Parser;

/// Represents a span in the source code with start and end positions
/// and a reference to the source code
///
/// Positions count characters; the matching byte range is kept alongside.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span<'code> {
    /// Reference to the source code
    pub source: &'code str,
    /// Start position (inclusive)
    pub start: usize,
    /// End position (exclusive)
    pub end: usize,
    start_offset: usize,
    end_offset: usize,
}

impl<'code> Span<'code> {
    /// The span of text between two cursors over the same source
    pub fn between(start: &Cursor<'code>, end: &Cursor<'code>) -> Self {
        Span {
            source: start.source(),
            start: start.position(),
            end: end.position(),
            start_offset: start.offset(),
            end_offset: end.offset(),
        }
    }

    /// Get the length of the span, in characters
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// The text this span covers
    pub fn as_str(&self) -> &'code str {
        self.source
            .get(self.start_offset..self.end_offset)
            .unwrap_or_default()
    }

    /// Line and column of the first character
    pub fn location(&self) -> SourceLocation {
        SourceLocation::locate(self.source, self.start_offset, self.start)
    }
}

/// A parser combinator that captures the position span of a successful parse
pub struct Position<P> {
    parser: P,
}

impl<P> Position<P> {
    pub fn new(parser: P) -> Self {
        Position { parser }
    }
}

impl<'code, P> Parser<'code> for Position<P>
where
    P: Parser<'code>,
{
    type Output = (P::Output, Span<'code>);

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        self.parser.parse(cursor.clone())?.if_success(|parsed| {
            let span = Span::between(&cursor, &parsed.remainder);
            Ok(Outcome::succeed((parsed.value, span), parsed.remainder))
        })
    }
}

/// Extension trait to add position tracking to any parser
pub trait PositionExt<'code>: Parser<'code> + Sized {
    /// Pair this parser's value with the span of text it consumed
    fn with_span(self) -> Position<Self> {
        Position::new(self)
    }
}

impl<'code, P> PositionExt<'code> for P where P: Parser<'code> {}

/// Convenience function to create a Position combinator
pub fn position<P>(parser: P) -> Position<P> {
    Position::new(parser)
}
