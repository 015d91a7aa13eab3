use crate::outcome::Failure;
use crate::rule::RuleId;
use std::fmt;
use thiserror::Error;

/// Human-readable location of a character position in the source text
///
/// Lines and columns are 1-based and count characters, not bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SourceLocation {
    pub position: usize,
    pub line: usize,
    pub column: usize,
}

impl SourceLocation {
    /// Locate `offset` (a byte offset on a character boundary) within `source`
    pub(crate) fn locate(source: &str, offset: usize, position: usize) -> Self {
        let before = source.get(..offset).unwrap_or(source);
        let line = before.matches('\n').count() + 1;
        let line_start = before.rfind('\n').map_or(0, |i| i + 1);
        let column = before[line_start..].chars().count() + 1;
        Self {
            position,
            line,
            column,
        }
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "line {}, column {} (position {})",
            self.line, self.column, self.position
        )
    }
}

/// Renders up to two lines of context on either side of `location`, with a
/// pointer under the offending column.
pub(crate) fn excerpt(source: &str, location: &SourceLocation) -> String {
    let first = location.line.saturating_sub(2).max(1);
    let last = location.line + 2;
    let mut lines = Vec::new();

    for (index, content) in source.split('\n').enumerate() {
        let number = index + 1;
        if number < first {
            continue;
        }
        if number > last {
            break;
        }

        let content = content.trim_end_matches('\r');
        let prefix = if number == location.line {
            format!("  > {} | ", number)
        } else {
            format!("    {} | ", number)
        };
        lines.push(format!("{}{}", prefix, content));

        if number == location.line {
            let pointer_offset = prefix.len() + location.column - 1;
            lines.push(format!("{}^--- here", " ".repeat(pointer_offset)));
        }
    }

    lines.join("\n")
}

/// Misuse of a [`Cursor`](crate::Cursor) that correct combinators never reach
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CursorError {
    #[error("the cursor is already at the end of the source (position {position})")]
    AtEnd { position: usize },
}

/// A defect in the grammar rather than in the input
///
/// These abort the whole parse: no alternation combinator recovers from them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GrammarError {
    #[error("left recursion in the grammar at {location} ({rule})")]
    LeftRecursion {
        rule: RuleId,
        location: SourceLocation,
    },
    #[error("{rule} was invoked before it was defined")]
    UndefinedRule { rule: RuleId },
    #[error("{rule} is already defined")]
    RuleRedefined { rule: RuleId },
}

/// Error returned by [`Parser::parse_str`](crate::Parser::parse_str)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The input did not match and no alternative remained
    #[error("syntax error at {location}: {message}{}", describe_expectations(.expectations))]
    Syntax {
        location: SourceLocation,
        message: String,
        expectations: Vec<String>,
        excerpt: String,
    },
    #[error(transparent)]
    Grammar(#[from] GrammarError),
}

impl ParseError {
    pub fn from_failure(failure: &Failure<'_>) -> Self {
        let cursor = failure.failed_at();
        let location = cursor.location();
        ParseError::Syntax {
            location,
            message: failure.message(),
            expectations: failure.expectations().iter().cloned().collect(),
            excerpt: excerpt(cursor.source(), &location),
        }
    }

    /// Where the parse stopped, when the error is tied to a position
    pub fn location(&self) -> Option<SourceLocation> {
        match self {
            ParseError::Syntax { location, .. } => Some(*location),
            ParseError::Grammar(GrammarError::LeftRecursion { location, .. }) => Some(*location),
            ParseError::Grammar(_) => None,
        }
    }

    pub fn position(&self) -> Option<usize> {
        self.location().map(|location| location.position)
    }

    /// Source context around a syntax error
    pub fn excerpt(&self) -> Option<&str> {
        match self {
            ParseError::Syntax { excerpt, .. } => Some(excerpt),
            ParseError::Grammar(_) => None,
        }
    }
}

fn describe_expectations(expectations: &[String]) -> String {
    if expectations.is_empty() {
        String::new()
    } else {
        format!("; expected {}", expectations.join(" or "))
    }
}
