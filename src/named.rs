use crate::cursor::Cursor;
use crate::outcome::{Outcome, ParseResult};
use crate::parser::Parser;
use std::borrow::Cow;

/// Reports a failure that consumed nothing as expecting `label`
///
/// Failures past the starting position keep their own, more specific,
/// expectations.
pub struct Named<P> {
    parser: P,
    label: Cow<'static, str>,
}

impl<P> Named<P> {
    pub fn new(parser: P, label: impl Into<Cow<'static, str>>) -> Self {
        Named {
            parser,
            label: label.into(),
        }
    }
}

impl<'code, P> Parser<'code> for Named<P>
where
    P: Parser<'code>,
{
    type Output = P::Output;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        let start = cursor.position();
        self.parser.parse(cursor)?.if_failure(|failure| {
            if failure.position() == start {
                Ok(Outcome::Failure(failure.expecting([self.label.as_ref()])))
            } else {
                Ok(Outcome::Failure(failure))
            }
        })
    }
}

pub fn named<'code, P>(parser: P, label: impl Into<Cow<'static, str>>) -> Named<P>
where
    P: Parser<'code>,
{
    Named::new(parser, label)
}

pub trait NamedExt<'code>: Parser<'code> + Sized {
    fn named(self, label: impl Into<Cow<'static, str>>) -> Named<Self> {
        Named::new(self, label)
    }
}

impl<'code, P> NamedExt<'code> for P where P: Parser<'code> {}
