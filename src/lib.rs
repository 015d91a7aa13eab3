//! # Parsnip - Parser Combinator Library
//!
//! Parsnip builds recursive-descent parsers by composing small typed parsers
//! into larger ones. A parser is a pure function from an immutable [`Cursor`]
//! to an [`Outcome`]: either a value together with the remaining input, or a
//! [`Failure`] recording where matching stopped and what was expected there.
//!
//! - **Two alternation operators**: [`xor`](xor::xor) commits to a branch as soon
//!   as it consumes input, [`or`](or::or) backtracks regardless
//! - **Left-recursion detection**: a rule that re-enters itself without
//!   consuming input aborts the parse with [`GrammarError::LeftRecursion`]
//!   instead of overflowing the stack
//! - **Rich error reporting**: [`ParseError`] carries line, column, expected
//!   alternatives, and an excerpt of the source
//!
//! ```
//! use parsnip::prelude::*;
//! use parsnip::{chain_operator, digit, literal_char, token};
//!
//! let number = token(digit().at_least_once().text())
//!     .map(|digits| digits.parse::<i64>().unwrap_or_default());
//! let sum = chain_operator(token(literal_char('+')), number, |_, a, b| a + b);
//!
//! assert_eq!(sum.end().parse_str(" 1 + 20 + 300 ").unwrap(), 321);
//! ```

#[macro_use]
mod logging;

pub mod and;
pub mod attempt;
pub mod between;
pub mod chain;
pub mod chars;
pub mod cursor;
pub mod end;
pub mod error;
pub mod filter;
pub mod lazy;
pub mod many;
pub mod map;
pub mod named;
pub mod not;
pub mod optional;
pub mod or;
pub mod outcome;
pub mod parser;
pub mod position;
pub mod rule;
pub mod separated_list;
pub mod text;
pub mod then;
pub mod token;
pub mod xor;

pub use and::and;
pub use attempt::attempt;
pub use between::between;
pub use chain::{chain_operator, chain_right_operator};
pub use chars::{
    any_char, digit, letter, letter_or_digit, literal_char, literal_string, lower, numeric,
    satisfy, upper, whitespace,
};
pub use cursor::Cursor;
pub use end::end;
pub use error::{CursorError, GrammarError, ParseError, SourceLocation};
pub use filter::filter;
pub use lazy::{Ref, reference};
pub use many::{at_least_once, many};
pub use map::{map, value};
pub use named::named;
pub use not::not;
pub use optional::optional;
pub use or::or;
pub use outcome::{Failure, Outcome, ParseResult, Success};
pub use parser::{BoxedParser, Parser, from_fn};
pub use position::{Position, Span, position};
pub use rule::{Rule, RuleId, recursive};
pub use separated_list::separated_by;
pub use then::then;
pub use token::token;
pub use xor::xor;

/// Every extension trait, for method-style grammar building
pub mod prelude {
    pub use crate::and::AndExt;
    pub use crate::attempt::AttemptExt;
    pub use crate::end::EndExt;
    pub use crate::filter::FilterExt;
    pub use crate::many::ManyExt;
    pub use crate::map::MapExt;
    pub use crate::named::NamedExt;
    pub use crate::not::NotExt;
    pub use crate::optional::OptionalExt;
    pub use crate::or::OrExt;
    pub use crate::parser::{BoxedExt, Parser};
    pub use crate::position::PositionExt;
    pub use crate::separated_list::SeparatedListExt;
    pub use crate::text::TextExt;
    pub use crate::then::ThenExt;
    pub use crate::token::TokenExt;
    pub use crate::xor::XorExt;
}
