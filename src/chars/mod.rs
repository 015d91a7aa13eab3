//! Character-level primitives: single characters matched by predicate,
//! literal strings, and the named character classes.

pub mod class;
pub mod satisfy;
pub mod string;

pub use class::{
    CharClass, digit, letter, letter_or_digit, lower, numeric, upper, whitespace,
};
pub use satisfy::{Satisfy, any_char, literal_char, satisfy};
pub use string::{LiteralString, literal_string};
