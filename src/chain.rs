//! Binary operator chains
//!
//! `operand (operator operand)*`, folded either to the left or to the right.
//! Layering one chain per precedence level, with the operand of each level
//! being the chain of the next tighter level, gives a complete expression
//! grammar.

use crate::cursor::Cursor;
use crate::outcome::{Outcome, ParseResult, Success};
use crate::parser::Parser;

/// Parses the first operand and every following `(operator, operand)` pair
///
/// The loop stops, keeping what it has, when the operator or the operand fails
/// without consuming input, or when a pair consumes nothing at all. A failure
/// that consumed input is returned as the failure of the whole chain.
fn links<'code, O, P>(
    operator: &O,
    operand: &P,
    cursor: Cursor<'code>,
) -> ParseResult<'code, (P::Output, Vec<(O::Output, P::Output)>)>
where
    O: Parser<'code>,
    P: Parser<'code>,
{
    let Success {
        value: first,
        remainder: mut cursor,
    } = match operand.parse(cursor)? {
        Outcome::Success(success) => success,
        Outcome::Failure(failure) => return Ok(Outcome::Failure(failure)),
    };

    let mut rest = Vec::new();
    loop {
        let start = cursor.position();
        let op = match operator.parse(cursor.clone())? {
            Outcome::Success(op) => op,
            Outcome::Failure(failure) if failure.position() == start => break,
            Outcome::Failure(failure) => return Ok(Outcome::Failure(failure)),
        };
        match operand.parse(op.remainder)? {
            Outcome::Success(next) if next.remainder.position() > start => {
                rest.push((op.value, next.value));
                cursor = next.remainder;
            }
            Outcome::Success(_) => break,
            Outcome::Failure(failure) if failure.position() == start => break,
            Outcome::Failure(failure) => return Ok(Outcome::Failure(failure)),
        }
    }

    Ok(Outcome::succeed((first, rest), cursor))
}

/// Left-associative operator chain: `a - b - c` is `(a - b) - c`
pub struct ChainOperator<O, P, F> {
    operator: O,
    operand: P,
    apply: F,
}

impl<O, P, F> ChainOperator<O, P, F> {
    pub fn new(operator: O, operand: P, apply: F) -> Self {
        ChainOperator {
            operator,
            operand,
            apply,
        }
    }
}

impl<'code, O, P, F> Parser<'code> for ChainOperator<O, P, F>
where
    O: Parser<'code>,
    P: Parser<'code>,
    F: Fn(O::Output, P::Output, P::Output) -> P::Output,
{
    type Output = P::Output;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        Ok(links(&self.operator, &self.operand, cursor)?.map(|(first, rest)| {
            rest.into_iter()
                .fold(first, |left, (op, right)| (self.apply)(op, left, right))
        }))
    }
}

pub fn chain_operator<'code, O, P, F>(operator: O, operand: P, apply: F) -> ChainOperator<O, P, F>
where
    O: Parser<'code>,
    P: Parser<'code>,
    F: Fn(O::Output, P::Output, P::Output) -> P::Output,
{
    ChainOperator::new(operator, operand, apply)
}

/// Right-associative operator chain: `a ^ b ^ c` is `a ^ (b ^ c)`
pub struct ChainRightOperator<O, P, F> {
    operator: O,
    operand: P,
    apply: F,
}

impl<O, P, F> ChainRightOperator<O, P, F> {
    pub fn new(operator: O, operand: P, apply: F) -> Self {
        ChainRightOperator {
            operator,
            operand,
            apply,
        }
    }
}

impl<'code, O, P, F> Parser<'code> for ChainRightOperator<O, P, F>
where
    O: Parser<'code>,
    P: Parser<'code>,
    F: Fn(O::Output, P::Output, P::Output) -> P::Output,
{
    type Output = P::Output;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        Ok(links(&self.operator, &self.operand, cursor)?.map(|(first, rest)| {
            // Each operator joins the operand on its left to everything on its right
            let mut pairs = rest.into_iter().rev();
            match pairs.next() {
                None => first,
                Some((last_op, last)) => {
                    let (op, right) = pairs.fold((last_op, last), |(op, right), (prev_op, left)| {
                        (prev_op, (self.apply)(op, left, right))
                    });
                    (self.apply)(op, first, right)
                }
            }
        }))
    }
}

pub fn chain_right_operator<'code, O, P, F>(
    operator: O,
    operand: P,
    apply: F,
) -> ChainRightOperator<O, P, F>
where
    O: Parser<'code>,
    P: Parser<'code>,
    F: Fn(O::Output, P::Output, P::Output) -> P::Output,
{
    ChainRightOperator::new(operator, operand, apply)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chars::{digit, literal_char};
    use crate::map::MapExt;
    use crate::token::token;
    use pretty_assertions::assert_eq;

    fn number() -> impl for<'code> Parser<'code, Output = String> {
        digit().map(|c| c.to_string())
    }

    fn show(op: char, left: String, right: String) -> String {
        format!("({}{}{})", left, op, right)
    }

    #[test]
    fn test_left_chain_groups_left() {
        let parser = chain_operator(literal_char('-'), number(), show);
        assert_eq!(parser.parse_str("8-3-2").unwrap(), "((8-3)-2)");
    }

    #[test]
    fn test_right_chain_groups_right() {
        let parser = chain_right_operator(literal_char('^'), number(), show);
        assert_eq!(parser.parse_str("2^3^2").unwrap(), "(2^(3^2))");
        assert_eq!(parser.parse_str("1^2^3^4").unwrap(), "(1^(2^(3^4)))");
    }

    #[test]
    fn test_single_operand() {
        let left = chain_operator(literal_char('+'), number(), show);
        let right = chain_right_operator(literal_char('+'), number(), show);
        assert_eq!(left.parse_str("7").unwrap(), "7");
        assert_eq!(right.parse_str("7").unwrap(), "7");
    }

    #[test]
    fn test_chain_stops_before_unknown_operator() {
        let parser = chain_operator(literal_char('+'), number(), show);
        let success = parser
            .parse(Cursor::new("1+2*3"))
            .unwrap()
            .into_result()
            .unwrap();
        assert_eq!(success.value, "(1+2)");
        assert_eq!(success.remainder.rest(), "*3");
    }

    #[test]
    fn test_dangling_operator_fails_after_it() {
        let parser = chain_operator(literal_char('+'), number(), show);
        let failure = parser
            .parse(Cursor::new("1+"))
            .unwrap()
            .into_result()
            .unwrap_err();
        assert_eq!(failure.position(), 2);
        assert_eq!(failure.message(), "unexpected end of input, expected digit");
    }

    #[test]
    fn test_chain_with_tokens() {
        let parser = chain_operator(token(literal_char('-')), token(number()), show);
        assert_eq!(parser.parse_str(" 9 - 4 - 1 ").unwrap(), "((9-4)-1)");
    }

    #[test]
    fn test_chain_fails_without_first_operand() {
        let parser = chain_operator(literal_char('+'), number(), show);
        assert!(parser.parse_str("+1").is_err());
    }
}
