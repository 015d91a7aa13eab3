use crate::cursor::Cursor;
use crate::outcome::ParseResult;
use crate::parser::Parser;
use crate::rule::{RuleId, guarded};
use once_cell::unsync::OnceCell;

/// A parser that is built on first use and then reused
///
/// Useful for referring to rules that are not constructed yet. The supplier is
/// called at most once per `Ref`; every invocation is checked against the
/// left-recursion guard under this `Ref`'s identity.
///
/// A supplier that builds a fresh grammar on every call gets a fresh identity
/// at every nesting level, which hides left recursion. For self-reference,
/// have the supplier return a shared handle such as a [`Rule`](crate::Rule)
/// clone, or use [`recursive`](crate::recursive).
pub struct Ref<F, P> {
    id: RuleId,
    supplier: F,
    resolved: OnceCell<P>,
}

impl<F, P> Ref<F, P> {
    /// Create a new lazy parser with the given supplier
    pub fn new(supplier: F) -> Self {
        Self {
            id: RuleId::next(),
            supplier,
            resolved: OnceCell::new(),
        }
    }

    pub fn id(&self) -> RuleId {
        self.id
    }
}

impl<'code, F, P> Parser<'code> for Ref<F, P>
where
    F: Fn() -> P,
    P: Parser<'code>,
{
    type Output = P::Output;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        let parser = self.resolved.get_or_init(|| {
            trace_log!("resolving {}", self.id);
            (self.supplier)()
        });
        guarded(self.id, cursor, |cursor| parser.parse(cursor))
    }
}

/// Create a lazy parser from a supplier function
pub fn reference<'code, F, P>(supplier: F) -> Ref<F, P>
where
    F: Fn() -> P,
    P: Parser<'code>,
{
    Ref::new(supplier)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::and::AndExt;
    use crate::chars::literal_char;
    use crate::error::GrammarError;
    use crate::many::many;
    use crate::rule::Rule;
    use std::cell::Cell;

    #[test]
    fn test_reference_basic() {
        let parser = reference(|| literal_char('a'));
        let outcome = parser.parse(Cursor::new("aaaa")).unwrap();
        let success = outcome.into_result().unwrap();
        assert_eq!(success.value, 'a');
        assert_eq!(success.remainder.position(), 1);
    }

    #[test]
    fn test_reference_with_many() {
        let parser = reference(|| many(literal_char('a')));
        assert_eq!(parser.parse_str("aaaa").unwrap().len(), 4);
    }

    #[test]
    fn test_supplier_runs_once() {
        let calls = Cell::new(0);
        let parser = reference(|| {
            calls.set(calls.get() + 1);
            literal_char('x')
        });
        assert_eq!(calls.get(), 0);

        parser.parse_str("x").unwrap();
        parser.parse_str("x").unwrap();
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_forward_reference_to_rule() {
        let pair: Rule<'_, (char, char)> = Rule::declare();
        let forward = {
            let pair = pair.clone();
            reference(move || pair.clone())
        };
        pair.define(literal_char('a').and(literal_char('b'))).unwrap();

        assert_eq!(forward.parse_str("ab").unwrap(), ('a', 'b'));
    }

    #[test]
    fn test_left_recursion_through_reference() {
        let direct: Rule<'_, char> = Rule::declare();
        let again = direct.clone();
        direct.define(reference(move || again.clone())).unwrap();

        assert!(matches!(
            direct.parse(Cursor::new("x")),
            Err(GrammarError::LeftRecursion { .. })
        ));
    }
}
