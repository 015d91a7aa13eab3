//! Self-referential grammar rules and the left-recursion guard
//!
//! A grammar with recursive rules is a cyclic graph of parsers. [`Rule`] is a
//! deferred-initialization cell that breaks the cycle: declare it, use clones
//! of it while building other parsers, then define it. Every rule carries a
//! [`RuleId`]; entering the same rule twice at the same position of one parse
//! means the grammar is left-recursive, and the parse is aborted with
//! [`GrammarError::LeftRecursion`] instead of overflowing the stack.

use crate::cursor::Cursor;
use crate::error::GrammarError;
use crate::outcome::ParseResult;
use crate::parser::{BoxedParser, Parser};
use once_cell::unsync::OnceCell;
use std::fmt;
use std::rc::{Rc, Weak};
use std::sync::atomic::{AtomicUsize, Ordering};

/// Stable identity of a lazily referenced parser
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RuleId(usize);

impl RuleId {
    pub(crate) fn next() -> Self {
        static NEXT: AtomicUsize = AtomicUsize::new(0);
        RuleId(NEXT.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for RuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rule #{}", self.0)
    }
}

/// Releases a guard-table entry when the invocation that took it finishes
struct ActiveRule<'code> {
    rule: RuleId,
    cursor: Cursor<'code>,
}

impl Drop for ActiveRule<'_> {
    fn drop(&mut self) {
        self.cursor
            .guards()
            .leave(self.rule, self.cursor.position());
    }
}

/// Run `body` as an invocation of `rule` at `cursor`, failing fatally if the
/// rule is already in progress at that exact position.
pub(crate) fn guarded<'code, T>(
    rule: RuleId,
    cursor: Cursor<'code>,
    body: impl FnOnce(Cursor<'code>) -> ParseResult<'code, T>,
) -> ParseResult<'code, T> {
    let position = cursor.position();
    if !cursor.guards().enter(rule, position) {
        debug_log!("{} re-entered at position {} without progress", rule, position);
        return Err(GrammarError::LeftRecursion {
            rule,
            location: cursor.location(),
        });
    }

    let _active = ActiveRule {
        rule,
        cursor: cursor.clone(),
    };
    body(cursor)
}

type Slot<'code, T> = OnceCell<BoxedParser<'code, T>>;

enum Handle<'code, T> {
    Owned(Rc<Slot<'code, T>>),
    Unowned(Weak<Slot<'code, T>>),
}

/// A named, possibly recursive grammar rule
///
/// Clones share the same definition and the same [`RuleId`].
///
/// ```
/// use parsnip::prelude::*;
/// use parsnip::{literal_char, recursive};
///
/// // nested = '(' nested ')' | 'x'
/// let nested = recursive(|nested| {
///     literal_char('(')
///         .ignore_then(nested)
///         .then_ignore(literal_char(')'))
///         .xor(literal_char('x'))
/// });
/// assert_eq!(nested.parse_str("((x))").unwrap(), 'x');
/// ```
pub struct Rule<'code, T> {
    id: RuleId,
    handle: Handle<'code, T>,
}

impl<'code, T> Rule<'code, T> {
    /// Create an empty rule to be defined later with [`Rule::define`]
    ///
    /// Clones of a declared rule keep its definition alive, so a rule whose
    /// definition contains a clone of itself is never freed. Prefer
    /// [`recursive`] for self-reference.
    pub fn declare() -> Self {
        Rule {
            id: RuleId::next(),
            handle: Handle::Owned(Rc::new(OnceCell::new())),
        }
    }

    /// Give the rule its parser; a rule can only be defined once
    pub fn define<P>(&self, parser: P) -> Result<(), GrammarError>
    where
        P: Parser<'code, Output = T> + 'code,
    {
        let slot = self
            .slot()
            .ok_or(GrammarError::UndefinedRule { rule: self.id })?;
        slot.set(BoxedParser::new(parser))
            .map_err(|_| GrammarError::RuleRedefined { rule: self.id })
    }

    pub fn id(&self) -> RuleId {
        self.id
    }

    pub fn is_defined(&self) -> bool {
        self.slot().is_some_and(|slot| slot.get().is_some())
    }

    fn slot(&self) -> Option<Rc<Slot<'code, T>>> {
        match &self.handle {
            Handle::Owned(slot) => Some(Rc::clone(slot)),
            Handle::Unowned(slot) => slot.upgrade(),
        }
    }
}

impl<T> Clone for Rule<'_, T> {
    fn clone(&self) -> Self {
        let handle = match &self.handle {
            Handle::Owned(slot) => Handle::Owned(Rc::clone(slot)),
            Handle::Unowned(slot) => Handle::Unowned(Weak::clone(slot)),
        };
        Rule {
            id: self.id,
            handle,
        }
    }
}

impl<'code, T> Parser<'code> for Rule<'code, T> {
    type Output = T;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, T> {
        let undefined = GrammarError::UndefinedRule { rule: self.id };
        let slot = self.slot().ok_or_else(|| undefined.clone())?;
        let parser = slot.get().ok_or(undefined)?;
        guarded(self.id, cursor, |cursor| parser.parse(cursor))
    }
}

/// Build a self-referential rule
///
/// `build` receives a handle to the rule being defined. The handle does not
/// own the definition, so the finished grammar contains no reference cycle;
/// keep the returned rule (or a clone of it) alive while parsing.
pub fn recursive<'code, T, P, F>(build: F) -> Rule<'code, T>
where
    F: FnOnce(Rule<'code, T>) -> P,
    P: Parser<'code, Output = T> + 'code,
{
    let id = RuleId::next();
    let slot: Rc<Slot<'code, T>> = Rc::new(OnceCell::new());
    let this = Rule {
        id,
        handle: Handle::Unowned(Rc::downgrade(&slot)),
    };

    let parser = build(this);
    slot.get_or_init(|| BoxedParser::new(parser));
    trace_log!("defined recursive {}", id);

    Rule {
        id,
        handle: Handle::Owned(slot),
    }
}
