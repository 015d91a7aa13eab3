use crate::error::{CursorError, SourceLocation};
use crate::rule::RuleId;
use std::cell::RefCell;
use std::collections::HashSet;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::rc::Rc;

/// Rules that are currently being evaluated, keyed by the position they were entered at
///
/// One table is shared by every cursor derived from the same [`Cursor::new`] call,
/// so it lives exactly as long as one top-level parse.
#[derive(Debug, Default)]
pub(crate) struct GuardTable {
    active: RefCell<HashSet<(RuleId, usize)>>,
}

impl GuardTable {
    /// Marks `rule` as entered at `position`; false if it is already active there
    pub(crate) fn enter(&self, rule: RuleId, position: usize) -> bool {
        self.active.borrow_mut().insert((rule, position))
    }

    pub(crate) fn leave(&self, rule: RuleId, position: usize) {
        self.active.borrow_mut().remove(&(rule, position));
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.active.borrow().len()
    }
}

/// Immutable position in a text buffer
///
/// Advancing produces a new cursor; the buffer itself is never touched. Two
/// cursors are equal when they point at the same position of the same text.
#[derive(Clone)]
pub struct Cursor<'code> {
    source: &'code str,
    /// Byte offset of `position` within `source`
    offset: usize,
    /// Number of characters consumed so far
    position: usize,
    guards: Rc<GuardTable>,
}

impl<'code> Cursor<'code> {
    /// Create a cursor at the first character of `source`, with a fresh guard table
    pub fn new(source: &'code str) -> Self {
        Cursor {
            source,
            offset: 0,
            position: 0,
            guards: Rc::default(),
        }
    }

    pub fn source(&self) -> &'code str {
        self.source
    }

    /// Character position, starting at 0
    pub fn position(&self) -> usize {
        self.position
    }

    /// Byte offset of the current position
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// The unconsumed part of the source
    pub fn rest(&self) -> &'code str {
        &self.source[self.offset..]
    }

    pub fn at_end(&self) -> bool {
        self.offset >= self.source.len()
    }

    /// The character at the current position
    pub fn current(&self) -> Result<char, CursorError> {
        self.rest().chars().next().ok_or(CursorError::AtEnd {
            position: self.position,
        })
    }

    /// Move forward one character
    ///
    /// Returns an error if the cursor is already at the end of the source
    pub fn advance(&self) -> Result<Self, CursorError> {
        self.next_char()
            .map(|(_, next)| next)
            .ok_or(CursorError::AtEnd {
                position: self.position,
            })
    }

    /// The current character together with the cursor after it, or `None` at the end
    pub fn next_char(&self) -> Option<(char, Self)> {
        let ch = self.rest().chars().next()?;
        let next = Cursor {
            source: self.source,
            offset: self.offset + ch.len_utf8(),
            position: self.position + 1,
            guards: Rc::clone(&self.guards),
        };
        Some((ch, next))
    }

    /// Line and column of the current position
    pub fn location(&self) -> SourceLocation {
        SourceLocation::locate(self.source, self.offset, self.position)
    }

    pub(crate) fn guards(&self) -> &GuardTable {
        &self.guards
    }
}

impl PartialEq for Cursor<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.position == other.position
            && (std::ptr::eq(self.source, other.source) || self.source == other.source)
    }
}

impl Eq for Cursor<'_> {}

impl Hash for Cursor<'_> {
    // Equal sources have equal lengths
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.source.len().hash(state);
        self.position.hash(state);
    }
}

impl fmt::Debug for Cursor<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("position", &self.position)
            .field("offset", &self.offset)
            .field("rest", &self.rest())
            .finish_non_exhaustive()
    }
}

impl fmt::Display for Cursor<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "position {}", self.position)
    }
}
