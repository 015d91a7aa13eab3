use crate::cursor::Cursor;
use crate::error::GrammarError;
use std::borrow::Cow;
use std::collections::BTreeSet;
use std::fmt;
use std::rc::Rc;

/// What every parser returns
///
/// `Err` is reserved for defects in the grammar itself, which abort the parse.
/// Input that does not match is an ordinary [`Outcome::Failure`].
pub type ParseResult<'code, T> = Result<Outcome<'code, T>, GrammarError>;

/// Result of one parse attempt
#[derive(Debug, Clone)]
pub enum Outcome<'code, T> {
    Success(Success<'code, T>),
    Failure(Failure<'code>),
}

/// A parsed value and the input left after it
#[derive(Debug, Clone, PartialEq)]
pub struct Success<'code, T> {
    pub value: T,
    pub remainder: Cursor<'code>,
}

/// Where matching stopped, why, and what would have been accepted there
#[derive(Clone)]
pub struct Failure<'code> {
    failed_at: Cursor<'code>,
    message: Message<'code>,
    expectations: BTreeSet<String>,
}

#[derive(Clone)]
enum Message<'code> {
    Fixed(Cow<'static, str>),
    Deferred(Rc<dyn Fn() -> String + 'code>),
}

/// Build a failure whose message is formatted only when it is read
///
/// ```
/// use parsnip::{Cursor, Outcome, fail};
///
/// let cursor = Cursor::new("x");
/// let found = 'x';
/// let outcome: Outcome<'_, ()> = fail!(cursor, "unexpected '{}'", found);
/// assert!(!outcome.is_success());
/// ```
#[macro_export]
macro_rules! fail {
    ($cursor:expr, $($fmt:tt)+) => {
        $crate::Outcome::fail_with($cursor, move || ::std::format!($($fmt)+))
    };
}

impl<'code, T> Outcome<'code, T> {
    pub fn succeed(value: T, remainder: Cursor<'code>) -> Self {
        Outcome::Success(Success { value, remainder })
    }

    pub fn fail(failed_at: Cursor<'code>, message: impl Into<Cow<'static, str>>) -> Self {
        Outcome::Failure(Failure::new(failed_at, message))
    }

    /// Failure with a lazily produced message
    pub fn fail_with(failed_at: Cursor<'code>, message: impl Fn() -> String + 'code) -> Self {
        Outcome::Failure(Failure::deferred(failed_at, message))
    }

    /// Continue with `next` on success; a failure passes through unchanged
    pub fn if_success<U>(
        self,
        next: impl FnOnce(Success<'code, T>) -> ParseResult<'code, U>,
    ) -> ParseResult<'code, U> {
        match self {
            Outcome::Success(success) => next(success),
            Outcome::Failure(failure) => Ok(Outcome::Failure(failure)),
        }
    }

    /// Continue with `next` on failure; a success passes through unchanged
    pub fn if_failure(
        self,
        next: impl FnOnce(Failure<'code>) -> ParseResult<'code, T>,
    ) -> ParseResult<'code, T> {
        match self {
            Outcome::Success(success) => Ok(Outcome::Success(success)),
            Outcome::Failure(failure) => next(failure),
        }
    }

    /// Transform the success value, keeping the remainder
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<'code, U> {
        match self {
            Outcome::Success(Success { value, remainder }) => Outcome::succeed(f(value), remainder),
            Outcome::Failure(failure) => Outcome::Failure(failure),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            Outcome::Success(success) => Some(&success.value),
            Outcome::Failure(_) => None,
        }
    }

    /// The remainder of a success, or the failure point of a failure
    pub fn cursor(&self) -> &Cursor<'code> {
        match self {
            Outcome::Success(success) => &success.remainder,
            Outcome::Failure(failure) => &failure.failed_at,
        }
    }

    pub fn into_result(self) -> Result<Success<'code, T>, Failure<'code>> {
        match self {
            Outcome::Success(success) => Ok(success),
            Outcome::Failure(failure) => Err(failure),
        }
    }
}

impl<'code> Failure<'code> {
    pub fn new(failed_at: Cursor<'code>, message: impl Into<Cow<'static, str>>) -> Self {
        Failure {
            failed_at,
            message: Message::Fixed(message.into()),
            expectations: BTreeSet::new(),
        }
    }

    pub fn deferred(failed_at: Cursor<'code>, message: impl Fn() -> String + 'code) -> Self {
        Failure {
            failed_at,
            message: Message::Deferred(Rc::new(message)),
            expectations: BTreeSet::new(),
        }
    }

    pub fn with_expectation(mut self, label: impl Into<String>) -> Self {
        self.expectations.insert(label.into());
        self
    }

    /// Replace the expectation labels
    pub fn expecting<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.expectations = labels.into_iter().map(Into::into).collect();
        self
    }

    pub fn failed_at(&self) -> &Cursor<'code> {
        &self.failed_at
    }

    pub fn position(&self) -> usize {
        self.failed_at.position()
    }

    /// Formats the message; deferred messages are produced on every call
    pub fn message(&self) -> String {
        match &self.message {
            Message::Fixed(text) => text.to_string(),
            Message::Deferred(produce) => produce(),
        }
    }

    pub fn expectations(&self) -> &BTreeSet<String> {
        &self.expectations
    }

    /// Report the same failure as having happened at `cursor`
    pub fn relocate(mut self, cursor: Cursor<'code>) -> Self {
        self.failed_at = cursor;
        self
    }

    /// Add the labels of an alternative that failed at the same place
    pub(crate) fn merge_expectations(mut self, other: &Failure<'code>) -> Self {
        self.expectations
            .extend(other.expectations.iter().cloned());
        self
    }
}

impl fmt::Display for Failure<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())?;
        if !self.expectations.is_empty() {
            let labels: Vec<&str> = self.expectations.iter().map(String::as_str).collect();
            write!(f, "; expected {}", labels.join(" or "))?;
        }
        write!(f, " ({})", self.failed_at)
    }
}

impl fmt::Debug for Failure<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Failure")
            .field("failed_at", &self.failed_at)
            .field("message", &self.message())
            .field("expectations", &self.expectations)
            .finish()
    }
}
