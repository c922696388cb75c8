/// Outcome of an attempt that may legitimately produce nothing.
///
/// `Absent` is the recoverable "this alternative did not match here" signal
/// used throughout the combinators. It carries no message; anything worth
/// reporting is a [`FatalError`](crate::error::FatalError) instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Maybe<T> {
    Present(T),
    Absent,
}

impl<T> Maybe<T> {
    pub fn present(value: T) -> Self {
        Maybe::Present(value)
    }

    pub fn absent() -> Self {
        Maybe::Absent
    }

    pub fn is_present(&self) -> bool {
        matches!(self, Maybe::Present(_))
    }

    pub fn is_absent(&self) -> bool {
        !self.is_present()
    }

    /// Returns the contained value.
    ///
    /// # Panics
    ///
    /// Panics if the value is `Absent`. Calling this on a failed parse is a
    /// programming error, not a parse error.
    #[track_caller]
    pub fn unwrap(self) -> T {
        match self {
            Maybe::Present(value) => value,
            Maybe::Absent => panic!("called `Maybe::unwrap()` on an `Absent` value"),
        }
    }

    /// Returns `self` if present, otherwise evaluates `other`.
    ///
    /// `other` is only invoked on the absent branch, so it may do work that
    /// must not happen when `self` already holds a value.
    pub fn or_else<F>(self, other: F) -> Maybe<T>
    where
        F: FnOnce() -> Maybe<T>,
    {
        match self {
            Maybe::Present(value) => Maybe::Present(value),
            Maybe::Absent => other(),
        }
    }

    pub fn map<U, F>(self, f: F) -> Maybe<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Maybe::Present(value) => Maybe::Present(f(value)),
            Maybe::Absent => Maybe::Absent,
        }
    }

    pub fn and_then<U, F>(self, f: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Maybe<U>,
    {
        match self {
            Maybe::Present(value) => f(value),
            Maybe::Absent => Maybe::Absent,
        }
    }

    pub fn as_ref(&self) -> Maybe<&T> {
        match self {
            Maybe::Present(value) => Maybe::Present(value),
            Maybe::Absent => Maybe::Absent,
        }
    }

    pub fn into_option(self) -> Option<T> {
        self.into()
    }
}

impl<T> From<Option<T>> for Maybe<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Maybe::Present(value),
            None => Maybe::Absent,
        }
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    fn from(value: Maybe<T>) -> Self {
        match value {
            Maybe::Present(value) => Some(value),
            Maybe::Absent => None,
        }
    }
}
