// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Presence wrapper for current-value queries.
//!
//! Value streams carry payloads of type `Option<T>`, where `None` stands for
//! an absent-but-valid value pushed through the pipeline. A current-value
//! query therefore needs a second layer to say "there is no current value at
//! all", which is what [`OptionalValue`] adds: `Empty` means the query has no
//! answer, `Present(None)` means the answer is the null-like value.

/// The result of a current-value query: either no value, or some payload
/// (which may itself be a null-like `Option::None`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionalValue<P> {
    /// No value is available.
    Empty,
    /// A value is available, including possibly a null-like one.
    Present(P),
}

impl<P> OptionalValue<P> {
    /// Wraps a payload.
    pub fn of(value: P) -> Self {
        Self::Present(value)
    }

    /// The empty query result.
    pub fn empty() -> Self {
        Self::Empty
    }

    /// Whether a payload is present.
    pub fn is_present(&self) -> bool {
        matches!(self, Self::Present(_))
    }

    /// Whether no payload is present.
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Returns the payload, or `alternative` when empty.
    pub fn unwrap_or(self, alternative: P) -> P {
        match self {
            Self::Present(value) => value,
            Self::Empty => alternative,
        }
    }

    /// Transforms the payload, keeping `Empty` as is.
    pub fn map<Q>(self, f: impl FnOnce(P) -> Q) -> OptionalValue<Q> {
        match self {
            Self::Present(value) => OptionalValue::Present(f(value)),
            Self::Empty => OptionalValue::Empty,
        }
    }

    /// Transforms the payload with a function that may itself come up empty.
    pub fn flat_map<Q>(self, f: impl FnOnce(P) -> OptionalValue<Q>) -> OptionalValue<Q> {
        match self {
            Self::Present(value) => f(value),
            Self::Empty => OptionalValue::Empty,
        }
    }

    /// Runs `f` on the payload when present.
    pub fn if_present(self, f: impl FnOnce(P)) {
        if let Self::Present(value) = self {
            f(value);
        }
    }

    /// Converts into a plain [`Option`], flattening `Empty` to `None`.
    pub fn into_option(self) -> Option<P> {
        match self {
            Self::Present(value) => Some(value),
            Self::Empty => None,
        }
    }
}

impl<P> From<Option<P>> for OptionalValue<P> {
    fn from(value: Option<P>) -> Self {
        match value {
            Some(value) => Self::Present(value),
            None => Self::Empty,
        }
    }
}
