// Copyright 2021. remilia-dev
// This source code is licensed under GPLv3 or any later version.
use std::fmt;

use crate::{
    run_catching,
    Caught,
};

/// A discriminated union of a successfully computed value or a captured
/// failure.
///
/// An outcome is formed once and only read thereafter. Combinators come in
/// two families: the plain ones (`map`, `recover`, the peeks, `get_or_else`)
/// let a panic inside their callback unwind past the call, while the
/// `_catching` ones stop it and turn it into a new failure, the same way
/// [run_catching] does.
///
/// A success holding an `Outcome` stays nested; nothing here flattens
/// implicitly.
#[must_use]
#[derive(Debug)]
pub enum Outcome<T> {
    /// A computed value.
    Success(T),
    /// A captured failure.
    Failure(Caught),
}

impl<T> Outcome<T> {
    /// Wraps the given value as a successful outcome.
    pub fn success(value: T) -> Outcome<T> {
        Self::Success(value)
    }
    /// Wraps the given error as a failed outcome. The error is stored
    /// untouched.
    pub fn failure(error: Caught) -> Outcome<T> {
        Self::Failure(error)
    }

    // discovery

    /// Returns whether this outcome is a success.
    pub fn is_success(&self) -> bool {
        matches!(*self, Self::Success(..))
    }
    /// Returns whether this outcome is a failure.
    pub fn is_failure(&self) -> bool {
        matches!(*self, Self::Failure(..))
    }

    // value retrieval

    /// The value, if this outcome is a success.
    pub fn value(&self) -> Option<&T> {
        match *self {
            Self::Success(ref value) => Some(value),
            Self::Failure(..) => None,
        }
    }
    /// The captured error, if this outcome is a failure.
    pub fn caught(&self) -> Option<&Caught> {
        match *self {
            Self::Success(..) => None,
            Self::Failure(ref error) => Some(error),
        }
    }
    /// Returns the value, or None if this outcome is a failure.
    pub fn get_or_none(self) -> Option<T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(..) => None,
        }
    }
    /// Returns the captured error, or None if this outcome is a success.
    pub fn exception_or_none(self) -> Option<Caught> {
        match self {
            Self::Success(..) => None,
            Self::Failure(error) => Some(error),
        }
    }
    /// Returns the value, or resumes unwinding with the captured payload.
    ///
    /// This is the only operation that signals an error to its caller.
    pub fn get_or_throw(self) -> T {
        match self {
            Self::Success(value) => value,
            Self::Failure(error) => error.rethrow(),
        }
    }
    /// Returns the value, or the result of `default` applied to the captured
    /// error. `default` runs at most once; a panic inside it unwinds past
    /// this call.
    pub fn get_or_else<R, F>(self, default: F) -> R
    where
        T: Into<R>,
        F: FnOnce(Caught) -> R,
    {
        match self {
            Self::Success(value) => value.into(),
            Self::Failure(error) => default(error),
        }
    }

    // transformation

    /// Applies `transform` to the value of a success; a failure passes
    /// through with its error unchanged, never invoking `transform`.
    ///
    /// A panic inside `transform` unwinds past this call. See
    /// [map_catching](Outcome::map_catching) for the capturing alternative.
    pub fn map<R, F>(self, transform: F) -> Outcome<R>
    where
        F: FnOnce(T) -> R,
    {
        match self {
            Self::Success(value) => Outcome::Success(transform(value)),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }
    /// Like [map](Outcome::map), except a panic inside `transform` is caught
    /// and becomes the new failure.
    pub fn map_catching<R, F>(self, transform: F) -> Outcome<R>
    where
        F: FnOnce(T) -> R,
    {
        match self {
            Self::Success(value) => run_catching(move || transform(value)),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }
    /// Applies `transform` to the error of a failure and wraps what it
    /// returns as a success; a success passes through unchanged, retyped
    /// through [Into].
    ///
    /// A panic inside `transform` unwinds past this call. See
    /// [recover_catching](Outcome::recover_catching) for the capturing
    /// alternative.
    pub fn recover<R, F>(self, transform: F) -> Outcome<R>
    where
        T: Into<R>,
        F: FnOnce(Caught) -> R,
    {
        match self {
            Self::Success(value) => Outcome::Success(value.into()),
            Self::Failure(error) => Outcome::Success(transform(error)),
        }
    }
    /// Like [recover](Outcome::recover), except a panic inside `transform`
    /// is caught and becomes the new failure.
    pub fn recover_catching<R, F>(self, transform: F) -> Outcome<R>
    where
        T: Into<R>,
        F: FnOnce(Caught) -> R,
    {
        match self {
            Self::Success(value) => Outcome::Success(value.into()),
            Self::Failure(error) => run_catching(move || transform(error)),
        }
    }

    // "peek" onto the value/error and pipe

    /// Runs `action` on the value if this outcome is a success, then returns
    /// the outcome unchanged. A panic inside `action` unwinds past this call.
    pub fn on_success<F>(self, action: F) -> Outcome<T>
    where
        F: FnOnce(&T),
    {
        if let Self::Success(ref value) = self {
            action(value);
        }
        self
    }
    /// Runs `action` on the error if this outcome is a failure, then returns
    /// the outcome unchanged. A panic inside `action` unwinds past this call.
    pub fn on_failure<F>(self, action: F) -> Outcome<T>
    where
        F: FnOnce(&Caught),
    {
        if let Self::Failure(ref error) = self {
            action(error);
        }
        self
    }
}

impl<T: PartialEq> PartialEq for Outcome<T> {
    /// Outcomes are equal when both are successes with equal values or both
    /// are failures with equal errors. [Eq] is withheld because error
    /// equality is not reflexive (see [Caught]).
    fn eq(&self, other: &Outcome<T>) -> bool {
        match (self, other) {
            (&Self::Success(ref lhs), &Self::Success(ref rhs)) => lhs == rhs,
            (&Self::Failure(ref lhs), &Self::Failure(ref rhs)) => lhs == rhs,
            (..) => false,
        }
    }
}

impl<T: fmt::Display> fmt::Display for Outcome<T> {
    /// A success renders as its value alone, with no wrapping prefix; a
    /// failure renders as `Failure(...)` around the error's own rendering.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Success(ref value) => value.fmt(f),
            Self::Failure(ref error) => write!(f, "Failure({})", error),
        }
    }
}

impl<T> From<Caught> for Outcome<T> {
    fn from(error: Caught) -> Outcome<T> {
        Self::Failure(error)
    }
}
