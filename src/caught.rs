// Copyright 2021. remilia-dev
// This source code is licensed under GPLv3 or any later version.
use std::{
    any::Any,
    error::Error,
    fmt,
    panic,
};

/// An error object holding the payload of a captured panic.
///
/// [panic!](std::panic!) with a message produces a `String` or `&'static str`
/// payload, which is the common case. [panic_any](std::panic::panic_any) can
/// carry any sendable type; such payloads are stored as-is but render as a
/// placeholder.
pub struct Caught {
    payload: Box<dyn Any + Send + 'static>,
}

impl Caught {
    /// Creates an error from a message, as if a panic had carried it.
    pub fn msg(message: impl Into<String>) -> Caught {
        Caught {
            payload: Box::new(message.into()),
        }
    }
    /// Wraps a payload taken from [catch_unwind](std::panic::catch_unwind).
    pub fn from_payload(payload: Box<dyn Any + Send + 'static>) -> Caught {
        Caught { payload }
    }
    /// The panic message, if the payload was a string.
    pub fn message(&self) -> Option<&str> {
        if let Some(message) = self.payload.downcast_ref::<String>() {
            Some(message)
        } else if let Some(message) = self.payload.downcast_ref::<&'static str>() {
            Some(message)
        } else {
            None
        }
    }
    /// The payload as it was captured.
    pub fn payload(&self) -> &(dyn Any + Send + 'static) {
        &*self.payload
    }
    /// Consumes the error and returns the payload it was holding.
    pub fn into_payload(self) -> Box<dyn Any + Send + 'static> {
        self.payload
    }
    /// Resumes unwinding with the stored payload.
    pub fn rethrow(self) -> ! {
        panic::resume_unwind(self.payload)
    }
}

impl PartialEq for Caught {
    /// Two captured errors are equal only when both carried string payloads
    /// with the same text. Non-string payloads never compare equal, not even
    /// to themselves, which is why [Eq] is not implemented.
    fn eq(&self, other: &Caught) -> bool {
        match (self.message(), other.message()) {
            (Some(lhs), Some(rhs)) => lhs == rhs,
            (..) => false,
        }
    }
}

impl fmt::Display for Caught {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.message() {
            Some(message) => f.write_str(message),
            None => f.write_str("<non-string panic payload>"),
        }
    }
}

impl fmt::Debug for Caught {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.message() {
            Some(message) => write!(f, "Caught({:?})", message),
            None => f.write_str("Caught(<non-string panic payload>)"),
        }
    }
}

impl Error for Caught {}
