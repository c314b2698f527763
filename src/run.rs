// Copyright 2021. remilia-dev
// This source code is licensed under GPLv3 or any later version.
use std::panic::{
    self,
    AssertUnwindSafe,
};

use crate::{
    Caught,
    Outcome,
};

/// Calls `block` exactly once and wraps whatever comes out of it.
///
/// A normal return becomes a [Success](Outcome::Success) while an unwinding
/// panic is caught and becomes a [Failure](Outcome::Failure) holding the
/// panic's payload. The call happens synchronously on the calling thread and
/// is never retried.
///
/// Panics that abort instead of unwinding (`panic = "abort"` builds, stack
/// exhaustion, allocation failure) can not be captured.
pub fn run_catching<T, F>(block: F) -> Outcome<T>
where
    F: FnOnce() -> T,
{
    // The closure is consumed whole, so nothing it captured can be observed
    // in a broken state after an unwind.
    match panic::catch_unwind(AssertUnwindSafe(block)) {
        Ok(value) => Outcome::Success(value),
        Err(payload) => Outcome::Failure(Caught::from_payload(payload)),
    }
}
