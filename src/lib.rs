// Copyright 2021. remilia-dev
// This source code is licensed under GPLv3 or any later version.

// The following warnings have been added since they work with the project and have good justifications.
#![warn(clippy::cognitive_complexity)]
#![warn(clippy::explicit_iter_loop)]
#![warn(clippy::get_unwrap)]
#![warn(clippy::match_wildcard_for_single_variants)]
#![warn(clippy::pattern_type_mismatch)]
#![warn(clippy::similar_names)]
#![warn(clippy::trivially_copy_pass_by_ref)]

pub use caught::Caught;
pub use run::run_catching;
pub use wrapper::Outcome;

mod caught;
mod run;
#[cfg(test)]
pub mod test_utils;
mod wrapper;
