//! Batch resolution with accumulated errors.
//!
//! Resolving a list of inputs one at a time with `Result` stops at the
//! first bad entry. [`resolve_all`] uses Stillwater's `Validation` to
//! report every unsupported input in a single pass.
//!
//! # Example
//!
//! ```rust
//! use tribool::validation::resolve_all;
//! use tribool::Tribool;
//! use stillwater::validation::Validation;
//!
//! match resolve_all(["True", "Maybe", "Yes", "Nope"]) {
//!     Validation::Failure(errors) => assert_eq!(errors.len(), 2),
//!     Validation::Success(_) => panic!("expected failures"),
//! }
//!
//! let result = resolve_all(["True", "Unknown"]);
//! assert!(result.is_success());
//! ```

use crate::core::{Resolve, Tribool};
use crate::error::TriboolError;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Outcome of resolving a batch of inputs.
pub type BatchResolution = Validation<Vec<Tribool>, NonEmptyVec<TriboolError>>;

/// Resolve a single input as a `Validation`.
pub fn resolve_one(input: impl Resolve) -> Validation<Tribool, NonEmptyVec<TriboolError>> {
    match Tribool::resolve(input) {
        Ok(state) => Validation::success(state),
        Err(err) => Validation::fail(err),
    }
}

/// Resolve every input, accumulating ALL `InvalidValue` errors.
///
/// On success the resolved values keep the input order.
pub fn resolve_all<I>(inputs: I) -> BatchResolution
where
    I: IntoIterator,
    I::Item: Resolve,
{
    let checks: Vec<Validation<Tribool, NonEmptyVec<TriboolError>>> =
        inputs.into_iter().map(|input| resolve_one(input)).collect();

    Validation::all_vec(checks)
}
