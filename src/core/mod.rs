//! Core three-valued logic types.
//!
//! This module contains the pure core of the crate:
//! - The `Tribool` value type and its canonical instances
//! - The resolver that normalizes native inputs and names
//! - Fixed Kleene truth tables and the connectives built on them
//! - Operator overloads and guarded conversions
//!
//! Everything here is pure: no I/O, no shared mutable state.

mod convert;
mod ops;
mod resolve;
mod tables;
mod tribool;

pub use resolve::{Resolve, NAMES};
pub use tribool::Tribool;
