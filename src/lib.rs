//! Tribool: three-valued logic for Rust
//!
//! A [`Tribool`] is one of `True`, `False` or `Indeterminate`. Connectives
//! follow Kleene's strong logic and are driven by fixed truth tables, so
//! every combination involving `Indeterminate` is an explicit table entry.
//!
//! # Core Concepts
//!
//! - **Resolution**: `bool`, `Option<bool>`, Tribools and the names `True`,
//!   `False`, `None`, `Indeterminate`, `Maybe`, `Unknown` all resolve to a
//!   Tribool via [`Tribool::resolve`]
//! - **Connectives**: `!`, `&`, `|`, `^` plus the three-valued comparisons
//!   [`Tribool::equals`], [`Tribool::lt`], [`Tribool::le`], [`Tribool::gt`],
//!   [`Tribool::ge`]
//! - **Identity**: `==` and `Hash` compare states, so Tribools work as map
//!   keys; [`Tribool::canonical`] hands out one `'static` instance per state
//! - **Guarded conversions**: converting to `bool`, `i64` or `usize` always
//!   fails with [`TriboolError::InvalidConversion`]
//!
//! # Example
//!
//! ```rust
//! use tribool::Tribool;
//!
//! let yes = Tribool::from(true);
//! let maybe: Tribool = "Maybe".parse().unwrap();
//!
//! assert_eq!(yes & maybe, Tribool::Indeterminate);
//! assert_eq!(yes | maybe, Tribool::True);
//! assert_eq!(!maybe, Tribool::Indeterminate);
//! assert_eq!(Tribool::False.lt(yes), Tribool::True);
//!
//! assert!(bool::try_from(yes).is_err());
//! assert_eq!(maybe.value(), None);
//! ```

pub mod core;
pub mod error;
pub mod validation;

// Re-export commonly used types
pub use crate::core::{Resolve, Tribool, NAMES};
pub use error::TriboolError;
