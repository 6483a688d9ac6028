//! Guarded conversions out of [`Tribool`].
//!
//! A Tribool has no faithful two-valued or integer projection, so every
//! conversion to `bool`, `i64` or `usize` fails for every state, including
//! `True` and `False`. Callers decide how to treat indeterminacy by
//! matching on [`Tribool::value`] instead.

use super::tribool::Tribool;
use crate::error::TriboolError;

impl TryFrom<Tribool> for bool {
    type Error = TriboolError;

    fn try_from(_: Tribool) -> Result<Self, Self::Error> {
        Err(TriboolError::InvalidConversion { target: "bool" })
    }
}

impl TryFrom<Tribool> for i64 {
    type Error = TriboolError;

    fn try_from(_: Tribool) -> Result<Self, Self::Error> {
        Err(TriboolError::InvalidConversion { target: "integer" })
    }
}

impl TryFrom<Tribool> for usize {
    type Error = TriboolError;

    fn try_from(_: Tribool) -> Result<Self, Self::Error> {
        Err(TriboolError::InvalidConversion { target: "index" })
    }
}
