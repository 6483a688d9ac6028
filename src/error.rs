//! Tribool error types.

use thiserror::Error;

/// Errors raised when resolving or converting a [`Tribool`](crate::Tribool).
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TriboolError {
    /// Input is not a bool, the indeterminate marker, a Tribool or a known name
    #[error("Unsupported value: {input}")]
    InvalidValue { input: String },

    /// Conversion would discard the indeterminate state
    #[error(
        "Cannot convert Tribool to {target}: Indeterminate has no faithful {target} projection \
         (use the bitwise (&, |, ^, !) operators or inspect Tribool::value() explicitly)"
    )]
    InvalidConversion { target: &'static str },
}

impl TriboolError {
    pub(crate) fn invalid_value(input: impl std::fmt::Display) -> Self {
        Self::InvalidValue {
            input: input.to_string(),
        }
    }
}
