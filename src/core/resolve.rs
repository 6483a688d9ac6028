//! Resolution of heterogeneous inputs into a [`Tribool`].
//!
//! Native booleans, the `None` marker and existing Tribools always resolve.
//! Strings resolve only when they match one of the case-sensitive names in
//! [`NAMES`]. Dynamic JSON values resolve when they are a bool, `null` or a
//! known name; anything else is rejected with
//! [`TriboolError::InvalidValue`].

use super::tribool::Tribool;
use crate::error::TriboolError;
use serde_json::Value;
use std::str::FromStr;

/// Recognized names and the state each one resolves to.
pub const NAMES: [(&str, Tribool); 6] = [
    ("True", Tribool::True),
    ("False", Tribool::False),
    ("None", Tribool::Indeterminate),
    ("Indeterminate", Tribool::Indeterminate),
    ("Maybe", Tribool::Indeterminate),
    ("Unknown", Tribool::Indeterminate),
];

/// Input that can be normalized into a Tribool.
///
/// # Example
///
/// ```rust
/// use tribool::{Resolve, Tribool, TriboolError};
///
/// assert_eq!(true.resolve(), Ok(Tribool::True));
/// assert_eq!(None::<bool>.resolve(), Ok(Tribool::Indeterminate));
/// assert_eq!("Maybe".resolve(), Ok(Tribool::Indeterminate));
/// assert!(matches!("Yes".resolve(), Err(TriboolError::InvalidValue { .. })));
/// ```
pub trait Resolve {
    fn resolve(self) -> Result<Tribool, TriboolError>;
}

fn lookup_name(name: &str) -> Option<Tribool> {
    NAMES
        .iter()
        .find(|(candidate, _)| *candidate == name)
        .map(|(_, state)| *state)
}

impl Resolve for bool {
    fn resolve(self) -> Result<Tribool, TriboolError> {
        Ok(Tribool::from(self))
    }
}

impl Resolve for Option<bool> {
    fn resolve(self) -> Result<Tribool, TriboolError> {
        Ok(Tribool::from(self))
    }
}

impl Resolve for Tribool {
    fn resolve(self) -> Result<Tribool, TriboolError> {
        Ok(self)
    }
}

impl Resolve for &Tribool {
    fn resolve(self) -> Result<Tribool, TriboolError> {
        Ok(*self)
    }
}

impl Resolve for &str {
    fn resolve(self) -> Result<Tribool, TriboolError> {
        lookup_name(self).ok_or_else(|| TriboolError::invalid_value(format!("{self:?}")))
    }
}

impl Resolve for String {
    fn resolve(self) -> Result<Tribool, TriboolError> {
        self.as_str().resolve()
    }
}

impl Resolve for &String {
    fn resolve(self) -> Result<Tribool, TriboolError> {
        self.as_str().resolve()
    }
}

impl Resolve for &Value {
    fn resolve(self) -> Result<Tribool, TriboolError> {
        match self {
            Value::Bool(value) => Ok(Tribool::from(*value)),
            Value::Null => Ok(Tribool::Indeterminate),
            Value::String(name) => name.resolve(),
            other => Err(TriboolError::invalid_value(other)),
        }
    }
}

impl Resolve for Value {
    fn resolve(self) -> Result<Tribool, TriboolError> {
        (&self).resolve()
    }
}

impl Tribool {
    /// Resolve any supported input into its Tribool.
    ///
    /// ```rust
    /// use tribool::Tribool;
    /// use serde_json::json;
    ///
    /// assert_eq!(Tribool::resolve("Unknown"), Ok(Tribool::Indeterminate));
    /// assert_eq!(Tribool::resolve(json!(false)), Ok(Tribool::False));
    /// assert!(Tribool::resolve(json!(0)).is_err());
    /// ```
    pub fn resolve(input: impl Resolve) -> Result<Tribool, TriboolError> {
        Ok(input.resolve()?.check())
    }
}

impl FromStr for Tribool {
    type Err = TriboolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tribool::resolve(s)
    }
}

impl TryFrom<&str> for Tribool {
    type Error = TriboolError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Tribool::resolve(value)
    }
}

impl TryFrom<&Value> for Tribool {
    type Error = TriboolError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        Tribool::resolve(value)
    }
}
