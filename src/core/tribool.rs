//! The Tribool value type.
//!
//! A `Tribool` is one of exactly three states. Every state is a plain enum
//! value, so two Tribools with the same state are interchangeable: derived
//! equality and hashing compare the state itself, not the logical meaning.
//! Logical (three-valued) comparison lives in the truth-table methods.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Three-valued logic value: True, False or Indeterminate.
///
/// `==` on `Tribool` is *identity* equality: `Tribool::Indeterminate ==
/// Tribool::Indeterminate` holds, which makes the type usable as a map key.
/// Use [`Tribool::equals`] for the logical, three-valued comparison.
///
/// # Example
///
/// ```rust
/// use tribool::Tribool;
/// use std::collections::HashMap;
///
/// let labels: HashMap<Tribool, &str> = [
///     (Tribool::True, "Yes"),
///     (Tribool::False, "No"),
///     (Tribool::Indeterminate, "Maybe"),
/// ]
/// .into_iter()
/// .collect();
///
/// assert_eq!(labels[&Tribool::new(None)], "Maybe");
/// assert_eq!(Tribool::Indeterminate.equals(Tribool::Indeterminate), Tribool::Indeterminate);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "Option<bool>", into = "Option<bool>")]
pub enum Tribool {
    True,
    False,
    #[default]
    Indeterminate,
}

static CANONICAL: [Tribool; 3] = [Tribool::True, Tribool::False, Tribool::Indeterminate];

impl Tribool {
    /// All three states, in table order.
    pub const ALL: [Tribool; 3] = [Tribool::True, Tribool::False, Tribool::Indeterminate];

    /// Build a Tribool from its bare state. `None` is Indeterminate.
    pub const fn new(value: Option<bool>) -> Self {
        match value {
            Some(true) => Tribool::True,
            Some(false) => Tribool::False,
            None => Tribool::Indeterminate,
        }
    }

    /// The bare state: `Some(true)`, `Some(false)` or `None`.
    pub const fn value(self) -> Option<bool> {
        match self {
            Tribool::True => Some(true),
            Tribool::False => Some(false),
            Tribool::Indeterminate => None,
        }
    }

    pub const fn is_true(self) -> bool {
        matches!(self, Tribool::True)
    }

    pub const fn is_false(self) -> bool {
        matches!(self, Tribool::False)
    }

    pub const fn is_indeterminate(self) -> bool {
        matches!(self, Tribool::Indeterminate)
    }

    /// Row/column of this state in the truth tables.
    pub(crate) const fn ordinal(self) -> usize {
        match self {
            Tribool::True => 0,
            Tribool::False => 1,
            Tribool::Indeterminate => 2,
        }
    }

    /// The process-wide instance for this state.
    ///
    /// The three instances are statics, so every call for the same state,
    /// from any thread, returns the same reference without locking.
    ///
    /// ```rust
    /// use tribool::Tribool;
    ///
    /// let a = Tribool::from(true).canonical();
    /// let b = "True".parse::<Tribool>().unwrap().canonical();
    /// assert!(std::ptr::eq(a, b));
    /// ```
    pub fn canonical(self) -> &'static Tribool {
        &CANONICAL[self.ordinal()]
    }

    /// Assert the state invariant and return `self`.
    pub fn check(self) -> Self {
        debug_assert!(Tribool::ALL.contains(&self));
        debug_assert_eq!(Tribool::new(self.value()), self);
        debug_assert_eq!(*self.canonical(), self);
        self
    }

    /// Name used by `Display`.
    pub const fn name(self) -> &'static str {
        match self {
            Tribool::True => "True",
            Tribool::False => "False",
            Tribool::Indeterminate => "Indeterminate",
        }
    }
}

impl From<bool> for Tribool {
    fn from(value: bool) -> Self {
        Tribool::new(Some(value))
    }
}

impl From<Option<bool>> for Tribool {
    fn from(value: Option<bool>) -> Self {
        Tribool::new(value)
    }
}

impl From<&Tribool> for Tribool {
    fn from(value: &Tribool) -> Self {
        *value
    }
}

impl From<Tribool> for Option<bool> {
    fn from(value: Tribool) -> Self {
        value.value()
    }
}

impl fmt::Display for Tribool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Debug for Tribool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let token = match self {
            Tribool::True => "True",
            Tribool::False => "False",
            Tribool::Indeterminate => "None",
        };
        write!(f, "Tribool({token})")
    }
}
