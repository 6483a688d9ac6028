//! Kleene truth tables and the logical connectives built on them.
//!
//! Every connective is a lookup in a fixed table indexed by
//! `[left.ordinal()][right.ordinal()]` with rows and columns in the order
//! True, False, Indeterminate. `le`, `gt`, `ge` and `not_equals` are derived
//! from the stored tables rather than stored themselves.

use super::tribool::Tribool;

const T: Tribool = Tribool::True;
const F: Tribool = Tribool::False;
const I: Tribool = Tribool::Indeterminate;

type Table = [[Tribool; 3]; 3];

pub(crate) const NOT: [Tribool; 3] = [F, T, I];

#[rustfmt::skip]
pub(crate) const AND: Table = [
    [T, F, I],
    [F, F, F],
    [I, F, I],
];

#[rustfmt::skip]
pub(crate) const OR: Table = [
    [T, T, T],
    [T, F, I],
    [T, I, I],
];

#[rustfmt::skip]
pub(crate) const XOR: Table = [
    [F, T, I],
    [T, F, I],
    [I, I, I],
];

#[rustfmt::skip]
pub(crate) const EQ: Table = [
    [T, F, I],
    [F, T, I],
    [I, I, I],
];

#[rustfmt::skip]
pub(crate) const LT: Table = [
    [F, F, F],
    [T, F, I],
    [I, F, I],
];

fn lookup(table: &Table, left: Tribool, right: Tribool) -> Tribool {
    table[left.ordinal()][right.ordinal()]
}

impl Tribool {
    /// Logical negation. Indeterminate is a fixed point.
    #[allow(clippy::should_implement_trait)]
    pub fn not(self) -> Tribool {
        NOT[self.ordinal()]
    }

    /// Logical conjunction.
    ///
    /// ```rust
    /// use tribool::Tribool;
    ///
    /// assert_eq!(Tribool::False.and(None::<bool>), Tribool::False);
    /// assert_eq!(Tribool::True.and(None::<bool>), Tribool::Indeterminate);
    /// ```
    pub fn and(self, that: impl Into<Tribool>) -> Tribool {
        lookup(&AND, self, that.into())
    }

    /// Logical disjunction.
    pub fn or(self, that: impl Into<Tribool>) -> Tribool {
        lookup(&OR, self, that.into())
    }

    /// Logical exclusive or.
    pub fn xor(self, that: impl Into<Tribool>) -> Tribool {
        lookup(&XOR, self, that.into())
    }

    /// Logical equality. Indeterminate on either side yields Indeterminate.
    ///
    /// This is distinct from `==`, which compares states.
    pub fn equals(self, that: impl Into<Tribool>) -> Tribool {
        lookup(&EQ, self, that.into())
    }

    /// Logical inequality.
    pub fn not_equals(self, that: impl Into<Tribool>) -> Tribool {
        self.equals(that).not()
    }

    /// Logical less-than, with `False < True`.
    pub fn lt(self, that: impl Into<Tribool>) -> Tribool {
        lookup(&LT, self, that.into())
    }

    pub fn le(self, that: impl Into<Tribool>) -> Tribool {
        let that = that.into();
        self.lt(that).or(self.equals(that))
    }

    pub fn gt(self, that: impl Into<Tribool>) -> Tribool {
        self.le(that).not()
    }

    pub fn ge(self, that: impl Into<Tribool>) -> Tribool {
        self.lt(that).not()
    }
}
