//! Operator overloads for [`Tribool`].
//!
//! `!`, `&`, `|` and `^` map onto the truth-table connectives. Native
//! `bool` and `Option<bool>` operands are accepted on either side, so
//! `true & Tribool::Indeterminate` and `Tribool::Indeterminate & true`
//! resolve through the same table entry.

use super::tribool::Tribool;
use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not};

impl Not for Tribool {
    type Output = Tribool;

    fn not(self) -> Tribool {
        Tribool::not(self)
    }
}

impl Not for &Tribool {
    type Output = Tribool;

    fn not(self) -> Tribool {
        Tribool::not(*self)
    }
}

/// Implement a binary connective for `Tribool` on the left, plus the
/// reflected impls for native operands on the left.
macro_rules! tribool_binary_op {
    ($op:ident, $method:ident, $assign:ident, $assign_method:ident, $connective:ident; $($native:ty),* $(,)?) => {
        impl<T: Into<Tribool>> $op<T> for Tribool {
            type Output = Tribool;

            fn $method(self, that: T) -> Tribool {
                Tribool::$connective(self, that)
            }
        }

        impl<T: Into<Tribool>> $assign<T> for Tribool {
            fn $assign_method(&mut self, that: T) {
                *self = Tribool::$connective(*self, that);
            }
        }

        $(
            impl $op<Tribool> for $native {
                type Output = Tribool;

                fn $method(self, that: Tribool) -> Tribool {
                    Tribool::$connective(Tribool::from(self), that)
                }
            }
        )*
    };
}

tribool_binary_op!(BitAnd, bitand, BitAndAssign, bitand_assign, and; bool, Option<bool>);
tribool_binary_op!(BitOr, bitor, BitOrAssign, bitor_assign, or; bool, Option<bool>);
tribool_binary_op!(BitXor, bitxor, BitXorAssign, bitxor_assign, xor; bool, Option<bool>);
