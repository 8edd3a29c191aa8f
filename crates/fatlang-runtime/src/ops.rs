//! Operator dispatch surface: one C symbol per (operator, kind) pair.
//!
//! Integer arithmetic wraps at the kind's width. Shift counts are reduced
//! modulo the bit width, which is what the x86-64 and AArch64 shift
//! instructions do with an oversized count. Division and remainder trap on a
//! zero divisor and on `MIN / -1`; the trap unwinds into the `extern "C"`
//! boundary and aborts the process, the same outcome as the hardware fault.

use paste::paste;

use crate::sealed::Sealed;
use crate::surface;

/// Native machine arithmetic for one integer kind.
#[allow(clippy::should_implement_trait)]
pub trait IntegerOps: Sealed + Copy + Ord {
    fn add(self, rhs: Self) -> Self;
    fn sub(self, rhs: Self) -> Self;
    fn mul(self, rhs: Self) -> Self;
    /// Truncating division. Panics on a zero divisor or `MIN / -1`.
    fn div(self, rhs: Self) -> Self;
    /// Remainder with the sign of the dividend. Panics like [`IntegerOps::div`].
    fn rem(self, rhs: Self) -> Self;
    fn bitand(self, rhs: Self) -> Self;
    fn bitor(self, rhs: Self) -> Self;
    fn bitxor(self, rhs: Self) -> Self;
    fn shl(self, count: Self) -> Self;
    /// Arithmetic for signed kinds, logical for unsigned kinds.
    fn shr(self, count: Self) -> Self;
}

macro_rules! integer_ops {
    ($($ty:ty),*) => {
        $(
            impl IntegerOps for $ty {
                #[inline]
                fn add(self, rhs: Self) -> Self {
                    self.wrapping_add(rhs)
                }

                #[inline]
                fn sub(self, rhs: Self) -> Self {
                    self.wrapping_sub(rhs)
                }

                #[inline]
                fn mul(self, rhs: Self) -> Self {
                    self.wrapping_mul(rhs)
                }

                #[inline]
                fn div(self, rhs: Self) -> Self {
                    self / rhs
                }

                #[inline]
                fn rem(self, rhs: Self) -> Self {
                    self % rhs
                }

                #[inline]
                fn bitand(self, rhs: Self) -> Self {
                    self & rhs
                }

                #[inline]
                fn bitor(self, rhs: Self) -> Self {
                    self | rhs
                }

                #[inline]
                fn bitxor(self, rhs: Self) -> Self {
                    self ^ rhs
                }

                #[inline]
                fn shl(self, count: Self) -> Self {
                    self.wrapping_shl(count as u32)
                }

                #[inline]
                fn shr(self, count: Self) -> Self {
                    self.wrapping_shr(count as u32)
                }
            }
        )*
    };
}

integer_ops!(i32, u32, i64, u64, usize);

/// Unary minus for the signed kinds.
pub trait Negate: Sealed + Copy {
    fn negate(self) -> Self;
}

impl Negate for i32 {
    #[inline]
    fn negate(self) -> Self {
        self.wrapping_neg()
    }
}

impl Negate for i64 {
    #[inline]
    fn negate(self) -> Self {
        self.wrapping_neg()
    }
}

impl Negate for f32 {
    #[inline]
    fn negate(self) -> Self {
        -self
    }
}

impl Negate for f64 {
    #[inline]
    fn negate(self) -> Self {
        -self
    }
}

macro_rules! integer_surface {
    ($kind:ident: $ty:ty) => {
        paste! {
            surface! {
                [<register_ $kind>];
                [<__ext_add_ $kind>](x: $ty, y: $ty) -> $ty { IntegerOps::add(x, y) }
                [<__ext_sub_ $kind>](x: $ty, y: $ty) -> $ty { IntegerOps::sub(x, y) }
                [<__ext_mul_ $kind>](x: $ty, y: $ty) -> $ty { IntegerOps::mul(x, y) }
                [<__ext_div_ $kind>](x: $ty, y: $ty) -> $ty { IntegerOps::div(x, y) }
                [<__ext_and_ $kind>](x: $ty, y: $ty) -> $ty { IntegerOps::bitand(x, y) }
                [<__ext_or_ $kind>](x: $ty, y: $ty) -> $ty { IntegerOps::bitor(x, y) }
                [<__ext_xor_ $kind>](x: $ty, y: $ty) -> $ty { IntegerOps::bitxor(x, y) }
                [<__ext_mod_ $kind>](x: $ty, y: $ty) -> $ty { IntegerOps::rem(x, y) }
                [<__ext_lshift_ $kind>](x: $ty, y: $ty) -> $ty { IntegerOps::shl(x, y) }
                [<__ext_rshift_ $kind>](x: $ty, y: $ty) -> $ty { IntegerOps::shr(x, y) }
                [<__ext_less_ $kind>](x: $ty, y: $ty) -> bool { x < y }
                [<__ext_less_eq_ $kind>](x: $ty, y: $ty) -> bool { x <= y }
                [<__ext_greater_ $kind>](x: $ty, y: $ty) -> bool { x > y }
                [<__ext_greater_eq_ $kind>](x: $ty, y: $ty) -> bool { x >= y }
                [<__ext_eq_ $kind>](x: $ty, y: $ty) -> bool { x == y }
                [<__ext_not_eq_ $kind>](x: $ty, y: $ty) -> bool { x != y }
            }
        }
    };
}

macro_rules! float_surface {
    ($kind:ident: $ty:ty) => {
        paste! {
            surface! {
                [<register_ $kind>];
                [<__ext_add_ $kind>](x: $ty, y: $ty) -> $ty { x + y }
                [<__ext_sub_ $kind>](x: $ty, y: $ty) -> $ty { x - y }
                [<__ext_mul_ $kind>](x: $ty, y: $ty) -> $ty { x * y }
                [<__ext_div_ $kind>](x: $ty, y: $ty) -> $ty { x / y }
                /// Remainder truncated toward zero, as C `fmod`.
                [<__ext_mod_ $kind>](x: $ty, y: $ty) -> $ty { x % y }
                [<__ext_less_ $kind>](x: $ty, y: $ty) -> bool { x < y }
                [<__ext_less_eq_ $kind>](x: $ty, y: $ty) -> bool { x <= y }
                [<__ext_greater_ $kind>](x: $ty, y: $ty) -> bool { x > y }
                [<__ext_greater_eq_ $kind>](x: $ty, y: $ty) -> bool { x >= y }
                [<__ext_eq_ $kind>](x: $ty, y: $ty) -> bool { x == y }
                [<__ext_not_eq_ $kind>](x: $ty, y: $ty) -> bool { x != y }
            }
        }
    };
}

integer_surface!(i32: i32);
integer_surface!(ui32: u32);
integer_surface!(i64: i64);
integer_surface!(ui64: u64);
integer_surface!(usize: usize);
float_surface!(f32: f32);
float_surface!(f64: f64);

surface! {
    register_unary_minus;
    __ext_unary_minus_i32(x: i32) -> i32 { Negate::negate(x) }
    __ext_unary_minus_i64(x: i64) -> i64 { Negate::negate(x) }
    __ext_unary_minus_f32(x: f32) -> f32 { Negate::negate(x) }
    __ext_unary_minus_f64(x: f64) -> f64 { Negate::negate(x) }
}

// Characters compare as unsigned bytes.
surface! {
    register_char;
    __ext_less_char(x: u8, y: u8) -> bool { x < y }
    __ext_less_eq_char(x: u8, y: u8) -> bool { x <= y }
    __ext_greater_char(x: u8, y: u8) -> bool { x > y }
    __ext_greater_eq_char(x: u8, y: u8) -> bool { x >= y }
    __ext_eq_char(x: u8, y: u8) -> bool { x == y }
    __ext_not_eq_char(x: u8, y: u8) -> bool { x != y }
}

surface! {
    register_bool;
    __ext_and_bool(x: bool, y: bool) -> bool { x && y }
    __ext_or_bool(x: bool, y: bool) -> bool { x || y }
    __ext_eq_bool(x: bool, y: bool) -> bool { x == y }
    __ext_not_eq_bool(x: bool, y: bool) -> bool { x != y }
    __ext_not_bool(x: bool) -> bool { !x }
}

pub(crate) fn register_operators(table: &mut Vec<crate::Export>) {
    register_i32(table);
    register_ui32(table);
    register_i64(table);
    register_ui64(table);
    register_usize(table);
    register_f32(table);
    register_f64(table);
    register_char(table);
    register_bool(table);
    register_unary_minus(table);
}
