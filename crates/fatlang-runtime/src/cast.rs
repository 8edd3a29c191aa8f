//! The cast matrix: one direct conversion symbol per ordered pair of kinds.
//!
//! Numeric pairs use the host conversion (`as`): integer narrowing
//! truncates, widening sign- or zero-extends by source signedness,
//! integer to float rounds to nearest, and float to integer truncates toward
//! zero, saturating at the destination bounds with NaN mapping to 0.
//! Conversions to `bool` test against zero; `bool` converts to 0 or 1.

use paste::paste;

use crate::sealed::Sealed;
use crate::surface;

/// Direct conversion of a scalar into kind `T`.
pub trait CastTo<T>: Sealed {
    fn cast(self) -> T;
}

macro_rules! numeric_casts {
    ($($ty:ty),*) => {
        numeric_casts!(@rows [$($ty),*] $($ty),*);
    };
    (@rows $targets:tt $($from:ty),*) => {
        $(numeric_casts!(@row $from => $targets);)*
    };
    (@row $from:ty => [$($to:ty),*]) => {
        $(
            impl CastTo<$to> for $from {
                #[inline]
                fn cast(self) -> $to {
                    self as $to
                }
            }
        )*
    };
}

numeric_casts!(i32, u32, i64, u64, usize, f32, f64, u8);

macro_rules! bool_casts {
    ($($ty:ty => $zero:expr),*) => {
        $(
            impl CastTo<bool> for $ty {
                #[inline]
                fn cast(self) -> bool {
                    self != $zero
                }
            }

            impl CastTo<$ty> for bool {
                #[inline]
                fn cast(self) -> $ty {
                    u8::from(self) as $ty
                }
            }
        )*
    };
}

bool_casts!(
    i32 => 0,
    u32 => 0,
    i64 => 0,
    u64 => 0,
    usize => 0,
    f32 => 0.0,
    f64 => 0.0,
    u8 => 0
);

/// One row of the matrix: every cast out of `$from`.
macro_rules! cast_row {
    ($from:ident: $from_ty:ty => $($to:ident: $to_ty:ty),* $(,)?) => {
        paste! {
            surface! {
                [<register_ $from>];
                $(
                    [<__ext_cast_ $from _ $to>](v: $from_ty) -> $to_ty {
                        <$from_ty as CastTo<$to_ty>>::cast(v)
                    }
                )*
            }
        }
    };
}

cast_row!(i32: i32 =>
    ui32: u32, i64: i64, ui64: u64, usize: usize, f32: f32, f64: f64, char: u8, bool: bool);
cast_row!(ui32: u32 =>
    i32: i32, i64: i64, ui64: u64, usize: usize, f32: f32, f64: f64, char: u8, bool: bool);
cast_row!(i64: i64 =>
    i32: i32, ui32: u32, ui64: u64, usize: usize, f32: f32, f64: f64, char: u8, bool: bool);
cast_row!(ui64: u64 =>
    i32: i32, ui32: u32, i64: i64, usize: usize, f32: f32, f64: f64, char: u8, bool: bool);
cast_row!(usize: usize =>
    i32: i32, ui32: u32, i64: i64, ui64: u64, f32: f32, f64: f64, char: u8, bool: bool);
cast_row!(f32: f32 =>
    i32: i32, ui32: u32, i64: i64, ui64: u64, usize: usize, f64: f64, char: u8, bool: bool);
cast_row!(f64: f64 =>
    i32: i32, ui32: u32, i64: i64, ui64: u64, usize: usize, f32: f32, char: u8, bool: bool);
cast_row!(char: u8 =>
    i32: i32, ui32: u32, i64: i64, ui64: u64, usize: usize, f32: f32, f64: f64, bool: bool);
cast_row!(bool: bool =>
    i32: i32, ui32: u32, i64: i64, ui64: u64, usize: usize, f32: f32, f64: f64, char: u8);

pub(crate) fn register_casts(table: &mut Vec<crate::Export>) {
    register_i32(table);
    register_ui32(table);
    register_i64(table);
    register_ui64(table);
    register_usize(table);
    register_f32(table);
    register_f64(table);
    register_char(table);
    register_bool(table);
}
