//! fatlang runtime library.
//!
//! Provides the native functions generated fatlang programs call instead of
//! emitting operators directly. Every symbol is `extern "C"`, unmangled and
//! takes/returns scalars by value:
//! - Operators per kind (`__ext_add_i32`, `__ext_less_eq_f64`, `__ext_not_bool`, ...)
//! - The cast matrix over all ordered kind pairs (`__ext_cast_<from>_<to>`)
//! - Formatted stdout/stdin primitives (`__ext_print_*`, `__ext_input_*`)
//! - Raw memory (`__ext_malloc`, `__ext_free`, address reinterpretation)
//! - Process exit (`__ext_exit`)
//!
//! The layer adds no guardrails: results are exactly what the host produces
//! for the given width (wraparound, divide traps, saturating float casts).

pub mod cast;
pub mod exports;
pub mod io;
pub mod memory;
pub mod ops;
pub mod process;

pub use cast::CastTo;
pub use exports::{Export, exports};
pub use io::{CharArr, Scalar, Scan};
pub use ops::{IntegerOps, Negate};

pub use cast::*;
pub use io::*;
pub use memory::*;
pub use ops::*;
pub use process::*;

mod sealed {
    pub trait Sealed {}

    impl Sealed for i32 {}
    impl Sealed for u32 {}
    impl Sealed for i64 {}
    impl Sealed for u64 {}
    impl Sealed for usize {}
    impl Sealed for f32 {}
    impl Sealed for f64 {}
    impl Sealed for u8 {}
    impl Sealed for bool {}
}

/// Defines a group of `#[no_mangle]` C functions together with a
/// registration function that records each of them in the export table.
macro_rules! surface {
    (
        $register:ident;
        $(
            $(#[$meta:meta])*
            $name:ident($($arg:ident: $arg_ty:ty),*) $(-> $ret:ty)? $body:block
        )*
    ) => {
        $(
            $(#[$meta])*
            #[unsafe(no_mangle)]
            pub extern "C" fn $name($($arg: $arg_ty),*) $(-> $ret)? $body
        )*

        fn $register(table: &mut Vec<$crate::exports::Export>) {
            $crate::exports::export_symbols!(table; $($name),*);
        }
    };
}
pub(crate) use surface;
