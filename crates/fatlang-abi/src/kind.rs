//! The primitive type catalogue.
//!
//! Nine fixed-width scalar kinds, each with exactly one host representation.
//! There are no other widths: every widening or narrowing goes through an
//! explicit cast symbol.

use std::fmt;
use std::str::FromStr;

use crate::error::CatalogueError;

/// A scalar kind of the runtime surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Kind {
    I32,
    Ui32,
    I64,
    Ui64,
    /// Unsigned, as wide as a machine address.
    Usize,
    F32,
    F64,
    /// A single 8-bit character, carried as an unsigned byte.
    Char,
    Bool,
}

impl Kind {
    /// Every kind, in catalogue order.
    pub const ALL: [Kind; 9] = [
        Kind::I32,
        Kind::Ui32,
        Kind::I64,
        Kind::Ui64,
        Kind::Usize,
        Kind::F32,
        Kind::F64,
        Kind::Char,
        Kind::Bool,
    ];

    /// The integer kinds that carry the full arithmetic/bitwise/shift set.
    pub const INTEGERS: [Kind; 5] = [Kind::I32, Kind::Ui32, Kind::I64, Kind::Ui64, Kind::Usize];

    pub const FLOATS: [Kind; 2] = [Kind::F32, Kind::F64];

    /// Canonical name, used as the suffix of every exported symbol.
    pub fn name(self) -> &'static str {
        match self {
            Kind::I32 => "i32",
            Kind::Ui32 => "ui32",
            Kind::I64 => "i64",
            Kind::Ui64 => "ui64",
            Kind::Usize => "usize",
            Kind::F32 => "f32",
            Kind::F64 => "f64",
            Kind::Char => "char",
            Kind::Bool => "bool",
        }
    }

    /// The C type generated code uses for this kind.
    ///
    /// `char` is declared as `uint8_t` rather than plain `char` so that the
    /// caller and the runtime agree on zero extension at the call boundary.
    pub fn c_type(self) -> &'static str {
        match self {
            Kind::I32 => "int32_t",
            Kind::Ui32 => "uint32_t",
            Kind::I64 => "int64_t",
            Kind::Ui64 => "uint64_t",
            Kind::Usize => "size_t",
            Kind::F32 => "float",
            Kind::F64 => "double",
            Kind::Char => "uint8_t",
            Kind::Bool => "bool",
        }
    }

    /// Value width in bits. `usize` follows the target's pointer width and
    /// `bool` reports its storage width.
    pub fn bits(self) -> u32 {
        match self {
            Kind::I32 | Kind::Ui32 | Kind::F32 => 32,
            Kind::I64 | Kind::Ui64 | Kind::F64 => 64,
            Kind::Usize => usize::BITS,
            Kind::Char | Kind::Bool => 8,
        }
    }

    pub fn is_signed(self) -> bool {
        matches!(self, Kind::I32 | Kind::I64 | Kind::F32 | Kind::F64)
    }

    pub fn is_float(self) -> bool {
        Kind::FLOATS.contains(&self)
    }

    /// True for the five integer kinds (`char` and `bool` are excluded).
    pub fn is_integer(self) -> bool {
        Kind::INTEGERS.contains(&self)
    }

    /// Kinds accepted by the scalar input primitive.
    pub fn is_readable(self) -> bool {
        self != Kind::Bool
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Kind {
    type Err = CatalogueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Kind::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| CatalogueError::UnknownKind { name: s.to_string() })
    }
}

/// A type that can appear in a symbol signature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AbiType {
    Void,
    Scalar(Kind),
    /// The `(address, length)` text buffer.
    CharArr,
    /// An untyped machine address.
    VoidPtr,
}

impl AbiType {
    pub fn c_type(self) -> &'static str {
        match self {
            AbiType::Void => "void",
            AbiType::Scalar(kind) => kind.c_type(),
            AbiType::CharArr => "struct __c_char_arr",
            AbiType::VoidPtr => "void*",
        }
    }
}

impl From<Kind> for AbiType {
    fn from(kind: Kind) -> Self {
        AbiType::Scalar(kind)
    }
}
