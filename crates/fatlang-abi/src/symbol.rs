//! Every exported symbol of the runtime surface, with its name and C signature.
//!
//! Names are the compatibility contract with the generator: one symbol per
//! (operator, kind) pair and one per ordered (source, destination) kind pair,
//! all prefixed with `__ext_`.

use std::fmt;
use std::str::FromStr;

use crate::error::{CatalogueError, CatalogueResult};
use crate::kind::{AbiType, Kind};
use crate::operator::{Arity, Operator};

const PREFIX: &str = "__ext_";

/// Groups symbols the way the generator's headers split them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Family {
    Operator,
    Cast,
    Io,
    Memory,
    Process,
}

impl Family {
    pub const ALL: [Family; 5] = [
        Family::Operator,
        Family::Cast,
        Family::Io,
        Family::Memory,
        Family::Process,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Family::Operator => "operator",
            Family::Cast => "cast",
            Family::Io => "io",
            Family::Memory => "memory",
            Family::Process => "process",
        }
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Family {
    type Err = CatalogueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Family::ALL
            .into_iter()
            .find(|family| family.name() == s)
            .ok_or_else(|| CatalogueError::UnknownFamily { name: s.to_string() })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symbol {
    Operator { op: Operator, kind: Kind },
    Cast { from: Kind, to: Kind },
    Print { kind: Kind },
    Println { kind: Kind },
    PrintCharArr,
    PrintlnCharArr,
    Input { kind: Kind },
    InputString,
    Malloc,
    Free,
    VoidptrToUsize,
    UsizeToVoidptr,
    Exit,
}

/// A C-level function signature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signature {
    pub params: Vec<(&'static str, AbiType)>,
    pub ret: AbiType,
}

impl Signature {
    /// Render as a C prototype for `name`, without the trailing `;`.
    pub fn prototype(&self, name: &str) -> String {
        let params = if self.params.is_empty() {
            "void".to_string()
        } else {
            self.params
                .iter()
                .map(|(param, ty)| format!("{} {}", ty.c_type(), param))
                .collect::<Vec<_>>()
                .join(", ")
        };
        format!("{} {}({})", self.ret.c_type(), name, params)
    }
}

impl Symbol {
    /// The exported (unmangled) name.
    pub fn name(&self) -> String {
        match *self {
            Symbol::Operator { op, kind } => format!("{PREFIX}{}_{}", op.name(), kind.name()),
            Symbol::Cast { from, to } => format!("{PREFIX}cast_{}_{}", from.name(), to.name()),
            Symbol::Print { kind } => format!("{PREFIX}print_{}", kind.name()),
            Symbol::Println { kind } => format!("{PREFIX}println_{}", kind.name()),
            Symbol::PrintCharArr => format!("{PREFIX}print_char_arr"),
            Symbol::PrintlnCharArr => format!("{PREFIX}println_char_arr"),
            Symbol::Input { kind } => format!("{PREFIX}input_{}", kind.name()),
            Symbol::InputString => format!("{PREFIX}input_string"),
            Symbol::Malloc => format!("{PREFIX}malloc"),
            Symbol::Free => format!("{PREFIX}free"),
            Symbol::VoidptrToUsize => format!("{PREFIX}cast_voidptr_usize"),
            Symbol::UsizeToVoidptr => format!("{PREFIX}cast_usize_voidptr"),
            Symbol::Exit => format!("{PREFIX}exit"),
        }
    }

    pub fn family(&self) -> Family {
        match self {
            Symbol::Operator { .. } => Family::Operator,
            Symbol::Cast { .. } => Family::Cast,
            Symbol::Print { .. }
            | Symbol::Println { .. }
            | Symbol::PrintCharArr
            | Symbol::PrintlnCharArr
            | Symbol::Input { .. }
            | Symbol::InputString => Family::Io,
            Symbol::Malloc | Symbol::Free | Symbol::VoidptrToUsize | Symbol::UsizeToVoidptr => {
                Family::Memory
            }
            Symbol::Exit => Family::Process,
        }
    }

    /// Whether `kind` appears as an operand or result kind of this symbol.
    pub fn involves(&self, kind: Kind) -> bool {
        match *self {
            Symbol::Operator { op, kind: k } => k == kind || op.result_kind(k) == kind,
            Symbol::Cast { from, to } => from == kind || to == kind,
            Symbol::Print { kind: k } | Symbol::Println { kind: k } | Symbol::Input { kind: k } => {
                k == kind
            }
            Symbol::VoidptrToUsize | Symbol::UsizeToVoidptr | Symbol::Malloc => {
                kind == Kind::Usize
            }
            Symbol::Exit => kind == Kind::I32,
            Symbol::PrintCharArr
            | Symbol::PrintlnCharArr
            | Symbol::InputString
            | Symbol::Free => false,
        }
    }

    pub fn signature(&self) -> Signature {
        use AbiType::{CharArr, Scalar, Void, VoidPtr};

        let (params, ret) = match *self {
            Symbol::Operator { op, kind } => {
                let params = match op.arity() {
                    Arity::Unary => vec![("x", Scalar(kind))],
                    Arity::Binary => vec![("x", Scalar(kind)), ("y", Scalar(kind))],
                };
                (params, Scalar(op.result_kind(kind)))
            }
            Symbol::Cast { from, to } => (vec![("v", Scalar(from))], Scalar(to)),
            Symbol::Print { kind } | Symbol::Println { kind } => (vec![("v", Scalar(kind))], Void),
            Symbol::PrintCharArr | Symbol::PrintlnCharArr => (vec![("chars", CharArr)], Void),
            Symbol::Input { kind } => (vec![], Scalar(kind)),
            Symbol::InputString => (vec![], CharArr),
            Symbol::Malloc => (vec![("s", Scalar(Kind::Usize))], VoidPtr),
            Symbol::Free => (vec![("ptr", VoidPtr)], Void),
            Symbol::VoidptrToUsize => (vec![("p", VoidPtr)], Scalar(Kind::Usize)),
            Symbol::UsizeToVoidptr => (vec![("addr", Scalar(Kind::Usize))], VoidPtr),
            Symbol::Exit => (vec![("code", Scalar(Kind::I32))], Void),
        };
        Signature { params, ret }
    }

    /// Look a symbol up by its exported name.
    pub fn lookup(name: &str) -> CatalogueResult<Symbol> {
        catalogue()
            .into_iter()
            .find(|symbol| symbol.name() == name)
            .ok_or_else(|| CatalogueError::UnknownSymbol {
                name: name.to_string(),
            })
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}

/// The complete surface, grouped by family, in a stable order.
pub fn catalogue() -> Vec<Symbol> {
    let mut symbols = Vec::new();

    for kind in Kind::ALL {
        for op in Operator::ALL {
            if op.supports(kind) {
                symbols.push(Symbol::Operator { op, kind });
            }
        }
    }

    for from in Kind::ALL {
        for to in Kind::ALL {
            if from != to {
                symbols.push(Symbol::Cast { from, to });
            }
        }
    }

    for kind in Kind::ALL {
        symbols.push(Symbol::Print { kind });
        symbols.push(Symbol::Println { kind });
    }
    symbols.push(Symbol::PrintCharArr);
    symbols.push(Symbol::PrintlnCharArr);
    symbols.extend(
        Kind::ALL
            .into_iter()
            .filter(|kind| kind.is_readable())
            .map(|kind| Symbol::Input { kind }),
    );
    symbols.push(Symbol::InputString);

    symbols.extend([
        Symbol::Malloc,
        Symbol::Free,
        Symbol::VoidptrToUsize,
        Symbol::UsizeToVoidptr,
        Symbol::Exit,
    ]);

    symbols
}
