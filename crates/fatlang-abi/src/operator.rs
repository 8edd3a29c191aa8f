//! Operators of the dispatch surface and the kinds each one is defined over.

use std::fmt;

use crate::kind::Kind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
    And,
    Or,
    Xor,
    Mod,
    LShift,
    RShift,
    Less,
    LessEq,
    Greater,
    GreaterEq,
    Eq,
    NotEq,
    Not,
    UnaryMinus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    Unary,
    Binary,
}

const ARITHMETIC: [Operator; 5] = [
    Operator::Add,
    Operator::Sub,
    Operator::Mul,
    Operator::Div,
    Operator::Mod,
];

const COMPARISONS: [Operator; 6] = [
    Operator::Less,
    Operator::LessEq,
    Operator::Greater,
    Operator::GreaterEq,
    Operator::Eq,
    Operator::NotEq,
];

impl Operator {
    /// Every operator, in catalogue order.
    pub const ALL: [Operator; 18] = [
        Operator::Add,
        Operator::Sub,
        Operator::Mul,
        Operator::Div,
        Operator::And,
        Operator::Or,
        Operator::Xor,
        Operator::Mod,
        Operator::LShift,
        Operator::RShift,
        Operator::Less,
        Operator::LessEq,
        Operator::Greater,
        Operator::GreaterEq,
        Operator::Eq,
        Operator::NotEq,
        Operator::Not,
        Operator::UnaryMinus,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Operator::Add => "add",
            Operator::Sub => "sub",
            Operator::Mul => "mul",
            Operator::Div => "div",
            Operator::And => "and",
            Operator::Or => "or",
            Operator::Xor => "xor",
            Operator::Mod => "mod",
            Operator::LShift => "lshift",
            Operator::RShift => "rshift",
            Operator::Less => "less",
            Operator::LessEq => "less_eq",
            Operator::Greater => "greater",
            Operator::GreaterEq => "greater_eq",
            Operator::Eq => "eq",
            Operator::NotEq => "not_eq",
            Operator::Not => "not",
            Operator::UnaryMinus => "unary_minus",
        }
    }

    pub fn arity(self) -> Arity {
        match self {
            Operator::Not | Operator::UnaryMinus => Arity::Unary,
            _ => Arity::Binary,
        }
    }

    pub fn is_comparison(self) -> bool {
        COMPARISONS.contains(&self)
    }

    /// Whether the surface carries a symbol for `self` over `kind`.
    ///
    /// - integer kinds: arithmetic, bitwise, shifts and comparisons
    /// - float kinds: arithmetic and comparisons
    /// - signed integers and floats: unary minus
    /// - `char`: comparisons
    /// - `bool`: `and`, `or`, `eq`, `not_eq`, `not`
    pub fn supports(self, kind: Kind) -> bool {
        match kind {
            Kind::I32 | Kind::Ui32 | Kind::I64 | Kind::Ui64 | Kind::Usize => {
                !matches!(self, Operator::Not)
                    && (self != Operator::UnaryMinus || kind.is_signed())
            }
            Kind::F32 | Kind::F64 => {
                ARITHMETIC.contains(&self)
                    || self.is_comparison()
                    || self == Operator::UnaryMinus
            }
            Kind::Char => self.is_comparison(),
            Kind::Bool => matches!(
                self,
                Operator::And | Operator::Or | Operator::Eq | Operator::NotEq | Operator::Not
            ),
        }
    }

    /// Kind of the value produced when applied to operands of `kind`.
    pub fn result_kind(self, kind: Kind) -> Kind {
        if self.is_comparison() {
            Kind::Bool
        } else {
            kind
        }
    }

    /// Kinds this operator is defined over, in catalogue order.
    pub fn kinds(self) -> impl Iterator<Item = Kind> {
        Kind::ALL.into_iter().filter(move |kind| self.supports(*kind))
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
