//! Catalogue of the fatlang runtime surface.
//!
//! Describes, as plain data, every kind, operator and exported symbol that
//! generated code may call, so tools can enumerate the surface without
//! linking the runtime itself.

pub mod error;
pub mod kind;
pub mod operator;
pub mod symbol;

pub use error::{CatalogueError, CatalogueResult};
pub use kind::{AbiType, Kind};
pub use operator::{Arity, Operator};
pub use symbol::{Family, Signature, Symbol, catalogue};
