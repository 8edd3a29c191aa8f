//! Errors raised while querying the catalogue.

use derive_more::{Display, Error};

pub type CatalogueResult<T> = Result<T, CatalogueError>;

#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum CatalogueError {
    #[display("unknown kind `{name}` (expected one of: i32, ui32, i64, ui64, usize, f32, f64, char, bool)")]
    UnknownKind { name: String },

    #[display("unknown symbol `{name}`")]
    UnknownSymbol { name: String },

    #[display("unknown symbol family `{name}`")]
    UnknownFamily { name: String },
}
