//! Tooling around the fatlang runtime surface.
//!
//! Renders the C header that generated programs are compiled against and
//! lists symbol prototypes from the catalogue in `fatlang-abi`.

pub mod error;
pub mod header;

pub use error::{Error, Result};
pub use header::{SymbolFilter, prototype, prototypes, render_header};
