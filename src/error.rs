//! Error handling for the fatlang tooling.

use derive_more::{Display, Error, From};
use fatlang_abi::CatalogueError;

/// Result type for tooling operations.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Display, Error, From)]
pub enum Error {
    /// I/O errors when writing the header or symbol listing.
    #[display("I/O error: {_0}")]
    Io(#[error(source)] std::io::Error),

    /// Unknown kind, family or symbol name on the command line.
    #[display("{_0}")]
    Catalogue(#[error(source)] CatalogueError),
}
