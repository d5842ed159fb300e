//! Error types for the turning-grille library.

use thiserror::Error;

/// Errors produced when constructing or parsing a grille.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GrilleError {
    /// The requested stencil side length is unusable.
    #[error("invalid grille size: {size}")]
    InvalidSize {
        /// The rejected side length.
        size: usize,
    },

    /// A textual grid dump could not be parsed into a square `0`/`1` matrix.
    #[error("malformed grid: {reason}")]
    MalformedGrid {
        /// What the parser objected to.
        reason: String,
    },
}
