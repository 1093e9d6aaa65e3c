//! Error types for catalog loading and plan layout.

use thiserror::Error;

/// Errors that can occur while loading a glyph catalog or laying out a plan.
#[derive(Debug, Error)]
pub enum ScribeError {
    /// Catalog JSON could not be parsed.
    #[error("catalog JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Catalog file could not be read.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A catalog entry's name is not a single jamo character.
    #[error("glyph name must be a single character, got \"{0}\"")]
    InvalidGlyphName(String),

    /// Two catalog entries share the same name.
    #[error("duplicate glyph '{0}' in catalog")]
    DuplicateGlyph(char),

    /// The input string does not fit into the configured layout grid.
    #[error("character index {index} exceeds grid capacity {capacity}")]
    GridCapacityExceeded {
        /// The first character index that does not fit.
        index: usize,
        /// Total cells available (columns x rows).
        capacity: usize,
    },
}

/// Result type for catalog and layout operations.
pub type Result<T> = std::result::Result<T, ScribeError>;
