//! Error types for the generation crate
//!
//! Generation itself has no fatal error path: degenerate zones, unplaceable
//! buildings, and unplaceable openings are skipped locally. `Error` exists
//! for the supporting surfaces that can genuinely fail, like loading a
//! palette library from disk.

use thiserror::Error;

/// Main error type for the crate
#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Palette error: {0}")]
    Palette(String),
}
