//! Error types.

use std::path::PathBuf;

/// Errors that stop a jestsay run.
#[derive(Debug, thiserror::Error)]
pub enum JestsayError {
    #[error("ANSI art file not found: {}", path.display())]
    ArtNotFound { path: PathBuf },

    #[error("Failed to read ANSI art file {}: {source}", path.display())]
    ArtUnreadable {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Quips file not found: {}", path.display())]
    QuipsNotFound { path: PathBuf },

    #[error("Failed to read quips file {}: {source}", path.display())]
    QuipsUnreadable {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("No quips found")]
    NoQuips,

    #[error(transparent)]
    InvalidColor(#[from] ColorError),
}

/// Errors from parsing a `#RGB` / `#RRGGBB` color.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ColorError {
    #[error("Invalid hex color length: {len} (expected 3 or 6)")]
    InvalidLength { len: usize },

    #[error("Invalid hex color '{value}'")]
    InvalidHex { value: String },
}
