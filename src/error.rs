//! # Error Types
//!
//! Custom error types for joy2rc using `thiserror`.

use thiserror::Error;

/// Which positional input sequence an out-of-range index refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    /// The `axes` sequence of a joystick sample.
    Axis,
    /// The `buttons` sequence of a joystick sample.
    Button,
}

impl std::fmt::Display for InputKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InputKind::Axis => write!(f, "axis"),
            InputKind::Button => write!(f, "button"),
        }
    }
}

/// Main error type for joy2rc
#[derive(Debug, Error)]
pub enum Joy2RcError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] toml::de::Error),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed sample on the input stream
    #[error("Malformed sample: {0}")]
    Sample(#[from] serde_json::Error),

    /// A configured index fell outside the bounds of a delivered sample
    #[error("{kind} index {index} out of range (sample carries {len})")]
    IndexOutOfRange {
        kind: InputKind,
        index: usize,
        len: usize,
    },
}

/// Result type alias for joy2rc
pub type Result<T> = std::result::Result<T, Joy2RcError>;
