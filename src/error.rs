//! Crate-level error types.

use std::fmt;

/// Errors produced by the bimpick crate.
///
/// Overlay renderer failures are not listed here: the highlight controller
/// recovers from them inside pointer handling.
#[derive(Debug)]
pub enum PickError {
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// Model geometry handed to the builder was inconsistent.
    ModelBuild(String),
}

impl fmt::Display for PickError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::ModelBuild(msg) => write!(f, "model build error: {msg}"),
        }
    }
}

impl std::error::Error for PickError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for PickError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
