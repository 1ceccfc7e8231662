//! Crate-level error types.
//!
//! Only setup can fail: loading options and garage layouts. The per-frame
//! interaction loop degrades silently instead of returning errors.

use std::fmt;

use crate::scene::ModelId;

/// Errors produced by the garage crate.
#[derive(Debug)]
pub enum GarageError {
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// Garage layout parsing failure.
    LayoutParse(String),
    /// A layout part references a model that the layout never defines.
    UnknownModel(ModelId),
}

impl fmt::Display for GarageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::LayoutParse(msg) => {
                write!(f, "layout parse error: {msg}")
            }
            Self::UnknownModel(model) => {
                write!(f, "layout references undefined {model}")
            }
        }
    }
}

impl std::error::Error for GarageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for GarageError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
