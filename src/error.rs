//! Crate-level error types.

use std::fmt;

/// Errors produced by the folio crate.
#[derive(Debug)]
pub enum FolioError {
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// An option value that would make the motion unstable or undefined.
    InvalidOption {
        /// Dotted path of the offending field, e.g. `rig.smoothing_gain`.
        field: &'static str,
        /// What is wrong with it.
        reason: String,
    },
    /// A skill group id that is not in the catalogue.
    UnknownSkillGroup(u32),
}

impl fmt::Display for FolioError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::InvalidOption { field, reason } => {
                write!(f, "invalid option `{field}`: {reason}")
            }
            Self::UnknownSkillGroup(id) => {
                write!(f, "unknown skill group: {id}")
            }
        }
    }
}

impl std::error::Error for FolioError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for FolioError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
