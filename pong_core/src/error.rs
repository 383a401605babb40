use std::fmt;

/// Errors surfaced by the simulation core.
///
/// Every variant is caller-correctable: the simulation never enters a state
/// it cannot continue from.
#[derive(Debug, Clone, PartialEq)]
pub enum SimError {
    /// Non-positive or non-finite dimension, or an unusable tuning value.
    InvalidConfiguration(String),
    /// A raw player id that is neither 0 (left) nor 1 (right).
    InvalidSide(u8),
    /// The configuration text could not be parsed.
    ConfigParse(String),
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidConfiguration(msg) => write!(f, "invalid configuration: {msg}"),
            Self::InvalidSide(id) => write!(f, "invalid side: {id} (expected 0 or 1)"),
            Self::ConfigParse(msg) => write!(f, "config parse error: {msg}"),
        }
    }
}

impl std::error::Error for SimError {}
