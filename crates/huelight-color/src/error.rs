//! Error types for textual HSL parsing.

use thiserror::Error;

/// Error type for parsing textual HSL values.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HslParseError {
    /// Input string was empty.
    #[error("empty input")]
    EmptyInput,

    /// Wrong number of numeric components.
    #[error("expected 3 components, found {0}")]
    ComponentCount(usize),

    /// A component was not a valid number.
    #[error("invalid component: {0}")]
    InvalidComponent(String),
}
