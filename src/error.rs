//! Errors for parsing layout keywords from text (command line, settings)

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("invalid value '{value}' for {field}, expected one of: {expected}")]
    InvalidKeyword {
        field: &'static str,
        value: String,
        expected: String,
    },

    #[error("invalid gap '{0}', expected a non-negative number of pixels")]
    InvalidGap(String),

    #[error("unknown property '{0}'")]
    UnknownProperty(String),

    #[error("expected key=value, got '{0}'")]
    MissingValue(String),

    #[error("unknown export format '{0}', expected one of: html, css, react, properties")]
    UnknownDialect(String),
}
