//! Error types for environment variable configuration

use std::num::ParseIntError;

/// Failure to convert a single raw value into its target type.
///
/// Returned by the parsers in [`crate::parse`] and wrapped into
/// [`EnvError::Field`] by the struct populator.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// The value is not one of the accepted boolean tokens.
    #[error("invalid boolean value {value:?}")]
    Bool {
        /// The rejected token
        value: String,
    },

    /// A scalar integer could not be parsed (bad digits or overflow).
    #[error(transparent)]
    Int(#[from] ParseIntError),

    /// One element of a comma-separated integer list could not be parsed.
    #[error("invalid integer value at index {index}: {source}")]
    Element {
        /// 0-based position of the offending token
        index: usize,
        /// Underlying integer parse failure
        source: ParseIntError,
    },

    /// A fixed-size array received a different number of values.
    #[error("array length mismatch: got {actual} values, expected {expected}")]
    LengthMismatch {
        /// Number of comma-separated tokens in the raw value
        actual: usize,
        /// Length of the target array
        expected: usize,
    },

    /// The field's declared type has no parser.
    #[error("unsupported kind: {0}")]
    UnsupportedKind(&'static str),
}

/// Errors surfaced by [`crate::load_struct`], [`crate::Env::populate`] and
/// [`crate::load`].
///
/// The standalone `get*` accessors never return this type; they fall back to
/// the caller's default instead.
#[derive(Debug, thiserror::Error)]
pub enum EnvError {
    /// A field's value could not be converted.
    ///
    /// Population stops at the first failing field.
    #[error("variable {name}: {source}")]
    Field {
        /// Environment variable the value was read from
        name: String,
        /// What went wrong while parsing it
        source: ParseError,
    },

    /// The `.env` file could not be read or parsed.
    #[error(transparent)]
    Load(#[from] dotenvy::Error),
}

impl EnvError {
    /// Create a field error
    pub(crate) fn field(name: impl Into<String>, source: ParseError) -> Self {
        Self::Field {
            name: name.into(),
            source,
        }
    }

    /// Name of the variable that failed, if this is a field error.
    pub fn variable(&self) -> Option<&str> {
        match self {
            Self::Field { name, .. } => Some(name),
            Self::Load(_) => None,
        }
    }
}
