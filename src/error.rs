//! Error types for temporal operations.

use thiserror::Error;

use crate::{ChronoField, ChronoUnit, ValueRange};

/// Errors raised by value ranges, calendar types and temporal arithmetic.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemporalError {
    /// A field value lies outside the field's valid range.
    #[error("Invalid value for {field} (valid values {range}): {value}")]
    OutOfRange {
        field: ChronoField,
        range: ValueRange,
        value: i64,
    },

    /// A value lies outside the domain of a calendar type such as `Month`.
    #[error("Invalid {kind}: {value}")]
    InvalidValue { kind: &'static str, value: i64 },

    /// The bounds given to a `ValueRange` constructor are not ordered.
    #[error("Invalid value range: {reason}")]
    InvalidRange { reason: String },

    /// Each component is in range, but the combination is not a calendar date.
    #[error("Invalid date {year}-{month:02}-{day:02}")]
    InvalidDate { year: i64, month: i64, day: i64 },

    /// Text did not match the expected format.
    #[error("Text '{text}' could not be parsed: {reason}")]
    Parse { text: String, reason: String },

    /// Arithmetic left the representable range.
    #[error("Arithmetic overflow: {0}")]
    Overflow(String),

    /// The value cannot be represented by the native calendar.
    #[error("Out of native calendar range: {0}")]
    NativeRange(String),

    /// The field is not supported by the temporal type.
    #[error("Unsupported field: {0}")]
    UnsupportedField(ChronoField),

    /// The unit is not supported by the temporal type.
    #[error("Unsupported unit: {0}")]
    UnsupportedUnit(ChronoUnit),

    /// No element of the enumeration has the given name.
    #[error("No such element '{name}' in {kind}")]
    NoSuchElement { kind: &'static str, name: String },

    /// A comparison was attempted against a value of another type.
    #[error("Cannot compare {expected} with a value of a different type")]
    ClassMismatch { expected: &'static str },
}

impl TemporalError {
    /// True for errors the caller fixes by passing a different value.
    pub const fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            Self::OutOfRange { .. }
                | Self::InvalidValue { .. }
                | Self::InvalidRange { .. }
                | Self::InvalidDate { .. }
                | Self::Parse { .. }
                | Self::Overflow(_)
                | Self::NativeRange(_)
        )
    }

    /// True when a field or unit does not apply to the temporal type.
    pub const fn is_unsupported(&self) -> bool {
        matches!(self, Self::UnsupportedField(_) | Self::UnsupportedUnit(_))
    }

    pub(crate) fn parse(text: &str, reason: impl Into<String>) -> Self {
        Self::Parse {
            text: text.to_owned(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, TemporalError>;
