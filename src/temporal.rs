//! The read/write contract shared by date types, and the strategy traits that
//! plug into it.
//!
//! Fields and units are closed enumerations, so "does this type support that
//! field" is answered by the temporal type itself (`supports_field`,
//! `supports_unit`) rather than by virtual dispatch on the field.

use chrono::{Datelike, NaiveDateTime};

use crate::adjusters::Adjuster;
use crate::error::{Result, TemporalError};
use crate::{ChronoField, ChronoUnit, ValueRange};

/// Read access to the fields of a date-like value.
pub trait TemporalAccessor {
    fn supports_field(&self, field: ChronoField) -> bool;

    /// # Errors
    /// Returns `TemporalError::UnsupportedField` if the field does not apply.
    fn get(&self, field: ChronoField) -> Result<i64>;

    /// The valid range of `field` for this type.
    ///
    /// # Errors
    /// Returns `TemporalError::UnsupportedField` if the field does not apply.
    fn range(&self, field: ChronoField) -> Result<ValueRange> {
        if self.supports_field(field) {
            Ok(field.range())
        } else {
            Err(TemporalError::UnsupportedField(field))
        }
    }
}

/// A date-like value that can be adjusted field by field and moved by units.
///
/// Unit arithmetic goes through the native calendar: the value is exported
/// with `to_native_shifted`, modified, and rebuilt with `from_native_shifted`.
pub trait Temporal: TemporalAccessor + Clone {
    /// # Errors
    /// Returns an error if the native value is outside this type's range.
    fn from_native(native: NaiveDateTime) -> Result<Self>;

    /// # Errors
    /// Returns `TemporalError::NativeRange` if the native calendar cannot
    /// represent this value.
    fn to_native(&self) -> Result<NaiveDateTime>;

    /// Exports to the native calendar, moved by a whole number of 400 year
    /// cycles if needed, together with the number of years removed.
    ///
    /// The Gregorian calendar repeats every 400 years, weekdays included, so
    /// arithmetic on the shifted value is exact once the shift is added back.
    ///
    /// # Errors
    /// As `to_native`.
    fn to_native_shifted(&self) -> Result<(NaiveDateTime, i64)> {
        self.to_native().map(|native| (native, 0))
    }

    /// Rebuilds from a native value exported by `to_native_shifted`, adding
    /// back `years`, a whole number of 400 year cycles.
    ///
    /// # Errors
    /// Returns an error if the shifted-back value is outside this type's range.
    fn from_native_shifted(native: NaiveDateTime, years: i64) -> Result<Self> {
        if years == 0 {
            return Self::from_native(native);
        }
        i64::from(native.year())
            .checked_add(years)
            .and_then(|year| i32::try_from(year).ok())
            .and_then(|year| native.with_year(year))
            .ok_or_else(|| TemporalError::NativeRange(format!("{native} shifted by {years} years")))
            .and_then(Self::from_native)
    }

    fn supports_unit(&self, unit: ChronoUnit) -> bool;

    /// # Errors
    /// Returns an unsupported-field error, or an out-of-range error for `value`.
    fn with_field(&self, field: ChronoField, value: i64) -> Result<Self>;

    /// # Errors
    /// Propagates the adjuster's error.
    fn with<A: TemporalAdjuster>(&self, adjuster: &A) -> Result<Self> {
        adjuster.adjust_into(self)
    }

    /// # Errors
    /// Returns `TemporalError::UnsupportedUnit` if `unit` does not apply, or
    /// an error if the result is out of range.
    fn plus(&self, amount: i64, unit: ChronoUnit) -> Result<Self> {
        self.with(&Adjuster::plus_unit(amount, unit))
    }

    /// Same as `plus` with the amount negated.
    ///
    /// # Errors
    /// As `plus`; also fails for `i64::MIN`.
    fn minus(&self, amount: i64, unit: ChronoUnit) -> Result<Self> {
        let negated = amount
            .checked_neg()
            .ok_or_else(|| TemporalError::Overflow(format!("-({amount}) {unit}")))?;
        self.plus(negated, unit)
    }

    /// # Errors
    /// Propagates the amount's error.
    fn plus_amount<A: TemporalAmount>(&self, amount: &A) -> Result<Self> {
        amount.add_to(self)
    }

    /// # Errors
    /// Propagates the amount's error.
    fn minus_amount<A: TemporalAmount>(&self, amount: &A) -> Result<Self> {
        amount.subtract_from(self)
    }
}

/// A strategy that turns one temporal value into another of the same type.
pub trait TemporalAdjuster {
    /// # Errors
    /// Returns an error if the adjustment does not apply to `temporal` or
    /// the result is out of range.
    fn adjust_into<T: Temporal>(&self, temporal: &T) -> Result<T>;
}

/// An amount of time made of one or more units, such as a `Period`.
pub trait TemporalAmount {
    /// # Errors
    /// Returns an error if any unit is unsupported or the result is out of range.
    fn add_to<T: Temporal>(&self, temporal: &T) -> Result<T>;

    /// # Errors
    /// Returns an error if any unit is unsupported or the result is out of range.
    fn subtract_from<T: Temporal>(&self, temporal: &T) -> Result<T>;
}
