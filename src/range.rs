use std::fmt;

use crate::error::{Result, TemporalError};
use crate::{ChronoField, Hashable};

/// The range of valid values for a field.
///
/// Both the minimum and the maximum may vary: day-of-month always starts at 1
/// but ends anywhere from 28 to 31. A range therefore carries four bounds,
/// `smallest_minimum <= largest_minimum < smallest_maximum <= largest_maximum`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ValueRange {
    smallest_minimum: i64,
    largest_minimum: i64,
    smallest_maximum: i64,
    largest_maximum: i64,
}

impl ValueRange {
    /// Creates a range where both minimum and maximum are fixed.
    ///
    /// # Errors
    /// Returns `TemporalError::InvalidRange` if `min >= max`.
    pub fn of_fixed(min: i64, max: i64) -> Result<Self> {
        Self::of_variable(min, min, max, max)
    }

    /// Creates a range with a fixed minimum and a variable maximum.
    ///
    /// # Errors
    /// Returns `TemporalError::InvalidRange` if the bounds are not ordered.
    pub fn of_variable_max(min: i64, smallest_max: i64, largest_max: i64) -> Result<Self> {
        Self::of_variable(min, min, smallest_max, largest_max)
    }

    /// Creates a range where both minimum and maximum vary.
    ///
    /// # Errors
    /// Returns `TemporalError::InvalidRange` if the bounds are not ordered.
    pub fn of_variable(
        smallest_min: i64,
        largest_min: i64,
        smallest_max: i64,
        largest_max: i64,
    ) -> Result<Self> {
        if smallest_min > largest_min {
            return Err(TemporalError::InvalidRange {
                reason: format!(
                    "smallest minimum {smallest_min} is greater than largest minimum {largest_min}"
                ),
            });
        }
        if largest_min >= smallest_max {
            return Err(TemporalError::InvalidRange {
                reason: format!(
                    "largest minimum {largest_min} is not less than smallest maximum {smallest_max}"
                ),
            });
        }
        if smallest_max > largest_max {
            return Err(TemporalError::InvalidRange {
                reason: format!(
                    "smallest maximum {smallest_max} is greater than largest maximum {largest_max}"
                ),
            });
        }
        Ok(Self::new_unchecked(
            smallest_min,
            largest_min,
            smallest_max,
            largest_max,
        ))
    }

    /// Builds a range whose ordering is known at compile time.
    pub(crate) const fn new_unchecked(
        smallest_minimum: i64,
        largest_minimum: i64,
        smallest_maximum: i64,
        largest_maximum: i64,
    ) -> Self {
        debug_assert!(smallest_minimum <= largest_minimum);
        debug_assert!(largest_minimum < smallest_maximum);
        debug_assert!(smallest_maximum <= largest_maximum);
        Self {
            smallest_minimum,
            largest_minimum,
            smallest_maximum,
            largest_maximum,
        }
    }

    /// The smallest value any instance of the field can take.
    pub const fn minimum(&self) -> i64 {
        self.smallest_minimum
    }

    pub const fn largest_minimum(&self) -> i64 {
        self.largest_minimum
    }

    pub const fn smallest_maximum(&self) -> i64 {
        self.smallest_maximum
    }

    /// The largest value any instance of the field can take.
    pub const fn maximum(&self) -> i64 {
        self.largest_maximum
    }

    pub const fn is_fixed(&self) -> bool {
        self.smallest_minimum == self.largest_minimum
            && self.smallest_maximum == self.largest_maximum
    }

    /// Checks the value against the outer bounds only.
    ///
    /// A day-of-month of 31 is valid here even though April never reaches it;
    /// calendar validity is checked separately by the date types.
    pub const fn is_valid_value(&self, value: i64) -> bool {
        value >= self.minimum() && value <= self.maximum()
    }

    /// Returns `value` unchanged if it lies within the outer bounds.
    ///
    /// # Errors
    /// Returns `TemporalError::OutOfRange` naming `field` and this range.
    pub fn check_valid_value(&self, value: i64, field: ChronoField) -> Result<i64> {
        if self.is_valid_value(value) {
            Ok(value)
        } else {
            debug!("{value} rejected for {field}, valid values {self}");
            Err(TemporalError::OutOfRange {
                field,
                range: *self,
                value,
            })
        }
    }
}

impl fmt::Display for ValueRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.smallest_minimum)?;
        if self.smallest_minimum != self.largest_minimum {
            write!(f, "/{}", self.largest_minimum)?;
        }
        write!(f, " - {}", self.smallest_maximum)?;
        if self.smallest_maximum != self.largest_maximum {
            write!(f, "/{}", self.largest_maximum)?;
        }
        Ok(())
    }
}

impl Hashable for ValueRange {
    type Code = String;

    /// The textual form without spaces, e.g. `1-28/31`.
    fn hash_code(&self) -> String {
        self.to_string().replace(' ', "")
    }
}

/// Wraps `current + change` into the inclusive cycle `min..=max`.
///
/// Any number of whole cycles is absorbed, in either direction, so
/// `calculate_overflow(1, 14, 1, 12)` is 3 and `calculate_overflow(1, -14, 1, 12)`
/// is 11.
pub fn calculate_overflow(current: i64, change: i64, min: i64, max: i64) -> i64 {
    debug_assert!(min <= max);
    let span = i128::from(max) - i128::from(min) + 1;
    let offset = i128::from(current) - i128::from(min) + i128::from(change);
    // rem_euclid keeps the offset in 0..span, so the result lies in min..=max
    let wrapped = i128::from(min) + offset.rem_euclid(span);
    i64::try_from(wrapped).unwrap_or(max)
}
