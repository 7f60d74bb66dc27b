use crate::error::{Result, TemporalError};
use crate::native::{NativeModifier, NativeUnit};
use crate::temporal::Temporal;

enumeration! {
    /// The standard units of time, ordered from shortest to longest.
    pub enum ChronoUnit {
        Micros,
        Millis,
        Seconds,
        Minutes,
        Hours,
        /// Twelve hours, AM or PM.
        HalfDays,
        Days,
        Weeks,
        Months,
        Years,
        Decades,
        Centuries,
        Millennia,
        /// An infinite span. Neither date nor time based.
        Forever,
    }
}

impl ChronoUnit {
    /// Days and longer, excluding `Forever`.
    pub const fn is_date_based(self) -> bool {
        matches!(
            self,
            Self::Days
                | Self::Weeks
                | Self::Months
                | Self::Years
                | Self::Decades
                | Self::Centuries
                | Self::Millennia
        )
    }

    /// Shorter than a day.
    pub const fn is_time_based(self) -> bool {
        matches!(
            self,
            Self::Micros
                | Self::Millis
                | Self::Seconds
                | Self::Minutes
                | Self::Hours
                | Self::HalfDays
        )
    }

    /// Date based units vary in length (months, leap years), so their
    /// duration is only an estimate.
    pub const fn is_duration_estimated(self) -> bool {
        self.is_date_based()
    }

    pub fn is_supported_by<T: Temporal>(self, temporal: &T) -> bool {
        temporal.supports_unit(self)
    }

    /// Translates `amount` of this unit into a native calendar modification.
    ///
    /// Composite units are rescaled to the native unit first: one millennium
    /// becomes `+1000 Years`, one half day `+12 Hours`. `Forever` always
    /// yields a zero amount.
    ///
    /// # Errors
    /// Returns `TemporalError::Overflow` if rescaling overflows.
    pub fn to_native_modifier(self, amount: i64) -> Result<NativeModifier> {
        let (amount, unit) = match self {
            Self::Micros => (amount, NativeUnit::Microseconds),
            Self::Millis => (amount, NativeUnit::Milliseconds),
            Self::Seconds => (amount, NativeUnit::Seconds),
            Self::Minutes => (amount, NativeUnit::Minutes),
            Self::Hours => (amount, NativeUnit::Hours),
            Self::HalfDays => (self.rescale(amount, 12)?, NativeUnit::Hours),
            Self::Days => (amount, NativeUnit::Days),
            Self::Weeks => (amount, NativeUnit::Weeks),
            Self::Months => (amount, NativeUnit::Months),
            Self::Years => (amount, NativeUnit::Years),
            Self::Decades => (self.rescale(amount, 10)?, NativeUnit::Years),
            Self::Centuries => (self.rescale(amount, 100)?, NativeUnit::Years),
            Self::Millennia => (self.rescale(amount, 1000)?, NativeUnit::Years),
            Self::Forever => (0, NativeUnit::Years),
        };
        Ok(NativeModifier::Relative { amount, unit })
    }

    fn rescale(self, amount: i64, factor: i64) -> Result<i64> {
        amount
            .checked_mul(factor)
            .ok_or_else(|| TemporalError::Overflow(format!("{amount} {self}")))
    }
}
