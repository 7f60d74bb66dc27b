use crate::error::{Result, TemporalError};
use crate::prelude::*;
use crate::temporal::{Temporal, TemporalAmount};
use crate::ChronoUnit;

/// A date based amount of years, months and days.
///
/// Applied in that order, each part through `Temporal::plus`, so month
/// arithmetic clamps before the days are added.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display)]
#[display(fmt = "P{years}Y{months}M{days}D")]
pub struct Period {
    years: i64,
    months: i64,
    days: i64,
}

impl Period {
    pub const ZERO: Self = Self::new(0, 0, 0);

    pub const fn new(years: i64, months: i64, days: i64) -> Self {
        Self {
            years,
            months,
            days,
        }
    }

    pub const fn of_years(years: i64) -> Self {
        Self::new(years, 0, 0)
    }

    pub const fn of_months(months: i64) -> Self {
        Self::new(0, months, 0)
    }

    /// # Errors
    /// Returns `TemporalError::Overflow` if the number of days overflows.
    pub fn of_weeks(weeks: i64) -> Result<Self> {
        weeks
            .checked_mul(7)
            .map(Self::of_days)
            .ok_or_else(|| TemporalError::Overflow(format!("{weeks} weeks")))
    }

    pub const fn of_days(days: i64) -> Self {
        Self::new(0, 0, days)
    }

    pub const fn years(&self) -> i64 {
        self.years
    }

    pub const fn months(&self) -> i64 {
        self.months
    }

    pub const fn days(&self) -> i64 {
        self.days
    }

    pub const fn is_zero(&self) -> bool {
        self.years == 0 && self.months == 0 && self.days == 0
    }

    /// # Errors
    /// Returns `TemporalError::Overflow` if any part is `i64::MIN`.
    pub fn negated(&self) -> Result<Self> {
        let negate = |value: i64| {
            value
                .checked_neg()
                .ok_or_else(|| TemporalError::Overflow(format!("-({self})")))
        };
        Ok(Self::new(
            negate(self.years)?,
            negate(self.months)?,
            negate(self.days)?,
        ))
    }

    fn parts(&self) -> [(i64, ChronoUnit); 3] {
        [
            (self.years, ChronoUnit::Years),
            (self.months, ChronoUnit::Months),
            (self.days, ChronoUnit::Days),
        ]
    }
}

impl TemporalAmount for Period {
    fn add_to<T: Temporal>(&self, temporal: &T) -> Result<T> {
        self.parts()
            .into_iter()
            .try_fold(temporal.clone(), |acc, (amount, unit)| acc.plus(amount, unit))
    }

    fn subtract_from<T: Temporal>(&self, temporal: &T) -> Result<T> {
        self.parts()
            .into_iter()
            .try_fold(temporal.clone(), |acc, (amount, unit)| acc.minus(amount, unit))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::date;

    #[test]
    fn test_constructors() {
        assert_eq!(Period::of_years(2), Period::new(2, 0, 0));
        assert_eq!(Period::of_months(3), Period::new(0, 3, 0));
        assert_eq!(Period::of_weeks(2).unwrap(), Period::of_days(14));
        assert!(Period::of_weeks(i64::MAX).is_err());
        assert!(Period::ZERO.is_zero());
        assert_eq!(Period::default(), Period::ZERO);
    }

    #[test]
    fn test_display() {
        assert_eq!(Period::new(1, -2, 3).to_string(), "P1Y-2M3D");
    }

    #[test]
    fn test_negated() {
        assert_eq!(Period::new(1, -2, 3).negated().unwrap(), Period::new(-1, 2, -3));
        assert!(Period::of_days(i64::MIN).negated().is_err());
    }

    #[test]
    fn test_add_to_applies_years_months_days_in_order() {
        let start = date(2015, 1, 31);
        // month first clamps to Feb 28, then one day
        let period = Period::new(0, 1, 1);
        assert_eq!(start.plus_amount(&period).unwrap(), date(2015, 3, 1));

        let period = Period::new(1, 1, 1);
        assert_eq!(date(2011, 1, 28).plus_amount(&period).unwrap(), date(2012, 2, 29));
    }

    #[test]
    fn test_subtract_from() {
        let period = Period::new(1, 2, 3);
        assert_eq!(
            date(2015, 3, 2).minus_amount(&period).unwrap(),
            date(2013, 12, 30)
        );
        assert_eq!(
            date(2015, 3, 2).minus_amount(&Period::ZERO).unwrap(),
            date(2015, 3, 2)
        );
    }
}
