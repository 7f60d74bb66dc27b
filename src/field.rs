use chrono::{Datelike, NaiveDateTime};

use crate::consts::{
    DAYS_PER_LEAP_YEAR, DAYS_PER_WEEK, DAYS_PER_YEAR, MAX_YEAR, MIN_DAY, MIN_YEAR,
    MONTHS_PER_YEAR,
};
use crate::error::Result;
use crate::range::ValueRange;
use crate::temporal::TemporalAccessor;
use crate::unit::ChronoUnit;

enumeration! {
    /// The addressable components of a calendar date.
    pub enum ChronoField {
        /// ISO day of week, Monday (1) to Sunday (7).
        DayOfWeek,
        DayOfMonth,
        DayOfYear,
        MonthOfYear,
        /// The proleptic year; year 0 is 1 BCE.
        Year,
    }
}

const DAY_OF_WEEK_RANGE: ValueRange =
    ValueRange::new_unchecked(1, 1, DAYS_PER_WEEK as i64, DAYS_PER_WEEK as i64);
const DAY_OF_MONTH_RANGE: ValueRange =
    ValueRange::new_unchecked(MIN_DAY as i64, MIN_DAY as i64, 28, 31);
const DAY_OF_YEAR_RANGE: ValueRange =
    ValueRange::new_unchecked(1, 1, DAYS_PER_YEAR as i64, DAYS_PER_LEAP_YEAR as i64);
const MONTH_OF_YEAR_RANGE: ValueRange =
    ValueRange::new_unchecked(1, 1, MONTHS_PER_YEAR as i64, MONTHS_PER_YEAR as i64);
const YEAR_RANGE: ValueRange =
    ValueRange::new_unchecked(MIN_YEAR as i64, MIN_YEAR as i64, MAX_YEAR as i64, MAX_YEAR as i64);

impl ChronoField {
    /// The unit the field is measured in.
    pub const fn base_unit(self) -> ChronoUnit {
        match self {
            Self::DayOfWeek | Self::DayOfMonth | Self::DayOfYear => ChronoUnit::Days,
            Self::MonthOfYear => ChronoUnit::Months,
            Self::Year => ChronoUnit::Years,
        }
    }

    /// The unit the field cycles within.
    pub const fn range_unit(self) -> ChronoUnit {
        match self {
            Self::DayOfWeek => ChronoUnit::Weeks,
            Self::DayOfMonth => ChronoUnit::Months,
            Self::DayOfYear | Self::MonthOfYear => ChronoUnit::Years,
            Self::Year => ChronoUnit::Forever,
        }
    }

    /// The outer range of valid values, independent of any particular date.
    pub const fn range(self) -> ValueRange {
        match self {
            Self::DayOfWeek => DAY_OF_WEEK_RANGE,
            Self::DayOfMonth => DAY_OF_MONTH_RANGE,
            Self::DayOfYear => DAY_OF_YEAR_RANGE,
            Self::MonthOfYear => MONTH_OF_YEAR_RANGE,
            Self::Year => YEAR_RANGE,
        }
    }

    /// # Errors
    /// Returns `TemporalError::OutOfRange` if the value is outside `range()`.
    pub fn check_valid_value(self, value: i64) -> Result<i64> {
        self.range().check_valid_value(value, self)
    }

    pub const fn is_date_based(self) -> bool {
        let range_unit = self.range_unit();
        self.base_unit().is_date_based()
            && (range_unit.is_date_based() || matches!(range_unit, ChronoUnit::Forever))
    }

    pub const fn is_time_based(self) -> bool {
        let range_unit = self.range_unit();
        self.base_unit().is_time_based()
            && (range_unit.is_time_based() || matches!(range_unit, ChronoUnit::Forever))
    }

    pub fn is_supported_by<T: TemporalAccessor + ?Sized>(self, accessor: &T) -> bool {
        accessor.supports_field(self)
    }

    /// Reads this field from a native calendar value.
    pub fn get_from_native(self, native: &NaiveDateTime) -> i64 {
        match self {
            Self::DayOfWeek => i64::from(native.weekday().number_from_monday()),
            Self::DayOfMonth => i64::from(native.day()),
            Self::DayOfYear => i64::from(native.ordinal()),
            Self::MonthOfYear => i64::from(native.month()),
            Self::Year => i64::from(native.year()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_units() {
        struct TestCase {
            field: ChronoField,
            base: ChronoUnit,
            range: ChronoUnit,
        }

        let cases = [
            TestCase {
                field: ChronoField::DayOfWeek,
                base: ChronoUnit::Days,
                range: ChronoUnit::Weeks,
            },
            TestCase {
                field: ChronoField::DayOfMonth,
                base: ChronoUnit::Days,
                range: ChronoUnit::Months,
            },
            TestCase {
                field: ChronoField::DayOfYear,
                base: ChronoUnit::Days,
                range: ChronoUnit::Years,
            },
            TestCase {
                field: ChronoField::MonthOfYear,
                base: ChronoUnit::Months,
                range: ChronoUnit::Years,
            },
            TestCase {
                field: ChronoField::Year,
                base: ChronoUnit::Years,
                range: ChronoUnit::Forever,
            },
        ];

        for case in &cases {
            assert_eq!(case.field.base_unit(), case.base, "{}", case.field);
            assert_eq!(case.field.range_unit(), case.range, "{}", case.field);
            assert!(case.field.is_date_based(), "{}", case.field);
            assert!(!case.field.is_time_based(), "{}", case.field);
        }
    }

    #[test]
    fn test_ranges() {
        assert_eq!(ChronoField::DayOfWeek.range().to_string(), "1 - 7");
        assert_eq!(ChronoField::DayOfMonth.range().to_string(), "1 - 28/31");
        assert_eq!(ChronoField::DayOfYear.range().to_string(), "1 - 365/366");
        assert_eq!(ChronoField::MonthOfYear.range().to_string(), "1 - 12");
        assert_eq!(
            ChronoField::Year.range().to_string(),
            "-999999999 - 999999999"
        );
    }

    #[test]
    fn test_check_valid_value() {
        assert_eq!(ChronoField::MonthOfYear.check_valid_value(12), Ok(12));
        assert!(ChronoField::MonthOfYear.check_valid_value(13).is_err());
        assert!(ChronoField::DayOfWeek.check_valid_value(0).is_err());
        // outer bounds only: 31 is accepted even though most months are shorter
        assert_eq!(ChronoField::DayOfMonth.check_valid_value(31), Ok(31));
    }

    #[test]
    fn test_get_from_native() {
        // Monday 2 March 2015
        let native = NaiveDate::from_ymd_opt(2015, 3, 2)
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .unwrap();
        assert_eq!(ChronoField::DayOfWeek.get_from_native(&native), 1);
        assert_eq!(ChronoField::DayOfMonth.get_from_native(&native), 2);
        assert_eq!(ChronoField::DayOfYear.get_from_native(&native), 61);
        assert_eq!(ChronoField::MonthOfYear.get_from_native(&native), 3);
        assert_eq!(ChronoField::Year.get_from_native(&native), 2015);
    }

    #[test]
    fn test_lookup_by_name() {
        assert_eq!("DayOfYear".parse::<ChronoField>(), Ok(ChronoField::DayOfYear));
        assert!("HourOfDay".parse::<ChronoField>().is_err());
    }
}
