//! Dates with a component missing: a month of a particular year, or a day of
//! a month in no particular year.

use std::any::Any;
use std::cmp::Ordering;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::consts::{DATE_SEPARATOR, FEBRUARY_DAYS_LEAP, MONTH_DAY_PREFIX, MONTHS_PER_YEAR};
use crate::error::{Result, TemporalError};
use crate::identity::compare_same;
use crate::prelude::*;
use crate::types::{PaddedYear, Year, is_leap_year, parse_two_digits, parse_year};
use crate::{ChronoField, Comparable, Hashable, LocalDate, Month};

/// A year and month, such as `2015-02`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{}-{:02}", "PaddedYear(year.value())", "month.value()")]
pub struct YearMonth {
    year: Year,
    month: Month,
}

impl YearMonth {
    /// # Errors
    /// Returns `TemporalError::OutOfRange` if the year or month is out of range.
    pub fn of(year: i32, month: u8) -> Result<Self> {
        Ok(Self::from_parts(Year::of(year)?, Month::of(month)?))
    }

    pub(crate) const fn from_parts(year: Year, month: Month) -> Self {
        Self { year, month }
    }

    /// Parses `YYYY-MM`.
    ///
    /// # Errors
    /// Returns `TemporalError::Parse` if the text does not match exactly.
    pub fn parse(text: &str) -> Result<Self> {
        let (year, month) = text
            .rsplit_once(DATE_SEPARATOR)
            .filter(|(year, _)| !year.is_empty())
            .ok_or_else(|| TemporalError::parse(text, "expected YYYY-MM"))?;
        let year = parse_year(year, text)?;
        let month = parse_two_digits(month, text)?;
        Self::of(year, month)
    }

    pub const fn year(&self) -> Year {
        self.year
    }

    pub const fn month(&self) -> Month {
        self.month
    }

    pub const fn is_leap_year(&self) -> bool {
        self.year.is_leap()
    }

    pub const fn length_of_month(&self) -> u8 {
        self.month.length(self.is_leap_year())
    }

    pub const fn length_of_year(&self) -> u16 {
        self.year.length()
    }

    pub fn is_valid_day(&self, day: u8) -> bool {
        (1..=self.length_of_month()).contains(&day)
    }

    /// # Errors
    /// Returns an error if the day does not exist in this month.
    pub fn at_day(&self, day: u8) -> Result<LocalDate> {
        LocalDate::of_month(self.year.value(), self.month, day)
    }

    /// # Errors
    /// Propagates date construction errors.
    pub fn at_end_of_month(&self) -> Result<LocalDate> {
        self.at_day(self.length_of_month())
    }

    /// # Errors
    /// Returns an error if the result leaves the valid year range.
    pub fn plus_months(&self, months: i64) -> Result<Self> {
        let months_per_year = i64::from(MONTHS_PER_YEAR);
        let total = i64::from(self.year.value())
            .checked_mul(months_per_year)
            .and_then(|total| total.checked_add(i64::from(self.month.value()) - 1))
            .and_then(|total| total.checked_add(months))
            .ok_or_else(|| TemporalError::Overflow(format!("{self} + {months} months")))?;
        let year = ChronoField::Year.check_valid_value(total.div_euclid(months_per_year))?;
        let month = u8::try_from(total.rem_euclid(months_per_year) + 1)
            .map_err(|_| TemporalError::Overflow(format!("{self} + {months} months")))?;
        let year = i32::try_from(year)
            .map_err(|_| TemporalError::Overflow(format!("{self} + {months} months")))?;
        Self::of(year, month)
    }

    /// # Errors
    /// Returns an error if the result leaves the valid year range.
    pub fn minus_months(&self, months: i64) -> Result<Self> {
        let negated = months
            .checked_neg()
            .ok_or_else(|| TemporalError::Overflow(format!("{self} - {months} months")))?;
        self.plus_months(negated)
    }

    /// # Errors
    /// Returns an error if the result leaves the valid year range.
    pub fn plus_years(&self, years: i64) -> Result<Self> {
        Ok(Self::from_parts(self.year.plus(years)?, self.month))
    }

    /// # Errors
    /// Returns an error if the result leaves the valid year range.
    pub fn minus_years(&self, years: i64) -> Result<Self> {
        Ok(Self::from_parts(self.year.minus(years)?, self.month))
    }
}

impl FromStr for YearMonth {
    type Err = TemporalError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl Hashable for YearMonth {
    type Code = i64;

    /// `YYYYMM` as an integer.
    fn hash_code(&self) -> i64 {
        i64::from(self.year.value()) * 100 + i64::from(self.month.value())
    }
}

impl Comparable for YearMonth {
    fn compare_to(&self, other: &dyn Any) -> Result<Ordering> {
        compare_same(self, other, "YearMonth")
    }
}

impl Serialize for YearMonth {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for YearMonth {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// A month and day in no particular year, such as `--02-29`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "--{:02}-{:02}", "month.value()", "day")]
pub struct MonthDay {
    month: Month,
    day: u8,
}

impl MonthDay {
    /// Accepts any day that exists in some year, so February 29 is valid.
    ///
    /// # Errors
    /// Returns an error if the month is out of range or the day can never
    /// occur in it.
    pub fn of(month: u8, day: u8) -> Result<Self> {
        Self::of_month(Month::of(month)?, day)
    }

    /// # Errors
    /// Returns an error if the day can never occur in `month`.
    pub fn of_month(month: Month, day: u8) -> Result<Self> {
        ChronoField::DayOfMonth.check_valid_value(i64::from(day))?;
        if day > month.max_length() {
            return Err(TemporalError::InvalidValue {
                kind: "day of month",
                value: i64::from(day),
            });
        }
        Ok(Self::from_parts(month, day))
    }

    pub(crate) const fn from_parts(month: Month, day: u8) -> Self {
        Self { month, day }
    }

    /// Parses `--MM-DD`.
    ///
    /// # Errors
    /// Returns `TemporalError::Parse` if the text does not match exactly.
    pub fn parse(text: &str) -> Result<Self> {
        let (month, day) = text
            .strip_prefix(MONTH_DAY_PREFIX)
            .and_then(|rest| rest.split_once(DATE_SEPARATOR))
            .ok_or_else(|| TemporalError::parse(text, "expected --MM-DD"))?;
        Self::of(parse_two_digits(month, text)?, parse_two_digits(day, text)?)
    }

    pub const fn month(&self) -> Month {
        self.month
    }

    pub const fn day_of_month(&self) -> u8 {
        self.day
    }

    /// False only for February 29 in a common year.
    pub fn is_valid_year(&self, year: i32) -> bool {
        !(self.month == Month::February
            && self.day == FEBRUARY_DAYS_LEAP
            && !is_leap_year(i64::from(year)))
    }

    /// Combines with a year; February 29 becomes February 28 in a common year.
    ///
    /// # Errors
    /// Returns an error if the year is out of range.
    pub fn at_year(&self, year: i32) -> Result<LocalDate> {
        let day = if self.is_valid_year(year) {
            self.day
        } else {
            FEBRUARY_DAYS_LEAP - 1
        };
        LocalDate::of_month(year, self.month, day)
    }
}

impl FromStr for MonthDay {
    type Err = TemporalError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl Comparable for MonthDay {
    fn compare_to(&self, other: &dyn Any) -> Result<Ordering> {
        compare_same(self, other, "MonthDay")
    }
}

impl Serialize for MonthDay {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for MonthDay {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::date;

    #[test]
    fn test_year_month_of() {
        let ym = YearMonth::of(2015, 2).unwrap();
        assert_eq!(ym.year().value(), 2015);
        assert_eq!(ym.month(), Month::February);
        assert!(YearMonth::of(2015, 13).is_err());
        assert!(YearMonth::of(1_000_000_000, 1).is_err());
    }

    #[test]
    fn test_year_month_lengths() {
        assert_eq!(YearMonth::of(2012, 2).unwrap().length_of_month(), 29);
        assert_eq!(YearMonth::of(2011, 2).unwrap().length_of_month(), 28);
        assert_eq!(YearMonth::of(2011, 2).unwrap().length_of_year(), 365);
        assert!(YearMonth::of(2012, 2).unwrap().is_valid_day(29));
        assert!(!YearMonth::of(2011, 2).unwrap().is_valid_day(29));
        assert!(!YearMonth::of(2011, 2).unwrap().is_valid_day(0));
    }

    #[test]
    fn test_year_month_at_day() {
        let ym = YearMonth::of(2015, 4).unwrap();
        assert_eq!(ym.at_day(30).unwrap(), date(2015, 4, 30));
        assert!(ym.at_day(31).is_err());
        assert_eq!(ym.at_end_of_month().unwrap(), date(2015, 4, 30));
    }

    #[test]
    fn test_year_month_arithmetic() {
        let ym = YearMonth::of(2015, 11).unwrap();
        assert_eq!(ym.plus_months(2).unwrap(), YearMonth::of(2016, 1).unwrap());
        assert_eq!(ym.plus_months(-11).unwrap(), YearMonth::of(2014, 12).unwrap());
        assert_eq!(ym.minus_months(23).unwrap(), YearMonth::of(2013, 12).unwrap());
        assert_eq!(ym.plus_years(5).unwrap(), YearMonth::of(2020, 11).unwrap());
        assert_eq!(ym.minus_years(5).unwrap(), YearMonth::of(2010, 11).unwrap());

        let ym = YearMonth::of(0, 1).unwrap();
        assert_eq!(ym.minus_months(1).unwrap(), YearMonth::of(-1, 12).unwrap());

        assert!(YearMonth::of(999_999_999, 12).unwrap().plus_months(1).is_err());
        assert!(ym.plus_months(i64::MAX).is_err());
    }

    #[test]
    fn test_year_month_display_and_parse() {
        let ym = YearMonth::of(2015, 2).unwrap();
        assert_eq!(ym.to_string(), "2015-02");
        assert_eq!("2015-02".parse::<YearMonth>().unwrap(), ym);

        let ym = YearMonth::of(-12, 7).unwrap();
        assert_eq!(ym.to_string(), "-0012-07");
        assert_eq!(YearMonth::parse("-0012-07").unwrap(), ym);

        for text in ["2015-2", "15-02", "2015/02", "2015-13", "", "-02"] {
            assert!(YearMonth::parse(text).is_err(), "{text}");
        }
    }

    #[test]
    fn test_year_month_ordering_and_hash() {
        let a = YearMonth::of(2014, 12).unwrap();
        let b = YearMonth::of(2015, 1).unwrap();
        assert!(a < b);
        assert_eq!(b.hash_code(), 201_501);
        let other: &dyn Any = &b;
        assert_eq!(a.compare_to(other), Ok(Ordering::Less));
        let wrong: &dyn Any = &date(2015, 1, 1);
        assert!(a.compare_to(wrong).is_err());
    }

    #[test]
    fn test_year_month_serde() {
        let ym = YearMonth::of(1991, 8).unwrap();
        let json = serde_json::to_string(&ym).unwrap();
        assert_eq!(json, r#""1991-08""#);
        let parsed: YearMonth = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, ym);
        assert!(serde_json::from_str::<YearMonth>(r#""1991-13""#).is_err());
    }

    #[test]
    fn test_month_day_of() {
        assert!(MonthDay::of(2, 29).is_ok());
        assert!(MonthDay::of(2, 30).is_err());
        assert!(MonthDay::of(4, 31).is_err());
        assert!(MonthDay::of(12, 31).is_ok());
        assert!(MonthDay::of(13, 1).is_err());
        assert!(MonthDay::of(1, 0).is_err());
    }

    #[test]
    fn test_month_day_at_year() {
        let leap_day = MonthDay::of(2, 29).unwrap();
        assert!(leap_day.is_valid_year(2012));
        assert!(!leap_day.is_valid_year(2011));
        assert_eq!(leap_day.at_year(2012).unwrap(), date(2012, 2, 29));
        assert_eq!(leap_day.at_year(2011).unwrap(), date(2011, 2, 28));

        let md = MonthDay::of(3, 2).unwrap();
        assert_eq!(md.at_year(2015).unwrap(), date(2015, 3, 2));
        assert_eq!(md.month(), Month::March);
        assert_eq!(md.day_of_month(), 2);
    }

    #[test]
    fn test_month_day_display_and_parse() {
        let md = MonthDay::of(2, 9).unwrap();
        assert_eq!(md.to_string(), "--02-09");
        assert_eq!("--02-09".parse::<MonthDay>().unwrap(), md);
        for text in ["02-09", "--2-09", "--02-30", "--13-01", "--02/09"] {
            assert!(MonthDay::parse(text).is_err(), "{text}");
        }
    }

    #[test]
    fn test_month_day_ordering_and_serde() {
        let a = MonthDay::of(1, 31).unwrap();
        let b = MonthDay::of(2, 1).unwrap();
        assert!(a < b);
        let json = serde_json::to_string(&b).unwrap();
        assert_eq!(json, r#""--02-01""#);
        let parsed: MonthDay = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, b);
    }
}
