use std::any::Any;
use std::cmp::Ordering;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::adjusters::Adjuster;
use crate::clock::{Clock, SystemClock};
use crate::consts::{DATE_SEPARATOR, DAYS_PER_LEAP_YEAR, GREGORIAN_CYCLE};
use crate::error::{Result, TemporalError};
use crate::identity::compare_same;
use crate::partial::{MonthDay, YearMonth};
use crate::prelude::*;
use crate::temporal::{Temporal, TemporalAccessor};
use crate::types::{DayOfWeek, Month, PaddedYear, Year, is_leap_year, parse_two_digits, parse_year};
use crate::{ChronoField, ChronoUnit, Comparable, Enumeration, Hashable};

/// A date without a time or time zone, such as `2015-03-02`.
///
/// Always a valid proleptic Gregorian date with a year in
/// `MIN_YEAR..=MAX_YEAR`. Values are immutable; every adjustment returns a
/// new date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[display(fmt = "{}-{:02}-{:02}", "PaddedYear(*year)", "month.value()", "day")]
pub struct LocalDate {
    year: i32,
    month: Month,
    day: u8,
}

impl LocalDate {
    /// Validates the year, then the month, then the day of month, and finally
    /// the combination.
    ///
    /// # Errors
    /// Returns `TemporalError::OutOfRange` for a component outside its field
    /// range, or `TemporalError::InvalidDate` for a day the month lacks.
    pub fn of(year: i32, month: u8, day: u8) -> Result<Self> {
        ChronoField::Year.check_valid_value(i64::from(year))?;
        Self::of_month(year, Month::of(month)?, day)
    }

    /// # Errors
    /// As `of`.
    pub fn of_month(year: i32, month: Month, day: u8) -> Result<Self> {
        ChronoField::Year.check_valid_value(i64::from(year))?;
        ChronoField::DayOfMonth.check_valid_value(i64::from(day))?;
        if day > month.length(is_leap_year(i64::from(year))) {
            debug!("rejecting {year}-{:02}-{day:02}", month.value());
            return Err(TemporalError::InvalidDate {
                year: i64::from(year),
                month: i64::from(month.value()),
                day: i64::from(day),
            });
        }
        Ok(Self { year, month, day })
    }

    /// Builds the date from a year and a 1-based day of that year.
    ///
    /// # Errors
    /// Returns an error if the year is out of range or the day does not exist
    /// in it; day 366 only exists in leap years.
    pub fn of_year_day(year: i32, day_of_year: u16) -> Result<Self> {
        ChronoField::Year.check_valid_value(i64::from(year))?;
        ChronoField::DayOfYear.check_valid_value(i64::from(day_of_year))?;
        let leap = is_leap_year(i64::from(year));
        if day_of_year == DAYS_PER_LEAP_YEAR && !leap {
            return Err(TemporalError::InvalidValue {
                kind: "day of year in a common year",
                value: i64::from(day_of_year),
            });
        }

        let mut remaining = day_of_year;
        for &month in Month::VALUES {
            let length = u16::from(month.length(leap));
            if remaining <= length {
                let day = u8::try_from(remaining).map_err(|_| TemporalError::InvalidValue {
                    kind: "day of year",
                    value: i64::from(day_of_year),
                })?;
                return Self::of_month(year, month, day);
            }
            remaining -= length;
        }
        Err(TemporalError::InvalidValue {
            kind: "day of year",
            value: i64::from(day_of_year),
        })
    }

    /// Parses the `Display` form, `YYYY-MM-DD`, with an optional sign on the year.
    ///
    /// # Errors
    /// Returns `TemporalError::Parse` if the text does not match exactly, or a
    /// validation error if it names no real date.
    pub fn parse(text: &str) -> Result<Self> {
        let mut parts = text.rsplitn(3, DATE_SEPARATOR);
        let (Some(day), Some(month), Some(year)) = (parts.next(), parts.next(), parts.next())
        else {
            return Err(TemporalError::parse(text, "expected YYYY-MM-DD"));
        };
        let year = parse_year(year, text)?;
        let month = parse_two_digits(month, text)?;
        let day = parse_two_digits(day, text)?;
        Self::of(year, month, day)
    }

    /// # Errors
    /// Returns an error if the system date is outside the year range.
    pub fn now() -> Result<Self> {
        Self::now_with(&SystemClock)
    }

    /// # Errors
    /// Returns an error if the clock reports a date this type cannot hold.
    pub fn now_with<C: Clock + ?Sized>(clock: &C) -> Result<Self> {
        Self::from_native(clock.now())
    }

    /// # Errors
    /// As `now`.
    pub fn today() -> Result<Self> {
        Self::now()
    }

    /// # Errors
    /// As `now_with`.
    pub fn today_with<C: Clock + ?Sized>(clock: &C) -> Result<Self> {
        Self::now_with(clock)
    }

    /// # Errors
    /// As `now`.
    pub fn yesterday() -> Result<Self> {
        Self::yesterday_with(&SystemClock)
    }

    /// # Errors
    /// As `now_with`.
    pub fn yesterday_with<C: Clock + ?Sized>(clock: &C) -> Result<Self> {
        Self::now_with(clock)?.minus_days(1)
    }

    /// # Errors
    /// As `now`.
    pub fn tomorrow() -> Result<Self> {
        Self::tomorrow_with(&SystemClock)
    }

    /// # Errors
    /// As `now_with`.
    pub fn tomorrow_with<C: Clock + ?Sized>(clock: &C) -> Result<Self> {
        Self::now_with(clock)?.plus_days(1)
    }

    pub const fn year(&self) -> Year {
        Year::new_unchecked(self.year)
    }

    #[inline]
    pub const fn year_value(&self) -> i32 {
        self.year
    }

    pub const fn month(&self) -> Month {
        self.month
    }

    #[inline]
    pub const fn month_value(&self) -> u8 {
        self.month.value()
    }

    #[inline]
    pub const fn day_of_month(&self) -> u8 {
        self.day
    }

    pub fn day_of_year(&self) -> u16 {
        self.month.first_day_of_year(self.is_leap_year()) + u16::from(self.day) - 1
    }

    /// Read through the native calendar, within one 400 year cycle.
    ///
    /// # Errors
    /// Returns an error only if the native calendar rejects the date.
    pub fn day_of_week(&self) -> Result<DayOfWeek> {
        let (native, _) = self.to_native_shifted()?;
        Ok(native.weekday().into())
    }

    pub const fn is_leap_year(&self) -> bool {
        is_leap_year(self.year as i64)
    }

    pub const fn length_of_month(&self) -> u8 {
        self.month.length(self.is_leap_year())
    }

    pub const fn length_of_year(&self) -> u16 {
        self.year().length()
    }

    pub const fn year_month(&self) -> YearMonth {
        YearMonth::from_parts(self.year(), self.month)
    }

    pub const fn month_day(&self) -> MonthDay {
        MonthDay::from_parts(self.month, self.day)
    }

    pub fn is_before(&self, other: &Self) -> bool {
        self < other
    }

    pub fn is_after(&self, other: &Self) -> bool {
        self > other
    }

    /// Moves by whole years; February 29 clamps to February 28.
    ///
    /// # Errors
    /// Returns an error if the result is out of range.
    pub fn plus_years(&self, years: i64) -> Result<Self> {
        self.plus(years, ChronoUnit::Years)
    }

    /// # Errors
    /// Returns an error if the result is out of range.
    pub fn minus_years(&self, years: i64) -> Result<Self> {
        self.minus(years, ChronoUnit::Years)
    }

    /// Moves by whole months, clamping the day to the end of the target month.
    ///
    /// # Errors
    /// Returns an error if the result is out of range.
    pub fn plus_months(&self, months: i64) -> Result<Self> {
        self.plus(months, ChronoUnit::Months)
    }

    /// # Errors
    /// Returns an error if the result is out of range.
    pub fn minus_months(&self, months: i64) -> Result<Self> {
        self.minus(months, ChronoUnit::Months)
    }

    /// # Errors
    /// Returns an error if the result is out of range.
    pub fn plus_weeks(&self, weeks: i64) -> Result<Self> {
        self.plus(weeks, ChronoUnit::Weeks)
    }

    /// # Errors
    /// Returns an error if the result is out of range.
    pub fn minus_weeks(&self, weeks: i64) -> Result<Self> {
        self.minus(weeks, ChronoUnit::Weeks)
    }

    /// # Errors
    /// Returns an error if the result is out of range.
    pub fn plus_days(&self, days: i64) -> Result<Self> {
        self.plus(days, ChronoUnit::Days)
    }

    /// # Errors
    /// Returns an error if the result is out of range.
    pub fn minus_days(&self, days: i64) -> Result<Self> {
        self.minus(days, ChronoUnit::Days)
    }

    /// # Errors
    /// Returns an error if the year is out of range or the day does not
    /// exist in that year's month.
    pub fn with_year(&self, year: i32) -> Result<Self> {
        Self::of_month(year, self.month, self.day)
    }

    /// # Errors
    /// Returns an error if the month is out of range or lacks the day.
    pub fn with_month(&self, month: u8) -> Result<Self> {
        Self::of(self.year, month, self.day)
    }

    /// # Errors
    /// Returns an error if the day does not exist in this month.
    pub fn with_day_of_month(&self, day: u8) -> Result<Self> {
        Self::of_month(self.year, self.month, day)
    }

    /// # Errors
    /// Returns an error if the day does not exist in this year.
    pub fn with_day_of_year(&self, day_of_year: u16) -> Result<Self> {
        Self::of_year_day(self.year, day_of_year)
    }

    /// # Errors
    /// Returns an error if the result is out of range.
    pub fn first_day_of_month(&self) -> Result<Self> {
        self.with(&Adjuster::first_day_of_month())
    }

    /// # Errors
    /// Returns an error if the result is out of range.
    pub fn last_day_of_month(&self) -> Result<Self> {
        self.with(&Adjuster::last_day_of_month())
    }

    /// This month and day at midnight in `year` of the native calendar.
    fn native_at(&self, year: i32) -> Result<NaiveDateTime> {
        NaiveDate::from_ymd_opt(year, u32::from(self.month.value()), u32::from(self.day))
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .ok_or_else(|| TemporalError::NativeRange(self.to_string()))
    }
}

/// Narrows an already validated field value to the width its setter takes.
fn narrow<T: TryFrom<i64>>(field: ChronoField, value: i64) -> Result<T> {
    T::try_from(value).map_err(|_| TemporalError::OutOfRange {
        field,
        range: field.range(),
        value,
    })
}

fn native_component<T: TryFrom<u32>>(kind: &'static str, value: u32) -> Result<T> {
    T::try_from(value).map_err(|_| TemporalError::InvalidValue {
        kind,
        value: i64::from(value),
    })
}

impl TemporalAccessor for LocalDate {
    fn supports_field(&self, field: ChronoField) -> bool {
        field.is_date_based()
    }

    fn get(&self, field: ChronoField) -> Result<i64> {
        if !self.supports_field(field) {
            return Err(TemporalError::UnsupportedField(field));
        }
        match field {
            ChronoField::Year => Ok(i64::from(self.year)),
            ChronoField::MonthOfYear => Ok(i64::from(self.month.value())),
            ChronoField::DayOfMonth => Ok(i64::from(self.day)),
            ChronoField::DayOfYear => Ok(i64::from(self.day_of_year())),
            ChronoField::DayOfWeek => {
                let (native, _) = self.to_native_shifted()?;
                Ok(field.get_from_native(&native))
            }
        }
    }
}

impl Temporal for LocalDate {
    fn from_native(native: NaiveDateTime) -> Result<Self> {
        Self::from_native_shifted(native, 0)
    }

    fn to_native(&self) -> Result<NaiveDateTime> {
        self.native_at(self.year)
    }

    /// Moves the year into `0..400`, which chrono always represents.
    fn to_native_shifted(&self) -> Result<(NaiveDateTime, i64)> {
        let year = i64::from(self.year);
        let cycle_year = year.rem_euclid(GREGORIAN_CYCLE);
        let native = self.native_at(narrow(ChronoField::Year, cycle_year)?)?;
        Ok((native, year - cycle_year))
    }

    fn from_native_shifted(native: NaiveDateTime, years: i64) -> Result<Self> {
        let year = i64::from(native.year())
            .checked_add(years)
            .ok_or_else(|| TemporalError::Overflow(format!("{native} + {years} years")))?;
        let year = ChronoField::Year.check_valid_value(year)?;
        Self::of(
            narrow(ChronoField::Year, year)?,
            native_component("month", native.month())?,
            native_component("day of month", native.day())?,
        )
    }

    fn supports_unit(&self, unit: ChronoUnit) -> bool {
        unit.is_date_based()
    }

    fn with_field(&self, field: ChronoField, value: i64) -> Result<Self> {
        if !self.supports_field(field) {
            return Err(TemporalError::UnsupportedField(field));
        }
        let value = field.check_valid_value(value)?;
        match field {
            ChronoField::Year => self.with_year(narrow(field, value)?),
            ChronoField::MonthOfYear => self.with_month(narrow(field, value)?),
            ChronoField::DayOfMonth => self.with_day_of_month(narrow(field, value)?),
            ChronoField::DayOfYear => self.with_day_of_year(narrow(field, value)?),
            ChronoField::DayOfWeek => {
                let target = DayOfWeek::of(narrow(field, value)?)?;
                self.with(&Adjuster::next_or_same(target))
            }
        }
    }
}

impl Hashable for LocalDate {
    type Code = i64;

    /// `YYYYMMDD` as an integer, so ordering by code is chronological.
    fn hash_code(&self) -> i64 {
        i64::from(self.year) * 10_000 + i64::from(self.month.value()) * 100 + i64::from(self.day)
    }
}

impl Ord for LocalDate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.hash_code().cmp(&other.hash_code())
    }
}

impl PartialOrd for LocalDate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Comparable for LocalDate {
    fn compare_to(&self, other: &dyn Any) -> Result<Ordering> {
        compare_same(self, other, "LocalDate")
    }
}

impl FromStr for LocalDate {
    type Err = TemporalError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl Serialize for LocalDate {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for LocalDate {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
