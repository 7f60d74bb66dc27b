use std::any::Any;
use std::cmp::Ordering;
use std::fmt;

use chrono::Weekday;
use serde::{Deserialize, Serialize};

use crate::consts::{
    CENTURY_CYCLE, DAYS_IN_MONTH, DAYS_PER_LEAP_YEAR, DAYS_PER_WEEK, DAYS_PER_YEAR,
    FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE, LEAP_YEAR_CYCLE, MONTHS_PER_YEAR,
};
use crate::error::{Result, TemporalError};
use crate::identity::compare_same;
use crate::partial::{MonthDay, YearMonth};
use crate::range::calculate_overflow;
use crate::{ChronoField, Comparable, Enumeration, LocalDate};

/// A proleptic ISO year in `MIN_YEAR..=MAX_YEAR`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub struct Year(i32);

impl Year {
    /// # Errors
    /// Returns `TemporalError::OutOfRange` outside `MIN_YEAR..=MAX_YEAR`.
    pub fn of(value: i32) -> Result<Self> {
        ChronoField::Year.check_valid_value(i64::from(value))?;
        Ok(Self(value))
    }

    /// `value` must already be a valid year.
    pub(crate) const fn new_unchecked(value: i32) -> Self {
        Self(value)
    }

    #[inline]
    pub const fn value(self) -> i32 {
        self.0
    }

    pub const fn is_leap(self) -> bool {
        is_leap_year(self.0 as i64)
    }

    /// Number of days in the year, 365 or 366.
    pub const fn length(self) -> u16 {
        if self.is_leap() {
            DAYS_PER_LEAP_YEAR
        } else {
            DAYS_PER_YEAR
        }
    }

    /// # Errors
    /// Returns an error if the result leaves the valid year range.
    pub fn plus(self, years: i64) -> Result<Self> {
        let value = i64::from(self.0)
            .checked_add(years)
            .ok_or_else(|| TemporalError::Overflow(format!("{self} + {years} years")))?;
        let value = ChronoField::Year.check_valid_value(value)?;
        i32::try_from(value)
            .map(Self)
            .map_err(|_| TemporalError::Overflow(format!("{self} + {years} years")))
    }

    /// # Errors
    /// Returns an error if the result leaves the valid year range.
    pub fn minus(self, years: i64) -> Result<Self> {
        let negated = years
            .checked_neg()
            .ok_or_else(|| TemporalError::Overflow(format!("{self} - {years} years")))?;
        self.plus(negated)
    }

    /// # Errors
    /// Returns an error if `day_of_year` does not exist in this year.
    pub fn at_day(self, day_of_year: u16) -> Result<LocalDate> {
        LocalDate::of_year_day(self.0, day_of_year)
    }

    pub const fn at_month(self, month: Month) -> YearMonth {
        YearMonth::from_parts(self, month)
    }

    /// Combines with a month-day; February 29 becomes February 28 in a common year.
    ///
    /// # Errors
    /// Propagates date construction errors.
    pub fn at_month_day(self, month_day: MonthDay) -> Result<LocalDate> {
        month_day.at_year(self.0)
    }

    /// False only for February 29 in a common year.
    pub fn is_valid_month_day(self, month_day: MonthDay) -> bool {
        month_day.is_valid_year(self.0)
    }
}

impl TryFrom<i32> for Year {
    type Error = TemporalError;

    fn try_from(value: i32) -> Result<Self> {
        Self::of(value)
    }
}

impl From<Year> for i32 {
    fn from(year: Year) -> Self {
        year.0
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Comparable for Year {
    fn compare_to(&self, other: &dyn Any) -> Result<Ordering> {
        compare_same(self, other, "Year")
    }
}

enumeration! {
    /// A month of the year. `value()` is 1-based, `ordinal()` is 0-based.
    #[derive(Serialize, Deserialize)]
    #[serde(try_from = "u8", into = "u8")]
    pub enum Month {
        January,
        February,
        March,
        April,
        May,
        June,
        July,
        August,
        September,
        October,
        November,
        December,
    }
}

impl Month {
    /// # Errors
    /// Returns `TemporalError::OutOfRange` unless `1 <= value <= 12`.
    pub fn of(value: u8) -> Result<Self> {
        ChronoField::MonthOfYear.check_valid_value(i64::from(value))?;
        Ok(Self::from_wrapped(i64::from(value)))
    }

    /// The month number, 1 for January through 12 for December.
    #[inline]
    pub const fn value(self) -> u8 {
        self as u8 + 1
    }

    /// Moves forward by any number of months, wrapping around December.
    pub fn plus(self, months: i64) -> Self {
        Self::from_wrapped(calculate_overflow(
            i64::from(self.value()),
            months,
            1,
            i64::from(MONTHS_PER_YEAR),
        ))
    }

    pub fn minus(self, months: i64) -> Self {
        // reduce first, -i64::MIN does not exist
        self.plus(-(months % i64::from(MONTHS_PER_YEAR)))
    }

    pub const fn length(self, leap_year: bool) -> u8 {
        match self {
            Self::February if leap_year => FEBRUARY_DAYS_LEAP,
            _ => DAYS_IN_MONTH[self.value() as usize],
        }
    }

    pub const fn min_length(self) -> u8 {
        self.length(false)
    }

    pub const fn max_length(self) -> u8 {
        self.length(true)
    }

    /// January, April, July or October.
    pub fn first_month_of_quarter(self) -> Self {
        Self::VALUES[self.ordinal() / 3 * 3]
    }

    /// Day-of-year of the first day of this month.
    pub fn first_day_of_year(self, leap_year: bool) -> u16 {
        1 + Self::VALUES[..self.ordinal()]
            .iter()
            .map(|month| u16::from(month.length(leap_year)))
            .sum::<u16>()
    }

    /// `value` must already lie in `1..=12`.
    fn from_wrapped(value: i64) -> Self {
        usize::try_from(value - 1)
            .ok()
            .and_then(|index| Self::VALUES.get(index))
            .copied()
            .unwrap_or(Self::January)
    }
}

impl TryFrom<u8> for Month {
    type Error = TemporalError;

    fn try_from(value: u8) -> Result<Self> {
        Self::of(value)
    }
}

impl From<Month> for u8 {
    fn from(month: Month) -> Self {
        month.value()
    }
}

enumeration! {
    /// An ISO day of the week, Monday (1) to Sunday (7).
    pub enum DayOfWeek {
        Monday,
        Tuesday,
        Wednesday,
        Thursday,
        Friday,
        Saturday,
        Sunday,
    }
}

impl DayOfWeek {
    /// # Errors
    /// Returns `TemporalError::OutOfRange` unless `1 <= value <= 7`.
    pub fn of(value: u8) -> Result<Self> {
        ChronoField::DayOfWeek.check_valid_value(i64::from(value))?;
        Ok(Self::from_wrapped(i64::from(value)))
    }

    #[inline]
    pub const fn value(self) -> u8 {
        self as u8 + 1
    }

    /// Moves forward by any number of days, wrapping around Sunday.
    pub fn plus(self, days: i64) -> Self {
        Self::from_wrapped(calculate_overflow(
            i64::from(self.value()),
            days,
            1,
            i64::from(DAYS_PER_WEEK),
        ))
    }

    pub fn minus(self, days: i64) -> Self {
        self.plus(-(days % i64::from(DAYS_PER_WEEK)))
    }

    fn from_wrapped(value: i64) -> Self {
        usize::try_from(value - 1)
            .ok()
            .and_then(|index| Self::VALUES.get(index))
            .copied()
            .unwrap_or(Self::Monday)
    }
}

impl From<Weekday> for DayOfWeek {
    fn from(weekday: Weekday) -> Self {
        Self::from_wrapped(i64::from(weekday.number_from_monday()))
    }
}

impl From<DayOfWeek> for Weekday {
    fn from(day: DayOfWeek) -> Self {
        match day {
            DayOfWeek::Monday => Self::Mon,
            DayOfWeek::Tuesday => Self::Tue,
            DayOfWeek::Wednesday => Self::Wed,
            DayOfWeek::Thursday => Self::Thu,
            DayOfWeek::Friday => Self::Fri,
            DayOfWeek::Saturday => Self::Sat,
            DayOfWeek::Sunday => Self::Sun,
        }
    }
}

// Helper functions

pub const fn is_leap_year(year: i64) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

pub const fn days_in_month(year: i64, month: u8) -> u8 {
    debug_assert!(month != 0 && month <= MONTHS_PER_YEAR);

    if month == 2 && is_leap_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        DAYS_IN_MONTH[month as usize]
    }
}

/// Formats a year as at least four digits. Years past 9999 carry an explicit
/// `+`, negative years a `-`.
pub(crate) struct PaddedYear(pub(crate) i32);

impl fmt::Display for PaddedYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let year = self.0;
        if year < 0 {
            write!(f, "-{:04}", year.unsigned_abs())
        } else if year > 9999 {
            write!(f, "+{year}")
        } else {
            write!(f, "{year:04}")
        }
    }
}

/// Parses the year part written by `PaddedYear`: exactly four digits, a `-`
/// followed by at least four digits, or a `+` followed by more than four.
pub(crate) fn parse_year(part: &str, text: &str) -> Result<i32> {
    let digits = part.strip_prefix(['+', '-']).unwrap_or(part);
    let signed = digits.len() != part.len();
    if digits.len() < 4 || (!signed && digits.len() != 4) {
        return Err(TemporalError::parse(
            text,
            format!("year '{part}' must be four digits or signed"),
        ));
    }
    if part.starts_with('+') && digits.len() == 4 {
        return Err(TemporalError::parse(
            text,
            format!("year '{part}' must not carry '+' below five digits"),
        ));
    }
    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(TemporalError::parse(text, format!("invalid year '{part}'")));
    }
    let value = part
        .parse::<i64>()
        .map_err(|_| TemporalError::parse(text, format!("invalid year '{part}'")))?;
    if value == 0 && part.starts_with('-') {
        return Err(TemporalError::parse(text, format!("year '{part}' is negative zero")));
    }
    let value = ChronoField::Year.check_valid_value(value)?;
    i32::try_from(value).map_err(|_| TemporalError::parse(text, format!("invalid year '{part}'")))
}

/// Parses exactly two ASCII digits.
pub(crate) fn parse_two_digits(part: &str, text: &str) -> Result<u8> {
    if part.len() != 2 || !part.bytes().all(|b| b.is_ascii_digit()) {
        return Err(TemporalError::parse(
            text,
            format!("'{part}' must be two digits"),
        ));
    }
    part.parse::<u8>()
        .map_err(|_| TemporalError::parse(text, format!("invalid number '{part}'")))
}
