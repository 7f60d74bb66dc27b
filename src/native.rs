//! The native calendar primitive that unit arithmetic is delegated to.
//!
//! Temporal types export themselves to a `chrono::NaiveDateTime`, apply a
//! [`NativeModifier`] and rebuild themselves from the result. Modifiers have a
//! textual form close to a relative date phrase (`+2 Years`, `next Thursday`,
//! `last day of this month`) and can be parsed back from it.

use std::str::FromStr;

use chrono::{Datelike, Days, Months, NaiveDateTime, TimeDelta};

use crate::consts::{GREGORIAN_CYCLE, MONTHS_PER_YEAR};
use crate::error::{Result, TemporalError};
use crate::prelude::*;
use crate::types::{DayOfWeek, days_in_month};
use crate::Enumeration;

enumeration! {
    /// Units the native calendar can add directly.
    pub enum NativeUnit {
        Microseconds,
        Milliseconds,
        Seconds,
        Minutes,
        Hours,
        Days,
        Weeks,
        Months,
        Years,
    }
}

/// A relative modification of a native calendar value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum NativeModifier {
    /// Add a signed amount of a unit. The sign is always rendered.
    #[display(fmt = "{amount:+} {unit}")]
    Relative { amount: i64, unit: NativeUnit },
    /// The next occurrence of the day, a full week ahead if already on it.
    #[display(fmt = "next {_0}")]
    Next(DayOfWeek),
    /// The previous occurrence of the day, a full week back if already on it.
    #[display(fmt = "last {_0}")]
    Previous(DayOfWeek),
    #[display(fmt = "first day of this month")]
    FirstDayOfMonth,
    #[display(fmt = "last day of this month")]
    LastDayOfMonth,
}

impl NativeModifier {
    /// Splits whole 400 year cycles out of a month or year step.
    ///
    /// Returns the remaining modifier and the number of years taken out. The
    /// remainder stays below one cycle, so it fits the native calendar.
    pub fn split_gregorian_cycles(self) -> (Self, i64) {
        const MONTHS_PER_CYCLE: i64 = GREGORIAN_CYCLE * MONTHS_PER_YEAR as i64;
        match self {
            Self::Relative { amount, unit: NativeUnit::Years } => {
                let rest = amount % GREGORIAN_CYCLE;
                (Self::Relative { amount: rest, unit: NativeUnit::Years }, amount - rest)
            }
            Self::Relative { amount, unit: NativeUnit::Months } => {
                let rest = amount % MONTHS_PER_CYCLE;
                let years = (amount - rest) / MONTHS_PER_YEAR as i64;
                (Self::Relative { amount: rest, unit: NativeUnit::Months }, years)
            }
            other => (other, 0),
        }
    }
}

const FIRST_DAY_OF_MONTH: &str = "first day of this month";
const LAST_DAY_OF_MONTH: &str = "last day of this month";

impl FromStr for NativeModifier {
    type Err = TemporalError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(TemporalError::parse(s, "empty modifier"));
        }
        if trimmed == FIRST_DAY_OF_MONTH {
            return Ok(Self::FirstDayOfMonth);
        }
        if trimmed == LAST_DAY_OF_MONTH {
            return Ok(Self::LastDayOfMonth);
        }

        let (head, tail) = trimmed
            .split_once(' ')
            .ok_or_else(|| TemporalError::parse(s, "expected two words"))?;
        let tail = tail.trim();
        match head {
            "next" => Ok(Self::Next(Self::parse_day_of_week(s, tail)?)),
            "last" => Ok(Self::Previous(Self::parse_day_of_week(s, tail)?)),
            _ if head.starts_with(['+', '-']) => {
                let amount = head
                    .parse::<i64>()
                    .map_err(|_| TemporalError::parse(s, format!("invalid amount '{head}'")))?;
                let unit = NativeUnit::value_of(tail)
                    .map_err(|_| TemporalError::parse(s, format!("unknown unit '{tail}'")))?;
                Ok(Self::Relative { amount, unit })
            }
            _ => Err(TemporalError::parse(
                s,
                "expected a signed amount, 'next' or 'last'",
            )),
        }
    }
}

impl NativeModifier {
    fn parse_day_of_week(text: &str, name: &str) -> Result<DayOfWeek> {
        DayOfWeek::value_of(name)
            .map_err(|_| TemporalError::parse(text, format!("unknown day of week '{name}'")))
    }
}

/// Applies `modifier` to `native`.
///
/// Month and year arithmetic clamps to the last valid day of the resulting
/// month: January 31 plus one month is the last day of February.
///
/// # Errors
/// Returns `TemporalError::NativeRange` if the result is not representable.
pub fn modify(native: NaiveDateTime, modifier: NativeModifier) -> Result<NaiveDateTime> {
    trace!("modifying {native} by '{modifier}'");
    let modified = match modifier {
        NativeModifier::Relative { amount, unit } => add(native, amount, unit),
        NativeModifier::Next(target) => {
            let current = DayOfWeek::from(native.weekday());
            add_days(native, days_between(current, target))
        }
        NativeModifier::Previous(target) => {
            let current = DayOfWeek::from(native.weekday());
            add_days(native, -days_between(target, current))
        }
        NativeModifier::FirstDayOfMonth => native.with_day(1),
        NativeModifier::LastDayOfMonth => {
            let last = days_in_month(i64::from(native.year()), month_of(&native));
            native.with_day(u32::from(last))
        }
    };
    modified.ok_or_else(|| TemporalError::NativeRange(format!("{native} {modifier}")))
}

/// Days from `from` forward to `to`, in `1..=7`.
fn days_between(from: DayOfWeek, to: DayOfWeek) -> i64 {
    match (i64::from(to.value()) - i64::from(from.value())).rem_euclid(7) {
        0 => 7,
        days => days,
    }
}

fn month_of(native: &NaiveDateTime) -> u8 {
    // chrono months are always 1..=12
    u8::try_from(native.month()).unwrap_or(1)
}

fn add(native: NaiveDateTime, amount: i64, unit: NativeUnit) -> Option<NaiveDateTime> {
    match unit {
        NativeUnit::Microseconds => native.checked_add_signed(TimeDelta::microseconds(amount)),
        NativeUnit::Milliseconds => {
            TimeDelta::try_milliseconds(amount).and_then(|d| native.checked_add_signed(d))
        }
        NativeUnit::Seconds => {
            TimeDelta::try_seconds(amount).and_then(|d| native.checked_add_signed(d))
        }
        NativeUnit::Minutes => {
            TimeDelta::try_minutes(amount).and_then(|d| native.checked_add_signed(d))
        }
        NativeUnit::Hours => TimeDelta::try_hours(amount).and_then(|d| native.checked_add_signed(d)),
        NativeUnit::Days => add_days(native, amount),
        NativeUnit::Weeks => amount.checked_mul(7).and_then(|days| add_days(native, days)),
        NativeUnit::Months => add_months(native, amount),
        NativeUnit::Years => amount
            .checked_mul(12)
            .and_then(|months| add_months(native, months)),
    }
}

fn add_days(native: NaiveDateTime, days: i64) -> Option<NaiveDateTime> {
    let magnitude = Days::new(days.unsigned_abs());
    if days >= 0 {
        native.checked_add_days(magnitude)
    } else {
        native.checked_sub_days(magnitude)
    }
}

fn add_months(native: NaiveDateTime, months: i64) -> Option<NaiveDateTime> {
    let magnitude = Months::new(u32::try_from(months.unsigned_abs()).ok()?);
    if months >= 0 {
        native.checked_add_months(magnitude)
    } else {
        native.checked_sub_months(magnitude)
    }
}
