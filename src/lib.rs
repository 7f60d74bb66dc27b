//! Calendar dates with field and unit based arithmetic.
//!
//! A [`LocalDate`] is read through [`ChronoField`]s, moved by
//! [`ChronoUnit`]s and reshaped by [`TemporalAdjuster`]s such as
//! [`Adjuster::next`] or [`Adjuster::last_day_of_month`]. Unit arithmetic is
//! delegated to `chrono`, with month and year steps clamping to the end of
//! the target month.
//!
//! ```
//! use kalends::{Adjuster, ChronoUnit, DayOfWeek, LocalDate, Temporal};
//!
//! let date = LocalDate::of(2015, 1, 31)?;
//! assert_eq!(date.plus(1, ChronoUnit::Months)?.to_string(), "2015-02-28");
//! assert_eq!(date.with(&Adjuster::next(DayOfWeek::Friday))?.to_string(), "2015-02-06");
//! # Ok::<(), kalends::TemporalError>(())
//! ```

#[macro_use]
mod logging;
#[macro_use]
mod identity;

mod adjusters;
mod clock;
mod consts;
mod date;
mod error;
mod field;
pub mod native;
mod partial;
mod period;
mod prelude;
mod range;
mod temporal;
mod types;
mod unit;

#[cfg(test)]
mod test_utils;

pub use adjusters::Adjuster;
pub use clock::{Clock, FixedClock, SystemClock};
pub use consts::*;
pub use date::LocalDate;
pub use error::{Result, TemporalError};
pub use field::ChronoField;
pub use identity::{Comparable, Enumeration, Hashable};
pub use native::{NativeModifier, NativeUnit};
pub use partial::{MonthDay, YearMonth};
pub use period::Period;
pub use range::{ValueRange, calculate_overflow};
pub use temporal::{Temporal, TemporalAccessor, TemporalAdjuster, TemporalAmount};
pub use types::{DayOfWeek, Month, Year, days_in_month, is_leap_year};
pub use unit::ChronoUnit;
