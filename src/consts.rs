/// Smallest year a date can hold (inclusive)
pub const MIN_YEAR: i32 = -999_999_999;
/// Largest year a date can hold (inclusive)
pub const MAX_YEAR: i32 = 999_999_999;

/// Number of months in a year
pub const MONTHS_PER_YEAR: u8 = 12;
/// Number of days in a week
pub const DAYS_PER_WEEK: u8 = 7;

/// First day of month, used for lower bounds
pub const MIN_DAY: u8 = 1;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Days in a common year
pub const DAYS_PER_YEAR: u16 = 365;
/// Days in a leap year
pub const DAYS_PER_LEAP_YEAR: u16 = 366;

/// Days per month in a common year, indexed by month number. Index 0 is a
/// placeholder so that `DAYS_IN_MONTH[month]` needs no offset.
pub const DAYS_IN_MONTH: [u8; 13] = [0, 31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

// Gregorian leap rule: every 4th year, except centuries not divisible by 400.
pub(crate) const LEAP_YEAR_CYCLE: i64 = 4;
pub(crate) const CENTURY_CYCLE: i64 = 100;
pub(crate) const GREGORIAN_CYCLE: i64 = 400;

/// Date component separator (ISO 8601 format)
pub const DATE_SEPARATOR: char = '-';
/// Prefix of a month-day without a year (ISO 8601 `--MM-DD`)
pub const MONTH_DAY_PREFIX: &str = "--";
