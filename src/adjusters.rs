//! Common adjusters: unit addition, weekday navigation and month boundaries.

use crate::error::{Result, TemporalError};
use crate::native::{self, NativeModifier};
use crate::temporal::{Temporal, TemporalAdjuster};
use crate::types::DayOfWeek;
use crate::{ChronoField, ChronoUnit};

/// A reusable, stateless adjustment. None of them modify their input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Adjuster {
    /// Adds a signed amount of a unit.
    PlusUnit { amount: i64, unit: ChronoUnit },
    /// The next occurrence of the day, always moving forward.
    Next(DayOfWeek),
    /// Unchanged if already on the day, otherwise as `Next`.
    NextOrSame(DayOfWeek),
    /// The previous occurrence of the day, always moving back.
    Previous(DayOfWeek),
    /// Unchanged if already on the day, otherwise as `Previous`.
    PreviousOrSame(DayOfWeek),
    FirstDayOfMonth,
    LastDayOfMonth,
}

impl Adjuster {
    pub const fn plus_unit(amount: i64, unit: ChronoUnit) -> Self {
        Self::PlusUnit { amount, unit }
    }

    pub const fn next(day_of_week: DayOfWeek) -> Self {
        Self::Next(day_of_week)
    }

    pub const fn next_or_same(day_of_week: DayOfWeek) -> Self {
        Self::NextOrSame(day_of_week)
    }

    pub const fn previous(day_of_week: DayOfWeek) -> Self {
        Self::Previous(day_of_week)
    }

    pub const fn previous_or_same(day_of_week: DayOfWeek) -> Self {
        Self::PreviousOrSame(day_of_week)
    }

    pub const fn first_day_of_month() -> Self {
        Self::FirstDayOfMonth
    }

    pub const fn last_day_of_month() -> Self {
        Self::LastDayOfMonth
    }
}

impl TemporalAdjuster for Adjuster {
    fn adjust_into<T: Temporal>(&self, temporal: &T) -> Result<T> {
        match *self {
            Self::PlusUnit { amount, unit } => {
                if !unit.is_supported_by(temporal) {
                    return Err(TemporalError::UnsupportedUnit(unit));
                }
                if amount == 0 {
                    trace!("zero {unit}, returning input unchanged");
                    return Ok(temporal.clone());
                }
                apply(temporal, unit.to_native_modifier(amount)?)
            }
            Self::Next(target) => {
                require_field(temporal, ChronoField::DayOfWeek)?;
                apply(temporal, NativeModifier::Next(target))
            }
            Self::NextOrSame(target) => {
                if current_day_of_week(temporal)? == target {
                    trace!("already on {target}");
                    Ok(temporal.clone())
                } else {
                    apply(temporal, NativeModifier::Next(target))
                }
            }
            Self::Previous(target) => {
                require_field(temporal, ChronoField::DayOfWeek)?;
                apply(temporal, NativeModifier::Previous(target))
            }
            Self::PreviousOrSame(target) => {
                if current_day_of_week(temporal)? == target {
                    trace!("already on {target}");
                    Ok(temporal.clone())
                } else {
                    apply(temporal, NativeModifier::Previous(target))
                }
            }
            Self::FirstDayOfMonth => temporal.with_field(ChronoField::DayOfMonth, 1),
            Self::LastDayOfMonth => {
                require_field(temporal, ChronoField::DayOfMonth)?;
                apply(temporal, NativeModifier::LastDayOfMonth)
            }
        }
    }
}

/// Round trip through the native calendar.
fn apply<T: Temporal>(temporal: &T, modifier: NativeModifier) -> Result<T> {
    let (native, shift) = temporal.to_native_shifted()?;
    let (modifier, cycles) = modifier.split_gregorian_cycles();
    let years = shift
        .checked_add(cycles)
        .ok_or_else(|| TemporalError::Overflow(format!("{shift} + {cycles} years")))?;
    T::from_native_shifted(native::modify(native, modifier)?, years)
}

fn require_field<T: Temporal>(temporal: &T, field: ChronoField) -> Result<()> {
    if field.is_supported_by(temporal) {
        Ok(())
    } else {
        Err(TemporalError::UnsupportedField(field))
    }
}

fn current_day_of_week<T: Temporal>(temporal: &T) -> Result<DayOfWeek> {
    let value = temporal.get(ChronoField::DayOfWeek)?;
    let value = ChronoField::DayOfWeek.check_valid_value(value)?;
    DayOfWeek::of(u8::try_from(value).unwrap_or(0))
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use chrono::{NaiveDate, NaiveDateTime};

    use super::*;
    use crate::temporal::TemporalAccessor;
    use crate::test_utils::date;

    thread_local! {
        static NATIVE_CALLS: Cell<usize> = const { Cell::new(0) };
    }

    /// A temporal that only supports what it is told to and counts exports.
    #[derive(Debug, Clone, PartialEq)]
    struct Probe {
        supported: bool,
    }

    impl TemporalAccessor for Probe {
        fn supports_field(&self, _field: ChronoField) -> bool {
            self.supported
        }

        fn get(&self, field: ChronoField) -> Result<i64> {
            if self.supported {
                Ok(1)
            } else {
                Err(TemporalError::UnsupportedField(field))
            }
        }
    }

    impl Temporal for Probe {
        fn from_native(_native: NaiveDateTime) -> Result<Self> {
            Ok(Self { supported: true })
        }

        fn to_native(&self) -> Result<NaiveDateTime> {
            NATIVE_CALLS.with(|calls| calls.set(calls.get() + 1));
            NaiveDate::from_ymd_opt(2015, 3, 2)
                .and_then(|d| d.and_hms_opt(0, 0, 0))
                .ok_or_else(|| TemporalError::NativeRange("probe".to_owned()))
        }

        fn supports_unit(&self, _unit: ChronoUnit) -> bool {
            self.supported
        }

        fn with_field(&self, field: ChronoField, _value: i64) -> Result<Self> {
            if self.supported {
                Ok(self.clone())
            } else {
                Err(TemporalError::UnsupportedField(field))
            }
        }
    }

    fn native_calls() -> usize {
        NATIVE_CALLS.with(Cell::get)
    }

    fn reset_native_calls() {
        NATIVE_CALLS.with(|calls| calls.set(0));
    }

    #[test]
    fn test_unsupported_unit_never_reaches_native() {
        reset_native_calls();
        let probe = Probe { supported: false };
        for unit in [ChronoUnit::Days, ChronoUnit::Hours, ChronoUnit::Forever] {
            let result = probe.plus(3, unit);
            assert_eq!(result, Err(TemporalError::UnsupportedUnit(unit)));
            let result = probe.minus(3, unit);
            assert_eq!(result, Err(TemporalError::UnsupportedUnit(unit)));
        }
        let result = Adjuster::plus_unit(0, ChronoUnit::Days).adjust_into(&probe);
        assert!(result.unwrap_err().is_unsupported());
        assert_eq!(native_calls(), 0);
    }

    #[test]
    fn test_supported_unit_goes_through_native() {
        reset_native_calls();
        let probe = Probe { supported: true };
        probe.plus(3, ChronoUnit::Days).unwrap();
        assert_eq!(native_calls(), 1);
    }

    #[test]
    fn test_zero_amount_short_circuits() {
        reset_native_calls();
        let probe = Probe { supported: true };
        assert_eq!(probe.plus(0, ChronoUnit::Years), Ok(probe.clone()));
        assert_eq!(native_calls(), 0);
    }

    #[test]
    fn test_whole_cycles_are_shifted_back_natively() {
        reset_native_calls();
        let probe = Probe { supported: true };
        assert_eq!(probe.plus(800, ChronoUnit::Years), Ok(probe.clone()));
        assert_eq!(probe.minus(4_800, ChronoUnit::Months), Ok(probe.clone()));
        let result = probe.plus(i64::MAX, ChronoUnit::Years);
        assert!(matches!(result, Err(TemporalError::NativeRange(_))), "{result:?}");
        assert_eq!(native_calls(), 3);
    }

    #[test]
    fn test_unsupported_weekday_adjusters() {
        reset_native_calls();
        let probe = Probe { supported: false };
        for adjuster in [
            Adjuster::next(DayOfWeek::Friday),
            Adjuster::next_or_same(DayOfWeek::Friday),
            Adjuster::previous(DayOfWeek::Friday),
            Adjuster::previous_or_same(DayOfWeek::Friday),
            Adjuster::first_day_of_month(),
            Adjuster::last_day_of_month(),
        ] {
            let result = probe.with(&adjuster);
            assert!(
                matches!(result, Err(TemporalError::UnsupportedField(_))),
                "{adjuster:?} gave {result:?}"
            );
        }
        assert_eq!(native_calls(), 0);
    }

    #[test]
    fn test_plus_unit() {
        let start = date(2015, 3, 2);
        let adjuster = Adjuster::plus_unit(32, ChronoUnit::Days);
        assert_eq!(adjuster.adjust_into(&start).unwrap(), date(2015, 4, 3));
        let adjuster = Adjuster::plus_unit(-32, ChronoUnit::Days);
        assert_eq!(adjuster.adjust_into(&start).unwrap(), date(2015, 1, 29));
        let adjuster = Adjuster::plus_unit(1, ChronoUnit::Decades);
        assert_eq!(adjuster.adjust_into(&start).unwrap(), date(2025, 3, 2));
        // reusable, input untouched
        assert_eq!(adjuster.adjust_into(&start).unwrap(), date(2025, 3, 2));
        assert_eq!(start, date(2015, 3, 2));
    }

    #[test]
    fn test_plus_time_unit_on_date_is_unsupported() {
        let result = date(2015, 3, 2).with(&Adjuster::plus_unit(5, ChronoUnit::Hours));
        assert_eq!(result, Err(TemporalError::UnsupportedUnit(ChronoUnit::Hours)));
    }

    #[test]
    fn test_weekday_adjusters() {
        struct TestCase {
            adjuster: Adjuster,
            expected: (i32, u8, u8),
            description: &'static str,
        }

        // 2015-03-04 is a Wednesday
        let start = date(2015, 3, 4);
        let cases = [
            TestCase {
                adjuster: Adjuster::next(DayOfWeek::Wednesday),
                expected: (2015, 3, 11),
                description: "next on the same day moves a full week",
            },
            TestCase {
                adjuster: Adjuster::next(DayOfWeek::Friday),
                expected: (2015, 3, 6),
                description: "next later in the week",
            },
            TestCase {
                adjuster: Adjuster::next(DayOfWeek::Monday),
                expected: (2015, 3, 9),
                description: "next earlier in the week",
            },
            TestCase {
                adjuster: Adjuster::next_or_same(DayOfWeek::Wednesday),
                expected: (2015, 3, 4),
                description: "next or same on the same day",
            },
            TestCase {
                adjuster: Adjuster::next_or_same(DayOfWeek::Tuesday),
                expected: (2015, 3, 10),
                description: "next or same on another day",
            },
            TestCase {
                adjuster: Adjuster::previous(DayOfWeek::Wednesday),
                expected: (2015, 2, 25),
                description: "previous on the same day moves a full week",
            },
            TestCase {
                adjuster: Adjuster::previous(DayOfWeek::Sunday),
                expected: (2015, 3, 1),
                description: "previous across a month boundary",
            },
            TestCase {
                adjuster: Adjuster::previous_or_same(DayOfWeek::Wednesday),
                expected: (2015, 3, 4),
                description: "previous or same on the same day",
            },
            TestCase {
                adjuster: Adjuster::previous_or_same(DayOfWeek::Thursday),
                expected: (2015, 2, 26),
                description: "previous or same on another day",
            },
        ];

        for case in &cases {
            let (y, m, d) = case.expected;
            assert_eq!(
                start.with(&case.adjuster).unwrap(),
                date(y, m, d),
                "{}",
                case.description
            );
        }
    }

    #[test]
    fn test_month_boundaries() {
        assert_eq!(
            date(2012, 2, 10).with(&Adjuster::first_day_of_month()).unwrap(),
            date(2012, 2, 1)
        );
        assert_eq!(
            date(2012, 2, 10).with(&Adjuster::last_day_of_month()).unwrap(),
            date(2012, 2, 29)
        );
        assert_eq!(
            date(2011, 2, 10).with(&Adjuster::last_day_of_month()).unwrap(),
            date(2011, 2, 28)
        );
        assert_eq!(
            date(2015, 4, 30).with(&Adjuster::last_day_of_month()).unwrap(),
            date(2015, 4, 30)
        );
    }
}
