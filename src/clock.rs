//! Sources of the current date.
//!
//! `LocalDate::now` reads the system clock; the `*_with` variants take any
//! `Clock`, which is how tests pin "now" to a known value.

use chrono::{Local, NaiveDateTime};

use crate::LocalDate;
use crate::error::Result;
use crate::temporal::Temporal;

pub trait Clock {
    /// The current local date and time.
    fn now(&self) -> NaiveDateTime;
}

/// The operating system clock in the local time zone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// A clock that always reports the same instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(NaiveDateTime);

impl FixedClock {
    pub const fn new(now: NaiveDateTime) -> Self {
        Self(now)
    }

    /// Midnight at the start of `date`.
    ///
    /// # Errors
    /// Returns `TemporalError::NativeRange` if `date` is outside the native
    /// calendar range.
    pub fn from_date(date: LocalDate) -> Result<Self> {
        date.to_native().map(Self)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> NaiveDateTime {
        (**self).now()
    }
}
