use crate::LocalDate;

/// Builds a date known to be valid.
pub(crate) fn date(year: i32, month: u8, day: u8) -> LocalDate {
    LocalDate::of(year, month, day)
        .unwrap_or_else(|e| panic!("{year}-{month}-{day} is not a date: {e}"))
}
