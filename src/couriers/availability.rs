//! Courier availability predicate
//!
//! A courier is unavailable exactly when the day in question falls
//! inside the inclusive [start, end] range of any of their vacations.
//! Evaluated fresh on every call; no caching.

use chrono::NaiveDate;

/// True when `day` falls within the inclusive vacation range.
pub fn covers_day(start: NaiveDate, end: NaiveDate, day: NaiveDate) -> bool {
    start <= day && day <= end
}

/// Availability over a set of vacation ranges.
pub fn is_available<'a, I>(vacations: I, day: NaiveDate) -> bool
where
    I: IntoIterator<Item = &'a (NaiveDate, NaiveDate)>,
{
    !vacations
        .into_iter()
        .any(|&(start, end)| covers_day(start, end, day))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_boundary_days_are_covered() {
        let start = d(2025, 7, 10);
        let end = d(2025, 7, 20);
        assert!(covers_day(start, end, start));
        assert!(covers_day(start, end, end));
        assert!(covers_day(start, end, d(2025, 7, 15)));
    }

    #[test]
    fn test_days_outside_range_are_free() {
        let start = d(2025, 7, 10);
        let end = d(2025, 7, 20);
        assert!(!covers_day(start, end, d(2025, 7, 9)));
        assert!(!covers_day(start, end, d(2025, 7, 21)));
    }

    #[test]
    fn test_single_day_vacation() {
        let day = d(2025, 3, 8);
        assert!(covers_day(day, day, day));
        assert!(!covers_day(day, day, d(2025, 3, 9)));
    }

    #[test]
    fn test_availability_over_multiple_ranges() {
        let vacations = vec![
            (d(2025, 1, 1), d(2025, 1, 10)),
            (d(2025, 6, 1), d(2025, 6, 14)),
        ];
        // past vacation does not block today
        assert!(is_available(&vacations, d(2025, 3, 1)));
        // any covering range blocks
        assert!(!is_available(&vacations, d(2025, 6, 7)));
        assert!(is_available(&[], d(2025, 6, 7)));
    }
}
