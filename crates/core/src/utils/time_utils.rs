use chrono::{Datelike, NaiveDate};

/// Whole calendar months elapsed between `start` and `end`, at day
/// granularity. A month only counts once its day-of-month is reached, so
/// Jan 10 -> Feb 9 is 0 months and Jan 10 -> Feb 10 is 1.
///
/// Returns 0 when `end` is on or before `start`.
pub fn months_elapsed(start: NaiveDate, end: NaiveDate) -> i32 {
    if end <= start {
        return 0;
    }
    let mut months =
        (end.year() - start.year()) * 12 + (end.month() as i32 - start.month() as i32);
    if (end.day() as i32) < (start.day() as i32) {
        months -= 1;
    }
    months.max(0)
}
