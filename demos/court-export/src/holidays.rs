//! US holiday dates used by the demo's holiday calendar.
//!
//! Names must match the `name` of holidays in the schedule config.

use std::ops::RangeInclusive;

use chrono::{NaiveDate, Weekday};
use cp_schedule::FixedDateCalendar;

const FIXED: [(&str, u32, u32); 4] = [
    ("New Year's Day", 1, 1),
    ("Independence Day", 7, 4),
    ("Christmas Eve", 12, 24),
    ("Christmas Day", 12, 25),
];

/// `(name, month, weekday, nth)`: the nth weekday of the month.
const FLOATING: [(&str, u32, Weekday, u8); 4] = [
    ("Mother's Day", 5, Weekday::Sun, 2),
    ("Father's Day", 6, Weekday::Sun, 3),
    ("Labor Day", 9, Weekday::Mon, 1),
    ("Thanksgiving", 11, Weekday::Thu, 4),
];

pub fn us_calendar(years: RangeInclusive<i32>) -> FixedDateCalendar {
    let mut calendar = FixedDateCalendar::new();
    for year in years {
        for (name, month, day) in FIXED {
            if let Some(date) = NaiveDate::from_ymd_opt(year, month, day) {
                calendar.insert(name, date);
            }
        }
        for (name, month, weekday, nth) in FLOATING {
            if let Some(date) = NaiveDate::from_weekday_of_month_opt(year, month, weekday, nth) {
                calendar.insert(name, date);
            }
        }
    }
    calendar
}
