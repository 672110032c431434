//! Long-form birthday rendering, e.g. `January 1st, 1990`.

use chrono::{Datelike, NaiveDate};

/// English ordinal suffix for a day of the month.
///
/// # Examples
/// ```
/// use calories::domain::ordinal_suffix;
///
/// assert_eq!(ordinal_suffix(1), "st");
/// assert_eq!(ordinal_suffix(12), "th");
/// assert_eq!(ordinal_suffix(23), "rd");
/// ```
#[must_use]
pub fn ordinal_suffix(day: u32) -> &'static str {
    if matches!(day % 100, 11..=13) {
        return "th";
    }
    match day % 10 {
        1 => "st",
        2 => "nd",
        3 => "rd",
        _ => "th",
    }
}

/// Render `date` as `<Month> <day><suffix>, <year>`.
///
/// # Examples
/// ```
/// use calories::domain::format_birthday;
/// use chrono::NaiveDate;
///
/// let date = NaiveDate::from_ymd_opt(1990, 1, 1).expect("valid date");
/// assert_eq!(format_birthday(date), "January 1st, 1990");
/// ```
#[must_use]
pub fn format_birthday(date: NaiveDate) -> String {
    let day = date.day();
    format!(
        "{} {day}{}, {}",
        date.format("%B"),
        ordinal_suffix(day),
        date.year()
    )
}
