use time::{Date, Duration};

/// ISO-8601 week identifier for a date, formatted `YYYY-Www` (e.g. `2026-W03`).
///
/// The year is the ISO week-based year, which differs from the calendar year
/// around January 1st.
pub fn week_id(date: Date) -> String {
    let (year, week, _) = date.to_iso_week_date();
    format!("{year}-W{week:02}")
}

/// The Sunday on or before `date`. Plan weeks run Sunday through Saturday.
pub fn start_of_week(date: Date) -> Date {
    date - Duration::days(date.weekday().number_days_from_sunday() as i64)
}
