use time::{Date, Duration, OffsetDateTime};

/// Monday on or before the given date. Weeks are keyed by this date.
pub fn week_start_monday(date: Date) -> Date {
    let days_back = date.weekday().number_days_from_monday();
    date - Duration::days(days_back as i64)
}

pub fn current_week_start() -> Date {
    week_start_monday(OffsetDateTime::now_utc().date())
}
