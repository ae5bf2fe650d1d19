// src/parse/week.rs
use chrono::{Datelike, Duration, NaiveDate};

/// Week-range folder token for the week containing `date`:
/// Monday's full date, underscore, Sunday's month-day (e.g. `2025-06-02_06-08`).
pub fn week_range_string(date: NaiveDate) -> String {
    let monday = date - Duration::days(date.weekday().num_days_from_monday() as i64);
    let sunday = monday + Duration::days(6);
    format!(
        "{}_{}",
        monday.format("%Y-%m-%d"),
        sunday.format("%m-%d")
    )
}

/// Resolve a `M/D` header token against `today`'s year and return the
/// week range of the resulting date. `None` when the token does not name a
/// real calendar day.
pub fn week_range_from_token(token: &str, today: NaiveDate) -> Option<String> {
    let (month, day) = token.split_once('/')?;
    let month: u32 = month.trim().parse().ok()?;
    let day: u32 = day.trim().parse().ok()?;
    let date = NaiveDate::from_ymd_opt(today.year(), month, day)?;
    Some(week_range_string(date))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn monday_start_sunday_end() {
        // 2025-06-04 is a Wednesday; its week runs 06-02 .. 06-08
        assert_eq!(week_range_string(date(2025, 6, 4)), "2025-06-02_06-08");
        // a Monday maps to its own week
        assert_eq!(week_range_string(date(2025, 6, 2)), "2025-06-02_06-08");
        // a Sunday still belongs to the week that started the previous Monday
        assert_eq!(week_range_string(date(2025, 6, 8)), "2025-06-02_06-08");
    }

    #[test]
    fn range_may_cross_month_and_year() {
        assert_eq!(week_range_string(date(2024, 12, 31)), "2024-12-30_01-05");
    }

    #[test]
    fn token_uses_current_year() {
        let today = date(2025, 5, 20);
        assert_eq!(
            week_range_from_token("5/12", today).unwrap(),
            "2025-05-12_05-18"
        );
    }

    #[test]
    fn invalid_tokens_yield_none() {
        let today = date(2025, 5, 20);
        assert_eq!(week_range_from_token("2/30", today), None);
        assert_eq!(week_range_from_token("13/1", today), None);
        assert_eq!(week_range_from_token("5-12", today), None);
        assert_eq!(week_range_from_token("", today), None);
    }
}
