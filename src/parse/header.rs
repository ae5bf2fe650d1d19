// src/parse/header.rs
use anyhow::{bail, Context, Result};
use chrono::{Local, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use std::path::Path;

use super::week;
use crate::config::Config;

/// Weekday labels, in the column order the spreadsheet uses.
pub const WEEKDAYS: [&str; 5] = ["Mon", "Tue", "Wed", "Thu", "Fri"];

/// `M/D`-shaped substring inside a date header cell, e.g. `5/12 (Mon)`.
static DATE_TOKEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d{1,2}/\d{1,2}").unwrap());

/// Everything derived from the timetable CSV's header rows.
/// Built once per run, immutable afterwards.
#[derive(Debug, Clone)]
pub struct HeaderInfo {
    /// Monday-start week token used for archive folder names.
    pub week_range: String,
    /// Ordered period labels, `"1" .. "N"`.
    pub periods: Vec<String>,
    /// Per weekday (Mon..Fri), the data-row column indices of its lessons.
    pub day_columns: Vec<Vec<usize>>,
    /// Per weekday, the display date from the header, or a `(Mon)`-style
    /// placeholder when the cell holds no date.
    pub day_dates: Vec<String>,
}

/// Parse the header rows of the timetable CSV at `path`.
pub fn parse_header(path: &Path, cfg: &Config) -> Result<HeaderInfo> {
    let rows = super::read_rows(path, cfg.encoding()?)?;
    header_from_rows(
        &rows,
        cfg.periods_per_day,
        cfg.data_start_col,
        Local::now().date_naive(),
    )
    .with_context(|| format!("parsing timetable header of {}", path.display()))
}

/// Rows 0..3 are header: title, date row, period-label row.
///
/// The configured fixed stride is the single authoritative column layout:
/// weekday `i` owns `data_start_col + i*periods_per_day` onwards. The
/// period-label row is only a validator; if it disagrees with the stride the
/// whole layout is rejected rather than silently re-derived.
pub(crate) fn header_from_rows(
    rows: &[Vec<String>],
    periods_per_day: usize,
    data_start_col: usize,
    today: NaiveDate,
) -> Result<HeaderInfo> {
    if rows.len() < 3 {
        bail!("expected at least 3 header rows, found {}", rows.len());
    }
    let date_row = &rows[1];
    let period_row = &rows[2];

    let periods: Vec<String> = (1..=periods_per_day).map(|p| p.to_string()).collect();

    let mut day_columns = Vec::with_capacity(WEEKDAYS.len());
    for (day_idx, day) in WEEKDAYS.iter().enumerate() {
        let start = data_start_col + day_idx * periods_per_day;
        let columns: Vec<usize> = (start..start + periods_per_day).collect();
        validate_period_labels(period_row, &columns, &periods, day)?;
        day_columns.push(columns);
    }

    // the date for each weekday sits over that weekday's first lesson column
    let mut day_dates = Vec::with_capacity(WEEKDAYS.len());
    for (day_idx, day) in WEEKDAYS.iter().enumerate() {
        let cell = date_row
            .get(day_columns[day_idx][0])
            .map(|s| s.trim())
            .unwrap_or("");
        if DATE_TOKEN.is_match(cell) {
            day_dates.push(cell.to_string());
        } else {
            day_dates.push(format!("({day})"));
        }
    }

    // week range from the first real date; current calendar week as fallback
    let week_range = day_dates
        .iter()
        .find_map(|d| {
            DATE_TOKEN
                .find(d)
                .and_then(|m| week::week_range_from_token(m.as_str(), today))
        })
        .unwrap_or_else(|| week::week_range_string(today));

    Ok(HeaderInfo {
        week_range,
        periods,
        day_columns,
        day_dates,
    })
}

fn validate_period_labels(
    period_row: &[String],
    columns: &[usize],
    periods: &[String],
    day: &str,
) -> Result<()> {
    for (period_idx, &col) in columns.iter().enumerate() {
        let label = period_row
            .get(col)
            .map(|s| normalize_digits(s.trim()))
            .unwrap_or_default();
        if label != periods[period_idx] {
            bail!(
                "period header mismatch at column {} ({} period {}): expected {:?}, found {:?}",
                col,
                day,
                period_idx + 1,
                periods[period_idx],
                label
            );
        }
    }
    Ok(())
}

/// Spreadsheet exports often carry full-width digits in the period row.
fn normalize_digits(s: &str) -> String {
    s.chars()
        .map(|c| match c {
            '０'..='９' => char::from_digit(c as u32 - '０' as u32, 10).unwrap_or(c),
            _ => c,
        })
        .collect()
}
