// src/render/table.rs
use crate::parse::{ClassRow, HeaderInfo};

/// Placeholder rendered for an empty or missing lesson slot.
pub const NO_LESSON: &str = "-";

pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// One weekday's lessons in period order, one entry per period slot.
///
/// Raw mode keeps each lesson under the period its column maps to. Compact
/// mode front-packs the non-empty lessons over the day's slots and pads the
/// tail, which deliberately changes lesson-to-period alignment.
fn day_lessons(row: &ClassRow, columns: &[usize], compact: bool) -> Vec<String> {
    let mut slots: Vec<String> = columns
        .iter()
        .map(|&col| {
            row.get(col)
                .map(|cell| cell.trim().to_string())
                .unwrap_or_default()
        })
        .collect();

    if compact {
        slots.retain(|lesson| !lesson.is_empty());
        slots.resize(columns.len(), String::new());
    }

    slots
        .into_iter()
        .map(|lesson| {
            if lesson.is_empty() {
                NO_LESSON.to_string()
            } else {
                escape(&lesson)
            }
        })
        .collect()
}

/// Render one class's weekly timetable as an HTML fragment: a heading plus
/// a periods-by-weekdays table headed by the decoded dates.
pub fn timetable_table(
    class_name: &str,
    row: &ClassRow,
    header: &HeaderInfo,
    compact: bool,
) -> String {
    // lessons are gathered per weekday, then emitted row-by-row per period
    let by_day: Vec<Vec<String>> = header
        .day_columns
        .iter()
        .map(|columns| day_lessons(row, columns, compact))
        .collect();

    let mut html = String::new();
    html.push_str(&format!("<h3>Timetable for {}</h3>\n", escape(class_name)));
    html.push_str(
        "<table border='1' style='width:100%; border-collapse: collapse; text-align: center;'>\n",
    );
    html.push_str("<thead><tr><th>Period</th>");
    for date in &header.day_dates {
        html.push_str(&format!("<th>{}</th>", escape(date)));
    }
    html.push_str("</tr></thead>\n<tbody>\n");

    for (period_idx, period) in header.periods.iter().enumerate() {
        html.push_str(&format!("<tr><td>{}</td>", escape(period)));
        for lessons in &by_day {
            html.push_str(&format!("<td>{}</td>", lessons[period_idx]));
        }
        html.push_str("</tr>\n");
    }

    html.push_str("</tbody></table>\n");
    html
}
