// src/parse/rows.rs
use anyhow::Result;
use std::collections::HashSet;
use std::path::Path;

use crate::config::Config;

/// One data row of the timetable CSV. Cell 0 is the class name embedded in
/// the export; the rest are lesson cells addressed through the header's
/// column map. Rows may be ragged.
pub type ClassRow = Vec<String>;

/// One entry of the class mapping file: which classes get pages, in what
/// order, and under what file names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassInfo {
    pub display_name: String,
    pub filename_base: String,
}

/// Rows 0..3 of the timetable CSV are header, handled by `parse::header`.
const HEADER_ROWS: usize = 3;

/// Load the class-by-column lesson rows of the timetable CSV.
pub fn load_class_rows(path: &Path, cfg: &Config) -> Result<Vec<ClassRow>> {
    let rows = super::read_rows(path, cfg.encoding()?)?;
    Ok(rows.into_iter().skip(HEADER_ROWS).collect())
}

/// Load the two-column class mapping CSV: display name, file name base.
/// Entries with either field blank are dropped.
pub fn load_class_names(path: &Path, cfg: &Config) -> Result<Vec<ClassInfo>> {
    let rows = super::read_rows(path, cfg.encoding()?)?;
    let mut classes = Vec::new();
    for row in &rows {
        let display_name = row.first().map(|s| s.trim()).unwrap_or("");
        let filename_base = row.get(1).map(|s| s.trim()).unwrap_or("");
        if display_name.is_empty() || filename_base.is_empty() {
            continue;
        }
        classes.push(ClassInfo {
            display_name: display_name.to_string(),
            filename_base: filename_base.to_string(),
        });
    }
    Ok(classes)
}

/// Load the one-column teacher list: trimmed, de-duplicated, order kept.
/// Currently loaded for completeness only; rendering does not consume it.
pub fn load_teacher_names(path: &Path, cfg: &Config) -> Result<Vec<String>> {
    let rows = super::read_rows(path, cfg.encoding()?)?;
    let mut seen = HashSet::new();
    let mut names = Vec::new();
    for row in &rows {
        let name = row.first().map(|s| s.trim()).unwrap_or("");
        if name.is_empty() || !seen.insert(name.to_string()) {
            continue;
        }
        names.push(name.to_string());
    }
    Ok(names)
}
