// src/parse/mod.rs
pub mod header;
pub mod rows;
pub mod week;

pub use header::{parse_header, HeaderInfo, WEEKDAYS};
pub use rows::{load_class_names, load_class_rows, load_teacher_names, ClassInfo, ClassRow};

use anyhow::{bail, Context, Result};
use encoding_rs::Encoding;
use std::fs;
use std::path::Path;

/// Read a whole CSV file through the given encoding into rows of cells.
///
/// No header handling and flexible record lengths: the spreadsheet export has
/// irregular header rows and ragged data rows, so positional access with
/// bounds checks happens at the call sites.
pub(crate) fn read_rows(path: &Path, enc: &'static Encoding) -> Result<Vec<Vec<String>>> {
    let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    let (text, _, had_errors) = enc.decode(&bytes);
    if had_errors {
        bail!("{} is not valid {}", path.display(), enc.name());
    }

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(text.as_bytes());

    let mut rows = Vec::new();
    for record in reader.records() {
        let record =
            record.with_context(|| format!("reading csv records from {}", path.display()))?;
        rows.push(record.iter().map(str::to_string).collect());
    }
    Ok(rows)
}
