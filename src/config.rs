// src/config.rs
use anyhow::{bail, Context, Result};
use encoding_rs::Encoding;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Static run configuration, loaded once at startup.
///
/// Every field has a default so a missing `config.yaml` still yields a usable
/// setup; a present file only needs to name the fields it overrides.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory holding the three input CSV files.
    pub data_dir: PathBuf,
    /// Base directory the site is published into (`latest/` plus week archives).
    pub output_base_dir: PathBuf,
    /// Directory holding `index_template.html` and `class_template.html`.
    pub templates_dir: PathBuf,
    /// Base URL the published pages live under, injected into templates.
    pub base_url: String,
    /// Encoding label of the input CSVs, resolved through `encoding_rs`
    /// (e.g. "windows-31j" for Shift_JIS exports, or "utf-8").
    pub csv_encoding: String,
    /// File name of the timetable CSV inside `data_dir`.
    pub timetable_csv: String,
    /// File name of the class display-name/file-name mapping CSV.
    pub class_names_csv: String,
    /// File name of the teacher list CSV.
    pub teacher_names_csv: String,
    /// Lesson slots per school day.
    pub periods_per_day: usize,
    /// Column index where Monday's first lesson starts in a data row.
    pub data_start_col: usize,
    /// Front-pack each day's lessons over its period slots before layout.
    /// Off by default: it changes which period a lesson is displayed under.
    pub compact_lessons: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            output_base_dir: PathBuf::from("docs"),
            templates_dir: PathBuf::from("templates"),
            base_url: String::from("/"),
            csv_encoding: String::from("windows-31j"),
            timetable_csv: String::from("timetable.csv"),
            class_names_csv: String::from("class_names.csv"),
            teacher_names_csv: String::from("teacher_names.csv"),
            periods_per_day: 6,
            data_start_col: 1,
            compact_lessons: false,
        }
    }
}

impl Config {
    /// Load from `path` if it exists, otherwise fall back to defaults.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        let cfg = if path.is_file() {
            let text = fs::read_to_string(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            serde_yaml::from_str(&text)
                .with_context(|| format!("parsing config {}", path.display()))?
        } else {
            Self::default()
        };
        cfg.validate()?;
        Ok(cfg)
    }

    fn validate(&self) -> Result<()> {
        if self.periods_per_day == 0 {
            bail!("periods_per_day must be at least 1");
        }
        // resolve the label now so a typo fails at startup, not mid-parse
        self.encoding()?;
        Ok(())
    }

    /// Resolve the configured encoding label.
    pub fn encoding(&self) -> Result<&'static Encoding> {
        match Encoding::for_label(self.csv_encoding.as_bytes()) {
            Some(enc) => Ok(enc),
            None => bail!("unknown csv_encoding label {:?}", self.csv_encoding),
        }
    }

    pub fn timetable_path(&self) -> PathBuf {
        self.data_dir.join(&self.timetable_csv)
    }

    pub fn class_names_path(&self) -> PathBuf {
        self.data_dir.join(&self.class_names_csv)
    }

    pub fn teacher_names_path(&self) -> PathBuf {
        self.data_dir.join(&self.teacher_names_csv)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn defaults_are_valid() {
        let cfg = Config::default();
        cfg.validate().unwrap();
        assert_eq!(cfg.periods_per_day, 6);
        assert_eq!(cfg.encoding().unwrap().name(), "Shift_JIS");
    }

    #[test]
    fn partial_yaml_overrides_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "csv_encoding: utf-8\nperiods_per_day: 4").unwrap();
        let cfg = Config::load_or_default(file.path()).unwrap();
        assert_eq!(cfg.periods_per_day, 4);
        assert_eq!(cfg.encoding().unwrap().name(), "UTF-8");
        // untouched field keeps its default
        assert_eq!(cfg.timetable_csv, "timetable.csv");
    }

    #[test]
    fn missing_file_means_defaults() {
        let cfg = Config::load_or_default(Path::new("no/such/config.yaml")).unwrap();
        assert_eq!(cfg.data_dir, PathBuf::from("data"));
    }

    #[test]
    fn bad_encoding_label_rejected() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "csv_encoding: cp-nonsense").unwrap();
        assert!(Config::load_or_default(file.path()).is_err());
    }

    #[test]
    fn zero_periods_rejected() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "periods_per_day: 0").unwrap();
        assert!(Config::load_or_default(file.path()).is_err());
    }
}
