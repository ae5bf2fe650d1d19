// src/archive.rs
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing::info;

/// Move the previous run's `latest/` output into the week-range archive
/// directory. Returns `true` when anything was archived.
///
/// Running twice in the same week is fine: destination files of the same
/// name are deleted before each move, so the newer snapshot wins and no
/// duplicates accumulate. A crash mid-move leaves mixed state; the tool is
/// a manually re-run batch job and the next run cleans up.
pub fn archive_previous(output_base_dir: &Path, week_range: &str) -> Result<bool> {
    let latest_dir = output_base_dir.join("latest");
    match fs::read_dir(&latest_dir) {
        Ok(mut entries) => {
            if entries.next().is_none() {
                return Ok(false);
            }
        }
        Err(_) => return Ok(false),
    }

    let archive_dir = output_base_dir.join(week_range);
    let latest_class_dir = latest_dir.join("class");
    let archive_class_dir = archive_dir.join("class");

    if latest_class_dir.is_dir() {
        fs::create_dir_all(&archive_class_dir)
            .with_context(|| format!("creating {}", archive_class_dir.display()))?;
        for entry in fs::read_dir(&latest_class_dir)
            .with_context(|| format!("listing {}", latest_class_dir.display()))?
        {
            let entry = entry?;
            let path = entry.path();
            if path.is_file() && path.extension().is_some_and(|ext| ext == "html") {
                move_replacing(&path, &archive_class_dir.join(entry.file_name()))?;
            }
        }
        info!("archived class pages into {}", archive_class_dir.display());
    }

    let latest_index = latest_dir.join("index.html");
    if latest_index.is_file() {
        fs::create_dir_all(&archive_dir)
            .with_context(|| format!("creating {}", archive_dir.display()))?;
        move_replacing(&latest_index, &archive_dir.join("index.html"))?;
        info!("archived index into {}", archive_dir.display());
    }

    // sweep leftovers out of latest/ so the next render starts clean
    for entry in fs::read_dir(&latest_dir)? {
        let path = entry?.path();
        if path.is_file() {
            fs::remove_file(&path)
                .with_context(|| format!("removing leftover {}", path.display()))?;
        } else if path.is_dir() && fs::read_dir(&path)?.next().is_none() {
            fs::remove_dir(&path)
                .with_context(|| format!("removing empty {}", path.display()))?;
        }
    }

    Ok(true)
}

fn move_replacing(src: &Path, dest: &Path) -> Result<()> {
    if dest.exists() {
        fs::remove_file(dest).with_context(|| format!("removing stale {}", dest.display()))?;
    }
    fs::rename(src, dest)
        .with_context(|| format!("moving {} to {}", src.display(), dest.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    const WEEK: &str = "2025-05-12_05-18";

    fn write(path: &Path, content: &str) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    fn fake_site(base: &Path, marker: &str) -> PathBuf {
        let latest = base.join("latest");
        write(&latest.join("index.html"), &format!("index {marker}"));
        write(&latest.join("class/class_1a.html"), &format!("1a {marker}"));
        write(&latest.join("class/class_1b.html"), &format!("1b {marker}"));
        latest
    }

    #[test]
    fn absent_or_empty_latest_is_a_noop() {
        let tmp = TempDir::new().unwrap();
        assert!(!archive_previous(tmp.path(), WEEK).unwrap());

        fs::create_dir_all(tmp.path().join("latest")).unwrap();
        assert!(!archive_previous(tmp.path(), WEEK).unwrap());
        assert!(!tmp.path().join(WEEK).exists());
    }

    #[test]
    fn moves_pages_into_week_directory_and_empties_latest() {
        let tmp = TempDir::new().unwrap();
        let latest = fake_site(tmp.path(), "v1");
        write(&latest.join("stray.txt"), "stray");

        assert!(archive_previous(tmp.path(), WEEK).unwrap());

        let archive = tmp.path().join(WEEK);
        assert_eq!(
            fs::read_to_string(archive.join("index.html")).unwrap(),
            "index v1"
        );
        assert_eq!(
            fs::read_to_string(archive.join("class/class_1a.html")).unwrap(),
            "1a v1"
        );
        // latest/ is swept clean, including the stray file and empty class/
        assert!(fs::read_dir(&latest).unwrap().next().is_none());
    }

    #[test]
    fn second_run_in_same_week_overwrites_without_leftovers() {
        let tmp = TempDir::new().unwrap();
        fake_site(tmp.path(), "v1");
        assert!(archive_previous(tmp.path(), WEEK).unwrap());

        fake_site(tmp.path(), "v2");
        assert!(archive_previous(tmp.path(), WEEK).unwrap());

        let archive = tmp.path().join(WEEK);
        assert_eq!(
            fs::read_to_string(archive.join("index.html")).unwrap(),
            "index v2"
        );
        assert_eq!(
            fs::read_to_string(archive.join("class/class_1b.html")).unwrap(),
            "1b v2"
        );
        // exactly one archived copy of each page
        assert_eq!(fs::read_dir(archive.join("class")).unwrap().count(), 2);
    }
}
