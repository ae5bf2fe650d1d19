// src/render/pages.rs
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing::info;

use super::table;
use crate::config::Config;
use crate::diag::Diagnostics;
use crate::parse::{ClassInfo, ClassRow, HeaderInfo};

/// Replace every `{{key}}` placeholder. Unknown placeholders are left as-is
/// so a template typo is visible in the output instead of vanishing.
fn fill(template: &str, vars: &[(&str, &str)]) -> String {
    let mut out = template.to_string();
    for (key, value) in vars {
        out = out.replace(&format!("{{{{{key}}}}}"), value);
    }
    out
}

fn load_template(dir: &Path, name: &str) -> Result<String> {
    let path = dir.join(name);
    fs::read_to_string(&path).with_context(|| format!("reading template {}", path.display()))
}

/// Class names compare equal across hyphen variants and digit widths, so a
/// mapping entry `1-1` matches an exported row named `１－１`.
fn normalize_class_name(s: &str) -> String {
    s.trim()
        .chars()
        .map(|c| match c {
            '－' | 'ー' | '‐' | '―' => '-',
            '０'..='９' => char::from_digit(c as u32 - '０' as u32, 10).unwrap_or(c),
            _ => c,
        })
        .collect()
}

/// Render and write the whole site under `<output_base_dir>/latest/`:
/// one index page plus one page per mapping entry, in mapping order.
/// Same-named files from a previous run are overwritten.
pub fn render_site(
    cfg: &Config,
    header: &HeaderInfo,
    class_rows: &[ClassRow],
    classes: &[ClassInfo],
    diags: &mut Diagnostics,
) -> Result<()> {
    let latest_dir = cfg.output_base_dir.join("latest");
    let class_dir = latest_dir.join("class");
    fs::create_dir_all(&class_dir)
        .with_context(|| format!("creating output directory {}", class_dir.display()))?;

    let index_template = load_template(&cfg.templates_dir, "index_template.html")?;
    let class_template = load_template(&cfg.templates_dir, "class_template.html")?;

    // index page: one link per mapping entry, in mapping order
    let mut list_html = String::from("<ul>\n");
    for class in classes {
        list_html.push_str(&format!(
            "  <li><a href=\"class/{}.html\">{}</a></li>\n",
            class.filename_base,
            table::escape(&class.display_name)
        ));
    }
    list_html.push_str("</ul>\n");

    let index_html = fill(
        &index_template,
        &[
            ("week_range", &header.week_range),
            ("class_list", &list_html),
            ("base_url", &cfg.base_url),
        ],
    );
    let index_path = latest_dir.join("index.html");
    fs::write(&index_path, index_html)
        .with_context(|| format!("writing {}", index_path.display()))?;
    info!("wrote {}", index_path.display());

    for (class_idx, class) in classes.iter().enumerate() {
        let Some(row) = class_rows.get(class_idx) else {
            diags.warn(format!(
                "class {:?} has no data row ({} mapping entries, {} data rows); page skipped",
                class.display_name,
                classes.len(),
                class_rows.len()
            ));
            continue;
        };

        let embedded = row.first().map(|s| s.trim()).unwrap_or("");
        if normalize_class_name(embedded) != normalize_class_name(&class.display_name) {
            diags.warn(format!(
                "class name mismatch: mapping says {:?}, csv row says {:?}; \
                 rendering the row under {:?}",
                class.display_name, embedded, class.display_name
            ));
        }

        let table_html =
            table::timetable_table(&class.display_name, row, header, cfg.compact_lessons);
        let page = fill(
            &class_template,
            &[
                ("week_range", &header.week_range),
                ("class_name", &table::escape(&class.display_name)),
                ("timetable_table", &table_html),
                ("base_url", &cfg.base_url),
            ],
        );
        let page_path = class_dir.join(format!("{}.html", class.filename_base));
        fs::write(&page_path, page)
            .with_context(|| format!("writing {}", page_path.display()))?;
        info!("wrote {}", page_path.display());
    }

    Ok(())
}
