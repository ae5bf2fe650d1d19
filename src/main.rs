use anyhow::Result;
use std::path::Path;
use tracing::{info, warn};
use tracing_subscriber::{fmt, EnvFilter};

use weektable::{archive, config::Config, diag::Diagnostics, parse, render};

fn main() -> Result<()> {
    // ─── 1) init logging ─────────────────────────────────────────────
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder().with_env_filter(env).init();
    info!("startup");

    // ─── 2) load config ──────────────────────────────────────────────
    let cfg = Config::load_or_default(Path::new("config.yaml"))?;

    // ─── 3) load every input before touching the output tree ─────────
    let timetable_path = cfg.timetable_path();
    let header = parse::parse_header(&timetable_path, &cfg)?;
    info!(week = %header.week_range, "parsed timetable header");

    let class_rows = parse::load_class_rows(&timetable_path, &cfg)?;
    let classes = parse::load_class_names(&cfg.class_names_path(), &cfg)?;
    let teachers = parse::load_teacher_names(&cfg.teacher_names_path(), &cfg)?;
    info!(
        rows = class_rows.len(),
        classes = classes.len(),
        teachers = teachers.len(),
        "loaded data"
    );

    // ─── 4) archive the previous run's output ────────────────────────
    if archive::archive_previous(&cfg.output_base_dir, &header.week_range)? {
        info!("archived previous output into {}", header.week_range);
    } else {
        info!("no previous output to archive");
    }

    // ─── 5) render the new site ──────────────────────────────────────
    let mut diags = Diagnostics::new();
    render::render_site(&cfg, &header, &class_rows, &classes, &mut diags)?;
    for warning in diags.warnings() {
        warn!("{warning}");
    }

    info!("all done");
    Ok(())
}
