use std::path::PathBuf;

use anyhow::{Context, Result};

use miaaula_lib::reports::{export_to_sink, DirectorySink};

use crate::app::App;

pub fn run(app: &App, report_id: &str, out: Option<PathBuf>) -> Result<()> {
    let report = app.find_report(report_id)?;

    let dir = out.unwrap_or_else(|| PathBuf::from("."));
    let sink = DirectorySink::new(dir.clone());
    let filename = export_to_sink(&report, &sink)
        .with_context(|| format!("Failed to export report '{}'", report_id))?;

    println!("{}", dir.join(filename).display());
    Ok(())
}
