//! Preview command implementation

use anyhow::Result;
use chrono::Local;
use namefix::{report, Config};

use super::{plan, print_changes, write_reports};
use crate::cli::ReportFormat;

/// Show what would change without renaming anything.
pub fn preview_changes(config: &Config, format: ReportFormat) -> Result<()> {
    let entries = plan(config)?;

    match format {
        ReportFormat::Text => {
            print_changes(&config.root, &entries);
            write_reports(config, &entries, true)?;
        }
        ReportFormat::Json => {
            println!("{}", report::render_json(&entries, Local::now())?);
            write_reports(config, &entries, false)?;
        }
    }

    Ok(())
}
