//! Apply command implementation

use anyhow::Result;
use colored::*;
use namefix::{apply_renames, theme, Config};

use super::{plan, print_changes, write_reports};

/// Rename every changed file, reporting failures without stopping.
pub fn apply_changes(config: &Config) -> Result<()> {
    let entries = plan(config)?;
    print_changes(&config.root, &entries);
    write_reports(config, &entries, true)?;

    let outcome = apply_renames(&entries);

    if !outcome.failures.is_empty() {
        println!("\n{}", "Failed Renames:".red().bold());
        for failure in &outcome.failures {
            println!(
                "  {} {} {}",
                theme::error_symbol().red(),
                theme::entry_id(failure.entry_id),
                failure.error
            );
        }
    }

    println!(
        "\n{} Renamed {} file(s)",
        theme::success_symbol().green().bold(),
        outcome.renamed.len()
    );

    if !outcome.is_clean() {
        theme::print_warning(&format!("{} rename(s) failed", outcome.failures.len()));
    }

    if config.include_folders && entries.iter().any(|e| !e.is_file() && e.changed) {
        println!(
            "{} Folders are not renamed directly; run {} to rename them",
            theme::info_symbol().cyan(),
            config.script_path().display().to_string().cyan()
        );
    }
    println!();

    Ok(())
}
