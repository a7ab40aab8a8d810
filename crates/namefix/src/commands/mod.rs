//! Command implementations

pub mod apply;
pub mod check;
pub mod preview;

pub use apply::apply_changes;
pub use check::check_names;
pub use preview::preview_changes;

use anyhow::{Context, Result};
use colored::*;
use namefix::theme;
use namefix::{discover, normalize_entries, report, Config, Entry};
use std::path::Path;

/// Discover entries under the configured root and propose a name for each.
pub fn plan(config: &Config) -> Result<Vec<Entry>> {
    let mut entries = discover(&config.root, &config.scan_options())
        .with_context(|| format!("Failed to scan '{}'", config.root.display()))?;

    normalize_entries(&mut entries);

    tracing::info!(
        total = entries.len(),
        changed = entries.iter().filter(|e| e.changed).count(),
        "normalization complete"
    );

    Ok(entries)
}

/// Print every changed entry as a before/after pair.
pub fn print_changes(root: &Path, entries: &[Entry]) {
    let changed: Vec<&Entry> = entries.iter().filter(|e| e.changed).collect();

    if changed.is_empty() {
        println!(
            "\n{} All {} names are already clean\n",
            theme::success_symbol().green().bold(),
            entries.len()
        );
        return;
    }

    println!("\n{} ({} of {} entries)\n", "Proposed Changes:".bold(), changed.len(), entries.len());

    for entry in changed {
        let from = entry.original_path.strip_prefix(root).unwrap_or(&entry.original_path);
        let to = entry.proposed_name().unwrap_or_default();
        let marker = if entry.is_file() { "" } else { " (folder)" };

        println!(
            "  {} {}{}",
            theme::entry_id(entry.id),
            theme::before(&from.display().to_string()),
            marker
        );
        println!("       {} {}", theme::info_symbol().cyan(), theme::after(to));
    }
    println!();
}

/// Write the change log and, when folders were collected, the folder script.
pub fn write_reports(config: &Config, entries: &[Entry], announce: bool) -> Result<()> {
    let log_path = config.log_path();
    let count = report::write_change_log(&log_path, entries).context("Failed to write change log")?;
    if announce {
        println!(
            "{} Change log: {} ({} change(s))",
            theme::success_symbol().green(),
            log_path.display(),
            count
        );
    }

    if config.include_folders {
        let script_path = config.script_path();
        let count = report::write_folder_script(&script_path, entries)
            .context("Failed to write folder rename script")?;
        if announce {
            println!(
                "{} Folder rename script: {} ({} folder(s))",
                theme::success_symbol().green(),
                script_path.display(),
                count
            );
        }
    }

    Ok(())
}
