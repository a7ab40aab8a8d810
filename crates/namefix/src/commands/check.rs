//! Check command implementation

use anyhow::Result;
use colored::*;
use namefix::normalize::{is_archive_container, normalize_name};
use namefix::theme;

/// Print the cleaned form of each name.
pub fn check_names(names: &[String]) -> Result<()> {
    for name in names {
        let result = normalize_name(name, is_archive_container(name));

        if result.changed {
            println!(
                "{} {} {}",
                theme::before(name),
                theme::info_symbol().cyan(),
                theme::after(&result.name)
            );
        } else {
            println!("{} {} (unchanged)", theme::success_symbol().green(), name);
        }
    }

    Ok(())
}
