//! Rename application

use same_file::is_same_file;
use std::fs;

use crate::entry::Entry;
use crate::error::RenameError;

/// A rename that did not happen
#[derive(Debug)]
pub struct RenameFailure {
    pub entry_id: usize,
    pub error: RenameError,
}

/// Result of applying renames
#[derive(Debug, Default)]
pub struct RenameOutcome {
    /// Ids of entries renamed on disk
    pub renamed: Vec<usize>,
    pub failures: Vec<RenameFailure>,
}

impl RenameOutcome {
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Rename one entry to its proposed path.
///
/// Refuses to overwrite an existing file. The one exception is a destination that
/// resolves to the source itself, as a case-only change does on a case-insensitive
/// file system.
pub fn rename_entry(entry: &Entry) -> Result<(), RenameError> {
    let from = &entry.original_path;
    let to = &entry.proposed_path;

    if to.exists() && !is_same_file(from, to).unwrap_or(false) {
        return Err(RenameError::TargetExists(to.clone()));
    }

    fs::rename(from, to).map_err(|source| RenameError::Io {
        from: from.clone(),
        to: to.clone(),
        source,
    })
}

/// Rename every changed file. A failure is recorded and logged, and the remaining
/// entries are still processed. Folders are left to the rename script.
pub fn apply_renames(entries: &[Entry]) -> RenameOutcome {
    let mut outcome = RenameOutcome::default();

    for entry in entries.iter().filter(|e| e.changed && e.is_file()) {
        match rename_entry(entry) {
            Ok(()) => {
                tracing::debug!(id = entry.id, to = %entry.proposed_path.display(), "renamed");
                outcome.renamed.push(entry.id);
            }
            Err(error) => {
                tracing::warn!(id = entry.id, "{}", error);
                outcome.failures.push(RenameFailure { entry_id: entry.id, error });
            }
        }
    }

    tracing::info!(
        renamed = outcome.renamed.len(),
        failed = outcome.failures.len(),
        "renames applied"
    );
    outcome
}
