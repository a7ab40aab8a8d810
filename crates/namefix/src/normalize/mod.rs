//! Name normalization pipeline
//!
//! A file name goes through these stages, in order:
//!
//! 1. noise phrase stripping ([`phrases`])
//! 2. separator collapsing ([`separators`])
//! 3. camel case splitting ([`camel`])
//! 4. term correction ([`terms`])
//! 5. title casing ([`case`])
//! 6. term correction again, since title casing breaks terms like `iPhone`
//! 7. edge trimming, twice ([`edges`])
//! 8. whitespace collapse and trim
//!
//! Stages 2 to 6 are skipped for archive containers so multi-part archive names
//! (`book.part1.rar`) keep their exact spelling.
//!
//! A single pass is deterministic, but running the pipeline on its own output may
//! change the name again.

pub mod camel;
pub mod case;
pub mod edges;
pub mod phrases;
pub mod separators;
pub mod terms;

use regex::{Regex, RegexBuilder};
use std::path::PathBuf;

use crate::entry::{Entry, EntryKind};
use crate::filename::NamePath;

pub use camel::split_camel_case;
pub use case::title_case;
pub use edges::trim_edges;
pub use phrases::strip_noise_phrases;
pub use separators::{collapse_repeated_separators, collapse_whitespace};
pub use terms::correct_terms;

/// File name fragments that mark a compressed archive.
pub const ARCHIVE_MARKERS: &[&str] = &[".rar", ".zip"];

/// Result of normalizing one name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Normalized {
    pub name: String,
    pub changed: bool,
}

/// Case-insensitive pattern matching `literal` exactly.
pub(crate) fn literal_pattern(literal: &str) -> Regex {
    RegexBuilder::new(&regex::escape(literal))
        .case_insensitive(true)
        .build()
        .expect("escaped literal is a valid pattern")
}

/// True when the file name contains an archive marker, ignoring case.
pub fn is_archive_container(file_name: &str) -> bool {
    let lower = file_name.to_lowercase();
    ARCHIVE_MARKERS.iter().any(|marker| lower.contains(marker))
}

/// Run the stem stages of the pipeline.
pub fn normalize_stem(stem: &str, is_archive: bool) -> String {
    let mut stem = strip_noise_phrases(stem);

    if !is_archive {
        stem = collapse_repeated_separators(&stem);
        stem = split_camel_case(&stem);
        stem = correct_terms(&stem);
        stem = title_case(&stem);
        stem = correct_terms(&stem);
    }

    let stem = trim_edges(&stem);
    collapse_whitespace(&stem).trim().to_string()
}

/// Run the stem stages on `parts`.
///
/// Returns `false`, leaving `parts` untouched, when nothing of the stem would
/// survive: a bare extension would turn the file into a hidden one.
fn normalize_parts(parts: &mut NamePath, is_archive: bool) -> bool {
    let stem = normalize_stem(&parts.stem, is_archive);
    if stem.is_empty() {
        return false;
    }

    parts.stem = stem;
    true
}

/// Normalize a bare file name.
pub fn normalize_name(original_name: &str, is_archive: bool) -> Normalized {
    let mut parts = NamePath::from_file_name(original_name);
    if !normalize_parts(&mut parts, is_archive) {
        return Normalized { name: original_name.to_string(), changed: false };
    }

    let name = parts.file_name();
    let changed = name != original_name;
    Normalized { name, changed }
}

/// Clean up a folder name: dots and underscores become spaces, then title case.
pub fn clean_folder_name(name: &str) -> String {
    let spaced = name.replace(['.', '_'], " ");
    collapse_whitespace(&title_case(&spaced)).trim().to_string()
}

/// Propose a new path for one entry. The directory part never changes.
pub fn normalize_entry(entry: &mut Entry) {
    let proposed = match entry.kind {
        EntryKind::File => propose_file_path(entry),
        EntryKind::Folder => propose_folder_path(entry),
    };

    let Some(proposed) = proposed else {
        tracing::debug!(path = %entry.original_path.display(), "keeping original name");
        return;
    };

    tracing::debug!(
        id = entry.id,
        from = %entry.proposed_path.display(),
        to = %proposed.display(),
        "normalized"
    );

    entry.propose(proposed);
}

fn propose_file_path(entry: &Entry) -> Option<PathBuf> {
    let mut parts = NamePath::from_path(&entry.proposed_path)?;
    let archive = entry.original_name().is_some_and(is_archive_container);

    normalize_parts(&mut parts, archive).then(|| parts.to_path())
}

fn propose_folder_path(entry: &Entry) -> Option<PathBuf> {
    let cleaned = clean_folder_name(entry.proposed_name()?);
    if cleaned.is_empty() {
        return None;
    }

    Some(entry.proposed_path.with_file_name(cleaned))
}

/// Normalize every entry, keeping discovery order.
pub fn normalize_entries(entries: &mut [Entry]) {
    for entry in entries.iter_mut() {
        normalize_entry(entry);
    }
}
