//! Directory traversal
//!
//! Walks a root directory and produces entries in discovery order: within each
//! directory, files come first sorted by name, then sub-directories.

use std::cmp::Ordering;
use std::path::{Path, PathBuf};

use walkdir::{DirEntry, WalkDir};

use crate::entry::Entry;
use crate::error::ScanError;

/// What to collect while walking
#[derive(Debug, Clone, Default)]
pub struct ScanOptions {
    /// Descend into sub-directories
    pub recursive: bool,

    /// Also collect folders
    pub include_folders: bool,

    /// Lowercase extensions (without the dot) of files to leave alone
    pub skip_extensions: Vec<String>,

    /// Exact paths to leave alone, such as the tool's own reports
    pub skip_paths: Vec<PathBuf>,
}

impl ScanOptions {
    /// Folders are collected at every depth, so the walk only stops at the top level
    /// when neither option needs the tree below it.
    fn max_depth(&self) -> usize {
        if self.recursive || self.include_folders {
            usize::MAX
        } else {
            1
        }
    }

    fn collects_file_at(&self, depth: usize) -> bool {
        self.recursive || depth <= 1
    }

    fn is_skipped_file(&self, path: &Path) -> bool {
        if self.skip_paths.iter().any(|skip| skip == path) {
            return true;
        }

        path.extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_lowercase())
            .is_some_and(|ext| self.skip_extensions.iter().any(|skip| *skip == ext))
    }
}

/// Collect the entries under `root`.
///
/// Files come from the root alone unless the walk is recursive; folders, when
/// requested, come from the whole tree.
///
/// Hidden entries (names starting with `.`) are never collected or descended into.
/// Unreadable entries below the root are logged and skipped.
pub fn discover(root: &Path, options: &ScanOptions) -> Result<Vec<Entry>, ScanError> {
    if !root.exists() {
        return Err(ScanError::PathNotFound(root.to_path_buf()));
    }

    if !root.is_dir() {
        return Err(ScanError::NotADirectory(root.to_path_buf()));
    }

    let walker = WalkDir::new(root)
        .min_depth(1)
        .max_depth(options.max_depth())
        .follow_links(false)
        .sort_by(files_before_folders)
        .into_iter()
        .filter_entry(|e| !is_hidden(e));

    let mut files = Vec::new();
    let mut folders = Vec::new();

    for item in walker {
        let entry = match item {
            Ok(entry) => entry,
            Err(e) if e.depth() == 0 => {
                return Err(ScanError::Walk { path: root.to_path_buf(), source: e });
            }
            Err(e) => {
                tracing::warn!("Error accessing entry: {}", e);
                continue;
            }
        };

        let path = entry.path();
        if entry.file_type().is_dir() {
            if options.include_folders {
                folders.push(path.to_path_buf());
            }
        } else if entry.file_type().is_file()
            && options.collects_file_at(entry.depth())
            && !options.is_skipped_file(path)
        {
            files.push(path.to_path_buf());
        }
    }

    tracing::debug!(
        files = files.len(),
        folders = folders.len(),
        root = %root.display(),
        "scan complete"
    );

    let entries = files
        .into_iter()
        .map(|path| (path, true))
        .chain(folders.into_iter().map(|path| (path, false)))
        .enumerate()
        .map(|(id, (path, is_file))| {
            if is_file {
                Entry::file(id, path)
            } else {
                Entry::folder(id, path)
            }
        })
        .collect();

    Ok(entries)
}

fn files_before_folders(a: &DirEntry, b: &DirEntry) -> Ordering {
    a.file_type()
        .is_dir()
        .cmp(&b.file_type().is_dir())
        .then_with(|| a.file_name().cmp(b.file_name()))
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry.depth() > 0 && entry.file_name().to_str().is_some_and(|name| name.starts_with('.'))
}
