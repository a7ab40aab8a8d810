//! Discovered file-system entries

use serde::Serialize;
use std::path::{Path, PathBuf};

/// Whether an entry is a file or a folder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    File,
    Folder,
}

/// One path found by traversal, with the name proposed for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entry {
    /// Sequence number assigned at discovery
    pub id: usize,
    pub kind: EntryKind,
    pub original_path: PathBuf,
    pub proposed_path: PathBuf,
    /// True when `proposed_path` differs from `original_path`
    pub changed: bool,
}

impl Entry {
    pub fn new(id: usize, kind: EntryKind, path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        Self { id, kind, original_path: path.clone(), proposed_path: path, changed: false }
    }

    pub fn file(id: usize, path: impl Into<PathBuf>) -> Self {
        Self::new(id, EntryKind::File, path)
    }

    pub fn folder(id: usize, path: impl Into<PathBuf>) -> Self {
        Self::new(id, EntryKind::Folder, path)
    }

    /// Record a proposed path and recompute `changed`.
    pub fn propose(&mut self, path: PathBuf) {
        self.changed = path != self.original_path;
        self.proposed_path = path;
    }

    pub fn is_file(&self) -> bool {
        self.kind == EntryKind::File
    }

    /// Number of path components, used to order folder renames deepest first.
    pub fn depth(&self) -> usize {
        self.original_path.components().count()
    }

    pub fn original_name(&self) -> Option<&str> {
        file_name_str(&self.original_path)
    }

    pub fn proposed_name(&self) -> Option<&str> {
        file_name_str(&self.proposed_path)
    }
}

fn file_name_str(path: &Path) -> Option<&str> {
    path.file_name().and_then(|name| name.to_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_entry_unchanged() {
        let entry = Entry::file(3, "/tmp/a.pdf");
        assert_eq!(entry.id, 3);
        assert_eq!(entry.original_path, entry.proposed_path);
        assert!(!entry.changed);
        assert!(entry.is_file());
    }

    #[test]
    fn test_propose_sets_changed() {
        let mut entry = Entry::file(0, "/tmp/a_b_c.pdf");
        entry.propose(PathBuf::from("/tmp/A B C.pdf"));
        assert!(entry.changed);
        assert_eq!(entry.proposed_name(), Some("A B C.pdf"));
        assert_eq!(entry.original_name(), Some("a_b_c.pdf"));
    }

    #[test]
    fn test_propose_same_path_clears_changed() {
        let mut entry = Entry::file(0, "/tmp/a.pdf");
        entry.propose(PathBuf::from("/tmp/b.pdf"));
        entry.propose(PathBuf::from("/tmp/a.pdf"));
        assert!(!entry.changed);
    }

    #[test]
    fn test_depth() {
        assert!(Entry::folder(0, "/a/b/c").depth() > Entry::folder(1, "/a/b").depth());
    }

    #[test]
    fn test_serializes_kind_lowercase() {
        let json = serde_json::to_string(&Entry::folder(1, "x")).unwrap();
        assert!(json.contains("\"kind\":\"folder\""));
    }
}
