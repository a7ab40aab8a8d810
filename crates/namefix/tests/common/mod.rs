// Test infrastructure and utilities for namefix tests

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Builder for a temporary directory tree of empty files
pub struct FixtureTree {
    temp: TempDir,
}

#[allow(dead_code)]
impl FixtureTree {
    pub fn new() -> Self {
        Self { temp: TempDir::new().unwrap() }
    }

    /// Add a file (parent folders are created as needed)
    pub fn file(self, relative: &str) -> Self {
        let path = self.temp.path().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, relative).unwrap();
        self
    }

    /// Add an empty folder
    pub fn folder(self, relative: &str) -> Self {
        fs::create_dir_all(self.temp.path().join(relative)).unwrap();
        self
    }

    /// Write a .namefix.toml in the root
    pub fn config(self, contents: &str) -> Self {
        fs::write(self.temp.path().join(".namefix.toml"), contents).unwrap();
        self
    }

    pub fn root(&self) -> &Path {
        self.temp.path()
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.temp.path().join(relative)
    }

    pub fn exists(&self, relative: &str) -> bool {
        self.path(relative).exists()
    }

    pub fn read(&self, relative: &str) -> String {
        fs::read_to_string(self.path(relative)).unwrap()
    }

    /// File names directly in `relative`, sorted
    pub fn list(&self, relative: &str) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(self.path(relative))
            .unwrap()
            .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }
}

impl Default for FixtureTree {
    fn default() -> Self {
        Self::new()
    }
}
