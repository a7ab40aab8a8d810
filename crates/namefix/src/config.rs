use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::scan::ScanOptions;

/// Name of the optional per-directory configuration file
pub const CONFIG_FILENAME: &str = ".namefix.toml";

/// Application configuration with layered defaults
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory to scan
    pub root: PathBuf,

    /// Whether to descend into sub-directories
    pub recursive: bool,

    /// Whether to propose folder renames as well
    pub include_folders: bool,

    /// Change log path, relative to `root` unless absolute
    pub log_file: PathBuf,

    /// Folder rename script path, relative to `root` unless absolute
    pub script_file: PathBuf,

    /// Extensions (without the dot) of files never renamed
    pub skip_extensions: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            recursive: false,
            include_folders: false,
            log_file: PathBuf::from("namefix.log"),
            script_file: PathBuf::from("namefix.cmd.log"),
            skip_extensions: vec!["exe".to_string(), "bak".to_string(), "log".to_string()],
        }
    }
}

impl Config {
    /// Load configuration for `root`: defaults, then `root/.namefix.toml`.
    pub fn load(root: &Path) -> Result<Self> {
        // Start with defaults
        let mut config = Config { root: root.to_path_buf(), ..Config::default() };

        if let Some(file_config) = Self::load_from_file(root)? {
            config.merge(file_config);
        }

        Ok(config)
    }

    /// Load configuration from .namefix.toml
    fn load_from_file(root: &Path) -> Result<Option<PartialConfig>> {
        let config_path = root.join(CONFIG_FILENAME);
        if !config_path.exists() {
            return Ok(None);
        }

        let contents = std::fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read {}", config_path.display()))?;

        let config: PartialConfig = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse {}", config_path.display()))?;

        Ok(Some(config))
    }

    /// Merge partial config into this one (partial takes precedence for specified fields)
    fn merge(&mut self, other: PartialConfig) {
        if let Some(val) = other.recursive {
            self.recursive = val;
        }
        if let Some(val) = other.include_folders {
            self.include_folders = val;
        }
        if let Some(val) = other.log_file {
            self.log_file = val;
        }
        if let Some(val) = other.script_file {
            self.script_file = val;
        }
        if let Some(val) = other.skip_extensions {
            self.skip_extensions =
                val.into_iter().map(|ext| ext.trim_start_matches('.').to_lowercase()).collect();
        }
    }

    /// Apply command-line switches. A switch can only turn an option on.
    pub fn with_flags(mut self, recursive: bool, include_folders: bool) -> Self {
        self.recursive |= recursive;
        self.include_folders |= include_folders;
        self
    }

    pub fn log_path(&self) -> PathBuf {
        self.root.join(&self.log_file)
    }

    pub fn script_path(&self) -> PathBuf {
        self.root.join(&self.script_file)
    }

    /// Traversal options; the tool's own reports are never collected.
    pub fn scan_options(&self) -> ScanOptions {
        ScanOptions {
            recursive: self.recursive,
            include_folders: self.include_folders,
            skip_extensions: self.skip_extensions.clone(),
            skip_paths: vec![self.log_path(), self.script_path()],
        }
    }
}

/// Partial configuration for deserializing from TOML with optional fields
#[derive(Debug, Deserialize)]
struct PartialConfig {
    recursive: Option<bool>,
    include_folders: Option<bool>,
    log_file: Option<PathBuf>,
    script_file: Option<PathBuf>,
    skip_extensions: Option<Vec<String>>,
}
