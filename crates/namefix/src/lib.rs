//! Batch filename normalization
//!
//! This library turns noisy, inconsistently formatted file names (release tags,
//! dotted or underscored words, concatenated camel case, all-caps) into readable,
//! consistently capitalized ones. The [`normalize`] module holds the name pipeline;
//! the remaining modules discover entries on disk, report proposed changes and
//! apply renames.

pub mod config;
pub mod entry;
pub mod error;
pub mod filename;
pub mod normalize;
pub mod rename;
pub mod report;
pub mod scan;
pub mod theme;

pub use config::Config;
pub use entry::{Entry, EntryKind};
pub use error::{RenameError, ReportError, ScanError};
pub use filename::NamePath;
pub use normalize::{normalize_entries, normalize_entry, normalize_name, Normalized};
pub use rename::{apply_renames, RenameOutcome};
pub use scan::{discover, ScanOptions};

/// Re-export common error types
pub use anyhow::{Error, Result};
