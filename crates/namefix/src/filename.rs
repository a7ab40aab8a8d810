//! File name decomposition

use std::path::{Path, PathBuf};

/// A path split into directory, stem and extension.
///
/// The extension includes its leading dot and is lower-cased when it was written
/// entirely in upper case (`.PDF` becomes `.pdf`, `.Docx` is left alone).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamePath {
    pub directory: PathBuf,
    pub stem: String,
    pub extension: String,
}

impl NamePath {
    /// Decompose `path`. Returns `None` when the path has no UTF-8 file name.
    pub fn from_path(path: &Path) -> Option<Self> {
        let file_name = path.file_name()?.to_str()?;
        let directory = path.parent().map(Path::to_path_buf).unwrap_or_default();
        let (stem, extension) = split_file_name(file_name);

        Some(Self { directory, stem: stem.to_string(), extension: normalize_extension(extension) })
    }

    /// Decompose a bare file name with no directory.
    pub fn from_file_name(file_name: &str) -> Self {
        let (stem, extension) = split_file_name(file_name);
        Self {
            directory: PathBuf::new(),
            stem: stem.to_string(),
            extension: normalize_extension(extension),
        }
    }

    /// Stem and extension joined back together.
    pub fn file_name(&self) -> String {
        format!("{}{}", self.stem, self.extension)
    }

    /// The full path: directory joined with the file name.
    pub fn to_path(&self) -> PathBuf {
        self.directory.join(self.file_name())
    }
}

/// Split a file name at its last dot.
///
/// A leading dot counts (`.bashrc` is all extension), a trailing one does not
/// (`notes.` has no extension).
pub fn split_file_name(file_name: &str) -> (&str, &str) {
    match file_name.rfind('.') {
        Some(pos) if pos + 1 < file_name.len() => file_name.split_at(pos),
        _ => (file_name, ""),
    }
}

fn normalize_extension(extension: &str) -> String {
    if !extension.is_empty() && extension == extension.to_uppercase() {
        extension.to_lowercase()
    } else {
        extension.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_basic() {
        assert_eq!(split_file_name("report.pdf"), ("report", ".pdf"));
        assert_eq!(split_file_name("archive.tar.gz"), ("archive.tar", ".gz"));
    }

    #[test]
    fn test_split_without_extension() {
        assert_eq!(split_file_name("README"), ("README", ""));
        assert_eq!(split_file_name("notes."), ("notes.", ""));
        assert_eq!(split_file_name(""), ("", ""));
    }

    #[test]
    fn test_split_leading_dot() {
        assert_eq!(split_file_name(".bashrc"), ("", ".bashrc"));
    }

    #[test]
    fn test_uppercase_extension_lowered() {
        let name = NamePath::from_file_name("archive.RAR");
        assert_eq!(name.stem, "archive");
        assert_eq!(name.extension, ".rar");
    }

    #[test]
    fn test_mixed_case_extension_kept() {
        let name = NamePath::from_file_name("Letter.Docx");
        assert_eq!(name.extension, ".Docx");
    }

    #[test]
    fn test_extension_with_digits() {
        assert_eq!(NamePath::from_file_name("backup.7Z").extension, ".7z");
        assert_eq!(NamePath::from_file_name("song.mp3").extension, ".mp3");
    }

    #[test]
    fn test_from_path_keeps_directory() {
        let name = NamePath::from_path(Path::new("/books/linux/Guide.PDF")).unwrap();
        assert_eq!(name.directory, PathBuf::from("/books/linux"));
        assert_eq!(name.stem, "Guide");
        assert_eq!(name.to_path(), PathBuf::from("/books/linux/Guide.pdf"));
    }

    #[test]
    fn test_bare_name_round_trip() {
        let name = NamePath::from_file_name("plain.txt");
        assert_eq!(name.file_name(), "plain.txt");
        assert_eq!(name.to_path(), PathBuf::from("plain.txt"));
    }
}
