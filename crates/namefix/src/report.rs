//! Change log and folder rename script

use chrono::{DateTime, Local};
use serde::Serialize;
use std::fs;
use std::path::Path;

use crate::entry::Entry;
use crate::error::ReportError;

/// Render the before/after log for every changed entry.
pub fn render_change_log(entries: &[Entry], generated: DateTime<Local>) -> String {
    let changed: Vec<&Entry> = entries.iter().filter(|e| e.changed).collect();

    let mut out = format!("# namefix: {} change(s), {}\n\n", changed.len(), generated.to_rfc3339());
    for entry in changed {
        out.push_str(&format!(
            "{}\nto\n{}\n\n\n",
            entry.original_path.display(),
            entry.proposed_path.display()
        ));
    }
    out
}

/// Write the change log, returning the number of changes recorded.
pub fn write_change_log(path: &Path, entries: &[Entry]) -> Result<usize, ReportError> {
    let content = render_change_log(entries, Local::now());
    write_file(path, &content)?;
    Ok(entries.iter().filter(|e| e.changed).count())
}

/// Render a shell script renaming every changed folder, deepest first so that a
/// parent rename never invalidates a path further down the script.
pub fn render_folder_script(entries: &[Entry]) -> String {
    let mut folders: Vec<&Entry> = entries.iter().filter(|e| !e.is_file() && e.changed).collect();
    folders.sort_by(|a, b| b.depth().cmp(&a.depth()));

    let mut out = String::from("#!/bin/sh\n");
    for entry in folders {
        out.push_str(&format!(
            "mv -- {} {}\n",
            shell_quote(&entry.original_path.to_string_lossy()),
            shell_quote(&entry.proposed_path.to_string_lossy())
        ));
    }
    out
}

/// Write the folder rename script, returning the number of renames in it.
pub fn write_folder_script(path: &Path, entries: &[Entry]) -> Result<usize, ReportError> {
    write_file(path, &render_folder_script(entries))?;
    Ok(entries.iter().filter(|e| !e.is_file() && e.changed).count())
}

#[derive(Serialize)]
struct JsonReport<'a> {
    generated: String,
    total: usize,
    changed: usize,
    entries: &'a [Entry],
}

/// Render every entry, changed or not, as pretty JSON.
pub fn render_json(entries: &[Entry], generated: DateTime<Local>) -> Result<String, ReportError> {
    let report = JsonReport {
        generated: generated.to_rfc3339(),
        total: entries.len(),
        changed: entries.iter().filter(|e| e.changed).count(),
        entries,
    };
    Ok(serde_json::to_string_pretty(&report)?)
}

fn write_file(path: &Path, content: &str) -> Result<(), ReportError> {
    fs::write(path, content).map_err(|source| ReportError::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// Quote `text` for a POSIX shell.
fn shell_quote(text: &str) -> String {
    format!("'{}'", text.replace('\'', r"'\''"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn changed_file(id: usize, from: &str, to: &str) -> Entry {
        let mut entry = Entry::file(id, from);
        entry.propose(PathBuf::from(to));
        entry
    }

    fn changed_folder(id: usize, from: &str, to: &str) -> Entry {
        let mut entry = Entry::folder(id, from);
        entry.propose(PathBuf::from(to));
        entry
    }

    #[test]
    fn test_change_log_lists_only_changed() {
        let entries = vec![
            changed_file(0, "/d/a_b_c.pdf", "/d/A B C.pdf"),
            Entry::file(1, "/d/Clean.pdf"),
        ];
        let log = render_change_log(&entries, Local::now());
        assert!(log.starts_with("# namefix: 1 change(s), "));
        assert!(log.contains("/d/a_b_c.pdf\nto\n/d/A B C.pdf\n\n\n"));
        assert!(!log.contains("Clean.pdf"));
    }

    #[test]
    fn test_change_log_empty() {
        let log = render_change_log(&[], Local::now());
        assert!(log.starts_with("# namefix: 0 change(s)"));
    }

    #[test]
    fn test_write_change_log() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("namefix.log");
        let entries = vec![changed_file(0, "/d/x_y_z.txt", "/d/X Y Z.txt")];

        let count = write_change_log(&path, &entries).unwrap();

        assert_eq!(count, 1);
        assert!(fs::read_to_string(&path).unwrap().contains("/d/X Y Z.txt"));
    }

    #[test]
    fn test_write_change_log_bad_path() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("missing/namefix.log");
        let err = write_change_log(&path, &[]).unwrap_err();
        assert!(matches!(err, ReportError::Write { .. }));
    }

    #[test]
    fn test_folder_script_deepest_first() {
        let entries = vec![
            changed_folder(0, "/m/old_music", "/m/Old Music"),
            changed_folder(1, "/m/old_music/jazz_club", "/m/old_music/Jazz Club"),
            changed_file(2, "/m/a_b_c.mp3", "/m/A B C.mp3"),
        ];
        let script = render_folder_script(&entries);
        let lines: Vec<&str> = script.lines().collect();
        assert_eq!(lines[0], "#!/bin/sh");
        assert_eq!(lines[1], "mv -- '/m/old_music/jazz_club' '/m/old_music/Jazz Club'");
        assert_eq!(lines[2], "mv -- '/m/old_music' '/m/Old Music'");
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn test_shell_quote_apostrophe() {
        assert_eq!(shell_quote("it's"), r"'it'\''s'");
    }

    #[test]
    fn test_json_report() {
        let entries = vec![
            changed_file(0, "/d/a_b_c.pdf", "/d/A B C.pdf"),
            Entry::file(1, "/d/Ok.pdf"),
        ];
        let json = render_json(&entries, Local::now()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["total"], 2);
        assert_eq!(value["changed"], 1);
        assert_eq!(value["entries"][0]["proposed_path"], "/d/A B C.pdf");
        assert_eq!(value["entries"][1]["changed"], false);
    }
}
