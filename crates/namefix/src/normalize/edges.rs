//! Stray separator trimming

const EDGE_CHARS: [char; 3] = ['.', '_', '-'];

fn is_edge_char(ch: char) -> bool {
    EDGE_CHARS.contains(&ch)
}

/// Strip at most one separator character from each end of `stem`.
pub fn trim_edge_once(stem: &str) -> &str {
    let stem = stem.strip_prefix(is_edge_char).unwrap_or(stem);
    stem.strip_suffix(is_edge_char).unwrap_or(stem)
}

/// Strip up to two separator characters from each end of `stem`.
pub fn trim_edges(stem: &str) -> String {
    trim_edge_once(trim_edge_once(stem)).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trim_once() {
        assert_eq!(trim_edge_once("_Notes-"), "Notes");
        assert_eq!(trim_edge_once("--Notes"), "-Notes");
        assert_eq!(trim_edge_once("Notes"), "Notes");
    }

    #[test]
    fn test_trim_twice() {
        assert_eq!(trim_edges("--Notes._"), "Notes");
        assert_eq!(trim_edges("Intro.-_"), "Intro.");
    }

    #[test]
    fn test_inner_separators_kept() {
        assert_eq!(trim_edges("Spider-Man"), "Spider-Man");
    }

    #[test]
    fn test_whitespace_blocks_trimming() {
        assert_eq!(trim_edges("Report - "), "Report - ");
    }

    #[test]
    fn test_only_separators() {
        assert_eq!(trim_edges("-"), "");
        assert_eq!(trim_edges("._-"), "");
        assert_eq!(trim_edges(""), "");
    }
}
