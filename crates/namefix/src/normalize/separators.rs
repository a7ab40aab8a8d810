//! Word separator normalization

use std::sync::LazyLock;

use regex::Regex;

/// Characters used as word separators, in the order they are checked.
pub const SEPARATORS: [char; 3] = ['.', '-', '_'];

static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace pattern is valid"));

/// Turn repeated separators into spaces, then collapse whitespace runs.
///
/// Each separator is handled on its own: when it occurs more than once every
/// occurrence becomes a space, a single occurrence is kept as punctuation
/// (`Spider-Man` stays hyphenated, `my.holiday.photos` does not).
pub fn collapse_repeated_separators(stem: &str) -> String {
    let mut result = stem.to_string();

    for separator in SEPARATORS {
        if result.matches(separator).count() > 1 {
            result = result.replace(separator, " ");
        }
    }

    collapse_whitespace(&result)
}

/// Replace every run of whitespace with a single space.
pub fn collapse_whitespace(text: &str) -> String {
    WHITESPACE_RUN.replace_all(text, " ").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repeated_dots() {
        assert_eq!(collapse_repeated_separators("my.holiday.photos"), "my holiday photos");
    }

    #[test]
    fn test_single_separators_kept() {
        assert_eq!(collapse_repeated_separators("Spider-Man"), "Spider-Man");
        assert_eq!(collapse_repeated_separators("snake_case"), "snake_case");
        assert_eq!(collapse_repeated_separators("Vol.2"), "Vol.2");
    }

    #[test]
    fn test_separators_counted_independently() {
        assert_eq!(
            collapse_repeated_separators("the-matrix_reloaded.2003."),
            "the-matrix_reloaded 2003 "
        );
        assert_eq!(collapse_repeated_separators("a_b_c-d"), "a b c-d");
    }

    #[test]
    fn test_mixed_repeats() {
        assert_eq!(collapse_repeated_separators("a.b.c-d-e_f_g"), "a b c d e f g");
    }

    #[test]
    fn test_whitespace_collapsed() {
        assert_eq!(collapse_repeated_separators("two  spaces\tand\ttabs"), "two spaces and tabs");
        assert_eq!(collapse_repeated_separators("a__b"), "a b");
    }

    #[test]
    fn test_empty() {
        assert_eq!(collapse_repeated_separators(""), "");
        assert_eq!(collapse_whitespace(""), "");
    }
}
