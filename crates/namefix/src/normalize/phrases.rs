//! Noise phrase stripping

use std::sync::LazyLock;

use regex::Regex;

use super::literal_pattern;

/// Site tags and release markers removed from every name, checked in this order.
///
/// Phrases must be lowercase. `www.sanet.st` comes before `sanet.st` so the longer
/// tag is removed whole.
pub const NOISE_PHRASES: &[&str] = &[
    "www.sanet.st",
    "softarchive.net",
    "softarchive.la",
    "sanet.st",
    "sanet..st",
    "sanet.cd",
    "sanet..cd",
    "sanet.me",
    "sanet..me",
    "snorgared",
    "avaxhome",
    "avxhom",
    "ebook",
];

static NOISE_PATTERNS: LazyLock<Vec<Regex>> =
    LazyLock::new(|| NOISE_PHRASES.iter().map(|phrase| literal_pattern(phrase)).collect());

/// Remove every known noise phrase from `stem`, ignoring case, then trim.
pub fn strip_noise_phrases(stem: &str) -> String {
    let mut result = stem.to_string();

    for (phrase, pattern) in NOISE_PHRASES.iter().zip(NOISE_PATTERNS.iter()) {
        if result.to_lowercase().contains(phrase) {
            result = pattern.replace_all(&result, "").into_owned();
        }
    }

    result.trim().to_string()
}
