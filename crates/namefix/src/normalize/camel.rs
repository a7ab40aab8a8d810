//! Camel case splitting

/// Split concatenated words such as `APracticalGuideToLinux`.
///
/// An all-caps stem is lower-cased instead, whether or not it has spaces: splitting
/// it would put a space between every letter, and title-casing keeps words with no
/// lowercase letter as they are. Otherwise the stem is split only when it contains no
/// space at all.
pub fn split_camel_case(stem: &str) -> String {
    if stem == stem.to_uppercase() {
        return stem.to_lowercase();
    }

    if stem.contains(' ') {
        return stem.to_string();
    }

    let mut result = String::with_capacity(stem.len() + stem.len() / 4);
    for (i, ch) in stem.chars().enumerate() {
        if i > 0 && ch.is_uppercase() {
            result.push(' ');
        }
        result.push(ch);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_concatenated_words() {
        assert_eq!(split_camel_case("APracticalGuideToLinux"), "A Practical Guide To Linux");
        assert_eq!(
            split_camel_case("TheSamsungGalaxyBookVol3RevisedEdition2014"),
            "The Samsung Galaxy Book Vol3 Revised Edition2014"
        );
    }

    #[test]
    fn test_lowercase_first_letter() {
        assert_eq!(split_camel_case("iPhoneApps"), "i Phone Apps");
    }

    #[test]
    fn test_names_with_spaces_untouched() {
        assert_eq!(split_camel_case("Mostly ConcatenatedWords"), "Mostly ConcatenatedWords");
    }

    #[test]
    fn test_all_caps_lowercased() {
        assert_eq!(split_camel_case("LINUXBIBLE"), "linuxbible");
        assert_eq!(split_camel_case("IPHONE PROGRAMMING GUIDE"), "iphone programming guide");
    }

    #[test]
    fn test_no_letters() {
        assert_eq!(split_camel_case("2003"), "2003");
        assert_eq!(split_camel_case(""), "");
    }

    #[test]
    fn test_single_dot_still_split() {
        assert_eq!(split_camel_case("Vol.TwoNotes"), "Vol. Two Notes");
    }
}
