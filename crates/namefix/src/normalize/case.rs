//! Title casing
//!
//! Follows the en-AU convention of the .NET `TextInfo.ToTitleCase` routine the
//! tool's naming rules were written against, which differs from capitalizing
//! whitespace-delimited words:
//!
//! - A word starts at any letter that follows a word separator. Whitespace,
//!   punctuation and symbols separate words; digits and combining marks do not, so
//!   `2nd` becomes `2Nd` and `mp3player` becomes `Mp3player`.
//! - The first letter is title-cased, which for the Unicode digraphs (`ǆ`, `ǉ`, `ǌ`,
//!   `ǳ`) is not the same as upper-casing.
//! - The rest of a word is lower-cased, unless the word has no lowercase letter at
//!   all: `NASA` stays `NASA`.
//! - Text after an apostrophe is always lower-cased: `o'reilly` becomes `O'reilly`.

use unicode_normalization::char::is_combining_mark;

/// Title-case every word in `text`.
pub fn title_case(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut result = String::with_capacity(text.len());
    let mut i = 0;

    while i < chars.len() {
        let first = chars[i];
        if !first.is_alphabetic() {
            result.push(first);
            i += 1;
            continue;
        }

        result.push(titlecase_char(first));
        i += 1;

        let mut segment_start = i;
        let mut has_lowercase = first.is_lowercase();

        while i < chars.len() {
            let ch = chars[i];
            if ch.is_alphabetic() {
                has_lowercase |= ch.is_lowercase();
                i += 1;
            } else if ch == '\'' {
                i += 1;
                push_segment(&mut result, &chars[segment_start..i], has_lowercase);
                segment_start = i;
                has_lowercase = true;
            } else if is_word_separator(ch) {
                break;
            } else {
                i += 1;
            }
        }

        push_segment(&mut result, &chars[segment_start..i], has_lowercase);
    }

    result
}

fn push_segment(result: &mut String, segment: &[char], lowercase: bool) {
    if lowercase {
        result.extend(segment.iter().flat_map(|ch| ch.to_lowercase()));
    } else {
        result.extend(segment.iter());
    }
}

fn is_word_separator(ch: char) -> bool {
    !(ch.is_alphanumeric() || is_combining_mark(ch))
}

fn titlecase_char(ch: char) -> char {
    match ch {
        '\u{01C4}'..='\u{01C6}' => '\u{01C5}',
        '\u{01C7}'..='\u{01C9}' => '\u{01C8}',
        '\u{01CA}'..='\u{01CC}' => '\u{01CB}',
        '\u{01F1}'..='\u{01F3}' => '\u{01F2}',
        _ => {
            let mut upper = ch.to_uppercase();
            match (upper.next(), upper.next()) {
                (Some(single), None) => single,
                _ => ch,
            }
        }
    }
}
