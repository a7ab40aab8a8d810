//! Known-term correction

use std::sync::LazyLock;

use regex::{NoExpand, Regex};

use super::literal_pattern;

/// What happens to a matched trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TermAction {
    /// Replace with this exact text.
    Replace(&'static str),
    /// Remove the match.
    Delete,
}

/// One entry of the term table. Triggers are lowercase and matched ignoring case.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TermRule {
    pub trigger: &'static str,
    pub action: TermAction,
}

impl TermRule {
    const fn replace(trigger: &'static str, replacement: &'static str) -> Self {
        Self { trigger, action: TermAction::Replace(replacement) }
    }

    const fn delete(trigger: &'static str) -> Self {
        Self { trigger, action: TermAction::Delete }
    }

    fn replacement(&self) -> &'static str {
        match self.action {
            TermAction::Replace(text) => text,
            TermAction::Delete => "",
        }
    }
}

/// Term corrections, applied in this order. A later rule can match text written by
/// an earlier one (`node js` becomes `Node.js`, which `.js` then sees).
pub const TERM_RULES: &[TermRule] = &[
    TermRule::replace("asp net", "ASP.Net"),
    TermRule::replace("4th", "4th"),
    TermRule::replace("5th", "5th"),
    TermRule::replace("6th", "6th"),
    TermRule::replace("2nd", "2nd"),
    TermRule::replace("3rd", "3rd"),
    TermRule::replace("iphone", "iPhone"),
    TermRule::replace("ipad", "iPad"),
    TermRule::replace("ipod", "iPod"),
    TermRule::replace("dotnet", ".Net"),
    TermRule::replace("javascript", "JavaScript"),
    TermRule::replace("jquery", "jQuery"),
    TermRule::replace("csharp", "C#"),
    TermRule::replace("docbook", "DocBook"),
    TermRule::replace("powershell", "PowerShell"),
    TermRule::replace("couchdb", "CouchDB"),
    TermRule::replace("node js", "Node.js"),
    TermRule::replace("node.js", "Node.js"),
    TermRule::replace(".js", ".js"),
    TermRule::replace("asp.net", "ASP.Net"),
    TermRule::replace("ibook", "iBook"),
    TermRule::replace("cplusplus", "C++"),
    TermRule::replace(" ios ", " IOS "),
    TermRule::replace("l i n q", "LINQ"),
    TermRule::replace("s q l", "SQL"),
    TermRule::replace("r e a d m e", "README"),
    TermRule::replace("u k ", "UK "),
    TermRule::replace("p c ", "PC "),
    TermRule::replace("oreilly", "O'Reilly"),
    TermRule::delete("a novel"),
];

static TERM_PATTERNS: LazyLock<Vec<Regex>> =
    LazyLock::new(|| TERM_RULES.iter().map(|rule| literal_pattern(rule.trigger)).collect());

/// Apply every term rule to `stem` in table order.
///
/// Matching ignores case; the replacement text is inserted exactly as written.
/// All matches for one rule are found before any of them is replaced.
pub fn correct_terms(stem: &str) -> String {
    let mut result = stem.to_string();

    for (rule, pattern) in TERM_RULES.iter().zip(TERM_PATTERNS.iter()) {
        if result.to_lowercase().contains(rule.trigger) {
            result = pattern.replace_all(&result, NoExpand(rule.replacement())).into_owned();
        }
    }

    result
}
