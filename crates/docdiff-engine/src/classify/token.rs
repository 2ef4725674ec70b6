//! Set-based detectors for version, date, URL and email tokens

use super::patterns;
use super::{ChangeDetector, LinePair};
use docdiff_types::{Change, ChangeKind, Impact};
use std::fmt;

/// A detector that extracts one kind of token from each line and fires when
/// the two token sets differ
#[derive(Clone, Copy)]
pub struct TokenDetector {
    pub kind: ChangeKind,
    pub label: &'static str,
    pub impact: Impact,
    pub extract: fn(&str) -> Vec<&str>,
}

impl TokenDetector {
    pub const VERSION: Self = Self {
        kind: ChangeKind::VersionChange,
        label: "Version",
        impact: Impact::Moderate,
        extract: patterns::versions,
    };

    pub const DATE: Self = Self {
        kind: ChangeKind::DateChange,
        label: "Date",
        impact: Impact::Moderate,
        extract: patterns::dates,
    };

    pub const URL: Self = Self {
        kind: ChangeKind::UrlChange,
        label: "URL",
        impact: Impact::Minor,
        extract: patterns::urls,
    };

    pub const EMAIL: Self = Self {
        kind: ChangeKind::EmailChange,
        label: "Email",
        impact: Impact::Minor,
        extract: patterns::emails,
    };
}

impl fmt::Debug for TokenDetector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenDetector")
            .field("kind", &self.kind)
            .field("impact", &self.impact)
            .finish()
    }
}

impl ChangeDetector for TokenDetector {
    fn try_classify(&self, pair: &LinePair<'_>) -> Option<Change> {
        let (old, new) = pair.both()?;
        let old_tokens = distinct((self.extract)(old.original));
        let new_tokens = distinct((self.extract)(new.original));

        if old_tokens.is_empty() || new_tokens.is_empty() {
            return None;
        }

        let removed = only_in(&old_tokens, &new_tokens);
        let added = only_in(&new_tokens, &old_tokens);
        if removed.is_empty() && added.is_empty() {
            return None;
        }

        let change = Change::new(
            self.kind,
            format!(
                "{} changed from {} to {}",
                self.label,
                listing(&removed),
                listing(&added)
            ),
            old.original,
            new.original,
            self.impact,
        )
        .with_values(removed, added);

        Some(pair.locate(change))
    }
}

/// Tokens in first-seen order without repeats
fn distinct(tokens: Vec<&str>) -> Vec<&str> {
    let mut seen = Vec::with_capacity(tokens.len());
    for token in tokens {
        if !seen.contains(&token) {
            seen.push(token);
        }
    }
    seen
}

fn only_in(side: &[&str], other: &[&str]) -> Vec<String> {
    side.iter()
        .filter(|token| !other.contains(*token))
        .map(|token| token.to_string())
        .collect()
}

fn listing(values: &[String]) -> String {
    if values.is_empty() {
        "(none)".to_string()
    } else {
        values.join(", ")
    }
}
