//! Fallback for edits no pattern detector recognizes

use super::LinePair;
use crate::similarity::line_similarity;
use docdiff_types::{Change, ChangeKind, Impact};

/// Word similarity below which a text edit is major
const MAJOR_BELOW: f64 = 50.0;

/// Word similarity below which a text edit is moderate
const MODERATE_BELOW: f64 = 80.0;

#[derive(Debug, Clone, Copy, Default)]
pub struct TextDetector;

impl TextDetector {
    /// Always produces a `text_change`
    ///
    /// A rewritten line is rated by the word similarity of its two sides. A
    /// line without a counterpart has nothing to be similar to and is minor.
    pub fn classify(&self, pair: &LinePair<'_>) -> Change {
        let impact = match pair {
            LinePair::Replaced { old, new } => {
                text_impact(line_similarity(old.normalized, new.normalized))
            }
            LinePair::Added(_) | LinePair::Removed(_) => Impact::Minor,
        };

        let description = match pair {
            LinePair::Replaced { old, new } => format!(
                "Content changed from '{}' to '{}'",
                old.original, new.original
            ),
            LinePair::Added(new) => format!("Line added: {}", new.original),
            LinePair::Removed(old) => format!("Line removed: {}", old.original),
        };

        let change = Change::new(
            ChangeKind::TextChange,
            description,
            pair.old_content(),
            pair.new_content(),
            impact,
        );
        pair.locate(change)
    }
}

fn text_impact(similarity_percentage: f64) -> Impact {
    if similarity_percentage < MAJOR_BELOW {
        Impact::Major
    } else if similarity_percentage < MODERATE_BELOW {
        Impact::Moderate
    } else {
        Impact::Minor
    }
}
