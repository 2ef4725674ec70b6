//! Structural shift detection
//!
//! A line removed in one place and inserted verbatim (after normalization)
//! somewhere else has moved, not changed. Those lines are reported as
//! `structural_shift` changes and withdrawn from classification; whatever is
//! left over becomes the classifier's residue.

use crate::align::LineEditOp;
use crate::classify::{LinePair, SourceLine};
use crate::tokenize::NormalizedText;
use docdiff_types::{Change, ChangeKind, Impact};
use std::collections::{HashMap, HashSet};

/// Moved lines plus the edits still to be classified
#[derive(Debug, Clone, PartialEq)]
pub struct ShiftAnalysis<'a> {
    pub shifts: Vec<Change>,
    pub residue: Vec<LinePair<'a>>,
}

/// Separate moved lines from genuine edits
///
/// Every removed old line is matched against the whole set of inserted new
/// lines; among identical candidates the one closest to its old position
/// wins (the earlier one on a tie). Blank lines never count as moved and
/// never reach the residue.
///
/// Remaining lines pair up position by position inside each edit op. What is
/// still left then pairs with the nearest unmatched line of the opposite side,
/// so only lines without any counterpart end up as `Removed` or `Added`.
pub fn detect_shifts<'a>(
    ops: &[LineEditOp],
    old: &'a NormalizedText,
    new: &'a NormalizedText,
) -> ShiftAnalysis<'a> {
    let removed: Vec<usize> = ops
        .iter()
        .filter(|op| !op.is_equal())
        .flat_map(|op| op.old_range())
        .filter(|&i| !old.is_blank(i))
        .collect();

    let mut inserted: HashMap<&str, Vec<usize>> = HashMap::new();
    for j in ops
        .iter()
        .filter(|op| !op.is_equal())
        .flat_map(|op| op.new_range())
        .filter(|&j| !new.is_blank(j))
    {
        inserted.entry(new.normalized(j)).or_default().push(j);
    }

    let mut moved_old = HashSet::new();
    let mut moved_new = HashSet::new();
    let mut shifts = Vec::new();

    for i in removed {
        let Some(candidates) = inserted.get(old.normalized(i)) else {
            continue;
        };
        let nearest = candidates
            .iter()
            .copied()
            .filter(|j| !moved_new.contains(j))
            .min_by_key(|&j| (j.abs_diff(i), j));

        if let Some(j) = nearest {
            moved_old.insert(i);
            moved_new.insert(j);
            shifts.push(
                Change::new(
                    ChangeKind::StructuralShift,
                    format!("Line moved from position {} to {}", i + 1, j + 1),
                    old.original(i),
                    new.original(j),
                    Impact::Minor,
                )
                .with_lines(Some(i), Some(j)),
            );
        }
    }

    let mut residue = Vec::new();
    let mut unpaired_old = Vec::new();
    let mut unpaired_new = Vec::new();
    for op in ops.iter().filter(|op| !op.is_equal()) {
        let old_left: Vec<SourceLine<'a>> = op
            .old_range()
            .filter(|i| !moved_old.contains(i) && !old.is_blank(*i))
            .map(|i| source_line(old, i))
            .collect();
        let new_left: Vec<SourceLine<'a>> = op
            .new_range()
            .filter(|j| !moved_new.contains(j) && !new.is_blank(*j))
            .map(|j| source_line(new, j))
            .collect();

        let paired = old_left.len().min(new_left.len());
        residue.extend(
            old_left
                .iter()
                .zip(&new_left)
                .map(|(&old, &new)| LinePair::Replaced { old, new }),
        );
        unpaired_old.extend_from_slice(&old_left[paired..]);
        unpaired_new.extend_from_slice(&new_left[paired..]);
    }

    // Leftovers from different ops pair with the nearest line of the opposite kind
    for old_line in unpaired_old {
        let nearest = unpaired_new
            .iter()
            .enumerate()
            .min_by_key(|(_, new_line)| (new_line.index.abs_diff(old_line.index), new_line.index))
            .map(|(position, _)| position);

        match nearest {
            Some(position) => residue.push(LinePair::Replaced {
                old: old_line,
                new: unpaired_new.remove(position),
            }),
            None => residue.push(LinePair::Removed(old_line)),
        }
    }
    residue.extend(unpaired_new.into_iter().map(LinePair::Added));

    ShiftAnalysis { shifts, residue }
}

fn source_line(text: &NormalizedText, index: usize) -> SourceLine<'_> {
    SourceLine {
        index,
        original: text.original(index),
        normalized: text.normalized(index),
    }
}
