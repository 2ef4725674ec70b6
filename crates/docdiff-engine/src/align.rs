//! Line alignment
//!
//! Computes an edit script between two line sequences with Ratcliff/Obershelp
//! matching on whole lines: find the longest run of equal lines, then recurse
//! on the regions to its left and right. Among equally long runs the one that
//! starts earliest in the old sequence wins (then earliest in the new one), so
//! the output is stable for identical inputs.
//!
//! The returned ops cover both sequences completely: every old index and every
//! new index falls in exactly one op, and ops appear in document order.

use std::collections::HashMap;
use std::hash::Hash;
use std::iter;
use std::ops::Range;

/// One step of the edit script, carrying the line ranges it covers
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineEditOp {
    Equal { old: Range<usize>, new: Range<usize> },
    /// Lines present only in the new sequence; `old` is empty
    Insert { old: Range<usize>, new: Range<usize> },
    /// Lines present only in the old sequence; `new` is empty
    Delete { old: Range<usize>, new: Range<usize> },
    Replace { old: Range<usize>, new: Range<usize> },
}

impl LineEditOp {
    pub fn old_range(&self) -> Range<usize> {
        match self {
            LineEditOp::Equal { old, .. }
            | LineEditOp::Insert { old, .. }
            | LineEditOp::Delete { old, .. }
            | LineEditOp::Replace { old, .. } => old.clone(),
        }
    }

    pub fn new_range(&self) -> Range<usize> {
        match self {
            LineEditOp::Equal { new, .. }
            | LineEditOp::Insert { new, .. }
            | LineEditOp::Delete { new, .. }
            | LineEditOp::Replace { new, .. } => new.clone(),
        }
    }

    pub fn is_equal(&self) -> bool {
        matches!(self, LineEditOp::Equal { .. })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Block {
    old_start: usize,
    new_start: usize,
    len: usize,
}

struct Matcher<'a, T> {
    old: &'a [T],
    /// Positions of every line of the new sequence, ascending
    positions: HashMap<&'a T, Vec<usize>>,
}

impl<'a, T: Eq + Hash> Matcher<'a, T> {
    fn new(old: &'a [T], new: &'a [T]) -> Self {
        let mut positions: HashMap<&T, Vec<usize>> = HashMap::new();
        for (j, line) in new.iter().enumerate() {
            positions.entry(line).or_default().push(j);
        }
        Self { old, positions }
    }

    /// Longest run of equal lines inside the two windows
    fn longest_match(&self, old: Range<usize>, new: Range<usize>) -> Block {
        let mut best = Block {
            old_start: old.start,
            new_start: new.start,
            len: 0,
        };
        // run_lengths[j] = length of the equal run ending at (i - 1, j)
        let mut run_lengths: HashMap<usize, usize> = HashMap::new();

        for i in old {
            let mut next_lengths = HashMap::new();
            if let Some(positions) = self.positions.get(&self.old[i]) {
                for &j in positions {
                    if j < new.start {
                        continue;
                    }
                    if j >= new.end {
                        break;
                    }
                    let len = j
                        .checked_sub(1)
                        .and_then(|prev| run_lengths.get(&prev))
                        .copied()
                        .unwrap_or(0)
                        + 1;
                    next_lengths.insert(j, len);
                    if len > best.len {
                        best = Block {
                            old_start: i + 1 - len,
                            new_start: j + 1 - len,
                            len,
                        };
                    }
                }
            }
            run_lengths = next_lengths;
        }

        best
    }

    /// All matching blocks in document order, adjacent blocks merged
    fn matching_blocks(&self, new_len: usize) -> Vec<Block> {
        let mut pending = vec![(0..self.old.len(), 0..new_len)];
        let mut blocks = Vec::new();

        while let Some((old, new)) = pending.pop() {
            let block = self.longest_match(old.clone(), new.clone());
            if block.len == 0 {
                continue;
            }
            if old.start < block.old_start && new.start < block.new_start {
                pending.push((old.start..block.old_start, new.start..block.new_start));
            }
            let old_end = block.old_start + block.len;
            let new_end = block.new_start + block.len;
            if old_end < old.end && new_end < new.end {
                pending.push((old_end..old.end, new_end..new.end));
            }
            blocks.push(block);
        }

        blocks.sort_by_key(|block| (block.old_start, block.new_start));

        let mut merged: Vec<Block> = Vec::with_capacity(blocks.len());
        for block in blocks {
            match merged.last_mut() {
                Some(last)
                    if last.old_start + last.len == block.old_start
                        && last.new_start + last.len == block.new_start =>
                {
                    last.len += block.len;
                }
                _ => merged.push(block),
            }
        }
        merged
    }
}

/// Compute the edit script turning `old` into `new`
///
/// Lines are compared with `Eq`; callers pass already-normalized lines so the
/// comparison honours case and whitespace settings.
pub fn align<T: Eq + Hash>(old: &[T], new: &[T]) -> Vec<LineEditOp> {
    let matcher = Matcher::new(old, new);
    let blocks = matcher.matching_blocks(new.len());
    let sentinel = Block {
        old_start: old.len(),
        new_start: new.len(),
        len: 0,
    };

    let mut ops = Vec::new();
    let (mut i, mut j) = (0, 0);

    for block in blocks.iter().chain(iter::once(&sentinel)) {
        let old_gap = i..block.old_start;
        let new_gap = j..block.new_start;
        match (old_gap.is_empty(), new_gap.is_empty()) {
            (false, false) => ops.push(LineEditOp::Replace {
                old: old_gap,
                new: new_gap,
            }),
            (false, true) => ops.push(LineEditOp::Delete {
                old: old_gap,
                new: new_gap,
            }),
            (true, false) => ops.push(LineEditOp::Insert {
                old: old_gap,
                new: new_gap,
            }),
            (true, true) => {}
        }

        i = block.old_start + block.len;
        j = block.new_start + block.len;
        if block.len > 0 {
            ops.push(LineEditOp::Equal {
                old: block.old_start..i,
                new: block.new_start..j,
            });
        }
    }

    ops
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn lines(text: &str) -> Vec<&str> {
        if text.is_empty() {
            Vec::new()
        } else {
            text.split(' ').collect()
        }
    }

    #[test]
    fn test_identical_sequences_are_one_equal_op() {
        let a = lines("a b c");
        assert_eq!(
            align(&a, &a),
            vec![LineEditOp::Equal {
                old: 0..3,
                new: 0..3
            }]
        );
    }

    #[test]
    fn test_empty_sequences_produce_no_ops() {
        let empty: Vec<&str> = Vec::new();
        assert!(align(&empty, &empty).is_empty());
    }

    #[test]
    fn test_everything_inserted() {
        let empty: Vec<&str> = Vec::new();
        assert_eq!(
            align(&empty, &lines("a b")),
            vec![LineEditOp::Insert {
                old: 0..0,
                new: 0..2
            }]
        );
    }

    #[test]
    fn test_everything_deleted() {
        let empty: Vec<&str> = Vec::new();
        assert_eq!(
            align(&lines("a b"), &empty),
            vec![LineEditOp::Delete {
                old: 0..2,
                new: 0..0
            }]
        );
    }

    #[test]
    fn test_single_line_replaced() {
        let ops = align(&lines("a b c"), &lines("a x c"));
        assert_eq!(
            ops,
            vec![
                LineEditOp::Equal {
                    old: 0..1,
                    new: 0..1
                },
                LineEditOp::Replace {
                    old: 1..2,
                    new: 1..2
                },
                LineEditOp::Equal {
                    old: 2..3,
                    new: 2..3
                },
            ]
        );
    }

    #[test]
    fn test_insert_in_middle() {
        let ops = align(&lines("a c"), &lines("a b c"));
        assert_eq!(
            ops,
            vec![
                LineEditOp::Equal {
                    old: 0..1,
                    new: 0..1
                },
                LineEditOp::Insert {
                    old: 1..1,
                    new: 1..2
                },
                LineEditOp::Equal {
                    old: 1..2,
                    new: 2..3
                },
            ]
        );
    }

    #[test]
    fn test_adjacent_deletions_and_insertions_merge_into_replace() {
        let ops = align(&lines("a x y d"), &lines("a p d"));
        assert_eq!(
            ops[1],
            LineEditOp::Replace {
                old: 1..3,
                new: 1..2
            }
        );
        assert_eq!(ops.len(), 3);
    }

    #[test]
    fn test_longest_block_wins_over_earlier_short_one() {
        // "c d e f" is the longest run and stays matched; "a b" moves
        let ops = align(&lines("a b c d e f"), &lines("c d e f a b"));
        assert!(ops.contains(&LineEditOp::Equal {
            old: 2..6,
            new: 0..4
        }));
    }

    #[test]
    fn test_tie_prefers_earliest_old_match() {
        // "a" and "b" are both single-line candidates; "a" starts first in old
        let ops = align(&lines("a b"), &lines("b a"));
        assert_eq!(
            ops,
            vec![
                LineEditOp::Insert {
                    old: 0..0,
                    new: 0..1
                },
                LineEditOp::Equal {
                    old: 0..1,
                    new: 1..2
                },
                LineEditOp::Delete {
                    old: 1..2,
                    new: 2..2
                },
            ]
        );
    }

    #[test]
    fn test_repeated_lines_align_in_order() {
        let ops = align(&lines("x x x"), &lines("x x"));
        assert_eq!(
            ops,
            vec![
                LineEditOp::Equal {
                    old: 0..2,
                    new: 0..2
                },
                LineEditOp::Delete {
                    old: 2..3,
                    new: 2..2
                },
            ]
        );
    }

    #[test]
    fn test_op_ranges() {
        let op = LineEditOp::Replace {
            old: 1..3,
            new: 2..4,
        };
        assert_eq!(op.old_range(), 1..3);
        assert_eq!(op.new_range(), 2..4);
        assert!(!op.is_equal());
    }
}
