//! Numeric value changes

use super::patterns::numbers;
use super::{ChangeDetector, LinePair};
use docdiff_types::{Change, ChangeKind, Impact};

/// Relative delta above which a numeric change is major
const MAJOR_RELATIVE_DELTA: f64 = 0.5;

/// Ratio at which a value is considered to have changed order of magnitude
const MAGNITUDE_RATIO: f64 = 10.0;

/// Flags lines whose numbers, compared position by position, differ in value
#[derive(Debug, Clone, Copy, Default)]
pub struct NumericDetector;

impl ChangeDetector for NumericDetector {
    fn try_classify(&self, pair: &LinePair<'_>) -> Option<Change> {
        let (old, new) = pair.both()?;
        let old_numbers = numbers(old.original);
        let new_numbers = numbers(new.original);

        if old_numbers.is_empty() || old_numbers.len() != new_numbers.len() {
            return None;
        }

        let differing: Vec<(&str, &str, Impact)> = old_numbers
            .iter()
            .zip(&new_numbers)
            .filter_map(|(&old_token, &new_token)| {
                let old_value: f64 = old_token.parse().ok()?;
                let new_value: f64 = new_token.parse().ok()?;
                (old_value != new_value).then(|| (old_token, new_token, value_impact(old_value, new_value)))
            })
            .collect();

        let impact = differing.iter().map(|(_, _, impact)| *impact).max()?;
        let old_values: Vec<String> = differing.iter().map(|(o, _, _)| o.to_string()).collect();
        let new_values: Vec<String> = differing.iter().map(|(_, n, _)| n.to_string()).collect();

        let change = Change::new(
            ChangeKind::NumericChange,
            format!(
                "Numeric value changed from {} to {}",
                old_values.join(", "),
                new_values.join(", ")
            ),
            old.original,
            new.original,
            impact,
        )
        .with_values(old_values, new_values);

        Some(pair.locate(change))
    }
}

/// Major when the value moves by more than half, or by an order of magnitude
fn value_impact(old: f64, new: f64) -> Impact {
    if old == 0.0 {
        // Any move away from zero is an unbounded relative change
        return Impact::Major;
    }

    let relative_delta = (new - old).abs() / old.abs();
    let ratio = (new / old).abs();

    if relative_delta > MAJOR_RELATIVE_DELTA
        || ratio >= MAGNITUDE_RATIO
        || ratio <= 1.0 / MAGNITUDE_RATIO
    {
        Impact::Major
    } else {
        Impact::Minor
    }
}
