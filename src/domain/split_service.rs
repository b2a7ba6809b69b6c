//! Split calculator.
//!
//! Runs once at expense-creation time to turn a total amount plus a
//! chosen split strategy into per-participant absolute shares. The
//! resolved shares are what gets persisted; they are never recomputed
//! for historical expenses.

use std::collections::HashMap;

use log::debug;
use serde::{Deserialize, Serialize};

use super::models::expense::Participant;

/// Tolerance for split validation, chosen to absorb floating rounding
/// of two-decimal currency math.
pub const SPLIT_TOLERANCE: f64 = 0.01;

/// How a total amount is divided among participants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SplitStrategy {
    /// Everyone pays `amount / participant_count`; no inputs needed.
    Equal,
    /// Per-participant percentages that must sum to 100.
    Percentage,
    /// Per-participant absolute amounts that must sum to the total.
    ExactAmount,
    /// Per-participant relative weights, default 1.
    Shares,
}

/// Why a split was rejected before persistence.
#[derive(Debug, PartialEq, thiserror::Error)]
pub enum SplitError {
    #[error("Select at least one participant")]
    NoParticipants,
    #[error("Percentages must add up to 100% (got {total:.2}%)")]
    PercentagesDoNotSum { total: f64 },
    #[error("Amounts must add up to {expected:.2} (got {total:.2})")]
    AmountsDoNotSum { total: f64, expected: f64 },
    #[error("Share weights must add up to more than zero")]
    NonPositiveWeightSum,
}

/// Parse one raw participant input.
///
/// A missing or blank entry falls back to `default`; an entry that is
/// present but unparseable or non-finite degrades to 0 rather than
/// failing, so a stray character can at worst make the sum check
/// reject the split with a readable message.
fn parse_input(raw: Option<&String>, default: f64) -> f64 {
    let raw = match raw {
        Some(s) if !s.trim().is_empty() => s,
        _ => return default,
    };
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => 0.0,
    }
}

/// Resolve per-participant shares for an expense.
///
/// `participant_ids` must be non-empty and deduplicated by the caller;
/// `raw_inputs` maps participant ids to the strings the user typed
/// (ignored for [`SplitStrategy::Equal`]).
///
/// For Equal/Percentage/Shares the returned shares sum to `amount`
/// within [`SPLIT_TOLERANCE`]; for ExactAmount the sum check on the
/// inputs enforces the same invariant.
pub fn compute_shares(
    amount: f64,
    participant_ids: &[String],
    strategy: SplitStrategy,
    raw_inputs: &HashMap<String, String>,
) -> Result<Vec<Participant>, SplitError> {
    if participant_ids.is_empty() {
        return Err(SplitError::NoParticipants);
    }

    debug!(
        "Resolving {:?} split of {:.2} across {} participants",
        strategy,
        amount,
        participant_ids.len()
    );

    match strategy {
        SplitStrategy::Equal => {
            let share = amount / participant_ids.len() as f64;
            Ok(participant_ids
                .iter()
                .map(|id| Participant {
                    user_id: id.clone(),
                    share,
                })
                .collect())
        }
        SplitStrategy::Percentage => {
            let percents: Vec<f64> = participant_ids
                .iter()
                .map(|id| parse_input(raw_inputs.get(id), 0.0))
                .collect();
            let total: f64 = percents.iter().sum();
            if (total - 100.0).abs() > SPLIT_TOLERANCE {
                return Err(SplitError::PercentagesDoNotSum { total });
            }
            Ok(participant_ids
                .iter()
                .zip(percents)
                .map(|(id, percent)| Participant {
                    user_id: id.clone(),
                    share: amount * percent / 100.0,
                })
                .collect())
        }
        SplitStrategy::ExactAmount => {
            let amounts: Vec<f64> = participant_ids
                .iter()
                .map(|id| parse_input(raw_inputs.get(id), 0.0))
                .collect();
            let total: f64 = amounts.iter().sum();
            if (total - amount).abs() > SPLIT_TOLERANCE {
                return Err(SplitError::AmountsDoNotSum {
                    total,
                    expected: amount,
                });
            }
            Ok(participant_ids
                .iter()
                .zip(amounts)
                .map(|(id, share)| Participant {
                    user_id: id.clone(),
                    share,
                })
                .collect())
        }
        SplitStrategy::Shares => {
            let weights: Vec<f64> = participant_ids
                .iter()
                .map(|id| parse_input(raw_inputs.get(id), 1.0))
                .collect();
            let total: f64 = weights.iter().sum();
            if total <= 0.0 {
                return Err(SplitError::NonPositiveWeightSum);
            }
            Ok(participant_ids
                .iter()
                .zip(weights)
                .map(|(id, weight)| Participant {
                    user_id: id.clone(),
                    share: amount * weight / total,
                })
                .collect())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    fn inputs(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn share_sum(participants: &[Participant]) -> f64 {
        participants.iter().map(|p| p.share).sum()
    }

    #[test]
    fn equal_split_round_trips() {
        let participants = compute_shares(
            100.0,
            &ids(&["u1", "u2", "u3", "u4"]),
            SplitStrategy::Equal,
            &HashMap::new(),
        )
        .unwrap();

        assert_eq!(participants.len(), 4);
        for p in &participants {
            assert_eq!(p.share, 25.0);
        }
        assert_eq!(share_sum(&participants), 100.0);
    }

    #[test]
    fn empty_participants_rejected() {
        let err = compute_shares(50.0, &[], SplitStrategy::Equal, &HashMap::new()).unwrap_err();
        assert_eq!(err, SplitError::NoParticipants);
    }

    #[test]
    fn percentage_split_resolves_absolute_amounts() {
        let participants = compute_shares(
            200.0,
            &ids(&["u1", "u2"]),
            SplitStrategy::Percentage,
            &inputs(&[("u1", "60"), ("u2", "40")]),
        )
        .unwrap();

        assert_eq!(participants[0].share, 120.0);
        assert_eq!(participants[1].share, 80.0);
        assert!((share_sum(&participants) - 200.0).abs() <= SPLIT_TOLERANCE);
    }

    #[test]
    fn percentage_split_rejects_bad_sum() {
        let err = compute_shares(
            200.0,
            &ids(&["u1", "u2"]),
            SplitStrategy::Percentage,
            &inputs(&[("u1", "60"), ("u2", "39")]),
        )
        .unwrap_err();

        assert_eq!(err, SplitError::PercentagesDoNotSum { total: 99.0 });
    }

    #[test]
    fn exact_amounts_used_verbatim() {
        let participants = compute_shares(
            75.5,
            &ids(&["u1", "u2"]),
            SplitStrategy::ExactAmount,
            &inputs(&[("u1", "50.50"), ("u2", "25.00")]),
        )
        .unwrap();

        assert_eq!(participants[0].share, 50.50);
        assert_eq!(participants[1].share, 25.00);
    }

    #[test]
    fn exact_amounts_rejected_when_sum_off() {
        let err = compute_shares(
            75.5,
            &ids(&["u1", "u2"]),
            SplitStrategy::ExactAmount,
            &inputs(&[("u1", "50.50"), ("u2", "20.00")]),
        )
        .unwrap_err();

        match err {
            SplitError::AmountsDoNotSum { total, expected } => {
                assert_eq!(total, 70.5);
                assert_eq!(expected, 75.5);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn shares_split_defaults_missing_weights_to_one() {
        // u1 gets weight 2, u2 defaults to 1 -> 2:1 split of 90
        let participants = compute_shares(
            90.0,
            &ids(&["u1", "u2"]),
            SplitStrategy::Shares,
            &inputs(&[("u1", "2")]),
        )
        .unwrap();

        assert_eq!(participants[0].share, 60.0);
        assert_eq!(participants[1].share, 30.0);
        assert!((share_sum(&participants) - 90.0).abs() <= SPLIT_TOLERANCE);
    }

    #[test]
    fn shares_split_rejects_zero_weight_sum() {
        let err = compute_shares(
            90.0,
            &ids(&["u1", "u2"]),
            SplitStrategy::Shares,
            &inputs(&[("u1", "0"), ("u2", "0")]),
        )
        .unwrap_err();

        assert_eq!(err, SplitError::NonPositiveWeightSum);
    }

    #[test]
    fn unparseable_input_degrades_to_zero() {
        // "abc" parses to 0, so the percentage sum check catches it
        let err = compute_shares(
            100.0,
            &ids(&["u1", "u2"]),
            SplitStrategy::Percentage,
            &inputs(&[("u1", "abc"), ("u2", "40")]),
        )
        .unwrap_err();

        assert_eq!(err, SplitError::PercentagesDoNotSum { total: 40.0 });
    }

    #[test]
    fn non_finite_input_degrades_to_zero() {
        assert_eq!(parse_input(Some(&"inf".to_string()), 0.0), 0.0);
        assert_eq!(parse_input(Some(&"NaN".to_string()), 1.0), 0.0);
        assert_eq!(parse_input(Some(&"  ".to_string()), 1.0), 1.0);
        assert_eq!(parse_input(None, 1.0), 1.0);
    }
}
