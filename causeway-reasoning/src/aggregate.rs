//! Multi-path aggregation.
//!
//! Strength mass is summed per sign, the net decides the direction inside a
//! neutral band, and confidence saturates with corroboration while being
//! damped by directional disagreement:
//!
//! ```text
//! confidence = (1 - prod(1 - strength_i)) * |net| / total
//! ```
//!
//! Dissent is reported, never dropped.

use causeway_core::constants::NEUTRAL_BAND;
use causeway_core::models::{Direction, FusedPath, ReasoningOutcome};
use causeway_core::types::Sign;

pub struct PathAggregator;

impl PathAggregator {
    pub fn aggregate(paths: Vec<FusedPath>) -> ReasoningOutcome {
        if paths.is_empty() {
            return ReasoningOutcome::empty();
        }

        let mut positive = 0.0;
        let mut negative = 0.0;
        let mut neutral = 0.0;
        for path in &paths {
            match path.sign {
                Sign::Positive => positive += path.strength,
                Sign::Negative => negative += path.strength,
                Sign::Neutral => neutral += path.strength,
            }
        }

        let net = positive - negative;
        let total = positive + negative + neutral;

        let direction = if net.abs() <= NEUTRAL_BAND {
            Direction::Neutral
        } else if net > 0.0 {
            Direction::Positive
        } else {
            Direction::Negative
        };

        // Saturating corroboration: each extra path closes part of the
        // remaining gap to 1. Disagreement scales the result back down.
        let corroboration = 1.0 - paths.iter().map(|p| 1.0 - p.strength).product::<f64>();
        let agreement = if total > 0.0 { net.abs() / total } else { 0.0 };
        let confidence = (corroboration * agreement).clamp(0.0, 1.0);

        let minority = match direction {
            Direction::Positive => Some(Sign::Negative),
            Direction::Negative => Some(Sign::Positive),
            // In the neutral band the smaller signed side is the minority.
            Direction::Neutral | Direction::Unknown => {
                if positive < negative {
                    Some(Sign::Positive)
                } else if negative < positive {
                    Some(Sign::Negative)
                } else {
                    None
                }
            }
        };
        let dissenting_paths = minority
            .map(|s| paths.iter().filter(|p| p.sign == s).count())
            .unwrap_or(0);
        let dissent_mass = positive.min(negative);

        let strongest_path = paths
            .iter()
            .enumerate()
            .max_by(|(_, a), (_, b)| a.strength.total_cmp(&b.strength))
            .map(|(i, _)| i);

        ReasoningOutcome {
            direction,
            confidence,
            positive_evidence: positive,
            negative_evidence: negative,
            neutral_evidence: neutral,
            dissenting_paths,
            dissent_mass,
            paths,
            strongest_path,
        }
    }
}
