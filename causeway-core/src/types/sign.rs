use std::fmt;

use serde::{Deserialize, Serialize};

/// Direction of a causal relation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sign {
    #[serde(rename = "+")]
    Positive,
    #[serde(rename = "-")]
    Negative,
    #[serde(rename = "neutral")]
    Neutral,
}

impl Sign {
    /// Sign propagation along a path: two negatives cancel, a neutral edge
    /// makes the whole product neutral.
    pub fn combine(self, other: Sign) -> Sign {
        match (self, other) {
            (Sign::Neutral, _) | (_, Sign::Neutral) => Sign::Neutral,
            (a, b) if a == b => Sign::Positive,
            _ => Sign::Negative,
        }
    }

    /// Fold a sequence of edge signs into a path sign.
    pub fn product(signs: impl IntoIterator<Item = Sign>) -> Sign {
        signs.into_iter().fold(Sign::Positive, Sign::combine)
    }

    pub fn is_negative(self) -> bool {
        matches!(self, Sign::Negative)
    }
}

impl fmt::Display for Sign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Sign::Positive => "+",
            Sign::Negative => "-",
            Sign::Neutral => "neutral",
        };
        f.write_str(s)
    }
}
