// Match bands — the four human-readable score ranges.

use serde::{Deserialize, Serialize};

/// Qualitative band for a final ATS score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchBand {
    #[serde(rename = "Needs Improvement")]
    NeedsImprovement,
    #[serde(rename = "Below Average")]
    BelowAverage,
    #[serde(rename = "Good Match")]
    GoodMatch,
    #[serde(rename = "Strong Match")]
    StrongMatch,
}

impl MatchBand {
    /// Determine the band from a final score (0-100).
    pub fn from_score(score: f64) -> Self {
        match score {
            s if s >= 70.0 => MatchBand::StrongMatch,
            s if s >= 50.0 => MatchBand::GoodMatch,
            s if s >= 30.0 => MatchBand::BelowAverage,
            _ => MatchBand::NeedsImprovement,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MatchBand::NeedsImprovement => "Needs Improvement",
            MatchBand::BelowAverage => "Below Average",
            MatchBand::GoodMatch => "Good Match",
            MatchBand::StrongMatch => "Strong Match",
        }
    }
}

impl std::fmt::Display for MatchBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
