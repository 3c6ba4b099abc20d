//! Final score assessment.

/// Qualitative band for a final score, ordered best first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ScoreTier {
    Perfect,
    Great,
    Fair,
    KeepLearning,
}

/// Minimum ratio for each tier below `Perfect`, as `(tier, numerator, denominator)`.
///
/// Checked top to bottom; the first match wins.
const THRESHOLDS: [(ScoreTier, u64, u64); 2] = [
    (ScoreTier::Great, 7, 10),
    (ScoreTier::Fair, 5, 10),
];

impl ScoreTier {
    /// Picks the tier for `score` correct answers out of `total`.
    ///
    /// A zero `total` maps to `KeepLearning`.
    #[must_use]
    pub fn from_score(score: u32, total: u32) -> Self {
        if total == 0 {
            return Self::KeepLearning;
        }
        if score >= total {
            return Self::Perfect;
        }
        let (score, total) = (u64::from(score), u64::from(total));
        THRESHOLDS
            .iter()
            .find(|(_, num, den)| score * den >= total * num)
            .map_or(Self::KeepLearning, |(tier, _, _)| *tier)
    }

    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Self::Perfect => "Perfect score! You are an expert at spotting scams!",
            Self::Great => "Great job! You are good at noticing scams.",
            Self::Fair => "Not bad! Keep practicing to sharpen your skills.",
            Self::KeepLearning => {
                "Keep learning! Knowing these warning signs helps you stay safe online."
            }
        }
    }
}

/// `round(score / total * 100)`, rounding halves up. Zero `total` yields 0.
#[must_use]
pub fn score_percentage(score: u32, total: u32) -> u8 {
    if total == 0 {
        return 0;
    }
    let score = u64::from(score.min(total));
    let total = u64::from(total);
    let pct = (score * 200 + total) / (2 * total);
    u8::try_from(pct).unwrap_or(100)
}
