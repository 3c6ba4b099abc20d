use serde::{Deserialize, Serialize};

/// A classification of a message, either the ground truth or the user's answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    Legitimate,
    Fraudulent,
}

impl Verdict {
    /// `true` maps to `Fraudulent`.
    #[must_use]
    pub fn from_fraudulent(is_fraudulent: bool) -> Self {
        if is_fraudulent {
            Self::Fraudulent
        } else {
            Self::Legitimate
        }
    }

    #[must_use]
    pub fn is_fraudulent(self) -> bool {
        matches!(self, Self::Fraudulent)
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Legitimate => "legitimate",
            Self::Fraudulent => "a scam",
        }
    }
}

impl From<bool> for Verdict {
    fn from(is_fraudulent: bool) -> Self {
        Self::from_fraudulent(is_fraudulent)
    }
}
