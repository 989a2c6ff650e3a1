use std::fmt::{Display, Formatter};

use serde::Serialize;

/// Severity used when surfacing feedback to the learner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusLevel {
    Success,
    Info,
    Warning,
    Error,
}

impl StatusLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            StatusLevel::Success => "success",
            StatusLevel::Info => "info",
            StatusLevel::Warning => "warning",
            StatusLevel::Error => "error",
        }
    }
}

impl Display for StatusLevel {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Coaching tier chosen from the total score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FeedbackTier {
    Poor,
    NeedsPractice,
    Fair,
    Good,
    Excellent,
}

impl FeedbackTier {
    pub fn from_total(total: u8) -> Self {
        match total {
            90.. => FeedbackTier::Excellent,
            80..=89 => FeedbackTier::Good,
            70..=79 => FeedbackTier::Fair,
            60..=69 => FeedbackTier::NeedsPractice,
            _ => FeedbackTier::Poor,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            FeedbackTier::Excellent => "Perfect! Excellent pronunciation!",
            FeedbackTier::Good => "Nice! Almost perfect pronunciation!",
            FeedbackTier::Fair => "Not bad! Practice a little more.",
            FeedbackTier::NeedsPractice => "Needs practice. Try again!",
            FeedbackTier::Poor => "Keep practicing. Speak slowly and clearly!",
        }
    }

    pub fn status(&self) -> StatusLevel {
        match self {
            FeedbackTier::Excellent | FeedbackTier::Good => StatusLevel::Success,
            FeedbackTier::Fair => StatusLevel::Info,
            FeedbackTier::NeedsPractice => StatusLevel::Warning,
            FeedbackTier::Poor => StatusLevel::Error,
        }
    }
}

/// Coarse grouping used when listing past attempts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreBand {
    Low,
    Medium,
    High,
}

impl ScoreBand {
    pub fn from_total(total: u8) -> Self {
        match total {
            80.. => ScoreBand::High,
            60..=79 => ScoreBand::Medium,
            _ => ScoreBand::Low,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ScoreBand::High => "high",
            ScoreBand::Medium => "medium",
            ScoreBand::Low => "low",
        }
    }
}
