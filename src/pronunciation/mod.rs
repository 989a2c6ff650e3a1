pub mod cli;
pub mod feedback;
pub mod metrics;
pub mod session;
pub mod similarity;

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::Arc;

use serde::{Deserialize, Serialize};

pub use feedback::{FeedbackTier, ScoreBand, StatusLevel};
pub use metrics::{PronunciationScorer, ScoreWeights};
pub use session::{Attempt, PracticeSession};

/// Convenient alias for results returned by pronunciation modules.
pub type Result<T> = std::result::Result<T, PronunciationError>;

/// Confidence assumed when the recognizer does not report one.
pub const DEFAULT_CONFIDENCE: f64 = 0.8;

/// Normalized inputs are cut to this many characters before comparison.
pub const MAX_INPUT_CHARS: usize = 1024;

/// Built-in practice sentences offered to learners.
pub const SAMPLE_TARGETS: [&str; 8] = [
    "Hello, how are you?",
    "Nice to meet you.",
    "What's your name?",
    "Where are you from?",
    "Thank you very much.",
    "Have a nice day!",
    "Could you help me?",
    "I'm sorry, I don't understand.",
];

/// Lightweight error type for practice sessions and their configuration.
#[derive(Debug, Clone)]
pub struct PronunciationError {
    message: Arc<str>,
}

impl PronunciationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: Arc::from(message.into()),
        }
    }
}

impl Display for PronunciationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Error for PronunciationError {}

/// One recognizer result paired with the sentence the learner meant to say.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreInput {
    pub spoken: String,
    pub confidence: Option<f64>,
    pub target: String,
}

impl ScoreInput {
    pub fn new(
        spoken: impl Into<String>,
        confidence: Option<f64>,
        target: impl Into<String>,
    ) -> Self {
        Self {
            spoken: spoken.into(),
            confidence,
            target: target.into(),
        }
    }

    /// Reported confidence, or [`DEFAULT_CONFIDENCE`] when the recognizer gave none.
    pub fn resolved_confidence(&self) -> f64 {
        self.confidence.unwrap_or(DEFAULT_CONFIDENCE)
    }
}

/// Score breakdown for a single attempt.
///
/// `total`, `confidence_pct` and `similarity_pct` are always within `0..=100`;
/// `match_rate` keeps the unrounded similarity fraction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreResult {
    pub total: u8,
    pub confidence_pct: u8,
    pub similarity_pct: u8,
    pub match_rate: f64,
    pub spoken: String,
    pub target: String,
}

impl ScoreResult {
    pub fn tier(&self) -> FeedbackTier {
        FeedbackTier::from_total(self.total)
    }

    pub fn band(&self) -> ScoreBand {
        ScoreBand::from_total(self.total)
    }
}

/// Scores an attempt with the default weights.
pub fn score(spoken: &str, confidence: f64, target: &str) -> ScoreResult {
    PronunciationScorer::new().score(spoken, confidence, target)
}
