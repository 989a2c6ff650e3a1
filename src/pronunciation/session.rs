use chrono::{DateTime, Local};
use tracing::info;

use crate::history::{PronunciationHistory, PronunciationRecord};

use super::metrics::PronunciationScorer;
use super::{FeedbackTier, PronunciationError, Result, ScoreBand, ScoreInput, ScoreResult};

/// Outcome of one recognizer result scored against the session target.
#[derive(Debug, Clone, PartialEq)]
pub struct Attempt {
    pub result: ScoreResult,
    pub tier: FeedbackTier,
    pub band: ScoreBand,
}

impl Attempt {
    fn from_result(result: ScoreResult) -> Self {
        Self {
            tier: result.tier(),
            band: result.band(),
            result,
        }
    }
}

/// Practice loop state: the sentence being rehearsed and the attempts so far.
#[derive(Debug, Clone)]
pub struct PracticeSession {
    target: String,
    scorer: PronunciationScorer,
    history: PronunciationHistory,
}

impl PracticeSession {
    pub fn new(target: impl Into<String>) -> Result<Self> {
        let target = validate_target(target.into())?;
        info!(sentence = %target, "practice session ready");
        Ok(Self {
            target,
            scorer: PronunciationScorer::new(),
            history: PronunciationHistory::pronunciation(),
        })
    }

    pub fn with_history(mut self, history: PronunciationHistory) -> Self {
        self.history = history;
        self
    }

    pub fn with_scorer(mut self, scorer: PronunciationScorer) -> Self {
        self.scorer = scorer;
        self
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn retarget(&mut self, target: impl Into<String>) -> Result<()> {
        self.target = validate_target(target.into())?;
        info!(sentence = %self.target, "practice target changed");
        Ok(())
    }

    /// Scores a recognizer result and appends it to the session history.
    pub fn record(&mut self, spoken: &str, confidence: Option<f64>) -> Attempt {
        self.record_at(spoken, confidence, Local::now())
    }

    pub fn record_at(
        &mut self,
        spoken: &str,
        confidence: Option<f64>,
        at: DateTime<Local>,
    ) -> Attempt {
        let input = ScoreInput::new(spoken, confidence, self.target.as_str());
        let attempt = Attempt::from_result(self.scorer.score_input(&input));
        info!(
            total = attempt.result.total,
            confidence = attempt.result.confidence_pct,
            similarity = attempt.result.similarity_pct,
            tier = ?attempt.tier,
            "practice attempt scored"
        );
        self.history.push(PronunciationRecord::from_result(&attempt.result, at));
        attempt
    }

    pub fn history(&self) -> &PronunciationHistory {
        &self.history
    }

    pub fn into_history(self) -> PronunciationHistory {
        self.history
    }
}

fn validate_target(target: String) -> Result<String> {
    let trimmed = target.trim();
    if trimmed.is_empty() {
        return Err(PronunciationError::new(
            "practice target must contain a sentence to pronounce",
        ));
    }
    Ok(trimmed.to_string())
}
