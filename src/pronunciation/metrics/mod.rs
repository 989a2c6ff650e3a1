use tracing::debug;

use crate::pronunciation::similarity::{normalize, similarity, truncate_chars, word_count};
use crate::pronunciation::{
    PronunciationError, Result, ScoreInput, ScoreResult, DEFAULT_CONFIDENCE, MAX_INPUT_CHARS,
};

const SIMILARITY_BONUS: f64 = 20.0;
const WORD_PENALTY: f64 = 5.0;
const MAX_SCORE: f64 = 100.0;

/// Policy constants blending text similarity and word-count mismatch into the score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreWeights {
    /// Points granted for a perfect text match, scaled by similarity.
    pub similarity_bonus: f64,
    /// Points removed per word of difference between spoken and target.
    pub word_penalty: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            similarity_bonus: SIMILARITY_BONUS,
            word_penalty: WORD_PENALTY,
        }
    }
}

impl ScoreWeights {
    pub fn new(similarity_bonus: f64, word_penalty: f64) -> Result<Self> {
        for (label, value) in [
            ("similarity_bonus", similarity_bonus),
            ("word_penalty", word_penalty),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(PronunciationError::new(format!(
                    "{label} must be a finite non-negative number, got {value}"
                )));
            }
        }
        Ok(Self {
            similarity_bonus,
            word_penalty,
        })
    }
}

/// Blends recognizer confidence with text similarity into a 0-100 score.
#[derive(Debug, Default, Clone)]
pub struct PronunciationScorer {
    weights: ScoreWeights,
}

impl PronunciationScorer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_weights(weights: ScoreWeights) -> Self {
        Self { weights }
    }

    pub fn weights(&self) -> ScoreWeights {
        self.weights
    }

    pub fn score_input(&self, input: &ScoreInput) -> ScoreResult {
        self.score(&input.spoken, input.resolved_confidence(), &input.target)
    }

    pub fn score(&self, spoken: &str, confidence: f64, target: &str) -> ScoreResult {
        let normalized_spoken = normalize(spoken);
        let normalized_target = normalize(target);

        let confidence = sanitize_confidence(confidence);
        let base = (confidence * MAX_SCORE).round();
        // Only the edit distance is bounded; word counts use the full text.
        let match_rate = similarity(
            truncate_chars(&normalized_spoken, MAX_INPUT_CHARS),
            truncate_chars(&normalized_target, MAX_INPUT_CHARS),
        );
        let bonus = match_rate * self.weights.similarity_bonus;
        let word_gap = word_count(&normalized_spoken).abs_diff(word_count(&normalized_target));
        let penalty = word_gap as f64 * self.weights.word_penalty;
        let total = (base + bonus - penalty).clamp(0.0, MAX_SCORE).round();

        debug!(base, bonus, penalty, word_gap, total, "scored pronunciation attempt");

        ScoreResult {
            total: to_percent(total),
            confidence_pct: to_percent(base),
            similarity_pct: to_percent((match_rate * MAX_SCORE).round()),
            match_rate,
            spoken: spoken.to_string(),
            target: target.to_string(),
        }
    }
}

/// Clamps confidence into `[0, 1]`; NaN falls back to the default confidence.
pub fn sanitize_confidence(confidence: f64) -> f64 {
    if confidence.is_nan() {
        DEFAULT_CONFIDENCE
    } else {
        confidence.clamp(0.0, 1.0)
    }
}

fn to_percent(value: f64) -> u8 {
    value.clamp(0.0, MAX_SCORE) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitize_clamps_out_of_range_confidence() {
        assert_eq!(sanitize_confidence(1.7), 1.0);
        assert_eq!(sanitize_confidence(-0.2), 0.0);
        assert_eq!(sanitize_confidence(f64::NAN), DEFAULT_CONFIDENCE);
        assert_eq!(sanitize_confidence(f64::INFINITY), 1.0);
    }

    #[test]
    fn weights_reject_negative_values() {
        assert!(ScoreWeights::new(-1.0, 5.0).is_err());
        assert!(ScoreWeights::new(20.0, f64::NAN).is_err());
        let weights = ScoreWeights::new(10.0, 2.5).unwrap();
        assert_eq!(weights.similarity_bonus, 10.0);
        assert_eq!(weights.word_penalty, 2.5);
    }

    #[test]
    fn custom_weights_change_breakdown() {
        assert_eq!(PronunciationScorer::new().weights(), ScoreWeights::default());
        let scorer = PronunciationScorer::with_weights(ScoreWeights::new(0.0, 10.0).unwrap());
        assert_eq!(scorer.weights().word_penalty, 10.0);
        let result = scorer.score("thank you", 0.6, "thank you very much.");
        assert_eq!(result.total, 40);
        assert_eq!(result.confidence_pct, 60);
        assert_eq!(result.similarity_pct, 45);
    }

    #[test]
    fn score_input_uses_default_confidence_when_missing() {
        let input = ScoreInput::new("hello", None, "hello");
        let result = PronunciationScorer::new().score_input(&input);
        assert_eq!(result.confidence_pct, 80);
        assert_eq!(result.total, 100);
    }

    #[test]
    fn truncates_oversized_inputs() {
        let long = "a".repeat(MAX_INPUT_CHARS * 2);
        let result = PronunciationScorer::new().score(&long, 1.0, &long);
        assert_eq!(result.similarity_pct, 100);
        assert_eq!(result.spoken.len(), MAX_INPUT_CHARS * 2);
    }

    #[test]
    fn word_gap_counts_words_beyond_the_distance_bound() {
        let target = vec!["abcde"; 300].join(" ");
        let spoken = truncate_chars(&target, MAX_INPUT_CHARS - 5).to_string();
        assert_eq!(word_count(&spoken), 170);

        let result = PronunciationScorer::new().score(&spoken, 1.0, &target);
        assert!(result.similarity_pct >= 99);
        assert_eq!(result.total, 0);
    }
}
