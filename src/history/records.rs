use chrono::{DateTime, Local, SecondsFormat};
use serde::{Deserialize, Serialize};

use crate::pronunciation::ScoreResult;
use crate::types::Language;

use super::HistoryLog;

pub const PRONUNCIATION_HISTORY_CAPACITY: usize = 20;
pub const TRANSLATION_HISTORY_CAPACITY: usize = 10;

pub type PronunciationHistory = HistoryLog<PronunciationRecord>;
pub type TranslationHistory = HistoryLog<TranslationRecord>;

/// A scored practice attempt as stored on disk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PronunciationRecord {
    pub spoken: String,
    pub target: String,
    pub score: u8,
    pub confidence: u8,
    pub similarity: u8,
    pub timestamp: String,
}

impl PronunciationRecord {
    pub fn from_result(result: &ScoreResult, at: DateTime<Local>) -> Self {
        Self {
            spoken: result.spoken.clone(),
            target: result.target.clone(),
            score: result.total,
            confidence: result.confidence_pct,
            similarity: result.similarity_pct,
            timestamp: format_timestamp(at),
        }
    }
}

/// A completed translation as stored on disk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslationRecord {
    pub source: String,
    pub target: String,
    pub source_lang: Language,
    pub target_lang: Language,
    pub timestamp: String,
}

impl TranslationRecord {
    pub fn new(
        source: impl Into<String>,
        target: impl Into<String>,
        source_lang: Language,
        target_lang: Language,
        at: DateTime<Local>,
    ) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            source_lang,
            target_lang,
            timestamp: format_timestamp(at),
        }
    }
}

impl PronunciationHistory {
    pub fn pronunciation() -> Self {
        Self::new(PRONUNCIATION_HISTORY_CAPACITY)
    }
}

impl TranslationHistory {
    pub fn translation() -> Self {
        Self::new(TRANSLATION_HISTORY_CAPACITY)
    }
}

fn format_timestamp(at: DateTime<Local>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Secs, false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn translation_record_uses_camel_case_keys() {
        let record = TranslationRecord::new(
            "안녕하세요",
            "Hello",
            Language::Korean,
            Language::English,
            Local::now(),
        );
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["sourceLang"], "ko");
        assert_eq!(json["targetLang"], "en");
        assert_eq!(json["target"], "Hello");
    }

    #[test]
    fn pronunciation_record_copies_score_breakdown() {
        let result = crate::pronunciation::score("hello", 0.9, "hello");
        let record = PronunciationRecord::from_result(&result, Local::now());
        assert_eq!(record.score, result.total);
        assert_eq!(record.confidence, 90);
        assert_eq!(record.similarity, 100);
        assert!(!record.timestamp.is_empty());
    }
}
