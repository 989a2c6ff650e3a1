use std::collections::HashMap;

use anyhow::Result;
use once_cell::sync::Lazy;

use crate::types::Language;

use super::{TranslationRequest, Translator};

type Phrases = &'static [(&'static str, &'static str)];

const KO_EN: Phrases = &[
    ("안녕하세요", "Hello"),
    ("감사합니다", "Thank you"),
    ("죄송합니다", "I'm sorry"),
    ("도와주세요", "Please help me"),
    ("안녕히 가세요", "Goodbye"),
    ("어디에 있나요?", "Where is it?"),
    ("얼마예요?", "How much is it?"),
    ("네", "Yes"),
    ("아니요", "No"),
];

const EN_KO: Phrases = &[
    ("hello", "안녕하세요"),
    ("thank you", "감사합니다"),
    ("sorry", "죄송합니다"),
    ("help", "도움"),
    ("goodbye", "안녕히 가세요"),
    ("where", "어디"),
    ("how much", "얼마"),
    ("yes", "네"),
    ("no", "아니요"),
];

/// Shared table with the bundled Korean/English phrases.
pub static DEFAULT_PHRASES: Lazy<PhraseTable> = Lazy::new(|| {
    PhraseTable::new()
        .with_pair(Language::Korean, Language::English, KO_EN)
        .with_pair(Language::English, Language::Korean, EN_KO)
});

/// Offline phrase lookup keyed by language pair.
///
/// Entries are checked in order; the first whose lower-cased source phrase
/// occurs anywhere in the lower-cased input wins.
#[derive(Debug, Clone, Default)]
pub struct PhraseTable {
    pairs: HashMap<(Language, Language), Phrases>,
}

impl PhraseTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shared() -> &'static Self {
        &DEFAULT_PHRASES
    }

    pub fn with_pair(mut self, from: Language, to: Language, phrases: Phrases) -> Self {
        self.pairs.insert((from, to), phrases);
        self
    }

    pub fn lookup(&self, text: &str, from: Language, to: Language) -> Option<&'static str> {
        let phrases = self.pairs.get(&(from, to))?;
        let lowered = text.to_lowercase();
        phrases
            .iter()
            .find(|(source, _)| lowered.contains(&source.to_lowercase()))
            .map(|(_, translated)| *translated)
    }

    /// Phrase-table answer, or the input wrapped in a `[번역: ...]` marker.
    pub fn translate_offline(&self, request: &TranslationRequest) -> String {
        self.lookup(request.text(), request.source(), request.target())
            .map(str::to_string)
            .unwrap_or_else(|| format!("[번역: {}]", request.text()))
    }
}

impl Translator for PhraseTable {
    fn translate(&self, request: &TranslationRequest) -> Result<String> {
        Ok(self.translate_offline(request))
    }
}
