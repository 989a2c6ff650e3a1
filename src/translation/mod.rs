//! Text translation with a remote service and an offline phrase-table fallback.

pub mod mymemory;
pub mod phrases;

use anyhow::{ensure, Result};
use serde::Serialize;
use tracing::{info, warn};

use crate::types::Language;

pub use mymemory::MyMemoryClient;
pub use phrases::PhraseTable;

/// Anything that can turn a request into translated text.
pub trait Translator {
    fn translate(&self, request: &TranslationRequest) -> Result<String>;
}

/// Validated translation input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationRequest {
    text: String,
    from: Language,
    to: Language,
}

impl TranslationRequest {
    pub fn new(text: impl Into<String>, from: Language, to: Language) -> Result<Self> {
        let text = text.into().trim().to_string();
        ensure!(!text.is_empty(), "enter some text to translate");
        ensure!(
            from != to,
            "source and target language are both {}",
            from.display_name()
        );
        Ok(Self { text, from, to })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn source(&self) -> Language {
        self.from
    }

    pub fn target(&self) -> Language {
        self.to
    }

    /// Builds the request that translates `translated` back into the source language.
    pub fn reversed(&self, translated: &str) -> Result<Self> {
        Self::new(translated, self.to, self.from)
    }
}

/// Where a translation came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Origin {
    Online,
    Offline,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Translation {
    pub text: String,
    pub origin: Origin,
}

/// Tries the primary translator and answers from the phrase table when it fails.
pub struct FallbackTranslator<P> {
    primary: P,
    phrases: &'static PhraseTable,
}

impl<P: Translator> FallbackTranslator<P> {
    pub fn new(primary: P) -> Self {
        Self {
            primary,
            phrases: PhraseTable::shared(),
        }
    }

    pub fn translate(&self, request: &TranslationRequest) -> Translation {
        match self.primary.translate(request) {
            Ok(text) => {
                info!(from = %request.source(), to = %request.target(), "translated online");
                Translation {
                    text,
                    origin: Origin::Online,
                }
            }
            Err(err) => {
                warn!(error = %err, "translation service failed; using offline phrases");
                Translation {
                    text: self.phrases.translate_offline(request),
                    origin: Origin::Offline,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_trims_and_validates() {
        let request = TranslationRequest::new("  hello ", Language::English, Language::Korean)
            .unwrap();
        assert_eq!(request.text(), "hello");
        assert!(TranslationRequest::new("   ", Language::English, Language::Korean).is_err());
        assert!(TranslationRequest::new("hello", Language::English, Language::English).is_err());
    }

    #[test]
    fn reversed_swaps_direction() {
        let request =
            TranslationRequest::new("감사합니다", Language::Korean, Language::English).unwrap();
        let back = request.reversed("Thank you").unwrap();
        assert_eq!(back.source(), Language::English);
        assert_eq!(back.target(), Language::Korean);
        assert_eq!(back.text(), "Thank you");
    }
}
