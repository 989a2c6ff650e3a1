//! Shared vocabulary: supported languages and conversation modes with their sample sentences.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use anyhow::{anyhow, Error};
use serde::{Deserialize, Serialize};

/// Languages offered for recognition, translation, and speech output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    #[serde(rename = "ko")]
    Korean,
    #[serde(rename = "en")]
    English,
    #[serde(rename = "ja")]
    Japanese,
    #[serde(rename = "zh")]
    Chinese,
}

impl Language {
    pub const ALL: [Language; 4] = [
        Language::Korean,
        Language::English,
        Language::Japanese,
        Language::Chinese,
    ];

    /// Two-letter code used by the translation service.
    pub fn code(&self) -> &'static str {
        match self {
            Language::Korean => "ko",
            Language::English => "en",
            Language::Japanese => "ja",
            Language::Chinese => "zh",
        }
    }

    /// Locale tag handed to speech recognizers and synthesizers.
    pub fn speech_tag(&self) -> &'static str {
        match self {
            Language::Korean => "ko-KR",
            Language::English => "en-US",
            Language::Japanese => "ja-JP",
            Language::Chinese => "zh-CN",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Language::Korean => "한국어",
            Language::English => "English",
            Language::Japanese => "日本語",
            Language::Chinese => "中文",
        }
    }
}

impl Display for Language {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = Error;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let wanted = raw.trim().to_ascii_lowercase();
        Language::ALL
            .into_iter()
            .find(|lang| lang.code() == wanted || lang.speech_tag().eq_ignore_ascii_case(&wanted))
            .ok_or_else(|| anyhow!("unsupported language '{}' (expected ko, en, ja or zh)", raw))
    }
}

/// Conversation context that selects a set of sample sentences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConversationMode {
    #[default]
    General,
    Travel,
    Business,
    Study,
}

impl ConversationMode {
    pub const ALL: [ConversationMode; 4] = [
        ConversationMode::General,
        ConversationMode::Travel,
        ConversationMode::Business,
        ConversationMode::Study,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ConversationMode::General => "general",
            ConversationMode::Travel => "travel",
            ConversationMode::Business => "business",
            ConversationMode::Study => "study",
        }
    }

    pub fn sample_sentences(&self) -> &'static [SamplePair] {
        match self {
            ConversationMode::General => GENERAL,
            ConversationMode::Travel => TRAVEL,
            ConversationMode::Business => BUSINESS,
            ConversationMode::Study => STUDY,
        }
    }
}

impl Display for ConversationMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ConversationMode {
    type Err = Error;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let wanted = raw.trim().to_ascii_lowercase();
        ConversationMode::ALL
            .into_iter()
            .find(|mode| mode.as_str() == wanted)
            .ok_or_else(|| {
                anyhow!(
                    "unknown mode '{}' (expected general, travel, business or study)",
                    raw
                )
            })
    }
}

/// Korean sentence with its English rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SamplePair {
    pub ko: &'static str,
    pub en: &'static str,
}

const fn pair(ko: &'static str, en: &'static str) -> SamplePair {
    SamplePair { ko, en }
}

const GENERAL: &[SamplePair] = &[
    pair("안녕하세요", "Hello"),
    pair("감사합니다", "Thank you"),
    pair("죄송합니다", "I'm sorry"),
    pair("도와주세요", "Please help me"),
    pair("어디에 있나요?", "Where is it?"),
];

const TRAVEL: &[SamplePair] = &[
    pair("공항이 어디에 있나요?", "Where is the airport?"),
    pair("호텔을 찾고 있어요", "I'm looking for a hotel"),
    pair("지하철역이 어디인가요?", "Where is the subway station?"),
    pair("얼마예요?", "How much is it?"),
    pair("체크인 하고 싶어요", "I'd like to check in"),
];

const BUSINESS: &[SamplePair] = &[
    pair("회의실이 어디에 있나요?", "Where is the meeting room?"),
    pair("프레젠테이션을 시작하겠습니다", "I'll start the presentation"),
    pair("계약서를 검토해주세요", "Please review the contract"),
    pair("일정을 조정할 수 있나요?", "Can we reschedule?"),
    pair("이메일을 보내드리겠습니다", "I'll send you an email"),
];

const STUDY: &[SamplePair] = &[
    pair("수업이 몇 시에 시작하나요?", "What time does the class start?"),
    pair("과제를 제출해야 해요", "I need to submit the assignment"),
    pair("교수님께 질문이 있어요", "I have a question for the professor"),
    pair("도서관이 어디에 있나요?", "Where is the library?"),
    pair("시험 일정을 알려주세요", "Please tell me the exam schedule"),
];
