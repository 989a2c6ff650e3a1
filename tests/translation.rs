use std::cell::Cell;

use anyhow::{bail, Result};
use echolingo::translation::mymemory::parse_response;
use echolingo::translation::{
    FallbackTranslator, Origin, PhraseTable, TranslationRequest, Translator,
};
use echolingo::types::Language;

struct Unreachable {
    calls: Cell<usize>,
}

impl Translator for Unreachable {
    fn translate(&self, _request: &TranslationRequest) -> Result<String> {
        self.calls.set(self.calls.get() + 1);
        bail!("connection refused")
    }
}

struct Echo;

impl Translator for Echo {
    fn translate(&self, request: &TranslationRequest) -> Result<String> {
        Ok(request.text().to_uppercase())
    }
}

fn request(text: &str, from: Language, to: Language) -> TranslationRequest {
    TranslationRequest::new(text, from, to).unwrap()
}

#[test]
fn failing_service_falls_back_to_phrases() {
    let primary = Unreachable {
        calls: Cell::new(0),
    };
    let translator = FallbackTranslator::new(primary);

    let result = translator.translate(&request("얼마예요?", Language::Korean, Language::English));
    assert_eq!(result.text, "How much is it?");
    assert_eq!(result.origin, Origin::Offline);

    let result = translator.translate(&request("고양이", Language::Korean, Language::English));
    assert_eq!(result.text, "[번역: 고양이]");
    assert_eq!(result.origin, Origin::Offline);
}

#[test]
fn working_service_wins_over_phrases() {
    let translator = FallbackTranslator::new(Echo);
    let result = translator.translate(&request("hello", Language::English, Language::Korean));
    assert_eq!(result.text, "HELLO");
    assert_eq!(result.origin, Origin::Online);
}

#[test]
fn phrase_table_is_directional() {
    let table = PhraseTable::shared();
    assert_eq!(
        table.lookup("Goodbye, friend", Language::English, Language::Korean),
        Some("안녕히 가세요")
    );
    assert_eq!(
        table.lookup("Goodbye", Language::Korean, Language::English),
        None
    );
    assert_eq!(
        table
            .translate(&request("네", Language::Korean, Language::English))
            .unwrap(),
        "Yes"
    );
}

#[test]
fn parses_successful_response() {
    let body = r#"{"responseData":{"translatedText":"Hello","match":1},"responseStatus":200}"#;
    assert_eq!(parse_response(body).unwrap(), "Hello");
}

#[test]
fn response_data_is_enough_without_status() {
    let body = r#"{"responseData":{"translatedText":"Thanks"},"responseStatus":"429"}"#;
    assert_eq!(parse_response(body).unwrap(), "Thanks");
}

#[test]
fn rejects_error_responses() {
    let denied = r#"{"responseStatus":"403","responseDetails":"INVALID LANGUAGE PAIR"}"#;
    let err = parse_response(denied).unwrap_err();
    assert!(err.to_string().contains("403"), "unexpected error: {err}");

    assert!(parse_response(r#"{"responseStatus":200}"#).is_err());
    assert!(parse_response("<html>rate limited</html>").is_err());
}
