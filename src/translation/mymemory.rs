use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use reqwest::blocking::{Client, Request};
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use super::{TranslationRequest, Translator};

pub const DEFAULT_ENDPOINT: &str = "https://api.mymemory.translated.net/get";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Client for the free MyMemory translation API.
#[derive(Debug, Clone)]
pub struct MyMemoryClient {
    client: Client,
    endpoint: String,
}

#[derive(Debug, Deserialize)]
struct MyMemoryResponse {
    #[serde(rename = "responseStatus", default)]
    response_status: Option<Value>,
    #[serde(rename = "responseData", default)]
    response_data: Option<ResponseData>,
}

#[derive(Debug, Deserialize)]
struct ResponseData {
    #[serde(rename = "translatedText", default)]
    translated_text: Option<String>,
}

impl MyMemoryClient {
    pub fn new() -> Result<Self> {
        Self::with_endpoint(DEFAULT_ENDPOINT)
    }

    pub fn with_endpoint(endpoint: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .context("failed to build HTTP client")?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    pub fn build_request(&self, request: &TranslationRequest) -> Result<Request> {
        let langpair = format!("{}|{}", request.source().code(), request.target().code());
        self.client
            .get(&self.endpoint)
            .query(&[("q", request.text()), ("langpair", langpair.as_str())])
            .build()
            .context("failed to build translation request")
    }
}

impl Translator for MyMemoryClient {
    fn translate(&self, request: &TranslationRequest) -> Result<String> {
        let http_request = self.build_request(request)?;
        debug!(url = %http_request.url(), "requesting translation");
        let body = self
            .client
            .execute(http_request)
            .context("translation request failed")?
            .text()
            .context("failed to read translation response")?;
        parse_response(&body)
    }
}

/// Extracts the translated text from a MyMemory JSON body.
///
/// The body is accepted when it reports status 200 or carries `responseData`;
/// either way `responseData.translatedText` must be present.
pub fn parse_response(body: &str) -> Result<String> {
    let response: MyMemoryResponse =
        serde_json::from_str(body).context("failed to parse translation response")?;
    let status_ok = response
        .response_status
        .as_ref()
        .map(is_success_status)
        .unwrap_or(false);
    if !status_ok && response.response_data.is_none() {
        return Err(anyhow!(
            "translation service returned status {}",
            response
                .response_status
                .map(|status| status.to_string())
                .unwrap_or_else(|| "unknown".to_string())
        ));
    }
    response
        .response_data
        .and_then(|data| data.translated_text)
        .ok_or_else(|| anyhow!("translation response did not include translated text"))
}

fn is_success_status(status: &Value) -> bool {
    match status {
        Value::Number(number) => number.as_u64() == Some(200),
        Value::String(raw) => raw.trim() == "200",
        _ => false,
    }
}
