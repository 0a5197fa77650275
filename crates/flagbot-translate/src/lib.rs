//! Google Cloud Translation adapter.
//!
//! Uses the v2 REST endpoint (`language/translate/v2`) with an API key.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use flagbot_core::{
    config::{Config, DEFAULT_TRANSLATE_BASE_URL},
    errors::Error,
    ports::{Translation, Translator},
    Result,
};

#[derive(Clone)]
pub struct GoogleTranslator {
    api_key: String,
    base_url: String,
    http: reqwest::Client,
}

#[derive(Serialize)]
struct TranslateRequest<'a> {
    q: &'a str,
    target: &'a str,
    format: &'static str,
}

#[derive(Deserialize)]
struct TranslateResponse {
    data: TranslateData,
}

#[derive(Deserialize)]
struct TranslateData {
    #[serde(default)]
    translations: Vec<TranslatedText>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct TranslatedText {
    translated_text: String,
    detected_source_language: Option<String>,
}

impl GoogleTranslator {
    pub fn new(api_key: impl Into<String>, timeout: Duration) -> Result<Self> {
        Self::with_base_url(api_key, DEFAULT_TRANSLATE_BASE_URL, timeout)
    }

    pub fn with_base_url(
        api_key: impl Into<String>,
        base_url: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::External(format!("reqwest client build failed: {e}")))?;
        Ok(Self {
            api_key: api_key.into(),
            base_url: base_url.into(),
            http,
        })
    }

    pub fn from_config(cfg: &Config) -> Result<Self> {
        Self::with_base_url(
            cfg.translate_api_key.clone(),
            cfg.translate_base_url.clone(),
            cfg.http_timeout,
        )
    }

    fn endpoint(&self) -> String {
        format!("{}/language/translate/v2", self.base_url)
    }
}

#[async_trait]
impl Translator for GoogleTranslator {
    async fn translate(&self, text: &str, target_language: &str) -> Result<Translation> {
        let resp = self
            .http
            .post(self.endpoint())
            .query(&[("key", self.api_key.as_str())])
            .json(&TranslateRequest {
                q: text,
                target: target_language,
                format: "text",
            })
            .send()
            .await
            .map_err(|e| Error::Translation(format!("request error: {e}")))?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(Error::Translation(format!(
                "google translate failed: {status} {}",
                body.chars().take(200).collect::<String>()
            )));
        }

        let body = resp
            .text()
            .await
            .map_err(|e| Error::Translation(format!("response read error: {e}")))?;
        let translation = parse_response(&body)?;

        tracing::debug!(
            target_language,
            detected = translation.detected_source_language.as_deref(),
            "google translate ok"
        );
        Ok(translation)
    }
}

/// Extract the first candidate from a v2 response body.
fn parse_response(body: &str) -> Result<Translation> {
    let parsed: TranslateResponse = serde_json::from_str(body)
        .map_err(|e| Error::Translation(format!("malformed response: {e}")))?;

    let first = parsed
        .data
        .translations
        .into_iter()
        .next()
        .ok_or_else(|| Error::Translation("response contained no translations".to_string()))?;

    Ok(Translation {
        text: first.translated_text,
        detected_source_language: first.detected_source_language,
    })
}
