//! Slack adapter.
//!
//! Implements the `flagbot-core` MessagingPort over the Slack Web API and
//! serves the Events API endpoint that feeds reactions into the core.

use std::time::Duration;

use async_trait::async_trait;
use serde::{de::DeserializeOwned, Deserialize, Serialize};

pub mod events;
pub mod router;
pub mod signature;

use flagbot_core::{
    config::{Config, DEFAULT_SLACK_API_BASE_URL},
    domain::{ChannelId, MessageRef, MessageTs},
    errors::Error,
    messaging::{port::MessagingPort, types::Message},
    Result,
};

#[derive(Clone)]
pub struct SlackMessenger {
    token: String,
    base_url: String,
    http: reqwest::Client,
}

/// Every Web API response carries `ok`; failures add an `error` code.
#[derive(Deserialize)]
struct ApiEnvelope<T> {
    ok: bool,
    error: Option<String>,
    #[serde(flatten)]
    body: Option<T>,
}

#[derive(Debug, Deserialize)]
struct HistoryBody {
    #[serde(default)]
    messages: Vec<HistoryMessage>,
}

#[derive(Debug, Deserialize)]
struct HistoryMessage {
    ts: String,
    #[serde(default)]
    text: String,
}

#[derive(Serialize)]
struct PostMessageRequest<'a> {
    channel: &'a str,
    thread_ts: &'a str,
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct PostMessageBody {
    channel: String,
    ts: String,
}

impl SlackMessenger {
    pub fn new(token: impl Into<String>, timeout: Duration) -> Result<Self> {
        Self::with_base_url(token, DEFAULT_SLACK_API_BASE_URL, timeout)
    }

    pub fn with_base_url(
        token: impl Into<String>,
        base_url: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::External(format!("reqwest client build failed: {e}")))?;
        Ok(Self {
            token: token.into(),
            base_url: base_url.into(),
            http,
        })
    }

    pub fn from_config(cfg: &Config) -> Result<Self> {
        Self::with_base_url(
            cfg.slack_bot_token.clone(),
            cfg.slack_api_base_url.clone(),
            cfg.http_timeout,
        )
    }

    fn url(&self, method: &str) -> String {
        format!("{}/{method}", self.base_url)
    }

    async fn read<T: DeserializeOwned>(method: &str, resp: reqwest::Response) -> Result<T> {
        if !resp.status().is_success() {
            return Err(Error::Slack(format!("{method} failed: {}", resp.status())));
        }
        let body = resp
            .text()
            .await
            .map_err(|e| Error::Slack(format!("{method} response read error: {e}")))?;
        parse_api_response(method, &body)
    }
}

fn parse_api_response<T: DeserializeOwned>(method: &str, body: &str) -> Result<T> {
    let envelope: ApiEnvelope<T> = serde_json::from_str(body)?;
    if !envelope.ok {
        let code = envelope.error.unwrap_or_else(|| "unknown_error".to_string());
        return Err(Error::Slack(format!("{method}: {code}")));
    }
    envelope
        .body
        .ok_or_else(|| Error::Slack(format!("{method}: unexpected response shape")))
}

#[async_trait]
impl MessagingPort for SlackMessenger {
    async fn fetch_message(&self, channel: &ChannelId, ts: &MessageTs) -> Result<Option<Message>> {
        let resp = self
            .http
            .get(self.url("conversations.history"))
            .bearer_auth(&self.token)
            .query(&[
                ("channel", channel.0.as_str()),
                ("oldest", ts.0.as_str()),
                ("latest", ts.0.as_str()),
                ("inclusive", "true"),
                ("limit", "1"),
            ])
            .send()
            .await
            .map_err(|e| Error::Slack(format!("conversations.history request error: {e}")))?;

        let history: HistoryBody = Self::read("conversations.history", resp).await?;
        Ok(history.messages.into_iter().next().map(|m| Message {
            ts: MessageTs(m.ts),
            text: m.text,
        }))
    }

    async fn post_thread_reply(
        &self,
        channel: &ChannelId,
        thread_ts: &MessageTs,
        text: &str,
    ) -> Result<MessageRef> {
        let resp = self
            .http
            .post(self.url("chat.postMessage"))
            .bearer_auth(&self.token)
            .json(&PostMessageRequest {
                channel: &channel.0,
                thread_ts: &thread_ts.0,
                text,
            })
            .send()
            .await
            .map_err(|e| Error::Slack(format!("chat.postMessage request error: {e}")))?;

        let posted: PostMessageBody = Self::read("chat.postMessage", resp).await?;
        Ok(MessageRef {
            channel: ChannelId(posted.channel),
            ts: MessageTs(posted.ts),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn history_with_one_message_is_parsed() {
        let body = r#"{
          "ok": true,
          "messages": [{ "type": "message", "user": "U1", "text": "Hello", "ts": "1700000000.000100" }],
          "has_more": false
        }"#;
        let h: HistoryBody = parse_api_response("conversations.history", body).unwrap();
        assert_eq!(h.messages.len(), 1);
        assert_eq!(h.messages[0].text, "Hello");
        assert_eq!(h.messages[0].ts, "1700000000.000100");
    }

    #[test]
    fn empty_history_is_not_an_error() {
        let body = r#"{"ok": true, "messages": [], "has_more": false}"#;
        let h: HistoryBody = parse_api_response("conversations.history", body).unwrap();
        assert!(h.messages.is_empty());
    }

    #[test]
    fn message_without_text_defaults_to_empty() {
        let body = r#"{"ok": true, "messages": [{"ts": "1.2", "files": []}]}"#;
        let h: HistoryBody = parse_api_response("conversations.history", body).unwrap();
        assert_eq!(h.messages[0].text, "");
    }

    #[test]
    fn not_ok_carries_slack_error_code() {
        let body = r#"{"ok": false, "error": "not_in_channel"}"#;
        let err = parse_api_response::<PostMessageBody>("chat.postMessage", body).unwrap_err();
        assert!(matches!(err, Error::Slack(msg) if msg == "chat.postMessage: not_in_channel"));
    }

    #[test]
    fn post_message_response_yields_reply_ref() {
        let body = r#"{"ok": true, "channel": "C123", "ts": "1700000001.000200", "message": {}}"#;
        let posted: PostMessageBody = parse_api_response("chat.postMessage", body).unwrap();
        assert_eq!(posted.channel, "C123");
        assert_eq!(posted.ts, "1700000001.000200");
    }

    #[test]
    fn post_message_request_threads_under_original() {
        let v = serde_json::to_value(PostMessageRequest {
            channel: "C123",
            thread_ts: "1700000000.000100",
            text: "_Translation for :flag-fr:_\nBonjour",
        })
        .unwrap();
        assert_eq!(v["thread_ts"], "1700000000.000100");
        assert_eq!(v["channel"], "C123");
    }
}
