use std::{env, path::Path, time::Duration};

use crate::{errors::Error, Result};

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_SLACK_API_BASE_URL: &str = "https://slack.com/api";
pub const DEFAULT_TRANSLATE_BASE_URL: &str = "https://translation.googleapis.com";
const DEFAULT_HTTP_TIMEOUT_MS: u64 = 10_000;

/// Typed process configuration.
///
/// Credentials come from the environment (optionally seeded from `.env`);
/// endpoints default to the public Slack / Google APIs.
#[derive(Clone)]
pub struct Config {
    // Slack
    pub slack_bot_token: String,
    pub slack_signing_secret: String,
    pub slack_api_base_url: String,

    // Google Cloud Translation
    pub translate_api_key: String,
    pub translate_base_url: String,

    // Runtime
    pub port: u16,
    pub http_timeout: Duration,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("slack_bot_token", &"<redacted>")
            .field("slack_signing_secret", &"<redacted>")
            .field("slack_api_base_url", &self.slack_api_base_url)
            .field("translate_api_key", &"<redacted>")
            .field("translate_base_url", &self.translate_base_url)
            .field("port", &self.port)
            .field("http_timeout", &self.http_timeout)
            .finish()
    }
}

impl Config {
    /// Build the config from the process environment.
    ///
    /// Call [`load_dotenv`] first so `.env` values (including `RUST_LOG`) are
    /// visible both here and to the logging filter.
    pub fn load() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the config from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let required = |key: &str| -> Result<String> {
            lookup(key).and_then(non_empty).ok_or_else(|| {
                Error::Config(format!("{key} environment variable is required"))
            })
        };

        let slack_bot_token = required("SLACK_BOT_TOKEN")?;
        let slack_signing_secret = required("SLACK_SIGNING_SECRET")?;
        let translate_api_key = required("GOOGLE_TRANSLATE_API_KEY")?;

        let port = match lookup("PORT").and_then(non_empty) {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| Error::Config(format!("PORT is not a valid port number: {raw}")))?,
            None => DEFAULT_PORT,
        };

        let slack_api_base_url = lookup("SLACK_API_BASE_URL")
            .and_then(non_empty)
            .map(|s| trim_trailing_slash(&s))
            .unwrap_or_else(|| DEFAULT_SLACK_API_BASE_URL.to_string());
        let translate_base_url = lookup("GOOGLE_TRANSLATE_BASE_URL")
            .and_then(non_empty)
            .map(|s| trim_trailing_slash(&s))
            .unwrap_or_else(|| DEFAULT_TRANSLATE_BASE_URL.to_string());

        let http_timeout = Duration::from_millis(
            lookup("HTTP_TIMEOUT_MS")
                .and_then(|s| s.trim().parse::<u64>().ok())
                .unwrap_or(DEFAULT_HTTP_TIMEOUT_MS),
        );

        Ok(Self {
            slack_bot_token,
            slack_signing_secret,
            slack_api_base_url,
            translate_api_key,
            translate_base_url,
            port,
            http_timeout,
        })
    }
}

/// Seed the process environment from `./.env` (or the nearest parent's).
/// Variables already set are never overridden. Returns whether a file was read.
pub fn load_dotenv() -> Result<bool> {
    match dotenvy::dotenv() {
        Ok(_) => Ok(true),
        Err(e) if e.not_found() => Ok(false),
        Err(e) => Err(Error::Config(format!(".env could not be loaded: {e}"))),
    }
}

/// Like [`load_dotenv`], for an explicit file.
pub fn load_dotenv_from(path: impl AsRef<Path>) -> Result<bool> {
    let path = path.as_ref();
    match dotenvy::from_path(path) {
        Ok(()) => Ok(true),
        Err(e) if e.not_found() => Ok(false),
        Err(e) => Err(Error::Config(format!(
            "{} could not be loaded: {e}",
            path.display()
        ))),
    }
}

fn non_empty(s: String) -> Option<String> {
    if s.trim().is_empty() {
        None
    } else {
        Some(s)
    }
}

fn trim_trailing_slash(s: &str) -> String {
    s.trim().trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    const REQUIRED: [(&str, &str); 3] = [
        ("SLACK_BOT_TOKEN", "xoxb-test"),
        ("SLACK_SIGNING_SECRET", "secret"),
        ("GOOGLE_TRANSLATE_API_KEY", "gkey"),
    ];

    #[test]
    fn defaults_apply_when_optional_vars_missing() {
        let cfg = Config::from_lookup(lookup_from(&REQUIRED)).unwrap();
        assert_eq!(cfg.port, 3000);
        assert_eq!(cfg.slack_api_base_url, "https://slack.com/api");
        assert_eq!(cfg.translate_base_url, "https://translation.googleapis.com");
        assert_eq!(cfg.http_timeout, Duration::from_secs(10));
    }

    #[test]
    fn missing_required_var_is_config_error() {
        let err = Config::from_lookup(lookup_from(&REQUIRED[..2])).unwrap_err();
        assert!(matches!(err, Error::Config(msg) if msg.contains("GOOGLE_TRANSLATE_API_KEY")));
    }

    #[test]
    fn blank_required_var_counts_as_missing() {
        let mut pairs = REQUIRED.to_vec();
        pairs[0] = ("SLACK_BOT_TOKEN", "   ");
        let err = Config::from_lookup(lookup_from(&pairs)).unwrap_err();
        assert!(matches!(err, Error::Config(msg) if msg.contains("SLACK_BOT_TOKEN")));
    }

    #[test]
    fn port_and_base_urls_are_overridable() {
        let mut pairs = REQUIRED.to_vec();
        pairs.push(("PORT", "8080"));
        pairs.push(("SLACK_API_BASE_URL", "http://127.0.0.1:9000/api/"));
        pairs.push(("HTTP_TIMEOUT_MS", "2500"));
        let cfg = Config::from_lookup(lookup_from(&pairs)).unwrap();
        assert_eq!(cfg.port, 8080);
        assert_eq!(cfg.slack_api_base_url, "http://127.0.0.1:9000/api");
        assert_eq!(cfg.http_timeout, Duration::from_millis(2500));
    }

    #[test]
    fn invalid_port_is_rejected() {
        let mut pairs = REQUIRED.to_vec();
        pairs.push(("PORT", "not-a-port"));
        assert!(matches!(
            Config::from_lookup(lookup_from(&pairs)),
            Err(Error::Config(_))
        ));
    }

    #[test]
    fn dotenv_file_seeds_env_without_overriding() {
        let dir = env::temp_dir().join(format!("flagbot-dotenv-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join(".env");
        std::fs::write(
            &path,
            "FLAGBOT_TEST_DOTENV_NEW=from-file\nFLAGBOT_TEST_DOTENV_SET=from-file\n",
        )
        .unwrap();
        env::set_var("FLAGBOT_TEST_DOTENV_SET", "from-process");

        assert!(load_dotenv_from(&path).unwrap());
        assert_eq!(env::var("FLAGBOT_TEST_DOTENV_NEW").unwrap(), "from-file");
        assert_eq!(env::var("FLAGBOT_TEST_DOTENV_SET").unwrap(), "from-process");

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn missing_dotenv_file_is_not_an_error() {
        let path = env::temp_dir().join("flagbot-no-such-dir").join(".env");
        assert!(!load_dotenv_from(path).unwrap());
    }

    #[test]
    fn debug_output_redacts_secrets() {
        let cfg = Config::from_lookup(lookup_from(&REQUIRED)).unwrap();
        let dbg = format!("{cfg:?}");
        assert!(!dbg.contains("xoxb-test"));
        assert!(!dbg.contains("gkey"));
    }
}
