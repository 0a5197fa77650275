//! Slack request signing (v0).
//!
//! `X-Slack-Signature` is `v0=` + hex(HMAC-SHA256(signing_secret,
//! "v0:{X-Slack-Request-Timestamp}:{raw body}")).

use hmac::{Hmac, Mac};
use sha2::Sha256;

use flagbot_core::{errors::Error, Result};

type HmacSha256 = Hmac<Sha256>;

pub const SIGNATURE_HEADER: &str = "x-slack-signature";
pub const TIMESTAMP_HEADER: &str = "x-slack-request-timestamp";

const VERSION: &str = "v0";
/// Maximum accepted clock distance, in seconds.
const MAX_SKEW_SECS: u64 = 60 * 5;

#[derive(Clone)]
pub struct SignatureVerifier {
    secret: String,
}

impl SignatureVerifier {
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
        }
    }

    fn mac(&self, timestamp: &str, body: &[u8]) -> Result<HmacSha256> {
        let mut mac = HmacSha256::new_from_slice(self.secret.as_bytes())
            .map_err(|e| Error::Security(format!("invalid signing secret: {e}")))?;
        mac.update(VERSION.as_bytes());
        mac.update(b":");
        mac.update(timestamp.as_bytes());
        mac.update(b":");
        mac.update(body);
        Ok(mac)
    }

    /// Signature header value for `body` sent at `timestamp`.
    pub fn sign(&self, timestamp: &str, body: &[u8]) -> Result<String> {
        let mac = self.mac(timestamp, body)?;
        Ok(format!(
            "{VERSION}={}",
            hex::encode(mac.finalize().into_bytes())
        ))
    }

    /// Verify a request against the local clock.
    pub fn verify(&self, timestamp: &str, signature: &str, body: &[u8]) -> Result<()> {
        self.verify_at(timestamp, signature, body, chrono::Utc::now().timestamp())
    }

    pub fn verify_at(&self, timestamp: &str, signature: &str, body: &[u8], now: i64) -> Result<()> {
        let ts: i64 = timestamp
            .trim()
            .parse()
            .map_err(|_| Error::Security(format!("invalid request timestamp: {timestamp}")))?;
        if now.abs_diff(ts) > MAX_SKEW_SECS {
            return Err(Error::Security(format!(
                "stale request timestamp: {ts} (now {now})"
            )));
        }

        let hex_sig = signature
            .strip_prefix("v0=")
            .ok_or_else(|| Error::Security("unsupported signature version".to_string()))?;
        let expected = hex::decode(hex_sig)
            .map_err(|_| Error::Security("signature is not valid hex".to_string()))?;

        self.mac(timestamp, body)?
            .verify_slice(&expected)
            .map_err(|_| Error::Security("signature mismatch".to_string()))
    }
}
