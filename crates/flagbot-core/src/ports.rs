use async_trait::async_trait;

use crate::Result;

/// Output of a translation request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Translation {
    pub text: String,
    pub detected_source_language: Option<String>,
}

/// Port for the translation provider.
///
/// Implementations make exactly one outbound call per request: no caching,
/// no retry, no fallback language.
#[async_trait]
pub trait Translator: Send + Sync {
    async fn translate(&self, text: &str, target_language: &str) -> Result<Translation>;
}
