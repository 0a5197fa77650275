use async_trait::async_trait;

use crate::{
    domain::{ChannelId, MessageRef, MessageTs},
    messaging::types::Message,
    Result,
};

/// Chat-platform port.
///
/// Slack is the only implementation; the reaction handler only depends on
/// this trait so tests can substitute a recording fake.
#[async_trait]
pub trait MessagingPort: Send + Sync {
    /// Fetch the single message at `ts` in `channel`.
    ///
    /// `Ok(None)` when the platform returns no message (deleted, or not
    /// visible to the bot).
    async fn fetch_message(&self, channel: &ChannelId, ts: &MessageTs) -> Result<Option<Message>>;

    /// Post `text` as a threaded reply under `thread_ts`.
    async fn post_thread_reply(
        &self,
        channel: &ChannelId,
        thread_ts: &MessageTs,
        text: &str,
    ) -> Result<MessageRef>;
}
