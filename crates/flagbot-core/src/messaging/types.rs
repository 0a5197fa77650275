use crate::domain::{ChannelId, MessageTs};

/// An inbound "reaction added" notification, reduced to what the bot needs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReactionEvent {
    pub channel: ChannelId,
    pub message_ts: MessageTs,
    /// Emoji shortcode without colons, e.g. `flag-fr`.
    pub reaction: String,
}

/// A message fetched from channel history.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Message {
    pub ts: MessageTs,
    pub text: String,
}
