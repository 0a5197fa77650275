//! Slack Events API payloads.

use serde::Deserialize;

use flagbot_core::{
    domain::{ChannelId, MessageTs},
    messaging::types::ReactionEvent,
};

/// Outer envelope posted to the request URL.
#[derive(Clone, Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Envelope {
    UrlVerification {
        challenge: String,
    },
    EventCallback {
        #[serde(default)]
        event_id: Option<String>,
        event: CallbackEvent,
    },
    #[serde(other)]
    Other,
}

/// Inner event of an `event_callback`. Only reactions are modelled.
#[derive(Clone, Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CallbackEvent {
    ReactionAdded {
        reaction: String,
        item: ReactionItem,
        #[serde(default)]
        user: Option<String>,
    },
    #[serde(other)]
    Other,
}

/// What the reaction was attached to.
#[derive(Clone, Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ReactionItem {
    Message { channel: String, ts: String },
    #[serde(other)]
    Other,
}

impl CallbackEvent {
    /// Reduce to a core [`ReactionEvent`] when this is a reaction on a message.
    pub fn into_reaction(self) -> Option<ReactionEvent> {
        match self {
            CallbackEvent::ReactionAdded {
                reaction,
                item: ReactionItem::Message { channel, ts },
                ..
            } => Some(ReactionEvent {
                channel: ChannelId(channel),
                message_ts: MessageTs(ts),
                reaction,
            }),
            _ => None,
        }
    }
}
