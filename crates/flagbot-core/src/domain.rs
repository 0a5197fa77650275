/// Slack channel id (e.g. `C0123456789`).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ChannelId(pub String);

/// Slack message timestamp (`"1700000000.000100"`), which doubles as the
/// message id within a channel.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct MessageTs(pub String);

/// A stable reference to a Slack message.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct MessageRef {
    pub channel: ChannelId,
    pub ts: MessageTs,
}

impl std::fmt::Display for ChannelId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::fmt::Display for MessageTs {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
