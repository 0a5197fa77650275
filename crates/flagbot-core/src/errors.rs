/// Core error type for the bot.
///
/// Adapter crates map their transport errors into this type so the reaction
/// handler and the event dispatcher can report failures consistently.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("config error: {0}")]
    Config(String),

    #[error("security violation: {0}")]
    Security(String),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("slack error: {0}")]
    Slack(String),

    #[error("translation error: {0}")]
    Translation(String),

    #[error("external error: {0}")]
    External(String),
}

pub type Result<T> = std::result::Result<T, Error>;
