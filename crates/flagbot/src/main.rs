use std::sync::Arc;

use flagbot_core::{config, config::Config, reaction::ReactionTranslator};
use flagbot_slack::SlackMessenger;
use flagbot_translate::GoogleTranslator;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Before logging, so RUST_LOG from .env reaches the filter.
    let dotenv_loaded = config::load_dotenv()?;
    flagbot_core::logging::init("flagbot")?;
    tracing::debug!(dotenv_loaded, ".env checked");

    let cfg = Arc::new(Config::load()?);
    tracing::debug!(?cfg, "configuration loaded");

    let messenger = Arc::new(SlackMessenger::from_config(&cfg)?);
    let translator = Arc::new(GoogleTranslator::from_config(&cfg)?);
    let handler = Arc::new(ReactionTranslator::new(messenger, translator));

    flagbot_slack::router::run(cfg, handler)
        .await
        .map_err(|e| anyhow::anyhow!("slack listener failed: {e}"))
}
