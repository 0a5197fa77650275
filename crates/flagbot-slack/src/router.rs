use std::{net::SocketAddr, sync::Arc};

use axum::{
    body::Bytes,
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use serde_json::json;
use tokio::{net::TcpListener, task::JoinHandle};
use tower_http::trace::TraceLayer;

use flagbot_core::{config::Config, messaging::types::ReactionEvent, reaction::ReactionTranslator};

use crate::events::Envelope;
use crate::signature::{SignatureVerifier, SIGNATURE_HEADER, TIMESTAMP_HEADER};

/// Events API request path (same default as Bolt).
pub const EVENTS_PATH: &str = "/slack/events";

#[derive(Clone)]
pub struct AppState {
    pub handler: Arc<ReactionTranslator>,
    pub verifier: Arc<SignatureVerifier>,
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(EVENTS_PATH, post(slack_events))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind the Events API listener and serve until Ctrl-C / SIGTERM.
///
/// Shutdown only stops accepting requests; reaction tasks already spawned run
/// to completion on the runtime.
pub async fn run(cfg: Arc<Config>, handler: Arc<ReactionTranslator>) -> anyhow::Result<()> {
    let state = AppState {
        handler,
        verifier: Arc::new(SignatureVerifier::new(cfg.slack_signing_secret.clone())),
    };

    let addr = SocketAddr::from(([0, 0, 0, 0], cfg.port));
    let listener = TcpListener::bind(addr).await?;
    tracing::info!(%addr, path = EVENTS_PATH, "flagbot is running");

    axum::serve(listener, build_router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("listener stopped");
    Ok(())
}

async fn health() -> &'static str {
    "OK"
}

async fn slack_events(State(state): State<AppState>, headers: HeaderMap, body: Bytes) -> Response {
    let (Some(timestamp), Some(signature)) = (
        header_str(&headers, TIMESTAMP_HEADER),
        header_str(&headers, SIGNATURE_HEADER),
    ) else {
        tracing::warn!("rejected request without Slack signature headers");
        return StatusCode::UNAUTHORIZED.into_response();
    };

    if let Err(e) = state.verifier.verify(timestamp, signature, &body) {
        tracing::warn!(error = %e, "rejected request with invalid signature");
        return StatusCode::UNAUTHORIZED.into_response();
    }

    let envelope: Envelope = match serde_json::from_slice(&body) {
        Ok(env) => env,
        Err(e) => {
            tracing::warn!(error = %e, "unparseable event payload");
            return StatusCode::BAD_REQUEST.into_response();
        }
    };

    match envelope {
        Envelope::UrlVerification { challenge } => {
            tracing::info!("answered url_verification challenge");
            Json(json!({ "challenge": challenge })).into_response()
        }
        Envelope::EventCallback { event_id, event } => {
            if let Some(reaction) = event.into_reaction() {
                // Ack now; Slack expects a response within 3 seconds.
                dispatch(state.handler.clone(), event_id, reaction);
            }
            StatusCode::OK.into_response()
        }
        Envelope::Other => StatusCode::OK.into_response(),
    }
}

/// Run one reaction event on its own task.
fn dispatch(
    handler: Arc<ReactionTranslator>,
    event_id: Option<String>,
    event: ReactionEvent,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let event_id = event_id.as_deref().unwrap_or("-");
        match handler.handle(&event).await {
            Ok(outcome) => {
                tracing::debug!(event_id, reaction = %event.reaction, ?outcome, "reaction handled");
            }
            Err(e) => {
                tracing::error!(
                    event_id,
                    channel = %event.channel,
                    ts = %event.message_ts,
                    reaction = %event.reaction,
                    error = %e,
                    "reaction handler failed"
                );
            }
        }
    })
}

fn header_str<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers.get(name).and_then(|v| v.to_str().ok())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    tracing::info!("shutdown signal received");
}
