//! HTTP server for healthcoach-core

use std::sync::Arc;
use std::time::Instant;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::actors::conversation::ConversationHandle;
use crate::coach::CoachResponder;
use crate::config::Config;
use crate::error::AppError;
use crate::routes;

/// Application state shared across handlers
pub struct AppState {
    /// Handle to the conversation actor owning all mutable state.
    pub conversation: ConversationHandle,
    /// The pure responder, served directly on the stateless boundary.
    pub responder: CoachResponder,
    pub start_time: Instant,
}

impl AppState {
    pub fn new(conversation: ConversationHandle) -> Self {
        Self {
            conversation,
            responder: CoachResponder::new(),
            start_time: Instant::now(),
        }
    }
}

/// Builds the full route tree over the shared state.
pub fn router(state: AppState) -> Router {
    Router::new()
        .merge(routes::respond_routes())
        .merge(routes::chat_routes())
        .merge(routes::profile_routes())
        .merge(routes::health_routes())
        .with_state(Arc::new(state))
        .layer(TraceLayer::new_for_http())
        // The UI is a browser app on another origin.
        .layer(CorsLayer::permissive())
}

/// Run the HTTP server
pub async fn run(config: Config, state: AppState) -> Result<(), AppError> {
    let app = router(state);

    let listener = TcpListener::bind(config.bind_addr).await?;
    info!("Listening on http://{}", config.bind_addr);

    axum::serve(listener, app).await?;
    Ok(())
}
