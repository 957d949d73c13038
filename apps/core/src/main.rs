// HealthCoach V1 Backend Entry Point
// "The Coach" - rule-table replies behind a chat-shaped API

mod actors;
mod coach;
mod config;
mod error;
mod models;
mod routes;
mod server;

#[cfg(test)]
mod tests;

use anyhow::Result;
use tracing::info;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use crate::actors::conversation::ConversationHandle;
use crate::config::Config;
use crate::server::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;
    info!("HealthCoach core starting");

    let conversation = ConversationHandle::new();
    let state = AppState::new(conversation);

    server::run(config, state).await?;
    Ok(())
}
