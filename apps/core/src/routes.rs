//! API routes for healthcoach-core
//!
//! `POST /respond` is the stateless, testable boundary over the pure
//! response-selection function; the `/chat` and `/profile` routes go through
//! the conversation actor.

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;
use validator::Validate;

use crate::actors::messages::ConversationSnapshot;
use crate::error::AppError;
use crate::models::{HealthProfile, Message, ProfileUpdate, GOAL_OPTIONS};
use crate::server::AppState;

type AppStateArc = Arc<AppState>;

/// Maps an application error to the HTTP status it surfaces as.
fn reject(err: AppError) -> (StatusCode, String) {
    let status = match err {
        AppError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
        AppError::Composing => StatusCode::CONFLICT,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    };
    (status, err.to_string())
}

// ============================================================================
// Responder Routes
// ============================================================================

/// Request body for `POST /respond`.
#[derive(Debug, Deserialize)]
pub struct RespondRequest {
    pub text: String,
}

/// Response body for `POST /respond`.
#[derive(Debug, Serialize)]
pub struct RespondResponse {
    pub reply: String,
}

pub fn respond_routes() -> Router<AppStateArc> {
    Router::new().route("/respond", post(respond))
}

/// Never fails: unmatched (or empty) text yields the capability menu.
/// Empty input is rejected at the chat boundary, not here.
async fn respond(
    State(state): State<AppStateArc>,
    Json(req): Json<RespondRequest>,
) -> Json<RespondResponse> {
    Json(RespondResponse {
        reply: state.responder.respond(&req.text).to_string(),
    })
}

// ============================================================================
// Chat Routes
// ============================================================================

/// Request body for a chat submission.
#[derive(Debug, Deserialize, Validate)]
pub struct SendMessageRequest {
    /// The user's message. Must not be empty.
    #[validate(length(min = 1))]
    pub text: String,
}

/// Response body for an accepted chat submission.
#[derive(Debug, Serialize)]
pub struct SendMessageResponse {
    /// The appended user message.
    pub message: Message,
    /// Always `true` right after an accepted submission.
    pub is_typing: bool,
}

pub fn chat_routes() -> Router<AppStateArc> {
    Router::new().route("/chat/messages", post(send_message).get(list_messages))
}

async fn send_message(
    State(state): State<AppStateArc>,
    Json(req): Json<SendMessageRequest>,
) -> Result<(StatusCode, Json<SendMessageResponse>), (StatusCode, String)> {
    req.validate()
        .map_err(|_| (StatusCode::UNPROCESSABLE_ENTITY, "Please enter a message".to_string()))?;

    info!("Chat submission received");
    let message = state.conversation.submit(req.text).await.map_err(reject)?;

    Ok((
        StatusCode::CREATED,
        Json(SendMessageResponse {
            message,
            is_typing: true,
        }),
    ))
}

async fn list_messages(
    State(state): State<AppStateArc>,
) -> Result<Json<ConversationSnapshot>, (StatusCode, String)> {
    state.conversation.snapshot().await.map(Json).map_err(reject)
}

// ============================================================================
// Profile Routes
// ============================================================================

/// The profile as served to the UI, with the derived BMI display value.
#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    #[serde(flatten)]
    pub profile: HealthProfile,
    /// Derived BMI display value; `--` when weight or height is unusable.
    pub bmi: String,
    /// The fixed set of selectable goals.
    pub goal_options: Vec<&'static str>,
}

impl From<HealthProfile> for ProfileResponse {
    fn from(profile: HealthProfile) -> Self {
        let bmi = profile.bmi_display();
        Self {
            profile,
            bmi,
            goal_options: GOAL_OPTIONS.to_vec(),
        }
    }
}

/// Request body for `POST /profile/goals/toggle`.
#[derive(Debug, Deserialize)]
pub struct ToggleGoalRequest {
    pub goal: String,
}

pub fn profile_routes() -> Router<AppStateArc> {
    Router::new()
        .route("/profile", get(get_profile).put(update_profile))
        .route("/profile/goals/toggle", post(toggle_goal))
}

async fn get_profile(
    State(state): State<AppStateArc>,
) -> Result<Json<ProfileResponse>, (StatusCode, String)> {
    state
        .conversation
        .profile()
        .await
        .map(|p| Json(ProfileResponse::from(p)))
        .map_err(reject)
}

async fn update_profile(
    State(state): State<AppStateArc>,
    Json(update): Json<ProfileUpdate>,
) -> Result<Json<ProfileResponse>, (StatusCode, String)> {
    state
        .conversation
        .update_profile(update)
        .await
        .map(|p| Json(ProfileResponse::from(p)))
        .map_err(reject)
}

async fn toggle_goal(
    State(state): State<AppStateArc>,
    Json(req): Json<ToggleGoalRequest>,
) -> Result<Json<ProfileResponse>, (StatusCode, String)> {
    state
        .conversation
        .toggle_goal(req.goal)
        .await
        .map(|p| Json(ProfileResponse::from(p)))
        .map_err(reject)
}

// ============================================================================
// Health Routes
// ============================================================================

/// Response body for the liveness endpoint.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub uptime_seconds: u64,
}

pub fn health_routes() -> Router<AppStateArc> {
    Router::new().route("/health", get(health_check))
}

async fn health_check(State(state): State<AppStateArc>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        uptime_seconds: state.start_time.elapsed().as_secs(),
    })
}
