use serde::Serialize;
use tokio::sync::oneshot;

use crate::models::{HealthProfile, Message, ProfileUpdate};

/// Defines errors that can occur within the actor system.
#[derive(Debug, thiserror::Error, Serialize, Clone)]
pub enum ActorError {
    /// The actor mailbox was closed before the request could be delivered.
    #[error("Mailbox closed: {0}")]
    Mailbox(String),
    /// The actor dropped the reply channel without answering.
    #[error("Reply channel dropped: {0}")]
    Dropped(String),
}

// Re-export AppError for convenience
pub use crate::error::AppError;

/// A point-in-time view of the conversation.
#[derive(Debug, Clone, Serialize)]
pub struct ConversationSnapshot {
    /// All messages so far, in creation order.
    pub messages: Vec<Message>,
    /// Whether a reply is currently being composed.
    pub is_typing: bool,
}

/// Messages that can be sent to the conversation actor.
#[derive(Debug)]
pub enum ConversationMessage {
    /// A user submission. Answered with the appended user message once the
    /// reply has been scheduled.
    Submit {
        text: String,
        /// A channel to send the appended user message (or rejection) back.
        responder: oneshot::Sender<Result<Message, AppError>>,
    },
    /// Internal: a composed reply coming back from the typing-delay task.
    ReplyReady { text: String },
    /// A request for the current message list and composing flag.
    Snapshot {
        responder: oneshot::Sender<ConversationSnapshot>,
    },
    /// A request for the current health profile.
    GetProfile {
        responder: oneshot::Sender<HealthProfile>,
    },
    /// A partial update of the health profile.
    UpdateProfile {
        update: ProfileUpdate,
        responder: oneshot::Sender<HealthProfile>,
    },
    /// A request to toggle a health goal on or off.
    ToggleGoal {
        goal: String,
        responder: oneshot::Sender<HealthProfile>,
    },
    /// A command to shut down the actor.
    #[allow(dead_code)]
    Shutdown,
}
