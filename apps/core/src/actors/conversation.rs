use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use rand::Rng;
use tokio::sync::{mpsc, oneshot};
use tokio::time::timeout;
use tracing::{error, info, instrument, warn};

use crate::actors::messages::{
    ActorError, AppError, ConversationMessage, ConversationSnapshot,
};
use crate::actors::traits::ReplySource;
use crate::coach::{CoachResponder, GREETING};
use crate::models::{HealthProfile, Message, ProfileUpdate};

/// How long a handle waits for the actor to answer before giving up.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// The window the composing delay is sampled from, uniform in `[min, max)`.
#[derive(Debug, Clone, Copy)]
pub struct ReplyDelay {
    min_ms: u64,
    max_ms: u64,
}

impl ReplyDelay {
    /// The production window: 1-2 seconds of simulated typing.
    pub fn typing() -> Self {
        Self {
            min_ms: 1000,
            max_ms: 2000,
        }
    }

    /// No delay at all. Used by tests.
    #[allow(dead_code)]
    pub fn none() -> Self {
        Self { min_ms: 0, max_ms: 0 }
    }

    fn sample(&self) -> Duration {
        if self.max_ms <= self.min_ms {
            return Duration::from_millis(self.min_ms);
        }
        Duration::from_millis(rand::thread_rng().gen_range(self.min_ms..self.max_ms))
    }
}

impl Default for ReplyDelay {
    fn default() -> Self {
        Self::typing()
    }
}

/// A handle to the conversation actor.
///
/// This is the primary entry point for all conversation and profile state.
/// The actor owns the message list, the composing flag and the health
/// profile; handles are cheap to clone and share across request handlers.
#[derive(Clone)]
pub struct ConversationHandle {
    sender: mpsc::Sender<ConversationMessage>,
}

impl ConversationHandle {
    /// Creates the production actor: rule-table replies with a 1-2 s
    /// simulated typing delay.
    pub fn new() -> Self {
        Self::with_options(Arc::new(CoachResponder::new()), ReplyDelay::typing())
    }

    /// Creates an actor with a specific reply source and delay window.
    pub fn with_options<R: ReplySource>(reply_source: Arc<R>, delay: ReplyDelay) -> Self {
        let (sender, receiver) = mpsc::channel(32);
        let runner = ConversationRunner::new(receiver, sender.clone(), reply_source, delay);
        tokio::spawn(async move { runner.run().await });
        Self { sender }
    }

    /// Submits a user message.
    ///
    /// On success the user message has been appended and the coach reply is
    /// being composed; the reply itself lands in the message list once the
    /// typing delay elapses.
    ///
    /// # Errors
    ///
    /// `AppError::Validation` when the trimmed text is empty and
    /// `AppError::Composing` while a previous reply is still pending.
    /// Neither mutates the conversation.
    #[instrument(skip(self))]
    pub async fn submit(&self, text: String) -> Result<Message, AppError> {
        let (send, recv) = oneshot::channel();
        let msg = ConversationMessage::Submit {
            text,
            responder: send,
        };
        self.sender
            .send(msg)
            .await
            .map_err(|e| ActorError::Mailbox(e.to_string()))?;
        timeout(REQUEST_TIMEOUT, recv)
            .await?
            .map_err(|e| AppError::from(ActorError::Dropped(e.to_string())))?
    }

    /// Returns the current message list and composing flag.
    pub async fn snapshot(&self) -> Result<ConversationSnapshot, AppError> {
        let (send, recv) = oneshot::channel();
        self.sender
            .send(ConversationMessage::Snapshot { responder: send })
            .await
            .map_err(|e| ActorError::Mailbox(e.to_string()))?;
        timeout(REQUEST_TIMEOUT, recv)
            .await?
            .map_err(|e| AppError::from(ActorError::Dropped(e.to_string())))
    }

    /// Returns the current health profile.
    pub async fn profile(&self) -> Result<HealthProfile, AppError> {
        let (send, recv) = oneshot::channel();
        self.sender
            .send(ConversationMessage::GetProfile { responder: send })
            .await
            .map_err(|e| ActorError::Mailbox(e.to_string()))?;
        timeout(REQUEST_TIMEOUT, recv)
            .await?
            .map_err(|e| AppError::from(ActorError::Dropped(e.to_string())))
    }

    /// Applies a partial profile update and returns the updated profile.
    #[instrument(skip(self))]
    pub async fn update_profile(&self, update: ProfileUpdate) -> Result<HealthProfile, AppError> {
        let (send, recv) = oneshot::channel();
        self.sender
            .send(ConversationMessage::UpdateProfile {
                update,
                responder: send,
            })
            .await
            .map_err(|e| ActorError::Mailbox(e.to_string()))?;
        timeout(REQUEST_TIMEOUT, recv)
            .await?
            .map_err(|e| AppError::from(ActorError::Dropped(e.to_string())))
    }

    /// Toggles a health goal and returns the updated profile.
    #[instrument(skip(self))]
    pub async fn toggle_goal(&self, goal: String) -> Result<HealthProfile, AppError> {
        let (send, recv) = oneshot::channel();
        self.sender
            .send(ConversationMessage::ToggleGoal {
                goal,
                responder: send,
            })
            .await
            .map_err(|e| ActorError::Mailbox(e.to_string()))?;
        timeout(REQUEST_TIMEOUT, recv)
            .await?
            .map_err(|e| AppError::from(ActorError::Dropped(e.to_string())))
    }
}

// --- Actor Runner ---
struct ConversationRunner<R: ReplySource> {
    receiver: mpsc::Receiver<ConversationMessage>,
    /// Handed to each typing-delay task so it can post the reply back.
    self_sender: mpsc::Sender<ConversationMessage>,
    reply_source: Arc<R>,
    delay: ReplyDelay,
    messages: Vec<Message>,
    profile: HealthProfile,
    next_id: u64,
    is_typing: bool,
}

impl<R: ReplySource> ConversationRunner<R> {
    fn new(
        receiver: mpsc::Receiver<ConversationMessage>,
        self_sender: mpsc::Sender<ConversationMessage>,
        reply_source: Arc<R>,
        delay: ReplyDelay,
    ) -> Self {
        let mut runner = Self {
            receiver,
            self_sender,
            reply_source,
            delay,
            messages: Vec::new(),
            profile: HealthProfile::default(),
            next_id: 1,
            is_typing: false,
        };
        // Every conversation opens with the coach greeting.
        runner.append(GREETING.to_string(), false);
        runner
    }

    /// Appends a message, assigning the next id from the counter.
    fn append(&mut self, text: String, is_user: bool) -> Message {
        let message = Message {
            id: self.next_id,
            text,
            is_user,
            timestamp: Utc::now(),
        };
        self.next_id += 1;
        self.messages.push(message.clone());
        message
    }

    async fn run(mut self) {
        info!("Conversation actor started");
        while let Some(msg) = self.receiver.recv().await {
            self.handle_message(msg);
        }
        info!("Conversation actor stopped");
    }

    fn handle_message(&mut self, msg: ConversationMessage) {
        match msg {
            ConversationMessage::Submit { text, responder } => {
                let result = self.handle_submit(text);
                if let Err(e) = &result {
                    warn!("Submission rejected: {}", e);
                }
                let _ = responder.send(result);
            }
            ConversationMessage::ReplyReady { text } => {
                self.append(text, false);
                self.is_typing = false;
            }
            ConversationMessage::Snapshot { responder } => {
                let _ = responder.send(ConversationSnapshot {
                    messages: self.messages.clone(),
                    is_typing: self.is_typing,
                });
            }
            ConversationMessage::GetProfile { responder } => {
                let _ = responder.send(self.profile.clone());
            }
            ConversationMessage::UpdateProfile { update, responder } => {
                if let Some(level) = update.activity_level {
                    info!("Activity level set to {}", level.label());
                }
                self.profile.apply(update);
                info!("Profile updated, BMI now {}", self.profile.bmi_display());
                let _ = responder.send(self.profile.clone());
            }
            ConversationMessage::ToggleGoal { goal, responder } => {
                self.profile.toggle_goal(&goal);
                let _ = responder.send(self.profile.clone());
            }
            ConversationMessage::Shutdown => {
                info!("Conversation actor shutting down...");
                self.receiver.close();
            }
        }
    }

    fn handle_submit(&mut self, text: String) -> Result<Message, AppError> {
        if text.trim().is_empty() {
            return Err(AppError::Validation("Please enter a message".to_string()));
        }
        if self.is_typing {
            return Err(AppError::Composing);
        }

        let user_message = self.append(text.clone(), true);
        self.is_typing = true;

        // Compose the reply after the typing delay. The sleep is never
        // cancelled: the reply always lands, and further submissions are
        // rejected until it does.
        let delay = self.delay.sample();
        let reply_source = Arc::clone(&self.reply_source);
        let sender = self.self_sender.clone();
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let reply = reply_source.reply(&text).await;
            if let Err(e) = sender
                .send(ConversationMessage::ReplyReady { text: reply })
                .await
            {
                error!("Failed to deliver composed reply: {}", e);
            }
        });

        Ok(user_message)
    }
}
