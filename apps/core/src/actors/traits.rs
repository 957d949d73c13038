use async_trait::async_trait;

use crate::coach::CoachResponder;

/// Defines the source of coach replies.
///
/// The production implementation is the rule-table [`CoachResponder`];
/// tests substitute canned sources to drive the conversation actor without
/// the real advice content or its timing.
#[async_trait]
pub trait ReplySource: Send + Sync + 'static {
    /// Composes the reply for a user message.
    async fn reply(&self, user_text: &str) -> String;
}

#[async_trait]
impl ReplySource for CoachResponder {
    async fn reply(&self, user_text: &str) -> String {
        self.respond(user_text).to_string()
    }
}
