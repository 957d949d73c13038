//! The response-selection entry point.
//!
//! `respond` maps user text to one of the fixed advice blocks: case-fold,
//! take the first topic hit in priority order, fall back to the capability
//! menu. Pure and deterministic; it cannot fail for any input.

use tracing::debug;

use super::replies::{advice_for, CAPABILITY_MENU};
use super::topics::TopicMatcher;

/// Selects a canned reply for each user message.
pub struct CoachResponder {
    matcher: TopicMatcher,
}

impl Default for CoachResponder {
    fn default() -> Self {
        Self::new()
    }
}

impl CoachResponder {
    /// Create a new responder over the built-in topic table
    pub fn new() -> Self {
        Self {
            matcher: TopicMatcher::new(),
        }
    }

    /// Returns the advice block for the first matching topic, or the
    /// capability menu when no topic matches.
    pub fn respond(&self, user_text: &str) -> &'static str {
        match self.matcher.topic_for(user_text) {
            Some(hit) => {
                debug!("matched topic {} via keyword {:?}", hit.topic, hit.keyword);
                advice_for(hit.topic)
            }
            None => CAPABILITY_MENU,
        }
    }
}
