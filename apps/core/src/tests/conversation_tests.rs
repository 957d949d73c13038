//! Conversation Tests
//!
//! Drives the conversation actor with canned reply sources and a zero-length
//! delay window, so the composing flow runs at test speed.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use crate::actors::conversation::{ConversationHandle, ReplyDelay};
use crate::actors::traits::ReplySource;
use crate::coach::{CoachResponder, GREETING};
use crate::error::AppError;

// --- Mock Reply Sources ---

struct CannedReplySource {
    reply: String,
}

#[async_trait]
impl ReplySource for CannedReplySource {
    async fn reply(&self, _user_text: &str) -> String {
        self.reply.clone()
    }
}

/// Holds the composing state open long enough for a test to observe it.
struct SlowReplySource {
    reply: String,
    hold: Duration,
}

#[async_trait]
impl ReplySource for SlowReplySource {
    async fn reply(&self, _user_text: &str) -> String {
        tokio::time::sleep(self.hold).await;
        self.reply.clone()
    }
}

// --- Test Setup ---

fn canned_handle(reply: &str) -> ConversationHandle {
    ConversationHandle::with_options(
        Arc::new(CannedReplySource {
            reply: reply.to_string(),
        }),
        ReplyDelay::none(),
    )
}

/// Polls until the composing flag clears, panicking after ~2 s.
async fn wait_for_reply(handle: &ConversationHandle) {
    for _ in 0..200 {
        let snapshot = handle.snapshot().await.unwrap();
        if !snapshot.is_typing {
            return;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    panic!("reply never arrived");
}

// --- Tests ---

#[tokio::test]
async fn test_conversation_opens_with_greeting() {
    let handle = canned_handle("ok");

    let snapshot = handle.snapshot().await.unwrap();
    assert_eq!(snapshot.messages.len(), 1);
    assert!(!snapshot.is_typing);

    let greeting = &snapshot.messages[0];
    assert_eq!(greeting.id, 1);
    assert!(!greeting.is_user);
    assert_eq!(greeting.text, GREETING);
}

#[tokio::test]
async fn test_submission_appends_user_then_reply() {
    let handle = canned_handle("Canned advice");

    let user_message = handle.submit("hello".to_string()).await.unwrap();
    assert_eq!(user_message.id, 2);
    assert!(user_message.is_user);
    assert_eq!(user_message.text, "hello");

    wait_for_reply(&handle).await;

    let snapshot = handle.snapshot().await.unwrap();
    assert_eq!(snapshot.messages.len(), 3);
    assert!(snapshot.messages[1].is_user);
    assert!(!snapshot.messages[2].is_user);
    assert_eq!(snapshot.messages[2].text, "Canned advice");
}

#[tokio::test]
async fn test_blank_submission_is_rejected_without_state_change() {
    let handle = canned_handle("unused");

    for input in ["", "   ", "\n\t"] {
        let result = handle.submit(input.to_string()).await;
        match result {
            Err(AppError::Validation(notice)) => {
                assert_eq!(notice, "Please enter a message");
            }
            other => panic!("expected validation error for {:?}, got {:?}", input, other.map(|m| m.id)),
        }
    }

    let snapshot = handle.snapshot().await.unwrap();
    assert_eq!(snapshot.messages.len(), 1, "rejected submissions must not append");
    assert!(!snapshot.is_typing);
}

#[tokio::test]
async fn test_submission_while_composing_is_rejected() {
    let handle = ConversationHandle::with_options(
        Arc::new(SlowReplySource {
            reply: "slow advice".to_string(),
            hold: Duration::from_millis(200),
        }),
        ReplyDelay::none(),
    );

    handle.submit("first".to_string()).await.unwrap();

    let second = handle.submit("second".to_string()).await;
    assert!(matches!(second, Err(AppError::Composing)));

    // Only greeting + first user message until the reply lands.
    let snapshot = handle.snapshot().await.unwrap();
    assert_eq!(snapshot.messages.len(), 2);
    assert!(snapshot.is_typing);

    wait_for_reply(&handle).await;

    let snapshot = handle.snapshot().await.unwrap();
    assert_eq!(snapshot.messages.len(), 3);
    assert_eq!(snapshot.messages[2].text, "slow advice");
}

#[tokio::test]
async fn test_message_ids_are_strictly_increasing() {
    let handle = canned_handle("reply");

    for text in ["one", "two", "three"] {
        handle.submit(text.to_string()).await.unwrap();
        wait_for_reply(&handle).await;
    }

    let snapshot = handle.snapshot().await.unwrap();
    assert_eq!(snapshot.messages.len(), 7);

    let ids: Vec<u64> = snapshot.messages.iter().map(|m| m.id).collect();
    assert_eq!(ids, vec![1, 2, 3, 4, 5, 6, 7]);
}

#[tokio::test]
async fn test_production_responder_replies_with_advice() {
    let handle = ConversationHandle::with_options(
        Arc::new(CoachResponder::new()),
        ReplyDelay::none(),
    );

    handle.submit("best workout routine".to_string()).await.unwrap();
    wait_for_reply(&handle).await;

    let snapshot = handle.snapshot().await.unwrap();
    let reply = &snapshot.messages[2];
    assert!(!reply.is_user);
    assert!(reply.text.starts_with("🏋️ **Workout Plan Options:**"));
}

#[tokio::test]
async fn test_reply_is_computed_from_the_submitted_text() {
    struct EchoReplySource;

    #[async_trait]
    impl ReplySource for EchoReplySource {
        async fn reply(&self, user_text: &str) -> String {
            format!("echo: {}", user_text)
        }
    }

    let handle = ConversationHandle::with_options(Arc::new(EchoReplySource), ReplyDelay::none());

    handle.submit("specific question".to_string()).await.unwrap();
    wait_for_reply(&handle).await;

    let snapshot = handle.snapshot().await.unwrap();
    assert_eq!(snapshot.messages[2].text, "echo: specific question");
}
