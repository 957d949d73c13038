//! # Actor System
//!
//! The conversation actor owns all mutable state (message list, composing
//! flag, health profile) behind an mpsc mailbox; handles are the only entry
//! point. One actor per process, living as long as the session.

pub mod conversation;
pub mod messages;
pub mod traits;
