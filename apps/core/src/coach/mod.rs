//! # Coach Module
//!
//! Rule-table response selection for HealthCoach.
//! Maps each user message to a fixed advice block; no model involved.
//!
//! ## Components
//! - `topics`: Ordered keyword table with first-match lookup
//! - `replies`: The fixed advice texts, keyed by topic
//! - `responder`: The public `respond` entry point

pub mod replies;
pub mod responder;
pub mod topics;

// Re-export main types for convenience
pub use replies::{advice_for, CAPABILITY_MENU, GREETING};
pub use responder::CoachResponder;
pub use topics::{Topic, TopicMatch, TopicMatcher};
