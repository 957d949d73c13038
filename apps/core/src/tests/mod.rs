//! Test Module
//!
//! Test suite for the HealthCoach backend.
//!
//! ## Test Categories
//! - `responder_tests`: Topic lookup and response selection
//! - `conversation_tests`: Submission flow, composing state, message ids
//! - `profile_tests`: Profile state, goal toggling, BMI derivation
//! - `routes_tests`: The HTTP surface, driven through the axum router

pub mod conversation_tests;
