//! Shared domain types for PopChoice.
//!
//! This crate contains the answer set, recommendation result, lifecycle state,
//! client configuration, and their associated error types.
//!
//! Zero infrastructure dependencies -- only serde, serde_json, thiserror.

pub mod answers;
pub mod config;
pub mod error;
pub mod lifecycle;
pub mod recommendation;
