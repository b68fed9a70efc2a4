//! Infrastructure layer for PopChoice.
//!
//! Contains the HTTP implementation of the `RecommendationTransport` port
//! defined in `popchoice-core` and the file/environment configuration loader.

pub mod config;
pub mod http;
