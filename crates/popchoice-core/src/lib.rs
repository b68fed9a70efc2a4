//! Business logic and the transport port for PopChoice.
//!
//! This crate defines the `RecommendationTransport` trait that the
//! infrastructure layer implements, the request lifecycle controller, and the
//! result presenter. It depends only on `popchoice-types` -- never on
//! `popchoice-infra` or any network crate.

pub mod lifecycle;
pub mod presenter;
pub mod transport;
