//! Request lifecycle state.
//!
//! Exactly one variant is active at a time. Modeling the lifecycle as a single
//! enum rules out combinations such as "loading with an error set".

use std::fmt;

use crate::answers::AnswerSet;
use crate::recommendation::RecommendationResult;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum LifecycleState {
    /// No request made yet, or the session was reset.
    #[default]
    Idle,
    /// A request is in flight for this frozen snapshot of the answers.
    Submitting(AnswerSet),
    /// The last request succeeded. Stays here until reset.
    Succeeded(RecommendationResult),
    /// The last request failed with this user-facing message.
    Failed(String),
}

impl LifecycleState {
    pub fn is_submitting(&self) -> bool {
        matches!(self, LifecycleState::Submitting(_))
    }

    /// The result held by a `Succeeded` state.
    pub fn result(&self) -> Option<&RecommendationResult> {
        match self {
            LifecycleState::Succeeded(result) => Some(result),
            _ => None,
        }
    }

    /// The message held by a `Failed` state.
    pub fn error_message(&self) -> Option<&str> {
        match self {
            LifecycleState::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// Short lowercase name, used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            LifecycleState::Idle => "idle",
            LifecycleState::Submitting(_) => "submitting",
            LifecycleState::Succeeded(_) => "succeeded",
            LifecycleState::Failed(_) => "failed",
        }
    }
}

impl fmt::Display for LifecycleState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
