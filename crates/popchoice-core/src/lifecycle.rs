//! Request lifecycle controller.
//!
//! Owns the live answer set and the single [`LifecycleState`], drives at most
//! one outstanding request through a [`RecommendationTransport`], and folds
//! the outcome back into the state. Transport failures end in
//! `LifecycleState::Failed`; nothing propagates past the controller.
//!
//! Transitions:
//!
//! | From                | Trigger | Guard     | To                     |
//! |---------------------|---------|-----------|------------------------|
//! | Idle / Failed       | submit  | ready     | Submitting(snapshot)   |
//! | Idle / Failed       | submit  | not ready | unchanged              |
//! | Submitting          | submit  | -         | unchanged              |
//! | Succeeded           | submit  | -         | unchanged              |
//! | Submitting          | resolve | latest id | Succeeded / Failed     |
//! | Submitting          | cancel  | -         | Idle (answers kept)    |
//! | Succeeded / Failed  | reset   | -         | Idle (answers cleared) |

use std::time::Instant;

use tracing::{debug, info, info_span, warn, Instrument};

use popchoice_types::answers::{AnswerSet, Question};
use popchoice_types::error::{RecommendError, SubmitRejection};
use popchoice_types::lifecycle::LifecycleState;
use popchoice_types::recommendation::RecommendationResult;

use crate::transport::RecommendationTransport;

/// A submission accepted by the controller.
///
/// `answers` is the frozen snapshot sent to the transport; later edits to the
/// live answer set do not touch it.
#[derive(Debug, Clone, PartialEq)]
pub struct Submission {
    pub id: u64,
    pub answers: AnswerSet,
}

pub struct LifecycleController<T> {
    transport: T,
    answers: AnswerSet,
    state: LifecycleState,
    /// Id handed out by the most recent accepted submission.
    last_submission: u64,
    /// Id of the request the `Submitting` state is waiting on.
    pending: Option<u64>,
}

impl<T: RecommendationTransport> LifecycleController<T> {
    /// Start a session: empty answers, `Idle`.
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            answers: AnswerSet::new(),
            state: LifecycleState::Idle,
            last_submission: 0,
            pending: None,
        }
    }

    pub fn state(&self) -> &LifecycleState {
        &self.state
    }

    /// The live answer set (not the in-flight snapshot).
    pub fn answers(&self) -> &AnswerSet {
        &self.answers
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn update_answer(&mut self, field: Question, value: impl Into<String>) {
        self.answers.update(field, value);
    }

    /// Replace all three answers at once.
    pub fn set_answers(&mut self, answers: AnswerSet) {
        self.answers = answers;
    }

    /// Validate and move to `Submitting`, returning the snapshot to send.
    ///
    /// Refusals leave the state untouched.
    pub fn begin_submission(&mut self) -> Result<Submission, SubmitRejection> {
        match &self.state {
            LifecycleState::Submitting(_) => return Err(SubmitRejection::InFlight),
            LifecycleState::Succeeded(_) => {
                return Err(SubmitRejection::NotAllowed {
                    state: self.state.name(),
                });
            }
            LifecycleState::Idle | LifecycleState::Failed(_) => {}
        }

        if !self.answers.is_ready() {
            return Err(SubmitRejection::NotReady {
                missing: self.answers.missing(),
            });
        }

        self.last_submission += 1;
        let id = self.last_submission;
        let snapshot = self.answers.clone();

        info!(submission_id = id, from = self.state.name(), "Submitting answers");
        self.state = LifecycleState::Submitting(snapshot.clone());
        self.pending = Some(id);

        Ok(Submission {
            id,
            answers: snapshot,
        })
    }

    /// Apply the outcome of submission `id`.
    ///
    /// Returns `false` and changes nothing when the controller is not waiting
    /// on `id` (cancelled or superseded requests).
    pub fn resolve(
        &mut self,
        id: u64,
        outcome: Result<RecommendationResult, RecommendError>,
    ) -> bool {
        if !self.state.is_submitting() || self.pending != Some(id) {
            warn!(
                submission_id = id,
                pending = ?self.pending,
                state = self.state.name(),
                "Discarding stale recommendation outcome"
            );
            return false;
        }

        self.pending = None;
        self.state = match outcome {
            Ok(result) => {
                info!(
                    submission_id = id,
                    recommendation_id = %result.id,
                    similarity = result.similarity,
                    "Recommendation received"
                );
                LifecycleState::Succeeded(result)
            }
            Err(err) => {
                info!(submission_id = id, error = %err, "Recommendation request failed");
                LifecycleState::Failed(err.user_message())
            }
        };
        true
    }

    /// Submit the current answers and wait for the outcome.
    ///
    /// `Err` means the submission was refused and nothing was sent; the state
    /// is unchanged. `&mut self` keeps a second call from starting while one
    /// is in flight.
    ///
    /// Dropping the returned future before it completes (a lost `select!`
    /// branch, `tokio::time::timeout`) leaves the controller in `Submitting`.
    /// Call [`Self::cancel`] afterwards to return to `Idle`.
    pub async fn submit(&mut self) -> Result<&LifecycleState, SubmitRejection> {
        let submission = match self.begin_submission() {
            Ok(submission) => submission,
            Err(rejection) => {
                debug!(%rejection, state = self.state.name(), "Submission ignored");
                return Err(rejection);
            }
        };

        let started = Instant::now();
        let outcome = self
            .transport
            .recommend(&submission.answers)
            .instrument(info_span!(
                "recommend",
                submission_id = submission.id,
                transport = self.transport.name()
            ))
            .await;
        debug!(
            submission_id = submission.id,
            transport = self.transport.name(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            ok = outcome.is_ok(),
            "Transport call finished"
        );

        self.resolve(submission.id, outcome);
        Ok(&self.state)
    }

    /// Return to `Idle` from `Succeeded` or `Failed`, clearing the answers.
    ///
    /// No-op (returns `false`) from `Idle` or `Submitting`.
    pub fn reset(&mut self) -> bool {
        match self.state {
            LifecycleState::Succeeded(_) | LifecycleState::Failed(_) => {
                debug!(from = self.state.name(), "Resetting session");
                self.state = LifecycleState::Idle;
                self.answers = AnswerSet::new();
                true
            }
            LifecycleState::Idle | LifecycleState::Submitting(_) => false,
        }
    }

    /// Abandon the in-flight request and return to `Idle`, keeping the answers.
    ///
    /// A late outcome for the abandoned request is discarded by [`Self::resolve`].
    pub fn cancel(&mut self) -> bool {
        if !self.state.is_submitting() {
            return false;
        }
        info!(submission_id = ?self.pending, "Cancelling in-flight request");
        self.pending = None;
        self.state = LifecycleState::Idle;
        true
    }
}
