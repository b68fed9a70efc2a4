//! Main ask loop orchestration.
//!
//! Coordinates one interactive session: banner, the three questions, the
//! request with a cancellable spinner, the result, and the go-again /
//! retry / edit choices. All lifecycle decisions are delegated to the
//! controller; this module only reads its state.

use console::style;
use tracing::debug;

use popchoice_core::presenter::present;
use popchoice_types::answers::Question;
use popchoice_types::error::SubmitRejection;
use popchoice_types::lifecycle::LifecycleState;

use crate::state::{AppState, HttpController};

use super::banner::print_welcome_banner;
use super::input::{self, NextStep, Prompted};
use super::renderer::{print_failure, print_notice, print_presentation, thinking_spinner};

/// How a single submission attempt ended.
#[derive(Debug, PartialEq)]
enum Attempt {
    /// The transport resolved; the controller is `Succeeded` or `Failed`.
    Finished,
    /// The controller refused to submit; nothing was sent.
    Rejected(SubmitRejection),
    /// The user pressed Ctrl+C while waiting; the controller is `Idle`.
    Cancelled,
}

/// Run the interactive question-and-answer session.
pub async fn run_ask_loop(state: &AppState, quiet: bool) -> anyhow::Result<()> {
    if !quiet {
        print_welcome_banner(&state.config.base_url);
    }

    let mut controller = state.controller()?;

    'session: loop {
        if !collect_answers(&mut controller)? {
            break 'session;
        }

        loop {
            match submit_with_spinner(&mut controller, quiet).await {
                Attempt::Finished => {}
                Attempt::Rejected(rejection) => {
                    print_failure(&rejection.to_string());
                    continue 'session;
                }
                Attempt::Cancelled if !quiet => print_notice("Request cancelled."),
                Attempt::Cancelled => {}
            }

            match controller.state() {
                LifecycleState::Succeeded(result) => {
                    print_presentation(&present(result));
                    match input::confirm_go_again()? {
                        Prompted::Value(true) => {
                            controller.reset();
                            continue 'session;
                        }
                        Prompted::Value(false) | Prompted::Interrupted => break 'session,
                    }
                }
                LifecycleState::Failed(message) => print_failure(message),
                LifecycleState::Idle | LifecycleState::Submitting(_) => {}
            }

            match input::choose_next_step()? {
                Prompted::Value(NextStep::Retry) => continue,
                Prompted::Value(NextStep::Edit) => continue 'session,
                Prompted::Value(NextStep::Quit) | Prompted::Interrupted => break 'session,
            }
        }
    }

    println!("\n  {}\n", style("Enjoy the movie!").dim());
    Ok(())
}

/// Prompt for all three answers, pre-filled with the current ones.
///
/// Returns `false` if the user interrupted a prompt.
fn collect_answers(controller: &mut HttpController) -> anyhow::Result<bool> {
    for question in Question::ALL {
        let current = controller.answers().get(question).to_string();
        match input::ask_question(question, &current)? {
            Prompted::Value(answer) => controller.update_answer(question, answer),
            Prompted::Interrupted => return Ok(false),
        }
    }
    Ok(true)
}

/// Submit the current answers, racing the request against Ctrl+C.
///
/// The spinner is skipped under `--quiet`.
async fn submit_with_spinner(controller: &mut HttpController, quiet: bool) -> Attempt {
    let spinner = (!quiet).then(thinking_spinner);

    let attempt = tokio::select! {
        outcome = controller.submit() => match outcome {
            Ok(_) => Attempt::Finished,
            Err(rejection) => Attempt::Rejected(rejection),
        },
        Ok(()) = tokio::signal::ctrl_c() => Attempt::Cancelled,
    };

    if let Some(spinner) = spinner {
        spinner.finish_and_clear();
    }

    if attempt == Attempt::Cancelled {
        controller.cancel();
    }
    debug!(?attempt, state = controller.state().name(), "Submission attempt ended");
    attempt
}
