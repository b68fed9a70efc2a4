//! Terminal prompts for the ask flow.
//!
//! Wraps `dialoguer` widgets and turns Ctrl+C inside a prompt into an
//! explicit [`Prompted::Interrupted`] instead of an error.

use std::io;

use console::style;
use dialoguer::{Confirm, Input, Select};

use popchoice_types::answers::Question;

/// Result of a prompt the user may abandon.
#[derive(Debug, PartialEq)]
pub enum Prompted<T> {
    Value(T),
    /// Ctrl+C / Esc inside the prompt.
    Interrupted,
}

/// What to do after a failed or cancelled request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NextStep {
    Retry,
    Edit,
    Quit,
}

impl NextStep {
    const CHOICES: [(NextStep, &'static str); 3] = [
        (NextStep::Retry, "Try again"),
        (NextStep::Edit, "Edit my answers"),
        (NextStep::Quit, "Quit"),
    ];

    fn from_index(index: usize) -> Self {
        Self::CHOICES
            .get(index)
            .map(|(step, _)| *step)
            .unwrap_or(NextStep::Quit)
    }
}

/// Ask one question, pre-filled with the current answer.
///
/// Blank answers are rejected in place, so a returned value is always
/// non-empty after trimming.
pub fn ask_question(question: Question, current: &str) -> anyhow::Result<Prompted<String>> {
    let prompt = format!("{}", style(question.prompt()).bold());
    let result = Input::<String>::new()
        .with_prompt(prompt)
        .with_initial_text(current)
        .validate_with(|input: &String| validate_answer(input))
        .interact_text();

    interruptible(result.map(|answer| answer.trim().to_string()))
}

/// "Go again?" after a successful match.
pub fn confirm_go_again() -> anyhow::Result<Prompted<bool>> {
    interruptible(
        Confirm::new()
            .with_prompt("Go again?")
            .default(true)
            .interact(),
    )
}

/// Offer retry / edit / quit after a failure or cancellation.
pub fn choose_next_step() -> anyhow::Result<Prompted<NextStep>> {
    let items: Vec<&str> = NextStep::CHOICES.iter().map(|(_, label)| *label).collect();
    let selection = Select::new()
        .with_prompt("What next?")
        .items(&items)
        .default(0)
        .interact_opt();

    match selection {
        Ok(Some(index)) => Ok(Prompted::Value(NextStep::from_index(index))),
        Ok(None) => Ok(Prompted::Interrupted),
        Err(err) => interruptible(Err(err)),
    }
}

fn validate_answer(input: &str) -> Result<(), &'static str> {
    if input.trim().is_empty() {
        Err("Please type an answer")
    } else {
        Ok(())
    }
}

fn interruptible<T>(result: dialoguer::Result<T>) -> anyhow::Result<Prompted<T>> {
    match result {
        Ok(value) => Ok(Prompted::Value(value)),
        Err(dialoguer::Error::IO(err)) if err.kind() == io::ErrorKind::Interrupted => {
            Ok(Prompted::Interrupted)
        }
        Err(err) => Err(err.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_answer_rejects_blank() {
        assert!(validate_answer("").is_err());
        assert!(validate_answer("   ").is_err());
        assert!(validate_answer("classic").is_ok());
    }

    #[test]
    fn test_next_step_from_index() {
        assert_eq!(NextStep::from_index(0), NextStep::Retry);
        assert_eq!(NextStep::from_index(1), NextStep::Edit);
        assert_eq!(NextStep::from_index(2), NextStep::Quit);
        assert_eq!(NextStep::from_index(9), NextStep::Quit);
    }

    #[test]
    fn test_interrupted_io_error_becomes_interrupted() {
        let err = dialoguer::Error::IO(io::Error::new(io::ErrorKind::Interrupted, "read interrupted"));
        let prompted = interruptible::<String>(Err(err)).unwrap();
        assert_eq!(prompted, Prompted::Interrupted);
    }

    #[test]
    fn test_other_io_errors_propagate() {
        let err = dialoguer::Error::IO(io::Error::new(io::ErrorKind::BrokenPipe, "closed"));
        assert!(interruptible::<String>(Err(err)).is_err());
    }
}
