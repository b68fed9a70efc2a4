//! Non-interactive `popchoice recommend` command.

use popchoice_core::presenter::present;
use popchoice_types::answers::{AnswerSet, Question};
use popchoice_types::lifecycle::LifecycleState;

use crate::state::AppState;

use super::ask::renderer::{print_presentation, thinking_spinner};

/// Submit one answer set and print the match.
///
/// Fails (non-zero exit) with the user-facing message when the answers are
/// incomplete or the request fails.
pub async fn recommend(
    state: &AppState,
    q1: String,
    q2: String,
    q3: String,
    json: bool,
    quiet: bool,
) -> anyhow::Result<()> {
    let answers = AnswerSet::new()
        .with(Question::Q1, q1)
        .with(Question::Q2, q2)
        .with(Question::Q3, q3);

    let mut controller = state.controller()?;
    controller.set_answers(answers);

    let spinner = (!json && !quiet).then(thinking_spinner);
    let outcome = controller.submit().await.map(|current| current.clone());
    if let Some(spinner) = spinner {
        spinner.finish_and_clear();
    }

    match outcome? {
        LifecycleState::Succeeded(result) => {
            let presentation = present(&result);
            if json {
                let output = serde_json::json!({
                    "id": result.id,
                    "title": presentation.title,
                    "description": presentation.description,
                    "similarity": result.similarity,
                    "score_label": presentation.score_label,
                });
                println!("{}", serde_json::to_string_pretty(&output)?);
            } else if quiet {
                println!("{}", presentation.title);
            } else {
                print_presentation(&presentation);
            }
            Ok(())
        }
        LifecycleState::Failed(message) => {
            if json {
                let output = serde_json::json!({ "error": message });
                println!("{}", serde_json::to_string_pretty(&output)?);
            }
            anyhow::bail!("{message}")
        }
        other => anyhow::bail!("request ended in unexpected {other} state"),
    }
}
