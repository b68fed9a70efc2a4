//! Terminal rendering of lifecycle outcomes.

use std::time::Duration;

use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use popchoice_core::presenter::Presentation;

/// Start the "Thinking..." spinner shown while a request is in flight.
pub fn thinking_spinner() -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    if let Ok(spinner_style) = ProgressStyle::default_spinner().template("  {spinner:.cyan} {msg}") {
        spinner.set_style(spinner_style);
    }
    spinner.set_message("Thinking...");
    spinner.enable_steady_tick(Duration::from_millis(80));
    spinner
}

/// Print a matched movie: title, optional description, similarity score.
pub fn print_presentation(presentation: &Presentation) {
    println!();
    println!("  {} {}", "🎬", style(&presentation.title).cyan().bold());
    if !presentation.description.is_empty() {
        println!("  {}", presentation.description);
    }
    println!();
    println!(
        "  {} {}",
        style("Similarity score:").dim(),
        style(&presentation.score_label).green().bold()
    );
    println!();
}

/// Print a user-facing failure message.
pub fn print_failure(message: &str) {
    eprintln!();
    eprintln!("  {} {message}", style("!").red().bold());
    eprintln!();
}

/// Print a dim one-line notice.
pub fn print_notice(message: &str) {
    println!("\n  {}\n", style(message).dim());
}
