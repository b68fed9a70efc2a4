//! Welcome banner display for interactive sessions.

use console::style;

/// Print the welcome banner at the start of an interactive session.
pub fn print_welcome_banner(base_url: &str) {
    println!();
    println!("  {} {}", "🍿", style("PopChoice").cyan().bold());
    println!(
        "  {}",
        style("Answer three questions and get a movie to watch tonight.").dim()
    );
    println!();
    println!("  {}  {}", style("Service:").bold(), style(base_url).dim());
    println!();
    println!("  {}", style("Ctrl+C while thinking cancels the request").dim());
    println!("  {}", style("---").dim());
    println!();
}
