//! `popchoice config`: show the resolved client configuration.

use console::style;

use crate::state::AppState;

pub fn show_config(state: &AppState, json: bool) -> anyhow::Result<()> {
    let config_path = state.data_dir.join("config.toml");

    if json {
        let output = serde_json::json!({
            "base_url": state.config.base_url,
            "base_url_source": state.url_source.label(),
            "timeout_secs": state.config.timeout_secs,
            "data_dir": state.data_dir.display().to_string(),
            "config_file": config_path.display().to_string(),
            "config_file_exists": config_path.exists(),
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!();
    println!("  {}", style("PopChoice configuration").bold());
    println!();
    println!(
        "  {:<12} {} {}",
        style("Base URL:").bold(),
        style(&state.config.base_url).cyan(),
        style(format!("({})", state.url_source.label())).dim()
    );
    println!(
        "  {:<12} {}s",
        style("Timeout:").bold(),
        state.config.timeout_secs
    );
    println!(
        "  {:<12} {}",
        style("Config:").bold(),
        if config_path.exists() {
            config_path.display().to_string()
        } else {
            format!("{} (not found, using defaults)", config_path.display())
        }
    );
    println!();
    Ok(())
}
