//! `lexm config`: show the configuration requests are bound with.

use std::path::Path;

use anyhow::Result;
use console::style;

use lexmodel_core::operation::endpoint;
use lexmodel_types::config::{ClientConfig, ValidationMode};

pub fn show_config(config: &ClientConfig, path: &Path, json: bool) -> Result<()> {
    let resolved = endpoint(config)?;

    if json {
        let out = serde_json::json!({
            "path": path.display().to_string(),
            "exists": path.exists(),
            "config": config,
            "resolved_endpoint": resolved.as_str(),
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    println!();
    println!("  {}", style("── Config ──").dim());
    println!(
        "  File:       {}{}",
        style(path.display()).dim(),
        if path.exists() { "" } else { " (not found, defaults)" }
    );
    println!("  Region:     {}", style(&config.region).bold());
    println!("  Endpoint:   {}", style(resolved.as_str()).cyan());
    println!(
        "  Validation: {}",
        match config.validation {
            ValidationMode::Strict => style("strict").green(),
            ValidationMode::Off => style("off").yellow(),
        }
    );
    if let Some(agent) = &config.user_agent {
        println!("  User agent: {agent}");
    }
    println!();
    println!("  {}", style("── As TOML ──").dim());
    for line in toml::to_string_pretty(config)?.lines() {
        println!("  {line}");
    }
    println!();

    Ok(())
}
