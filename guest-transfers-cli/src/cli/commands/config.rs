use std::path::Path;

use anyhow::Result;
use colored::*;

use crate::config::{default_config_path, Config};
use crate::guests::FileStorage;

pub fn handle_config_command(config: &Config, explicit_path: Option<&Path>) -> Result<()> {
    let config_path = explicit_path
        .map(Path::to_path_buf)
        .or_else(default_config_path);

    match config_path {
        Some(path) if path.exists() => {
            println!("{} {}", "Config file:".bold(), path.display().to_string().cyan())
        }
        Some(path) => println!(
            "{} {} {}",
            "Config file:".bold(),
            path.display().to_string().cyan(),
            "(not present, using defaults)".dimmed()
        ),
        None => println!("{} {}", "Config file:".bold(), "(no config directory)".dimmed()),
    }

    let snapshot = FileStorage::in_dir(&config.data_dir);
    println!(
        "{} {}",
        "Guest data:".bold(),
        snapshot.path().display().to_string().cyan()
    );
    println!();
    print!("{}", config.to_toml_string()?);
    Ok(())
}
