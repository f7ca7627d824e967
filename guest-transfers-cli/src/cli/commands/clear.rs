use anyhow::{Context, Result, bail};
use colored::*;
use dialoguer::Confirm;
use is_terminal::IsTerminal;

use super::{file_store, print_notice};
use crate::cli::ClearArgs;
use crate::config::Config;

pub fn handle_clear_command(args: ClearArgs, config: &Config) -> Result<()> {
    if !args.yes {
        if !std::io::stdin().is_terminal() {
            bail!("Refusing to clear guest data without confirmation; pass --yes");
        }

        let confirmed = Confirm::new()
            .with_prompt("Delete all saved guest data?")
            .default(false)
            .interact()
            .context("Failed to read confirmation")?;

        if !confirmed {
            println!("{}", "Nothing was deleted.".dimmed());
            return Ok(());
        }
    }

    let mut store = file_store(config);
    let notice = store.clear()?;
    print_notice(notice);
    Ok(())
}
