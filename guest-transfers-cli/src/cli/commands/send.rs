use anyhow::{Result, bail};
use colored::*;

use super::{file_store, show_guests};
use crate::cli::{OutputFormat, SendArgs};
use crate::config::Config;
use crate::dispatch::{dispatch, BrowserOpener, DispatchOutcome, LinkOpener, PrintOpener};

pub fn handle_send_command(args: SendArgs, config: &Config) -> Result<()> {
    let mut store = file_store(config);
    store.load_persisted()?;

    if store.is_empty() {
        bail!("No guests loaded. Run 'guest-transfers import <FILE>' first.");
    }

    let index = match (args.row, args.next) {
        (Some(row), _) => row_to_index(row, store.len())?,
        (None, true) => match store.next_pending() {
            Some(index) => index,
            None => {
                println!("{}", "Every guest has already been handled.".green());
                return Ok(());
            }
        },
        (None, false) => bail!("Specify a row number or --next"),
    };

    let opener: &dyn LinkOpener = if args.dry_run || !config.open_links {
        &PrintOpener
    } else {
        &BrowserOpener
    };

    let name = store
        .get(index)
        .map(|g| g.text("Name"))
        .unwrap_or_default();

    match dispatch(&mut store, index, config, opener)? {
        DispatchOutcome::Sent { .. } => {
            println!(
                "{} {} (row {})",
                "Message opened for".green(),
                name.bold(),
                index + 1
            );
        }
        DispatchOutcome::NoWhatsapp { phone } => {
            let shown = if phone.is_empty() { "none".to_string() } else { phone };
            println!(
                "{} {} (row {}): phone {} is not usable, marked no-whatsapp",
                "Skipped".red(),
                name.bold(),
                index + 1,
                shown
            );
        }
    }

    show_guests(&store, OutputFormat::Table)
}

/// Convert a 1-based row number from the command line into a list index
fn row_to_index(row: usize, count: usize) -> Result<usize> {
    if row == 0 || row > count {
        bail!("Row {} does not exist (rows 1-{} are loaded)", row, count);
    }
    Ok(row - 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_to_index() {
        assert_eq!(row_to_index(1, 3).unwrap(), 0);
        assert_eq!(row_to_index(3, 3).unwrap(), 2);
        assert!(row_to_index(0, 3).is_err());
        assert!(row_to_index(4, 3).is_err());
    }
}
