use anyhow::{Result, bail};

use super::{file_store, print_notice, show_guests};
use crate::cli::ImportArgs;
use crate::config::Config;
use crate::spreadsheet::decode_first_sheet_async;

/// Decode the spreadsheet, replace the saved list and show it
pub async fn handle_import_command(args: ImportArgs, config: &Config) -> Result<()> {
    if !args.file.exists() {
        bail!("Spreadsheet does not exist: {}", args.file.display());
    }

    // The store is only touched once decoding has fully succeeded
    let rows = decode_first_sheet_async(args.file.clone()).await?;

    let mut store = file_store(config);
    let notice = store.import_rows(rows)?;

    show_guests(&store, args.format)?;
    print_notice(notice);
    Ok(())
}
