use anyhow::Result;

use super::{file_store, print_no_guests, print_notice, print_table};
use crate::cli::ListArgs;
use crate::config::Config;
use crate::render::render_table;

pub fn handle_list_command(args: ListArgs, config: &Config) -> Result<()> {
    let mut store = file_store(config);
    let notice = store.load_persisted()?;

    let Some(mut table) = render_table(store.guests()) else {
        print_no_guests();
        return Ok(());
    };

    if let Some(status) = args.status {
        table.retain_status(status);
    }

    print_table(&table, args.format)?;
    if let Some(notice) = notice {
        print_notice(notice);
    }
    Ok(())
}
