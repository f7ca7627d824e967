//! Command handlers

mod clear;
mod config;
mod import;
mod list;
mod send;

use anyhow::Result;
use colored::*;

use super::{Cli, Commands, OutputFormat};
use crate::config::Config;
use crate::guests::{FileStorage, GuestStore, Notice};
use crate::render::{export, render_table, terminal, TableView};

/// Resolve configuration and run the selected command
pub async fn run(cli: Cli) -> Result<()> {
    let mut config = Config::load(cli.config.as_deref())?;
    if let Some(dir) = cli.data_dir {
        config = config.with_data_dir(dir);
    }
    log::debug!("Using data directory {}", config.data_dir.display());

    match cli.command {
        Commands::Import(args) => import::handle_import_command(args, &config).await,
        Commands::List(args) => list::handle_list_command(args, &config),
        Commands::Send(args) => send::handle_send_command(args, &config),
        Commands::Clear(args) => clear::handle_clear_command(args, &config),
        Commands::Config => config::handle_config_command(&config, cli.config.as_deref()),
    }
}

/// Store backed by the snapshot file in the configured data directory
fn file_store(config: &Config) -> GuestStore<FileStorage> {
    GuestStore::new(FileStorage::in_dir(&config.data_dir))
}

/// The status line goes to stderr so machine-readable output stays clean
fn print_notice(notice: Notice) {
    eprintln!("{}", notice.to_string().bright_green());
}

fn print_no_guests() {
    eprintln!(
        "{}",
        "No guests loaded. Run 'guest-transfers import <FILE>' first.".yellow()
    );
}

fn print_table(table: &TableView, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Table => print!("{}", terminal::format_table(table)),
        OutputFormat::Json => println!("{}", export::format_json(table)?),
        OutputFormat::Csv => print!("{}", export::format_csv(table)?),
    }
    Ok(())
}

/// Re-render the whole list after a change
fn show_guests(store: &GuestStore<FileStorage>, format: OutputFormat) -> Result<()> {
    match render_table(store.guests()) {
        Some(table) => print_table(&table, format),
        None => {
            print_no_guests();
            Ok(())
        }
    }
}
