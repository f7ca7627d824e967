//! Command-line interface definition

pub mod commands;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::guests::GuestStatus;

#[derive(Parser, Debug)]
#[command(
    name = "guest-transfers",
    version,
    about = "Import guest transfer bookings and send WhatsApp confirmations"
)]
pub struct Cli {
    /// Directory holding the saved guest list
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Config file to use instead of the default location
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Import bookings from the first sheet of a spreadsheet, replacing the current list
    Import(ImportArgs),
    /// Show the saved guest list
    List(ListArgs),
    /// Send the confirmation message to one guest
    Send(SendArgs),
    /// Delete all saved guest data
    Clear(ClearArgs),
    /// Show the effective configuration
    Config,
}

#[derive(Args, Debug)]
pub struct ImportArgs {
    /// Spreadsheet file (xlsx, xlsm, xlsb, xls, ods or csv)
    pub file: PathBuf,

    /// Output format for the imported table
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Only show guests with this status (pending, done, no-whatsapp)
    #[arg(long)]
    pub status: Option<GuestStatus>,
}

#[derive(Args, Debug)]
pub struct SendArgs {
    /// Row number as shown in the Action column (1-based)
    #[arg(required_unless_present = "next", conflicts_with = "next")]
    pub row: Option<usize>,

    /// Send to the first guest that is still pending
    #[arg(long)]
    pub next: bool,

    /// Print the link instead of opening it
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(Args, Debug)]
pub struct ClearArgs {
    /// Skip the confirmation prompt
    #[arg(short, long)]
    pub yes: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    /// Aligned, colored table
    Table,
    /// Pretty-printed JSON array
    Json,
    /// Comma-separated values
    Csv,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_send_row() {
        let cli = Cli::try_parse_from(["guest-transfers", "send", "3", "--dry-run"]).unwrap();
        match cli.command {
            Commands::Send(args) => {
                assert_eq!(args.row, Some(3));
                assert!(!args.next);
                assert!(args.dry_run);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_send_requires_row_or_next() {
        assert!(Cli::try_parse_from(["guest-transfers", "send"]).is_err());
        assert!(Cli::try_parse_from(["guest-transfers", "send", "1", "--next"]).is_err());
        assert!(Cli::try_parse_from(["guest-transfers", "send", "--next"]).is_ok());
    }

    #[test]
    fn test_parse_list_filters() {
        let cli = Cli::try_parse_from([
            "guest-transfers",
            "list",
            "--format",
            "csv",
            "--status",
            "no-whatsapp",
            "--data-dir",
            "/tmp/guests",
        ])
        .unwrap();
        assert_eq!(cli.data_dir, Some(PathBuf::from("/tmp/guests")));
        match cli.command {
            Commands::List(args) => {
                assert_eq!(args.format, OutputFormat::Csv);
                assert_eq!(args.status, Some(GuestStatus::NoWhatsapp));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
