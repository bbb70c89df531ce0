//! armoury CLI
//!
//! Command-line interface for importing pasted rulebook tables as items.

mod cli_types;
mod commands;
mod error;
mod logger;

use clap::Parser;

use cli_types::{Cli, Commands, ConfigAction, FoldersAction, ItemsAction, TraitsAction};
use commands::config::{run_config_path, run_config_set, run_config_show};
use commands::folders::{run_folders_add, run_folders_list};
use commands::format::run_format;
use commands::import::run_import;
use commands::items::run_items_list;
use commands::preview::run_preview;
use commands::traits::{run_traits_add, run_traits_list, run_traits_path, run_traits_remove};

pub(crate) use error::CliError;

/// Emit an empty info line.
pub(crate) fn log_blank() {
    log::info!("");
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = logger::init(cli.quiet, cli.verbose, cli.logfile.as_deref()) {
        eprintln!("{}", e);
        std::process::exit(1);
    }

    if let Err(e) = run(cli) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Commands::Format { file } => run_format(file.as_deref()),
        Commands::Preview { paste } => run_preview(paste, cli.settings),
        Commands::Import { paste, folder } => {
            run_import(paste, folder, cli.db, cli.settings, cli.quiet)
        }
        Commands::Traits { action } => match action {
            TraitsAction::List => {
                run_traits_list(cli.settings);
                Ok(())
            }
            TraitsAction::Add { name, description } => {
                run_traits_add(cli.settings, &name, &description)
            }
            TraitsAction::Remove { name } => run_traits_remove(cli.settings, &name),
            TraitsAction::Path => {
                run_traits_path(cli.settings);
                Ok(())
            }
        },
        Commands::Config { action } => match action {
            ConfigAction::Show => {
                run_config_show(cli.settings);
                Ok(())
            }
            ConfigAction::Set { key, value } => run_config_set(cli.settings, &key, &value),
            ConfigAction::Path => {
                run_config_path(cli.settings);
                Ok(())
            }
        },
        Commands::Folders { action } => match action {
            FoldersAction::List => run_folders_list(cli.db),
            FoldersAction::Add { name } => run_folders_add(cli.db, &name),
        },
        Commands::Items { action } => match action {
            ItemsAction::List { folder } => run_items_list(cli.db, folder),
        },
    }
}
