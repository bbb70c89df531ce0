//! CLI type definitions: command enums and argument structs.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use armoury_catalog::{ItemType, WeaponCategory};

#[derive(Parser)]
#[command(name = "armoury")]
#[command(
    about = "Import weapons, armour, shields and force fields from pasted rulebook tables",
    long_about = None
)]
pub(crate) struct Cli {
    /// Item database (defaults to the user data directory)
    #[arg(long, global = true)]
    pub db: Option<PathBuf>,

    /// Settings file (defaults to the user config directory)
    #[arg(long, global = true)]
    pub settings: Option<PathBuf>,

    /// Only show warnings and errors (suppress normal output)
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Enable verbose/debug logging (timestamps + debug-level messages)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Write log output to a file (ANSI codes stripped)
    #[arg(long, global = true)]
    pub logfile: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Where the pasted table comes from and how to read it.
#[derive(Args, Clone)]
pub(crate) struct PasteArgs {
    /// File containing the pasted table (reads stdin when omitted)
    pub file: Option<PathBuf>,

    /// Item type: weapon, protection (armour), shield, force-field
    #[arg(short = 't', long = "type")]
    pub item_type: ItemType,

    /// Weapon category (mundane, chain, las, bolt, ...)
    #[arg(short, long, default_value = "mundane")]
    pub category: WeaponCategory,

    /// Convert tab or multi-space columns to pipes before parsing
    #[arg(long)]
    pub format: bool,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Reformat a tab or space separated paste into pipe-delimited lines
    Format {
        /// File containing the pasted table (reads stdin when omitted)
        file: Option<PathBuf>,
    },

    /// Show how each line of a paste would be parsed, without importing
    Preview {
        #[command(flatten)]
        paste: PasteArgs,
    },

    /// Parse a paste and store every recognised item
    Import {
        #[command(flatten)]
        paste: PasteArgs,

        /// Destination folder id or name
        #[arg(long)]
        folder: Option<String>,
    },

    /// Manage custom trait definitions
    Traits {
        #[command(subcommand)]
        action: TraitsAction,
    },

    /// Show or change importer settings
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Manage destination folders
    Folders {
        #[command(subcommand)]
        action: FoldersAction,
    },

    /// Inspect imported items
    Items {
        #[command(subcommand)]
        action: ItemsAction,
    },
}

#[derive(Subcommand)]
pub(crate) enum TraitsAction {
    /// List custom traits
    List,

    /// Add a custom trait, replacing one with the same name
    Add {
        /// Trait name, e.g. "Sanctified (X)"
        name: String,

        /// Text shown in the item notes
        description: String,
    },

    /// Remove a custom trait by name
    Remove {
        name: String,
    },

    /// Print the settings file path
    Path,
}

#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Show current settings and their sources
    Show,

    /// Set a setting (e.g. meleeIcon)
    Set {
        key: String,
        value: String,
    },

    /// Print the settings file path
    Path,
}

#[derive(Subcommand)]
pub(crate) enum FoldersAction {
    /// List item folders
    List,

    /// Create an item folder
    Add {
        name: String,
    },
}

#[derive(Subcommand)]
pub(crate) enum ItemsAction {
    /// List imported items
    List {
        /// Only items in this folder (id or name)
        #[arg(long)]
        folder: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn import_accepts_type_aliases_and_category() {
        let cli = Cli::try_parse_from([
            "armoury", "import", "paste.txt", "-t", "armour", "-c", "las", "--folder", "locker",
        ])
        .unwrap();
        match cli.command {
            Commands::Import { paste, folder } => {
                assert_eq!(paste.item_type, ItemType::Protection);
                assert_eq!(paste.category, WeaponCategory::Las);
                assert_eq!(folder.as_deref(), Some("locker"));
                assert!(!paste.format);
            }
            _ => panic!("expected import"),
        }
    }

    #[test]
    fn category_defaults_to_mundane() {
        let cli = Cli::try_parse_from(["armoury", "preview", "-t", "force-field"]).unwrap();
        match cli.command {
            Commands::Preview { paste } => {
                assert_eq!(paste.item_type, ItemType::ForceField);
                assert_eq!(paste.category, WeaponCategory::Mundane);
                assert!(paste.file.is_none());
            }
            _ => panic!("expected preview"),
        }
    }

    #[test]
    fn unknown_item_type_is_rejected() {
        assert!(Cli::try_parse_from(["armoury", "preview", "-t", "vehicle"]).is_err());
    }
}
