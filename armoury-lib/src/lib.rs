//! Shared configuration for the armoury importer: the settings store,
//! importer settings (custom traits, default icons) and file locations.

pub mod error;
pub mod importer;
pub mod settings;

pub use error::SettingsError;
pub use importer::{
    add_custom_trait, custom_trait_definitions, custom_trait_entries, load_icons,
    remove_custom_trait, save_custom_traits,
};
pub use settings::{
    MemorySettings, SettingsStore, TomlSettings, default_database_path, setting_or_default,
    settings_path,
};
