use std::path::PathBuf;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use armoury_lib::{TomlSettings, add_custom_trait, custom_trait_entries, remove_custom_trait};

use crate::CliError;

/// List stored custom traits. Incomplete entries are shown but marked.
pub(crate) fn run_traits_list(settings: Option<PathBuf>) {
    let store = TomlSettings::open(settings);
    let entries = custom_trait_entries(&store);

    if entries.is_empty() {
        log::info!("No custom traits defined.");
        log::info!("Add one with: armoury traits add NAME DESCRIPTION");
        return;
    }

    log::info!(
        "{}",
        format!("Custom traits ({})", entries.len()).if_supports_color(Stdout, |t| t.bold()),
    );
    for entry in &entries {
        if entry.is_complete() {
            log::info!(
                "  {}: {}",
                entry.name.if_supports_color(Stdout, |t| t.cyan()),
                entry.description,
            );
        } else {
            log::info!(
                "  {} {}",
                entry.name.if_supports_color(Stdout, |t| t.cyan()),
                "(incomplete, ignored)".if_supports_color(Stdout, |t| t.dimmed()),
            );
        }
    }
}

pub(crate) fn run_traits_add(
    settings: Option<PathBuf>,
    name: &str,
    description: &str,
) -> Result<(), CliError> {
    if name.trim().is_empty() || description.trim().is_empty() {
        return Err(CliError::config("custom traits need both a name and a description"));
    }

    let mut store = TomlSettings::open(settings);
    let replaced = add_custom_trait(&mut store, name, description)
        .map_err(|e| CliError::config(format!("Failed to save custom traits: {}", e)))?;

    let verb = if replaced { "Replaced" } else { "Added" };
    log::info!(
        "{} custom trait {}",
        verb,
        name.trim().if_supports_color(Stdout, |t| t.bold()),
    );
    Ok(())
}

pub(crate) fn run_traits_remove(settings: Option<PathBuf>, name: &str) -> Result<(), CliError> {
    let mut store = TomlSettings::open(settings);
    let removed = remove_custom_trait(&mut store, name)
        .map_err(|e| CliError::config(format!("Failed to save custom traits: {}", e)))?;

    if removed == 0 {
        log::warn!("No custom trait named '{}'", name);
    } else {
        log::info!("Removed {} custom trait(s) named '{}'", removed, name);
    }
    Ok(())
}

pub(crate) fn run_traits_path(settings: Option<PathBuf>) {
    let store = TomlSettings::open(settings);
    log::info!("{}", store.path().display());
}
