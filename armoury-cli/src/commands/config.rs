use std::path::PathBuf;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use armoury_lib::settings::{CUSTOM_TRAITS, default_value, setting_keys};
use armoury_lib::{SettingsStore, TomlSettings};

use crate::CliError;

/// Show every importer setting and whether it comes from the file or the
/// built-in default.
pub(crate) fn run_config_show(settings: Option<PathBuf>) {
    let store = TomlSettings::open(settings);
    let path = store.path();

    log::info!("{}", "Importer Settings".if_supports_color(Stdout, |t| t.bold()));
    crate::log_blank();

    if path.exists() {
        log::info!(
            "  Settings file: {} {}",
            path.display().if_supports_color(Stdout, |t| t.cyan()),
            "(exists)".if_supports_color(Stdout, |t| t.green()),
        );
    } else {
        log::info!(
            "  Settings file: {} {}",
            path.display().if_supports_color(Stdout, |t| t.cyan()),
            "(not found)".if_supports_color(Stdout, |t| t.dimmed()),
        );
    }
    crate::log_blank();

    for key in setting_keys() {
        let (value, source) = match store.get(key) {
            Some(v) => (v, "file"),
            None => (default_value(key).unwrap_or_default().to_string(), "default"),
        };
        let value = if key == CUSTOM_TRAITS {
            let count = armoury_lib::custom_trait_definitions(&store).len();
            format!("{} definition(s)", count)
        } else {
            value
        };
        log::info!(
            "  {:<16} {} {}",
            key,
            value,
            format!("({})", source).if_supports_color(Stdout, |t| t.dimmed()),
        );
    }
}

pub(crate) fn run_config_set(
    settings: Option<PathBuf>,
    key: &str,
    value: &str,
) -> Result<(), CliError> {
    let mut store = TomlSettings::open(settings);
    store.set(key, value).map_err(|e| CliError::config(e.to_string()))?;
    log::info!(
        "Set {} in {}",
        key.if_supports_color(Stdout, |t| t.bold()),
        store.path().display(),
    );
    Ok(())
}

pub(crate) fn run_config_path(settings: Option<PathBuf>) {
    let store = TomlSettings::open(settings);
    log::info!("{}", store.path().display());
}
