//! Importer settings store and file locations.
//!
//! Settings live in the `[importer]` table of
//! `~/.config/armoury/settings.toml`. Every value is a string, matching the
//! host's key-value settings model. Writes update only the touched key and
//! replace the file atomically, so unrelated tables are preserved.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::error::SettingsError;

const APP_DIR: &str = "armoury";
const SECTION: &str = "importer";

/// JSON array of `{name, description}` custom trait entries.
pub const CUSTOM_TRAITS: &str = "customTraits";
pub const MELEE_ICON: &str = "meleeIcon";
pub const RANGED_ICON: &str = "rangedIcon";
pub const GRENADE_ICON: &str = "grenadeIcon";
pub const ARMOUR_ICON: &str = "armourIcon";
pub const SHIELD_ICON: &str = "shieldIcon";
pub const FORCE_FIELD_ICON: &str = "forceFieldIcon";

/// Every recognized setting with its default value.
const DEFAULTS: &[(&str, &str)] = &[
    (CUSTOM_TRAITS, "[]"),
    (
        MELEE_ICON,
        "modules/impmal-core/assets/icons/weapons/melee-weapon.webp",
    ),
    (
        RANGED_ICON,
        "modules/impmal-core/assets/icons/weapons/ranged-weapon.webp",
    ),
    (
        GRENADE_ICON,
        "modules/impmal-core/assets/icons/weapons/frag-missile.webp",
    ),
    (
        ARMOUR_ICON,
        "modules/impmal-core/assets/icons/protection/armour.webp",
    ),
    (
        SHIELD_ICON,
        "modules/impmal-core/assets/icons/protection/shield.webp",
    ),
    (
        FORCE_FIELD_ICON,
        "modules/impmal-core/assets/icons/protection/field.webp",
    ),
];

/// Names of all recognized settings, in display order.
pub fn setting_keys() -> impl Iterator<Item = &'static str> {
    DEFAULTS.iter().map(|(key, _)| *key)
}

/// Default value of a recognized setting.
pub fn default_value(key: &str) -> Option<&'static str> {
    DEFAULTS
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, value)| *value)
}

/// Canonical path to the settings file: `~/.config/armoury/settings.toml`.
pub fn settings_path() -> PathBuf {
    let config = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    config.join(APP_DIR).join("settings.toml")
}

/// Default item database location: `~/.local/share/armoury/items.db`.
pub fn default_database_path() -> PathBuf {
    let data = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
    data.join(APP_DIR).join("items.db")
}

/// A durable string key-value store.
pub trait SettingsStore {
    /// The stored value, or `None` when the key has never been set.
    fn get(&self, key: &str) -> Option<String>;

    /// Store a value. Only recognized keys are accepted.
    fn set(&mut self, key: &str, value: &str) -> Result<(), SettingsError>;
}

/// The stored value of `key`, falling back to its default (or empty).
pub fn setting_or_default(store: &dyn SettingsStore, key: &str) -> String {
    store
        .get(key)
        .or_else(|| default_value(key).map(str::to_string))
        .unwrap_or_default()
}

fn check_key(key: &str) -> Result<(), SettingsError> {
    if default_value(key).is_some() {
        Ok(())
    } else {
        Err(SettingsError::unknown_key(key))
    }
}

// ── TOML file ───────────────────────────────────────────────────────────────

/// Settings backed by a TOML file.
///
/// The file is read on every `get`, so edits made by another process are
/// picked up by the next operation.
#[derive(Debug, Clone)]
pub struct TomlSettings {
    path: PathBuf,
}

impl TomlSettings {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Settings at the canonical location, or at `path_override` if given.
    pub fn open(path_override: Option<PathBuf>) -> Self {
        Self::new(path_override.unwrap_or_else(settings_path))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The parsed file, or `None` when it does not exist yet.
    fn read_document(&self) -> Result<Option<toml::Value>, SettingsError> {
        let contents = match std::fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        Ok(Some(contents.parse::<toml::Value>()?))
    }

    /// Lenient read for lookups: an unreadable file behaves like a missing one.
    fn load_document(&self) -> Option<toml::Value> {
        match self.read_document() {
            Ok(doc) => doc,
            Err(e) => {
                log::warn!("Ignoring unreadable settings file {}: {}", self.path.display(), e);
                None
            }
        }
    }

    /// The whole settings file, pretty-printed, for display.
    pub fn load_string(&self) -> Option<String> {
        let doc = self.load_document()?;
        toml::to_string_pretty(&doc).ok()
    }

    fn write_document(&self, doc: &toml::Value) -> Result<(), SettingsError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let serialized = toml::to_string_pretty(doc)?;
        let tmp = self.path.with_extension("toml.tmp");
        std::fs::write(&tmp, &serialized)?;
        std::fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

impl SettingsStore for TomlSettings {
    fn get(&self, key: &str) -> Option<String> {
        let doc = self.load_document()?;
        let value = doc.get(SECTION)?.get(key)?.as_str()?;
        Some(value.to_string())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), SettingsError> {
        check_key(key)?;

        // A file that fails to parse is left untouched.
        let mut doc = self
            .read_document()?
            .unwrap_or_else(|| toml::Value::Table(Default::default()));
        let table = doc
            .as_table_mut()
            .ok_or_else(|| SettingsError::not_a_table("root"))?;
        let section = table
            .entry(SECTION)
            .or_insert_with(|| toml::Value::Table(Default::default()));
        let section = section
            .as_table_mut()
            .ok_or_else(|| SettingsError::not_a_table(SECTION))?;
        section.insert(key.to_string(), toml::Value::String(value.to_string()));

        self.write_document(&doc)
    }
}

// ── In memory ───────────────────────────────────────────────────────────────

/// Settings held in memory, for tests and one-off runs.
#[derive(Debug, Clone, Default)]
pub struct MemorySettings {
    values: HashMap<String, String>,
}

impl MemorySettings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: &str, value: &str) -> Self {
        self.values.insert(key.to_string(), value.to_string());
        self
    }
}

impl SettingsStore for MemorySettings {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), SettingsError> {
        check_key(key)?;
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
#[path = "tests/settings_tests.rs"]
mod tests;
