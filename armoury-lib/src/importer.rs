//! Importer configuration read from and written to a [`SettingsStore`]:
//! the custom trait list and the default icon per item kind.

use armoury_catalog::{
    CustomTraitDictionary, CustomTraitEntry, IconSet, base_trait_name, entries_from_json,
    entries_to_json,
};

use crate::error::SettingsError;
use crate::settings::{
    ARMOUR_ICON, CUSTOM_TRAITS, FORCE_FIELD_ICON, GRENADE_ICON, MELEE_ICON, RANGED_ICON,
    SHIELD_ICON, SettingsStore, setting_or_default,
};

/// The stored custom trait entries, in stored order.
///
/// Malformed JSON is logged and read as an empty list.
pub fn custom_trait_entries(store: &dyn SettingsStore) -> Vec<CustomTraitEntry> {
    entries_from_json(&setting_or_default(store, CUSTOM_TRAITS))
}

/// Snapshot of the custom trait dictionary for one preview or import.
pub fn custom_trait_definitions(store: &dyn SettingsStore) -> CustomTraitDictionary {
    CustomTraitDictionary::from_entries(&custom_trait_entries(store))
}

/// Replace the stored list. Entries with a blank name or description are
/// dropped; returns how many were kept.
pub fn save_custom_traits(
    store: &mut dyn SettingsStore,
    entries: &[CustomTraitEntry],
) -> Result<usize, SettingsError> {
    let kept = entries.iter().filter(|e| e.is_complete()).count();
    store.set(CUSTOM_TRAITS, &entries_to_json(entries))?;
    Ok(kept)
}

/// Add a custom trait, replacing any entry with the same base name.
/// Returns `true` when an existing entry was replaced.
pub fn add_custom_trait(
    store: &mut dyn SettingsStore,
    name: &str,
    description: &str,
) -> Result<bool, SettingsError> {
    let base = base_trait_name(name);
    let mut entries = custom_trait_entries(store);
    let before = entries.len();
    entries.retain(|e| base_trait_name(&e.name) != base);
    let replaced = entries.len() != before;

    entries.push(CustomTraitEntry::new(name.trim(), description.trim()));
    save_custom_traits(store, &entries)?;
    Ok(replaced)
}

/// Remove custom traits whose base name matches `name`. Returns how many
/// entries were removed.
pub fn remove_custom_trait(
    store: &mut dyn SettingsStore,
    name: &str,
) -> Result<usize, SettingsError> {
    let base = base_trait_name(name);
    let mut entries = custom_trait_entries(store);
    let before = entries.len();
    entries.retain(|e| base_trait_name(&e.name) != base);
    let removed = before - entries.len();

    if removed > 0 {
        save_custom_traits(store, &entries)?;
    }
    Ok(removed)
}

/// Default icons for every item kind, falling back to the system assets.
pub fn load_icons(store: &dyn SettingsStore) -> IconSet {
    IconSet {
        melee: setting_or_default(store, MELEE_ICON),
        ranged: setting_or_default(store, RANGED_ICON),
        grenade: setting_or_default(store, GRENADE_ICON),
        armour: setting_or_default(store, ARMOUR_ICON),
        shield: setting_or_default(store, SHIELD_ICON),
        force_field: setting_or_default(store, FORCE_FIELD_ICON),
    }
}

#[cfg(test)]
#[path = "tests/importer_tests.rs"]
mod tests;
