use armoury_lib::settings::{CUSTOM_TRAITS, SHIELD_ICON};
use armoury_lib::{
    SettingsStore, TomlSettings, add_custom_trait, custom_trait_definitions, load_icons,
    remove_custom_trait,
};
use tempfile::TempDir;

#[test]
fn custom_traits_persist_across_store_instances() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("settings.toml");

    let mut store = TomlSettings::new(&path);
    add_custom_trait(&mut store, "Sanctified (X)", "Ignores daemonic resilience.").unwrap();
    add_custom_trait(&mut store, "Warp Touched", "Roll on the Perils table.").unwrap();

    let reopened = TomlSettings::new(&path);
    let dict = custom_trait_definitions(&reopened);
    assert_eq!(dict.len(), 2);
    assert_eq!(
        dict.get("sanctified").unwrap().description,
        "Ignores daemonic resilience."
    );
}

#[test]
fn malformed_custom_traits_in_file_read_as_empty() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("settings.toml");
    let mut store = TomlSettings::new(&path);
    store.set(CUSTOM_TRAITS, "{not json").unwrap();

    assert!(custom_trait_definitions(&store).is_empty());
    // Removing from a malformed list leaves it untouched.
    assert_eq!(remove_custom_trait(&mut store, "anything").unwrap(), 0);
    assert_eq!(store.get(CUSTOM_TRAITS).as_deref(), Some("{not json"));
}

#[test]
fn icon_overrides_come_from_file() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("settings.toml");
    std::fs::write(&path, "[importer]\nshieldIcon = \"icons/round.webp\"\n").unwrap();

    let store = TomlSettings::new(&path);
    assert_eq!(store.get(SHIELD_ICON).as_deref(), Some("icons/round.webp"));
    let icons = load_icons(&store);
    assert_eq!(icons.shield, "icons/round.webp");
    assert!(icons.armour.ends_with("armour.webp"));
}
