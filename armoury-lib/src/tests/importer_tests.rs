use super::*;
use crate::settings::MemorySettings;

#[test]
fn malformed_custom_traits_are_an_empty_dictionary() {
    let store = MemorySettings::new().with(CUSTOM_TRAITS, "{not json");
    assert!(custom_trait_definitions(&store).is_empty());
    assert!(custom_trait_entries(&store).is_empty());
}

#[test]
fn unset_custom_traits_are_empty() {
    let store = MemorySettings::new();
    assert!(custom_trait_definitions(&store).is_empty());
}

#[test]
fn definitions_skip_incomplete_entries() {
    let store = MemorySettings::new().with(
        CUSTOM_TRAITS,
        r#"[{"name":"Sanctified","description":"Holy."},{"name":"Empty","description":""}]"#,
    );
    let dict = custom_trait_definitions(&store);
    assert_eq!(dict.len(), 1);
    assert!(dict.contains("sanctified"));
}

#[test]
fn add_replaces_same_base_name() {
    let mut store = MemorySettings::new();
    assert!(!add_custom_trait(&mut store, "Sanctified (1)", "old").unwrap());
    assert!(add_custom_trait(&mut store, "sanctified", "new").unwrap());

    let entries = custom_trait_entries(&store);
    assert_eq!(entries, vec![CustomTraitEntry::new("sanctified", "new")]);
}

#[test]
fn remove_by_base_name() {
    let mut store = MemorySettings::new();
    add_custom_trait(&mut store, "Sanctified (X)", "Holy.").unwrap();
    add_custom_trait(&mut store, "Warp Touched", "Unholy.").unwrap();

    assert_eq!(remove_custom_trait(&mut store, "SANCTIFIED").unwrap(), 1);
    assert_eq!(remove_custom_trait(&mut store, "missing").unwrap(), 0);

    let names: Vec<String> = custom_trait_entries(&store)
        .into_iter()
        .map(|e| e.name)
        .collect();
    assert_eq!(names, vec!["Warp Touched"]);
}

#[test]
fn save_drops_blank_entries() {
    let mut store = MemorySettings::new();
    let kept = save_custom_traits(
        &mut store,
        &[
            CustomTraitEntry::new("Sanctified", "Holy."),
            CustomTraitEntry::new("", "nameless"),
            CustomTraitEntry::new("Descless", "  "),
        ],
    )
    .unwrap();
    assert_eq!(kept, 1);
    assert_eq!(custom_trait_entries(&store).len(), 1);
}

#[test]
fn icons_use_stored_values_over_defaults() {
    let store = MemorySettings::new().with(GRENADE_ICON, "icons/boom.webp");
    let icons = load_icons(&store);
    assert_eq!(icons.grenade, "icons/boom.webp");
    assert_eq!(icons.melee, IconSet::default().melee);
    assert_eq!(icons.force_field, IconSet::default().force_field);
}
