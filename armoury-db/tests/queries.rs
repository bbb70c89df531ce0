use armoury_catalog::{
    CustomTraitDictionary, ItemType, NewItem, TraitKey, WeaponCategory, parse_line,
};
use armoury_db::*;

fn store(
    conn: &rusqlite::Connection,
    line: &str,
    item_type: ItemType,
    folder: Option<&str>,
) -> i64 {
    let record = parse_line(
        line,
        item_type,
        WeaponCategory::Mundane,
        &CustomTraitDictionary::new(),
    )
    .unwrap();
    let item = NewItem {
        record,
        folder: folder.map(str::to_string),
        img: "icon.webp".to_string(),
        imported_at: "2026-10-19T12:00:00+00:00".to_string(),
    };
    insert_item(conn, &item).unwrap()
}

#[test]
fn list_folders_only_item_folders_sorted() {
    let conn = open_memory().unwrap();
    create_folder(&conn, "Zeta").unwrap();
    create_folder(&conn, "alpha").unwrap();
    conn.execute(
        "INSERT INTO folders (id, name, folder_type) VALUES ('scenes', 'Scenes', 'Scene')",
        [],
    )
    .unwrap();

    let names: Vec<String> = list_folders(&conn)
        .unwrap()
        .into_iter()
        .map(|f| f.name)
        .collect();
    assert_eq!(names, vec!["alpha", "Zeta"]);
}

#[test]
fn find_folder_by_id_or_name() {
    let conn = open_memory().unwrap();
    let folder = create_folder(&conn, "Heavy Weapons").unwrap();

    assert_eq!(find_folder(&conn, "heavy-weapons").unwrap(), Some(folder.clone()));
    assert_eq!(find_folder(&conn, "HEAVY WEAPONS").unwrap(), Some(folder));
    assert_eq!(find_folder(&conn, "light weapons").unwrap(), None);
}

#[test]
fn list_items_filters_by_folder() {
    let conn = open_memory().unwrap();
    let folder = create_folder(&conn, "Armour").unwrap();
    store(
        &conn,
        "Combat Knife | One-Handed | 3+STR | 1 | 50 | Common",
        ItemType::Weapon,
        None,
    );
    store(
        &conn,
        "Flak Vest | Flak | 2 | 1 | 100 | Common",
        ItemType::Protection,
        Some(folder.id.as_str()),
    );

    let all = list_items(&conn, None).unwrap();
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].name, "Combat Knife");
    assert_eq!(all[0].folder_id, None);

    let in_folder = list_items(&conn, Some("armour")).unwrap();
    assert_eq!(in_folder.len(), 1);
    assert_eq!(in_folder[0].item_type, "protection");
    assert_eq!(in_folder[0].kind, "armour");
}

#[test]
fn stored_record_round_trips() {
    let conn = open_memory().unwrap();
    let id = store(
        &conn,
        "Autogun | Long Gun | 7 | Medium | 30 | 3 | 250 | Common | RapidFire(3)",
        ItemType::Weapon,
        None,
    );

    let record = load_item_record(&conn, id).unwrap();
    assert_eq!(record.name, "Autogun");
    assert_eq!(
        record.trait_value(TraitKey::Rapidfire).and_then(|t| t.value.as_deref()),
        Some("3")
    );
    assert!(matches!(
        load_item_record(&conn, id + 100),
        Err(OperationError::NotFound { .. })
    ));
}

#[test]
fn stats_count_by_type() {
    let conn = open_memory().unwrap();
    create_folder(&conn, "Misc").unwrap();
    store(
        &conn,
        "Combat Knife | One-Handed | 3+STR | 1 | 50 | Common",
        ItemType::Weapon,
        None,
    );
    store(
        &conn,
        "Refractor Field | 2d10 | 5 | 0 | 800 | Exotic",
        ItemType::ForceField,
        None,
    );
    store(
        &conn,
        "Stub Gun | Pistol | 6 | Short | 6 | 1 | 40 | Common",
        ItemType::Weapon,
        None,
    );

    let stats = store_stats(&conn).unwrap();
    assert_eq!(stats.folders, 1);
    assert_eq!(stats.items, 3);
    assert_eq!(
        stats.by_type,
        vec![("forceField".to_string(), 1), ("weapon".to_string(), 2)]
    );
}
