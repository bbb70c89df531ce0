use armoury_catalog::{ItemType, RecordType};
use armoury_db::{create_folder, list_items, load_item_record, open_memory};
use armoury_import::{DbSink, ImportWarning, LogProgress, ParseOptions, import_items};

const ARMOUR: &str = "Flak Vest | Flak | 2 | 1 | 100 | Common | Body, Arms | Bulky
Carapace Armour | Carapace | 5 | 3 | 1,500 | Rare";

#[tokio::test]
async fn imports_into_a_folder() {
    let conn = open_memory().unwrap();
    let folder = create_folder(&conn, "Armour Locker").unwrap();

    let mut sink = DbSink::new(&conn);
    let report = import_items(
        ARMOUR,
        &ParseOptions::new(ItemType::Protection),
        Some(folder.id.as_str()),
        &mut sink,
        &LogProgress,
    )
    .await;
    assert_eq!(report.created.len(), 2);
    assert!(report.create_failures.is_empty());

    let rows = list_items(&conn, Some(folder.id.as_str())).unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].name, "Flak Vest");
    assert_eq!(rows[0].kind, "armour");
    assert_eq!(rows[1].item_type, "protection");

    let record = load_item_record(&conn, report.created[0].id).unwrap();
    assert_eq!(record.record_type(), RecordType::Protection);
    assert_eq!(record.name, "Flak Vest");
}

#[tokio::test]
async fn unknown_folder_is_a_create_failure_per_record() {
    let conn = open_memory().unwrap();
    let mut sink = DbSink::new(&conn);
    let report = import_items(
        ARMOUR,
        &ParseOptions::new(ItemType::Protection),
        Some("no-such-folder"),
        &mut sink,
        &LogProgress,
    )
    .await;

    assert!(report.created.is_empty());
    assert_eq!(report.create_failures.len(), 2);
    assert_eq!(report.create_failures[1].name, "Carapace Armour");
    assert!(report.create_failures[0].reason.contains("no-such-folder"));
    assert_eq!(report.warning, None::<ImportWarning>);
    assert!(list_items(&conn, None).unwrap().is_empty());
}
