use super::*;
use armoury_catalog::ItemType;

#[test]
fn lines_mark_parsed_and_unparsable() {
    let text = "Combat Knife | One-Handed | 3+STR | 1 | 50 | Common | Subtle\n\
                not a table row";
    let report = preview(text, &ParseOptions::new(ItemType::Weapon));

    assert_eq!(
        report.lines,
        vec![
            "\u{2713} Combat Knife (weapon)".to_string(),
            "\u{2717} Could not parse: not a table row...".to_string(),
        ]
    );
    assert_eq!(report.parsed, 1);
    assert_eq!(report.failed, 1);
    assert_eq!(report.warning, None);
}

#[test]
fn force_field_reports_its_record_type() {
    let report = preview(
        "Refractor Field | 2d10 | 5 | 0 | 800 | Exotic",
        &ParseOptions::new(ItemType::ForceField),
    );
    assert_eq!(report.text(), "\u{2713} Refractor Field (forceField)");
}

#[test]
fn empty_input_warns() {
    let report = preview("   \n", &ParseOptions::new(ItemType::Protection));
    assert!(report.lines.is_empty());
    assert_eq!(
        report.warning,
        Some(ImportWarning::EmptyInput(Operation::Preview))
    );
    assert_eq!(
        report.warning.unwrap().to_string(),
        "Please enter item data to preview."
    );
}
