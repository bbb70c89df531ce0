use armoury_catalog::{
    ArmourCategory, AttackType, Availability, Characteristic, CustomTraitDictionary, DamageSpec,
    ItemCategory, ItemKind, ItemTrait, ItemType, Location, Locations, Magazine, RangeBand,
    RecordType, TraitKey, WeaponCategory, WeaponSpec, parse_line,
};

fn parse(line: &str, item_type: ItemType) -> Option<armoury_catalog::ItemRecord> {
    parse_line(
        line,
        item_type,
        WeaponCategory::Mundane,
        &CustomTraitDictionary::new(),
    )
}

#[test]
fn melee_combat_knife() {
    let record = parse(
        "Combat Knife | One-Handed | 3+STR | 1 | 50 | Common | Subtle",
        ItemType::Weapon,
    )
    .unwrap();

    assert_eq!(record.name, "Combat Knife");
    assert_eq!(record.record_type(), RecordType::Weapon);
    assert_eq!(record.kind, ItemKind::MeleeWeapon);

    let weapon = record.weapon().unwrap();
    assert_eq!(weapon.attack_type, AttackType::Melee);
    assert_eq!(weapon.spec, WeaponSpec::OneHanded);
    assert_eq!(
        weapon.damage,
        DamageSpec::with_characteristic(3, Characteristic::Str)
    );
    assert_eq!(weapon.encumbrance, 1);
    assert_eq!(weapon.cost, 50);
    assert_eq!(weapon.availability, Availability::Common);
    assert_eq!(record.traits, vec![ItemTrait::flag(TraitKey::Subtle)]);
}

#[test]
fn ranged_autogun() {
    let record = parse(
        "Autogun | Long Gun | 7 | Medium | 30 | 3 | 250 | Common | RapidFire(3)",
        ItemType::Weapon,
    )
    .unwrap();

    assert_eq!(record.kind, ItemKind::RangedWeapon);
    let weapon = record.weapon().unwrap();
    assert_eq!(weapon.attack_type, AttackType::Ranged);
    assert_eq!(weapon.spec, WeaponSpec::LongGun);
    assert_eq!(weapon.damage, DamageSpec::flat(7));
    assert_eq!(weapon.range, Some(RangeBand::Medium));
    assert_eq!(weapon.magazine, Magazine { value: 30, current: 30 });
    assert_eq!(weapon.encumbrance, 3);
    assert_eq!(weapon.cost, 250);
    assert_eq!(
        record.traits,
        vec![ItemTrait::valued(TraitKey::Rapidfire, "3")]
    );
}

#[test]
fn grenade_range_table() {
    let record = parse(
        "Frag Grenade | Thrown | 8 | Short | - | 1 | 40 | Scarce",
        ItemType::Weapon,
    )
    .unwrap();

    assert_eq!(record.kind, ItemKind::Grenade);
    assert_eq!(record.category(), ItemCategory::Weapon(WeaponCategory::Explosive));
    let weapon = record.weapon().unwrap();
    assert_eq!(weapon.spec, WeaponSpec::Thrown);
    assert_eq!(weapon.magazine, Magazine { value: 1, current: 1 });
    assert_eq!(weapon.range, None);
    assert!(!weapon.damage_sl);
    assert_eq!(weapon.availability, Availability::Scarce);
    assert!(
        record
            .traits
            .contains(&ItemTrait::valued(TraitKey::Thrown, "Short"))
    );
}

#[test]
fn grenade_simple_form() {
    let record = parse(
        "Krak Grenade | Thrown | 10 | 1 | 60 | Rare | Penetrating (4)",
        ItemType::Weapon,
    )
    .unwrap();

    assert_eq!(record.kind, ItemKind::Grenade);
    let weapon = record.weapon().unwrap();
    assert_eq!(weapon.category, WeaponCategory::Explosive);
    assert_eq!(weapon.magazine, Magazine::full(1));
    assert_eq!(weapon.encumbrance, 1);
    assert_eq!(weapon.cost, 60);
    assert_eq!(weapon.availability, Availability::Rare);
    assert_eq!(
        record.traits,
        vec![ItemTrait::valued(TraitKey::Penetrating, "4")]
    );
}

#[test]
fn weapon_category_applies_to_melee_and_ranged() {
    let dict = CustomTraitDictionary::new();
    let record = parse_line(
        "Laspistol | Pistol | 7 | Medium | 15 | 1 | 200 | Common | Reliable",
        ItemType::Weapon,
        WeaponCategory::Las,
        &dict,
    )
    .unwrap();
    assert_eq!(record.category(), ItemCategory::Weapon(WeaponCategory::Las));
}

#[test]
fn armour_with_locations() {
    let record = parse(
        "Flak Vest | Flak | 2 | 1 | 100 | Common | Body, Arms | Bulky",
        ItemType::Protection,
    )
    .unwrap();

    assert_eq!(record.record_type(), RecordType::Protection);
    assert_eq!(record.kind, ItemKind::Armour);
    let protection = record.protection().unwrap();
    assert_eq!(protection.category, ArmourCategory::Flak);
    assert_eq!(protection.armour, 2);
    assert_eq!(protection.locations.label, "Body, Arms");
    assert_eq!(
        protection.locations.list,
        vec![Location::Body, Location::LeftArm, Location::RightArm]
    );
    assert_eq!(record.traits, vec![ItemTrait::flag(TraitKey::Bulky)]);
}

#[test]
fn armour_without_location_column_covers_everything() {
    let record = parse(
        "Carapace Armour | Carapace | 5 | 3 | 1,500 | Rare",
        ItemType::Protection,
    )
    .unwrap();
    let protection = record.protection().unwrap();
    assert_eq!(protection.cost, 1500);
    assert_eq!(protection.locations, Locations::all());
}

#[test]
fn shield_has_no_armour_or_locations() {
    let record = parse(
        "Boarding Shield | Shield (2) | - | 2 | 150 | Scarce | Shield (2), Bulky",
        ItemType::Shield,
    )
    .unwrap();

    assert_eq!(record.kind, ItemKind::Shield);
    assert_eq!(record.category(), ItemCategory::Armour(ArmourCategory::Shield));
    let protection = record.protection().unwrap();
    assert_eq!(protection.armour, 0);
    assert_eq!(protection.locations, Locations::none());
    assert_eq!(protection.encumbrance, 2);
    assert_eq!(
        record.traits,
        vec![
            ItemTrait::valued(TraitKey::Shield, "2"),
            ItemTrait::flag(TraitKey::Bulky),
        ]
    );
}

#[test]
fn force_field_keeps_dice_formula() {
    let record = parse(
        "Refractor Field | 2d10 | 5 | 0 | 800 | Exotic | Ignored Trait",
        ItemType::ForceField,
    )
    .unwrap();

    assert_eq!(record.record_type(), RecordType::ForceField);
    let field = record.force_field().unwrap();
    assert_eq!(field.protection, "2d10");
    assert_eq!(field.overload.value, 5);
    assert!(!field.overload.collapsed);
    assert_eq!(field.availability, Availability::Exotic);
    assert!(record.traits.is_empty());
    assert!(record.notes.player.is_empty());
}

#[test]
fn fewer_than_two_fields_is_unparsable_for_every_type() {
    for &item_type in ItemType::all() {
        assert!(parse("Just a name", item_type).is_none(), "{}", item_type);
        assert!(parse("", item_type).is_none(), "{}", item_type);
    }
}

#[test]
fn too_few_fields_for_grammar_is_unparsable() {
    assert!(parse("Knife | One-Handed | 3+STR", ItemType::Weapon).is_none());
    assert!(parse("Vest | Flak | 2 | 1 | 100", ItemType::Protection).is_none());
    assert!(parse("Field | 2d10 | 5", ItemType::ForceField).is_none());
}

#[test]
fn curly_quotes_and_crlf_are_normalized() {
    let record = parse(
        "\u{201C}Mercy\u{201D} | Pistol | 6 | Short | 6 | 1 | 80 | Common\r\n",
        ItemType::Weapon,
    )
    .unwrap();
    assert_eq!(record.name, "\"Mercy\"");
}

#[test]
fn duplicated_trait_keyword_yields_one_entry() {
    let record = parse(
        "Power Sword | One-Handed | 5+STR | 1 | 900 | Rare | Rend (3), Rend (5), Rend",
        ItemType::Weapon,
    )
    .unwrap();
    let rends: Vec<_> = record
        .traits
        .iter()
        .filter(|t| t.key == TraitKey::Rend)
        .collect();
    assert_eq!(rends, vec![&ItemTrait::valued(TraitKey::Rend, "3")]);
}

#[test]
fn messy_scalars_fall_back() {
    let record = parse(
        "Mystery | ??? | special | n/a | ? | whenever",
        ItemType::Weapon,
    )
    .unwrap();
    let weapon = record.weapon().unwrap();
    assert_eq!(weapon.spec, WeaponSpec::OneHanded);
    assert_eq!(weapon.damage, DamageSpec::flat(0));
    assert_eq!(weapon.encumbrance, 0);
    assert_eq!(weapon.cost, 0);
    assert_eq!(weapon.availability, Availability::Common);
}
