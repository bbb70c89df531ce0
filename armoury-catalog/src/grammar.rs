//! Per-item-type grammars and the shape classifier that selects one.
//!
//! Parsing a line is two steps. [`classify`] looks only at the tokenized
//! fields and the selected item type and returns a [`GrammarTag`]; the
//! grammar for that tag then builds an [`ItemRecord`], or returns `None`
//! when the line has fewer fields than the grammar needs.
//!
//! Column layouts:
//!
//! | grammar        | columns                                                        |
//! |----------------|----------------------------------------------------------------|
//! | melee          | name, spec, damage, enc, cost, avail, traits…                  |
//! | ranged         | name, spec, damage, range, mag, enc, cost, avail, traits…      |
//! | grenade table  | name, spec, damage, range, (mag), enc, cost, avail, traits…    |
//! | grenade simple | name, spec, damage, enc, cost, avail, traits…                  |
//! | armour         | name, category, armour, enc, cost, avail, locations, traits…   |
//! | shield         | name, (special), (-), enc, cost, avail, traits…                |
//! | force field    | name, protection, overload, enc, cost, avail                   |

use crate::custom_traits::CustomTraitDictionary;
use crate::scalars::{
    is_range_band, parse_armour_category, parse_availability, parse_damage, parse_integer,
    parse_locations, parse_magazine, parse_range, parse_weapon_spec,
};
use crate::text::{normalize_text, tokenize};
use crate::traits::{ParsedTraits, parse_traits_with_custom};
use crate::types::{
    ArmourCategory, AttackType, ForceFieldAttributes, ItemAttributes, ItemKind, ItemRecord,
    ItemTrait, ItemType, Locations, Magazine, Notes, Overload, ProtectionAttributes, TraitKey,
    WeaponAttributes, WeaponCategory, WeaponSpec,
};

/// Which grammar a tokenized line is routed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GrammarTag {
    Melee,
    GrenadeTable,
    Ranged,
    GrenadeSimple,
    Armour,
    Shield,
    ForceField,
}

impl GrammarTag {
    /// Fewest fields the grammar accepts.
    pub fn min_fields(&self) -> usize {
        match self {
            Self::GrenadeTable | Self::Ranged => 8,
            _ => 6,
        }
    }

    /// The kind of record the grammar produces.
    pub fn kind(&self) -> ItemKind {
        match self {
            Self::Melee => ItemKind::MeleeWeapon,
            Self::Ranged => ItemKind::RangedWeapon,
            Self::GrenadeTable | Self::GrenadeSimple => ItemKind::Grenade,
            Self::Armour => ItemKind::Armour,
            Self::Shield => ItemKind::Shield,
            Self::ForceField => ItemKind::ForceField,
        }
    }
}

const MELEE_SPEC_WORDS: &[&str] = &["one-handed", "two-handed", "brawling"];

/// Pick the grammar for a tokenized line.
///
/// Weapons are checked in a fixed order: melee spec keyword, then the
/// eight-column layout (a range band in column four) with "thrown" in the
/// spec, then the eight-column layout alone, then "thrown" alone, and
/// finally melee as the fallback. A thrown weapon laid out as a full ranged
/// row is therefore a grenade, not a ranged weapon.
pub fn classify(fields: &[String], item_type: ItemType) -> GrammarTag {
    match item_type {
        ItemType::Protection => GrammarTag::Armour,
        ItemType::Shield => GrammarTag::Shield,
        ItemType::ForceField => GrammarTag::ForceField,
        ItemType::Weapon => {
            let spec = field(fields, 1).to_lowercase();
            let is_melee = MELEE_SPEC_WORDS.iter().any(|w| spec.contains(w));
            let is_thrown = spec.contains("thrown");
            let ranged_shape = fields.len() >= 8 && is_range_band(field(fields, 3));

            if is_melee {
                GrammarTag::Melee
            } else if ranged_shape && is_thrown {
                GrammarTag::GrenadeTable
            } else if ranged_shape {
                GrammarTag::Ranged
            } else if is_thrown {
                GrammarTag::GrenadeSimple
            } else {
                GrammarTag::Melee
            }
        }
    }
}

/// Parse one pasted line as the given item type.
///
/// Returns `None` when the line has fewer than two fields or fewer than the
/// chosen grammar requires. `weapon_category` only affects melee and ranged
/// weapons.
pub fn parse_line(
    line: &str,
    item_type: ItemType,
    weapon_category: WeaponCategory,
    dictionary: &CustomTraitDictionary,
) -> Option<ItemRecord> {
    let normalized = normalize_text(line);
    let fields = tokenize(&normalized)?;
    let tag = classify(&fields, item_type);
    log::debug!(
        "Classified '{}' as {:?} ({} fields)",
        field(&fields, 0),
        tag,
        fields.len()
    );
    parse_fields(&fields, tag, weapon_category, dictionary)
}

/// Run the grammar for `tag` over already tokenized fields.
pub fn parse_fields(
    fields: &[String],
    tag: GrammarTag,
    weapon_category: WeaponCategory,
    dictionary: &CustomTraitDictionary,
) -> Option<ItemRecord> {
    if fields.len() < tag.min_fields() {
        return None;
    }
    let record = match tag {
        GrammarTag::Melee => melee(fields, weapon_category, dictionary),
        GrammarTag::Ranged => ranged(fields, weapon_category, dictionary),
        GrammarTag::GrenadeTable => grenade_table(fields, dictionary),
        GrammarTag::GrenadeSimple => grenade_simple(fields, dictionary),
        GrammarTag::Armour => armour(fields, dictionary),
        GrammarTag::Shield => shield(fields, dictionary),
        GrammarTag::ForceField => force_field(fields),
    };
    Some(record)
}

// ── Helpers ─────────────────────────────────────────────────────────────────

fn field(fields: &[String], index: usize) -> &str {
    fields.get(index).map(String::as_str).unwrap_or("")
}

/// Traits from every field at or after `start`, joined with spaces.
fn traits_from(
    fields: &[String],
    start: usize,
    dictionary: &CustomTraitDictionary,
) -> ParsedTraits {
    let text = fields.get(start..).map(|rest| rest.join(" ")).unwrap_or_default();
    parse_traits_with_custom(&text, dictionary)
}

fn record(
    fields: &[String],
    kind: ItemKind,
    attributes: ItemAttributes,
    parsed: ParsedTraits,
) -> ItemRecord {
    ItemRecord {
        name: field(fields, 0).to_string(),
        kind,
        attributes,
        traits: parsed.traits,
        notes: Notes {
            player: parsed.notes,
            gm: String::new(),
        },
    }
}

// ── Weapons ─────────────────────────────────────────────────────────────────

fn melee(
    fields: &[String],
    category: WeaponCategory,
    dictionary: &CustomTraitDictionary,
) -> ItemRecord {
    let attributes = WeaponAttributes {
        attack_type: AttackType::Melee,
        spec: parse_weapon_spec(field(fields, 1), true),
        category,
        damage: parse_damage(field(fields, 2)),
        damage_sl: true,
        range: None,
        magazine: Magazine::default(),
        encumbrance: parse_integer(field(fields, 3)),
        cost: parse_integer(field(fields, 4)),
        availability: parse_availability(field(fields, 5)),
    };
    let parsed = traits_from(fields, 6, dictionary);
    record(fields, ItemKind::MeleeWeapon, ItemAttributes::Weapon(attributes), parsed)
}

fn ranged(
    fields: &[String],
    category: WeaponCategory,
    dictionary: &CustomTraitDictionary,
) -> ItemRecord {
    let attributes = WeaponAttributes {
        attack_type: AttackType::Ranged,
        spec: parse_weapon_spec(field(fields, 1), false),
        category,
        damage: parse_damage(field(fields, 2)),
        damage_sl: true,
        range: parse_range(field(fields, 3)),
        magazine: parse_magazine(field(fields, 4)),
        encumbrance: parse_integer(field(fields, 5)),
        cost: parse_integer(field(fields, 6)),
        availability: parse_availability(field(fields, 7)),
    };
    let parsed = traits_from(fields, 8, dictionary);
    record(fields, ItemKind::RangedWeapon, ItemAttributes::Weapon(attributes), parsed)
}

/// Grenade spec: thrown unless the spec names ordnance or engineering.
fn grenade_spec(text: &str) -> WeaponSpec {
    let lower = text.to_lowercase();
    if lower.contains("engineering") {
        WeaponSpec::Engineering
    } else if lower.contains("ordnance") {
        WeaponSpec::Ordnance
    } else {
        WeaponSpec::Thrown
    }
}

fn grenade_attributes(
    spec: WeaponSpec,
    damage: &str,
    enc: &str,
    cost: &str,
    avail: &str,
) -> WeaponAttributes {
    WeaponAttributes {
        attack_type: AttackType::Ranged,
        spec,
        category: WeaponCategory::Explosive,
        damage: parse_damage(damage),
        damage_sl: false,
        range: None,
        magazine: Magazine::full(1),
        encumbrance: parse_integer(enc),
        cost: parse_integer(cost),
        availability: parse_availability(avail),
    }
}

fn grenade_table(fields: &[String], dictionary: &CustomTraitDictionary) -> ItemRecord {
    let attributes = grenade_attributes(
        grenade_spec(field(fields, 1)),
        field(fields, 2),
        field(fields, 5),
        field(fields, 6),
        field(fields, 7),
    );

    // Column four is the throwing range; it becomes the thrown trait's value.
    let mut parsed = traits_from(fields, 8, dictionary);
    if !parsed.traits.iter().any(|t| t.key == TraitKey::Thrown) {
        parsed
            .traits
            .push(ItemTrait::valued(TraitKey::Thrown, field(fields, 3).trim()));
    }

    record(fields, ItemKind::Grenade, ItemAttributes::Weapon(attributes), parsed)
}

fn grenade_simple(fields: &[String], dictionary: &CustomTraitDictionary) -> ItemRecord {
    let attributes = grenade_attributes(
        WeaponSpec::Thrown,
        field(fields, 2),
        field(fields, 3),
        field(fields, 4),
        field(fields, 5),
    );
    let parsed = traits_from(fields, 6, dictionary);
    record(fields, ItemKind::Grenade, ItemAttributes::Weapon(attributes), parsed)
}

// ── Protection ──────────────────────────────────────────────────────────────

fn armour(fields: &[String], dictionary: &CustomTraitDictionary) -> ItemRecord {
    let locations = match field(fields, 6) {
        "" => Locations::all(),
        text => parse_locations(text),
    };
    let attributes = ProtectionAttributes {
        category: parse_armour_category(field(fields, 1)),
        armour: parse_integer(field(fields, 2)),
        encumbrance: parse_integer(field(fields, 3)),
        cost: parse_integer(field(fields, 4)),
        availability: parse_availability(field(fields, 5)),
        locations,
    };
    let parsed = traits_from(fields, 7, dictionary);
    record(fields, ItemKind::Armour, ItemAttributes::Protection(attributes), parsed)
}

fn shield(fields: &[String], dictionary: &CustomTraitDictionary) -> ItemRecord {
    let attributes = ProtectionAttributes {
        category: ArmourCategory::Shield,
        armour: 0,
        encumbrance: parse_integer(field(fields, 3)),
        cost: parse_integer(field(fields, 4)),
        availability: parse_availability(field(fields, 5)),
        locations: Locations::none(),
    };
    let parsed = traits_from(fields, 6, dictionary);
    record(fields, ItemKind::Shield, ItemAttributes::Protection(attributes), parsed)
}

fn force_field(fields: &[String]) -> ItemRecord {
    let protection = match field(fields, 1) {
        "" => "0".to_string(),
        text => text.to_string(),
    };
    let attributes = ForceFieldAttributes {
        protection,
        overload: Overload {
            value: parse_integer(field(fields, 2)),
            collapsed: false,
        },
        encumbrance: parse_integer(field(fields, 3)),
        cost: parse_integer(field(fields, 4)),
        availability: parse_availability(field(fields, 5)),
    };
    record(
        fields,
        ItemKind::ForceField,
        ItemAttributes::ForceField(attributes),
        ParsedTraits::default(),
    )
}

#[cfg(test)]
#[path = "tests/grammar_tests.rs"]
mod tests;
