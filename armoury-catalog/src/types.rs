//! Data model types for imported items.
//!
//! These types describe what the parsing pipeline produces: a structured
//! [`ItemRecord`] per successfully parsed line, plus the [`NewItem`]
//! creation payload handed to a store.

use serde::{Deserialize, Serialize};
use thiserror::Error;

// ── Item type selection ─────────────────────────────────────────────────────

/// The item type a user selects before parsing a paste.
///
/// This decides which family of grammars is tried; weapon lines are further
/// classified by field shape (see [`crate::grammar::classify`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ItemType {
    Weapon,
    Protection,
    Shield,
    ForceField,
}

const ALL_ITEM_TYPES: &[ItemType] = &[
    ItemType::Weapon,
    ItemType::Protection,
    ItemType::Shield,
    ItemType::ForceField,
];

impl ItemType {
    /// Canonical identifier used on the command line and in settings.
    pub fn short_name(&self) -> &'static str {
        match self {
            Self::Weapon => "weapon",
            Self::Protection => "protection",
            Self::Shield => "shield",
            Self::ForceField => "forceField",
        }
    }

    /// Accepted spellings, matched against lowercased input.
    pub fn aliases(&self) -> &'static [&'static str] {
        match self {
            Self::Weapon => &["weapon", "weapons"],
            Self::Protection => &["protection", "armour", "armor"],
            Self::Shield => &["shield", "shields"],
            Self::ForceField => &["forcefield", "force-field", "force field", "field"],
        }
    }

    pub fn all() -> &'static [ItemType] {
        ALL_ITEM_TYPES
    }
}

impl std::fmt::Display for ItemType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.short_name())
    }
}

#[derive(Debug, Clone, Error)]
#[error("unknown item type: {0}")]
pub struct ItemTypeParseError(pub String);

impl std::str::FromStr for ItemType {
    type Err = ItemTypeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        ALL_ITEM_TYPES
            .iter()
            .copied()
            .find(|t| t.aliases().contains(&lower.as_str()))
            .ok_or_else(|| ItemTypeParseError(s.to_string()))
    }
}

/// The document type the host catalog stores a record as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RecordType {
    Weapon,
    Protection,
    ForceField,
}

impl RecordType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Weapon => "weapon",
            Self::Protection => "protection",
            Self::ForceField => "forceField",
        }
    }
}

impl std::fmt::Display for RecordType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which grammar family produced a record. Drives the default icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ItemKind {
    MeleeWeapon,
    RangedWeapon,
    Grenade,
    Armour,
    Shield,
    ForceField,
}

impl ItemKind {
    pub fn record_type(&self) -> RecordType {
        match self {
            Self::MeleeWeapon | Self::RangedWeapon | Self::Grenade => RecordType::Weapon,
            Self::Armour | Self::Shield => RecordType::Protection,
            Self::ForceField => RecordType::ForceField,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MeleeWeapon => "meleeWeapon",
            Self::RangedWeapon => "rangedWeapon",
            Self::Grenade => "grenade",
            Self::Armour => "armour",
            Self::Shield => "shield",
            Self::ForceField => "forceField",
        }
    }
}

// ── Weapon vocabulary ───────────────────────────────────────────────────────

/// Weapon category as selected by the user (grenades are always explosive).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum WeaponCategory {
    #[default]
    Mundane,
    Chain,
    Force,
    Power,
    Shock,
    Las,
    Solid,
    Bolt,
    Flame,
    Melta,
    Plasma,
    Launcher,
    Explosive,
    Exotic,
}

const ALL_WEAPON_CATEGORIES: &[WeaponCategory] = &[
    WeaponCategory::Mundane,
    WeaponCategory::Chain,
    WeaponCategory::Force,
    WeaponCategory::Power,
    WeaponCategory::Shock,
    WeaponCategory::Las,
    WeaponCategory::Solid,
    WeaponCategory::Bolt,
    WeaponCategory::Flame,
    WeaponCategory::Melta,
    WeaponCategory::Plasma,
    WeaponCategory::Launcher,
    WeaponCategory::Explosive,
    WeaponCategory::Exotic,
];

impl WeaponCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mundane => "mundane",
            Self::Chain => "chain",
            Self::Force => "force",
            Self::Power => "power",
            Self::Shock => "shock",
            Self::Las => "las",
            Self::Solid => "solid",
            Self::Bolt => "bolt",
            Self::Flame => "flame",
            Self::Melta => "melta",
            Self::Plasma => "plasma",
            Self::Launcher => "launcher",
            Self::Explosive => "explosive",
            Self::Exotic => "exotic",
        }
    }

    pub fn all() -> &'static [WeaponCategory] {
        ALL_WEAPON_CATEGORIES
    }
}

impl std::fmt::Display for WeaponCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Error)]
#[error("unknown weapon category: {0}")]
pub struct WeaponCategoryParseError(pub String);

impl std::str::FromStr for WeaponCategory {
    type Err = WeaponCategoryParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        match lower.as_str() {
            "solid projectile" | "solid-projectile" | "sp" => return Ok(Self::Solid),
            "flamer" => return Ok(Self::Flame),
            _ => {}
        }
        ALL_WEAPON_CATEGORIES
            .iter()
            .copied()
            .find(|c| c.as_str() == lower)
            .ok_or_else(|| WeaponCategoryParseError(s.to_string()))
    }
}

/// Weapon sub-classification ("spec" in the rulebook tables).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum WeaponSpec {
    OneHanded,
    TwoHanded,
    Brawling,
    Pistol,
    LongGun,
    Ordnance,
    Engineering,
    Thrown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttackType {
    Melee,
    Ranged,
}

/// Characteristic whose bonus is added to a weapon's base damage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Characteristic {
    Str,
    Ag,
    Int,
    Wil,
    Fel,
    Per,
    Tgh,
}

impl Characteristic {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Str => "str",
            Self::Ag => "ag",
            Self::Int => "int",
            Self::Wil => "wil",
            Self::Fel => "fel",
            Self::Per => "per",
            Self::Tgh => "tgh",
        }
    }
}

/// Parsed damage: either flat, or `base + characteristic bonus`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DamageSpec {
    pub base: i64,
    pub characteristic: Option<Characteristic>,
}

impl DamageSpec {
    pub fn flat(base: i64) -> Self {
        Self {
            base,
            characteristic: None,
        }
    }

    pub fn with_characteristic(base: i64, characteristic: Characteristic) -> Self {
        Self {
            base,
            characteristic: Some(characteristic),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RangeBand {
    Short,
    Medium,
    Long,
    Extreme,
}

impl RangeBand {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Short => "short",
            Self::Medium => "medium",
            Self::Long => "long",
            Self::Extreme => "extreme",
        }
    }
}

/// Magazine capacity and current load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Magazine {
    pub value: u32,
    pub current: u32,
}

impl Magazine {
    /// A full magazine of the given capacity.
    pub fn full(capacity: u32) -> Self {
        Self {
            value: capacity,
            current: capacity,
        }
    }
}

// ── Shared vocabulary ───────────────────────────────────────────────────────

/// Availability tiers, from most to least available.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Availability {
    Ubiquitous,
    Abundant,
    Plentiful,
    #[default]
    Common,
    Scarce,
    Rare,
    Exotic,
}

impl Availability {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ubiquitous => "ubiquitous",
            Self::Abundant => "abundant",
            Self::Plentiful => "plentiful",
            Self::Common => "common",
            Self::Scarce => "scarce",
            Self::Rare => "rare",
            Self::Exotic => "exotic",
        }
    }
}

impl std::fmt::Display for Availability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Protection vocabulary ───────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArmourCategory {
    #[default]
    Mundane,
    Flak,
    Mesh,
    Carapace,
    Power,
    Shield,
}

impl ArmourCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mundane => "mundane",
            Self::Flak => "flak",
            Self::Mesh => "mesh",
            Self::Carapace => "carapace",
            Self::Power => "power",
            Self::Shield => "shield",
        }
    }
}

/// Hit location covered by armour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Location {
    Head,
    Body,
    LeftArm,
    RightArm,
    LeftLeg,
    RightLeg,
}

/// Every hit location, in sheet order.
pub const ALL_LOCATIONS: [Location; 6] = [
    Location::Head,
    Location::Body,
    Location::LeftArm,
    Location::RightArm,
    Location::LeftLeg,
    Location::RightLeg,
];

/// Locations covered by a piece of protection, with the label shown on the sheet.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Locations {
    pub label: String,
    pub list: Vec<Location>,
}

impl Locations {
    /// Full coverage, labelled "All".
    pub fn all() -> Self {
        Self {
            label: "All".to_string(),
            list: ALL_LOCATIONS.to_vec(),
        }
    }

    /// No coverage and no label (shields).
    pub fn none() -> Self {
        Self::default()
    }
}

// ── Traits ──────────────────────────────────────────────────────────────────

/// System trait identifiers understood by the host catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TraitKey {
    Blast,
    Burst,
    Close,
    Defensive,
    Flamer,
    Heavy,
    Ineffective,
    Inflict,
    Loud,
    Penetrating,
    Rapidfire,
    Reach,
    Reliable,
    Rend,
    Shield,
    Spread,
    Subtle,
    Supercharge,
    Thrown,
    Twohanded,
    Unstable,
    Bulky,
    Shoddy,
    Ugly,
    Unreliable,
    Lightweight,
    Mastercrafted,
    Ornamental,
    Durable,
    Haywire,
}

const ALL_TRAIT_KEYS: &[TraitKey] = &[
    TraitKey::Blast,
    TraitKey::Burst,
    TraitKey::Close,
    TraitKey::Defensive,
    TraitKey::Flamer,
    TraitKey::Heavy,
    TraitKey::Ineffective,
    TraitKey::Inflict,
    TraitKey::Loud,
    TraitKey::Penetrating,
    TraitKey::Rapidfire,
    TraitKey::Reach,
    TraitKey::Reliable,
    TraitKey::Rend,
    TraitKey::Shield,
    TraitKey::Spread,
    TraitKey::Subtle,
    TraitKey::Supercharge,
    TraitKey::Thrown,
    TraitKey::Twohanded,
    TraitKey::Unstable,
    TraitKey::Bulky,
    TraitKey::Shoddy,
    TraitKey::Ugly,
    TraitKey::Unreliable,
    TraitKey::Lightweight,
    TraitKey::Mastercrafted,
    TraitKey::Ornamental,
    TraitKey::Durable,
    TraitKey::Haywire,
];

impl TraitKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Blast => "blast",
            Self::Burst => "burst",
            Self::Close => "close",
            Self::Defensive => "defensive",
            Self::Flamer => "flamer",
            Self::Heavy => "heavy",
            Self::Ineffective => "ineffective",
            Self::Inflict => "inflict",
            Self::Loud => "loud",
            Self::Penetrating => "penetrating",
            Self::Rapidfire => "rapidfire",
            Self::Reach => "reach",
            Self::Reliable => "reliable",
            Self::Rend => "rend",
            Self::Shield => "shield",
            Self::Spread => "spread",
            Self::Subtle => "subtle",
            Self::Supercharge => "supercharge",
            Self::Thrown => "thrown",
            Self::Twohanded => "twohanded",
            Self::Unstable => "unstable",
            Self::Bulky => "bulky",
            Self::Shoddy => "shoddy",
            Self::Ugly => "ugly",
            Self::Unreliable => "unreliable",
            Self::Lightweight => "lightweight",
            Self::Mastercrafted => "mastercrafted",
            Self::Ornamental => "ornamental",
            Self::Durable => "durable",
            Self::Haywire => "haywire",
        }
    }

    pub fn all() -> &'static [TraitKey] {
        ALL_TRAIT_KEYS
    }

    /// Look up a system key by its identifier (exact, lowercase).
    pub fn from_key(key: &str) -> Option<TraitKey> {
        ALL_TRAIT_KEYS.iter().copied().find(|k| k.as_str() == key)
    }
}

impl std::fmt::Display for TraitKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A system trait attached to an item, with its rating/range when parametrized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemTrait {
    pub key: TraitKey,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl ItemTrait {
    pub fn flag(key: TraitKey) -> Self {
        Self { key, value: None }
    }

    pub fn valued(key: TraitKey, value: impl Into<String>) -> Self {
        Self {
            key,
            value: Some(value.into()),
        }
    }
}

// ── Records ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeaponAttributes {
    pub attack_type: AttackType,
    pub spec: WeaponSpec,
    pub category: WeaponCategory,
    pub damage: DamageSpec,
    /// Whether success levels add to damage. False for grenades.
    pub damage_sl: bool,
    pub range: Option<RangeBand>,
    pub magazine: Magazine,
    pub encumbrance: i64,
    pub cost: i64,
    pub availability: Availability,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProtectionAttributes {
    pub category: ArmourCategory,
    pub armour: i64,
    pub encumbrance: i64,
    pub cost: i64,
    pub availability: Availability,
    pub locations: Locations,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Overload {
    pub value: i64,
    pub collapsed: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForceFieldAttributes {
    /// Dice formula such as "2d10", kept verbatim.
    pub protection: String,
    pub overload: Overload,
    pub encumbrance: i64,
    pub cost: i64,
    pub availability: Availability,
}

/// Category-specific fields of a record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ItemAttributes {
    Weapon(WeaponAttributes),
    Protection(ProtectionAttributes),
    ForceField(ForceFieldAttributes),
}

/// Category of a record across all item types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemCategory {
    Weapon(WeaponCategory),
    Armour(ArmourCategory),
    ForceField,
}

impl std::fmt::Display for ItemCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Weapon(c) => f.write_str(c.as_str()),
            Self::Armour(c) => f.write_str(c.as_str()),
            Self::ForceField => f.write_str("forceField"),
        }
    }
}

/// Player- and GM-facing note text.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Notes {
    pub player: String,
    pub gm: String,
}

/// One successfully parsed item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemRecord {
    pub name: String,
    pub kind: ItemKind,
    pub attributes: ItemAttributes,
    pub traits: Vec<ItemTrait>,
    pub notes: Notes,
}

impl ItemRecord {
    pub fn record_type(&self) -> RecordType {
        self.kind.record_type()
    }

    pub fn category(&self) -> ItemCategory {
        match &self.attributes {
            ItemAttributes::Weapon(w) => ItemCategory::Weapon(w.category),
            ItemAttributes::Protection(p) => ItemCategory::Armour(p.category),
            ItemAttributes::ForceField(_) => ItemCategory::ForceField,
        }
    }

    pub fn weapon(&self) -> Option<&WeaponAttributes> {
        match &self.attributes {
            ItemAttributes::Weapon(w) => Some(w),
            _ => None,
        }
    }

    pub fn protection(&self) -> Option<&ProtectionAttributes> {
        match &self.attributes {
            ItemAttributes::Protection(p) => Some(p),
            _ => None,
        }
    }

    pub fn force_field(&self) -> Option<&ForceFieldAttributes> {
        match &self.attributes {
            ItemAttributes::ForceField(f) => Some(f),
            _ => None,
        }
    }

    /// The trait with the given key, if present.
    pub fn trait_value(&self, key: TraitKey) -> Option<&ItemTrait> {
        self.traits.iter().find(|t| t.key == key)
    }
}

// ── Creation payload ────────────────────────────────────────────────────────

/// Default icon path for each kind of item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IconSet {
    pub melee: String,
    pub ranged: String,
    pub grenade: String,
    pub armour: String,
    pub shield: String,
    pub force_field: String,
}

impl Default for IconSet {
    fn default() -> Self {
        Self {
            melee: "modules/impmal-core/assets/icons/weapons/melee-weapon.webp".to_string(),
            ranged: "modules/impmal-core/assets/icons/weapons/ranged-weapon.webp".to_string(),
            grenade: "modules/impmal-core/assets/icons/weapons/frag-missile.webp".to_string(),
            armour: "modules/impmal-core/assets/icons/protection/armour.webp".to_string(),
            shield: "modules/impmal-core/assets/icons/protection/shield.webp".to_string(),
            force_field: "modules/impmal-core/assets/icons/protection/field.webp".to_string(),
        }
    }
}

impl IconSet {
    pub fn icon_for(&self, kind: ItemKind) -> &str {
        match kind {
            ItemKind::MeleeWeapon => &self.melee,
            ItemKind::RangedWeapon => &self.ranged,
            ItemKind::Grenade => &self.grenade,
            ItemKind::Armour => &self.armour,
            ItemKind::Shield => &self.shield,
            ItemKind::ForceField => &self.force_field,
        }
    }
}

/// A record ready for submission to a store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewItem {
    pub record: ItemRecord,
    /// Destination folder id, if one was chosen.
    pub folder: Option<String>,
    pub img: String,
    /// RFC 3339 timestamp of the import run.
    pub imported_at: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_type_aliases_parse() {
        let cases = [
            ("weapon", ItemType::Weapon),
            ("Armour", ItemType::Protection),
            ("armor", ItemType::Protection),
            ("protection", ItemType::Protection),
            ("shield", ItemType::Shield),
            ("forceField", ItemType::ForceField),
            ("force-field", ItemType::ForceField),
        ];
        for (input, expected) in cases {
            let parsed: ItemType = input.parse().unwrap();
            assert_eq!(parsed, expected, "alias '{}'", input);
        }
    }

    #[test]
    fn unknown_item_type_is_err() {
        assert!("vehicle".parse::<ItemType>().is_err());
    }

    #[test]
    fn weapon_category_round_trips() {
        for &category in WeaponCategory::all() {
            let parsed: WeaponCategory = category.as_str().parse().unwrap();
            assert_eq!(parsed, category);
        }
        assert_eq!(
            "Solid Projectile".parse::<WeaponCategory>().unwrap(),
            WeaponCategory::Solid
        );
    }

    #[test]
    fn trait_keys_resolve_from_identifier() {
        assert_eq!(TraitKey::all().len(), 30);
        for &key in TraitKey::all() {
            assert_eq!(TraitKey::from_key(key.as_str()), Some(key));
        }
        assert_eq!(TraitKey::from_key("rapid fire"), None);
    }

    #[test]
    fn record_types_follow_kind() {
        assert_eq!(ItemKind::Grenade.record_type(), RecordType::Weapon);
        assert_eq!(ItemKind::Shield.record_type(), RecordType::Protection);
        assert_eq!(ItemKind::ForceField.record_type().as_str(), "forceField");
    }

    #[test]
    fn icon_set_covers_every_kind() {
        let icons = IconSet::default();
        assert!(icons.icon_for(ItemKind::Grenade).ends_with("frag-missile.webp"));
        assert!(icons.icon_for(ItemKind::ForceField).ends_with("field.webp"));
    }
}
