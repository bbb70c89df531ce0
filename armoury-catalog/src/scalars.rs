//! Field-level interpreters for pasted table cells.
//!
//! Every parser here is total: unrecognized input falls back to a fixed
//! default rather than failing, so messy pastes still import something
//! plausible. Keyword lookups are ordered rule tables scanned top to bottom;
//! the first rule whose needle occurs in the lowercased cell wins.

use std::sync::LazyLock;

use regex::Regex;

use crate::types::{
    ArmourCategory, Availability, Characteristic, DamageSpec, Location, Locations, Magazine,
    RangeBand, WeaponSpec,
};

/// Return the result of the first rule whose needle occurs in `haystack`.
fn first_match<T: Copy>(haystack: &str, rules: &[(&str, T)]) -> Option<T> {
    rules
        .iter()
        .find(|(needle, _)| haystack.contains(needle))
        .map(|&(_, result)| result)
}

// ── Integers ────────────────────────────────────────────────────────────────

/// Parse a number the way a spreadsheet cell usually means it.
///
/// Thousands separators and whitespace are removed and a unicode minus is
/// accepted. Only the leading integer is read, so "50cr" is 50 and "1.5" is
/// 1. Anything else (including "-" placeholders) is 0.
pub fn parse_integer(text: &str) -> i64 {
    let cleaned: String = text
        .chars()
        .filter(|c| *c != ',' && !c.is_whitespace())
        .map(|c| if c == '\u{2212}' { '-' } else { c })
        .collect();

    let (sign, digits) = match cleaned.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, cleaned.strip_prefix('+').unwrap_or(&cleaned)),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());

    digits[..end].parse::<i64>().map(|n| sign * n).unwrap_or(0)
}

// ── Availability ────────────────────────────────────────────────────────────

const AVAILABILITY_RULES: &[(&str, Availability)] = &[
    ("ubiquitous", Availability::Ubiquitous),
    ("abundant", Availability::Abundant),
    ("plentiful", Availability::Plentiful),
    ("common", Availability::Common),
    ("scarce", Availability::Scarce),
    ("rare", Availability::Rare),
    ("exotic", Availability::Exotic),
];

/// Parse an availability tier. Unrecognized text is `Common`.
pub fn parse_availability(text: &str) -> Availability {
    first_match(&text.trim().to_lowercase(), AVAILABILITY_RULES).unwrap_or_default()
}

// ── Weapon spec ─────────────────────────────────────────────────────────────

const SPEC_RULES: &[(&str, WeaponSpec)] = &[
    ("one-handed", WeaponSpec::OneHanded),
    ("one handed", WeaponSpec::OneHanded),
    ("two-handed", WeaponSpec::TwoHanded),
    ("two handed", WeaponSpec::TwoHanded),
    ("brawling", WeaponSpec::Brawling),
    ("pistol", WeaponSpec::Pistol),
    ("long gun", WeaponSpec::LongGun),
    ("longgun", WeaponSpec::LongGun),
    ("ordnance", WeaponSpec::Ordnance),
    ("engineering", WeaponSpec::Engineering),
    ("thrown", WeaponSpec::Thrown),
];

/// Parse a weapon spec. Defaults to one-handed for melee and pistol otherwise.
pub fn parse_weapon_spec(text: &str, is_melee: bool) -> WeaponSpec {
    let fallback = if is_melee {
        WeaponSpec::OneHanded
    } else {
        WeaponSpec::Pistol
    };
    first_match(&text.trim().to_lowercase(), SPEC_RULES).unwrap_or(fallback)
}

// ── Damage ──────────────────────────────────────────────────────────────────

/// Damage formulas in priority order. `<n>+<abbr>` forms come before
/// `<abbr>+<n>`; toughness ("t") is last in each group so "int" and "str"
/// are never read as toughness.
static DAMAGE_RULES: LazyLock<Vec<(Regex, Characteristic)>> = LazyLock::new(|| {
    const ABBREVIATIONS: &[(&str, Characteristic)] = &[
        ("str", Characteristic::Str),
        ("ag", Characteristic::Ag),
        ("int", Characteristic::Int),
        ("wil", Characteristic::Wil),
        ("fel", Characteristic::Fel),
        ("per", Characteristic::Per),
        ("(?:tgh|t)", Characteristic::Tgh),
    ];

    let bonus_after = ABBREVIATIONS
        .iter()
        .map(|&(abbr, c)| (format!(r"(\d+)\+{abbr}"), c));
    let bonus_before = ABBREVIATIONS
        .iter()
        .map(|&(abbr, c)| (format!(r"{abbr}\+(\d+)"), c));

    bonus_after
        .chain(bonus_before)
        .map(|(pattern, c)| (Regex::new(&pattern).expect("static pattern"), c))
        .collect()
});

static LEADING_DIGITS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+)").expect("static pattern"));

/// Parse a damage cell such as "3+STR", "SB+2" or "7".
///
/// Whitespace is ignored and matching is case-insensitive. A characteristic
/// formula wins over a flat number; with neither, damage is 0 with no
/// characteristic.
pub fn parse_damage(text: &str) -> DamageSpec {
    let cleaned: String = text
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_lowercase();

    for (re, characteristic) in DAMAGE_RULES.iter() {
        if let Some(caps) = re.captures(&cleaned) {
            let base = caps[1].parse().unwrap_or(0);
            return DamageSpec::with_characteristic(base, *characteristic);
        }
    }

    LEADING_DIGITS_RE
        .captures(&cleaned)
        .and_then(|caps| caps[1].parse().ok())
        .map(DamageSpec::flat)
        .unwrap_or_default()
}

// ── Range and magazine ──────────────────────────────────────────────────────

const RANGE_RULES: &[(&str, RangeBand)] = &[
    ("short", RangeBand::Short),
    ("medium", RangeBand::Medium),
    ("long", RangeBand::Long),
    ("extreme", RangeBand::Extreme),
];

/// Parse a range band. `None` when no band word is present.
pub fn parse_range(text: &str) -> Option<RangeBand> {
    first_match(&text.trim().to_lowercase(), RANGE_RULES)
}

/// Whether a cell is exactly one range band word, the marker of the
/// eight-column ranged layout.
pub fn is_range_band(text: &str) -> bool {
    let lower = text.trim().to_lowercase();
    RANGE_RULES.iter().any(|(word, _)| *word == lower)
}

/// Parse a magazine cell. Non-digits are dropped; nothing left means 0.
pub fn parse_magazine(text: &str) -> Magazine {
    let digits: String = text.chars().filter(|c| c.is_ascii_digit()).collect();
    Magazine::full(digits.parse().unwrap_or(0))
}

// ── Protection ──────────────────────────────────────────────────────────────

const ARMOUR_CATEGORY_RULES: &[(&str, ArmourCategory)] = &[
    ("flak", ArmourCategory::Flak),
    ("mesh", ArmourCategory::Mesh),
    ("carapace", ArmourCategory::Carapace),
    ("power", ArmourCategory::Power),
    ("shield", ArmourCategory::Shield),
];

/// Parse an armour category. Defaults to `Mundane`.
pub fn parse_armour_category(text: &str) -> ArmourCategory {
    first_match(&text.trim().to_lowercase(), ARMOUR_CATEGORY_RULES).unwrap_or_default()
}

const LOCATION_RULES: &[(&str, &[Location])] = &[
    ("head", &[Location::Head]),
    ("body", &[Location::Body]),
    ("torso", &[Location::Body]),
    ("arm", &[Location::LeftArm, Location::RightArm]),
    ("leg", &[Location::LeftLeg, Location::RightLeg]),
];

/// Parse the locations an armour piece covers.
///
/// Empty text or any mention of "all" means full coverage labelled "All".
/// Otherwise every matching rule contributes its locations and the label is
/// the original text; if nothing matches, coverage is full but the label is
/// still the original text.
pub fn parse_locations(text: &str) -> Locations {
    let lower = text.to_lowercase();
    if lower.trim().is_empty() || lower.contains("all") {
        return Locations::all();
    }

    let mut list: Vec<Location> = Vec::new();
    for (needle, locations) in LOCATION_RULES {
        if lower.contains(needle) {
            for location in locations.iter() {
                if !list.contains(location) {
                    list.push(*location);
                }
            }
        }
    }

    if list.is_empty() {
        list = Locations::all().list;
    }

    Locations {
        label: text.to_string(),
        list,
    }
}

#[cfg(test)]
#[path = "tests/scalars_tests.rs"]
mod tests;
