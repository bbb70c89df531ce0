//! Trait extraction from the free-text trait column.
//!
//! System traits are recognized by an ordered table of keyword patterns.
//! Rules are tried in table order and each rule scans the text left to
//! right; a match whose key has already been found is discarded, so an item
//! carries at most one trait per key and the first-found value wins.
//!
//! Segments naming a user-defined custom trait produce note text instead of
//! structured traits.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

use crate::custom_traits::{CustomTraitDictionary, base_trait_name};
use crate::types::{ItemTrait, TraitKey};

/// One entry of the trait pattern table.
struct TraitRule {
    pattern: &'static str,
    key: TraitKey,
    /// Whether capture group 1 holds the trait's rating or range.
    valued: bool,
}

const fn flag(pattern: &'static str, key: TraitKey) -> TraitRule {
    TraitRule {
        pattern,
        key,
        valued: false,
    }
}

const fn valued(pattern: &'static str, key: TraitKey) -> TraitRule {
    TraitRule {
        pattern,
        key,
        valued: true,
    }
}

/// Parametrized forms precede the bare keyword of the same trait so a rated
/// occurrence is preferred when both appear.
const TRAIT_RULES: &[TraitRule] = &[
    valued(r"\bBlast\s*\((\d+)\)", TraitKey::Blast),
    valued(r"\bBurst\s*\((\d+)\)", TraitKey::Burst),
    flag(r"\bClose\b", TraitKey::Close),
    flag(r"\bDefensive\b", TraitKey::Defensive),
    flag(r"\bFlamer\b", TraitKey::Flamer),
    valued(r"\bHeavy\s*\((\d+)\)", TraitKey::Heavy),
    flag(r"\bIneffective\b", TraitKey::Ineffective),
    valued(r"\bInflict\s*\(([^)]+)\)", TraitKey::Inflict),
    flag(r"\bLoud\b", TraitKey::Loud),
    valued(r"\bPenetrating\s*\((\d+)\)", TraitKey::Penetrating),
    valued(r"\bRapid\s*Fire\s*\((\d+)\)", TraitKey::Rapidfire),
    valued(r"\bRapidFire\s*\((\d+)\)", TraitKey::Rapidfire),
    valued(r"\bReach\s*\(([^)]+)\)", TraitKey::Reach),
    flag(r"\bReliable\b", TraitKey::Reliable),
    valued(r"\bRend\s*\((\d+)\)", TraitKey::Rend),
    valued(r"\bShield\s*\((\d+)\)", TraitKey::Shield),
    flag(r"\bShield\b", TraitKey::Shield),
    flag(r"\bSpread\b", TraitKey::Spread),
    flag(r"\bSubtle\b", TraitKey::Subtle),
    flag(r"\bSupercharge\b", TraitKey::Supercharge),
    valued(r"\bThrown\s*\(([^)]+)\)", TraitKey::Thrown),
    flag(r"\bThrown\b", TraitKey::Thrown),
    flag(r"\bTwo-?Handed\b", TraitKey::Twohanded),
    flag(r"\bUnstable\b", TraitKey::Unstable),
    flag(r"\bBulky\b", TraitKey::Bulky),
    flag(r"\bShoddy\b", TraitKey::Shoddy),
    flag(r"\bUgly\b", TraitKey::Ugly),
    flag(r"\bUnreliable\b", TraitKey::Unreliable),
    flag(r"\bLightweight\b", TraitKey::Lightweight),
    flag(r"\bMastercrafted\b", TraitKey::Mastercrafted),
    flag(r"\bMaster-?crafted\b", TraitKey::Mastercrafted),
    flag(r"\bOrnamental\b", TraitKey::Ornamental),
    flag(r"\bDurable\b", TraitKey::Durable),
    flag(r"\bHaywire\b", TraitKey::Haywire),
];

static COMPILED_RULES: LazyLock<Vec<(Regex, TraitKey, bool)>> = LazyLock::new(|| {
    TRAIT_RULES
        .iter()
        .map(|rule| {
            let re = Regex::new(&format!("(?i){}", rule.pattern)).expect("static pattern");
            (re, rule.key, rule.valued)
        })
        .collect()
});

static SEGMENT_SPLIT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r",\s*").expect("static pattern"));

/// Number of rules in the trait pattern table.
pub fn rule_count() -> usize {
    TRAIT_RULES.len()
}

/// Extract system traits from free text. Unmatched text is ignored.
pub fn parse_traits(text: &str) -> Vec<ItemTrait> {
    if text.trim().is_empty() {
        return Vec::new();
    }

    let mut found: HashSet<TraitKey> = HashSet::new();
    let mut traits = Vec::new();

    for (re, key, valued) in COMPILED_RULES.iter() {
        if found.contains(key) {
            continue;
        }
        if let Some(caps) = re.captures(text) {
            found.insert(*key);
            let value = if *valued {
                caps.get(1).map(|m| m.as_str().to_string())
            } else {
                None
            };
            traits.push(ItemTrait { key: *key, value });
        }
    }

    traits
}

/// System traits plus note text for custom traits.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedTraits {
    pub traits: Vec<ItemTrait>,
    /// One `<p>` line per recognized custom trait, newline-joined.
    pub notes: String,
}

/// Extract system traits and describe any custom traits named in `text`.
///
/// The text is split on commas; a segment whose base name is not a system
/// trait key but is in `dictionary` yields a note pairing the segment as
/// written with the stored description.
pub fn parse_traits_with_custom(
    text: &str,
    dictionary: &CustomTraitDictionary,
) -> ParsedTraits {
    let traits = parse_traits(text);
    if text.trim().is_empty() || dictionary.is_empty() {
        return ParsedTraits {
            traits,
            notes: String::new(),
        };
    }

    let notes: Vec<String> = SEGMENT_SPLIT_RE
        .split(text)
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .filter_map(|segment| {
            let base = base_trait_name(segment);
            let compact: String = base.chars().filter(|c| !c.is_whitespace()).collect();
            if TraitKey::from_key(&compact).is_some() {
                return None;
            }
            dictionary
                .get(&base)
                .map(|def| format!("<p><strong>{}:</strong> {}</p>", segment, def.description))
        })
        .collect();

    ParsedTraits {
        traits,
        notes: notes.join("\n"),
    }
}

#[cfg(test)]
#[path = "tests/traits_tests.rs"]
mod tests;
