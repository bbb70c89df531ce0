use super::*;
use crate::custom_traits::CustomTraitEntry;

fn dictionary(entries: &[(&str, &str)]) -> CustomTraitDictionary {
    let entries: Vec<CustomTraitEntry> = entries
        .iter()
        .map(|(name, desc)| CustomTraitEntry::new(*name, *desc))
        .collect();
    CustomTraitDictionary::from_entries(&entries)
}

#[test]
fn table_covers_every_system_key() {
    assert_eq!(rule_count(), 34);
    for key in TraitKey::all() {
        assert!(
            TRAIT_RULES.iter().any(|rule| rule.key == *key),
            "no rule for {}",
            key
        );
    }
}

#[test]
fn empty_text_has_no_traits() {
    assert!(parse_traits("").is_empty());
    assert!(parse_traits("   ").is_empty());
}

#[test]
fn flags_and_values() {
    let traits = parse_traits("Rend (2), Loud, Inflict (Burning)");
    assert_eq!(
        traits,
        vec![
            ItemTrait::valued(TraitKey::Inflict, "Burning"),
            ItemTrait::flag(TraitKey::Loud),
            ItemTrait::valued(TraitKey::Rend, "2"),
        ]
    );
}

#[test]
fn matching_is_case_insensitive() {
    let traits = parse_traits("SUBTLE, reliable");
    assert_eq!(
        traits,
        vec![
            ItemTrait::flag(TraitKey::Reliable),
            ItemTrait::flag(TraitKey::Subtle),
        ]
    );
}

#[test]
fn rapid_fire_spellings() {
    assert_eq!(
        parse_traits("RapidFire(3)"),
        vec![ItemTrait::valued(TraitKey::Rapidfire, "3")]
    );
    assert_eq!(
        parse_traits("Rapid Fire (2)"),
        vec![ItemTrait::valued(TraitKey::Rapidfire, "2")]
    );
}

#[test]
fn duplicate_keyword_keeps_first_value() {
    let traits = parse_traits("Penetrating (2), Penetrating (4)");
    assert_eq!(traits, vec![ItemTrait::valued(TraitKey::Penetrating, "2")]);
}

#[test]
fn rated_form_wins_over_bare_keyword() {
    let traits = parse_traits("Shield, Shield (2)");
    assert_eq!(traits, vec![ItemTrait::valued(TraitKey::Shield, "2")]);

    let traits = parse_traits("Thrown");
    assert_eq!(traits, vec![ItemTrait::flag(TraitKey::Thrown)]);
}

#[test]
fn hyphenated_variants() {
    let traits = parse_traits("Two-Handed, Master-crafted");
    assert_eq!(
        traits,
        vec![
            ItemTrait::flag(TraitKey::Twohanded),
            ItemTrait::flag(TraitKey::Mastercrafted),
        ]
    );
}

#[test]
fn keywords_need_word_boundaries() {
    assert!(parse_traits("Unloud, Closet").is_empty());
}

#[test]
fn unknown_text_is_ignored() {
    assert!(parse_traits("Sanctified, Warp-touched").is_empty());
}

#[test]
fn custom_trait_becomes_note() {
    let dict = dictionary(&[("Sanctified", "Deals extra damage to daemons.")]);
    let parsed = parse_traits_with_custom("Sanctified (2), Loud", &dict);

    assert_eq!(parsed.traits, vec![ItemTrait::flag(TraitKey::Loud)]);
    assert_eq!(
        parsed.notes,
        "<p><strong>Sanctified (2):</strong> Deals extra damage to daemons.</p>"
    );
}

#[test]
fn multiple_custom_notes_are_newline_joined() {
    let dict = dictionary(&[("Sanctified", "Holy."), ("Warp Touched", "Unholy.")]);
    let parsed = parse_traits_with_custom("Sanctified,Warp Touched", &dict);
    assert_eq!(
        parsed.notes,
        "<p><strong>Sanctified:</strong> Holy.</p>\n<p><strong>Warp Touched:</strong> Unholy.</p>"
    );
}

#[test]
fn system_keys_never_become_notes() {
    let dict = dictionary(&[("Rapid Fire", "Shadowed."), ("Loud", "Shadowed too.")]);
    let parsed = parse_traits_with_custom("Rapid Fire (3), Loud", &dict);
    assert!(parsed.notes.is_empty());
    assert_eq!(parsed.traits.len(), 2);
}

#[test]
fn empty_dictionary_gives_no_notes() {
    let parsed = parse_traits_with_custom("Sanctified, Loud", &CustomTraitDictionary::new());
    assert!(parsed.notes.is_empty());
    assert_eq!(parsed.traits, vec![ItemTrait::flag(TraitKey::Loud)]);
}
