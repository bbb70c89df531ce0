//! User-defined traits outside the system vocabulary.
//!
//! Custom traits are persisted as a JSON array of `{name, description}`
//! objects. At parse time they are looked up by base name: the lowercased
//! name with any trailing parenthetical removed, so "Sanctified (2)" and
//! "sanctified" refer to the same definition.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

static TRAILING_PAREN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*\([^)]*\)\s*$").expect("static pattern"));

/// Lowercased trait name with a trailing `(…)` suffix removed.
pub fn base_trait_name(name: &str) -> String {
    TRAILING_PAREN_RE
        .replace(name.trim(), "")
        .trim()
        .to_lowercase()
}

/// A persisted custom trait as the user entered it.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CustomTraitEntry {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
}

impl CustomTraitEntry {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }

    /// Entries with a blank name or description are never stored or used.
    pub fn is_complete(&self) -> bool {
        !self.name.trim().is_empty() && !self.description.trim().is_empty()
    }
}

/// A custom trait as consulted during parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomTraitDefinition {
    pub match_name: String,
    pub display_name: String,
    pub description: String,
}

/// Custom traits keyed by base name.
///
/// Built once per preview or import and passed by reference into every parse
/// call; nothing mutates it while a batch is running.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomTraitDictionary {
    definitions: HashMap<String, CustomTraitDefinition>,
}

impl CustomTraitDictionary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from stored entries. Incomplete entries are skipped and a later
    /// entry replaces an earlier one with the same base name.
    pub fn from_entries<'a>(entries: impl IntoIterator<Item = &'a CustomTraitEntry>) -> Self {
        let mut definitions = HashMap::new();
        for entry in entries {
            if entry.name.is_empty() || entry.description.is_empty() {
                continue;
            }
            let match_name = base_trait_name(&entry.name);
            definitions.insert(
                match_name.clone(),
                CustomTraitDefinition {
                    match_name,
                    display_name: entry.name.clone(),
                    description: entry.description.clone(),
                },
            );
        }
        Self { definitions }
    }

    /// Build from the persisted JSON form. Malformed JSON yields an empty
    /// dictionary and a warning, never an error.
    pub fn from_json(json: &str) -> Self {
        Self::from_entries(&entries_from_json(json))
    }

    pub fn get(&self, match_name: &str) -> Option<&CustomTraitDefinition> {
        self.definitions.get(match_name)
    }

    pub fn contains(&self, match_name: &str) -> bool {
        self.definitions.contains_key(match_name)
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    /// Definitions sorted by match name.
    pub fn iter_sorted(&self) -> Vec<&CustomTraitDefinition> {
        let mut defs: Vec<_> = self.definitions.values().collect();
        defs.sort_by(|a, b| a.match_name.cmp(&b.match_name));
        defs
    }
}

/// Decode the persisted entry list. Malformed JSON is logged and treated as
/// an empty list.
pub fn entries_from_json(json: &str) -> Vec<CustomTraitEntry> {
    let json = json.trim();
    if json.is_empty() {
        return Vec::new();
    }
    match serde_json::from_str::<Vec<CustomTraitEntry>>(json) {
        Ok(entries) => entries,
        Err(e) => {
            log::warn!("Failed to parse custom traits: {}", e);
            Vec::new()
        }
    }
}

/// Encode entries for storage, dropping incomplete ones.
pub fn entries_to_json(entries: &[CustomTraitEntry]) -> String {
    let complete: Vec<&CustomTraitEntry> = entries.iter().filter(|e| e.is_complete()).collect();
    // Serializing plain string structs cannot fail.
    serde_json::to_string(&complete).unwrap_or_else(|_| "[]".to_string())
}
