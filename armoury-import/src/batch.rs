//! Batch parsing of a whole paste.

use armoury_catalog::{
    CustomTraitDictionary, IconSet, ItemRecord, ItemType, WeaponCategory, excerpt, parse_line,
};
use armoury_lib::{SettingsStore, custom_trait_definitions, load_icons};

/// Maximum characters of an unparsable line shown back to the user.
pub const EXCERPT_LEN: usize = 50;

/// Everything one preview or import run needs, snapshotted at the start.
#[derive(Debug, Clone)]
pub struct ParseOptions {
    pub item_type: ItemType,
    pub weapon_category: WeaponCategory,
    pub dictionary: CustomTraitDictionary,
    pub icons: IconSet,
}

impl ParseOptions {
    pub fn new(item_type: ItemType) -> Self {
        Self {
            item_type,
            weapon_category: WeaponCategory::default(),
            dictionary: CustomTraitDictionary::new(),
            icons: IconSet::default(),
        }
    }

    pub fn with_category(mut self, category: WeaponCategory) -> Self {
        self.weapon_category = category;
        self
    }

    pub fn with_dictionary(mut self, dictionary: CustomTraitDictionary) -> Self {
        self.dictionary = dictionary;
        self
    }

    pub fn with_icons(mut self, icons: IconSet) -> Self {
        self.icons = icons;
        self
    }

    /// Options with the custom traits and icons currently in `store`.
    pub fn from_settings(
        store: &dyn SettingsStore,
        item_type: ItemType,
        weapon_category: WeaponCategory,
    ) -> Self {
        Self::new(item_type)
            .with_category(weapon_category)
            .with_dictionary(custom_trait_definitions(store))
            .with_icons(load_icons(store))
    }
}

/// A line no grammar could parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineFailure {
    /// 1-based position of the line in the pasted text.
    pub line_number: usize,
    pub excerpt: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum LineOutcome {
    Parsed(ItemRecord),
    Unparsable(LineFailure),
}

/// Per-line results in paste order. Blank lines are skipped.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParseBatch {
    pub outcomes: Vec<LineOutcome>,
}

impl ParseBatch {
    pub fn records(&self) -> impl Iterator<Item = &ItemRecord> {
        self.outcomes.iter().filter_map(|o| match o {
            LineOutcome::Parsed(record) => Some(record),
            LineOutcome::Unparsable(_) => None,
        })
    }

    pub fn failures(&self) -> impl Iterator<Item = &LineFailure> {
        self.outcomes.iter().filter_map(|o| match o {
            LineOutcome::Parsed(_) => None,
            LineOutcome::Unparsable(failure) => Some(failure),
        })
    }

    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    pub fn into_parts(self) -> (Vec<ItemRecord>, Vec<LineFailure>) {
        let mut records = Vec::new();
        let mut failures = Vec::new();
        for outcome in self.outcomes {
            match outcome {
                LineOutcome::Parsed(record) => records.push(record),
                LineOutcome::Unparsable(failure) => failures.push(failure),
            }
        }
        (records, failures)
    }
}

/// Parse every non-blank line of `text` independently.
pub fn parse_batch(text: &str, options: &ParseOptions) -> ParseBatch {
    let outcomes = text
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(idx, line)| {
            match parse_line(
                line,
                options.item_type,
                options.weapon_category,
                &options.dictionary,
            ) {
                Some(record) => LineOutcome::Parsed(record),
                None => LineOutcome::Unparsable(LineFailure {
                    line_number: idx + 1,
                    excerpt: excerpt(line, EXCERPT_LEN),
                }),
            }
        })
        .collect();

    ParseBatch { outcomes }
}

#[cfg(test)]
#[path = "tests/batch_tests.rs"]
mod tests;
