//! Item data model and the pasted-table parsing pipeline.
//!
//! This crate turns one line of pasted rulebook or spreadsheet text into a
//! structured [`ItemRecord`]. It has no I/O beyond reading and writing the
//! custom trait JSON string; settings, persistence and batch orchestration
//! live in `armoury-lib`, `armoury-db` and `armoury-import`.

pub mod custom_traits;
pub mod grammar;
pub mod scalars;
pub mod text;
pub mod traits;
pub mod types;

pub use custom_traits::{
    CustomTraitDefinition, CustomTraitDictionary, CustomTraitEntry, base_trait_name,
    entries_from_json, entries_to_json,
};
pub use grammar::{GrammarTag, classify, parse_fields, parse_line};
pub use text::{excerpt, format_pasted_text, normalize_text, tokenize};
pub use traits::{ParsedTraits, parse_traits, parse_traits_with_custom};
pub use types::*;
