//! SQLite persistence for imported items.
//!
//! Stands in for the host catalog's record-creation API: folders to import
//! into, and one row per created item with its full record as JSON.

pub mod operations;
pub mod queries;
pub mod schema;

pub use operations::{Folder, OperationError, create_folder, insert_item, slugify};
pub use queries::{
    ItemRow, StoreStats, find_folder, item_count, list_folders, list_items, load_item_record,
    store_stats,
};
pub use schema::{SchemaError, open_database, open_memory};
