//! Write operations: folders and imported items.

use armoury_catalog::NewItem;
use rusqlite::{Connection, OptionalExtension, params};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum OperationError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("Failed to encode item data: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Entity not found: {entity_type} with id '{id}'")]
    NotFound { entity_type: String, id: String },
    #[error("Invalid {field}: {reason}")]
    Invalid { field: String, reason: String },
}

impl OperationError {
    pub fn not_found(entity_type: impl Into<String>, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: entity_type.into(),
            id: id.into(),
        }
    }

    pub fn invalid(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Invalid {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

/// The only folder type items can be imported into.
pub const ITEM_FOLDER_TYPE: &str = "Item";

/// A destination folder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Folder {
    pub id: String,
    pub name: String,
}

/// Convert a display name to a lowercase, hyphen-separated identifier.
pub fn slugify(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut pending_separator = false;

    for c in s.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_separator && !result.is_empty() {
                result.push('-');
            }
            result.push(c.to_ascii_lowercase());
            pending_separator = false;
        } else {
            pending_separator = true;
        }
    }

    result
}

// ── Folder Operations ───────────────────────────────────────────────────────

fn folder_id_taken(conn: &Connection, id: &str) -> Result<bool, OperationError> {
    let exists: bool = conn.query_row(
        "SELECT EXISTS(SELECT 1 FROM folders WHERE id = ?1)",
        params![id],
        |row| row.get(0),
    )?;
    Ok(exists)
}

/// Create an item folder. The id is the slugified name, suffixed with a
/// counter when already taken.
pub fn create_folder(conn: &Connection, name: &str) -> Result<Folder, OperationError> {
    let name = name.trim();
    let base = slugify(name);
    if base.is_empty() {
        return Err(OperationError::invalid(
            "folder name",
            format!("'{}' has no letters or digits", name),
        ));
    }

    let mut id = base.clone();
    let mut n = 2;
    while folder_id_taken(conn, &id)? {
        id = format!("{}-{}", base, n);
        n += 1;
    }

    conn.execute(
        "INSERT INTO folders (id, name, folder_type) VALUES (?1, ?2, ?3)",
        params![id, name, ITEM_FOLDER_TYPE],
    )?;

    Ok(Folder {
        id,
        name: name.to_string(),
    })
}

// ── Item Operations ─────────────────────────────────────────────────────────

/// Store an imported item. Returns the new row id.
///
/// A destination folder must exist and be an item folder.
pub fn insert_item(conn: &Connection, item: &NewItem) -> Result<i64, OperationError> {
    if let Some(folder_id) = &item.folder {
        let folder_type: Option<String> = conn
            .query_row(
                "SELECT folder_type FROM folders WHERE id = ?1",
                params![folder_id],
                |row| row.get(0),
            )
            .optional()?;
        if folder_type.as_deref() != Some(ITEM_FOLDER_TYPE) {
            return Err(OperationError::not_found("folder", folder_id.as_str()));
        }
    }

    let data = serde_json::to_string(&item.record)?;
    conn.execute(
        "INSERT INTO items (name, item_type, kind, folder_id, img, data, imported_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        params![
            item.record.name,
            item.record.record_type().as_str(),
            item.record.kind.as_str(),
            item.folder,
            item.img,
            data,
            item.imported_at,
        ],
    )?;

    Ok(conn.last_insert_rowid())
}

