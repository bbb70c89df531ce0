//! Read queries for folders and imported items.

use armoury_catalog::ItemRecord;
use rusqlite::{Connection, OptionalExtension, Row, params};

use crate::operations::{Folder, ITEM_FOLDER_TYPE, OperationError};

// ── Folders ─────────────────────────────────────────────────────────────────

/// All item folders, ordered by name.
pub fn list_folders(conn: &Connection) -> Result<Vec<Folder>, OperationError> {
    let mut stmt = conn.prepare(
        "SELECT id, name FROM folders WHERE folder_type = ?1 ORDER BY name COLLATE NOCASE, id",
    )?;
    let rows = stmt.query_map(params![ITEM_FOLDER_TYPE], row_to_folder)?;
    rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
}

/// Find an item folder by id, or failing that by name (case-insensitive).
pub fn find_folder(
    conn: &Connection,
    id_or_name: &str,
) -> Result<Option<Folder>, OperationError> {
    let by_id = conn
        .query_row(
            "SELECT id, name FROM folders WHERE folder_type = ?1 AND id = ?2",
            params![ITEM_FOLDER_TYPE, id_or_name],
            row_to_folder,
        )
        .optional()?;
    if by_id.is_some() {
        return Ok(by_id);
    }

    conn.query_row(
        "SELECT id, name FROM folders
         WHERE folder_type = ?1 AND LOWER(name) = LOWER(?2)
         ORDER BY id LIMIT 1",
        params![ITEM_FOLDER_TYPE, id_or_name],
        row_to_folder,
    )
    .optional()
    .map_err(Into::into)
}

fn row_to_folder(row: &Row) -> rusqlite::Result<Folder> {
    Ok(Folder {
        id: row.get(0)?,
        name: row.get(1)?,
    })
}

// ── Items ───────────────────────────────────────────────────────────────────

/// Summary row for a stored item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemRow {
    pub id: i64,
    pub name: String,
    pub item_type: String,
    pub kind: String,
    pub folder_id: Option<String>,
    pub img: String,
    pub imported_at: String,
}

/// Stored items in insertion order, optionally limited to one folder.
pub fn list_items(
    conn: &Connection,
    folder_id: Option<&str>,
) -> Result<Vec<ItemRow>, OperationError> {
    let mut stmt = conn.prepare(
        "SELECT id, name, item_type, kind, folder_id, img, imported_at
         FROM items
         WHERE ?1 IS NULL OR folder_id = ?1
         ORDER BY id",
    )?;
    let rows = stmt.query_map(params![folder_id], row_to_item)?;
    rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
}

fn row_to_item(row: &Row) -> rusqlite::Result<ItemRow> {
    Ok(ItemRow {
        id: row.get(0)?,
        name: row.get(1)?,
        item_type: row.get(2)?,
        kind: row.get(3)?,
        folder_id: row.get(4)?,
        img: row.get(5)?,
        imported_at: row.get(6)?,
    })
}

/// The full record stored for an item.
pub fn load_item_record(conn: &Connection, id: i64) -> Result<ItemRecord, OperationError> {
    let data: Option<String> = conn
        .query_row("SELECT data FROM items WHERE id = ?1", params![id], |row| {
            row.get(0)
        })
        .optional()?;
    let data = data.ok_or_else(|| OperationError::not_found("item", id.to_string()))?;
    Ok(serde_json::from_str(&data)?)
}

// ── Stats ───────────────────────────────────────────────────────────────────

/// Summary counts for the item store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreStats {
    pub folders: i64,
    pub items: i64,
    /// Item count per record type, ordered by type.
    pub by_type: Vec<(String, i64)>,
}

/// Total number of stored items.
pub fn item_count(conn: &Connection) -> Result<i64, OperationError> {
    let count = conn.query_row("SELECT COUNT(*) FROM items", [], |row| row.get(0))?;
    Ok(count)
}

pub fn store_stats(conn: &Connection) -> Result<StoreStats, OperationError> {
    let folders = conn.query_row(
        "SELECT COUNT(*) FROM folders WHERE folder_type = ?1",
        params![ITEM_FOLDER_TYPE],
        |row| row.get(0),
    )?;
    let items = item_count(conn)?;

    let mut stmt = conn.prepare(
        "SELECT item_type, COUNT(*) FROM items GROUP BY item_type ORDER BY item_type",
    )?;
    let by_type = stmt
        .query_map([], |row| Ok((row.get(0)?, row.get(1)?)))?
        .collect::<Result<Vec<_>, _>>()?;

    Ok(StoreStats {
        folders,
        items,
        by_type,
    })
}
