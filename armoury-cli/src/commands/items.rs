use std::path::PathBuf;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use crate::CliError;

use super::{open_db, resolve_folder};

pub(crate) fn run_items_list(
    db_path: Option<PathBuf>,
    folder: Option<String>,
) -> Result<(), CliError> {
    let conn = open_db(db_path)?;
    let folder = folder.map(|f| resolve_folder(&conn, &f)).transpose()?;
    let rows = armoury_db::list_items(&conn, folder.as_ref().map(|f| f.id.as_str()))
        .map_err(|e| CliError::database(format!("Failed to list items: {}", e)))?;

    if rows.is_empty() {
        log::info!("No items imported yet.");
        return Ok(());
    }

    for row in &rows {
        log::info!(
            "  {:>5}  {:<32} {:<12} {}",
            row.id,
            row.name.if_supports_color(Stdout, |t| t.bold()),
            row.kind,
            row.folder_id
                .as_deref()
                .unwrap_or("-")
                .if_supports_color(Stdout, |t| t.dimmed()),
        );
    }

    let stats = armoury_db::store_stats(&conn)
        .map_err(|e| CliError::database(format!("Failed to query item stats: {}", e)))?;
    crate::log_blank();
    log::info!(
        "{} item(s) shown; {} stored in {} folder(s)",
        rows.len(),
        stats.items,
        stats.folders,
    );
    for (item_type, count) in &stats.by_type {
        log::info!("  {:<12} {:>6}", item_type, count);
    }
    Ok(())
}
