use std::path::PathBuf;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use crate::CliError;

use super::open_db;

pub(crate) fn run_folders_list(db_path: Option<PathBuf>) -> Result<(), CliError> {
    let conn = open_db(db_path)?;
    let folders = armoury_db::list_folders(&conn)
        .map_err(|e| CliError::database(format!("Failed to list folders: {}", e)))?;

    if folders.is_empty() {
        log::info!("No item folders yet.");
        log::info!("Create one with: armoury folders add NAME");
        return Ok(());
    }

    for folder in &folders {
        log::info!(
            "  {:<24} {}",
            folder.id.if_supports_color(Stdout, |t| t.cyan()),
            folder.name,
        );
    }
    Ok(())
}

pub(crate) fn run_folders_add(db_path: Option<PathBuf>, name: &str) -> Result<(), CliError> {
    let conn = open_db(db_path)?;
    let folder = armoury_db::create_folder(&conn, name)
        .map_err(|e| CliError::database(format!("Failed to create folder: {}", e)))?;
    log::info!(
        "Created folder {} ({})",
        folder.name.if_supports_color(Stdout, |t| t.bold()),
        folder.id,
    );
    Ok(())
}
