pub(crate) mod config;
pub(crate) mod folders;
pub(crate) mod format;
pub(crate) mod import;
pub(crate) mod items;
pub(crate) mod preview;
pub(crate) mod traits;

use std::io::Read;
use std::path::{Path, PathBuf};

use armoury_catalog::format_pasted_text;
use armoury_db::Folder;
use rusqlite::Connection;

use crate::CliError;
use crate::cli_types::PasteArgs;

/// Read the pasted table from `file`, or from stdin when no file is given.
pub(crate) fn read_input(file: Option<&Path>) -> Result<String, CliError> {
    match file {
        Some(path) => std::fs::read_to_string(path).map_err(|e| {
            CliError::other(format!("Failed to read {}: {}", path.display(), e))
        }),
        None => {
            let mut input = String::new();
            std::io::stdin().read_to_string(&mut input)?;
            Ok(input)
        }
    }
}

/// Read the paste for a preview or import, reformatting it first if asked.
pub(crate) fn read_paste(paste: &PasteArgs) -> Result<String, CliError> {
    let text = read_input(paste.file.as_deref())?;
    if paste.format {
        Ok(format_pasted_text(&text))
    } else {
        Ok(text)
    }
}

pub(crate) fn open_db(path: Option<PathBuf>) -> Result<Connection, CliError> {
    let path = path.unwrap_or_else(armoury_lib::default_database_path);
    armoury_db::open_database(&path).map_err(|e| {
        CliError::database(format!(
            "Failed to open item database at {}: {}",
            path.display(),
            e
        ))
    })
}

/// Resolve a folder given by id or name.
pub(crate) fn resolve_folder(conn: &Connection, id_or_name: &str) -> Result<Folder, CliError> {
    armoury_db::find_folder(conn, id_or_name)
        .map_err(|e| CliError::database(format!("Failed to look up folder: {}", e)))?
        .ok_or_else(|| CliError::unknown_folder(id_or_name))
}
