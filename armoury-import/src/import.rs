//! Sequential creation of parsed records through an [`ItemSink`].

use armoury_catalog::{ItemRecord, NewItem};
use armoury_db::{OperationError, insert_item};
use rusqlite::Connection;
use thiserror::Error;

use crate::batch::{LineFailure, ParseOptions, parse_batch};
use crate::progress::ImportProgress;

/// A created item as reported back by the sink.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemHandle {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Error)]
pub enum CreateError {
    #[error("{0}")]
    Store(#[from] OperationError),
    #[error("{0}")]
    Rejected(String),
}

impl CreateError {
    pub fn rejected(reason: impl Into<String>) -> Self {
        Self::Rejected(reason.into())
    }
}

/// Destination for imported items. Creations are awaited one at a time.
#[allow(async_fn_in_trait)]
pub trait ItemSink {
    async fn create(&mut self, item: &NewItem) -> Result<ItemHandle, CreateError>;
}

/// An [`ItemSink`] writing into the item database.
pub struct DbSink<'a> {
    conn: &'a Connection,
}

impl<'a> DbSink<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }
}

impl ItemSink for DbSink<'_> {
    async fn create(&mut self, item: &NewItem) -> Result<ItemHandle, CreateError> {
        let id = insert_item(self.conn, item)?;
        Ok(ItemHandle {
            id,
            name: item.record.name.clone(),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Preview,
    Import,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Preview => "preview",
            Self::Import => "import",
        })
    }
}

/// A condition that stops an operation before anything is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ImportWarning {
    #[error("Please enter item data to {0}.")]
    EmptyInput(Operation),
    #[error("No valid items could be parsed.")]
    NothingParsed,
}

/// A record the sink refused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateFailure {
    pub name: String,
    pub reason: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportReport {
    pub created: Vec<ItemHandle>,
    pub parse_failures: Vec<LineFailure>,
    pub create_failures: Vec<CreateFailure>,
    pub warning: Option<ImportWarning>,
}

impl ImportReport {
    /// Success message, present when at least one item was created.
    pub fn summary(&self) -> Option<String> {
        if self.created.is_empty() {
            return None;
        }
        Some(format!("Successfully imported {} item(s).", self.created.len()))
    }
}

/// Wrap a parsed record into a creation payload.
pub fn build_new_item(
    record: ItemRecord,
    options: &ParseOptions,
    folder: Option<&str>,
    imported_at: &str,
) -> NewItem {
    let img = options.icons.icon_for(record.kind).to_string();
    NewItem {
        record,
        folder: folder.map(str::to_string),
        img,
        imported_at: imported_at.to_string(),
    }
}

/// Parse `text` and create every parsed record through `sink`, in order.
///
/// Lines that fail to parse are skipped and reported. A failed creation is
/// logged and reported; the remaining records are still submitted.
pub async fn import_items<S: ItemSink>(
    text: &str,
    options: &ParseOptions,
    folder: Option<&str>,
    sink: &mut S,
    progress: &dyn ImportProgress,
) -> ImportReport {
    let mut report = ImportReport::default();
    if text.trim().is_empty() {
        report.warning = Some(ImportWarning::EmptyInput(Operation::Import));
        return report;
    }

    let (records, parse_failures) = parse_batch(text, options).into_parts();
    report.parse_failures = parse_failures;
    if records.is_empty() {
        report.warning = Some(ImportWarning::NothingParsed);
        return report;
    }

    let imported_at = chrono::Utc::now().to_rfc3339();
    let total = records.len();
    progress.on_start(total, options.item_type, report.parse_failures.len());

    for (idx, record) in records.into_iter().enumerate() {
        let current = idx + 1;
        let item = build_new_item(record, options, folder, &imported_at);
        match sink.create(&item).await {
            Ok(handle) => {
                progress.on_created(current, total, item.record.kind, &handle);
                report.created.push(handle);
            }
            Err(e) => {
                log::error!("Failed to create \"{}\": {}", item.record.name, e);
                let failure = CreateFailure {
                    name: item.record.name.clone(),
                    reason: e.to_string(),
                };
                progress.on_failed(current, total, &failure);
                report.create_failures.push(failure);
            }
        }
    }

    progress.on_complete(&report);
    report
}

#[cfg(test)]
#[path = "tests/import_tests.rs"]
mod tests;
