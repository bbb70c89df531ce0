//! Import progress reporting.

use armoury_catalog::{ItemKind, ItemType};

use crate::import::{CreateFailure, ImportReport, ItemHandle};

/// Receives updates while parsed records are submitted to a sink.
pub trait ImportProgress {
    /// Parsing is done; `total` records are about to be submitted and
    /// `unparsable` lines were skipped.
    fn on_start(&self, total: usize, item_type: ItemType, unparsable: usize);

    fn on_created(&self, current: usize, total: usize, kind: ItemKind, handle: &ItemHandle);

    /// The sink refused a record. The batch carries on with the next one.
    fn on_failed(&self, current: usize, total: usize, failure: &CreateFailure);

    fn on_complete(&self, report: &ImportReport);
}

/// Discards all updates.
pub struct SilentProgress;

impl ImportProgress for SilentProgress {
    fn on_start(&self, _total: usize, _item_type: ItemType, _unparsable: usize) {}
    fn on_created(&self, _current: usize, _total: usize, _kind: ItemKind, _handle: &ItemHandle) {}
    fn on_failed(&self, _current: usize, _total: usize, _failure: &CreateFailure) {}
    fn on_complete(&self, _report: &ImportReport) {}
}

/// Reports through the `log` crate.
pub struct LogProgress;

impl ImportProgress for LogProgress {
    fn on_start(&self, total: usize, item_type: ItemType, unparsable: usize) {
        if unparsable > 0 {
            log::info!(
                "Importing {} {} record(s), {} line(s) skipped",
                total,
                item_type,
                unparsable
            );
        } else {
            log::info!("Importing {} {} record(s)", total, item_type);
        }
    }

    fn on_created(&self, current: usize, total: usize, kind: ItemKind, handle: &ItemHandle) {
        if current.is_multiple_of(25) || current == total {
            log::info!("  [{}/{}] {} ({})", current, total, handle.name, kind.as_str());
        }
    }

    // Creation failures are already logged at error level by `import_items`.
    fn on_failed(&self, current: usize, total: usize, failure: &CreateFailure) {
        log::debug!("  [{}/{}] skipped {}", current, total, failure.name);
    }

    fn on_complete(&self, report: &ImportReport) {
        log::info!(
            "{} created, {} failed, {} unparsable",
            report.created.len(),
            report.create_failures.len(),
            report.parse_failures.len()
        );
    }
}
