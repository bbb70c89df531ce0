//! Batch orchestration for the armoury importer.
//!
//! Splits a paste into lines, parses each independently, and either reports
//! the result ([`preview`]) or submits every parsed record to an
//! [`ItemSink`] one at a time ([`import_items`]).

pub mod batch;
pub mod import;
pub mod preview;
pub mod progress;

pub use batch::{EXCERPT_LEN, LineFailure, LineOutcome, ParseBatch, ParseOptions, parse_batch};
pub use import::{
    CreateError, CreateFailure, DbSink, ImportReport, ImportWarning, ItemHandle, ItemSink,
    Operation, build_new_item, import_items,
};
pub use preview::{PreviewReport, preview};
pub use progress::{ImportProgress, LogProgress, SilentProgress};
