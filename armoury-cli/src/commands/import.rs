use std::path::PathBuf;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use armoury_catalog::{ItemKind, ItemType};
use armoury_import::{
    CreateFailure, DbSink, ImportProgress, ImportReport, ItemHandle, ParseOptions, import_items,
};

use crate::CliError;
use crate::cli_types::PasteArgs;

use super::{open_db, read_paste, resolve_folder};

/// Spinner-backed progress for a single import run.
struct CliImportProgress {
    pb: ProgressBar,
}

impl CliImportProgress {
    fn new(quiet: bool) -> Self {
        let pb = if quiet {
            ProgressBar::hidden()
        } else {
            ProgressBar::new_spinner()
        };
        if let Ok(style) = ProgressStyle::with_template("  {spinner:.cyan} {msg}") {
            pb.set_style(style.tick_chars("/-\\|"));
        }
        pb.enable_steady_tick(Duration::from_millis(100));
        Self { pb }
    }
}

impl ImportProgress for CliImportProgress {
    fn on_start(&self, total: usize, item_type: ItemType, _unparsable: usize) {
        self.pb.set_message(format!("Importing {} {} record(s)", total, item_type));
    }

    fn on_created(&self, current: usize, total: usize, kind: ItemKind, handle: &ItemHandle) {
        self.pb.set_message(format!(
            "[{}/{}] {} ({})",
            current,
            total,
            handle.name,
            kind.as_str()
        ));
    }

    // The failure itself is logged by `import_items`; keep the spinner line in step.
    fn on_failed(&self, current: usize, total: usize, failure: &CreateFailure) {
        self.pb.set_message(format!(
            "[{}/{}] {} {}",
            current,
            total,
            "\u{2717}".if_supports_color(Stdout, |t| t.red()),
            failure.name,
        ));
    }

    fn on_complete(&self, _report: &ImportReport) {
        self.pb.finish_and_clear();
    }
}

pub(crate) fn run_import(
    paste: PasteArgs,
    folder: Option<String>,
    db_path: Option<PathBuf>,
    settings: Option<PathBuf>,
    quiet: bool,
) -> Result<(), CliError> {
    let text = read_paste(&paste)?;
    let conn = open_db(db_path)?;
    let folder = folder.map(|f| resolve_folder(&conn, &f)).transpose()?;

    let store = armoury_lib::TomlSettings::open(settings);
    let options = ParseOptions::from_settings(&store, paste.item_type, paste.category);

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::runtime(format!("Failed to create tokio runtime: {}", e)))?;
    let progress = CliImportProgress::new(quiet);
    let mut sink = DbSink::new(&conn);
    let report = rt.block_on(import_items(
        &text,
        &options,
        folder.as_ref().map(|f| f.id.as_str()),
        &mut sink,
        &progress,
    ));
    progress.pb.finish_and_clear();

    if let Some(warning) = report.warning {
        log::warn!("{}", warning);
        return Ok(());
    }

    for failure in &report.parse_failures {
        log::warn!(
            "  {} line {}: Could not parse: {}...",
            "\u{2717}".if_supports_color(Stdout, |t| t.red()),
            failure.line_number,
            failure.excerpt,
        );
    }

    if let Some(summary) = report.summary() {
        let destination = match &folder {
            Some(f) => format!(" into {}", f.name),
            None => String::new(),
        };
        log::info!(
            "{}{}",
            summary.if_supports_color(Stdout, |t| t.green()),
            destination,
        );
    }
    if !report.create_failures.is_empty() {
        log::warn!("{} item(s) could not be created", report.create_failures.len());
    }
    Ok(())
}
