use std::path::PathBuf;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use armoury_import::{ParseOptions, preview};

use crate::CliError;
use crate::cli_types::PasteArgs;

use super::read_paste;

pub(crate) fn run_preview(paste: PasteArgs, settings: Option<PathBuf>) -> Result<(), CliError> {
    let text = read_paste(&paste)?;
    let store = armoury_lib::TomlSettings::open(settings);
    let options = ParseOptions::from_settings(&store, paste.item_type, paste.category);

    let report = preview(&text, &options);
    if let Some(warning) = report.warning {
        log::warn!("{}", warning);
        return Ok(());
    }

    for line in &report.lines {
        if line.starts_with('\u{2713}') {
            log::info!("{}", line.if_supports_color(Stdout, |t| t.green()));
        } else {
            log::info!("{}", line.if_supports_color(Stdout, |t| t.red()));
        }
    }
    crate::log_blank();
    log::info!(
        "{} parsed, {} could not be parsed",
        report.parsed.if_supports_color(Stdout, |t| t.bold()),
        report.failed,
    );
    Ok(())
}
