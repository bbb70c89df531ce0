use std::path::Path;

use armoury_catalog::format_pasted_text;

use crate::CliError;

use super::read_input;

/// Print the paste with tab and multi-space columns converted to pipes.
pub(crate) fn run_format(file: Option<&Path>) -> Result<(), CliError> {
    let text = read_input(file)?;
    if text.trim().is_empty() {
        log::warn!("Please enter item data to format.");
        return Ok(());
    }
    log::info!("{}", format_pasted_text(&text));
    Ok(())
}
