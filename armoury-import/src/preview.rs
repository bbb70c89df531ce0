//! Dry-run report of what a paste would import.

use crate::batch::{LineOutcome, ParseOptions, parse_batch};
use crate::import::{ImportWarning, Operation};

/// One line of preview output per non-blank input line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PreviewReport {
    pub lines: Vec<String>,
    pub parsed: usize,
    pub failed: usize,
    pub warning: Option<ImportWarning>,
}

impl PreviewReport {
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }
}

/// Parse `text` and describe each line without creating anything.
pub fn preview(text: &str, options: &ParseOptions) -> PreviewReport {
    if text.trim().is_empty() {
        return PreviewReport {
            warning: Some(ImportWarning::EmptyInput(Operation::Preview)),
            ..Default::default()
        };
    }

    let batch = parse_batch(text, options);
    let mut report = PreviewReport::default();
    for outcome in &batch.outcomes {
        match outcome {
            LineOutcome::Parsed(record) => {
                report.parsed += 1;
                report
                    .lines
                    .push(format!("\u{2713} {} ({})", record.name, record.record_type()));
            }
            LineOutcome::Unparsable(failure) => {
                report.failed += 1;
                report
                    .lines
                    .push(format!("\u{2717} Could not parse: {}...", failure.excerpt));
            }
        }
    }
    report
}

#[cfg(test)]
#[path = "tests/preview_tests.rs"]
mod tests;
