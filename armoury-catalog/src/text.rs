//! Text clean-up for pasted tables: normalization, pipe reformatting, and
//! field tokenization.

use std::sync::LazyLock;

use regex::Regex;

static TRAILING_WS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[ \t]+\n").expect("static pattern"));

static HEADER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(Name|Weapon|Armour|Protection|Force Field)").expect("static pattern")
});

static TABS_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\t+").expect("static pattern"));

static MULTI_WS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s{2,}").expect("static pattern"));

static EMPTY_CELL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\|\s*\|").expect("static pattern"));

/// Canonicalize pasted text.
///
/// Collapses `\r\n` and `\r` to `\n`, replaces curly quotes and apostrophes
/// with straight ones, turns non-breaking spaces into ordinary spaces,
/// strips trailing blanks before each newline and trims the whole string.
pub fn normalize_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\r' => {
                if chars.peek() == Some(&'\n') {
                    chars.next();
                }
                out.push('\n');
            }
            '\u{201C}' | '\u{201D}' => out.push('"'),
            '\u{2018}' | '\u{2019}' => out.push('\''),
            '\u{00A0}' => out.push(' '),
            _ => out.push(c),
        }
    }
    TRAILING_WS_RE.replace_all(&out, "\n").trim().to_string()
}

/// Reformat a tab- or space-aligned paste into pipe-delimited lines.
///
/// Header rows ("Name ...", "Weapon ...", "Armour ...", "Protection ...",
/// "Force Field ...") and blank lines are dropped. This is a best-effort
/// heuristic: single spaces inside a cell are kept, so cells separated by a
/// single space in the source will stay merged.
///
/// ```
/// use armoury_catalog::text::format_pasted_text;
///
/// let raw = "Name\tSpec\tDamage\nKnife\tOne-Handed\t3+STR";
/// assert_eq!(format_pasted_text(raw), "Knife | One-Handed | 3+STR");
/// ```
pub fn format_pasted_text(text: &str) -> String {
    let mut formatted = Vec::new();

    for line in text.split('\n') {
        let line = line.trim();
        if line.is_empty() || HEADER_RE.is_match(line) {
            continue;
        }

        let line = TABS_RE.replace_all(line, " | ");
        let line = MULTI_WS_RE.replace_all(&line, " | ");
        let line = EMPTY_CELL_RE.replace_all(&line, "|");
        let line = line.trim();

        let line = line.strip_prefix('|').unwrap_or(line);
        let line = line.strip_suffix('|').unwrap_or(line);
        formatted.push(line.trim().to_string());
    }

    formatted.join("\n")
}

/// Split a normalized line on `|` into trimmed fields.
///
/// Returns `None` when the line has fewer than two fields. Extra fields are
/// kept; grammars treat everything past their fixed columns as trait text.
pub fn tokenize(line: &str) -> Option<Vec<String>> {
    let fields: Vec<String> = line.split('|').map(|f| f.trim().to_string()).collect();
    if fields.len() < 2 {
        return None;
    }
    Some(fields)
}

/// Truncate a line to at most `max` characters for display.
pub fn excerpt(line: &str, max: usize) -> String {
    line.chars().take(max).collect()
}

#[cfg(test)]
#[path = "tests/text_tests.rs"]
mod tests;
