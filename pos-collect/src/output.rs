//! Shared output formatting for scan reports.
//!
//! Provides JSON and plain-text formatters for `ScanReport`.
//! Color/terminal formatting is left to the CLI layer.

use std::io::Write;

use crate::error::ScanError;
use crate::report::ScanReport;

/// Format a `ScanReport` as JSON to a writer.
///
/// # Errors
///
/// Returns an error if serialization or writing fails.
pub fn write_json(report: &ScanReport, writer: &mut dyn Write) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(report)?;
    writeln!(writer, "{json}")?;
    Ok(())
}

/// Write the result line: `Unique pos values: ['ADJ', 'NOUN']`.
///
/// The label follows the collected key. Scan errors are not part of this
/// output; see [`write_scan_errors`].
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_human(report: &ScanReport, writer: &mut dyn Write) -> anyhow::Result<()> {
    writeln!(
        writer,
        "Unique {} values: {}",
        report.key,
        format_value_list(&report.values)
    )?;
    Ok(())
}

/// Write one line per scan error.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_scan_errors(errors: &[ScanError], writer: &mut dyn Write) -> anyhow::Result<()> {
    for err in errors {
        writeln!(writer, "{}", err.format_human_readable())?;
    }
    Ok(())
}

/// Render values as a bracketed, comma separated list of quoted strings.
#[must_use]
pub fn format_value_list(values: &[String]) -> String {
    let quoted: Vec<String> = values.iter().map(|v| quote_value(v)).collect();
    format!("[{}]", quoted.join(", "))
}

/// Quote a value with single quotes, or double quotes when it contains a
/// single quote and no double quote. Backslashes, the chosen quote, and
/// control characters are escaped; control characters use `\xhh`, `\uhhhh`
/// or `\Uhhhhhhhh` depending on their code point.
#[must_use]
pub fn quote_value(value: &str) -> String {
    let quote = if value.contains('\'') && !value.contains('"') {
        '"'
    } else {
        '\''
    };

    let mut out = String::with_capacity(value.len() + 2);
    out.push(quote);
    for ch in value.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c == quote => {
                out.push('\\');
                out.push(c);
            }
            c if c.is_control() => push_hex_escape(&mut out, c),
            c => out.push(c),
        }
    }
    out.push(quote);
    out
}

fn push_hex_escape(out: &mut String, c: char) {
    let code = u32::from(c);
    let escaped = if code <= 0xff {
        format!("\\x{code:02x}")
    } else if code <= 0xffff {
        format!("\\u{code:04x}")
    } else {
        format!("\\U{code:08x}")
    };
    out.push_str(&escaped);
}
