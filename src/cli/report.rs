//! Human-readable command output.

use std::io::{self, Write};

use colored::Colorize;

use super::commands::{CommandResult, CommandSummary, ExtractSummary, InitSummary};
use crate::config::CONFIG_FILE_NAME;

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

pub fn print(result: &CommandResult) {
    match &result.summary {
        CommandSummary::Extract(summary) => {
            print_extract_to(summary, &mut io::stdout().lock());
        }
        CommandSummary::Init(summary) => print_init_to(summary, &mut io::stderr().lock()),
    }
}

pub fn print_extract_to<W: Write>(summary: &ExtractSummary, writer: &mut W) {
    let msg = format!(
        "Extracted {} translation {} from {} source {} into {}",
        summary.unit_count,
        if summary.unit_count == 1 { "unit" } else { "units" },
        summary.file_count,
        if summary.file_count == 1 { "file" } else { "files" },
        summary.output_path.display()
    );
    let _ = writeln!(writer, "{} {}", SUCCESS_MARK.green(), msg.green());
}

pub fn print_init_to<W: Write>(summary: &InitSummary, writer: &mut W) {
    if summary.created {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Created {}", CONFIG_FILE_NAME).green()
        );
    } else {
        let _ = writeln!(
            writer,
            "{} {} already exists",
            FAILURE_MARK.red(),
            CONFIG_FILE_NAME
        );
    }
}
