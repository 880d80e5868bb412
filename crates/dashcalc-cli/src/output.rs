//! Output formatting helpers shared by the subcommands.

use clap::ValueEnum;
use colored::Colorize;
use dashcalc::HistoryEntry;

/// Output format for command results
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text with colors
    #[default]
    Text,
    /// Machine-readable JSON
    Json,
}

/// Render one history entry for terminal display.
///
/// The operation name is colored, the rest of the line follows the
/// entry's own `Display` form: `add(5, 3) = 8`.
pub fn format_entry(entry: &HistoryEntry) -> String {
    format!(
        "{}({}, {}) = {}",
        entry.operation.name().cyan(),
        entry.a,
        entry.b,
        entry.result.to_string().bright_white().bold()
    )
}
