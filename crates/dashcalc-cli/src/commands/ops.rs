//! ops - List the registered operations

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use dashcalc::Operation;

use crate::output::OutputFormat;

/// Arguments for the ops command
#[derive(Args)]
pub struct OpsArgs {
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// One-line description of an operation's semantics.
fn describe(operation: Operation) -> &'static str {
    match operation {
        Operation::Add => "a + b",
        Operation::Subtract => "a - b",
        Operation::Multiply => "a * b",
        Operation::Divide => "a / b (rejects a zero divisor)",
        Operation::Power => "a raised to the power b",
        Operation::Modulo => "remainder of a / b (rejects a zero divisor)",
    }
}

pub fn run(args: OpsArgs) -> Result<()> {
    match args.format {
        OutputFormat::Text => {
            println!("{}", "Registered operations:".bold());
            for operation in Operation::ALL {
                // Pad before coloring so the escape codes do not skew the column
                let name = format!("{:<10}", operation.name());
                println!("  {} {}", name.cyan(), describe(operation));
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&Operation::ALL)?);
        }
    }

    Ok(())
}
