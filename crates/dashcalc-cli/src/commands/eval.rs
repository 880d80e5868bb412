//! eval - Evaluate a single operation against two operands

use anyhow::{Context, Result};
use clap::Args;
use dashcalc::Calculator;

use crate::output::OutputFormat;

/// Arguments for the eval command
#[derive(Args)]
pub struct EvalArgs {
    /// Operation name (see `dashcalc ops` for the registry)
    pub operation: String,

    /// First operand
    pub a: f64,

    /// Second operand
    pub b: f64,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

pub fn run(args: EvalArgs) -> Result<()> {
    let mut calc = Calculator::new();

    let result = calc
        .calculate(&args.operation, args.a, args.b)
        .with_context(|| {
            format!(
                "failed to evaluate {}({}, {})",
                args.operation, args.a, args.b
            )
        })?;

    match args.format {
        OutputFormat::Text => println!("{result}"),
        OutputFormat::Json => {
            let entry = calc
                .history()
                .last()
                .context("no history entry was recorded")?;
            println!("{}", serde_json::to_string_pretty(entry)?);
        }
    }

    Ok(())
}
