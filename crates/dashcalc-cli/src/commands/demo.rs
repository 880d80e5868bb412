// Copyright 2026 Dropbox (created by Andrew Yates <ayates@dropbox.com>)

//! Scripted demonstration: a few calculations, the history, one undo.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use dashcalc::Calculator;

use crate::output::{self, OutputFormat};

/// The calculations the demo runs, in order.
const DEMO_STEPS: [(&str, f64, f64); 3] = [
    ("add", 5.0, 3.0),
    ("multiply", 4.0, 7.0),
    ("power", 2.0, 10.0),
];

/// Arguments for the demo command
#[derive(Args)]
pub struct DemoArgs {
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

pub fn run(args: DemoArgs) -> Result<()> {
    let mut calc = Calculator::new();

    let mut results = Vec::with_capacity(DEMO_STEPS.len());
    for (operation, a, b) in DEMO_STEPS {
        results.push(calc.calculate(operation, a, b)?);
    }
    let recorded = calc.history().to_vec();

    let undone = calc.undo().context("demo history cannot be empty")?;

    match args.format {
        OutputFormat::Text => {
            for result in results {
                println!("{result}");
            }

            println!();
            println!("{}", "History:".bold());
            for entry in &recorded {
                println!("  {}", output::format_entry(entry));
            }

            println!();
            println!("Undid {}", output::format_entry(&undone));
            println!("{} entries remain", calc.history().len());
        }
        OutputFormat::Json => {
            let report = serde_json::json!({
                "recorded": recorded,
                "undone": undone,
                "remaining": calc.history(),
            });
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }

    Ok(())
}
