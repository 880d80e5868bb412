// Copyright 2026 Dropbox (created by Andrew Yates <ayates@dropbox.com>)
// Allow clippy warnings for CLI application
#![allow(clippy::unwrap_used, clippy::expect_used)]
#![allow(clippy::needless_pass_by_value)]

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod output;

use commands::{demo, eval, ops};

/// dashcalc CLI - dispatch arithmetic operations and inspect the history
///
/// Commands:
///
/// **Evaluation**:
///   eval - run one operation against two operands
///
/// **Demonstration**:
///   demo - a scripted session showing recording, history, and undo
///
/// **Introspection**:
///   ops - list the registered operations
#[derive(Parser)]
#[command(name = "dashcalc")]
#[command(author = "Andrew Yates")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Calculator CLI - operation dispatch with an undoable history", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate one operation against two operands
    Eval(eval::EvalArgs),

    /// Run the demonstration scenario (a few calculations, the history, an undo)
    Demo(demo::DemoArgs),

    /// List the registered operations
    Ops(ops::OpsArgs),
}

fn main() -> Result<()> {
    // Initialize tracing; quiet by default so command output stays clean
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("error")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Eval(args) => eval::run(args),
        Commands::Demo(args) => demo::run(args),
        Commands::Ops(args) => ops::run(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clap_parses_known_subcommands() {
        let cli = Cli::try_parse_from(["dashcalc", "demo"]).expect("parse demo");
        assert!(matches!(cli.command, Commands::Demo(_)));

        let cli = Cli::try_parse_from(["dashcalc", "eval", "add", "5", "3"]).expect("parse eval");
        assert!(matches!(cli.command, Commands::Eval(_)));

        let cli = Cli::try_parse_from(["dashcalc", "ops"]).expect("parse ops");
        assert!(matches!(cli.command, Commands::Ops(_)));
    }

    #[test]
    fn clap_enforces_required_args() {
        assert!(Cli::try_parse_from(["dashcalc", "eval"]).is_err());
        assert!(Cli::try_parse_from(["dashcalc", "eval", "add", "5"]).is_err());
        assert!(Cli::try_parse_from(["dashcalc", "eval", "add", "five", "3"]).is_err());
    }
}
