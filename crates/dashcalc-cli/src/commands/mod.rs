// Copyright 2026 Dropbox (created by Andrew Yates <ayates@dropbox.com>)

//! Subcommand implementations.

pub mod demo;
pub mod eval;
pub mod ops;
