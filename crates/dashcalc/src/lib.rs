//! # dashcalc
//!
//! Arithmetic operation dispatch with an undoable calculation history.
//!
//! The crate exposes one component: [`Calculator`]. It dispatches a
//! closed set of binary operations ([`Operation`]) over `f64` operands
//! and records every successful calculation as an immutable
//! [`HistoryEntry`]. The history supports chronological inspection,
//! wholesale clearing, and LIFO [`undo`](Calculator::undo).
//!
//! Dispatch is typed: operation names are resolved against the registry
//! once, at the parsing boundary, and everything past that point is an
//! exhaustive match over [`Operation`]. Failed calculations (an unknown
//! name, a zero divisor) never touch the history.
//!
//! # Example
//!
//! ```rust
//! use dashcalc::Calculator;
//!
//! fn main() -> dashcalc::Result<()> {
//!     let mut calc = Calculator::new();
//!
//!     calc.calculate("add", 5.0, 3.0)?;
//!     calc.calculate("multiply", 4.0, 7.0)?;
//!     assert_eq!(calc.calculate("power", 2.0, 10.0)?, 1024.0);
//!
//!     for entry in calc.history() {
//!         println!("{entry}");
//!     }
//!
//!     // Division by zero is rejected and never recorded.
//!     assert!(calc.calculate("divide", 1.0, 0.0).is_err());
//!     assert_eq!(calc.history().len(), 3);
//!
//!     Ok(())
//! }
//! ```
//!
//! # Scope
//!
//! The calculator is single-threaded, synchronous, in-memory state.
//! There is no persistence across runs and no built-in locking; callers
//! that share one instance across threads wrap it in a mutex.

pub mod calculator;
pub mod error;
pub mod history;
pub mod operation;

mod calculator_proptest;

pub use calculator::Calculator;
pub use error::{Error, Result};
pub use history::HistoryEntry;
pub use operation::Operation;
