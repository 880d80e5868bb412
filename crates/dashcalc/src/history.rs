//! Immutable records of completed calculations.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::operation::Operation;

/// One completed calculation.
///
/// Created by [`Calculator::calculate`](crate::Calculator::calculate)
/// exactly once per successful call and never modified afterwards. The
/// entry carries the operation, both operands, and the result, which is
/// enough to audit or replay the computation.
///
/// # Storage Format
///
/// Entries serialize with the operation's canonical name:
///
/// ```json
/// {"operation": "add", "a": 5.0, "b": 3.0, "result": 8.0}
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Which operation ran
    pub operation: Operation,
    /// First operand
    pub a: f64,
    /// Second operand
    pub b: f64,
    /// The value the operation produced
    pub result: f64,
}

impl fmt::Display for HistoryEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}({}, {}) = {}",
            self.operation, self.a, self.b, self.result
        )
    }
}
