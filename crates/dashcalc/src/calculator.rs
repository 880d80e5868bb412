//! Calculator implementation: operation dispatch plus calculation history.

use tracing::{debug, warn};

use crate::error::Result;
use crate::history::HistoryEntry;
use crate::operation::Operation;

/// A calculator that dispatches registered operations and records every
/// successful calculation.
///
/// Each successful [`calculate`](Calculator::calculate) appends one
/// immutable [`HistoryEntry`]; a failed calculation leaves the history
/// untouched. The history can be inspected in chronological order
/// ([`history`](Calculator::history)), cleared wholesale
/// ([`clear_history`](Calculator::clear_history)), or unwound one entry
/// at a time from the most recent ([`undo`](Calculator::undo)).
///
/// A `Calculator` is plain single-threaded state; wrap it in a mutex if
/// it must be shared across threads.
///
/// # Examples
///
/// ```rust
/// use dashcalc::Calculator;
///
/// let mut calc = Calculator::new();
///
/// assert_eq!(calc.calculate("add", 5.0, 3.0)?, 8.0);
/// assert_eq!(calc.calculate("multiply", 4.0, 7.0)?, 28.0);
/// assert_eq!(calc.history().len(), 2);
///
/// let undone = calc.undo().unwrap();
/// assert_eq!(undone.result, 28.0);
/// assert_eq!(calc.history().len(), 1);
/// # Ok::<(), dashcalc::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct Calculator {
    history: Vec<HistoryEntry>,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

impl Calculator {
    /// Creates a calculator with an empty history.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dashcalc::Calculator;
    ///
    /// let calc = Calculator::new();
    /// assert!(calc.history().is_empty());
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self {
            history: Vec::new(),
        }
    }

    /// Performs a calculation and records it in the history.
    ///
    /// # Arguments
    ///
    /// * `operation` - A registered operation name (see
    ///   [`Operation::ALL`]); matching is exact
    /// * `a`, `b` - The operands; any `f64` values, special values
    ///   included
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownOperation`](crate::Error::UnknownOperation)
    /// when `operation` is not a registered name, and
    /// [`Error::DivisionByZero`](crate::Error::DivisionByZero) when
    /// `divide` or `modulo` is requested with a zero divisor. The
    /// history is unchanged on every error path.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dashcalc::Calculator;
    ///
    /// let mut calc = Calculator::new();
    ///
    /// assert_eq!(calc.calculate("power", 2.0, 10.0)?, 1024.0);
    /// assert!(calc.calculate("sqrt", 2.0, 0.0).is_err());
    /// # Ok::<(), dashcalc::Error>(())
    /// ```
    pub fn calculate(&mut self, operation: &str, a: f64, b: f64) -> Result<f64> {
        let operation = operation.parse::<Operation>()?;
        self.calculate_op(operation, a, b)
    }

    /// Typed counterpart of [`calculate`](Calculator::calculate) for
    /// callers that already hold an [`Operation`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::DivisionByZero`](crate::Error::DivisionByZero)
    /// when `Divide` or `Modulo` is applied with a zero divisor; the
    /// history is unchanged in that case.
    pub fn calculate_op(&mut self, operation: Operation, a: f64, b: f64) -> Result<f64> {
        let result = match operation.apply(a, b) {
            Ok(result) => result,
            Err(error) => {
                warn!(%operation, a, b, %error, "calculation rejected");
                return Err(error);
            }
        };

        self.history.push(HistoryEntry {
            operation,
            a,
            b,
            result,
        });
        debug!(%operation, a, b, result, "calculation recorded");

        Ok(result)
    }

    /// The calculation history, oldest first.
    ///
    /// The returned slice borrows the calculator's internal state, so
    /// the history cannot be corrupted through it; call `.to_vec()` for
    /// an owned snapshot.
    #[must_use]
    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    /// Removes every history entry.
    ///
    /// Always succeeds. The operation registry is untouched; only the
    /// log resets.
    pub fn clear_history(&mut self) {
        let removed = self.history.len();
        self.history.clear();
        debug!(removed, "history cleared");
    }

    /// Removes and returns the most recent history entry.
    ///
    /// Returns `None` when the history is empty. That is a normal
    /// outcome, not an error: there is simply nothing left to undo.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dashcalc::Calculator;
    ///
    /// let mut calc = Calculator::new();
    /// assert!(calc.undo().is_none());
    ///
    /// calc.calculate("add", 1.0, 2.0)?;
    /// let entry = calc.undo().unwrap();
    /// assert_eq!(entry.result, 3.0);
    /// assert!(calc.history().is_empty());
    /// # Ok::<(), dashcalc::Error>(())
    /// ```
    pub fn undo(&mut self) -> Option<HistoryEntry> {
        let entry = self.history.pop();
        if let Some(entry) = &entry {
            debug!(%entry, "undid last calculation");
        }
        entry
    }
}
