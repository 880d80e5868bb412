//! The operation registry: a closed set of binary arithmetic operations.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A registered arithmetic operation.
///
/// The registry is the enum itself: every operation the calculator can
/// perform is a variant here, and [`Operation::apply`] maps each variant
/// to its implementation with an exhaustive match. Names are only
/// interpreted at the [`FromStr`] boundary, so a typo surfaces as
/// [`Error::UnknownOperation`] before any arithmetic runs. Adding an
/// operation means adding a variant plus its [`ALL`](Operation::ALL),
/// [`name`](Operation::name), parse, and [`apply`](Operation::apply)
/// rows.
///
/// # Examples
///
/// ```rust
/// use dashcalc::Operation;
///
/// let op: Operation = "power".parse()?;
/// assert_eq!(op.apply(2.0, 10.0)?, 1024.0);
/// # Ok::<(), dashcalc::Error>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    /// `a + b`
    Add,
    /// `a - b`
    Subtract,
    /// `a * b`
    Multiply,
    /// `a / b`; rejects a zero divisor
    Divide,
    /// `a` raised to `b`, with IEEE 754 `powf` semantics
    Power,
    /// Remainder of `a / b`; rejects a zero divisor
    Modulo,
}

impl Operation {
    /// Every registered operation, in canonical order.
    pub const ALL: [Operation; 6] = [
        Operation::Add,
        Operation::Subtract,
        Operation::Multiply,
        Operation::Divide,
        Operation::Power,
        Operation::Modulo,
    ];

    /// Canonical lowercase name, as accepted by [`FromStr`] and produced
    /// by serialization.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Subtract => "subtract",
            Operation::Multiply => "multiply",
            Operation::Divide => "divide",
            Operation::Power => "power",
            Operation::Modulo => "modulo",
        }
    }

    /// Evaluates the operation on `(a, b)`.
    ///
    /// Pure function; no history is involved. Every operation is total
    /// over the `f64` domain (special values included) except `Divide`
    /// and `Modulo`, which reject a divisor of exactly zero.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DivisionByZero`] when `Divide` or `Modulo` is
    /// applied with `b == 0.0`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dashcalc::Operation;
    ///
    /// assert_eq!(Operation::Add.apply(5.0, 3.0)?, 8.0);
    /// assert!(Operation::Divide.apply(1.0, 0.0).is_err());
    /// # Ok::<(), dashcalc::Error>(())
    /// ```
    pub fn apply(self, a: f64, b: f64) -> Result<f64> {
        match self {
            Operation::Add => Ok(a + b),
            Operation::Subtract => Ok(a - b),
            Operation::Multiply => Ok(a * b),
            Operation::Divide => {
                if b == 0.0 {
                    Err(Error::division_by_zero(self))
                } else {
                    Ok(a / b)
                }
            }
            Operation::Power => Ok(a.powf(b)),
            Operation::Modulo => {
                if b == 0.0 {
                    Err(Error::division_by_zero(self))
                } else {
                    Ok(a % b)
                }
            }
        }
    }
}

impl FromStr for Operation {
    type Err = Error;

    /// Resolves a canonical operation name.
    ///
    /// Matching is exact - no case folding, no trimming. The names are
    /// registry keys, not free-form input.
    fn from_str(s: &str) -> Result<Self> {
        match s {
            "add" => Ok(Operation::Add),
            "subtract" => Ok(Operation::Subtract),
            "multiply" => Ok(Operation::Multiply),
            "divide" => Ok(Operation::Divide),
            "power" => Ok(Operation::Power),
            "modulo" => Ok(Operation::Modulo),
            other => Err(Error::unknown_operation(other)),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
