//! Property-based tests for calculator invariants
//!
//! # Tested Invariants
//!
//! 1. **History Bookkeeping**: every successful calculation appends exactly
//!    one entry; every failure appends none
//! 2. **Undo Identity**: undo returns exactly the entries that were
//!    appended, newest first
//! 3. **Error Isolation**: rejected calculations leave the history
//!    bit-for-bit unchanged
//! 4. **Dispatch Consistency**: recording a calculation returns the same
//!    value as the pure operation
//! 5. **Serde Round-Trip**: finite entries survive JSON serialization
//!
//! # Usage
//!
//! Run these tests with:
//! ```bash
//! cargo test -p dashcalc calculator_proptest
//! ```
//!
//! For more iterations (to find rarer edge cases):
//! ```bash
//! PROPTEST_CASES=10000 cargo test -p dashcalc calculator_proptest
//! ```

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use proptest::prelude::*;

    use crate::calculator::Calculator;
    use crate::history::HistoryEntry;
    use crate::operation::Operation;

    // =========================================================================
    // Strategy Helpers
    // =========================================================================

    /// Any registered operation
    fn arb_operation() -> impl Strategy<Value = Operation> {
        prop::sample::select(Operation::ALL.to_vec())
    }

    /// A finite operand; large enough to exercise sign and magnitude,
    /// small enough that most results stay finite
    fn arb_operand() -> impl Strategy<Value = f64> {
        -1.0e6..1.0e6
    }

    // =========================================================================
    // Properties
    // =========================================================================

    proptest! {
        #[test]
        fn prop_history_tracks_every_success(
            steps in proptest::collection::vec(
                (arb_operation(), arb_operand(), arb_operand()),
                0..32,
            ),
        ) {
            let mut calc = Calculator::new();
            let mut successes = 0usize;

            for (op, a, b) in steps {
                if calc.calculate_op(op, a, b).is_ok() {
                    successes += 1;
                }
                prop_assert_eq!(calc.history().len(), successes);
            }

            calc.clear_history();
            prop_assert!(calc.history().is_empty());
        }

        #[test]
        fn prop_undo_unwinds_in_reverse_order(
            steps in proptest::collection::vec(
                (arb_operation(), arb_operand(), arb_operand()),
                0..24,
            ),
        ) {
            let mut calc = Calculator::new();
            let mut expected = Vec::new();

            for (op, a, b) in steps {
                // keep only finite results so entry equality is exact
                let Ok(result) = op.apply(a, b) else { continue };
                if !result.is_finite() {
                    continue;
                }
                calc.calculate_op(op, a, b).unwrap();
                expected.push(HistoryEntry {
                    operation: op,
                    a,
                    b,
                    result,
                });
            }

            prop_assert_eq!(calc.history(), &expected[..]);

            while let Some(entry) = calc.undo() {
                prop_assert_eq!(Some(entry), expected.pop());
            }
            prop_assert!(expected.is_empty());
            prop_assert!(calc.undo().is_none());
        }

        #[test]
        fn prop_rejected_calculations_leave_history_unchanged(
            a in arb_operand(),
            b in arb_operand(),
        ) {
            let mut calc = Calculator::new();
            calc.calculate_op(Operation::Add, a, b).unwrap();
            let before = calc.history().to_vec();

            prop_assert!(calc.calculate_op(Operation::Divide, a, 0.0).is_err());
            prop_assert!(calc.calculate_op(Operation::Modulo, a, 0.0).is_err());
            prop_assert!(calc.calculate("no_such_op", a, b).is_err());

            prop_assert_eq!(calc.history(), &before[..]);
        }

        #[test]
        fn prop_recording_matches_pure_application(
            op in arb_operation(),
            a in arb_operand(),
            b in arb_operand(),
        ) {
            let mut calc = Calculator::new();

            match (op.apply(a, b), calc.calculate_op(op, a, b)) {
                (Ok(pure), Ok(recorded)) => {
                    // NaN != NaN, so compare through bits
                    prop_assert_eq!(pure.to_bits(), recorded.to_bits());
                    prop_assert_eq!(calc.history().len(), 1);
                }
                (Err(_), Err(_)) => prop_assert!(calc.history().is_empty()),
                (pure, recorded) => {
                    return Err(TestCaseError::fail(format!(
                        "pure {pure:?} and recorded {recorded:?} disagree"
                    )));
                }
            }
        }

        #[test]
        fn prop_finite_entries_round_trip_through_json(
            op in arb_operation(),
            a in arb_operand(),
            b in arb_operand(),
        ) {
            let Ok(result) = op.apply(a, b) else { return Ok(()) };
            prop_assume!(result.is_finite());

            let entry = HistoryEntry {
                operation: op,
                a,
                b,
                result,
            };
            let json = serde_json::to_string(&entry).unwrap();
            let back: HistoryEntry = serde_json::from_str(&json).unwrap();
            prop_assert_eq!(back, entry);
        }
    }
}
