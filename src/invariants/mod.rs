//! First-class invariants over in-progress rounds.
//!
//! Invariants are logical properties that must hold throughout round
//! execution. They are testable independently and serve as
//! documentation of system guarantees.

use crate::session::RoundInProgress;
use tracing::instrument;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implementations are provided for tuples, enabling composition of
/// multiple invariants into a single verification step.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns `Ok(())` if all invariants hold, or the list of
    /// violations if any fails.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }
        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }
        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }
        if !I3::holds(state) {
            violations.push(InvariantViolation::new(I3::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

pub mod balanced_marks;
pub mod cell_conservation;
pub mod history_consistent;

pub use balanced_marks::BalancedMarks;
pub use cell_conservation::CellConservation;
pub use history_consistent::HistoryConsistent;

/// All round invariants as a composable set.
pub type RoundInvariants = (BalancedMarks, CellConservation, HistoryConsistent);

/// Asserts that all round invariants hold (debug builds only).
#[instrument(skip(round))]
pub fn assert_round_invariants(round: &RoundInProgress) {
    #[cfg(debug_assertions)]
    if let Err(violations) = RoundInvariants::check_all(round) {
        panic!("round invariants violated: {violations:?}");
    }
    #[cfg(not(debug_assertions))]
    let _ = round;
}
