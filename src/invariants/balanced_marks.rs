//! Balanced marks invariant: the human leads by at most one mark.

use super::Invariant;
use crate::session::RoundInProgress;
use crate::types::Mark;
use tracing::warn;

/// Invariant: human mark count minus computer mark count is 0 or 1.
///
/// The human always moves first and turns strictly alternate, so on
/// any reachable board the human has either the same number of marks
/// as the computer or exactly one more.
pub struct BalancedMarks;

impl Invariant<RoundInProgress> for BalancedMarks {
    fn holds(round: &RoundInProgress) -> bool {
        let human = round.board().count_of(Mark::Human);
        let computer = round.board().count_of(Mark::Computer);

        let valid = human >= computer && human - computer <= 1;
        if !valid {
            warn!(human, computer, "mark balance violated");
        }
        valid
    }

    fn description() -> &'static str {
        "Human mark count minus computer mark count is 0 or 1"
    }
}
