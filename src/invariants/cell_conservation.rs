//! Cell conservation invariant: open plus filled cells equal nine.

use super::Invariant;
use crate::cell::Cell;
use crate::session::RoundInProgress;
use tracing::warn;

/// Invariant: open cell count plus filled cell count is always 9.
///
/// Every slot holds exactly one square state, so the cells reported
/// open and the cells counted filled partition the board.
pub struct CellConservation;

impl Invariant<RoundInProgress> for CellConservation {
    fn holds(round: &RoundInProgress) -> bool {
        let open = Cell::open(round.board()).len();
        let filled = round.board().filled_count();

        let valid = open + filled == 9;
        if !valid {
            warn!(open, filled, "cell conservation violated");
        }
        valid
    }

    fn description() -> &'static str {
        "Open cell count plus filled cell count equals 9"
    }
}
