//! Rank-ordered collective visitation.

use strata_core::Rank;

use crate::comm::Communicator;

/// Visit every rank in strictly ascending order, carrying a running
/// verdict.
///
/// For each rank r in `0..rank_count`, rank r alone runs `visit` with
/// the verdict as it stood when its turn began; the updated verdict is
/// then broadcast from r and a barrier is passed before rank r+1
/// starts. Output written during one rank's turn therefore never
/// interleaves with another rank's, and by loop end every rank holds
/// the same final verdict.
///
/// Costs exactly `2 * rank_count` collective operations, independent of
/// what `visit` does. Collective: every rank must call this with the
/// same communicator group.
pub fn ordered_visit<C, F>(comm: &C, mut visit: F) -> bool
where
    C: Communicator + ?Sized,
    F: FnMut(bool) -> bool,
{
    let mut verdict = true;
    for r in 0..comm.rank_count() {
        let root = Rank(r);
        if comm.rank() == root {
            verdict = visit(verdict);
        }
        verdict = comm.broadcast_flag(root, verdict);
        comm.barrier();
    }
    verdict
}
