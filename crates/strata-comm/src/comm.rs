//! The communicator trait and the single-rank implementation.

use strata_core::Rank;

/// Minimal seam over the distributed run's communication layer.
///
/// Only the operations the diagnostics actually need are present: rank
/// identity, a boolean broadcast, a barrier, and group abort. Setup and
/// teardown of the underlying communicator belong to the surrounding
/// framework.
///
/// # Collective contract
///
/// [`broadcast_flag`](Communicator::broadcast_flag) and
/// [`barrier`](Communicator::barrier) must be entered by every rank in
/// the group, in the same order. Partial participation blocks the
/// participating ranks indefinitely; that deadlock is the caller's
/// contract, not handled here.
pub trait Communicator {
    /// This process's rank.
    fn rank(&self) -> Rank;

    /// Total number of ranks in the group.
    fn rank_count(&self) -> u32;

    /// Broadcast a boolean from `root` to every rank.
    ///
    /// On the root, `value` is the flag to distribute; on every other
    /// rank `value` is ignored. Every rank returns the root's value.
    fn broadcast_flag(&self, root: Rank, value: bool) -> bool;

    /// Block until every rank in the group has arrived.
    fn barrier(&self);

    /// Terminate the entire process group with the given exit code.
    ///
    /// Never returns to the caller; no rank is left running with an
    /// inconsistent view of the global state.
    fn abort(&self, code: i32) -> !;
}

/// Communicator for serial (single-rank) runs.
///
/// Broadcasts return their input, the barrier is a no-op, and abort
/// exits the process with the given code.
#[derive(Clone, Copy, Debug, Default)]
pub struct SerialComm;

impl Communicator for SerialComm {
    fn rank(&self) -> Rank {
        Rank(0)
    }

    fn rank_count(&self) -> u32 {
        1
    }

    fn broadcast_flag(&self, _root: Rank, value: bool) -> bool {
        value
    }

    fn barrier(&self) {}

    fn abort(&self, code: i32) -> ! {
        std::process::exit(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serial_comm_is_a_one_rank_group() {
        let comm = SerialComm;
        assert_eq!(comm.rank(), Rank(0));
        assert_eq!(comm.rank_count(), 1);
        assert!(comm.broadcast_flag(Rank(0), true));
        assert!(!comm.broadcast_flag(Rank(0), false));
        comm.barrier();
    }
}
