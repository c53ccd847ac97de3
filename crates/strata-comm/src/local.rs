//! Thread-backed communicator group for tests, examples, and benches.
//!
//! [`local_group`] hands out one [`LocalComm`] per rank; the caller
//! moves each into its own thread and drives the collective operations
//! exactly as a distributed run would. Broadcast travels over per-rank
//! bool channels, the barrier is a [`std::sync::Barrier`], and abort
//! unwinds the calling thread with a [`RankAborted`] payload that
//! drivers observe through `JoinHandle`.

use std::sync::{Arc, Barrier};

use crossbeam_channel::{bounded, Receiver, Sender};

use strata_core::Rank;

use crate::comm::Communicator;

/// Panic payload carried out of a [`LocalComm`] rank thread by
/// [`Communicator::abort`].
///
/// Recover it by downcasting the `Err` payload of the thread's
/// `JoinHandle::join`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RankAborted {
    /// Exit code passed to `abort`.
    pub code: i32,
}

/// One rank's handle into an in-process communicator group.
pub struct LocalComm {
    rank: Rank,
    count: u32,
    barrier: Arc<Barrier>,
    /// Broadcast senders, indexed by destination rank; the entry for
    /// this rank itself is never used.
    peers: Vec<Sender<bool>>,
    inbox: Receiver<bool>,
}

/// Create an `n`-rank in-process communicator group.
///
/// Returns one handle per rank, in rank order. All `n` handles must
/// participate in every collective operation or the group deadlocks,
/// matching the caller contract of a real distributed run.
///
/// # Panics
///
/// Panics if `n` is zero.
pub fn local_group(n: u32) -> Vec<LocalComm> {
    assert!(n > 0, "communicator group needs at least one rank");

    let barrier = Arc::new(Barrier::new(n as usize));
    let mut senders = Vec::with_capacity(n as usize);
    let mut inboxes = Vec::with_capacity(n as usize);
    for _ in 0..n {
        let (tx, rx) = bounded(1);
        senders.push(tx);
        inboxes.push(rx);
    }

    inboxes
        .into_iter()
        .enumerate()
        .map(|(r, inbox)| LocalComm {
            rank: Rank(r as u32),
            count: n,
            barrier: Arc::clone(&barrier),
            peers: senders.clone(),
            inbox,
        })
        .collect()
}

impl Communicator for LocalComm {
    fn rank(&self) -> Rank {
        self.rank
    }

    fn rank_count(&self) -> u32 {
        self.count
    }

    fn broadcast_flag(&self, root: Rank, value: bool) -> bool {
        if self.rank == root {
            for (r, peer) in self.peers.iter().enumerate() {
                if r as u32 != root.0 {
                    peer.send(value).expect("broadcast peer hung up");
                }
            }
            value
        } else {
            self.inbox.recv().expect("broadcast root hung up")
        }
    }

    fn barrier(&self) {
        self.barrier.wait();
    }

    fn abort(&self, code: i32) -> ! {
        std::panic::panic_any(RankAborted { code })
    }
}
