//! Communicator seam and rank-ordered collectives for strata.
//!
//! The diagnostics talk to the distributed run through the
//! [`Communicator`] trait: rank identity, a boolean broadcast, a
//! barrier, and group abort. [`ordered_visit`] layers the rank-ordered
//! visitation protocol on top of those primitives. [`SerialComm`]
//! covers single-rank runs; [`local_group`] builds a thread-backed
//! group for tests, examples, and benches.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod comm;
pub mod local;
pub mod visit;

pub use comm::{Communicator, SerialComm};
pub use local::{local_group, LocalComm, RankAborted};
pub use visit::ordered_visit;
