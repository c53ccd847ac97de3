//! Core types for the strata AMR diagnostics workspace.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the strongly-typed identifiers, the simulation clock snapshot, the
//! diagnostic output sink, and the configuration error type shared by
//! every other strata crate.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod clock;
pub mod error;
pub mod id;
pub mod sink;

pub use clock::SimClock;
pub use error::ConfigError;
pub use id::{Level, PatchId, Rank, Slot};
pub use sink::DiagSink;
