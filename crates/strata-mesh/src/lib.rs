//! Mesh-domain types for the strata AMR diagnostics.
//!
//! Defines the two direction-bucket granularities used by exchange
//! lists ([`Face`] and [`Dir26`]), the slice-projection [`Axis`], the
//! [`ExchangeKind`] selector, and the [`MeshView`] trait through which
//! the diagnostics read the external patch hierarchy.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod axis;
pub mod direction;
pub mod exchange;
pub mod view;

pub use axis::Axis;
pub use direction::{Dir26, Face};
pub use exchange::ExchangeKind;
pub use view::MeshView;
