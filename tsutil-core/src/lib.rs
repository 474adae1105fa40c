//! Row identifiers and value types shared by
//! the `tsutil` table crates.
//!
//! Row ids are signed 32 bit integers where `-1`
//! means "no row".  That convention is kept exactly
//! so that columns can be exchanged with `tskit`.
//! Use [`TableId::to_option`] and [`TableId::from_option`]
//! to move between the sentinel and [`Option`].

use thiserror::Error;

mod macros;

pub mod newtypes;
mod position;
pub mod prelude;
mod time;
pub mod traits;

pub use newtypes::{MutationId, NodeId, ProvenanceId, SiteId};
pub use position::Position;
pub use time::Time;
pub use traits::TableId;

/// The low-level integer behind every row id.
pub type RawId = i32;

/// Errors raised when building ids.
#[derive(Error, Debug, PartialEq)]
pub enum Error {
    /// A raw value below the `NULL` sentinel.
    #[error("invalid row id: {0}")]
    InvalidId(i64),
    /// A row index that cannot be stored as a [`RawId`].
    #[error("{0}")]
    ConversionError(String),
}
