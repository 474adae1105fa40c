//! # Prelude
//!
//! Contains definitions that are useful to
//! have global
//!
//! ## Examples
//!
//! ```
//! use tsutil_tables::prelude::*;
//! ```

pub use crate::{
    DeleteSitesFlags, MutationTable, OffsetColumn, ProvenanceTable, RowMap, SiteTable, TableCollection,
    TableValidationFlags, TablesError, TablesResult,
};
pub use tsutil_core::prelude::*;
