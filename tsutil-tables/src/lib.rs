//! Columnar site, mutation, and provenance tables.
//!
//! The tables follow the `tskit` data model:
//!
//! 1. Tables are "structure of arrays".
//! 2. Variable-length byte columns (ancestral state,
//!    derived state, metadata, provenance records)
//!    are stored as one flat buffer plus an offset array.
//!    See [`offset_column`].
//! 3. Row ids are `i32` with `-1` meaning `NULL`.
//!    Mutations refer to sites and to their parent mutation.
//!
//! The main operation is [`TableCollection::delete_sites`],
//! which removes sites, cascades to their mutations,
//! and keeps every reference column consistent.
//!
//! # Example
//!
//! ```
//! use tsutil_tables::prelude::*;
//!
//! let mut tables = TableCollection::new();
//! let s0 = tables.add_site(1., Some(b"A"), None).unwrap();
//! let s1 = tables.add_site(2., Some(b"C"), None).unwrap();
//! let m0 = tables.add_mutation(s1, 0, 1., Some(b"G"), None, None).unwrap();
//! tables.add_mutation(s1, 1, 0., Some(b"T"), None, Some(m0)).unwrap();
//! tables.add_mutation(s0, 1, 0., Some(b"T"), None, None).unwrap();
//!
//! let trimmed = tables.delete_sites(&[s1], DeleteSitesFlags::default()).unwrap();
//! assert_eq!(trimmed.num_sites(), 1);
//! assert_eq!(trimmed.num_mutations(), 1);
//! assert_eq!(trimmed.mutation(0).unwrap().derived_state, b"T");
//! ```

mod delete_sites;
mod error;
mod flags;
mod keep_mask;
mod mutation_table;
pub mod offset_column;
pub mod prelude;
mod provenance;
mod row_map;
mod site_table;
mod table_collection;

pub use delete_sites::delete_sites;
pub use error::{TablesError, TablesResult};
pub use flags::{DeleteSitesFlags, TableValidationFlags};
pub use keep_mask::{mutation_keep_mask, select_rows, site_keep_mask};
pub use mutation_table::{MutationRow, MutationTable};
pub use offset_column::{Offset, OffsetColumn};
pub use provenance::{
    DeleteSitesParameters, ProvenanceRecord, ProvenanceTable, Software,
    PROVENANCE_SCHEMA_VERSION,
};
pub use row_map::RowMap;
pub use site_table::{SiteRow, SiteTable};
pub use table_collection::TableCollection;

/// Get the tsutil-tables version number.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
