#![warn(missing_docs)]

//! Columnar tree sequence tables with
//! cascading site deletion.
//!
//! # Overview
//!
//! A [`TableCollection`] holds site, mutation, and
//! provenance tables laid out like those of
//! [tskit](https://tskit.dev): fixed-width columns,
//! variable-length byte columns packed into flat
//! buffers with offset arrays, and `-1` as the
//! `NULL` row id.
//!
//! [`TableCollection::delete_sites`] removes a set of sites
//! and every mutation at them, renumbering the surviving
//! rows and updating the mutation `site` and `parent` columns.
//!
//! ```
//! use tsutil::prelude::*;
//!
//! let mut tables = TableCollection::new();
//! for p in [1., 2., 3.] {
//!     tables.add_site(p, None, None).unwrap();
//! }
//! let m0 = tables.add_mutation(1, 0, 1., Some(b"A"), None, None).unwrap();
//! tables.add_mutation(2, 0, 0., Some(b"C"), None, Some(m0)).unwrap();
//!
//! let trimmed = tables.delete_sites(&[SiteId::from(1)], DeleteSitesFlags::default()).unwrap();
//! let m = trimmed.mutation(0).unwrap();
//! assert_eq!(m.site, 1);
//! assert_eq!(m.parent, None);
//! ```

pub use tsutil_core::*;
pub use tsutil_tables::*;

pub mod prelude;

/// Get the tsutil version number.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
