//! The crate prelude
//!
//! # Example
//! ```
//! use tsutil::prelude::*;
//! ```

pub use tsutil_tables::prelude::*;
