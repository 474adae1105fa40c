//! # Prelude
//!
//! ```
//! use tsutil_core::prelude::*;
//! let s = SiteId::from(0);
//! assert_eq!(s.to_index(), Some(0));
//! ```

pub use crate::newtypes::*;
pub use crate::traits::TableId;
pub use crate::{Position, RawId, Time};
