use thiserror::Error;
use tsutil_core::{MutationId, SiteId};

/// Error type related to [``crate::TableCollection``]
/// and the column operations it is built from.
#[derive(Error, Debug, PartialEq)]
pub enum TablesError {
    /// Returned when a site requested for deletion
    /// does not exist.
    #[error("Site ID out of bounds: {found} (number of sites: {num_sites})")]
    SiteIdOutOfBounds {
        /// The invalid `ID`
        found: SiteId,
        /// Number of rows in the site table
        num_sites: usize,
    },
    /// Returned when a keep mask or a column does not
    /// have the expected number of rows.
    #[error("Shape mismatch: expected {expected} rows, found {found}")]
    ShapeMismatch {
        /// Expected number of rows
        expected: usize,
        /// Number of rows found
        found: usize,
    },
    /// Returned when a row index, or a non-NULL value
    /// of a reference column, is outside of its target table.
    #[error("Index out of range: {index} (length {len})")]
    IndexOutOfRange {
        /// The invalid index
        index: i64,
        /// Number of rows in the target
        len: usize,
    },
    /// Returned when an offset array is empty, does not start at zero,
    /// decreases, or does not end at the length of its buffer.
    #[error("Invalid offsets at row {row}")]
    InvalidOffsets {
        /// First offending entry of the offset array
        row: usize,
    },
    /// Returned when invalid positions are encountered.
    #[error("Invalid value for position: {found:?}")]
    InvalidPosition {
        /// The invalid position
        found: f64,
    },
    /// Returned when a mutation's parent is not an earlier row.
    /// Only checked when requested via
    /// [``crate::TableValidationFlags::VALIDATE_MUTATION_PARENT_ORDER``].
    #[error("Mutation {row} has parent {parent}, which is not an earlier row")]
    MutationParentOrder {
        /// The mutation
        row: MutationId,
        /// Its parent
        parent: MutationId,
    },
    /// Returned when a provenance record cannot be encoded.
    #[error("{value:?}")]
    ProvenanceError {
        /// The error message
        value: String,
    },
    /// A redirection of a [``tsutil_core::Error``]
    #[error("{value:?}")]
    IdError {
        /// The redirected error
        #[from]
        value: tsutil_core::Error,
    },
}

/// Result type for operations on tables
pub type TablesResult<T> = std::result::Result<T, TablesError>;

pub(crate) fn index_out_of_range(index: usize, len: usize) -> TablesError {
    TablesError::IndexOutOfRange {
        index: i64::try_from(index).unwrap_or(i64::MAX),
        len,
    }
}

impl From<serde_json::Error> for TablesError {
    fn from(value: serde_json::Error) -> Self {
        TablesError::ProvenanceError {
            value: value.to_string(),
        }
    }
}
