use crate::offset_column::OffsetColumn;
use crate::{keep_mask, TablesError, TablesResult};
use tsutil_core::{Position, SiteId, TableId};

/// A view of one row of a [`SiteTable`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SiteRow<'a> {
    /// The row's id
    pub id: SiteId,
    /// Position of the site
    pub position: Position,
    /// The ancestral state.
    pub ancestral_state: &'a [u8],
    /// Opaque metadata
    pub metadata: &'a [u8],
}

/// A site table, stored by column.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SiteTable {
    position: Vec<Position>,
    ancestral_state: OffsetColumn,
    metadata: OffsetColumn,
}

impl SiteTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a table from its columns.
    ///
    /// # Errors
    ///
    /// [`TablesError::ShapeMismatch`] if the columns
    /// do not have the same number of rows.
    pub fn from_columns(
        position: Vec<Position>,
        ancestral_state: OffsetColumn,
        metadata: OffsetColumn,
    ) -> TablesResult<Self> {
        let rv = Self {
            position,
            ancestral_state,
            metadata,
        };
        rv.validate()?;
        Ok(rv)
    }

    /// Add a row.
    ///
    /// # Errors
    ///
    /// [`TablesError::InvalidPosition`] if `position` is
    /// negative or not finite.
    pub fn add_row(
        &mut self,
        position: f64,
        ancestral_state: Option<&[u8]>,
        metadata: Option<&[u8]>,
    ) -> TablesResult<SiteId> {
        let position =
            Position::new(position).ok_or(TablesError::InvalidPosition { found: position })?;
        let id = SiteId::from_index(self.num_rows())?;
        self.position.push(position);
        self.ancestral_state.push(ancestral_state);
        self.metadata.push(metadata);
        Ok(id)
    }

    /// Number of rows
    pub fn num_rows(&self) -> usize {
        self.position.len()
    }

    /// Get a row, or `None` if `id` is not a row of the table.
    pub fn row(&self, id: SiteId) -> Option<SiteRow<'_>> {
        let i = id.to_index()?;
        Some(SiteRow {
            id,
            position: *self.position.get(i)?,
            ancestral_state: self.ancestral_state.get(i)?,
            metadata: self.metadata.get(i)?,
        })
    }

    /// Iterate over all rows
    pub fn iter(&self) -> impl Iterator<Item = SiteRow<'_>> + '_ {
        (0..self.num_rows()).filter_map(move |i| {
            SiteId::from_index(i)
                .ok()
                .and_then(|id| self.row(id))
        })
    }

    /// The position column
    pub fn position_column(&self) -> &[Position] {
        &self.position
    }

    /// The ancestral state column
    pub fn ancestral_state_column(&self) -> &OffsetColumn {
        &self.ancestral_state
    }

    /// The metadata column
    pub fn metadata_column(&self) -> &OffsetColumn {
        &self.metadata
    }

    /// Check column shapes and offsets.
    pub fn validate(&self) -> TablesResult<()> {
        for c in [&self.ancestral_state, &self.metadata] {
            if c.num_rows() != self.num_rows() {
                return Err(TablesError::ShapeMismatch {
                    expected: self.num_rows(),
                    found: c.num_rows(),
                });
            }
            c.validate()?;
        }
        Ok(())
    }

    /// A new table holding the rows where `keep` is `true`.
    pub fn filter_rows(&self, keep: &[bool]) -> TablesResult<Self> {
        Self::from_columns(
            keep_mask::select_rows(&self.position, keep)?,
            self.ancestral_state.filter_rows(keep)?,
            self.metadata.filter_rows(keep)?,
        )
    }
}
