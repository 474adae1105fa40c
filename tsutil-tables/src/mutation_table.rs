use crate::error::index_out_of_range;
use crate::keep_mask::select_rows;
use crate::offset_column::OffsetColumn;
use crate::row_map::RowMap;
use crate::{TableValidationFlags, TablesError, TablesResult};
use tsutil_core::{MutationId, NodeId, SiteId, TableId, Time};

/// A view of one row of a [`MutationTable`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct MutationRow<'a> {
    /// The row's id
    pub id: MutationId,
    /// The index of the corresponding site.
    pub site: SiteId,
    /// The node where the mutation maps
    pub node: NodeId,
    /// The origin time of the mutation
    pub time: Time,
    /// The derived state.
    pub derived_state: &'a [u8],
    /// Opaque metadata
    pub metadata: &'a [u8],
    /// The parent mutation, if any
    pub parent: Option<MutationId>,
}

/// A mutation table, stored by column.
///
/// The `parent` column refers to rows of the same table.
/// It is stored with `-1` for "no parent" so that the column
/// can be exchanged with other tree sequence software as-is.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MutationTable {
    site: Vec<SiteId>,
    node: Vec<NodeId>,
    time: Vec<Time>,
    derived_state: OffsetColumn,
    metadata: OffsetColumn,
    parent: Vec<MutationId>,
}

impl MutationTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a table from its columns.
    ///
    /// Only the shapes of the columns are checked here.
    /// Reference columns are checked by [`MutationTable::validate`].
    ///
    /// # Errors
    ///
    /// [`TablesError::ShapeMismatch`] if the columns
    /// do not have the same number of rows.
    pub fn from_columns(
        site: Vec<SiteId>,
        node: Vec<NodeId>,
        time: Vec<Time>,
        derived_state: OffsetColumn,
        metadata: OffsetColumn,
        parent: Vec<MutationId>,
    ) -> TablesResult<Self> {
        let rv = Self {
            site,
            node,
            time,
            derived_state,
            metadata,
            parent,
        };
        rv.validate_shape()?;
        Ok(rv)
    }

    /// Add a row.
    ///
    /// No reference checks happen here.
    pub fn add_row(
        &mut self,
        site: SiteId,
        node: NodeId,
        time: Time,
        derived_state: Option<&[u8]>,
        metadata: Option<&[u8]>,
        parent: Option<MutationId>,
    ) -> TablesResult<MutationId> {
        let id = MutationId::from_index(self.num_rows())?;
        self.site.push(site);
        self.node.push(node);
        self.time.push(time);
        self.derived_state.push(derived_state);
        self.metadata.push(metadata);
        self.parent.push(MutationId::from_option(parent));
        Ok(id)
    }

    /// Number of rows
    pub fn num_rows(&self) -> usize {
        self.site.len()
    }

    /// Get a row, or `None` if `id` is not a row of the table.
    pub fn row(&self, id: MutationId) -> Option<MutationRow<'_>> {
        let i = id.to_index()?;
        Some(MutationRow {
            id,
            site: *self.site.get(i)?,
            node: *self.node.get(i)?,
            time: *self.time.get(i)?,
            derived_state: self.derived_state.get(i)?,
            metadata: self.metadata.get(i)?,
            parent: self.parent.get(i)?.to_option(),
        })
    }

    /// Iterate over all rows
    pub fn iter(&self) -> impl Iterator<Item = MutationRow<'_>> + '_ {
        (0..self.num_rows()).filter_map(move |i| {
            MutationId::from_index(i)
                .ok()
                .and_then(|id| self.row(id))
        })
    }

    /// The site column
    pub fn site_column(&self) -> &[SiteId] {
        &self.site
    }

    /// The node column
    pub fn node_column(&self) -> &[NodeId] {
        &self.node
    }

    /// The time column
    pub fn time_column(&self) -> &[Time] {
        &self.time
    }

    /// The derived state column
    pub fn derived_state_column(&self) -> &OffsetColumn {
        &self.derived_state
    }

    /// The metadata column
    pub fn metadata_column(&self) -> &OffsetColumn {
        &self.metadata
    }

    /// The parent column, with `NULL` for "no parent".
    pub fn parent_column(&self) -> &[MutationId] {
        &self.parent
    }

    fn validate_shape(&self) -> TablesResult<()> {
        let expected = self.num_rows();
        for found in [
            self.node.len(),
            self.time.len(),
            self.derived_state.num_rows(),
            self.metadata.num_rows(),
            self.parent.len(),
        ] {
            if found != expected {
                return Err(TablesError::ShapeMismatch { expected, found });
            }
        }
        Ok(())
    }

    /// Perform a data integrity check.
    ///
    /// # Parameters
    ///
    /// * `num_sites`, the number of rows in the site table.
    /// * `flags`, if it contains
    ///   [`TableValidationFlags::VALIDATE_MUTATION_PARENT_ORDER`],
    ///   every parent must be an earlier row.
    ///
    /// # Errors
    ///
    /// * [`TablesError::ShapeMismatch`] if the columns differ in length.
    /// * [`TablesError::InvalidOffsets`] for bad offset arrays.
    /// * [`TablesError::IndexOutOfRange`] if a site is not in `[0, num_sites)`,
    ///   or a non-NULL parent is not a row of this table.
    /// * [`TablesError::MutationParentOrder`], see above.
    pub fn validate(&self, num_sites: usize, flags: TableValidationFlags) -> TablesResult<()> {
        self.validate_shape()?;
        self.derived_state.validate()?;
        self.metadata.validate()?;

        for s in self.site.iter() {
            match s.to_index() {
                Some(i) if i < num_sites => (),
                _ => {
                    return Err(TablesError::IndexOutOfRange {
                        index: i64::from(s.raw()),
                        len: num_sites,
                    })
                }
            }
        }

        let check_order = flags.contains(TableValidationFlags::VALIDATE_MUTATION_PARENT_ORDER);
        for (i, p) in self.parent.iter().enumerate() {
            if let Some(pi) = p.to_index() {
                if pi >= self.num_rows() {
                    return Err(index_out_of_range(pi, self.num_rows()));
                }
                if check_order && pi >= i {
                    return Err(TablesError::MutationParentOrder {
                        row: MutationId::from_index(i)?,
                        parent: *p,
                    });
                }
            }
        }
        Ok(())
    }

    /// A new table holding the rows where `keep` is `true`.
    ///
    /// The `parent` column is remapped over the full
    /// old id space before rows are selected, so a parent
    /// that is not kept becomes `NULL`.
    /// If `site_map` is given, the `site` column is remapped
    /// through it.
    ///
    /// # Errors
    ///
    /// * [`TablesError::ShapeMismatch`] if `keep` is not one entry per row.
    /// * [`TablesError::IndexOutOfRange`] if a reference cannot be remapped.
    pub fn filter_rows(&self, keep: &[bool], site_map: Option<&RowMap<SiteId>>) -> TablesResult<Self> {
        let derived_state = self.derived_state.filter_rows(keep)?;
        let metadata = self.metadata.filter_rows(keep)?;

        let mut site = select_rows(&self.site, keep)?;
        if let Some(map) = site_map {
            site = map.apply(&site)?;
        }
        let node = select_rows(&self.node, keep)?;
        let time = select_rows(&self.time, keep)?;

        let mutation_map = RowMap::<MutationId>::from_keep_mask(keep)?;
        let parent = select_rows(&mutation_map.apply(&self.parent)?, keep)?;

        if log::log_enabled!(log::Level::Trace) {
            let num_nulled = parent
                .iter()
                .zip(select_rows(&self.parent, keep)?)
                .filter(|(new, old)| new.is_null() && !old.is_null())
                .count();
            if num_nulled > 0 {
                log::trace!("{} parent references to removed mutations set to NULL", num_nulled);
            }
        }

        Self::from_columns(site, node, time, derived_state, metadata, parent)
    }
}
