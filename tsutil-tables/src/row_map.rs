use crate::error::index_out_of_range;
use crate::TablesResult;
use tsutil_core::TableId;

/// Maps the row ids of a table to the row ids
/// it will have after the rows flagged `false`
/// in a keep mask are removed.
///
/// Kept rows are renumbered contiguously from zero
/// in their original order.  Removed rows map to `NULL`.
/// `NULL` always maps to `NULL`.
///
/// # Example
///
/// ```
/// use tsutil_core::MutationId;
/// use tsutil_tables::RowMap;
///
/// let map = RowMap::<MutationId>::from_keep_mask(&[true, false, true]).unwrap();
/// assert_eq!(map.get(MutationId::from(2)).unwrap(), 1);
/// assert_eq!(map.get(MutationId::from(1)).unwrap(), MutationId::NULL);
///
/// let parents = [MutationId::NULL, MutationId::from(0), MutationId::from(1)];
/// assert_eq!(
///     map.apply(&parents).unwrap(),
///     vec![MutationId::NULL, MutationId::from(0), MutationId::NULL]
/// );
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RowMap<I: TableId> {
    map: Vec<I>,
    num_kept: usize,
}

impl<I: TableId> RowMap<I> {
    /// Build the map from a keep mask:
    /// `map[i]` is the number of `true` values in
    /// `keep[..=i]`, minus one, when `keep[i]` is `true`.
    ///
    /// # Errors
    ///
    /// [`crate::TablesError::IdError`] if the number of
    /// kept rows cannot be expressed as an id.
    pub fn from_keep_mask(keep: &[bool]) -> TablesResult<Self> {
        let mut map = Vec::with_capacity(keep.len());
        let mut num_kept = 0;
        for &k in keep {
            if k {
                map.push(I::from_index(num_kept)?);
                num_kept += 1;
            } else {
                map.push(I::NULL);
            }
        }
        Ok(Self { map, num_kept })
    }

    /// The new id of `id`.
    ///
    /// # Errors
    ///
    /// [`crate::TablesError::IndexOutOfRange`] if `id` is neither
    /// `NULL` nor a row of the old table.
    pub fn get(&self, id: I) -> TablesResult<I> {
        match id.to_index() {
            None => Ok(I::NULL),
            Some(i) => self
                .map
                .get(i)
                .copied()
                .ok_or_else(|| index_out_of_range(i, self.map.len())),
        }
    }

    /// Map every value of a reference column.
    ///
    /// References to removed rows become `NULL`.
    ///
    /// # Errors
    ///
    /// See [`RowMap::get`].
    pub fn apply(&self, values: &[I]) -> TablesResult<Vec<I>> {
        values.iter().map(|v| self.get(*v)).collect()
    }

    /// Number of rows in the old table.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// `true` if the old table was empty.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Number of rows in the new table.
    pub fn num_kept(&self) -> usize {
        self.num_kept
    }

    /// The new id of each old row, in old row order.
    pub fn as_slice(&self) -> &[I] {
        &self.map
    }
}
