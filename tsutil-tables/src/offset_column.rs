//! Variable-length byte columns.
//!
//! A column of `n` rows is stored as one flat buffer
//! and `n + 1` offsets.  Row `i` is
//! `buffer[offsets[i]..offsets[i + 1]]`.
//! A valid offset array is never empty, starts at zero,
//! is non-decreasing, and ends at the buffer length.

use crate::error::index_out_of_range;
use crate::{TablesError, TablesResult};

/// The low-level type of an offset.
pub type Offset = u64;

fn offset_to_usize(offset: Offset, row: usize) -> TablesResult<usize> {
    usize::try_from(offset).map_err(|_| TablesError::InvalidOffsets { row })
}

/// Check the offset invariants for a buffer of `buffer_len` bytes.
///
/// # Errors
///
/// [`TablesError::InvalidOffsets`] naming the first bad entry.
///
/// # Example
///
/// ```
/// use tsutil_tables::offset_column::validate_offsets;
///
/// assert!(validate_offsets(3, &[0, 1, 3]).is_ok());
/// assert!(validate_offsets(3, &[0, 2, 1, 3]).is_err());
/// assert!(validate_offsets(0, &[]).is_err());
/// ```
pub fn validate_offsets(buffer_len: usize, offsets: &[Offset]) -> TablesResult<()> {
    match offsets.first() {
        Some(0) => (),
        _ => return Err(TablesError::InvalidOffsets { row: 0 }),
    }
    if let Some(i) = offsets.windows(2).position(|w| w[1] < w[0]) {
        return Err(TablesError::InvalidOffsets { row: i + 1 });
    }
    let last = offsets.len() - 1;
    if offset_to_usize(offsets[last], last)? != buffer_len {
        return Err(TablesError::InvalidOffsets { row: last });
    }
    Ok(())
}

/// Return the bytes of `row`.
///
/// # Errors
///
/// * [`TablesError::IndexOutOfRange`] if `row` is not a row of the column.
/// * [`TablesError::InvalidOffsets`] if the two offsets bounding `row`
///   do not describe a slice of `buffer`.
///
/// # Example
///
/// ```
/// use tsutil_tables::offset_column::slice;
///
/// let buffer = b"AGTT";
/// let offsets = [0, 1, 1, 4];
/// assert_eq!(slice(buffer, &offsets, 0).unwrap(), b"A");
/// assert!(slice(buffer, &offsets, 1).unwrap().is_empty());
/// assert_eq!(slice(buffer, &offsets, 2).unwrap(), b"GTT");
/// assert!(slice(buffer, &offsets, 3).is_err());
/// ```
pub fn slice<'a>(buffer: &'a [u8], offsets: &[Offset], row: usize) -> TablesResult<&'a [u8]> {
    let num_rows = offsets.len().saturating_sub(1);
    if row >= num_rows {
        return Err(index_out_of_range(row, num_rows));
    }
    let start = offset_to_usize(offsets[row], row)?;
    let stop = offset_to_usize(offsets[row + 1], row + 1)?;
    buffer
        .get(start..stop)
        .ok_or(TablesError::InvalidOffsets { row })
}

/// Keep the rows where `keep` is `true`, in order,
/// packing them into a new buffer.
///
/// The new buffer is allocated once, from the total
/// length of the kept rows.
///
/// # Errors
///
/// * [`TablesError::InvalidOffsets`] if the input offsets are not valid.
/// * [`TablesError::ShapeMismatch`] if `keep` does not have
///   one entry per row.
///
/// # Example
///
/// ```
/// use tsutil_tables::offset_column::filter_rows;
///
/// let (buffer, offsets) = filter_rows(b"AGTT", &[0, 1, 2, 4], &[true, false, true]).unwrap();
/// assert_eq!(buffer, b"ATT");
/// assert_eq!(offsets, vec![0, 1, 3]);
/// ```
pub fn filter_rows(
    buffer: &[u8],
    offsets: &[Offset],
    keep: &[bool],
) -> TablesResult<(Vec<u8>, Vec<Offset>)> {
    validate_offsets(buffer.len(), offsets)?;
    let num_rows = offsets.len() - 1;
    if keep.len() != num_rows {
        return Err(TablesError::ShapeMismatch {
            expected: num_rows,
            found: keep.len(),
        });
    }

    // Valid offsets are bounded by buffer.len(), so these casts are lossless.
    let kept = || {
        offsets
            .windows(2)
            .zip(keep.iter())
            .filter(|(_, k)| **k)
            .map(|(w, _)| (w[0] as usize, w[1] as usize))
    };
    let total_len: usize = kept().map(|(start, stop)| stop - start).sum();
    let num_kept = keep.iter().filter(|k| **k).count();

    let mut new_buffer = Vec::with_capacity(total_len);
    let mut new_offsets = Vec::with_capacity(num_kept + 1);
    new_offsets.push(0);
    for (start, stop) in kept() {
        new_buffer.extend_from_slice(&buffer[start..stop]);
        new_offsets.push(new_buffer.len() as Offset);
    }
    debug_assert_eq!(new_buffer.len(), total_len);

    Ok((new_buffer, new_offsets))
}

/// An owned variable-length byte column.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OffsetColumn {
    data: Vec<u8>,
    offsets: Vec<Offset>,
}

impl Default for OffsetColumn {
    fn default() -> Self {
        Self::new()
    }
}

impl OffsetColumn {
    /// Create an empty column.
    pub fn new() -> Self {
        Self {
            data: vec![],
            offsets: vec![0],
        }
    }

    /// Create a column from a buffer and its offsets.
    ///
    /// # Errors
    ///
    /// [`TablesError::InvalidOffsets`] if `offsets` does not describe `data`.
    ///
    /// # Example
    ///
    /// ```
    /// use tsutil_tables::OffsetColumn;
    ///
    /// let c = OffsetColumn::from_raw_parts(b"ACG".to_vec(), vec![0, 1, 3]).unwrap();
    /// assert_eq!(c.num_rows(), 2);
    /// assert_eq!(c.get(1), Some(&b"CG"[..]));
    /// assert!(OffsetColumn::from_raw_parts(b"ACG".to_vec(), vec![0, 1]).is_err());
    /// ```
    pub fn from_raw_parts(data: Vec<u8>, offsets: Vec<Offset>) -> TablesResult<Self> {
        validate_offsets(data.len(), &offsets)?;
        Ok(Self { data, offsets })
    }

    /// Append a row.  `None` and an empty slice
    /// both store an empty row.
    pub fn push(&mut self, bytes: Option<&[u8]>) {
        if let Some(b) = bytes {
            self.data.extend_from_slice(b);
        }
        self.offsets.push(self.data.len() as Offset);
    }

    /// The bytes of `row`, or `None` if there is no such row.
    pub fn get(&self, row: usize) -> Option<&[u8]> {
        slice(&self.data, &self.offsets, row).ok()
    }

    /// Number of rows
    pub fn num_rows(&self) -> usize {
        self.offsets.len().saturating_sub(1)
    }

    /// The flat buffer
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// The offset array
    pub fn offsets(&self) -> &[Offset] {
        &self.offsets
    }

    /// Iterate over the rows
    pub fn iter(&self) -> impl Iterator<Item = &[u8]> + '_ {
        self.offsets
            .windows(2)
            .map(|w| &self.data[w[0] as usize..w[1] as usize])
    }

    /// See [`validate_offsets`].
    pub fn validate(&self) -> TablesResult<()> {
        validate_offsets(self.data.len(), &self.offsets)
    }

    /// A new column holding the rows where `keep` is `true`.
    ///
    /// # Errors
    ///
    /// See [`filter_rows`].
    pub fn filter_rows(&self, keep: &[bool]) -> TablesResult<Self> {
        let (data, offsets) = filter_rows(&self.data, &self.offsets, keep)?;
        Ok(Self { data, offsets })
    }

    /// Move out the buffer and the offsets.
    pub fn into_raw_parts(self) -> (Vec<u8>, Vec<Offset>) {
        (self.data, self.offsets)
    }
}

#[cfg(test)]
mod test_offset_column {
    use super::*;

    fn make_column() -> OffsetColumn {
        let mut c = OffsetColumn::new();
        c.push(Some(b"A"));
        c.push(None);
        c.push(Some(b"GTT"));
        c.push(Some(b"CC"));
        c
    }

    #[test]
    fn test_push_and_get() {
        let c = make_column();
        assert_eq!(c.num_rows(), 4);
        assert_eq!(c.offsets(), &[0, 1, 1, 4, 6]);
        assert_eq!(c.data(), b"AGTTCC");
        assert_eq!(c.get(2), Some(&b"GTT"[..]));
        assert_eq!(c.get(1), Some(&b""[..]));
        assert!(c.get(4).is_none());
        assert!(c.validate().is_ok());
    }

    #[test]
    fn test_iter() {
        let c = make_column();
        let rows = c.iter().collect::<Vec<_>>();
        assert_eq!(rows, vec![&b"A"[..], b"", b"GTT", b"CC"]);
    }

    #[test]
    fn test_slice_out_of_range() {
        let c = make_column();
        assert_eq!(
            slice(c.data(), c.offsets(), 4),
            Err(TablesError::IndexOutOfRange { index: 4, len: 4 })
        );
        assert_eq!(
            slice(b"", &[], 0),
            Err(TablesError::IndexOutOfRange { index: 0, len: 0 })
        );
    }

    #[test]
    fn test_slice_with_bad_offsets() {
        assert_eq!(
            slice(b"AB", &[0, 5], 0),
            Err(TablesError::InvalidOffsets { row: 0 })
        );
    }

    #[test]
    fn test_filter_rows() {
        let c = make_column();
        let f = c.filter_rows(&[false, true, true, false]).unwrap();
        assert_eq!(f.num_rows(), 2);
        assert_eq!(f.data(), b"GTT");
        assert_eq!(f.offsets(), &[0, 0, 3]);
    }

    #[test]
    fn test_filter_all_and_none() {
        let c = make_column();
        assert_eq!(c.filter_rows(&[true; 4]).unwrap(), c);
        let empty = c.filter_rows(&[false; 4]).unwrap();
        assert_eq!(empty, OffsetColumn::new());
        assert_eq!(empty.num_rows(), 0);
    }

    #[test]
    fn test_filter_shape_mismatch() {
        let c = make_column();
        assert_eq!(
            c.filter_rows(&[true, false]),
            Err(TablesError::ShapeMismatch {
                expected: 4,
                found: 2
            })
        );
    }

    #[test]
    fn test_validate_offsets() {
        assert!(validate_offsets(0, &[0]).is_ok());
        assert_eq!(
            validate_offsets(2, &[1, 2]),
            Err(TablesError::InvalidOffsets { row: 0 })
        );
        assert_eq!(
            validate_offsets(3, &[0, 2, 1, 3]),
            Err(TablesError::InvalidOffsets { row: 2 })
        );
        assert_eq!(
            validate_offsets(4, &[0, 1, 3]),
            Err(TablesError::InvalidOffsets { row: 2 })
        );
    }

    #[test]
    fn test_filter_rejects_invalid_input() {
        assert_eq!(
            filter_rows(b"ABC", &[0, 2], &[true]),
            Err(TablesError::InvalidOffsets { row: 1 })
        );
    }
}
