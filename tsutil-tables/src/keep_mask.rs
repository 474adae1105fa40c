//! Keep masks: one `bool` per row, `true` for
//! rows that survive a filtering operation.

use crate::error::index_out_of_range;
use crate::{TablesError, TablesResult};
use tsutil_core::{SiteId, TableId};

/// Build the keep mask of a site table of `num_sites` rows
/// from which `site_ids` are removed.
///
/// Repeated ids are allowed.
///
/// # Errors
///
/// [`TablesError::SiteIdOutOfBounds`] if any id, including `NULL`,
/// is not a row of the site table.
///
/// # Example
///
/// ```
/// use tsutil_core::SiteId;
/// use tsutil_tables::site_keep_mask;
///
/// let keep = site_keep_mask(4, &[SiteId::from(1), SiteId::from(3)]).unwrap();
/// assert_eq!(keep, vec![true, false, true, false]);
/// assert!(site_keep_mask(4, &[SiteId::from(4)]).is_err());
/// ```
pub fn site_keep_mask(num_sites: usize, site_ids: &[SiteId]) -> TablesResult<Vec<bool>> {
    let mut keep = vec![true; num_sites];
    for &s in site_ids {
        match s.to_index().and_then(|i| keep.get_mut(i)) {
            Some(k) => *k = false,
            None => {
                return Err(TablesError::SiteIdOutOfBounds {
                    found: s,
                    num_sites,
                })
            }
        }
    }
    Ok(keep)
}

/// A mutation survives iff its site survives.
///
/// # Errors
///
/// [`TablesError::IndexOutOfRange`] if a mutation's site is
/// not a row of `keep_sites`.
pub fn mutation_keep_mask(keep_sites: &[bool], site_column: &[SiteId]) -> TablesResult<Vec<bool>> {
    site_column
        .iter()
        .map(|s| match s.to_index() {
            Some(i) if i < keep_sites.len() => Ok(keep_sites[i]),
            Some(i) => Err(index_out_of_range(i, keep_sites.len())),
            None => Err(TablesError::IndexOutOfRange {
                index: i64::from(s.raw()),
                len: keep_sites.len(),
            }),
        })
        .collect()
}

/// Select the values where `keep` is `true`, preserving order.
///
/// # Errors
///
/// [`TablesError::ShapeMismatch`] if the lengths differ.
pub fn select_rows<T: Copy>(values: &[T], keep: &[bool]) -> TablesResult<Vec<T>> {
    if values.len() != keep.len() {
        return Err(TablesError::ShapeMismatch {
            expected: keep.len(),
            found: values.len(),
        });
    }
    Ok(values
        .iter()
        .zip(keep.iter())
        .filter_map(|(v, k)| if *k { Some(*v) } else { None })
        .collect())
}

#[cfg(test)]
mod test_keep_mask {
    use super::*;

    #[test]
    fn test_site_keep_mask_with_repeats() {
        let keep = site_keep_mask(3, &[SiteId::from(2), SiteId::from(2)]).unwrap();
        assert_eq!(keep, vec![true, true, false]);
    }

    #[test]
    fn test_site_keep_mask_rejects_null() {
        assert_eq!(
            site_keep_mask(3, &[SiteId::NULL]),
            Err(TablesError::SiteIdOutOfBounds {
                found: SiteId::NULL,
                num_sites: 3
            })
        );
    }

    #[test]
    fn test_mutation_keep_mask() {
        let keep_sites = [true, false, true];
        let sites = [0, 1, 1, 2].map(SiteId::from);
        assert_eq!(
            mutation_keep_mask(&keep_sites, &sites).unwrap(),
            vec![true, false, false, true]
        );
    }

    #[test]
    fn test_mutation_keep_mask_bad_site() {
        assert_eq!(
            mutation_keep_mask(&[true], &[SiteId::from(1)]),
            Err(TablesError::IndexOutOfRange { index: 1, len: 1 })
        );
        assert_eq!(
            mutation_keep_mask(&[true], &[SiteId::NULL]),
            Err(TablesError::IndexOutOfRange { index: -1, len: 1 })
        );
    }

    #[test]
    fn test_select_rows() {
        assert_eq!(
            select_rows(&[1, 2, 3], &[false, true, true]).unwrap(),
            vec![2, 3]
        );
        assert_eq!(
            select_rows(&[1, 2, 3], &[true]),
            Err(TablesError::ShapeMismatch {
                expected: 1,
                found: 3
            })
        );
    }
}
