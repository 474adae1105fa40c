use crate::keep_mask::{mutation_keep_mask, site_keep_mask};
use crate::provenance::{DeleteSitesParameters, ProvenanceRecord};
use crate::row_map::RowMap;
use crate::{DeleteSitesFlags, TableCollection, TableValidationFlags, TablesResult};
use tsutil_core::SiteId;

/// Remove sites and cascade the removal to their mutations.
///
/// The input is never modified.  Either a complete,
/// validated [`TableCollection`] is returned, or an error.
///
/// # Steps
///
/// 1. Every id in `site_ids` must be a row of the site table.
/// 2. The input tables are validated.
/// 3. A mutation is kept iff its site is kept.
/// 4. Mutation columns are filtered.  `parent` is remapped over
///    the old id space, so parents that are removed become `NULL`
///    and parents that are kept are renumbered.
/// 5. Unless [`DeleteSitesFlags::KEEP_SITES`] is set, the site
///    table is compacted and the mutation `site` column is
///    remapped to the new site ids.
/// 6. Unless [`DeleteSitesFlags::NO_PROVENANCE`] is set,
///    a provenance record is appended.
///
/// # Errors
///
/// * [`crate::TablesError::SiteIdOutOfBounds`] if a requested id is
///   not a site.
/// * Any error from [`TableCollection::validate`] on the input.
pub fn delete_sites(
    tables: &TableCollection,
    site_ids: &[SiteId],
    flags: DeleteSitesFlags,
) -> TablesResult<TableCollection> {
    let keep_sites = site_keep_mask(tables.num_sites(), site_ids)?;
    tables.validate(TableValidationFlags::VALIDATE_ALL)?;

    let keep_mutations = mutation_keep_mask(&keep_sites, tables.mutations.site_column())?;

    let (sites, site_map) = if flags.contains(DeleteSitesFlags::KEEP_SITES) {
        (tables.sites.clone(), None)
    } else {
        (
            tables.sites.filter_rows(&keep_sites)?,
            Some(RowMap::<SiteId>::from_keep_mask(&keep_sites)?),
        )
    };
    let mutations = tables
        .mutations
        .filter_rows(&keep_mutations, site_map.as_ref())?;

    let mut provenances = tables.provenances.clone();
    if !flags.contains(DeleteSitesFlags::NO_PROVENANCE) {
        let record = ProvenanceRecord::new(DeleteSitesParameters::new(
            site_ids,
            flags.contains(DeleteSitesFlags::KEEP_SITES),
        ));
        provenances.add_row(&record.to_json()?)?;
    }

    log::debug!(
        "deleted {} of {} sites and {} of {} mutations",
        tables.num_sites() - sites.num_rows(),
        tables.num_sites(),
        tables.num_mutations() - mutations.num_rows(),
        tables.num_mutations()
    );

    let rv = TableCollection {
        sites,
        mutations,
        provenances,
    };
    rv.validate(TableValidationFlags::VALIDATE_ALL)?;
    Ok(rv)
}
