use crate::mutation_table::{MutationRow, MutationTable};
use crate::provenance::ProvenanceTable;
use crate::site_table::{SiteRow, SiteTable};
use crate::{DeleteSitesFlags, TableValidationFlags, TablesError, TablesResult};
use tsutil_core::{MutationId, NodeId, ProvenanceId, SiteId, TableId, Time};

/// A collection of site, mutation, and provenance tables.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TableCollection {
    pub(crate) sites: SiteTable,
    pub(crate) mutations: MutationTable,
    pub(crate) provenances: ProvenanceTable,
}

impl TableCollection {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Assemble a collection from existing tables.
    ///
    /// # Errors
    ///
    /// Any error from [`TableCollection::validate`]
    /// with the default flags.
    pub fn from_tables(
        sites: SiteTable,
        mutations: MutationTable,
        provenances: ProvenanceTable,
    ) -> TablesResult<Self> {
        let rv = Self {
            sites,
            mutations,
            provenances,
        };
        rv.validate(TableValidationFlags::default())?;
        Ok(rv)
    }

    /// Add a [``SiteRow``] to the [``SiteTable``].
    ///
    /// # Errors
    ///
    /// [`TablesError::InvalidPosition`] if `position` is
    /// negative or not finite.
    ///
    /// # Example
    ///
    /// ```
    /// let mut tables = tsutil_tables::TableCollection::new();
    /// let id = tables.add_site(10., Some(b"A"), None).unwrap();
    /// assert_eq!(id, 0);
    /// ```
    pub fn add_site(
        &mut self,
        position: f64,
        ancestral_state: Option<&[u8]>,
        metadata: Option<&[u8]>,
    ) -> TablesResult<SiteId> {
        self.sites.add_row(position, ancestral_state, metadata)
    }

    /// Add a [``MutationRow``] to the [``MutationTable``].
    ///
    /// # Errors
    ///
    /// [`TablesError::IndexOutOfRange`] if `site` is not
    /// a row of the site table.
    ///
    /// # Example
    ///
    /// ```
    /// let mut tables = tsutil_tables::TableCollection::new();
    /// let site = tables.add_site(10., None, None).unwrap();
    /// let m0 = tables.add_mutation(site, 0, 1., Some(b"T"), None, None).unwrap();
    /// let m1 = tables.add_mutation(site, 1, 0.5, Some(b"G"), None, Some(m0)).unwrap();
    /// assert_eq!(tables.mutation(m1).unwrap().parent, Some(m0));
    /// assert!(tables.add_mutation(1, 0, 1., None, None, None).is_err());
    /// ```
    pub fn add_mutation<S: Into<SiteId>, N: Into<NodeId>, T: Into<Time>>(
        &mut self,
        site: S,
        node: N,
        time: T,
        derived_state: Option<&[u8]>,
        metadata: Option<&[u8]>,
        parent: Option<MutationId>,
    ) -> TablesResult<MutationId> {
        let site = site.into();
        match site.to_index() {
            Some(i) if i < self.num_sites() => (),
            _ => {
                return Err(TablesError::IndexOutOfRange {
                    index: i64::from(site.raw()),
                    len: self.num_sites(),
                })
            }
        }
        self.mutations.add_row(
            site,
            node.into(),
            time.into(),
            derived_state,
            metadata,
            parent,
        )
    }

    /// Add a row to the provenance table.
    pub fn add_provenance(&mut self, record: &str) -> TablesResult<ProvenanceId> {
        self.provenances.add_row(record)
    }

    /// Number of sites
    pub fn num_sites(&self) -> usize {
        self.sites.num_rows()
    }

    /// Number of mutations
    pub fn num_mutations(&self) -> usize {
        self.mutations.num_rows()
    }

    /// Number of provenance records
    pub fn num_provenances(&self) -> usize {
        self.provenances.num_rows()
    }

    /// The site table
    pub fn sites(&self) -> &SiteTable {
        &self.sites
    }

    /// The mutation table
    pub fn mutations(&self) -> &MutationTable {
        &self.mutations
    }

    /// The provenance table
    pub fn provenances(&self) -> &ProvenanceTable {
        &self.provenances
    }

    /// Get a site
    pub fn site<S: Into<SiteId>>(&self, id: S) -> Option<SiteRow<'_>> {
        self.sites.row(id.into())
    }

    /// Get a mutation
    pub fn mutation<M: Into<MutationId>>(&self, id: M) -> Option<MutationRow<'_>> {
        self.mutations.row(id.into())
    }

    /// Move the tables out of the collection.
    pub fn into_tables(self) -> (SiteTable, MutationTable, ProvenanceTable) {
        (self.sites, self.mutations, self.provenances)
    }

    /// Perform a data integrity check.
    ///
    /// # Return
    ///
    /// Returns ``Ok(true)`` if the tables pass all tests.
    /// This return value allows this function to be used in
    /// things like [``debug_assert``].
    ///
    /// # Errors
    ///
    /// Will return [``TablesError``] if the tables are not valid.
    pub fn validate(&self, flags: TableValidationFlags) -> TablesResult<bool> {
        if flags.contains(TableValidationFlags::VALIDATE_SITES) {
            self.sites.validate()?;
        }
        if flags.intersects(
            TableValidationFlags::VALIDATE_MUTATIONS
                | TableValidationFlags::VALIDATE_MUTATION_PARENT_ORDER,
        ) {
            self.mutations.validate(self.num_sites(), flags)?;
        }
        if flags.contains(TableValidationFlags::VALIDATE_PROVENANCES) {
            self.provenances.validate()?;
        }
        Ok(true)
    }

    /// Remove sites and every mutation at those sites.
    ///
    /// See [`crate::delete_sites`].
    ///
    /// # Example
    ///
    /// ```
    /// use tsutil_core::SiteId;
    /// use tsutil_tables::{DeleteSitesFlags, TableCollection};
    ///
    /// let mut tables = TableCollection::new();
    /// for p in [1., 2., 3.] {
    ///     tables.add_site(p, None, None).unwrap();
    /// }
    /// tables.add_mutation(0, 0, 1., None, None, None).unwrap();
    /// tables.add_mutation(2, 0, 1., None, None, None).unwrap();
    ///
    /// let trimmed = tables.delete_sites(&[SiteId::from(1)], DeleteSitesFlags::default()).unwrap();
    /// assert_eq!(trimmed.num_sites(), 2);
    /// assert_eq!(trimmed.mutation(1).unwrap().site, 1);
    /// assert_eq!(trimmed.num_provenances(), 1);
    /// // The input is untouched
    /// assert_eq!(tables.num_sites(), 3);
    /// ```
    pub fn delete_sites(
        &self,
        site_ids: &[SiteId],
        flags: DeleteSitesFlags,
    ) -> TablesResult<TableCollection> {
        crate::delete_sites::delete_sites(self, site_ids, flags)
    }

    /// Remove every mutation at the given sites,
    /// leaving the site table as it is.
    ///
    /// Equivalent to calling [`TableCollection::delete_sites`]
    /// with [`DeleteSitesFlags::KEEP_SITES`].
    pub fn delete_site_mutations(&self, site_ids: &[SiteId]) -> TablesResult<TableCollection> {
        self.delete_sites(site_ids, DeleteSitesFlags::KEEP_SITES)
    }
}
