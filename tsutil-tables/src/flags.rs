use bitflags::bitflags;

bitflags! {
    /// Modifies behavior of
    /// [``crate::TableCollection::validate``]
    ///
    /// ```
    /// use tsutil_tables::TableValidationFlags;
    ///
    /// let f = TableValidationFlags::default();
    /// assert_eq!(f.contains(TableValidationFlags::VALIDATE_ALL), true);
    /// assert_eq!(f.contains(TableValidationFlags::VALIDATE_MUTATION_PARENT_ORDER), false);
    /// ```
    pub struct TableValidationFlags: u32 {
        /// Validate the site table
        const VALIDATE_SITES = 1<<0;
        /// Validate the mutation table
        const VALIDATE_MUTATIONS = 1<<1;
        /// Validate the provenance table
        const VALIDATE_PROVENANCES = 1<<2;
        /// Require every non-NULL mutation parent to be
        /// an earlier row than the mutation itself.
        /// Not part of [``TableValidationFlags::VALIDATE_ALL``].
        const VALIDATE_MUTATION_PARENT_ORDER = 1<<3;
        /// Validate all tables.
        /// This is also the "default" value.
        const VALIDATE_ALL = Self::VALIDATE_SITES.bits|Self::VALIDATE_MUTATIONS.bits|Self::VALIDATE_PROVENANCES.bits;
    }
}

impl Default for TableValidationFlags {
    fn default() -> Self {
        TableValidationFlags::VALIDATE_ALL
    }
}

bitflags! {
    /// Modifies behavior of
    /// [``crate::TableCollection::delete_sites``]
    ///
    /// ```
    /// let f = tsutil_tables::DeleteSitesFlags::default();
    /// assert!(f.is_empty());
    /// ```
    #[derive(Default)]
    pub struct DeleteSitesFlags: u32 {
        /// Default behavior: remove the sites,
        /// cascade to their mutations, and record provenance.
        const NONE = 0;
        /// Leave the site table untouched and only
        /// remove the mutations at the requested sites.
        const KEEP_SITES = 1 << 0;
        /// Do not add a row to the provenance table.
        const NO_PROVENANCE = 1 << 1;
    }
}
