//! Provenance records.
//!
//! Every row holds a timestamp and a JSON document
//! following the `tskit` provenance schema:
//!
//! ```json
//! {"schema_version": "1.0.0",
//!  "software": {"name": "...", "version": "..."},
//!  "parameters": {"command": "...", ...}}
//! ```

use crate::offset_column::OffsetColumn;
use crate::{TablesError, TablesResult};
use serde::{Deserialize, Serialize};
use tsutil_core::{ProvenanceId, SiteId, TableId};

/// Version of the provenance schema written by this crate.
pub const PROVENANCE_SCHEMA_VERSION: &str = "1.0.0";

/// Name and version of the software that
/// performed an operation.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Software {
    /// Package name
    pub name: String,
    /// Package version
    pub version: String,
}

impl Default for Software {
    fn default() -> Self {
        Self {
            name: env!("CARGO_PKG_NAME").to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

/// A provenance document.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ProvenanceRecord<P> {
    /// See [`PROVENANCE_SCHEMA_VERSION`].
    pub schema_version: String,
    /// Who wrote the record.
    pub software: Software,
    /// Operation-specific parameters.
    pub parameters: P,
}

impl<P: Serialize> ProvenanceRecord<P> {
    /// A record for `parameters`, attributed to this crate.
    pub fn new(parameters: P) -> Self {
        Self {
            schema_version: PROVENANCE_SCHEMA_VERSION.to_string(),
            software: Software::default(),
            parameters,
        }
    }

    /// Encode as JSON.
    pub fn to_json(&self) -> TablesResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Parameters of a site deletion.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct DeleteSitesParameters {
    /// Always `"delete_site_mutations"`.
    pub command: String,
    /// The requested site ids, as given.
    pub site_ids: Vec<i32>,
    /// Whether the site table was left untouched.
    pub keep_sites: bool,
}

impl DeleteSitesParameters {
    pub(crate) fn new(site_ids: &[SiteId], keep_sites: bool) -> Self {
        Self {
            command: "delete_site_mutations".to_string(),
            site_ids: site_ids.iter().map(|s| s.raw()).collect(),
            keep_sites,
        }
    }
}

/// A provenance table, stored by column.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProvenanceTable {
    timestamp: OffsetColumn,
    record: OffsetColumn,
}

impl ProvenanceTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a row stamped with the current UTC time.
    pub fn add_row(&mut self, record: &str) -> TablesResult<ProvenanceId> {
        let timestamp = chrono::Utc::now().to_rfc3339();
        self.add_row_with_timestamp(&timestamp, record)
    }

    /// Add a row with an explicit timestamp.
    pub fn add_row_with_timestamp(
        &mut self,
        timestamp: &str,
        record: &str,
    ) -> TablesResult<ProvenanceId> {
        let id = ProvenanceId::from_index(self.num_rows())?;
        self.timestamp.push(Some(timestamp.as_bytes()));
        self.record.push(Some(record.as_bytes()));
        Ok(id)
    }

    /// Number of rows
    pub fn num_rows(&self) -> usize {
        self.record.num_rows()
    }

    /// The timestamp of a row.
    pub fn timestamp(&self, id: ProvenanceId) -> Option<&str> {
        let bytes = self.timestamp.get(id.to_index()?)?;
        std::str::from_utf8(bytes).ok()
    }

    /// The record of a row.
    pub fn record(&self, id: ProvenanceId) -> Option<&str> {
        let bytes = self.record.get(id.to_index()?)?;
        std::str::from_utf8(bytes).ok()
    }

    /// The timestamp column
    pub fn timestamp_column(&self) -> &OffsetColumn {
        &self.timestamp
    }

    /// The record column
    pub fn record_column(&self) -> &OffsetColumn {
        &self.record
    }

    /// Check column shapes and offsets.
    pub fn validate(&self) -> TablesResult<()> {
        if self.timestamp.num_rows() != self.record.num_rows() {
            return Err(TablesError::ShapeMismatch {
                expected: self.record.num_rows(),
                found: self.timestamp.num_rows(),
            });
        }
        self.timestamp.validate()?;
        self.record.validate()
    }
}
