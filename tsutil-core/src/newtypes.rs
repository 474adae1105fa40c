use crate::RawId;

/// A [``TableId``](crate::traits::TableId) for a node.
///
/// Nodes are not stored by the tables in this workspace.
/// Mutation rows refer to them and carry the value through.
///
/// ```
/// # use tsutil_core::NodeId;
/// let n = NodeId::from(-1);
/// assert_eq!(n, -1);
/// assert_eq!(n, NodeId::NULL);
/// ```
#[repr(transparent)]
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, std::hash::Hash)]
pub struct NodeId(RawId);

/// A [``TableId``](crate::traits::TableId) for a site.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, std::hash::Hash)]
#[repr(transparent)]
pub struct SiteId(RawId);

/// A [``TableId``](crate::traits::TableId) for a mutation.
///
/// ```
/// # use tsutil_core::MutationId;
/// assert!(MutationId::new(-2).is_err());
/// assert_eq!(MutationId::new(4).unwrap(), 4);
/// ```
#[repr(transparent)]
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, std::hash::Hash)]
pub struct MutationId(RawId);

/// A [``TableId``](crate::traits::TableId) for a provenance record.
#[repr(transparent)]
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, std::hash::Hash)]
pub struct ProvenanceId(RawId);

impl_table_id!(NodeId);
impl_table_id!(SiteId);
impl_table_id!(MutationId);
impl_table_id!(ProvenanceId);
