//! DOM Operation Errors
//!
//! Failures of tree manipulation: missing nodes, wrong node kinds,
//! hierarchy violations.

use crate::NodeId;

/// Result type for DOM operations
pub type DomResult<T> = Result<T, DomError>;

/// DOM operation errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomError {
    /// Node not found
    #[error("node {0} not found")]
    NotFound(NodeId),
    /// Hierarchy error (e.g., inserting an ancestor into its descendant)
    #[error("hierarchy request error: cannot insert {child} into {parent}")]
    HierarchyRequest { parent: NodeId, child: NodeId },
    /// Operation needs a different node type
    #[error("node {0} is not an element")]
    InvalidNodeType(NodeId),
}
