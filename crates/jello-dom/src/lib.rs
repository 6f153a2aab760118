//! jello DOM - Document Object Model
//!
//! Arena-allocated DOM tree: elements carry a class list and an inline
//! style declaration block, nodes are addressed by `NodeId`.

mod classlist;
mod node;
mod operations;
mod style;
mod tree;

pub use classlist::DOMTokenList;
pub use node::{Attribute, ElementData, Node, NodeData, TextData};
pub use operations::{DomError, DomResult};
pub use style::StyleDeclaration;
pub use tree::{Children, DomTree};

/// Node identifier (index into arena)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    /// Root (document) node ID
    pub const ROOT: NodeId = NodeId(0);
    /// Sentinel for "no node"
    pub const NONE: NodeId = NodeId(u32::MAX);

    /// Check that this ID refers to a node slot
    #[inline]
    pub fn is_valid(self) -> bool {
        self != Self::NONE
    }

    /// Arena index
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_valid() {
            write!(f, "#{}", self.0)
        } else {
            f.write_str("#none")
        }
    }
}
