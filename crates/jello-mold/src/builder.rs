//! Mold Construction
//!
//! Applies a `MoldPlan` to a container element.

use jello_dom::{DomResult, DomTree, NodeId};
use jello_html::HtmlSerializer;

use crate::{BuildError, Declarations, MoldConfig, MoldPlan};

/// Class of the optional max-width wrapper
pub const SIZER_CLASS: &str = "jelloMoldSizer";
/// Class of the min-width wrapper
pub const EXPANDER_CLASS: &str = "jelloMoldExpander";
/// Class of the content wrapper
pub const FIXER_CLASS: &str = "jelloMoldFixer";

/// Handles to the wrappers of a built mold. The container owns them all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mold {
    pub container: NodeId,
    pub sizer: Option<NodeId>,
    pub expander: NodeId,
    pub fixer: NodeId,
}

impl Mold {
    /// Element to append content to
    pub fn content(&self) -> NodeId {
        self.fixer
    }

    /// Markup of the container and everything in it
    pub fn render(&self, tree: &DomTree) -> String {
        HtmlSerializer::new().serialize_outer(tree, self.container)
    }
}

/// Build a mold inside `container`, replacing its children.
///
/// Measurements are validated before anything is mutated: on error the
/// container is left exactly as it was.
///
/// The arena never frees nodes. Wrappers of an earlier build stay in the
/// tree detached, so each call grows `tree.len()` by two or three slots.
pub fn build_mold(
    tree: &mut DomTree,
    container: NodeId,
    config: &MoldConfig,
) -> Result<Mold, BuildError> {
    tree.element(container)?;
    let plan = MoldPlan::compute(config)?;
    Ok(plan.apply(tree, container)?)
}

impl MoldPlan {
    /// Empty `container`, restyle it and build the wrappers inside
    pub fn apply(&self, tree: &mut DomTree, container: NodeId) -> DomResult<Mold> {
        tree.element(container)?;
        let removed = tree.remove_children(container)?;
        tracing::debug!("Building mold in {} (cleared {} children)", container, removed);

        apply_declarations(tree, container, &self.container_declarations())?;

        let mut current = container;
        let sizer = match self.sizer_declarations() {
            Some(declarations) => {
                let sizer = create_wrapper(tree, current, SIZER_CLASS, &declarations)?;
                current = sizer;
                Some(sizer)
            }
            None => None,
        };

        let expander = create_wrapper(tree, current, EXPANDER_CLASS, &self.expander_declarations())?;
        let fixer = create_wrapper(tree, expander, FIXER_CLASS, &self.fixer_declarations())?;

        Ok(Mold { container, sizer, expander, fixer })
    }
}

fn create_wrapper(
    tree: &mut DomTree,
    parent: NodeId,
    class: &str,
    declarations: &Declarations,
) -> DomResult<NodeId> {
    let wrapper = tree.create_element_with_class("div", class);
    apply_declarations(tree, wrapper, declarations)?;
    tree.append_child(parent, wrapper)?;
    tracing::trace!("Created {} {} under {}", class, wrapper, parent);
    Ok(wrapper)
}

fn apply_declarations(tree: &mut DomTree, element: NodeId, declarations: &Declarations) -> DomResult<()> {
    let style = &mut tree.element_mut(element)?.style;
    for (property, value) in declarations {
        style.set_property(property.name(), value.as_str());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_non_element_container() {
        let mut tree = DomTree::new();
        let text = tree.create_text("x");
        let err = build_mold(&mut tree, text, &MoldConfig::default()).unwrap_err();
        assert!(matches!(err, BuildError::Dom(jello_dom::DomError::InvalidNodeType(id)) if id == text));

        let root = tree.root();
        assert!(build_mold(&mut tree, root, &MoldConfig::default()).is_err());
    }

    #[test]
    fn test_detached_container() {
        let mut tree = DomTree::new();
        let div = tree.create_element("div");
        let mold = build_mold(&mut tree, div, &MoldConfig::default()).unwrap();
        assert_eq!(tree.parent(mold.fixer), Some(mold.expander));
        assert_eq!(tree.parent(mold.expander), Some(div));
    }
}
