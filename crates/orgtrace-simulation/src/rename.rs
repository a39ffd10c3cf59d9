//! Collision-avoiding rename of a single tree node.

use serde::Serialize;
use tracing::debug;

use crate::tree::{NodeId, OrgTree};

/// How a rename reached its target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RenameOutcome {
    /// The target tree name was free.
    Direct,
    /// The target tree name was taken; the node went through `placeholder`
    /// first.
    ViaPlaceholder { placeholder: String },
}

/// Rename `id` to `target`.
///
/// When the target's tree name is already in use the node is first moved to
/// `"{target}{suffix}"` (a counter is appended until that tree name is
/// unused), then to `target`. The placeholder state never shares a tree name
/// with another node.
pub fn rename_node(tree: &mut OrgTree, id: NodeId, target: &str, suffix: &str) -> RenameOutcome {
    let names = tree.tree_names();
    if !names.contains(&tree.projected_tree_name(id, target)) {
        tree.set_name(id, target);
        return RenameOutcome::Direct;
    }

    let mut placeholder = format!("{target}{suffix}");
    let mut counter = 1u32;
    while names.contains(&tree.projected_tree_name(id, &placeholder)) {
        placeholder = format!("{target}{suffix}{counter}");
        counter += 1;
    }

    tree.set_name(id, &placeholder);
    debug!(
        node = id.index(),
        placeholder = %tree.tree_name(id),
        names = tree.tree_names().len(),
        "rename parked on placeholder"
    );
    tree.set_name(id, target);

    RenameOutcome::ViaPlaceholder { placeholder }
}
