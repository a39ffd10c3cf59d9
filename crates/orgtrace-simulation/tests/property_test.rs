//! Property tests for the derived-path tree and the rename protocol.

use std::collections::HashSet;

use proptest::prelude::*;

use orgtrace_core::models::OrgRecord;
use orgtrace_simulation::{rename_node, NodeId, OrgTree, Period, RenameOutcome};

const SEGMENTS: &[&str] = &["Sales", "Ops", "East", "West", "Desk"];

fn org_paths() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(prop::collection::vec(0..SEGMENTS.len(), 1..4), 1..12).prop_map(|paths| {
        let mut seen = HashSet::new();
        let mut out = Vec::new();
        for segments in paths {
            let parts: Vec<&str> = segments.iter().map(|&i| SEGMENTS[i]).collect();
            // Every prefix, so the tree is connected the way snapshots are.
            for depth in 1..=parts.len() {
                let path = parts[..depth].join("/");
                if seen.insert(path.clone()) {
                    out.push(path);
                }
            }
        }
        out
    })
}

fn records(paths: &[String]) -> Vec<OrgRecord> {
    paths.iter().map(|p| OrgRecord::new(p.as_str())).collect()
}

fn descendants(tree: &OrgTree, id: NodeId) -> Vec<NodeId> {
    let mut out = Vec::new();
    let mut stack = tree.node(id).children().to_vec();
    while let Some(child) = stack.pop() {
        out.push(child);
        stack.extend_from_slice(tree.node(child).children());
    }
    out
}

proptest! {
    #[test]
    fn prop_rename_lands_on_target_via_unused_placeholder(
        prev in org_paths(),
        curr in org_paths(),
        pick in any::<prop::sample::Index>(),
        target in prop::sample::select(SEGMENTS),
    ) {
        let mut tree = OrgTree::build(&records(&prev), &records(&curr));
        let prev_ids: Vec<NodeId> = tree
            .ids_by_rank()
            .filter(|&id| tree.node(id).period == Period::Previous)
            .collect();
        let id = prev_ids[pick.index(prev_ids.len())];

        let names_before = tree.tree_names();
        let expected = tree.projected_tree_name(id, target);
        let outcome = rename_node(&mut tree, id, target, "_temp");

        prop_assert_eq!(tree.tree_name(id), expected.clone());
        match outcome {
            RenameOutcome::Direct => prop_assert!(!names_before.contains(&expected)),
            RenameOutcome::ViaPlaceholder { placeholder } => {
                prop_assert!(names_before.contains(&expected));
                let parked = tree.projected_tree_name(id, &placeholder);
                prop_assert!(!names_before.contains(&parked));
            }
        }
    }
}

proptest! {
    #[test]
    fn prop_rename_relabels_exactly_the_subtree(
        prev in org_paths(),
        pick in any::<prop::sample::Index>(),
        target in prop::sample::select(SEGMENTS),
    ) {
        let mut tree = OrgTree::build(&records(&prev), &[]);
        let ids: Vec<NodeId> = tree.ids_by_rank().collect();
        let id = ids[pick.index(ids.len())];
        let subtree: HashSet<NodeId> = descendants(&tree, id).into_iter().collect();
        let before: Vec<String> = ids.iter().map(|&n| tree.tree_name(n)).collect();

        rename_node(&mut tree, id, target, "_temp");
        let prefix = format!("{}/", tree.tree_name(id));

        for (n, old) in ids.iter().zip(before) {
            let new = tree.tree_name(*n);
            if subtree.contains(n) {
                prop_assert!(new.starts_with(&prefix));
            } else if *n != id {
                prop_assert_eq!(new, old);
            }
        }
    }
}
