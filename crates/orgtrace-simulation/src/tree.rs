//! Arena-backed organisation tree. Each node stores only its own name; the
//! full path ("tree name") is always derived by walking to the root.

use std::collections::{BTreeMap, HashSet};

use orgtrace_core::constants::PATH_SEPARATOR;
use orgtrace_core::models::OrgRecord;
use serde::{Deserialize, Serialize};

/// Index of a node in its [`OrgTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Snapshot a node was built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Period {
    Previous,
    Current,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OrgNode {
    /// Organisation identifier as last set. Only its last segment is used
    /// once the node has a parent.
    pub name: String,
    pub group_id: Option<String>,
    pub rank: u32,
    pub period: Period,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

impl OrgNode {
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    pub fn last_segment(&self) -> &str {
        last_segment(&self.name)
    }
}

/// Organisation tree built from both snapshots.
///
/// Topology is fixed at build time; only node names change afterwards.
#[derive(Debug, Clone, Default)]
pub struct OrgTree {
    nodes: Vec<OrgNode>,
    by_rank: BTreeMap<u32, Vec<NodeId>>,
}

impl OrgTree {
    /// Create one node per record, previous period first, then link every
    /// node to the first node one rank up whose last segment matches the
    /// node's parent segment. Nodes with no such match stay roots.
    pub fn build(prev_orgs: &[OrgRecord], curr_orgs: &[OrgRecord]) -> Self {
        let mut tree = Self::default();
        for (records, period) in [(prev_orgs, Period::Previous), (curr_orgs, Period::Current)] {
            for record in records {
                tree.push(OrgNode {
                    name: record.org_path.as_str().to_string(),
                    group_id: record.group_id.clone(),
                    rank: record.effective_rank(),
                    period,
                    parent: None,
                    children: Vec::new(),
                });
            }
        }
        tree.link();
        tree
    }

    fn push(&mut self, node: OrgNode) {
        let id = NodeId(self.nodes.len());
        self.by_rank.entry(node.rank).or_default().push(id);
        self.nodes.push(node);
    }

    fn link(&mut self) {
        let ranks: Vec<u32> = self.by_rank.keys().copied().collect();
        for rank in ranks {
            let Some(upper) = rank.checked_sub(1).and_then(|r| self.by_rank.get(&r)) else {
                continue;
            };
            let upper = upper.clone();
            let level = self.by_rank[&rank].clone();
            for id in level {
                let Some(parent_segment) = parent_segment(&self.nodes[id.0].name) else {
                    continue;
                };
                let parent = upper
                    .iter()
                    .copied()
                    .find(|&p| self.nodes[p.0].last_segment() == parent_segment);
                if let Some(parent) = parent {
                    self.nodes[id.0].parent = Some(parent);
                    self.nodes[parent.0].children.push(id);
                }
            }
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn node(&self, id: NodeId) -> &OrgNode {
        &self.nodes[id.0]
    }

    /// Node ids in rank order, construction order within a rank.
    pub fn ids_by_rank(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.by_rank.values().flatten().copied()
    }

    /// Full path of a node: a root's own name, otherwise the parent's tree
    /// name plus the node's last segment.
    pub fn tree_name(&self, id: NodeId) -> String {
        let node = &self.nodes[id.0];
        match node.parent {
            None => node.name.clone(),
            Some(parent) => join(&self.tree_name(parent), node.last_segment()),
        }
    }

    /// Tree name `id` would have if its name were `name`.
    pub fn projected_tree_name(&self, id: NodeId, name: &str) -> String {
        match self.nodes[id.0].parent {
            None => name.to_string(),
            Some(parent) => join(&self.tree_name(parent), last_segment(name)),
        }
    }

    /// Tree names of every node, recomputed from the current names.
    pub fn tree_names(&self) -> HashSet<String> {
        (0..self.nodes.len()).map(|i| self.tree_name(NodeId(i))).collect()
    }

    /// First previous-period node, in rank order, whose current tree name is
    /// `tree_name`. A node moved by an earlier rename of itself or of an
    /// ancestor no longer answers to its old path.
    pub fn find_prev_node(&self, tree_name: &str) -> Option<NodeId> {
        self.ids_by_rank().find(|&id| {
            self.nodes[id.0].period == Period::Previous && self.tree_name(id) == tree_name
        })
    }

    /// Other previous-period nodes whose tree name equals that of `id`.
    pub fn prev_nodes_sharing_name(&self, id: NodeId) -> Vec<NodeId> {
        let name = self.tree_name(id);
        self.ids_by_rank()
            .filter(|&other| {
                other != id
                    && self.nodes[other.0].period == Period::Previous
                    && self.tree_name(other) == name
            })
            .collect()
    }

    pub(crate) fn set_name(&mut self, id: NodeId, name: &str) {
        self.nodes[id.0].name = name.to_string();
    }
}

fn last_segment(name: &str) -> &str {
    name.rsplit(PATH_SEPARATOR).next().unwrap_or(name)
}

/// Last segment of the parent path, `None` for a top-level name.
fn parent_segment(name: &str) -> Option<&str> {
    name.rsplit_once(PATH_SEPARATOR)
        .map(|(parent, _)| last_segment(parent))
}

fn join(parent: &str, segment: &str) -> String {
    let mut name = String::with_capacity(parent.len() + segment.len() + 1);
    name.push_str(parent);
    name.push(PATH_SEPARATOR);
    name.push_str(segment);
    name
}

#[cfg(test)]
mod tests {
    use super::*;

    fn orgs(paths: &[&str]) -> Vec<OrgRecord> {
        paths.iter().map(|p| OrgRecord::new(*p)).collect()
    }

    #[test]
    fn children_attach_by_parent_last_segment() {
        let tree = OrgTree::build(&orgs(&["Sales", "Sales/East", "Sales/East/Team1"]), &[]);
        let team = tree.find_prev_node("Sales/East/Team1").unwrap();
        let east = tree.node(team).parent().unwrap();
        assert_eq!(tree.node(east).name, "Sales/East");
        assert_eq!(tree.tree_name(team), "Sales/East/Team1");
    }

    #[test]
    fn orphan_keeps_its_full_name_as_root() {
        let tree = OrgTree::build(&orgs(&["Ops/Infra"]), &[]);
        let id = tree.find_prev_node("Ops/Infra").unwrap();
        assert!(tree.node(id).parent().is_none());
        assert_eq!(tree.tree_name(id), "Ops/Infra");
    }

    #[test]
    fn renaming_an_ancestor_relabels_descendants() {
        let mut tree = OrgTree::build(&orgs(&["Sales", "Sales/East", "Sales/East/Team1"]), &[]);
        let sales = tree.find_prev_node("Sales").unwrap();
        tree.set_name(sales, "Revenue");

        let names = tree.tree_names();
        assert!(names.contains("Revenue/East"));
        assert!(names.contains("Revenue/East/Team1"));
        assert!(!names.contains("Sales/East"));
    }

    #[test]
    fn lookup_follows_derived_names_after_ancestor_rename() {
        let mut tree = OrgTree::build(&orgs(&["Sales", "Sales/East"]), &[]);
        let sales = tree.find_prev_node("Sales").unwrap();
        let east = tree.find_prev_node("Sales/East").unwrap();
        tree.set_name(sales, "Revenue");

        assert!(tree.find_prev_node("Sales/East").is_none());
        assert_eq!(tree.find_prev_node("Revenue/East"), Some(east));
    }

    #[test]
    fn explicit_rank_does_not_affect_lookup() {
        let mut record = OrgRecord::new("Sales");
        record.rank = Some(2);
        let tree = OrgTree::build(&[record], &[]);
        let id = tree.find_prev_node("Sales").unwrap();
        assert_eq!(tree.node(id).rank, 2);
    }

    #[test]
    fn shared_names_count_only_previous_nodes() {
        let mut tree = OrgTree::build(
            &orgs(&["Support", "Support/HelpDesk", "Support/ServiceDesk"]),
            &orgs(&["Support/Desk"]),
        );
        let help = tree.find_prev_node("Support/HelpDesk").unwrap();
        let service = tree.find_prev_node("Support/ServiceDesk").unwrap();
        tree.set_name(help, "Support/Desk");
        assert!(tree.prev_nodes_sharing_name(help).is_empty());

        tree.set_name(service, "Support/Desk");
        assert_eq!(tree.prev_nodes_sharing_name(service), vec![help]);
    }

    #[test]
    fn current_nodes_can_hang_under_previous_parents() {
        let tree = OrgTree::build(&orgs(&["Support"]), &orgs(&["Support/Desk"]));
        let desk = tree
            .ids_by_rank()
            .find(|&id| tree.node(id).period == Period::Current)
            .unwrap();
        let parent = tree.node(desk).parent().unwrap();
        assert_eq!(tree.node(parent).period, Period::Previous);
    }

    #[test]
    fn lookup_ignores_current_period_nodes() {
        let tree = OrgTree::build(&[], &orgs(&["Sales"]));
        assert!(tree.find_prev_node("Sales").is_none());
    }

    #[test]
    fn projected_name_uses_last_segment_under_a_parent() {
        let tree = OrgTree::build(&orgs(&["Support", "Support/HelpDesk"]), &[]);
        let help = tree.find_prev_node("Support/HelpDesk").unwrap();
        assert_eq!(tree.projected_tree_name(help, "Support/Desk"), "Support/Desk");
        let support = tree.find_prev_node("Support").unwrap();
        assert_eq!(tree.projected_tree_name(support, "Care"), "Care");
    }
}
