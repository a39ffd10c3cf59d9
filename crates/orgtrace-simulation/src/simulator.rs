//! RenameSimulator: apply every confirmed match to the previous-period tree
//! and report where each tracked group ends up.

use orgtrace_core::config::SimulationConfig;
use orgtrace_core::models::{ComparisonRecord, GroupAssignment, OrgPath, OrgRecord};
use orgtrace_core::simulation_span;
use serde::Serialize;
use tracing::{debug, info};

use crate::rename::{rename_node, RenameOutcome};
use crate::tree::OrgTree;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AppliedRename {
    pub prev_org: OrgPath,
    pub curr_org: OrgPath,
    pub outcome: RenameOutcome,
    /// Another previous-period node already carried the final tree name, so
    /// both groups now share one path.
    pub converged: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// No previous-period node currently derives the prev org's path, for
    /// example because an earlier rename of it or of an ancestor already
    /// moved it.
    PrevOrgNotFound,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedRename {
    pub prev_org: OrgPath,
    pub curr_org: OrgPath,
    pub reason: SkipReason,
}

/// Result of one simulation run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SimulationReport {
    /// One row per node carrying a group id, rank order then input order.
    pub assignments: Vec<GroupAssignment>,
    pub applied: Vec<AppliedRename>,
    pub skipped: Vec<SkippedRename>,
}

pub struct RenameSimulator {
    config: SimulationConfig,
}

impl RenameSimulator {
    pub fn new(config: SimulationConfig) -> Self {
        Self { config }
    }

    /// Build the tree from both snapshots, apply the confirmed matches of
    /// `records` in table order and collect the final group paths.
    pub fn run(
        &self,
        prev_orgs: &[OrgRecord],
        curr_orgs: &[OrgRecord],
        records: &[ComparisonRecord],
    ) -> SimulationReport {
        let mut tree = OrgTree::build(prev_orgs, curr_orgs);
        let matches: Vec<&ComparisonRecord> = records
            .iter()
            .filter(|r| r.same_org && r.confirmed)
            .collect();

        let _span = simulation_span!(tree.len(), matches.len()).entered();
        let (applied, skipped) = self.apply(&mut tree, &matches);
        let assignments = group_assignments(&tree);

        info!(
            applied = applied.len(),
            via_placeholder = applied
                .iter()
                .filter(|a| a.outcome != RenameOutcome::Direct)
                .count(),
            converged = applied.iter().filter(|a| a.converged).count(),
            skipped = skipped.len(),
            assignments = assignments.len(),
            "rename simulation finished"
        );

        SimulationReport {
            assignments,
            applied,
            skipped,
        }
    }

    /// Apply `matches` to `tree` one at a time.
    pub fn apply(
        &self,
        tree: &mut OrgTree,
        matches: &[&ComparisonRecord],
    ) -> (Vec<AppliedRename>, Vec<SkippedRename>) {
        let mut applied = Vec::new();
        let mut skipped = Vec::new();

        for record in matches {
            let Some(id) = tree.find_prev_node(record.prev_org.as_str()) else {
                debug!(
                    prev_org = %record.prev_org,
                    curr_org = %record.curr_org,
                    "prev org not in tree, rename skipped"
                );
                skipped.push(SkippedRename {
                    prev_org: record.prev_org.clone(),
                    curr_org: record.curr_org.clone(),
                    reason: SkipReason::PrevOrgNotFound,
                });
                continue;
            };

            let outcome = rename_node(
                tree,
                id,
                record.curr_org.as_str(),
                &self.config.placeholder_suffix,
            );
            let converged = !tree.prev_nodes_sharing_name(id).is_empty();
            debug!(
                prev_org = %record.prev_org,
                curr_org = %record.curr_org,
                tree_name = %tree.tree_name(id),
                outcome = ?outcome,
                converged,
                "rename applied"
            );
            applied.push(AppliedRename {
                prev_org: record.prev_org.clone(),
                curr_org: record.curr_org.clone(),
                outcome,
                converged,
            });
        }

        (applied, skipped)
    }
}

impl Default for RenameSimulator {
    fn default() -> Self {
        Self::new(SimulationConfig::default())
    }
}

/// Final tree name of every node that carries a group id.
pub fn group_assignments(tree: &OrgTree) -> Vec<GroupAssignment> {
    tree.ids_by_rank()
        .filter_map(|id| {
            let group_id = tree.node(id).group_id.clone()?;
            Some(GroupAssignment {
                group_id,
                final_org_path: tree.tree_name(id),
            })
        })
        .collect()
}
