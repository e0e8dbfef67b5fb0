use std::collections::{HashMap, HashSet};

use crate::errors::{OrgChartError, Result};
use crate::types::*;

/// Provides analytical queries over a built org graph.
///
/// Node lookups by id resolve to the first node carrying that id, matching the
/// exact-id rule used during reference resolution.
pub struct OrgQueries<'g> {
    graph: &'g OrgGraph,
    by_id: HashMap<&'g str, &'g Node>,
}

impl<'g> OrgQueries<'g> {
    /// Creates a new `OrgQueries` over `graph`.
    pub fn new(graph: &'g OrgGraph) -> Self {
        let mut by_id: HashMap<&'g str, &'g Node> = HashMap::with_capacity(graph.nodes.len());
        for node in &graph.nodes {
            by_id.entry(node.id.as_str()).or_insert(node);
        }
        Self { graph, by_id }
    }

    pub fn node(&self, id: &str) -> Option<&'g Node> {
        self.by_id.get(id).copied()
    }

    /// Nodes without a resolved manager.
    pub fn roots(&self) -> Vec<&'g Node> {
        self.graph.nodes.iter().filter(|n| n.is_root()).collect()
    }

    /// Direct reports of `id`, in node order.
    pub fn children_of(&self, id: &str) -> Vec<&'g Node> {
        self.graph
            .nodes
            .iter()
            .filter(|n| !n.is_root() && n.parent_id == id)
            .collect()
    }

    /// Ids of the nodes that report to `id` through a dotted line.
    pub fn secondary_reports_of(&self, id: &str) -> Vec<&'g str> {
        self.graph
            .secondary_edges
            .iter()
            .filter(|e| e.from == id)
            .map(|e| e.to.as_str())
            .collect()
    }

    /// Returns the node `id` followed by each successive manager.
    ///
    /// The walk stops at a root, at a parent id with no node, or when an id
    /// repeats (a reporting cycle or a self-managed node).
    pub fn chain_of_command(&self, id: &str) -> Result<Vec<&'g Node>> {
        let start = self.node(id).ok_or_else(|| OrgChartError::NotFound {
            id: id.to_string(),
        })?;

        let mut visited: HashSet<&str> = HashSet::new();
        visited.insert(start.id.as_str());
        let mut chain = vec![start];
        let mut current = start;

        while !current.is_root() {
            if !visited.insert(current.parent_id.as_str()) {
                break;
            }
            match self.node(&current.parent_id) {
                Some(parent) => {
                    chain.push(parent);
                    current = parent;
                }
                None => break,
            }
        }

        Ok(chain)
    }

    /// Number of hierarchy hops from `id` up its chain of command.
    pub fn depth_of(&self, id: &str) -> Option<usize> {
        self.chain_of_command(id).ok().map(|chain| chain.len() - 1)
    }

    /// Nodes whose manager reference resolved to themselves.
    pub fn self_managed(&self) -> Vec<&'g Node> {
        self.graph
            .nodes
            .iter()
            .filter(|n| !n.is_root() && n.parent_id == n.id)
            .collect()
    }

    /// Ids carried by more than one node, in first-seen order.
    pub fn duplicate_ids(&self) -> Vec<&'g str> {
        let mut seen: HashSet<&str> = HashSet::new();
        let mut duplicates: Vec<&'g str> = Vec::new();
        for node in &self.graph.nodes {
            let id = node.id.as_str();
            if !seen.insert(id) && !duplicates.contains(&id) {
                duplicates.push(id);
            }
        }
        duplicates
    }

    /// Computes summary statistics. `unresolved_count` comes from the build.
    pub fn stats(&self, unresolved_count: usize) -> GraphStats {
        let nodes = &self.graph.nodes;
        let board_count = nodes
            .iter()
            .filter(|n| n.category == Category::Board)
            .count();
        let max_depth = nodes
            .iter()
            .filter_map(|n| self.depth_of(&n.id))
            .max()
            .unwrap_or(0);

        GraphStats {
            node_count: nodes.len(),
            hierarchy_edge_count: self.graph.hierarchy_edges().count(),
            secondary_edge_count: self.graph.secondary_edges.len(),
            board_count,
            employee_count: nodes.len() - board_count,
            root_count: nodes.iter().filter(|n| n.is_root()).count(),
            unresolved_count,
            max_depth,
        }
    }
}
