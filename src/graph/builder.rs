use std::collections::HashSet;
use std::time::Instant;

use crate::classify::classify_category;
use crate::config::ChartConfig;
use crate::resolution::ReferenceResolver;
use crate::roster::entry_from_record;
use crate::types::*;

/// Builds an `OrgGraph` from roster records.
///
/// The transform is pure: it reads the records, never mutates them, and the
/// same records always produce the same graph.
pub struct GraphBuilder<'c> {
    config: &'c ChartConfig,
}

impl<'c> GraphBuilder<'c> {
    pub fn new(config: &'c ChartConfig) -> Self {
        Self { config }
    }

    /// Runs both passes over `records`.
    ///
    /// Pass 1 emits one node per record, in record order, with its manager
    /// reference resolved to `parent_id`. Pass 2 emits a `Secondary` edge from
    /// the resolved target to the record's own id for every secondary
    /// reference that resolves. References that fail to resolve degrade to an
    /// empty parent or a missing edge and are reported in `unresolved`.
    pub fn build(&self, records: &[Record]) -> BuildResult {
        let start = Instant::now();

        let entries: Vec<RosterEntry> = records
            .iter()
            .map(|r| entry_from_record(r, &self.config.columns))
            .collect();
        let resolver = ReferenceResolver::new(&entries);
        let mut unresolved = Vec::new();

        // Pass 1: nodes
        let mut nodes = Vec::with_capacity(entries.len());
        for (row, entry) in entries.iter().enumerate() {
            let title = if self.config.strip_quotes {
                entry.role.replace('"', "")
            } else {
                entry.role.clone()
            };
            let category = classify_category(&title, &self.config.board_marker);

            let parent_id = match resolve_target(&resolver, &entry.manager_ref) {
                Some(resolved) => resolved.target_id,
                None => {
                    if !entry.manager_ref.is_empty() {
                        tracing::debug!(
                            row,
                            id = %entry.id,
                            reference = %entry.manager_ref,
                            "unresolved manager reference"
                        );
                        unresolved.push(UnresolvedRef {
                            row,
                            node_id: entry.id.clone(),
                            kind: ReferenceKind::Manager,
                            reference: entry.manager_ref.clone(),
                        });
                    }
                    String::new()
                }
            };

            nodes.push(Node {
                id: entry.id.clone(),
                name: entry.name.clone(),
                title,
                parent_id,
                category,
            });
        }

        // Pass 2: secondary edges
        let mut secondary_edges = Vec::new();
        for (row, entry) in entries.iter().enumerate() {
            if entry.secondary_ref.is_empty() {
                continue;
            }
            match resolve_target(&resolver, &entry.secondary_ref) {
                Some(resolved) => secondary_edges.push(Edge {
                    kind: EdgeKind::Secondary,
                    from: resolved.target_id,
                    to: entry.id.clone(),
                }),
                None => {
                    tracing::debug!(
                        row,
                        id = %entry.id,
                        reference = %entry.secondary_ref,
                        "unresolved secondary reference"
                    );
                    unresolved.push(UnresolvedRef {
                        row,
                        node_id: entry.id.clone(),
                        kind: ReferenceKind::Secondary,
                        reference: entry.secondary_ref.clone(),
                    });
                }
            }
        }

        warn_duplicate_ids(&entries);

        let graph = OrgGraph {
            nodes,
            secondary_edges,
        };
        let duration_ms = start.elapsed().as_millis() as u64;
        tracing::info!(
            nodes = graph.nodes.len(),
            secondary_edges = graph.secondary_edges.len(),
            unresolved = unresolved.len(),
            duration_ms,
            "built org graph"
        );

        BuildResult {
            graph,
            unresolved,
            duration_ms,
        }
    }
}

/// Resolves `reference`, treating a match on an entry with an empty id as
/// unresolved. A role match on such an entry does not fall back to id matching.
fn resolve_target(resolver: &ReferenceResolver<'_>, reference: &str) -> Option<ResolvedRef> {
    resolver
        .resolve(reference)
        .filter(|resolved| !resolved.target_id.is_empty())
}

/// Duplicate ids are tolerated; only the first occurrence is reachable by
/// exact-id references.
fn warn_duplicate_ids(entries: &[RosterEntry]) {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut reported: HashSet<&str> = HashSet::new();
    for entry in entries {
        if !seen.insert(entry.id.as_str()) && reported.insert(entry.id.as_str()) {
            tracing::warn!(id = %entry.id, "duplicate id in roster");
        }
    }
}

/// Builds the graph for `records` with the given configuration.
pub fn build_graph(records: &[Record], config: &ChartConfig) -> OrgGraph {
    GraphBuilder::new(config).build(records).graph
}
