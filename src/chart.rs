use std::path::Path;

use crate::config::ChartConfig;
use crate::errors::Result;
use crate::export::{to_chart_model, ChartModel};
use crate::graph::{GraphBuilder, OrgQueries};
use crate::resolution::ReferenceResolver;
use crate::roster::{entry_from_record, read_roster};
use crate::types::*;

/// A roster loaded from disk together with the graph built from it.
///
/// This is the shell around the pure transform: it performs the file I/O and
/// keeps the records so later lookups resolve against the same input.
pub struct OrgChart {
    config: ChartConfig,
    records: Vec<Record>,
    fingerprint: String,
    build: BuildResult,
}

impl OrgChart {
    /// Reads the roster at `path` and builds its graph.
    ///
    /// Fails as a whole if the roster cannot be read or parsed; no graph is
    /// produced from a partially readable file.
    pub fn load(path: &Path, config: ChartConfig) -> Result<Self> {
        config.validate()?;
        let roster = read_roster(path)?;
        tracing::debug!(
            path = %path.display(),
            rows = roster.records.len(),
            fingerprint = %roster.fingerprint,
            "loaded roster"
        );
        Ok(Self::from_records(roster.records, roster.fingerprint, config))
    }

    /// Builds a chart from records already in memory.
    pub fn from_records(records: Vec<Record>, fingerprint: String, config: ChartConfig) -> Self {
        let build = GraphBuilder::new(&config).build(&records);
        Self {
            config,
            records,
            fingerprint,
            build,
        }
    }

    pub fn graph(&self) -> &OrgGraph {
        &self.build.graph
    }

    pub fn unresolved(&self) -> &[UnresolvedRef] {
        &self.build.unresolved
    }

    pub fn fingerprint(&self) -> &str {
        &self.fingerprint
    }

    pub fn duration_ms(&self) -> u64 {
        self.build.duration_ms
    }

    pub fn queries(&self) -> OrgQueries<'_> {
        OrgQueries::new(&self.build.graph)
    }

    pub fn stats(&self) -> GraphStats {
        self.queries().stats(self.build.unresolved.len())
    }

    pub fn model(&self, include_hierarchy_links: bool) -> ChartModel {
        to_chart_model(&self.build.graph, include_hierarchy_links)
    }

    /// Resolves a free-text reference against this chart's roster.
    pub fn resolve(&self, reference: &str) -> Option<ResolvedRef> {
        let entries: Vec<RosterEntry> = self
            .records
            .iter()
            .map(|r| entry_from_record(r, &self.config.columns))
            .collect();
        ReferenceResolver::new(&entries).resolve(reference.trim())
    }
}
