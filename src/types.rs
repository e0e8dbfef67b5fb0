use serde::{Deserialize, Serialize};

/// Coarse classification of a person, used by renderers to pick a template.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[default]
    Employee,
    Board,
}

#[allow(clippy::should_implement_trait)]
impl Category {
    /// Returns the string representation of this category.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Employee => "Employee",
            Category::Board => "Board",
        }
    }

    /// Parses a string into a `Category`, returning `None` for unrecognized values.
    pub fn from_str(s: &str) -> Option<Category> {
        match s {
            "Employee" => Some(Category::Employee),
            "Board" => Some(Category::Board),
            _ => None,
        }
    }
}

/// Kinds of edges in the org graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EdgeKind {
    /// Primary reporting chain, derived from a node's `parent_id`.
    Hierarchy,
    /// Dotted-line reporting relation.
    Secondary,
}

#[allow(clippy::should_implement_trait)]
impl EdgeKind {
    /// Returns the string representation of this edge kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            EdgeKind::Hierarchy => "hierarchy",
            EdgeKind::Secondary => "secondary",
        }
    }

    /// Parses a string into an `EdgeKind`, returning `None` for unrecognized values.
    pub fn from_str(s: &str) -> Option<EdgeKind> {
        match s {
            "hierarchy" => Some(EdgeKind::Hierarchy),
            "secondary" => Some(EdgeKind::Secondary),
            _ => None,
        }
    }
}

/// One input row: header/value pairs in the order the source produced them.
///
/// Headers are kept exactly as read, including any byte-order mark or stray
/// whitespace, so that field lookup can decide how tolerant to be.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    fields: Vec<(String, String)>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a record from `(header, value)` pairs.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            fields: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Appends a column. A repeated header keeps its first occurrence for
    /// exact lookups.
    pub fn push(&mut self, header: impl Into<String>, value: impl Into<String>) {
        self.fields.push((header.into(), value.into()));
    }

    /// Exact header lookup.
    pub fn get(&self, header: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k == header)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Typed view over a `Record` with the five logical roster fields resolved.
///
/// All values are trimmed. `role` is the raw trimmed role text; quote cleanup
/// only applies to the node title derived from it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterEntry {
    pub id: String,
    pub name: String,
    pub role: String,
    pub manager_ref: String,
    pub secondary_ref: String,
    /// Columns not consumed by any logical field, in record order.
    pub extra: Vec<(String, String)>,
}

/// A person in the org graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    pub id: String,
    pub name: String,
    pub title: String,
    /// Resolved id of the direct manager, empty when absent or unresolved.
    pub parent_id: String,
    pub category: Category,
}

impl Node {
    pub fn is_root(&self) -> bool {
        self.parent_id.is_empty()
    }
}

/// A directed relation between two node ids.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    pub kind: EdgeKind,
    pub from: String,
    pub to: String,
}

/// Which rule resolved a reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchStrategy {
    RoleSubstring,
    ExactId,
}

impl MatchStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchStrategy::RoleSubstring => "role-substring",
            MatchStrategy::ExactId => "exact-id",
        }
    }
}

/// A reference that has been resolved to a roster id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedRef {
    pub target_id: String,
    pub strategy: MatchStrategy,
    /// Position of the matched entry in the roster.
    pub row: usize,
}

/// Which roster column a reference came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReferenceKind {
    Manager,
    Secondary,
}

impl ReferenceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReferenceKind::Manager => "manager",
            ReferenceKind::Secondary => "secondary",
        }
    }
}

/// A non-empty reference that matched no roster entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnresolvedRef {
    pub row: usize,
    pub node_id: String,
    pub kind: ReferenceKind,
    pub reference: String,
}

/// Nodes plus the explicit secondary edges. Hierarchy edges are derived.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrgGraph {
    pub nodes: Vec<Node>,
    pub secondary_edges: Vec<Edge>,
}

impl OrgGraph {
    /// One `Hierarchy` edge `parent_id -> id` per node with a parent, in node order.
    pub fn hierarchy_edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.nodes
            .iter()
            .filter(|n| !n.is_root())
            .map(|n| Edge {
                kind: EdgeKind::Hierarchy,
                from: n.parent_id.clone(),
                to: n.id.clone(),
            })
    }

    /// Hierarchy edges followed by secondary edges.
    pub fn all_edges(&self) -> Vec<Edge> {
        let mut edges: Vec<Edge> = self.hierarchy_edges().collect();
        edges.extend(self.secondary_edges.iter().cloned());
        edges
    }
}

/// Result of a full build.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildResult {
    pub graph: OrgGraph,
    pub unresolved: Vec<UnresolvedRef>,
    pub duration_ms: u64,
}

/// Summary statistics about an org graph.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphStats {
    pub node_count: usize,
    pub hierarchy_edge_count: usize,
    pub secondary_edge_count: usize,
    pub board_count: usize,
    pub employee_count: usize,
    pub root_count: usize,
    pub unresolved_count: usize,
    /// Longest chain of hierarchy hops from any node to a root.
    pub max_depth: usize,
}
