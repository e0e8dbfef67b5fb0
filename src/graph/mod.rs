/// Two-pass construction of the org graph from roster records.
pub mod builder;

/// Read-only queries over a built org graph.
pub mod queries;

pub use builder::{build_graph, GraphBuilder};
pub use queries::OrgQueries;
