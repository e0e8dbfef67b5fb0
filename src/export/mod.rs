/// Output for external consumers.
///
/// - [`model`] produces the node/link model document read by diagram renderers.
/// - [`formatter`] renders the graph as Markdown or JSON text.
pub mod formatter;
pub mod model;

pub use formatter::{format_chart_as_json, format_graph_as_markdown};
pub use model::{to_chart_model, ChartModel, LinkData, NodeData, DOTTED_CATEGORY};
