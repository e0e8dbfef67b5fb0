use std::collections::HashMap;

use crate::errors::Result;
use crate::export::model::ChartModel;
use crate::types::{Category, Node, OrgGraph};

/// Formats a chart model as pretty-printed JSON.
pub fn format_chart_as_json(model: &ChartModel) -> Result<String> {
    Ok(serde_json::to_string_pretty(model)?)
}

fn node_label(node: &Node) -> String {
    let mut label = format!("{} - {} ({})", node.title, node.name, node.id);
    if node.category == Category::Board {
        label.push_str(" [Board]");
    }
    label
}

/// Formats an org graph as a Markdown outline.
///
/// The hierarchy is printed as a nested list starting from every root. Nodes
/// that cannot be reached from a root (members of a reporting cycle) are
/// listed under "Unreachable".
pub fn format_graph_as_markdown(graph: &OrgGraph) -> String {
    let mut out = String::new();

    out.push_str("## Org Chart\n");
    out.push_str(&format!(
        "**People:** {}  **Hierarchy links:** {}  **Dotted lines:** {}\n\n",
        graph.nodes.len(),
        graph.hierarchy_edges().count(),
        graph.secondary_edges.len()
    ));

    // Children grouped by parent id, by node index.
    let mut children: HashMap<&str, Vec<usize>> = HashMap::new();
    for (idx, node) in graph.nodes.iter().enumerate() {
        if !node.is_root() {
            children.entry(node.parent_id.as_str()).or_default().push(idx);
        }
    }

    out.push_str("### Hierarchy\n");
    let mut visited = vec![false; graph.nodes.len()];
    let roots: Vec<usize> = (0..graph.nodes.len())
        .filter(|&i| graph.nodes[i].is_root())
        .collect();
    if roots.is_empty() {
        out.push_str("_No root nodes._\n");
    }
    for root in roots {
        write_subtree(graph, &children, root, &mut visited, &mut out);
    }
    out.push('\n');

    let unreachable: Vec<&Node> = graph
        .nodes
        .iter()
        .zip(&visited)
        .filter(|(_, seen)| !**seen)
        .map(|(node, _)| node)
        .collect();
    if !unreachable.is_empty() {
        out.push_str("### Unreachable\n");
        for node in unreachable {
            out.push_str(&format!(
                "- {} -> reports to {}\n",
                node_label(node),
                node.parent_id
            ));
        }
        out.push('\n');
    }

    out.push_str("### Dotted Lines\n");
    if graph.secondary_edges.is_empty() {
        out.push_str("_No dotted lines._\n");
    } else {
        for edge in &graph.secondary_edges {
            out.push_str(&format!("- {} -> {}\n", edge.from, edge.to));
        }
    }

    out
}

/// Writes `root` and everything below it, depth first, using an explicit
/// stack. Children keep node order.
fn write_subtree(
    graph: &OrgGraph,
    children: &HashMap<&str, Vec<usize>>,
    root: usize,
    visited: &mut [bool],
    out: &mut String,
) {
    let mut stack: Vec<(usize, usize)> = vec![(root, 0)];

    while let Some((idx, depth)) = stack.pop() {
        if visited[idx] {
            continue;
        }
        visited[idx] = true;

        let node = &graph.nodes[idx];
        out.push_str(&"  ".repeat(depth));
        out.push_str("- ");
        out.push_str(&node_label(node));
        out.push('\n');

        if let Some(kids) = children.get(node.id.as_str()) {
            for &child in kids.iter().rev() {
                if !visited[child] {
                    stack.push((child, depth + 1));
                }
            }
        }
    }
}
