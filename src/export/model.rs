use serde::{Deserialize, Serialize};

use crate::types::{Category, EdgeKind, OrgGraph};

/// Link category marking a dotted reporting line.
pub const DOTTED_CATEGORY: &str = "Dotted";

const MODEL_CLASS: &str = "GraphLinksModel";

/// A node as the renderer expects it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeData {
    pub key: String,
    pub name: String,
    pub title: String,
    pub parent: String,
    pub category: Category,
}

/// A link as the renderer expects it. Links without a category are drawn as
/// hierarchy links.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkData {
    pub from: String,
    pub to: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

/// Graph-links model document: node data plus explicit link data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartModel {
    pub class: String,
    pub node_data_array: Vec<NodeData>,
    pub link_data_array: Vec<LinkData>,
}

/// Converts a graph into the renderer's model.
///
/// Renderers derive hierarchy links from each node's `parent`, so by default
/// only dotted links are listed. With `include_hierarchy_links` the hierarchy
/// links are materialized first, followed by the dotted links.
pub fn to_chart_model(graph: &OrgGraph, include_hierarchy_links: bool) -> ChartModel {
    let node_data_array = graph
        .nodes
        .iter()
        .map(|n| NodeData {
            key: n.id.clone(),
            name: n.name.clone(),
            title: n.title.clone(),
            parent: n.parent_id.clone(),
            category: n.category,
        })
        .collect();

    let mut link_data_array: Vec<LinkData> = Vec::new();
    if include_hierarchy_links {
        link_data_array.extend(graph.hierarchy_edges().map(|e| LinkData {
            from: e.from,
            to: e.to,
            category: None,
        }));
    }
    link_data_array.extend(graph.secondary_edges.iter().map(|e| LinkData {
        from: e.from.clone(),
        to: e.to.clone(),
        category: match e.kind {
            EdgeKind::Secondary => Some(DOTTED_CATEGORY.to_string()),
            EdgeKind::Hierarchy => None,
        },
    }));

    ChartModel {
        class: MODEL_CLASS.to_string(),
        node_data_array,
        link_data_array,
    }
}
