use orgchart::export::*;
use orgchart::types::*;

fn node(id: &str, name: &str, title: &str, parent: &str, category: Category) -> Node {
    Node {
        id: id.to_string(),
        name: name.to_string(),
        title: title.to_string(),
        parent_id: parent.to_string(),
        category,
    }
}

fn sample_graph() -> OrgGraph {
    OrgGraph {
        nodes: vec![
            node("1", "Dana", "CEO", "", Category::Employee),
            node("2", "Avi", "CFO", "1", Category::Employee),
            node("3", "Noa", "Director", "", Category::Board),
        ],
        secondary_edges: vec![Edge {
            kind: EdgeKind::Secondary,
            from: "3".to_string(),
            to: "2".to_string(),
        }],
    }
}

#[test]
fn test_model_lists_only_dotted_links_by_default() {
    let model = to_chart_model(&sample_graph(), false);
    assert_eq!(model.node_data_array.len(), 3);
    assert_eq!(
        model.link_data_array,
        vec![LinkData {
            from: "3".to_string(),
            to: "2".to_string(),
            category: Some(DOTTED_CATEGORY.to_string()),
        }]
    );
    assert_eq!(model.node_data_array[1].parent, "1");
    assert_eq!(model.node_data_array[1].key, "2");
}

#[test]
fn test_model_with_hierarchy_links() {
    let model = to_chart_model(&sample_graph(), true);
    assert_eq!(model.link_data_array.len(), 2);
    assert_eq!(model.link_data_array[0].from, "1");
    assert_eq!(model.link_data_array[0].to, "2");
    assert!(model.link_data_array[0].category.is_none());
    assert_eq!(model.link_data_array[1].category.as_deref(), Some("Dotted"));
}

#[test]
fn test_model_json_shape() {
    let model = to_chart_model(&sample_graph(), true);
    let json = format_chart_as_json(&model).expect("serialization failed");
    let value: serde_json::Value = serde_json::from_str(&json).expect("invalid json");

    assert_eq!(value["class"], "GraphLinksModel");
    let nodes = value["nodeDataArray"].as_array().expect("nodeDataArray array");
    assert_eq!(nodes[0]["key"], "1");
    assert_eq!(nodes[0]["name"], "Dana");
    assert_eq!(nodes[0]["title"], "CEO");
    assert_eq!(nodes[0]["parent"], "");
    assert_eq!(nodes[0]["category"], "Employee");
    assert_eq!(nodes[2]["category"], "Board");

    let links = value["linkDataArray"].as_array().expect("linkDataArray array");
    assert!(
        links[0].get("category").is_none(),
        "hierarchy links carry no category key"
    );
    assert_eq!(links[1]["category"], "Dotted");
}

#[test]
fn test_model_roundtrips_through_json() {
    let model = to_chart_model(&sample_graph(), false);
    let json = format_chart_as_json(&model).expect("serialization failed");
    let parsed: ChartModel = serde_json::from_str(&json).expect("deserialization failed");
    assert_eq!(parsed, model);
}

#[test]
fn test_markdown_outline() {
    let md = format_graph_as_markdown(&sample_graph());
    assert!(md.contains("## Org Chart"));
    assert!(md.contains("**People:** 3"));
    assert!(md.contains("- CEO - Dana (1)\n  - CFO - Avi (2)\n"));
    assert!(md.contains("- Director - Noa (3) [Board]"));
    assert!(md.contains("### Dotted Lines\n- 3 -> 2"));
    assert!(!md.contains("### Unreachable"));
}

#[test]
fn test_markdown_lists_cycle_members_as_unreachable() {
    let graph = OrgGraph {
        nodes: vec![
            node("a", "A", "Lead", "b", Category::Employee),
            node("b", "B", "Lead", "a", Category::Employee),
        ],
        secondary_edges: Vec::new(),
    };
    let md = format_graph_as_markdown(&graph);
    assert!(md.contains("_No root nodes._"));
    assert!(md.contains("### Unreachable"));
    assert!(md.contains("- Lead - A (a) -> reports to b"));
    assert!(md.contains("_No dotted lines._"));
}

#[test]
fn test_markdown_outline_of_deep_chain() {
    // Each node reports to the previous one, plus two siblings under the last.
    let depth = 2_000;
    let mut nodes: Vec<Node> = (0..depth)
        .map(|i| {
            let parent = if i == 0 { String::new() } else { (i - 1).to_string() };
            node(&i.to_string(), "P", "T", &parent, Category::Employee)
        })
        .collect();
    let last = (depth - 1).to_string();
    nodes.push(node("a", "First", "Leaf", &last, Category::Employee));
    nodes.push(node("b", "Second", "Leaf", &last, Category::Employee));
    let graph = OrgGraph {
        nodes,
        secondary_edges: Vec::new(),
    };

    let md = format_graph_as_markdown(&graph);
    assert!(!md.contains("### Unreachable"), "every node hangs off the root");
    assert!(md.contains(&format!("{}- T - P ({last})\n", "  ".repeat(depth - 1))));

    let first = md.find("- Leaf - First (a)").expect("first leaf listed");
    let second = md.find("- Leaf - Second (b)").expect("second leaf listed");
    assert!(first < second, "siblings keep node order");
    assert!(md.contains(&format!("{}- Leaf - First (a)\n", "  ".repeat(depth))));
}
