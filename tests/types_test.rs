use orgchart::types::*;

#[test]
fn edge_kind_as_str_roundtrip() {
    for kind in [EdgeKind::Hierarchy, EdgeKind::Secondary] {
        let s = kind.as_str();
        let parsed =
            EdgeKind::from_str(s).unwrap_or_else(|| panic!("failed to parse EdgeKind from '{}'", s));
        assert_eq!(kind, parsed, "roundtrip failed for EdgeKind::{}", s);
    }
}

#[test]
fn edge_kind_from_str_unknown_returns_none() {
    assert!(EdgeKind::from_str("dotted").is_none());
    assert!(EdgeKind::from_str("").is_none());
}

#[test]
fn record_exact_lookup_keeps_first_duplicate_header() {
    let mut record = Record::new();
    assert!(record.is_empty());
    record.push("id", "1");
    record.push("id", "2");
    assert_eq!(record.get("id"), Some("1"));
    assert_eq!(record.get("missing"), None);
    assert_eq!(record.len(), 2);
}

#[test]
fn record_iter_preserves_order() {
    let record = Record::from_pairs([("b", "2"), ("a", "1")]);
    let headers: Vec<&str> = record.iter().map(|(k, _)| k).collect();
    assert_eq!(headers, vec!["b", "a"]);
}

#[test]
fn node_is_root_when_parent_empty() {
    let node = Node {
        id: "1".to_string(),
        name: "Dana".to_string(),
        title: "CEO".to_string(),
        parent_id: String::new(),
        category: Category::Employee,
    };
    assert!(node.is_root());
}

#[test]
fn category_serializes_as_variant_name() {
    let json = serde_json::to_string(&Category::Board).unwrap();
    assert_eq!(json, "\"Board\"");
}

#[test]
fn match_strategy_labels() {
    assert_eq!(MatchStrategy::RoleSubstring.as_str(), "role-substring");
    assert_eq!(MatchStrategy::ExactId.as_str(), "exact-id");
    assert_eq!(ReferenceKind::Manager.as_str(), "manager");
}
