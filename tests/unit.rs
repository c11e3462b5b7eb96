//! Unit tests for small building blocks: display impls, errors and serialization.
mod common;
use common::*;
use flowline::prelude::*;
use flowline::render::UNNAMED_ACTION;

#[test]
fn test_node_kind_display() {
    assert_eq!(NodeKind::Start.to_string(), "Start");
    assert_eq!(NodeKind::InsertPoint.to_string(), "InsertPoint");
    assert_eq!(format!("{}", NodeKind::Action), "Action");
}

#[test]
fn test_field_display() {
    assert_eq!(Field::new("url", "https://example.com").to_string(), "url: https://example.com");
}

#[test]
fn test_error_display() {
    let err = InvariantError::AdjacentKinds {
        first: "insert-2".to_string(),
        second: "insert-4".to_string(),
        kind: NodeKind::InsertPoint,
    };
    assert!(err.to_string().contains("insert-2"));
    assert!(err.to_string().contains("insert-4"));
    assert!(err.to_string().contains("InsertPoint"));

    let err = InvariantError::DuplicateId("action-3".to_string());
    assert_eq!(err.to_string(), "Node id 'action-3' is used more than once");

    let err = sequence_of("S P A E").validate().unwrap_err();
    assert!(err.to_string().contains("End"));
}

#[test]
fn test_render_node_omits_action_data_for_markers() {
    let mut editor = Editor::default();
    append_actions(&mut editor, 1);
    editor.update_fields("action-3", vec![Field::new("method", "GET")]);
    editor.tick();

    let json = serde_json::to_value(editor.frame()).unwrap();
    let nodes = json["nodes"].as_array().unwrap();

    assert_eq!(nodes[0]["kind"], "start");
    assert!(nodes[0].get("label").is_none());
    assert_eq!(nodes[1]["kind"], "insertPoint");
    assert!(nodes[1].get("fields").is_none());

    assert_eq!(nodes[2]["kind"], "action");
    assert_eq!(nodes[2]["label"], "Action 1");
    assert_eq!(nodes[2]["fields"][0]["name"], "method");
    assert_eq!(nodes[2]["position"]["y"], 290.0);
    assert!(json.get("drawer").is_none());

    let edges = json["edges"].as_array().unwrap();
    assert_eq!(edges.len(), 4);
    assert_eq!(edges[0]["id"], "e-start-insert-2");
    assert_eq!(edges[0]["manual"], false);
}

#[test]
fn test_render_node_fallback_label() {
    let node = Node::new("action-9", NodeKind::Action);
    let render = RenderNode::from_node(&node);
    assert_eq!(render.label.as_deref(), Some(UNNAMED_ACTION));
    assert_eq!(render.fields, Some(Vec::new()));

    let marker = RenderNode::from_node(&Node::new("insert-9", NodeKind::InsertPoint));
    assert!(marker.label.is_none());
    assert!(marker.fields.is_none());
}

#[test]
fn test_frame_text_output() {
    let mut editor = Editor::default();
    let action = append_actions(&mut editor, 1).remove(0);
    editor.update_fields(&action, vec![Field::new("delay", "5m")]);
    editor.tick();

    let text = editor.frame().to_string();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 5);
    assert!(lines[0].contains("start"));
    assert!(lines[2].contains("Action 1"));
    assert!(lines[2].contains("(delay: 5m)"));
    assert!(lines[4].contains("End"));
}

#[test]
fn test_edge_id() {
    assert_eq!(Edge::new("a", "b").id(), "e-a-b");
}
