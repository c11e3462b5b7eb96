//! End-to-end tests for the editor: event dispatch, deferred relayout and frames.
mod common;
use common::*;
use flowline::prelude::*;
use std::thread;

#[test]
fn test_new_editor_is_laid_out() {
    let editor = Editor::default();
    assert!(!editor.is_relayout_pending());
    assert_eq!(editor.edges().len(), 2);
    assert_eq!(editor.revision(), 0);

    let frame = editor.frame();
    assert_eq!(frame.nodes.len(), 3);
    assert_eq!(frame.edges[0].id, "e-start-insert-1");
    assert_eq!(frame.edges[1].id, "e-insert-1-end");
}

#[test]
fn test_scenario_insert_insert_delete() {
    let mut editor = Editor::default();

    editor.dispatch(EditorEvent::InsertPointActivated {
        point_id: "insert-1".to_string(),
    });
    editor.tick();
    assert_eq!(
        ids(editor.sequence()),
        vec!["start", "insert-2", "action-3", "insert-4", "end"]
    );
    assert_eq!(action_labels(editor.sequence()), vec!["Action 1"]);

    editor.dispatch(EditorEvent::InsertPointActivated {
        point_id: "insert-2".to_string(),
    });
    editor.tick();
    assert_eq!(
        ids(editor.sequence()),
        vec![
            "start", "insert-5", "action-6", "insert-7", "action-3", "insert-4", "end"
        ]
    );
    assert_eq!(
        editor.sequence().get("action-6").unwrap().label,
        "Action 1"
    );
    assert_eq!(
        editor.sequence().get("action-3").unwrap().label,
        "Action 2"
    );

    editor.dispatch(EditorEvent::DeleteAction {
        id: "action-6".to_string(),
    });
    editor.tick();
    assert_eq!(
        ids(editor.sequence()),
        vec!["start", "insert-5", "action-3", "insert-4", "end"]
    );
    assert_eq!(action_labels(editor.sequence()), vec!["Action 1"]);
    assert!(editor.sequence().is_valid());
}

#[test]
fn test_relayout_waits_for_tick() {
    let mut editor = Editor::default();
    let insertion = editor.insert_action_at("insert-1").unwrap();

    assert!(editor.is_relayout_pending());
    assert!(editor.sequence().get(&insertion.action).unwrap().label.is_empty());
    // Edges still describe the pre-insert chain.
    assert_eq!(editor.edges().len(), 2);

    let frame = editor.frame();
    assert_eq!(
        frame.node(&insertion.action).unwrap().label.as_deref(),
        Some("Unnamed Action")
    );

    assert!(editor.tick());
    assert!(!editor.tick());
    assert_eq!(editor.sequence().get(&insertion.action).unwrap().label, "Action 1");
    assert_eq!(editor.edges().len(), 4);
}

#[test]
fn test_deferred_relayout_uses_latest_sequence() {
    let mut editor = Editor::default();
    let insertion = editor.insert_action_at("insert-1").unwrap();
    editor.delete_action(&insertion.action);

    assert!(editor.tick());

    let sequence = editor.sequence();
    assert_eq!(sequence.kinds(), parse_kinds("S P E"));
    let expected: Vec<Edge> = sequence
        .nodes()
        .windows(2)
        .map(|pair| Edge::new(pair[0].id.clone(), pair[1].id.clone()))
        .collect();
    assert_eq!(editor.edges(), expected.as_slice());
    for (index, node) in sequence.nodes().iter().enumerate() {
        assert_eq!(node.position, LayoutEngine::default().position_for(index));
    }
}

#[test]
fn test_late_callbacks_are_ignored() {
    let mut editor = Editor::default();
    let actions = append_actions(&mut editor, 2);

    assert!(editor.dispatch(EditorEvent::DeleteAction {
        id: actions[0].clone()
    }));
    let revision = editor.revision();

    assert!(!editor.dispatch(EditorEvent::DeleteAction {
        id: actions[0].clone()
    }));
    assert!(!editor.dispatch(EditorEvent::RenameAction {
        id: actions[0].clone(),
        label: "ghost".to_string(),
    }));
    assert!(!editor.dispatch(EditorEvent::InsertPointActivated {
        point_id: "insert-1".to_string(),
    }));
    assert!(!editor.dispatch(EditorEvent::EditorSave {
        label: Some("no session".to_string()),
        fields: None,
    }));

    assert_eq!(editor.revision(), revision);
    editor.tick();
    assert!(editor.sequence().is_valid());
}

#[test]
fn test_drawer_events_round_trip() {
    let mut editor = Editor::default();
    let action = append_actions(&mut editor, 1).remove(0);

    editor.dispatch(EditorEvent::OpenEditor { id: action.clone() });
    editor.dispatch(EditorEvent::EditorSave {
        label: Some("Notify team".to_string()),
        fields: Some(vec![Field::new("channel", "#ops")]),
    });
    editor.tick();

    let node = editor.sequence().get(&action).unwrap();
    assert_eq!(node.label, "Notify team");
    assert_eq!(node.fields, vec![Field::new("channel", "#ops")]);

    editor.dispatch(EditorEvent::OpenEditor { id: action.clone() });
    editor.dispatch(EditorEvent::EditorSave {
        label: None,
        fields: None,
    });
    editor.tick();
    let node = editor.sequence().get(&action).unwrap();
    assert_eq!(node.label, "Notify team");
    assert_eq!(node.fields.len(), 1);

    editor.dispatch(EditorEvent::OpenEditor { id: action.clone() });
    assert!(editor.dispatch(EditorEvent::EditorDelete));
    editor.tick();
    assert_eq!(editor.sequence().action_count(), 0);
}

#[test]
fn test_manual_connections_are_an_overlay() {
    let mut editor = Editor::default();
    let actions = append_actions(&mut editor, 2);

    assert!(editor.connect("start", &actions[1]));
    assert!(!editor.connect("start", "start"));
    assert!(!editor.connect("start", "ghost"));

    let frame = editor.frame();
    let manual: Vec<&RenderEdge> = frame.edges.iter().filter(|e| e.manual).collect();
    assert_eq!(manual.len(), 1);
    assert_eq!(manual[0].target, actions[1]);
    assert!(editor.sequence().is_valid());

    // Nothing structural changed, so the overlay survives a tick.
    assert!(!editor.tick());
    assert_eq!(editor.manual_edges().len(), 1);

    editor.delete_action(&actions[0]);
    editor.tick();
    assert!(editor.manual_edges().is_empty());
    assert!(editor.frame().edges.iter().all(|e| !e.manual));
}

#[test]
fn test_render_callback_slots() {
    let mut editor = Editor::default();
    let action = append_actions(&mut editor, 1).remove(0);
    let frame = editor.frame();

    let start = frame.node("start").unwrap();
    assert!(start.on_delete().is_none());
    assert!(start.on_activate().is_none());

    let point = frame.node("insert-2").unwrap();
    assert_eq!(
        point.on_activate(),
        Some(EditorEvent::InsertPointActivated {
            point_id: "insert-2".to_string()
        })
    );
    assert!(point.on_rename("x").is_none());

    let node = frame.node(&action).unwrap();
    let rename = node.on_rename("Wait").unwrap();
    assert!(editor.dispatch(rename));
    let delete = node.on_delete().unwrap();
    assert!(editor.dispatch(delete));
    editor.tick();
    assert_eq!(editor.sequence().kinds(), parse_kinds("S P E"));
}

#[test]
fn test_frame_shows_drawer() {
    let mut editor = Editor::default();
    let action = append_actions(&mut editor, 1).remove(0);
    assert!(editor.frame().drawer.is_none());

    editor.open_editor(&action);
    let drawer = editor.frame().drawer.unwrap();
    assert_eq!(drawer.node_id, action);
    assert!(editor.frame().to_string().contains("editing: action-3"));
}

#[test]
fn test_reset_never_reuses_ids() {
    let mut editor = Editor::default();
    append_actions(&mut editor, 2);
    editor.reset();
    editor.tick();

    assert_eq!(editor.sequence().kinds(), parse_kinds("S P E"));
    let point = &editor.sequence().nodes()[1].id;
    assert_ne!(point, "insert-1");
    assert!(editor.sequence().is_valid());
}

#[test]
fn test_shared_editor_serializes_threads() {
    let shared = SharedEditor::default();

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let shared = shared.clone();
            thread::spawn(move || {
                for _ in 0..10 {
                    shared.with(|editor| {
                        let point = last_insert_point(editor.sequence());
                        editor.insert_action_at(&point).unwrap();
                    });
                    shared.tick();
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }
    shared.tick();

    shared.with(|editor| {
        assert_eq!(editor.sequence().action_count(), 40);
        assert!(editor.sequence().is_valid());
        assert_eq!(
            action_labels(editor.sequence()).last().map(String::as_str),
            Some("Action 40")
        );
    });
    assert_eq!(shared.frame().nodes.len(), 83);
}
