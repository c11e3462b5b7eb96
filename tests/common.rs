//! Common test utilities for building workflow sequences and editors.
use flowline::prelude::*;

/// Parses a shorthand like `"S P A P E"` into node kinds.
///
/// `S` = Start, `E` = End, `P` = InsertPoint, `A` = Action.
#[allow(dead_code)]
pub fn parse_kinds(shorthand: &str) -> Vec<NodeKind> {
    shorthand
        .split_whitespace()
        .map(|token| match token {
            "S" => NodeKind::Start,
            "E" => NodeKind::End,
            "P" => NodeKind::InsertPoint,
            "A" => NodeKind::Action,
            other => panic!("Unknown node kind shorthand '{}'", other),
        })
        .collect()
}

/// Builds an unchecked sequence with ids `n0`, `n1`, ... from a shorthand.
#[allow(dead_code)]
pub fn sequence_of(shorthand: &str) -> WorkflowSequence {
    let nodes = parse_kinds(shorthand)
        .into_iter()
        .enumerate()
        .map(|(i, kind)| Node::new(format!("n{}", i), kind))
        .collect();
    WorkflowSequence::from_nodes(nodes)
}

/// The id of the last insert point in the chain (the one right before `End`).
#[allow(dead_code)]
pub fn last_insert_point(sequence: &WorkflowSequence) -> String {
    sequence
        .insert_points()
        .last()
        .map(|n| n.id.clone())
        .expect("A valid sequence always has an insert point")
}

/// Appends `count` actions at the end of the chain, ticking after each insert.
#[allow(dead_code)]
pub fn append_actions(editor: &mut Editor, count: usize) -> Vec<String> {
    (0..count)
        .map(|_| {
            let point = last_insert_point(editor.sequence());
            let insertion = editor
                .insert_action_at(&point)
                .expect("Insert at a live insert point must succeed");
            editor.tick();
            insertion.action
        })
        .collect()
}

/// Visible labels of all action nodes, in chain order.
#[allow(dead_code)]
pub fn action_labels(sequence: &WorkflowSequence) -> Vec<String> {
    sequence.actions().map(|n| n.label.clone()).collect()
}

/// Node ids in chain order.
#[allow(dead_code)]
pub fn ids(sequence: &WorkflowSequence) -> Vec<String> {
    sequence.nodes().iter().map(|n| n.id.clone()).collect()
}
