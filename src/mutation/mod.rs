//! Structural edits on a [`WorkflowSequence`].
//!
//! Every operation here is total over ids: an id that does not resolve to a node of
//! the expected kind leaves the sequence untouched and reports the miss through its
//! return value instead of failing. Late or duplicated UI callbacks therefore can
//! never corrupt the chain.

use crate::model::{IdGenerator, Node, NodeKind, WorkflowSequence};

mod label;

pub use label::{rename_action, update_fields};

/// Ids of the three nodes that replaced an insert point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Insertion {
    pub before: String,
    pub action: String,
    pub after: String,
}

/// Replaces the insert point `point_id` with `[InsertPoint, Action, InsertPoint]`.
///
/// The new action starts with an empty label and no fields; the next relayout gives
/// it its `"Action N"` default. Returns `None` when `point_id` is not an insert point.
pub fn insert_action_at(
    sequence: &mut WorkflowSequence,
    ids: &mut IdGenerator,
    point_id: &str,
) -> Option<Insertion> {
    let Some(index) = sequence.position_of(point_id) else {
        log::debug!("Ignoring insert at unknown node '{}'", point_id);
        return None;
    };
    let kind = sequence.nodes()[index].kind;
    if kind != NodeKind::InsertPoint {
        log::debug!(
            "Ignoring insert at '{}': expected an InsertPoint, found {}",
            point_id,
            kind
        );
        return None;
    }

    let before = Node::new(ids.next_id(NodeKind::InsertPoint), NodeKind::InsertPoint);
    let action = Node::new(ids.next_id(NodeKind::Action), NodeKind::Action);
    let after = Node::new(ids.next_id(NodeKind::InsertPoint), NodeKind::InsertPoint);
    let insertion = Insertion {
        before: before.id.clone(),
        action: action.id.clone(),
        after: after.id.clone(),
    };

    sequence
        .nodes_mut()
        .splice(index..=index, [before, action, after]);
    log::debug!(
        "Inserted action '{}' in place of insert point '{}'",
        insertion.action,
        point_id
    );
    Some(insertion)
}

/// Removes the action `action_id` while keeping insert points and actions alternating.
///
/// When the action sits between two insert points, the action and the later insert
/// point are removed so the earlier one now bridges the gap. An action touching
/// `Start` or `End` on both sides is swapped for a fresh insert point; with only one
/// insert-point neighbour, that neighbour already takes its place. Returns `false`
/// when `action_id` is not an action.
pub fn delete_action(
    sequence: &mut WorkflowSequence,
    ids: &mut IdGenerator,
    action_id: &str,
) -> bool {
    let Some(index) = sequence.position_of(action_id) else {
        log::debug!("Ignoring delete of unknown node '{}'", action_id);
        return false;
    };
    let nodes = sequence.nodes_mut();
    if !nodes[index].is_action() {
        log::debug!(
            "Ignoring delete of '{}': expected an Action, found {}",
            action_id,
            nodes[index].kind
        );
        return false;
    }

    let prev_is_point = index > 0 && nodes[index - 1].is_insert_point();
    let next_is_point = nodes.get(index + 1).is_some_and(Node::is_insert_point);

    match (prev_is_point, next_is_point) {
        (true, true) => {
            nodes.drain(index..=index + 1);
        }
        (false, false) => {
            nodes[index] = Node::new(ids.next_id(NodeKind::InsertPoint), NodeKind::InsertPoint);
        }
        _ => {
            nodes.remove(index);
        }
    }
    log::debug!("Deleted action '{}'", action_id);
    true
}
