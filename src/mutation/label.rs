use crate::model::{Field, Node, WorkflowSequence};

fn find_action<'a>(sequence: &'a mut WorkflowSequence, action_id: &str) -> Option<&'a mut Node> {
    let node = sequence.get_mut(action_id).filter(|n| n.is_action());
    if node.is_none() {
        log::debug!("No action node with id '{}'", action_id);
    }
    node
}

/// Applies a user-entered label to an action.
///
/// The label is trimmed first. An empty label falls back to the node's current
/// default, and typing exactly the default counts as non-custom so the node keeps
/// following renumbering. Anything else pins the label as custom.
pub fn rename_action(sequence: &mut WorkflowSequence, action_id: &str, raw_label: &str) -> bool {
    let Some(node) = find_action(sequence, action_id) else {
        return false;
    };

    let trimmed = raw_label.trim();
    if trimmed.is_empty() {
        node.label = node.default_label.clone();
        node.is_custom_label = false;
    } else {
        node.is_custom_label = trimmed != node.default_label;
        node.label = trimmed.to_string();
    }
    log::debug!(
        "Renamed action '{}' to '{}' (custom: {})",
        action_id,
        node.label,
        node.is_custom_label
    );
    true
}

/// Replaces an action's fields wholesale. Names and values are not validated.
pub fn update_fields(sequence: &mut WorkflowSequence, action_id: &str, fields: Vec<Field>) -> bool {
    let Some(node) = find_action(sequence, action_id) else {
        return false;
    };
    node.fields = fields;
    true
}
