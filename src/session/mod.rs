use crate::model::{Field, IdGenerator, WorkflowSequence};
use crate::mutation::{delete_action, rename_action, update_fields};
use serde::Serialize;

/// The drawer's uncommitted copy of an action's label and fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkingCopy {
    pub node_id: String,
    pub label: String,
    pub fields: Vec<Field>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SessionState {
    #[default]
    Closed,
    Open(WorkingCopy),
}

/// What the external drawer is shown when a session opens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DrawerView {
    pub node_id: String,
    pub label: String,
    pub fields: Vec<Field>,
}

/// Tracks the single action currently open in the editor drawer.
///
/// At most one session exists at a time. Opening a new one discards the previous
/// working copy exactly like a cancel would. A drawer that never answers simply
/// leaves the session open; nothing is committed until [`save`](Self::save).
#[derive(Debug, Clone, Default)]
pub struct EditingSession {
    state: SessionState,
}

impl EditingSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, SessionState::Open(_))
    }

    pub fn node_id(&self) -> Option<&str> {
        self.working_copy().map(|w| w.node_id.as_str())
    }

    pub fn working_copy(&self) -> Option<&WorkingCopy> {
        match &self.state {
            SessionState::Open(copy) => Some(copy),
            SessionState::Closed => None,
        }
    }

    /// Opens `node_id` for editing. Only action nodes can be opened; any other id
    /// leaves the current state untouched and returns `false`.
    pub fn open(&mut self, sequence: &WorkflowSequence, node_id: &str) -> bool {
        let Some(node) = sequence.get(node_id).filter(|n| n.is_action()) else {
            log::debug!("Cannot open editor for '{}': not an action", node_id);
            return false;
        };
        if let Some(previous) = self.node_id() {
            log::debug!("Discarding unsaved edits of '{}'", previous);
        }
        self.state = SessionState::Open(WorkingCopy {
            node_id: node.id.clone(),
            label: node.label.clone(),
            fields: node.fields.clone(),
        });
        true
    }

    pub fn drawer(&self) -> Option<DrawerView> {
        self.working_copy().map(|copy| DrawerView {
            node_id: copy.node_id.clone(),
            label: copy.label.clone(),
            fields: copy.fields.clone(),
        })
    }

    pub fn set_label(&mut self, label: impl Into<String>) -> bool {
        self.with_copy(|copy| {
            copy.label = label.into();
            true
        })
    }

    /// Appends an empty `("", "")` row.
    pub fn add_field(&mut self) -> bool {
        self.with_copy(|copy| {
            copy.fields.push(Field::default());
            true
        })
    }

    pub fn remove_field(&mut self, index: usize) -> bool {
        self.with_copy(|copy| {
            if index < copy.fields.len() {
                copy.fields.remove(index);
                true
            } else {
                false
            }
        })
    }

    pub fn set_field_name(&mut self, index: usize, name: impl Into<String>) -> bool {
        self.with_copy(|copy| match copy.fields.get_mut(index) {
            Some(field) => {
                field.name = name.into();
                true
            }
            None => false,
        })
    }

    pub fn set_field_value(&mut self, index: usize, value: impl Into<String>) -> bool {
        self.with_copy(|copy| match copy.fields.get_mut(index) {
            Some(field) => {
                field.value = value.into();
                true
            }
            None => false,
        })
    }

    /// Replaces the whole working copy, as a drawer reporting its final state does.
    pub fn stage(&mut self, label: impl Into<String>, fields: Vec<Field>) -> bool {
        self.with_copy(|copy| {
            copy.label = label.into();
            copy.fields = fields;
            true
        })
    }

    /// Commits the rename, then the field update, then closes.
    ///
    /// Returns `false` if no session was open. A session whose node disappeared in
    /// the meantime still closes; both commits are then no-ops.
    pub fn save(&mut self, sequence: &mut WorkflowSequence) -> bool {
        let SessionState::Open(copy) = std::mem::take(&mut self.state) else {
            return false;
        };
        rename_action(sequence, &copy.node_id, &copy.label);
        update_fields(sequence, &copy.node_id, copy.fields);
        log::debug!("Saved editor session for '{}'", copy.node_id);
        true
    }

    /// Closes without touching the model.
    pub fn cancel(&mut self) -> bool {
        let was_open = self.is_open();
        self.state = SessionState::Closed;
        was_open
    }

    /// Deletes the edited action and closes, discarding any unsaved edits.
    pub fn delete(&mut self, sequence: &mut WorkflowSequence, ids: &mut IdGenerator) -> bool {
        let SessionState::Open(copy) = std::mem::take(&mut self.state) else {
            return false;
        };
        delete_action(sequence, ids, &copy.node_id)
    }

    fn with_copy(&mut self, edit: impl FnOnce(&mut WorkingCopy) -> bool) -> bool {
        match &mut self.state {
            SessionState::Open(copy) => edit(copy),
            SessionState::Closed => false,
        }
    }
}
