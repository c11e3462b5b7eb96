use crate::model::Field;
use serde::{Deserialize, Serialize};

/// A user gesture reported by the renderer or the editor drawer.
///
/// Events refer to nodes by id only. An event whose id no longer resolves (for
/// example a second delete click on an already removed action) is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum EditorEvent {
    /// An insert point was clicked.
    InsertPointActivated { point_id: String },
    /// The delete handle on an action node was used.
    DeleteAction { id: String },
    /// An action node was renamed inline.
    RenameAction { id: String, label: String },
    /// An action node was selected, opening it in the drawer.
    OpenEditor { id: String },
    /// The drawer's Save button. Omitted parts keep the session's working copy.
    EditorSave {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        label: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        fields: Option<Vec<Field>>,
    },
    /// The drawer's Delete button.
    EditorDelete,
    /// The drawer was dismissed.
    EditorCancel,
    /// A free-form connection drawn on the canvas.
    Connect { source: String, target: String },
}
