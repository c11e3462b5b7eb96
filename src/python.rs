use crate::editor::{Editor, EditorEvent};
use crate::layout::LayoutConfig;
use crate::model::Field;
use pyo3::prelude::*;

/// An editor for a strictly linear workflow.
///
/// The editor starts from the canonical `[Start, InsertPoint, End]` chain. Edits
/// apply immediately but the layout (positions, "Action N" labels and edges) is only
/// recomputed when `tick()` is called, mirroring a UI event loop.
#[pyclass(name = "WorkflowEditor")]
struct WorkflowEditorPy {
    editor: Editor,
}

#[pymethods]
impl WorkflowEditorPy {
    /// Creates a new editor.
    ///
    /// Args:
    ///     spacing (float, optional): Vertical distance between nodes.
    ///     center_x (float, optional): Horizontal center of the chain.
    #[new]
    #[pyo3(signature = (spacing=None, center_x=None))]
    fn new(spacing: Option<f64>, center_x: Option<f64>) -> Self {
        let mut config = LayoutConfig::default();
        if let Some(spacing) = spacing {
            config.spacing = spacing;
        }
        if let Some(center_x) = center_x {
            config.center_x = center_x;
        }
        WorkflowEditorPy {
            editor: Editor::new(config),
        }
    }

    /// Inserts an action at an insert point.
    ///
    /// Returns:
    ///     str | None: The id of the new action, or None if `point_id` is not an
    ///         insert point.
    fn insert(&mut self, point_id: &str) -> Option<String> {
        self.editor
            .insert_action_at(point_id)
            .map(|insertion| insertion.action)
    }

    /// Deletes an action. Returns False if `action_id` is not an action.
    fn delete(&mut self, action_id: &str) -> bool {
        self.editor.delete_action(action_id)
    }

    /// Renames an action. An empty label restores the generated default.
    fn rename(&mut self, action_id: &str, label: &str) -> bool {
        self.editor.rename_action(action_id, label)
    }

    /// Replaces an action's fields with a list of `(name, value)` tuples.
    fn update_fields(&mut self, action_id: &str, fields: Vec<(String, String)>) -> bool {
        let fields = fields
            .into_iter()
            .map(|(name, value)| Field::new(name, value))
            .collect();
        self.editor.update_fields(action_id, fields)
    }

    fn open_editor(&mut self, action_id: &str) -> bool {
        self.editor.open_editor(action_id)
    }

    fn save_editor(&mut self) -> bool {
        self.editor.save_editor()
    }

    fn cancel_editor(&mut self) -> bool {
        self.editor.cancel_editor()
    }

    /// Dispatches an event given in its JSON form, e.g.
    /// `{"op": "insertPointActivated", "pointId": "insert-1"}`.
    ///
    /// Raises:
    ///     ValueError: If the JSON is not a valid editor event.
    fn dispatch_json(&mut self, event_json: &str) -> PyResult<bool> {
        let event: EditorEvent = serde_json::from_str(event_json)
            .map_err(|e| PyErr::new::<pyo3::exceptions::PyValueError, _>(e.to_string()))?;
        Ok(self.editor.dispatch(event))
    }

    /// Runs the pending relayout. Returns True if one was pending.
    fn tick(&mut self) -> bool {
        self.editor.tick()
    }

    /// Checks every structural invariant of the current chain.
    fn is_valid(&self) -> bool {
        self.editor.sequence().is_valid()
    }

    /// Returns the current render frame as a JSON string.
    ///
    /// Raises:
    ///     RuntimeError: If the frame cannot be serialized.
    fn frame_json(&self) -> PyResult<String> {
        self.editor
            .frame()
            .to_json_pretty()
            .map_err(|e| PyErr::new::<pyo3::exceptions::PyRuntimeError, _>(e.to_string()))
    }
}

/// An invariant-preserving editor core for strictly linear workflows.
#[pymodule]
fn flowline(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<WorkflowEditorPy>()?;
    Ok(())
}
