use crate::editor::{Editor, EditorEvent};
use crate::error::{InvariantError, ScriptError};
use crate::layout::LayoutConfig;
use serde::{Deserialize, Serialize};
use std::fs;

/// A recorded list of editor events, replayable against a fresh [`Editor`].
///
/// The JSON form is an object with an `events` array, each entry tagged by `op`:
///
/// ```json
/// {
///   "events": [
///     { "op": "insertPointActivated", "pointId": "insert-1" },
///     { "op": "renameAction", "id": "action-3", "label": "Send email" }
///   ]
/// }
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct EditScript {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layout: Option<LayoutConfig>,
    #[serde(default)]
    pub events: Vec<EditorEvent>,
}

/// What happened while replaying a script.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReplayReport {
    /// Events that changed something.
    pub applied: usize,
    /// Events that resolved to a no-op.
    pub ignored: usize,
    /// Invariant failures observed after a tick, keyed by event index.
    pub violations: Vec<(usize, InvariantError)>,
}

impl ReplayReport {
    pub fn is_clean(&self) -> bool {
        self.violations.is_empty()
    }
}

impl EditScript {
    pub fn new(events: Vec<EditorEvent>) -> Self {
        Self {
            layout: None,
            events,
        }
    }

    /// Load an edit script from a JSON file.
    pub fn from_file(path: &str) -> Result<Self, ScriptError> {
        let content = fs::read_to_string(path).map_err(|source| ScriptError::Io {
            path: path.to_string(),
            source,
        })?;
        Self::from_json(&content)
    }

    pub fn from_json(json: &str) -> Result<Self, ScriptError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json_pretty(&self) -> Result<String, ScriptError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// A new editor using the script's layout, or the default one.
    pub fn editor(&self) -> Editor {
        Editor::new(self.layout.unwrap_or_default())
    }

    /// Dispatches every event in order, ticking after each one like an event loop
    /// would, and checks the sequence invariants after every tick.
    pub fn replay(&self, editor: &mut Editor) -> ReplayReport {
        let mut report = ReplayReport::default();
        for (index, event) in self.events.iter().enumerate() {
            if editor.dispatch(event.clone()) {
                report.applied += 1;
            } else {
                report.ignored += 1;
            }
            editor.tick();
            if let Err(violation) = editor.sequence().validate() {
                log::warn!("Invariant broken after event {}: {}", index, violation);
                report.violations.push((index, violation));
            }
        }
        log::info!(
            "Replayed {} events ({} applied, {} ignored)",
            self.events.len(),
            report.applied,
            report.ignored
        );
        report
    }
}
