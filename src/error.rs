use crate::model::NodeKind;
use thiserror::Error;

/// Structural violations detected when validating a `WorkflowSequence`.
///
/// These never surface from editing operations, which are total over ids. They exist
/// so tests and diagnostics can name exactly which rule a sequence breaks.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvariantError {
    #[error("Workflow sequence is empty")]
    EmptySequence,

    #[error("Expected a Start node at index 0, but found {found}")]
    MissingStart { found: NodeKind },

    #[error("Expected an End node at the last index, but found {found}")]
    MissingEnd { found: NodeKind },

    #[error("Unexpected {kind} node '{node_id}' at index {index}")]
    MisplacedTerminal {
        node_id: String,
        kind: NodeKind,
        index: usize,
    },

    #[error("Nodes '{first}' and '{second}' are adjacent {kind} nodes")]
    AdjacentKinds {
        first: String,
        second: String,
        kind: NodeKind,
    },

    #[error("Action node '{node_id}' is directly connected to {neighbor} node '{neighbor_id}'")]
    UnseparatedAction {
        node_id: String,
        neighbor_id: String,
        neighbor: NodeKind,
    },

    #[error("Node id '{0}' is used more than once")]
    DuplicateId(String),
}

/// Errors that can occur while loading or parsing an edit script.
#[derive(Error, Debug)]
pub enum ScriptError {
    #[error("Could not read edit script '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse edit script JSON: {0}")]
    JsonParseError(#[from] serde_json::Error),
}
