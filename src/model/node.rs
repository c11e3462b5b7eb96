use serde::{Deserialize, Serialize};
use std::fmt;

/// The four roles a node can play in a linear workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum NodeKind {
    Start,
    End,
    InsertPoint,
    Action,
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeKind::Start => write!(f, "Start"),
            NodeKind::End => write!(f, "End"),
            NodeKind::InsertPoint => write!(f, "InsertPoint"),
            NodeKind::Action => write!(f, "Action"),
        }
    }
}

/// A single `(name, value)` pair configured on an action.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Field {
    pub name: String,
    pub value: String,
}

impl Field {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.value)
    }
}

/// Canvas coordinates. Derived by the layout engine, never authoritative.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

/// A node in the workflow sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Node {
    pub id: String,
    pub kind: NodeKind,
    /// Visible label. Only meaningful for `Action` nodes.
    pub label: String,
    /// Set when the user chose a label other than the generated default.
    pub is_custom_label: bool,
    /// The `"Action N"` label computed by the last relayout.
    pub default_label: String,
    pub fields: Vec<Field>,
    pub position: Position,
}

impl Node {
    pub fn new(id: impl Into<String>, kind: NodeKind) -> Self {
        Self {
            id: id.into(),
            kind,
            label: String::new(),
            is_custom_label: false,
            default_label: String::new(),
            fields: Vec::new(),
            position: Position::default(),
        }
    }

    pub fn is_action(&self) -> bool {
        self.kind == NodeKind::Action
    }

    pub fn is_insert_point(&self) -> bool {
        self.kind == NodeKind::InsertPoint
    }
}
