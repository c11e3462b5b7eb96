//! The boundary handed to an external renderer.
//!
//! A [`RenderFrame`] is a read-only projection of the editor. Renderers never mutate
//! it; user gestures travel back as [`EditorEvent`]s built by the callback helpers on
//! [`RenderNode`].

use crate::editor::EditorEvent;
use crate::layout::Edge;
use crate::model::{Field, Node, NodeKind, Position};
use crate::session::DrawerView;
use serde::Serialize;
use std::fmt;

/// Shown for an action whose label is empty.
pub const UNNAMED_ACTION: &str = "Unnamed Action";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderNode {
    pub id: String,
    pub kind: NodeKind,
    /// Present only for action nodes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Present only for action nodes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<Vec<Field>>,
    pub position: Position,
}

impl RenderNode {
    pub fn from_node(node: &Node) -> Self {
        let (label, fields) = if node.is_action() {
            let label = if node.label.is_empty() {
                UNNAMED_ACTION.to_string()
            } else {
                node.label.clone()
            };
            (Some(label), Some(node.fields.clone()))
        } else {
            (None, None)
        };
        Self {
            id: node.id.clone(),
            kind: node.kind,
            label,
            fields,
            position: node.position,
        }
    }

    /// The `onDelete` slot. Only action nodes carry it.
    pub fn on_delete(&self) -> Option<EditorEvent> {
        (self.kind == NodeKind::Action).then(|| EditorEvent::DeleteAction {
            id: self.id.clone(),
        })
    }

    /// The `onRename` slot. Only action nodes carry it.
    pub fn on_rename(&self, new_label: impl Into<String>) -> Option<EditorEvent> {
        (self.kind == NodeKind::Action).then(|| EditorEvent::RenameAction {
            id: self.id.clone(),
            label: new_label.into(),
        })
    }

    /// Clicking an action opens it in the drawer.
    pub fn on_select(&self) -> Option<EditorEvent> {
        (self.kind == NodeKind::Action).then(|| EditorEvent::OpenEditor {
            id: self.id.clone(),
        })
    }

    /// Activating an insert point asks for a new action there.
    pub fn on_activate(&self) -> Option<EditorEvent> {
        (self.kind == NodeKind::InsertPoint).then(|| EditorEvent::InsertPointActivated {
            point_id: self.id.clone(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderEdge {
    pub id: String,
    pub source: String,
    pub target: String,
    /// Drawn by the user rather than derived from the chain.
    pub manual: bool,
}

impl RenderEdge {
    pub fn from_edge(edge: &Edge, manual: bool) -> Self {
        Self {
            id: edge.id(),
            source: edge.source.clone(),
            target: edge.target.clone(),
            manual,
        }
    }
}

/// Everything a renderer needs to draw the current state.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderFrame {
    pub nodes: Vec<RenderNode>,
    pub edges: Vec<RenderEdge>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub drawer: Option<DrawerView>,
}

impl RenderFrame {
    pub fn node(&self, id: &str) -> Option<&RenderNode> {
        self.nodes.iter().find(|n| n.id == id)
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl fmt::Display for RenderFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for node in &self.nodes {
            let text = match node.kind {
                NodeKind::Start => "Start".to_string(),
                NodeKind::End => "End".to_string(),
                NodeKind::InsertPoint => "+".to_string(),
                NodeKind::Action => node.label.clone().unwrap_or_default(),
            };
            write!(f, "[{:>6}] {:<12} {}", node.position.y, node.id, text)?;
            if let Some(fields) = node.fields.as_ref().filter(|fields| !fields.is_empty()) {
                let fields: Vec<String> = fields.iter().map(ToString::to_string).collect();
                write!(f, "  ({})", fields.join(", "))?;
            }
            writeln!(f)?;
        }
        for edge in self.edges.iter().filter(|e| e.manual) {
            writeln!(f, "manual edge: {} -> {}", edge.source, edge.target)?;
        }
        if let Some(drawer) = &self.drawer {
            writeln!(f, "editing: {} ('{}')", drawer.node_id, drawer.label)?;
        }
        Ok(())
    }
}
