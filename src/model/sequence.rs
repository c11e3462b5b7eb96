use super::{IdGenerator, Node, NodeKind};
use crate::error::InvariantError;
use ahash::AHashSet;
use itertools::Itertools;
use serde::{Deserialize, Serialize};

/// The ordered chain of nodes making up a workflow.
///
/// A valid sequence always reads `Start, (InsertPoint, Action)*, InsertPoint, End`.
/// The sequence itself offers no structural edits; those live in
/// [`crate::mutation`], which keeps the invariants checked by [`validate`].
///
/// [`validate`]: WorkflowSequence::validate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkflowSequence {
    nodes: Vec<Node>,
}

impl WorkflowSequence {
    /// The canonical starting state: `[Start, InsertPoint, End]`.
    pub fn initial(ids: &mut IdGenerator) -> Self {
        let nodes = [NodeKind::Start, NodeKind::InsertPoint, NodeKind::End]
            .into_iter()
            .map(|kind| Node::new(ids.next_id(kind), kind))
            .collect();
        Self { nodes }
    }

    /// Wraps an arbitrary node list without checking it.
    pub fn from_nodes(nodes: Vec<Node>) -> Self {
        Self { nodes }
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn into_nodes(self) -> Vec<Node> {
        self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id == id)
    }

    pub fn position_of(&self, id: &str) -> Option<usize> {
        self.nodes.iter().position(|n| n.id == id)
    }

    /// The node kinds in sequence order. Two sequences with equal kinds are
    /// structurally equal.
    pub fn kinds(&self) -> Vec<NodeKind> {
        self.nodes.iter().map(|n| n.kind).collect()
    }

    pub fn actions(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter().filter(|n| n.is_action())
    }

    pub fn insert_points(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter().filter(|n| n.is_insert_point())
    }

    pub fn action_count(&self) -> usize {
        self.actions().count()
    }

    pub(crate) fn nodes_mut(&mut self) -> &mut Vec<Node> {
        &mut self.nodes
    }

    pub(crate) fn get_mut(&mut self, id: &str) -> Option<&mut Node> {
        self.nodes.iter_mut().find(|n| n.id == id)
    }

    /// Checks every structural invariant and reports the first one broken.
    pub fn validate(&self) -> Result<(), InvariantError> {
        let first = self.nodes.first().ok_or(InvariantError::EmptySequence)?;
        if first.kind != NodeKind::Start {
            return Err(InvariantError::MissingStart { found: first.kind });
        }
        let last_index = self.nodes.len() - 1;
        let last = &self.nodes[last_index];
        if last.kind != NodeKind::End {
            return Err(InvariantError::MissingEnd { found: last.kind });
        }

        for (index, node) in self.nodes.iter().enumerate() {
            let misplaced = match node.kind {
                NodeKind::Start => index != 0,
                NodeKind::End => index != last_index,
                _ => false,
            };
            if misplaced {
                return Err(InvariantError::MisplacedTerminal {
                    node_id: node.id.clone(),
                    kind: node.kind,
                    index,
                });
            }
        }

        for (a, b) in self.nodes.iter().tuple_windows() {
            if a.kind == b.kind && matches!(a.kind, NodeKind::InsertPoint | NodeKind::Action) {
                return Err(InvariantError::AdjacentKinds {
                    first: a.id.clone(),
                    second: b.id.clone(),
                    kind: a.kind,
                });
            }
            let (action, neighbor) = match (a.kind, b.kind) {
                (NodeKind::Action, NodeKind::Start | NodeKind::End) => (a, b),
                (NodeKind::Start | NodeKind::End, NodeKind::Action) => (b, a),
                _ => continue,
            };
            return Err(InvariantError::UnseparatedAction {
                node_id: action.id.clone(),
                neighbor_id: neighbor.id.clone(),
                neighbor: neighbor.kind,
            });
        }

        let mut seen = AHashSet::with_capacity(self.nodes.len());
        for node in &self.nodes {
            if !seen.insert(node.id.as_str()) {
                return Err(InvariantError::DuplicateId(node.id.clone()));
            }
        }

        Ok(())
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }
}
