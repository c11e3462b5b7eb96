//! Derived geometry, default labels and edges for a workflow sequence.
//!
//! Nothing produced here is authoritative: positions, `"Action N"` defaults and the
//! edge list are a pure projection of the node order, so running the engine twice
//! yields the same result.

use crate::model::{Node, Position, WorkflowSequence};
use itertools::Itertools;
use serde::{Deserialize, Serialize};

/// Canvas geometry used when positioning nodes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LayoutConfig {
    /// Horizontal center shared by every node.
    pub center_x: f64,
    /// Vertical position of the `Start` node.
    pub origin_y: f64,
    /// Vertical distance between consecutive nodes.
    pub spacing: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            center_x: 300.0,
            origin_y: 50.0,
            spacing: 120.0,
        }
    }
}

/// A connection between two adjacent nodes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    pub source: String,
    pub target: String,
}

impl Edge {
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
        }
    }

    /// Stable identifier handed to renderers.
    pub fn id(&self) -> String {
        format!("e-{}-{}", self.source, self.target)
    }
}

/// The outcome of a relayout: the positioned sequence and its chain edges.
#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    pub sequence: WorkflowSequence,
    pub edges: Vec<Edge>,
}

#[derive(Debug, Clone, Default)]
pub struct LayoutEngine {
    config: LayoutConfig,
}

impl LayoutEngine {
    pub fn new(config: LayoutConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Positions, relabels and connects `sequence`, returning the result.
    pub fn relayout(&self, mut sequence: WorkflowSequence) -> Layout {
        let edges = self.apply(&mut sequence);
        Layout { sequence, edges }
    }

    /// In-place form of [`relayout`](Self::relayout). Returns the rebuilt edge list.
    ///
    /// Actions are numbered by their position in the chain, not by creation order.
    /// Every action gets its fresh default stored, but only non-custom actions have
    /// their visible label replaced by it.
    pub fn apply(&self, sequence: &mut WorkflowSequence) -> Vec<Edge> {
        let mut counter = 1;
        for (index, node) in sequence.nodes_mut().iter_mut().enumerate() {
            node.position = self.position_for(index);
            if node.is_action() {
                node.default_label = default_label(counter);
                counter += 1;
                if !node.is_custom_label {
                    node.label = node.default_label.clone();
                }
            }
        }
        chain_edges(sequence.nodes())
    }

    pub fn position_for(&self, index: usize) -> Position {
        Position {
            x: self.config.center_x,
            y: self.config.origin_y + index as f64 * self.config.spacing,
        }
    }
}

/// The generated label for the `n`-th action (1-based).
pub fn default_label(n: usize) -> String {
    format!("Action {}", n)
}

/// One edge per adjacent pair, in sequence order.
pub fn chain_edges(nodes: &[Node]) -> Vec<Edge> {
    nodes
        .iter()
        .tuple_windows()
        .map(|(a, b)| Edge::new(a.id.clone(), b.id.clone()))
        .collect()
}
