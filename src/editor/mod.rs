use crate::layout::{Edge, LayoutConfig, LayoutEngine};
use crate::model::{Field, IdGenerator, WorkflowSequence};
use crate::mutation::{self, Insertion};
use crate::render::{RenderEdge, RenderFrame, RenderNode};
use crate::session::EditingSession;

mod event;
mod shared;

pub use event::EditorEvent;
pub use shared::SharedEditor;

/// The single owner of a workflow being edited.
///
/// The editor holds the sequence, the id generator, the drawer session and the
/// derived edges. Mutations apply immediately but only *request* a relayout; the
/// relayout itself runs on the next [`tick`](Self::tick) and always works on the
/// sequence as it is at that moment, so a burst of edits settles into one
/// consistent layout.
#[derive(Debug)]
pub struct Editor {
    sequence: WorkflowSequence,
    ids: IdGenerator,
    session: EditingSession,
    engine: LayoutEngine,
    edges: Vec<Edge>,
    manual_edges: Vec<Edge>,
    relayout_pending: bool,
    revision: u64,
}

impl Editor {
    /// Creates an editor holding the canonical `[Start, InsertPoint, End]` chain,
    /// already laid out.
    pub fn new(config: LayoutConfig) -> Self {
        let mut ids = IdGenerator::new();
        let sequence = WorkflowSequence::initial(&mut ids);
        let mut editor = Self {
            sequence,
            ids,
            session: EditingSession::new(),
            engine: LayoutEngine::new(config),
            edges: Vec::new(),
            manual_edges: Vec::new(),
            relayout_pending: true,
            revision: 0,
        };
        editor.tick();
        editor
    }

    pub fn sequence(&self) -> &WorkflowSequence {
        &self.sequence
    }

    /// Chain edges as of the last relayout.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn manual_edges(&self) -> &[Edge] {
        &self.manual_edges
    }

    pub fn session(&self) -> &EditingSession {
        &self.session
    }

    /// Access to the drawer's working copy. Edits made here stay uncommitted until
    /// [`save_editor`](Self::save_editor).
    pub fn session_mut(&mut self) -> &mut EditingSession {
        &mut self.session
    }

    pub fn layout_config(&self) -> &LayoutConfig {
        self.engine.config()
    }

    pub fn is_relayout_pending(&self) -> bool {
        self.relayout_pending
    }

    /// Bumped on every change to the sequence.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Returns to the canonical three-node chain and closes the drawer. Ids keep
    /// counting from where they were, so no id is ever handed out twice.
    pub fn reset(&mut self) {
        self.sequence = WorkflowSequence::initial(&mut self.ids);
        self.session.cancel();
        self.manual_edges.clear();
        self.mark_changed();
        log::info!("Workflow reset to its initial state");
    }

    pub fn insert_action_at(&mut self, point_id: &str) -> Option<Insertion> {
        let insertion = mutation::insert_action_at(&mut self.sequence, &mut self.ids, point_id)?;
        self.mark_changed();
        Some(insertion)
    }

    pub fn delete_action(&mut self, action_id: &str) -> bool {
        let deleted = mutation::delete_action(&mut self.sequence, &mut self.ids, action_id);
        self.mark_changed_if(deleted)
    }

    pub fn rename_action(&mut self, action_id: &str, label: &str) -> bool {
        let renamed = mutation::rename_action(&mut self.sequence, action_id, label);
        self.mark_changed_if(renamed)
    }

    pub fn update_fields(&mut self, action_id: &str, fields: Vec<Field>) -> bool {
        let updated = mutation::update_fields(&mut self.sequence, action_id, fields);
        self.mark_changed_if(updated)
    }

    pub fn open_editor(&mut self, action_id: &str) -> bool {
        self.session.open(&self.sequence, action_id)
    }

    pub fn save_editor(&mut self) -> bool {
        let saved = self.session.save(&mut self.sequence);
        self.mark_changed_if(saved)
    }

    pub fn cancel_editor(&mut self) -> bool {
        self.session.cancel()
    }

    pub fn delete_from_editor(&mut self) -> bool {
        let deleted = self.session.delete(&mut self.sequence, &mut self.ids);
        self.mark_changed_if(deleted)
    }

    /// Records a user-drawn connection between two existing nodes.
    ///
    /// Manual edges are an overlay: they never touch the sequence and are dropped by
    /// the next relayout.
    pub fn connect(&mut self, source: &str, target: &str) -> bool {
        if source == target
            || self.sequence.get(source).is_none()
            || self.sequence.get(target).is_none()
        {
            log::debug!("Ignoring connection '{}' -> '{}'", source, target);
            return false;
        }
        log::warn!(
            "Manual connection '{}' -> '{}' is not part of the chain and will be discarded on the next relayout",
            source,
            target
        );
        self.manual_edges.push(Edge::new(source, target));
        true
    }

    /// Routes a renderer or drawer event to the matching operation. Returns whether
    /// the event had any effect.
    pub fn dispatch(&mut self, event: EditorEvent) -> bool {
        log::debug!("Dispatching {:?}", event);
        match event {
            EditorEvent::InsertPointActivated { point_id } => {
                self.insert_action_at(&point_id).is_some()
            }
            EditorEvent::DeleteAction { id } => self.delete_action(&id),
            EditorEvent::RenameAction { id, label } => self.rename_action(&id, &label),
            EditorEvent::OpenEditor { id } => self.open_editor(&id),
            EditorEvent::EditorSave { label, fields } => {
                let Some(copy) = self.session.working_copy() else {
                    return false;
                };
                let label = label.unwrap_or_else(|| copy.label.clone());
                let fields = fields.unwrap_or_else(|| copy.fields.clone());
                self.session.stage(label, fields);
                self.save_editor()
            }
            EditorEvent::EditorDelete => self.delete_from_editor(),
            EditorEvent::EditorCancel => self.cancel_editor(),
            EditorEvent::Connect { source, target } => self.connect(&source, &target),
        }
    }

    /// Runs the pending relayout, if any, against the current sequence.
    pub fn tick(&mut self) -> bool {
        if !self.relayout_pending {
            return false;
        }
        self.relayout_pending = false;
        self.edges = self.engine.apply(&mut self.sequence);
        self.manual_edges.clear();
        log::debug!(
            "Relayout of revision {}: {} nodes, {} actions",
            self.revision,
            self.sequence.len(),
            self.sequence.action_count()
        );
        true
    }

    pub fn frame(&self) -> RenderFrame {
        let edges = self
            .edges
            .iter()
            .map(|e| RenderEdge::from_edge(e, false))
            .chain(self.manual_edges.iter().map(|e| RenderEdge::from_edge(e, true)))
            .collect();
        RenderFrame {
            nodes: self.sequence.nodes().iter().map(RenderNode::from_node).collect(),
            edges,
            drawer: self.session.drawer(),
        }
    }

    fn mark_changed(&mut self) {
        self.revision += 1;
        self.relayout_pending = true;
    }

    fn mark_changed_if(&mut self, changed: bool) -> bool {
        if changed {
            self.mark_changed();
        }
        changed
    }
}

impl Default for Editor {
    fn default() -> Self {
        Self::new(LayoutConfig::default())
    }
}
