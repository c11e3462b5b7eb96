use super::{Editor, EditorEvent};
use crate::render::RenderFrame;
use parking_lot::Mutex;
use std::sync::Arc;

/// A cloneable handle that serializes every access to one [`Editor`].
///
/// Hosts that deliver UI events from several threads route them all through this
/// handle, which preserves the single-owner ordering: each event and each tick
/// runs to completion before the next one starts.
#[derive(Debug, Clone)]
pub struct SharedEditor {
    inner: Arc<Mutex<Editor>>,
}

impl SharedEditor {
    pub fn new(editor: Editor) -> Self {
        Self {
            inner: Arc::new(Mutex::new(editor)),
        }
    }

    pub fn dispatch(&self, event: EditorEvent) -> bool {
        self.inner.lock().dispatch(event)
    }

    pub fn tick(&self) -> bool {
        self.inner.lock().tick()
    }

    pub fn frame(&self) -> RenderFrame {
        self.inner.lock().frame()
    }

    /// Runs `f` with exclusive access, so a read of the current state and the
    /// write based on it happen as one step.
    pub fn with<R>(&self, f: impl FnOnce(&mut Editor) -> R) -> R {
        let mut editor = self.inner.lock();
        f(&mut editor)
    }
}

impl Default for SharedEditor {
    fn default() -> Self {
        Self::new(Editor::default())
    }
}
