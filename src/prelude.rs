//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types from the flowline crate.
//! Import this module to get access to the core functionality without having to import
//! each type individually.
//!
//! # Example
//!
//! ```rust,no_run
//! use flowline::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! let script = EditScript::from_file("path/to/script.json")?;
//! let mut editor = script.editor();
//! let report = script.replay(&mut editor);
//!
//! println!("{} events applied", report.applied);
//! println!("{}", editor.frame());
//! # Ok(())
//! # }
//! ```

// Editing core
pub use crate::editor::{Editor, EditorEvent, SharedEditor};
pub use crate::layout::{Edge, Layout, LayoutConfig, LayoutEngine};
pub use crate::mutation::{
    Insertion, delete_action, insert_action_at, rename_action, update_fields,
};
pub use crate::session::{DrawerView, EditingSession, SessionState, WorkingCopy};

// Data model
pub use crate::model::{Field, IdGenerator, Node, NodeKind, Position, WorkflowSequence};

// Renderer boundary and scripting
pub use crate::render::{RenderEdge, RenderFrame, RenderNode};
pub use crate::script::{EditScript, ReplayReport};

// Error types
pub use crate::error::{InvariantError, ScriptError};

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
