//! # Flowline - Linear Workflow Editor Core
//!
//! **Flowline** is the editing core behind a visual builder for strictly linear
//! workflows. A workflow always reads `Start`, then any number of `Action` steps, then
//! `End`, with an `InsertPoint` between every pair of neighbours so the user can add a
//! step anywhere. Flowline owns that chain and guarantees it stays well-formed no
//! matter which order UI events arrive in.
//!
//! ## Core Workflow
//!
//! The crate is renderer-agnostic. A host (a desktop shell, a web bridge, the bundled
//! CLI or Python bindings) drives it like this:
//!
//! 1.  **Create an `Editor`**: It starts from the canonical `[Start, InsertPoint, End]` chain.
//! 2.  **Dispatch events**: Every gesture the renderer observes becomes an `EditorEvent`.
//!     Unknown or stale ids are ignored, never panicking.
//! 3.  **Tick**: Structural edits only *request* a relayout. Calling `tick` recomputes
//!     positions, `"Action N"` labels and chain edges from the current sequence.
//! 4.  **Render**: `Editor::frame` produces a serializable `RenderFrame` for the renderer.
//!
//! ## Quick Start
//!
//! ```rust
//! use flowline::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let mut editor = Editor::new(LayoutConfig::default());
//!
//!     // The renderer reports a click on the only insert point.
//!     let point = editor.frame().nodes[1].clone();
//!     let event = point.on_activate().ok_or("not an insert point")?;
//!     editor.dispatch(event);
//!     editor.tick();
//!
//!     let frame = editor.frame();
//!     let action = frame.nodes.iter().find(|n| n.kind == NodeKind::Action).ok_or("no action")?;
//!     assert_eq!(action.label.as_deref(), Some("Action 1"));
//!
//!     // Rename it through the node's inline callback slot.
//!     let rename = action.on_rename("Send welcome email").ok_or("not an action")?;
//!     editor.dispatch(rename);
//!     editor.tick();
//!
//!     assert!(editor.sequence().is_valid());
//!     println!("{}", editor.frame());
//!     Ok(())
//! }
//! ```

pub mod editor;
pub mod error;
pub mod layout;
pub mod model;
pub mod mutation;
pub mod prelude;
pub mod render;
pub mod script;
pub mod session;

#[cfg(feature = "python-bindings")]
mod python;
