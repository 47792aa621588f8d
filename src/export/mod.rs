//! Output projections for synthesized layouts.
//!
//! Each projection is a pure mapping from a [`LayoutModel`](crate::models::LayoutModel)
//! to an owned, serializable document. Projections never share output
//! buffers, so one can be modified without affecting another built from the
//! same model.

pub mod editor;
pub mod scene;

pub use editor::{EditorDocument, EditorElement, EditorLayer, EditorScene};
pub use scene::{SceneDocument, SceneEnvironment, SceneRoom};
