//! Service layer for layout synthesis.
//!
//! This module holds the declarative topology, the builder that turns it into
//! a [`LayoutModel`](crate::models::LayoutModel), and the assembly step that
//! bundles both projections into a response.

pub mod assembly;
pub mod builder;
pub mod topology;

// Re-export commonly used types and functions
pub use assembly::{synthesize, GenerateLayoutRequest, LayoutResponse};
pub use builder::{build_layout, LayoutBuilder, RoomRequest};
