//! Data models for sites, rooms, structure, and layouts.
//!
//! This module contains the core data structures shared by the layout
//! builder and the projection encoders. Models are independent of the CLI
//! and HTTP layers.

pub mod layout;
pub mod rgb;
pub mod room;
pub mod site;
pub mod structure;

// Re-export all model types
pub use layout::LayoutModel;
pub use rgb::RgbColor;
pub use room::{Furniture, Room, RoomCategory, StructuralProperties};
pub use site::Site;
pub use structure::{Door, DoorKind, Wall, Window};
