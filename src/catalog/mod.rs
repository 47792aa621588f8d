//! Static room and furniture catalogs.
//!
//! Catalogs are `static` tables compiled into the binary. They are read-only
//! for the life of the process and can be shared across threads freely.

pub mod furniture;
pub mod rooms;

pub use furniture::{
    furniture_archetype, furniture_in_category, FurnitureArchetype, FURNITURE_ARCHETYPES,
    FURNITURE_CATEGORIES,
};
pub use rooms::{room_archetype, RoomArchetype, ROOM_ARCHETYPES};
