//! The canonical family-home topology as declarative tables.
//!
//! The builder walks these tables; it has no per-room construction code.
//! Swapping in a different arrangement means swapping these tables.
//!
//! Layout for the 10 m x 15 m reference site: living room at the front with
//! the kitchen beside it, two bathrooms between the kitchen and the sleeping
//! band, three bedrooms across the back starting at y = 3500.

use crate::models::{DoorKind, RoomCategory};

/// Placement of one furniture item relative to its room origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FurnitureSpec {
    /// Archetype id within the room's furniture category
    pub archetype: &'static str,
    /// Offset along x
    pub x: u32,
    /// Offset along y
    pub y: u32,
    /// Kind override; archetype kind when `None`
    pub kind: Option<&'static str>,
    /// Bounding-box override (width, depth, height); archetype box when `None`
    pub size: Option<(u32, u32, u32)>,
}

impl FurnitureSpec {
    /// Places an archetype at the given offset with its catalog attributes.
    #[must_use]
    pub const fn place(archetype: &'static str, x: u32, y: u32) -> Self {
        Self {
            archetype,
            x,
            y,
            kind: None,
            size: None,
        }
    }

    /// Overrides the catalog bounding box.
    #[must_use]
    pub const fn with_size(mut self, width: u32, depth: u32, height: u32) -> Self {
        self.size = Some((width, depth, height));
        self
    }

    /// Overrides the catalog kind.
    #[must_use]
    pub const fn with_kind(mut self, kind: &'static str) -> Self {
        self.kind = Some(kind);
        self
    }
}

/// Placement of one room in site coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoomSpec {
    /// Room id
    pub id: &'static str,
    /// Room category; height and colors come from its archetype
    pub category: RoomCategory,
    /// Origin x
    pub x: u32,
    /// Origin y
    pub y: u32,
    /// Extent along x
    pub width: u32,
    /// Extent along y
    pub depth: u32,
    /// Furniture in placement order
    pub furniture: &'static [FurnitureSpec],
}

/// An interior partition segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PartitionSpec {
    /// Start x
    pub x1: u32,
    /// Start y
    pub y1: u32,
    /// End x
    pub x2: u32,
    /// End y
    pub y2: u32,
}

/// A door and the two sides it connects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DoorSpec {
    /// Position x
    pub x: u32,
    /// Position y
    pub y: u32,
    /// First side label
    pub room1: &'static str,
    /// Second side label
    pub room2: &'static str,
    /// Door kind
    pub kind: DoorKind,
}

/// A window and the room it serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowSpec {
    /// Position x
    pub x: u32,
    /// Position y
    pub y: u32,
    /// Opening width
    pub width: u32,
    /// Opening height
    pub height: u32,
    /// Label of the room served
    pub room: &'static str,
}

const LIVING_FURNITURE: [FurnitureSpec; 4] = [
    FurnitureSpec::place("sofa_1", 500, 500),
    // Wall-mounted unit, shallower than the catalog stand.
    FurnitureSpec::place("tv_stand", 3000, 300).with_size(1200, 100, 500),
    FurnitureSpec::place("coffee_table", 1000, 1500),
    FurnitureSpec::place("dining_table", 500, 2500),
];

const KITCHEN_FURNITURE: [FurnitureSpec; 4] = [
    FurnitureSpec::place("kitchen_counter", 500, 500),
    FurnitureSpec::place("stove", 1000, 1200).with_kind("stove"),
    FurnitureSpec::place("sink", 1800, 1200),
    FurnitureSpec::place("refrigerator", 2800, 500),
];

const SHOWER_BATHROOM_FURNITURE: [FurnitureSpec; 3] = [
    FurnitureSpec::place("toilet", 300, 300),
    FurnitureSpec::place("sink", 1000, 300),
    FurnitureSpec::place("shower", 300, 1200),
];

const TUB_BATHROOM_FURNITURE: [FurnitureSpec; 3] = [
    FurnitureSpec::place("toilet", 300, 300),
    FurnitureSpec::place("sink", 1000, 300),
    FurnitureSpec::place("bathtub", 300, 1200),
];

const QUEEN_BEDROOM_FURNITURE: [FurnitureSpec; 3] = [
    FurnitureSpec::place("bed_queen", 500, 500),
    FurnitureSpec::place("wardrobe", 2200, 500),
    FurnitureSpec::place("nightstand", 500, 2600),
];

const DOUBLE_BEDROOM_FURNITURE: [FurnitureSpec; 3] = [
    FurnitureSpec::place("bed_double", 500, 500),
    FurnitureSpec::place("wardrobe", 2000, 500),
    FurnitureSpec::place("nightstand", 500, 2500),
];

/// Rooms in emission order.
pub const ROOMS: [RoomSpec; 7] = [
    RoomSpec {
        id: "living_1",
        category: RoomCategory::Living,
        x: 0,
        y: 0,
        width: 5000,
        depth: 3500,
        furniture: &LIVING_FURNITURE,
    },
    RoomSpec {
        id: "kitchen_1",
        category: RoomCategory::Kitchen,
        x: 5000,
        y: 0,
        width: 4000,
        depth: 2500,
        furniture: &KITCHEN_FURNITURE,
    },
    RoomSpec {
        id: "bathroom_1",
        category: RoomCategory::Bathroom,
        x: 5000,
        y: 2500,
        width: 2000,
        depth: 2000,
        furniture: &SHOWER_BATHROOM_FURNITURE,
    },
    RoomSpec {
        id: "bedroom_1",
        category: RoomCategory::Bedroom,
        x: 0,
        y: 3500,
        width: 3500,
        depth: 3000,
        furniture: &QUEEN_BEDROOM_FURNITURE,
    },
    RoomSpec {
        id: "bedroom_2",
        category: RoomCategory::Bedroom,
        x: 3500,
        y: 3500,
        width: 3500,
        depth: 3000,
        furniture: &QUEEN_BEDROOM_FURNITURE,
    },
    RoomSpec {
        id: "bedroom_3",
        category: RoomCategory::Bedroom,
        x: 7000,
        y: 3500,
        width: 3000,
        depth: 3000,
        furniture: &DOUBLE_BEDROOM_FURNITURE,
    },
    RoomSpec {
        id: "bathroom_2",
        category: RoomCategory::Bathroom,
        x: 7000,
        y: 2500,
        width: 2000,
        depth: 2000,
        furniture: &TUB_BATHROOM_FURNITURE,
    },
];

/// Interior partitions; perimeter walls are derived from the site.
#[rustfmt::skip]
pub const PARTITIONS: [PartitionSpec; 4] = [
    // Living / kitchen
    PartitionSpec { x1: 5000, y1: 0, x2: 5000, y2: 2500 },
    // Front of the bedroom band
    PartitionSpec { x1: 0, y1: 3500, x2: 10_000, y2: 3500 },
    // Bedroom 1 / bedroom 2
    PartitionSpec { x1: 3500, y1: 3500, x2: 3500, y2: 6500 },
    // Bedroom 3 side
    PartitionSpec { x1: 7000, y1: 2500, x2: 7000, y2: 6500 },
];

/// Doors in emission order.
#[rustfmt::skip]
pub const DOORS: [DoorSpec; 7] = [
    DoorSpec { x: 2500, y: 0, room1: "entrance", room2: "living", kind: DoorKind::Entrance },
    DoorSpec { x: 4500, y: 0, room1: "living", room2: "kitchen", kind: DoorKind::Interior },
    DoorSpec { x: 6000, y: 2500, room1: "kitchen", room2: "bathroom1", kind: DoorKind::Interior },
    DoorSpec { x: 1750, y: 3500, room1: "living", room2: "bedroom1", kind: DoorKind::Interior },
    DoorSpec { x: 5250, y: 3500, room1: "bathroom1", room2: "bedroom2", kind: DoorKind::Interior },
    DoorSpec { x: 8500, y: 3500, room1: "bedroom2", room2: "bedroom3", kind: DoorKind::Interior },
    DoorSpec { x: 8000, y: 2500, room1: "bedroom3", room2: "bathroom2", kind: DoorKind::Interior },
];

/// Windows in emission order.
#[rustfmt::skip]
pub const WINDOWS: [WindowSpec; 5] = [
    WindowSpec { x: 1000, y: 0, width: 1500, height: 1200, room: "living" },
    WindowSpec { x: 6000, y: 0, width: 1500, height: 1200, room: "kitchen" },
    WindowSpec { x: 500, y: 3500, width: 1200, height: 1200, room: "bedroom1" },
    WindowSpec { x: 4000, y: 3500, width: 1200, height: 1200, room: "bedroom2" },
    WindowSpec { x: 7500, y: 3500, width: 1200, height: 1200, room: "bedroom3" },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;
    use crate::models::Site;

    #[test]
    fn test_every_placement_resolves_in_catalog() {
        for room in &ROOMS {
            for spec in room.furniture {
                assert!(
                    catalog::furniture_archetype(room.category.furniture_category(), spec.archetype)
                        .is_some(),
                    "{} references unknown archetype {}",
                    room.id,
                    spec.archetype
                );
            }
        }
    }

    #[test]
    fn test_rooms_fit_reference_site() {
        let site = Site::reference();
        for room in &ROOMS {
            assert!(site.contains(room.x, room.y, room.width, room.depth), "{}", room.id);
        }
    }

    #[test]
    fn test_room_ids_unique() {
        for (i, room) in ROOMS.iter().enumerate() {
            assert!(ROOMS[i + 1..].iter().all(|other| other.id != room.id));
        }
    }

    #[test]
    fn test_only_first_door_is_entrance() {
        assert_eq!(DOORS[0].kind, DoorKind::Entrance);
        assert!(DOORS[1..].iter().all(|door| door.kind == DoorKind::Interior));
    }
}
