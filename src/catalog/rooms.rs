//! Room archetypes.

use serde::Serialize;

use crate::models::{RgbColor, RoomCategory};

/// Default attributes for one room category.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RoomArchetype {
    /// Room category
    pub category: RoomCategory,
    /// Minimum acceptable floor area in square meters
    pub min_area_m2: f64,
    /// Default extent along x (mm)
    pub width: u32,
    /// Default extent along y (mm)
    pub depth: u32,
    /// Ceiling height (mm)
    pub height: u32,
    /// Wall color
    pub color: RgbColor,
    /// Floor color
    pub floor_color: RgbColor,
    /// Window opening height (mm)
    pub window_height: u32,
}

/// Archetypes for every [`RoomCategory`], in catalog order.
pub static ROOM_ARCHETYPES: [RoomArchetype; 4] = [
    RoomArchetype {
        category: RoomCategory::Bedroom,
        min_area_m2: 10.0,
        width: 3500,
        depth: 3000,
        height: 2800,
        color: RgbColor::from_u32(0xe8f4fd),
        floor_color: RgbColor::from_u32(0xf0f8ff),
        window_height: 1200,
    },
    RoomArchetype {
        category: RoomCategory::Bathroom,
        min_area_m2: 3.0,
        width: 2000,
        depth: 2000,
        height: 2600,
        color: RgbColor::from_u32(0xf0f8ff),
        floor_color: RgbColor::from_u32(0xe6f3ff),
        window_height: 800,
    },
    RoomArchetype {
        category: RoomCategory::Kitchen,
        min_area_m2: 7.0,
        width: 4000,
        depth: 2500,
        height: 2800,
        color: RgbColor::from_u32(0xfff8dc),
        floor_color: RgbColor::from_u32(0xfff5e6),
        window_height: 1200,
    },
    RoomArchetype {
        category: RoomCategory::Living,
        min_area_m2: 14.0,
        width: 5000,
        depth: 3500,
        height: 3000,
        color: RgbColor::from_u32(0xf5f5dc),
        floor_color: RgbColor::from_u32(0xf0f0e6),
        window_height: 1200,
    },
];

/// Returns the archetype for a room category.
#[must_use]
pub fn room_archetype(category: RoomCategory) -> &'static RoomArchetype {
    match category {
        RoomCategory::Bedroom => &ROOM_ARCHETYPES[0],
        RoomCategory::Bathroom => &ROOM_ARCHETYPES[1],
        RoomCategory::Kitchen => &ROOM_ARCHETYPES[2],
        RoomCategory::Living => &ROOM_ARCHETYPES[3],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_matches_category() {
        for category in RoomCategory::ALL {
            assert_eq!(room_archetype(category).category, category);
        }
    }

    #[test]
    fn test_bathroom_defaults() {
        let bathroom = room_archetype(RoomCategory::Bathroom);
        assert_eq!(bathroom.height, 2600);
        assert_eq!(bathroom.window_height, 800);
        assert_eq!(bathroom.color.to_u32(), 0xf0f8ff);
    }

    #[test]
    fn test_default_footprint_meets_minimum() {
        for archetype in &ROOM_ARCHETYPES {
            let area = f64::from(archetype.width) * f64::from(archetype.depth) / 1_000_000.0;
            assert!(
                area >= archetype.min_area_m2,
                "{} default footprint {area} m² is below its minimum",
                archetype.category
            );
        }
    }
}
