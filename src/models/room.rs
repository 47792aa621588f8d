//! Rooms and the furniture placed inside them.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::RgbColor;

/// Square millimeters per square meter.
const MM2_PER_M2: f64 = 1_000_000.0;

/// Functional category of a room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoomCategory {
    /// Living room (lounge and dining)
    Living,
    /// Kitchen
    Kitchen,
    /// Bathroom
    Bathroom,
    /// Bedroom
    Bedroom,
}

impl RoomCategory {
    /// All categories in catalog order.
    pub const ALL: [Self; 4] = [Self::Bedroom, Self::Bathroom, Self::Kitchen, Self::Living];

    /// Lowercase identifier used on the wire (e.g. "living").
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Living => "living",
            Self::Kitchen => "kitchen",
            Self::Bathroom => "bathroom",
            Self::Bedroom => "bedroom",
        }
    }

    /// Title-cased name shown in the plan editor (e.g. "Living").
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Living => "Living",
            Self::Kitchen => "Kitchen",
            Self::Bathroom => "Bathroom",
            Self::Bedroom => "Bedroom",
        }
    }

    /// Furniture catalog category serving this room type.
    #[must_use]
    pub const fn furniture_category(&self) -> &'static str {
        match self {
            Self::Living => "living-room",
            Self::Kitchen => "kitchen",
            Self::Bathroom => "bathroom",
            Self::Bedroom => "bedroom",
        }
    }
}

impl fmt::Display for RoomCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A piece of furniture placed in a room.
///
/// Offsets are relative to the owning room's origin, not the site.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Furniture {
    /// Catalog archetype id (e.g. "sofa_1")
    pub archetype: String,
    /// Furniture kind (e.g. "sofa", "bed")
    #[serde(rename = "type")]
    pub kind: String,
    /// Offset from the room origin along x
    pub x: u32,
    /// Offset from the room origin along y
    pub y: u32,
    /// Elevation above the floor
    pub z: u32,
    /// Bounding-box width
    pub width: u32,
    /// Bounding-box depth
    pub depth: u32,
    /// Bounding-box height
    pub height: u32,
    /// Display name (e.g. "3-Seater Sofa")
    pub name: String,
    /// Rotation around the vertical axis in degrees
    pub rotation: u32,
}

/// Per-room values consumed by the 3D renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructuralProperties {
    /// Floor to ceiling height
    pub ceiling_height: u32,
    /// Wall thickness
    pub wall_thickness: u32,
    /// Window opening height
    pub window_height: u32,
    /// Door opening height
    pub door_height: u32,
}

/// A placed room instance.
#[derive(Debug, Clone, PartialEq)]
pub struct Room {
    /// Stable identifier (e.g. "bedroom_2")
    pub id: String,
    /// Room category
    pub category: RoomCategory,
    /// Origin x in site coordinates
    pub x: u32,
    /// Origin y in site coordinates
    pub y: u32,
    /// Extent along x
    pub width: u32,
    /// Extent along y
    pub depth: u32,
    /// Ceiling height
    pub height: u32,
    /// Wall color
    pub color: RgbColor,
    /// Floor color
    pub floor_color: RgbColor,
    /// Furniture in placement order
    pub furniture: Vec<Furniture>,
    /// Structural values for the 3D renderer
    pub structure: StructuralProperties,
}

impl Room {
    /// Floor area in square meters.
    #[must_use]
    pub fn area_m2(&self) -> f64 {
        f64::from(self.width) * f64::from(self.depth) / MM2_PER_M2
    }
}
