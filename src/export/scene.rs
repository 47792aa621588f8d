//! 3D scene projection.
//!
//! Produces the Three.js-oriented scene description: a fixed camera, two
//! lights, three named materials, and one entry per room with its colors,
//! structural properties, and furniture.

use serde::{Deserialize, Serialize};

use crate::models::{Furniture, LayoutModel, RgbColor, Room, RoomCategory, StructuralProperties};

/// A point in scene space (mm).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Point3 {
    /// X coordinate
    pub x: u32,
    /// Y coordinate
    pub y: u32,
    /// Z coordinate (elevation)
    pub z: u32,
}

/// Default viewpoint.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    /// Eye position
    pub position: Point3,
    /// Look-at point
    pub target: Point3,
    /// Vertical field of view in degrees
    pub fov: u32,
}

/// Scene light source.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Light {
    /// Uniform fill light
    Ambient {
        /// Light intensity (0.0-1.0)
        intensity: f64,
        /// Light color
        color: RgbColor,
    },
    /// Sun-style light from a position
    Directional {
        /// Light position
        position: Point3,
        /// Light intensity (0.0-1.0)
        intensity: f64,
        /// Light color
        color: RgbColor,
    },
}

/// Surface material.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Material {
    /// Base color
    pub color: RgbColor,
    /// PBR roughness (0.0-1.0)
    pub roughness: f64,
}

/// The named materials shared by every room.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Materials {
    /// Floor material
    pub floor: Material,
    /// Wall material
    pub wall: Material,
    /// Ceiling material
    pub ceiling: Material,
}

/// Camera, lights, and materials.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneEnvironment {
    /// Default camera
    pub camera: Camera,
    /// Light sources
    pub lights: Vec<Light>,
    /// Shared materials
    pub materials: Materials,
}

impl Default for SceneEnvironment {
    fn default() -> Self {
        let white = RgbColor::from_u32(0xffffff);
        Self {
            camera: Camera {
                position: Point3 { x: 5000, y: 7500, z: 3000 },
                target: Point3 { x: 5000, y: 7500, z: 0 },
                fov: 60,
            },
            lights: vec![
                Light::Ambient {
                    intensity: 0.4,
                    color: white,
                },
                Light::Directional {
                    position: Point3 { x: 5000, y: 0, z: 5000 },
                    intensity: 0.8,
                    color: white,
                },
            ],
            materials: Materials {
                floor: Material {
                    color: RgbColor::from_u32(0xf5f5dc),
                    roughness: 0.8,
                },
                wall: Material {
                    color: RgbColor::from_u32(0xf0f0f0),
                    roughness: 0.9,
                },
                ceiling: Material {
                    color: white,
                    roughness: 0.7,
                },
            },
        }
    }
}

/// One room as the 3D renderer sees it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneRoom {
    /// Room id
    pub id: String,
    /// Room category
    #[serde(rename = "type")]
    pub category: RoomCategory,
    /// Origin x
    pub x: u32,
    /// Origin y
    pub y: u32,
    /// Extent along x
    pub width: u32,
    /// Extent along y
    pub depth: u32,
    /// Ceiling height
    pub height: u32,
    /// Floor area in square meters
    pub area: f64,
    /// Wall color
    pub color: RgbColor,
    /// Floor color
    pub floor_color: RgbColor,
    /// Furniture, offsets relative to the room origin
    pub furniture: Vec<Furniture>,
    /// Structural values
    #[serde(rename = "3d_properties")]
    pub properties: StructuralProperties,
}

impl From<&Room> for SceneRoom {
    fn from(room: &Room) -> Self {
        Self {
            id: room.id.clone(),
            category: room.category,
            x: room.x,
            y: room.y,
            width: room.width,
            depth: room.depth,
            height: room.height,
            area: room.area_m2(),
            color: room.color,
            floor_color: room.floor_color,
            furniture: room.furniture.clone(),
            properties: room.structure,
        }
    }
}

/// 3D projection of a layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneDocument {
    /// Camera, lights, and materials
    pub environment: SceneEnvironment,
    /// Rooms in model order
    pub rooms: Vec<SceneRoom>,
}

impl SceneDocument {
    /// Projects a layout model into a scene description.
    #[must_use]
    pub fn from_model(model: &LayoutModel) -> Self {
        Self {
            environment: SceneEnvironment::default(),
            rooms: model.rooms().iter().map(SceneRoom::from).collect(),
        }
    }
}
