//! Walls, doors, and windows.
//!
//! These are descriptive records for the renderers. Doors and windows are
//! not validated against wall geometry.

use serde::{Deserialize, Serialize};

/// A straight wall segment in site coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Wall {
    /// Start x
    pub x1: u32,
    /// Start y
    pub y1: u32,
    /// End x
    pub x2: u32,
    /// End y
    pub y2: u32,
    /// Wall height
    pub height: u32,
    /// Wall thickness
    pub thickness: u32,
}

/// Whether a door leads in from outside or between rooms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DoorKind {
    /// Main entrance from outside the building
    Entrance,
    /// Door between two rooms
    Interior,
}

/// A door connecting two rooms, or the outside and a room.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Door {
    /// Position x in site coordinates
    pub x: u32,
    /// Position y in site coordinates
    pub y: u32,
    /// Opening width
    pub width: u32,
    /// Opening height
    pub height: u32,
    /// First side label ("entrance" for the main door)
    pub room1: String,
    /// Second side label
    pub room2: String,
    /// Door kind
    #[serde(rename = "type")]
    pub kind: DoorKind,
}

/// A window serving one room.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Window {
    /// Position x in site coordinates
    pub x: u32,
    /// Position y in site coordinates
    pub y: u32,
    /// Opening width
    pub width: u32,
    /// Opening height
    pub height: u32,
    /// Label of the room served
    pub room: String,
    /// Element type tag, always "window"
    #[serde(rename = "type")]
    pub kind: String,
    /// Frame depth
    pub depth: u32,
}
