//! The synthesized layout aggregate.

use crate::catalog;
use crate::models::{Door, Room, Site, Wall, Window};

/// One synthesized floor plan: site, rooms, walls, doors, and windows.
///
/// A `LayoutModel` is built once per request and read by the projection
/// encoders. Fields are private so a model cannot change after construction.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutModel {
    site: Site,
    rooms: Vec<Room>,
    walls: Vec<Wall>,
    doors: Vec<Door>,
    windows: Vec<Window>,
}

impl LayoutModel {
    /// Assembles a model from its parts.
    #[must_use]
    pub const fn new(
        site: Site,
        rooms: Vec<Room>,
        walls: Vec<Wall>,
        doors: Vec<Door>,
        windows: Vec<Window>,
    ) -> Self {
        Self {
            site,
            rooms,
            walls,
            doors,
            windows,
        }
    }

    /// The site this layout was synthesized for.
    #[must_use]
    pub const fn site(&self) -> &Site {
        &self.site
    }

    /// Rooms in topology order.
    #[must_use]
    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    /// Perimeter walls followed by interior partitions.
    #[must_use]
    pub fn walls(&self) -> &[Wall] {
        &self.walls
    }

    /// Doors.
    #[must_use]
    pub fn doors(&self) -> &[Door] {
        &self.doors
    }

    /// Windows.
    #[must_use]
    pub fn windows(&self) -> &[Window] {
        &self.windows
    }

    /// Number of rooms.
    #[must_use]
    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }

    /// Total number of furniture items across all rooms.
    #[must_use]
    pub fn furniture_count(&self) -> usize {
        self.rooms.iter().map(|room| room.furniture.len()).sum()
    }

    /// Looks up a room by id.
    #[must_use]
    pub fn room(&self, id: &str) -> Option<&Room> {
        self.rooms.iter().find(|room| room.id == id)
    }

    /// Ids of rooms whose rectangle extends past the site boundary.
    ///
    /// The fixed topology is only guaranteed to fit the reference site; for
    /// smaller sites rooms are reported here rather than clamped.
    #[must_use]
    pub fn rooms_outside_site(&self) -> Vec<&str> {
        self.rooms
            .iter()
            .filter(|room| !self.site.contains(room.x, room.y, room.width, room.depth))
            .map(|room| room.id.as_str())
            .collect()
    }

    /// Ids of rooms smaller than their archetype's minimum area.
    #[must_use]
    pub fn undersized_rooms(&self) -> Vec<&str> {
        self.rooms
            .iter()
            .filter(|room| room.area_m2() < catalog::room_archetype(room.category).min_area_m2)
            .map(|room| room.id.as_str())
            .collect()
    }
}
