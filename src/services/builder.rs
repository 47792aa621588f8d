//! Layout model builder.
//!
//! Turns a [`Site`] into a [`LayoutModel`] by walking the topology tables.
//! Room geometry is fixed; only the perimeter walls follow the site bounds.

use tracing::{debug, warn};

use crate::catalog;
use crate::constants::{
    DOOR_HEIGHT_MM, DOOR_WIDTH_MM, WALL_HEIGHT_MM, WALL_THICKNESS_MM, WINDOW_DEPTH_MM,
};
use crate::models::{
    Door, Furniture, LayoutModel, Room, Site, StructuralProperties, Wall, Window,
};
use crate::services::topology::{
    DoorSpec, FurnitureSpec, PartitionSpec, RoomSpec, WindowSpec, DOORS, PARTITIONS, ROOMS,
    WINDOWS,
};

/// Caller-supplied room wish list.
///
/// Accepted for forward compatibility and ignored by the fixed topology.
pub type RoomRequest = serde_json::Value;

/// Builds layout models from the canonical topology.
pub struct LayoutBuilder;

impl LayoutBuilder {
    /// Synthesizes the layout for a site.
    ///
    /// Always produces the seven-room topology. `room_request` is accepted and
    /// not consulted. The topology is drawn for the 10 m x 15 m reference site;
    /// on smaller sites rooms extend past the boundary and are reported through
    /// [`LayoutModel::rooms_outside_site`] instead of being clamped.
    ///
    /// # Examples
    ///
    /// ```
    /// use archsense::models::Site;
    /// use archsense::services::LayoutBuilder;
    ///
    /// let model = LayoutBuilder::build(Site::reference(), None);
    /// assert_eq!(model.room_count(), 7);
    /// assert_eq!(model.furniture_count(), 23);
    /// ```
    #[must_use]
    pub fn build(site: Site, room_request: Option<&[RoomRequest]>) -> LayoutModel {
        if let Some(requested) = room_request {
            debug!(requested = requested.len(), "room request ignored by fixed topology");
        }

        let rooms: Vec<Room> = ROOMS.iter().map(build_room).collect();
        let walls = perimeter_walls(&site)
            .into_iter()
            .chain(PARTITIONS.iter().map(partition_wall))
            .collect();
        let doors = DOORS.iter().map(build_door).collect();
        let windows = WINDOWS.iter().map(build_window).collect();

        let model = LayoutModel::new(site, rooms, walls, doors, windows);

        let outside = model.rooms_outside_site();
        if !outside.is_empty() {
            warn!(
                site_width = site.width(),
                site_depth = site.depth(),
                rooms = ?outside,
                "fixed topology extends beyond the site boundary"
            );
        }
        let undersized = model.undersized_rooms();
        if !undersized.is_empty() {
            debug!(rooms = ?undersized, "rooms below archetype minimum area");
        }

        debug!(
            site_width = site.width(),
            site_depth = site.depth(),
            rooms = model.room_count(),
            furniture = model.furniture_count(),
            walls = model.walls().len(),
            "built layout model"
        );

        model
    }
}

/// Shorthand for [`LayoutBuilder::build`] without a room request.
#[must_use]
pub fn build_layout(site: Site) -> LayoutModel {
    LayoutBuilder::build(site, None)
}

fn build_room(spec: &RoomSpec) -> Room {
    let archetype = catalog::room_archetype(spec.category);
    let furniture_category = spec.category.furniture_category();

    let furniture = spec
        .furniture
        .iter()
        .filter_map(|placement| place_furniture(furniture_category, placement))
        .collect();

    Room {
        id: spec.id.to_string(),
        category: spec.category,
        x: spec.x,
        y: spec.y,
        width: spec.width,
        depth: spec.depth,
        height: archetype.height,
        color: archetype.color,
        floor_color: archetype.floor_color,
        furniture,
        structure: StructuralProperties {
            ceiling_height: archetype.height,
            wall_thickness: WALL_THICKNESS_MM,
            window_height: archetype.window_height,
            door_height: DOOR_HEIGHT_MM,
        },
    }
}

fn place_furniture(category: &str, placement: &FurnitureSpec) -> Option<Furniture> {
    let Some(archetype) = catalog::furniture_archetype(category, placement.archetype) else {
        warn!(
            category,
            archetype = placement.archetype,
            "furniture placement references unknown archetype"
        );
        return None;
    };

    let (width, depth, height) = placement
        .size
        .unwrap_or((archetype.width, archetype.depth, archetype.height));

    Some(Furniture {
        archetype: archetype.id.to_string(),
        kind: placement.kind.unwrap_or(archetype.kind).to_string(),
        x: placement.x,
        y: placement.y,
        z: 0,
        width,
        depth,
        height,
        name: archetype.name.to_string(),
        rotation: 0,
    })
}

/// Top, right, bottom, left; each runs clockwise from its start corner.
fn perimeter_walls(site: &Site) -> [Wall; 4] {
    let (w, d) = (site.width(), site.depth());
    [
        wall(0, 0, w, 0),
        wall(w, 0, w, d),
        wall(w, d, 0, d),
        wall(0, d, 0, 0),
    ]
}

fn partition_wall(spec: &PartitionSpec) -> Wall {
    wall(spec.x1, spec.y1, spec.x2, spec.y2)
}

const fn wall(x1: u32, y1: u32, x2: u32, y2: u32) -> Wall {
    Wall {
        x1,
        y1,
        x2,
        y2,
        height: WALL_HEIGHT_MM,
        thickness: WALL_THICKNESS_MM,
    }
}

fn build_door(spec: &DoorSpec) -> Door {
    Door {
        x: spec.x,
        y: spec.y,
        width: DOOR_WIDTH_MM,
        height: DOOR_HEIGHT_MM,
        room1: spec.room1.to_string(),
        room2: spec.room2.to_string(),
        kind: spec.kind,
    }
}

fn build_window(spec: &WindowSpec) -> Window {
    Window {
        x: spec.x,
        y: spec.y,
        width: spec.width,
        height: spec.height,
        room: spec.room.to_string(),
        kind: "window".to_string(),
        depth: WINDOW_DEPTH_MM,
    }
}
