//! Furniture archetypes, grouped by catalog category.

use serde::Serialize;

/// Catalog category keys in listing order.
pub const FURNITURE_CATEGORIES: [&str; 4] = ["living-room", "bedroom", "kitchen", "bathroom"];

/// A reusable furniture item with its bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FurnitureArchetype {
    /// Catalog category (e.g. "living-room")
    #[serde(skip)]
    pub category: &'static str,
    /// Id, unique within its category (e.g. "sofa_1")
    pub id: &'static str,
    /// Display name
    pub name: &'static str,
    /// Furniture kind (e.g. "sofa")
    #[serde(rename = "type")]
    pub kind: &'static str,
    /// Bounding-box width (mm)
    pub width: u32,
    /// Bounding-box depth (mm)
    pub depth: u32,
    /// Bounding-box height (mm)
    pub height: u32,
}

const fn item(
    category: &'static str,
    id: &'static str,
    name: &'static str,
    kind: &'static str,
    width: u32,
    depth: u32,
    height: u32,
) -> FurnitureArchetype {
    FurnitureArchetype {
        category,
        id,
        name,
        kind,
        width,
        depth,
        height,
    }
}

/// Every furniture archetype, grouped by category in [`FURNITURE_CATEGORIES`] order.
pub static FURNITURE_ARCHETYPES: [FurnitureArchetype; 24] = [
    item("living-room", "sofa_1", "3-Seater Sofa", "sofa", 2000, 800, 850),
    item("living-room", "sofa_2", "2-Seater Sofa", "sofa", 1500, 800, 850),
    item("living-room", "tv_stand", "TV Stand", "tv", 1200, 400, 500),
    item("living-room", "coffee_table", "Coffee Table", "table", 1200, 600, 450),
    item("living-room", "dining_table", "Dining Table", "table", 1800, 900, 750),
    item("living-room", "dining_chairs", "Dining Chairs", "chair", 450, 450, 900),
    item("bedroom", "bed_single", "Single Bed", "bed", 900, 1900, 600),
    item("bedroom", "bed_double", "Double Bed", "bed", 1350, 1900, 600),
    item("bedroom", "bed_queen", "Queen Bed", "bed", 1500, 2000, 600),
    item("bedroom", "wardrobe", "Wardrobe", "storage", 800, 600, 2000),
    item("bedroom", "nightstand", "Nightstand", "table", 400, 400, 600),
    item("bedroom", "dresser", "Dresser", "storage", 1200, 450, 800),
    item("kitchen", "kitchen_counter", "Kitchen Counter", "counter", 2000, 600, 900),
    item("kitchen", "stove", "Stove", "appliance", 600, 600, 900),
    item("kitchen", "refrigerator", "Refrigerator", "appliance", 700, 700, 1800),
    item("kitchen", "sink", "Kitchen Sink", "sink", 500, 500, 900),
    item("kitchen", "dishwasher", "Dishwasher", "appliance", 600, 600, 850),
    item("kitchen", "microwave", "Microwave", "appliance", 500, 400, 300),
    item("bathroom", "toilet", "Toilet", "toilet", 400, 700, 750),
    item("bathroom", "sink", "Bathroom Sink", "sink", 500, 400, 850),
    item("bathroom", "shower", "Shower", "shower", 900, 900, 2000),
    item("bathroom", "bathtub", "Bathtub", "bathtub", 1700, 700, 600),
    item("bathroom", "towel_rack", "Towel Rack", "accessory", 400, 100, 1800),
    item("bathroom", "mirror", "Bathroom Mirror", "mirror", 600, 50, 800),
];

/// Returns the archetypes in a catalog category.
///
/// Unknown categories yield an empty list.
#[must_use]
pub fn furniture_in_category(category: &str) -> Vec<&'static FurnitureArchetype> {
    FURNITURE_ARCHETYPES
        .iter()
        .filter(|archetype| archetype.category == category)
        .collect()
}

/// Looks up one archetype by category and id.
#[must_use]
pub fn furniture_archetype(category: &str, id: &str) -> Option<&'static FurnitureArchetype> {
    FURNITURE_ARCHETYPES
        .iter()
        .find(|archetype| archetype.category == category && archetype.id == id)
}
