//! 2D plan-editor projection.
//!
//! Produces a React-Planner style document: one "Floor Plan" layer whose
//! elements are the layout's rooms, keyed `element-1`, `element-2`, ... in
//! room order.

use serde::ser::Serializer;
use serde::Serialize;

use crate::models::{LayoutModel, RgbColor, Room};

/// Document format version.
pub const EDITOR_FORMAT_VERSION: &str = "1.0";

/// Id of the single layer holding the rooms.
pub const FLOOR_PLAN_LAYER_ID: &str = "layer-1";

/// Items that serialize into a JSON object keyed by their id.
trait Keyed {
    fn key(&self) -> &str;
}

/// Serializes a slice as a map in slice order.
fn serialize_keyed<S, T>(items: &[T], serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
    T: Keyed + Serialize,
{
    serializer.collect_map(items.iter().map(|item| (item.key(), item)))
}

/// Display properties of a room element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ElementProperties {
    /// Title-cased room category (e.g. "Bedroom")
    pub name: String,
    /// Ceiling height
    pub height: u32,
    /// Wall color
    pub color: RgbColor,
}

/// One room on the plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EditorElement {
    /// Sequential id (`element-N`)
    pub id: String,
    /// Element type, always "room"
    #[serde(rename = "type")]
    pub kind: String,
    /// Origin x
    pub x: u32,
    /// Origin y
    pub y: u32,
    /// Extent along x
    pub width: u32,
    /// Extent along y (the room's depth)
    pub height: u32,
    /// Display properties
    pub properties: ElementProperties,
}

impl EditorElement {
    fn from_room(index: usize, room: &Room) -> Self {
        Self {
            id: format!("element-{}", index + 1),
            kind: "room".to_string(),
            x: room.x,
            y: room.y,
            width: room.width,
            height: room.depth,
            properties: ElementProperties {
                name: room.category.display_name().to_string(),
                height: room.height,
                color: room.color,
            },
        }
    }
}

impl Keyed for EditorElement {
    fn key(&self) -> &str {
        &self.id
    }
}

/// A drawing layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EditorLayer {
    /// Layer id
    pub id: String,
    /// Display name
    pub name: String,
    /// Whether the layer is shown
    pub visible: bool,
    /// Opacity; the floor-plan layer is always fully opaque
    pub opacity: u8,
    /// Whether the layer is the active one
    pub selected: bool,
    /// Elements in room order
    #[serde(serialize_with = "serialize_keyed")]
    pub elements: Vec<EditorElement>,
}

impl Keyed for EditorLayer {
    fn key(&self) -> &str {
        &self.id
    }
}

/// Scene-level metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EditorScene {
    /// Site width
    pub width: u32,
    /// Site depth
    pub height: u32,
    /// Plan rotation in degrees
    pub rotation: u32,
    /// Drawing scale
    pub scale: u32,
}

/// 2D editor projection of a layout.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EditorDocument {
    /// Format version
    pub version: String,
    /// Drawing scale
    pub scale: u32,
    /// Layers in order
    #[serde(serialize_with = "serialize_keyed")]
    pub layers: Vec<EditorLayer>,
    /// Scene metadata
    pub scene: EditorScene,
}

impl EditorDocument {
    /// Projects a layout model into an editor document.
    #[must_use]
    pub fn from_model(model: &LayoutModel) -> Self {
        let elements = model
            .rooms()
            .iter()
            .enumerate()
            .map(|(index, room)| EditorElement::from_room(index, room))
            .collect();

        let site = model.site();
        Self {
            version: EDITOR_FORMAT_VERSION.to_string(),
            scale: 1,
            layers: vec![EditorLayer {
                id: FLOOR_PLAN_LAYER_ID.to_string(),
                name: "Floor Plan".to_string(),
                visible: true,
                opacity: 1,
                selected: true,
                elements,
            }],
            scene: EditorScene {
                width: site.width(),
                height: site.depth(),
                rotation: 0,
                scale: 1,
            },
        }
    }

    /// All elements across layers, in order.
    pub fn elements(&self) -> impl Iterator<Item = &EditorElement> {
        self.layers.iter().flat_map(|layer| layer.elements.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Site;
    use crate::services::build_layout;
    use serde_json::json;

    #[test]
    fn test_element_ids_follow_room_order() {
        let model = build_layout(Site::reference());
        let doc = EditorDocument::from_model(&model);

        let ids: Vec<&str> = doc.elements().map(|e| e.id.as_str()).collect();
        assert_eq!(
            ids,
            vec![
                "element-1",
                "element-2",
                "element-3",
                "element-4",
                "element-5",
                "element-6",
                "element-7"
            ]
        );

        for (element, room) in doc.elements().zip(model.rooms()) {
            assert_eq!((element.x, element.y), (room.x, room.y));
            assert_eq!(element.height, room.depth);
            assert_eq!(element.properties.name, room.category.display_name());
        }
    }

    #[test]
    fn test_scene_from_site() {
        let model = build_layout(Site::new(12_000, 18_000).unwrap());
        let doc = EditorDocument::from_model(&model);
        assert_eq!(
            doc.scene,
            EditorScene {
                width: 12_000,
                height: 18_000,
                rotation: 0,
                scale: 1
            }
        );
    }

    #[test]
    fn test_json_shape() {
        let model = build_layout(Site::reference());
        let json = serde_json::to_value(EditorDocument::from_model(&model)).unwrap();

        assert_eq!(json["version"], "1.0");
        let layer = &json["layers"]["layer-1"];
        assert_eq!(layer["name"], "Floor Plan");
        assert_eq!(layer["visible"], true);
        assert_eq!(layer["selected"], true);
        assert_eq!(layer["opacity"], json!(1));
        assert!(layer["opacity"].is_u64());
        assert_eq!(layer["elements"].as_object().unwrap().len(), 7);
        assert_eq!(
            layer["elements"]["element-3"],
            json!({
                "id": "element-3",
                "type": "room",
                "x": 5000,
                "y": 2500,
                "width": 2000,
                "height": 2000,
                "properties": {"name": "Bathroom", "height": 2600, "color": 0xf0f8ff}
            })
        );
    }

    #[test]
    fn test_serialized_keys_in_room_order() {
        let model = build_layout(Site::reference());
        let text = serde_json::to_string(&EditorDocument::from_model(&model)).unwrap();

        let positions: Vec<usize> = (1..=7)
            .map(|n| text.find(&format!("\"element-{n}\":")).unwrap())
            .collect();
        assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
    }
}
