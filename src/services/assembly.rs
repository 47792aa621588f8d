//! Generate-layout request handling and response assembly.
//!
//! This is the boundary the CLI and HTTP layers call into: resolve the
//! requested site, build the model, project it twice, and bundle the
//! projections with summary metrics.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::config::SiteConfig;
use crate::error::Result;
use crate::export::{EditorDocument, SceneDocument, SceneEnvironment, SceneRoom};
use crate::models::{Door, Furniture, LayoutModel, Site, Wall, Window};
use crate::services::builder::{LayoutBuilder, RoomRequest};

/// Message returned with every synthesized layout.
pub const GENERATED_MESSAGE: &str =
    "Enhanced floor plan with 3D visualization generated successfully";

const LAYOUT_DESCRIPTION: &str =
    "Family-friendly layout with living room at front, kitchen adjacent, bedrooms grouped at back";

const LAYOUT_FEATURES: [&str; 7] = [
    "Living room near entrance for easy access",
    "Kitchen connects to living room for family flow",
    "Bedrooms grouped together for privacy",
    "Bathrooms strategically placed near bedrooms and living area",
    "Balanced layout optimized for family use",
    "3D visualization ready with Three.js",
    "React-Planner compatible format",
];

/// Request body for layout synthesis.
///
/// Dimensions are signed so that negative values reach validation and fail
/// as invalid dimensions rather than as a parse error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GenerateLayoutRequest {
    /// Site width in millimeters; configured default when absent
    #[serde(rename = "siteWidthMm", default)]
    pub site_width_mm: Option<i64>,
    /// Site depth in millimeters; configured default when absent
    #[serde(rename = "siteDepthMm", default)]
    pub site_depth_mm: Option<i64>,
    /// Requested rooms, accepted and not used by the fixed topology
    #[serde(default)]
    pub rooms: Vec<RoomRequest>,
}

impl GenerateLayoutRequest {
    /// Creates a request for explicit dimensions.
    #[must_use]
    pub fn with_site(width: i64, depth: i64) -> Self {
        Self {
            site_width_mm: Some(width),
            site_depth_mm: Some(depth),
            rooms: Vec::new(),
        }
    }

    /// Resolves the site, filling missing dimensions from `defaults`.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::InvalidSiteDimensions`](crate::error::LayoutError::InvalidSiteDimensions)
    /// if a resolved dimension is not positive.
    pub fn site(&self, defaults: &SiteConfig) -> Result<Site> {
        Site::new(
            self.site_width_mm
                .unwrap_or_else(|| i64::from(defaults.default_width_mm)),
            self.site_depth_mm
                .unwrap_or_else(|| i64::from(defaults.default_depth_mm)),
        )
    }
}

/// The `plan` block: both projections plus structural elements.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlanDocument {
    /// Rooms as projected for the 3D renderer
    pub rooms: Vec<SceneRoom>,
    /// Wall segments
    pub walls: Vec<Wall>,
    /// Doors
    pub doors: Vec<Door>,
    /// Windows
    pub windows: Vec<Window>,
    /// Free-standing furniture outside any room; always empty
    pub furniture: Vec<Furniture>,
    /// Camera, lights, and materials
    #[serde(rename = "3d_data")]
    pub scene: SceneEnvironment,
    /// 2D editor projection
    pub react_planner_data: EditorDocument,
}

/// Static description of the synthesized arrangement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LayoutDescription {
    /// One-line summary
    pub description: &'static str,
    /// Feature bullet points
    pub features: Vec<&'static str>,
}

/// Static capability block for the frontend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Visualization {
    /// 2D editor compatibility
    #[serde(rename = "2d_editor")]
    pub editor_2d: &'static str,
    /// 3D engine compatibility
    #[serde(rename = "3d_engine")]
    pub engine_3d: &'static str,
    /// Furniture library availability
    pub furniture_library: &'static str,
    /// Advertised export formats
    pub export_formats: Vec<&'static str>,
}

impl Default for Visualization {
    fn default() -> Self {
        Self {
            editor_2d: "React-Planner compatible",
            engine_3d: "Three.js ready",
            furniture_library: "Complete furniture catalog",
            export_formats: vec!["2D PDF", "3D GLTF", "VR Ready"],
        }
    }
}

/// Complete response for one synthesis request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayoutResponse {
    /// Projections and structural elements
    pub plan: PlanDocument,
    /// Human-readable status message
    pub message: &'static str,
    /// Number of rooms
    pub rooms: usize,
    /// Site area in square meters
    #[serde(rename = "totalArea")]
    pub total_area: f64,
    /// Static layout description
    pub layout: LayoutDescription,
    /// Static capability block
    pub visualization: Visualization,
}

impl LayoutResponse {
    /// Projects a model and bundles the result.
    #[must_use]
    pub fn assemble(model: &LayoutModel) -> Self {
        let scene = SceneDocument::from_model(model);
        let editor = EditorDocument::from_model(model);

        Self {
            plan: PlanDocument {
                rooms: scene.rooms,
                walls: model.walls().to_vec(),
                doors: model.doors().to_vec(),
                windows: model.windows().to_vec(),
                furniture: Vec::new(),
                scene: scene.environment,
                react_planner_data: editor,
            },
            message: GENERATED_MESSAGE,
            rooms: model.room_count(),
            total_area: model.site().area_m2(),
            layout: LayoutDescription {
                description: LAYOUT_DESCRIPTION,
                features: LAYOUT_FEATURES.to_vec(),
            },
            visualization: Visualization::default(),
        }
    }
}

/// Handles one generate-layout request end to end.
///
/// # Errors
///
/// Returns [`LayoutError::InvalidSiteDimensions`](crate::error::LayoutError::InvalidSiteDimensions)
/// if the resolved site is not valid.
pub fn synthesize(request: &GenerateLayoutRequest, defaults: &SiteConfig) -> Result<LayoutResponse> {
    let site = request.site(defaults)?;
    let model = LayoutBuilder::build(site, Some(&request.rooms));

    info!(
        site_width = site.width(),
        site_depth = site.depth(),
        rooms = model.room_count(),
        "synthesized floor plan"
    );

    Ok(LayoutResponse::assemble(&model))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LayoutError;
    use crate::services::build_layout;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_request_defaults_from_config() {
        let request: GenerateLayoutRequest = serde_json::from_str("{}").unwrap();
        let site = request.site(&SiteConfig::default()).unwrap();
        assert_eq!(site, Site::reference());
    }

    #[test]
    fn test_request_partial_override() {
        let request: GenerateLayoutRequest =
            serde_json::from_str(r#"{"siteWidthMm": 12000}"#).unwrap();
        let site = request.site(&SiteConfig::default()).unwrap();
        assert_eq!((site.width(), site.depth()), (12_000, 15_000));
    }

    #[test]
    fn test_request_accepts_rooms() {
        let request: GenerateLayoutRequest = serde_json::from_str(
            r#"{"siteWidthMm": 10000, "siteDepthMm": 15000, "rooms": [{"type": "bedroom"}, "office"]}"#,
        )
        .unwrap();
        assert_eq!(request.rooms.len(), 2);

        let response = synthesize(&request, &SiteConfig::default()).unwrap();
        assert_eq!(response.rooms, 7);
    }

    #[test]
    fn test_invalid_dimensions() {
        let request = GenerateLayoutRequest::with_site(-10, 15_000);
        assert_eq!(
            synthesize(&request, &SiteConfig::default()),
            Err(LayoutError::InvalidSiteDimensions {
                width: -10,
                depth: 15_000
            })
        );
    }

    #[test]
    fn test_summary_metrics() {
        let response = LayoutResponse::assemble(&build_layout(Site::reference()));
        assert_eq!(response.rooms, 7);
        assert!((response.total_area - 150.0).abs() < f64::EPSILON);
        assert_eq!(response.layout.features.len(), 7);
        assert!(response.plan.furniture.is_empty());
    }

    #[test]
    fn test_response_json_shape() {
        let response = LayoutResponse::assemble(&build_layout(Site::reference()));
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["message"], GENERATED_MESSAGE);
        assert_eq!(json["rooms"], 7);
        assert_eq!(json["totalArea"], 150.0);
        assert_eq!(json["plan"]["rooms"].as_array().unwrap().len(), 7);
        assert_eq!(json["plan"]["walls"].as_array().unwrap().len(), 8);
        assert_eq!(json["plan"]["doors"].as_array().unwrap().len(), 7);
        assert_eq!(json["plan"]["windows"].as_array().unwrap().len(), 5);
        assert_eq!(json["plan"]["3d_data"]["camera"]["fov"], 60);
        assert_eq!(json["plan"]["react_planner_data"]["scene"]["height"], 15_000);
        assert_eq!(json["visualization"]["2d_editor"], "React-Planner compatible");
        assert_eq!(json["visualization"]["export_formats"][1], "3D GLTF");
    }

    #[test]
    fn test_total_area_tracks_site() {
        let response = LayoutResponse::assemble(&build_layout(Site::new(1000, 1000).unwrap()));
        assert!((response.total_area - 1.0).abs() < f64::EPSILON);
        assert_eq!(response.rooms, 7);
    }

    #[test]
    fn test_projection_independence() {
        let model = build_layout(Site::reference());

        let mut scene = SceneDocument::from_model(&model);
        let before = EditorDocument::from_model(&model);
        scene.rooms.clear();
        scene.environment.lights.clear();
        let after = EditorDocument::from_model(&model);

        assert_eq!(before, after);
        assert_eq!(after.elements().count(), 7);
    }
}
