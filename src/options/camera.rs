use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera", inline)]
#[serde(default)]
/// Orbit, focus-zoom and projection parameters.
pub struct CameraOptions {
    /// World-space point the free camera orbits. Without one the focus
    /// camera disables itself. Written as `pivot = []` in TOML.
    #[schemars(skip)]
    #[serde(
        serialize_with = "pivot::serialize",
        deserialize_with = "pivot::deserialize"
    )]
    pub pivot: Option<[f32; 3]>,
    /// Starting azimuth in degrees (0 looks down -Z from +Z).
    #[schemars(skip)]
    pub initial_azimuth: f32,
    /// Starting orbit radius.
    #[schemars(title = "Default Distance", range(min = 2.0, max = 15.0), extend("step" = 0.5))]
    pub default_distance: f32,
    /// Starting height above the pivot.
    #[schemars(title = "Default Height", extend("step" = 0.5))]
    pub default_height: f32,
    /// Orbit angular speed in degrees per second at full axis input.
    #[schemars(title = "Rotation Speed", range(min = 10.0, max = 360.0), extend("step" = 5.0))]
    pub rotation_speed: f32,
    /// Height change per second at full axis input.
    #[schemars(title = "Height Speed", range(min = 0.5, max = 20.0), extend("step" = 0.5))]
    pub height_change_speed: f32,
    /// Lowest orbit height.
    #[schemars(skip)]
    pub min_height: f32,
    /// Highest orbit height.
    #[schemars(skip)]
    pub max_height: f32,
    /// Radius change per unit of zoom axis.
    #[schemars(title = "Zoom Speed", range(min = 0.5, max = 20.0), extend("step" = 0.5))]
    pub zoom_speed: f32,
    /// Closest orbit radius.
    #[schemars(skip)]
    pub min_zoom_distance: f32,
    /// Farthest orbit radius.
    #[schemars(skip)]
    pub max_zoom_distance: f32,
    /// Distance kept from a focused part.
    #[schemars(title = "Focus Distance", range(min = 0.5, max = 10.0), extend("step" = 0.5))]
    pub zoom_in_distance: f32,
    /// Pan speed per second while focused.
    #[schemars(title = "Focus Pan Speed", range(min = 0.1, max = 10.0), extend("step" = 0.1))]
    pub zoomed_pan_speed: f32,
    /// Furthest the focused camera may pan from where it started.
    #[schemars(title = "Max Pan Distance", range(min = 0.0, max = 20.0), extend("step" = 0.5))]
    pub max_pan_distance: f32,
    /// Vertical field of view in degrees.
    #[schemars(title = "Field of View", range(min = 20.0, max = 90.0), extend("step" = 1.0))]
    pub fovy: f32,
    /// Near clipping plane distance.
    #[schemars(skip)]
    pub znear: f32,
    /// Far clipping plane distance.
    #[schemars(skip)]
    pub zfar: f32,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            pivot: Some([0.0; 3]),
            initial_azimuth: 0.0,
            default_distance: 10.0,
            default_height: 2.0,
            rotation_speed: 100.0,
            height_change_speed: 5.0,
            min_height: -5.0,
            max_height: 10.0,
            zoom_speed: 5.0,
            min_zoom_distance: 2.0,
            max_zoom_distance: 15.0,
            zoom_in_distance: 3.0,
            zoomed_pan_speed: 2.0,
            max_pan_distance: 5.0,
            fovy: 45.0,
            znear: 0.1,
            zfar: 500.0,
        }
    }
}

/// TOML has no null, so an absent pivot is stored as an empty array.
mod pivot {
    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    #[allow(clippy::ref_option)]
    pub(super) fn serialize<S: Serializer>(
        pivot: &Option<[f32; 3]>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        pivot.as_ref().map_or(&[][..], |p| &p[..]).serialize(serializer)
    }

    pub(super) fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<[f32; 3]>, D::Error> {
        let coords = Vec::<f32>::deserialize(deserializer)?;
        match coords.as_slice() {
            [] => Ok(None),
            &[x, y, z] => Ok(Some([x, y, z])),
            _ => Err(D::Error::invalid_length(
                coords.len(),
                &"an empty array or three coordinates",
            )),
        }
    }
}
