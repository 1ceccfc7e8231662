use glam::Vec3;

use super::core::Camera;
use crate::input::{Axis, FrameInput};
use crate::options::CameraOptions;

/// What the camera is doing this frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CameraMode {
    /// Free orbit around the pivot.
    Orbiting,
    /// Locked onto a selected part, panning within a bounded disc.
    Zoomed {
        /// World-space point the camera keeps aiming at.
        target: Vec3,
    },
}

/// Orbit camera with a focus mode entered on selection.
///
/// Orbit state is kept as (azimuth, height, radius) relative to the pivot
/// and the eye is recomputed from it every frame. Focus mode keeps the
/// orbit parameters untouched so [`return_to_default`](Self::return_to_default)
/// can reframe instantly.
#[derive(Debug, Clone)]
pub struct FocusCameraController {
    /// The camera driven by this controller.
    pub camera: Camera,
    mode: CameraMode,
    pivot: Option<Vec3>,
    enabled: bool,

    /// Degrees; 0 puts the eye on the pivot's +Z side.
    azimuth: f32,
    height: f32,
    distance: f32,

    pan_origin: Vec3,
    pan_offset: Vec3,

    options: CameraOptions,
}

/// `value` limited to `min..=max`. An inverted band pins to `min`.
fn clamp_band(value: f32, min: f32, max: f32) -> f32 {
    if min <= max {
        value.clamp(min, max)
    } else {
        min
    }
}

impl FocusCameraController {
    /// Build a controller from options. Without a pivot the controller
    /// logs an error and stays disabled.
    #[must_use]
    pub fn new(options: &CameraOptions, aspect: f32) -> Self {
        let pivot = options.pivot.map(Vec3::from);
        let camera = Camera {
            eye: Vec3::new(0.0, options.default_height, options.default_distance),
            target: pivot.unwrap_or(Vec3::ZERO),
            up: Vec3::Y,
            aspect,
            fovy: options.fovy,
            znear: options.znear,
            zfar: options.zfar,
        };
        let mut controller = Self {
            camera,
            mode: CameraMode::Orbiting,
            pivot,
            enabled: pivot.is_some(),
            azimuth: options.initial_azimuth,
            height: clamp_band(
                options.default_height,
                options.min_height,
                options.max_height,
            ),
            distance: clamp_band(
                options.default_distance,
                options.min_zoom_distance,
                options.max_zoom_distance,
            ),
            pan_origin: Vec3::ZERO,
            pan_offset: Vec3::ZERO,
            options: options.clone(),
        };
        if controller.enabled {
            controller.update_orbit_position();
        } else {
            log::error!("focus camera has no pivot to orbit; disabling");
        }
        controller
    }

    /// Swap in new options. Orbit parameters are re-clamped to the new
    /// bands; assigning a pivot re-enables a disabled controller.
    pub fn apply_options(&mut self, options: &CameraOptions) {
        self.options = options.clone();
        self.pivot = options.pivot.map(Vec3::from);
        self.enabled = self.pivot.is_some();
        self.camera.fovy = options.fovy;
        self.camera.znear = options.znear;
        self.camera.zfar = options.zfar;
        self.height =
            clamp_band(self.height, options.min_height, options.max_height);
        self.distance = clamp_band(
            self.distance,
            options.min_zoom_distance,
            options.max_zoom_distance,
        );
        if !self.enabled {
            log::error!("focus camera has no pivot to orbit; disabling");
            return;
        }
        self.pan_offset = self
            .pan_offset
            .clamp_length_max(options.max_pan_distance.max(0.0));
        match self.mode {
            CameraMode::Orbiting => self.update_orbit_position(),
            CameraMode::Zoomed { .. } => self.update_zoomed_position(),
        }
    }

    /// Viewport aspect ratio changed.
    pub fn set_aspect(&mut self, aspect: f32) {
        self.camera.aspect = aspect;
    }

    /// Advance one frame.
    pub fn update(&mut self, input: &FrameInput, dt: f32) {
        if !self.enabled {
            return;
        }
        match self.mode {
            CameraMode::Orbiting => {
                let o = &self.options;
                self.azimuth -= input.axis(Axis::Horizontal) * o.rotation_speed * dt;
                self.height = clamp_band(
                    self.height
                        + input.axis(Axis::Vertical) * o.height_change_speed * dt,
                    o.min_height,
                    o.max_height,
                );
                self.distance = clamp_band(
                    self.distance - input.axis(Axis::Zoom) * o.zoom_speed,
                    o.min_zoom_distance,
                    o.max_zoom_distance,
                );
                self.update_orbit_position();
            }
            CameraMode::Zoomed { .. } => {
                let pan = self.camera.right() * input.axis(Axis::Horizontal)
                    + self.camera.up_vector() * input.axis(Axis::Vertical);
                self.pan_offset = (self.pan_offset
                    + pan * self.options.zoomed_pan_speed * dt)
                    .clamp_length_max(self.options.max_pan_distance.max(0.0));
                self.update_zoomed_position();
            }
        }
    }

    /// Enter focus mode on `target`: keep the current viewing direction,
    /// move to the close-up distance and remember that spot as the pan
    /// origin.
    pub fn set_zoom_target(&mut self, target: Vec3) {
        if !self.enabled {
            return;
        }
        let toward_eye =
            (self.camera.eye - target).try_normalize().unwrap_or(Vec3::Z);
        self.pan_origin = target + toward_eye * self.options.zoom_in_distance;
        self.pan_offset = Vec3::ZERO;
        self.mode = CameraMode::Zoomed { target };
        self.update_zoomed_position();
        log::debug!("camera focusing on {target}");
    }

    /// Leave focus mode and snap back to the orbit framing.
    pub fn return_to_default(&mut self) {
        self.mode = CameraMode::Orbiting;
        self.pan_offset = Vec3::ZERO;
        if self.enabled {
            self.update_orbit_position();
        }
    }

    fn update_orbit_position(&mut self) {
        let Some(pivot) = self.pivot else {
            return;
        };
        let (sin, cos) = self.azimuth.to_radians().sin_cos();
        self.camera.eye = pivot
            + Vec3::new(self.distance * sin, self.height, self.distance * cos);
        self.camera.target = pivot;
    }

    fn update_zoomed_position(&mut self) {
        if let CameraMode::Zoomed { target } = self.mode {
            self.camera.eye = self.pan_origin + self.pan_offset;
            self.camera.target = target;
        }
    }

    /// Current mode.
    #[must_use]
    pub fn mode(&self) -> CameraMode {
        self.mode
    }

    /// Whether the camera is locked onto a target.
    #[must_use]
    pub fn is_zoomed(&self) -> bool {
        matches!(self.mode, CameraMode::Zoomed { .. })
    }

    /// Whether a pivot is configured and the controller responds to input.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Orbit pivot.
    #[must_use]
    pub fn pivot(&self) -> Option<Vec3> {
        self.pivot
    }

    /// Orbit azimuth in degrees.
    #[must_use]
    pub fn azimuth(&self) -> f32 {
        self.azimuth
    }

    /// Orbit height above the pivot.
    #[must_use]
    pub fn height(&self) -> f32 {
        self.height
    }

    /// Orbit radius.
    #[must_use]
    pub fn distance(&self) -> f32 {
        self.distance
    }

    /// Focus-mode pan offset from the pan origin.
    #[must_use]
    pub fn pan_offset(&self) -> Vec3 {
        self.pan_offset
    }
}
