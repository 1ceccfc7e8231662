use crate::picking::Ray;

/// Named analog axes read once per frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Left/right: orbit azimuth, or horizontal pan while focused.
    Horizontal,
    /// Up/down: orbit height, or vertical pan while focused.
    Vertical,
    /// Wheel: orbit radius.
    Zoom,
}

/// Everything the interaction core reads from input in one frame.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FrameInput {
    /// World-space ray under the pointer, if the pointer is in the view.
    pub pointer_ray: Option<Ray>,
    /// Primary action went down this frame.
    pub primary_pressed: bool,
    /// Secondary action went down this frame.
    pub secondary_pressed: bool,
    /// The pointer is over a UI widget; world picking is skipped.
    pub pointer_over_ui: bool,
    /// Horizontal axis value, `-1..=1`.
    pub horizontal: f32,
    /// Vertical axis value, `-1..=1`.
    pub vertical: f32,
    /// Zoom axis value (wheel lines times scroll scale).
    pub zoom: f32,
}

impl FrameInput {
    /// Value of `axis` this frame.
    #[must_use]
    pub fn axis(&self, axis: Axis) -> f32 {
        match axis {
            Axis::Horizontal => self.horizontal,
            Axis::Vertical => self.vertical,
            Axis::Zoom => self.zoom,
        }
    }

    /// Frame with the pointer along `ray` and nothing else happening.
    #[must_use]
    pub fn pointing(ray: Ray) -> Self {
        Self {
            pointer_ray: Some(ray),
            ..Self::default()
        }
    }

    /// Same frame with the primary action pressed.
    #[must_use]
    pub fn with_primary(mut self) -> Self {
        self.primary_pressed = true;
        self
    }

    /// Same frame with the secondary action pressed.
    #[must_use]
    pub fn with_secondary(mut self) -> Self {
        self.secondary_pressed = true;
        self
    }

    /// Same frame with the pointer over the UI.
    #[must_use]
    pub fn over_ui(mut self) -> Self {
        self.pointer_over_ui = true;
        self
    }

    /// Same frame with the given axis values.
    #[must_use]
    pub fn with_axes(mut self, horizontal: f32, vertical: f32, zoom: f32) -> Self {
        self.horizontal = horizontal;
        self.vertical = vertical;
        self.zoom = zoom;
        self
    }
}
