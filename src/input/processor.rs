//! Converts raw platform events into per-frame input snapshots.
//!
//! The `InputProcessor` owns all transient input state (cursor position,
//! held keys, button edges, accumulated scroll) and the axis binding map.
//! It is the only thing that sits between raw window events and the
//! engine's [`frame`](crate::engine::GarageEngine::frame) method.

use glam::Vec2;
use rustc_hash::FxHashSet;

use super::event::{InputEvent, MouseButton};
use super::frame::{Axis, FrameInput};
use crate::camera::Camera;
use crate::options::{AxisDirection, InputOptions};

/// Folds [`InputEvent`]s into a [`FrameInput`] once per frame.
///
/// # Usage
///
/// ```ignore
/// // In the event loop:
/// input.handle_event(event);
///
/// // Once per frame:
/// let frame = input.end_frame(&engine.camera().camera, viewport);
/// engine.frame(&frame, dt);
/// ```
#[derive(Debug, Default)]
pub struct InputProcessor {
    /// Last known cursor position in physical pixels.
    cursor: Option<Vec2>,
    /// Physical keys currently held down.
    held: FxHashSet<String>,
    /// Primary button went down since the last frame.
    primary_edge: bool,
    /// Secondary button went down since the last frame.
    secondary_edge: bool,
    /// Wheel lines accumulated since the last frame.
    scroll: f32,
    /// Last UI hit-test report.
    over_ui: bool,
    /// Key string → axis direction mapping and wheel scale.
    options: InputOptions,
}

impl InputProcessor {
    /// Create a new processor with default bindings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a processor with custom bindings.
    #[must_use]
    pub fn with_options(options: InputOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    /// Replace the bindings, keeping held keys and cursor state.
    pub fn set_options(&mut self, options: InputOptions) {
        self.options = options;
    }

    /// Current cursor position in physical pixels, if inside the window.
    #[must_use]
    pub fn cursor(&self) -> Option<Vec2> {
        self.cursor
    }

    /// Record one platform event.
    pub fn handle_event(&mut self, event: InputEvent) {
        match event {
            InputEvent::CursorMoved { x, y } => {
                self.cursor = Some(Vec2::new(x, y));
            }
            InputEvent::CursorLeft => self.cursor = None,
            InputEvent::MouseButton { button, pressed } => {
                match (button, pressed) {
                    (MouseButton::Left, true) => self.primary_edge = true,
                    (MouseButton::Right, true) => self.secondary_edge = true,
                    _ => {}
                }
            }
            InputEvent::Scroll { delta } => self.scroll += delta,
            InputEvent::Key { code, pressed } => {
                if pressed {
                    let _ = self.held.insert(code);
                } else {
                    let _ = self.held.remove(&code);
                }
            }
            InputEvent::PointerOverUi { over } => self.over_ui = over,
        }
    }

    /// Sum of held bindings on `axis`, clamped to `-1..=1`.
    fn held_axis(&self, axis: Axis) -> f32 {
        self.held
            .iter()
            .filter_map(|code| self.options.lookup(code))
            .filter(|dir| dir.axis() == axis)
            .map(AxisDirection::sign)
            .sum::<f32>()
            .clamp(-1.0, 1.0)
    }

    /// Snapshot this frame's input and reset the per-frame edges.
    ///
    /// `viewport` is the window size in physical pixels; the pointer ray
    /// is unprojected through `camera`.
    pub fn end_frame(&mut self, camera: &Camera, viewport: Vec2) -> FrameInput {
        let frame = FrameInput {
            pointer_ray: self.cursor.map(|c| camera.screen_ray(c, viewport)),
            primary_pressed: self.primary_edge,
            secondary_pressed: self.secondary_edge,
            pointer_over_ui: self.over_ui,
            horizontal: self.held_axis(Axis::Horizontal),
            vertical: self.held_axis(Axis::Vertical),
            zoom: self.scroll * self.options.scroll_scale,
        };
        self.primary_edge = false;
        self.secondary_edge = false;
        self.scroll = 0.0;
        frame
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;

    fn camera() -> Camera {
        Camera {
            eye: Vec3::new(0.0, 0.0, 10.0),
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect: 1.0,
            fovy: 45.0,
            znear: 0.1,
            zfar: 100.0,
        }
    }

    const VIEWPORT: Vec2 = Vec2::new(800.0, 800.0);

    fn key(code: &str, pressed: bool) -> InputEvent {
        InputEvent::Key {
            code: code.to_owned(),
            pressed,
        }
    }

    #[test]
    fn button_presses_are_single_frame_edges() {
        let mut input = InputProcessor::new();
        input.handle_event(InputEvent::MouseButton {
            button: MouseButton::Left,
            pressed: true,
        });
        let first = input.end_frame(&camera(), VIEWPORT);
        assert!(first.primary_pressed);
        assert!(!first.secondary_pressed);

        let second = input.end_frame(&camera(), VIEWPORT);
        assert!(!second.primary_pressed);
    }

    #[test]
    fn releases_do_not_trigger() {
        let mut input = InputProcessor::new();
        input.handle_event(InputEvent::MouseButton {
            button: MouseButton::Right,
            pressed: false,
        });
        assert!(!input.end_frame(&camera(), VIEWPORT).secondary_pressed);
    }

    #[test]
    fn held_keys_drive_axes_until_released() {
        let mut input = InputProcessor::new();
        input.handle_event(key("KeyD", true));
        input.handle_event(key("KeyW", true));

        let frame = input.end_frame(&camera(), VIEWPORT);
        assert_eq!(frame.horizontal, 1.0);
        assert_eq!(frame.vertical, 1.0);
        assert_eq!(input.end_frame(&camera(), VIEWPORT).horizontal, 1.0);

        input.handle_event(key("KeyD", false));
        assert_eq!(input.end_frame(&camera(), VIEWPORT).horizontal, 0.0);
    }

    #[test]
    fn opposing_and_duplicate_keys_clamp() {
        let mut input = InputProcessor::new();
        input.handle_event(key("KeyA", true));
        input.handle_event(key("KeyD", true));
        assert_eq!(input.end_frame(&camera(), VIEWPORT).horizontal, 0.0);

        input.handle_event(key("KeyD", false));
        input.handle_event(key("ArrowLeft", true));
        assert_eq!(input.end_frame(&camera(), VIEWPORT).horizontal, -1.0);
    }

    #[test]
    fn scroll_accumulates_then_resets() {
        let mut input = InputProcessor::new();
        input.handle_event(InputEvent::Scroll { delta: 1.0 });
        input.handle_event(InputEvent::Scroll { delta: 2.0 });

        let frame = input.end_frame(&camera(), VIEWPORT);
        assert!((frame.zoom - 0.3).abs() < 1e-6);
        assert_eq!(input.end_frame(&camera(), VIEWPORT).zoom, 0.0);
    }

    #[test]
    fn pointer_ray_follows_cursor() {
        let mut input = InputProcessor::new();
        assert!(input.end_frame(&camera(), VIEWPORT).pointer_ray.is_none());

        input.handle_event(InputEvent::CursorMoved { x: 400.0, y: 400.0 });
        let ray = input.end_frame(&camera(), VIEWPORT).pointer_ray.unwrap();
        assert!(ray.direction.abs_diff_eq(Vec3::NEG_Z, 1e-4));

        input.handle_event(InputEvent::CursorLeft);
        assert!(input.end_frame(&camera(), VIEWPORT).pointer_ray.is_none());
    }

    #[test]
    fn ui_flag_persists_until_changed() {
        let mut input = InputProcessor::new();
        input.handle_event(InputEvent::PointerOverUi { over: true });
        assert!(input.end_frame(&camera(), VIEWPORT).pointer_over_ui);
        assert!(input.end_frame(&camera(), VIEWPORT).pointer_over_ui);
        input.handle_event(InputEvent::PointerOverUi { over: false });
        assert!(!input.end_frame(&camera(), VIEWPORT).pointer_over_ui);
    }
}
