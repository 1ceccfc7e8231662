use std::collections::HashMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::input::Axis;

/// One end of a key-driven axis.
///
/// Serde serializes as `snake_case` strings so TOML presets stay readable:
/// ```toml
/// [input.bindings]
/// KeyA = "left"
/// ArrowUp = "up"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AxisDirection {
    /// Horizontal axis, negative.
    Left,
    /// Horizontal axis, positive.
    Right,
    /// Vertical axis, positive.
    Up,
    /// Vertical axis, negative.
    Down,
}

impl AxisDirection {
    /// The axis this direction drives.
    #[must_use]
    pub fn axis(self) -> Axis {
        match self {
            Self::Left | Self::Right => Axis::Horizontal,
            Self::Up | Self::Down => Axis::Vertical,
        }
    }

    /// Contribution to the axis value while held.
    #[must_use]
    pub fn sign(self) -> f32 {
        match self {
            Self::Right | Self::Up => 1.0,
            Self::Left | Self::Down => -1.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Input", inline)]
#[serde(default)]
/// Key-to-axis bindings and wheel scaling.
pub struct InputOptions {
    /// Maps key string (e.g. `"KeyA"`) → axis direction.
    #[schemars(skip)]
    pub bindings: HashMap<String, AxisDirection>,
    /// Zoom axis value per wheel line.
    #[schemars(title = "Scroll Scale", range(min = 0.01, max = 1.0), extend("step" = 0.01))]
    pub scroll_scale: f32,
}

impl Default for InputOptions {
    fn default() -> Self {
        let bindings = HashMap::from([
            ("KeyA".into(), AxisDirection::Left),
            ("ArrowLeft".into(), AxisDirection::Left),
            ("KeyD".into(), AxisDirection::Right),
            ("ArrowRight".into(), AxisDirection::Right),
            ("KeyW".into(), AxisDirection::Up),
            ("ArrowUp".into(), AxisDirection::Up),
            ("KeyS".into(), AxisDirection::Down),
            ("ArrowDown".into(), AxisDirection::Down),
        ]);
        Self {
            bindings,
            scroll_scale: 0.1,
        }
    }
}

impl InputOptions {
    /// Look up the axis direction bound to a key string.
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<AxisDirection> {
        self.bindings.get(key).copied()
    }
}
