//! Shared fixtures for selection and engine tests.

use glam::Vec3;

use super::info::{AlternativeSummary, InfoSink, PartInfoView};
use crate::part::PartRegistry;
use crate::picking::Ray;
use crate::scene::{GarageLayout, MaterialId, MemoryScene, ObjectId};

pub(crate) const HIGHLIGHT: MaterialId = MaterialId(900);
pub(crate) const WHEEL: ObjectId = ObjectId(1);
pub(crate) const SEAT: ObjectId = ObjectId(2);
pub(crate) const BELL: ObjectId = ObjectId(3);

/// Wheel at the origin with two alternatives, seat at x = 3 with none, bell
/// at x = 6 with no visuals at all.
pub(crate) const LAYOUT: &str = r#"
highlight_material = 900

[[models]]
id = 1
surfaces = [
    { half_extents = [0.5, 0.5, 0.1], materials = [10, 11] },
    { offset = [0.0, 0.6, 0.0], half_extents = [0.1, 0.1, 0.1], materials = [12] },
]

[[models]]
id = 2
surfaces = [{ half_extents = [0.5, 0.5, 0.1], materials = [20] }]

[[models]]
id = 3
surfaces = [{ half_extents = [0.5, 0.5, 0.1], materials = [30] }]

[[parts]]
id = 1
position = [0.0, 0.0, 0.0]
stats = { name = "Road Wheel", type = "Wheel", price = 50, durability = 100, model = 1 }
alternatives = [
    { name = "Trail Wheel", type = "Wheel", price = 80, durability = 90, model = 3 },
    { name = "Wheel Decal", type = "Wheel", price = 5, durability = 40 },
]

[[parts]]
id = 2
position = [3.0, 0.0, 0.0]
stats = { name = "Saddle", type = "Seat", price = 20, model = 2 }

[[parts]]
id = 3
position = [6.0, 0.0, 0.0]
stats = { name = "Bell", type = "Bell", price = 3 }
"#;

pub(crate) fn garage() -> (MemoryScene, PartRegistry) {
    let layout = GarageLayout::from_toml_str(LAYOUT).unwrap();
    MemoryScene::from_layout(&layout).unwrap()
}

/// Ray straight down -Z through `x`.
pub(crate) fn ray_at(x: f32) -> Ray {
    Ray::new(Vec3::new(x, 0.0, 5.0), Vec3::NEG_Z)
}

/// Ray that hits nothing.
pub(crate) fn ray_miss() -> Ray {
    ray_at(20.0)
}

/// UI sink that remembers what is showing.
#[derive(Debug, Default)]
pub(crate) struct RecordingSink {
    pub(crate) info: Option<PartInfoView>,
    pub(crate) alternatives: Option<Vec<AlternativeSummary>>,
    pub(crate) info_updates: usize,
}

impl InfoSink for RecordingSink {
    fn show_part_info(&mut self, info: &PartInfoView) {
        self.info = Some(info.clone());
        self.info_updates += 1;
    }

    fn hide_part_info(&mut self) {
        self.info = None;
    }

    fn show_alternatives(&mut self, entries: &[AlternativeSummary]) {
        self.alternatives = Some(entries.to_vec());
    }

    fn hide_alternatives(&mut self) {
        self.alternatives = None;
    }
}
