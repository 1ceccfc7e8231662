use serde::{Deserialize, Serialize};

use crate::scene::{IconId, ModelId};

/// Upper bound of the durability scale.
pub const MAX_DURABILITY: f32 = 100.0;
/// Upper bound of the rarity scale.
pub const MAX_RARITY: u8 = 100;

/// Stat block describing one physical part.
///
/// Used both for the live part on the bike and for alternative templates in
/// an [`AlternativeCatalog`](super::AlternativeCatalog). Missing fields in
/// catalog data take the defaults below.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PartStats {
    /// Display name.
    pub name: String,
    /// Free-form description.
    pub description: String,
    /// Type tag used for grouping and compatibility.
    #[serde(rename = "type")]
    pub part_type: String,
    /// Shop price.
    pub price: u32,
    /// Maximum durability, `0..=100`.
    pub durability: f32,
    /// Weight, never negative.
    pub weight: f32,
    /// Rarity, `0..=100`.
    pub rarity: u8,
    /// UI icon.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<IconId>,
    /// Visual model to instantiate for this part.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<ModelId>,
}

impl Default for PartStats {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: "Part description".to_owned(),
            part_type: "Type".to_owned(),
            price: 10,
            durability: MAX_DURABILITY,
            weight: 1.0,
            rarity: 0,
            icon: None,
            model: None,
        }
    }
}

impl PartStats {
    /// Named stat block with default values for everything else.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Clamp every ranged field into its valid range. NaN durability or
    /// weight becomes zero.
    #[must_use]
    pub fn sanitized(mut self) -> Self {
        self.durability = clamp_or_zero(self.durability, MAX_DURABILITY);
        self.weight = clamp_or_zero(self.weight, f32::MAX);
        self.rarity = self.rarity.min(MAX_RARITY);
        self
    }
}

fn clamp_or_zero(value: f32, max: f32) -> f32 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, max)
    }
}

/// The live part carried by a selectable object: its stats plus wear.
///
/// `current_durability` always stays within `0..=stats.durability`.
#[derive(Debug, Clone, PartialEq)]
pub struct PartRecord {
    stats: PartStats,
    current_durability: f32,
}

impl PartRecord {
    /// Live record at full durability.
    #[must_use]
    pub fn new(stats: PartStats) -> Self {
        let stats = stats.sanitized();
        let current_durability = stats.durability;
        Self {
            stats,
            current_durability,
        }
    }

    /// Current stats.
    #[must_use]
    pub fn stats(&self) -> &PartStats {
        &self.stats
    }

    /// Display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.stats.name
    }

    /// Type tag.
    #[must_use]
    pub fn part_type(&self) -> &str {
        &self.stats.part_type
    }

    /// Maximum durability.
    #[must_use]
    pub fn max_durability(&self) -> f32 {
        self.stats.durability
    }

    /// Remaining durability.
    #[must_use]
    pub fn current_durability(&self) -> f32 {
        self.current_durability
    }

    /// Whether the part has been worn down to zero.
    #[must_use]
    pub fn is_broken(&self) -> bool {
        self.current_durability <= 0.0
    }

    /// Overwrite the stats with `template` (every field except the type
    /// tag) and reset wear to the new maximum.
    pub fn apply_stats(&mut self, template: &PartStats) {
        let template = template.clone().sanitized();
        self.stats.name = template.name;
        self.stats.description = template.description;
        self.stats.durability = template.durability;
        self.stats.price = template.price;
        self.stats.weight = template.weight;
        self.stats.rarity = template.rarity;
        self.stats.icon = template.icon;
        self.stats.model = template.model;
        self.reset_durability();
    }

    /// Wear the part down. Returns `true` if this hit broke it.
    pub fn take_damage(&mut self, amount: f32) -> bool {
        if self.is_broken() {
            return false;
        }
        self.current_durability =
            (self.current_durability - amount.max(0.0)).max(0.0);
        let broke = self.is_broken();
        if broke {
            log::info!("{} has broken", self.stats.name);
        }
        broke
    }

    /// Restore durability, never past the maximum.
    pub fn repair(&mut self, amount: f32) {
        self.current_durability = (self.current_durability + amount.max(0.0))
            .min(self.stats.durability);
    }

    /// Back to full durability.
    pub fn reset_durability(&mut self) {
        self.current_durability = self.stats.durability;
    }

    /// Price scaled by remaining durability, rounded.
    #[must_use]
    pub fn current_value(&self) -> u32 {
        if self.stats.durability <= 0.0 {
            return 0;
        }
        let fraction = self.current_durability / self.stats.durability;
        (self.stats.price as f32 * fraction).round() as u32
    }
}
