use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Display", inline)]
#[serde(default)]
/// How part information is formatted for the UI.
pub struct DisplayOptions {
    /// Prefix for every price.
    #[schemars(title = "Currency Symbol")]
    pub currency_symbol: String,
    /// Prefix for durability in alternative summaries.
    #[schemars(skip)]
    pub durability_label: String,
    /// Full-scale value of the durability bar.
    #[schemars(skip)]
    pub durability_scale: f32,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            currency_symbol: "$".to_owned(),
            durability_label: "Dur: ".to_owned(),
            durability_scale: 100.0,
        }
    }
}

impl DisplayOptions {
    /// `"$50"`.
    #[must_use]
    pub fn format_price(&self, price: u32) -> String {
        format!("{}{price}", self.currency_symbol)
    }

    /// `"Dur: 80"` (rounded to whole units).
    #[must_use]
    pub fn format_durability(&self, durability: f32) -> String {
        format!("{}{durability:.0}", self.durability_label)
    }

    /// `durability` as a `0..=1` fraction of the bar.
    #[must_use]
    pub fn durability_fraction(&self, durability: f32) -> f32 {
        if self.durability_scale <= 0.0 {
            return 0.0;
        }
        (durability / self.durability_scale).clamp(0.0, 1.0)
    }
}
