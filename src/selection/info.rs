//! View models pushed to the UI and the sink that receives them.

use crate::options::DisplayOptions;
use crate::part::{PartRecord, PartStats};
use crate::scene::IconId;

/// Everything the info panel shows about one part.
#[derive(Debug, Clone, PartialEq)]
pub struct PartInfoView {
    /// Display name.
    pub name: String,
    /// Free-form description.
    pub description: String,
    /// Price with currency symbol.
    pub price_formatted: String,
    /// Durability bar fill, `0..=1`.
    pub durability_fraction: f32,
    /// Icon, if the part has one.
    pub icon: Option<IconId>,
    /// Type tag.
    pub type_label: String,
    /// Whether the "show alternatives" affordance is offered.
    pub alternatives_available: bool,
}

impl PartInfoView {
    /// View of a live part. The durability bar shows remaining wear.
    #[must_use]
    pub fn live(
        record: &PartRecord,
        display: &DisplayOptions,
        alternatives_available: bool,
    ) -> Self {
        Self::project(
            record.stats(),
            record.current_durability(),
            display,
            alternatives_available,
        )
    }

    /// Preview of a catalog template. The durability bar shows the
    /// template's maximum.
    #[must_use]
    pub fn template(
        stats: &PartStats,
        display: &DisplayOptions,
        alternatives_available: bool,
    ) -> Self {
        Self::project(stats, stats.durability, display, alternatives_available)
    }

    fn project(
        stats: &PartStats,
        durability: f32,
        display: &DisplayOptions,
        alternatives_available: bool,
    ) -> Self {
        Self {
            name: stats.name.clone(),
            description: stats.description.clone(),
            price_formatted: display.format_price(stats.price),
            durability_fraction: display.durability_fraction(durability),
            icon: stats.icon,
            type_label: stats.part_type.clone(),
            alternatives_available,
        }
    }
}

/// One row of the alternatives list.
#[derive(Debug, Clone, PartialEq)]
pub struct AlternativeSummary {
    /// Template name.
    pub name: String,
    /// Template icon.
    pub icon: Option<IconId>,
    /// Price with currency symbol.
    pub price_formatted: String,
    /// Labelled maximum durability.
    pub durability_formatted: String,
    /// Catalog index passed back on buy/preview.
    pub index: usize,
}

impl AlternativeSummary {
    /// Row for template `index`.
    #[must_use]
    pub fn new(index: usize, stats: &PartStats, display: &DisplayOptions) -> Self {
        Self {
            name: stats.name.clone(),
            icon: stats.icon,
            price_formatted: display.format_price(stats.price),
            durability_formatted: display.format_durability(stats.durability),
            index,
        }
    }
}

/// UI collaborator receiving part info and the alternatives list.
pub trait InfoSink {
    /// Show (or refresh) the info panel.
    fn show_part_info(&mut self, info: &PartInfoView);

    /// Hide the info panel.
    fn hide_part_info(&mut self);

    /// Show (or rebuild) the alternatives list.
    fn show_alternatives(&mut self, entries: &[AlternativeSummary]);

    /// Hide the alternatives list.
    fn hide_alternatives(&mut self);
}
