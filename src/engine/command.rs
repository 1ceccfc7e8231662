//! The garage's complete discrete vocabulary.
//!
//! Per-frame pointer and axis input goes through
//! [`GarageEngine::frame`](super::GarageEngine::frame). Everything a UI
//! button or script can trigger is a `GarageCommand` passed to
//! [`GarageEngine::execute`](super::GarageEngine::execute).

use crate::scene::ObjectId;

/// A discrete operation on the current selection.
///
/// The engine never cares *how* a command was triggered. Button, hotkey and
/// script all look identical:
///
/// ```ignore
/// engine.execute(GarageCommand::ShowAlternatives);
/// engine.execute(GarageCommand::BuyAlternative { index: 0 });
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GarageCommand {
    // ── Selection ───────────────────────────────────────────────────
    /// Select a part directly, as if it had been clicked.
    Select {
        /// Part to select.
        object: ObjectId,
    },

    /// Clear the selection and return the camera to orbit.
    Deselect,

    // ── Alternatives ────────────────────────────────────────────────
    /// Open the alternatives list for the selected part.
    ShowAlternatives,

    /// Close the alternatives list.
    CloseAlternatives,

    /// Swap the selected part for an alternative.
    BuyAlternative {
        /// Catalog index.
        index: usize,
    },

    /// Show an alternative's stats without swapping.
    PreviewAlternative {
        /// Catalog index.
        index: usize,
    },

    // ── Wear ────────────────────────────────────────────────────────
    /// Wear down the selected part.
    DamageSelected {
        /// Durability to remove.
        amount: f32,
    },

    /// Repair the selected part.
    RepairSelected {
        /// Durability to restore.
        amount: f32,
    },
}
