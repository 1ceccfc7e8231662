//! Hover and selection: the state machine, the UI view models it projects,
//! and the [`InfoSink`] those are pushed to.

mod controller;
mod info;
mod state;
#[cfg(test)]
pub(crate) mod testing;

pub use controller::{SelectionContext, SelectionController};
pub use info::{AlternativeSummary, InfoSink, PartInfoView};
pub use state::SelectionState;
