//! Input handling: platform events, the per-frame input snapshot, and the
//! processor that folds one into the other.

/// Platform-agnostic input events.
pub mod event;
/// Per-frame input snapshot.
pub mod frame;
/// Folds raw events into frame snapshots.
pub mod processor;

pub use event::{InputEvent, MouseButton};
pub use frame::{Axis, FrameInput};
pub use processor::InputProcessor;
