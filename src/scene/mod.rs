//! Scene access: opaque handles, the backend traits the interaction core
//! talks to, and a headless in-memory implementation.
//!
//! The core never owns scene objects. It holds [`NodeId`]s and
//! [`SurfaceId`]s and goes through [`SurfaceBackend`], [`InstanceBackend`]
//! and [`PickingBackend`] for everything else, so a rendering engine can
//! plug in by implementing those three traits.

mod backend;
mod handle;
mod layout;
mod memory;

pub use backend::{InstanceBackend, PickingBackend, SceneBackend, SurfaceBackend};
pub use handle::{IconId, MaterialId, ModelId, NodeId, ObjectId, SurfaceId};
pub use layout::{GarageLayout, ModelLayout, PartLayout};
pub use memory::{MemoryScene, ModelSurface};
