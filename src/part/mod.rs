//! Bike parts: live records, alternative catalogs, and the surface
//! bookkeeping that lets a part be highlighted without losing its look.

mod catalog;
mod object;
mod record;
mod registry;
mod renderer_set;

pub use catalog::AlternativeCatalog;
pub use object::{PartNodes, SelectableObject};
pub use record::{PartRecord, PartStats, MAX_DURABILITY, MAX_RARITY};
pub use registry::PartRegistry;
pub use renderer_set::RendererSet;
