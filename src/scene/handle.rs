//! Opaque handles shared between the interaction core and the scene.
//!
//! The core never looks inside a handle; it only compares, hashes and hands
//! them back to the scene backend that issued them.

use std::fmt;

use serde::{Deserialize, Serialize};

macro_rules! handle {
    ($(#[$meta:meta])* $name:ident, $tag:literal) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord,
            Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(pub u32);

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!($tag, "#{}"), self.0)
            }
        }
    };
}

handle!(
    /// A node in the scene graph (a scene instance, or a child of one).
    NodeId,
    "node"
);
handle!(
    /// A visual sub-surface ("renderer") that carries material slots.
    SurfaceId,
    "surface"
);
handle!(
    /// A material that can be assigned to a surface slot.
    MaterialId,
    "material"
);
handle!(
    /// A prefabricated visual model that can be instantiated.
    ModelId,
    "model"
);
handle!(
    /// A UI icon image.
    IconId,
    "icon"
);
handle!(
    /// Identity of a selectable bike part.
    ObjectId,
    "part"
);
