//! Capabilities the interaction core needs from the host scene.
//!
//! Every method tolerates stale handles: a surface or node destroyed behind
//! the core's back reads as absent and writes to it are dropped.

use glam::{Affine3A, Vec3};

use super::handle::{MaterialId, ModelId, NodeId, SurfaceId};
use crate::picking::{PickHit, Ray};

/// Material-slot access and surface discovery.
pub trait SurfaceBackend {
    /// Current material-slot array of `surface`, or `None` if the surface no
    /// longer exists.
    fn material_slots(&self, surface: SurfaceId) -> Option<Vec<MaterialId>>;

    /// Overwrite the material-slot array of `surface`. Ignored for absent
    /// surfaces.
    fn set_material_slots(&mut self, surface: SurfaceId, slots: &[MaterialId]);

    /// All surfaces in the sub-tree rooted at `root` (including `root`'s own).
    fn discover_surfaces(&self, root: NodeId) -> Vec<SurfaceId>;
}

/// Instance lifecycle and transforms.
pub trait InstanceBackend {
    /// Instantiate `model` as a child of `parent`. `None` when the model is
    /// unknown or the parent is gone.
    fn instantiate(&mut self, model: ModelId, parent: NodeId) -> Option<NodeId>;

    /// Destroy `node` and its sub-tree. Ignored for absent nodes.
    fn destroy(&mut self, node: NodeId);

    /// Direct children of `node`, in creation order.
    fn children(&self, node: NodeId) -> Vec<NodeId>;

    /// Local (parent-relative) transform of `node`.
    fn local_transform(&self, node: NodeId) -> Option<Affine3A>;

    /// Replace the local (parent-relative) transform of `node`.
    fn set_local_transform(&mut self, node: NodeId, transform: Affine3A);

    /// World transform of `node`.
    fn world_transform(&self, node: NodeId) -> Option<Affine3A>;

    /// World-space origin of `node`.
    fn world_position(&self, node: NodeId) -> Option<Vec3> {
        self.world_transform(node)
            .map(|transform| Vec3::from(transform.translation))
    }
}

/// Ray intersection against selectable geometry.
pub trait PickingBackend {
    /// Nearest selectable hit along `ray`.
    fn intersect(&self, ray: &Ray) -> Option<PickHit>;
}

/// Everything the engine needs from a scene.
pub trait SceneBackend: SurfaceBackend + InstanceBackend + PickingBackend {}

impl<T> SceneBackend for T where
    T: SurfaceBackend + InstanceBackend + PickingBackend
{
}
