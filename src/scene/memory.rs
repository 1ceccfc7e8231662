//! Headless in-memory scene graph.
//!
//! Nodes form a tree with parent-relative [`Affine3A`] transforms. A node may
//! carry one surface, modelled as an axis-aligned box (in node space) with a
//! material-slot array. Models are flat lists of such boxes that
//! [`instantiate`](InstanceBackend::instantiate) turns into a small sub-tree.
//! Picking returns the nearest surface owned by a node tagged with an
//! [`ObjectId`].

use glam::{Affine3A, Vec3};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::backend::{InstanceBackend, PickingBackend, SurfaceBackend};
use super::handle::{MaterialId, ModelId, NodeId, ObjectId, SurfaceId};
use crate::picking::{PickHit, Ray};

/// One box-shaped surface of a model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelSurface {
    /// Box center relative to the model root.
    #[serde(default)]
    pub offset: [f32; 3],
    /// Half size of the box along each axis.
    pub half_extents: [f32; 3],
    /// Material slots (one per sub-mesh).
    pub materials: Vec<MaterialId>,
}

#[derive(Debug, Clone)]
struct Node {
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    local: Affine3A,
    surface: Option<SurfaceId>,
    object: Option<ObjectId>,
}

#[derive(Debug, Clone)]
struct Surface {
    node: NodeId,
    half_extents: Vec3,
    slots: Vec<MaterialId>,
}

/// In-memory implementation of every scene backend trait.
#[derive(Debug, Default)]
pub struct MemoryScene {
    nodes: FxHashMap<NodeId, Node>,
    surfaces: FxHashMap<SurfaceId, Surface>,
    models: FxHashMap<ModelId, Vec<ModelSurface>>,
    model_roots: FxHashMap<ModelId, Affine3A>,
    next_node: u32,
    next_surface: u32,
    instantiated: usize,
    destroyed: usize,
}

impl MemoryScene {
    /// Empty scene.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a node. A missing `parent` makes it a root.
    pub fn spawn_node(
        &mut self,
        parent: Option<NodeId>,
        local: Affine3A,
    ) -> NodeId {
        let id = NodeId(self.next_node);
        self.next_node += 1;
        let parent = parent.filter(|p| self.nodes.contains_key(p));
        if let Some(parent_node) = parent.and_then(|p| self.nodes.get_mut(&p))
        {
            parent_node.children.push(id);
        }
        let _ = self.nodes.insert(
            id,
            Node {
                parent,
                children: Vec::new(),
                local,
                surface: None,
                object: None,
            },
        );
        id
    }

    /// Give `node` a box surface. Replaces any surface it already had.
    pub fn attach_surface(
        &mut self,
        node: NodeId,
        half_extents: Vec3,
        materials: Vec<MaterialId>,
    ) -> Option<SurfaceId> {
        let id = SurfaceId(self.next_surface);
        let entry = self.nodes.get_mut(&node)?;
        self.next_surface += 1;
        if let Some(old) = entry.surface.replace(id) {
            let _ = self.surfaces.remove(&old);
        }
        let _ = self.surfaces.insert(
            id,
            Surface {
                node,
                half_extents,
                slots: materials,
            },
        );
        Some(id)
    }

    /// Register (or replace) a model that can later be instantiated.
    pub fn define_model(&mut self, id: ModelId, surfaces: Vec<ModelSurface>) {
        let _ = self.models.insert(id, surfaces);
    }

    /// Pose given to the root of every new instance of `model`. Defaults to
    /// identity.
    pub fn set_model_root(&mut self, model: ModelId, root: Affine3A) {
        let _ = self.model_roots.insert(model, root);
    }

    /// Whether `model` has been defined.
    #[must_use]
    pub fn has_model(&self, model: ModelId) -> bool {
        self.models.contains_key(&model)
    }

    /// Mark `node` as the root of a selectable part. Hits on any surface in
    /// its sub-tree resolve to `object`.
    pub fn tag_object(&mut self, node: NodeId, object: ObjectId) {
        if let Some(entry) = self.nodes.get_mut(&node) {
            entry.object = Some(object);
        }
    }

    /// Whether `node` is alive.
    #[must_use]
    pub fn contains_node(&self, node: NodeId) -> bool {
        self.nodes.contains_key(&node)
    }

    /// Whether `surface` is alive.
    #[must_use]
    pub fn contains_surface(&self, surface: SurfaceId) -> bool {
        self.surfaces.contains_key(&surface)
    }

    /// Number of live nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Total successful [`instantiate`](InstanceBackend::instantiate) calls.
    #[must_use]
    pub fn instantiate_count(&self) -> usize {
        self.instantiated
    }

    /// Total [`destroy`](InstanceBackend::destroy) calls that removed a node.
    #[must_use]
    pub fn destroy_count(&self) -> usize {
        self.destroyed
    }

    /// Node that carries `surface`.
    #[must_use]
    pub fn surface_node(&self, surface: SurfaceId) -> Option<NodeId> {
        self.surfaces.get(&surface).map(|s| s.node)
    }

    /// World-space bounds of `surface`.
    #[must_use]
    pub fn surface_bounds(&self, surface: SurfaceId) -> Option<(Vec3, Vec3)> {
        let s = self.surfaces.get(&surface)?;
        let world = self.world_transform(s.node)?;
        let he = s.half_extents;
        let mut min = Vec3::splat(f32::INFINITY);
        let mut max = Vec3::splat(f32::NEG_INFINITY);
        for corner in 0..8u8 {
            let local = Vec3::new(
                if corner & 1 == 0 { -he.x } else { he.x },
                if corner & 2 == 0 { -he.y } else { he.y },
                if corner & 4 == 0 { -he.z } else { he.z },
            );
            let p = world.transform_point3(local);
            min = min.min(p);
            max = max.max(p);
        }
        Some((min, max))
    }

    /// Nearest tagged ancestor (or self) of `node`.
    fn owning_object(&self, mut node: NodeId) -> Option<ObjectId> {
        loop {
            let entry = self.nodes.get(&node)?;
            if let Some(object) = entry.object {
                return Some(object);
            }
            node = entry.parent?;
        }
    }
}

impl SurfaceBackend for MemoryScene {
    fn material_slots(&self, surface: SurfaceId) -> Option<Vec<MaterialId>> {
        self.surfaces.get(&surface).map(|s| s.slots.clone())
    }

    fn set_material_slots(&mut self, surface: SurfaceId, slots: &[MaterialId]) {
        if let Some(s) = self.surfaces.get_mut(&surface) {
            s.slots = slots.to_vec();
        }
    }

    fn discover_surfaces(&self, root: NodeId) -> Vec<SurfaceId> {
        let mut found = Vec::new();
        let mut stack = vec![root];
        while let Some(node) = stack.pop() {
            let Some(entry) = self.nodes.get(&node) else {
                continue;
            };
            found.extend(entry.surface);
            // Reverse so children are visited in creation order.
            stack.extend(entry.children.iter().rev());
        }
        found
    }
}

impl InstanceBackend for MemoryScene {
    fn instantiate(&mut self, model: ModelId, parent: NodeId) -> Option<NodeId> {
        if !self.nodes.contains_key(&parent) {
            return None;
        }
        let surfaces = self.models.get(&model)?.clone();
        let pose = self
            .model_roots
            .get(&model)
            .copied()
            .unwrap_or(Affine3A::IDENTITY);
        let root = self.spawn_node(Some(parent), pose);
        for surface in surfaces {
            let node = self.spawn_node(
                Some(root),
                Affine3A::from_translation(Vec3::from(surface.offset)),
            );
            let _ = self.attach_surface(
                node,
                Vec3::from(surface.half_extents),
                surface.materials,
            );
        }
        self.instantiated += 1;
        Some(root)
    }

    fn destroy(&mut self, node: NodeId) {
        let Some(parent) = self.nodes.get(&node).map(|n| n.parent) else {
            return;
        };
        if let Some(parent) = parent.and_then(|p| self.nodes.get_mut(&p)) {
            parent.children.retain(|c| *c != node);
        }
        let mut stack = vec![node];
        while let Some(current) = stack.pop() {
            if let Some(removed) = self.nodes.remove(&current) {
                if let Some(surface) = removed.surface {
                    let _ = self.surfaces.remove(&surface);
                }
                stack.extend(removed.children);
            }
        }
        self.destroyed += 1;
    }

    fn children(&self, node: NodeId) -> Vec<NodeId> {
        self.nodes
            .get(&node)
            .map(|n| n.children.clone())
            .unwrap_or_default()
    }

    fn local_transform(&self, node: NodeId) -> Option<Affine3A> {
        self.nodes.get(&node).map(|n| n.local)
    }

    fn set_local_transform(&mut self, node: NodeId, transform: Affine3A) {
        if let Some(entry) = self.nodes.get_mut(&node) {
            entry.local = transform;
        }
    }

    fn world_transform(&self, node: NodeId) -> Option<Affine3A> {
        let mut entry = self.nodes.get(&node)?;
        let mut world = entry.local;
        while let Some(parent) = entry.parent {
            entry = self.nodes.get(&parent)?;
            world = entry.local * world;
        }
        Some(world)
    }
}

impl PickingBackend for MemoryScene {
    fn intersect(&self, ray: &Ray) -> Option<PickHit> {
        let mut best: Option<PickHit> = None;
        for (&surface, s) in &self.surfaces {
            let Some(object) = self.owning_object(s.node) else {
                continue;
            };
            let Some((min, max)) = self.surface_bounds(surface) else {
                continue;
            };
            let Some(distance) = ray.intersect_aabb(min, max) else {
                continue;
            };
            let closer = best.as_ref().is_none_or(|b| {
                distance < b.distance
                    || (distance == b.distance && surface < b.surface)
            });
            if closer {
                best = Some(PickHit {
                    object,
                    surface,
                    distance,
                });
            }
        }
        best
    }
}
