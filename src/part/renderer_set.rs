//! Per-part surface bookkeeping for non-destructive highlighting.
//!
//! A [`RendererSet`] remembers the material slots each tracked surface had
//! when it was added, so the shared highlight material can be swapped in and
//! out without ever losing the original look. A surface is tracked if and
//! only if its originals are recorded.

use rustc_hash::FxHashMap;

use crate::scene::{MaterialId, NodeId, SurfaceBackend, SurfaceId};

/// Tracked surfaces of one selectable part and their original materials.
#[derive(Debug, Clone)]
pub struct RendererSet {
    highlight: MaterialId,
    /// Insertion order, so highlight/restore visit surfaces predictably.
    order: Vec<SurfaceId>,
    originals: FxHashMap<SurfaceId, Vec<MaterialId>>,
}

impl RendererSet {
    /// Empty set that highlights with `highlight`.
    #[must_use]
    pub fn new(highlight: MaterialId) -> Self {
        Self {
            highlight,
            order: Vec::new(),
            originals: FxHashMap::default(),
        }
    }

    /// The shared highlight material.
    #[must_use]
    pub fn highlight_material(&self) -> MaterialId {
        self.highlight
    }

    /// Number of tracked surfaces.
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether nothing is tracked.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Whether `surface` is tracked.
    #[must_use]
    pub fn contains(&self, surface: SurfaceId) -> bool {
        self.originals.contains_key(&surface)
    }

    /// Tracked surfaces in insertion order.
    pub fn surfaces(&self) -> impl Iterator<Item = SurfaceId> + '_ {
        self.order.iter().copied()
    }

    /// Recorded original slots for `surface`.
    #[must_use]
    pub fn original_slots(&self, surface: SurfaceId) -> Option<&[MaterialId]> {
        self.originals.get(&surface).map(Vec::as_slice)
    }

    /// Start tracking `surface`, capturing its current slots as the
    /// originals. Ignored if already tracked or absent from the scene.
    pub fn add(&mut self, surface: SurfaceId, scene: &impl SurfaceBackend) {
        if self.contains(surface) {
            return;
        }
        let Some(slots) = scene.material_slots(surface) else {
            return;
        };
        let _ = self.originals.insert(surface, slots);
        self.order.push(surface);
    }

    /// [`add`](Self::add) each surface.
    pub fn add_all(
        &mut self,
        surfaces: impl IntoIterator<Item = SurfaceId>,
        scene: &impl SurfaceBackend,
    ) {
        for surface in surfaces {
            self.add(surface, scene);
        }
    }

    /// Stop tracking `surface`, first restoring its originals if it is
    /// showing the highlight.
    pub fn remove(
        &mut self,
        surface: SurfaceId,
        scene: &mut impl SurfaceBackend,
    ) {
        let Some(originals) = self.originals.remove(&surface) else {
            return;
        };
        if self.is_highlighted(surface, &*scene) {
            scene.set_material_slots(surface, &originals);
        }
        self.order.retain(|s| *s != surface);
    }

    /// Restore every surface, then forget them all. Call before the visual
    /// sub-tree is destroyed or detached.
    pub fn clear_all(&mut self, scene: &mut impl SurfaceBackend) {
        self.restore_all(scene);
        self.originals.clear();
        self.order.clear();
    }

    /// Fill every slot of every tracked surface with the highlight material.
    /// Slot counts are preserved.
    pub fn highlight_all(&self, scene: &mut impl SurfaceBackend) {
        for &surface in &self.order {
            self.apply_highlight(surface, scene);
        }
    }

    /// Write back the recorded originals of every tracked surface.
    pub fn restore_all(&self, scene: &mut impl SurfaceBackend) {
        for &surface in &self.order {
            self.apply_original(surface, scene);
        }
    }

    /// Highlight a single tracked surface.
    pub fn highlight_one(
        &self,
        surface: SurfaceId,
        scene: &mut impl SurfaceBackend,
    ) {
        if self.contains(surface) {
            self.apply_highlight(surface, scene);
        }
    }

    /// Restore a single tracked surface.
    pub fn restore_one(
        &self,
        surface: SurfaceId,
        scene: &mut impl SurfaceBackend,
    ) {
        self.apply_original(surface, scene);
    }

    /// Track every surface under `root`. Existing entries are kept, so call
    /// [`clear_all`](Self::clear_all) first when replacing a model.
    pub fn replace_visuals(
        &mut self,
        root: NodeId,
        scene: &impl SurfaceBackend,
    ) {
        let surfaces = scene.discover_surfaces(root);
        self.add_all(surfaces, scene);
    }

    /// Whether `surface` currently shows the highlight in every slot.
    #[must_use]
    pub fn is_highlighted(
        &self,
        surface: SurfaceId,
        scene: &impl SurfaceBackend,
    ) -> bool {
        scene.material_slots(surface).is_some_and(|slots| {
            !slots.is_empty() && slots.iter().all(|m| *m == self.highlight)
        })
    }

    fn apply_highlight(
        &self,
        surface: SurfaceId,
        scene: &mut impl SurfaceBackend,
    ) {
        // Read the live slot count; the surface may have been destroyed.
        let Some(slots) = scene.material_slots(surface) else {
            return;
        };
        let highlighted = vec![self.highlight; slots.len()];
        scene.set_material_slots(surface, &highlighted);
    }

    fn apply_original(
        &self,
        surface: SurfaceId,
        scene: &mut impl SurfaceBackend,
    ) {
        if let Some(originals) = self.originals.get(&surface) {
            scene.set_material_slots(surface, originals);
        }
    }
}
