use super::catalog::AlternativeCatalog;
use super::record::{PartRecord, PartStats};
use super::renderer_set::RendererSet;
use crate::scene::{
    InstanceBackend, MaterialId, NodeId, ObjectId, SurfaceBackend,
};

/// Scene nodes a selectable part is built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PartNodes {
    /// The part itself; its origin is what the camera zooms onto.
    pub root: NodeId,
    /// Child under which the part's visual model lives.
    pub visuals: NodeId,
}

/// A pickable bike part: one live record, one renderer set, and the
/// alternatives it may be swapped for.
#[derive(Debug, Clone)]
pub struct SelectableObject {
    id: ObjectId,
    nodes: PartNodes,
    record: PartRecord,
    renderers: RendererSet,
    alternatives: AlternativeCatalog,
}

impl SelectableObject {
    /// Initialize a part, tracking every surface currently under
    /// `nodes.visuals`.
    #[must_use]
    pub fn new(
        id: ObjectId,
        nodes: PartNodes,
        stats: PartStats,
        highlight: MaterialId,
        scene: &impl SurfaceBackend,
    ) -> Self {
        let mut renderers = RendererSet::new(highlight);
        renderers.replace_visuals(nodes.visuals, scene);
        log::debug!(
            "{id} '{}' initialized with {} surfaces",
            stats.name,
            renderers.len()
        );
        Self {
            id,
            nodes,
            record: PartRecord::new(stats),
            renderers,
            alternatives: AlternativeCatalog::default(),
        }
    }

    /// Attach the alternatives this part can be swapped for.
    #[must_use]
    pub fn with_alternatives(mut self, alternatives: AlternativeCatalog) -> Self {
        self.alternatives = alternatives;
        self
    }

    /// Identity.
    #[must_use]
    pub fn id(&self) -> ObjectId {
        self.id
    }

    /// Scene nodes.
    #[must_use]
    pub fn nodes(&self) -> PartNodes {
        self.nodes
    }

    /// Live record.
    #[must_use]
    pub fn record(&self) -> &PartRecord {
        &self.record
    }

    /// Live record, for wear updates.
    pub fn record_mut(&mut self) -> &mut PartRecord {
        &mut self.record
    }

    /// Surface bookkeeping.
    #[must_use]
    pub fn renderers(&self) -> &RendererSet {
        &self.renderers
    }

    /// Surface bookkeeping, for adding or removing surfaces by hand.
    pub fn renderers_mut(&mut self) -> &mut RendererSet {
        &mut self.renderers
    }

    /// Alternatives.
    #[must_use]
    pub fn alternatives(&self) -> &AlternativeCatalog {
        &self.alternatives
    }

    /// Show the highlight on every surface.
    pub fn highlight(&self, scene: &mut impl SurfaceBackend) {
        self.renderers.highlight_all(scene);
    }

    /// Show the original materials on every surface.
    pub fn restore(&self, scene: &mut impl SurfaceBackend) {
        self.renderers.restore_all(scene);
    }

    /// Whether every tracked surface currently shows the highlight. Parts
    /// without surfaces never read as highlighted.
    #[must_use]
    pub fn is_highlighted(&self, scene: &impl SurfaceBackend) -> bool {
        !self.renderers.is_empty()
            && self
                .renderers
                .surfaces()
                .all(|s| self.renderers.is_highlighted(s, scene))
    }

    /// Swap to alternative `index`. See [`AlternativeCatalog::swap`].
    pub fn swap_to_alternative<S>(&mut self, index: usize, scene: &mut S) -> bool
    where
        S: SurfaceBackend + InstanceBackend,
    {
        self.alternatives.swap(
            index,
            &mut self.record,
            &mut self.renderers,
            self.nodes.visuals,
            scene,
        )
    }
}
