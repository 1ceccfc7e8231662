use glam::{Affine3A, Vec3};
use serde::{Deserialize, Serialize};

use super::record::{PartRecord, PartStats};
use super::renderer_set::RendererSet;
use crate::scene::{InstanceBackend, ModelId, NodeId, SurfaceBackend};

/// Ordered alternative stat blocks a part can be swapped for.
///
/// Entries are templates, never live parts: swapping copies an entry into
/// the live [`PartRecord`] and leaves the catalog untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AlternativeCatalog {
    entries: Vec<PartStats>,
}

impl AlternativeCatalog {
    /// Catalog over `entries`, in display order.
    #[must_use]
    pub fn new(entries: Vec<PartStats>) -> Self {
        Self { entries }
    }

    /// Number of alternatives.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether there are no alternatives.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Template at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&PartStats> {
        self.entries.get(index)
    }

    /// Templates with their indices.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &PartStats)> + '_ {
        self.entries.iter().enumerate()
    }

    /// Swap the live part for the template at `index`.
    ///
    /// Copies the template's stats into `record` and resets wear. When the
    /// template names a model, the visuals under `visual_anchor` are
    /// replaced and `renderers` is re-populated from the new instance.
    /// Returns `false`, touching nothing, when `index` is out of range.
    pub fn swap<S>(
        &self,
        index: usize,
        record: &mut PartRecord,
        renderers: &mut RendererSet,
        visual_anchor: NodeId,
        scene: &mut S,
    ) -> bool
    where
        S: SurfaceBackend + InstanceBackend,
    {
        let Some(template) = self.entries.get(index) else {
            log::debug!(
                "alternative {index} out of range ({} available)",
                self.entries.len()
            );
            return false;
        };

        record.apply_stats(template);
        log::debug!("swapped to alternative {index}: {}", record.name());

        if let Some(model) = template.model {
            replace_model(model, renderers, visual_anchor, scene);
        }
        true
    }
}

/// Tear down whatever hangs under `anchor` and instantiate `model` there.
///
/// The tracker is cleared before anything is destroyed and refilled only
/// once the new instance exists, so no stale surface is ever highlighted.
fn replace_model<S>(
    model: ModelId,
    renderers: &mut RendererSet,
    anchor: NodeId,
    scene: &mut S,
) where
    S: SurfaceBackend + InstanceBackend,
{
    // Snapshot first: destroying while walking the child list would
    // invalidate it.
    let previous = scene.children(anchor);

    renderers.clear_all(scene);
    for child in previous {
        scene.destroy(child);
    }

    let Some(instance) = scene.instantiate(model, anchor) else {
        log::warn!("could not instantiate {model} under {anchor}");
        return;
    };
    // Seat the instance on the anchor but keep the model's own scale.
    let scale = scene
        .local_transform(instance)
        .map_or(Vec3::ONE, |local| local.to_scale_rotation_translation().0);
    scene.set_local_transform(instance, Affine3A::from_scale(scale));
    renderers.replace_visuals(instance, &*scene);
    log::debug!(
        "{model} instantiated as {instance}, tracking {} surfaces",
        renderers.len()
    );
}
