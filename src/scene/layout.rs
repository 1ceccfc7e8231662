//! TOML garage layouts.
//!
//! A layout names the models a garage can instantiate and the bike parts
//! placed in it, each with its stats and alternatives:
//!
//! ```toml
//! highlight_material = 900
//!
//! [[models]]
//! id = 1
//! surfaces = [{ half_extents = [0.3, 0.3, 0.05], materials = [10] }]
//!
//! [[parts]]
//! id = 1
//! position = [0.0, 0.3, 1.0]
//! stats = { name = "Road Wheel", type = "Wheel", price = 50, model = 1 }
//! alternatives = [{ name = "Trail Wheel", type = "Wheel", price = 80, model = 2 }]
//! ```

use std::path::Path;

use glam::{Affine3A, Vec3};
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::backend::InstanceBackend;
use super::handle::{MaterialId, ModelId, ObjectId};
use super::memory::{MemoryScene, ModelSurface};
use crate::error::GarageError;
use crate::part::{
    AlternativeCatalog, PartNodes, PartRegistry, PartStats, SelectableObject,
};

/// One instantiable model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelLayout {
    /// Handle the part stats refer to.
    pub id: ModelId,
    /// Box surfaces making up the model.
    pub surfaces: Vec<ModelSurface>,
}

/// One selectable part placed in the garage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartLayout {
    /// Identity of the part.
    pub id: ObjectId,
    /// World-space position of the part's root.
    #[serde(default)]
    pub position: [f32; 3],
    /// Initial stats. `stats.model` is instantiated under the part.
    #[serde(default)]
    pub stats: PartStats,
    /// Templates the part can be swapped for.
    #[serde(default)]
    pub alternatives: Vec<PartStats>,
}

/// A full garage: models, parts, and the highlight material.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GarageLayout {
    /// Material swapped onto every slot of a highlighted part.
    pub highlight_material: MaterialId,
    /// Model definitions.
    #[serde(default)]
    pub models: Vec<ModelLayout>,
    /// Placed parts.
    #[serde(default)]
    pub parts: Vec<PartLayout>,
}

impl GarageLayout {
    /// Parse a layout from TOML text and validate it.
    ///
    /// # Errors
    ///
    /// [`GarageError::LayoutParse`] for malformed TOML or duplicate ids,
    /// [`GarageError::UnknownModel`] for dangling model references.
    pub fn from_toml_str(content: &str) -> Result<Self, GarageError> {
        let layout: Self = toml::from_str(content)
            .map_err(|e| GarageError::LayoutParse(e.to_string()))?;
        layout.validate()?;
        Ok(layout)
    }

    /// Load and validate a layout file.
    ///
    /// # Errors
    ///
    /// As [`from_toml_str`](Self::from_toml_str), plus
    /// [`GarageError::Io`] when the file cannot be read.
    pub fn load(path: &Path) -> Result<Self, GarageError> {
        let content = std::fs::read_to_string(path)?;
        let layout = Self::from_toml_str(&content)?;
        log::info!(
            "loaded garage layout {} ({} models, {} parts)",
            path.display(),
            layout.models.len(),
            layout.parts.len()
        );
        Ok(layout)
    }

    /// Check that ids are unique and every referenced model is defined.
    ///
    /// # Errors
    ///
    /// The first duplicate id or undefined model found.
    pub fn validate(&self) -> Result<(), GarageError> {
        let mut models = FxHashSet::default();
        for model in &self.models {
            if !models.insert(model.id) {
                return Err(GarageError::LayoutParse(format!(
                    "{} defined twice",
                    model.id
                )));
            }
        }

        let mut parts = FxHashSet::default();
        for part in &self.parts {
            if !parts.insert(part.id) {
                return Err(GarageError::LayoutParse(format!(
                    "{} placed twice",
                    part.id
                )));
            }
            let referenced = std::iter::once(&part.stats)
                .chain(&part.alternatives)
                .filter_map(|stats| stats.model);
            for model in referenced {
                if !models.contains(&model) {
                    return Err(GarageError::UnknownModel(model));
                }
            }
        }
        Ok(())
    }
}

impl MemoryScene {
    /// Build a scene from `layout` and register every placed part.
    ///
    /// # Errors
    ///
    /// Returns [`GarageError`] if the layout fails validation.
    pub fn from_layout(
        layout: &GarageLayout,
    ) -> Result<(Self, PartRegistry), GarageError> {
        layout.validate()?;

        let mut scene = Self::new();
        for model in &layout.models {
            scene.define_model(model.id, model.surfaces.clone());
        }

        let mut registry = PartRegistry::new();
        for part in &layout.parts {
            let root = scene.spawn_node(
                None,
                Affine3A::from_translation(Vec3::from(part.position)),
            );
            scene.tag_object(root, part.id);
            let visuals = scene.spawn_node(Some(root), Affine3A::IDENTITY);
            if let Some(model) = part.stats.model {
                let _ = scene
                    .instantiate(model, visuals)
                    .ok_or(GarageError::UnknownModel(model))?;
            }

            let alternatives = part
                .alternatives
                .iter()
                .cloned()
                .map(PartStats::sanitized)
                .collect();
            let object = SelectableObject::new(
                part.id,
                PartNodes { root, visuals },
                part.stats.clone().sanitized(),
                layout.highlight_material,
                &scene,
            )
            .with_alternatives(AlternativeCatalog::new(alternatives));
            let _ = registry.insert(object);
        }
        Ok((scene, registry))
    }
}
