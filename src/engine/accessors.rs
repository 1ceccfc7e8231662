//! Read access and escape hatches for [`GarageEngine`].

use super::GarageEngine;
use crate::camera::FocusCameraController;
use crate::options::Options;
use crate::part::PartRegistry;
use crate::selection::SelectionController;

impl<S, U> GarageEngine<S, U> {
    /// The scene.
    #[must_use]
    pub fn scene(&self) -> &S {
        &self.scene
    }

    /// The scene, for host-driven changes outside the interaction core.
    pub fn scene_mut(&mut self) -> &mut S {
        &mut self.scene
    }

    /// Every registered part.
    #[must_use]
    pub fn parts(&self) -> &PartRegistry {
        &self.parts
    }

    /// Hover/selection state.
    #[must_use]
    pub fn selection(&self) -> &SelectionController {
        &self.selection
    }

    /// Camera controller; `camera().camera` is the view to render.
    #[must_use]
    pub fn camera(&self) -> &FocusCameraController {
        &self.camera
    }

    /// Viewport aspect ratio changed.
    pub fn resize(&mut self, aspect: f32) {
        self.camera.set_aspect(aspect);
    }

    /// UI sink.
    #[must_use]
    pub fn ui(&self) -> &U {
        &self.ui
    }

    /// UI sink, mutable.
    pub fn ui_mut(&mut self) -> &mut U {
        &mut self.ui
    }

    /// Current options.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }
}
