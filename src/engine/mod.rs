//! The garage engine: one owner for the scene, parts, selection, camera
//! and UI sink.
//!
//! ```ignore
//! let (scene, parts) = MemoryScene::from_layout(&layout)?;
//! let mut engine = GarageEngine::new(scene, parts, ui, options, aspect);
//!
//! // Each frame:
//! let frame = input.end_frame(&engine.camera().camera, viewport);
//! engine.frame(&frame, dt);
//!
//! // From UI buttons:
//! engine.execute(GarageCommand::BuyAlternative { index: 0 });
//! ```

mod accessors;
/// Discrete commands.
pub mod command;

use self::command::GarageCommand;
use crate::camera::FocusCameraController;
use crate::input::FrameInput;
use crate::options::Options;
use crate::part::{PartRegistry, SelectableObject};
use crate::scene::{ObjectId, SceneBackend};
use crate::selection::{InfoSink, SelectionContext, SelectionController};

/// Owns every piece of the interaction core and runs the per-frame pass.
pub struct GarageEngine<S, U> {
    scene: S,
    parts: PartRegistry,
    selection: SelectionController,
    camera: FocusCameraController,
    ui: U,
    options: Options,
}

impl<S: SceneBackend, U: InfoSink> GarageEngine<S, U> {
    /// Engine over a scene whose parts are already registered.
    #[must_use]
    pub fn new(
        scene: S,
        parts: PartRegistry,
        ui: U,
        options: Options,
        aspect: f32,
    ) -> Self {
        let camera = FocusCameraController::new(&options.camera, aspect);
        log::info!("garage engine ready with {} parts", parts.len());
        Self {
            scene,
            parts,
            selection: SelectionController::new(),
            camera,
            ui,
            options,
        }
    }

    /// Borrow everything the selection controller works on.
    fn split(
        &mut self,
    ) -> (&mut SelectionController, SelectionContext<'_, S, U>) {
        (
            &mut self.selection,
            SelectionContext {
                scene: &mut self.scene,
                parts: &mut self.parts,
                camera: &mut self.camera,
                ui: &mut self.ui,
                display: &self.options.display,
            },
        )
    }

    /// One interaction pass: hover, selection, then camera.
    pub fn frame(&mut self, input: &FrameInput, dt: f32) {
        let (selection, mut ctx) = self.split();
        selection.update(input, &mut ctx);
        self.camera.update(input, dt);
    }

    /// Run a discrete command. Returns `false` when it did nothing, e.g.
    /// no selection or an out-of-range alternative index.
    pub fn execute(&mut self, command: GarageCommand) -> bool {
        log::debug!("execute {command:?}");
        let (selection, mut ctx) = self.split();
        match command {
            GarageCommand::Select { object } => {
                selection.select_object(object, &mut ctx)
            }
            GarageCommand::Deselect => selection.deselect(&mut ctx),
            GarageCommand::ShowAlternatives => {
                selection.show_alternatives(&mut ctx)
            }
            GarageCommand::CloseAlternatives => {
                let open = selection.is_alternatives_open();
                selection.close_alternatives(ctx.ui);
                open
            }
            GarageCommand::BuyAlternative { index } => {
                selection.buy_alternative(index, &mut ctx)
            }
            GarageCommand::PreviewAlternative { index } => {
                selection.preview_alternative(index, &mut ctx)
            }
            GarageCommand::DamageSelected { amount } => {
                selection.damage_selected(amount, &mut ctx)
            }
            GarageCommand::RepairSelected { amount } => {
                selection.repair_selected(amount, &mut ctx)
            }
        }
    }

    /// Register another part. A part already registered under the same id
    /// is dropped from the selection first and returned.
    ///
    /// `part` must not have been built over visuals that were highlighted
    /// at the time, or it records the highlight as their original
    /// materials. Use [`register_part_with`](Self::register_part_with) to
    /// rebuild a part that may be hovered or selected.
    pub fn register_part(
        &mut self,
        part: SelectableObject,
    ) -> Option<SelectableObject> {
        let _ = self.release(part.id());
        self.parts.insert(part)
    }

    /// Release `id`, then build its replacement from the restored scene
    /// and register it. Returns the part it replaced.
    pub fn register_part_with<F>(
        &mut self,
        id: ObjectId,
        build: F,
    ) -> Option<SelectableObject>
    where
        F: FnOnce(&S) -> SelectableObject,
    {
        let _ = self.release(id);
        let part = build(&self.scene);
        self.register_part(part)
    }

    /// Drop `id` from the hover or selection, restoring its materials.
    /// Returns `false` when it was neither.
    pub fn release(&mut self, id: ObjectId) -> bool {
        if self.selection.hovered() != Some(id) {
            return false;
        }
        let (selection, mut ctx) = self.split();
        if !selection.deselect(&mut ctx) {
            selection.clear_hover(&mut ctx);
        }
        log::debug!("released {id}");
        true
    }

    /// Replace the options. The camera keeps its orbit but picks up new
    /// speeds, bands and projection.
    pub fn apply_options(&mut self, options: Options) {
        self.camera.apply_options(&options.camera);
        self.options = options;
        if self.selection.selected().is_some() {
            let (selection, mut ctx) = self.split();
            selection.populate_info(&mut ctx);
        }
        log::info!("options applied");
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;
    use crate::camera::CameraMode;
    use crate::scene::MemoryScene;
    use crate::selection::testing::{
        garage, ray_at, ray_miss, RecordingSink, HIGHLIGHT, SEAT, WHEEL,
    };
    use crate::selection::SelectionState;

    fn engine() -> GarageEngine<MemoryScene, RecordingSink> {
        let (scene, parts) = garage();
        GarageEngine::new(
            scene,
            parts,
            RecordingSink::default(),
            Options::default(),
            16.0 / 9.0,
        )
    }

    #[test]
    fn frame_runs_selection_then_camera() {
        let mut engine = engine();
        engine.frame(&FrameInput::pointing(ray_at(0.0)).with_primary(), 0.016);
        assert_eq!(engine.selection().selected(), Some(WHEEL));
        assert!(engine.camera().is_zoomed());

        // Focused camera pans instead of orbiting.
        let held = FrameInput::pointing(ray_at(0.0)).with_axes(1.0, 0.0, 0.0);
        engine.frame(&held, 0.5);
        assert!(engine.camera().pan_offset().length() > 0.0);
        assert_eq!(engine.camera().azimuth(), 0.0);
    }

    #[test]
    fn full_session_leaves_scene_clean() {
        let mut engine = engine();
        engine.frame(&FrameInput::pointing(ray_at(0.0)), 0.016);
        engine.frame(&FrameInput::pointing(ray_at(0.0)).with_primary(), 0.016);

        assert!(engine.execute(GarageCommand::ShowAlternatives));
        assert_eq!(engine.ui().alternatives.as_ref().map(Vec::len), Some(2));
        assert!(engine.execute(GarageCommand::PreviewAlternative { index: 0 }));
        assert_eq!(engine.ui().info.as_ref().unwrap().name, "Trail Wheel");
        assert!(engine.execute(GarageCommand::BuyAlternative { index: 0 }));
        assert!(engine.execute(GarageCommand::CloseAlternatives));
        assert!(!engine.execute(GarageCommand::CloseAlternatives));

        let wheel = engine.parts().get(WHEEL).unwrap();
        assert!(wheel.is_highlighted(engine.scene()));

        engine.frame(&FrameInput::pointing(ray_at(0.0)).with_secondary(), 0.016);
        let wheel = engine.parts().get(WHEEL).unwrap();
        assert!(!wheel.is_highlighted(engine.scene()));
        assert_eq!(wheel.record().name(), "Trail Wheel");
        assert_eq!(engine.selection().state(), SelectionState::Idle);
        assert_eq!(engine.camera().mode(), CameraMode::Orbiting);
        assert!(engine.ui().info.is_none());
    }

    #[test]
    fn commands_without_selection_do_nothing() {
        let mut engine = engine();
        for command in [
            GarageCommand::Deselect,
            GarageCommand::ShowAlternatives,
            GarageCommand::CloseAlternatives,
            GarageCommand::BuyAlternative { index: 0 },
            GarageCommand::PreviewAlternative { index: 0 },
            GarageCommand::DamageSelected { amount: 5.0 },
            GarageCommand::RepairSelected { amount: 5.0 },
            GarageCommand::Select {
                object: ObjectId(404),
            },
        ] {
            assert!(!engine.execute(command), "{command:?}");
        }
        assert!(engine.ui().info.is_none());
    }

    #[test]
    fn select_command_focuses_camera() {
        let mut engine = engine();
        assert!(engine.execute(GarageCommand::Select { object: SEAT }));
        assert_eq!(
            engine.camera().mode(),
            CameraMode::Zoomed {
                target: Vec3::new(3.0, 0.0, 0.0)
            }
        );
        assert!(engine.execute(GarageCommand::DamageSelected { amount: 100.0 }));
        let seat = engine.parts().get(SEAT).unwrap();
        assert!(seat.record().is_broken());
        assert_eq!(seat.record().current_value(), 0);
        assert_eq!(engine.ui().info.as_ref().unwrap().durability_fraction, 0.0);
    }

    #[test]
    fn reregistering_selected_part_clears_selection() {
        let mut engine = engine();
        assert!(engine.execute(GarageCommand::Select { object: WHEEL }));
        let replacement = engine.parts().get(WHEEL).unwrap().clone();

        assert!(engine.register_part(replacement).is_some());
        assert_eq!(engine.selection().state(), SelectionState::Idle);
        assert!(!engine.camera().is_zoomed());
    }

    #[test]
    fn rebuilding_hovered_part_captures_real_materials() {
        let mut engine = engine();
        engine.frame(&FrameInput::pointing(ray_at(0.0)), 0.016);
        assert_eq!(engine.selection().hovered(), Some(WHEEL));
        let old = engine.parts().get(WHEEL).unwrap();
        let nodes = old.nodes();
        let stats = old.record().stats().clone();

        let replaced = engine.register_part_with(WHEEL, |scene| {
            SelectableObject::new(WHEEL, nodes, stats, HIGHLIGHT, scene)
        });
        assert!(replaced.is_some());
        assert_eq!(engine.selection().state(), SelectionState::Idle);

        let wheel = engine.parts().get(WHEEL).unwrap();
        assert_eq!(wheel.renderers().len(), 2);
        for surface in wheel.renderers().surfaces() {
            let original = wheel.renderers().original_slots(surface).unwrap();
            assert!(!original.contains(&HIGHLIGHT));
        }

        engine.frame(&FrameInput::pointing(ray_at(0.0)), 0.016);
        assert!(engine.parts().get(WHEEL).unwrap().is_highlighted(engine.scene()));
        engine.frame(&FrameInput::pointing(ray_miss()), 0.016);
        assert!(!engine.parts().get(WHEEL).unwrap().is_highlighted(engine.scene()));
    }

    #[test]
    fn release_only_touches_the_named_part() {
        let mut engine = engine();
        engine.frame(&FrameInput::pointing(ray_at(0.0)), 0.016);
        assert!(!engine.release(SEAT));
        assert_eq!(engine.selection().hovered(), Some(WHEEL));

        assert!(engine.release(WHEEL));
        assert!(!engine.parts().get(WHEEL).unwrap().is_highlighted(engine.scene()));
        assert!(!engine.release(WHEEL));
    }

    #[test]
    fn applying_options_refreshes_info_and_camera() {
        let mut engine = engine();
        assert!(engine.execute(GarageCommand::Select { object: WHEEL }));

        let mut options = Options::default();
        options.display.currency_symbol = "€".to_owned();
        options.camera.fovy = 60.0;
        engine.apply_options(options);

        assert_eq!(engine.ui().info.as_ref().unwrap().price_formatted, "€50");
        assert_eq!(engine.camera().camera.fovy, 60.0);
        assert_eq!(engine.options().display.currency_symbol, "€");
    }
}
