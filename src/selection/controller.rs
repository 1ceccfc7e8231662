//! Per-frame hover/selection state machine.
//!
//! Each frame runs, in order: UI guard, hover update (suppressed while a
//! part is selected), primary action (select), secondary action
//! (deselect). Everything the controller touches is handed in through a
//! [`SelectionContext`], so it owns nothing but its state.

use super::info::{AlternativeSummary, InfoSink, PartInfoView};
use super::state::SelectionState;
use crate::camera::FocusCameraController;
use crate::input::FrameInput;
use crate::options::DisplayOptions;
use crate::part::{PartRegistry, SelectableObject};
use crate::picking::Ray;
use crate::scene::{ObjectId, SceneBackend, SurfaceBackend};

/// Collaborators borrowed for one controller call.
pub struct SelectionContext<'a, S, U: ?Sized> {
    /// Scene access for picking, materials and instances.
    pub scene: &'a mut S,
    /// Every selectable part.
    pub parts: &'a mut PartRegistry,
    /// Camera focused on selection.
    pub camera: &'a mut FocusCameraController,
    /// Info and alternatives panels.
    pub ui: &'a mut U,
    /// UI formatting.
    pub display: &'a DisplayOptions,
}

impl<S, U: ?Sized> SelectionContext<'_, S, U> {
    fn part(&self, id: ObjectId) -> Option<&SelectableObject> {
        self.parts.get(id)
    }
}

/// Hover/selection state machine driving highlights, the camera and the UI.
#[derive(Debug, Default)]
pub struct SelectionController {
    state: SelectionState,
    info_open: bool,
    alternatives_open: bool,
}

fn highlight<S: SurfaceBackend, U: ?Sized>(
    ctx: &mut SelectionContext<'_, S, U>,
    id: ObjectId,
) {
    if let Some(part) = ctx.parts.get(id) {
        part.highlight(&mut *ctx.scene);
    }
}

fn restore<S: SurfaceBackend, U: ?Sized>(
    ctx: &mut SelectionContext<'_, S, U>,
    id: ObjectId,
) {
    if let Some(part) = ctx.parts.get(id) {
        part.restore(&mut *ctx.scene);
    }
}

impl SelectionController {
    /// Idle controller with both panels closed.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> SelectionState {
        self.state
    }

    /// Highlighted part, if any.
    #[must_use]
    pub fn hovered(&self) -> Option<ObjectId> {
        self.state.hovered()
    }

    /// Selected part, if any.
    #[must_use]
    pub fn selected(&self) -> Option<ObjectId> {
        self.state.selected()
    }

    /// Whether the info panel is showing.
    #[must_use]
    pub fn is_info_open(&self) -> bool {
        self.info_open
    }

    /// Whether the alternatives list is showing.
    #[must_use]
    pub fn is_alternatives_open(&self) -> bool {
        self.alternatives_open
    }

    /// Run one frame of the state machine.
    pub fn update<S, U>(
        &mut self,
        input: &FrameInput,
        ctx: &mut SelectionContext<'_, S, U>,
    ) where
        S: SceneBackend,
        U: InfoSink + ?Sized,
    {
        if input.pointer_over_ui {
            return;
        }
        if !self.state.is_selected() {
            self.update_hover(input.pointer_ray.as_ref(), ctx);
        }
        if input.primary_pressed {
            match self.state {
                SelectionState::Hovering(id) => self.select(id, ctx),
                SelectionState::Selected(id) => {
                    log::debug!("{id} is already selected");
                }
                SelectionState::Idle => {}
            }
        }
        if input.secondary_pressed {
            let _ = self.deselect(ctx);
        }
    }

    fn update_hover<S, U>(
        &mut self,
        ray: Option<&Ray>,
        ctx: &mut SelectionContext<'_, S, U>,
    ) where
        S: SceneBackend,
        U: ?Sized,
    {
        // Hits on scene objects that were never registered read as misses.
        let hit = ray
            .and_then(|r| ctx.scene.intersect(r))
            .map(|h| h.object)
            .filter(|id| ctx.parts.contains(*id));
        let previous = self.state.hovered();
        if hit == previous {
            return;
        }
        if let Some(previous) = previous {
            restore(ctx, previous);
        }
        if let Some(id) = hit {
            highlight(ctx, id);
        }
        self.state = hit.map_or(SelectionState::Idle, SelectionState::Hovering);
        log::debug!("hover {previous:?} -> {hit:?}");
    }

    /// Select `id` directly, as if it had been hovered and clicked. Returns
    /// `false` for unregistered parts.
    pub fn select_object<S, U>(
        &mut self,
        id: ObjectId,
        ctx: &mut SelectionContext<'_, S, U>,
    ) -> bool
    where
        S: SceneBackend,
        U: InfoSink + ?Sized,
    {
        if !ctx.parts.contains(id) {
            return false;
        }
        self.select(id, ctx);
        true
    }

    fn select<S, U>(&mut self, id: ObjectId, ctx: &mut SelectionContext<'_, S, U>)
    where
        S: SceneBackend,
        U: InfoSink + ?Sized,
    {
        if self.state.selected() == Some(id) {
            return;
        }
        if let Some(previous) = self.state.hovered().filter(|h| *h != id) {
            restore(ctx, previous);
        }
        if self.state.is_selected() {
            self.close_panels(&mut *ctx.ui);
            ctx.camera.return_to_default();
        }

        highlight(ctx, id);
        self.state = SelectionState::Selected(id);
        log::debug!("selected {id}");

        let target = ctx
            .part(id)
            .and_then(|p| ctx.scene.world_position(p.nodes().root));
        if let Some(target) = target {
            ctx.camera.set_zoom_target(target);
        }
        self.populate_info(ctx);
    }

    /// Clear the selection: camera back to orbit, panels closed, highlight
    /// restored. Returns `false` when nothing was selected.
    pub fn deselect<S, U>(&mut self, ctx: &mut SelectionContext<'_, S, U>) -> bool
    where
        S: SurfaceBackend,
        U: InfoSink + ?Sized,
    {
        let Some(id) = self.state.selected() else {
            return false;
        };
        ctx.camera.return_to_default();
        self.close_panels(&mut *ctx.ui);
        restore(ctx, id);
        self.state = SelectionState::Idle;
        log::debug!("deselected {id}");
        true
    }

    /// Drop the hover highlight. Does nothing while a part is selected.
    pub fn clear_hover<S, U>(&mut self, ctx: &mut SelectionContext<'_, S, U>)
    where
        S: SurfaceBackend,
        U: ?Sized,
    {
        if let SelectionState::Hovering(id) = self.state {
            restore(ctx, id);
            self.state = SelectionState::Idle;
        }
    }

    fn close_panels<U: InfoSink + ?Sized>(&mut self, ui: &mut U) {
        if self.info_open {
            ui.hide_part_info();
            self.info_open = false;
        }
        if self.alternatives_open {
            ui.hide_alternatives();
            self.alternatives_open = false;
        }
    }

    /// Push the selected part's live record to the info panel.
    pub fn populate_info<S, U>(&mut self, ctx: &mut SelectionContext<'_, S, U>)
    where
        U: InfoSink + ?Sized,
    {
        let Some(part) = self.state.selected().and_then(|id| ctx.parts.get(id))
        else {
            return;
        };
        let view = PartInfoView::live(
            part.record(),
            ctx.display,
            !part.alternatives().is_empty(),
        );
        ctx.ui.show_part_info(&view);
        self.info_open = true;
    }

    /// List the selected part's alternatives. Returns `false` when nothing
    /// is selected or the part has no alternatives.
    pub fn show_alternatives<S, U>(
        &mut self,
        ctx: &mut SelectionContext<'_, S, U>,
    ) -> bool
    where
        U: InfoSink + ?Sized,
    {
        let Some(part) = self.state.selected().and_then(|id| ctx.parts.get(id))
        else {
            return false;
        };
        if part.alternatives().is_empty() {
            return false;
        }
        let rows: Vec<_> = part
            .alternatives()
            .iter()
            .map(|(index, stats)| AlternativeSummary::new(index, stats, ctx.display))
            .collect();
        ctx.ui.show_alternatives(&rows);
        self.alternatives_open = true;
        true
    }

    /// Hide the alternatives list.
    pub fn close_alternatives<U: InfoSink + ?Sized>(&mut self, ui: &mut U) {
        if self.alternatives_open {
            ui.hide_alternatives();
            self.alternatives_open = false;
        }
    }

    /// Swap the selected part for alternative `index` and refresh the info
    /// panel. Returns `false`, changing nothing, when nothing is selected or
    /// `index` is out of range.
    pub fn buy_alternative<S, U>(
        &mut self,
        index: usize,
        ctx: &mut SelectionContext<'_, S, U>,
    ) -> bool
    where
        S: SceneBackend,
        U: InfoSink + ?Sized,
    {
        let Some(id) = self.state.selected() else {
            return false;
        };
        let Some(part) = ctx.parts.get_mut(id) else {
            return false;
        };
        if !part.swap_to_alternative(index, &mut *ctx.scene) {
            return false;
        }
        // New surfaces come in with their own materials.
        part.highlight(&mut *ctx.scene);
        log::info!("{id} is now '{}'", part.record().name());
        self.populate_info(ctx);
        true
    }

    /// Show alternative `index` in the info panel without swapping.
    pub fn preview_alternative<S, U>(
        &mut self,
        index: usize,
        ctx: &mut SelectionContext<'_, S, U>,
    ) -> bool
    where
        U: InfoSink + ?Sized,
    {
        let Some(part) = self.state.selected().and_then(|id| ctx.parts.get(id))
        else {
            return false;
        };
        let Some(template) = part.alternatives().get(index) else {
            return false;
        };
        let view = PartInfoView::template(
            template,
            ctx.display,
            !part.alternatives().is_empty(),
        );
        ctx.ui.show_part_info(&view);
        self.info_open = true;
        true
    }

    /// Wear the selected part down and refresh the info panel.
    pub fn damage_selected<S, U>(
        &mut self,
        amount: f32,
        ctx: &mut SelectionContext<'_, S, U>,
    ) -> bool
    where
        U: InfoSink + ?Sized,
    {
        let Some(id) = self.state.selected() else {
            return false;
        };
        let Some(part) = ctx.parts.get_mut(id) else {
            return false;
        };
        let _ = part.record_mut().take_damage(amount);
        self.populate_info(ctx);
        true
    }

    /// Repair the selected part and refresh the info panel.
    pub fn repair_selected<S, U>(
        &mut self,
        amount: f32,
        ctx: &mut SelectionContext<'_, S, U>,
    ) -> bool
    where
        U: InfoSink + ?Sized,
    {
        let Some(id) = self.state.selected() else {
            return false;
        };
        let Some(part) = ctx.parts.get_mut(id) else {
            return false;
        };
        part.record_mut().repair(amount);
        self.populate_info(ctx);
        true
    }
}

#[cfg(test)]
mod tests {
    use glam::{Affine3A, Vec3};

    use super::*;
    use crate::camera::CameraMode;
    use crate::options::CameraOptions;
    use crate::scene::{MemoryScene, PickingBackend};
    use crate::selection::testing::{
        garage, ray_at, ray_miss, RecordingSink, BELL, HIGHLIGHT, SEAT, WHEEL,
    };

    struct Rig {
        scene: MemoryScene,
        parts: PartRegistry,
        camera: FocusCameraController,
        ui: RecordingSink,
        display: DisplayOptions,
        selection: SelectionController,
    }

    impl Rig {
        fn new() -> Self {
            let (scene, parts) = garage();
            Self {
                scene,
                parts,
                camera: FocusCameraController::new(&CameraOptions::default(), 1.0),
                ui: RecordingSink::default(),
                display: DisplayOptions::default(),
                selection: SelectionController::new(),
            }
        }

        fn with<R>(
            &mut self,
            f: impl FnOnce(
                &mut SelectionController,
                &mut SelectionContext<'_, MemoryScene, RecordingSink>,
            ) -> R,
        ) -> R {
            let mut ctx = SelectionContext {
                scene: &mut self.scene,
                parts: &mut self.parts,
                camera: &mut self.camera,
                ui: &mut self.ui,
                display: &self.display,
            };
            f(&mut self.selection, &mut ctx)
        }

        fn frame(&mut self, input: FrameInput) {
            self.with(|selection, ctx| selection.update(&input, ctx));
        }

        fn click(&mut self, x: f32) {
            self.frame(FrameInput::pointing(ray_at(x)).with_primary());
        }

        fn lit(&self, id: ObjectId) -> bool {
            self.parts.get(id).unwrap().is_highlighted(&self.scene)
        }

        /// Every surface of `id` shows its recorded originals.
        fn pristine(&self, id: ObjectId) -> bool {
            let renderers = self.parts.get(id).unwrap().renderers();
            renderers.surfaces().all(|s| {
                self.scene.material_slots(s).as_deref()
                    == renderers.original_slots(s)
            })
        }
    }

    #[test]
    fn hover_follows_pointer() {
        let mut rig = Rig::new();
        rig.frame(FrameInput::pointing(ray_at(0.0)));
        assert_eq!(rig.selection.state(), SelectionState::Hovering(WHEEL));
        assert!(rig.lit(WHEEL));

        rig.frame(FrameInput::pointing(ray_at(3.0)));
        assert_eq!(rig.selection.state(), SelectionState::Hovering(SEAT));
        assert!(rig.pristine(WHEEL));
        assert!(rig.lit(SEAT));

        rig.frame(FrameInput::pointing(ray_miss()));
        assert_eq!(rig.selection.state(), SelectionState::Idle);
        assert!(rig.pristine(WHEEL));
        assert!(rig.pristine(SEAT));
    }

    #[test]
    fn no_pointer_clears_hover() {
        let mut rig = Rig::new();
        rig.frame(FrameInput::pointing(ray_at(0.0)));
        rig.frame(FrameInput::default());
        assert_eq!(rig.selection.hovered(), None);
        assert!(rig.pristine(WHEEL));
    }

    #[test]
    fn pointer_over_ui_skips_picking() {
        let mut rig = Rig::new();
        rig.frame(FrameInput::pointing(ray_at(0.0)));
        rig.frame(FrameInput::pointing(ray_at(3.0)).with_primary().over_ui());

        assert_eq!(rig.selection.state(), SelectionState::Hovering(WHEEL));
        assert!(rig.lit(WHEEL));
        assert!(rig.pristine(SEAT));
        assert!(rig.ui.info.is_none());
    }

    #[test]
    fn unregistered_hit_reads_as_miss() {
        let mut rig = Rig::new();
        let stray = rig.scene.spawn_node(
            None,
            Affine3A::from_translation(Vec3::new(9.0, 0.0, 0.0)),
        );
        rig.scene.tag_object(stray, ObjectId(77));
        let _ = rig
            .scene
            .attach_surface(stray, Vec3::splat(0.5), vec![HIGHLIGHT]);
        assert!(rig.scene.intersect(&ray_at(9.0)).is_some());

        rig.frame(FrameInput::pointing(ray_at(0.0)));
        rig.frame(FrameInput::pointing(ray_at(9.0)));
        assert_eq!(rig.selection.state(), SelectionState::Idle);
        assert!(rig.pristine(WHEEL));
    }

    #[test]
    fn click_selects_focuses_and_populates() {
        let mut rig = Rig::new();
        rig.frame(FrameInput::pointing(ray_at(0.0)));
        rig.click(0.0);

        assert_eq!(rig.selection.state(), SelectionState::Selected(WHEEL));
        assert!(rig.lit(WHEEL));
        assert_eq!(rig.camera.mode(), CameraMode::Zoomed { target: Vec3::ZERO });

        let info = rig.ui.info.as_ref().unwrap();
        assert_eq!(info.name, "Road Wheel");
        assert_eq!(info.price_formatted, "$50");
        assert_eq!(info.type_label, "Wheel");
        assert_eq!(info.durability_fraction, 1.0);
        assert!(info.alternatives_available);
        assert!(rig.selection.is_info_open());
    }

    #[test]
    fn hover_and_click_in_one_frame_selects() {
        let mut rig = Rig::new();
        rig.click(3.0);
        assert_eq!(rig.selection.selected(), Some(SEAT));
        assert!(!rig.ui.info.as_ref().unwrap().alternatives_available);
    }

    #[test]
    fn click_on_nothing_selects_nothing() {
        let mut rig = Rig::new();
        rig.frame(FrameInput::pointing(ray_miss()).with_primary());
        assert_eq!(rig.selection.state(), SelectionState::Idle);
        assert!(!rig.camera.is_zoomed());
    }

    #[test]
    fn hover_is_suppressed_while_selected() {
        let mut rig = Rig::new();
        rig.click(0.0);

        rig.frame(FrameInput::pointing(ray_at(3.0)));
        assert_eq!(rig.selection.state(), SelectionState::Selected(WHEEL));
        assert!(rig.lit(WHEEL));
        assert!(rig.pristine(SEAT));

        rig.frame(FrameInput::pointing(ray_miss()));
        assert!(rig.lit(WHEEL));

        rig.click(3.0);
        assert_eq!(rig.selection.selected(), Some(WHEEL));
        assert!(rig.pristine(SEAT));
    }

    #[test]
    fn reclicking_selection_is_a_no_op() {
        let mut rig = Rig::new();
        rig.click(0.0);
        assert_eq!(rig.ui.info_updates, 1);

        rig.click(0.0);
        assert_eq!(rig.ui.info_updates, 1);
        assert_eq!(rig.selection.selected(), Some(WHEEL));
        assert!(rig.lit(WHEEL));
    }

    #[test]
    fn secondary_deselects_everything() {
        let mut rig = Rig::new();
        rig.click(0.0);
        assert!(rig.with(|s, ctx| s.show_alternatives(ctx)));

        rig.frame(FrameInput::pointing(ray_at(0.0)).with_secondary());

        assert_eq!(rig.selection.state(), SelectionState::Idle);
        assert!(rig.pristine(WHEEL));
        assert!(rig.ui.info.is_none());
        assert!(rig.ui.alternatives.is_none());
        assert!(!rig.selection.is_alternatives_open());
        assert_eq!(rig.camera.mode(), CameraMode::Orbiting);
        assert!(rig.camera.camera.eye.abs_diff_eq(Vec3::new(0.0, 2.0, 10.0), 1e-5));
    }

    #[test]
    fn secondary_without_selection_keeps_hover() {
        let mut rig = Rig::new();
        rig.frame(FrameInput::pointing(ray_at(0.0)).with_secondary());
        assert_eq!(rig.selection.state(), SelectionState::Hovering(WHEEL));
        assert!(rig.lit(WHEEL));
        assert!(!rig.with(|s, ctx| s.deselect(ctx)));
    }

    #[test]
    fn select_object_replaces_previous_selection() {
        let mut rig = Rig::new();
        rig.click(0.0);
        assert!(rig.with(|s, ctx| s.show_alternatives(ctx)));

        assert!(rig.with(|s, ctx| s.select_object(SEAT, ctx)));

        assert_eq!(rig.selection.selected(), Some(SEAT));
        assert!(rig.pristine(WHEEL));
        assert!(rig.lit(SEAT));
        assert!(rig.ui.alternatives.is_none());
        assert_eq!(rig.ui.info.as_ref().unwrap().name, "Saddle");
        assert_eq!(
            rig.camera.mode(),
            CameraMode::Zoomed {
                target: Vec3::new(3.0, 0.0, 0.0)
            }
        );
        assert!(!rig.with(|s, ctx| s.select_object(ObjectId(99), ctx)));
        assert_eq!(rig.selection.selected(), Some(SEAT));
    }

    #[test]
    fn part_without_surfaces_selects_silently() {
        let mut rig = Rig::new();
        assert!(rig.with(|s, ctx| s.select_object(BELL, ctx)));
        assert_eq!(rig.selection.selected(), Some(BELL));
        assert!(!rig.lit(BELL));
        assert_eq!(rig.ui.info.as_ref().unwrap().name, "Bell");

        assert!(rig.with(|s, ctx| s.deselect(ctx)));
        assert_eq!(rig.selection.state(), SelectionState::Idle);
    }

    #[test]
    fn alternatives_list_mirrors_catalog() {
        let mut rig = Rig::new();
        assert!(!rig.with(|s, ctx| s.show_alternatives(ctx)));

        rig.click(0.0);
        assert!(rig.with(|s, ctx| s.show_alternatives(ctx)));
        let rows = rig.ui.alternatives.as_ref().unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].name, "Trail Wheel");
        assert_eq!(rows[0].price_formatted, "$80");
        assert_eq!(rows[0].durability_formatted, "Dur: 90");
        assert_eq!(rows[1].index, 1);

        rig.with(|s, ctx| s.close_alternatives(&mut *ctx.ui));
        assert!(rig.ui.alternatives.is_none());
        assert!(rig.ui.info.is_some());

        assert!(rig.with(|s, ctx| s.select_object(SEAT, ctx)));
        assert!(!rig.with(|s, ctx| s.show_alternatives(ctx)));
    }

    #[test]
    fn buying_swaps_model_and_keeps_highlight() {
        let mut rig = Rig::new();
        rig.click(0.0);
        assert!(rig.with(|s, ctx| s.damage_selected(30.0, ctx)));
        assert!((rig.ui.info.as_ref().unwrap().durability_fraction - 0.7).abs() < 1e-6);

        assert!(rig.with(|s, ctx| s.buy_alternative(0, ctx)));

        let wheel = rig.parts.get(WHEEL).unwrap();
        assert_eq!(wheel.record().name(), "Trail Wheel");
        assert_eq!(wheel.record().current_durability(), 90.0);
        assert_eq!(wheel.renderers().len(), 1);
        assert!(rig.lit(WHEEL));

        let info = rig.ui.info.as_ref().unwrap();
        assert_eq!(info.name, "Trail Wheel");
        assert!((info.durability_fraction - 0.9).abs() < 1e-6);

        assert!(rig.with(|s, ctx| s.deselect(ctx)));
        let wheel = rig.parts.get(WHEEL).unwrap();
        let surface = wheel.renderers().surfaces().next().unwrap();
        assert_eq!(
            rig.scene.material_slots(surface),
            Some(vec![crate::scene::MaterialId(30)])
        );
    }

    #[test]
    fn buying_out_of_range_changes_nothing() {
        let mut rig = Rig::new();
        assert!(!rig.with(|s, ctx| s.buy_alternative(0, ctx)));

        rig.click(0.0);
        let before = rig.parts.get(WHEEL).unwrap().record().clone();
        let instances = rig.scene.instantiate_count();
        let updates = rig.ui.info_updates;

        assert!(!rig.with(|s, ctx| s.buy_alternative(5, ctx)));

        assert_eq!(rig.parts.get(WHEEL).unwrap().record(), &before);
        assert_eq!(rig.scene.instantiate_count(), instances);
        assert_eq!(rig.scene.destroy_count(), 0);
        assert_eq!(rig.ui.info_updates, updates);
        assert!(rig.lit(WHEEL));
    }

    #[test]
    fn preview_shows_template_without_swapping() {
        let mut rig = Rig::new();
        rig.click(0.0);
        assert!(rig.with(|s, ctx| s.preview_alternative(1, ctx)));

        let info = rig.ui.info.as_ref().unwrap();
        assert_eq!(info.name, "Wheel Decal");
        assert_eq!(info.price_formatted, "$5");
        assert!((info.durability_fraction - 0.4).abs() < 1e-6);
        assert_eq!(rig.parts.get(WHEEL).unwrap().record().name(), "Road Wheel");

        assert!(!rig.with(|s, ctx| s.preview_alternative(9, ctx)));
    }

    #[test]
    fn wear_updates_refresh_info() {
        let mut rig = Rig::new();
        assert!(!rig.with(|s, ctx| s.damage_selected(10.0, ctx)));

        rig.click(0.0);
        assert!(rig.with(|s, ctx| s.damage_selected(25.0, ctx)));
        assert!((rig.ui.info.as_ref().unwrap().durability_fraction - 0.75).abs() < 1e-6);

        assert!(rig.with(|s, ctx| s.repair_selected(10.0, ctx)));
        assert!((rig.ui.info.as_ref().unwrap().durability_fraction - 0.85).abs() < 1e-6);
    }
}
