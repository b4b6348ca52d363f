use glam::{Vec2, Vec3};

use super::axis::{smoothing_factor, OrbitAxes};
use super::core::Camera;
use super::pose::{solve_pose, CameraPose};
use super::target::TargetTransform;
use crate::callbacks::{CallbackRegistry, RenderTag};
use crate::error::RigError;
use crate::input::{Action, DragTracker, FrameInput};
use crate::options::{Options, PickingOptions};
use crate::picking::{pick, BoundingSphere, PickEvent, RayCaster, RaycastHit};

/// Orbit camera rig: drag to rotate, scroll to zoom, click to focus.
///
/// The host drives it through three phases per frame, in order:
///
/// ```ignore
/// rig.early_update(&input);          // drag + axis smoothing + pose
/// rig.late_update(&input, &scene);   // pointer pick
/// renderer.draw(rig.camera());
/// rig.post_render();                 // post-render callback
/// ```
pub struct OrbitCameraController {
    target: TargetTransform,
    axes: OrbitAxes,
    drag: DragTracker,

    /// Point the camera currently looks at and orbits around.
    focus: Vec3,
    /// Point `focus` converges toward.
    focus_goal: Vec3,
    /// Whether the focus goal is the target itself rather than a picked
    /// point.
    focus_on_target: bool,
    focus_smooth_speed: f32,

    pose: CameraPose,
    camera: Camera,

    picking: PickingOptions,
    render_tag: RenderTag,
    locked: bool,
    callbacks: CallbackRegistry,
}

impl OrbitCameraController {
    /// Create a rig orbiting `target`, at rest on the configured defaults.
    pub fn new(
        target: TargetTransform,
        options: &Options,
    ) -> Result<Self, RigError> {
        target.validate()?;
        options.validate()?;

        let axes = OrbitAxes::new(
            &options.horizontal,
            &options.vertical,
            &options.zoom,
        );
        let focus = target.translation;
        let pose = solve_pose(&axes, &target, focus);

        Ok(Self {
            target,
            axes,
            drag: DragTracker::new(),
            focus,
            focus_goal: focus,
            focus_on_target: true,
            focus_smooth_speed: options.focus.smooth_speed,
            pose,
            camera: Camera::new(&pose, &options.camera),
            picking: options.picking.clone(),
            render_tag: render_tag(options),
            locked: false,
            callbacks: CallbackRegistry::new(),
        })
    }

    /// Create a rig with a post-render subscriber wired in from the start.
    ///
    /// The subscriber sees [`RenderTag::AutoRegistered`] when
    /// `options.auto_register_post_render` is set.
    pub fn with_post_render(
        target: TargetTransform,
        options: &Options,
        callback: impl FnMut(RenderTag) + 'static,
    ) -> Result<Self, RigError> {
        let mut rig = Self::new(target, options)?;
        rig.callbacks.register_post_render(callback);
        Ok(rig)
    }

    // -- Frame phases --

    /// Drag tracking, axis update and pose solve. Does nothing while
    /// locked.
    pub fn early_update(&mut self, input: &FrameInput) {
        if self.locked {
            return;
        }

        let drag = self.drag.track(input, self.picking.drag_exclusion_band);
        self.axes.update(drag, input.scroll, input.delta_time);

        let t = smoothing_factor(input.delta_time, self.focus_smooth_speed);
        self.focus = self.focus.lerp(self.focus_goal, t);

        self.refresh_pose();
        self.camera.resize(input.viewport);
    }

    /// Pointer pick. Runs while locked too.
    ///
    /// A select press on a hit moves the focus goal to the hit point, or
    /// back to the target when the modifier is held. The pick callback
    /// fires on every hit, hover included; [`PickEvent::selected`] marks
    /// clicks.
    pub fn late_update<C: RayCaster + ?Sized>(
        &mut self,
        input: &FrameInput,
        caster: &C,
    ) -> Option<RaycastHit> {
        self.camera.resize(input.viewport);
        let hit = pick(
            &self.camera,
            input.pointer,
            input.viewport,
            caster,
            self.picking.max_distance,
        )?;

        let selected = input.pressed(Action::Select);
        if selected {
            if input.held(Action::Modifier) {
                self.reset_focus();
            } else {
                log::debug!("focus moved to picked object {}", hit.object);
                self.focus_goal = hit.point;
                self.focus_on_target = false;
            }
        }

        self.callbacks.emit_pick(&PickEvent { hit, selected });
        Some(hit)
    }

    /// Invoke the post-render callback. Call after the frame is drawn.
    pub fn post_render(&mut self) {
        self.callbacks.emit_post_render(self.render_tag);
    }

    // -- Configuration --

    /// Freeze or resume the rig. Locking freezes axis values and goals
    /// where they are; unlocking resumes smoothing from there. A drag in
    /// progress is dropped on unlock.
    pub fn set_locked(&mut self, locked: bool) {
        if self.locked == locked {
            return;
        }
        self.locked = locked;
        if !locked {
            self.drag.cancel();
        }
        log::debug!("orbit rig {}", if locked { "locked" } else { "unlocked" });
    }

    /// Whether axis updates are suspended.
    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.locked
    }

    /// Follow a new target transform. Call every frame the target moves.
    ///
    /// While the focus is on the target it moves rigidly with it, so the
    /// eye stays `zoom.value` from the target. A picked focus point stays
    /// where it is in world space.
    pub fn set_target(
        &mut self,
        target: TargetTransform,
    ) -> Result<(), RigError> {
        target.validate()?;
        if self.focus_on_target {
            let shift = target.translation - self.target.translation;
            self.focus += shift;
            self.focus_goal = target.translation;
        }
        self.target = target;
        Ok(())
    }

    /// Ease the focus back onto the target.
    pub fn reset_focus(&mut self) {
        log::debug!("focus reset to target");
        self.focus_goal = self.target.translation;
        self.focus_on_target = true;
    }

    /// Ease every axis and the focus back to their defaults.
    pub fn reset(&mut self) {
        self.axes.reset();
        self.reset_focus();
    }

    /// Jump straight to the goals without smoothing.
    pub fn snap(&mut self) {
        self.axes.snap();
        self.focus = self.focus_goal;
        self.refresh_pose();
    }

    /// Take new options without disturbing the current view. Rejected
    /// options leave the rig unchanged.
    pub fn apply_options(
        &mut self,
        options: &Options,
    ) -> Result<(), RigError> {
        if let Err(e) = options.validate() {
            log::warn!("rejected rig options: {e}");
            return Err(e);
        }
        self.axes.horizontal.apply_options(&options.horizontal);
        self.axes.vertical.apply_options(&options.vertical);
        self.axes.zoom.apply_options(&options.zoom);
        self.focus_smooth_speed = options.focus.smooth_speed;
        self.camera.apply_options(&options.camera);
        self.picking = options.picking.clone();
        self.render_tag = render_tag(options);
        Ok(())
    }

    /// Install the pick callback, replacing any previous one.
    pub fn register_pick_callback(
        &mut self,
        callback: impl FnMut(&PickEvent) + 'static,
    ) {
        self.callbacks.register_pick(callback);
    }

    /// Remove the pick callback.
    pub fn clear_pick_callback(&mut self) {
        self.callbacks.clear_pick();
    }

    /// Install the post-render callback, replacing any previous one.
    pub fn register_post_render_callback(
        &mut self,
        callback: impl FnMut(RenderTag) + 'static,
    ) {
        self.callbacks.register_post_render(callback);
    }

    /// Remove the post-render callback.
    pub fn clear_post_render_callback(&mut self) {
        self.callbacks.clear_post_render();
    }

    // -- Accessors --

    /// The camera as of the last early update.
    #[must_use]
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// Eye, focus and up as of the last early update.
    #[must_use]
    pub fn pose(&self) -> &CameraPose {
        &self.pose
    }

    /// The three orbit axes.
    #[must_use]
    pub fn axes(&self) -> &OrbitAxes {
        &self.axes
    }

    /// Mutable access to the axes, e.g. to script a goal.
    pub fn axes_mut(&mut self) -> &mut OrbitAxes {
        &mut self.axes
    }

    /// The target being orbited.
    #[must_use]
    pub fn target(&self) -> &TargetTransform {
        &self.target
    }

    /// Point the camera looks at.
    #[must_use]
    pub fn focus(&self) -> Vec3 {
        self.focus
    }

    /// Point the focus is easing toward.
    #[must_use]
    pub fn focus_goal(&self) -> Vec3 {
        self.focus_goal
    }

    /// Drag delta applied in the last early update.
    #[must_use]
    pub fn drag_delta(&self) -> Vec2 {
        self.drag.delta()
    }

    /// Spheres at the zoom limits around the target, for hosts that draw
    /// gizmos. Empty when zoom is unbounded.
    #[must_use]
    pub fn zoom_limit_spheres(&self) -> Vec<BoundingSphere> {
        self.axes
            .zoom
            .limits
            .map(|limits| {
                vec![
                    BoundingSphere::new(self.target.translation, limits.min, 0),
                    BoundingSphere::new(self.target.translation, limits.max, 0),
                ]
            })
            .unwrap_or_default()
    }

    fn refresh_pose(&mut self) {
        self.pose = solve_pose(&self.axes, &self.target, self.focus);
        self.camera.set_pose(&self.pose);
    }
}

fn render_tag(options: &Options) -> RenderTag {
    if options.auto_register_post_render {
        RenderTag::AutoRegistered
    } else {
        RenderTag::Manual
    }
}

impl std::fmt::Debug for OrbitCameraController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OrbitCameraController")
            .field("target", &self.target)
            .field("axes", &self.axes)
            .field("focus", &self.focus)
            .field("focus_on_target", &self.focus_on_target)
            .field("locked", &self.locked)
            .field("callbacks", &self.callbacks)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::options::AxisOptions;

    const VIEWPORT: Vec2 = Vec2::new(800.0, 600.0);
    const CENTER: Vec2 = Vec2::new(400.0, 300.0);
    const DT: f32 = 1.0 / 60.0;

    fn idle() -> FrameInput {
        FrameInput::new(VIEWPORT, DT).with_pointer(CENTER)
    }

    fn straight_on() -> Options {
        Options {
            horizontal: AxisOptions::horizontal(),
            vertical: AxisOptions {
                default_value: 0.0,
                limits: Some(crate::options::AxisLimits::new(-1.5, 1.5)),
                ..AxisOptions::vertical()
            },
            zoom: AxisOptions {
                default_value: 10.0,
                ..AxisOptions::zoom()
            },
            ..Options::default()
        }
    }

    fn rig() -> OrbitCameraController {
        OrbitCameraController::new(TargetTransform::default(), &straight_on())
            .unwrap()
    }

    fn default_rig() -> OrbitCameraController {
        OrbitCameraController::new(TargetTransform::default(), &Options::default())
            .unwrap()
    }

    #[test]
    fn starts_behind_target_facing_it() {
        let mut rig = rig();
        rig.early_update(&idle());
        assert!((rig.pose().eye - Vec3::new(0.0, 0.0, 10.0)).length() < 1e-5);
        assert!((rig.pose().forward() - Vec3::NEG_Z).length() < 1e-5);
        assert_eq!(rig.camera().target, Vec3::ZERO);
    }

    #[test]
    fn distance_tracks_zoom_value() {
        let mut rig = rig();
        for frame in 0..30 {
            let input = idle().with_scroll(if frame < 5 { 0.2 } else { 0.0 });
            rig.early_update(&input);
            assert!((rig.pose().distance() - rig.axes().zoom.value).abs() < 1e-3);
        }
        assert!(rig.axes().zoom.value < 10.0);
    }

    #[test]
    fn drag_orbits_horizontally() {
        let mut rig = rig();
        rig.early_update(&idle().with_pressed(Action::Rotate));
        // Pointer moves 50px right: previous - current = -50.
        rig.early_update(
            &idle()
                .with_pointer(CENTER + Vec2::new(50.0, 0.0))
                .with_held(Action::Rotate),
        );
        assert!((rig.axes().horizontal.goal - 0.5).abs() < 1e-5);
        assert!(rig.axes().horizontal.value > 0.0);
        assert!(rig.pose().eye.x > 0.0);
    }

    #[test]
    fn lock_freezes_axes() {
        let mut rig = rig();
        rig.axes_mut().zoom.goal = 60.0;
        rig.early_update(&idle());
        rig.set_locked(true);
        let frozen = *rig.axes();

        for _ in 0..20 {
            rig.early_update(&idle().with_scroll(3.0));
            assert_eq!(*rig.axes(), frozen);
        }

        rig.set_locked(false);
        rig.early_update(&idle());
        assert!(rig.axes().zoom.value > frozen.zoom.value);
    }

    #[test]
    fn unlock_drops_stale_drag() {
        let mut rig = rig();
        rig.early_update(&idle().with_pressed(Action::Rotate));
        rig.set_locked(true);
        rig.set_locked(false);
        rig.early_update(
            &idle()
                .with_pointer(Vec2::new(0.0, 500.0))
                .with_held(Action::Rotate),
        );
        assert_eq!(rig.drag_delta(), Vec2::ZERO);
        assert_eq!(rig.axes().horizontal.goal, 0.0);
    }

    #[test]
    fn select_click_moves_focus_to_hit() {
        let mut rig = rig();
        rig.early_update(&idle());
        let scene = [BoundingSphere::new(Vec3::ZERO, 1.0, 42)];

        let hit = rig
            .late_update(&idle().with_pressed(Action::Select), &scene[..])
            .unwrap();
        assert_eq!(hit.object, 42);
        assert!((rig.focus_goal() - Vec3::new(0.0, 0.0, 1.0)).length() < 1e-3);

        rig.snap();
        assert!((rig.pose().focus - rig.focus_goal()).length() < 1e-6);
        assert!((rig.pose().distance() - 10.0).abs() < 1e-3);
    }

    #[test]
    fn modifier_select_resets_focus() {
        let mut rig = rig();
        rig.early_update(&idle());
        let scene = [BoundingSphere::new(Vec3::ZERO, 1.0, 1)];
        let _ = rig.late_update(&idle().with_pressed(Action::Select), &scene[..]);

        let reset = idle()
            .with_held(Action::Modifier)
            .with_pressed(Action::Select);
        let _ = rig.late_update(&reset, &scene[..]);
        assert_eq!(rig.focus_goal(), Vec3::ZERO);
    }

    #[test]
    fn pick_callback_fires_on_hover_and_click() {
        let mut rig = rig();
        rig.early_update(&idle());
        let events = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&events);
        rig.register_pick_callback(move |event| sink.borrow_mut().push(event.selected));

        let scene = [BoundingSphere::new(Vec3::ZERO, 1.0, 3)];
        let _ = rig.late_update(&idle(), &scene[..]);
        let _ = rig.late_update(&idle().with_pressed(Action::Select), &scene[..]);
        // Pointer in the corner misses the sphere.
        let miss = idle().with_pointer(Vec2::new(5.0, 5.0));
        assert!(rig.late_update(&miss, &scene[..]).is_none());

        assert_eq!(*events.borrow(), vec![false, true]);
    }

    #[test]
    fn picking_runs_while_locked() {
        let mut rig = rig();
        rig.early_update(&idle());
        rig.set_locked(true);
        let scene = [BoundingSphere::new(Vec3::ZERO, 1.0, 5)];
        assert!(rig.late_update(&idle(), &scene[..]).is_some());
    }

    #[test]
    fn miss_leaves_focus_alone() {
        let mut rig = rig();
        rig.early_update(&idle());
        let empty: [BoundingSphere; 0] = [];
        assert!(rig
            .late_update(&idle().with_pressed(Action::Select), &empty[..])
            .is_none());
        assert_eq!(rig.focus_goal(), Vec3::ZERO);
    }

    #[test]
    fn post_render_tag_follows_auto_register_flag() {
        let codes = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&codes);
        let options = Options {
            auto_register_post_render: true,
            ..straight_on()
        };
        let mut rig = OrbitCameraController::with_post_render(
            TargetTransform::default(),
            &options,
            move |tag| sink.borrow_mut().push(tag.code()),
        )
        .unwrap();
        rig.post_render();

        rig.apply_options(&straight_on()).unwrap();
        rig.post_render();
        assert_eq!(*codes.borrow(), vec![1, 2]);
    }

    #[test]
    fn rejects_non_finite_target() {
        let target = TargetTransform::from_translation(Vec3::splat(f32::INFINITY));
        assert!(matches!(
            OrbitCameraController::new(target, &Options::default()),
            Err(RigError::InvalidTarget(_))
        ));

        let mut rig = rig();
        assert!(rig.set_target(target).is_err());
        assert_eq!(rig.target().translation, Vec3::ZERO);
    }

    #[test]
    fn invalid_options_leave_rig_unchanged() {
        let mut rig = rig();
        let mut bad = straight_on();
        bad.picking.drag_exclusion_band = 2.0;
        assert!(rig.apply_options(&bad).is_err());
        assert_eq!(rig.picking.drag_exclusion_band, 0.1);
    }

    #[test]
    fn focus_follows_moving_target() {
        let mut rig = rig();
        rig.set_target(TargetTransform::from_translation(Vec3::new(5.0, 0.0, 0.0)))
            .unwrap();
        for _ in 0..600 {
            rig.early_update(&idle());
        }
        assert!((rig.focus() - Vec3::new(5.0, 0.0, 0.0)).length() < 1e-3);
        assert!((rig.pose().eye - Vec3::new(5.0, 0.0, 10.0)).length() < 1e-2);
    }

    #[test]
    fn camera_stays_finite_at_zoom_minimum() {
        let mut rig = default_rig();
        let input = FrameInput::new(VIEWPORT, 0.2)
            .with_pointer(CENTER)
            .with_scroll(10.0);
        rig.early_update(&input);
        assert_eq!(rig.axes().zoom.value, 0.0);
        assert!(rig.camera().build_matrix().is_finite());

        let scene = [BoundingSphere::new(Vec3::ZERO, 1.0, 8)];
        let hit = rig.late_update(&idle().with_pressed(Action::Select), &scene[..]);
        assert_eq!(hit.map(|h| h.object), Some(8));
    }

    #[test]
    fn camera_moves_rigidly_with_target() {
        let mut rig = default_rig();
        rig.early_update(&idle());
        for frame in 1..=60 {
            let position = Vec3::new(0.5 * frame as f32, 0.0, 0.0);
            rig.set_target(TargetTransform::from_translation(position))
                .unwrap();
            rig.early_update(&idle());
            assert!((rig.focus() - position).length() < 1e-4);
            let distance = rig.pose().eye.distance(position);
            assert!((distance - rig.axes().zoom.value).abs() < 1e-3);
        }
    }

    #[test]
    fn picked_focus_survives_target_motion() {
        let mut rig = rig();
        rig.early_update(&idle());
        let scene = [BoundingSphere::new(Vec3::ZERO, 1.0, 2)];
        let _ = rig.late_update(&idle().with_pressed(Action::Select), &scene[..]);
        let picked = rig.focus_goal();

        rig.set_target(TargetTransform::from_translation(Vec3::X * 3.0))
            .unwrap();
        assert_eq!(rig.focus_goal(), picked);

        rig.reset_focus();
        assert_eq!(rig.focus_goal(), Vec3::X * 3.0);
    }

    #[test]
    fn partial_zoom_table_stays_bounded() {
        let options = Options::from_toml("[zoom]\nsmooth_speed = 5.0").unwrap();
        let mut rig =
            OrbitCameraController::new(TargetTransform::default(), &options)
                .unwrap();
        assert_eq!(rig.axes().zoom.value, 50.0);
        for _ in 0..10 {
            rig.early_update(&idle().with_scroll(50.0));
        }
        assert_eq!(rig.axes().zoom.goal, 0.0);
        assert!(rig.axes().zoom.value >= 0.0);
        assert!(rig.camera().build_matrix().is_finite());
    }

    #[test]
    fn zoom_gizmo_spheres() {
        let rig = rig();
        let spheres = rig.zoom_limit_spheres();
        assert_eq!(spheres.len(), 2);
        assert_eq!(spheres[0].radius, 0.0);
        assert_eq!(spheres[1].radius, 100.0);
    }
}
