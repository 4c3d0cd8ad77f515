use std::time::Duration;

use driftwalk_assets::{Progress, ResourceCatalog, ResourceEvent};
use driftwalk_audio::{AudioOutput, LoopCue};
use driftwalk_common::{EntityId, ObstacleSet};
use driftwalk_feedback::{Channel, ChannelValues, ProximityFeedback};
use driftwalk_input::{IntentFlags, IntentSnapshot};
use driftwalk_kernel::{FrameTime, World, WorldEvent};
use driftwalk_render::{
    BloomEntry, BloomSettings, PostProcessParams, RenderFrame, RenderView, Renderer,
};
use driftwalk_rig::{CameraRig, LookMode, MoveOutcome, PointObstacle};
use glam::{Vec2, Vec3};

use crate::clock::{FrameClock, FrameTimer};
use crate::config::ExperienceConfig;
use crate::overlay::OverlayState;
use crate::phase::GamePhase;

/// What happened during one tick, plus the renderer's output.
#[derive(Debug, Clone)]
pub struct FrameReport<O> {
    pub tick: u64,
    pub phase: GamePhase,
    pub time: FrameTime,
    /// `(strafe, forward)` displacement requested by the rig.
    pub displacement: Vec2,
    pub moved: MoveOutcome,
    pub pushed_out: bool,
    pub sprint_started: bool,
    pub hovered: bool,
    pub events: Vec<WorldEvent>,
    pub proximity: Option<ChannelValues>,
    /// The host should request pointer lock (start click, or click while paused).
    pub request_pointer_lock: bool,
    pub output: O,
}

/// The per-frame driver.
///
/// Owns the rig, the world and the feedback loop; talks to audio and
/// rendering through the collaborators it was built with. One call to
/// [`FrameScheduler::tick`] per display refresh.
pub struct FrameScheduler<A, R> {
    config: ExperienceConfig,
    phase: GamePhase,
    clock: FrameClock,
    timer: FrameTimer,
    rig: CameraRig,
    world: World,
    obstacles: ObstacleSet,
    points: Vec<PointObstacle>,
    proximity: ProximityFeedback,
    target: Option<(EntityId, Vec3)>,
    /// The target was collected; proximity retires when the inspect overlay closes.
    target_collected: bool,
    post: PostProcessParams,
    bloom_entry: BloomEntry,
    overlay: OverlayState,
    /// Inspect requested by the world, opened at the start of the next tick.
    pending_inspect: bool,
    footsteps: LoopCue,
    ambient: LoopCue,
    ambient_configured: bool,
    audio: A,
    renderer: R,
    tick_count: u64,
}

impl<A: AudioOutput, R: Renderer> FrameScheduler<A, R> {
    pub fn new(config: ExperienceConfig, audio: A, renderer: R) -> Self {
        let mut rig = CameraRig::new(config.rig);
        rig.set_position(config.frame.start_point);
        let post = PostProcessParams {
            enabled: config.frame.postprocess,
            ..Default::default()
        };
        Self {
            phase: GamePhase::Idle,
            clock: FrameClock::new(config.frame.max_delta),
            timer: FrameTimer::new(config.frame.timer_window),
            rig,
            world: World::new(),
            obstacles: ObstacleSet::default(),
            points: Vec::new(),
            proximity: ProximityFeedback::new(config.proximity.clone()),
            target: None,
            target_collected: false,
            post,
            bloom_entry: BloomEntry::default(),
            overlay: OverlayState::default(),
            pending_inspect: false,
            footsteps: LoopCue::new(config.audio.footsteps.clone()),
            ambient: LoopCue::new(config.audio.ambient.clone()),
            ambient_configured: false,
            audio,
            renderer,
            tick_count: 0,
            config,
        }
    }

    pub fn config(&self) -> &ExperienceConfig {
        &self.config
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn rig(&self) -> &CameraRig {
        &self.rig
    }

    pub fn rig_mut(&mut self) -> &mut CameraRig {
        &mut self.rig
    }

    pub fn overlay(&self) -> &OverlayState {
        &self.overlay
    }

    pub fn post(&self) -> &PostProcessParams {
        &self.post
    }

    pub fn proximity(&self) -> &ProximityFeedback {
        &self.proximity
    }

    pub fn timer(&self) -> &FrameTimer {
        &self.timer
    }

    pub fn audio(&self) -> &A {
        &self.audio
    }

    pub fn audio_mut(&mut self) -> &mut A {
        &mut self.audio
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    pub fn is_bloom_entry_animating(&self) -> bool {
        self.bloom_entry.is_animating()
    }

    /// Host viewport size in pixels; a degenerate size is ignored.
    pub fn set_viewport(&mut self, width: f32, height: f32) {
        self.rig.camera_mut().set_aspect(width, height);
    }

    /// Flip between the post chain and direct rendering.
    pub fn set_postprocess(&mut self, enabled: bool) {
        self.post.enabled = enabled;
    }

    /// React to the resource loader. Progress feeds the loading bar; ready
    /// builds the configured scene.
    pub fn handle_resource_event(&mut self, event: &ResourceEvent, catalog: &ResourceCatalog) {
        match *event {
            ResourceEvent::Progress { loaded, total } => {
                self.overlay.loading_percent = Progress { loaded, total }.percent();
                tracing::debug!(loaded, total, "loading progress");
            }
            ResourceEvent::Ready => self.on_ready(catalog),
        }
    }

    fn on_ready(&mut self, catalog: &ResourceCatalog) {
        if self.world.is_ready() {
            tracing::warn!("ready signal after world initialization ignored");
            return;
        }
        let groups = self.config.scene.build(catalog);
        if let Err(e) = self.world.initialize(groups) {
            tracing::warn!("world initialization failed: {e}");
            return;
        }
        self.obstacles = self.world.obstacle_set();
        self.refresh_points();

        self.target = self
            .world
            .find_entity(&self.config.frame.proximity_target)
            .map(|e| (e.id, e.transform.position));
        match self.target {
            Some((_, target)) => {
                self.proximity
                    .capture_reference(self.config.frame.start_point, target);
            }
            None => tracing::info!(
                entity = %self.config.frame.proximity_target,
                "no proximity target in scene"
            ),
        }
        self.overlay.show_enter();
        tracing::info!(
            scene = self.config.scene.name(),
            colliders = self.obstacles.len(),
            "experience ready"
        );
    }

    /// Enter the experience. Only the first call after readiness does anything.
    pub fn start(&mut self) -> bool {
        if self.phase.has_started() || !self.world.is_ready() {
            return false;
        }
        self.phase = self.phase.on_start();
        self.overlay.entered();
        self.bloom_entry.start(&mut self.post);
        let footsteps = self.footsteps.sound().clone();
        if self.audio.is_loaded(&footsteps) {
            self.audio
                .set_volume(&footsteps, self.config.audio.footstep_volume);
        }
        tracing::info!(phase = self.phase.name(), "experience started");
        true
    }

    fn set_pointer_lock(&mut self, locked: bool) {
        let next = self.phase.on_pointer_lock(locked);
        if next == self.phase {
            return;
        }
        self.phase = next;
        self.overlay.pause_visible = next == GamePhase::Paused;
        tracing::info!(phase = next.name(), "phase changed");
    }

    fn refresh_points(&mut self) {
        self.points = self
            .world
            .point_obstacles()
            .into_iter()
            .map(PointObstacle::from)
            .collect();
    }

    fn set_inspect(&mut self, open: bool) {
        self.overlay.inspect_open = open;
        self.proximity.set_inspect_open(open);
        if !open {
            self.overlay.clear_hint();
            if self.target_collected {
                self.retire_target();
            }
        }
    }

    /// Drop the proximity target and settle every channel it drove.
    fn retire_target(&mut self) {
        self.target = None;
        self.target_collected = false;
        self.proximity.clear_reference();

        let rest = PostProcessParams::default();
        self.post.film_grain = rest.film_grain;
        if self.bloom_entry.is_animating() {
            self.bloom_entry.retarget_strength(BloomSettings::TARGET.strength);
        } else {
            self.post.bloom.strength = BloomSettings::TARGET.strength;
        }
        let ambient = self.ambient.sound().clone();
        if self.audio.is_loaded(&ambient) {
            let quiet = self.config.proximity.range(Channel::AmbientVolume).min;
            self.audio.set_volume(&ambient, quiet);
        }
        tracing::info!("proximity target retired");
    }

    /// Fold one input snapshot. Returns `(click left for the world, request lock)`.
    fn fold_input(&mut self, snapshot: &IntentSnapshot) -> (bool, bool) {
        let mut click = snapshot.activated();
        let mut request_lock = false;

        if std::mem::take(&mut self.pending_inspect) {
            self.set_inspect(true);
        }

        if click && self.phase == GamePhase::Idle {
            // The entering click is consumed.
            click = false;
            request_lock = self.start();
        } else if click && self.phase == GamePhase::Paused {
            click = false;
            request_lock = true;
        }

        if let Some(locked) = snapshot.pointer_lock {
            self.set_pointer_lock(locked);
        }

        if snapshot.inspect_toggled() && self.phase.has_started() {
            let open = !self.overlay.inspect_open;
            self.set_inspect(open);
        }
        (click, request_lock)
    }

    /// Run one frame in the fixed order: input, clock, world, movement,
    /// push-out, bob and footsteps, hover and click, proximity, render.
    pub fn tick(&mut self, snapshot: &IntentSnapshot, raw_delta: f32) -> FrameReport<R::Output> {
        self.tick_count += 1;
        let _span = tracing::info_span!("frame_tick", tick = self.tick_count).entered();

        // 0) input
        let (click, request_pointer_lock) = self.fold_input(snapshot);
        let running = self.phase.is_running();
        let flags = if running {
            snapshot.flags
        } else {
            IntentFlags::default()
        };

        // 1) clock
        let time = self.clock.advance(raw_delta);
        self.timer
            .record(Duration::from_secs_f32(time.delta.max(0.0)));
        self.overlay.fps = self.timer.fps();

        // 2) time-driven entities
        self.world.update(&time);

        // 3) look, intent, collision-gated commit
        if running {
            match self.config.frame.look_mode {
                LookMode::PointerLock => self.rig.look(snapshot.look_delta),
                LookMode::Cursor => self.rig.cursor_look(snapshot.cursor),
            }
        }
        let displacement = self.rig.apply_intent(&flags, time.delta);
        let moved = self.rig.try_move(displacement, &self.obstacles);

        // 4) push-out
        let pushed_out = self.rig.push_out(&self.points);

        // 5) bob, sprint, footsteps
        let sprint_started = self.rig.update_motion(&flags, time.delta);
        self.footsteps
            .set_active(&mut self.audio, running && flags.is_moving());

        // 6) hover and click
        let hovered = if running && !self.overlay.inspect_open {
            let cursor = match self.config.frame.look_mode {
                LookMode::PointerLock => None,
                LookMode::Cursor => Some(snapshot.cursor),
            };
            let hovered = match self.rig.hover_ray(cursor) {
                Some(ray) => self.world.handle_intersections(&ray),
                None => false,
            };
            if click {
                self.world.handle_click();
            }
            hovered
        } else {
            self.world.clear_hover();
            false
        };
        self.overlay.tooltip_visible = hovered;
        let events = self.world.drain_events();
        self.apply_world_events(&events);

        // 7) proximity into post and audio; the entry flash settles on the live strength
        let proximity = self.update_proximity(running);
        if let Some(values) = proximity {
            self.bloom_entry.retarget_strength(values.bloom_strength);
        }
        self.bloom_entry.update(&mut self.post, time.delta);
        if let Some(values) = proximity {
            if !self.bloom_entry.is_animating() {
                self.post.bloom.strength = values.bloom_strength;
            }
        }

        // 8) render
        let output = self.render();

        tracing::trace!(
            phase = self.phase.name(),
            dt = time.delta,
            hovered,
            events = events.len(),
            "tick complete"
        );

        FrameReport {
            tick: self.tick_count,
            phase: self.phase,
            time,
            displacement,
            moved,
            pushed_out,
            sprint_started,
            hovered,
            events,
            proximity,
            request_pointer_lock,
            output,
        }
    }

    fn apply_world_events(&mut self, events: &[WorldEvent]) {
        for event in events {
            match event {
                WorldEvent::Collected { id, name } => {
                    self.overlay.set_hint(format!("Collected the {name}"));
                    self.refresh_points();
                    if self.target.is_some_and(|(target, _)| target == *id) {
                        self.target_collected = true;
                    }
                }
                WorldEvent::InspectRequested { .. } => self.pending_inspect = true,
                WorldEvent::Initialized { .. } | WorldEvent::HoverChanged { .. } => {}
            }
        }
    }

    fn update_proximity(&mut self, running: bool) -> Option<ChannelValues> {
        let ambient = self.ambient.sound().clone();
        if let Some((_, target)) = self.target {
            if !self.ambient_configured && self.audio.is_loaded(&ambient) {
                let mut positional = self.config.audio.ambient_positional;
                positional.position = target;
                self.audio.configure_positional(&ambient, positional);
                self.ambient_configured = true;
            }
        }
        self.ambient.set_active(&mut self.audio, running);

        let (_, target) = self.target?;
        let values = self.proximity.evaluate_at(self.rig.position(), target)?;
        self.post.film_grain = values.film_grain;
        if self.audio.is_loaded(&ambient) {
            self.audio.set_volume(&ambient, values.ambient_volume);
        }
        Some(values)
    }

    fn render(&self) -> R::Output {
        let camera = self.rig.camera();
        let eye = camera.eye();
        let frame = RenderFrame {
            view: RenderView {
                eye,
                target: eye + camera.forward(),
                fov_degrees: camera.fov.to_degrees(),
            },
            post: self.post,
            tick: self.tick_count,
        };
        self.renderer.render(&self.world, &frame)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use driftwalk_assets::{ResourceTracker, SourceManifest};
    use driftwalk_audio::RecordingAudio;
    use driftwalk_input::{Action, InputState, Motion};
    use driftwalk_kernel::ScenePreset;
    use driftwalk_render::DebugTextRenderer;

    const DT: f32 = 1.0 / 60.0;

    type Sched = FrameScheduler<RecordingAudio, DebugTextRenderer>;

    fn scheduler(scene: ScenePreset) -> Sched {
        let mut config = ExperienceConfig::default();
        config.scene = scene;
        let mut audio = RecordingAudio::new();
        audio.load("footsteps");
        audio.load("ambientHum");
        FrameScheduler::new(config, audio, DebugTextRenderer::new())
    }

    fn make_ready(s: &mut Sched) {
        let mut tracker = ResourceTracker::new(SourceManifest::builtin());
        tracker.load_all_placeholders();
        for event in tracker.drain_events() {
            s.handle_resource_event(&event, tracker.catalog());
        }
    }

    fn snapshot(actions: &[Action], input: &mut InputState) -> IntentSnapshot {
        for a in actions {
            input.apply(a);
        }
        input.take_snapshot()
    }

    fn started(scene: ScenePreset) -> (Sched, InputState) {
        let mut s = scheduler(scene);
        make_ready(&mut s);
        let mut input = InputState::new();
        let snap = snapshot(&[Action::Activate, Action::PointerLock(true)], &mut input);
        let report = s.tick(&snap, DT);
        assert!(report.request_pointer_lock);
        (s, input)
    }

    #[test]
    fn tick_before_ready_is_safe() {
        let mut s = scheduler(ScenePreset::Underwater);
        let mut input = InputState::new();
        let snap = snapshot(
            &[Action::Activate, Action::Press(Motion::Forward)],
            &mut input,
        );
        let report = s.tick(&snap, DT);
        assert_eq!(report.phase, GamePhase::Idle);
        assert!(!report.request_pointer_lock);
        assert!(report.events.is_empty());
        assert_eq!(s.rig().position(), Vec3::ZERO);
        assert!(s.overlay().loading_visible);
    }

    #[test]
    fn progress_updates_loading_percent() {
        let mut s = scheduler(ScenePreset::Underwater);
        s.handle_resource_event(
            &ResourceEvent::Progress { loaded: 1, total: 4 },
            &ResourceCatalog::new(),
        );
        assert_eq!(s.overlay().loading_percent, 25);
    }

    #[test]
    fn ready_builds_world_and_shows_enter() {
        let mut s = scheduler(ScenePreset::Underwater);
        make_ready(&mut s);
        assert!(s.world().is_ready());
        assert!(s.overlay().enter_visible);
        assert_eq!(s.phase(), GamePhase::Idle);
    }

    #[test]
    fn first_click_starts_once() {
        let (mut s, mut input) = started(ScenePreset::Underwater);
        assert_eq!(s.phase(), GamePhase::Running);
        assert!(s.is_bloom_entry_animating());
        assert!(!s.overlay().enter_visible);

        assert!(!s.start());
        let snap = snapshot(&[Action::Activate], &mut input);
        let report = s.tick(&snap, DT);
        assert_eq!(report.phase, GamePhase::Running);
        assert!(!report.request_pointer_lock);
    }

    #[test]
    fn idle_ignores_movement() {
        let mut s = scheduler(ScenePreset::Underwater);
        make_ready(&mut s);
        let mut input = InputState::new();
        let snap = snapshot(&[Action::Press(Motion::Forward)], &mut input);
        for _ in 0..10 {
            let r = s.tick(&snap, DT);
            assert_eq!(r.displacement, Vec2::ZERO);
        }
        assert_eq!(s.rig().position(), Vec3::ZERO);
    }

    #[test]
    fn running_moves_and_plays_footsteps() {
        let (mut s, mut input) = started(ScenePreset::Underwater);
        let snap = snapshot(&[Action::Press(Motion::Forward)], &mut input);
        for _ in 0..5 {
            s.tick(&snap, DT);
        }
        assert!(s.rig().position().z < 0.0);
        assert!(s.audio().is_playing(&"footsteps".into()));
        assert_eq!(s.audio().volume(&"footsteps".into()), Some(0.4));

        let snap = snapshot(&[Action::Release(Motion::Forward)], &mut input);
        s.tick(&snap, DT);
        assert!(!s.audio().is_playing(&"footsteps".into()));
    }

    #[test]
    fn lock_loss_pauses_and_freezes_movement() {
        let (mut s, mut input) = started(ScenePreset::Underwater);
        let snap = snapshot(
            &[Action::Press(Motion::Forward), Action::PointerLock(false)],
            &mut input,
        );
        let report = s.tick(&snap, DT);
        assert_eq!(report.phase, GamePhase::Paused);
        assert!(s.overlay().pause_visible);
        assert!(!report.moved.committed());
        assert!(!s.audio().is_playing(&"footsteps".into()));

        // click while paused asks for the lock back
        let snap = snapshot(&[Action::Activate], &mut input);
        assert!(s.tick(&snap, DT).request_pointer_lock);

        let snap = snapshot(&[Action::PointerLock(true)], &mut input);
        assert_eq!(s.tick(&snap, DT).phase, GamePhase::Running);
        assert!(!s.overlay().pause_visible);
    }

    #[test]
    fn hover_reaches_plankton_ahead() {
        let (mut s, mut input) = started(ScenePreset::Underwater);
        // plankton_1 sits at (0, 0.5, -3): tilt the view toward it
        let pitch = (0.5_f32 / 3.0).atan();
        s.rig_mut().camera_mut().pitch = pitch;
        let snap = snapshot(&[], &mut input);
        let report = s.tick(&snap, DT);
        assert!(report.hovered);
        assert!(s.overlay().tooltip_visible);
        assert_eq!(s.world().group("plankton").map(|g| g.tooltip_visible()), Some(true));

        // Losing the lock drops hover on the same tick.
        let snap = snapshot(&[Action::PointerLock(false)], &mut input);
        assert!(!s.tick(&snap, DT).hovered);
        assert!(!s.world().any_hovered());
    }

    #[test]
    fn backrooms_proximity_and_bloom_handoff() {
        let (mut s, mut input) = started(ScenePreset::Backrooms);
        let max = s.proximity().max_distance().unwrap();
        assert!((max - (0.3_f32 * 0.3 + 100.0).sqrt()).abs() < 1e-4);

        // During the entry flash the bloom strength belongs to the animation.
        let snap = snapshot(&[], &mut input);
        let report = s.tick(&snap, DT);
        let values = report.proximity.unwrap();
        assert!(s.is_bloom_entry_animating());
        assert!(s.post().bloom.strength > values.bloom_strength);

        // The flash settles on the proximity strength, so handing over does not jump.
        let mut prev = s.post().bloom.strength;
        for _ in 0..600 {
            s.tick(&snap, DT);
            let now = s.post().bloom.strength;
            if !s.is_bloom_entry_animating() {
                assert!((now - prev).abs() < 0.01, "handoff jumped {prev} -> {now}");
                break;
            }
            prev = now;
        }
        assert!(!s.is_bloom_entry_animating());
        let report = s.tick(&snap, DT);
        let values = report.proximity.unwrap();
        assert_eq!(s.post().bloom.strength, values.bloom_strength);
        let hum = "ambientHum".into();
        assert_eq!(s.audio().volume(&hum), Some(values.ambient_volume));
        assert!(s.audio().positional(&hum).is_some());
        assert!(s.audio().is_playing(&hum));
    }

    #[test]
    fn walls_stop_the_player() {
        let (mut s, mut input) = started(ScenePreset::Backrooms);
        // face the left wall and push into it
        s.rig_mut().set_position(Vec3::new(0.0, 0.0, -3.0));
        s.rig_mut().camera_mut().yaw = std::f32::consts::PI;
        let snap = snapshot(&[Action::Press(Motion::Forward)], &mut input);
        for _ in 0..300 {
            s.tick(&snap, DT);
        }
        // wall inner face at x = -1.0, radius 0.5
        assert!(s.rig().position().x > -1.0);
    }

    fn settle_bloom(s: &mut Sched, input: &mut InputState) {
        let snap = snapshot(&[], input);
        for _ in 0..600 {
            if !s.is_bloom_entry_animating() {
                return;
            }
            s.tick(&snap, DT);
        }
        panic!("bloom entry never finished");
    }

    /// Started backrooms run, entry flash over, chest hovered from two units away.
    fn facing_chest() -> (Sched, InputState) {
        let (mut s, mut input) = started(ScenePreset::Backrooms);
        settle_bloom(&mut s, &mut input);
        s.rig_mut().set_position(Vec3::new(0.0, 0.3, -8.0));
        let snap = snapshot(&[], &mut input);
        assert!(s.tick(&snap, DT).hovered);
        (s, input)
    }

    #[test]
    fn inspect_opens_on_the_tick_after_collection() {
        let (mut s, mut input) = facing_chest();

        let snap = snapshot(&[Action::Activate], &mut input);
        let report = s.tick(&snap, DT);
        assert!(report
            .events
            .iter()
            .any(|e| matches!(e, WorldEvent::Collected { .. })));
        let values = report.proximity.unwrap();
        assert!(values.bloom_strength > 0.0);
        assert_eq!(s.post().bloom.strength, values.bloom_strength);
        assert!(!s.overlay().inspect_open);
        assert!(!s.proximity().is_suppressed(Channel::BloomStrength));

        let snap = snapshot(&[], &mut input);
        let report = s.tick(&snap, DT);
        assert!(s.overlay().inspect_open);
        assert!(s.proximity().is_suppressed(Channel::BloomStrength));
        assert_eq!(report.proximity.unwrap().bloom_strength, 0.0);
        assert_eq!(s.post().bloom.strength, 0.0);
        assert!(!report.hovered);
    }

    #[test]
    fn collected_chest_stops_pushing_and_retires_proximity() {
        let (mut s, mut input) = facing_chest();
        let snap = snapshot(&[Action::Activate], &mut input);
        s.tick(&snap, DT);
        let snap = snapshot(&[], &mut input);
        s.tick(&snap, DT);
        assert!(s.overlay().inspect_open);
        assert!(s.overlay().hint.is_some());

        // Closing the overlay lifts the suppression and retires the target.
        let snap = snapshot(&[Action::ToggleInspect], &mut input);
        let report = s.tick(&snap, DT);
        assert!(!s.overlay().inspect_open);
        assert!(s.overlay().hint.is_none());
        assert!(!s.proximity().is_suppressed(Channel::BloomStrength));
        assert!(!s.proximity().has_reference());
        assert!(report.proximity.is_none());
        assert_eq!(s.post().bloom.strength, BloomSettings::TARGET.strength);
        assert_eq!(s.audio().volume(&"ambientHum".into()), Some(0.035));

        // Standing where the chest used to be no longer pushes the body out.
        s.rig_mut().set_position(Vec3::new(0.0, 0.0, -9.6));
        let snap = snapshot(&[], &mut input);
        let report = s.tick(&snap, DT);
        assert!(!report.pushed_out);
        assert!((s.rig().position().z + 9.6).abs() < 1e-6);
    }

    #[test]
    fn chest_pushes_until_collected() {
        let (mut s, mut input) = started(ScenePreset::Backrooms);
        s.rig_mut().set_position(Vec3::new(0.0, 0.0, -9.6));
        let snap = snapshot(&[], &mut input);
        let report = s.tick(&snap, DT);
        assert!(report.pushed_out);
        assert!((s.rig().position().z + 9.2).abs() < 1e-5);
    }

    #[test]
    fn viewport_sets_camera_aspect() {
        let mut s = scheduler(ScenePreset::Underwater);
        s.set_viewport(1920.0, 1080.0);
        assert!((s.rig().camera().aspect - 16.0 / 9.0).abs() < 1e-6);
        s.set_viewport(0.0, 1080.0);
        assert!((s.rig().camera().aspect - 16.0 / 9.0).abs() < 1e-6);
    }

    #[test]
    fn ambient_plays_without_proximity_target() {
        let (s, _) = started(ScenePreset::Underwater);
        let hum = "ambientHum".into();
        assert!(s.audio().is_playing(&hum));
        assert!(s.audio().positional(&hum).is_none());
        assert!(s.proximity().max_distance().is_none());
    }

    #[test]
    fn sprint_start_is_reported() {
        let (mut s, mut input) = started(ScenePreset::Underwater);
        let snap = snapshot(&[Action::Press(Motion::Sprint)], &mut input);
        assert!(s.tick(&snap, DT).sprint_started);
        assert!(!s.tick(&snap, DT).sprint_started);
    }

    #[test]
    fn render_output_reflects_post_toggle() {
        let (mut s, mut input) = started(ScenePreset::Underwater);
        let snap = snapshot(&[], &mut input);
        assert!(s.tick(&snap, DT).output.contains("(post)"));
        s.set_postprocess(false);
        assert!(s.tick(&snap, DT).output.contains("(direct)"));
    }
}
