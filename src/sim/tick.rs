//! Variable-timestep simulation step
//!
//! `Session` owns one level's worth of state and advances it by a measured
//! delta in milliseconds. Order inside a step: clock, player, spawner,
//! particle pass, difficulty decay.

use glam::Vec2;

use super::collision::{below_screen, find_accepting_container, in_catch_band, within_reach};
use super::rng::{PcgSource, RandomSource};
use super::spawner::run_spawner;
use super::state::{
    ContainerRuntime, Direction, GameEvent, GamePhase, Particle, ParticleKind, PlayerState,
    SessionState,
};
use crate::level::LevelConfig;

/// Input for a single step, already edge-detected by the caller
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Currently held movement direction
    pub direction: Direction,
    /// Start the game / throw the held item (space)
    pub primary_action: bool,
    /// Return to Idle (escape)
    pub reset: bool,
}

/// One level's game session
#[derive(Debug, Clone)]
pub struct Session<R: RandomSource = PcgSource> {
    level: LevelConfig,
    state: SessionState,
    player: PlayerState,
    containers: Vec<ContainerRuntime>,
    particles: Vec<Particle>,
    direction: Direction,
    events: Vec<GameEvent>,
    rng: R,
}

impl Session<PcgSource> {
    /// New session with a per-run random seed
    pub fn new(level: LevelConfig) -> Self {
        Self::with_rng(level, PcgSource::from_entropy())
    }

    /// New session with a reproducible random stream
    pub fn seeded(level: LevelConfig, seed: u64) -> Self {
        Self::with_rng(level, PcgSource::seeded(seed))
    }
}

impl<R: RandomSource> Session<R> {
    /// New session drawing from `rng`; `level` must already be validated
    pub fn with_rng(level: LevelConfig, rng: R) -> Self {
        let containers = level
            .containers
            .iter()
            .cloned()
            .map(ContainerRuntime::new)
            .collect();
        Self {
            state: SessionState::new(&level),
            player: PlayerState::new(&level),
            containers,
            particles: Vec::new(),
            direction: Direction::None,
            events: Vec::new(),
            level,
            rng,
        }
    }

    pub fn level(&self) -> &LevelConfig {
        &self.level
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    pub fn player(&self) -> &PlayerState {
        &self.player
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn containers(&self) -> &[ContainerRuntime] {
        &self.containers
    }

    /// Score fixed at game over, if the game has ended
    pub fn final_score(&self) -> Option<u64> {
        self.state.final_score
    }

    /// Take the events recorded since the last call
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Direction used by subsequent steps
    pub fn set_direction(&mut self, direction: Direction) {
        self.direction = direction;
    }

    /// Apply one frame of input, then advance
    pub fn tick(&mut self, input: &TickInput, dt_ms: u32) {
        if input.reset {
            self.reset();
        }
        self.set_direction(input.direction);
        if input.primary_action {
            self.primary_action();
        }
        self.advance(dt_ms);
    }

    /// Space: start from Idle, or throw the held item while playing
    pub fn primary_action(&mut self) {
        match self.state.phase {
            GamePhase::Idle => self.start(),
            GamePhase::Playing => self.throw_held(),
            GamePhase::GameOver => {}
        }
    }

    /// Back to Idle with fresh state, from any phase
    pub fn reset(&mut self) {
        self.state = SessionState::new(&self.level);
        self.player = PlayerState::new(&self.level);
        self.particles.clear();
        for container in &mut self.containers {
            container.last_catch_ms = None;
        }
        self.direction = Direction::None;
        self.events.push(GameEvent::Reset);
        log::info!("Session reset: {}", self.level.title);
    }

    fn start(&mut self) {
        self.state.phase = GamePhase::Playing;
        self.state.elapsed_ms = 0;
        self.state.spawn_countdown = 0.0;
        self.events.push(GameEvent::Started);
        log::info!("Session started: {}", self.level.title);
    }

    fn throw_held(&mut self) {
        let Some(object_type) = self.player.held.take() else {
            return;
        };
        let pos = Vec2::new(
            self.player.x,
            self.player.y + self.level.player.size.y / 2.0,
        );
        let seed = self.rng.next_u32();
        self.particles.push(Particle::thrown(
            pos,
            object_type,
            self.level.max_fall_speed,
            seed,
        ));
        self.events.push(GameEvent::Thrown { object_type });
        log::debug!("threw type {object_type} at x={:.1}", pos.x);
    }

    /// Advance the simulation by `dt_ms` milliseconds
    ///
    /// Zero deltas (duplicate timestamps) and Idle sessions are left untouched.
    pub fn advance(&mut self, dt_ms: u32) {
        if dt_ms == 0 {
            return;
        }
        let dt = dt_ms as f32;

        match self.state.phase {
            GamePhase::Idle => {}

            GamePhase::Playing => {
                self.state.elapsed_ms += u64::from(dt_ms);
                self.player.steer(self.direction, &self.level, dt);

                let spawned = run_spawner(
                    &mut self.state,
                    &self.level,
                    &mut self.rng,
                    &mut self.particles,
                    dt,
                );
                if spawned > 0 {
                    log::trace!("{spawned} spawned, {} in flight", self.particles.len());
                }

                self.step_particles(dt);

                // Game over slams the difficulty knobs instead
                if self.state.phase == GamePhase::Playing {
                    self.state.decay_difficulty(dt);
                }
            }

            GamePhase::GameOver => {
                // Leftover particles keep falling until they leave the screen
                self.state.elapsed_ms += u64::from(dt_ms);
                self.step_particles(dt);
            }
        }
    }

    /// Single pass over all particles: gravity, then per-kind rules
    ///
    /// Removals are marked during the pass and compacted once at the end.
    fn step_particles(&mut self, dt: f32) {
        let level = &self.level;
        let player_size = level.player.size;
        let mut removed = vec![false; self.particles.len()];

        for (idx, particle) in self.particles.iter_mut().enumerate() {
            // Re-read each time: a life lost mid-pass can end the game
            let live = self.state.phase == GamePhase::Playing;

            if !particle.is_thrown() || particle.pos.y > level.topline {
                particle.apply_gravity(level.gravity, dt);
            }
            particle.integrate(dt);

            let object_height = level.object_height(particle.object_type);

            match particle.kind {
                ParticleKind::Thrown => {
                    if live {
                        if let Some(index) = find_accepting_container(&self.containers, particle) {
                            self.state.container_hits += 1;
                            self.containers[index].last_catch_ms = Some(self.state.elapsed_ms);
                            self.events.push(GameEvent::Delivered {
                                container: index,
                                object_type: particle.object_type,
                            });
                            log::debug!(
                                "delivered type {} to container {index} ({} total)",
                                particle.object_type,
                                self.state.container_hits
                            );
                            removed[idx] = true;
                            continue;
                        }
                    }
                    // Missed every container and fell back out of view
                    if below_screen(particle.pos, object_height) {
                        log::trace!("thrown type {} left the screen", particle.object_type);
                        removed[idx] = true;
                    }
                }

                ParticleKind::Falling => {
                    if !in_catch_band(particle.pos, &self.player, player_size) {
                        continue;
                    }

                    if live
                        && self.player.held.is_none()
                        && within_reach(particle.pos, &self.player, player_size)
                    {
                        self.player.held = Some(particle.object_type);
                        self.events.push(GameEvent::Caught {
                            object_type: particle.object_type,
                        });
                        log::debug!("caught type {}", particle.object_type);
                        removed[idx] = true;
                    } else if particle.pos.y < level.baseline {
                        if particle.terminal_speed > level.min_bounce_speed {
                            particle.bounce(level.baseline);
                            self.events.push(GameEvent::Bounced {
                                object_type: particle.object_type,
                            });
                        } else if below_screen(particle.pos, object_height) {
                            if live {
                                let ended = self.state.lose_life();
                                self.events.push(GameEvent::LifeLost {
                                    lives: self.state.lives,
                                });
                                log::debug!(
                                    "missed type {}, {} lives left",
                                    particle.object_type,
                                    self.state.lives
                                );
                                if ended {
                                    let final_score = self.state.score();
                                    self.events.push(GameEvent::GameOver { final_score });
                                    log::info!(
                                        "Game over after {} ms: score {final_score}",
                                        self.state.elapsed_ms
                                    );
                                }
                            }
                            removed[idx] = true;
                        }
                    }
                }
            }
        }

        let mut flags = removed.into_iter();
        self.particles.retain(|_| !flags.next().unwrap_or(false));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::START_LIVES;
    use crate::level::{AcceptanceWindow, ContainerSpec};
    use proptest::prelude::*;
    use std::collections::VecDeque;

    /// Replays queued values, then falls back to fixed defaults
    #[derive(Debug, Clone, Default)]
    struct ScriptedSource {
        floats: VecDeque<f32>,
        ints: VecDeque<usize>,
    }

    impl RandomSource for ScriptedSource {
        fn uniform_f32(&mut self, lo: f32, hi: f32) -> f32 {
            self.floats
                .pop_front()
                .unwrap_or(lo)
                .clamp(lo, hi.max(lo))
        }

        fn uniform_usize(&mut self, lo: usize, hi: usize) -> usize {
            self.ints.pop_front().unwrap_or(lo).clamp(lo, hi.saturating_sub(1).max(lo))
        }

        fn next_u32(&mut self) -> u32 {
            0
        }
    }

    /// Quiet level: one container for type 0 at x 500..560, no spawning
    fn quiet_level() -> LevelConfig {
        LevelConfig {
            spawn_jitter_window: 0.0,
            containers: vec![
                ContainerSpec {
                    accepts: 0,
                    pos: Vec2::new(500.0, 150.0),
                    window: AcceptanceWindow {
                        lo: Vec2::new(0.0, 0.0),
                        hi: Vec2::new(60.0, 80.0),
                    },
                },
                ContainerSpec {
                    accepts: 1,
                    pos: Vec2::new(100.0, 150.0),
                    window: AcceptanceWindow {
                        lo: Vec2::new(0.0, 0.0),
                        hi: Vec2::new(60.0, 80.0),
                    },
                },
            ],
            object_sizes: vec![Vec2::new(32.0, 32.0); 2],
            ..Default::default()
        }
    }

    fn started(level: LevelConfig) -> Session<ScriptedSource> {
        let mut session = Session::with_rng(level, ScriptedSource::default());
        session.primary_action();
        session
    }

    fn drop_falling(session: &mut Session<ScriptedSource>, x: f32, y: f32, terminal: f32) {
        session
            .particles
            .push(Particle::falling(Vec2::new(x, y), 0, terminal, 0));
    }

    #[test]
    fn test_idle_to_playing() {
        let mut session = Session::seeded(LevelConfig::default(), 12345);
        assert_eq!(session.phase(), GamePhase::Idle);

        // Idle sessions do not advance
        session.advance(100);
        assert_eq!(session.state().elapsed_ms, 0);

        session.tick(
            &TickInput {
                primary_action: true,
                ..Default::default()
            },
            16,
        );
        assert_eq!(session.phase(), GamePhase::Playing);
        assert_eq!(session.state().elapsed_ms, 16);
        assert_eq!(session.particles().len(), 1);
        assert_eq!(session.drain_events(), vec![GameEvent::Started]);
    }

    #[test]
    fn test_zero_delta_is_noop() {
        let mut session = Session::seeded(LevelConfig::default(), 7);
        session.primary_action();
        session.set_direction(Direction::Right);
        for _ in 0..50 {
            session.advance(16);
        }
        let state = session.state().clone();
        let x = session.player().x;
        let positions: Vec<Vec2> = session.particles().iter().map(|p| p.pos).collect();

        session.advance(0);
        assert_eq!(session.state(), &state);
        assert_eq!(session.player().x, x);
        let after: Vec<Vec2> = session.particles().iter().map(|p| p.pos).collect();
        assert_eq!(after, positions);
    }

    #[test]
    fn test_difficulty_decays_while_playing() {
        let level = LevelConfig::default();
        let mut session = Session::seeded(level.clone(), 1);
        session.primary_action();
        session.advance(1000);
        let state = session.state();
        assert!((state.spawn_mean_interval - (level.spawn_mean_interval - 10.0)).abs() < 1e-3);
        assert!((state.spawn_jitter_window - (level.spawn_jitter_window - 1.0)).abs() < 1e-3);
    }

    #[test]
    fn test_catch_fills_empty_hand() {
        let mut session = started(quiet_level());
        let x = session.player().x;
        drop_falling(&mut session, x, 60.0, 0.2);

        session.advance(16);
        assert!(session.particles().is_empty());
        assert_eq!(session.player().held, Some(0));
        assert!(session
            .drain_events()
            .contains(&GameEvent::Caught { object_type: 0 }));
    }

    #[test]
    fn test_second_catch_leaves_hand_unchanged() {
        let mut session = started(quiet_level());
        session.player.held = Some(1);
        let x = session.player().x;
        drop_falling(&mut session, x, 60.0, 0.2);

        session.advance(16);
        assert_eq!(session.player().held, Some(1));
        assert_eq!(session.particles().len(), 1);
        // Still falling
        assert!(session.particles()[0].vel.y < 0.0);
        assert!(session.particles()[0].pos.y < 60.0);
    }

    #[test]
    fn test_out_of_reach_is_not_caught() {
        let mut session = started(quiet_level());
        let x = session.player().x + 30.0;
        drop_falling(&mut session, x, 60.0, 0.2);

        session.advance(16);
        assert_eq!(session.player().held, None);
        assert_eq!(session.particles().len(), 1);
    }

    #[test]
    fn test_equal_speeds_never_bounce() {
        // max fall speed == min bounce speed: the first baseline contact is final
        let level = LevelConfig {
            max_fall_speed: 0.2,
            min_bounce_speed: 0.2,
            ..quiet_level()
        };
        let mut session = started(level);
        drop_falling(&mut session, 20.0, 300.0, 0.2);

        let mut bounces = 0;
        for _ in 0..400 {
            session.advance(16);
            bounces += session
                .drain_events()
                .iter()
                .filter(|e| matches!(e, GameEvent::Bounced { .. }))
                .count();
        }
        assert_eq!(bounces, 0);
        assert!(session.particles().is_empty());
        assert_eq!(session.state().lives, START_LIVES - 1);
    }

    #[test]
    fn test_bounces_halve_terminal_speed_until_miss() {
        let level = LevelConfig {
            min_bounce_speed: 0.05,
            ..quiet_level()
        };
        let mut session = started(level);
        drop_falling(&mut session, 20.0, 200.0, 0.4);

        let mut speeds = vec![0.4];
        for _ in 0..2000 {
            session.advance(16);
            if let Some(p) = session.particles().first() {
                let last = speeds.last().copied().unwrap_or(0.4);
                assert!(p.terminal_speed <= last);
                assert!(p.terminal_speed >= 0.0);
                if p.terminal_speed < last {
                    assert_eq!(p.terminal_speed, last / 2.0);
                    speeds.push(p.terminal_speed);
                }
            }
        }
        // 0.4 -> 0.2 -> 0.1 -> 0.05, then no longer above the minimum
        assert_eq!(speeds, vec![0.4, 0.2, 0.1, 0.05]);
        assert!(session.particles().is_empty());
        assert_eq!(session.state().lives, START_LIVES - 1);
    }

    #[test]
    fn test_throw_requires_held_item() {
        let mut session = started(quiet_level());
        session.primary_action();
        assert!(session.particles().is_empty());

        session.player.held = Some(0);
        session.primary_action();
        assert_eq!(session.player().held, None);
        let p = &session.particles()[0];
        assert_eq!(p.kind, ParticleKind::Thrown);
        assert_eq!(p.vel.y, session.level().max_fall_speed);
        assert_eq!(p.terminal_speed, session.level().max_fall_speed / 2.0);
        assert_eq!(p.pos.x, session.player().x);
        assert_eq!(p.pos.y, session.player().y + session.level().player.size.y / 2.0);
    }

    #[test]
    fn test_thrown_item_scores_in_matching_container() {
        let mut session = started(quiet_level());
        session.player.x = 530.0;
        session.player.held = Some(0);
        session.primary_action();
        // A falling item elsewhere must survive the delivery
        drop_falling(&mut session, 20.0, 400.0, 0.2);

        for _ in 0..60 {
            session.advance(16);
        }
        assert_eq!(session.state().container_hits, 1);
        assert_eq!(session.particles().len(), 1);
        assert_eq!(session.particles()[0].kind, ParticleKind::Falling);
        assert!(session.containers()[0].last_catch_ms.is_some());
        assert_eq!(session.containers()[1].last_catch_ms, None);
    }

    #[test]
    fn test_thrown_item_ignores_wrong_container() {
        let mut session = started(quiet_level());
        // Under container 1, which takes type 1 only
        session.player.x = 130.0;
        session.player.held = Some(0);
        session.primary_action();

        for _ in 0..60 {
            session.advance(16);
        }
        assert_eq!(session.state().container_hits, 0);
        assert!(session.containers().iter().all(|c| c.last_catch_ms.is_none()));
        assert_eq!(session.particles().len(), 1);
    }

    #[test]
    fn test_unmatched_thrown_item_is_dropped_without_life_loss() {
        let mut session = started(quiet_level());
        session.player.x = 320.0;
        session.player.held = Some(0);
        session.primary_action();

        // Rises to the topline, falls back, passes the player and leaves the screen
        for _ in 0..1000 {
            session.advance(16);
            assert_eq!(session.player().held, None);
        }
        assert!(session.particles().is_empty());
        assert_eq!(session.state().lives, START_LIVES);
        assert_eq!(session.state().container_hits, 0);
    }

    #[test]
    fn test_game_over_exactly_once() {
        let mut session = started(quiet_level());
        // Four misses resolving in the same step: only three lives to lose
        for x in [20.0, 40.0, 60.0, 80.0] {
            drop_falling(&mut session, x, -31.9, 0.1);
        }
        session.state.container_hits = 2;
        session.state.elapsed_ms = 4_500;

        session.advance(16);
        let events = session.drain_events();
        let game_overs = events
            .iter()
            .filter(|e| matches!(e, GameEvent::GameOver { .. }))
            .count();
        assert_eq!(game_overs, 1);
        assert_eq!(session.phase(), GamePhase::GameOver);
        assert_eq!(session.state().lives, 0);
        // 4516 ms -> 4 s, plus two deliveries
        assert_eq!(session.final_score(), Some(204));
        assert!(session.particles().is_empty());

        for _ in 0..100 {
            session.advance(16);
        }
        assert_eq!(session.final_score(), Some(204));
        assert_eq!(session.state().lives, 0);
    }

    #[test]
    fn test_game_over_freezes_spawns_and_catches() {
        let mut session = started(LevelConfig::default());
        session.state.lives = 1;
        drop_falling(&mut session, 20.0, -31.9, 0.1);
        session.advance(16);
        assert_eq!(session.phase(), GamePhase::GameOver);

        let x = session.player().x;
        drop_falling(&mut session, x, 60.0, 0.2);
        // Long enough for the slowest spawned particle to leave the screen
        for _ in 0..1200 {
            session.advance(16);
        }
        assert_eq!(session.player().held, None);
        assert!(session.particles().is_empty());

        // Primary action does nothing after the game ends
        session.primary_action();
        assert_eq!(session.phase(), GamePhase::GameOver);
    }

    #[test]
    fn test_reset_returns_to_idle() {
        let mut session = started(quiet_level());
        session.player.held = Some(1);
        session.player.x = 10.0;
        drop_falling(&mut session, 20.0, 300.0, 0.2);
        session.containers[0].last_catch_ms = Some(5);
        session.advance(16);

        session.tick(
            &TickInput {
                reset: true,
                ..Default::default()
            },
            16,
        );
        assert_eq!(session.phase(), GamePhase::Idle);
        assert_eq!(session.state().elapsed_ms, 0);
        assert_eq!(session.state().lives, START_LIVES);
        assert_eq!(session.player().held, None);
        assert_eq!(session.player().x, session.level().width / 2.0);
        assert!(session.particles().is_empty());
        assert!(session.containers().iter().all(|c| c.last_catch_ms.is_none()));
    }

    #[test]
    fn test_reset_after_game_over_starts_fresh_session() {
        let mut session = started(quiet_level());
        session.state.lives = 1;
        drop_falling(&mut session, 20.0, -31.9, 0.1);
        session.advance(16);
        assert_eq!(session.phase(), GamePhase::GameOver);
        assert!(session.final_score().is_some());

        session.reset();
        assert_eq!(session.phase(), GamePhase::Idle);
        assert_eq!(session.final_score(), None);
        assert_eq!(session.state().lives, START_LIVES);
        assert_eq!(session.state().container_hits, 0);

        session.primary_action();
        assert_eq!(session.phase(), GamePhase::Playing);
        session.advance(16);
        assert_eq!(session.state().elapsed_ms, 16);
        assert_eq!(session.state().score(), 0);
        assert!(session.drain_events().contains(&GameEvent::Started));
    }

    #[test]
    fn test_reset_from_idle_stays_idle() {
        let mut session = Session::with_rng(quiet_level(), ScriptedSource::default());
        session.reset();
        assert_eq!(session.phase(), GamePhase::Idle);
        assert_eq!(session.state().lives, START_LIVES);
        assert_eq!(session.drain_events(), vec![GameEvent::Reset]);
    }

    #[test]
    fn test_unbounded_jitter_does_not_panic() {
        // Bypasses validation on purpose
        let level = LevelConfig {
            spawn_jitter_window: f32::INFINITY,
            ..LevelConfig::default()
        };
        let mut session = Session::seeded(level, 8);
        session.primary_action();
        session.advance(16);
        assert_eq!(session.particles().len(), 1);
    }

    #[test]
    fn test_exhausted_jitter_stops_spawning_for_good() {
        let level = LevelConfig {
            spawn_mean_interval: 10_000.0,
            spawn_jitter_window: 0.5,
            ..quiet_level()
        };
        let mut session = started(level);
        let mut spawned = 0;
        for step in 0..4000 {
            let before = session.particles().len();
            session.advance(16);
            if session.particles().len() > before {
                spawned += session.particles().len() - before;
            }
            if step > 1000 {
                assert!(session.state().spawn_jitter_window <= 0.0);
            }
        }
        // Only the immediate first spawn; the 10 s countdown expires after the window closed
        assert_eq!(spawned, 1);
        assert!(session.particles().is_empty());
        assert_eq!(session.phase(), GamePhase::Playing);
    }

    #[test]
    fn test_seeded_sessions_are_identical() {
        let mut a = Session::seeded(LevelConfig::default(), 99);
        let mut b = Session::seeded(LevelConfig::default(), 99);
        let inputs = [
            TickInput {
                primary_action: true,
                ..Default::default()
            },
            TickInput {
                direction: Direction::Left,
                ..Default::default()
            },
            TickInput::default(),
        ];
        for _ in 0..200 {
            for input in &inputs {
                a.tick(input, 17);
                b.tick(input, 17);
            }
        }
        assert_eq!(a.state(), b.state());
        assert_eq!(a.particles().len(), b.particles().len());
        assert_eq!(a.player().x, b.player().x);
    }

    fn direction_strategy() -> impl Strategy<Value = Direction> {
        prop_oneof![
            Just(Direction::None),
            Just(Direction::Left),
            Just(Direction::Right),
        ]
    }

    proptest! {
        #[test]
        fn prop_player_stays_in_bounds(
            steps in prop::collection::vec((direction_strategy(), 0u32..200), 1..200),
        ) {
            let mut session = Session::seeded(LevelConfig::default(), 3);
            session.primary_action();
            let width = session.level().width;
            for (direction, dt) in steps {
                session.set_direction(direction);
                session.advance(dt);
                let player = session.player();
                prop_assert!(player.x >= 0.0 && player.x <= width);
                if player.x == 0.0 || player.x == width {
                    prop_assert_eq!(player.vel_x, 0.0);
                }
            }
        }

        #[test]
        fn prop_lives_never_increase(
            seed in any::<u64>(),
            dts in prop::collection::vec(1u32..250, 1..400),
        ) {
            let level = LevelConfig {
                spawn_mean_interval: 200.0,
                spawn_jitter_window: 300.0,
                ..Default::default()
            };
            let mut session = Session::seeded(level, seed);
            session.primary_action();
            let mut lives = session.state().lives;
            let mut game_overs = 0;
            for dt in dts {
                session.advance(dt);
                prop_assert!(session.state().lives <= lives);
                lives = session.state().lives;
                game_overs += session
                    .drain_events()
                    .iter()
                    .filter(|e| matches!(e, GameEvent::GameOver { .. }))
                    .count();
                prop_assert_eq!(lives == 0, session.phase() == GamePhase::GameOver);
            }
            prop_assert!(game_overs <= 1);
        }
    }
}
