//! Game state and core simulation types
//!
//! Everything the renderer reads between steps lives here.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rng::RandomSource;
use crate::consts::*;
use crate::level::{ContainerSpec, LevelConfig};

/// Object type id, `0..LevelConfig::object_types()`
pub type ObjectType = usize;

/// Current phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for the first primary action (pre-start or after reset)
    Idle,
    /// Active gameplay
    Playing,
    /// Out of lives; terminal until reset
    GameOver,
}

/// Held movement direction, as reported by the input layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Direction {
    #[default]
    None,
    Left,
    Right,
}

/// Which way the player sprite faces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Facing {
    Left,
    #[default]
    Right,
}

/// Particle lifecycle variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParticleKind {
    /// Spawned from the top; can be caught, bounces, costs a life when missed
    Falling,
    /// Tossed by the player toward the containers
    Thrown,
}

/// An in-flight object
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Particle {
    pub pos: Vec2,
    /// Y velocity is positive upward
    pub vel: Vec2,
    pub object_type: ObjectType,
    pub kind: ParticleKind,
    /// Downward speed cap; halves on every baseline bounce
    pub terminal_speed: f32,
    /// Cosmetic rotation seed
    pub phase_seed: u32,
}

impl Particle {
    pub fn falling(pos: Vec2, object_type: ObjectType, terminal_speed: f32, phase_seed: u32) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            object_type,
            kind: ParticleKind::Falling,
            terminal_speed,
            phase_seed,
        }
    }

    /// A held item released straight up at `speed`
    pub fn thrown(pos: Vec2, object_type: ObjectType, speed: f32, phase_seed: u32) -> Self {
        Self {
            pos,
            vel: Vec2::new(0.0, speed),
            object_type,
            kind: ParticleKind::Thrown,
            terminal_speed: speed / 2.0,
            phase_seed,
        }
    }

    #[inline]
    pub fn is_thrown(&self) -> bool {
        self.kind == ParticleKind::Thrown
    }

    /// Accelerate downward, capped at the terminal speed
    pub fn apply_gravity(&mut self, gravity: f32, dt: f32) {
        self.vel.y = (self.vel.y - gravity * dt).max(-self.terminal_speed);
    }

    pub fn integrate(&mut self, dt: f32) {
        self.pos.y += self.vel.y * dt;
    }

    /// Reflect off the baseline, losing half the terminal speed
    pub fn bounce(&mut self, baseline: f32) {
        self.pos.y = baseline;
        self.vel.y = self.terminal_speed;
        self.terminal_speed /= 2.0;
    }

    /// Sprite rotation in degrees at `elapsed_ms`
    pub fn rotation_degrees(&self, elapsed_ms: u64) -> f32 {
        let unit = self.phase_seed as f64 / u32::MAX as f64;
        // 10..170 ms per degree
        let ms_per_degree = 10.0 + unit * 160.0;
        let angle = ((self.phase_seed % 360) as f64 + elapsed_ms as f64 / ms_per_degree) % 360.0;
        if self.phase_seed % 2 == 1 {
            -angle as f32
        } else {
            angle as f32
        }
    }

    /// Sprite opacity: thrown and below-baseline items are drawn faded
    pub fn alpha(&self, baseline: f32) -> f32 {
        if self.is_thrown() || self.pos.y < baseline {
            0.5
        } else {
            1.0
        }
    }
}

/// The catcher
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerState {
    pub x: f32,
    pub vel_x: f32,
    /// Constant; the player only moves horizontally
    pub y: f32,
    /// Caught item waiting to be thrown
    pub held: Option<ObjectType>,
    pub facing: Facing,
}

impl PlayerState {
    /// Player standing at the horizontal centre of the level
    pub fn new(level: &LevelConfig) -> Self {
        Self {
            x: level.width / 2.0,
            vel_x: 0.0,
            y: level.player_y,
            held: None,
            facing: Facing::Right,
        }
    }

    /// Accelerate, apply friction, integrate and clamp to the level bounds
    pub fn steer(&mut self, direction: Direction, level: &LevelConfig, dt: f32) {
        let step = level.player_accel * dt;
        let max = level.max_player_speed;

        match direction {
            Direction::Left => self.vel_x = (self.vel_x - step).max(-max),
            Direction::Right => self.vel_x = (self.vel_x + step).min(max),
            Direction::None => {
                if self.vel_x != 0.0 {
                    // Snap to rest instead of oscillating around zero
                    if step > self.vel_x.abs() {
                        self.vel_x = 0.0;
                    } else {
                        self.vel_x -= step.copysign(self.vel_x);
                    }
                }
            }
        }

        if self.vel_x != 0.0 {
            self.facing = if self.vel_x > 0.0 {
                Facing::Right
            } else {
                Facing::Left
            };
        }

        self.x += self.vel_x * dt;
        if self.x <= 0.0 {
            self.x = 0.0;
            self.vel_x = 0.0;
        } else if self.x >= level.width {
            self.x = level.width;
            self.vel_x = 0.0;
        }
    }

    /// Walk-cycle frame; frame 0 while standing still
    pub fn animation_frame(&self, elapsed_ms: u64, frames: usize, frame_ms: f32) -> usize {
        if self.vel_x == 0.0 || frames == 0 || frame_ms <= 0.0 {
            return 0;
        }
        (elapsed_ms as f32 / frame_ms) as usize % frames
    }
}

/// A container plus its mutable shake timestamp
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContainerRuntime {
    pub spec: ContainerSpec,
    /// Session time of the last delivery
    pub last_catch_ms: Option<u64>,
}

impl ContainerRuntime {
    pub fn new(spec: ContainerSpec) -> Self {
        Self {
            spec,
            last_catch_ms: None,
        }
    }

    /// True for `shake_len_ms` after a delivery
    pub fn is_shaking(&self, now_ms: u64, shake_len_ms: u64) -> bool {
        self.last_catch_ms
            .is_some_and(|t| now_ms <= t.saturating_add(shake_len_ms))
    }

    /// Random sprite jitter in `[-amplitude/2, amplitude/2)` per axis
    pub fn shake_offset<R: RandomSource + ?Sized>(&self, rng: &mut R, amplitude: f32) -> Vec2 {
        let half = amplitude / 2.0;
        Vec2::new(rng.uniform_f32(-half, half), rng.uniform_f32(-half, half))
    }
}

/// Score, lives, clock and difficulty of one session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionState {
    pub phase: GamePhase,
    pub elapsed_ms: u64,
    pub lives: u32,
    /// Successful container deliveries
    pub container_hits: u32,
    /// Set once, at the Playing -> GameOver edge
    pub final_score: Option<u64>,
    pub spawn_mean_interval: f32,
    /// Spawning halts once this is no longer positive
    pub spawn_jitter_window: f32,
    /// Milliseconds until the next spawn attempt
    pub spawn_countdown: f32,
}

impl SessionState {
    pub fn new(level: &LevelConfig) -> Self {
        Self {
            phase: GamePhase::Idle,
            elapsed_ms: 0,
            lives: START_LIVES,
            container_hits: 0,
            final_score: None,
            spawn_mean_interval: level.spawn_mean_interval,
            spawn_jitter_window: level.spawn_jitter_window,
            spawn_countdown: 0.0,
        }
    }

    /// Whole seconds survived plus delivery points
    pub fn score(&self) -> u64 {
        self.final_score.unwrap_or_else(|| {
            self.elapsed_ms / 1000 + self.container_hits as u64 * POINTS_PER_DELIVERY
        })
    }

    /// Reduce the spawn interval and jitter; unclamped
    pub fn decay_difficulty(&mut self, dt: f32) {
        self.spawn_mean_interval -= dt / MEAN_INTERVAL_DECAY_DIVISOR;
        self.spawn_jitter_window -= dt / JITTER_WINDOW_DECAY_DIVISOR;
    }

    /// Take one life; returns true if this loss ended the game
    pub fn lose_life(&mut self) -> bool {
        self.lives = self.lives.saturating_sub(1);
        if self.lives == 0 && self.phase == GamePhase::Playing {
            self.enter_game_over();
            return true;
        }
        false
    }

    fn enter_game_over(&mut self) {
        self.final_score = Some(self.score());
        self.phase = GamePhase::GameOver;
        self.spawn_mean_interval = GAME_OVER_SPAWN_VALUE;
        self.spawn_jitter_window = GAME_OVER_SPAWN_VALUE;
        self.spawn_countdown = 0.0;
    }
}

/// Notable things that happened during a step (for audio/visual feedback)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    Started,
    Caught { object_type: ObjectType },
    Thrown { object_type: ObjectType },
    Delivered { container: usize, object_type: ObjectType },
    Bounced { object_type: ObjectType },
    LifeLost { lives: u32 },
    GameOver { final_score: u64 },
    Reset,
}
