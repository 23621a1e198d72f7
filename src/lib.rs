//! Sortfall - a catch-and-sort arcade game
//!
//! Core modules:
//! - `sim`: Per-frame simulation (player, spawner, particle physics, session state)
//! - `level`: Level configuration and validation
//! - `loader`: Flat `key=value` level files and the game manifest
//! - `score`: End-of-game score submission encoding
//! - `autopilot`: Simple AI player used by the headless runner

pub mod autopilot;
pub mod error;
pub mod level;
pub mod loader;
pub mod score;
pub mod sim;

pub use error::LevelError;
pub use level::{AcceptanceWindow, ContainerSpec, LevelConfig, PlayerSprite, SpriteMetrics};
pub use loader::{GameManifest, load_level, parse_pairs};
pub use sim::{Direction, GameEvent, GamePhase, Session, TickInput};

/// Game constants shared by the simulation
pub mod consts {
    /// Lives at the start of every session
    pub const START_LIVES: u32 = 3;

    /// Points awarded per item delivered to a matching container
    pub const POINTS_PER_DELIVERY: u64 = 100;

    /// Lower bound of a spawned particle's terminal speed, as a fraction of max fall speed
    pub const MIN_TERMINAL_FRACTION: f32 = 0.2;

    /// Spawn mean interval is reduced by dt / this value each step
    pub const MEAN_INTERVAL_DECAY_DIVISOR: f32 = 100.0;
    /// Spawn jitter window is reduced by dt / this value each step
    pub const JITTER_WINDOW_DECAY_DIVISOR: f32 = 1000.0;

    /// Value both difficulty knobs are slammed to on game over (slow-motion effect)
    pub const GAME_OVER_SPAWN_VALUE: f32 = 100.0;

    /// Upper bound on particles created in a single step
    pub const MAX_SPAWNS_PER_STEP: usize = 16;

    /// Nominal tick used by the headless runner (ms)
    pub const NOMINAL_TICK_MS: u32 = 16;
}
