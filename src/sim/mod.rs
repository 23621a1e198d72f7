//! Per-frame simulation
//!
//! All gameplay logic lives here:
//! - Variable timestep in milliseconds, driven by an external tick source
//! - Random numbers only through an injected `RandomSource`
//! - No rendering, windowing or file I/O

pub mod collision;
pub mod rng;
pub mod spawner;
pub mod state;
pub mod tick;

pub use collision::{below_screen, container_accepts, find_accepting_container, in_catch_band, within_reach};
pub use rng::{PcgSource, RandomSource};
pub use spawner::{run_spawner, spawn_particle};
pub use state::{
    ContainerRuntime, Direction, Facing, GameEvent, GamePhase, ObjectType, Particle, ParticleKind,
    PlayerState, SessionState,
};
pub use tick::{Session, TickInput};
