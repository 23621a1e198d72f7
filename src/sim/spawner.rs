//! Stochastic particle spawning
//!
//! A countdown is replenished with `mean + uniform(0, jitter)` each time it
//! runs out. Both knobs decay over the session; once the jitter window is no
//! longer positive, nothing spawns again until reset.

use glam::Vec2;

use super::rng::RandomSource;
use super::state::{Particle, SessionState};
use crate::consts::{MAX_SPAWNS_PER_STEP, MIN_TERMINAL_FRACTION};
use crate::level::LevelConfig;

/// Run the spawn countdown for one step; returns how many particles were created
pub fn run_spawner<R: RandomSource + ?Sized>(
    session: &mut SessionState,
    level: &LevelConfig,
    rng: &mut R,
    particles: &mut Vec<Particle>,
    dt: f32,
) -> usize {
    session.spawn_countdown -= dt;

    let mut spawned = 0;
    while session.spawn_jitter_window > 0.0 && session.spawn_countdown < 0.0 {
        if spawned == MAX_SPAWNS_PER_STEP {
            // A negative mean interval can keep the countdown below zero forever
            log::debug!(
                "spawn cap hit (mean interval {:.1} ms), countdown reset",
                session.spawn_mean_interval
            );
            session.spawn_countdown = 0.0;
            break;
        }

        session.spawn_countdown +=
            session.spawn_mean_interval + rng.uniform_f32(0.0, session.spawn_jitter_window);
        particles.push(spawn_particle(level, rng));
        spawned += 1;
    }

    spawned
}

/// A new falling particle just above the top edge
pub fn spawn_particle<R: RandomSource + ?Sized>(level: &LevelConfig, rng: &mut R) -> Particle {
    let object_type = rng.uniform_usize(0, level.containers.len());
    let x = rng.uniform_f32(level.fall_x1, level.fall_x2);
    let y = level.height + level.object_height(object_type);
    let terminal_speed = rng.uniform_f32(
        MIN_TERMINAL_FRACTION * level.max_fall_speed,
        level.max_fall_speed,
    );
    let phase_seed = rng.next_u32();

    log::trace!("spawn type {object_type} at x={x:.1} terminal={terminal_speed:.3}");
    Particle::falling(Vec2::new(x, y), object_type, terminal_speed, phase_seed)
}
