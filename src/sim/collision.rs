//! Catch, acceptance and miss tests
//!
//! Pure geometry on positions and sprite sizes; all mutation happens in the
//! particle pass of `tick`.

use glam::Vec2;

use super::state::{ContainerRuntime, Particle, PlayerState};

/// Top of the catch band: items below this height are level with the player
#[inline]
pub fn in_catch_band(pos: Vec2, player: &PlayerState, player_size: Vec2) -> bool {
    pos.y < player.y + player_size.y
}

/// Whether an item in the catch band is within the player's reach
#[inline]
pub fn within_reach(pos: Vec2, player: &PlayerState, player_size: Vec2) -> bool {
    pos.y > player.y && (pos.x - player.x).abs() < player_size.x / 2.0
}

/// Whether a container takes a thrown particle at its current position
///
/// Only the lower Y edge of the acceptance window is checked; the upper edge
/// is carried in the level data but never enforced.
pub fn container_accepts(container: &ContainerRuntime, particle: &Particle) -> bool {
    let spec = &container.spec;
    let lo = spec.pos + spec.window.lo;
    let hi_x = spec.pos.x + spec.window.hi.x;

    particle.object_type == spec.accepts
        && particle.pos.x >= lo.x
        && particle.pos.x <= hi_x
        && particle.pos.y > lo.y
}

/// Index of the first container accepting the particle
pub fn find_accepting_container(
    containers: &[ContainerRuntime],
    particle: &Particle,
) -> Option<usize> {
    containers
        .iter()
        .position(|container| container_accepts(container, particle))
}

/// Fully below the visible area
#[inline]
pub fn below_screen(pos: Vec2, object_height: f32) -> bool {
    pos.y < -object_height
}
