//! Demo autopilot
//!
//! Plays a session without a human: starts the game, chases the lowest
//! catchable falling item, then carries it under the matching container and
//! throws. Used by the headless runner.

use crate::level::LevelConfig;
use crate::sim::{
    Direction, GamePhase, Particle, ParticleKind, PlayerState, RandomSource, Session, TickInput,
};

/// Input for the next step of `session`
pub fn decide<R: RandomSource>(session: &Session<R>) -> TickInput {
    plan(
        session.phase(),
        session.level(),
        session.player(),
        session.particles(),
    )
}

fn plan(
    phase: GamePhase,
    level: &LevelConfig,
    player: &PlayerState,
    particles: &[Particle],
) -> TickInput {
    match phase {
        GamePhase::Idle => TickInput {
            primary_action: true,
            ..Default::default()
        },
        GamePhase::GameOver => TickInput::default(),
        GamePhase::Playing => match player.held {
            Some(held) => deliver(level, player, held),
            None => TickInput {
                direction: chase(level, player, particles),
                ..Default::default()
            },
        },
    }
}

/// Walk under the nearest container accepting `held`, throw once inside its window
fn deliver(level: &LevelConfig, player: &PlayerState, held: usize) -> TickInput {
    let target = level
        .containers
        .iter()
        .filter(|c| c.accepts == held)
        .min_by(|a, b| {
            let da = (a.window_center_x() - player.x).abs();
            let db = (b.window_center_x() - player.x).abs();
            da.partial_cmp(&db).unwrap_or(std::cmp::Ordering::Equal)
        });

    // Nothing takes it: throw it away to free the hands
    let Some(container) = target else {
        return TickInput {
            primary_action: true,
            ..Default::default()
        };
    };

    let center = container.window_center_x();
    let tolerance = container.window_width().abs() / 4.0;
    if (center - player.x).abs() <= tolerance {
        return TickInput {
            primary_action: true,
            ..Default::default()
        };
    }

    TickInput {
        direction: steer_towards(level, player, center, tolerance),
        ..Default::default()
    }
}

/// Head for the lowest falling item still above the player's feet
fn chase(level: &LevelConfig, player: &PlayerState, particles: &[Particle]) -> Direction {
    let lowest = particles
        .iter()
        .filter(|p| p.kind == ParticleKind::Falling && p.pos.y > player.y)
        .min_by(|a, b| {
            a.pos
                .y
                .partial_cmp(&b.pos.y)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

    match lowest {
        Some(particle) => {
            steer_towards(level, player, particle.pos.x, level.player.size.x / 4.0)
        }
        None => Direction::None,
    }
}

/// Move towards `target_x`, releasing early enough for friction to stop near it
fn steer_towards(
    level: &LevelConfig,
    player: &PlayerState,
    target_x: f32,
    deadzone: f32,
) -> Direction {
    let dx = target_x - player.x;
    if dx.abs() <= deadzone {
        return Direction::None;
    }

    let closing = player.vel_x * dx > 0.0;
    if closing && level.player_accel > 0.0 {
        let stopping = player.vel_x * player.vel_x / (2.0 * level.player_accel);
        if dx.abs() <= stopping {
            return Direction::None;
        }
    }

    if dx > 0.0 {
        Direction::Right
    } else {
        Direction::Left
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec2;

    use super::*;
    use crate::level::SpriteMetrics;
    use crate::loader::parse_pairs;
    use crate::sim::GameEvent;

    fn kitchen() -> LevelConfig {
        let pairs = parse_pairs(include_str!("../levels/kitchen.txt")).expect("valid");
        LevelConfig::from_pairs(&pairs, &SpriteMetrics::default()).expect("valid level")
    }

    fn player_at(level: &LevelConfig, x: f32) -> PlayerState {
        PlayerState {
            x,
            ..PlayerState::new(level)
        }
    }

    #[test]
    fn test_idle_presses_start() {
        let level = kitchen();
        let input = plan(GamePhase::Idle, &level, &PlayerState::new(&level), &[]);
        assert!(input.primary_action);
    }

    #[test]
    fn test_game_over_does_nothing() {
        let level = kitchen();
        let input = plan(GamePhase::GameOver, &level, &PlayerState::new(&level), &[]);
        assert!(!input.primary_action);
        assert_eq!(input.direction, Direction::None);
    }

    #[test]
    fn test_chases_lowest_falling_item() {
        let level = kitchen();
        let player = player_at(&level, 320.0);
        let particles = [
            Particle::falling(Vec2::new(600.0, 400.0), 0, 0.2, 0),
            Particle::falling(Vec2::new(100.0, 200.0), 1, 0.2, 0),
            // Already below the feet, no longer catchable
            Particle::falling(Vec2::new(500.0, 20.0), 2, 0.2, 0),
        ];
        let input = plan(GamePhase::Playing, &level, &player, &particles);
        assert_eq!(input.direction, Direction::Left);
        assert!(!input.primary_action);
    }

    #[test]
    fn test_ignores_thrown_items() {
        let level = kitchen();
        let player = player_at(&level, 320.0);
        let particles = [Particle::thrown(Vec2::new(100.0, 90.0), 0, 0.2, 0)];
        let input = plan(GamePhase::Playing, &level, &player, &particles);
        assert_eq!(input.direction, Direction::None);
    }

    #[test]
    fn test_brakes_before_target() {
        let level = kitchen();
        let mut player = player_at(&level, 300.0);
        player.vel_x = 0.3;
        // Stopping distance at full speed is 45 px
        assert_eq!(steer_towards(&level, &player, 340.0, 5.0), Direction::None);
        assert_eq!(steer_towards(&level, &player, 400.0, 5.0), Direction::Right);
        // Moving away never brakes
        assert_eq!(steer_towards(&level, &player, 260.0, 5.0), Direction::Left);
    }

    #[test]
    fn test_carries_to_matching_container_then_throws() {
        let level = kitchen();
        let center = level.containers[2].window_center_x();

        let mut player = player_at(&level, 100.0);
        player.held = Some(2);
        let walking = plan(GamePhase::Playing, &level, &player, &[]);
        assert_eq!(walking.direction, Direction::Right);
        assert!(!walking.primary_action);

        player.x = center + 5.0;
        let throwing = plan(GamePhase::Playing, &level, &player, &[]);
        assert!(throwing.primary_action);
    }

    #[test]
    fn test_autopilot_delivers_on_bundled_level() {
        let mut session = Session::seeded(kitchen(), 2024);
        let mut delivered = 0;
        for _ in 0..(60_000 / crate::consts::NOMINAL_TICK_MS) {
            let input = decide(&session);
            session.tick(&input, crate::consts::NOMINAL_TICK_MS);
            delivered += session
                .drain_events()
                .iter()
                .filter(|e| matches!(e, GameEvent::Delivered { .. }))
                .count();
        }
        assert!(delivered > 0);
        assert_eq!(session.state().container_hits as usize, delivered);
    }
}
