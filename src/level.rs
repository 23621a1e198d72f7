//! Level configuration
//!
//! Immutable per-level constants consumed read-only by the simulation.
//! Physics values are in pixels and milliseconds; Y grows upward.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::error::LevelError;
use crate::sim::ObjectType;

/// Rectangle relative to a container's position in which thrown items score
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct AcceptanceWindow {
    /// Lower-left corner offset
    pub lo: Vec2,
    /// Upper-right corner offset (the Y component is not used for acceptance)
    pub hi: Vec2,
}

/// A sorting bin
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContainerSpec {
    /// Object type this container accepts
    pub accepts: ObjectType,
    /// Sprite position (lower-left)
    pub pos: Vec2,
    pub window: AcceptanceWindow,
}

impl ContainerSpec {
    /// Horizontal centre of the acceptance window, in level coordinates
    pub fn window_center_x(&self) -> f32 {
        self.pos.x + (self.window.lo.x + self.window.hi.x) / 2.0
    }

    /// Horizontal extent of the acceptance window
    pub fn window_width(&self) -> f32 {
        self.window.hi.x - self.window.lo.x
    }
}

/// Player sprite and animation parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerSprite {
    /// Sprite size; width drives the catch band, height its top
    pub size: Vec2,
    /// Number of walk animation frames
    pub frames: usize,
    /// Milliseconds per animation frame
    pub frame_ms: f32,
}

impl Default for PlayerSprite {
    fn default() -> Self {
        Self {
            size: DEFAULT_PLAYER_SIZE,
            frames: 1,
            frame_ms: 80.0,
        }
    }
}

/// File name prefixes of the level's textures
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetNames {
    pub background: String,
    pub containers: String,
    pub objects: String,
    pub player: String,
}

impl Default for AssetNames {
    fn default() -> Self {
        Self {
            background: "back".into(),
            containers: "cnts".into(),
            objects: "objs".into(),
            player: "plyr".into(),
        }
    }
}

impl AssetNames {
    pub fn background_file(&self) -> String {
        format!("{}.png", self.background)
    }

    pub fn container_file(&self, index: usize) -> String {
        format!("{}{}.png", self.containers, index)
    }

    pub fn object_file(&self, object_type: ObjectType) -> String {
        format!("{}{}.png", self.objects, object_type)
    }

    pub fn player_file(&self, frame: usize) -> String {
        format!("{}{}.png", self.player, frame)
    }
}

/// Sprite dimensions reported by the asset layer
///
/// Texture decoding lives outside the simulation, but catch and miss rules
/// depend on sprite sizes, so they are handed in when a level is built.
#[derive(Debug, Clone, PartialEq)]
pub struct SpriteMetrics {
    pub player: Vec2,
    /// Per-type object sizes; types past the end use `fallback_object`
    pub objects: Vec<Vec2>,
    pub fallback_object: Vec2,
}

impl Default for SpriteMetrics {
    fn default() -> Self {
        Self::uniform(DEFAULT_PLAYER_SIZE, DEFAULT_OBJECT_SIZE)
    }
}

impl SpriteMetrics {
    /// Every object type shares one size
    pub fn uniform(player: Vec2, object: Vec2) -> Self {
        Self {
            player,
            objects: Vec::new(),
            fallback_object: object,
        }
    }

    pub fn object(&self, object_type: ObjectType) -> Vec2 {
        self.objects
            .get(object_type)
            .copied()
            .unwrap_or(self.fallback_object)
    }
}

pub const DEFAULT_PLAYER_SIZE: Vec2 = Vec2::new(48.0, 64.0);
pub const DEFAULT_OBJECT_SIZE: Vec2 = Vec2::new(32.0, 32.0);
const DEFAULT_CONTAINERS: usize = 3;

/// Complete per-level configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LevelConfig {
    pub title: String,

    // === Physics (pixels per ms) ===
    pub gravity: f32,
    pub max_fall_speed: f32,
    /// Particles bounce off the baseline only while their terminal speed exceeds this
    pub min_bounce_speed: f32,
    pub max_player_speed: f32,
    pub player_accel: f32,

    // === Geometry ===
    pub width: f32,
    pub height: f32,
    /// Fixed Y of the player's feet
    pub player_y: f32,
    pub baseline: f32,
    /// Thrown items feel gravity only above this line
    pub topline: f32,
    /// Spawn X range `[x1, x2)`
    pub fall_x1: f32,
    pub fall_x2: f32,

    // === Difficulty ===
    /// Initial mean spawn interval (ms)
    pub spawn_mean_interval: f32,
    /// Initial spawn jitter window (ms)
    pub spawn_jitter_window: f32,

    // === Presentation ===
    pub shake_len_ms: u64,
    pub shake_amplitude: f32,
    /// HUD text colour (RGB, 0-1)
    pub color: [f32; 3],
    pub assets: AssetNames,

    // === Objects ===
    pub containers: Vec<ContainerSpec>,
    pub player: PlayerSprite,
    /// Sprite size per object type; its length is the number of types
    pub object_sizes: Vec<Vec2>,
}

impl Default for LevelConfig {
    fn default() -> Self {
        Self {
            title: "title".into(),

            gravity: 0.001,
            max_fall_speed: 0.2,
            min_bounce_speed: 0.2,
            max_player_speed: 0.3,
            player_accel: 0.001,

            width: 640.0,
            height: 480.0,
            player_y: 40.0,
            baseline: 10.0,
            topline: 300.0,
            fall_x1: 20.0,
            fall_x2: 600.0,

            spawn_mean_interval: 3000.0,
            spawn_jitter_window: 2000.0,

            shake_len_ms: 100,
            shake_amplitude: 10.0,
            color: [1.0, 0.0, 0.0],
            assets: AssetNames::default(),

            containers: (0..DEFAULT_CONTAINERS)
                .map(|i| ContainerSpec {
                    accepts: i,
                    pos: Vec2::ZERO,
                    window: AcceptanceWindow::default(),
                })
                .collect(),
            player: PlayerSprite::default(),
            object_sizes: vec![DEFAULT_OBJECT_SIZE; DEFAULT_CONTAINERS],
        }
    }
}

impl LevelConfig {
    /// Number of distinct object types
    pub fn object_types(&self) -> usize {
        self.object_sizes.len()
    }

    /// Sprite height of an object type (0 for unknown types)
    pub fn object_height(&self, object_type: ObjectType) -> f32 {
        self.object_sizes
            .get(object_type)
            .map(|size| size.y)
            .unwrap_or(0.0)
    }

    /// Parse a level from JSON and validate it
    pub fn from_json(text: &str) -> Result<Self, LevelError> {
        let level: Self = serde_json::from_str(text)?;
        level.validate()?;
        Ok(level)
    }

    /// Check the preconditions the simulation relies on
    pub fn validate(&self) -> Result<(), LevelError> {
        self.check_finite()?;
        if self.containers.is_empty() {
            return Err(LevelError::NoContainers);
        }
        if self.width <= 0.0 || self.height <= 0.0 {
            return Err(LevelError::NonPositiveDimensions {
                width: self.width,
                height: self.height,
            });
        }
        if self.fall_x2 <= self.fall_x1 {
            return Err(LevelError::EmptyFallWindow {
                x1: self.fall_x1,
                x2: self.fall_x2,
            });
        }
        // Spawned types range over the container count
        if self.object_types() < self.containers.len() {
            return Err(LevelError::MissingObjectSprite {
                object_type: self.object_types(),
            });
        }
        for (index, container) in self.containers.iter().enumerate() {
            if container.accepts >= self.object_types() {
                return Err(LevelError::AcceptedTypeOutOfRange {
                    container: index,
                    object_type: container.accepts,
                    types: self.object_types(),
                });
            }
        }
        if self.player.frames == 0 {
            return Err(LevelError::NoPlayerFrames);
        }
        if self.player.frame_ms <= 0.0 {
            return Err(LevelError::NonPositiveFrameDuration(self.player.frame_ms));
        }

        let constants = [
            ("gravity", self.gravity),
            ("max_fall_speed", self.max_fall_speed),
            ("min_bounce_speed", self.min_bounce_speed),
            ("max_player_speed", self.max_player_speed),
            ("player_accel", self.player_accel),
            ("shake_amplitude", self.shake_amplitude),
        ];
        for (name, value) in constants {
            if value < 0.0 {
                return Err(LevelError::NegativeConstant { name, value });
            }
        }

        Ok(())
    }

    /// `inf` and `NaN` parse as floats but slip past every ordering check
    fn check_finite(&self) -> Result<(), LevelError> {
        let scalars = [
            ("gravity", self.gravity),
            ("max_fall_speed", self.max_fall_speed),
            ("min_bounce_speed", self.min_bounce_speed),
            ("max_player_speed", self.max_player_speed),
            ("player_accel", self.player_accel),
            ("width", self.width),
            ("height", self.height),
            ("player_y", self.player_y),
            ("baseline", self.baseline),
            ("topline", self.topline),
            ("fall_x1", self.fall_x1),
            ("fall_x2", self.fall_x2),
            ("spawn_mean_interval", self.spawn_mean_interval),
            ("spawn_jitter_window", self.spawn_jitter_window),
            ("shake_amplitude", self.shake_amplitude),
            ("player.frame_ms", self.player.frame_ms),
        ];
        if let Some((name, _)) = scalars.iter().find(|(_, value)| !value.is_finite()) {
            return Err(LevelError::NonFinite {
                name: (*name).to_string(),
            });
        }

        for (index, container) in self.containers.iter().enumerate() {
            let corners = [
                ("pos", container.pos),
                ("window.lo", container.window.lo),
                ("window.hi", container.window.hi),
            ];
            if let Some((name, _)) = corners.iter().find(|(_, v)| !v.is_finite()) {
                return Err(LevelError::NonFinite {
                    name: format!("containers[{index}].{name}"),
                });
            }
        }
        for (object_type, size) in self.object_sizes.iter().enumerate() {
            if !size.is_finite() {
                return Err(LevelError::NonFinite {
                    name: format!("object_sizes[{object_type}]"),
                });
            }
        }
        if !self.player.size.is_finite() {
            return Err(LevelError::NonFinite {
                name: "player.size".into(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_level_is_valid() {
        let level = LevelConfig::default();
        assert!(level.validate().is_ok());
        assert_eq!(level.object_types(), 3);
        assert_eq!(level.containers[2].accepts, 2);
    }

    #[test]
    fn test_validate_rejects_empty_fall_window() {
        let level = LevelConfig {
            fall_x1: 300.0,
            fall_x2: 300.0,
            ..Default::default()
        };
        assert!(matches!(
            level.validate(),
            Err(LevelError::EmptyFallWindow { .. })
        ));
    }

    #[test]
    fn test_validate_rejects_out_of_range_accepts() {
        let mut level = LevelConfig::default();
        level.containers[1].accepts = 7;
        assert!(matches!(
            level.validate(),
            Err(LevelError::AcceptedTypeOutOfRange { container: 1, .. })
        ));
    }

    #[test]
    fn test_validate_rejects_negative_gravity() {
        let level = LevelConfig {
            gravity: -0.5,
            ..Default::default()
        };
        assert!(matches!(
            level.validate(),
            Err(LevelError::NegativeConstant { name: "gravity", .. })
        ));
    }

    #[test]
    fn test_validate_rejects_non_finite_values() {
        let level = LevelConfig {
            gravity: f32::NAN,
            ..Default::default()
        };
        assert!(matches!(
            level.validate(),
            Err(LevelError::NonFinite { ref name }) if name == "gravity"
        ));

        let level = LevelConfig {
            fall_x2: f32::INFINITY,
            ..Default::default()
        };
        assert!(matches!(
            level.validate(),
            Err(LevelError::NonFinite { ref name }) if name == "fall_x2"
        ));

        let mut level = LevelConfig::default();
        level.containers[1].window.hi.x = f32::NEG_INFINITY;
        assert!(matches!(
            level.validate(),
            Err(LevelError::NonFinite { ref name }) if name == "containers[1].window.hi"
        ));
    }

    #[test]
    fn test_json_partial_uses_defaults() {
        let level = LevelConfig::from_json(r#"{"title": "Harbour", "gravity": 0.002}"#)
            .expect("partial json should load");
        assert_eq!(level.title, "Harbour");
        assert_eq!(level.gravity, 0.002);
        assert_eq!(level.width, 640.0);
    }

    #[test]
    fn test_asset_file_names() {
        let assets = AssetNames::default();
        assert_eq!(assets.object_file(2), "objs2.png");
        assert_eq!(assets.player_file(0), "plyr0.png");
        assert_eq!(assets.background_file(), "back.png");
    }

    #[test]
    fn test_sprite_metrics_fallback() {
        let mut sprites = SpriteMetrics::uniform(Vec2::new(10.0, 20.0), Vec2::new(5.0, 6.0));
        sprites.objects.push(Vec2::new(1.0, 2.0));
        assert_eq!(sprites.object(0), Vec2::new(1.0, 2.0));
        assert_eq!(sprites.object(4), Vec2::new(5.0, 6.0));
    }
}
