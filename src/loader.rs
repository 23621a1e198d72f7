//! Level files and the game manifest
//!
//! Both use a flat `key=value` format: one pair per line, blank lines and
//! `#` comments skipped, the first occurrence of a key wins. Every level key
//! is optional and falls back to the stock level value.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use glam::Vec2;

use crate::error::LevelError;
use crate::level::{
    AcceptanceWindow, AssetNames, ContainerSpec, LevelConfig, PlayerSprite, SpriteMetrics,
};

/// Parsed `key=value` pairs
pub type Pairs = HashMap<String, String>;

/// Manifest file name inside the data directory
pub const MANIFEST_FILE: &str = "game.txt";

/// Split a `key=value` file into pairs
pub fn parse_pairs(text: &str) -> Result<Pairs, LevelError> {
    let mut pairs = Pairs::new();

    for (index, line) in text.lines().enumerate() {
        let line = line.trim_end_matches('\r');
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        match line.find('=') {
            Some(eq) if eq > 0 => {
                pairs
                    .entry(line[..eq].to_string())
                    .or_insert_with(|| line[eq + 1..].to_string());
            }
            _ => {
                return Err(LevelError::MalformedLine {
                    line: index + 1,
                    content: line.to_string(),
                });
            }
        }
    }

    Ok(pairs)
}

/// Typed lookups with defaults
struct Lookup<'a> {
    pairs: &'a Pairs,
}

impl Lookup<'_> {
    fn text(&self, key: &str, default: &str) -> String {
        self.pairs
            .get(key)
            .cloned()
            .unwrap_or_else(|| default.to_string())
    }

    fn parse<T: FromStr>(&self, key: &str, default: T) -> Result<T, LevelError> {
        match self.pairs.get(key) {
            None => Ok(default),
            Some(value) => value.trim().parse().map_err(|_| LevelError::InvalidNumber {
                key: key.to_string(),
                value: value.clone(),
            }),
        }
    }

    fn color(&self, key: &str, default: [f32; 3]) -> Result<[f32; 3], LevelError> {
        match self.pairs.get(key) {
            None => Ok(default),
            Some(value) => parse_color(value),
        }
    }
}

/// `#RRGGBB` (leading `#` optional) to RGB in 0-1
pub fn parse_color(value: &str) -> Result<[f32; 3], LevelError> {
    let hex = value.trim().trim_start_matches('#');
    let rgb = u32::from_str_radix(hex, 16).map_err(|_| LevelError::InvalidColor {
        value: value.to_string(),
    })?;
    let channel = |shift: u32| ((rgb >> shift) & 0xFF) as f32 / 255.0;
    Ok([channel(16), channel(8), channel(0)])
}

impl LevelConfig {
    /// Build and validate a level from parsed pairs
    pub fn from_pairs(pairs: &Pairs, sprites: &SpriteMetrics) -> Result<Self, LevelError> {
        let stock = LevelConfig::default();
        let stock_assets = AssetNames::default();
        let keys = Lookup { pairs };

        let count: usize = keys.parse("cnts", stock.containers.len())?;
        let mut containers = Vec::with_capacity(count);
        for i in 0..count {
            let key = |suffix: &str| format!("cnt{i}{suffix}");
            containers.push(ContainerSpec {
                accepts: keys.parse(&key("t"), i)?,
                pos: Vec2::new(keys.parse(&key("x"), 0.0)?, keys.parse(&key("y"), 0.0)?),
                window: AcceptanceWindow {
                    lo: Vec2::new(keys.parse(&key("ax1"), 0.0)?, keys.parse(&key("ay1"), 0.0)?),
                    hi: Vec2::new(keys.parse(&key("ax2"), 0.0)?, keys.parse(&key("ay2"), 0.0)?),
                },
            });
        }

        let level = LevelConfig {
            title: keys.text("title", &stock.title),

            gravity: keys.parse("grav", stock.gravity)?,
            max_fall_speed: keys.parse("maxFallSpeed", stock.max_fall_speed)?,
            min_bounce_speed: keys.parse("minSpeed", stock.min_bounce_speed)?,
            max_player_speed: keys.parse("maxPlayerSpeed", stock.max_player_speed)?,
            player_accel: keys.parse("playerAccel", stock.player_accel)?,

            width: keys.parse("w", stock.width)?,
            height: keys.parse("h", stock.height)?,
            player_y: keys.parse("y", stock.player_y)?,
            baseline: keys.parse("baseline", stock.baseline)?,
            topline: keys.parse("topline", stock.topline)?,
            fall_x1: keys.parse("fallx1", stock.fall_x1)?,
            fall_x2: keys.parse("fallx2", stock.fall_x2)?,

            spawn_mean_interval: keys.parse("mms", stock.spawn_mean_interval)?,
            spawn_jitter_window: keys.parse("mmd", stock.spawn_jitter_window)?,

            shake_len_ms: keys.parse("shakeLen", stock.shake_len_ms)?,
            shake_amplitude: keys.parse("shake", stock.shake_amplitude)?,
            color: keys.color("color", stock.color)?,
            assets: AssetNames {
                background: keys.text("back", &stock_assets.background),
                containers: keys.text("cntsPrefix", &stock_assets.containers),
                objects: keys.text("objsPrefix", &stock_assets.objects),
                player: keys.text("plyrPrefix", &stock_assets.player),
            },

            containers,
            player: PlayerSprite {
                size: sprites.player,
                frames: keys.parse("plyrs", stock.player.frames)?,
                frame_ms: keys.parse("plyrFpms", stock.player.frame_ms)?,
            },
            object_sizes: (0..count).map(|t| sprites.object(t)).collect(),
        };

        level.validate()?;
        Ok(level)
    }
}

/// Read, parse and validate a level file
pub fn load_level(path: &Path, sprites: &SpriteMetrics) -> Result<LevelConfig, LevelError> {
    let text = fs::read_to_string(path).map_err(|source| LevelError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let level = LevelConfig::from_pairs(&parse_pairs(&text)?, sprites)?;
    log::info!("Loaded level {:?} from {}", level.title, path.display());
    Ok(level)
}

/// Ordered list of level files
#[derive(Debug, Clone, PartialEq)]
pub struct GameManifest {
    /// Level paths, already joined onto the data directory
    pub levels: Vec<PathBuf>,
}

impl GameManifest {
    /// Collect `level0`, `level1`, ... up to the first missing index
    pub fn parse(data_dir: &Path, text: &str) -> Result<Self, LevelError> {
        let pairs = parse_pairs(text)?;
        let levels = (0..)
            .map_while(|i| pairs.get(&format!("level{i}")))
            .map(|file| data_dir.join(file))
            .collect();
        Ok(Self { levels })
    }

    /// Read `game.txt` from a data directory
    pub fn load(data_dir: &Path) -> Result<Self, LevelError> {
        let path = data_dir.join(MANIFEST_FILE);
        let text = fs::read_to_string(&path).map_err(|source| LevelError::Io {
            path: path.clone(),
            source,
        })?;
        let manifest = Self::parse(data_dir, &text)?;
        log::info!(
            "Manifest {} lists {} level(s)",
            path.display(),
            manifest.levels.len()
        );
        Ok(manifest)
    }
}
