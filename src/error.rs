//! Errors raised while loading and validating level data
//!
//! The simulation itself never fails; everything fallible happens before a
//! session is constructed.

use std::path::PathBuf;

use thiserror::Error;

use crate::sim::ObjectType;

/// Failure to read, parse or validate a level
#[derive(Debug, Error)]
pub enum LevelError {
    #[error("cannot read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("line {line}: expected `key=value`, got {content:?}")]
    MalformedLine { line: usize, content: String },

    #[error("invalid number for `{key}`: {value:?}")]
    InvalidNumber { key: String, value: String },

    #[error("invalid colour {value:?} (expected #RRGGBB)")]
    InvalidColor { value: String },

    #[error("invalid level JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("level defines no containers")]
    NoContainers,

    #[error("level dimensions must be positive, got {width}x{height}")]
    NonPositiveDimensions { width: f32, height: f32 },

    #[error("fall window [{x1}, {x2}) is empty")]
    EmptyFallWindow { x1: f32, x2: f32 },

    #[error("no sprite size for object type {object_type}")]
    MissingObjectSprite { object_type: ObjectType },

    #[error("container {container} accepts type {object_type}, but only {types} types exist")]
    AcceptedTypeOutOfRange {
        container: usize,
        object_type: ObjectType,
        types: usize,
    },

    #[error("player needs at least one animation frame")]
    NoPlayerFrames,

    #[error("player frame duration must be positive, got {0}")]
    NonPositiveFrameDuration(f32),

    #[error("`{name}` must be a finite number")]
    NonFinite { name: String },

    #[error("`{name}` must not be negative, got {value}")]
    NegativeConstant { name: &'static str, value: f32 },
}
