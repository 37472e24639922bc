//! Errors surfaced to callers.
//!
//! Only configuration and level data can fail. Numeric edge cases inside the
//! physics pass (near-zero mass sums, zero push directions) are guarded where
//! they happen and never reach this module.

use thiserror::Error;

/// Errors produced while reading a persisted [`PhysicsConfig`](crate::domain::config::PhysicsConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid config value `{field}`: {value}")]
    Invalid { field: &'static str, value: f32 },
}

/// Errors produced while turning a level description into bodies.
#[derive(Debug, Error)]
pub enum LevelError {
    #[error("level parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid {section} entry {index}: {reason}")]
    InvalidBody {
        section: &'static str,
        index: usize,
        reason: String,
    },
}
