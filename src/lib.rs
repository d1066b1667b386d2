//! Gapwing - a side-scrolling gap-dodging arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, spawning, collisions, game state)
//! - `renderer`: WebGPU rendering pipeline
//! - `sprite`: Image handles with placeholder fallback
//! - `config`: World geometry validated once at startup

pub mod config;
pub mod renderer;
pub mod sim;
pub mod sprite;

pub use config::{ConfigError, WorldConfig};

/// Game configuration constants
pub mod consts {
    /// World dimensions in pixels (portrait, origin top-left, y grows down)
    pub const WORLD_WIDTH: f32 = 320.0;
    pub const WORLD_HEIGHT: f32 = 480.0;

    /// Bird defaults - x never changes after construction
    pub const BIRD_X: f32 = 50.0;
    pub const BIRD_WIDTH: f32 = 20.0;
    pub const BIRD_HEIGHT: f32 = 20.0;

    /// Gravity (velocity units per frame, applied every frame)
    pub const GRAVITY: f32 = 0.4;
    /// Velocity set by a flap. Negative is up; overwrites, never adds.
    pub const JUMP_IMPULSE: f32 = -8.0;

    /// Pipe defaults
    pub const PIPE_WIDTH: f32 = 55.0;
    /// Shortest pipe segment the generator may produce
    pub const MIN_SEGMENT_HEIGHT: f32 = 30.0;
    /// Gap between a pipe pair, per mode
    pub const GAP_HEIGHT_NORMAL: f32 = 130.0;
    pub const GAP_HEIGHT_EASY: f32 = 180.0;

    /// Horizontal scroll speed (pixels per frame)
    pub const SCROLL_SPEED: f32 = 2.0;
    /// Frames between pipe pair spawns
    pub const SPAWN_INTERVAL: u64 = 90;
}
