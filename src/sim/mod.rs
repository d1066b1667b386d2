//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One step per frame, frame-counted cadence (no wall-clock time)
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod collision;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{Rect, aabb_overlap};
pub use spawn::spawn_pair;
pub use state::{Bird, ClampEvent, GameMode, GamePhase, GameState, Obstacle};
pub use tick::{TickInput, tick};
