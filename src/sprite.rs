//! Sprite handles with placeholder fallback
//!
//! Image loading belongs entirely to the host (the browser decodes images and
//! fires load/error callbacks); the game only tracks an explicit load state
//! that the draw path polls every frame. A sprite that hasn't arrived - or
//! never will - degrades to a flat placeholder fill, and the simulation never
//! blocks on or even observes image readiness.

use serde::{Deserialize, Serialize};

/// Index into a [`SpriteTable`]
pub type SpriteId = u32;

/// Placeholder fills matching the reference art
pub const PIPE_GREEN: [f32; 4] = [0.0, 0.5, 0.0, 1.0];
pub const BIRD_YELLOW: [f32; 4] = [0.94, 0.86, 0.31, 1.0];

/// How a body is drawn: a flat fill, or a sprite image with a placeholder
/// fallback. Selected by configuration, not by subtyping.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Appearance {
    SolidColor([f32; 4]),
    Sprite(SpriteId),
}

/// Load state polled at draw time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadState {
    #[default]
    NotLoaded,
    Loaded,
    Failed,
}

/// A drawable image slot. The host flips `state` from its load/error
/// callbacks; until (or unless) the image arrives, draws use `placeholder`.
#[derive(Debug, Clone)]
pub struct Sprite {
    pub state: LoadState,
    pub placeholder: [f32; 4],
}

impl Sprite {
    pub fn new(placeholder: [f32; 4]) -> Self {
        Self {
            state: LoadState::NotLoaded,
            placeholder,
        }
    }

    pub fn mark_loaded(&mut self) {
        self.state = LoadState::Loaded;
    }

    /// Record a failed load. Non-fatal: the placeholder keeps drawing.
    pub fn mark_failed(&mut self, src: &str) {
        if self.state != LoadState::Failed {
            log::warn!("failed to load image {src}, drawing placeholder");
        }
        self.state = LoadState::Failed;
    }
}

/// Registry of sprite slots, owned by the front-end alongside the renderer
#[derive(Debug, Default)]
pub struct SpriteTable {
    sprites: Vec<Sprite>,
}

impl SpriteTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, sprite: Sprite) -> SpriteId {
        self.sprites.push(sprite);
        (self.sprites.len() - 1) as SpriteId
    }

    pub fn get(&self, id: SpriteId) -> Option<&Sprite> {
        self.sprites.get(id as usize)
    }

    pub fn get_mut(&mut self, id: SpriteId) -> Option<&mut Sprite> {
        self.sprites.get_mut(id as usize)
    }

    /// Fill color for an appearance this frame. The quad pipeline is
    /// untextured, so a sprite contributes its flat fill; a dangling id
    /// falls back to the pipe green rather than poisoning the frame.
    pub fn resolve(&self, appearance: Appearance) -> [f32; 4] {
        match appearance {
            Appearance::SolidColor(color) => color,
            Appearance::Sprite(id) => self
                .get(id)
                .map(|sprite| sprite.placeholder)
                .unwrap_or(PIPE_GREEN),
        }
    }
}
