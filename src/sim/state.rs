//! Game state and core simulation types

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::Rect;
use crate::config::WorldConfig;
use crate::consts::*;
use crate::sprite::Appearance;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Round ended; the frame is frozen until a restart
    GameOver,
}

/// Difficulty mode. Selects the pipe gap height; changeable only while the
/// round is over, and survives restarts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GameMode {
    #[default]
    Normal,
    Easy,
}

impl GameMode {
    pub fn toggled(self) -> Self {
        match self {
            GameMode::Normal => GameMode::Easy,
            GameMode::Easy => GameMode::Normal,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameMode::Normal => "Normal",
            GameMode::Easy => "Easy",
        }
    }
}

/// Terminal clamp event from one integration step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClampEvent {
    Ground,
    Ceiling,
}

/// The player-controlled body. `x` and size are fixed at construction; only
/// `y` and `vel_y` change over a round. Created once, reused across rounds.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Bird {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub vel_y: f32,
    pub appearance: Appearance,
}

impl Bird {
    pub fn new(world: &WorldConfig) -> Self {
        Self {
            x: BIRD_X,
            y: world.height / 2.0,
            width: BIRD_WIDTH,
            height: BIRD_HEIGHT,
            vel_y: 0.0,
            appearance: world.bird_appearance,
        }
    }

    /// One gravity step: accelerate, move, then clamp to the world. Hitting
    /// either bound zeroes the velocity and reports which edge was hit;
    /// a clamp ends the round.
    pub fn integrate(&mut self, world_height: f32) -> Option<ClampEvent> {
        self.vel_y += GRAVITY;
        self.y += self.vel_y;

        let floor = world_height - self.height;
        if self.y > floor {
            self.y = floor;
            self.vel_y = 0.0;
            return Some(ClampEvent::Ground);
        }
        if self.y < 0.0 {
            self.y = 0.0;
            self.vel_y = 0.0;
            return Some(ClampEvent::Ceiling);
        }
        None
    }

    /// Instantaneous flap. Overwrites the vertical speed; two flaps in
    /// quick succession don't stack.
    pub fn jump(&mut self) {
        self.vel_y = JUMP_IMPULSE;
    }

    /// Back to mid-height for a new round
    pub fn reset(&mut self, world_height: f32) {
        self.y = world_height / 2.0;
        self.vel_y = 0.0;
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}

/// A single pipe segment. `y` and `height` are fixed at spawn; `x` scrolls
/// left every frame until the owner culls it past the left edge.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Obstacle {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// Write-once: set when the bird clears this pipe and scores
    pub passed: bool,
    pub appearance: Appearance,
}

impl Obstacle {
    /// Scroll left. No bounds checking here; culling is the owner's job.
    pub fn update(&mut self, speed: f32) {
        self.x -= speed;
    }

    /// Fully past the left edge
    pub fn is_offscreen(&self) -> bool {
        self.x + self.width <= 0.0
    }

    /// Top pipes sit flush with the ceiling; only they carry the pair's score
    pub fn is_top(&self) -> bool {
        self.y == 0.0
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}

/// Complete game state for one session, owned by the front-end and advanced
/// one frame at a time by [`super::tick`]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Session seed; pipe placement derives from it
    pub seed: u64,
    /// Rounds started this session (bumped on every reset)
    pub round: u64,
    pub world: WorldConfig,
    /// Frames elapsed this round; monotonic while Playing
    pub frame: u64,
    pub score: u32,
    /// Best score this session. Updated exactly once per round, at the
    /// transition into GameOver.
    pub high_score: u32,
    pub phase: GamePhase,
    pub mode: GameMode,
    pub bird: Bird,
    /// Live pipes in spawn order, each pair's top before its bottom
    pub obstacles: Vec<Obstacle>,
}

impl GameState {
    pub fn new(seed: u64, world: WorldConfig) -> Self {
        Self {
            seed,
            round: 0,
            world,
            frame: 0,
            score: 0,
            high_score: 0,
            phase: GamePhase::Playing,
            mode: GameMode::default(),
            bird: Bird::new(&world),
            obstacles: Vec::new(),
        }
    }

    /// RNG for the pair spawned on the current frame. Deriving from
    /// (seed, round, frame) keeps every session reproducible from its seed
    /// without serializing generator internals, while rounds still differ
    /// from each other.
    pub(crate) fn spawn_rng(&self) -> Pcg32 {
        let stream = self
            .round
            .wrapping_mul(0x9E37_79B9_7F4A_7C15)
            .wrapping_add(self.frame);
        Pcg32::seed_from_u64(self.seed ^ stream)
    }

    /// GameOver -> Playing. High score, mode, and seed survive.
    pub fn reset(&mut self) {
        self.bird.reset(self.world.height);
        self.obstacles.clear();
        self.frame = 0;
        self.score = 0;
        self.round += 1;
        self.phase = GamePhase::Playing;
    }

    /// Playing -> GameOver: record the round's score and freeze the frame
    pub(crate) fn end_round(&mut self) {
        self.high_score = self.high_score.max(self.score);
        self.phase = GamePhase::GameOver;
    }

    /// Flip Normal/Easy. Only honored between rounds; already-spawned pipes
    /// are never resized.
    pub fn toggle_mode(&mut self) -> bool {
        if self.phase == GamePhase::GameOver {
            self.mode = self.mode.toggled();
            true
        } else {
            false
        }
    }
}
