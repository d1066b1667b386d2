//! Procedural pipe pair generation

use rand::Rng;

use super::state::{GameState, Obstacle};

/// Append one top/bottom pair at the right edge.
///
/// The gap center is drawn uniformly from the band that keeps both segments
/// at least `min_segment_height` tall. The gap height is re-read from the
/// active mode on every call, so a toggle made between rounds shapes every
/// pair of the next round.
pub fn spawn_pair(state: &mut GameState) {
    let world = state.world;
    let gap = world.gap_height(state.mode);

    let lo = world.min_segment_height + gap / 2.0;
    let hi = world.height - world.min_segment_height - gap / 2.0;
    let mut rng = state.spawn_rng();
    let gap_center = rng.random_range(lo..=hi);

    let top_height = gap_center - gap / 2.0;
    let bottom_y = gap_center + gap / 2.0;
    let appearance = world.pipe_appearance;

    state.obstacles.push(Obstacle {
        x: world.width,
        y: 0.0,
        width: world.pipe_width,
        height: top_height,
        passed: false,
        appearance,
    });
    state.obstacles.push(Obstacle {
        x: world.width,
        y: bottom_y,
        width: world.pipe_width,
        height: world.height - bottom_y,
        passed: false,
        appearance,
    });
}
