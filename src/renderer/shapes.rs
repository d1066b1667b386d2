//! Shape generation for 2D primitives

use glam::Vec2;

use super::vertex::{Vertex, colors};
use crate::sim::{GamePhase, GameState};
use crate::sprite::SpriteTable;

/// Generate vertices for a filled axis-aligned quad
pub fn quad(origin: Vec2, size: Vec2, color: [f32; 4]) -> Vec<Vertex> {
    let tl = origin;
    let tr = origin + Vec2::new(size.x, 0.0);
    let bl = origin + Vec2::new(0.0, size.y);
    let br = origin + size;

    vec![
        Vertex::new(tl.x, tl.y, color),
        Vertex::new(bl.x, bl.y, color),
        Vertex::new(tr.x, tr.y, color),
        Vertex::new(tr.x, tr.y, color),
        Vertex::new(bl.x, bl.y, color),
        Vertex::new(br.x, br.y, color),
    ]
}

/// Tessellate the whole scene back-to-front: backdrop, pipes, bird, and the
/// dim overlay when the round is over. Fill colors come from each entity's
/// appearance, resolved through the sprite table.
pub fn scene_vertices(state: &GameState, sprites: &SpriteTable) -> Vec<Vertex> {
    let world = Vec2::new(state.world.width, state.world.height);
    let mut vertices = Vec::with_capacity(6 * (state.obstacles.len() + 3));

    vertices.extend(quad(Vec2::ZERO, world, colors::BACKGROUND));

    for obstacle in &state.obstacles {
        vertices.extend(quad(
            Vec2::new(obstacle.x, obstacle.y),
            Vec2::new(obstacle.width, obstacle.height),
            sprites.resolve(obstacle.appearance),
        ));
    }

    let bird = &state.bird;
    vertices.extend(quad(
        Vec2::new(bird.x, bird.y),
        Vec2::new(bird.width, bird.height),
        sprites.resolve(bird.appearance),
    ));

    if state.phase == GamePhase::GameOver {
        vertices.extend(quad(Vec2::ZERO, world, colors::GAME_OVER_DIM));
    }

    vertices
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::WorldConfig;

    #[test]
    fn test_quad_is_two_triangles() {
        let verts = quad(Vec2::new(10.0, 20.0), Vec2::new(30.0, 40.0), [1.0; 4]);
        assert_eq!(verts.len(), 6);

        // All corners of the rectangle are covered
        let has = |x: f32, y: f32| verts.iter().any(|v| v.position == [x, y]);
        assert!(has(10.0, 20.0));
        assert!(has(40.0, 20.0));
        assert!(has(10.0, 60.0));
        assert!(has(40.0, 60.0));
    }

    #[test]
    fn test_scene_covers_everything() {
        let mut state = GameState::new(1, WorldConfig::default());
        let sprites = SpriteTable::default();
        crate::sim::spawn_pair(&mut state);

        // Backdrop + 2 pipes + bird, 6 vertices each
        let verts = scene_vertices(&state, &sprites);
        assert_eq!(verts.len(), 6 * 4);
    }

    #[test]
    fn test_game_over_adds_overlay() {
        let mut state = GameState::new(1, WorldConfig::default());
        let sprites = SpriteTable::default();
        let playing = scene_vertices(&state, &sprites).len();

        state.phase = GamePhase::GameOver;
        let over = scene_vertices(&state, &sprites);
        assert_eq!(over.len(), playing + 6);
        assert_eq!(over.last().map(|v| v.color), Some(colors::GAME_OVER_DIM));
    }
}
