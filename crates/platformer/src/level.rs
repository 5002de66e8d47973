//! Built-in levels
//!
//! Levels are laid out in code, in world units with `+y` down. Ground tops
//! sit at `y = 192`.

use platformer_engine::ecs::SceneId;
use platformer_engine::foundation::math::Vec2;

use crate::config::{GameConfig, GameError};
use crate::entities::{Block, Coin, Goomba, Player, PlayerForm, Portal};
use crate::scene::Scene;

/// Height of the ground's top face
pub const GROUND_Y: f32 = 192.0;

/// Ids of every built-in level
pub const SCENES: [SceneId; 2] = [1, 2];

/// Build level `id`
pub fn build(id: SceneId, config: &GameConfig) -> Result<Scene, GameError> {
    let mut scene = Scene::new(id, config);
    match id {
        1 => overworld(&mut scene),
        2 => arena(&mut scene),
        _ => return Err(GameError::UnknownScene(id)),
    }
    if scene.player_id().is_none() {
        return Err(GameError::MissingPlayer(id));
    }
    log::info!("built scene {id} with {} objects", scene.world().len());
    Ok(scene)
}

fn overworld(scene: &mut Scene) {
    let tuning = scene.gameplay().clone();

    // Ground with a pit at x = 400..448
    scene.spawn(Block::new(Vec2::new(0.0, GROUND_Y), Vec2::new(400.0, 32.0)));
    scene.spawn(Block::new(Vec2::new(448.0, GROUND_Y), Vec2::new(352.0, 32.0)));
    scene.spawn(Block::new(Vec2::new(256.0, 160.0), Vec2::new(32.0, 32.0)));
    scene.spawn(Block::new(Vec2::new(160.0, 128.0), Vec2::new(48.0, 16.0)));

    for x in [96.0, 112.0, 128.0] {
        scene.spawn(Coin::new(Vec2::new(x, 180.0)));
    }
    scene.spawn(Coin::new(Vec2::new(184.0, 112.0)));

    scene.spawn(Goomba::new(Vec2::new(224.0, GROUND_Y), &tuning));
    scene.spawn(Goomba::new(Vec2::new(560.0, GROUND_Y), &tuning));
    scene.spawn(Portal::new(Vec2::new(736.0, 160.0), Vec2::new(16.0, 32.0), 2));

    scene.spawn(Player::new(Vec2::new(32.0, GROUND_Y), PlayerForm::Big, &tuning));
}

fn arena(scene: &mut Scene) {
    let tuning = scene.gameplay().clone();

    scene.spawn(Block::new(Vec2::new(0.0, GROUND_Y), Vec2::new(320.0, 32.0)));
    scene.spawn(Block::new(Vec2::new(-16.0, 96.0), Vec2::new(16.0, 96.0)));
    scene.spawn(Block::new(Vec2::new(320.0, 96.0), Vec2::new(16.0, 96.0)));
    scene.spawn(Block::new(Vec2::new(96.0, 136.0), Vec2::new(128.0, 16.0)));

    for x in [112.0, 144.0, 176.0, 208.0] {
        scene.spawn(Coin::new(Vec2::new(x, 124.0)));
    }

    scene.spawn(Goomba::new(Vec2::new(160.0, GROUND_Y), &tuning));
    scene.spawn(Goomba::new(Vec2::new(240.0, GROUND_Y), &tuning));
    scene.spawn(Portal::new(Vec2::new(288.0, 160.0), Vec2::new(16.0, 32.0), 1));

    scene.spawn(Player::new(Vec2::new(32.0, GROUND_Y), PlayerForm::Small, &tuning));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_scene_builds_with_a_player() {
        let config = GameConfig::default();
        for id in SCENES {
            let scene = build(id, &config).unwrap();
            assert_eq!(scene.id(), id);
            assert!(scene.player().is_some());
            assert!(!scene.is_player_dead());
        }
    }

    #[test]
    fn test_unknown_scene() {
        let result = build(42, &GameConfig::default());
        assert!(matches!(result, Err(GameError::UnknownScene(42))));
    }
}
