//! Scene: one running level
//!
//! Owns the entity world and drives one logic step at a time:
//!
//! 1. behaviour (`pre_update`: input, gravity, timers)
//! 2. collision pass (scan, filter, notify)
//! 3. integrate whatever the callbacks left unsettled
//! 4. apply the messages callbacks raised
//! 5. compact the world

use log::{debug, info, warn};

use platformer_engine::ecs::{display_id, Commands, EntityId, SceneId, World};
use platformer_engine::physics::{CollisionSystem, FrameStats};

use crate::config::{GameConfig, GameplayConfig};
use crate::entities::{DamageOutcome, GameObject, Player};
use crate::input::PlayerInput;
use crate::messages::GameMessage;

/// What happened during one [`Scene::step`]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StepReport {
    /// Collision pass summary
    pub stats: FrameStats,
    /// Every message raised or derived this step, in order
    pub messages: Vec<GameMessage>,
    /// Entities physically removed at the end of the step
    pub removed: usize,
}

/// One running level
#[derive(Debug)]
pub struct Scene {
    id: SceneId,
    world: World<GameObject>,
    collisions: CollisionSystem,
    commands: Commands<GameMessage>,
    gameplay: GameplayConfig,
    player: Option<EntityId>,
    score: u32,
    coins: u32,
    elapsed: f32,
    pending_switch: Option<SceneId>,
}

impl Scene {
    /// Empty scene
    pub fn new(id: SceneId, config: &GameConfig) -> Self {
        Self {
            id,
            world: World::new(),
            collisions: CollisionSystem::with_config(config.engine.collision.clone()),
            commands: Commands::new(),
            gameplay: config.gameplay.clone(),
            player: None,
            score: 0,
            coins: 0,
            elapsed: 0.0,
            pending_switch: None,
        }
    }

    /// Add an object; objects are processed in the order they were added
    pub fn spawn(&mut self, object: impl Into<GameObject>) -> EntityId {
        let object = object.into();
        let is_player = matches!(object, GameObject::Player(_));
        let kind = object.kind();
        let id = self.world.create_entity(object);
        if is_player {
            if let Some(previous) = self.player.replace(id) {
                warn!("scene {}: replacing player {}", self.id, display_id(previous));
            }
        }
        debug!("scene {}: spawned {} {}", self.id, kind, display_id(id));
        id
    }

    /// Scene id
    pub fn id(&self) -> SceneId {
        self.id
    }

    /// Gameplay tuning the scene was built with
    pub fn gameplay(&self) -> &GameplayConfig {
        &self.gameplay
    }

    /// The entity world
    pub fn world(&self) -> &World<GameObject> {
        &self.world
    }

    /// Handle of the player, if one was spawned
    pub fn player_id(&self) -> Option<EntityId> {
        self.player
    }

    /// The player, if one was spawned and still exists
    pub fn player(&self) -> Option<&Player> {
        self.player.and_then(|id| self.world.get(id)).and_then(GameObject::as_player)
    }

    fn player_mut(&mut self) -> Option<&mut Player> {
        let id = self.player?;
        self.world.get_mut(id).and_then(GameObject::as_player_mut)
    }

    /// Whether the player is gone or dead
    pub fn is_player_dead(&self) -> bool {
        self.player().map_or(true, Player::is_dead)
    }

    /// Current score
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Coins collected
    pub fn coins(&self) -> u32 {
        self.coins
    }

    /// Seconds simulated
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// Scene a portal asked for, if any
    pub fn pending_switch(&self) -> Option<SceneId> {
        self.pending_switch
    }

    /// Take the requested scene switch
    pub fn take_pending_switch(&mut self) -> Option<SceneId> {
        self.pending_switch.take()
    }

    /// Advance the scene by `dt` seconds
    pub fn step(&mut self, dt: f32, input: &PlayerInput) -> StepReport {
        for id in self.world.ids() {
            if let Some(object) = self.world.get_mut(id) {
                object.pre_update(id, dt, input, &mut self.commands);
            }
        }
        self.commands.apply_despawns(&mut self.world);

        let stats = self.collisions.process_all(&mut self.world, dt, &mut self.commands);

        for id in self.world.ids() {
            if let Some(object) = self.world.get_mut(id) {
                object.finish_step(dt);
            }
        }

        let raised = self.commands.drain_messages();
        let mut messages = Vec::with_capacity(raised.len());
        for message in raised {
            messages.push(message);
            self.apply(message, &mut messages);
        }
        self.commands.apply_despawns(&mut self.world);

        let removed = self.world.compact();
        self.elapsed += dt;

        StepReport { stats, messages, removed }
    }

    fn apply(&mut self, message: GameMessage, derived: &mut Vec<GameMessage>) {
        match message {
            GameMessage::CoinCollected { coin } => {
                self.coins += 1;
                self.score += self.gameplay.coin_score;
                info!("coin {} collected ({} total, score {})", display_id(coin), self.coins, self.score);
            }
            GameMessage::EnemyStomped { enemy } => {
                let squashed = self
                    .world
                    .get_mut(enemy)
                    .and_then(GameObject::as_goomba_mut)
                    .is_some_and(|goomba| goomba.squash());
                if squashed {
                    self.score += self.gameplay.stomp_score;
                    info!("enemy {} stomped (score {})", display_id(enemy), self.score);
                }
            }
            GameMessage::PlayerHurt { by } => {
                let outcome = self.player_mut().map_or(DamageOutcome::Ignored, Player::take_damage);
                debug!("player hurt by {}: {outcome:?}", display_id(by));
                match outcome {
                    DamageOutcome::Shrunk => derived.push(GameMessage::PlayerShrunk),
                    DamageOutcome::Died => derived.push(GameMessage::PlayerDied),
                    DamageOutcome::Ignored => {}
                }
            }
            GameMessage::PlayerShrunk => {}
            GameMessage::PlayerDied => {
                info!("scene {}: player died after {:.2}s", self.id, self.elapsed);
            }
            GameMessage::SceneSwitch(destination) => {
                if self.pending_switch.is_none() {
                    info!("scene {}: portal to scene {destination}", self.id);
                    self.pending_switch = Some(destination);
                }
            }
        }
    }
}
