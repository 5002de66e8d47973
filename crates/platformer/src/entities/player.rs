//! The player character

use log::{debug, info};

use platformer_engine::ecs::{Capabilities, Collidable, ColliderProfile, Commands};
use platformer_engine::foundation::math::{utils, Vec2};
use platformer_engine::physics::{Axis, BoundingBox, CollisionEvent, CollisionLayers};

use crate::config::GameplayConfig;
use crate::entities::body::Body;
use crate::input::PlayerInput;
use crate::messages::GameMessage;

/// Power-up state; decides the box size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerForm {
    /// One hit from death
    Small,
    /// Shrinks instead of dying when hit
    Big,
}

impl PlayerForm {
    /// Half extents of the box in this form
    pub fn half_extents(self) -> Vec2 {
        match self {
            Self::Small => Vec2::new(6.0, 8.0),
            Self::Big => Vec2::new(6.0, 16.0),
        }
    }
}

/// Result of [`Player::take_damage`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DamageOutcome {
    /// Invulnerable or already dead
    Ignored,
    /// Went from big to small
    Shrunk,
    /// Was small
    Died,
}

/// The player character
#[derive(Debug, Clone)]
pub struct Player {
    body: Body,
    form: PlayerForm,
    dead: bool,
    invulnerable_for: f32,
    tuning: GameplayConfig,
}

impl Player {
    /// Player standing with its feet at `feet`
    pub fn new(feet: Vec2, form: PlayerForm, tuning: &GameplayConfig) -> Self {
        let half = form.half_extents();
        Self {
            body: Body::new(Vec2::new(feet.x, feet.y - half.y), half),
            form,
            dead: false,
            invulnerable_for: 0.0,
            tuning: tuning.clone(),
        }
    }

    /// Kinematic state
    pub fn body(&self) -> &Body {
        &self.body
    }

    /// Mutable kinematic state
    pub fn body_mut(&mut self) -> &mut Body {
        &mut self.body
    }

    /// Current form
    pub fn form(&self) -> PlayerForm {
        self.form
    }

    /// Whether the player has died
    pub fn is_dead(&self) -> bool {
        self.dead
    }

    /// Whether damage is currently ignored
    pub fn is_invulnerable(&self) -> bool {
        self.invulnerable_for > 0.0
    }

    /// Power up to the big form
    pub fn grow(&mut self) {
        if self.form == PlayerForm::Small && !self.dead {
            self.form = PlayerForm::Big;
            self.body.resize(PlayerForm::Big.half_extents());
        }
    }

    /// Get hurt: shrink when big, die when small
    pub fn take_damage(&mut self) -> DamageOutcome {
        if self.dead || self.is_invulnerable() {
            return DamageOutcome::Ignored;
        }
        match self.form {
            PlayerForm::Big => {
                self.form = PlayerForm::Small;
                self.body.resize(PlayerForm::Small.half_extents());
                self.invulnerable_for = self.tuning.invulnerability_time;
                info!("player shrunk");
                DamageOutcome::Shrunk
            }
            PlayerForm::Small => {
                self.die();
                DamageOutcome::Died
            }
        }
    }

    /// Die on the spot: hop up, then fall out of the level
    pub fn die(&mut self) {
        if self.dead {
            return;
        }
        self.dead = true;
        self.body.velocity = Vec2::new(0.0, -self.tuning.jump_speed * 0.5);
        info!("player died at ({:.1}, {:.1})", self.body.position.x, self.body.position.y);
    }

    /// Timers, walking, jumping and gravity, before the collision pass
    pub fn pre_update(&mut self, dt: f32, input: &PlayerInput, commands: &mut Commands<GameMessage>) {
        let tuning = &self.tuning;
        if self.dead {
            self.body.fall(tuning.gravity, tuning.max_fall_speed, dt);
            self.body.begin_step();
            return;
        }

        self.invulnerable_for = (self.invulnerable_for - dt).max(0.0);

        let target = input.direction() * tuning.walk_speed;
        self.body.velocity.x = utils::approach(self.body.velocity.x, target, tuning.walk_acceleration * dt);
        if input.jump && self.body.on_ground {
            self.body.velocity.y = -tuning.jump_speed;
            debug!("jump");
        }
        self.body.fall(tuning.gravity, tuning.max_fall_speed, dt);

        if self.body.position.y - self.body.half_extents.y > tuning.kill_plane_y {
            self.die();
            commands.send(GameMessage::PlayerDied);
        }
        self.body.begin_step();
    }

    fn hurt(&mut self, commands: &mut Commands<GameMessage>) {
        match self.take_damage() {
            DamageOutcome::Shrunk => commands.send(GameMessage::PlayerShrunk),
            DamageOutcome::Died => commands.send(GameMessage::PlayerDied),
            DamageOutcome::Ignored => {}
        }
    }
}

impl Collidable for Player {
    type Message = GameMessage;

    fn bounding_box(&self) -> BoundingBox {
        self.body.bounding_box()
    }

    fn position(&self) -> Vec2 {
        self.body.position
    }

    fn velocity(&self) -> Vec2 {
        self.body.velocity
    }

    fn is_collidable(&self) -> bool {
        !self.dead
    }

    fn profile(&self) -> ColliderProfile {
        ColliderProfile::new(CollisionLayers::PLAYER).with_mask(
            CollisionLayers::ENVIRONMENT | CollisionLayers::ENEMY | CollisionLayers::PICKUP | CollisionLayers::PORTAL,
        )
    }

    fn on_no_collision(&mut self, dt: f32, _commands: &mut Commands<GameMessage>) {
        self.body.move_freely(dt);
    }

    fn on_collision_with(&mut self, event: &CollisionEvent, commands: &mut Commands<GameMessage>) {
        let target = &event.target_profile;

        if target.is_collectible() {
            commands.despawn(event.target);
            commands.send(GameMessage::CoinCollected { coin: event.target });
            return;
        }

        if let Some(scene) = target.triggers_scene_switch() {
            commands.send(GameMessage::SceneSwitch(scene));
            return;
        }

        let stomp = target.capabilities.contains(Capabilities::STOMPABLE)
            && event.axis() == Axis::Y
            && event.normal.y < 0.0;
        if stomp {
            self.body.position += event.correction();
            self.body.velocity.y = -self.tuning.stomp_bounce_speed;
            self.body.hold(Axis::Y);
            commands.send(GameMessage::EnemyStomped { enemy: event.target });
            return;
        }

        if target.capabilities.contains(Capabilities::DAMAGING) {
            self.hurt(commands);
            return;
        }

        if event.is_blocking() {
            self.body.stop_against(event);
        }
    }
}
