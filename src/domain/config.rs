//! Tunable constants, injected into every system.
//!
//! Nothing in the engine reads a global. A `PhysicsConfig` is owned by the
//! world and passed by reference to each pass, so two worlds with different
//! settings can run side by side.

use serde::{Deserialize, Serialize};

use crate::core::ConfigError;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldSettings {
    pub width: f32,
    pub height: f32,
    /// Velocity retained (and reflected) when a body hits a world edge.
    pub edge_elasticity: f32,
}

impl Default for WorldSettings {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
            edge_elasticity: 0.3,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsSettings {
    pub gravity: f32,
    pub max_fall_speed: f32,
    /// Largest vertical move per sub-step (pixels).
    pub vertical_substep: f32,
    /// Friction coefficient -> velocity removed per grounded tick.
    pub ground_friction_scale: f32,
    /// Distance under which two edges count as touching.
    pub contact_epsilon: f32,
}

impl Default for PhysicsSettings {
    fn default() -> Self {
        Self {
            gravity: 0.7,
            max_fall_speed: 20.0,
            vertical_substep: 4.0,
            ground_friction_scale: 0.1,
            contact_epsilon: 0.01,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerSettings {
    pub width: f32,
    pub height: f32,
    pub mass: f32,
    pub acceleration: f32,
    pub deceleration: f32,
    pub air_acceleration: f32,
    pub max_speed: f32,
    pub jump_force: f32,
}

impl Default for PlayerSettings {
    fn default() -> Self {
        Self {
            width: 30.0,
            height: 50.0,
            mass: 1.0,
            acceleration: 0.4,
            deceleration: 0.4,
            air_acceleration: 0.15,
            max_speed: 5.5,
            jump_force: -13.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ObjectSettings {
    pub default_mass: f32,
    pub default_friction: f32,
    pub default_elasticity: f32,
    pub push_force_scale: f32,
    /// Smallest push the player can give a pushable object.
    pub min_push: f32,
    pub goal_size: f32,
}

impl Default for ObjectSettings {
    fn default() -> Self {
        Self {
            default_mass: 1.0,
            default_friction: 0.5,
            default_elasticity: 0.2,
            push_force_scale: 0.8,
            min_push: 0.5,
            goal_size: 30.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModifierSettings {
    pub bouncy_elasticity: f32,
    pub bouncy_mass_scale: f32,
    pub heavy_mass_multiplier: f32,
    pub heavy_friction_scale: f32,
    pub floaty_gravity_scale: f32,
    pub floaty_mass_scale: f32,
    pub sticky_drag_force: f32,
    pub reversed_elasticity_scale: f32,
    pub ghostly_alpha: u8,
    pub ghostly_mass_scale: f32,
    /// Floor for mass after any modifier scales it.
    pub min_mass: f32,
    pub max_active: usize,
}

impl Default for ModifierSettings {
    fn default() -> Self {
        Self {
            bouncy_elasticity: 0.9,
            bouncy_mass_scale: 0.8,
            heavy_mass_multiplier: 5.0,
            heavy_friction_scale: 1.5,
            floaty_gravity_scale: 0.1,
            floaty_mass_scale: 0.5,
            sticky_drag_force: 10.0,
            reversed_elasticity_scale: 1.2,
            ghostly_alpha: 128,
            ghostly_mass_scale: 0.3,
            min_mass: 0.05,
            max_active: 3,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MalletSettings {
    pub range: f32,
    pub cooldown_secs: f64,
}

impl Default for MalletSettings {
    fn default() -> Self {
        Self {
            range: 100.0,
            cooldown_secs: 0.5,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InteractionSettings {
    /// Smallest upward speed a bouncy object gives the player.
    pub min_bounce: f32,
    /// Share of the player's impact speed pushed down into a bouncy object.
    pub bounce_transfer: f32,
    /// Vertical velocity an object is eased toward while stood on.
    pub standing_settle_velocity: f32,
    /// Horizontal velocity kept per tick by an object being stood on.
    pub standing_damping: f32,
    /// Share of the player's walking velocity passed to the object beneath.
    pub rider_transfer: f32,
}

impl Default for InteractionSettings {
    fn default() -> Self {
        Self {
            min_bounce: 8.0,
            bounce_transfer: 0.1,
            standing_settle_velocity: 0.5,
            standing_damping: 0.8,
            rider_transfer: 0.5,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    pub world: WorldSettings,
    pub physics: PhysicsSettings,
    pub player: PlayerSettings,
    pub object: ObjectSettings,
    pub modifiers: ModifierSettings,
    pub mallet: MalletSettings,
    pub interaction: InteractionSettings,
}

impl PhysicsConfig {
    /// Parse a (possibly partial) persisted config. Missing keys keep their
    /// defaults at any nesting depth.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let mut config: PhysicsConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }

    /// Reject values that would break the physics pass and clamp the ones
    /// that only need to be brought into range.
    pub fn validate(&mut self) -> Result<(), ConfigError> {
        let positive: [(&'static str, f32); 9] = [
            ("world.width", self.world.width),
            ("world.height", self.world.height),
            ("physics.vertical_substep", self.physics.vertical_substep),
            ("player.width", self.player.width),
            ("player.height", self.player.height),
            ("player.mass", self.player.mass),
            ("object.default_mass", self.object.default_mass),
            ("object.goal_size", self.object.goal_size),
            ("modifiers.min_mass", self.modifiers.min_mass),
        ];
        for (field, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::Invalid { field, value });
            }
        }
        if !self.mallet.range.is_finite() || self.mallet.range < 0.0 {
            return Err(ConfigError::Invalid { field: "mallet.range", value: self.mallet.range });
        }

        self.world.edge_elasticity = self.world.edge_elasticity.clamp(0.0, 1.0);
        self.object.default_elasticity = self.object.default_elasticity.clamp(0.0, 1.0);
        self.modifiers.bouncy_elasticity = self.modifiers.bouncy_elasticity.clamp(0.0, 1.0);
        self.mallet.cooldown_secs = self.mallet.cooldown_secs.max(0.0);
        Ok(())
    }
}
