use crate::core::ConfigError;
use crate::domain::config::PhysicsConfig;

use super::WorldCore;

pub(super) fn set_gravity(world: &mut WorldCore, gravity: f32) {
    if !gravity.is_finite() {
        log::warn!("ignoring non-finite gravity {gravity}");
        return;
    }
    world.config.physics.gravity = gravity;
}

pub(super) fn set_world_size(world: &mut WorldCore, width: f32, height: f32) {
    if !(width.is_finite() && height.is_finite()) || width <= 0.0 || height <= 0.0 {
        log::warn!("ignoring world size {width}x{height}");
        return;
    }
    world.config.world.width = width;
    world.config.world.height = height;
}

pub(super) fn set_config(world: &mut WorldCore, mut config: PhysicsConfig) -> Result<(), ConfigError> {
    config.validate()?;
    world.config = config;
    Ok(())
}
