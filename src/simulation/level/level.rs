use crate::core::LevelError;
use crate::domain::level::LevelLayout;

use super::init::{new_player, PLAYER_ID};
use super::spawn::{add_dynamic, add_static, set_goal};
use super::WorldCore;

pub(super) fn clear(world: &mut WorldCore) {
    if let Some(id) = world.drag.clear() {
        log::debug!("drag on {:?} dropped by level teardown", id);
    }
    world.statics.clear();
    world.dynamics.clear();
    world.goal = None;
    world.player = new_player(&world.config, None);
    world.control.reset();
    world.next_id = PLAYER_ID.0 + 1;
    world.frame = 0;
}

/// Build the world from `layout`. On an invalid layout the world is left
/// empty apart from a default player and the error is returned.
pub(super) fn load_level(world: &mut WorldCore, layout: LevelLayout) -> Result<(), LevelError> {
    clear(world);
    if let Err(e) = layout.validate() {
        log::warn!("level rejected: {e}");
        world.layout = None;
        return Err(e);
    }

    build(world, &layout);
    log::info!(
        "level {} loaded: {} static, {} dynamic",
        layout.name.as_deref().unwrap_or("<unnamed>"),
        world.statics.len(),
        world.dynamics.len()
    );
    world.layout = Some(layout);
    Ok(())
}

pub(super) fn load_level_json(world: &mut WorldCore, json: &str) -> Result<(), LevelError> {
    match serde_json::from_str::<LevelLayout>(json) {
        Ok(layout) => load_level(world, layout),
        Err(e) => {
            clear(world);
            world.layout = None;
            log::warn!("level rejected: {e}");
            Err(e.into())
        }
    }
}

pub(super) fn reset_level(world: &mut WorldCore) {
    clear(world);
    if let Some(layout) = world.layout.take() {
        build(world, &layout);
        world.layout = Some(layout);
    }
    log::info!("level reset");
}

fn build(world: &mut WorldCore, layout: &LevelLayout) {
    for s in layout.static_objects.iter() {
        add_static(world, s);
    }
    for d in layout.dynamic_objects.iter() {
        add_dynamic(world, d);
    }
    world.player = new_player(&world.config, layout.player_start);
    if let Some(g) = layout.goal {
        set_goal(world, g.x, g.y);
    }
}
