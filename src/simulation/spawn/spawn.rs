use crate::body::{Body, BodyId, BodyRole, Rect, Vec2};
use crate::domain::level::{DynamicObject, StaticObject};

use super::WorldCore;

pub(super) fn spawn_static(world: &mut WorldCore, x: f32, y: f32, w: f32, h: f32) -> BodyId {
    let id = world.alloc_id();
    world.statics.push(Body::new_static(id, Rect::new(x, y, w, h)));
    id
}

pub(super) fn spawn_dynamic(world: &mut WorldCore, x: f32, y: f32, w: f32, h: f32) -> BodyId {
    let id = world.alloc_id();
    let body = Body::new_dynamic(id, Rect::new(x, y, w, h), &world.config.object);
    world.dynamics.push(body);
    id
}

pub(super) fn add_static(world: &mut WorldCore, desc: &StaticObject) -> BodyId {
    let id = spawn_static(world, desc.x, desc.y, desc.width, desc.height);
    if let Some(body) = world.statics.last_mut() {
        if let Some(color) = desc.color {
            body.color = color;
        }
        body.is_ghost_passable = desc.ghost_passable;
        if desc.ghost_passable && desc.color.is_none() {
            body.color = [150, 150, 255];
        }
    }
    id
}

pub(super) fn add_dynamic(world: &mut WorldCore, desc: &DynamicObject) -> BodyId {
    let id = spawn_dynamic(world, desc.x, desc.y, desc.width, desc.height);
    let modifiers = &world.config.modifiers;
    if let Some(body) = world.dynamics.last_mut() {
        if let Some(color) = desc.color {
            body.color = color;
        }
        if let Some(mass) = desc.mass {
            body.mass = mass;
        }
        body.is_pushable = desc.pushable;
        body.is_ghost_passable = desc.ghost_passable;
        for kind in desc.modifiers.iter().copied() {
            if !body.add_modifier(kind, modifiers) {
                log::warn!("{:?}: dropped {} modifier, at capacity", id, kind.name());
            }
        }
    }
    id
}

/// Replace the goal. Goals never move and only trigger level completion.
pub(super) fn set_goal(world: &mut WorldCore, x: f32, y: f32) -> BodyId {
    let id = world.alloc_id();
    let size = world.config.object.goal_size;
    let mut goal = Body::new(id, BodyRole::Goal, Rect::new(x, y, size, size));
    goal.color = [255, 255, 0];
    world.goal = Some(goal);
    id
}

pub(super) fn place_player(world: &mut WorldCore, x: f32, y: f32) {
    let player = &mut world.player;
    player.rect.x = x;
    player.rect.y = y;
    player.velocity = Vec2::zero();
    player.on_ground = false;
    player.save_prev_state();
}
