use crate::body::integrate;
use crate::collision::resolve_static;
use crate::systems::bounds::keep_in_bounds;
use crate::systems::interaction::{resolve_dynamic_pairs, resolve_player};

use super::{find_movable, WorldCore};

pub(super) fn step(world: &mut WorldCore) {
    // === Drag: the held body sits under the pointer, outside physics ===
    follow_dragged(world);

    let cfg = &world.config;

    // === Integration ===
    world.control.apply_input(&mut world.player, &cfg.player);
    integrate(&mut world.player, &world.statics, &cfg.physics);
    for body in world.dynamics.iter_mut() {
        integrate(body, &world.statics, &cfg.physics);
    }

    // === Static collisions ===
    resolve_static(&mut world.player, &world.statics, &cfg.physics);
    for body in world.dynamics.iter_mut() {
        resolve_static(body, &world.statics, &cfg.physics);
    }

    // === Interactions ===
    resolve_dynamic_pairs(&mut world.dynamics, &cfg.physics);
    let move_dir = world.control.input().move_dir;
    let standing = resolve_player(&mut world.player, &mut world.dynamics, move_dir, cfg);
    world.control.set_standing_on(standing);

    // === World edges ===
    keep_in_bounds(&mut world.player, &cfg.world);
    for body in world.dynamics.iter_mut() {
        keep_in_bounds(body, &cfg.world);
    }

    world.frame += 1;
}

fn follow_dragged(world: &mut WorldCore) {
    let Some(id) = world.drag.dragged() else { return };
    match find_movable(&mut world.player, &mut world.dynamics, id) {
        Some(body) => world.drag.follow(body),
        None => {
            world.drag.clear();
        }
    }
}
