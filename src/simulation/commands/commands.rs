use crate::body::{BodyId, Vec2};
use crate::domain::modifiers::EffectKind;

use super::{find_movable, WorldCore};

/// Toggle `kind` on `target`: remove it if present, add it otherwise.
///
/// Gated by the cooldown and by the distance between the player's center
/// and the target's center. Only a successful change starts the cooldown.
pub(super) fn attempt_mallet_use(world: &mut WorldCore, target: BodyId, kind: EffectKind) -> bool {
    let now = world.clock.now_secs();
    let cooldown = world.config.mallet.cooldown_secs;
    let range = world.config.mallet.range;

    if !world.control.cooldown_ready(now, cooldown) {
        log::debug!(
            "mallet rejected: cooling down ({:.2}s left)",
            world.control.cooldown_remaining(now, cooldown)
        );
        return false;
    }

    let origin = world.player.rect.center();
    let Some(body) = find_movable(&mut world.player, &mut world.dynamics, target) else {
        log::debug!("mallet rejected: {:?} is not a dynamic body", target);
        return false;
    };

    let distance = body.rect.center().distance(origin);
    if distance > range {
        log::debug!("mallet rejected: {:?} out of range ({:.1} > {:.1})", target, distance, range);
        return false;
    }

    let removing = body.has_modifier(kind);
    let changed = if removing {
        body.remove_modifier(kind, &world.config.modifiers)
    } else {
        body.add_modifier(kind, &world.config.modifiers)
    };
    if !changed {
        log::debug!("mallet rejected: {:?} already carries {} modifiers", target, body.modifier_count());
        return false;
    }

    log::info!(
        "{} {} {:?}",
        if removing { "removed" } else { "applied" },
        kind.name(),
        target
    );

    // Losing sticky mid-drag drops the body.
    if body.being_dragged && !body.is_draggable {
        world.drag.stop(body);
    }

    world.control.mark_mallet_use(now);
    true
}

/// Use the selected modifier on the closest dynamic body or the player
/// whose center is within mallet range of the pointer.
pub(super) fn use_mallet_at(world: &mut WorldCore, x: f32, y: f32) -> bool {
    let pointer = Vec2::new(x, y);
    let range = world.config.mallet.range;

    let target = world
        .dynamics
        .iter()
        .chain(std::iter::once(&world.player))
        .map(|b| (b.id, b.rect.center().distance(pointer)))
        .filter(|&(_, d)| d <= range)
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(id, _)| id);

    match target {
        Some(id) => {
            let kind = world.control.selected_kind();
            attempt_mallet_use(world, id, kind)
        }
        None => false,
    }
}

pub(super) fn mallet_cooldown_remaining(world: &WorldCore) -> f64 {
    let now = world.clock.now_secs();
    world.control.cooldown_remaining(now, world.config.mallet.cooldown_secs)
}

/// Grab dynamic body `id` at the pointer, releasing any previous grab.
pub(super) fn start_drag(world: &mut WorldCore, id: BodyId, x: f32, y: f32) -> bool {
    release_drag(world);
    let Some(body) = world.dynamics.iter_mut().find(|b| b.id == id) else {
        return false;
    };
    world.drag.start(body, x, y)
}

/// Release whatever is being dragged.
pub(super) fn release_drag(world: &mut WorldCore) -> bool {
    let Some(id) = world.drag.dragged() else {
        return false;
    };
    match find_movable(&mut world.player, &mut world.dynamics, id) {
        Some(body) => world.drag.stop(body),
        None => {
            world.drag.clear();
            false
        }
    }
}

pub(super) fn pointer_down(world: &mut WorldCore, x: f32, y: f32) -> bool {
    world.drag.update_pointer(x, y);
    let hit = world
        .dynamics
        .iter()
        .find(|b| b.is_draggable && b.rect.contains_point(x, y))
        .map(|b| b.id);

    match hit {
        Some(id) => start_drag(world, id, x, y),
        None => use_mallet_at(world, x, y),
    }
}
