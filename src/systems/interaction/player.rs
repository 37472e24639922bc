use crate::body::{Body, BodyId};
use crate::collision::{ghost_passes, rests_on};
use crate::domain::config::PhysicsConfig;
use crate::domain::modifiers::EffectKind;

/// Resolve the player against every dynamic body.
///
/// `move_dir` is the player's horizontal input for this tick; it gates the
/// rider transfer onto whatever the player stands on. Returns the object the
/// player ended up standing on, if any.
pub fn resolve_player(
    player: &mut Body,
    objects: &mut [Body],
    move_dir: i8,
    config: &PhysicsConfig,
) -> Option<BodyId> {
    if player.being_dragged {
        return None;
    }

    let mut standing_on = None;
    for object in objects.iter_mut() {
        if object.being_dragged || ghost_passes(player, object) {
            continue;
        }

        let stood = if player.rect.intersects(&object.rect) {
            resolve_overlap(player, object, config)
        } else if player.velocity.y >= 0.0
            && rests_on(player, object, config.physics.contact_epsilon)
        {
            land_on(player, object, config)
        } else {
            false
        };

        if stood {
            if move_dir != 0 && object.is_pushable {
                object.velocity.x = player.velocity.x * config.interaction.rider_transfer;
            }
            standing_on = Some(object.id);
        }
    }
    standing_on
}

/// Returns true when the player ends up standing on `object`.
fn resolve_overlap(player: &mut Body, object: &mut Body, config: &PhysicsConfig) -> bool {
    let ox = player.rect.overlap_x(&object.rect);
    let oy = player.rect.overlap_y(&object.rect);

    if ox < oy {
        push_sideways(player, object, config);
        return false;
    }

    if player.rect.center().y < object.rect.center().y {
        land_on(player, object, config)
    } else {
        // Head bump from below.
        player.rect.set_top(object.rect.bottom());
        player.velocity.y = player.velocity.y.max(0.0);
        false
    }
}

fn land_on(player: &mut Body, object: &mut Body, config: &PhysicsConfig) -> bool {
    let fx = &config.interaction;
    player.rect.set_bottom(object.rect.top());

    if object.has_modifier(EffectKind::Bouncy) && player.velocity.y >= 0.0 {
        let impact = player.velocity.y;
        let bounce = (impact * object.elasticity).max(fx.min_bounce);
        player.velocity.y = -bounce;
        player.on_ground = false;
        object.velocity.y += impact * fx.bounce_transfer * (player.mass / object.mass);
        log::trace!("player bounced off {:?} at {:.2}", object.id, bounce);
        return false;
    }

    player.velocity.y = player.velocity.y.min(0.0);
    player.on_ground = true;
    object.velocity.y += (fx.standing_settle_velocity - object.velocity.y) * 0.5;
    object.velocity.x *= fx.standing_damping;
    true
}

/// Side contact: snap the player flush and shove the object if it can move.
fn push_sideways(player: &mut Body, object: &mut Body, config: &PhysicsConfig) {
    let dx = object.rect.center().x - player.rect.center().x;
    let dir = if dx != 0.0 {
        dx.signum()
    } else if player.velocity.x != 0.0 {
        player.velocity.x.signum()
    } else {
        return;
    };

    if dir > 0.0 {
        player.rect.set_right(object.rect.left());
    } else {
        player.rect.set_left(object.rect.right());
    }

    let toward = player.velocity.x * dir > 0.0;
    if !object.is_pushable {
        if toward {
            player.velocity.x = 0.0;
        }
        return;
    }

    let ratio = player.mass / object.mass;
    let force = (ratio * player.velocity.x.abs() * config.object.push_force_scale)
        .max(config.object.min_push);
    if object.velocity.x * dir < force {
        object.velocity.x = dir * force;
    }

    if toward {
        // The player cannot outrun what it pushes.
        player.velocity.x = dir * player.velocity.x.abs().min(object.velocity.x.abs());
    }
}
