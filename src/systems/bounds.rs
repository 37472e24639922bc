//! Bounds Keeper - keeps bodies inside the world rectangle

use crate::body::{Body, Rect, Vec2};
use crate::domain::config::WorldSettings;

/// Clamp `body` to the world, reflecting velocity off the edges.
///
/// Collision-disabled bodies drift freely until they are entirely outside
/// the world, then they are recentered.
pub fn keep_in_bounds(body: &mut Body, world: &WorldSettings) {
    if body.is_static() {
        return;
    }

    if !body.collision_enabled {
        let extent = Rect::new(0.0, 0.0, world.width, world.height);
        if !body.rect.intersects(&extent) {
            body.rect.set_center(Vec2::new(world.width * 0.5, world.height * 0.5));
            body.velocity = Vec2::zero();
            log::debug!("recentered lost body {:?}", body.id);
        }
        return;
    }

    let e = world.edge_elasticity;

    if body.rect.left() < 0.0 {
        body.rect.set_left(0.0);
        if body.velocity.x < 0.0 {
            body.velocity.x = -body.velocity.x * e;
        }
    } else if body.rect.right() > world.width {
        body.rect.set_right(world.width);
        if body.velocity.x > 0.0 {
            body.velocity.x = -body.velocity.x * e;
        }
    }

    if body.rect.top() < 0.0 {
        body.rect.set_top(0.0);
        if body.velocity.y < 0.0 {
            body.velocity.y = -body.velocity.y * e;
        }
    } else if body.rect.bottom() >= world.height {
        body.rect.set_bottom(world.height);
        if body.velocity.y > 0.0 {
            body.velocity.y = -body.velocity.y * e;
        }
        body.on_ground = true;
    }
}
