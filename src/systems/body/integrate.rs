//! Per-tick integration for free (non-dragged) bodies.
//!
//! Order: gravity, fall-speed clamp, ground friction, then position. The
//! horizontal move is applied in one go; the vertical move is split into
//! bounded sub-steps that stop at the first newly-entered static body so a
//! fast fall cannot skip over a thin platform. The collision resolver then
//! snaps the body out of whatever it stopped in.

use crate::collision::blocks;
use crate::domain::config::PhysicsSettings;

use super::body::Body;

pub fn integrate(body: &mut Body, statics: &[Body], physics: &PhysicsSettings) {
    body.save_prev_state();

    if body.being_dragged || body.is_static() {
        return;
    }

    if !body.on_ground {
        body.velocity.y += physics.gravity * body.gravity_scale;
    }
    body.velocity.y = body.velocity.y.min(physics.max_fall_speed);

    if body.on_ground {
        apply_ground_friction(body, physics);
    }

    body.rect.x += body.velocity.x;
    advance_vertical(body, statics, physics);
}

/// Friction opposes motion and can only bring `vx` to zero, never past it.
pub fn apply_ground_friction(body: &mut Body, physics: &PhysicsSettings) {
    let decel = (body.friction * physics.ground_friction_scale).max(0.0);
    let speed = body.velocity.x.abs();
    if speed <= decel {
        body.velocity.x = 0.0;
    } else {
        body.velocity.x -= decel * body.velocity.x.signum();
    }
}

fn advance_vertical(body: &mut Body, statics: &[Body], physics: &PhysicsSettings) {
    let vy = body.velocity.y;
    if vy == 0.0 {
        return;
    }

    let max_step = physics.vertical_substep.max(0.5);
    let steps = (vy.abs() / max_step).ceil().max(1.0) as u32;
    let step = vy / steps as f32;

    for _ in 0..steps {
        let before = body.rect;
        body.rect.y += step;

        let entered = statics.iter().any(|s| {
            blocks(body, s) && !before.intersects(&s.rect) && body.rect.intersects(&s.rect)
        });
        if entered {
            break;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::body::{BodyId, Rect, Vec2};
    use crate::domain::config::ObjectSettings;

    fn falling_box(vy: f32) -> Body {
        let mut b = Body::new_dynamic(BodyId(1), Rect::new(0.0, 0.0, 10.0, 10.0), &ObjectSettings::default());
        b.velocity = Vec2::new(0.0, vy);
        b
    }

    #[test]
    fn gravity_is_scaled_and_clamped() {
        let physics = PhysicsSettings::default();
        let mut b = falling_box(19.9);
        b.gravity_scale = 1.0;
        integrate(&mut b, &[], &physics);
        assert_eq!(b.velocity.y, physics.max_fall_speed);

        let mut floaty = falling_box(0.0);
        floaty.gravity_scale = 0.1;
        integrate(&mut floaty, &[], &physics);
        assert!((floaty.velocity.y - 0.07).abs() < 1e-6);
    }

    #[test]
    fn friction_never_reverses_direction() {
        let physics = PhysicsSettings::default();
        let mut b = falling_box(0.0);
        b.on_ground = true;
        b.friction = 10.0;
        b.velocity.x = 0.3;
        apply_ground_friction(&mut b, &physics);
        assert_eq!(b.velocity.x, 0.0);

        b.friction = 0.5;
        b.velocity.x = -2.0;
        apply_ground_friction(&mut b, &physics);
        assert!((b.velocity.x + 1.95).abs() < 1e-6);
    }

    #[test]
    fn fast_fall_stops_inside_thin_platform() {
        let physics = PhysicsSettings::default();
        let platform = Body::new_static(BodyId(2), Rect::new(-20.0, 25.0, 60.0, 2.0));
        let mut b = falling_box(20.0);
        b.velocity.y = 20.0;
        b.on_ground = true; // skip gravity for a clean number
        integrate(&mut b, std::slice::from_ref(&platform), &physics);

        // Stopped in the platform rather than jumping past it.
        assert!(b.rect.intersects(&platform.rect));
        assert!(b.rect.top() < platform.rect.bottom());
    }

    #[test]
    fn dragged_body_is_not_integrated() {
        let physics = PhysicsSettings::default();
        let mut b = falling_box(5.0);
        b.being_dragged = true;
        integrate(&mut b, &[], &physics);
        assert_eq!(b.rect.y, 0.0);
        assert_eq!(b.velocity.y, 5.0);
    }
}
