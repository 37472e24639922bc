use crate::body::Body;
use crate::domain::config::PhysicsSettings;
use crate::domain::modifiers::EffectKind;

use super::contact::{blocks, rests_on};

/// Resolve every overlap between `body` and `statics` by moving `body`.
///
/// Returns the grounded state for this tick (also stored in `on_ground`).
pub fn resolve_static(body: &mut Body, statics: &[Body], physics: &PhysicsSettings) -> bool {
    if body.being_dragged || body.is_static() {
        return body.on_ground;
    }

    let eps = physics.contact_epsilon;
    let prev = body.prev_rect();

    // === Vertical sweep ===
    for s in statics.iter() {
        if !blocks(body, s) || !body.rect.intersects(&s.rect) {
            continue;
        }

        let vy = body.velocity.y;
        if vy > 0.0 && prev.bottom() <= s.rect.top() + eps {
            body.rect.set_bottom(s.rect.top());
            body.velocity.y = landing_velocity(body, physics);
        } else if vy < 0.0 && prev.top() >= s.rect.bottom() - eps {
            body.rect.set_top(s.rect.bottom());
            body.velocity.y = 0.0;
        }
    }

    // Re-check alignment after the whole sweep: a later snap may have moved
    // the body off the edge it first landed on.
    body.on_ground = if body.velocity.y >= 0.0 {
        let grounded = statics.iter().any(|s| blocks(body, s) && rests_on(body, s, eps));
        if grounded && body.velocity.y > 0.0 {
            body.velocity.y = 0.0;
        }
        grounded
    } else {
        false
    };

    // === Horizontal sweep ===
    for s in statics.iter() {
        if !blocks(body, s) || !body.rect.intersects(&s.rect) {
            continue;
        }

        let vx = body.velocity.x;
        if vx > 0.0 {
            body.rect.set_right(s.rect.left());
            body.velocity.x = -vx * body.elasticity;
        } else if vx < 0.0 {
            body.rect.set_left(s.rect.right());
            body.velocity.x = -vx * body.elasticity;
        } else {
            push_out(body, s);
        }
    }

    body.on_ground
}

/// Vertical velocity after landing. Only a body that is itself bouncy
/// rebounds; surfaces carry no bounciness of their own.
fn landing_velocity(body: &Body, physics: &PhysicsSettings) -> f32 {
    if !body.has_modifier(EffectKind::Bouncy) {
        return 0.0;
    }
    let rebound = body.velocity.y * body.elasticity;
    if rebound < physics.gravity {
        0.0
    } else {
        -rebound
    }
}

/// Stationary overlap (spawned or shoved into geometry): leave along the
/// axis with the smallest penetration.
fn push_out(body: &mut Body, s: &Body) {
    let candidates = [
        (s.rect.right() - body.rect.left(), 0u8),
        (body.rect.right() - s.rect.left(), 1u8),
        (s.rect.bottom() - body.rect.top(), 2u8),
        (body.rect.bottom() - s.rect.top(), 3u8),
    ];
    let mut best = candidates[0];
    for c in candidates.iter().skip(1) {
        if c.0 < best.0 {
            best = *c;
        }
    }

    match best.1 {
        0 => body.rect.set_left(s.rect.right()),
        1 => body.rect.set_right(s.rect.left()),
        2 => {
            body.rect.set_top(s.rect.bottom());
            body.velocity.y = body.velocity.y.max(0.0);
        }
        _ => {
            body.rect.set_bottom(s.rect.top());
            body.velocity.y = body.velocity.y.min(0.0);
            body.on_ground = true;
        }
    }
}
