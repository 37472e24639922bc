use crate::body::Body;

/// Ghost rule: a collision-disabled body and a ghost-passable body never
/// block each other, whichever of the two plays which role.
#[inline]
pub fn ghost_passes(a: &Body, b: &Body) -> bool {
    (!a.collision_enabled && b.is_ghost_passable) || (!b.collision_enabled && a.is_ghost_passable)
}

#[inline]
pub fn blocks(a: &Body, b: &Body) -> bool {
    !ghost_passes(a, b)
}

/// `upper` sits on `lower`: bottom edge on the top edge (within `eps`) with
/// real horizontal overlap.
#[inline]
pub fn rests_on(upper: &Body, lower: &Body, eps: f32) -> bool {
    (upper.rect.bottom() - lower.rect.top()).abs() <= eps
        && upper.rect.overlaps_horizontally(&lower.rect)
}

/// Horizontal push-out for `mover` against `fixed`, taking whichever side
/// needs the shorter move. Returns the direction `mover` was pushed
/// (-1 left, +1 right).
pub fn separate_horizontally(mover: &mut Body, fixed: &Body) -> f32 {
    let push_right = fixed.rect.right() - mover.rect.left();
    let push_left = mover.rect.right() - fixed.rect.left();
    if push_right < push_left {
        mover.rect.set_left(fixed.rect.right());
        1.0
    } else {
        mover.rect.set_right(fixed.rect.left());
        -1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::body::{BodyId, BodyRole, Rect};

    fn body(x: f32, y: f32) -> Body {
        Body::new(BodyId(0), BodyRole::Dynamic, Rect::new(x, y, 10.0, 10.0))
    }

    #[test]
    fn ghost_rule_is_symmetric() {
        let mut ghost = body(0.0, 0.0);
        ghost.collision_enabled = false;
        let mut wall = body(5.0, 0.0);
        wall.is_ghost_passable = true;

        assert!(ghost_passes(&ghost, &wall));
        assert!(ghost_passes(&wall, &ghost));

        // A ghost still collides with ordinary bodies.
        let plain = body(5.0, 0.0);
        assert!(blocks(&ghost, &plain));
        assert!(blocks(&plain, &ghost));
    }

    #[test]
    fn shorter_side_wins_when_separating() {
        let fixed = body(0.0, 0.0);
        let mut mover = body(8.0, 0.0);
        assert_eq!(separate_horizontally(&mut mover, &fixed), 1.0);
        assert_eq!(mover.rect.left(), 10.0);

        let mut mover = body(-7.0, 0.0);
        assert_eq!(separate_horizontally(&mut mover, &fixed), -1.0);
        assert_eq!(mover.rect.right(), 0.0);
    }
}
