use crate::body::Body;
use crate::collision::{ghost_passes, rests_on, separate_horizontally};
use crate::domain::config::PhysicsSettings;

/// Combined mass below which a collision exchanges no momentum.
const MIN_TOTAL_MASS: f32 = 1e-6;

/// Resolve every overlapping pair of dynamic bodies, in registration order.
pub fn resolve_dynamic_pairs(bodies: &mut [Body], physics: &PhysicsSettings) {
    let n = bodies.len();
    for i in 0..n {
        for j in 0..n {
            if i == j {
                continue;
            }
            let (a, b) = pair_mut(bodies, i, j);
            resolve_pair(a, b, physics);
        }
    }
}

/// Two distinct mutable borrows out of one slice.
fn pair_mut(bodies: &mut [Body], i: usize, j: usize) -> (&mut Body, &mut Body) {
    debug_assert!(i != j);
    if i < j {
        let (left, right) = bodies.split_at_mut(j);
        (&mut left[i], &mut right[0])
    } else {
        let (left, right) = bodies.split_at_mut(i);
        (&mut right[0], &mut left[j])
    }
}

/// Resolve one pair. Returns true when the bodies overlapped and were moved.
pub fn resolve_pair(a: &mut Body, b: &mut Body, physics: &PhysicsSettings) -> bool {
    if a.being_dragged || b.being_dragged || ghost_passes(a, b) {
        return false;
    }

    if !a.rect.intersects(&b.rect) {
        // Resting on top of another box counts as ground.
        if a.velocity.y >= 0.0 && rests_on(a, b, physics.contact_epsilon) {
            a.on_ground = true;
            a.velocity.y = 0.0;
        }
        return false;
    }

    if a.rect.overlap_y(&b.rect) < a.rect.overlap_x(&b.rect) {
        if a.rect.center().y <= b.rect.center().y {
            stack(a, b);
        } else {
            stack(b, a);
        }
        return true;
    }

    match (a.is_pushable, b.is_pushable) {
        (true, true) => {
            exchange_momentum(a, b);
            separate_horizontally(b, a);
        }
        (true, false) => {
            a.velocity.x = -a.velocity.x * a.elasticity;
            separate_horizontally(a, b);
        }
        (false, true) => {
            b.velocity.x = -b.velocity.x * b.elasticity;
            separate_horizontally(b, a);
        }
        (false, false) => {
            separate_horizontally(b, a);
        }
    }
    true
}

/// Set `upper` down on top of `lower`.
fn stack(upper: &mut Body, lower: &Body) {
    upper.rect.set_bottom(lower.rect.top());
    upper.velocity.y = upper.velocity.y.min(0.0);
    upper.on_ground = true;
}

/// 1D elastic exchange along x, scaled by the mean elasticity.
fn exchange_momentum(a: &mut Body, b: &mut Body) {
    let (m1, m2) = (a.mass, b.mass);
    let total = m1 + m2;
    if total <= MIN_TOTAL_MASS {
        return;
    }

    let (u1, u2) = (a.velocity.x, b.velocity.x);
    let v1 = ((m1 - m2) * u1 + 2.0 * m2 * u2) / total;
    let v2 = ((m2 - m1) * u2 + 2.0 * m1 * u1) / total;
    let e = (a.elasticity + b.elasticity) * 0.5;

    a.velocity.x = v1 * e;
    b.velocity.x = v2 * e;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::body::{BodyId, Rect, Vec2};
    use crate::domain::config::{ModifierSettings, ObjectSettings};
    use crate::domain::modifiers::EffectKind;

    fn boxed(id: u32, x: f32, y: f32) -> Body {
        let mut b = Body::new_dynamic(BodyId(id), Rect::new(x, y, 20.0, 20.0), &ObjectSettings::default());
        b.elasticity = 1.0;
        b
    }

    #[test]
    fn equal_masses_swap_velocities() {
        let physics = PhysicsSettings::default();
        let mut a = boxed(1, 0.0, 0.0);
        let mut b = boxed(2, 18.0, 0.0);
        a.velocity = Vec2::new(5.0, 0.0);
        b.velocity = Vec2::new(-5.0, 0.0);

        assert!(resolve_pair(&mut a, &mut b, &physics));

        assert!((a.velocity.x + 5.0).abs() < 1e-5);
        assert!((b.velocity.x - 5.0).abs() < 1e-5);
        assert!(!a.rect.intersects(&b.rect));
    }

    #[test]
    fn heavy_box_barely_slows() {
        let physics = PhysicsSettings::default();
        let mods = ModifierSettings::default();
        let mut heavy = boxed(1, 0.0, 0.0);
        heavy.add_modifier(EffectKind::Heavy, &mods);
        heavy.elasticity = 1.0;
        let mut light = boxed(2, 18.0, 0.0);
        heavy.velocity.x = 4.0;

        resolve_pair(&mut heavy, &mut light, &physics);

        // m1 = 5, m2 = 1: v1 = 4 * 4 / 6, v2 = 2 * 5 * 4 / 6
        assert!((heavy.velocity.x - 16.0 / 6.0).abs() < 1e-4);
        assert!((light.velocity.x - 40.0 / 6.0).abs() < 1e-4);
    }

    #[test]
    fn immovable_box_is_untouched() {
        let physics = PhysicsSettings::default();
        let mut mover = boxed(1, 0.0, 0.0);
        mover.elasticity = 0.5;
        mover.velocity.x = 6.0;
        let mut wall = boxed(2, 15.0, 0.0);
        wall.is_pushable = false;
        wall.velocity.x = 1.0;
        let wall_before = wall.rect;

        resolve_pair(&mut mover, &mut wall, &physics);

        assert_eq!(wall.rect, wall_before);
        assert_eq!(wall.velocity.x, 1.0);
        assert!((mover.velocity.x + 3.0).abs() < 1e-5);
        assert_eq!(mover.rect.right(), 15.0);
    }

    #[test]
    fn neither_pushable_separates_without_exchange() {
        let physics = PhysicsSettings::default();
        let mut a = boxed(1, 0.0, 0.0);
        let mut b = boxed(2, 15.0, 0.0);
        a.is_pushable = false;
        b.is_pushable = false;
        a.velocity.x = 2.0;

        resolve_pair(&mut a, &mut b, &physics);

        assert_eq!(a.velocity.x, 2.0);
        assert_eq!(b.velocity.x, 0.0);
        assert!(!a.rect.intersects(&b.rect));
    }

    #[test]
    fn shallow_vertical_overlap_stacks() {
        let physics = PhysicsSettings::default();
        let mut top = boxed(1, 2.0, 0.0);
        let mut bottom = boxed(2, 0.0, 17.0);
        top.velocity.y = 3.0;

        resolve_pair(&mut top, &mut bottom, &physics);

        assert_eq!(top.rect.bottom(), 17.0);
        assert_eq!(top.velocity.y, 0.0);
        assert!(top.on_ground);
        assert_eq!(bottom.rect.y, 17.0);
    }

    #[test]
    fn ghostly_box_passes_only_through_passable_boxes() {
        let physics = PhysicsSettings::default();
        let mods = ModifierSettings::default();
        let mut ghost = boxed(1, 0.0, 0.0);
        ghost.add_modifier(EffectKind::Ghostly, &mods);
        ghost.velocity.x = 3.0;
        let mut passable = boxed(2, 10.0, 0.0);
        passable.is_ghost_passable = true;

        assert!(!resolve_pair(&mut ghost, &mut passable, &physics));
        assert!(!resolve_pair(&mut passable, &mut ghost, &physics));
        assert_eq!(ghost.velocity.x, 3.0);
        assert_eq!(passable.rect.x, 10.0);

        let mut plain = boxed(3, 10.0, 0.0);
        assert!(resolve_pair(&mut ghost, &mut plain, &physics));
    }

    #[test]
    fn dragged_pairs_are_skipped() {
        let physics = PhysicsSettings::default();
        let mut a = boxed(1, 0.0, 0.0);
        let mut b = boxed(2, 10.0, 0.0);
        b.being_dragged = true;
        assert!(!resolve_pair(&mut a, &mut b, &physics));
    }

    #[test]
    fn all_pairs_visited_in_slice() {
        let physics = PhysicsSettings::default();
        let mut bodies = vec![boxed(1, 0.0, 0.0), boxed(2, 10.0, 0.0), boxed(3, 200.0, 0.0)];
        bodies[0].velocity.x = 2.0;

        resolve_dynamic_pairs(&mut bodies, &physics);

        assert!(!bodies[0].rect.intersects(&bodies[1].rect));
        assert_eq!(bodies[2].rect.x, 200.0);
    }
}
