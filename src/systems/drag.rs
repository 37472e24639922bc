//! Drag Controller - pointer-driven repositioning of draggable bodies

use crate::body::{Body, BodyId, Vec2};

#[derive(Clone, Copy, Debug, PartialEq)]
struct Grab {
    body: BodyId,
    /// Pointer position relative to the body's top-left corner.
    offset: Vec2,
}

/// At most one body is dragged at a time.
#[derive(Clone, Debug, Default)]
pub struct DragController {
    grab: Option<Grab>,
    pointer: Vec2,
}

impl DragController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dragged(&self) -> Option<BodyId> {
        self.grab.map(|g| g.body)
    }

    pub fn update_pointer(&mut self, x: f32, y: f32) {
        self.pointer = Vec2::new(x, y);
    }

    /// Grab `body` at the pointer. Fails unless the body is draggable and
    /// the point lies inside it. The caller releases any previous grab.
    pub fn start(&mut self, body: &mut Body, x: f32, y: f32) -> bool {
        if !body.is_draggable || !body.rect.contains_point(x, y) {
            return false;
        }

        self.pointer = Vec2::new(x, y);
        self.grab = Some(Grab {
            body: body.id,
            offset: self.pointer - body.rect.pos(),
        });
        body.being_dragged = true;
        body.on_ground = false;
        body.velocity = Vec2::zero();
        log::debug!("drag start {:?}", body.id);
        true
    }

    /// Move the grabbed body under the pointer. Called once per tick.
    pub fn follow(&self, body: &mut Body) {
        let Some(grab) = self.grab else { return };
        if grab.body != body.id {
            return;
        }
        let pos = self.pointer - grab.offset;
        body.rect.x = pos.x;
        body.rect.y = pos.y;
        body.velocity = Vec2::zero();
    }

    /// Let go of `body` if it is the one being dragged. Velocity is zeroed
    /// and the body is airborne, so gravity resumes from rest next tick.
    pub fn stop(&mut self, body: &mut Body) -> bool {
        if self.dragged() != Some(body.id) {
            return false;
        }
        self.grab = None;
        body.being_dragged = false;
        body.on_ground = false;
        body.velocity = Vec2::zero();
        log::debug!("drag stop {:?}", body.id);
        true
    }

    /// Forget the grab without touching any body (level teardown).
    pub fn clear(&mut self) -> Option<BodyId> {
        self.grab.take().map(|g| g.body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::body::{BodyRole, Rect};

    fn draggable() -> Body {
        let mut b = Body::new(BodyId(4), BodyRole::Dynamic, Rect::new(100.0, 100.0, 40.0, 40.0));
        b.is_draggable = true;
        b.velocity = Vec2::new(3.0, 2.0);
        b
    }

    #[test]
    fn start_requires_draggable_and_hit() {
        let mut drag = DragController::new();
        let mut b = draggable();
        assert!(!drag.start(&mut b, 10.0, 10.0));

        b.is_draggable = false;
        assert!(!drag.start(&mut b, 120.0, 120.0));
        assert_eq!(drag.dragged(), None);
    }

    #[test]
    fn follow_keeps_grab_offset() {
        let mut drag = DragController::new();
        let mut b = draggable();
        assert!(drag.start(&mut b, 110.0, 120.0));
        assert!(b.being_dragged);
        assert_eq!(b.velocity, Vec2::zero());

        drag.update_pointer(210.0, 50.0);
        drag.follow(&mut b);

        assert_eq!(b.rect.pos(), Vec2::new(200.0, 30.0));
    }

    #[test]
    fn grabbing_a_grounded_body_lifts_it() {
        let mut drag = DragController::new();
        let mut b = draggable();
        b.on_ground = true;

        assert!(drag.start(&mut b, 110.0, 120.0));
        assert!(!b.on_ground);
    }

    #[test]
    fn stop_releases_with_zero_velocity() {
        let mut drag = DragController::new();
        let mut b = draggable();
        drag.start(&mut b, 110.0, 120.0);
        b.velocity = Vec2::new(9.0, 9.0);

        assert!(drag.stop(&mut b));
        assert!(!b.being_dragged);
        assert_eq!(b.velocity, Vec2::zero());
        assert!(!drag.stop(&mut b));
    }
}
