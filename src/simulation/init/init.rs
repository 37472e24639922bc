use crate::body::{Body, BodyId, BodyRole, Rect};
use crate::core::{Clock, MonotonicClock};
use crate::domain::config::PhysicsConfig;
use crate::domain::level::Point;
use crate::systems::drag::DragController;
use crate::systems::player_control::PlayerControl;

use super::WorldCore;

/// Id reserved for the player in every level.
pub(super) const PLAYER_ID: BodyId = BodyId(0);

pub(super) fn create_world_core(config: PhysicsConfig) -> WorldCore {
    create_world_core_with_clock(config, Box::new(MonotonicClock::new()))
}

pub(super) fn create_world_core_with_clock(config: PhysicsConfig, clock: Box<dyn Clock>) -> WorldCore {
    let player = new_player(&config, None);
    WorldCore {
        config,
        clock,
        statics: Vec::new(),
        dynamics: Vec::new(),
        player,
        goal: None,
        control: PlayerControl::new(),
        drag: DragController::new(),
        layout: None,
        next_id: PLAYER_ID.0 + 1,
        frame: 0,
    }
}

/// Player body at `start` (top-left), or the default spawn point.
pub(super) fn new_player(config: &PhysicsConfig, start: Option<Point>) -> Body {
    let p = &config.player;
    let (x, y) = match start {
        Some(s) => (s.x, s.y),
        None => (50.0, config.world.height - 100.0),
    };

    let mut body = Body::new(PLAYER_ID, BodyRole::Player, Rect::new(x, y, p.width, p.height));
    body.mass = p.mass;
    body.color = [0, 0, 255];
    body
}
