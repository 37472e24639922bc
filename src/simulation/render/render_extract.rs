use serde::Serialize;

use crate::body::{Body, BodyRole};
use crate::domain::modifiers::EffectKind;

use super::WorldCore;

/// Flat per-body snapshot handed to the renderer.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BodyView {
    pub id: u32,
    pub role: BodyRole,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub color: [u8; 3],
    pub alpha: u8,
    /// Outline of the most recently applied modifier, if any
    pub outline: Option<[u8; 3]>,
    pub dragged: bool,
    pub on_ground: bool,
    pub modifiers: Vec<EffectKind>,
}

impl From<&Body> for BodyView {
    fn from(body: &Body) -> Self {
        Self {
            id: body.id.0,
            role: body.role,
            x: body.rect.x,
            y: body.rect.y,
            width: body.rect.w,
            height: body.rect.h,
            color: body.color,
            alpha: body.alpha,
            outline: body.modifier_kinds().last().map(|k| k.color()),
            dragged: body.being_dragged,
            on_ground: body.on_ground,
            modifiers: body.modifier_kinds(),
        }
    }
}

/// Draw order: statics, goal, dynamics, player on top.
pub(super) fn body_views(world: &WorldCore) -> Vec<BodyView> {
    world
        .statics
        .iter()
        .chain(world.goal.iter())
        .chain(world.dynamics.iter())
        .chain(std::iter::once(&world.player))
        .map(BodyView::from)
        .collect()
}

pub(super) fn body_views_json(world: &WorldCore) -> String {
    serde_json::to_string(&body_views(world)).unwrap_or_else(|_| "[]".to_string())
}

pub(super) fn reached_goal(world: &WorldCore) -> bool {
    world
        .goal
        .as_ref()
        .is_some_and(|goal| world.player.rect.intersects(&goal.rect))
}
