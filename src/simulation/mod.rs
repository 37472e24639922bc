//! World - single-threaded, frame-stepped physics world
//!
//! `WorldCore` owns every body and the injected config, and only
//! orchestrates: each tick delegates to the systems in a fixed order.
//!
//! - drag      - dragged body follows the pointer
//! - integrate - player input, gravity, velocity
//! - collision - every body against static geometry
//! - interact  - box vs. box, then player vs. box
//! - bounds    - world edges
//!
//! Mallet actions, pointer handling and level loading live in their own
//! files and act on the world between ticks.

use crate::body::{Body, BodyId};
use crate::core::{Clock, ConfigError, LevelError};
use crate::domain::config::PhysicsConfig;
use crate::domain::level::LevelLayout;
use crate::domain::modifiers::EffectKind;
use crate::systems::drag::DragController;
use crate::systems::player_control::PlayerControl;

#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
#[path = "level/level.rs"]
mod level;
#[path = "spawn/spawn.rs"]
mod spawn;
#[path = "step/step.rs"]
mod step;
#[path = "commands/commands.rs"]
mod commands;
#[path = "render/render_extract.rs"]
mod render_extract;
mod facade;

pub use facade::World;
pub use render_extract::BodyView;

/// The simulation world
pub struct WorldCore {
    config: PhysicsConfig,
    clock: Box<dyn Clock>,

    // Bodies, in registration order
    statics: Vec<Body>,
    dynamics: Vec<Body>,
    player: Body,
    goal: Option<Body>,

    control: PlayerControl,
    drag: DragController,

    /// Last loaded level, rebuilt on reset
    layout: Option<LevelLayout>,

    // State
    next_id: u32,
    frame: u64,
}

impl WorldCore {
    /// Empty world (default player only) with a real-time clock.
    pub fn new(config: PhysicsConfig) -> Self {
        init::create_world_core(config)
    }

    /// Empty world reading time from `clock`.
    pub fn with_clock(config: PhysicsConfig, clock: Box<dyn Clock>) -> Self {
        init::create_world_core_with_clock(config, clock)
    }

    pub fn width(&self) -> f32 { self.config.world.width }

    pub fn height(&self) -> f32 { self.config.world.height }

    pub fn frame(&self) -> u64 { self.frame }

    pub fn config(&self) -> &PhysicsConfig { &self.config }

    // === Settings ===

    pub fn set_gravity(&mut self, gravity: f32) {
        settings::set_gravity(self, gravity);
    }

    pub fn set_world_size(&mut self, width: f32, height: f32) {
        settings::set_world_size(self, width, height);
    }

    /// Replace the whole config. Invalid configs are rejected and the
    /// current one is kept.
    pub fn set_config(&mut self, config: PhysicsConfig) -> Result<(), ConfigError> {
        settings::set_config(self, config)
    }

    // === Level ===

    pub fn load_level(&mut self, layout: LevelLayout) -> Result<(), LevelError> {
        level::load_level(self, layout)
    }

    pub fn load_level_json(&mut self, json: &str) -> Result<(), LevelError> {
        level::load_level_json(self, json)
    }

    /// Rebuild the last loaded level from scratch.
    pub fn reset_level(&mut self) {
        level::reset_level(self);
    }

    /// Drop every body and respawn a default player.
    pub fn clear(&mut self) {
        level::clear(self);
    }

    // === Spawning ===

    pub fn spawn_static(&mut self, x: f32, y: f32, w: f32, h: f32) -> BodyId {
        spawn::spawn_static(self, x, y, w, h)
    }

    pub fn spawn_dynamic(&mut self, x: f32, y: f32, w: f32, h: f32) -> BodyId {
        spawn::spawn_dynamic(self, x, y, w, h)
    }

    pub fn set_goal(&mut self, x: f32, y: f32) -> BodyId {
        spawn::set_goal(self, x, y)
    }

    pub fn place_player(&mut self, x: f32, y: f32) {
        spawn::place_player(self, x, y);
    }

    // === Simulation ===

    /// Advance the world by one frame.
    pub fn step(&mut self) {
        step::step(self);
    }

    // === Player & mallet ===

    pub fn set_player_input(&mut self, move_dir: i8, jump: bool) {
        self.control.set_input(move_dir, jump);
    }

    pub fn control(&self) -> &PlayerControl { &self.control }

    pub fn control_mut(&mut self) -> &mut PlayerControl { &mut self.control }

    /// Toggle `kind` on `target`. Returns whether anything changed.
    pub fn attempt_mallet_use(&mut self, target: BodyId, kind: EffectKind) -> bool {
        commands::attempt_mallet_use(self, target, kind)
    }

    /// Apply the selected modifier to the closest body near the pointer.
    pub fn use_mallet_at(&mut self, x: f32, y: f32) -> bool {
        commands::use_mallet_at(self, x, y)
    }

    pub fn mallet_cooldown_remaining(&self) -> f64 {
        commands::mallet_cooldown_remaining(self)
    }

    // === Pointer & drag ===

    pub fn start_drag(&mut self, id: BodyId, x: f32, y: f32) -> bool {
        commands::start_drag(self, id, x, y)
    }

    pub fn update_pointer(&mut self, x: f32, y: f32) {
        self.drag.update_pointer(x, y);
    }

    /// Release `id` if it is the body being dragged.
    pub fn stop_drag(&mut self, id: BodyId) -> bool {
        self.drag.dragged() == Some(id) && commands::release_drag(self)
    }

    pub fn dragged(&self) -> Option<BodyId> {
        self.drag.dragged()
    }

    /// Drag whatever draggable body is under the pointer, else swing the mallet.
    pub fn pointer_down(&mut self, x: f32, y: f32) -> bool {
        commands::pointer_down(self, x, y)
    }

    pub fn pointer_up(&mut self) {
        commands::release_drag(self);
    }

    // === Queries ===

    pub fn player(&self) -> &Body { &self.player }

    pub fn player_id(&self) -> BodyId { self.player.id }

    pub fn statics(&self) -> &[Body] { &self.statics }

    pub fn dynamics(&self) -> &[Body] { &self.dynamics }

    pub fn goal(&self) -> Option<&Body> { self.goal.as_ref() }

    pub fn body(&self, id: BodyId) -> Option<&Body> {
        if self.player.id == id {
            return Some(&self.player);
        }
        self.dynamics
            .iter()
            .chain(self.statics.iter())
            .chain(self.goal.iter())
            .find(|b| b.id == id)
    }

    /// Mutable access to the player or a dynamic body.
    pub fn body_mut(&mut self, id: BodyId) -> Option<&mut Body> {
        find_movable(&mut self.player, &mut self.dynamics, id)
    }

    pub fn reached_goal(&self) -> bool {
        render_extract::reached_goal(self)
    }

    pub fn body_views(&self) -> Vec<BodyView> {
        render_extract::body_views(self)
    }

    pub fn body_views_json(&self) -> String {
        render_extract::body_views_json(self)
    }

    fn alloc_id(&mut self) -> BodyId {
        let id = BodyId(self.next_id);
        self.next_id += 1;
        id
    }
}

/// The player or a dynamic body by id. Takes the two fields separately so
/// callers can keep other parts of the world borrowed.
fn find_movable<'a>(player: &'a mut Body, dynamics: &'a mut [Body], id: BodyId) -> Option<&'a mut Body> {
    if player.id == id {
        return Some(player);
    }
    dynamics.iter_mut().find(|b| b.id == id)
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
