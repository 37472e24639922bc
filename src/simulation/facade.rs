use wasm_bindgen::prelude::*;

use crate::body::BodyId;
use crate::domain::config::PhysicsConfig;
use crate::domain::modifiers::EffectKind;

use super::WorldCore;

#[wasm_bindgen]
pub struct World {
    core: WorldCore,
}

#[wasm_bindgen]
impl World {
    /// Create an empty world with default settings
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            core: WorldCore::new(PhysicsConfig::default()),
        }
    }

    /// Create an empty world from a (possibly partial) JSON config
    #[wasm_bindgen(js_name = withConfig)]
    pub fn with_config(json: String) -> Result<World, JsValue> {
        let config = PhysicsConfig::from_json(&json).map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(Self {
            core: WorldCore::new(config),
        })
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> f32 { self.core.width() }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> f32 { self.core.height() }

    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 { self.core.frame() }

    #[wasm_bindgen(getter)]
    pub fn player_id(&self) -> u32 { self.core.player_id().0 }

    pub fn set_gravity(&mut self, gravity: f32) {
        self.core.set_gravity(gravity);
    }

    pub fn set_world_size(&mut self, width: f32, height: f32) {
        self.core.set_world_size(width, height);
    }

    pub fn config_json(&self) -> String {
        self.core.config().to_json()
    }

    pub fn set_config_json(&mut self, json: String) -> Result<(), JsValue> {
        let config = PhysicsConfig::from_json(&json).map_err(|e| JsValue::from_str(&e.to_string()))?;
        self.core
            .set_config(config)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(())
    }

    // === LEVEL API ===

    pub fn load_level(&mut self, json: String) -> Result<(), JsValue> {
        self.core
            .load_level_json(&json)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(())
    }

    pub fn reset_level(&mut self) {
        self.core.reset_level();
    }

    pub fn clear(&mut self) {
        self.core.clear();
    }

    pub fn reached_goal(&self) -> bool {
        self.core.reached_goal()
    }

    /// Step the simulation forward one frame
    pub fn step(&mut self) {
        self.core.step();
    }

    // === PLAYER API ===

    /// `move_dir`: -1 left, 0 none, 1 right
    pub fn set_player_input(&mut self, move_dir: i8, jump: bool) {
        self.core.set_player_input(move_dir, jump);
    }

    /// Cycle the selected modifier; returns the new kind id
    pub fn cycle_modifier(&mut self, forward: bool) -> u8 {
        let control = self.core.control_mut();
        let kind = if forward { control.cycle_next() } else { control.cycle_prev() };
        kind.id()
    }

    pub fn selected_modifier(&self) -> u8 {
        self.core.control().selected_kind().id()
    }

    pub fn select_modifier(&mut self, kind: u8) -> bool {
        match EffectKind::from_id(kind) {
            Some(kind) => {
                self.core.control_mut().select(kind);
                true
            }
            None => false,
        }
    }

    // === MALLET API ===

    pub fn attempt_mallet_use(&mut self, target: u32, kind: u8) -> bool {
        match EffectKind::from_id(kind) {
            Some(kind) => self.core.attempt_mallet_use(BodyId(target), kind),
            None => false,
        }
    }

    pub fn use_mallet_at(&mut self, x: f32, y: f32) -> bool {
        self.core.use_mallet_at(x, y)
    }

    pub fn mallet_cooldown_remaining(&self) -> f64 {
        self.core.mallet_cooldown_remaining()
    }

    // === POINTER API ===

    pub fn pointer_down(&mut self, x: f32, y: f32) -> bool {
        self.core.pointer_down(x, y)
    }

    pub fn pointer_move(&mut self, x: f32, y: f32) {
        self.core.update_pointer(x, y);
    }

    pub fn pointer_up(&mut self) {
        self.core.pointer_up();
    }

    pub fn start_drag(&mut self, id: u32, x: f32, y: f32) -> bool {
        self.core.start_drag(BodyId(id), x, y)
    }

    pub fn stop_drag(&mut self, id: u32) -> bool {
        self.core.stop_drag(BodyId(id))
    }

    // === RENDER API ===

    /// JSON array of body snapshots in draw order
    pub fn body_views_json(&self) -> String {
        self.core.body_views_json()
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}
