//! Player control state: movement input, selected modifier and mallet cooldown

use crate::body::{Body, BodyId};
use crate::domain::config::PlayerSettings;
use crate::domain::modifiers::EffectKind;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PlayerInput {
    /// -1 left, 0 none, +1 right
    pub move_dir: i8,
    pub jump: bool,
}

#[derive(Clone, Debug)]
pub struct PlayerControl {
    input: PlayerInput,
    facing_right: bool,
    selected: usize,
    last_mallet_use: Option<f64>,
    standing_on: Option<BodyId>,
}

impl Default for PlayerControl {
    fn default() -> Self {
        Self::new()
    }
}

impl PlayerControl {
    pub fn new() -> Self {
        Self {
            input: PlayerInput::default(),
            facing_right: true,
            selected: 0,
            last_mallet_use: None,
            standing_on: None,
        }
    }

    /// Back to spawn state. The selected modifier survives a level reset.
    pub fn reset(&mut self) {
        let selected = self.selected;
        *self = Self::new();
        self.selected = selected;
    }

    pub fn input(&self) -> PlayerInput {
        self.input
    }

    pub fn set_input(&mut self, move_dir: i8, jump: bool) {
        self.input = PlayerInput { move_dir: move_dir.signum(), jump };
    }

    pub fn facing_right(&self) -> bool {
        self.facing_right
    }

    pub fn standing_on(&self) -> Option<BodyId> {
        self.standing_on
    }

    pub fn set_standing_on(&mut self, id: Option<BodyId>) {
        self.standing_on = id;
    }

    /// Turn input into velocity. Runs before integration.
    pub fn apply_input(&mut self, body: &mut Body, settings: &PlayerSettings) {
        if body.being_dragged {
            return;
        }

        let accel = if body.on_ground { settings.acceleration } else { settings.air_acceleration };
        let vx = &mut body.velocity.x;
        match self.input.move_dir {
            d if d < 0 => {
                *vx = (*vx - accel).max(-settings.max_speed);
                self.facing_right = false;
            }
            d if d > 0 => {
                *vx = (*vx + accel).min(settings.max_speed);
                self.facing_right = true;
            }
            _ => {
                if *vx > 0.0 {
                    *vx = (*vx - settings.deceleration).max(0.0);
                } else if *vx < 0.0 {
                    *vx = (*vx + settings.deceleration).min(0.0);
                }
            }
        }

        if self.input.jump && body.on_ground {
            body.velocity.y = settings.jump_force;
            body.on_ground = false;
        }
    }

    // === Modifier selection ===

    pub fn selected_kind(&self) -> EffectKind {
        EffectKind::ALL[self.selected % EffectKind::ALL.len()]
    }

    pub fn select(&mut self, kind: EffectKind) {
        self.selected = kind.id() as usize;
    }

    pub fn cycle_next(&mut self) -> EffectKind {
        self.selected = (self.selected + 1) % EffectKind::ALL.len();
        self.selected_kind()
    }

    pub fn cycle_prev(&mut self) -> EffectKind {
        let n = EffectKind::ALL.len();
        self.selected = (self.selected + n - 1) % n;
        self.selected_kind()
    }

    // === Mallet cooldown ===

    pub fn cooldown_remaining(&self, now: f64, cooldown: f64) -> f64 {
        match self.last_mallet_use {
            Some(t) => (cooldown - (now - t)).max(0.0),
            None => 0.0,
        }
    }

    pub fn cooldown_ready(&self, now: f64, cooldown: f64) -> bool {
        self.cooldown_remaining(now, cooldown) <= 0.0
    }

    pub fn mark_mallet_use(&mut self, now: f64) {
        self.last_mallet_use = Some(now);
    }
}
