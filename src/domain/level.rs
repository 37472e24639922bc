//! Level description consumed by the world at load time.

use serde::{Deserialize, Serialize};

use crate::core::LevelError;
use crate::domain::modifiers::EffectKind;

fn default_pushable() -> bool {
    true
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StaticObject {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    #[serde(default)]
    pub color: Option<[u8; 3]>,
    #[serde(default)]
    pub ghost_passable: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DynamicObject {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    #[serde(default)]
    pub color: Option<[u8; 3]>,
    #[serde(default)]
    pub ghost_passable: bool,
    #[serde(default = "default_pushable")]
    pub pushable: bool,
    #[serde(default)]
    pub mass: Option<f32>,
    /// Applied in order when the body spawns.
    #[serde(default)]
    pub modifiers: Vec<EffectKind>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LevelLayout {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub static_objects: Vec<StaticObject>,
    #[serde(default)]
    pub dynamic_objects: Vec<DynamicObject>,
    #[serde(default)]
    pub player_start: Option<Point>,
    /// Top-left corner of the goal.
    #[serde(default)]
    pub goal: Option<Point>,
}

impl LevelLayout {
    pub fn from_json(json: &str) -> Result<Self, LevelError> {
        let layout: LevelLayout = serde_json::from_str(json)?;
        layout.validate()?;
        Ok(layout)
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }

    pub fn validate(&self) -> Result<(), LevelError> {
        for (index, s) in self.static_objects.iter().enumerate() {
            check_rect("static_objects", index, s.x, s.y, s.width, s.height)?;
        }
        for (index, d) in self.dynamic_objects.iter().enumerate() {
            check_rect("dynamic_objects", index, d.x, d.y, d.width, d.height)?;
            if let Some(mass) = d.mass {
                if !mass.is_finite() || mass <= 0.0 {
                    return Err(invalid("dynamic_objects", index, format!("mass must be positive, got {mass}")));
                }
            }
        }
        for (section, point) in [("player_start", self.player_start), ("goal", self.goal)] {
            if let Some(p) = point {
                if !p.x.is_finite() || !p.y.is_finite() {
                    return Err(invalid(section, 0, "position must be finite".to_string()));
                }
            }
        }
        Ok(())
    }
}

fn invalid(section: &'static str, index: usize, reason: String) -> LevelError {
    LevelError::InvalidBody { section, index, reason }
}

fn check_rect(section: &'static str, index: usize, x: f32, y: f32, w: f32, h: f32) -> Result<(), LevelError> {
    if !x.is_finite() || !y.is_finite() {
        return Err(invalid(section, index, "position must be finite".to_string()));
    }
    if !w.is_finite() || w <= 0.0 {
        return Err(invalid(section, index, format!("width must be positive, got {w}")));
    }
    if !h.is_finite() || h <= 0.0 {
        return Err(invalid(section, index, format!("height must be positive, got {h}")));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_level_parses_with_defaults() {
        let layout = LevelLayout::from_json(
            r#"{
                "static_objects": [ { "x": 0, "y": 550, "width": 800, "height": 50 } ],
                "dynamic_objects": [ { "x": 300, "y": 500, "width": 40, "height": 40, "modifiers": ["heavy"] } ]
            }"#,
        )
        .expect("level should parse");

        assert_eq!(layout.static_objects.len(), 1);
        assert!(!layout.static_objects[0].ghost_passable);
        let d = &layout.dynamic_objects[0];
        assert!(d.pushable);
        assert_eq!(d.mass, None);
        assert_eq!(d.modifiers, vec![EffectKind::Heavy]);
        assert_eq!(layout.player_start, None);
    }

    #[test]
    fn zero_width_is_rejected_with_position() {
        let err = LevelLayout::from_json(
            r#"{ "dynamic_objects": [
                { "x": 0, "y": 0, "width": 10, "height": 10 },
                { "x": 0, "y": 0, "width": 0, "height": 10 }
            ] }"#,
        )
        .unwrap_err();

        assert!(matches!(
            err,
            LevelError::InvalidBody { section: "dynamic_objects", index: 1, .. }
        ));
    }

    #[test]
    fn unknown_modifier_is_a_parse_error() {
        let err = LevelLayout::from_json(
            r#"{ "dynamic_objects": [ { "x": 0, "y": 0, "width": 10, "height": 10, "modifiers": ["wobbly"] } ] }"#,
        )
        .unwrap_err();
        assert!(matches!(err, LevelError::Parse(_)));
    }
}
