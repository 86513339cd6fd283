//! Zone configuration
//!
//! Every field is optional in JSON; missing keys fall back to the values the
//! gravity zone has always shipped with.

use serde::{Deserialize, Serialize};

/// Fixed integrator timestep (ms) - 60 Hz
pub const DEFAULT_TIMESTEP_MS: f64 = 1000.0 / 60.0;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ZoneConfig {
    pub gravity_x: f32,
    pub gravity_y: f32,
    /// Multiplier turning gravity into a force per unit mass per ms²
    pub gravity_scale: f32,
    pub timestep_ms: f64,
    /// Catch-up cap: at most this many fixed steps per integrator tick
    pub max_steps_per_tick: u32,
    pub position_iterations: u32,
    pub velocity_iterations: u32,
    pub constraint_iterations: u32,
    pub wall_thickness: f32,
    /// Extra height between the container top and the ceiling wall, so
    /// items spawned above the visible area can fall in
    pub ceiling_clearance: f32,
    pub drag_stiffness: f32,
    pub resize_debounce_ms: f64,
    /// Bodies closer than this to a far edge are considered out of bounds
    pub containment_margin: f32,
    /// Distance from the edge a clamped body is moved back to
    pub containment_inset: f32,
}

impl Default for ZoneConfig {
    fn default() -> Self {
        Self {
            gravity_x: 0.0,
            gravity_y: 1.0,
            gravity_scale: 0.001,
            timestep_ms: DEFAULT_TIMESTEP_MS,
            max_steps_per_tick: 5,
            position_iterations: 6,
            velocity_iterations: 4,
            constraint_iterations: 2,
            wall_thickness: 100.0,
            ceiling_clearance: 1200.0,
            drag_stiffness: 0.2,
            resize_debounce_ms: 200.0,
            containment_margin: 20.0,
            containment_inset: 50.0,
        }
    }
}

impl ZoneConfig {
    pub fn from_json(json: &str) -> Result<Self, String> {
        let config: ZoneConfig =
            serde_json::from_str(json).map_err(|e| format!("invalid zone config: {}", e))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), String> {
        if !(self.timestep_ms.is_finite() && self.timestep_ms > 0.0) {
            return Err(format!("timestepMs must be positive, got {}", self.timestep_ms));
        }
        if self.max_steps_per_tick == 0 {
            return Err("maxStepsPerTick must be at least 1".to_string());
        }
        if !(self.wall_thickness > 0.0) {
            return Err(format!("wallThickness must be positive, got {}", self.wall_thickness));
        }
        if !(0.0..=1.0).contains(&self.drag_stiffness) {
            return Err(format!("dragStiffness must be in [0, 1], got {}", self.drag_stiffness));
        }
        if self.resize_debounce_ms < 0.0 {
            return Err("resizeDebounceMs must not be negative".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_defaults() {
        let config = ZoneConfig::from_json(r#"{"dragStiffness":0.5,"resizeDebounceMs":50}"#).unwrap();
        assert_eq!(config.drag_stiffness, 0.5);
        assert_eq!(config.resize_debounce_ms, 50.0);
        assert_eq!(config.gravity_y, 1.0);
        assert_eq!(config.wall_thickness, 100.0);
    }

    #[test]
    fn rejects_invalid_values() {
        assert!(ZoneConfig::from_json(r#"{"timestepMs":0}"#).is_err());
        assert!(ZoneConfig::from_json(r#"{"dragStiffness":2.0}"#).is_err());
        assert!(ZoneConfig::from_json(r#"{"maxStepsPerTick":0}"#).is_err());
        assert!(ZoneConfig::from_json("not json").is_err());
    }

    #[test]
    fn defaults_validate() {
        assert!(ZoneConfig::default().validate().is_ok());
    }
}
