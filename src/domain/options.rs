//! Body tuning options supplied by items
//!
//! Items pass a partial set of overrides (usually as a JSON object from JS);
//! they are merged over the defaults into a complete `BodyParams`.
//! `label` and `isStatic` are not representable here: the
//! label is always generated by the item and item bodies are always dynamic.

use serde::{Deserialize, Serialize};

pub const DEFAULT_RESTITUTION: f32 = 0.7;
pub const DEFAULT_FRICTION_AIR: f32 = 0.01;
pub const DEFAULT_FRICTION: f32 = 0.1;
pub const DEFAULT_DENSITY: f32 = 0.001;

/// Partial overrides; `None` keeps the default
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BodyOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub restitution: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub friction_air: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub friction: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub density: Option<f32>,
    /// Initial rotation (radians)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub angle: Option<f32>,
}

/// Fully resolved physical parameters for one body
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BodyParams {
    pub restitution: f32,
    pub friction_air: f32,
    pub friction: f32,
    pub density: f32,
    pub angle: f32,
}

impl Default for BodyParams {
    fn default() -> Self {
        Self {
            restitution: DEFAULT_RESTITUTION,
            friction_air: DEFAULT_FRICTION_AIR,
            friction: DEFAULT_FRICTION,
            density: DEFAULT_DENSITY,
            angle: 0.0,
        }
    }
}

impl BodyOptions {
    pub fn from_json(json: &str) -> Result<Self, String> {
        if json.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_json::from_str(json).map_err(|e| format!("invalid body options: {}", e))
    }

    /// Merge over defaults, clamping values into physically sane ranges.
    pub fn resolve(&self) -> BodyParams {
        let d = BodyParams::default();
        BodyParams {
            restitution: self.restitution.unwrap_or(d.restitution).clamp(0.0, 1.0),
            friction_air: self.friction_air.unwrap_or(d.friction_air).clamp(0.0, 1.0),
            friction: self.friction.unwrap_or(d.friction).max(0.0),
            density: positive_or(self.density, d.density),
            angle: self.angle.filter(|a| a.is_finite()).unwrap_or(d.angle),
        }
    }
}

fn positive_or(value: Option<f32>, fallback: f32) -> f32 {
    match value {
        Some(v) if v.is_finite() && v > 0.0 => v,
        _ => fallback,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_overrides_resolve_to_defaults() {
        let params = BodyOptions::default().resolve();
        assert_eq!(params, BodyParams::default());
        assert_eq!(params.restitution, 0.7);
        assert_eq!(params.friction_air, 0.01);
    }

    #[test]
    fn json_overrides_merge_over_defaults() {
        let opts = BodyOptions::from_json(r#"{"restitution":0.2,"frictionAir":0.05}"#).unwrap();
        let params = opts.resolve();
        assert_eq!(params.restitution, 0.2);
        assert_eq!(params.friction_air, 0.05);
        assert_eq!(params.friction, DEFAULT_FRICTION);
        assert_eq!(params.density, DEFAULT_DENSITY);
    }

    #[test]
    fn label_and_static_keys_are_ignored() {
        let opts = BodyOptions::from_json(r#"{"label":"floor","isStatic":true}"#).unwrap();
        assert_eq!(opts, BodyOptions::default());
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(BodyOptions::from_json("{restitution:").is_err());
        assert_eq!(BodyOptions::from_json("  ").unwrap(), BodyOptions::default());
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        let opts = BodyOptions {
            restitution: Some(3.0),
            density: Some(-1.0),
            ..Default::default()
        };
        let params = opts.resolve();
        assert_eq!(params.restitution, 1.0);
        assert_eq!(params.density, DEFAULT_DENSITY);
    }
}
