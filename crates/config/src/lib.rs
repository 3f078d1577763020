//! Shared configuration for Topobrush
//!
//! This crate provides the single source of truth for the viewport size,
//! the initial camera placement, and the brush defaults used by the painting
//! core and the application entry point.

use serde::{Deserialize, Serialize};
use tracing::warn;

/// Default viewport width in pixels
pub const DEFAULT_WIDTH: u32 = 640;

/// Default viewport height in pixels
pub const DEFAULT_HEIGHT: u32 = 480;

/// Default vertical field of view in degrees
pub const DEFAULT_FOV_DEGREES: f32 = 70.0;

/// Default near clip distance
pub const DEFAULT_NEAR: f32 = 0.00005;

/// Default far clip distance
pub const DEFAULT_FAR: f32 = 10.0;

/// Default topological brush radius (expansion rounds)
pub const DEFAULT_RADIUS: i32 = 15;

/// Minimum pointer travel in pixels before a drag is sampled again
pub const DEFAULT_DRAG_THRESHOLD: f32 = 20.0;

/// Color written by the brush in paint mode
pub const DEFAULT_PAINT_COLOR: [f32; 3] = [1.0, 0.5, 0.0];

/// Unpainted vertex color, also written by the brush in erase mode
pub const DEFAULT_BACKGROUND_COLOR: [f32; 3] = [1.0, 1.0, 1.0];

/// Uniform scale applied to a loaded mesh after centering
pub const DEFAULT_MESH_SCALE: f32 = 5.0;

/// Environment variable overriding [`BrushConfig::radius`]
pub const ENV_RADIUS: &str = "TOPOBRUSH_RADIUS";
/// Environment variable overriding [`BrushConfig::drag_threshold`]
pub const ENV_DRAG_THRESHOLD: &str = "TOPOBRUSH_DRAG_THRESHOLD";
/// Environment variable overriding [`DisplayConfig::width`]
pub const ENV_WIDTH: &str = "TOPOBRUSH_WIDTH";
/// Environment variable overriding [`DisplayConfig::height`]
pub const ENV_HEIGHT: &str = "TOPOBRUSH_HEIGHT";
/// Environment variable overriding [`MeshConfig::scale`]
pub const ENV_MESH_SCALE: &str = "TOPOBRUSH_MESH_SCALE";

/// Display configuration for the viewport
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Viewport width in pixels
    pub width: u32,
    /// Viewport height in pixels
    pub height: u32,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
        }
    }
}

impl DisplayConfig {
    /// Create a new display config with the given dimensions
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// Initial camera placement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CameraConfig {
    pub position: [f32; 3],
    pub target: [f32; 3],
    pub up: [f32; 3],
    /// Vertical field of view in degrees
    pub fov_degrees: f32,
    pub near: f32,
    pub far: f32,
    /// Distance of the camera from the origin after normalization
    pub zoom: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            position: [1.0, 1.0, 1.0],
            target: [0.0, 0.0, 0.0],
            up: [0.0, 1.0, 0.0],
            fov_degrees: DEFAULT_FOV_DEGREES,
            near: DEFAULT_NEAR,
            far: DEFAULT_FAR,
            zoom: 1.0,
        }
    }
}

/// Brush defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrushConfig {
    /// Initial topological radius; may be adjusted below zero at runtime
    pub radius: i32,
    /// Pointer travel in pixels required between two samples of a drag
    pub drag_threshold: f32,
    pub paint_color: [f32; 3],
    pub background_color: [f32; 3],
}

impl Default for BrushConfig {
    fn default() -> Self {
        Self {
            radius: DEFAULT_RADIUS,
            drag_threshold: DEFAULT_DRAG_THRESHOLD,
            paint_color: DEFAULT_PAINT_COLOR,
            background_color: DEFAULT_BACKGROUND_COLOR,
        }
    }
}

/// Load-time mesh preparation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeshConfig {
    /// Uniform scale about the origin, applied once the mesh is centered
    pub scale: f32,
}

impl Default for MeshConfig {
    fn default() -> Self {
        Self {
            scale: DEFAULT_MESH_SCALE,
        }
    }
}

/// Complete Topobrush configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TopobrushConfig {
    pub display: DisplayConfig,
    pub camera: CameraConfig,
    pub brush: BrushConfig,
    pub mesh: MeshConfig,
}

impl TopobrushConfig {
    /// Defaults with `TOPOBRUSH_*` environment overrides applied
    pub fn from_env() -> Self {
        let mut config = Self::default();
        config.apply_overrides(|key| std::env::var(key).ok());
        config
    }

    /// Apply overrides from a key lookup.
    ///
    /// Values that fail to parse are reported and leave the current value
    /// untouched.
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(radius) = parse_override(&lookup, ENV_RADIUS) {
            self.brush.radius = radius;
        }
        if let Some(threshold) = parse_override::<f32>(&lookup, ENV_DRAG_THRESHOLD) {
            if threshold.is_finite() && threshold >= 0.0 {
                self.brush.drag_threshold = threshold;
            } else {
                warn!("{} must be a non-negative number, got {}", ENV_DRAG_THRESHOLD, threshold);
            }
        }
        if let Some(width) = parse_override::<u32>(&lookup, ENV_WIDTH) {
            self.display.width = width.max(1);
        }
        if let Some(height) = parse_override::<u32>(&lookup, ENV_HEIGHT) {
            self.display.height = height.max(1);
        }
        if let Some(scale) = parse_override::<f32>(&lookup, ENV_MESH_SCALE) {
            if scale.is_finite() && scale > 0.0 {
                self.mesh.scale = scale;
            } else {
                warn!("{} must be a positive number, got {}", ENV_MESH_SCALE, scale);
            }
        }
    }
}

fn parse_override<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
) -> Option<T> {
    let raw = lookup(key)?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            warn!("Ignoring {}={:?}: not a valid value", key, raw);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = TopobrushConfig::default();
        assert_eq!(config.display.width, DEFAULT_WIDTH);
        assert_eq!(config.display.height, DEFAULT_HEIGHT);
        assert_eq!(config.brush.radius, DEFAULT_RADIUS);
        assert_eq!(config.brush.drag_threshold, DEFAULT_DRAG_THRESHOLD);
        assert_eq!(config.camera.fov_degrees, DEFAULT_FOV_DEGREES);
        assert_eq!(config.mesh.scale, 5.0);
    }

    #[test]
    fn test_mesh_scale_override() {
        let mut config = TopobrushConfig::default();
        config.apply_overrides(lookup(&[(ENV_MESH_SCALE, "2.5")]));
        assert_eq!(config.mesh.scale, 2.5);

        config.apply_overrides(lookup(&[(ENV_MESH_SCALE, "0")]));
        assert_eq!(config.mesh.scale, 2.5);
        config.apply_overrides(lookup(&[(ENV_MESH_SCALE, "-1")]));
        assert_eq!(config.mesh.scale, 2.5);
    }

    #[test]
    fn test_overrides_applied() {
        let mut config = TopobrushConfig::default();
        config.apply_overrides(lookup(&[
            (ENV_RADIUS, "-3"),
            (ENV_DRAG_THRESHOLD, "5.5"),
            (ENV_WIDTH, "800"),
            (ENV_HEIGHT, "600"),
        ]));
        assert_eq!(config.brush.radius, -3);
        assert_eq!(config.brush.drag_threshold, 5.5);
        assert_eq!(config.display, DisplayConfig::new(800, 600));
    }

    #[test]
    fn test_invalid_overrides_ignored() {
        let mut config = TopobrushConfig::default();
        config.apply_overrides(lookup(&[
            (ENV_RADIUS, "wide"),
            (ENV_DRAG_THRESHOLD, "-1"),
            (ENV_WIDTH, ""),
        ]));
        assert_eq!(config, TopobrushConfig::default());
    }

    #[test]
    fn test_zero_dimensions_clamped() {
        let mut config = TopobrushConfig::default();
        config.apply_overrides(lookup(&[(ENV_WIDTH, "0"), (ENV_HEIGHT, "0")]));
        assert_eq!(config.display, DisplayConfig::new(1, 1));
    }

    #[test]
    fn test_serde_round_trip() {
        let config = TopobrushConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let parsed: TopobrushConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }
}
