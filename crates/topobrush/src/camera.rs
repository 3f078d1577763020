//! Pure-data camera used to build picking rays.
//!
//! The camera orbits the origin: `update` rescales the position so its
//! distance from the origin equals the zoom factor.

use glam::{Mat4, Vec3};
use topobrush_config::{CameraConfig, DisplayConfig};
use tracing::debug;

use crate::constants::{ZOOM_IN_MAX_FOV, ZOOM_OUT_MIN_FOV, ZOOM_STEP};

#[derive(Debug, Clone, PartialEq)]
pub struct CameraState {
    pub position: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    /// Vertical field of view in degrees
    pub fov_degrees: f32,
    pub near: f32,
    pub far: f32,
    pub zoom: f32,
    /// Viewport width in pixels
    pub width: u32,
    /// Viewport height in pixels
    pub height: u32,
}

impl Default for CameraState {
    fn default() -> Self {
        Self::from_config(&CameraConfig::default(), &DisplayConfig::default())
    }
}

impl CameraState {
    /// Build a camera from configuration and apply the initial zoom.
    pub fn from_config(camera: &CameraConfig, display: &DisplayConfig) -> Self {
        let mut state = Self {
            position: Vec3::from_array(camera.position),
            target: Vec3::from_array(camera.target),
            up: Vec3::from_array(camera.up),
            fov_degrees: camera.fov_degrees,
            near: camera.near,
            far: camera.far,
            zoom: camera.zoom,
            width: display.width.max(1),
            height: display.height.max(1),
        };
        state.update();
        state
    }

    /// Camera at `position` looking at `target` without orbit normalization.
    pub fn looking_at(position: Vec3, target: Vec3, up: Vec3, width: u32, height: u32) -> Self {
        Self {
            position,
            target,
            up,
            zoom: position.length(),
            width: width.max(1),
            height: height.max(1),
            ..Self::default()
        }
    }

    /// Place the camera at distance `zoom` from the origin along its current
    /// direction.
    pub fn update(&mut self) {
        self.position = self.zoom * self.position.normalize_or_zero();
    }

    /// Apply a scroll step. Positive deltas zoom in, negative deltas zoom out.
    pub fn zoom_by(&mut self, delta_y: f32) {
        if delta_y > 0.0 && self.fov_degrees < ZOOM_IN_MAX_FOV {
            self.zoom *= 1.0 + ZOOM_STEP;
        } else if delta_y < 0.0 && self.fov_degrees > ZOOM_OUT_MIN_FOV {
            self.zoom *= 1.0 - ZOOM_STEP;
        } else {
            return;
        }
        self.update();
        debug!("CameraState::zoom_by: zoom={:.3}", self.zoom);
    }

    /// Store a new viewport size.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = width.max(1);
        self.height = height.max(1);
    }

    /// Width over height
    pub fn aspect(&self) -> f32 {
        self.width as f32 / self.height as f32
    }

    /// Right-handed look-at view matrix
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.target, self.up)
    }

    /// Camera-to-world transform
    pub fn inverse_view(&self) -> Mat4 {
        self.view_matrix().inverse()
    }

    /// Right-handed OpenGL-style perspective projection
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh_gl(self.fov_degrees.to_radians(), self.aspect(), self.near, self.far)
    }
}
