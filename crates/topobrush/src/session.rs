//! Painting session state
//!
//! A [`Session`] owns everything a brush interaction reads or mutates: the
//! mesh topology, camera, model transform, accumulated selection, and the
//! per-vertex color buffer. The application entry point owns the session and
//! lends it to the [`crate::brush::BrushController`] for each event.

use std::collections::BTreeSet;

use glam::{Mat4, Vec3};
use topobrush_config::TopobrushConfig;
use tracing::info;

use crate::camera::CameraState;
use crate::color::ColorBuffer;
use crate::raycast::RayPicker;
use crate::region::RegionSelector;
use crate::topology::MeshTopology;
use crate::types::{PickHit, TriangleId, VertexColor};
use crate::validation::MeshError;

pub struct Session {
    topology: MeshTopology,
    camera: CameraState,
    /// Mesh model-to-world transform
    model: Mat4,
    selector: RegionSelector,
    colors: ColorBuffer,
}

impl Session {
    /// Build the session for a loaded mesh.
    ///
    /// Fails with an invalid-mesh error if the arrays are empty or
    /// inconsistent; the session cannot run without topology.
    pub fn new(
        positions: Vec<Vec3>,
        triangles: Vec<u32>,
        config: &TopobrushConfig,
    ) -> Result<Self, MeshError> {
        let topology = MeshTopology::new(positions, triangles)?;
        let colors = ColorBuffer::new(
            topology.vertex_count(),
            VertexColor::from(config.brush.background_color),
        );

        info!(
            "Session ready: {} vertices, {} triangles",
            topology.vertex_count(),
            topology.triangle_count()
        );

        Ok(Self {
            topology,
            camera: CameraState::from_config(&config.camera, &config.display),
            model: Mat4::IDENTITY,
            selector: RegionSelector::new(),
            colors,
        })
    }

    /// Replace the camera.
    pub fn with_camera(mut self, camera: CameraState) -> Self {
        self.camera = camera;
        self
    }

    pub fn topology(&self) -> &MeshTopology {
        &self.topology
    }

    pub fn camera(&self) -> &CameraState {
        &self.camera
    }

    pub fn camera_mut(&mut self) -> &mut CameraState {
        &mut self.camera
    }

    pub fn set_model(&mut self, model: Mat4) {
        self.model = model;
    }

    pub fn selector(&self) -> &RegionSelector {
        &self.selector
    }

    pub fn colors(&self) -> &ColorBuffer {
        &self.colors
    }

    pub fn colors_mut(&mut self) -> &mut ColorBuffer {
        &mut self.colors
    }

    /// Nearest triangle under a pixel
    pub fn pick(&self, screen_x: f32, screen_y: f32) -> Option<PickHit> {
        RayPicker::for_topology(&self.topology)
            .with_model(self.model)
            .pick(&self.camera, screen_x, screen_y)
    }

    /// Grow a region around `seed` and record it in the session selection.
    pub fn expand(
        &mut self,
        seed: TriangleId,
        radius: i32,
    ) -> Result<BTreeSet<TriangleId>, MeshError> {
        self.selector.expand(&self.topology, seed, radius)
    }

    /// Color the vertices of `triangles`.
    pub fn paint(
        &mut self,
        triangles: &BTreeSet<TriangleId>,
        color: VertexColor,
    ) -> Result<(), MeshError> {
        self.colors.paint_triangles(&self.topology, triangles, color)
    }
}
