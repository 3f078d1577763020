//! Screen-space picking against a triangle mesh.
//!
//! This module builds a world-space ray from a pointer position and camera
//! state, then finds the nearest triangle it strikes using the Moller-Trumbore
//! algorithm.

use glam::{Mat4, Vec2, Vec3};
use tracing::{debug, trace};

use crate::camera::CameraState;
use crate::constants::{RAY_EPSILON, SLOTS_PER_TRIANGLE};
use crate::topology::MeshTopology;
use crate::types::{PickHit, TriangleId};

/// A world-space ray
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    /// Unit direction
    pub direction: Vec3,
}

impl Ray {
    /// Point at parametric distance `t`
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }
}

/// Where a ray crosses a triangle
#[derive(Debug, Clone, Copy)]
pub struct TriangleHit {
    /// Ray parameter of the crossing; equals the distance for unit directions
    pub t: f32,
    /// Barycentric weights of the second and third corners
    pub u: f32,
    pub v: f32,
}

/// Test a ray against one triangle (Moller-Trumbore).
///
/// Both windings count, so meshes hit from either side. Zero-area triangles
/// and rays lying in the triangle plane never hit; neither do crossings
/// behind `origin`.
pub fn ray_triangle_intersection(
    origin: Vec3,
    direction: Vec3,
    v0: Vec3,
    v1: Vec3,
    v2: Vec3,
) -> Option<TriangleHit> {
    let edge1 = v1 - v0;
    let edge2 = v2 - v0;

    let p = direction.cross(edge2);
    let det = edge1.dot(p);

    // Zero-area triangles land here as well
    if !det.is_finite() || det.abs() < RAY_EPSILON {
        return None;
    }

    let inv_det = 1.0 / det;
    let to_origin = origin - v0;

    let u = to_origin.dot(p) * inv_det;
    if !(0.0..=1.0).contains(&u) {
        return None;
    }

    let q = to_origin.cross(edge1);

    let v = direction.dot(q) * inv_det;
    if v < 0.0 || u + v > 1.0 {
        return None;
    }

    let t = edge2.dot(q) * inv_det;
    if t.is_nan() || t < 0.0 {
        return None;
    }

    Some(TriangleHit { t, u, v })
}

/// Build the picking ray for a pixel position.
///
/// The pixel is mapped to aspect-corrected [-1, 1] coordinates (y up), scaled
/// by `tan(fov / 2)`, and pushed onto the near and far planes along the
/// camera's -Z axis. Both points are rotated into world space by the inverse
/// view matrix and offset by the camera position.
pub fn screen_ray(camera: &CameraState, screen_x: f32, screen_y: f32) -> Ray {
    let w = camera.width as f32;
    let h = camera.height as f32;

    let normalized = Vec2::new(
        (screen_x / (w * 0.5) - 1.0) * (w / h),
        1.0 - screen_y / (h * 0.5),
    );
    let fov_coords = (camera.fov_degrees.to_radians() * 0.5).tan() * normalized;

    let near_local = Vec3::new(fov_coords.x * camera.near, fov_coords.y * camera.near, -camera.near);
    let far_local = Vec3::new(fov_coords.x * camera.far, fov_coords.y * camera.far, -camera.far);

    let inverse_view = camera.inverse_view();
    let near_point = camera.position + inverse_view.transform_vector3(near_local);
    let far_point = camera.position + inverse_view.transform_vector3(far_local);

    Ray {
        origin: camera.position,
        direction: (far_point - near_point).normalize_or_zero(),
    }
}

/// Nearest-triangle picker over raw mesh arrays.
///
/// Works on slices rather than [`MeshTopology`] so that meshes without any
/// triangles are handled (they never hit).
pub struct RayPicker<'a> {
    positions: &'a [Vec3],
    triangles: &'a [u32],
    /// Mesh model-to-world transform
    model: Mat4,
}

impl<'a> RayPicker<'a> {
    /// Picker over raw arrays with an identity model transform.
    pub fn new(positions: &'a [Vec3], triangles: &'a [u32]) -> Self {
        Self {
            positions,
            triangles,
            model: Mat4::IDENTITY,
        }
    }

    /// Picker over a built topology.
    pub fn for_topology(topology: &'a MeshTopology) -> Self {
        Self::new(topology.positions(), topology.triangles())
    }

    /// Set the model-to-world transform.
    pub fn with_model(mut self, model: Mat4) -> Self {
        self.model = model;
        self
    }

    /// Find the triangle under a pixel.
    pub fn pick(&self, camera: &CameraState, screen_x: f32, screen_y: f32) -> Option<PickHit> {
        let ray = screen_ray(camera, screen_x, screen_y);
        trace!(
            "RayPicker::pick: ({:.1}, {:.1}) -> origin={:?} dir={:?}",
            screen_x,
            screen_y,
            ray.origin,
            ray.direction
        );

        let hit = self.raycast(&ray);
        if let Some(hit) = &hit {
            debug!(
                "RayPicker::pick: hit triangle {} at distance {:.4}",
                hit.triangle.0, hit.distance
            );
        }
        hit
    }

    /// Cast a world-space ray and return the closest hit.
    ///
    /// Distance is measured from the ray origin to the intersection point.
    /// On equal distances the triangle appearing first in the list wins.
    pub fn raycast(&self, ray: &Ray) -> Option<PickHit> {
        let mut closest: Option<PickHit> = None;

        // Brute force - every triangle is tested on each pick
        for (ordinal, tri) in self.triangles.chunks_exact(SLOTS_PER_TRIANGLE).enumerate() {
            let Some([v0, v1, v2]) = self.world_triangle(tri) else {
                continue;
            };

            let Some(hit) = ray_triangle_intersection(ray.origin, ray.direction, v0, v1, v2) else {
                continue;
            };

            let point = ray.at(hit.t);
            let distance = point.distance(ray.origin);
            let dominated = match &closest {
                Some(prev) => distance >= prev.distance,
                None => false,
            };
            if !dominated {
                closest = Some(PickHit {
                    triangle: TriangleId::from_ordinal(ordinal),
                    point,
                    distance,
                });
            }
        }

        closest
    }

    fn world_triangle(&self, tri: &[u32]) -> Option<[Vec3; 3]> {
        let vertex = |slot: usize| {
            self.positions
                .get(tri[slot] as usize)
                .map(|&p| self.model.transform_point3(p))
        };
        Some([vertex(0)?, vertex(1)?, vertex(2)?])
    }
}
