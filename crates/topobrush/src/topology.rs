//! Triangle adjacency for brush expansion.
//!
//! Two triangles are neighbors when they share at least one vertex index.
//! Every triangle is also its own neighbor; the region expansion relies on
//! the self-loop to keep the seed out of the first ring.

use glam::Vec3;
use tracing::debug;

use crate::constants::SLOTS_PER_TRIANGLE;
use crate::types::TriangleId;
use crate::validation::{validate_mesh, validate_triangle_id, MeshError};

/// Mesh geometry plus its vertex-sharing adjacency graph.
///
/// Built once after load and immutable afterwards.
#[derive(Debug, Clone)]
pub struct MeshTopology {
    positions: Vec<Vec3>,
    triangles: Vec<u32>,
    /// Neighbor lists indexed by triangle ordinal, ascending
    neighbors: Vec<Vec<TriangleId>>,
}

impl MeshTopology {
    /// Build topology from already-parsed vertex and triangle arrays.
    pub fn new(positions: Vec<Vec3>, triangles: Vec<u32>) -> Result<Self, MeshError> {
        validate_mesh(positions.len(), &triangles)?;

        let neighbors = build_adjacency(positions.len(), &triangles);

        debug!(
            "MeshTopology::new: {} vertices, {} triangles, {} adjacency entries",
            positions.len(),
            triangles.len() / SLOTS_PER_TRIANGLE,
            neighbors.iter().map(Vec::len).sum::<usize>()
        );

        Ok(Self {
            positions,
            triangles,
            neighbors,
        })
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.neighbors.len()
    }

    /// Vertex positions in model space
    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    /// Flat triangle list, three vertex indices per triangle
    pub fn triangles(&self) -> &[u32] {
        &self.triangles
    }

    /// All triangle identifiers in index order
    pub fn triangle_ids(&self) -> impl Iterator<Item = TriangleId> + '_ {
        (0..self.triangle_count()).map(TriangleId::from_ordinal)
    }

    /// Check that `id` names a triangle of this mesh.
    pub fn validate(&self, id: TriangleId) -> Result<(), MeshError> {
        validate_triangle_id(id, self.triangles.len())
    }

    /// Vertex indices of a triangle
    pub fn triangle_vertices(&self, id: TriangleId) -> Result<[u32; 3], MeshError> {
        self.validate(id)?;
        let base = id.slot();
        Ok([
            self.triangles[base],
            self.triangles[base + 1],
            self.triangles[base + 2],
        ])
    }

    /// Model-space vertex positions of a triangle
    pub fn triangle_positions(&self, id: TriangleId) -> Result<[Vec3; 3], MeshError> {
        let [a, b, c] = self.triangle_vertices(id)?;
        Ok([
            self.positions[a as usize],
            self.positions[b as usize],
            self.positions[c as usize],
        ])
    }

    /// Triangles sharing at least one vertex with `id`, including `id` itself,
    /// in ascending order.
    pub fn neighbors(&self, id: TriangleId) -> Result<&[TriangleId], MeshError> {
        self.validate(id)?;
        Ok(&self.neighbors[id.ordinal()])
    }
}

/// Build the vertex-sharing relation through an inverted vertex -> triangle
/// index.
fn build_adjacency(vertex_count: usize, triangles: &[u32]) -> Vec<Vec<TriangleId>> {
    let mut vertex_triangles: Vec<Vec<TriangleId>> = vec![Vec::new(); vertex_count];
    for (ordinal, tri) in triangles.chunks_exact(SLOTS_PER_TRIANGLE).enumerate() {
        let id = TriangleId::from_ordinal(ordinal);
        for &vertex in tri {
            let list = &mut vertex_triangles[vertex as usize];
            // A triangle repeating a vertex would otherwise be listed twice
            if list.last() != Some(&id) {
                list.push(id);
            }
        }
    }

    triangles
        .chunks_exact(SLOTS_PER_TRIANGLE)
        .map(|tri| {
            let mut neighbors: Vec<TriangleId> = tri
                .iter()
                .flat_map(|&vertex| vertex_triangles[vertex as usize].iter().copied())
                .collect();
            neighbors.sort_unstable();
            neighbors.dedup();
            neighbors
        })
        .collect()
}

/// Translate positions so their axis-aligned bounding box is centered on the
/// origin.
pub fn center_positions(positions: &mut [Vec3]) {
    let Some(&first) = positions.first() else {
        return;
    };
    let (min, max) = positions
        .iter()
        .fold((first, first), |(min, max), &p| (min.min(p), max.max(p)));
    let offset = -0.5 * (min + max);
    for p in positions.iter_mut() {
        *p += offset;
    }
}

/// Uniformly scale positions about the origin.
pub fn scale_positions(positions: &mut [Vec3], factor: f32) {
    for p in positions.iter_mut() {
        *p *= factor;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{quad, strip};

    /// Pairwise comparison of every triangle against every other, self included
    fn brute_force(triangles: &[u32]) -> Vec<Vec<TriangleId>> {
        let tris: Vec<&[u32]> = triangles.chunks_exact(3).collect();
        tris.iter()
            .map(|a| {
                tris.iter()
                    .enumerate()
                    .filter(|(_, b)| a.iter().any(|v| b.contains(v)))
                    .map(|(j, _)| TriangleId::from_ordinal(j))
                    .collect()
            })
            .collect()
    }

    #[test]
    fn test_quad_neighbors() {
        let topo = quad();
        assert_eq!(topo.triangle_count(), 2);
        assert_eq!(
            topo.neighbors(TriangleId(0)).unwrap(),
            &[TriangleId(0), TriangleId(3)]
        );
        assert_eq!(
            topo.neighbors(TriangleId(3)).unwrap(),
            &[TriangleId(0), TriangleId(3)]
        );
    }

    #[test]
    fn test_self_inclusion() {
        let topo = strip(5);
        for id in topo.triangle_ids() {
            assert!(topo.neighbors(id).unwrap().contains(&id));
        }
    }

    #[test]
    fn test_symmetry_matches_shared_vertex() {
        let topo = strip(4);
        for a in topo.triangle_ids() {
            let va = topo.triangle_vertices(a).unwrap();
            for b in topo.triangle_ids().filter(|&b| b != a) {
                let vb = topo.triangle_vertices(b).unwrap();
                let shares = va.iter().any(|v| vb.contains(v));
                let a_has_b = topo.neighbors(a).unwrap().contains(&b);
                let b_has_a = topo.neighbors(b).unwrap().contains(&a);
                assert_eq!(a_has_b, shares);
                assert_eq!(b_has_a, shares);
            }
        }
    }

    #[test]
    fn test_inverted_index_matches_brute_force() {
        // Fan around vertex 0 plus a triangle touching the fan at a single vertex
        let positions = vec![Vec3::ZERO; 8];
        let triangles = vec![0, 1, 2, 0, 2, 3, 0, 3, 4, 4, 5, 6, 5, 6, 7, 7, 7, 1];
        let topo = MeshTopology::new(positions, triangles.clone()).unwrap();
        let expected = brute_force(&triangles);
        for (ordinal, neighbors) in expected.iter().enumerate() {
            let id = TriangleId::from_ordinal(ordinal);
            assert_eq!(topo.neighbors(id).unwrap(), neighbors.as_slice());
        }
    }

    #[test]
    fn test_single_vertex_contact_is_adjacent() {
        let positions = vec![Vec3::ZERO; 5];
        let topo = MeshTopology::new(positions, vec![0, 1, 2, 2, 3, 4]).unwrap();
        assert_eq!(
            topo.neighbors(TriangleId(0)).unwrap(),
            &[TriangleId(0), TriangleId(3)]
        );
    }

    #[test]
    fn test_empty_mesh_rejected() {
        assert_eq!(
            MeshTopology::new(Vec::new(), vec![0, 1, 2]).unwrap_err(),
            MeshError::EmptyVertices
        );
        assert_eq!(
            MeshTopology::new(vec![Vec3::ZERO; 3], Vec::new()).unwrap_err(),
            MeshError::EmptyTriangles
        );
    }

    #[test]
    fn test_invalid_triangle_index() {
        let topo = quad();
        assert!(topo.neighbors(TriangleId(1)).is_err());
        assert!(topo.neighbors(TriangleId(6)).is_err());
        assert!(topo.triangle_positions(TriangleId(9)).is_err());
    }

    #[test]
    fn test_triangle_positions() {
        let topo = quad();
        let [a, b, c] = topo.triangle_positions(TriangleId(3)).unwrap();
        assert_eq!(a, Vec3::new(0.0, 0.0, 0.0));
        assert_eq!(b, Vec3::new(1.0, 1.0, 0.0));
        assert_eq!(c, Vec3::new(0.0, 1.0, 0.0));
    }

    #[test]
    fn test_center_and_scale_positions() {
        let mut positions = vec![Vec3::new(1.0, 2.0, 3.0), Vec3::new(3.0, 6.0, 5.0)];
        center_positions(&mut positions);
        assert_eq!(positions[0], Vec3::new(-1.0, -2.0, -1.0));
        assert_eq!(positions[1], Vec3::new(1.0, 2.0, 1.0));

        scale_positions(&mut positions, 5.0);
        assert_eq!(positions[1], Vec3::new(5.0, 10.0, 5.0));

        let mut empty: Vec<Vec3> = Vec::new();
        center_positions(&mut empty);
        assert!(empty.is_empty());
    }
}
