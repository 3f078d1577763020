use thiserror::Error;

use crate::constants::SLOTS_PER_TRIANGLE;
use crate::types::TriangleId;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MeshError {
    #[error("Invalid mesh: no vertices")]
    EmptyVertices,
    #[error("Invalid mesh: no triangles")]
    EmptyTriangles,
    #[error("Invalid mesh: triangle list length {0} is not a multiple of 3")]
    TriangleListLength(usize),
    #[error("Invalid mesh: slot {slot} references vertex {vertex}, but only {vertex_count} vertices exist")]
    VertexOutOfRange {
        slot: usize,
        vertex: u32,
        vertex_count: usize,
    },
    #[error("Invalid triangle index {index}: must be a multiple of 3 below {slots}")]
    InvalidIndex { index: u32, slots: usize },
}

impl MeshError {
    /// True for construction-time failures that end the session.
    pub fn is_invalid_mesh(&self) -> bool {
        !matches!(self, Self::InvalidIndex { .. })
    }
}

/// Validate raw mesh arrays before building topology
pub fn validate_mesh(vertex_count: usize, triangles: &[u32]) -> Result<(), MeshError> {
    if vertex_count == 0 {
        return Err(MeshError::EmptyVertices);
    }
    if triangles.is_empty() {
        return Err(MeshError::EmptyTriangles);
    }
    if triangles.len() % SLOTS_PER_TRIANGLE != 0 {
        return Err(MeshError::TriangleListLength(triangles.len()));
    }
    if let Some((slot, &vertex)) = triangles
        .iter()
        .enumerate()
        .find(|&(_, &v)| v as usize >= vertex_count)
    {
        return Err(MeshError::VertexOutOfRange {
            slot,
            vertex,
            vertex_count,
        });
    }
    Ok(())
}

/// Check that `id` addresses the first slot of a triangle in a list of `slots`
/// entries
pub fn validate_triangle_id(id: TriangleId, slots: usize) -> Result<(), MeshError> {
    let index = id.slot();
    if index % SLOTS_PER_TRIANGLE != 0 || index + SLOTS_PER_TRIANGLE > slots {
        return Err(MeshError::InvalidIndex { index: id.0, slots });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_mesh_ok() {
        assert!(validate_mesh(4, &[0, 1, 2, 0, 2, 3]).is_ok());
    }

    #[test]
    fn test_validate_mesh_empty() {
        assert_eq!(validate_mesh(0, &[0, 1, 2]), Err(MeshError::EmptyVertices));
        assert_eq!(validate_mesh(3, &[]), Err(MeshError::EmptyTriangles));
    }

    #[test]
    fn test_validate_mesh_length() {
        assert_eq!(
            validate_mesh(3, &[0, 1, 2, 0]),
            Err(MeshError::TriangleListLength(4))
        );
    }

    #[test]
    fn test_validate_mesh_vertex_range() {
        assert_eq!(
            validate_mesh(3, &[0, 1, 2, 0, 2, 3]),
            Err(MeshError::VertexOutOfRange {
                slot: 5,
                vertex: 3,
                vertex_count: 3
            })
        );
    }

    #[test]
    fn test_validate_triangle_id() {
        assert!(validate_triangle_id(TriangleId(0), 6).is_ok());
        assert!(validate_triangle_id(TriangleId(3), 6).is_ok());
        assert!(validate_triangle_id(TriangleId(1), 6).is_err());
        assert!(validate_triangle_id(TriangleId(6), 6).is_err());
    }

    #[test]
    fn test_error_families() {
        assert!(MeshError::EmptyTriangles.is_invalid_mesh());
        assert!(!MeshError::InvalidIndex { index: 1, slots: 6 }.is_invalid_mesh());
    }
}
