//! Per-vertex color storage handed to the renderer.

use crate::topology::MeshTopology;
use crate::types::{TriangleId, VertexColor};
use crate::validation::MeshError;

/// One color per mesh vertex.
///
/// The buffer is marked dirty whenever it changes; the rendering side uploads
/// [`ColorBuffer::as_bytes`] and calls [`ColorBuffer::clear_dirty`].
#[derive(Debug, Clone)]
pub struct ColorBuffer {
    colors: Vec<VertexColor>,
    dirty: bool,
}

impl ColorBuffer {
    /// Buffer for `vertex_count` vertices, all set to `background`.
    pub fn new(vertex_count: usize, background: VertexColor) -> Self {
        Self {
            colors: vec![background; vertex_count],
            dirty: true,
        }
    }

    pub fn colors(&self) -> &[VertexColor] {
        &self.colors
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Raw bytes for GPU upload
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.colors)
    }

    /// Set every vertex to `color`.
    pub fn fill(&mut self, color: VertexColor) {
        self.colors.fill(color);
        self.dirty = true;
    }

    /// Set the three vertices of each triangle to `color`.
    pub fn paint_triangles<'a>(
        &mut self,
        topology: &MeshTopology,
        triangles: impl IntoIterator<Item = &'a TriangleId>,
        color: VertexColor,
    ) -> Result<(), MeshError> {
        for &triangle in triangles {
            for vertex in topology.triangle_vertices(triangle)? {
                if let Some(slot) = self.colors.get_mut(vertex as usize) {
                    *slot = color;
                }
            }
            self.dirty = true;
        }
        Ok(())
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Mark the current contents as uploaded.
    pub fn clear_dirty(&mut self) {
        self.dirty = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::quad;

    const WHITE: VertexColor = VertexColor::new(1.0, 1.0, 1.0);
    const ORANGE: VertexColor = VertexColor::new(1.0, 0.5, 0.0);

    #[test]
    fn test_new_buffer_is_background() {
        let buffer = ColorBuffer::new(4, WHITE);
        assert_eq!(buffer.len(), 4);
        assert!(buffer.colors().iter().all(|&c| c == WHITE));
        assert!(buffer.is_dirty());
        assert_eq!(buffer.as_bytes().len(), 4 * 3 * 4);
    }

    #[test]
    fn test_paint_triangle_vertices() {
        let topo = quad();
        let mut buffer = ColorBuffer::new(topo.vertex_count(), WHITE);
        buffer.clear_dirty();

        buffer.paint_triangles(&topo, &[TriangleId(3)], ORANGE).unwrap();
        assert!(buffer.is_dirty());
        // Triangle 3 uses vertices 0, 2, 3
        assert_eq!(buffer.colors(), &[ORANGE, WHITE, ORANGE, ORANGE]);
    }

    #[test]
    fn test_fill_resets_everything() {
        let topo = quad();
        let mut buffer = ColorBuffer::new(topo.vertex_count(), WHITE);
        buffer.paint_triangles(&topo, &[TriangleId(0), TriangleId(3)], ORANGE).unwrap();
        buffer.clear_dirty();
        buffer.fill(WHITE);
        assert!(buffer.is_dirty());
        assert!(buffer.colors().iter().all(|&c| c == WHITE));
    }

    #[test]
    fn test_paint_invalid_triangle() {
        let topo = quad();
        let mut buffer = ColorBuffer::new(topo.vertex_count(), WHITE);
        assert!(buffer.paint_triangles(&topo, &[TriangleId(4)], ORANGE).is_err());
    }
}
