//! Procedural demo mesh.

use glam::Vec3;
use topobrush::{center_positions, scale_positions};

/// Unit grid in the XZ plane with `cells` x `cells` quads, two triangles each.
///
/// Returns vertex positions and the flat triangle list.
pub fn grid(cells: u32) -> (Vec<Vec3>, Vec<u32>) {
    let cells = cells.max(1);
    let step = 1.0 / cells as f32;
    let row = cells + 1;

    let mut positions = Vec::with_capacity((row * row) as usize);
    for z in 0..row {
        for x in 0..row {
            positions.push(Vec3::new(x as f32 * step, 0.0, z as f32 * step));
        }
    }

    let mut triangles = Vec::with_capacity((cells * cells * 6) as usize);
    for z in 0..cells {
        for x in 0..cells {
            let a = z * row + x;
            let b = a + 1;
            let c = a + row + 1;
            let d = a + row;
            triangles.extend_from_slice(&[a, b, c, a, c, d]);
        }
    }

    (positions, triangles)
}

/// Demo grid centered on the origin and scaled uniformly by `scale`.
pub fn prepared_grid(cells: u32, scale: f32) -> (Vec<Vec3>, Vec<u32>) {
    let (mut positions, triangles) = grid(cells);
    center_positions(&mut positions);
    scale_positions(&mut positions, scale);
    (positions, triangles)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_counts() {
        let (positions, triangles) = grid(4);
        assert_eq!(positions.len(), 25);
        assert_eq!(triangles.len(), 4 * 4 * 6);
        assert!(triangles.iter().all(|&v| (v as usize) < positions.len()));
    }

    #[test]
    fn test_grid_zero_cells() {
        let (positions, triangles) = grid(0);
        assert_eq!(positions.len(), 4);
        assert_eq!(triangles, vec![0, 1, 3, 0, 3, 2]);
    }

    #[test]
    fn test_prepared_grid_centered_and_scaled() {
        let scale = topobrush_config::DEFAULT_MESH_SCALE;
        let (positions, _) = prepared_grid(4, scale);
        let min = positions.iter().copied().fold(Vec3::splat(f32::MAX), Vec3::min);
        let max = positions.iter().copied().fold(Vec3::splat(f32::MIN), Vec3::max);
        assert!((min - Vec3::new(-2.5, 0.0, -2.5)).length() < 1e-5);
        assert!((max - Vec3::new(2.5, 0.0, 2.5)).length() < 1e-5);
    }
}
