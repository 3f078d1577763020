//! Small meshes shared by unit tests.

use glam::Vec3;

use crate::topology::MeshTopology;

/// Unit quad in the z = 0 plane split along its diagonal: triangles 0 and 3.
pub(crate) fn quad() -> MeshTopology {
    MeshTopology::new(
        vec![
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(1.0, 1.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
        ],
        vec![0, 1, 2, 0, 2, 3],
    )
    .unwrap()
}

/// Strip of `quads` unit quads along +x in the z = 0 plane, two triangles each.
pub(crate) fn strip(quads: usize) -> MeshTopology {
    let mut positions = Vec::new();
    for i in 0..=quads {
        positions.push(Vec3::new(i as f32, 0.0, 0.0));
        positions.push(Vec3::new(i as f32, 1.0, 0.0));
    }
    let mut triangles = Vec::new();
    for i in 0..quads as u32 {
        let (a, b, c, d) = (2 * i, 2 * i + 2, 2 * i + 3, 2 * i + 1);
        triangles.extend_from_slice(&[a, b, c, a, c, d]);
    }
    MeshTopology::new(positions, triangles).unwrap()
}
