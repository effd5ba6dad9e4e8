use crate::resources::mesh::{MeshData, Vertex};

/// Normal handed to every axis point so the points render fully lit.
const FACING_LIGHT: [f32; 3] = [0.0, 0.0, 1.0];

/// Coordinate-axis guide drawn as points along X, Y and Z.
///
/// Points are spaced `step` apart from `-extent` to `extent` on each axis.
/// Returns a non-indexed point list.
#[must_use]
pub fn create_axis_points(extent: f32, step: f32) -> MeshData {
    if !(extent > 0.0 && step > 0.0) {
        return MeshData::default();
    }

    let per_axis = (2.0 * extent / step).floor() as u32 + 1;
    let mut vertices = Vec::with_capacity(per_axis as usize * 3);

    for axis in 0..3 {
        for i in 0..per_axis {
            let mut position = [0.0; 3];
            position[axis] = -extent + i as f32 * step;
            vertices.push(Vertex::new(position, FACING_LIGHT));
        }
    }

    MeshData::new(vertices, Vec::new())
}
