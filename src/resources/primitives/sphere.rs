use std::f32::consts::PI;

use crate::resources::mesh::{MeshData, Vertex};

/// Largest segment count that keeps the vertex count addressable by `u16`.
const MAX_SEGMENTS: u32 = 254;

#[derive(Debug, Clone, Copy)]
pub struct SphereOptions {
    pub radius: f32,
    pub width_segments: u32,
    pub height_segments: u32,
}

impl Default for SphereOptions {
    fn default() -> Self {
        Self {
            radius: 1.0,
            width_segments: 32,
            height_segments: 16,
        }
    }
}

/// Smooth UV sphere centered on the origin.
///
/// Normals are the normalized positions, so lighting is smooth across the
/// surface. Degenerate triangles at the poles are skipped.
#[must_use]
pub fn create_sphere(options: SphereOptions) -> MeshData {
    let radius = options.radius;
    let width_segments = options.width_segments.clamp(3, MAX_SEGMENTS);
    let height_segments = options.height_segments.clamp(2, MAX_SEGMENTS);

    let mut vertices = Vec::with_capacity(((width_segments + 1) * (height_segments + 1)) as usize);
    let mut indices = Vec::new();

    for y in 0..=height_segments {
        // Latitude: 0 at the south pole, PI at the north pole
        let theta = y as f32 / height_segments as f32 * PI;
        let ny = -theta.cos();
        let ring = theta.sin();

        for x in 0..=width_segments {
            let phi = x as f32 / width_segments as f32 * 2.0 * PI;
            let normal = [-ring * phi.cos(), ny, ring * phi.sin()];
            let position = normal.map(|n| n * radius);
            vertices.push(Vertex::new(position, normal));
        }
    }

    let stride = width_segments + 1;
    for y in 0..height_segments {
        for x in 0..width_segments {
            let v0 = (y * stride + x) as u16;
            let v1 = v0 + 1;
            let v2 = ((y + 1) * stride + x) as u16;
            let v3 = v2 + 1;

            if y != 0 {
                indices.extend_from_slice(&[v0, v1, v2]);
            }
            if y != height_segments - 1 {
                indices.extend_from_slice(&[v1, v3, v2]);
            }
        }
    }

    MeshData::new(vertices, indices)
}
