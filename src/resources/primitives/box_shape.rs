use crate::resources::mesh::{MeshData, Vertex};

/// Axis-aligned box centered on the origin.
///
/// 24 vertices (4 per face, so every face gets a flat normal) and 36 indices,
/// counter-clockwise when seen from outside.
#[must_use]
pub fn create_box(width: f32, height: f32, depth: f32) -> MeshData {
    let w = width / 2.0;
    let h = height / 2.0;
    let d = depth / 2.0;

    // (normal, 4 corners counter-clockwise seen from outside)
    let faces: [([f32; 3], [[f32; 3]; 4]); 6] = [
        // Front face (+Z)
        ([0.0, 0.0, 1.0], [[-w, -h, d], [w, -h, d], [w, h, d], [-w, h, d]]),
        // Back face (-Z)
        ([0.0, 0.0, -1.0], [[-w, -h, -d], [-w, h, -d], [w, h, -d], [w, -h, -d]]),
        // Top face (+Y)
        ([0.0, 1.0, 0.0], [[-w, h, -d], [-w, h, d], [w, h, d], [w, h, -d]]),
        // Bottom face (-Y)
        ([0.0, -1.0, 0.0], [[-w, -h, -d], [w, -h, -d], [w, -h, d], [-w, -h, d]]),
        // Right face (+X)
        ([1.0, 0.0, 0.0], [[w, -h, -d], [w, h, -d], [w, h, d], [w, -h, d]]),
        // Left face (-X)
        ([-1.0, 0.0, 0.0], [[-w, -h, -d], [-w, -h, d], [-w, h, d], [-w, h, -d]]),
    ];

    let vertices = faces
        .iter()
        .flat_map(|(normal, corners)| corners.iter().map(|&p| Vertex::new(p, *normal)))
        .collect();

    // 0, 1, 2,  0, 2, 3
    let indices = (0..6u16)
        .flat_map(|face| {
            let base = face * 4;
            [base, base + 1, base + 2, base, base + 2, base + 3]
        })
        .collect();

    MeshData::new(vertices, indices)
}
