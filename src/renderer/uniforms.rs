use bytemuck::{Pod, Zeroable};
use glam::{Mat3, Mat4};

use crate::resources::Color;

/// Per-draw uniforms, matching `ObjectUniforms` in `robot.wgsl`.
///
/// The normal matrix is stored as a full `mat4x4` so the struct has no
/// implicit padding (std140 would pad a `mat3x3` column to 16 bytes anyway).
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct ObjectUniforms {
    pub mvp: [[f32; 4]; 4],
    pub model_view: [[f32; 4]; 4],
    pub normal_matrix: [[f32; 4]; 4],
    pub color: [f32; 4],
}

impl ObjectUniforms {
    /// Size in bytes of one record before alignment.
    pub const SIZE: u64 = std::mem::size_of::<Self>() as u64;

    /// Combines `model` with the camera matrices.
    #[must_use]
    pub fn new(model: Mat4, view: Mat4, projection: Mat4, color: Color) -> Self {
        let model_view = view * model;
        let mvp = projection * model_view;
        Self {
            mvp: mvp.to_cols_array_2d(),
            model_view: model_view.to_cols_array_2d(),
            normal_matrix: Mat4::from_mat3(normal_matrix(model_view)).to_cols_array_2d(),
            color: color.to_array(),
        }
    }
}

/// Inverse-transpose of the upper 3x3, so normals stay perpendicular under
/// non-uniform scale. A singular matrix falls back to the plain 3x3.
#[must_use]
pub fn normal_matrix(model_view: Mat4) -> Mat3 {
    let m = Mat3::from_mat4(model_view);
    if m.determinant().abs() <= f32::EPSILON {
        return m;
    }
    m.inverse().transpose()
}
