use glam::{Mat4, Vec3};

/// A fixed look-at camera with an off-center perspective frustum.
///
/// The frustum is specified by its near-plane rectangle, in the manner of
/// `glFrustum`, but maps depth to wgpu's `[0, 1]` range.
#[derive(Debug, Clone)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,

    pub aspect: f32,
    /// Half-height of the near-plane rectangle.
    pub half_height: f32,
    pub near: f32,
    pub far: f32,

    pub(crate) view_matrix: Mat4,
    pub(crate) projection_matrix: Mat4,
}

impl Camera {
    #[must_use]
    pub fn new(aspect: f32) -> Self {
        let mut cam = Self {
            eye: Vec3::new(0.0, 0.0, 5.0),
            target: Vec3::new(0.0, 0.0, -1.0),
            up: Vec3::Y,
            aspect,
            half_height: 1.0,
            near: 1.0,
            far: 50.0,
            view_matrix: Mat4::IDENTITY,
            projection_matrix: Mat4::IDENTITY,
        };
        cam.update_view_matrix();
        cam.update_projection_matrix();
        cam
    }

    pub fn set_aspect(&mut self, aspect: f32) {
        if aspect.is_finite() && aspect > 0.0 {
            self.aspect = aspect;
            self.update_projection_matrix();
        }
    }

    /// Recomputes the aspect ratio from a surface size. Zero sizes (minimized
    /// windows) are ignored.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.set_aspect(width as f32 / height as f32);
        }
    }

    pub fn update_view_matrix(&mut self) {
        self.view_matrix = Mat4::look_at_rh(self.eye, self.target, self.up);
    }

    pub fn update_projection_matrix(&mut self) {
        let right = self.aspect * self.half_height;
        self.projection_matrix = frustum(
            -right,
            right,
            -self.half_height,
            self.half_height,
            self.near,
            self.far,
        );
    }

    #[inline]
    #[must_use]
    pub fn view_matrix(&self) -> Mat4 {
        self.view_matrix
    }

    #[inline]
    #[must_use]
    pub fn projection_matrix(&self) -> Mat4 {
        self.projection_matrix
    }

    #[inline]
    #[must_use]
    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix * self.view_matrix
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(1.0)
    }
}

/// Right-handed perspective frustum with `[0, 1]` clip depth.
#[must_use]
pub fn frustum(left: f32, right: f32, bottom: f32, top: f32, near: f32, far: f32) -> Mat4 {
    let width = right - left;
    let height = top - bottom;
    let depth = far - near;

    Mat4::from_cols_array(&[
        2.0 * near / width,
        0.0,
        0.0,
        0.0,
        //
        0.0,
        2.0 * near / height,
        0.0,
        0.0,
        //
        (right + left) / width,
        (top + bottom) / height,
        -far / depth,
        -1.0,
        //
        0.0,
        0.0,
        -far * near / depth,
        0.0,
    ])
}
