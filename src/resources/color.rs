use glam::Vec4;

/// Flat RGBA color, linear components in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color(pub Vec4);

impl Color {
    pub const RED: Color = Color::rgb(0.314, 0.0, 0.0);
    pub const BLUE: Color = Color::rgb(0.0, 0.15, 0.445);
    pub const GREY: Color = Color::rgb(0.15, 0.15, 0.15);
    pub const GREEN: Color = Color::rgb(0.0, 0.2, 0.0);
    /// Background clear color.
    pub const BACKGROUND: Color = Color::rgb(0.2, 0.2, 0.2);

    #[must_use]
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self(Vec4::new(r, g, b, 1.0))
    }

    #[inline]
    #[must_use]
    pub fn to_array(self) -> [f32; 4] {
        self.0.to_array()
    }
}

impl From<Color> for wgpu::Color {
    fn from(c: Color) -> Self {
        wgpu::Color {
            r: f64::from(c.0.x),
            g: f64::from(c.0.y),
            b: f64::from(c.0.z),
            a: f64::from(c.0.w),
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::GREY
    }
}
