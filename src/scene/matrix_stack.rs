//! Matrix Stack
//!
//! A current model matrix plus a stack of saved copies, following the legacy
//! `glPushMatrix` / `glPopMatrix` discipline. Every transform operation
//! post-multiplies the current matrix, so the most recently applied transform
//! is the first one applied to a vertex.
//!
//! ```rust,ignore
//! let mut stack = MatrixStack::new();
//! stack.push();
//! stack.translate(Vec3::new(0.0, 1.6, 0.0));
//! stack.scale(Vec3::splat(0.8));
//! draw(stack.current());
//! stack.pop()?;
//! ```

use glam::{Mat4, Vec3};
use smallvec::SmallVec;

use crate::errors::{DanceError, Result};

/// The humanoid rig is six levels deep; keep saved frames inline.
const INLINE_DEPTH: usize = 8;

#[derive(Debug, Clone)]
pub struct MatrixStack {
    current: Mat4,
    saved: SmallVec<[Mat4; INLINE_DEPTH]>,
}

impl MatrixStack {
    #[must_use]
    pub fn new() -> Self {
        Self::with_matrix(Mat4::IDENTITY)
    }

    #[must_use]
    pub fn with_matrix(matrix: Mat4) -> Self {
        Self {
            current: matrix,
            saved: SmallVec::new(),
        }
    }

    /// The matrix every subsequent draw inherits.
    #[inline]
    #[must_use]
    pub fn current(&self) -> Mat4 {
        self.current
    }

    /// Number of saved frames.
    #[inline]
    #[must_use]
    pub fn depth(&self) -> usize {
        self.saved.len()
    }

    pub fn load_identity(&mut self) {
        self.current = Mat4::IDENTITY;
    }

    /// Saves a copy of the current matrix.
    pub fn push(&mut self) {
        self.saved.push(self.current);
    }

    /// Restores the most recently saved matrix.
    pub fn pop(&mut self) -> Result<()> {
        self.current = self.saved.pop().ok_or(DanceError::StackUnderflow)?;
        Ok(())
    }

    pub fn translate(&mut self, offset: Vec3) {
        self.current *= Mat4::from_translation(offset);
    }

    pub fn scale(&mut self, factor: Vec3) {
        self.current *= Mat4::from_scale(factor);
    }

    /// Rotates by `degrees` around `axis`. The axis need not be normalized;
    /// a zero-length axis is a no-op.
    pub fn rotate_deg(&mut self, degrees: f32, axis: Vec3) {
        if degrees == 0.0 {
            return;
        }
        let Some(axis) = axis.try_normalize() else {
            return;
        };
        self.current *= Mat4::from_axis_angle(axis, degrees.to_radians());
    }

    /// Applies an arbitrary matrix on the right.
    pub fn multiply(&mut self, matrix: Mat4) {
        self.current *= matrix;
    }

    /// Runs `f` between a push and a pop.
    ///
    /// The pop happens even when `f` fails, so the stack stays balanced for
    /// the caller; `f`'s error wins over an underflow.
    pub fn scoped<T>(&mut self, f: impl FnOnce(&mut Self) -> Result<T>) -> Result<T> {
        self.push();
        let result = f(self);
        let popped = self.pop();
        let value = result?;
        popped?;
        Ok(value)
    }
}

impl Default for MatrixStack {
    fn default() -> Self {
        Self::new()
    }
}
