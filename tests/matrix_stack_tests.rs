//! Matrix Stack Tests
//!
//! Tests for:
//! - push/pop balance and underflow
//! - Post-multiplication order of transforms
//! - Degree-based rotation and degenerate axes
//! - Scoped push/pop

use glam::{Mat4, Vec3};

use dancebot::errors::DanceError;
use dancebot::scene::MatrixStack;

const EPSILON: f32 = 1e-5;

fn vec3_approx(a: Vec3, b: Vec3) -> bool {
    (a - b).abs().max_element() < EPSILON
}

fn mat4_approx(a: Mat4, b: Mat4) -> bool {
    a.abs_diff_eq(b, EPSILON)
}

// ============================================================================
// push / pop
// ============================================================================

#[test]
fn new_stack_is_identity_and_empty() {
    let stack = MatrixStack::new();
    assert_eq!(stack.current(), Mat4::IDENTITY);
    assert_eq!(stack.depth(), 0);
}

#[test]
fn pop_restores_pushed_matrix() -> anyhow::Result<()> {
    let mut stack = MatrixStack::new();
    stack.translate(Vec3::new(1.0, 2.0, 3.0));
    let saved = stack.current();

    stack.push();
    stack.scale(Vec3::splat(4.0));
    stack.rotate_deg(45.0, Vec3::Z);
    assert_eq!(stack.depth(), 1);

    stack.pop()?;
    assert_eq!(stack.depth(), 0);
    assert_eq!(stack.current(), saved);
    Ok(())
}

#[test]
fn pop_on_empty_stack_underflows() {
    let mut stack = MatrixStack::new();
    let before = stack.current();
    assert!(matches!(stack.pop(), Err(DanceError::StackUnderflow)));
    assert_eq!(stack.current(), before);
}

#[test]
fn nested_pushes_unwind_in_order() -> anyhow::Result<()> {
    let mut stack = MatrixStack::new();
    stack.push();
    stack.translate(Vec3::X);
    let level_one = stack.current();
    stack.push();
    stack.translate(Vec3::Y);
    stack.push();
    stack.translate(Vec3::Z);
    assert_eq!(stack.depth(), 3);

    stack.pop()?;
    stack.pop()?;
    assert_eq!(stack.current(), level_one);
    stack.pop()?;
    assert_eq!(stack.current(), Mat4::IDENTITY);
    Ok(())
}

#[test]
fn load_identity_keeps_saved_frames() {
    let mut stack = MatrixStack::new();
    stack.translate(Vec3::ONE);
    stack.push();
    stack.load_identity();
    assert_eq!(stack.current(), Mat4::IDENTITY);
    assert_eq!(stack.depth(), 1);
}

// ============================================================================
// Composition order
// ============================================================================

#[test]
fn transforms_post_multiply() {
    // translate then scale: the scale applies to the vertex first
    let mut stack = MatrixStack::new();
    stack.translate(Vec3::new(0.0, 1.6, 0.0));
    stack.scale(Vec3::splat(0.8));

    let p = stack.current().transform_point3(Vec3::new(1.0, 0.0, 0.0));
    assert!(vec3_approx(p, Vec3::new(0.8, 1.6, 0.0)));

    let expected = Mat4::from_translation(Vec3::new(0.0, 1.6, 0.0)) * Mat4::from_scale(Vec3::splat(0.8));
    assert!(mat4_approx(stack.current(), expected));
}

#[test]
fn rotation_then_translation_moves_along_rotated_axis() {
    let mut stack = MatrixStack::new();
    stack.rotate_deg(90.0, Vec3::Y);
    stack.translate(Vec3::new(0.0, 0.0, 1.0));

    let p = stack.current().transform_point3(Vec3::ZERO);
    assert!(vec3_approx(p, Vec3::new(1.0, 0.0, 0.0)), "got {p}");
}

#[test]
fn multiply_appends_on_the_right() {
    let mut stack = MatrixStack::new();
    stack.translate(Vec3::X);
    stack.multiply(Mat4::from_scale(Vec3::splat(2.0)));

    let p = stack.current().transform_point3(Vec3::X);
    assert!(vec3_approx(p, Vec3::new(3.0, 0.0, 0.0)));
}

// ============================================================================
// Rotation
// ============================================================================

#[test]
fn rotate_deg_uses_degrees() {
    let mut stack = MatrixStack::new();
    stack.rotate_deg(90.0, Vec3::Z);
    let p = stack.current().transform_point3(Vec3::X);
    assert!(vec3_approx(p, Vec3::Y));
}

#[test]
fn rotate_deg_normalizes_axis() {
    let mut a = MatrixStack::new();
    a.rotate_deg(30.0, Vec3::new(0.0, 0.0, 5.0));
    let mut b = MatrixStack::new();
    b.rotate_deg(30.0, Vec3::Z);
    assert!(mat4_approx(a.current(), b.current()));
}

#[test]
fn rotate_about_negative_x_tips_forward() {
    // Positive angles about -X swing -Y toward +Z
    let mut stack = MatrixStack::new();
    stack.rotate_deg(90.0, Vec3::NEG_X);
    let p = stack.current().transform_point3(Vec3::NEG_Y);
    assert!(vec3_approx(p, Vec3::Z), "got {p}");
}

#[test]
fn rotate_with_zero_axis_or_angle_is_noop() {
    let mut stack = MatrixStack::new();
    stack.translate(Vec3::ONE);
    let before = stack.current();

    stack.rotate_deg(45.0, Vec3::ZERO);
    stack.rotate_deg(0.0, Vec3::X);
    assert_eq!(stack.current(), before);
}

// ============================================================================
// scoped
// ============================================================================

#[test]
fn scoped_restores_after_success() -> anyhow::Result<()> {
    let mut stack = MatrixStack::new();
    let inner = stack.scoped(|s| {
        s.translate(Vec3::new(2.0, 0.0, 0.0));
        Ok(s.current())
    })?;

    assert_eq!(stack.current(), Mat4::IDENTITY);
    assert_eq!(stack.depth(), 0);
    assert!(vec3_approx(inner.transform_point3(Vec3::ZERO), Vec3::new(2.0, 0.0, 0.0)));
    Ok(())
}

#[test]
fn scoped_restores_after_error() {
    let mut stack = MatrixStack::new();
    let result: dancebot::Result<()> = stack.scoped(|s| {
        s.scale(Vec3::splat(3.0));
        Err(DanceError::NotInitialized)
    });

    assert!(matches!(result, Err(DanceError::NotInitialized)));
    assert_eq!(stack.depth(), 0);
    assert_eq!(stack.current(), Mat4::IDENTITY);
}

#[test]
fn deep_nesting_spills_past_inline_storage() -> anyhow::Result<()> {
    let mut stack = MatrixStack::new();
    for _ in 0..32 {
        stack.push();
        stack.translate(Vec3::X);
    }
    assert_eq!(stack.depth(), 32);
    assert!(vec3_approx(stack.current().transform_point3(Vec3::ZERO), Vec3::new(32.0, 0.0, 0.0)));

    for _ in 0..32 {
        stack.pop()?;
    }
    assert_eq!(stack.current(), Mat4::IDENTITY);
    Ok(())
}
