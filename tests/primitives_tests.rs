//! Primitive Mesh Tests
//!
//! Tests for:
//! - Box vertex/index layout, bounds and outward winding
//! - Sphere bounds, normals and pole handling
//! - Axis point guide
//! - Color palette conversion

use glam::Vec3;

use dancebot::resources::primitives::{SphereOptions, create_axis_points, create_box, create_sphere};
use dancebot::resources::{Color, MeshData, Shape, Vertex};

const EPSILON: f32 = 1e-4;

fn vec3_approx(a: Vec3, b: Vec3) -> bool {
    (a - b).abs().max_element() < EPSILON
}

fn position(mesh: &MeshData, index: u16) -> Vec3 {
    Vec3::from_array(mesh.vertices[index as usize].position)
}

/// Every triangle's geometric normal must point the same way as its vertex
/// normals, i.e. counter-clockwise seen from outside.
fn assert_outward_winding(mesh: &MeshData) {
    for tri in mesh.indices.chunks_exact(3) {
        let (a, b, c) = (position(mesh, tri[0]), position(mesh, tri[1]), position(mesh, tri[2]));
        let face = (b - a).cross(c - a);
        let vertex_normal = Vec3::from_array(mesh.vertices[tri[0] as usize].normal);
        assert!(face.dot(vertex_normal) > 0.0, "triangle {tri:?} winds inward");
    }
}

// ============================================================================
// Box
// ============================================================================

#[test]
fn box_has_flat_faces() {
    let mesh = create_box(2.0, 2.0, 2.0);
    assert_eq!(mesh.vertices.len(), 24);
    assert_eq!(mesh.indices.len(), 36);
    assert!(mesh.is_indexed());
    assert_eq!(mesh.element_count(), 36);
}

#[test]
fn unit_cube_spans_minus_one_to_one() {
    let (min, max) = create_box(2.0, 2.0, 2.0).bounds().expect("box has vertices");
    assert!(vec3_approx(min, Vec3::splat(-1.0)));
    assert!(vec3_approx(max, Vec3::splat(1.0)));
}

#[test]
fn box_dimensions_are_full_extents() {
    let (min, max) = create_box(1.0, 4.0, 0.5).bounds().expect("box has vertices");
    assert!(vec3_approx(max - min, Vec3::new(1.0, 4.0, 0.5)));
}

#[test]
fn box_normals_are_axis_aligned_units() {
    let mesh = create_box(2.0, 2.0, 2.0);
    for v in &mesh.vertices {
        let n = Vec3::from_array(v.normal);
        assert!((n.length() - 1.0).abs() < EPSILON);
        assert!(vec3_approx(n.abs(), Vec3::X) || vec3_approx(n.abs(), Vec3::Y) || vec3_approx(n.abs(), Vec3::Z));
        // Each vertex lies on the face its normal points out of
        assert!((Vec3::from_array(v.position).dot(n) - 1.0).abs() < EPSILON);
    }
}

#[test]
fn box_winds_counter_clockwise() {
    assert_outward_winding(&create_box(2.0, 2.0, 2.0));
}

// ============================================================================
// Sphere
// ============================================================================

#[test]
fn default_sphere_has_unit_radius() {
    let mesh = create_sphere(SphereOptions::default());
    for v in &mesh.vertices {
        assert!((Vec3::from_array(v.position).length() - 1.0).abs() < EPSILON);
    }
    let (min, max) = mesh.bounds().expect("sphere has vertices");
    assert!(vec3_approx(min, Vec3::splat(-1.0)));
    assert!(vec3_approx(max, Vec3::splat(1.0)));
}

#[test]
fn sphere_normals_point_out_of_the_center() {
    let mesh = create_sphere(SphereOptions { radius: 2.5, ..Default::default() });
    for v in &mesh.vertices {
        let p = Vec3::from_array(v.position);
        let n = Vec3::from_array(v.normal);
        assert!(vec3_approx(p / 2.5, n));
    }
}

#[test]
fn sphere_vertex_and_index_counts() {
    let mesh = create_sphere(SphereOptions {
        radius: 1.0,
        width_segments: 8,
        height_segments: 4,
    });
    assert_eq!(mesh.vertices.len(), 9 * 5);
    // Two triangles per quad, minus one per quad on each pole row
    assert_eq!(mesh.indices.len(), (8 * 4 * 2 - 8 * 2) * 3);
    assert!(mesh.indices.iter().all(|&i| (i as usize) < mesh.vertices.len()));
}

#[test]
fn sphere_winds_counter_clockwise() {
    assert_outward_winding(&create_sphere(SphereOptions::default()));
}

#[test]
fn sphere_segments_are_clamped() {
    let tiny = create_sphere(SphereOptions {
        radius: 1.0,
        width_segments: 0,
        height_segments: 0,
    });
    assert_eq!(tiny.vertices.len(), 4 * 3);

    let huge = create_sphere(SphereOptions {
        radius: 1.0,
        width_segments: 10_000,
        height_segments: 10_000,
    });
    assert!(huge.vertices.len() <= usize::from(u16::MAX) + 1);
}

// ============================================================================
// Axis guide
// ============================================================================

#[test]
fn axis_points_cover_each_axis() {
    let mesh = create_axis_points(1.0, 0.5);
    assert!(!mesh.is_indexed());
    // -1, -0.5, 0, 0.5, 1 on each of three axes
    assert_eq!(mesh.vertices.len(), 15);
    assert_eq!(mesh.element_count(), 15);

    let on_axis = |v: &Vertex| v.position.iter().filter(|c| c.abs() > EPSILON).count() <= 1;
    assert!(mesh.vertices.iter().all(on_axis));
}

#[test]
fn axis_points_reject_bad_inputs() {
    assert!(create_axis_points(0.0, 0.1).vertices.is_empty());
    assert!(create_axis_points(3.0, 0.0).vertices.is_empty());
    assert!(create_axis_points(3.0, f32::NAN).vertices.is_empty());
    assert!(create_axis_points(-1.0, 0.1).bounds().is_none());
}

// ============================================================================
// Shapes and colors
// ============================================================================

#[test]
fn shape_indices_are_dense() {
    for (i, shape) in Shape::ALL.iter().enumerate() {
        assert_eq!(shape.index(), i);
    }
}

#[test]
fn vertex_layout_is_position_then_normal() {
    let layout = Vertex::layout();
    assert_eq!(layout.array_stride, 24);
    assert_eq!(layout.attributes.len(), 2);
    assert_eq!(layout.attributes[1].offset, 12);
    assert_eq!(layout.attributes[1].shader_location, 1);
}

#[test]
fn palette_is_opaque() {
    for c in [Color::RED, Color::BLUE, Color::GREY, Color::GREEN, Color::BACKGROUND] {
        assert!((c.0.w - 1.0).abs() < f32::EPSILON);
    }
    assert_eq!(Color::RED.to_array(), [0.314, 0.0, 0.0, 1.0]);
}

#[test]
fn background_converts_to_wgpu_clear_color() {
    let clear: wgpu::Color = Color::BACKGROUND.into();
    assert!((clear.r - 0.2).abs() < 1e-6);
    assert!((clear.g - 0.2).abs() < 1e-6);
    assert!((clear.b - 0.2).abs() < 1e-6);
    assert!((clear.a - 1.0).abs() < 1e-12);
}
