use clipshape::geometry::tolerance::{approx_eq, EPS_POS};
use clipshape::presets::Preset;
use clipshape::Editor;

fn rect_editor() -> Editor {
    let mut ed = Editor::new();
    ed.set_grid_enabled(false);
    ed
}

#[test]
fn scale_out_of_bounds_is_rejected_atomically() {
    let mut ed = rect_editor();
    let before = ed.shape().clone();
    // 1.5x pushes the 0.1/0.9 rectangle to -0.1/1.1
    assert!(!ed.scale(1.5));
    assert_eq!(*ed.shape(), before);
    assert!(!ed.can_undo());
}

#[test]
fn scale_within_bounds_contracts_about_center() {
    let mut ed = rect_editor();
    assert!(ed.scale(0.5));
    let v = *ed.shape().vertex(1).unwrap();
    assert!((v.x - 0.3).abs() < 1e-6);
    assert!((v.y - 0.3).abs() < 1e-6);
    let v3 = *ed.shape().vertex(3).unwrap();
    assert!((v3.x - 0.7).abs() < 1e-6);
    assert!((v3.y - 0.7).abs() < 1e-6);
}

#[test]
fn scale_rejects_non_finite_factor() {
    let mut ed = rect_editor();
    assert!(!ed.scale(f32::NAN));
    assert!(!ed.scale(f32::INFINITY));
}

#[test]
fn rotate_may_leave_unit_square() {
    // Deliberate asymmetry with scale: rotation is never reclamped or
    // rejected on bounds.
    let mut ed = rect_editor();
    assert!(ed.rotate(45.0));
    let min_y = ed
        .shape()
        .vertices
        .iter()
        .map(|v| v.y)
        .fold(f32::INFINITY, f32::min);
    assert!(min_y < 0.0, "a 45-degree corner swing exits the square");
    // The path is still generated for the out-of-bounds shape.
    let d = ed.clip_path().unwrap();
    assert!(d.starts_with("M ") && d.ends_with(" Z"));
}

#[test]
fn rotate_full_turn_is_identity_within_tolerance() {
    let mut ed = rect_editor();
    let before = ed.shape().clone();
    assert!(ed.rotate(360.0));
    for (a, b) in before.vertices.iter().zip(&ed.shape().vertices) {
        assert!(approx_eq(a.x, b.x, EPS_POS));
        assert!(approx_eq(a.y, b.y, EPS_POS));
    }
}

#[test]
fn flips_are_involutions_and_always_succeed() {
    let start = Preset::Arrow.shape();
    let mut ed = Editor::with_shape(start.clone()).unwrap();
    ed.flip_horizontal();
    assert!((ed.shape().vertices[0].x - 0.5).abs() < 1e-6);
    assert!(ed.shape().vertices.iter().all(|v| (0.0..=1.0).contains(&v.x)));
    ed.flip_horizontal();
    ed.flip_vertical();
    ed.flip_vertical();
    // Mirroring twice lands back on the start up to one rounding step per
    // flip; ids and kinds are untouched.
    for (a, b) in start.vertices.iter().zip(&ed.shape().vertices) {
        assert_eq!(a.id, b.id);
        assert_eq!(a.kind, b.kind);
        assert!(approx_eq(a.x, b.x, EPS_POS));
        assert!(approx_eq(a.y, b.y, EPS_POS));
    }
}

#[test]
fn flip_preserves_ids_and_radii() {
    let mut ed = Editor::with_shape(Preset::RoundedRect.shape()).unwrap();
    ed.flip_vertical();
    let s = ed.shape();
    assert_eq!(s.vertices.iter().map(|v| v.id).collect::<Vec<_>>(), vec![1, 2, 3, 4]);
    assert!(s.vertices.iter().all(|v| v.radius == 0.08));
}
