use clipshape::Editor;

#[test]
fn editor_snap_honors_grid_divisions() {
    let mut ed = Editor::new();
    ed.set_grid_divisions(10);
    let (x, y) = ed.snap(0.234, 0.876);
    assert!((x - 0.2).abs() < 1e-6);
    assert!((y - 0.9).abs() < 1e-6);
}

#[test]
fn grid_divisions_are_clamped_to_supported_range() {
    let mut ed = Editor::new();
    ed.set_grid_divisions(2);
    assert_eq!(ed.snap_config().grid_divisions, 4);
    ed.set_grid_divisions(500);
    assert_eq!(ed.snap_config().grid_divisions, 50);
}

#[test]
fn point_snap_pulls_to_existing_vertices() {
    let mut ed = Editor::new();
    ed.set_grid_enabled(false);
    ed.set_snap_to_points(true);
    // Rectangle preset has a vertex at (0.1, 0.1)
    let (x, y) = ed.snap(0.11, 0.095);
    assert_eq!((x, y), (0.1, 0.1));
}

#[test]
fn center_snap_pulls_each_axis_independently() {
    let mut ed = Editor::new();
    ed.set_grid_enabled(false);
    ed.set_snap_to_center(true);
    let (x, y) = ed.snap(0.49, 0.2);
    assert_eq!(x, 0.5);
    assert_eq!(y, 0.2);
}

#[test]
fn snapping_never_leaves_the_unit_square() {
    let mut ed = Editor::new();
    ed.set_grid_divisions(7);
    for i in 0..=100 {
        let t = i as f32 / 100.0;
        let (x, y) = ed.snap(t, 1.0 - t);
        assert!((0.0..=1.0).contains(&x));
        assert!((0.0..=1.0).contains(&y));
    }
}
