use clipshape::model::{Shape, Vertex};
use clipshape::{generate_path, nearest_edge_index, Editor};

#[test]
fn coincident_neighbor_falls_back_to_sharp_corner() {
    // Vertices 2 and 3 coincide, so both adjacent corners must skip
    // rounding even though their radii ask for it.
    let shape = Shape::new(vec![
        Vertex {
            radius: 0.1,
            ..Vertex::corner(1, 0.1, 0.1)
        },
        Vertex {
            radius: 0.1,
            ..Vertex::corner(2, 0.9, 0.1)
        },
        Vertex {
            radius: 0.1,
            ..Vertex::corner(3, 0.9, 0.1)
        },
        Vertex {
            radius: 0.1,
            ..Vertex::corner(4, 0.5, 0.9)
        },
    ]);
    let d = generate_path(&shape, 0.0).unwrap();
    assert!(d.contains("L 0.900, 0.100"), "{}", d);
    assert!(!d.contains("NaN") && !d.contains("inf"), "{}", d);
    assert!(d.starts_with("M ") && d.ends_with(" Z"));
}

#[test]
fn all_vertices_coincident_still_emits_a_closed_path() {
    let shape = Shape::new(vec![
        Vertex {
            radius: 0.2,
            ..Vertex::corner(1, 0.5, 0.5)
        },
        Vertex {
            radius: 0.2,
            ..Vertex::corner(2, 0.5, 0.5)
        },
        Vertex {
            radius: 0.2,
            ..Vertex::corner(3, 0.5, 0.5)
        },
    ]);
    let d = generate_path(&shape, 0.0).unwrap();
    assert_eq!(d, "M 0.500, 0.500 L 0.500, 0.500 L 0.500, 0.500 L 0.500, 0.500 Z");
}

#[test]
fn first_vertex_with_degenerate_prev_edge_moves_to_itself() {
    // prev(vertex 0) coincides with vertex 0, so the move-to cannot offset.
    let shape = Shape::new(vec![
        Vertex {
            radius: 0.1,
            ..Vertex::corner(1, 0.2, 0.2)
        },
        Vertex::corner(2, 0.8, 0.2),
        Vertex::corner(3, 0.5, 0.8),
        Vertex {
            radius: 0.1,
            ..Vertex::corner(4, 0.2, 0.2)
        },
    ]);
    let d = generate_path(&shape, 0.0).unwrap();
    assert!(d.starts_with("M 0.200, 0.200"), "{}", d);
}

#[test]
fn nearest_edge_tolerates_degenerate_edges() {
    let shape = Shape::new(vec![
        Vertex::corner(1, 0.5, 0.5),
        Vertex::corner(2, 0.5, 0.5),
        Vertex::corner(3, 0.9, 0.9),
    ]);
    // Both degenerate edges measure as point distance; index 0 wins the tie.
    assert_eq!(nearest_edge_index(&shape, 0.5, 0.4), 0);
}

#[test]
fn fuzz_2k_random_edits_no_panic() {
    // Simple LCG to avoid external deps
    let mut seed: u64 = 0xDEADBEEFCAFEBABE;
    let mut rnd = || {
        seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1);
        (seed >> 16) as u32
    };

    let mut ed = Editor::new();
    for step in 0..2_000u32 {
        let op = rnd() % 12;
        let x = (rnd() % 1000) as f32 * 0.001;
        let y = (rnd() % 1000) as f32 * 0.001;
        let ids: Vec<u32> = ed.shape().vertices.iter().map(|v| v.id).collect();
        let pick = ids[(rnd() as usize) % ids.len()];
        match op {
            0 => {
                // Keep the shape bounded
                if ed.shape().len() < 64 {
                    let _ = ed.insert_smart(x, y);
                }
            }
            1 => {
                if ed.shape().len() < 64 {
                    let _ = ed.insert_after(Some(pick), x, y);
                }
            }
            2 => {
                let _ = ed.delete_vertex(pick);
            }
            3 => {
                let _ = ed.move_vertex(pick, x * 2.0 - 0.5, y * 2.0 - 0.5);
            }
            4 => {
                let _ = ed.toggle_kind(pick);
            }
            5 => {
                let dir = if rnd() % 2 == 0 {
                    clipshape::algorithms::editing::ReorderDirection::Backward
                } else {
                    clipshape::algorithms::editing::ReorderDirection::Forward
                };
                let _ = ed.reorder_vertex(pick, dir);
            }
            6 => {
                let _ = ed.set_vertex_radius(pick, x);
            }
            7 => {
                let _ = ed.scale(0.5 + x);
            }
            8 => {
                let _ = ed.rotate(x * 720.0 - 360.0);
            }
            9 => {
                if rnd() % 2 == 0 {
                    ed.flip_horizontal();
                } else {
                    ed.flip_vertical();
                }
            }
            10 => {
                let _ = ed.undo();
            }
            11 => {
                let _ = ed.redo();
            }
            _ => {}
        }
        // Structural invariants hold after every step
        assert!(ed.shape().len() >= 3, "step {}", step);
        let mut seen = std::collections::HashSet::new();
        assert!(
            ed.shape().vertices.iter().all(|v| seen.insert(v.id)),
            "duplicate id at step {}",
            step
        );
        if step % 97 == 0 {
            let d = ed.clip_path().unwrap();
            assert!(d.starts_with("M ") && d.ends_with(" Z"));
            assert!(!d.contains("NaN"), "{}", d);
        }
    }
}
