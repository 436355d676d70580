use space_invaders::geometry::{overlaps, CollisionBox};

fn boxed(x: f32, y: f32, w: f32, h: f32) -> CollisionBox {
    CollisionBox::new(x, y, w, h)
}

#[test]
fn overlapping_boxes_collide() {
    let a = boxed(0.0, 0.0, 10.0, 10.0);
    let b = boxed(5.0, 5.0, 10.0, 10.0);
    assert!(overlaps(&a, &b));
}

#[test]
fn contained_box_collides() {
    let a = boxed(0.0, 0.0, 20.0, 20.0);
    let b = boxed(5.0, 5.0, 2.0, 2.0);
    assert!(overlaps(&a, &b));
}

#[test]
fn disjoint_boxes_do_not_collide() {
    let a = boxed(0.0, 0.0, 10.0, 10.0);
    let b = boxed(50.0, 50.0, 10.0, 10.0);
    assert!(!overlaps(&a, &b));
}

#[test]
fn touching_edges_do_not_collide() {
    // Strict comparisons: sharing an edge is not an overlap
    let a = boxed(0.0, 0.0, 10.0, 10.0);
    let right = boxed(10.0, 0.0, 10.0, 10.0);
    let below = boxed(0.0, 10.0, 10.0, 10.0);
    assert!(!overlaps(&a, &right));
    assert!(!overlaps(&a, &below));
}

#[test]
fn overlap_is_symmetric() {
    let pairs = [
        (boxed(0.0, 0.0, 10.0, 10.0), boxed(5.0, 5.0, 10.0, 10.0)),
        (boxed(0.0, 0.0, 10.0, 10.0), boxed(50.0, 0.0, 10.0, 10.0)),
        (boxed(3.0, 4.0, 5.0, 10.0), boxed(2.0, 9.0, 30.0, 2.0)),
        (boxed(0.0, 0.0, 1.0, 1.0), boxed(1.0, 1.0, 1.0, 1.0)),
    ];

    for (a, b) in &pairs {
        assert_eq!(overlaps(a, b), overlaps(b, a));
    }
}

#[test]
fn shifted_by_own_extent_does_not_collide() {
    let a = boxed(20.0, 30.0, 8.0, 6.0);

    for (dx, dy) in [(8.0, 0.0), (-8.0, 0.0), (0.0, 6.0), (0.0, -6.0)] {
        let shifted = boxed(a.x + dx, a.y + dy, a.width, a.height);
        assert!(!overlaps(&a, &shifted), "shift ({dx}, {dy}) must miss");
    }
}
