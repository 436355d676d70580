//! Screen-space primitives — positions and axis-aligned boxes.

/// A point (or displacement) in logical screen coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub fn new(x: f32, y: f32) -> Self {
        Vec2 { x, y }
    }
}

/// An axis-aligned bounding box, built transiently for collision checks.
#[derive(Clone, Copy, Debug)]
pub struct CollisionBox {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl CollisionBox {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        CollisionBox { x, y, width, height }
    }
}

/// True iff the two boxes intersect.  Strict comparisons on every edge, so
/// boxes that merely touch do not collide.
pub fn overlaps(a: &CollisionBox, b: &CollisionBox) -> bool {
    a.x + a.width > b.x
        && a.y + a.height > b.y
        && a.x < b.x + b.width
        && a.y < b.y + b.height
}
