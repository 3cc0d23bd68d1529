use crate::components::{Adversary, Food, Player, Rect, Wall};

/// Anything with an axis-aligned bounding box.
pub trait Collider {
    fn bounds(&self) -> Rect;
}

impl Collider for Rect {
    fn bounds(&self) -> Rect {
        *self
    }
}

impl Collider for Wall {
    fn bounds(&self) -> Rect {
        self.rect()
    }
}

impl Collider for Food {
    fn bounds(&self) -> Rect {
        self.rect()
    }
}

impl Collider for Adversary {
    fn bounds(&self) -> Rect {
        self.body.rect()
    }
}

impl Collider for Player {
    fn bounds(&self) -> Rect {
        self.body.rect()
    }
}

/// Strict AABB intersection: rectangles that only share an edge do not overlap.
pub fn overlaps(a: &impl Collider, b: &impl Collider) -> bool {
    let a = a.bounds();
    let b = b.bounds();
    debug_assert!(a.width > 0 && a.height > 0, "degenerate collider {a:?}");
    debug_assert!(b.width > 0 && b.height > 0, "degenerate collider {b:?}");
    a.x < b.x + b.width && a.x + a.width > b.x && a.y < b.y + b.height && a.y + a.height > b.y
}

pub fn hits_any_wall(body: &impl Collider, walls: &[Wall]) -> bool {
    walls.iter().any(|wall| overlaps(body, wall))
}
