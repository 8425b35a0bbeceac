use gridpath_core::{GridMap, Point};

/// Step offsets in the fixed expansion order: down, up, right, left.
///
/// The order is part of the search contract; among equally short paths it
/// decides which one is returned.
pub const STEPS: [Point; 4] = [
    Point::new(0, 1),
    Point::new(0, -1),
    Point::new(1, 0),
    Point::new(-1, 0),
];

/// Passability interface for the search.
pub trait Terrain {
    /// Whether `p` can be stepped onto.
    fn passable(&self, p: Point) -> bool;

    /// Append the passable orthogonal neighbors of `p` into `buf`, in
    /// [`STEPS`] order. The caller clears `buf` before calling.
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        for d in STEPS {
            let n = p + d;
            if self.passable(n) {
                buf.push(n);
            }
        }
    }
}

impl Terrain for GridMap<'_> {
    fn passable(&self, p: Point) -> bool {
        self.traversable(p)
    }
}
