use gridpath_core::Point;

use crate::distance::manhattan;
use crate::frontier::Frontier;
use crate::traits::Terrain;

// ---------------------------------------------------------------------------
// Internal per-cell bookkeeping
// ---------------------------------------------------------------------------

/// Search bookkeeping for one cell, stored in a flat table indexed by cell.
///
/// `generation` stamps which search the entry belongs to; entries from
/// earlier searches are stale and treated as unseen. `open` distinguishes
/// frontier membership from finalized cells within the current generation.
#[derive(Clone)]
struct Node {
    g: i32,
    parent: usize,
    generation: u32,
    open: bool,
}

impl Default for Node {
    fn default() -> Self {
        Self {
            g: 0,
            parent: usize::MAX,
            generation: 0,
            open: false,
        }
    }
}

// ---------------------------------------------------------------------------
// Pathfinder
// ---------------------------------------------------------------------------

/// Reusable A* engine for a `width` x `height` grid.
///
/// The engine owns its node table, frontier heap, and neighbor scratch
/// buffer, so repeated queries incur no allocations after warm-up. Each
/// query starts from logically empty state: a generation bump invalidates
/// everything the previous search left behind.
pub struct Pathfinder {
    width: i32,
    height: i32,
    nodes: Vec<Node>,
    generation: u32,
    frontier: Frontier,
    nbuf: Vec<Point>,
}

impl Pathfinder {
    /// Create an engine for the given grid dimensions. Non-positive
    /// dimensions yield an empty engine whose queries all return `None`.
    pub fn new(width: i32, height: i32) -> Self {
        let w = width.max(0);
        let h = height.max(0);
        Self {
            width: w,
            height: h,
            nodes: vec![Node::default(); w as usize * h as usize],
            generation: 0,
            frontier: Frontier::new(),
            nbuf: Vec::with_capacity(4),
        }
    }

    /// Change the grid dimensions.
    ///
    /// If the new cell count fits within the existing node table, the table
    /// is kept and only the generation counter is bumped so stale entries
    /// are ignored. Otherwise the table is reallocated.
    pub fn resize(&mut self, width: i32, height: i32) {
        let w = width.max(0);
        let h = height.max(0);
        let new_len = w as usize * h as usize;
        self.width = w;
        self.height = h;

        if new_len <= self.nodes.len() {
            self.generation = self.generation.wrapping_add(1);
            return;
        }

        self.nodes.clear();
        self.nodes.resize(new_len, Node::default());
        self.generation = 0;
    }

    /// Grid width the engine was sized for.
    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Grid height the engine was sized for.
    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Convert a point to a flat index. Returns `None` if outside the grid.
    #[inline]
    fn idx(&self, p: Point) -> Option<usize> {
        if p.x < 0 || p.x >= self.width || p.y < 0 || p.y >= self.height {
            return None;
        }
        Some(p.y as usize * self.width as usize + p.x as usize)
    }

    /// Convert a flat index back to a point.
    #[inline]
    fn point(&self, idx: usize) -> Point {
        let w = self.width as usize;
        Point::new((idx % w) as i32, (idx / w) as i32)
    }

    /// Compute the shortest path from `from` to `to` over `terrain`.
    ///
    /// Steps cost 1 and move down, up, right, or left. Returns the full
    /// path including both endpoints, or `None` if `to` cannot be reached.
    /// `from` is taken as given and does not need to be passable.
    pub fn shortest_path<T: Terrain>(
        &mut self,
        terrain: &T,
        from: Point,
        to: Point,
    ) -> Option<Vec<Point>> {
        let start_idx = self.idx(from)?;
        let goal_idx = self.idx(to)?;

        if start_idx == goal_idx {
            return Some(vec![from]);
        }

        // Bump generation to lazily invalidate all nodes.
        self.generation = self.generation.wrapping_add(1);
        let cur_gen = self.generation;

        {
            let node = &mut self.nodes[start_idx];
            node.g = 0;
            node.parent = usize::MAX;
            node.generation = cur_gen;
            node.open = true;
        }

        self.frontier.clear();
        let h0 = manhattan(from, to);
        self.frontier.push(start_idx, h0 as i64, h0);

        let mut nbuf = std::mem::take(&mut self.nbuf);

        let found = 'search: loop {
            let Some(entry) = self.frontier.pop() else {
                break 'search false;
            };

            let ci = entry.idx;

            // Skip stale entries: superseded by a cheaper relaxation, or
            // left over from an earlier search.
            if self.nodes[ci].generation != cur_gen || !self.nodes[ci].open {
                continue;
            }

            if ci == goal_idx {
                break 'search true;
            }

            self.nodes[ci].open = false;
            let current_g = self.nodes[ci].g;
            let current_point = self.point(ci);

            nbuf.clear();
            terrain.neighbors(current_point, &mut nbuf);

            for &np in nbuf.iter() {
                let Some(ni) = self.idx(np) else {
                    continue;
                };
                let tentative_g = current_g + 1;

                let n = &mut self.nodes[ni];
                if n.generation == cur_gen {
                    // Seen this search; only a strictly cheaper route
                    // matters. Finalized cells never qualify under unit
                    // costs.
                    if tentative_g >= n.g {
                        continue;
                    }
                } else {
                    n.generation = cur_gen;
                }

                n.g = tentative_g;
                n.parent = ci;
                n.open = true;

                let h = manhattan(np, to);
                self.frontier.push(ni, tentative_g as i64 + h as i64, h);
            }
        };

        self.nbuf = nbuf;

        if !found {
            return None;
        }

        // Walk the parent chain back from the goal.
        let mut path = Vec::new();
        let mut ci = goal_idx;
        while ci != usize::MAX {
            path.push(self.point(ci));
            // A chain longer than the node table means a corrupted parent
            // link; failing loudly beats returning a wrong path.
            assert!(
                path.len() <= self.nodes.len(),
                "parent chain does not terminate at the start"
            );
            ci = self.nodes[ci].parent;
        }
        path.reverse();
        Some(path)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Pathfinder {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        (self.width, self.height).serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Pathfinder {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let (width, height) = <(i32, i32)>::deserialize(deserializer)?;
        Ok(Pathfinder::new(width, height))
    }
}
