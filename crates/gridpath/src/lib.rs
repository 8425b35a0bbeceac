//! Shortest-path search on 2D byte-map grids.
//!
//! This crate implements A* best-first search with the Manhattan heuristic,
//! unit step costs, and 4-way movement:
//!
//! - [`find_path`] — one-shot query that writes the row-major cell indices
//!   of the path into a caller buffer (the embeddable entry point)
//! - [`Pathfinder`] — reusable engine that keeps its internal caches across
//!   queries
//! - [`Terrain`] — passability seam for running the same search over maps
//!   other than [`GridMap`](gridpath_core::GridMap)
//!
//! # Determinism
//!
//! Results are fully deterministic. Neighbors are expanded in the fixed
//! order down, up, right, left ([`STEPS`]), and frontier ties are broken by
//! smaller f-score, then smaller heuristic, then earlier insertion. Equal
//! queries return identical paths.

mod distance;
mod error;
mod findpath;
mod frontier;
mod search;
mod traits;

pub use distance::manhattan;
pub use error::{InvalidInput, PathError};
pub use findpath::find_path;
pub use search::Pathfinder;
pub use traits::{STEPS, Terrain};
