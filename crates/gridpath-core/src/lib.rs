//! **gridpath-core** — Byte-map grid model and geometry.
//!
//! This crate provides the foundational types used across the *gridpath*
//! workspace: the [`Point`] geometry primitive and the [`GridMap`] read-only
//! view over a caller-owned byte map that searches run on.

pub mod geom;
pub mod map;

pub use geom::Point;
pub use map::{GridMap, MapError, TRAVERSABLE};
