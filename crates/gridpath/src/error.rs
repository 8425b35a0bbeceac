use gridpath_core::{MapError, Point};
use thiserror::Error;

/// Ways a query can be malformed. No search is attempted for these.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidInput {
    /// The byte buffer and dimensions do not form a valid map.
    #[error(transparent)]
    Map(#[from] MapError),
    /// The start cell lies outside the map.
    #[error("start {0} is outside the map")]
    StartOutOfBounds(Point),
    /// The target cell lies outside the map.
    #[error("target {0} is outside the map")]
    TargetOutOfBounds(Point),
}

/// Failure modes of [`find_path`](crate::find_path).
///
/// None of these leave partial output: on any error the caller's buffer is
/// untouched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    /// Every cell reachable from the start was expanded without meeting the
    /// target.
    #[error("no path between start and target")]
    NoPathFound,
    /// A shortest path exists but has more steps than the buffer holds.
    #[error("path needs {required} slots, buffer holds {capacity}")]
    BufferTooSmall { required: usize, capacity: usize },
    /// The query was rejected before searching.
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInput),
}

impl From<MapError> for PathError {
    fn from(e: MapError) -> Self {
        PathError::InvalidInput(InvalidInput::Map(e))
    }
}
