//! C-compatible status codes for the search entry point.

use gridpath::PathError;

/// Status returned by [`gridpath_find_path`](crate::gridpath_find_path)
/// when no path length is available.
///
/// All failures are negative, so callers that only test for `< 0` keep
/// working. Values are ABI-stable.
#[repr(i32)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GridPathStatus {
    /// The target is unreachable from the start.
    NoPath = -1,
    /// A path exists but has more steps than the caller's buffer holds.
    BufferTooSmall = -2,
    /// An argument is null, out of range, or otherwise invalid.
    InvalidArgument = -3,
    /// A Rust panic was caught at the FFI boundary.
    Panicked = -128,
}

impl From<&PathError> for GridPathStatus {
    fn from(e: &PathError) -> Self {
        match e {
            PathError::NoPathFound => GridPathStatus::NoPath,
            PathError::BufferTooSmall { .. } => GridPathStatus::BufferTooSmall,
            PathError::InvalidInput(_) => GridPathStatus::InvalidArgument,
        }
    }
}
