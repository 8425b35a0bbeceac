//! The C search entry point.

use std::panic::{AssertUnwindSafe, catch_unwind};

use gridpath::find_path;
use gridpath_core::{GridMap, Point};

use crate::status::GridPathStatus;

/// Run an FFI body, mapping panics to [`GridPathStatus::Panicked`] so they
/// never unwind across the C boundary.
fn guarded(body: impl FnOnce() -> i32) -> i32 {
    match catch_unwind(AssertUnwindSafe(body)) {
        Ok(code) => code,
        Err(_) => GridPathStatus::Panicked as i32,
    }
}

/// Find the shortest path between two cells of a byte map.
///
/// `map` points to `map_width * map_height` bytes in row-major order; a
/// value of 1 marks a traversable cell and every other value blocks. On
/// success the row-major indices of the path cells after the start, up to
/// and including the target, are written to `out_buffer` and their count is
/// returned. A query whose start equals its target succeeds with 0.
///
/// Failures return a negative [`GridPathStatus`] value and write nothing:
/// `-1` when no route exists, `-2` when the path has more than
/// `out_capacity` steps, `-3` for null pointers, non-positive dimensions,
/// or endpoints outside the map.
///
/// # Safety
///
/// `map` must point to `map_width * map_height` readable bytes and
/// `out_buffer` to `out_capacity` writable `int32_t` slots for the duration
/// of the call.
#[allow(unsafe_code)]
#[unsafe(no_mangle)]
pub extern "C" fn gridpath_find_path(
    start_x: i32,
    start_y: i32,
    target_x: i32,
    target_y: i32,
    map: *const u8,
    map_width: i32,
    map_height: i32,
    out_buffer: *mut i32,
    out_capacity: i32,
) -> i32 {
    guarded(|| {
        if map.is_null() || out_buffer.is_null() {
            return GridPathStatus::InvalidArgument as i32;
        }
        if map_width <= 0 || map_height <= 0 || out_capacity < 0 {
            return GridPathStatus::InvalidArgument as i32;
        }
        let cells = map_width as u64 * map_height as u64;
        if cells > i32::MAX as u64 {
            // Reject before trusting `map` to span that many bytes.
            return GridPathStatus::InvalidArgument as i32;
        }

        // SAFETY: map points to map_width * map_height readable bytes per
        // the caller contract; the count was validated above.
        let tiles = unsafe { std::slice::from_raw_parts(map, cells as usize) };

        let grid = match GridMap::new(tiles, map_width, map_height) {
            Ok(g) => g,
            Err(_) => return GridPathStatus::InvalidArgument as i32,
        };

        // SAFETY: out_buffer points to out_capacity writable i32 slots per
        // the caller contract; out_capacity was validated non-negative.
        let out = unsafe { std::slice::from_raw_parts_mut(out_buffer, out_capacity as usize) };

        match find_path(
            &grid,
            Point::new(start_x, start_y),
            Point::new(target_x, target_y),
            out,
        ) {
            Ok(steps) => steps as i32,
            Err(e) => GridPathStatus::from(&e) as i32,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const DEMO: [u8; 12] = [1, 1, 1, 1, 0, 1, 0, 1, 0, 1, 1, 1];

    #[test]
    fn demo_map_round_trip() {
        let mut out = [0i32; 12];
        let n = gridpath_find_path(0, 0, 1, 2, DEMO.as_ptr(), 4, 3, out.as_mut_ptr(), 12);
        assert_eq!(n, 3);
        assert_eq!(&out[..3], &[1, 5, 9]);
    }

    #[test]
    fn walled_in_target_reports_no_path() {
        let tiles = [0u8, 0, 1, 0, 1, 1, 1, 0, 1];
        let mut out = [0i32; 7];
        let n = gridpath_find_path(2, 0, 0, 2, tiles.as_ptr(), 3, 3, out.as_mut_ptr(), 7);
        assert_eq!(n, GridPathStatus::NoPath as i32);
    }

    #[test]
    fn short_buffer_reports_capacity() {
        let mut out = [-9i32; 2];
        let n = gridpath_find_path(0, 0, 1, 2, DEMO.as_ptr(), 4, 3, out.as_mut_ptr(), 2);
        assert_eq!(n, GridPathStatus::BufferTooSmall as i32);
        assert_eq!(out, [-9, -9]);
    }

    #[test]
    fn null_pointers_are_invalid() {
        let mut out = [0i32; 4];
        let n = gridpath_find_path(0, 0, 1, 1, std::ptr::null(), 2, 2, out.as_mut_ptr(), 4);
        assert_eq!(n, GridPathStatus::InvalidArgument as i32);

        let tiles = [1u8; 4];
        let n = gridpath_find_path(0, 0, 1, 1, tiles.as_ptr(), 2, 2, std::ptr::null_mut(), 4);
        assert_eq!(n, GridPathStatus::InvalidArgument as i32);
    }

    #[test]
    fn bad_dimensions_are_invalid() {
        let tiles = [1u8; 4];
        let mut out = [0i32; 4];
        let n = gridpath_find_path(0, 0, 1, 1, tiles.as_ptr(), 0, 4, out.as_mut_ptr(), 4);
        assert_eq!(n, GridPathStatus::InvalidArgument as i32);
        let n = gridpath_find_path(0, 0, 1, 1, tiles.as_ptr(), 2, 2, out.as_mut_ptr(), -1);
        assert_eq!(n, GridPathStatus::InvalidArgument as i32);
    }

    #[test]
    fn out_of_bounds_endpoints_are_invalid() {
        let tiles = [1u8; 4];
        let mut out = [0i32; 4];
        let n = gridpath_find_path(-1, 0, 1, 1, tiles.as_ptr(), 2, 2, out.as_mut_ptr(), 4);
        assert_eq!(n, GridPathStatus::InvalidArgument as i32);
        let n = gridpath_find_path(0, 0, 2, 0, tiles.as_ptr(), 2, 2, out.as_mut_ptr(), 4);
        assert_eq!(n, GridPathStatus::InvalidArgument as i32);
    }

    #[test]
    fn same_cell_succeeds_with_zero_capacity() {
        let tiles = [1u8; 4];
        let n = gridpath_find_path(1, 1, 1, 1, tiles.as_ptr(), 2, 2, std::ptr::null_mut(), 0);
        // Capacity 0 still needs a non-null buffer pointer.
        assert_eq!(n, GridPathStatus::InvalidArgument as i32);

        let mut out = [0i32; 1];
        let n = gridpath_find_path(1, 1, 1, 1, tiles.as_ptr(), 2, 2, out.as_mut_ptr(), 0);
        assert_eq!(n, 0);
    }
}
