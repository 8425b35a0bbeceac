use gridpath_core::{GridMap, Point};

use crate::error::{InvalidInput, PathError};
use crate::search::Pathfinder;

/// Find the shortest path from `start` to `target` on `map`.
///
/// On success, writes the row-major index of every path cell after `start`,
/// up to and including `target`, into `out` and returns how many were
/// written. `start == target` succeeds with 0, even for an empty buffer.
///
/// On any failure nothing is written: the target may be unreachable
/// ([`PathError::NoPathFound`]), the path may not fit
/// ([`PathError::BufferTooSmall`]), or an endpoint may lie outside the map
/// ([`PathError::InvalidInput`]). A `start` on a blocked tile is accepted;
/// movement away from it is still only onto traversable cells.
pub fn find_path(
    map: &GridMap<'_>,
    start: Point,
    target: Point,
    out: &mut [i32],
) -> Result<usize, PathError> {
    log::trace!(
        "find_path: start={} target={} map={}x{}",
        start,
        target,
        map.width(),
        map.height()
    );

    if !map.contains(start) {
        log::debug!("find_path rejected: start {} out of bounds", start);
        return Err(InvalidInput::StartOutOfBounds(start).into());
    }
    if !map.contains(target) {
        log::debug!("find_path rejected: target {} out of bounds", target);
        return Err(InvalidInput::TargetOutOfBounds(target).into());
    }

    let mut finder = Pathfinder::new(map.width(), map.height());
    let Some(path) = finder.shortest_path(map, start, target) else {
        log::debug!("find_path failed: no route from {} to {}", start, target);
        return Err(PathError::NoPathFound);
    };

    // The first point is the start; it is not part of the output.
    let steps = path.len() - 1;
    if steps > out.len() {
        log::debug!(
            "find_path failed: {} steps exceed buffer capacity {}",
            steps,
            out.len()
        );
        return Err(PathError::BufferTooSmall {
            required: steps,
            capacity: out.len(),
        });
    }

    for (slot, &p) in out.iter_mut().zip(&path[1..]) {
        // The search never leaves the map, so the index math cannot
        // overflow the validated cell count.
        *slot = p.y * map.width() + p.x;
    }

    log::trace!("find_path: {} steps", steps);
    Ok(steps)
}
