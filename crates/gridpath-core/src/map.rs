//! The byte-map grid: a read-only view over caller-owned tile data.

use thiserror::Error;

use crate::geom::Point;

/// Tile value marking a cell that can be stepped onto. Every other byte
/// value blocks movement.
pub const TRAVERSABLE: u8 = 1;

/// Reasons a byte buffer cannot be used as a grid map.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MapError {
    /// Width or height is zero or negative.
    #[error("invalid map dimensions {width}x{height}")]
    InvalidDimensions { width: i32, height: i32 },
    /// The buffer length does not match `width * height`.
    #[error("map buffer holds {len} cells, dimensions require {expected}")]
    LengthMismatch { expected: usize, len: usize },
    /// The cell count exceeds what flat `i32` indices can address.
    #[error("map has {cells} cells, at most {max} are supported")]
    TooManyCells { cells: u64, max: u64 },
}

/// A rectangular byte map borrowed from the caller.
///
/// Cells are stored row-major: the byte for `(x, y)` lives at index
/// `y * width + x`. The map never copies or mutates the underlying buffer;
/// the borrow keeps the caller from mutating it mid-search.
#[derive(Copy, Clone, Debug)]
pub struct GridMap<'a> {
    tiles: &'a [u8],
    width: i32,
    height: i32,
}

impl<'a> GridMap<'a> {
    /// Create a map view over `tiles`.
    ///
    /// Dimensions must be positive, `tiles.len()` must equal
    /// `width * height`, and the cell count must fit in an `i32` so that
    /// every flat index is representable.
    pub fn new(tiles: &'a [u8], width: i32, height: i32) -> Result<Self, MapError> {
        if width <= 0 || height <= 0 {
            return Err(MapError::InvalidDimensions { width, height });
        }
        let cells = width as u64 * height as u64;
        if cells > i32::MAX as u64 {
            return Err(MapError::TooManyCells {
                cells,
                max: i32::MAX as u64,
            });
        }
        if tiles.len() as u64 != cells {
            return Err(MapError::LengthMismatch {
                expected: cells as usize,
                len: tiles.len(),
            });
        }
        Ok(Self {
            tiles,
            width,
            height,
        })
    }

    /// Width in cells.
    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Height in cells.
    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Total number of cells.
    #[inline]
    pub fn cells(&self) -> usize {
        self.tiles.len()
    }

    /// Whether `p` lies inside the map rectangle.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= 0 && p.x < self.width && p.y >= 0 && p.y < self.height
    }

    /// Whether `p` is inside the map and carries the [`TRAVERSABLE`] tile
    /// value. Out-of-bounds points are never traversable.
    #[inline]
    pub fn traversable(&self, p: Point) -> bool {
        match self.index_of(p) {
            Some(i) => self.tiles[i] == TRAVERSABLE,
            None => false,
        }
    }

    /// Convert a point to its flat row-major index. Returns `None` if out
    /// of bounds.
    #[inline]
    pub fn index_of(&self, p: Point) -> Option<usize> {
        if !self.contains(p) {
            return None;
        }
        Some(p.y as usize * self.width as usize + p.x as usize)
    }

    /// Convert a flat row-major index back to a point. The index is not
    /// bounds-checked; indices at or past [`cells`](Self::cells) yield
    /// points outside the map.
    #[inline]
    pub fn point_of(&self, idx: usize) -> Point {
        let w = self.width as usize;
        Point::new((idx % w) as i32, (idx / w) as i32)
    }
}
