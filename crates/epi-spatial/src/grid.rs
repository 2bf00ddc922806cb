//! Grid geometry.
//!
//! A `Grid` is either toroidal (movement off one edge re-enters on the
//! opposite edge) or bounded (neighborhoods are clipped at the edges).

use epi_core::{Cell, SimRng};

use crate::{SpatialError, SpatialResult};

/// Relative offsets of the eight Moore neighbors.
const MOORE_OFFSETS: [(i64, i64); 8] = [
    (-1, -1), (0, -1), (1, -1),
    (-1,  0),          (1,  0),
    (-1,  1), (0,  1), (1,  1),
];

/// Fixed-size 2-D grid of cells.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    width:    u32,
    height:   u32,
    toroidal: bool,
}

impl Grid {
    /// Create a `width × height` grid.  Both dimensions must be positive.
    pub fn new(width: u32, height: u32, toroidal: bool) -> SpatialResult<Self> {
        if width == 0 || height == 0 {
            return Err(SpatialError::InvalidDimensions { width, height });
        }
        Ok(Self { width, height, toroidal })
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn is_toroidal(&self) -> bool {
        self.toroidal
    }

    #[inline]
    pub fn cell_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    #[inline]
    pub fn contains(&self, cell: Cell) -> bool {
        cell.x < self.width && cell.y < self.height
    }

    /// Row-major index of `cell`.  Caller guarantees `contains(cell)`.
    #[inline]
    pub fn cell_index(&self, cell: Cell) -> usize {
        cell.y as usize * self.width as usize + cell.x as usize
    }

    /// Inverse of [`cell_index`](Self::cell_index).
    #[inline]
    pub fn cell_at(&self, index: usize) -> Cell {
        let w = self.width as usize;
        Cell::new((index % w) as u32, (index / w) as u32)
    }

    /// Every cell in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..self.cell_count()).map(|i| self.cell_at(i))
    }

    /// The 8-connected neighborhood of `cell`, excluding `cell` itself.
    ///
    /// On a toroidal grid offsets wrap around the edges; on a bounded grid
    /// out-of-range neighbors are dropped, so corner cells have three
    /// neighbors.  Degenerate grids (a dimension of 1 or 2) can map several
    /// offsets onto the same cell or back onto `cell`; those duplicates are
    /// removed.  The result is sorted, so it is independent of offset order.
    pub fn neighborhood(&self, cell: Cell) -> Vec<Cell> {
        let (w, h) = (self.width as i64, self.height as i64);
        let mut out: Vec<Cell> = MOORE_OFFSETS
            .iter()
            .filter_map(|&(dx, dy)| {
                let (mut x, mut y) = (cell.x as i64 + dx, cell.y as i64 + dy);
                if self.toroidal {
                    x = x.rem_euclid(w);
                    y = y.rem_euclid(h);
                } else if !(0..w).contains(&x) || !(0..h).contains(&y) {
                    return None;
                }
                Some(Cell::new(x as u32, y as u32))
            })
            .filter(|&c| c != cell)
            .collect();
        out.sort_unstable();
        out.dedup();
        out
    }

    /// A cell drawn uniformly over the whole grid.
    pub fn random_cell(&self, rng: &mut SimRng) -> Cell {
        Cell::new(rng.gen_range(0..self.width), rng.gen_range(0..self.height))
    }

    /// A uniformly chosen Moore neighbor of `cell`, or `cell` itself on a
    /// 1×1 grid where no neighbor exists.
    pub fn random_neighbor(&self, cell: Cell, rng: &mut SimRng) -> Cell {
        let neighbors = self.neighborhood(cell);
        rng.choose(&neighbors).copied().unwrap_or(cell)
    }
}
