use epi_core::Cell;

/// Result of planning one agent's move.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Movement {
    /// Remain in the current cell.
    Stay,
    /// Relocate to the given cell.  Never equal to the current cell.
    To(Cell),
}

impl Movement {
    /// Cell the agent occupies after the move.
    #[inline]
    pub fn destination(self, from: Cell) -> Cell {
        match self {
            Movement::Stay => from,
            Movement::To(cell) => cell,
        }
    }

    /// `Stay` when `to == from`, otherwise `To(to)`.
    #[inline]
    pub fn between(from: Cell, to: Cell) -> Self {
        if from == to { Movement::Stay } else { Movement::To(to) }
    }
}
