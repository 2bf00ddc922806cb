//! Per-cell occupancy index.
//!
//! Answers "who is standing in this cell?" in O(1).  Each cell keeps its
//! occupants in a small `Vec` in insertion order, so iteration order is a
//! function of the move history alone and never of hashing.

use epi_core::{AgentId, Cell};

use crate::Grid;

/// Agents present in each grid cell.
///
/// Dead agents stay in the cell where they died; callers filter by health
/// state when they need living occupants only.
#[derive(Clone, Debug)]
pub struct Occupancy {
    width: u32,
    cells: Vec<Vec<AgentId>>,
}

impl Occupancy {
    /// An empty index sized for `grid`.
    pub fn new(grid: &Grid) -> Self {
        Self {
            width: grid.width(),
            cells: vec![Vec::new(); grid.cell_count()],
        }
    }

    #[inline]
    fn slot(&self, cell: Cell) -> usize {
        cell.y as usize * self.width as usize + cell.x as usize
    }

    /// Record `agent` as present in `cell`.
    pub fn place(&mut self, agent: AgentId, cell: Cell) {
        let slot = self.slot(cell);
        self.cells[slot].push(agent);
    }

    /// Remove `agent` from `cell`.  Returns `false` if it was not there.
    pub fn remove(&mut self, agent: AgentId, cell: Cell) -> bool {
        let slot = self.slot(cell);
        let occupants = &mut self.cells[slot];
        match occupants.iter().position(|&a| a == agent) {
            Some(pos) => {
                occupants.remove(pos);
                true
            }
            None => false,
        }
    }

    /// Move `agent` from `from` to `to`.  A move onto the same cell is a no-op.
    pub fn move_agent(&mut self, agent: AgentId, from: Cell, to: Cell) {
        if from == to {
            return;
        }
        self.remove(agent, from);
        self.place(agent, to);
    }

    /// All agents in `cell`, including any dead ones.
    #[inline]
    pub fn agents_at(&self, cell: Cell) -> &[AgentId] {
        &self.cells[self.slot(cell)]
    }

    /// Agents in `cell` other than `agent`.
    pub fn cellmates(&self, agent: AgentId, cell: Cell) -> impl Iterator<Item = AgentId> + '_ {
        self.agents_at(cell).iter().copied().filter(move |&a| a != agent)
    }

    /// Total number of placed agents.
    pub fn len(&self) -> usize {
        self.cells.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(Vec::is_empty)
    }
}
