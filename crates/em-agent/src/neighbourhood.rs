//! Neighbourhoods and their pools of placement cells.
//!
//! Each neighbourhood owns a `rows × cols` block of cells.  A cell is taken
//! out of the free list when an occupant is created and returned when the
//! occupant leaves, so no cell is ever held twice.  When a neighbourhood is
//! full the occupant is placed at cell (0, 0) *outside* the pool: the
//! placement is marked unpooled and is never returned to the free list.

use em_core::{NeighbourhoodId, SimRng};
use em_society::Society;
use tracing::warn;

/// Column/row offset inside a neighbourhood.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub col: usize,
    pub row: usize,
}

/// Where an occupant lives.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Placement {
    pub neighbourhood: NeighbourhoodId,
    pub cell:          Cell,
    /// `false` for the degraded fallback placement; such cells are not
    /// returned to the pool.
    pub pooled: bool,
}

/// A finite set of unique cells.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Neighbourhood {
    pub id:   NeighbourhoodId,
    pub rows: usize,
    pub cols: usize,
    /// Unoccupied cells.  Allocation removes a uniformly chosen entry while
    /// preserving the order of the rest; release appends.
    free: Vec<Cell>,
}

impl Neighbourhood {
    pub fn new(id: NeighbourhoodId, rows: usize, cols: usize) -> Self {
        let free = (0..rows)
            .flat_map(|row| (0..cols).map(move |col| Cell { col, row }))
            .collect();
        Self { id, rows, cols, free }
    }

    /// Take a free cell, or `None` if the neighbourhood is full.  Draws from
    /// `rng` only when a cell is available.
    pub fn allocate(&mut self, rng: &mut SimRng) -> Option<Cell> {
        if self.free.is_empty() {
            return None;
        }
        let i = rng.index(self.free.len());
        Some(self.free.remove(i))
    }

    pub fn release(&mut self, cell: Cell) {
        debug_assert!(!self.free.contains(&cell), "cell {cell:?} released twice");
        self.free.push(cell);
    }

    pub fn free_count(&self) -> usize {
        self.free.len()
    }

    pub fn capacity(&self) -> usize {
        self.rows * self.cols
    }
}

/// All neighbourhoods of a run, laid out on a grid for display.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LocationPool {
    /// Neighbourhood grid width.
    pub grid_cols: usize,
    pub neighbourhoods: Vec<Neighbourhood>,
}

impl LocationPool {
    pub fn from_society(society: &Society) -> Self {
        let neighbourhoods = (0..society.neighbourhood_count())
            .map(|i| Neighbourhood::new(NeighbourhoodId(i as u16), society.cell_rows, society.cell_cols))
            .collect();
        Self {
            grid_cols: society.neighbourhood_cols,
            neighbourhoods,
        }
    }

    /// Pick a neighbourhood uniformly and a free cell inside it.
    pub fn place(&mut self, rng: &mut SimRng) -> Placement {
        let n = rng.index(self.neighbourhoods.len());
        let hood = &mut self.neighbourhoods[n];
        match hood.allocate(rng) {
            Some(cell) => Placement {
                neighbourhood: hood.id,
                cell,
                pooled: true,
            },
            None => {
                warn!(neighbourhood = %hood.id, "no free cell left, using fallback placement");
                Placement {
                    neighbourhood: hood.id,
                    cell:          Cell::default(),
                    pooled:        false,
                }
            }
        }
    }

    /// Return a placement's cell to its neighbourhood.  Returns `true` if a
    /// pooled cell was freed.
    pub fn release(&mut self, placement: Placement) -> bool {
        if !placement.pooled {
            return false;
        }
        self.neighbourhoods[placement.neighbourhood.index()].release(placement.cell);
        true
    }

    /// Global `(x, y)` of a placement: the neighbourhood's grid block offset
    /// plus the cell offset inside it.
    pub fn grid_position(&self, placement: Placement) -> (usize, usize) {
        let n = placement.neighbourhood.index();
        let hood = &self.neighbourhoods[n];
        let x = (n % self.grid_cols) * hood.cols + placement.cell.col;
        let y = (n / self.grid_cols) * hood.rows + placement.cell.row;
        (x, y)
    }

    pub fn free_cells(&self) -> usize {
        self.neighbourhoods.iter().map(Neighbourhood::free_count).sum()
    }
}
