// grid.rs - Cell and grid types for Conway's Game of Life

use std::fmt;

use crate::error::GridError;

/// State of a single grid position.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Cell {
    #[default]
    Dead = 0,
    Alive = 1,
}

impl Cell {
    pub fn is_alive(self) -> bool {
        self == Cell::Alive
    }

    pub fn toggled(self) -> Cell {
        match self {
            Cell::Dead => Cell::Alive,
            Cell::Alive => Cell::Dead,
        }
    }
}

impl From<bool> for Cell {
    fn from(alive: bool) -> Self {
        if alive { Cell::Alive } else { Cell::Dead }
    }
}

impl From<Cell> for u8 {
    fn from(cell: Cell) -> Self {
        cell as u8
    }
}

impl TryFrom<u8> for Cell {
    type Error = GridError;

    fn try_from(state: u8) -> Result<Self, Self::Error> {
        match state {
            0 => Ok(Cell::Dead),
            1 => Ok(Cell::Alive),
            other => Err(GridError::InvalidCellState(other)),
        }
    }
}

/// One generation: `side * side` cells in row-major order.
///
/// Index `i` lives at row `i / side`, column `i % side`. A grid is never
/// edited in place; the next generation is always a new `Grid`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Grid {
    side: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// All-dead grid of `side * side` cells.
    pub fn dead(side: usize) -> Self {
        Self {
            side,
            cells: vec![Cell::Dead; side * side],
        }
    }

    pub fn from_fn(side: usize, mut f: impl FnMut(usize, usize) -> Cell) -> Self {
        let mut cells = Vec::with_capacity(side * side);
        for row in 0..side {
            for col in 0..side {
                cells.push(f(row, col));
            }
        }
        Self { side, cells }
    }

    pub fn from_cells(cells: Vec<Cell>) -> Result<Self, GridError> {
        let side = cells.len().isqrt();
        if side * side != cells.len() {
            return Err(GridError::NotSquare { len: cells.len() });
        }
        Ok(Self { side, cells })
    }

    /// Builds a grid from raw `0`/`1` states.
    pub fn from_states(states: &[u8]) -> Result<Self, GridError> {
        let cells = states
            .iter()
            .map(|&state| Cell::try_from(state))
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_cells(cells)
    }

    pub fn side(&self) -> usize {
        self.side
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// Cell at (`row`, `col`), or `None` when the position is off the grid.
    pub fn get_at(&self, row: usize, col: usize) -> Option<Cell> {
        if row < self.side && col < self.side {
            Some(self.cells[self.index_of(row, col)])
        } else {
            None
        }
    }

    pub fn position(&self, index: usize) -> (usize, usize) {
        (index / self.side, index % self.side)
    }

    pub fn index_of(&self, row: usize, col: usize) -> usize {
        row * self.side + col
    }

    pub fn population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    pub fn to_states(&self) -> Vec<u8> {
        self.cells.iter().map(|&cell| u8::from(cell)).collect()
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        // chunks(0) panics, and an empty grid has no rows anyway
        self.cells.chunks(self.side.max(1))
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for cell in row {
                f.write_str(if cell.is_alive() { "#" } else { "." })?;
            }
            f.write_str("\n")?;
        }
        Ok(())
    }
}
