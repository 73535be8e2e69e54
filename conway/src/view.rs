// view.rs - Presentation side: the visual mirror of a grid

use tracing::debug;

use crate::grid::{Cell, Grid};

/// What a presentation layer must offer the simulation loop.
pub trait GridView {
    /// Replaces whatever is displayed with `grid`.
    fn render(&mut self, grid: &Grid);

    /// Reads the displayed cells back, row-major, as `render` laid them out.
    fn read_grid(&self) -> Grid;

    /// Enables click toggling on the displayed cells.
    fn attach_toggle_handler(&mut self);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tag {
    Live,
    Dead,
}

impl From<Cell> for Tag {
    fn from(cell: Cell) -> Self {
        match cell {
            Cell::Alive => Tag::Live,
            Cell::Dead => Tag::Dead,
        }
    }
}

impl From<Tag> for Cell {
    fn from(tag: Tag) -> Self {
        match tag {
            Tag::Live => Cell::Alive,
            Tag::Dead => Cell::Dead,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CellElement {
    pub row: usize,
    pub col: usize,
    pub tag: Tag,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Row {
    pub cells: Vec<CellElement>,
}

/// Retained row/cell structure a front end paints from.
///
/// Clicks only edit tags; they never consult the engine.
#[derive(Clone, Debug, Default)]
pub struct Board {
    rows: Vec<Row>,
    toggle_attached: bool,
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn side(&self) -> usize {
        self.rows.len()
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<&CellElement> {
        self.rows.get(row)?.cells.get(col)
    }

    pub fn count(&self, tag: Tag) -> usize {
        self.rows
            .iter()
            .flat_map(|row| &row.cells)
            .filter(|cell| cell.tag == tag)
            .count()
    }

    pub fn toggle_attached(&self) -> bool {
        self.toggle_attached
    }

    /// Click on the cell at (`row`, `col`). Returns whether a tag flipped.
    pub fn click(&mut self, row: usize, col: usize) -> bool {
        if !self.toggle_attached {
            return false;
        }
        let Some(cell) = self.rows.get_mut(row).and_then(|r| r.cells.get_mut(col)) else {
            return false;
        };
        cell.tag = match cell.tag {
            Tag::Live => Tag::Dead,
            Tag::Dead => Tag::Live,
        };
        debug!(row, col, tag = ?cell.tag, "cell toggled");
        true
    }
}

impl GridView for Board {
    fn render(&mut self, grid: &Grid) {
        self.rows = grid
            .rows()
            .enumerate()
            .map(|(row, cells)| Row {
                cells: cells
                    .iter()
                    .enumerate()
                    .map(|(col, &cell)| CellElement { row, col, tag: cell.into() })
                    .collect(),
            })
            .collect();
    }

    fn read_grid(&self) -> Grid {
        Grid::from_fn(self.rows.len(), |row, col| self.rows[row].cells[col].tag.into())
    }

    fn attach_toggle_handler(&mut self) {
        if self.toggle_attached {
            debug!("toggle handler already attached");
            return;
        }
        self.toggle_attached = true;
    }
}
