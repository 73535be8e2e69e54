// engine.rs - Conway's rule (B3/S23) on a bounded, non-wrapping grid

use crate::grid::{Cell, Grid};

#[rustfmt::skip]
const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    ( 0, -1),          ( 0, 1),
    ( 1, -1), ( 1, 0), ( 1, 1),
];

/// Next state of a cell given its current state and live neighbor count.
#[rustfmt::skip]
pub fn liveness(current: Cell, neighbors: usize) -> Cell {
    match (current, neighbors) {
        (Cell::Alive, 2) | (Cell::Alive, 3) => Cell::Alive, // Survival
        (Cell::Dead, 3)                     => Cell::Alive, // Birth
        _                                   => Cell::Dead,  // Death or stays dead
    }
}

/// Live cells among the up to 8 positions adjacent to `index`.
///
/// Off-grid positions are skipped, so edge rows never see the far side of
/// the grid and the last cell of a row is not adjacent to the first cell of
/// the next one.
pub fn neighbor_count(grid: &Grid, index: usize) -> usize {
    debug_assert!(index < grid.len(), "index {index} outside grid of {}", grid.len());
    let (row, col) = grid.position(index);
    NEIGHBOR_OFFSETS
        .iter()
        .filter_map(|&(dr, dc)| {
            let nr = row.checked_add_signed(dr)?;
            let nc = col.checked_add_signed(dc)?;
            grid.get_at(nr, nc)
        })
        .filter(|cell| cell.is_alive())
        .count()
}

/// A fresh all-dead grid of `side * side` cells.
pub fn generate(side: usize) -> Grid {
    Grid::dead(side)
}

/// Next generation, every cell evaluated against the unmodified `grid`.
pub fn regenerate(grid: &Grid) -> Grid {
    Grid::from_fn(grid.side(), |row, col| {
        let index = grid.index_of(row, col);
        liveness(grid.cells()[index], neighbor_count(grid, index))
    })
}

/// Produces the successor of a generation.
///
/// The simulation loop receives its engine through this trait, so any
/// implementation (or a test double) can stand in for [`Conway`].
pub trait Engine {
    fn regenerate(&self, grid: &Grid) -> Grid;

    fn name(&self) -> &'static str;
}

impl<E: Engine + ?Sized> Engine for Box<E> {
    fn regenerate(&self, grid: &Grid) -> Grid {
        (**self).regenerate(grid)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

/// Sequential engine over [`regenerate`].
#[derive(Clone, Copy, Debug, Default)]
pub struct Conway;

impl Engine for Conway {
    fn regenerate(&self, grid: &Grid) -> Grid {
        regenerate(grid)
    }

    fn name(&self) -> &'static str {
        "plain"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(states: &[u8]) -> Grid {
        Grid::from_states(states).unwrap()
    }

    #[test]
    fn liveness_matches_birth_survival_table() {
        for neighbors in 0..=8 {
            let born = liveness(Cell::Dead, neighbors);
            let survives = liveness(Cell::Alive, neighbors);
            assert_eq!(born, Cell::from(neighbors == 3), "dead with {neighbors}");
            assert_eq!(
                survives,
                Cell::from(neighbors == 2 || neighbors == 3),
                "alive with {neighbors}"
            );
        }
    }

    #[test]
    fn single_cell_has_no_neighbors() {
        assert_eq!(neighbor_count(&grid(&[1]), 0), 0);
        assert_eq!(neighbor_count(&grid(&[0]), 0), 0);
    }

    #[test]
    fn two_by_two_cells_see_each_other() {
        let g = grid(&[1, 1, 1, 0]);
        assert_eq!(neighbor_count(&g, 0), 2);
        assert_eq!(neighbor_count(&g, 1), 2);
        assert_eq!(neighbor_count(&g, 2), 2);
        assert_eq!(neighbor_count(&g, 3), 3);
    }

    #[test]
    fn center_of_three_by_three() {
        let g = grid(&[1, 1, 1, 0, 0, 0, 0, 0, 0]);
        assert_eq!(neighbor_count(&g, 4), 3);
    }

    #[test]
    fn row_ends_do_not_wrap() {
        // Last column of row 0 and first column of row 1 are flat neighbors
        // (indices 2 and 3) but not grid neighbors.
        let g = grid(&[
            0, 0, 1,
            0, 0, 0,
            0, 0, 0,
        ]);
        assert_eq!(neighbor_count(&g, 3), 0);
        assert_eq!(neighbor_count(&g, 5), 1);

        let g = grid(&[
            0, 0, 0,
            1, 0, 0,
            0, 0, 0,
        ]);
        assert_eq!(neighbor_count(&g, 2), 0);
        assert_eq!(neighbor_count(&g, 8), 0);
        assert_eq!(neighbor_count(&g, 6), 1);
    }

    #[test]
    fn corners_do_not_wrap_vertically() {
        let g = grid(&[
            0, 0, 0,
            0, 0, 0,
            1, 1, 1,
        ]);
        assert_eq!(neighbor_count(&g, 0), 0);
        assert_eq!(neighbor_count(&g, 1), 0);
        assert_eq!(neighbor_count(&g, 4), 3);
    }

    #[test]
    fn generate_is_all_dead() {
        assert_eq!(generate(1).to_states(), vec![0]);
        assert_eq!(generate(2).to_states(), vec![0, 0, 0, 0]);
        let big = generate(7);
        assert_eq!(big.len(), 49);
        assert_eq!(big.population(), 0);
    }

    #[test]
    fn dead_grid_is_a_fixed_point() {
        for side in [1, 2, 5] {
            assert_eq!(regenerate(&generate(side)), generate(side));
        }
    }

    #[test]
    fn lone_cell_dies() {
        assert_eq!(regenerate(&grid(&[1, 0, 0, 0])), generate(2));
    }

    #[test]
    fn three_alive_fill_the_square() {
        assert_eq!(regenerate(&grid(&[1, 1, 1, 0])).to_states(), vec![1, 1, 1, 1]);
    }

    #[test]
    fn blinker_oscillates() {
        let horizontal = grid(&[
            0, 0, 0,
            1, 1, 1,
            0, 0, 0,
        ]);
        let vertical = grid(&[
            0, 1, 0,
            0, 1, 0,
            0, 1, 0,
        ]);
        assert_eq!(regenerate(&horizontal), vertical);
        assert_eq!(regenerate(&vertical), horizontal);
    }

    #[test]
    fn boxed_engine_delegates() {
        let engine: Box<dyn Engine> = Box::new(Conway);
        assert_eq!(engine.name(), "plain");
        assert_eq!(
            engine.regenerate(&grid(&[1, 1, 1, 0])).to_states(),
            vec![1, 1, 1, 1]
        );
    }
}
