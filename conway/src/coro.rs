// coro.rs - Row coroutine engine: every row of the next generation is its
// own tokio task, yielding cooperatively after each cell

use std::sync::Arc;

use tokio::runtime::{Builder, Runtime};
use tracing::trace;

use crate::engine::{Engine, liveness, neighbor_count};
use crate::error::EngineError;
use crate::grid::{Cell, Grid};

/// Which [`Engine`] the simulation should run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EngineKind {
    Plain,
    #[default]
    Coroutine,
}

impl EngineKind {
    pub fn build(self) -> Result<Box<dyn Engine>, EngineError> {
        Ok(match self {
            EngineKind::Plain => Box::new(crate::engine::Conway),
            EngineKind::Coroutine => Box::new(CoroutineEngine::new()?),
        })
    }
}

/// Computes one row against the shared previous generation.
async fn process_row(row: usize, current: Arc<Grid>) -> (usize, Vec<Cell>) {
    let side = current.side();
    let mut next_row = Vec::with_capacity(side);
    for col in 0..side {
        let index = current.index_of(row, col);
        next_row.push(liveness(current.cells()[index], neighbor_count(&current, index)));

        tokio::task::yield_now().await; // Cooperative yielding
    }
    trace!(row, "row task finished");
    (row, next_row)
}

/// Same rule as [`crate::Conway`], evaluated as interleaved row tasks on a
/// single-threaded runtime.
pub struct CoroutineEngine {
    runtime: Runtime,
}

impl CoroutineEngine {
    pub fn new() -> Result<Self, EngineError> {
        let runtime = Builder::new_current_thread().build()?;
        Ok(Self { runtime })
    }
}

impl Engine for CoroutineEngine {
    fn regenerate(&self, grid: &Grid) -> Grid {
        let side = grid.side();
        let current = Arc::new(grid.clone());

        let rows = self.runtime.block_on(async {
            // Spawn every row up front so they time-slice against each other
            let handles: Vec<_> = (0..side)
                .map(|row| tokio::spawn(process_row(row, Arc::clone(&current))))
                .collect();

            let mut rows = vec![Vec::new(); side];
            for handle in handles {
                let (row, cells) = handle
                    .await
                    .unwrap_or_else(|err| std::panic::resume_unwind(err.into_panic()));
                rows[row] = cells;
            }
            rows
        });

        Grid::from_fn(side, |row, col| rows[row][col])
    }

    fn name(&self) -> &'static str {
        "coroutine"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_two_by_two_expectation() {
        let engine = CoroutineEngine::new().unwrap();
        let grid = Grid::from_states(&[1, 1, 1, 0]).unwrap();
        assert_eq!(engine.regenerate(&grid).to_states(), vec![1, 1, 1, 1]);
    }

    #[test]
    fn handles_degenerate_sides() {
        let engine = CoroutineEngine::new().unwrap();
        assert_eq!(engine.regenerate(&Grid::dead(0)), Grid::dead(0));
        assert_eq!(engine.regenerate(&Grid::from_states(&[1]).unwrap()), Grid::dead(1));
    }

    #[test]
    fn kind_builds_named_engines() {
        assert_eq!(EngineKind::Plain.build().unwrap().name(), "plain");
        assert_eq!(EngineKind::Coroutine.build().unwrap().name(), "coroutine");
    }
}
