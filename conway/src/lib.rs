//! Conway's Game of Life on a bounded square grid.
//!
//! The engine works on flat row-major [`Grid`]s and knows nothing about
//! presentation. A [`GridView`] mirrors the grid visually, and a
//! [`Simulation`] ticks `render(regenerate(read_grid()))` on a fixed interval.

mod config;
mod coro;
mod engine;
mod error;
mod grid;
mod seed;
mod simulation;
mod view;

pub use config::Config;
pub use coro::{CoroutineEngine, EngineKind};
pub use engine::{Conway, Engine, generate, liveness, neighbor_count, regenerate};
pub use error::{ConfigError, EngineError, GridError};
pub use grid::{Cell, Grid};
pub use seed::{random_grid, seeded_grid};
pub use simulation::{Clock, LoopState, Simulation, SystemClock, TimerHandle};
pub use view::{Board, CellElement, GridView, Row, Tag};
