// simulation.rs - Timed read -> regenerate -> render loop

use std::time::{Duration, Instant};

use tracing::{debug, info, warn};

use crate::config::Config;
use crate::engine::Engine;
use crate::error::GridError;
use crate::grid::Grid;
use crate::view::GridView;

/// Source of the current time for the tick schedule.
pub trait Clock {
    fn now(&self) -> Instant;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopState {
    Idle,
    Running,
}

/// Identifies one `start`; a restarted loop gets a fresh handle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TimerHandle(u64);

#[derive(Debug)]
struct ActiveTimer {
    handle: TimerHandle,
    next_due: Instant,
}

/// Owns a view and an engine and advances the view one generation per tick.
///
/// Nothing runs on its own: the host calls [`Simulation::poll`] from its
/// event loop and every due tick executes there, on the caller's thread.
pub struct Simulation<V, E, C = SystemClock> {
    view: V,
    engine: E,
    clock: C,
    side: usize,
    interval: Duration,
    max_catch_up: u32,
    timer: Option<ActiveTimer>,
    next_handle: u64,
    generation: u64,
}

impl<V: GridView, E: Engine> Simulation<V, E, SystemClock> {
    pub fn new(view: V, engine: E, config: &Config) -> Self {
        Self::with_clock(view, engine, SystemClock, config)
    }
}

impl<V: GridView, E: Engine, C: Clock> Simulation<V, E, C> {
    /// Renders an all-dead grid of `config.side` and attaches click toggling.
    pub fn with_clock(mut view: V, engine: E, clock: C, config: &Config) -> Self {
        view.render(&Grid::dead(config.side));
        view.attach_toggle_handler();
        Self {
            view,
            engine,
            clock,
            side: config.side,
            interval: config.tick_interval.max(Config::MIN_TICK_INTERVAL),
            max_catch_up: config.max_catch_up_ticks.max(1),
            timer: None,
            next_handle: 0,
            generation: 0,
        }
    }

    pub fn state(&self) -> LoopState {
        if self.timer.is_some() {
            LoopState::Running
        } else {
            LoopState::Idle
        }
    }

    pub fn is_running(&self) -> bool {
        self.state() == LoopState::Running
    }

    /// Schedules a tick every interval, the first one interval from now.
    ///
    /// A loop that is already running has its timer cancelled and replaced,
    /// so at most one timer is ever live.
    pub fn start(&mut self) -> TimerHandle {
        if let Some(previous) = self.timer.take() {
            warn!(handle = previous.handle.0, "start while running, replacing timer");
        }
        let handle = TimerHandle(self.next_handle);
        self.next_handle += 1;
        self.timer = Some(ActiveTimer {
            handle,
            next_due: self.clock.now() + self.interval,
        });
        info!(
            handle = handle.0,
            interval_ms = self.interval.as_millis() as u64,
            engine = self.engine.name(),
            "simulation started"
        );
        handle
    }

    /// Cancels the active timer. Stopping an idle loop does nothing.
    pub fn stop(&mut self) -> Option<TimerHandle> {
        let timer = self.timer.take()?;
        info!(handle = timer.handle.0, generation = self.generation, "simulation stopped");
        Some(timer.handle)
    }

    /// Fires every tick that has come due, up to the catch-up limit.
    ///
    /// Returns the number of ticks fired.
    pub fn poll(&mut self) -> u32 {
        let now = self.clock.now();
        let mut fired = 0;
        while let Some(next_due) = self.timer.as_ref().map(|timer| timer.next_due) {
            if next_due > now {
                break;
            }
            self.tick();
            fired += 1;
            let Some(timer) = self.timer.as_mut() else { break };
            if fired == self.max_catch_up {
                // Too far behind: drop the backlog and resume from now.
                timer.next_due = now + self.interval;
                break;
            }
            timer.next_due = next_due + self.interval;
        }
        fired
    }

    /// One read -> regenerate -> render cycle.
    fn tick(&mut self) {
        let current = self.view.read_grid();
        let next = self.engine.regenerate(&current);
        self.view.render(&next);
        self.generation += 1;
        debug!(generation = self.generation, population = next.population(), "tick");
    }

    /// Advances one generation by hand, whether or not the loop is running.
    pub fn step(&mut self) {
        self.tick();
    }

    /// Shows `grid` as a new seed and restarts the generation count.
    ///
    /// The seed must have the configured side; anything else is rejected and
    /// the view is left untouched.
    pub fn reset(&mut self, grid: &Grid) -> Result<(), GridError> {
        if grid.side() != self.side {
            return Err(GridError::SideMismatch {
                expected: self.side,
                got: grid.side(),
            });
        }
        self.view.render(grid);
        self.generation = 0;
        info!(side = grid.side(), population = grid.population(), "grid reset");
        Ok(())
    }

    /// Changes the tick interval; a running loop next ticks one new interval
    /// from now.
    pub fn set_interval(&mut self, interval: Duration) {
        let interval = interval.max(Config::MIN_TICK_INTERVAL);
        self.interval = interval;
        let now = self.clock.now();
        if let Some(timer) = self.timer.as_mut() {
            timer.next_due = now + interval;
        }
    }

    /// Time left until the next tick, or `None` when idle.
    pub fn until_next_tick(&self) -> Option<Duration> {
        let timer = self.timer.as_ref()?;
        Some(timer.next_due.saturating_duration_since(self.clock.now()))
    }

    /// Side length every grid shown by this simulation has.
    pub fn side(&self) -> usize {
        self.side
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }
}
