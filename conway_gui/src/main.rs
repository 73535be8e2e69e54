// main.rs - Desktop front end: an egui window painting the simulation's Board

use eframe::egui;
use egui::Color32;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use conway::{Board, Config, Engine, Grid, Simulation, random_grid};

mod ui;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;
    let app = GameOfLife::new(config)?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([800.0, 950.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Conway's Game of Life",
        options,
        Box::new(|_cc| Box::new(app)),
    )
    .map_err(|err| anyhow::anyhow!("window closed with error: {err}"))
}

pub struct GameOfLife {
    pub sim: Simulation<Board, Box<dyn Engine>>,
    pub seed_density: f64,
    pub live_color: Color32,
    pub dead_color: Color32,
}

impl GameOfLife {
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let engine = config.engine.build()?;
        info!(side = config.side, engine = engine.name(), "building board");
        let sim = Simulation::new(Board::new(), engine, &config);

        Ok(Self {
            sim,
            seed_density: config.seed_density,
            live_color: Color32::from_rgb(0, 200, 0),
            dead_color: Color32::from_rgb(40, 40, 40),
        })
    }

    pub fn toggle_running(&mut self) {
        if self.sim.is_running() {
            self.sim.stop();
        } else {
            self.sim.start();
        }
    }

    pub fn clear_grid(&mut self) {
        self.sim.stop();
        self.reset(&Grid::dead(self.sim.side()));
    }

    pub fn apply_random_pattern(&mut self) {
        self.sim.stop();
        let grid = random_grid(self.sim.side(), self.seed_density, &mut rand::thread_rng());
        self.reset(&grid);
    }

    fn reset(&mut self, grid: &Grid) {
        if let Err(err) = self.sim.reset(grid) {
            error!(%err, "seed rejected");
        }
    }
}
