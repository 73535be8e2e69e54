// config.rs - Simulation settings, with environment overrides

use std::time::Duration;

use crate::coro::EngineKind;
use crate::error::ConfigError;

/// Settings for a [`crate::Simulation`] and its starting grid.
///
/// `Config::default()` gives the stock 50x50 board ticking every 200 ms;
/// the builder methods adjust individual knobs.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    /// Side length of the square grid.
    pub side: usize,
    /// Fixed delay between ticks while running.
    pub tick_interval: Duration,
    /// Most ticks a single poll may fire when the host fell behind.
    pub max_catch_up_ticks: u32,
    /// Probability of a live cell in a random seed.
    pub seed_density: f64,
    pub engine: EngineKind,
}

impl Config {
    pub const DEFAULT_SIDE: usize = 50;
    pub const DEFAULT_TICK_MILLIS: u64 = 200;
    pub const DEFAULT_MAX_CATCH_UP: u32 = 4;
    pub const DEFAULT_SEED_DENSITY: f64 = 0.33;
    pub const MIN_TICK_INTERVAL: Duration = Duration::from_millis(1);

    pub const ENV_SIDE: &'static str = "CONWAY_SIDE";
    pub const ENV_TICK_MS: &'static str = "CONWAY_TICK_MS";
    pub const ENV_DENSITY: &'static str = "CONWAY_DENSITY";
    pub const ENV_ENGINE: &'static str = "CONWAY_ENGINE";

    pub fn side(mut self, side: usize) -> Self {
        self.side = side;
        self
    }

    pub fn tick_interval(mut self, interval: Duration) -> Self {
        self.tick_interval = interval.max(Self::MIN_TICK_INTERVAL);
        self
    }

    pub fn max_catch_up_ticks(mut self, ticks: u32) -> Self {
        self.max_catch_up_ticks = ticks.max(1);
        self
    }

    pub fn seed_density(mut self, density: f64) -> Self {
        self.seed_density = density;
        self
    }

    pub fn engine(mut self, engine: EngineKind) -> Self {
        self.engine = engine;
        self
    }

    /// Defaults overridden by `CONWAY_*` environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overridden by whatever `lookup` returns for each `CONWAY_*` key.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(value) = lookup(Self::ENV_SIDE) {
            let side: usize = parse(Self::ENV_SIDE, &value)?;
            if side == 0 {
                return Err(out_of_range(Self::ENV_SIDE, "at least 1", value));
            }
            config.side = side;
        }

        if let Some(value) = lookup(Self::ENV_TICK_MS) {
            let millis: u64 = parse(Self::ENV_TICK_MS, &value)?;
            if millis == 0 {
                return Err(out_of_range(Self::ENV_TICK_MS, "at least 1", value));
            }
            config.tick_interval = Duration::from_millis(millis);
        }

        if let Some(value) = lookup(Self::ENV_DENSITY) {
            let density: f64 = parse(Self::ENV_DENSITY, &value)?;
            if !(0.0..=1.0).contains(&density) {
                return Err(out_of_range(Self::ENV_DENSITY, "within 0..=1", value));
            }
            config.seed_density = density;
        }

        if let Some(value) = lookup(Self::ENV_ENGINE) {
            config.engine = match value.trim().to_ascii_lowercase().as_str() {
                "plain" => EngineKind::Plain,
                "coroutine" => EngineKind::Coroutine,
                _ => {
                    return Err(ConfigError::Invalid {
                        key: Self::ENV_ENGINE,
                        value,
                    });
                }
            };
        }

        Ok(config)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            side: Self::DEFAULT_SIDE,
            tick_interval: Duration::from_millis(Self::DEFAULT_TICK_MILLIS),
            max_catch_up_ticks: Self::DEFAULT_MAX_CATCH_UP,
            seed_density: Self::DEFAULT_SEED_DENSITY,
            engine: EngineKind::default(),
        }
    }
}

fn parse<T: std::str::FromStr>(key: &'static str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::Invalid {
        key,
        value: value.to_owned(),
    })
}

fn out_of_range(key: &'static str, expected: &'static str, value: String) -> ConfigError {
    ConfigError::OutOfRange { key, expected, value }
}
