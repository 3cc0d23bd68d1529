use std::time::Duration;

pub const ROWS: usize = 21;
pub const COLUMNS: usize = 19;
pub const TILE_SIZE: i32 = 32;
pub const TICK_MS: u64 = 50;
pub const RETARGET_CHANCE: f64 = 1.0 / 20.0;
pub const STARTING_LIVES: u32 = 3;
pub const FOOD_SCORE: u32 = 10;
pub const FOOD_INSET: i32 = 14;
pub const FOOD_SIZE: i32 = 4;

/// Tunables shared by the level loader and the simulation.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub rows: usize,
    pub columns: usize,
    pub tile_size: i32,
    pub tick: Duration,
    /// Per-tick probability that an adversary re-targets the player.
    pub retarget_chance: f64,
    pub starting_lives: u32,
    pub food_score: u32,
    pub food_inset: i32,
    pub food_size: i32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            rows: ROWS,
            columns: COLUMNS,
            tile_size: TILE_SIZE,
            tick: Duration::from_millis(TICK_MS),
            retarget_chance: RETARGET_CHANCE,
            starting_lives: STARTING_LIVES,
            food_score: FOOD_SCORE,
            food_inset: FOOD_INSET,
            food_size: FOOD_SIZE,
        }
    }
}

impl Config {
    /// Per-tick displacement of every mover.
    pub fn speed(&self) -> i32 {
        debug_assert!(self.tile_size > 0, "tile size must be positive");
        self.tile_size / 4
    }

    pub fn board_width(&self) -> i32 {
        self.columns as i32 * self.tile_size
    }

    pub fn board_height(&self) -> i32 {
        self.rows as i32 * self.tile_size
    }

    pub fn with_tick_ms(mut self, tick_ms: u64) -> Self {
        self.tick = Duration::from_millis(tick_ms);
        self
    }
}

/// Reads the optional `PACMAN_TICK_MS` override, keeping the default when it is
/// absent, unparsable or zero.
pub fn read_tick_setting() -> u64 {
    std::env::var("PACMAN_TICK_MS")
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
        .filter(|v| *v > 0)
        .unwrap_or(TICK_MS)
}
