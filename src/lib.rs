//! Simulation core of a tile-grid maze chase: a player eats food while four ghosts
//! roam the board. The host drives `game::Game::tick` at a fixed cadence and feeds
//! direction changes in between; rendering only ever reads a `game::Snapshot`.

pub mod collision;
pub mod components;
pub mod config;
pub mod error;
pub mod game;
pub mod ghost;
pub mod input;
pub mod level;
pub mod player;
pub mod render;
pub mod sprites;

pub use components::Direction;
pub use config::Config;
pub use error::LevelError;
pub use game::{Game, Phase, Snapshot};
pub use level::Level;
