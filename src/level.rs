use log::info;

use crate::components::{Adversary, Direction, Food, GhostColor, Mover, Player, Rect, Spawn, Wall};
use crate::config::Config;
use crate::error::LevelError;

/// The classic board: `X` wall, blank food, `O` open floor, `P` player,
/// `b`/`o`/`p`/`r` the four ghosts.
pub const DEFAULT_MAP: [&str; 21] = [
    "XXXXXXXXXXXXXXXXXXX",
    "X        X        X",
    "X XX XXX X XXX XX X",
    "X                 X",
    "X XX X XXXXX X XX X",
    "X    X       X    X",
    "XXXX XXXX XXXX XXXX",
    "OOOX X       X XOOO",
    "XXXX X XXrXX X XXXX",
    "O       bpo       O",
    "XXXX X XXXXX X XXXX",
    "OOOX X       X XOOO",
    "XXXX X XXXXX X XXXX",
    "X        X        X",
    "X XX XXX X XXX XX X",
    "X  X     P     X  X",
    "XX X X XXXXX X X XX",
    "X    X   X   X    X",
    "X XXXXXX X XXXXXX X",
    "X                 X",
    "XXXXXXXXXXXXXXXXXXX",
];

const SPAWN_FACING: Direction = Direction::Right;

/// Maps one map symbol to what it spawns. `None` is open floor without food.
pub fn spawn_for(symbol: char) -> Result<Option<Spawn>, char> {
    match symbol {
        'X' => Ok(Some(Spawn::Wall)),
        ' ' => Ok(Some(Spawn::Food)),
        'O' => Ok(None),
        'P' => Ok(Some(Spawn::Player)),
        'b' => Ok(Some(Spawn::Adversary(GhostColor::Blue))),
        'o' => Ok(Some(Spawn::Adversary(GhostColor::Orange))),
        'p' => Ok(Some(Spawn::Adversary(GhostColor::Pink))),
        'r' => Ok(Some(Spawn::Adversary(GhostColor::Red))),
        other => Err(other),
    }
}

/// The initial entity set of a board.
#[derive(Debug, Clone, PartialEq)]
pub struct Level {
    pub walls: Vec<Wall>,
    pub foods: Vec<Food>,
    pub adversaries: Vec<Adversary>,
    pub player: Player,
}

impl Level {
    pub fn classic(config: &Config) -> Result<Self, LevelError> {
        Self::parse(&DEFAULT_MAP, config)
    }

    pub fn parse_text(text: &str, config: &Config) -> Result<Self, LevelError> {
        let rows: Vec<&str> = text.lines().collect();
        Self::parse(&rows, config)
    }

    pub fn parse<S: AsRef<str>>(rows: &[S], config: &Config) -> Result<Self, LevelError> {
        if rows.len() != config.rows {
            return Err(LevelError::RowCount {
                expected: config.rows,
                found: rows.len(),
            });
        }

        let tile = config.tile_size;
        let speed = config.speed();
        let mut walls = Vec::new();
        let mut foods = Vec::new();
        let mut adversaries = Vec::new();
        let mut player: Option<((usize, usize), Player)> = None;

        for (r, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            let found = row.chars().count();
            if found != config.columns {
                return Err(LevelError::RowLength {
                    row: r,
                    expected: config.columns,
                    found,
                });
            }
            for (c, symbol) in row.chars().enumerate() {
                let spawn = spawn_for(symbol).map_err(|symbol| LevelError::UnknownSymbol {
                    row: r,
                    column: c,
                    symbol,
                })?;
                let x = c as i32 * tile;
                let y = r as i32 * tile;
                let cell = Rect::new(x, y, tile, tile);
                match spawn {
                    Some(Spawn::Wall) => walls.push(Wall::new(cell)),
                    Some(Spawn::Food) => foods.push(Food::new(Rect::new(
                        x + config.food_inset,
                        y + config.food_inset,
                        config.food_size,
                        config.food_size,
                    ))),
                    Some(Spawn::Adversary(color)) => {
                        adversaries.push(Adversary::new(color, Mover::new(cell, SPAWN_FACING, speed)))
                    }
                    Some(Spawn::Player) => {
                        if let Some((first, _)) = player {
                            return Err(LevelError::DuplicatePlayer {
                                first,
                                second: (r, c),
                            });
                        }
                        player = Some(((r, c), Player::new(Mover::new(cell, SPAWN_FACING, speed))));
                    }
                    None => {}
                }
            }
        }

        let (_, player) = player.ok_or(LevelError::MissingPlayer)?;
        info!(
            "level loaded: {} walls, {} food, {} ghosts",
            walls.len(),
            foods.len(),
            adversaries.len()
        );
        Ok(Level {
            walls,
            foods,
            adversaries,
            player,
        })
    }
}
