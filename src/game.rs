use log::{debug, info};
use rand::rngs::ThreadRng;
use rand::Rng;

use crate::collision::overlaps;
use crate::components::{Adversary, Direction, Food, Player, Wall};
use crate::config::Config;
use crate::error::LevelError;
use crate::ghost::Chaser;
use crate::level::Level;
use crate::player::move_player;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Playing,
    Won,
    Lost,
}

/// Read-only view handed to the renderer after each tick.
#[derive(Debug, Clone, Copy)]
pub struct Snapshot<'a> {
    pub walls: &'a [Wall],
    pub foods: &'a [Food],
    pub adversaries: &'a [Adversary],
    pub player: &'a Player,
    pub score: u32,
    pub lives: u32,
    pub game_over: bool,
    pub win: bool,
}

/// The whole simulation. The host calls `tick` at its own cadence and forwards
/// direction keys through `set_player_direction` in between.
#[derive(Debug, Clone)]
pub struct Game<R = ThreadRng> {
    rng: R,
    chaser: Chaser,
    food_score: u32,
    walls: Vec<Wall>,
    foods: Vec<Food>,
    adversaries: Vec<Adversary>,
    player: Player,
    score: u32,
    lives: u32,
    game_over: bool,
    win: bool,
}

impl Game<ThreadRng> {
    pub fn new(config: &Config) -> Result<Self, LevelError> {
        let level = Level::classic(config)?;
        Ok(Game::from_level(level, config, rand::thread_rng()))
    }
}

impl<R: Rng> Game<R> {
    pub fn from_level(level: Level, config: &Config, rng: R) -> Game<R> {
        let Level {
            walls,
            foods,
            adversaries,
            player,
        } = level;
        Game {
            rng,
            chaser: Chaser::new(config.retarget_chance),
            food_score: config.food_score,
            walls,
            foods,
            adversaries,
            player,
            score: 0,
            lives: config.starting_lives,
            game_over: config.starting_lives == 0,
            win: false,
        }
    }

    /// Input hook: overwrites the player's facing. Repeated presses of the same
    /// key are harmless.
    pub fn set_player_direction(&mut self, direction: Direction) {
        self.player.set_direction(direction);
    }

    /// Advances the simulation by one fixed step. Terminal states are frozen:
    /// ticking a finished game changes nothing.
    pub fn tick(&mut self) -> Phase {
        if self.phase() != Phase::Playing {
            return self.phase();
        }

        move_player(&mut self.player, &self.walls);
        self.eat_food();
        if self.foods.is_empty() {
            self.win = true;
            info!("board cleared with score {}", self.score);
            return Phase::Won;
        }

        self.move_ghosts();
        self.phase()
    }

    fn eat_food(&mut self) {
        // At most one pickup per tick. Food tiles never overlap each other.
        let eaten = self
            .foods
            .iter()
            .position(|food| overlaps(&self.player, food));
        if let Some(idx) = eaten {
            self.foods.remove(idx);
            self.score += self.food_score;
            debug!("food eaten, score {} ({} left)", self.score, self.foods.len());
        }
    }

    fn move_ghosts(&mut self) {
        let Game {
            rng,
            chaser,
            walls,
            adversaries,
            player,
            lives,
            game_over,
            ..
        } = self;

        for ghost in adversaries.iter_mut() {
            chaser.step(ghost, player.body.position(), walls, rng);
            if overlaps(&*player, &*ghost) {
                *lives = lives.saturating_sub(1);
                player.respawn();
                debug!("caught by {:?} ghost, {} lives left", ghost.color, lives);
                if *lives == 0 {
                    *game_over = true;
                    info!("game over");
                    break;
                }
            }
        }
    }

    pub fn phase(&self) -> Phase {
        if self.game_over {
            Phase::Lost
        } else if self.win {
            Phase::Won
        } else {
            Phase::Playing
        }
    }

    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            walls: &self.walls,
            foods: &self.foods,
            adversaries: &self.adversaries,
            player: &self.player,
            score: self.score,
            lives: self.lives,
            game_over: self.game_over,
            win: self.win,
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lives(&self) -> u32 {
        self.lives
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn foods(&self) -> &[Food] {
        &self.foods
    }

    pub fn adversaries(&self) -> &[Adversary] {
        &self.adversaries
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::{GhostColor, Mover, Point, Rect};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    const RNG_SEED: u64 = 0x0123456789ABCDEF;

    fn calm() -> Config {
        Config {
            retarget_chance: 0.0,
            ..Config::default()
        }
    }

    fn mover(x: i32, y: i32, facing: Direction) -> Mover {
        Mover::new(Rect::new(x, y, 32, 32), facing, 8)
    }

    fn far_food() -> Food {
        Food::new(Rect::new(1000, 1000, 4, 4))
    }

    #[test]
    fn classic_game_starts_playing() {
        let game = Game::new(&Config::default()).unwrap();
        assert_eq!(game.phase(), Phase::Playing);
        assert_eq!(game.lives(), 3);
        assert_eq!(game.score(), 0);
    }

    #[test]
    fn direction_change_applies_next_tick() {
        let level = Level {
            walls: vec![],
            foods: vec![far_food()],
            adversaries: vec![],
            player: Player::new(mover(64, 64, Direction::Right)),
        };
        let mut game = Game::from_level(level, &calm(), ChaCha8Rng::seed_from_u64(RNG_SEED));
        game.set_player_direction(Direction::Down);
        game.set_player_direction(Direction::Down);
        game.tick();
        assert_eq!(game.player().body.position(), Point::new(64, 72));
    }

    #[test]
    fn clearing_last_food_wins_and_freezes() {
        let level = Level {
            walls: vec![],
            foods: vec![Food::new(Rect::new(118, 78, 4, 4))],
            adversaries: vec![Adversary::new(GhostColor::Blue, mover(300, 300, Direction::Left))],
            player: Player::new(mover(64, 64, Direction::Right)),
        };
        let mut game = Game::from_level(level, &calm(), ChaCha8Rng::seed_from_u64(RNG_SEED));
        assert_eq!(game.tick(), Phase::Playing);
        assert_eq!(game.score(), 0);
        assert_eq!(game.tick(), Phase::Playing);
        assert_eq!(game.tick(), Phase::Won);
        assert_eq!(game.score(), 10);
        assert!(game.foods().is_empty());

        let frozen_player = game.player().body.position();
        let frozen_ghost = game.adversaries()[0].body.position();
        for _ in 0..5 {
            assert_eq!(game.tick(), Phase::Won);
        }
        assert_eq!(game.player().body.position(), frozen_player);
        assert_eq!(game.adversaries()[0].body.position(), frozen_ghost);
        assert_eq!(game.score(), 10);
    }

    #[test]
    fn one_pickup_per_tick() {
        let level = Level {
            walls: vec![],
            foods: vec![
                Food::new(Rect::new(80, 70, 4, 4)),
                Food::new(Rect::new(90, 70, 4, 4)),
                far_food(),
            ],
            adversaries: vec![],
            player: Player::new(mover(64, 64, Direction::Right)),
        };
        let mut game = Game::from_level(level, &calm(), ChaCha8Rng::seed_from_u64(RNG_SEED));
        game.tick();
        assert_eq!(game.score(), 10);
        assert_eq!(game.foods().len(), 2);
        game.tick();
        assert_eq!(game.score(), 20);
        assert_eq!(game.foods().len(), 1);
    }

    #[test]
    fn last_life_ends_the_game() {
        let config = Config {
            starting_lives: 1,
            ..calm()
        };
        let level = Level {
            walls: vec![],
            foods: vec![far_food()],
            adversaries: vec![
                Adversary::new(GhostColor::Red, mover(80, 64, Direction::Left)),
                Adversary::new(GhostColor::Pink, mover(64, 64, Direction::Left)),
            ],
            player: Player::new(mover(64, 64, Direction::Right)),
        };
        let mut game = Game::from_level(level, &config, ChaCha8Rng::seed_from_u64(RNG_SEED));
        assert_eq!(game.tick(), Phase::Lost);
        assert_eq!(game.lives(), 0);
        // The second ghost never moved: the tick stopped at game over.
        assert_eq!(game.adversaries()[1].body.position(), Point::new(64, 64));
    }
}
