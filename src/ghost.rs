use log::trace;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::collision::hits_any_wall;
use crate::components::{Adversary, Direction, Point, Wall};

/// Greedy one-step chase: close the horizontal gap first, then the vertical one.
/// It knows nothing about walls.
pub fn chase_direction(from: Point, target: Point) -> Direction {
    if target.x < from.x {
        Direction::Left
    } else if target.x > from.x {
        Direction::Right
    } else if target.y < from.y {
        Direction::Up
    } else {
        Direction::Down
    }
}

/// Result of one adversary move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GhostStep {
    pub retargeted: bool,
    pub blocked: bool,
}

/// Per-tick decision maker for the ghosts. Ghosts are independent of each other;
/// the only shared input is the player's position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Chaser {
    retarget_chance: f64,
}

impl Chaser {
    pub fn new(retarget_chance: f64) -> Self {
        Self {
            retarget_chance: retarget_chance.clamp(0.0, 1.0),
        }
    }

    /// Occasionally turns toward the player, moves, and on hitting a wall steps
    /// back and picks a uniformly random direction for the next tick.
    pub fn step(
        &self,
        ghost: &mut Adversary,
        player: Point,
        walls: &[Wall],
        rng: &mut impl Rng,
    ) -> GhostStep {
        let retargeted = rng.gen_bool(self.retarget_chance);
        if retargeted {
            ghost
                .body
                .set_direction(chase_direction(ghost.body.position(), player));
        }

        let applied = ghost.body.advance();
        let blocked = hits_any_wall(&*ghost, walls);
        if blocked {
            ghost.body.revert(applied);
            let turn = Direction::ALL.choose(rng).copied().unwrap_or(Direction::Up);
            trace!("{:?} ghost blocked, turning {:?}", ghost.color, turn);
            ghost.body.set_direction(turn);
        }

        GhostStep {
            retargeted,
            blocked,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::{GhostColor, Mover, Rect};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn ghost_at(x: i32, y: i32, facing: Direction) -> Adversary {
        Adversary::new(GhostColor::Red, Mover::new(Rect::new(x, y, 32, 32), facing, 8))
    }

    #[test]
    fn horizontal_gap_wins() {
        let at = Point::new(100, 100);
        assert_eq!(chase_direction(at, Point::new(50, 0)), Direction::Left);
        assert_eq!(chase_direction(at, Point::new(101, 500)), Direction::Right);
    }

    #[test]
    fn vertical_gap_when_aligned() {
        let at = Point::new(100, 100);
        assert_eq!(chase_direction(at, Point::new(100, 20)), Direction::Up);
        assert_eq!(chase_direction(at, Point::new(100, 180)), Direction::Down);
        assert_eq!(chase_direction(at, at), Direction::Down);
    }

    #[test]
    fn certain_retarget_turns_toward_player() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let mut ghost = ghost_at(96, 96, Direction::Right);
        let step = Chaser::new(1.0).step(&mut ghost, Point::new(0, 96), &[], &mut rng);
        assert!(step.retargeted);
        assert!(!step.blocked);
        assert_eq!(ghost.body.direction(), Direction::Left);
        assert_eq!(ghost.body.position(), Point::new(88, 96));
    }

    #[test]
    fn no_retarget_keeps_heading() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let mut ghost = ghost_at(96, 96, Direction::Down);
        for _ in 0..10 {
            let step = Chaser::new(0.0).step(&mut ghost, Point::new(0, 0), &[], &mut rng);
            assert!(!step.retargeted);
        }
        assert_eq!(ghost.body.direction(), Direction::Down);
        assert_eq!(ghost.body.position(), Point::new(96, 176));
    }

    #[test]
    fn wall_hit_reverts_and_redirects() {
        let walls = [Wall::new(Rect::new(128, 96, 32, 32))];
        for seed in 0..32 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let mut ghost = ghost_at(96, 96, Direction::Right);
            let step = Chaser::new(0.0).step(&mut ghost, Point::new(0, 0), &walls, &mut rng);
            assert!(step.blocked);
            assert_eq!(ghost.body.position(), Point::new(96, 96));
            assert!(Direction::ALL.contains(&ghost.body.direction()));
        }
    }

    #[test]
    fn redirect_overrides_retarget() {
        // Player is to the right, behind the wall: the chase turn walks into it.
        let walls = [Wall::new(Rect::new(128, 96, 32, 32))];
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let mut ghost = ghost_at(96, 96, Direction::Up);
        let step = Chaser::new(1.0).step(&mut ghost, Point::new(400, 96), &walls, &mut rng);
        assert!(step.retargeted);
        assert!(step.blocked);
        assert_eq!(ghost.body.position(), Point::new(96, 96));
    }
}
