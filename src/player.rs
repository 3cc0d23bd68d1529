use crate::collision::hits_any_wall;
use crate::components::{Direction, Player, Wall};

impl Player {
    /// Overwrites the facing. Velocity follows immediately.
    pub fn set_direction(&mut self, direction: Direction) {
        self.body.set_direction(direction);
    }

    pub fn respawn(&mut self) {
        let (spawn, facing) = (self.spawn(), self.spawn_facing());
        self.body.place(spawn, facing);
    }
}

/// Moves the player one tick. A move that ends inside any wall is undone once,
/// leaving the facing untouched. Returns whether the player actually moved.
pub fn move_player(player: &mut Player, walls: &[Wall]) -> bool {
    let applied = player.body.advance();
    if hits_any_wall(&*player, walls) {
        player.body.revert(applied);
        return false;
    }
    true
}
