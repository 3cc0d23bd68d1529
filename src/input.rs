use crossterm::event::KeyCode;

use crate::components::Direction;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Turn(Direction),
    Restart,
    Quit,
}

/// Arrow keys and vi keys steer; everything unmapped is ignored.
pub fn command_for(code: KeyCode) -> Option<Command> {
    match code {
        KeyCode::Up | KeyCode::Char('k') => Some(Command::Turn(Direction::Up)),
        KeyCode::Down | KeyCode::Char('j') => Some(Command::Turn(Direction::Down)),
        KeyCode::Left | KeyCode::Char('h') => Some(Command::Turn(Direction::Left)),
        KeyCode::Right | KeyCode::Char('l') => Some(Command::Turn(Direction::Right)),
        KeyCode::Char('r') => Some(Command::Restart),
        KeyCode::Char('q') | KeyCode::Esc => Some(Command::Quit),
        _ => None,
    }
}
