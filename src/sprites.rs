use std::collections::{HashMap, HashSet};

use crossterm::style::Color;
use log::warn;

use crate::components::{Direction, GhostColor};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpriteKey {
    Wall,
    Food,
    Player(Direction),
    Ghost(GhostColor),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sprite {
    pub text: &'static str,
    pub color: Color,
}

pub const PLACEHOLDER: Sprite = Sprite {
    text: "??",
    color: Color::DarkGrey,
};

/// Glyphs for every visual the board uses. Lookups never fail: a missing entry
/// draws the placeholder and is reported once.
#[derive(Debug, Clone, Default)]
pub struct SpriteSheet {
    sprites: HashMap<SpriteKey, Sprite>,
    reported: HashSet<SpriteKey>,
}

impl SpriteSheet {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn classic() -> Self {
        let mut sheet = Self::empty();
        sheet.insert(SpriteKey::Wall, "██", Color::Blue);
        sheet.insert(SpriteKey::Food, "· ", Color::White);
        sheet.insert(SpriteKey::Player(Direction::Right), "ᗧ", Color::Yellow);
        sheet.insert(SpriteKey::Player(Direction::Left), "ᗤ", Color::Yellow);
        sheet.insert(SpriteKey::Player(Direction::Up), "ᗢ", Color::Yellow);
        sheet.insert(SpriteKey::Player(Direction::Down), "ᗣ", Color::Yellow);
        sheet.insert(SpriteKey::Ghost(GhostColor::Blue), "ᗩ", Color::Cyan);
        sheet.insert(SpriteKey::Ghost(GhostColor::Orange), "ᗩ", Color::DarkYellow);
        sheet.insert(SpriteKey::Ghost(GhostColor::Pink), "ᗩ", Color::Magenta);
        sheet.insert(SpriteKey::Ghost(GhostColor::Red), "ᗩ", Color::Red);
        sheet
    }

    pub fn insert(&mut self, key: SpriteKey, text: &'static str, color: Color) {
        self.sprites.insert(key, Sprite { text, color });
    }

    pub fn remove(&mut self, key: SpriteKey) {
        self.sprites.remove(&key);
    }

    pub fn get(&mut self, key: SpriteKey) -> Sprite {
        match self.sprites.get(&key) {
            Some(sprite) => *sprite,
            None => {
                if self.reported.insert(key) {
                    warn!("no sprite for {key:?}, drawing placeholder");
                }
                PLACEHOLDER
            }
        }
    }
}
