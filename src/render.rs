use std::io::{self, Write};

use crossterm::cursor::MoveTo;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use crossterm::terminal::{self, Clear, ClearType};
use crossterm::QueueableCommand;
use unicode_width::UnicodeWidthStr;

use crate::components::{Point, Rect};
use crate::config::Config;
use crate::game::Snapshot;
use crate::sprites::{Sprite, SpriteKey, SpriteSheet};

const CELL_W: usize = 2;
const BLANK: Sprite = Sprite {
    text: "  ",
    color: Color::Reset,
};

/// Grid cell holding the centre of `rect`, if it lies on the board.
pub fn cell_of(rect: Rect, config: &Config) -> Option<(usize, usize)> {
    let Point { x, y } = rect.center();
    if x < 0 || y < 0 {
        return None;
    }
    let col = (x / config.tile_size) as usize;
    let row = (y / config.tile_size) as usize;
    (col < config.columns && row < config.rows).then_some((col, row))
}

/// Lays a snapshot out as one sprite per board cell, row-major. Later layers
/// win: floor, food, walls, ghosts, then the player.
pub fn compose(snapshot: &Snapshot<'_>, config: &Config, sheet: &mut SpriteSheet) -> Vec<Sprite> {
    let mut cells = vec![BLANK; config.columns * config.rows];
    let mut put = |rect: Rect, sprite: Sprite| {
        if let Some((col, row)) = cell_of(rect, config) {
            cells[row * config.columns + col] = sprite;
        }
    };

    for food in snapshot.foods {
        put(food.rect(), sheet.get(SpriteKey::Food));
    }
    for wall in snapshot.walls {
        put(wall.rect(), sheet.get(SpriteKey::Wall));
    }
    for ghost in snapshot.adversaries {
        put(ghost.body.rect(), sheet.get(SpriteKey::Ghost(ghost.color)));
    }
    let player = &snapshot.player.body;
    put(player.rect(), sheet.get(SpriteKey::Player(player.direction())));
    cells
}

pub fn hud_line(snapshot: &Snapshot<'_>) -> String {
    format!("Score: {}   Lives: {}", snapshot.score, snapshot.lives)
}

pub fn banner(snapshot: &Snapshot<'_>) -> Option<&'static str> {
    if snapshot.game_over {
        Some("GAME OVER")
    } else if snapshot.win {
        Some("YOU WIN!")
    } else {
        None
    }
}

pub struct Renderer {
    sheet: SpriteSheet,
    last: Vec<Sprite>,
    last_hud: String,
    needs_full: bool,
    origin_x: u16,
    origin_y: u16,
}

impl Renderer {
    pub fn new(config: &Config, sheet: SpriteSheet) -> Self {
        Self {
            sheet,
            last: vec![BLANK; config.columns * config.rows],
            last_hud: String::new(),
            needs_full: true,
            origin_x: 0,
            origin_y: 1,
        }
    }

    pub fn invalidate(&mut self) {
        self.needs_full = true;
    }

    pub fn draw<W: Write>(
        &mut self,
        out: &mut W,
        snapshot: &Snapshot<'_>,
        config: &Config,
    ) -> io::Result<()> {
        let needed_h = (config.rows + 3) as u16;
        let needed_w = (config.columns * CELL_W) as u16;

        out.queue(MoveTo(0, 0))?;

        let (term_w, term_h) = terminal::size()?;
        if term_w < needed_w || term_h < needed_h {
            out.queue(Clear(ClearType::All))?;
            let msg = format!(
                "Terminal too small. Need at least {}x{} (cols x rows). Current: {}x{}.",
                needed_w, needed_h, term_w, term_h
            );
            out.queue(Print(msg))?;
            out.flush()?;
            self.needs_full = true;
            return Ok(());
        }

        let origin_x = (term_w - needed_w) / 2;
        let origin_y = (term_h - needed_h) / 2 + 1;
        if origin_x != self.origin_x || origin_y != self.origin_y {
            self.origin_x = origin_x;
            self.origin_y = origin_y;
            self.needs_full = true;
        }
        if self.needs_full {
            out.queue(Clear(ClearType::All))?;
        }

        let hud = hud_line(snapshot);
        if self.needs_full || hud != self.last_hud {
            out.queue(MoveTo(self.origin_x, self.origin_y - 1))?;
            out.queue(SetForegroundColor(Color::White))?;
            out.queue(Clear(ClearType::CurrentLine))?;
            out.queue(Print(&hud))?;
            out.queue(ResetColor)?;
            self.last_hud = hud;
        }

        let cells = compose(snapshot, config, &mut self.sheet);
        for (idx, cell) in cells.iter().enumerate() {
            if self.needs_full || *cell != self.last[idx] {
                self.last[idx] = *cell;
                self.draw_cell(out, idx % config.columns, idx / config.columns, *cell)?;
            }
        }
        self.needs_full = false;

        let footer_y = self.origin_y + config.rows as u16;
        out.queue(MoveTo(self.origin_x, footer_y))?;
        out.queue(Clear(ClearType::CurrentLine))?;
        if let Some(text) = banner(snapshot) {
            let pad = (needed_w as usize).saturating_sub(text.width()) / 2;
            out.queue(MoveTo(self.origin_x + pad as u16, footer_y))?;
            out.queue(SetForegroundColor(Color::White))?;
            out.queue(Print(text))?;
            out.queue(MoveTo(self.origin_x, footer_y + 1))?;
            out.queue(Print("r: new game   q: quit"))?;
            out.queue(ResetColor)?;
        }

        out.flush()
    }

    fn draw_cell<W: Write>(&self, out: &mut W, x: usize, y: usize, cell: Sprite) -> io::Result<()> {
        let x_pos = self.origin_x + (x * CELL_W) as u16;
        let y_pos = self.origin_y + y as u16;
        out.queue(MoveTo(x_pos, y_pos))?;
        out.queue(SetForegroundColor(cell.color))?;
        out.queue(Print(cell.text))?;
        let w = UnicodeWidthStr::width(cell.text);
        if w < CELL_W {
            for _ in 0..(CELL_W - w) {
                out.queue(Print(' '))?;
            }
        }
        out.queue(ResetColor)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::level::Level;
    use crate::sprites::PLACEHOLDER;

    fn small_config() -> Config {
        Config {
            rows: 3,
            columns: 4,
            ..Config::default()
        }
    }

    #[test]
    fn movers_draw_in_the_cell_of_their_centre() {
        let config = Config::default();
        assert_eq!(cell_of(Rect::new(288, 480, 32, 32), &config), Some((9, 15)));
        assert_eq!(cell_of(Rect::new(296, 480, 32, 32), &config), Some((9, 15)));
        assert_eq!(cell_of(Rect::new(304, 480, 32, 32), &config), Some((10, 15)));
        assert_eq!(cell_of(Rect::new(-32, 0, 32, 32), &config), None);
    }

    #[test]
    fn board_layers_stack() {
        let config = small_config();
        let level = Level::parse(&["XXXX", "X PX", "XXXX"], &config).unwrap();
        let game = crate::game::Game::from_level(level, &config, rand::thread_rng());
        let mut sheet = SpriteSheet::classic();
        let cells = compose(&game.snapshot(), &config, &mut sheet);
        assert_eq!(cells[0], sheet.get(SpriteKey::Wall));
        assert_eq!(cells[5], sheet.get(SpriteKey::Food));
        assert_eq!(
            cells[6],
            sheet.get(SpriteKey::Player(crate::components::Direction::Right))
        );
    }

    #[test]
    fn missing_visuals_draw_placeholders() {
        let config = small_config();
        let level = Level::parse(&["XXXX", "X PX", "XXXX"], &config).unwrap();
        let game = crate::game::Game::from_level(level, &config, rand::thread_rng());
        let mut sheet = SpriteSheet::empty();
        let cells = compose(&game.snapshot(), &config, &mut sheet);
        assert_eq!(cells[0], PLACEHOLDER);
        assert_eq!(cells[6], PLACEHOLDER);
    }

    #[test]
    fn hud_and_banner_follow_state() {
        let config = small_config();
        let level = Level::parse(&["XXXX", "X PX", "XXXX"], &config).unwrap();
        let game = crate::game::Game::from_level(level, &config, rand::thread_rng());
        let mut snapshot = game.snapshot();
        assert_eq!(hud_line(&snapshot), "Score: 0   Lives: 3");
        assert_eq!(banner(&snapshot), None);
        snapshot.win = true;
        assert_eq!(banner(&snapshot), Some("YOU WIN!"));
        snapshot.game_over = true;
        assert_eq!(banner(&snapshot), Some("GAME OVER"));
    }
}
