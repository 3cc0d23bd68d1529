use crossterm::cursor::{Hide, Show};
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::ExecutableCommand;
use log::{error, info};
use std::io::{self, Stdout};
use std::time::Instant;

use pacman_game::config::{read_tick_setting, Config};
use pacman_game::game::{Game, Phase};
use pacman_game::input::{command_for, Command};
use pacman_game::render::Renderer;
use pacman_game::sprites::SpriteSheet;

fn main() -> io::Result<()> {
    env_logger::init();

    let config = Config::default().with_tick_ms(read_tick_setting());
    // Load before touching the terminal so a bad map is reported plainly.
    let game = Game::new(&config).map_err(|err| {
        error!("cannot load map: {err}");
        io::Error::new(io::ErrorKind::InvalidData, err)
    })?;

    let mut stdout = io::stdout();
    terminal::enable_raw_mode()?;
    stdout.execute(EnterAlternateScreen)?;
    stdout.execute(Hide)?;

    let result = run(&mut stdout, &config, game);

    stdout.execute(Show)?;
    stdout.execute(LeaveAlternateScreen)?;
    terminal::disable_raw_mode()?;
    result
}

fn run(stdout: &mut Stdout, config: &Config, mut game: Game) -> io::Result<()> {
    let mut renderer = Renderer::new(config, SpriteSheet::classic());
    let mut next_tick = Instant::now() + config.tick;
    info!("running at {}ms per tick", config.tick.as_millis());
    renderer.draw(stdout, &game.snapshot(), config)?;

    loop {
        let wait = next_tick.saturating_duration_since(Instant::now());
        if event::poll(wait)? {
            match event::read()? {
                Event::Key(key) if key.kind != KeyEventKind::Release => match command_for(key.code) {
                    Some(Command::Quit) => return Ok(()),
                    Some(Command::Turn(direction)) => game.set_player_direction(direction),
                    Some(Command::Restart) if game.phase() != Phase::Playing => {
                        game = Game::new(config).map_err(|err| {
                            io::Error::new(io::ErrorKind::InvalidData, err)
                        })?;
                        renderer.invalidate();
                        renderer.draw(stdout, &game.snapshot(), config)?;
                    }
                    _ => {}
                },
                Event::Resize(_, _) => {
                    renderer.invalidate();
                    renderer.draw(stdout, &game.snapshot(), config)?;
                }
                _ => {}
            }
            continue;
        }

        // No catch-up: a late tick just moves everything by one step.
        next_tick = Instant::now() + config.tick;
        game.tick();
        renderer.draw(stdout, &game.snapshot(), config)?;
    }
}
