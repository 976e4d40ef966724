//! Terminal Pong client.
//!
//! Single-threaded frame loop: poll input, advance the simulation one
//! tick, draw, yield for the tick interval, repeat.

mod input;
mod renderer;

use std::io;
use std::thread;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::style::Color;
use crossterm::terminal;

use volley_core::{Action, Config, GameRng, Match, MatchState, Rect, Side};

use crate::input::map_key;
use crate::renderer::{Renderer, TermRenderer};

/// Cooperative frame scheduler with a configurable tick interval.
struct TickClock {
    interval: Duration,
}

impl TickClock {
    fn new(interval: Duration) -> Self {
        Self { interval }
    }

    fn pause(&self) {
        thread::sleep(self.interval);
    }
}

const TICK_INTERVAL: Duration = Duration::from_millis(10);

/// Court tuning in terminal-cell units, same boost/decel ratio as the
/// pixel-sized classic preset.
fn terminal_config() -> Config {
    Config {
        paddle_width: 1.0,
        paddle_height: 5.0,
        paddle_boost: 0.6,
        paddle_decel: 0.02,
        ball_width: 1.0,
        ball_height: 1.0,
        ball_speed: 0.4,
        ..Config::classic()
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let seed = SystemTime::now().duration_since(UNIX_EPOCH)?.as_nanos() as u64;
    log::info!("Starting match with seed {}", seed);

    let (cols, rows) = terminal::size()?;
    let mut game = Match::new(
        terminal_config(),
        cols as f32,
        rows as f32,
        GameRng::new(seed),
    )?;
    let mut renderer = TermRenderer::new()?;
    let clock = TickClock::new(TICK_INTERVAL);

    'game: loop {
        while event::poll(Duration::ZERO)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if let Some(action) = map_key(key.code) {
                        if action == Action::Quit {
                            break 'game;
                        }
                        game.push_action(action);
                    }
                }
                Event::Resize(new_cols, new_rows) => {
                    renderer.set_size(new_cols, new_rows);
                    game.resize(new_cols as f32, new_rows as f32);
                }
                _ => {}
            }
        }

        game.tick();
        draw(&mut renderer, &game)?;
        clock.pause();
    }

    log::info!("Quit requested, shutting down");
    Ok(())
}

fn draw(renderer: &mut TermRenderer, game: &Match) -> io::Result<()> {
    renderer.clear()?;

    let bounds = game.bounds();
    let midline = Rect::new(bounds.width / 2.0, 0.0, 1.0, bounds.height);
    renderer.draw_rect(&midline, Color::DarkGrey)?;

    renderer.draw_rect(&game.paddle(Side::Left).rect, Color::White)?;
    renderer.draw_rect(&game.paddle(Side::Right).rect, Color::White)?;
    renderer.draw_rect(&game.ball().rect(), Color::Red)?;

    if game.state() == MatchState::Ended {
        renderer.draw_status("ball out - press r to serve again, q to quit")?;
    }

    renderer.present()
}
