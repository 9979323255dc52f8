//! Terminal frontend: acquires the terminal, translates crossterm events
//! into session input, and runs the frame loop.

use std::io::{self, BufWriter, Stdout};
use std::path::PathBuf;
use std::time::{Duration, Instant};

use crossterm::{
    cursor,
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    },
    execute, terminal,
};

use crate::assets::Assets;
use crate::error::{Result, TaquinError};
use crate::layout::Viewport;
use crate::persist::save_scores;
use crate::puzzle::Direction;
use crate::render::Renderer;
use crate::session::{Input, Key, Outcome, Session};

const FRAME: Duration = Duration::from_millis(16);

/// Raw mode, alternate screen and mouse capture for as long as it lives.
pub struct TerminalGuard {
    _private: (),
}

impl TerminalGuard {
    pub fn acquire() -> Result<Self> {
        terminal::enable_raw_mode().map_err(TaquinError::Terminal)?;
        // From here on, dropping the guard undoes whatever succeeded.
        let guard = Self { _private: () };
        execute!(
            io::stdout(),
            terminal::EnterAlternateScreen,
            EnableMouseCapture,
            cursor::Hide
        )
        .map_err(TaquinError::Terminal)?;
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = execute!(
            io::stdout(),
            cursor::Show,
            DisableMouseCapture,
            terminal::LeaveAlternateScreen
        );
        let _ = terminal::disable_raw_mode();
    }
}

/// Maps a terminal event to session input; `None` for events the game
/// does not consume.
pub fn translate(event: Event) -> Option<Input> {
    match event {
        Event::Key(KeyEvent {
            code,
            modifiers,
            kind,
            ..
        }) => {
            if kind == KeyEventKind::Release {
                return None;
            }
            if modifiers.contains(KeyModifiers::CONTROL) && code == KeyCode::Char('c') {
                return Some(Input::Quit);
            }
            let key = match code {
                KeyCode::Char(c) if c.is_ascii_digit() => Key::Digit(c as u8 - b'0'),
                KeyCode::Char(' ') => Key::Space,
                KeyCode::Char(c) => Key::Char(c.to_ascii_lowercase()),
                KeyCode::Esc => Key::Escape,
                KeyCode::Enter => Key::Enter,
                KeyCode::Up => Key::Arrow(Direction::Up),
                KeyCode::Down => Key::Arrow(Direction::Down),
                KeyCode::Left => Key::Arrow(Direction::Left),
                KeyCode::Right => Key::Arrow(Direction::Right),
                _ => return None,
            };
            Some(Input::Key(key))
        }
        Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            ..
        }) => Some(Input::Click { x: column, y: row }),
        Event::Resize(width, height) => Some(Input::Resize { width, height }),
        _ => None,
    }
}

pub struct App {
    session: Session,
    renderer: Renderer<BufWriter<Stdout>>,
    scores_path: PathBuf,
}

impl App {
    pub fn new(session: Session, assets: Assets, scores_path: PathBuf) -> Self {
        Self {
            session,
            renderer: Renderer::new(BufWriter::new(io::stdout()), assets),
            scores_path,
        }
    }

    /// Runs until the player quits. The terminal is restored on every exit
    /// path.
    pub fn run(&mut self) -> Result<()> {
        let _guard = TerminalGuard::acquire()?;
        let (width, height) = terminal::size().map_err(TaquinError::Terminal)?;
        let margin = self.session.viewport().margin;
        self.session.set_viewport(Viewport::terminal(width, height, margin));

        let mut last = Instant::now();
        let mut dirty = true;
        loop {
            if event::poll(FRAME).map_err(TaquinError::Terminal)? {
                loop {
                    let ev = event::read().map_err(TaquinError::Terminal)?;
                    if let Some(input) = translate(ev) {
                        match self.session.handle(input) {
                            Outcome::Quit => return Ok(()),
                            Outcome::Won => {
                                self.persist_scores();
                                dirty = true;
                            }
                            Outcome::Accepted => dirty = true,
                            Outcome::Rejected => {}
                        }
                    }
                    if !event::poll(Duration::ZERO).map_err(TaquinError::Terminal)? {
                        break;
                    }
                }
            }

            let now = Instant::now();
            let before = (self.session.stats(), self.session.animation().is_active());
            self.session.tick(now - last);
            last = now;
            if before.1 || self.session.stats() != before.0 {
                dirty = true;
            }

            if dirty {
                self.renderer
                    .render(&self.session)
                    .map_err(TaquinError::Terminal)?;
                dirty = false;
            }
        }
    }

    fn persist_scores(&self) {
        if let Err(e) = save_scores(&self.scores_path, self.session.best()) {
            log::warn!("could not save best scores: {e}");
        }
    }
}
