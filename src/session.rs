//! The game session: board, counters, animation and screen state under a
//! single owner, driven by discrete input events.

use std::time::Duration;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::animation::Animation;
use crate::config::Settings;
use crate::error::Result;
use crate::layout::{Layout, Viewport};
use crate::puzzle::{Board, Direction, MIN_SIZE};
use crate::shuffle::shuffle;
use crate::stats::{BestScores, GameStats};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    Menu,
    Playing,
    /// Declared for parity; nothing in the input map enters it.
    Paused,
    Win,
    /// Declared for parity; nothing in the input map enters it.
    Settings,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Digit(u8),
    Char(char),
    Escape,
    Enter,
    Space,
    Arrow(Direction),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    Quit,
    Key(Key),
    /// Left button press at screen coordinates.
    Click { x: u16, y: u16 },
    Resize { width: u16, height: u16 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Ignored; nothing changed.
    Rejected,
    Accepted,
    /// Accepted and the board is now solved.
    Won,
    Quit,
}

impl Outcome {
    fn from_bool(accepted: bool) -> Self {
        if accepted {
            Outcome::Accepted
        } else {
            Outcome::Rejected
        }
    }
}

pub struct Session {
    state: GameState,
    board: Board,
    stats: GameStats,
    best: BestScores,
    animation: Animation,
    settings: Settings,
    rng: StdRng,
    viewport: Viewport,
    second_acc: Duration,
}

impl Session {
    pub fn new(settings: Settings, best: BestScores, rng: StdRng) -> Self {
        Self {
            state: GameState::Menu,
            board: Board::solved(MIN_SIZE),
            stats: GameStats::default(),
            best,
            animation: Animation::new(settings.animation_speed),
            viewport: Viewport::terminal(80, 24, settings.margin),
            settings,
            rng,
            second_acc: Duration::ZERO,
        }
    }

    /// Session with default settings, no records and a seeded RNG.
    pub fn seeded(seed: u64) -> Self {
        Self::new(
            Settings::default(),
            BestScores::default(),
            StdRng::seed_from_u64(seed),
        )
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn stats(&self) -> GameStats {
        self.stats
    }

    pub fn best(&self) -> &BestScores {
        &self.best
    }

    pub fn animation(&self) -> &Animation {
        &self.animation
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn layout(&self) -> Layout {
        Layout::new(self.viewport, self.board.size())
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    /// Solved board of `size` with fresh counters. The screen state is left
    /// alone.
    pub fn init(&mut self, size: usize) -> Result<()> {
        self.board = Board::new(size)?;
        self.stats.reset();
        self.second_acc = Duration::ZERO;
        self.animation.cancel();
        Ok(())
    }

    /// Scrambles the current board in place. Does not count as moves and
    /// drops any in-flight animation.
    pub fn shuffle(&mut self) {
        self.animation.cancel();
        shuffle(&mut self.board, self.settings.shuffle_moves, &mut self.rng);
    }

    /// Fresh shuffled game of `size`, entering Playing.
    pub fn start(&mut self, size: usize) -> Result<()> {
        self.init(size)?;
        self.shuffle();
        self.state = GameState::Playing;
        log::info!("new {size}x{size} game");
        Ok(())
    }

    pub fn is_valid_move(&self, x: isize, y: isize) -> bool {
        self.board.is_valid_move(x, y)
    }

    /// Moves the tile at `(x, y)` into the empty cell, counting the move and
    /// animating it. Returns false, changing nothing, if the move is illegal.
    pub fn make_move(&mut self, x: isize, y: isize) -> bool {
        match self.board.slide(x, y) {
            Some(slide) => {
                self.stats.moves += 1;
                self.animation.start_slide(slide);
                true
            }
            None => false,
        }
    }

    pub fn check_win(&self) -> bool {
        self.board.is_solved()
    }

    /// Applies a player move and, if it solves the board, enters Win and
    /// records the score.
    fn play(&mut self, x: isize, y: isize) -> Outcome {
        if !self.make_move(x, y) {
            log::debug!("rejected move at ({x}, {y})");
            return Outcome::Rejected;
        }
        if !self.check_win() {
            return Outcome::Accepted;
        }

        self.state = GameState::Win;
        let size = self.board.size();
        let improved = self.best.record(size, self.stats);
        log::info!(
            "solved {size}x{size} in {} moves, {}s (new best: {})",
            self.stats.moves,
            self.stats.seconds,
            improved.any()
        );
        Outcome::Won
    }

    /// Feeds one input event through the state machine.
    pub fn handle(&mut self, input: Input) -> Outcome {
        match input {
            Input::Quit => return Outcome::Quit,
            Input::Resize { width, height } => {
                self.viewport.width = width;
                self.viewport.height = height;
                return Outcome::Accepted;
            }
            _ => {}
        }

        match self.state {
            GameState::Menu => self.handle_menu(input),
            GameState::Playing => self.handle_playing(input),
            GameState::Win => self.handle_win(input),
            GameState::Paused | GameState::Settings => self.handle_inert(input),
        }
    }

    fn handle_menu(&mut self, input: Input) -> Outcome {
        match input {
            Input::Key(Key::Digit(d)) => Outcome::from_bool(self.start(d as usize).is_ok()),
            Input::Key(Key::Escape | Key::Char('q')) => Outcome::Quit,
            _ => Outcome::Rejected,
        }
    }

    fn handle_playing(&mut self, input: Input) -> Outcome {
        match input {
            Input::Click { x, y } => match self.layout().screen_to_board(x, y) {
                Some((bx, by)) => self.play(bx as isize, by as isize),
                None => Outcome::Rejected,
            },
            Input::Key(Key::Arrow(dir)) => {
                // The tile on the far side of the empty cell slides towards it.
                match self.board.neighbor(self.board.empty(), dir.opposite()) {
                    Some((x, y)) => self.play(x as isize, y as isize),
                    None => Outcome::Rejected,
                }
            }
            Input::Key(Key::Escape) => {
                self.state = GameState::Menu;
                Outcome::Accepted
            }
            Input::Key(Key::Char('r')) => Outcome::from_bool(self.start(self.board.size()).is_ok()),
            Input::Key(Key::Char('n')) => {
                self.shuffle();
                self.stats.moves = 0;
                Outcome::Accepted
            }
            _ => Outcome::Rejected,
        }
    }

    fn handle_win(&mut self, input: Input) -> Outcome {
        match input {
            Input::Key(Key::Space | Key::Enter) => {
                self.state = GameState::Menu;
                Outcome::Accepted
            }
            Input::Key(Key::Char('r')) => Outcome::from_bool(self.start(self.board.size()).is_ok()),
            _ => Outcome::Rejected,
        }
    }

    fn handle_inert(&mut self, input: Input) -> Outcome {
        match input {
            Input::Key(Key::Escape) => {
                self.state = GameState::Menu;
                Outcome::Accepted
            }
            _ => Outcome::Rejected,
        }
    }

    /// Advances one frame. Only Playing animates and keeps time.
    pub fn tick(&mut self, elapsed: Duration) {
        if self.state != GameState::Playing {
            return;
        }
        self.animation.advance();

        self.second_acc += elapsed;
        while self.second_acc >= Duration::from_secs(1) {
            self.stats.seconds += 1;
            self.second_acc -= Duration::from_secs(1);
        }
    }
}
