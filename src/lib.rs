//! Sliding-tile puzzle on 3×3 to 5×5 boards, played in the terminal.

pub mod animation;
pub mod app;
pub mod assets;
pub mod config;
pub mod error;
pub mod layout;
pub mod persist;
pub mod puzzle;
pub mod render;
pub mod session;
pub mod shuffle;
pub mod stats;

pub use error::{Result, TaquinError};
pub use puzzle::{Board, Direction, Pos, Slide};
pub use session::{GameState, Input, Key, Outcome, Session};
pub use stats::{BestScores, GameStats};
