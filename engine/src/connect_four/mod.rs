//! Connect-Four rules: columns that fill bottom-up, a board with a
//! configurable win length, and the turn-taking game on top of it.

mod board;
mod column;
mod game_state;
mod player;
mod settings;
mod types;
mod win_detector;

pub use board::{Board, DEFAULT_WIN_LENGTH};
pub use column::Column;
pub use game_state::{Game, GameState};
pub use player::{Player, build_roster};
pub use settings::{GameSettings, MAX_DIMENSION, MAX_PLAYERS};
pub use types::{Direction, Position, WinningLine};
pub use win_detector::{check_win, run_length};
