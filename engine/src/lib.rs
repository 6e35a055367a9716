pub mod config;
pub mod connect_four;
pub mod identifiers;
pub mod input;
pub mod logger;
mod defaults;

pub use identifiers::*;
pub use connect_four::{Board, Column, Game, GameSettings, GameState, Player};
