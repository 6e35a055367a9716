use crate::{debug_log, log};
use super::board::Board;
use super::player::{Player, build_roster};
use super::settings::GameSettings;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameState {
    Active,
    Won,
    Draw,
}

/// One round of play over an owned board. The roster and win counters
/// survive `reset`.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    players: Vec<Player>,
    current_player_index: usize,
    state: GameState,
    winner_index: Option<usize>,
}

impl Game {
    pub fn new(settings: &GameSettings) -> Self {
        Self::with_players(
            &settings.player_names,
            settings.column_count,
            settings.row_count,
            settings.win_length,
        )
    }

    /// Geometry is not validated here: a zero dimension produces a game whose
    /// every move is rejected.
    pub fn with_players(
        player_names: &[String],
        column_count: usize,
        row_count: usize,
        win_length: usize,
    ) -> Self {
        Self {
            board: Board::new(column_count, row_count, win_length),
            players: build_roster(player_names),
            current_player_index: 0,
            state: GameState::Active,
            winner_index: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn total_players(&self) -> usize {
        self.players.len()
    }

    pub fn current_player(&self) -> &Player {
        &self.players[self.current_player_index]
    }

    pub fn game_state(&self) -> GameState {
        self.state
    }

    pub fn is_over(&self) -> bool {
        self.state != GameState::Active
    }

    pub fn winner(&self) -> Option<&Player> {
        self.winner_index.map(|index| &self.players[index])
    }

    /// Plays the current player's marker into the 1-based column. Returns
    /// `false` with nothing changed when the round is over or the board
    /// refuses the move.
    pub fn add_checker(&mut self, column_index: usize) -> bool {
        if self.state != GameState::Active {
            return false;
        }

        let player_id = self.current_player().player_id;
        if !self.board.add_checker(column_index, player_id.get()) {
            debug_log!("Rejected move in column {} for player {}", column_index, player_id);
            return false;
        }

        if self.board.is_won() {
            self.state = GameState::Won;
            self.winner_index = Some(self.current_player_index);
            let winner = &mut self.players[self.current_player_index];
            winner.wins += 1;
            log!("{} wins the round ({} total)", winner.name, winner.wins);
        } else if self.board.is_full() {
            self.state = GameState::Draw;
            log!("Round ended in a draw");
        } else {
            self.current_player_index = (self.current_player_index + 1) % self.players.len();
        }

        true
    }

    pub fn reset(&mut self) {
        self.board.reset();
        self.current_player_index = 0;
        self.state = GameState::Active;
        self.winner_index = None;
        debug_log!("New round with {} players", self.players.len());
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(&GameSettings::default())
    }
}
