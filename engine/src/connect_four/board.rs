use crate::PlayerId;
use crate::input::parse_positive_int;
use super::column::Column;
use super::types::WinningLine;
use super::win_detector::check_win;

pub const DEFAULT_WIN_LENGTH: usize = 4;

/// Grid of columns plus the cached result of the last win scan.
///
/// A board built from a zero dimension (or a zero win length) is kept as an
/// inert object: it reports `is_valid_board() == false`, owns no columns and
/// rejects every move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    columns: Vec<Column>,
    column_count: usize,
    row_count: usize,
    win_length: usize,
    is_valid: bool,
    winning_line: Option<WinningLine>,
}

impl Board {
    pub fn new(column_count: usize, row_count: usize, win_length: usize) -> Self {
        let is_valid = column_count > 0 && row_count > 0 && win_length > 0;
        let columns = if is_valid {
            (0..column_count).map(|_| Column::new(row_count)).collect()
        } else {
            Vec::new()
        };

        Self {
            columns,
            column_count,
            row_count,
            win_length,
            is_valid,
            winning_line: None,
        }
    }

    pub fn with_default_win_length(column_count: usize, row_count: usize) -> Self {
        Self::new(column_count, row_count, DEFAULT_WIN_LENGTH)
    }

    /// Builds a board from untrusted text. Any argument that is not a positive
    /// integer produces an invalid board.
    pub fn parse(column_count: &str, row_count: &str, win_length: &str) -> Self {
        let parsed = |raw: &str| parse_positive_int(raw).unwrap_or(0);
        Self::new(parsed(column_count), parsed(row_count), parsed(win_length))
    }

    pub fn is_valid_board(&self) -> bool {
        self.is_valid
    }

    pub fn column_count(&self) -> usize {
        self.column_count
    }

    pub fn row_count(&self) -> usize {
        self.row_count
    }

    pub fn win_length(&self) -> usize {
        self.win_length
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Column by its 1-based index.
    pub fn column(&self, column_index: usize) -> Option<&Column> {
        self.columns.get(column_index.checked_sub(1)?)
    }

    /// Zero-based cell lookup, row 0 at the bottom.
    pub fn get(&self, column: usize, row: usize) -> Option<PlayerId> {
        self.columns.get(column)?.get(row)
    }

    pub fn is_winning_possible(&self) -> bool {
        self.is_valid && (self.column_count >= self.win_length || self.row_count >= self.win_length)
    }

    pub fn is_diagonal_win_possible(&self) -> bool {
        self.is_valid && self.column_count >= self.win_length && self.row_count >= self.win_length
    }

    pub fn is_full(&self) -> bool {
        self.is_valid && self.columns.iter().all(Column::is_full)
    }

    pub fn is_won(&self) -> bool {
        self.winning_line.is_some()
    }

    pub fn winning_player_id(&self) -> Option<u32> {
        self.winning_line.map(|line| line.player_id.get())
    }

    pub fn winning_line(&self) -> Option<&WinningLine> {
        self.winning_line.as_ref()
    }

    /// Drops a marker into the column with the given 1-based index. A decided
    /// board (won or full) accepts nothing until `reset`.
    pub fn add_checker(&mut self, column_index: usize, player_id: u32) -> bool {
        if !self.is_valid || player_id == 0 || self.is_won() || self.is_full() {
            return false;
        }

        let Some(column) = column_index
            .checked_sub(1)
            .and_then(|index| self.columns.get_mut(index))
        else {
            return false;
        };

        if !column.add_checker(player_id) {
            return false;
        }

        self.winning_line = check_win(&self.columns, self.win_length);
        true
    }

    pub fn reset(&mut self) {
        for column in &mut self.columns {
            column.reset();
        }
        self.winning_line = None;
    }
}
