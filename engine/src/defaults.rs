use crate::connect_four::DEFAULT_WIN_LENGTH;

pub const DEFAULT_COLUMN_COUNT: usize = 7;
pub const DEFAULT_ROW_COUNT: usize = 6;
pub const DEFAULT_PLAYER_COUNT: usize = 2;

pub fn default_player_name(index: usize) -> String {
    format!("Player {}", index + 1)
}

pub fn default_player_names() -> Vec<String> {
    (0..DEFAULT_PLAYER_COUNT).map(default_player_name).collect()
}

pub fn default_win_length() -> usize {
    DEFAULT_WIN_LENGTH
}
