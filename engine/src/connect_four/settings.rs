use std::collections::HashSet;
use serde::{Deserialize, Serialize};

use crate::config::Validate;
use crate::defaults::{DEFAULT_COLUMN_COUNT, DEFAULT_ROW_COUNT, default_player_names, default_win_length};

pub const MAX_DIMENSION: usize = 64;
pub const MAX_PLAYERS: usize = 8;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameSettings {
    pub column_count: usize,
    pub row_count: usize,
    pub win_length: usize,
    pub player_names: Vec<String>,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            column_count: DEFAULT_COLUMN_COUNT,
            row_count: DEFAULT_ROW_COUNT,
            win_length: default_win_length(),
            player_names: default_player_names(),
        }
    }
}

impl Validate for GameSettings {
    fn validate(&self) -> Result<(), String> {
        if self.column_count < 1 || self.column_count > MAX_DIMENSION {
            return Err(format!(
                "Column count must be between 1 and {}, got {}",
                MAX_DIMENSION, self.column_count
            ));
        }
        if self.row_count < 1 || self.row_count > MAX_DIMENSION {
            return Err(format!(
                "Row count must be between 1 and {}, got {}",
                MAX_DIMENSION, self.row_count
            ));
        }
        if self.win_length < 1 {
            return Err("Win length must be at least 1".to_string());
        }
        let max_dimension = self.column_count.max(self.row_count);
        if self.win_length > max_dimension {
            return Err(format!(
                "Win length ({}) cannot exceed the larger board dimension ({})",
                self.win_length, max_dimension
            ));
        }
        if self.player_names.len() < 2 || self.player_names.len() > MAX_PLAYERS {
            return Err(format!(
                "Player count must be between 2 and {}, got {}",
                MAX_PLAYERS,
                self.player_names.len()
            ));
        }

        let mut seen = HashSet::new();
        for name in &self.player_names {
            if name.trim().is_empty() {
                return Err("Player names must not be empty".to_string());
            }
            if !seen.insert(name.as_str()) {
                return Err(format!("Duplicate player name: {}", name));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(column_count: usize, row_count: usize, win_length: usize) -> GameSettings {
        GameSettings {
            column_count,
            row_count,
            win_length,
            ..GameSettings::default()
        }
    }

    #[test]
    fn test_default_settings_are_valid() {
        let settings = GameSettings::default();

        assert_eq!(settings.column_count, 7);
        assert_eq!(settings.row_count, 6);
        assert_eq!(settings.win_length, 4);
        assert_eq!(settings.player_names, vec!["Player 1", "Player 2"]);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_rejects_zero_and_oversized_dimensions() {
        assert_eq!(
            settings(0, 6, 4).validate(),
            Err("Column count must be between 1 and 64, got 0".to_string())
        );
        assert_eq!(
            settings(7, 65, 4).validate(),
            Err("Row count must be between 1 and 64, got 65".to_string())
        );
        assert_eq!(
            settings(7, 6, 0).validate(),
            Err("Win length must be at least 1".to_string())
        );
    }

    #[test]
    fn test_rejects_geometry_without_possible_win() {
        assert_eq!(
            settings(3, 3, 4).validate(),
            Err("Win length (4) cannot exceed the larger board dimension (3)".to_string())
        );
        assert!(settings(7, 2, 4).validate().is_ok());
    }

    #[test]
    fn test_rejects_bad_rosters() {
        let with_names = |names: &[&str]| GameSettings {
            player_names: names.iter().map(|name| name.to_string()).collect(),
            ..GameSettings::default()
        };

        assert_eq!(
            with_names(&["Solo"]).validate(),
            Err("Player count must be between 2 and 8, got 1".to_string())
        );
        assert_eq!(
            with_names(&["Ann", "Ann"]).validate(),
            Err("Duplicate player name: Ann".to_string())
        );
        assert_eq!(
            with_names(&["Ann", "  "]).validate(),
            Err("Player names must not be empty".to_string())
        );
        assert!(with_names(&["Ann", "Bo", "Cy"]).validate().is_ok());
    }

    #[test]
    fn test_missing_yaml_fields_fall_back_to_defaults() {
        let settings: GameSettings = serde_yaml_ng::from_str("win_length: 5\n").unwrap();

        assert_eq!(settings.win_length, 5);
        assert_eq!(settings.column_count, 7);
        assert_eq!(settings.player_names.len(), 2);
    }
}
