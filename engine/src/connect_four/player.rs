use crate::PlayerId;
use crate::defaults::{default_player_names, default_player_name};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub player_id: PlayerId,
    pub name: String,
    pub wins: u32,
}

impl Player {
    pub fn new(player_id: PlayerId, name: String) -> Self {
        Self {
            player_id,
            name,
            wins: 0,
        }
    }
}

/// Builds a roster with ids `1..=n` in the given order. An empty list yields
/// the default two-player roster and blank names get a numbered default.
pub fn build_roster(names: &[String]) -> Vec<Player> {
    let names = if names.is_empty() {
        default_player_names()
    } else {
        names.to_vec()
    };

    names
        .into_iter()
        .enumerate()
        .map(|(index, name)| {
            let name = if name.trim().is_empty() {
                default_player_name(index)
            } else {
                name
            };
            Player::new(PlayerId::from_index(index), name)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_names_give_default_roster() {
        let roster = build_roster(&[]);

        assert_eq!(
            roster,
            vec![
                Player::new(PlayerId::from_index(0), "Player 1".to_string()),
                Player::new(PlayerId::from_index(1), "Player 2".to_string()),
            ]
        );
    }

    #[test]
    fn test_custom_roster_keeps_order_and_numbers_ids() {
        let names = vec!["Ann".to_string(), "".to_string(), "Cy".to_string()];
        let roster = build_roster(&names);

        let ids: Vec<u32> = roster.iter().map(|p| p.player_id.get()).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(roster[1].name, "Player 2");
        assert_eq!(roster[2].name, "Cy");
        assert!(roster.iter().all(|p| p.wins == 0));
    }
}
