use crate::PlayerId;
use super::column::Column;
use super::types::{Direction, Position, WinningLine};

/// Full rescan of the grid. Every occupied cell is tried as the start of a run
/// in each of the four forward directions, so runs are found from their lowest
/// or leftmost end regardless of orientation.
pub fn check_win(columns: &[Column], win_length: usize) -> Option<WinningLine> {
    if win_length == 0 {
        return None;
    }

    for (x, column) in columns.iter().enumerate() {
        for y in 0..column.height() {
            let Some(player_id) = column.get(y) else {
                continue;
            };
            let start = Position::new(x, y);

            for direction in Direction::ALL {
                let length = run_length(columns, start, player_id, direction);
                if length >= win_length {
                    return Some(WinningLine::new(player_id, start, direction, length));
                }
            }
        }
    }

    None
}

/// Number of consecutive cells held by `player_id`, starting at `start` and
/// walking in `direction` only.
pub fn run_length(columns: &[Column], start: Position, player_id: PlayerId, direction: Direction) -> usize {
    let mut length = 0;
    let mut cursor = Some(start);

    while let Some(pos) = cursor {
        if cell(columns, pos) != Some(player_id) {
            break;
        }
        length += 1;
        cursor = pos.step(direction);
    }

    length
}

fn cell(columns: &[Column], pos: Position) -> Option<PlayerId> {
    columns.get(pos.column)?.get(pos.row)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(heights: usize, contents: &[&[u32]]) -> Vec<Column> {
        contents
            .iter()
            .map(|ids| {
                let mut column = Column::new(heights);
                for &id in ids.iter() {
                    column.add_checker(id);
                }
                column
            })
            .collect()
    }

    #[test]
    fn test_empty_grid_has_no_winner() {
        assert_eq!(check_win(&grid(6, &[&[], &[], &[]]), 4), None);
        assert_eq!(check_win(&[], 4), None);
    }

    #[test]
    fn test_horizontal_run() {
        let columns = grid(6, &[&[2], &[1], &[1], &[1], &[1]]);
        let line = check_win(&columns, 4).unwrap();

        assert_eq!(line.player_id.get(), 1);
        assert_eq!(line.direction, Direction::Horizontal);
        assert_eq!(line.start, Position::new(1, 0));
        assert_eq!(line.end, Position::new(4, 0));
    }

    #[test]
    fn test_vertical_run() {
        let columns = grid(6, &[&[2, 1, 1, 1, 1]]);
        let line = check_win(&columns, 4).unwrap();

        assert_eq!(line.direction, Direction::Vertical);
        assert_eq!(line.start, Position::new(0, 1));
        assert_eq!(line.end, Position::new(0, 4));
    }

    #[test]
    fn test_diagonal_up_run() {
        let columns = grid(6, &[&[1], &[2, 1], &[2, 2, 1], &[2, 2, 2, 1]]);
        let line = check_win(&columns, 4).unwrap();

        assert_eq!(line.player_id.get(), 1);
        assert_eq!(line.direction, Direction::DiagonalUp);
        assert_eq!(line.end, Position::new(3, 3));
    }

    #[test]
    fn test_diagonal_down_run() {
        let columns = grid(6, &[&[2, 2, 2, 1], &[2, 2, 1], &[2, 1], &[1]]);
        let line = check_win(&columns, 4).unwrap();

        assert_eq!(line.direction, Direction::DiagonalDown);
        assert_eq!(line.start, Position::new(0, 3));
        assert_eq!(line.end, Position::new(3, 0));
    }

    #[test]
    fn test_run_shorter_than_win_length_is_ignored() {
        let columns = grid(6, &[&[1], &[1], &[1], &[1]]);

        assert!(check_win(&columns, 4).is_some());
        assert_eq!(check_win(&columns, 5), None);
    }

    #[test]
    fn test_mixed_run_is_not_a_win() {
        let columns = grid(6, &[&[1], &[1], &[2], &[1], &[1]]);
        assert_eq!(check_win(&columns, 4), None);
    }

    #[test]
    fn test_run_length_counts_one_direction_only() {
        let columns = grid(6, &[&[1], &[1], &[1]]);
        let player_id = PlayerId::new(1).unwrap();

        assert_eq!(run_length(&columns, Position::new(0, 0), player_id, Direction::Horizontal), 3);
        assert_eq!(run_length(&columns, Position::new(1, 0), player_id, Direction::Horizontal), 2);
        assert_eq!(run_length(&columns, Position::new(0, 0), player_id, Direction::Vertical), 1);
        assert_eq!(run_length(&columns, Position::new(0, 1), player_id, Direction::Vertical), 0);
    }

    #[test]
    fn test_zero_win_length_never_wins() {
        let columns = grid(2, &[&[1, 1]]);
        assert_eq!(check_win(&columns, 0), None);
    }
}
