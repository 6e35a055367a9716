use crate::PlayerId;

/// Zero-based cell coordinate. Row 0 is the bottom slot of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub column: usize,
    pub row: usize,
}

impl Position {
    pub fn new(column: usize, row: usize) -> Self {
        Self { column, row }
    }

    pub fn step(&self, direction: Direction) -> Option<Position> {
        let (dx, dy) = direction.delta();
        Some(Position::new(
            self.column.checked_add_signed(dx)?,
            self.row.checked_add_signed(dy)?,
        ))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Horizontal,
    Vertical,
    DiagonalUp,
    DiagonalDown,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Horizontal,
        Direction::Vertical,
        Direction::DiagonalUp,
        Direction::DiagonalDown,
    ];

    /// (column, row) offset of one step.
    pub fn delta(self) -> (isize, isize) {
        match self {
            Direction::Horizontal => (1, 0),
            Direction::Vertical => (0, 1),
            Direction::DiagonalUp => (1, 1),
            Direction::DiagonalDown => (1, -1),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WinningLine {
    pub player_id: PlayerId,
    pub start: Position,
    pub end: Position,
    pub direction: Direction,
    pub length: usize,
}

impl WinningLine {
    pub fn new(player_id: PlayerId, start: Position, direction: Direction, length: usize) -> Self {
        let (dx, dy) = direction.delta();
        let steps = length.saturating_sub(1) as isize;
        let end = Position::new(
            start.column.saturating_add_signed(dx * steps),
            start.row.saturating_add_signed(dy * steps),
        );
        Self { player_id, start, end, direction, length }
    }

    pub fn cells(&self) -> impl Iterator<Item = Position> + '_ {
        std::iter::successors(Some(self.start), move |pos| pos.step(self.direction)).take(self.length)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_stops_at_lower_edges() {
        assert_eq!(Position::new(0, 0).step(Direction::DiagonalDown), None);
        assert_eq!(Position::new(2, 0).step(Direction::DiagonalDown), None);
        assert_eq!(Position::new(2, 3).step(Direction::DiagonalDown), Some(Position::new(3, 2)));
        assert_eq!(Position::new(2, 3).step(Direction::DiagonalUp), Some(Position::new(3, 4)));
    }

    #[test]
    fn test_winning_line_end_and_cells() {
        let player_id = PlayerId::from_index(0);
        let line = WinningLine::new(player_id, Position::new(0, 3), Direction::DiagonalDown, 4);

        assert_eq!(line.end, Position::new(3, 0));
        let cells: Vec<Position> = line.cells().collect();
        assert_eq!(
            cells,
            vec![
                Position::new(0, 3),
                Position::new(1, 2),
                Position::new(2, 1),
                Position::new(3, 0),
            ]
        );
    }
}
