//! The nine-cell grid.

use std::fmt;
use std::ops::{Index, IndexMut};

use crate::error::EnvError;

/// Cells on the board.
pub const CELL_COUNT: usize = 9;

/// Rows, columns, then diagonals.
pub const WIN_ZONES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// One cell's state. The mark set is closed; observation values outside
/// it fail conversion instead of being coerced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mark {
    #[default]
    Blank,
    X,
    O,
}

impl Mark {
    /// Observation encoding.
    pub fn as_i8(self) -> i8 {
        match self {
            Mark::Blank => 0,
            Mark::X => 1,
            Mark::O => -1,
        }
    }

    /// Lowercase label used in percept symbols.
    pub fn label(self) -> &'static str {
        match self {
            Mark::Blank => "blank",
            Mark::X => "x",
            Mark::O => "o",
        }
    }

    fn glyph(self) -> char {
        match self {
            Mark::Blank => ' ',
            Mark::X => 'X',
            Mark::O => 'O',
        }
    }
}

impl TryFrom<i8> for Mark {
    type Error = EnvError;

    fn try_from(value: i8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Mark::Blank),
            1 => Ok(Mark::X),
            -1 => Ok(Mark::O),
            _ => Err(EnvError::InvalidMark { value }),
        }
    }
}

/// The raw grid. Placement legality is the environment's concern; the
/// board itself is a freely indexable value type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Board {
    cells: [Mark; CELL_COUNT],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    /// Positions of every blank cell, in board order.
    pub fn blanks(&self) -> Vec<usize> {
        (0..CELL_COUNT)
            .filter(|&position| self.cells[position] == Mark::Blank)
            .collect()
    }

    pub fn first_blank(&self) -> Option<usize> {
        self.cells.iter().position(|&mark| mark == Mark::Blank)
    }

    /// In bounds and currently blank.
    pub fn is_blank(&self, position: usize) -> bool {
        position < CELL_COUNT && self.cells[position] == Mark::Blank
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&mark| mark != Mark::Blank)
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|&mark| mark == Mark::Blank)
    }

    /// The mark holding a full win zone, if any.
    pub fn winner(&self) -> Option<Mark> {
        WIN_ZONES.iter().find_map(|zone| {
            let mark = self.cells[zone[0]];
            (mark != Mark::Blank && zone.iter().all(|&position| self.cells[position] == mark))
                .then_some(mark)
        })
    }

    pub fn has_winner(&self) -> bool {
        self.winner().is_some()
    }

    /// The board as the environment's observation array.
    pub fn as_observation(&self) -> [i8; CELL_COUNT] {
        self.cells.map(Mark::as_i8)
    }
}

impl Index<usize> for Board {
    type Output = Mark;

    fn index(&self, position: usize) -> &Mark {
        &self.cells[position]
    }
}

impl IndexMut<usize> for Board {
    fn index_mut(&mut self, position: usize) -> &mut Mark {
        &mut self.cells[position]
    }
}

impl TryFrom<[i8; CELL_COUNT]> for Board {
    type Error = EnvError;

    fn try_from(observation: [i8; CELL_COUNT]) -> Result<Self, Self::Error> {
        let mut cells = [Mark::Blank; CELL_COUNT];
        for (cell, value) in cells.iter_mut().zip(observation) {
            *cell = Mark::try_from(value)?;
        }
        Ok(Self { cells })
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let glyph = |position: usize| self.cells[position].glyph();
        write!(
            f,
            "\n{}│{}│{}\n─┼─┼─\n{}│{}│{}\n─┼─┼─\n{}│{}│{}\n",
            glyph(0),
            glyph(1),
            glyph(2),
            glyph(3),
            glyph(4),
            glyph(5),
            glyph(6),
            glyph(7),
            glyph(8)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_board_is_empty() {
        let board = Board::new();
        assert!(board.is_empty());
        assert!(!board.is_full());
        assert_eq!(board.blanks().len(), CELL_COUNT);
        assert_eq!(board.first_blank(), Some(0));
        assert_eq!(board.winner(), None);
    }

    #[test]
    fn marks_round_trip_through_observation_values() {
        for mark in [Mark::Blank, Mark::X, Mark::O] {
            assert_eq!(Mark::try_from(mark.as_i8()).unwrap(), mark);
        }
        assert!(matches!(
            Mark::try_from(2),
            Err(EnvError::InvalidMark { value: 2 })
        ));
    }

    #[test]
    fn blanks_track_placements() {
        let mut board = Board::new();
        board[4] = Mark::X;
        board[0] = Mark::O;
        assert_eq!(board.blanks(), vec![1, 2, 3, 5, 6, 7, 8]);
        assert_eq!(board.first_blank(), Some(1));
        assert!(!board.is_blank(4));
        assert!(!board.is_blank(CELL_COUNT));
        assert!(board.is_blank(1));
    }

    #[test]
    fn winner_is_detected_in_every_zone() {
        for zone in WIN_ZONES {
            let mut board = Board::new();
            for position in zone {
                board[position] = Mark::O;
            }
            assert_eq!(board.winner(), Some(Mark::O), "zone {zone:?}");
        }
    }

    #[test]
    fn a_full_mixed_board_has_no_winner() {
        let board = Board::try_from([1, -1, 1, 1, -1, -1, -1, 1, 1]).unwrap();
        assert!(board.is_full());
        assert_eq!(board.winner(), None);
    }

    #[test]
    fn invalid_observation_cells_fail_conversion() {
        let err = Board::try_from([0, 0, 0, 0, 3, 0, 0, 0, 0]).unwrap_err();
        assert!(matches!(err, EnvError::InvalidMark { value: 3 }));
    }

    #[test]
    fn display_renders_the_box_template() {
        let mut board = Board::new();
        board[0] = Mark::X;
        board[2] = Mark::O;
        board[4] = Mark::X;
        board[6] = Mark::O;
        board[8] = Mark::X;
        assert_eq!(
            board.to_string(),
            "\nX│ │O\n─┼─┼─\n │X│ \n─┼─┼─\nO│ │X\n"
        );
    }
}
