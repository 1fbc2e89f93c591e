use serde::{Deserialize, Serialize};

use super::WordMap;

/// Working board used while placing words; `None` marks an empty cell.
pub type Board = Vec<Vec<Option<char>>>;

/// Finished grid. Each cell holds one symbol, which for fillers may be more
/// than one character.
pub type Grid = Vec<Vec<String>>;

/// Placement records keyed by word, in the order words were processed.
pub type Placements = WordMap<Placement>;

/// Symbol shown in the answer key for cells no word covers
pub const ANSWER_KEY_BLANK: &str = "·";

#[derive(Debug, Clone, Copy, Serialize, Deserialize, Hash, Eq, PartialEq)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Position `steps` cells away along `direction`.
    ///
    /// Callers must only step inside the grid; a diagonal-up walk from a row
    /// smaller than `steps` would underflow.
    pub fn step(self, direction: Direction, steps: usize) -> Self {
        let (row_step, col_step) = direction.delta();
        Self {
            row: (self.row as isize + row_step * steps as isize) as usize,
            col: (self.col as isize + col_step * steps as isize) as usize,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, Hash, Eq, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Horizontal,
    Vertical,
    DiagonalDown,
    DiagonalUp,
}

impl Direction {
    /// Every direction, in draw order.
    pub const ALL: [Direction; 4] = [
        Direction::Horizontal,
        Direction::Vertical,
        Direction::DiagonalDown,
        Direction::DiagonalUp,
    ];

    /// (row step, column step) between consecutive characters
    pub fn delta(self) -> (isize, isize) {
        match self {
            Direction::Horizontal => (0, 1),
            Direction::Vertical => (1, 0),
            Direction::DiagonalDown => (1, 1),
            Direction::DiagonalUp => (-1, 1),
        }
    }

    pub fn is_diagonal(self) -> bool {
        matches!(self, Direction::DiagonalDown | Direction::DiagonalUp)
    }
}

/// Where a word was put on the board.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Eq, PartialEq)]
pub struct Placement {
    pub start: Position,
    pub direction: Direction,
    /// False when the start was chosen but no character was written
    /// (legacy diagonals).
    pub written: bool,
}

/// A finished puzzle as produced by the grid builder.
#[derive(Debug, Clone)]
pub struct Puzzle {
    pub grid: Grid,
    pub placements: Placements,
    /// Words dropped after running out of placement attempts
    pub unplaced: Vec<String>,
    /// Cells holding a word character rather than a filler
    pub word_cells: Vec<Vec<bool>>,
}

impl Puzzle {
    pub fn size(&self) -> usize {
        self.grid.len()
    }

    /// The grid with every filler cell masked out.
    pub fn answer_key(&self) -> Grid {
        self.grid
            .iter()
            .zip(&self.word_cells)
            .map(|(row, mask)| {
                row.iter()
                    .zip(mask)
                    .map(|(cell, &is_word)| {
                        if is_word {
                            cell.clone()
                        } else {
                            ANSWER_KEY_BLANK.to_string()
                        }
                    })
                    .collect()
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_deltas() {
        assert_eq!(Direction::Horizontal.delta(), (0, 1));
        assert_eq!(Direction::Vertical.delta(), (1, 0));
        assert_eq!(Direction::DiagonalDown.delta(), (1, 1));
        assert_eq!(Direction::DiagonalUp.delta(), (-1, 1));
    }

    #[test]
    fn test_step_diagonal_up() {
        let start = Position::new(3, 0);
        assert_eq!(start.step(Direction::DiagonalUp, 2), Position::new(1, 2));
        assert_eq!(start.step(Direction::DiagonalDown, 0), start);
    }

    #[test]
    fn test_answer_key_masks_fillers() {
        let puzzle = Puzzle {
            grid: vec![
                vec!["A".to_string(), "B".to_string()],
                vec!["가".to_string(), "나".to_string()],
            ],
            placements: Placements::new(),
            unplaced: Vec::new(),
            word_cells: vec![vec![true, true], vec![false, false]],
        };

        let key = puzzle.answer_key();
        assert_eq!(key[0], vec!["A", "B"]);
        assert_eq!(key[1], vec![ANSWER_KEY_BLANK, ANSWER_KEY_BLANK]);
    }

    #[test]
    fn test_direction_serializes_snake_case() {
        let json = serde_json::to_string(&Direction::DiagonalUp).unwrap();
        assert_eq!(json, "\"diagonal_up\"");
    }
}
