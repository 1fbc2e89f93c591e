use crate::models::{Board, Direction, Position};
#[cfg(test)]
use crate::models::Grid;

pub struct PlacementValidator;

impl PlacementValidator {
    /// Check that a word of `len` characters starting at `start` stays inside
    /// a `size`×`size` grid
    pub fn in_bounds(size: usize, len: usize, start: Position, direction: Direction) -> bool {
        if start.row >= size || start.col >= size {
            return false;
        }

        let (row_step, col_step) = direction.delta();
        let last = len.saturating_sub(1) as isize;
        let end_row = start.row as isize + row_step * last;
        let end_col = start.col as isize + col_step * last;

        (0..size as isize).contains(&end_row) && (0..size as isize).contains(&end_col)
    }

    /// Check that every target cell is empty or already holds the same character
    pub fn fits(board: &Board, word: &[char], start: Position, direction: Direction) -> bool {
        if !Self::in_bounds(board.len(), word.len(), start, direction) {
            return false;
        }

        word.iter().enumerate().all(|(i, &letter)| {
            let pos = start.step(direction, i);
            board[pos.row][pos.col].map_or(true, |existing| existing == letter)
        })
    }

    /// Read `len` cells from the grid along a placement
    #[cfg(test)]
    pub fn extract_word(
        grid: &Grid,
        start: Position,
        direction: Direction,
        len: usize,
    ) -> Option<String> {
        if !Self::in_bounds(grid.len(), len, start, direction) {
            return None;
        }

        Some(
            (0..len)
                .map(|i| {
                    let pos = start.step(direction, i);
                    grid[pos.row][pos.col].as_str()
                })
                .collect(),
        )
    }
}
