use serde::Deserialize;

use crate::{
    error::PuzzleError,
    models::{Board, Direction, Grid, Placement, Placements, Position, Puzzle},
    puzzle::{PlacementValidator, RandomSource},
    utils::FillerPalette,
};

pub const DEFAULT_GRID_SIZE: usize = 12;
pub const DEFAULT_MAX_ATTEMPTS: usize = 100;

/// How words are put on the board.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlacementMode {
    /// Every direction is written, collisions are retried.
    #[default]
    Strict,
    /// Reproduces the historical generator: one draw per word, no collision
    /// checks, and diagonal draws are clamped but never written.
    Legacy,
}

/// What to do with a word that could not be placed in strict mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FailurePolicy {
    /// Log a warning, leave the word out and keep going
    #[default]
    Skip,
    /// Fail the whole build
    Abort,
}

pub struct GridBuilder {
    size: usize,
    palette: FillerPalette,
    mode: PlacementMode,
    max_attempts: usize,
    on_failure: FailurePolicy,
}

impl GridBuilder {
    pub fn new(size: usize, palette: FillerPalette) -> Self {
        Self {
            size,
            palette,
            mode: PlacementMode::default(),
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            on_failure: FailurePolicy::default(),
        }
    }

    pub fn with_mode(mut self, mode: PlacementMode) -> Self {
        self.mode = mode;
        self
    }

    /// Attempts per word in strict mode; at least one attempt is always made.
    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts.max(1);
        self
    }

    pub fn with_failure_policy(mut self, on_failure: FailurePolicy) -> Self {
        self.on_failure = on_failure;
        self
    }

    /// Place `words` on a fresh board, in order, then pad the rest with fillers.
    ///
    /// Draws from `rng` in a fixed order: for each attempt a row, a column and
    /// a direction; then one filler per empty cell, row by row.
    pub fn build<S: AsRef<str>>(
        &self,
        words: &[S],
        rng: &mut impl RandomSource,
    ) -> Result<Puzzle, PuzzleError> {
        let words: Vec<&str> = words.iter().map(|word| word.as_ref()).collect();
        let letters = self.validate(&words)?;

        let mut board: Board = vec![vec![None; self.size]; self.size];
        let mut placements = Placements::new();
        let mut unplaced = Vec::new();

        for (&word, chars) in words.iter().zip(&letters) {
            let placement = match self.mode {
                PlacementMode::Legacy => Some(self.place_legacy(&mut board, chars, rng)),
                PlacementMode::Strict => self.place_strict(&mut board, chars, rng),
            };

            match placement {
                Some(placement) => {
                    tracing::debug!(
                        "Placed '{}' at ({}, {}) going {:?}{}",
                        word,
                        placement.start.row,
                        placement.start.col,
                        placement.direction,
                        if placement.written { "" } else { " (not written)" }
                    );
                    placements.insert(word, placement);
                }
                // A repeat that finds no second spot keeps its first placement
                None if placements.contains(word) => {
                    tracing::debug!(
                        "No second spot for repeated '{}', keeping its earlier placement",
                        word
                    );
                }
                None => match self.on_failure {
                    FailurePolicy::Skip => {
                        tracing::warn!(
                            "Could not place '{}' after {} attempts, leaving it out",
                            word,
                            self.max_attempts
                        );
                        unplaced.push(word.to_string());
                    }
                    FailurePolicy::Abort => {
                        return Err(PuzzleError::PlacementFailed {
                            word: word.to_string(),
                            attempts: self.max_attempts,
                        });
                    }
                },
            }
        }

        let word_cells = board
            .iter()
            .map(|row| row.iter().map(Option::is_some).collect())
            .collect();
        let grid = self.fill(board, rng);

        tracing::info!(
            "Built {}x{} puzzle: {} placed, {} left out",
            self.size,
            self.size,
            placements.len(),
            unplaced.len()
        );

        Ok(Puzzle {
            grid,
            placements,
            unplaced,
            word_cells,
        })
    }

    fn validate(&self, words: &[&str]) -> Result<Vec<Vec<char>>, PuzzleError> {
        if self.size == 0 {
            return Err(PuzzleError::InvalidDimension);
        }
        if words.is_empty() {
            return Err(PuzzleError::EmptyWordList);
        }
        if self.palette.is_empty() {
            return Err(PuzzleError::EmptyPalette);
        }

        words
            .iter()
            .enumerate()
            .map(|(index, word)| {
                let chars: Vec<char> = word.chars().collect();
                if chars.is_empty() {
                    return Err(PuzzleError::EmptyWord { index });
                }
                if chars.len() > self.size {
                    return Err(PuzzleError::WordTooLong {
                        word: word.to_string(),
                        len: chars.len(),
                        size: self.size,
                    });
                }
                Ok(chars)
            })
            .collect()
    }

    fn draw(&self, rng: &mut impl RandomSource) -> (Position, Direction) {
        let row = rng.index(self.size);
        let col = rng.index(self.size);
        let direction = Direction::ALL[rng.index(Direction::ALL.len())];
        (Position::new(row, col), direction)
    }

    fn place_strict(
        &self,
        board: &mut Board,
        word: &[char],
        rng: &mut impl RandomSource,
    ) -> Option<Placement> {
        for _ in 0..self.max_attempts {
            let (start, direction) = self.draw(rng);
            let start = clamp_start(self.size, word.len(), start, direction);

            if PlacementValidator::fits(board, word, start, direction) {
                write_word(board, word, start, direction);
                return Some(Placement {
                    start,
                    direction,
                    written: true,
                });
            }
        }
        None
    }

    fn place_legacy(
        &self,
        board: &mut Board,
        word: &[char],
        rng: &mut impl RandomSource,
    ) -> Placement {
        let (start, direction) = self.draw(rng);
        let start = legacy_clamp(self.size, word.len(), start, direction);

        let written = !direction.is_diagonal();
        if written {
            write_word(board, word, start, direction);
        }

        Placement {
            start,
            direction,
            written,
        }
    }

    fn fill(&self, board: Board, rng: &mut impl RandomSource) -> Grid {
        board
            .into_iter()
            .map(|row| {
                row.into_iter()
                    .map(|cell| match cell {
                        Some(letter) => letter.to_string(),
                        None => self.palette.choose(rng).to_string(),
                    })
                    .collect()
            })
            .collect()
    }
}

/// Pull a start back just far enough that a word of `len` fits along `direction`.
/// Requires `1 <= len <= size`.
pub fn clamp_start(size: usize, len: usize, start: Position, direction: Direction) -> Position {
    let max_start = size - len;
    match direction {
        Direction::Horizontal => Position::new(start.row, start.col.min(max_start)),
        Direction::Vertical => Position::new(start.row.min(max_start), start.col),
        Direction::DiagonalDown => {
            Position::new(start.row.min(max_start), start.col.min(max_start))
        }
        Direction::DiagonalUp => Position::new(start.row.max(len - 1), start.col.min(max_start)),
    }
}

/// Clamping rules of the historical generator. Diagonal overflows jump to a
/// fixed corner instead of the nearest valid start. Requires `len <= size`.
pub fn legacy_clamp(size: usize, len: usize, start: Position, direction: Direction) -> Position {
    let (size, len) = (size as isize, len as isize);
    let (mut row, mut col) = (start.row as isize, start.col as isize);

    match direction {
        Direction::Horizontal => {
            if col + len > size {
                col = size - len;
            }
        }
        Direction::Vertical => {
            if row + len > size {
                row = size - len;
            }
        }
        Direction::DiagonalDown => {
            if row + len > size || col + len > size {
                row = (size - len).max(0);
                col = (size - len).max(0);
            }
        }
        Direction::DiagonalUp => {
            if row - len < 0 || col + len > size {
                row = (size - 1).min(len - 1);
                col = (size - len).max(0);
            }
        }
    }

    Position::new(row as usize, col as usize)
}

fn write_word(board: &mut Board, word: &[char], start: Position, direction: Direction) {
    for (i, &letter) in word.iter().enumerate() {
        let pos = start.step(direction, i);
        board[pos.row][pos.col] = Some(letter);
    }
}
