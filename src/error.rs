use thiserror::Error;

/// Errors raised while building a puzzle.
///
/// Everything here is a hard failure: the builder checks its inputs before
/// touching the grid, so an error never leaves a half-built puzzle behind.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PuzzleError {
    #[error("grid size must be at least 1")]
    InvalidDimension,

    #[error("no words were supplied")]
    EmptyWordList,

    #[error("word #{index} is empty")]
    EmptyWord { index: usize },

    #[error("'{word}' has {len} characters and does not fit in a {size}x{size} grid")]
    WordTooLong { word: String, len: usize, size: usize },

    #[error("filler palette has no symbols")]
    EmptyPalette,

    #[error("could not place '{word}' after {attempts} attempts")]
    PlacementFailed { word: String, attempts: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_too_long_message() {
        let err = PuzzleError::WordTooLong {
            word: "ABCD".to_string(),
            len: 4,
            size: 3,
        };
        assert_eq!(
            err.to_string(),
            "'ABCD' has 4 characters and does not fit in a 3x3 grid"
        );
    }
}
