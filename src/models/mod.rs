pub mod puzzle;
pub mod word_map;

pub use puzzle::{
    // Building blocks
    Direction, Placement, Position,
    // Boards and results
    Board, Grid, Placements, Puzzle,
};
pub use word_map::WordMap;

/// Word → translation lookup accompanying a puzzle.
pub type TranslationMap = WordMap<String>;
