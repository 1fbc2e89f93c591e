// Puzzle construction

pub mod grid;
pub mod random;
pub mod translations;
pub mod validator;

pub use grid::{FailurePolicy, GridBuilder, PlacementMode};
pub use random::RandomSource;
pub use translations::assemble;
pub use validator::PlacementValidator;
