pub mod fillers;

pub use fillers::FillerPalette;
