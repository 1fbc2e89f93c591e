mod config;
mod dictionary;
mod error;
mod export;
mod models;
mod puzzle;
mod utils;

use anyhow::{bail, Result};
use rand::{rngs::StdRng, SeedableRng};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::{
    config::Config,
    dictionary::Dictionary,
    export::{answer_key_path, export_to_path, PuzzleDocument},
    puzzle::{assemble, GridBuilder},
};

/// Heading written at the top of exported puzzles
pub const DOCUMENT_TITLE: &str = "Word Search";

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "word_search=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting word search generator...");

    // Load configuration
    let config = Config::from_env()?;
    tracing::info!("Configuration loaded");

    // Load words
    let dictionary = match &config.input.words_path {
        Some(path) => Dictionary::load(path)?,
        None => {
            tracing::info!("No word list configured, using the built-in sample");
            Dictionary::sample()
        }
    };

    if dictionary.is_empty() {
        bail!("The word list has no words");
    }
    tracing::info!(
        "Building a {}x{} puzzle from {} words (longest is {} characters)",
        config.puzzle.size,
        config.puzzle.size,
        dictionary.len(),
        dictionary.longest_word()
    );

    let mut rng = match config.puzzle.seed {
        Some(seed) => {
            tracing::info!("Using seed {}", seed);
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_os_rng(),
    };

    let puzzle = GridBuilder::new(config.puzzle.size, config.palette()?)
        .with_mode(config.puzzle.mode)
        .with_max_attempts(config.puzzle.max_attempts)
        .with_failure_policy(config.puzzle.on_failure)
        .build(&dictionary.words, &mut rng)?;

    // Words that never made it onto the board stay out of the glossary
    let (words, translations): (Vec<&str>, Vec<&str>) = dictionary
        .words
        .iter()
        .zip(&dictionary.translations)
        .filter(|(word, _)| !puzzle.unplaced.contains(*word))
        .map(|(word, translation)| (word.as_str(), translation.as_str()))
        .unzip();
    let glossary = assemble(&words, &translations);

    let writer = config.output_format().writer();
    tracing::debug!(
        "Exporting {}x{} grid as .{}",
        puzzle.size(),
        puzzle.size(),
        writer.extension()
    );
    let document = PuzzleDocument::new(DOCUMENT_TITLE, puzzle.grid.clone(), glossary);
    export_to_path(writer.as_ref(), &document, &config.output.path)?;

    if config.output.answer_key {
        let answers = document.with_grid(
            format!("{} (answers)", DOCUMENT_TITLE),
            puzzle.answer_key(),
        );
        export_to_path(
            writer.as_ref(),
            &answers,
            &answer_key_path(&config.output.path),
        )?;
    }

    Ok(())
}
