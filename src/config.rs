use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use serde::Deserialize;

use crate::{
    export::OutputFormat,
    puzzle::{
        grid::{DEFAULT_GRID_SIZE, DEFAULT_MAX_ATTEMPTS},
        FailurePolicy, PlacementMode,
    },
    utils::FillerPalette,
};

/// Optional settings file, any format the `config` crate understands
/// (`wordsearch.toml`, `wordsearch.json`, ...)
const CONFIG_FILE: &str = "wordsearch";
const ENV_PREFIX: &str = "WORDSEARCH";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub puzzle: PuzzleConfig,
    pub input: InputConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PuzzleConfig {
    pub size: usize,
    pub mode: PlacementMode,
    pub max_attempts: usize,
    pub on_failure: FailurePolicy,
    pub seed: Option<u64>,
    pub palette: String,
    /// Overrides `palette` when set
    pub custom_fillers: Option<Vec<String>>,
}

impl Default for PuzzleConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_GRID_SIZE,
            mode: PlacementMode::default(),
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            on_failure: FailurePolicy::default(),
            seed: None,
            palette: "korean".to_string(),
            custom_fillers: None,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// `word - translation` list; the built-in sample is used when unset
    pub words_path: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub path: PathBuf,
    pub format: Option<OutputFormat>,
    pub answer_key: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("word_search.md"),
            format: None,
            answer_key: false,
        }
    }
}

impl Config {
    /// Load `.env`, then the optional settings file, then `WORDSEARCH_*`
    /// variables (nested keys use `__`, e.g. `WORDSEARCH_PUZZLE__SIZE`).
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        Self::from_sources(
            ::config::File::with_name(CONFIG_FILE).required(false),
            Self::environment(),
        )
    }

    fn environment() -> ::config::Environment {
        ::config::Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true)
    }

    /// Environment values take precedence over the file
    fn from_sources<S>(file: S, environment: ::config::Environment) -> Result<Self>
    where
        S: ::config::Source + Send + Sync + 'static,
    {
        let settings = ::config::Config::builder()
            .add_source(file)
            .add_source(environment)
            .build()
            .context("Failed to read configuration")?;

        let config: Config = settings
            .try_deserialize()
            .context("Invalid configuration")?;
        config.validate()?;

        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.puzzle.size == 0 {
            bail!("puzzle.size must be at least 1");
        }
        if self.puzzle.max_attempts == 0 {
            bail!("puzzle.max_attempts must be at least 1");
        }
        Ok(())
    }

    /// Filler palette selected by `puzzle.custom_fillers` or `puzzle.palette`
    pub fn palette(&self) -> Result<FillerPalette> {
        if let Some(symbols) = &self.puzzle.custom_fillers {
            return FillerPalette::custom(symbols.iter().cloned())
                .context("puzzle.custom_fillers must contain at least one symbol");
        }

        FillerPalette::from_name(&self.puzzle.palette).with_context(|| {
            format!(
                "Unknown puzzle.palette '{}' (expected korean or latin)",
                self.puzzle.palette
            )
        })
    }

    /// Explicit `output.format`, else guessed from the output path, else Markdown
    pub fn output_format(&self) -> OutputFormat {
        self.output
            .format
            .or_else(|| OutputFormat::from_path(&self.output.path))
            .unwrap_or_default()
    }
}
