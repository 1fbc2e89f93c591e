pub mod csv;
pub mod json;
pub mod markdown;

use std::{
    fs::File,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use uuid::Uuid;

use crate::models::{Grid, TranslationMap};

pub use self::csv::CsvWriter;
pub use self::json::JsonWriter;
pub use self::markdown::MarkdownWriter;

/// Everything that goes into an exported puzzle file.
#[derive(Debug, Clone)]
pub struct PuzzleDocument {
    pub id: Uuid,
    pub title: String,
    pub generated_at: DateTime<Utc>,
    pub grid: Grid,
    pub glossary: TranslationMap,
}

impl PuzzleDocument {
    pub fn new(title: impl Into<String>, grid: Grid, glossary: TranslationMap) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            generated_at: Utc::now(),
            grid,
            glossary,
        }
    }

    /// Same document with a different grid, e.g. the answer key
    pub fn with_grid(&self, title: impl Into<String>, grid: Grid) -> Self {
        Self {
            title: title.into(),
            grid,
            ..self.clone()
        }
    }
}

/// Serializes a puzzle document into one file format.
pub trait DocumentWriter {
    /// File extension without the dot
    fn extension(&self) -> &'static str;

    fn write(&self, doc: &PuzzleDocument, out: &mut dyn Write) -> Result<()>;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Markdown,
    Csv,
    Json,
}

impl OutputFormat {
    /// Guess the format from a file extension
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?.to_ascii_lowercase();
        match extension.as_str() {
            "md" | "markdown" => Some(Self::Markdown),
            "csv" => Some(Self::Csv),
            "json" => Some(Self::Json),
            _ => None,
        }
    }

    pub fn writer(self) -> Box<dyn DocumentWriter> {
        match self {
            Self::Markdown => Box::new(MarkdownWriter),
            Self::Csv => Box::new(CsvWriter),
            Self::Json => Box::new(JsonWriter),
        }
    }
}

/// Write `doc` to `path` in one go, replacing any existing file.
pub fn export_to_path(writer: &dyn DocumentWriter, doc: &PuzzleDocument, path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create {}", path.display()))?;
    let mut out = BufWriter::new(file);

    writer.write(doc, &mut out)?;
    out.flush()
        .with_context(|| format!("Failed to write {}", path.display()))?;

    tracing::info!("Saved '{}' to {}", doc.title, path.display());
    Ok(())
}

/// `puzzle.md` → `puzzle_answers.md`
pub fn answer_key_path(path: &Path) -> PathBuf {
    let stem = path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| "word_search".to_string());

    let file_name = match path.extension() {
        Some(extension) => format!("{}_answers.{}", stem, extension.to_string_lossy()),
        None => format!("{}_answers", stem),
    };
    path.with_file_name(file_name)
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_path() {
        assert_eq!(OutputFormat::from_path(Path::new("out.MD")), Some(OutputFormat::Markdown));
        assert_eq!(OutputFormat::from_path(Path::new("a/b.csv")), Some(OutputFormat::Csv));
        assert_eq!(OutputFormat::from_path(Path::new("b.json")), Some(OutputFormat::Json));
        assert_eq!(OutputFormat::from_path(Path::new("b.docx")), None);
        assert_eq!(OutputFormat::from_path(Path::new("noext")), None);
    }

    #[test]
    fn test_answer_key_path() {
        assert_eq!(
            answer_key_path(Path::new("out/word_search.md")),
            PathBuf::from("out/word_search_answers.md")
        );
        assert_eq!(answer_key_path(Path::new("puzzle")), PathBuf::from("puzzle_answers"));
    }

    #[test]
    fn test_export_to_path() {
        let doc = test_support::sample_document();
        let path = std::env::temp_dir().join(format!("word_search_{}.md", doc.id));

        export_to_path(&MarkdownWriter, &doc, &path).unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert!(written.contains("| 김 | 치 |"));
        assert!(written.contains("라면 - Ramen"));
    }

    #[test]
    fn test_export_to_missing_directory_fails() {
        let doc = test_support::sample_document();
        let err = export_to_path(&CsvWriter, &doc, Path::new("/nonexistent/dir/out.csv"))
            .unwrap_err();
        assert!(err.to_string().contains("Failed to create"));
    }
}
