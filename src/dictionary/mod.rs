use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// Korean dishes used when no word list is configured
const SAMPLE_ENTRIES: &[(&str, &str)] = &[
    ("김치", "Kimchi"),
    ("비빔밥", "Bibimbap"),
    ("불고기", "Bulgogi (grilled marinated beef)"),
    ("떡볶이", "Tteokbokki (spicy rice cakes)"),
    ("삼겹살", "Samgyeopsal (grilled pork belly)"),
    ("라면", "Ramen"),
    ("갈비", "Galbi (Korean BBQ ribs)"),
    ("잡채", "Japchae (stir-fried glass noodles)"),
    ("된장찌개", "Doenjang-jjigae (soybean paste stew)"),
    ("호떡", "Hotteok (sweet Korean pancake)"),
];

/// Puzzle words with their translations, in file order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dictionary {
    pub words: Vec<String>,
    pub translations: Vec<String>,
}

impl Dictionary {
    /// Load a word list from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read word list {}", path.display()))?;

        let dictionary = Self::parse(&content);
        tracing::info!(
            "Loaded {} words from {}",
            dictionary.words.len(),
            path.display()
        );

        Ok(dictionary)
    }

    /// Parse `word - translation` lines.
    ///
    /// A tab also separates the two fields. Blank lines and lines starting
    /// with `#` are skipped; a line with no separator gives an empty translation.
    pub fn parse(content: &str) -> Self {
        let mut words = Vec::new();
        let mut translations = Vec::new();

        for line in content.lines().map(str::trim) {
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let (word, translation) = split_entry(line);

            let word = word.trim();
            if word.is_empty() {
                continue;
            }

            words.push(word.to_string());
            translations.push(translation.trim().to_string());
        }

        Self { words, translations }
    }

    /// The built-in Korean food list
    pub fn sample() -> Self {
        Self {
            words: SAMPLE_ENTRIES.iter().map(|(w, _)| w.to_string()).collect(),
            translations: SAMPLE_ENTRIES.iter().map(|(_, t)| t.to_string()).collect(),
        }
    }

    /// Length in characters of the longest word
    pub fn longest_word(&self) -> usize {
        self.words
            .iter()
            .map(|word| word.chars().count())
            .max()
            .unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Split on whichever separator comes first, a tab or ` - `
fn split_entry(line: &str) -> (&str, &str) {
    let separator = match (line.find('\t'), line.find(" - ")) {
        (Some(tab), Some(dash)) if dash < tab => Some((dash, " - ".len())),
        (Some(tab), _) => Some((tab, 1)),
        (None, Some(dash)) => Some((dash, " - ".len())),
        (None, None) => None,
    };

    match separator {
        Some((at, width)) => (&line[..at], &line[at + width..]),
        None => (line, ""),
    }
}
