use std::io::Write;

use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use super::{DocumentWriter, PuzzleDocument};
use crate::models::Grid;

pub struct JsonWriter;

#[derive(Debug, Serialize)]
struct JsonDocument<'a> {
    id: Uuid,
    title: &'a str,
    generated_at: DateTime<Utc>,
    size: usize,
    grid: &'a Grid,
    glossary: Vec<GlossaryEntry<'a>>,
}

#[derive(Debug, Serialize)]
struct GlossaryEntry<'a> {
    word: &'a str,
    translation: &'a str,
}

impl DocumentWriter for JsonWriter {
    fn extension(&self) -> &'static str {
        "json"
    }

    fn write(&self, doc: &PuzzleDocument, out: &mut dyn Write) -> Result<()> {
        let document = JsonDocument {
            id: doc.id,
            title: &doc.title,
            generated_at: doc.generated_at,
            size: doc.grid.len(),
            grid: &doc.grid,
            glossary: doc
                .glossary
                .iter()
                .map(|(word, translation)| GlossaryEntry {
                    word,
                    translation,
                })
                .collect(),
        };

        serde_json::to_writer_pretty(&mut *out, &document)?;
        writeln!(out)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::{json, Value};

    use super::*;
    use crate::export::test_support::sample_document;

    #[test]
    fn test_json_document() {
        let doc = sample_document();
        let mut out = Vec::new();
        JsonWriter.write(&doc, &mut out).unwrap();

        let value: Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["id"], json!(doc.id.to_string()));
        assert_eq!(value["size"], json!(2));
        assert_eq!(value["grid"], json!([["김", "치"], ["라", "면"]]));
        assert_eq!(
            value["glossary"],
            json!([
                { "word": "김치", "translation": "Kimchi" },
                { "word": "라면", "translation": "Ramen" }
            ])
        );
    }
}
