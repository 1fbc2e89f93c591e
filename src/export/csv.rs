use std::io::Write;

use anyhow::Result;

use super::{DocumentWriter, PuzzleDocument};

/// One comma-separated line per grid row, a blank line, then
/// `word,translation` records.
pub struct CsvWriter;

fn field(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

impl DocumentWriter for CsvWriter {
    fn extension(&self) -> &'static str {
        "csv"
    }

    fn write(&self, doc: &PuzzleDocument, out: &mut dyn Write) -> Result<()> {
        for row in &doc.grid {
            let line: Vec<String> = row.iter().map(|cell| field(cell)).collect();
            writeln!(out, "{}", line.join(","))?;
        }

        writeln!(out)?;
        for (word, translation) in doc.glossary.iter() {
            writeln!(out, "{},{}", field(word), field(translation))?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{export::test_support::sample_document, puzzle::assemble};

    #[test]
    fn test_csv_layout() {
        let mut out = Vec::new();
        CsvWriter.write(&sample_document(), &mut out).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "김,치\n라,면\n\n김치,Kimchi\n라면,Ramen\n"
        );
    }

    #[test]
    fn test_fields_are_quoted() {
        let mut doc = sample_document();
        doc.glossary = assemble(&["갈비"], &["Galbi, \"Korean BBQ\" ribs"]);

        let mut out = Vec::new();
        CsvWriter.write(&doc, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.ends_with("갈비,\"Galbi, \"\"Korean BBQ\"\" ribs\"\n"));
    }
}
