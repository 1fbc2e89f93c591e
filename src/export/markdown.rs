use std::io::Write;

use anyhow::Result;

use super::{DocumentWriter, PuzzleDocument};

/// Grid as a Markdown table, followed by one `word - translation` paragraph
/// per glossary entry.
pub struct MarkdownWriter;

impl MarkdownWriter {
    fn table_row(cells: &[String]) -> String {
        let cells: Vec<String> = cells.iter().map(|cell| cell.replace('|', "\\|")).collect();
        format!("| {} |", cells.join(" | "))
    }
}

impl DocumentWriter for MarkdownWriter {
    fn extension(&self) -> &'static str {
        "md"
    }

    fn write(&self, doc: &PuzzleDocument, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "# {}", doc.title)?;
        writeln!(out)?;

        // Markdown tables need a header, so the first grid row doubles as one
        if let Some((first, rest)) = doc.grid.split_first() {
            writeln!(out, "{}", Self::table_row(first))?;
            writeln!(out, "|{}", " --- |".repeat(first.len()))?;
            for row in rest {
                writeln!(out, "{}", Self::table_row(row))?;
            }
            writeln!(out)?;
        }

        for (word, translation) in doc.glossary.iter() {
            writeln!(out, "{} - {}", word, translation)?;
            writeln!(out)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::test_support::sample_document;

    #[test]
    fn test_markdown_layout() {
        let mut out = Vec::new();
        MarkdownWriter.write(&sample_document(), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert_eq!(
            text,
            "# Word Search\n\n\
             | 김 | 치 |\n\
             | --- | --- |\n\
             | 라 | 면 |\n\n\
             김치 - Kimchi\n\n\
             라면 - Ramen\n\n"
        );
    }

    #[test]
    fn test_pipes_are_escaped() {
        let row = vec!["a|b".to_string(), "c".to_string()];
        assert_eq!(MarkdownWriter::table_row(&row), "| a\\|b | c |");
    }
}
