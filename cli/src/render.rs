use clap::ValueEnum;
use docsearch_core::{Document, IndexStats, SearchResult};
use std::io::{self, Write};

pub const NO_MATCHES: &str = "No matching documents found. Try different keywords.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Text,
    Json,
}

pub fn results<W: Write>(out: &mut W, results: &[SearchResult], format: Format) -> io::Result<()> {
    match format {
        Format::Json => json(out, results),
        Format::Text if results.is_empty() => writeln!(out, "\n{NO_MATCHES}"),
        Format::Text => {
            writeln!(out, "\nSearch Results:")?;
            for r in results {
                writeln!(
                    out,
                    "\nDocument: {}\nTitle: {}\nSnippet: {}\nRelevance Score: {}",
                    r.id, r.title, r.snippet, r.score
                )?;
            }
            Ok(())
        }
    }
}

pub fn document<W: Write>(out: &mut W, doc: &Document) -> io::Result<()> {
    writeln!(out, "Document: {}\nTitle: {}\n\n{}", doc.id, doc.title, doc.body)
}

pub fn stats<W: Write>(out: &mut W, stats: &IndexStats, format: Format) -> io::Result<()> {
    match format {
        Format::Json => json(out, stats),
        Format::Text => writeln!(
            out,
            "documents: {}\ntitle terms: {}\ncontent terms: {}",
            stats.documents, stats.title_terms, stats.content_terms
        ),
    }
}

fn json<W: Write, T: serde::Serialize + ?Sized>(out: &mut W, value: &T) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)
}
