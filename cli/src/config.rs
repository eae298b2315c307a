use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use docsearch_core::{DirectorySource, Field, MalformedPolicy, Normalizer};
use std::path::PathBuf;

use crate::render::Format;

#[derive(Parser, Debug)]
#[command(name = "docsearch")]
#[command(about = "Keyword search over a directory of text documents", long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub corpus: CorpusArgs,
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Args, Debug, Clone)]
pub struct CorpusArgs {
    /// Directory holding the documents
    #[arg(long, env = "DOCSEARCH_DOCS", default_value = "Docs", global = true)]
    pub docs: PathBuf,
    /// Extension of the files to load
    #[arg(long, default_value = "txt", global = true)]
    pub extension: String,
    /// Fail on a malformed document instead of skipping it
    #[arg(long, default_value_t = false, global = true)]
    pub strict: bool,
    /// File with one stop word per line, replacing the built-in list
    #[arg(long, global = true)]
    pub stop_words: Option<PathBuf>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Interactive search menu (default)
    Shell,
    /// Run one query and print the ranked results
    Search {
        /// Index to search: title or content
        #[arg(long, short, default_value = "content", value_parser = parse_field)]
        field: Field,
        /// Print at most this many results
        #[arg(long, short = 'k')]
        limit: Option<usize>,
        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
        #[arg(required = true, num_args = 1..)]
        query: Vec<String>,
    },
    /// Print one document by id
    Show { id: String },
    /// Print index statistics
    Stats {
        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },
}

fn parse_field(s: &str) -> std::result::Result<Field, docsearch_core::Error> {
    s.parse()
}

impl CorpusArgs {
    pub fn source(&self) -> DirectorySource {
        let policy = if self.strict { MalformedPolicy::Fail } else { MalformedPolicy::Skip };
        DirectorySource::new(&self.docs)
            .with_extension(self.extension.clone())
            .with_policy(policy)
    }

    pub fn normalizer(&self) -> Result<Normalizer> {
        match &self.stop_words {
            None => Ok(Normalizer::default()),
            Some(path) => {
                let text = std::fs::read_to_string(path)
                    .with_context(|| format!("reading stop words from {}", path.display()))?;
                let words = parse_stop_words(&text);
                tracing::info!(path = %path.display(), count = words.len(), "loaded stop words");
                Ok(Normalizer::new(words))
            }
        }
    }
}

/// One word per line; blank lines and `#` comments are ignored.
pub fn parse_stop_words(text: &str) -> Vec<String> {
    text.lines()
        .map(|l| l.split('#').next().unwrap_or("").trim())
        .filter(|l| !l.is_empty())
        .map(str::to_string)
        .collect()
}
