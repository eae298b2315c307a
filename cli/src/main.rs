use anyhow::{bail, Context, Result};
use clap::Parser;
use docsearch::{render, Cli, Commands, Shell};
use docsearch_core::{EngineHandle, SearchEngine};
use std::io::{self, IsTerminal};
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).with_writer(io::stderr).init();
    let cli = Cli::parse();

    let normalizer = cli.corpus.normalizer()?;
    let source = cli.corpus.source();
    let engine = SearchEngine::from_source(&source, normalizer)
        .with_context(|| format!("loading documents from {}", source.root().display()))?;

    let stdout = io::stdout();
    match cli.command.unwrap_or(Commands::Shell) {
        Commands::Shell => {
            let handle = EngineHandle::new(engine);
            let interactive = stdout.is_terminal();
            Shell::new(&handle, &source, io::stdin().lock(), stdout.lock())
                .clear_screen(interactive)
                .run()?;
        }
        Commands::Search { field, limit, format, query } => {
            let query = query.join(" ");
            let results = match limit {
                Some(k) => engine.search_top(&query, field, k),
                None => engine.search(&query, field),
            };
            tracing::info!(%field, query = %query, hits = results.len(), "search complete");
            render::results(&mut stdout.lock(), &results, format)?;
        }
        Commands::Show { id } => match engine.document(&id) {
            Some(doc) => render::document(&mut stdout.lock(), doc)?,
            None => bail!("no document with id {id:?}"),
        },
        Commands::Stats { format } => render::stats(&mut stdout.lock(), &engine.stats(), format)?,
    }
    Ok(())
}
