//! Interactive menu over a live [`EngineHandle`].

use crate::render::{self, Format};
use docsearch_core::{DocumentSource, EngineHandle, Field};
use std::io::{self, BufRead, Write};

const CLEAR_SCREEN: &str = "\x1B[2J\x1B[1;1H";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Choice {
    Search(Field),
    Exit,
    Reload,
}

impl Choice {
    fn parse(s: &str) -> Option<Self> {
        match s {
            "1" => Some(Choice::Search(Field::Content)),
            "2" => Some(Choice::Search(Field::Title)),
            "3" => Some(Choice::Exit),
            "4" => Some(Choice::Reload),
            _ => None,
        }
    }
}

pub struct Shell<'a, R, W> {
    handle: &'a EngineHandle,
    source: &'a dyn DocumentSource,
    input: R,
    output: W,
    clear_screen: bool,
}

impl<'a, R: BufRead, W: Write> Shell<'a, R, W> {
    pub fn new(handle: &'a EngineHandle, source: &'a dyn DocumentSource, input: R, output: W) -> Self {
        Self { handle, source, input, output, clear_screen: false }
    }

    pub fn clear_screen(mut self, enabled: bool) -> Self {
        self.clear_screen = enabled;
        self
    }

    /// Loop until the user picks exit or input runs out.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            if self.clear_screen {
                write!(self.output, "{CLEAR_SCREEN}")?;
            }
            writeln!(self.output, "\n--- Document Search Engine ---")?;
            writeln!(self.output, "1. Search by Content")?;
            writeln!(self.output, "2. Search by Title")?;
            writeln!(self.output, "3. Exit")?;
            writeln!(self.output, "4. Reload Documents")?;
            let Some(choice) = self.prompt("Enter your choice (1/2/3/4): ")? else {
                return Ok(());
            };

            match Choice::parse(choice.trim()) {
                Some(Choice::Exit) => {
                    writeln!(self.output, "Exiting the search engine. Goodbye!")?;
                    return Ok(());
                }
                Some(Choice::Search(field)) => {
                    let Some(query) = self.prompt("Enter your search query: ")? else {
                        return Ok(());
                    };
                    self.search(query.trim(), field)?;
                }
                Some(Choice::Reload) => self.reload()?,
                None => {
                    writeln!(self.output, "Invalid choice. Please enter 1, 2, 3 or 4.")?;
                    continue;
                }
            }

            if self.prompt("Press Enter to continue...")?.is_none() {
                return Ok(());
            }
        }
    }

    fn search(&mut self, query: &str, field: Field) -> io::Result<()> {
        if query.is_empty() {
            return writeln!(self.output, "Query cannot be empty. Please enter a valid search term.");
        }
        let engine = self.handle.snapshot();
        let results = engine.search(query, field);
        render::results(&mut self.output, &results, Format::Text)
    }

    fn reload(&mut self) -> io::Result<()> {
        match self.handle.rebuild(self.source) {
            Ok(engine) => writeln!(self.output, "Reloaded {} documents.", engine.stats().documents),
            Err(e) => {
                tracing::error!(error = %e, "reload failed");
                writeln!(self.output, "Reload failed: {e}. Keeping the current index.")
            }
        }
    }

    /// Print `msg` and read one line; `None` at end of input.
    fn prompt(&mut self, msg: &str) -> io::Result<Option<String>> {
        write!(self.output, "{msg}")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }
}
