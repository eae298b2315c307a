//! Plain-text document sources.
//!
//! A record is a `Title: ...` line followed by a `Content: ...` remainder.
//! Records with no line break between the two are malformed and never reach
//! the index builder.

use crate::document::Document;
use crate::error::{Error, Result};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

const TITLE_PREFIX: &str = "Title: ";
const CONTENT_PREFIX: &str = "Content: ";

/// What to do with a record that fails to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MalformedPolicy {
    /// Log a warning and leave the record out.
    #[default]
    Skip,
    /// Abort the whole load.
    Fail,
}

/// Anything that can hand the engine a corpus.
pub trait DocumentSource {
    fn documents(&self) -> Result<Vec<Document>>;
}

impl DocumentSource for Vec<Document> {
    fn documents(&self) -> Result<Vec<Document>> {
        Ok(self.clone())
    }
}

impl DocumentSource for [Document] {
    fn documents(&self) -> Result<Vec<Document>> {
        Ok(self.to_vec())
    }
}

/// Split a raw record into a [`Document`].
pub fn parse_record(id: &str, raw: &str) -> Result<Document> {
    let (first, rest) = raw.split_once('\n').ok_or_else(|| Error::MalformedDocument {
        id: id.to_string(),
        reason: "missing line break between title and content",
    })?;
    let first = first.strip_suffix('\r').unwrap_or(first);
    let title = first.strip_prefix(TITLE_PREFIX).unwrap_or(first);
    let body = rest.strip_prefix(CONTENT_PREFIX).unwrap_or(rest);
    Ok(Document::new(id, title, body))
}

/// Every file with a given extension directly inside one directory.
#[derive(Debug, Clone)]
pub struct DirectorySource {
    root: PathBuf,
    extension: String,
    policy: MalformedPolicy,
}

impl DirectorySource {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self { root: root.as_ref().to_path_buf(), extension: "txt".into(), policy: MalformedPolicy::default() }
    }

    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into().trim_start_matches('.').to_string();
        self
    }

    pub fn with_policy(mut self, policy: MalformedPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn files(&self) -> Result<Vec<PathBuf>> {
        if !self.root.is_dir() {
            return Err(Error::MissingDirectory(self.root.clone()));
        }
        let mut files = Vec::new();
        let walker = WalkDir::new(&self.root)
            .min_depth(1)
            .max_depth(1)
            .follow_links(true)
            .sort_by_file_name();
        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                // a dangling link to a file we would not load anyway
                Err(e) if !e.path().is_some_and(|p| self.matches(p)) => continue,
                Err(e) if self.policy == MalformedPolicy::Skip => {
                    tracing::warn!(error = %e, "skipping unreadable directory entry");
                    continue;
                }
                Err(e) => return Err(e.into()),
            };
            if entry.file_type().is_file() && self.matches(entry.path()) {
                files.push(entry.path().to_path_buf());
            }
        }
        Ok(files)
    }

    fn matches(&self, path: &Path) -> bool {
        path.extension().and_then(|s| s.to_str()) == Some(self.extension.as_str())
    }

    fn read(&self, path: &Path) -> Result<Document> {
        let id = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let bytes = fs::read(path).map_err(|e| Error::io(path, e))?;
        let raw = String::from_utf8(bytes).map_err(|_| Error::MalformedDocument {
            id: id.clone(),
            reason: "not valid UTF-8",
        })?;
        parse_record(&id, &raw)
    }
}

impl DocumentSource for DirectorySource {
    fn documents(&self) -> Result<Vec<Document>> {
        let mut docs = Vec::new();
        let mut skipped = 0usize;
        for path in self.files()? {
            match self.read(&path) {
                Ok(doc) => docs.push(doc),
                Err(e @ Error::MalformedDocument { .. }) if self.policy == MalformedPolicy::Skip => {
                    tracing::warn!(path = %path.display(), error = %e, "skipping malformed document");
                    skipped += 1;
                }
                Err(e) => return Err(e),
            }
        }
        tracing::info!(root = %self.root.display(), loaded = docs.len(), skipped, "loaded documents");
        Ok(docs)
    }
}
