pub mod document;
pub mod error;
pub mod index;
pub mod loader;
pub mod normalizer;
pub mod search;
pub mod snapshot;

pub use document::{DocId, Document, Field};
pub use error::{Error, Result};
pub use index::{BuiltIndex, DocumentStore, IndexBuilder, IndexStats, InvertedIndex, Posting, Postings};
pub use loader::{parse_record, DirectorySource, DocumentSource, MalformedPolicy};
pub use normalizer::{normalize, Normalizer, DEFAULT_STOP_WORDS};
pub use search::{SearchEngine, SearchResult};
pub use snapshot::EngineHandle;
