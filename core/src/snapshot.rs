use crate::error::Result;
use crate::loader::DocumentSource;
use crate::search::SearchEngine;
use parking_lot::RwLock;
use std::sync::Arc;

/// The live engine, swapped whole on rebuild.
///
/// Readers take an `Arc` and keep it for as long as they need; a rebuild
/// never touches an engine that someone may still be reading.
#[derive(Debug)]
pub struct EngineHandle {
    current: RwLock<Arc<SearchEngine>>,
}

impl EngineHandle {
    pub fn new(engine: SearchEngine) -> Self {
        Self { current: RwLock::new(Arc::new(engine)) }
    }

    pub fn snapshot(&self) -> Arc<SearchEngine> {
        self.current.read().clone()
    }

    /// Replace the live engine, returning the previous one.
    pub fn publish(&self, engine: SearchEngine) -> Arc<SearchEngine> {
        let next = Arc::new(engine);
        let mut guard = self.current.write();
        std::mem::replace(&mut *guard, next)
    }

    /// Build a fresh engine from `source` with the live normalizer and publish
    /// it. On error the live engine stays as it was.
    pub fn rebuild<S>(&self, source: &S) -> Result<Arc<SearchEngine>>
    where
        S: DocumentSource + ?Sized,
    {
        let normalizer = self.snapshot().normalizer().clone();
        let engine = SearchEngine::from_source(source, normalizer)?;
        let stats = engine.stats();
        let next = Arc::new(engine);
        *self.current.write() = Arc::clone(&next);
        tracing::info!(num_docs = stats.documents, "published rebuilt index");
        Ok(next)
    }
}
