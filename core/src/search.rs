use crate::document::{DocId, Document, Field};
use crate::error::Result;
use crate::index::{self, BuiltIndex, IndexStats, InvertedIndex};
use crate::loader::DocumentSource;
use crate::normalizer::Normalizer;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Words of the raw body kept in a snippet.
pub const SNIPPET_WORDS: usize = 20;
/// Appended to every snippet.
pub const SNIPPET_MARKER: &str = ".........";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    pub id: DocId,
    pub title: String,
    pub snippet: String,
    pub score: u64,
}

/// Read-only search over a built corpus.
#[derive(Debug, Clone, Default)]
pub struct SearchEngine {
    normalizer: Normalizer,
    index: BuiltIndex,
}

impl SearchEngine {
    /// Build with the default stop words.
    pub fn build<I>(documents: I) -> Self
    where
        I: IntoIterator<Item = Document>,
    {
        Self::with_normalizer(Normalizer::default(), documents)
    }

    pub fn with_normalizer<I>(normalizer: Normalizer, documents: I) -> Self
    where
        I: IntoIterator<Item = Document>,
    {
        let index = index::build(&normalizer, documents);
        Self { normalizer, index }
    }

    pub fn from_source<S>(source: &S, normalizer: Normalizer) -> Result<Self>
    where
        S: DocumentSource + ?Sized,
    {
        let docs = source.documents()?;
        Ok(Self::with_normalizer(normalizer, docs))
    }

    /// Rank documents by the summed frequency of the query terms in `field`.
    ///
    /// Repeated query terms count once per repetition. Ties are broken by
    /// ascending document id.
    pub fn search(&self, query: &str, field: Field) -> Vec<SearchResult> {
        let terms = self.normalizer.normalize(query);
        if terms.is_empty() {
            return Vec::new();
        }

        let idx = self.index.index(field);
        let mut scored: Vec<(&str, u64)> = score(idx, &terms).into_iter().collect();
        scored.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        tracing::debug!(%field, query, terms = terms.len(), hits = scored.len(), "search");

        scored
            .into_iter()
            .filter_map(|(doc_id, score)| {
                let doc = self.index.store.get(doc_id)?;
                Some(SearchResult {
                    id: doc.id.clone(),
                    title: doc.title.clone(),
                    snippet: snippet(&doc.body),
                    score,
                })
            })
            .collect()
    }

    /// Like [`search`](Self::search) with the field given by name.
    pub fn search_field(&self, query: &str, field: &str) -> Result<Vec<SearchResult>> {
        let field: Field = field.parse()?;
        Ok(self.search(query, field))
    }

    /// Ranked results truncated to the best `limit`.
    pub fn search_top(&self, query: &str, field: Field, limit: usize) -> Vec<SearchResult> {
        let mut results = self.search(query, field);
        results.truncate(limit);
        results
    }

    pub fn document(&self, id: &str) -> Option<&Document> {
        self.index.store.get(id)
    }

    pub fn index(&self, field: Field) -> &InvertedIndex {
        self.index.index(field)
    }

    pub fn normalizer(&self) -> &Normalizer {
        &self.normalizer
    }

    pub fn stats(&self) -> IndexStats {
        self.index.stats()
    }
}

fn score<'a>(idx: &'a InvertedIndex, terms: &[String]) -> HashMap<&'a str, u64> {
    let mut scores: HashMap<&str, u64> = HashMap::new();
    for term in terms {
        for p in idx.iter_postings(term) {
            *scores.entry(p.doc_id).or_insert(0) += u64::from(p.frequency);
        }
    }
    scores
}

/// First [`SNIPPET_WORDS`] words of the raw body plus [`SNIPPET_MARKER`].
pub fn snippet(body: &str) -> String {
    let mut s = body
        .split_whitespace()
        .take(SNIPPET_WORDS)
        .collect::<Vec<_>>()
        .join(" ");
    s.push_str(SNIPPET_MARKER);
    s
}
