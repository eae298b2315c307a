use crate::document::{DocId, Document, Field};
use crate::normalizer::Normalizer;
use serde::Serialize;
use std::collections::btree_map::{self, BTreeMap};
use std::collections::HashMap;

/// Term frequency per document for one term. Ordered by doc id so that two
/// builds over the same corpus compare equal.
pub type Postings = BTreeMap<DocId, u32>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Posting<'a> {
    pub doc_id: &'a str,
    pub frequency: u32,
}

/// Term → postings for a single field.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct InvertedIndex {
    terms: BTreeMap<String, Postings>,
}

impl InvertedIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count each distinct term in `terms` and record it under `doc_id`.
    /// Postings from an earlier version of the document must be removed
    /// first with [`remove_terms`](Self::remove_terms).
    pub fn add_document(&mut self, doc_id: &str, terms: &[String]) {
        let mut tf_counts: HashMap<&str, u32> = HashMap::new();
        for term in terms {
            *tf_counts.entry(term.as_str()).or_insert(0) += 1;
        }
        for (term, tf) in tf_counts {
            self.terms
                .entry(term.to_string())
                .or_default()
                .insert(doc_id.to_string(), tf);
        }
    }

    /// Drop the postings `doc_id` has under `terms`; terms left with no
    /// postings go too. Only the listed terms are visited.
    pub fn remove_terms(&mut self, doc_id: &str, terms: &[String]) {
        for term in terms {
            let Some(postings) = self.terms.get_mut(term.as_str()) else {
                continue;
            };
            postings.remove(doc_id);
            if postings.is_empty() {
                self.terms.remove(term.as_str());
            }
        }
    }

    pub fn postings(&self, term: &str) -> Option<&Postings> {
        self.terms.get(term)
    }

    pub fn frequency(&self, term: &str, doc_id: &str) -> u32 {
        self.terms
            .get(term)
            .and_then(|p| p.get(doc_id))
            .copied()
            .unwrap_or(0)
    }

    pub fn iter_postings<'a>(&'a self, term: &str) -> impl Iterator<Item = Posting<'a>> + 'a {
        self.terms
            .get(term)
            .into_iter()
            .flat_map(|p| p.iter())
            .map(|(doc_id, &frequency)| Posting { doc_id, frequency })
    }

    pub fn terms(&self) -> btree_map::Keys<'_, String, Postings> {
        self.terms.keys()
    }

    pub fn num_terms(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

/// Every loaded document, keyed by id.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DocumentStore {
    docs: BTreeMap<DocId, Document>,
}

impl DocumentStore {
    pub fn get(&self, id: &str) -> Option<&Document> {
        self.docs.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.docs.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.docs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.docs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Document> {
        self.docs.values()
    }

    fn insert(&mut self, doc: Document) -> Option<Document> {
        self.docs.insert(doc.id.clone(), doc)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct IndexStats {
    pub documents: usize,
    pub title_terms: usize,
    pub content_terms: usize,
}

/// Output of [`IndexBuilder::finish`].
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BuiltIndex {
    pub store: DocumentStore,
    pub title: InvertedIndex,
    pub content: InvertedIndex,
}

impl BuiltIndex {
    pub fn index(&self, field: Field) -> &InvertedIndex {
        match field {
            Field::Title => &self.title,
            Field::Content => &self.content,
        }
    }

    pub fn stats(&self) -> IndexStats {
        IndexStats {
            documents: self.store.len(),
            title_terms: self.title.num_terms(),
            content_terms: self.content.num_terms(),
        }
    }
}

/// Accumulates documents into a title index, a content index and a store.
pub struct IndexBuilder<'n> {
    normalizer: &'n Normalizer,
    built: BuiltIndex,
}

impl<'n> IndexBuilder<'n> {
    pub fn new(normalizer: &'n Normalizer) -> Self {
        Self { normalizer, built: BuiltIndex::default() }
    }

    /// Index one document. A second document with the same id overwrites the
    /// first in the store and in both indices.
    pub fn add_document(&mut self, doc: Document) {
        if let Some(old) = self.built.store.get(&doc.id) {
            let old_title = self.normalizer.normalize(&old.title);
            let old_body = self.normalizer.normalize(&old.body);
            self.built.title.remove_terms(&doc.id, &old_title);
            self.built.content.remove_terms(&doc.id, &old_body);
            tracing::debug!(doc_id = %doc.id, "replacing previously loaded document");
        }
        let title_terms = self.normalizer.normalize(&doc.title);
        let body_terms = self.normalizer.normalize(&doc.body);
        self.built.title.add_document(&doc.id, &title_terms);
        self.built.content.add_document(&doc.id, &body_terms);
        self.built.store.insert(doc);
    }

    pub fn finish(self) -> BuiltIndex {
        self.built
    }
}

/// Index a whole corpus in one go.
pub fn build<I>(normalizer: &Normalizer, documents: I) -> BuiltIndex
where
    I: IntoIterator<Item = Document>,
{
    let mut builder = IndexBuilder::new(normalizer);
    for doc in documents {
        builder.add_document(doc);
    }
    let built = builder.finish();
    let stats = built.stats();
    tracing::info!(
        num_docs = stats.documents,
        title_terms = stats.title_terms,
        content_terms = stats.content_terms,
        "built inverted indices"
    );
    built
}

#[cfg(test)]
mod tests {
    use super::*;

    fn terms(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn counts_frequencies_per_document() {
        let mut idx = InvertedIndex::new();
        idx.add_document("a.txt", &terms(&["rust", "fast", "rust"]));
        idx.add_document("b.txt", &terms(&["rust"]));
        assert_eq!(idx.frequency("rust", "a.txt"), 2);
        assert_eq!(idx.frequency("rust", "b.txt"), 1);
        assert_eq!(idx.frequency("fast", "b.txt"), 0);
        assert!(idx.postings("fast").unwrap().get("b.txt").is_none());
        let docs: Vec<_> = idx.iter_postings("rust").map(|p| p.doc_id).collect();
        assert_eq!(docs, vec!["a.txt", "b.txt"]);
    }

    #[test]
    fn remove_terms_only_touches_one_document() {
        let mut idx = InvertedIndex::new();
        idx.add_document("a.txt", &terms(&["old", "shared"]));
        idx.add_document("b.txt", &terms(&["shared"]));
        idx.remove_terms("a.txt", &terms(&["old", "shared", "missing"]));
        assert!(idx.postings("old").is_none());
        assert_eq!(idx.frequency("shared", "a.txt"), 0);
        assert_eq!(idx.frequency("shared", "b.txt"), 1);
        assert_eq!(idx.num_terms(), 1);
    }

    #[test]
    fn builder_overwrite_and_new_id() {
        let n = Normalizer::default();
        let mut builder = IndexBuilder::new(&n);
        builder.add_document(Document::new("a.txt", "Old title", "old shared words"));
        builder.add_document(Document::new("b.txt", "Other", "shared words"));
        builder.add_document(Document::new("a.txt", "New title", "shared shared"));
        builder.add_document(Document::new("c.txt", "Fresh", "words"));
        let idx = builder.finish();

        assert_eq!(idx.store.len(), 3);
        assert!(idx.content.postings("old").is_none());
        assert!(idx.title.postings("old").is_none());
        assert_eq!(idx.title.frequency("new", "a.txt"), 1);
        assert_eq!(idx.content.frequency("shared", "a.txt"), 2);
        assert_eq!(idx.content.frequency("words", "a.txt"), 0);
        assert_eq!(idx.content.frequency("shared", "b.txt"), 1);
        assert_eq!(idx.content.frequency("words", "b.txt"), 1);
        assert_eq!(idx.content.frequency("words", "c.txt"), 1);
        assert_eq!(idx.title.frequency("fresh", "c.txt"), 1);
    }

    #[test]
    fn readding_through_index_api() {
        let mut idx = InvertedIndex::new();
        let old = terms(&["old", "shared"]);
        idx.add_document("a.txt", &old);
        idx.remove_terms("a.txt", &old);
        idx.add_document("a.txt", &terms(&["shared", "shared"]));
        assert!(idx.postings("old").is_none());
        assert_eq!(idx.frequency("shared", "a.txt"), 2);
        assert_eq!(idx.num_terms(), 1);
    }

    #[test]
    fn empty_field_keeps_document_in_store() {
        let n = Normalizer::default();
        let built = build(&n, vec![Document::new("x.txt", "The", "body words")]);
        assert!(built.title.is_empty());
        assert!(built.store.contains("x.txt"));
        assert_eq!(built.stats().content_terms, 2);
    }

    #[test]
    fn every_posting_points_into_store() {
        let n = Normalizer::default();
        let built = build(
            &n,
            vec![
                Document::new("1", "Rust book", "Ownership and borrowing"),
                Document::new("2", "Go book", "Goroutines"),
                Document::new("1", "Rust guide", "Traits"),
            ],
        );
        for field in [Field::Title, Field::Content] {
            let idx = built.index(field);
            for term in idx.terms() {
                for p in idx.iter_postings(term) {
                    assert!(built.store.contains(p.doc_id));
                    assert!(p.frequency > 0);
                }
            }
        }
        assert!(built.content.postings("ownership").is_none());
        assert_eq!(built.store.get("1").unwrap().title, "Rust guide");
    }
}
