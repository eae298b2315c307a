use docsearch_core::{Document, Error, Field, SearchEngine};

fn ai_corpus() -> Vec<Document> {
    vec![
        Document::new(
            "doc1.txt",
            "Basics of AI",
            "Artificial intelligence is a branch of computer science that builds systems able to learn.",
        ),
        Document::new("doc2.txt", "Cooking", "Artificial flavors are common in cooking and baking."),
        Document::new("doc3.txt", "AI and AI ethics", "Ethics of ai: ai systems should be fair, ai audits help."),
    ]
}

#[test]
fn artificial_intelligence_ranks_doc1_first() {
    let engine = SearchEngine::build(ai_corpus());
    let results = engine.search("artificial intelligence", Field::Content);
    assert_eq!(results[0].id, "doc1.txt");
    assert_eq!(results[0].score, 2);
    assert_eq!(results[1].id, "doc2.txt");
    assert_eq!(results[1].score, 1);
    assert_eq!(results.len(), 2);
}

#[test]
fn repeated_query_terms_add_up() {
    let engine = SearchEngine::build(ai_corpus());
    let freq = u64::from(engine.index(Field::Content).frequency("ai", "doc3.txt"));
    assert_eq!(freq, 3);

    let single = engine.search("ai", Field::Content);
    let double = engine.search("ai ai", Field::Content);
    assert_eq!(single[0].score, freq);
    assert_eq!(double[0].score, 2 * freq);
}

#[test]
fn one_shared_term_is_enough() {
    let engine = SearchEngine::build(ai_corpus());
    let results = engine.search("cooking intelligence", Field::Content);
    let ids: Vec<_> = results.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["doc1.txt", "doc2.txt"]);
}

#[test]
fn title_and_content_indices_are_separate() {
    let engine = SearchEngine::build(ai_corpus());
    let by_title = engine.search("cooking", Field::Title);
    assert_eq!(by_title.len(), 1);
    assert_eq!(by_title[0].id, "doc2.txt");

    let by_title = engine.search("ai", Field::Title);
    assert_eq!(by_title[0].id, "doc3.txt");
    assert_eq!(by_title[0].score, 2);
    assert_eq!(by_title[1].id, "doc1.txt");

    assert!(engine.search("flavors", Field::Title).is_empty());
}

#[test]
fn snippet_always_comes_from_body() {
    let engine = SearchEngine::build(ai_corpus());
    let results = engine.search("basics", Field::Title);
    assert_eq!(
        results[0].snippet,
        "Artificial intelligence is a branch of computer science that builds systems able to learn.........."
    );
    assert_eq!(results[0].title, "Basics of AI");
}

#[test]
fn empty_and_unmatched_queries_return_nothing() {
    let engine = SearchEngine::build(ai_corpus());
    assert!(engine.search("", Field::Content).is_empty());
    assert!(engine.search("the of and", Field::Content).is_empty());
    assert!(engine.search("quantum chromodynamics", Field::Content).is_empty());
    assert!(engine.search_field("", "content").unwrap().is_empty());
}

#[test]
fn empty_corpus_is_searchable() {
    let engine = SearchEngine::build(Vec::new());
    assert!(engine.search("anything", Field::Title).is_empty());
    assert_eq!(engine.stats().documents, 0);
}

#[test]
fn unknown_field_selector_is_rejected() {
    let engine = SearchEngine::build(ai_corpus());
    match engine.search_field("ai", "everything") {
        Err(Error::InvalidField(f)) => assert_eq!(f, "everything"),
        other => panic!("expected InvalidField, got {other:?}"),
    }
}

#[test]
fn builds_and_queries_are_deterministic() {
    let a = SearchEngine::build(ai_corpus());
    let b = SearchEngine::build(ai_corpus());
    assert_eq!(a.index(Field::Content), b.index(Field::Content));
    assert_eq!(a.index(Field::Title), b.index(Field::Title));

    for q in ["ai", "artificial intelligence", "ethics cooking ai"] {
        let first = a.search(q, Field::Content);
        assert_eq!(first, a.search(q, Field::Content));
        assert_eq!(first, b.search(q, Field::Content));
    }
}

#[test]
fn reloaded_id_overwrites_previous_document() {
    let mut docs = ai_corpus();
    docs.push(Document::new("doc2.txt", "Baking", "Bread needs flour."));
    let engine = SearchEngine::build(docs);

    assert_eq!(engine.stats().documents, 3);
    assert!(engine.search("artificial", Field::Content).iter().all(|r| r.id != "doc2.txt"));
    assert_eq!(engine.search("flour", Field::Content)[0].id, "doc2.txt");
    assert_eq!(engine.document("doc2.txt").unwrap().title, "Baking");
}

#[test]
fn results_serialize_with_plain_fields() {
    let engine = SearchEngine::build(ai_corpus());
    let results = engine.search("cooking", Field::Title);
    let json = serde_json::to_value(&results).unwrap();
    assert_eq!(json[0]["id"], "doc2.txt");
    assert_eq!(json[0]["score"], 1);
}
