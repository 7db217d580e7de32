use std::fs;

use helpers::index::TestCorpus;
use log::info;
use ntest::timeout;
use page_index::{
    base::{Len, MIN_WORD_LENGTH},
    builder::{build_index, BuilderOptions, IndexBuilder},
    documents::{Document, MemoryStore},
};
use rstest::rstest;

/// Initialize the logger
fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[rstest]
#[case(50, 100, 20., Some(1), 500)]
#[case(200, 300, 40., Some(2), 500)]
// Everything in one bucket
#[case(50, 50, 10., Some(3), 1)]
#[case(1000, 200, 50., None, 17)]
fn test_index_counts(
    #[case] vocabulary_size: usize,
    #[case] document_count: usize,
    #[case] lambda_words: f32,
    #[case] seed: Option<u64>,
    #[case] slots: usize,
) {
    init_logger();
    let corpus = TestCorpus::new(vocabulary_size, document_count, lambda_words, seed);
    let index = build_index(
        &corpus.pages,
        &BuilderOptions {
            slots,
            ..Default::default()
        },
    )
    .expect("Error while building the index");
    info!("Index with {} words", index.len());

    // Every expected count is in the index
    for (word, docs) in corpus.expected.iter() {
        let postings = index
            .get(word)
            .unwrap_or_else(|| panic!("Word {} is not indexed", word));
        for (docid, count) in docs.iter() {
            assert_eq!(
                postings.get(*docid),
                *count,
                "Count of {} in document {}",
                word,
                docid
            );
        }
        assert_eq!(postings.len(), docs.len());
    }

    // ... and nothing else
    assert_eq!(index.len(), corpus.expected.len());
    for (word, _) in index.iter() {
        assert!(word.chars().count() >= MIN_WORD_LENGTH);
        assert_eq!(word, word.to_lowercase());
    }
}

#[test]
fn test_short_words_are_ignored() {
    let store: MemoryStore = [Document::new("u", 0, "a an the I we you Ox OXEN")]
        .into_iter()
        .collect();
    let index = build_index(&store, &BuilderOptions::default()).unwrap();

    let mut words: Vec<&str> = index.iter().map(|(w, _)| w).collect();
    words.sort();
    assert_eq!(words, vec!["oxen", "the", "you"]);
}

#[test]
fn test_case_insensitive_counts() {
    let store: MemoryStore = [Document::new("u", 0, "Dog dog DOG dOg cat")]
        .into_iter()
        .collect();
    let index = build_index(&store, &BuilderOptions::default()).unwrap();
    assert_eq!(index.get("dog").unwrap().get(1), 4);
    assert_eq!(index.get("cat").unwrap().get(1), 1);
    assert!(index.get("Dog").is_none());
}

#[test]
fn test_scan_stops_at_missing_document() {
    init_logger();
    let corpus = TestCorpus::from_texts(&["alpha beta", "gamma delta", "epsilon zeta"]);
    fs::remove_file(corpus.path().join("2")).unwrap();

    let mut builder = IndexBuilder::new(&BuilderOptions::default()).unwrap();
    assert_eq!(builder.scan(&corpus.pages).unwrap(), 1);

    let index = builder.into_index();
    assert!(index.get("alpha").is_some());
    // Document 3 exists but comes after the gap
    assert!(index.get("epsilon").is_none());
}

#[test]
fn test_empty_page_directory() {
    let corpus = TestCorpus::from_texts(&[]);
    let index = build_index(&corpus.pages, &BuilderOptions::default()).unwrap();
    assert!(index.is_empty());
}

#[test]
fn test_zero_slots() {
    let store = MemoryStore::new();
    let options = BuilderOptions {
        slots: 0,
        ..Default::default()
    };
    assert!(build_index(&store, &options).is_err());
}

#[test]
#[timeout(10000)]
fn test_end_to_end_build() {
    init_logger();
    let corpus = TestCorpus::from_texts(&["the quick fox", "quick brown fox", "lazy dog"]);
    let index = build_index(&corpus.pages, &BuilderOptions::default()).unwrap();

    let quick = index.get("quick").unwrap();
    assert_eq!((quick.get(1), quick.get(2), quick.get(3)), (1, 1, 0));
    let fox = index.get("fox").unwrap();
    assert_eq!((fox.get(1), fox.get(2), fox.get(3)), (1, 1, 0));
    assert_eq!(index.get("the").unwrap().get(1), 1);
    assert_eq!(index.get("brown").unwrap().get(2), 1);
    assert_eq!(index.get("lazy").unwrap().get(3), 1);
    assert_eq!(index.get("dog").unwrap().get(3), 1);
    assert_eq!(index.len(), 6);
}
