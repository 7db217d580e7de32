use std::collections::{BTreeSet, HashMap};
use std::path::Path;

use log::debug;
use rand::{rngs::StdRng, SeedableRng};
use temp_dir::TempDir;

use crate::documents::{create_document, create_vocabulary, TestDocument};
use page_index::{
    base::{Count, DocId, MIN_WORD_LENGTH},
    documents::{Document, PageDirectory},
    index::InvertedIndex,
};

/// A page directory filled with documents, together with the counts the
/// index should hold
pub struct TestCorpus {
    pub dir: TempDir,
    pub pages: PageDirectory,
    /// Words of each document (document `i + 1` is at position `i`)
    pub documents: Vec<Vec<String>>,
    /// Expected word -> docid -> count
    pub expected: HashMap<String, HashMap<DocId, Count>>,
}

impl TestCorpus {
    /// Random documents over a random vocabulary
    pub fn new(
        vocabulary_size: usize,
        document_count: usize,
        lambda_words: f32,
        seed: Option<u64>,
    ) -> Self {
        let mut rng = if let Some(seed) = seed {
            StdRng::seed_from_u64(seed)
        } else {
            StdRng::from_entropy()
        };

        let vocabulary = create_vocabulary(vocabulary_size, &mut rng);
        let documents: Vec<TestDocument> = (0..document_count)
            .map(|_| create_document(lambda_words, &vocabulary, &mut rng))
            .collect();
        let texts: Vec<String> = documents.iter().map(|d| d.text(&mut rng)).collect();

        Self::with_documents(
            documents.into_iter().map(|d| d.words).collect(),
            &texts,
        )
    }

    /// Documents given as texts; words are separated by whitespace
    pub fn from_texts(texts: &[&str]) -> Self {
        let documents = texts
            .iter()
            .map(|text| text.split_whitespace().map(|w| w.to_string()).collect())
            .collect();
        let texts: Vec<String> = texts.iter().map(|t| t.to_string()).collect();
        Self::with_documents(documents, &texts)
    }

    fn with_documents(documents: Vec<Vec<String>>, texts: &[String]) -> Self {
        let dir = TempDir::new().expect("Could not create temporary directory");
        let pages = PageDirectory::init(dir.path()).expect("Could not create page directory");

        let mut expected = HashMap::<String, HashMap<DocId, Count>>::new();
        for (ix, (words, text)) in documents.iter().zip(texts.iter()).enumerate() {
            let docid = (ix + 1) as DocId;
            let document = Document::new(Self::url(docid), 1, text);
            pages
                .save(docid, &document)
                .expect("Error while saving a page");

            for word in words.iter().filter(|w| w.chars().count() >= MIN_WORD_LENGTH) {
                *expected
                    .entry(word.to_lowercase())
                    .or_default()
                    .entry(docid)
                    .or_default() += 1;
            }
        }
        debug!(
            "Corpus with {} documents and {} distinct words in {}",
            documents.len(),
            expected.len(),
            dir.path().display()
        );

        Self {
            dir,
            pages,
            documents,
            expected,
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn url(docid: DocId) -> String {
        format!("http://example.com/page/{}", docid)
    }
}

/// All the (word, docid, count) triples with a positive count
pub fn triples(index: &InvertedIndex) -> BTreeSet<(String, DocId, Count)> {
    index
        .iter()
        .flat_map(|(word, postings)| {
            postings
                .iter()
                .filter(|p| p.count > 0)
                .map(move |p| (word.to_string(), p.docid, p.count))
        })
        .collect()
}

/// Test if two indices hold the same counts
pub fn check_same_index(expected: &InvertedIndex, observed: &InvertedIndex) {
    let a = triples(expected);
    let b = triples(observed);
    assert_eq!(
        a.len(),
        b.len(),
        "Indices differ in size: {} vs {}",
        a.len(),
        b.len()
    );
    for (x, y) in a.iter().zip(b.iter()) {
        assert_eq!(x, y, "Expected {:?}, got {:?}", x, y);
    }
}
