use derivative::Derivative;
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, info};

use crate::{
    base::{DocId, Len, DEFAULT_SLOTS, MIN_WORD_LENGTH},
    documents::DocumentStore,
    error::Result,
    index::InvertedIndex,
};

const PROGRESS_TEMPLATE: &str = "{spinner} [{elapsed_precise}] {pos} documents {msg}";

#[derive(Derivative, Clone, Debug)]
#[derivative(Default)]
pub struct BuilderOptions {
    /// Number of slots of the word map (it never grows)
    #[derivative(Default(value = "DEFAULT_SLOTS"))]
    pub slots: usize,

    /// Words with less characters are not indexed
    #[derivative(Default(value = "MIN_WORD_LENGTH"))]
    pub min_word_length: usize,

    /// Display a spinner while scanning documents
    #[derivative(Default(value = "false"))]
    pub progress: bool,
}

/// Splits a text on whitespace and returns the normalized words that
/// should be indexed
pub fn words(text: &str, min_word_length: usize) -> impl Iterator<Item = String> + '_ {
    text.split_whitespace()
        .filter(move |token| token.chars().count() >= min_word_length)
        .map(|token| token.to_lowercase())
}

/// The builder consumes documents and fills an inverted index
pub struct IndexBuilder {
    index: InvertedIndex,
    options: BuilderOptions,
    documents: usize,
}

impl IndexBuilder {
    pub fn new(options: &BuilderOptions) -> Result<IndexBuilder> {
        Ok(IndexBuilder {
            index: InvertedIndex::new(options.slots)?,
            options: options.clone(),
            documents: 0,
        })
    }

    /// Adds the words of one document, and returns how many were indexed
    pub fn index_page(&mut self, docid: DocId, content: &str) -> Result<usize> {
        let mut added = 0;
        for word in words(content, self.options.min_word_length) {
            self.index.add(&word, docid)?;
            added += 1;
        }
        self.documents += 1;
        debug!("Document {}: {} words indexed", docid, added);
        Ok(added)
    }

    /// Indexes documents 1, 2, ... until the store has no document for the
    /// next ID, and returns the number of documents read
    ///
    /// The scan is not gap tolerant: if document N is missing, documents
    /// N+1 and later are never read.
    pub fn scan<S: DocumentStore + ?Sized>(&mut self, store: &S) -> Result<usize> {
        let progress = if self.options.progress {
            let progress = ProgressBar::new_spinner();
            progress.set_style(ProgressStyle::default_spinner().template(PROGRESS_TEMPLATE));
            progress
        } else {
            ProgressBar::hidden()
        };

        let mut count = 0;
        let mut docid: DocId = 1;
        while let Some(document) = store.load(docid) {
            self.index_page(docid, &document.content)?;
            progress.inc(1);
            count += 1;
            docid += 1;
        }
        progress.finish_and_clear();

        info!(
            "Indexed {} documents ({} distinct words), no document {}",
            count,
            self.index.len(),
            docid
        );
        Ok(count)
    }

    /// Number of documents indexed so far
    pub fn documents(&self) -> usize {
        self.documents
    }

    /// Returns the index built so far
    pub fn index(&self) -> &InvertedIndex {
        &self.index
    }

    pub fn into_index(self) -> InvertedIndex {
        self.index
    }
}

/// Builds an index from all the (consecutive) documents of a store
pub fn build_index<S: DocumentStore + ?Sized>(
    store: &S,
    options: &BuilderOptions,
) -> Result<InvertedIndex> {
    let mut builder = IndexBuilder::new(options)?;
    builder.scan(store)?;
    Ok(builder.into_index())
}
