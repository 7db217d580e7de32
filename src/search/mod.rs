pub mod ranker;

use std::cmp::Ordering;

use log::debug;
use serde::Serialize;

use crate::{
    base::{Count, DocId},
    documents::DocumentStore,
    error::Result,
    index::{InvertedIndex, PostingList},
    query::Query,
};

pub use ranker::{RankedDocument, Ranker};

/// A document with its query score
#[derive(Clone, Copy, Debug, Serialize)]
pub struct ScoredDocument {
    pub docid: DocId,
    pub score: Count,
}

impl std::fmt::Display for ScoredDocument {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.docid, self.score)
    }
}

impl PartialEq for ScoredDocument {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for ScoredDocument {}

impl PartialOrd for ScoredDocument {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// Best documents first: higher score, then lower document ID
impl Ord for ScoredDocument {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .score
            .cmp(&self.score)
            .then_with(|| self.docid.cmp(&other.docid))
    }
}

/// Evaluates queries against an index
///
/// Scores are frequency weighted: a clause scores a document with the
/// minimum count of its words, and clause scores are summed.
pub struct QueryEngine<'a> {
    index: &'a InvertedIndex,
}

impl<'a> QueryEngine<'a> {
    pub fn new(index: &'a InvertedIndex) -> Self {
        Self { index }
    }

    /// Returns a copy of the postings of a word (empty if not indexed)
    pub fn word_score(&self, word: &str) -> PostingList {
        self.index.get(word).cloned().unwrap_or_default()
    }

    /// Scores a conjunction of words
    ///
    /// Every document containing one of the words gets an entry; its score
    /// is 0 unless it contains all of them.
    pub fn clause_score<S: AsRef<str>>(&self, words: &[S]) -> PostingList {
        let postings: Vec<PostingList> = words
            .iter()
            .map(|word| self.word_score(word.as_ref()))
            .collect();

        let mut scores = PostingList::new();
        for posting in postings.iter().flat_map(|p| p.iter()) {
            if scores.get(posting.docid) > 0 {
                continue;
            }
            let score = postings
                .iter()
                .map(|p| p.get(posting.docid))
                .min()
                .unwrap_or(0);
            scores.set(posting.docid, score);
        }
        scores
    }

    /// Scores a full query, summing the scores of its clauses
    pub fn evaluate(&self, query: &Query) -> PostingList {
        let mut scores = PostingList::new();
        for clause in query.clauses() {
            let clause_scores = self.clause_score(clause.as_slice());
            debug!("Clause {:?}: {}", clause, clause_scores);
            for posting in clause_scores.iter() {
                let score = scores.get(posting.docid).saturating_add(posting.count);
                scores.set(posting.docid, score);
            }
        }
        scores
    }
}

/// Ranked results of one query
#[derive(Debug, Serialize)]
pub struct SearchResults {
    pub query: Query,
    /// Normalized query, as displayed
    pub normalized: String,
    /// Some document had a positive score (it may not be listed if its page
    /// could not be resolved)
    pub matched: bool,
    pub documents: Vec<RankedDocument>,
}

/// Parses, evaluates and ranks a query line
pub fn search<S: DocumentStore + ?Sized>(
    index: &InvertedIndex,
    store: &S,
    line: &str,
    limit: Option<usize>,
) -> Result<SearchResults> {
    let query = Query::parse(line)?;
    let scores = QueryEngine::new(index).evaluate(&query);

    let mut ranker = Ranker::new(scores, store);
    if let Some(limit) = limit {
        ranker = ranker.with_limit(limit);
    }

    let matched = ranker.matched();
    Ok(SearchResults {
        normalized: query.to_string(),
        query,
        matched,
        documents: ranker.collect(),
    })
}
