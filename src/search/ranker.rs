//! Destructive extraction of the best documents

use log::warn;
use serde::Serialize;

use super::ScoredDocument;
use crate::{
    base::{Count, DocId},
    documents::DocumentStore,
    index::PostingList,
};

/// A result record: score, document and its URL
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankedDocument {
    pub score: Count,
    pub docid: DocId,
    pub url: String,
}

impl std::fmt::Display for RankedDocument {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "score: {} doc: {} url: {}", self.score, self.docid, self.url)
    }
}

/// Returns the best document with a positive score (ties go to the lowest
/// document ID)
pub fn best(scores: &PostingList) -> Option<ScoredDocument> {
    scores
        .iter()
        .filter(|p| p.count > 0)
        .map(|p| ScoredDocument {
            docid: p.docid,
            score: p.count,
        })
        .min()
}

/// Iterates over documents by decreasing score
///
/// Each step scans all the scores for the best one, then zeroes it so that
/// it is skipped afterwards. Documents the store cannot resolve are skipped.
pub struct Ranker<'a, S: DocumentStore + ?Sized> {
    scores: PostingList,
    store: &'a S,
    limit: Option<usize>,
    emitted: usize,
    matched: bool,
}

impl<'a, S: DocumentStore + ?Sized> Ranker<'a, S> {
    pub fn new(scores: PostingList, store: &'a S) -> Self {
        let matched = scores.iter().any(|p| p.count > 0);
        Self {
            scores,
            store,
            limit: None,
            emitted: 0,
            matched,
        }
    }

    /// True if some document had a positive score, whether or not the store
    /// can resolve it
    pub fn matched(&self) -> bool {
        self.matched
    }

    /// Stops after `limit` documents
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }
}

impl<'a, S: DocumentStore + ?Sized> Iterator for Ranker<'a, S> {
    type Item = RankedDocument;

    fn next(&mut self) -> Option<RankedDocument> {
        if self.limit.map_or(false, |limit| self.emitted >= limit) {
            return None;
        }

        while let Some(top) = best(&self.scores) {
            self.scores.set(top.docid, 0);
            match self.store.url(top.docid) {
                Some(url) => {
                    self.emitted += 1;
                    return Some(RankedDocument {
                        score: top.score,
                        docid: top.docid,
                        url,
                    });
                }
                None => warn!("Skipping document {}: it cannot be loaded", top.docid),
            }
        }
        None
    }
}
